mod helpers;

mod auth_test;
mod otp_test;
mod router_test;
mod social_test;
