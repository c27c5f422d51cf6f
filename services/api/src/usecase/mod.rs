pub mod auth;
pub mod banner;
pub mod otp;
pub mod profile;
pub mod social;
pub mod talent;
pub mod user;
pub mod work;
