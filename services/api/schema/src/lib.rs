//! sea-orm entities for the Kala API database.

pub mod banners;
pub mod mobile_otps;
pub mod reviews;
pub mod talent_profiles;
pub mod talent_social_accounts;
pub mod user_profiles;
pub mod users;
pub mod work_samples;
