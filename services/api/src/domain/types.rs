use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use kala_domain::banner::BannerType;
use kala_domain::pagination::{PageRequest, Sort};
use kala_domain::social::Platform;
use kala_domain::talent::{AvailabilityStatus, ExperienceLevel, TalentType};
use kala_domain::work::{WorkSampleType, WorkStatus};

// ── OTP ──────────────────────────────────────────────────────────────────────

/// Minutes an issued OTP stays valid.
pub const OTP_TTL_MINUTES: i64 = 10;

/// Failed verifications allowed before the challenge is discarded.
pub const OTP_MAX_ATTEMPTS: i32 = 3;

/// Inclusive range of generated codes; always six digits.
pub const OTP_CODE_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// SMS body carrying the code.
pub fn otp_message(code: &str) -> String {
    format!("Your OTP is {code}. Valid for {OTP_TTL_MINUTES} minutes. Do not share with anyone.")
}

/// Outstanding phone-verification challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpChallenge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phone: String,
    pub otp: String,
    pub expires_at: DateTime<Utc>,
    pub is_verified: bool,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl OtpChallenge {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Outcome of storing a verified phone against its challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneConfirmation {
    Confirmed,
    /// The challenge was consumed or spent its attempts first. Nothing written.
    ChallengeSpent,
    /// The user no longer exists. Nothing written; the challenge is kept.
    UserMissing,
}

// ── Users ────────────────────────────────────────────────────────────────────

/// Default `user_type` for self-registered accounts.
pub const DEFAULT_USER_TYPE: &str = "user";

/// Accounts of this type are hidden from the user listing.
pub const ADMIN_USER_TYPE: &str = "admin";

/// Account record. `password_hash` never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub is_premium: bool,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// A fresh, active, unverified account.
    pub fn new(email: String, password_hash: String, phone: Option<String>, user_type: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email,
            password_hash,
            phone,
            user_type,
            is_premium: false,
            premium_expires_at: None,
            is_active: true,
            email_verified: false,
            phone_verified: false,
            created_at: now,
            updated_at: now,
            last_login: None,
        }
    }
}

/// Partial update of a user. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_type: Option<String>,
    pub is_premium: Option<bool>,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub email_verified: Option<bool>,
    pub phone_verified: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.user_type.is_none()
            && self.is_premium.is_none()
            && self.premium_expires_at.is_none()
            && self.is_active.is_none()
            && self.email_verified.is_none()
            && self.phone_verified.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortBy {
    CreatedAt(Sort),
    Email(Sort),
}

impl Default for UserSortBy {
    fn default() -> Self {
        Self::CreatedAt(Sort::Desc)
    }
}

impl UserSortBy {
    /// Parse `created_at` / `email` plus an order; unknown fields fall back to `created_at`.
    pub fn from_parts(field: Option<&str>, order: Sort) -> Self {
        match field {
            Some("email") => Self::Email(order),
            _ => Self::CreatedAt(order),
        }
    }
}

/// Filters for the user listing. Admin accounts are always excluded.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub user_type: Option<String>,
    pub is_premium: Option<bool>,
    pub is_active: Option<bool>,
    pub email_verified: Option<bool>,
    pub sort_by: UserSortBy,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTypeCount {
    pub user_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub total: u64,
    pub active: u64,
    pub premium: u64,
    pub inactive: u64,
    pub by_type: Vec<UserTypeCount>,
}

// ── Profiles ─────────────────────────────────────────────────────────────────

pub const DEFAULT_COUNTRY: &str = "India";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub website_url: Option<String>,
    pub languages: Option<Value>,
    pub time_zone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Empty profile with regional defaults, created alongside a new account.
    pub fn empty(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            first_name: None,
            last_name: None,
            display_name: None,
            bio: None,
            profile_image_url: None,
            banner_image_url: None,
            location_city: None,
            location_state: None,
            location_country: Some(DEFAULT_COUNTRY.to_owned()),
            website_url: None,
            languages: None,
            time_zone: Some(DEFAULT_TIME_ZONE.to_owned()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub website_url: Option<String>,
    pub languages: Option<Value>,
    pub time_zone: Option<String>,
}

// ── Talent profiles ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TalentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub talent_type: Option<TalentType>,
    pub categories: Value,
    pub specializations: Option<Value>,
    pub experience_level: Option<ExperienceLevel>,
    pub years_of_experience: Option<i32>,
    pub rate_per_hour: Option<f64>,
    pub rate_per_project: Option<f64>,
    pub rate_per_post: Option<f64>,
    pub currency: String,
    pub availability_status: AvailabilityStatus,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Value>,
    pub certifications: Option<Value>,
    pub collaboration_preferences: Option<Value>,
    pub verify_badge: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TalentProfile {
    /// Blank listing with marketplace defaults. `verify_badge` starts false.
    pub fn empty(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            talent_type: None,
            categories: Value::Array(vec![]),
            specializations: None,
            experience_level: None,
            years_of_experience: None,
            rate_per_hour: None,
            rate_per_project: None,
            rate_per_post: None,
            currency: kala_domain::talent::DEFAULT_CURRENCY.to_owned(),
            availability_status: AvailabilityStatus::default(),
            portfolio_description: None,
            achievements: None,
            awards: None,
            certifications: None,
            collaboration_preferences: None,
            verify_badge: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TalentChanges {
    pub talent_type: Option<TalentType>,
    pub categories: Option<Value>,
    pub specializations: Option<Value>,
    pub experience_level: Option<ExperienceLevel>,
    pub years_of_experience: Option<i32>,
    pub rate_per_hour: Option<f64>,
    pub rate_per_project: Option<f64>,
    pub rate_per_post: Option<f64>,
    pub currency: Option<String>,
    pub availability_status: Option<AvailabilityStatus>,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Value>,
    pub certifications: Option<Value>,
    pub collaboration_preferences: Option<Value>,
}

/// Talent listing filters. A rate bound matches when either the hourly or
/// the per-project rate satisfies it.
#[derive(Debug, Clone, Default)]
pub struct TalentFilter {
    pub talent_type: Option<TalentType>,
    pub experience_level: Option<ExperienceLevel>,
    pub availability_status: Option<AvailabilityStatus>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
}

/// Talent profile together with its social accounts, primary first.
#[derive(Debug, Clone)]
pub struct TalentWithSocials {
    pub talent: TalentProfile,
    pub social_accounts: Vec<SocialAccount>,
}

// ── Social accounts ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SocialAccount {
    pub id: Uuid,
    pub talent_profile_id: Uuid,
    pub platform: Platform,
    pub handle: String,
    pub profile_url: String,
    pub followers_count: i64,
    pub engagement_rate: Option<f64>,
    pub is_verified: bool,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialAccountChanges {
    pub handle: Option<String>,
    pub profile_url: Option<String>,
    pub followers_count: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_primary: Option<bool>,
}

// ── Banners ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub link: Option<String>,
    pub position: Option<i32>,
    pub banner_type: BannerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct BannerChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub link: Option<String>,
    pub position: Option<i32>,
    pub banner_type: Option<BannerType>,
}

// ── Work samples ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSample {
    pub id: Uuid,
    pub talent_profile_id: Uuid,
    pub title: String,
    pub sample_type: WorkSampleType,
    pub url: String,
    pub status: WorkStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct WorkSampleChanges {
    pub title: Option<String>,
    pub sample_type: Option<WorkSampleType>,
    pub url: Option<String>,
    pub status: Option<WorkStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkSampleFilter {
    pub talent_profile_id: Option<Uuid>,
    pub sample_type: Option<WorkSampleType>,
    pub status: Option<WorkStatus>,
}

// ── Reviews ──────────────────────────────────────────────────────────────────

/// Average rating and number of reviews received by a user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: u64,
}

impl RatingSummary {
    pub fn from_ratings(ratings: &[i16]) -> Self {
        if ratings.is_empty() {
            return Self::default();
        }
        let sum: f64 = ratings.iter().map(|&r| f64::from(r)).sum();
        Self {
            average: sum / ratings.len() as f64,
            count: ratings.len() as u64,
        }
    }
}

/// Public talent page: account, profile, listing, socials and rating.
#[derive(Debug, Clone)]
pub struct TalentView {
    pub user: User,
    pub profile: Option<UserProfile>,
    pub talent: Option<TalentProfile>,
    pub social_accounts: Vec<SocialAccount>,
    pub rating: RatingSummary,
}
