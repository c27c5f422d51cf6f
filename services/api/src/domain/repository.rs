#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use kala_domain::banner::BannerType;
use kala_domain::social::Platform;
use kala_domain::talent::AvailabilityStatus;
use kala_domain::work::WorkStatus;

use crate::domain::types::{
    Banner, BannerChanges, OtpChallenge, PhoneConfirmation, ProfileChanges, RatingSummary,
    SocialAccount, SocialAccountChanges, TalentChanges, TalentFilter, TalentProfile, User,
    UserChanges, UserFilter, UserProfile, UserStats, WorkSample, WorkSampleChanges,
    WorkSampleFilter,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a user. Duplicate email → `EmailAlreadyExists`.
    async fn create(&self, user: &User) -> Result<(), ApiError>;

    /// Insert a user with its empty profile and talent profile in one transaction.
    async fn register(
        &self,
        user: &User,
        profile: &UserProfile,
        talent: &TalentProfile,
    ) -> Result<(), ApiError>;

    /// Apply `changes`; `None` when the user does not exist.
    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<Option<User>, ApiError>;

    /// Returns `false` when the user does not exist.
    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<bool, ApiError>;

    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError>;

    /// Delete the user and, by cascade, everything it owns. Returns `false` if not found.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;

    /// One page of users plus the total matching count.
    async fn list(&self, filter: &UserFilter) -> Result<(Vec<User>, u64), ApiError>;

    async fn stats(&self) -> Result<UserStats, ApiError>;
}

/// Repository for user profiles, keyed by owning user.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, ApiError>;

    /// Duplicate user → `ProfileAlreadyExists`; unknown user → `UserNotFound`.
    async fn create(&self, profile: &UserProfile) -> Result<(), ApiError>;

    async fn update(
        &self,
        user_id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<UserProfile>, ApiError>;

    async fn delete(&self, user_id: Uuid) -> Result<bool, ApiError>;

    /// Case-insensitive substring match on city, state, country or display name.
    async fn search(&self, query: &str) -> Result<Vec<UserProfile>, ApiError>;
}

/// Repository for talent profiles, keyed by owning user.
pub trait TalentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TalentProfile>, ApiError>;
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<TalentProfile>, ApiError>;

    /// Duplicate user → `TalentProfileAlreadyExists`; unknown user → `UserNotFound`.
    async fn create(&self, talent: &TalentProfile) -> Result<(), ApiError>;

    async fn update(
        &self,
        user_id: Uuid,
        changes: &TalentChanges,
    ) -> Result<Option<TalentProfile>, ApiError>;

    async fn set_availability(
        &self,
        user_id: Uuid,
        status: AvailabilityStatus,
    ) -> Result<Option<TalentProfile>, ApiError>;

    async fn delete(&self, user_id: Uuid) -> Result<bool, ApiError>;

    async fn list(&self, filter: &TalentFilter) -> Result<Vec<TalentProfile>, ApiError>;
}

/// Repository for talent social accounts.
///
/// Every write that can set `is_primary` clears the flag on the other
/// accounts of the same talent profile first, inside the same transaction.
pub trait SocialAccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SocialAccount>, ApiError>;

    /// Accounts of a talent profile, primary first then by followers descending.
    async fn list_by_talent(&self, talent_profile_id: Uuid)
    -> Result<Vec<SocialAccount>, ApiError>;

    async fn list_by_platform(
        &self,
        talent_profile_id: Uuid,
        platform: Platform,
    ) -> Result<Vec<SocialAccount>, ApiError>;

    /// Insert `account`; when it is primary, demote its siblings in the same transaction.
    async fn insert(&self, account: &SocialAccount) -> Result<(), ApiError>;

    /// Apply `changes`; when they set `is_primary = true`, demote the siblings
    /// in the same transaction. `None` when the account does not exist.
    async fn update(
        &self,
        id: Uuid,
        changes: &SocialAccountChanges,
    ) -> Result<Option<SocialAccount>, ApiError>;

    /// Demote all siblings and promote `id`. `None` when the account does not exist.
    async fn set_primary(&self, id: Uuid) -> Result<Option<SocialAccount>, ApiError>;

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for phone-verification challenges.
pub trait OtpRepository: Send + Sync {
    /// An unverified challenge for (user, phone) that has not expired at `now`.
    async fn find_pending(
        &self,
        user_id: Uuid,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpChallenge>, ApiError>;

    /// Most recently created unverified challenge for (user, phone), expired or not.
    async fn find_latest_unverified(
        &self,
        user_id: Uuid,
        phone: &str,
    ) -> Result<Option<OtpChallenge>, ApiError>;

    /// Store a challenge, first dropping expired ones for the same
    /// (user, phone). `OtpAlreadyPending` if a live one is still stored.
    async fn create(&self, challenge: &OtpChallenge) -> Result<(), ApiError>;

    /// Atomically charge one wrong guess, but only while fewer than
    /// `OTP_MAX_ATTEMPTS` are recorded. Returns the new count, or `None` when
    /// the challenge is gone or already spent.
    async fn record_failed_attempt(&self, id: Uuid) -> Result<Option<i32>, ApiError>;

    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;

    /// Delete every challenge for (user, phone). Returns the number deleted.
    async fn delete_for(&self, user_id: Uuid, phone: &str) -> Result<u64, ApiError>;

    /// Delete challenges with `expires_at < now`. Returns the number deleted.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, ApiError>;

    /// In one transaction: consume the challenge if it still has attempts
    /// left, then store `phone` as the user's verified phone. Any outcome
    /// other than `Confirmed` rolls back.
    async fn confirm_phone(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        phone: &str,
    ) -> Result<PhoneConfirmation, ApiError>;
}

/// Repository for marketing banners.
pub trait BannerRepository: Send + Sync {
    async fn create(&self, banner: &Banner) -> Result<(), ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, ApiError>;
    /// Newest first, optionally restricted to one placement.
    async fn list(&self, banner_type: Option<BannerType>) -> Result<Vec<Banner>, ApiError>;
    async fn update(&self, id: Uuid, changes: &BannerChanges)
    -> Result<Option<Banner>, ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for talent work samples.
pub trait WorkSampleRepository: Send + Sync {
    async fn create(&self, sample: &WorkSample) -> Result<(), ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkSample>, ApiError>;
    /// Newest first.
    async fn list(&self, filter: &WorkSampleFilter) -> Result<Vec<WorkSample>, ApiError>;
    async fn count(&self, filter: &WorkSampleFilter) -> Result<u64, ApiError>;
    async fn update(
        &self,
        id: Uuid,
        changes: &WorkSampleChanges,
    ) -> Result<Option<WorkSample>, ApiError>;
    async fn set_status(&self, id: Uuid, status: WorkStatus)
    -> Result<Option<WorkSample>, ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
    async fn delete_by_talent(&self, talent_profile_id: Uuid) -> Result<u64, ApiError>;
}

/// Read-only access to received reviews.
pub trait ReviewRepository: Send + Sync {
    async fn rating_for(&self, user_id: Uuid) -> Result<RatingSummary, ApiError>;
}

// ── Outbound ports ───────────────────────────────────────────────────────────

/// Outbound SMS delivery.
pub trait SmsGateway: Send + Sync {
    /// `Ok(true)` when the provider accepted the message.
    async fn send(&self, phone: &str, message: &str) -> Result<bool, ApiError>;
}

/// One-way password hashing.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, ApiError>;
    fn verify(&self, password: &str, hash: &str) -> Result<bool, ApiError>;
}
