use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use kala_api::domain::repository::{
    CredentialHasher, OtpRepository, ProfileRepository, ReviewRepository,
    SocialAccountRepository, SmsGateway, TalentRepository, UserRepository, WorkSampleRepository,
};
use kala_api::domain::types::{
    OTP_MAX_ATTEMPTS, OTP_TTL_MINUTES, OtpChallenge, PhoneConfirmation, ProfileChanges,
    RatingSummary, SocialAccount, SocialAccountChanges, TalentChanges, TalentFilter,
    TalentProfile, User, UserChanges, UserFilter, UserProfile, UserStats, WorkSample,
    WorkSampleChanges, WorkSampleFilter,
};
use kala_api::error::ApiError;
use kala_domain::social::Platform;
use kala_domain::talent::AvailabilityStatus;
use kala_domain::work::WorkStatus;

pub const TEST_PHONE: &str = "9876543210";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    pub profiles: Arc<Mutex<Vec<UserProfile>>>,
    pub talents: Arc<Mutex<Vec<TalentProfile>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            profiles: Arc::new(Mutex::new(vec![])),
            talents: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }

    /// Profiles written by `register`.
    pub fn profiles_handle(&self) -> Arc<Mutex<Vec<UserProfile>>> {
        Arc::clone(&self.profiles)
    }

    /// Talent profiles written by `register`.
    pub fn talents_handle(&self) -> Arc<Mutex<Vec<TalentProfile>>> {
        Arc::clone(&self.talents)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(ApiError::EmailAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn register(
        &self,
        user: &User,
        profile: &UserProfile,
        talent: &TalentProfile,
    ) -> Result<(), ApiError> {
        self.create(user).await?;
        self.profiles.lock().unwrap().push(profile.clone());
        self.talents.lock().unwrap().push(talent.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<Option<User>, ApiError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(phone) = &changes.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(user_type) = &changes.user_type {
            user.user_type = user_type.clone();
        }
        if let Some(v) = changes.is_premium {
            user.is_premium = v;
        }
        if let Some(v) = changes.is_active {
            user.is_active = v;
        }
        if let Some(v) = changes.email_verified {
            user.email_verified = v;
        }
        if let Some(v) = changes.phone_verified {
            user.phone_verified = v;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = password_hash.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.last_login = Some(at);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn list(&self, filter: &UserFilter) -> Result<(Vec<User>, u64), ApiError> {
        let users = self.users.lock().unwrap();
        let matching: Vec<User> = users
            .iter()
            .filter(|u| filter.is_active.is_none_or(|v| u.is_active == v))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.page.offset() as usize)
            .take(filter.page.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn stats(&self) -> Result<UserStats, ApiError> {
        let users = self.users.lock().unwrap();
        let total = users.len() as u64;
        let active = users.iter().filter(|u| u.is_active).count() as u64;
        Ok(UserStats {
            total,
            active,
            premium: users.iter().filter(|u| u.is_premium).count() as u64,
            inactive: total - active,
            by_type: vec![],
        })
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub profiles: Vec<UserProfile>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles }
    }

    pub fn empty() -> Self {
        Self { profiles: vec![] }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, ApiError> {
        Ok(self.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn create(&self, _profile: &UserProfile) -> Result<(), ApiError> {
        Ok(())
    }

    async fn update(
        &self,
        _user_id: Uuid,
        _changes: &ProfileChanges,
    ) -> Result<Option<UserProfile>, ApiError> {
        Ok(None)
    }

    async fn delete(&self, _user_id: Uuid) -> Result<bool, ApiError> {
        Ok(false)
    }

    async fn search(&self, _query: &str) -> Result<Vec<UserProfile>, ApiError> {
        Ok(self.profiles.clone())
    }
}

// ── MockTalentRepo ───────────────────────────────────────────────────────────

pub struct MockTalentRepo {
    pub talents: Arc<Mutex<Vec<TalentProfile>>>,
    pub list_calls: Arc<Mutex<u32>>,
}

impl MockTalentRepo {
    pub fn new(talents: Vec<TalentProfile>) -> Self {
        Self {
            talents: Arc::new(Mutex::new(talents)),
            list_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn talents_handle(&self) -> Arc<Mutex<Vec<TalentProfile>>> {
        Arc::clone(&self.talents)
    }

    /// Number of `list` calls that reached the store.
    pub fn list_calls_handle(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.list_calls)
    }
}

impl TalentRepository for MockTalentRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TalentProfile>, ApiError> {
        Ok(self.talents.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<TalentProfile>, ApiError> {
        Ok(self
            .talents
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.user_id == user_id)
            .cloned())
    }

    async fn create(&self, talent: &TalentProfile) -> Result<(), ApiError> {
        let mut talents = self.talents.lock().unwrap();
        if talents.iter().any(|t| t.user_id == talent.user_id) {
            return Err(ApiError::TalentProfileAlreadyExists);
        }
        talents.push(talent.clone());
        Ok(())
    }

    async fn update(
        &self,
        user_id: Uuid,
        changes: &TalentChanges,
    ) -> Result<Option<TalentProfile>, ApiError> {
        let mut talents = self.talents.lock().unwrap();
        let Some(talent) = talents.iter_mut().find(|t| t.user_id == user_id) else {
            return Ok(None);
        };
        if let Some(v) = changes.rate_per_hour {
            talent.rate_per_hour = Some(v);
        }
        if let Some(v) = changes.availability_status {
            talent.availability_status = v;
        }
        Ok(Some(talent.clone()))
    }

    async fn set_availability(
        &self,
        user_id: Uuid,
        status: AvailabilityStatus,
    ) -> Result<Option<TalentProfile>, ApiError> {
        let changes = TalentChanges {
            availability_status: Some(status),
            ..Default::default()
        };
        self.update(user_id, &changes).await
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let mut talents = self.talents.lock().unwrap();
        let before = talents.len();
        talents.retain(|t| t.user_id != user_id);
        Ok(talents.len() < before)
    }

    async fn list(&self, filter: &TalentFilter) -> Result<Vec<TalentProfile>, ApiError> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self
            .talents
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                filter
                    .availability_status
                    .is_none_or(|s| t.availability_status == s)
            })
            .cloned()
            .collect())
    }
}

// ── MockSocialRepo ───────────────────────────────────────────────────────────

/// In-memory social accounts that enforce the single-primary rule the same
/// way the store does: any write promoting an account demotes its siblings.
pub struct MockSocialRepo {
    pub accounts: Arc<Mutex<Vec<SocialAccount>>>,
}

impl MockSocialRepo {
    pub fn new(accounts: Vec<SocialAccount>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn accounts_handle(&self) -> Arc<Mutex<Vec<SocialAccount>>> {
        Arc::clone(&self.accounts)
    }
}

fn demote_siblings(accounts: &mut [SocialAccount], talent_profile_id: Uuid, keep: Option<Uuid>) {
    for account in accounts
        .iter_mut()
        .filter(|a| a.talent_profile_id == talent_profile_id && Some(a.id) != keep)
    {
        account.is_primary = false;
    }
}

fn sorted(mut accounts: Vec<SocialAccount>) -> Vec<SocialAccount> {
    accounts.sort_by(|a, b| {
        b.is_primary
            .cmp(&a.is_primary)
            .then(b.followers_count.cmp(&a.followers_count))
    });
    accounts
}

impl SocialAccountRepository for MockSocialRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SocialAccount>, ApiError> {
        Ok(self.accounts.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn list_by_talent(
        &self,
        talent_profile_id: Uuid,
    ) -> Result<Vec<SocialAccount>, ApiError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(sorted(
            accounts
                .iter()
                .filter(|a| a.talent_profile_id == talent_profile_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_platform(
        &self,
        talent_profile_id: Uuid,
        platform: Platform,
    ) -> Result<Vec<SocialAccount>, ApiError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(sorted(
            accounts
                .iter()
                .filter(|a| a.talent_profile_id == talent_profile_id && a.platform == platform)
                .cloned()
                .collect(),
        ))
    }

    async fn insert(&self, account: &SocialAccount) -> Result<(), ApiError> {
        let mut accounts = self.accounts.lock().unwrap();
        if account.is_primary {
            demote_siblings(&mut accounts, account.talent_profile_id, None);
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &SocialAccountChanges,
    ) -> Result<Option<SocialAccount>, ApiError> {
        let mut accounts = self.accounts.lock().unwrap();
        let Some(talent_profile_id) = accounts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.talent_profile_id)
        else {
            return Ok(None);
        };
        if changes.is_primary == Some(true) {
            demote_siblings(&mut accounts, talent_profile_id, Some(id));
        }
        let Some(account) = accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(handle) = &changes.handle {
            account.handle = handle.clone();
        }
        if let Some(url) = &changes.profile_url {
            account.profile_url = url.clone();
        }
        if let Some(v) = changes.followers_count {
            account.followers_count = v;
        }
        if let Some(v) = changes.engagement_rate {
            account.engagement_rate = Some(v);
        }
        if let Some(v) = changes.is_verified {
            account.is_verified = v;
        }
        if let Some(v) = changes.is_primary {
            account.is_primary = v;
        }
        account.updated_at = Utc::now();
        Ok(Some(account.clone()))
    }

    async fn set_primary(&self, id: Uuid) -> Result<Option<SocialAccount>, ApiError> {
        let changes = SocialAccountChanges {
            is_primary: Some(true),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        Ok(accounts.len() < before)
    }
}

// ── MockReviewRepo ───────────────────────────────────────────────────────────

pub struct MockReviewRepo {
    pub ratings: Vec<(Uuid, i16)>,
}

impl MockReviewRepo {
    pub fn new(ratings: Vec<(Uuid, i16)>) -> Self {
        Self { ratings }
    }

    pub fn empty() -> Self {
        Self { ratings: vec![] }
    }
}

impl ReviewRepository for MockReviewRepo {
    async fn rating_for(&self, user_id: Uuid) -> Result<RatingSummary, ApiError> {
        let ratings: Vec<i16> = self
            .ratings
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, r)| *r)
            .collect();
        Ok(RatingSummary::from_ratings(&ratings))
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub challenges: Arc<Mutex<Vec<OtpChallenge>>>,
    pub known_users: Vec<Uuid>,
    pub confirmed: Arc<Mutex<Vec<(Uuid, String)>>>,
}

impl MockOtpRepo {
    pub fn new(challenges: Vec<OtpChallenge>, known_users: Vec<Uuid>) -> Self {
        Self {
            challenges: Arc::new(Mutex::new(challenges)),
            known_users,
            confirmed: Arc::new(Mutex::new(vec![])),
        }
    }

    /// No challenges; `user_id` is the only account `confirm_phone` accepts.
    pub fn for_user(user_id: Uuid) -> Self {
        Self::new(vec![], vec![user_id])
    }

    pub fn challenges_handle(&self) -> Arc<Mutex<Vec<OtpChallenge>>> {
        Arc::clone(&self.challenges)
    }

    /// `(user_id, phone)` pairs stored as verified.
    pub fn confirmed_handle(&self) -> Arc<Mutex<Vec<(Uuid, String)>>> {
        Arc::clone(&self.confirmed)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn find_pending(
        &self,
        user_id: Uuid,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpChallenge>, ApiError> {
        tokio::task::yield_now().await;
        Ok(self
            .challenges
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                c.user_id == user_id && c.phone == phone && !c.is_verified && c.expires_at > now
            })
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn find_latest_unverified(
        &self,
        user_id: Uuid,
        phone: &str,
    ) -> Result<Option<OtpChallenge>, ApiError> {
        tokio::task::yield_now().await;
        Ok(self
            .challenges
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id && c.phone == phone && !c.is_verified)
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn create(&self, challenge: &OtpChallenge) -> Result<(), ApiError> {
        let mut challenges = self.challenges.lock().unwrap();
        let same_pair = |c: &OtpChallenge| {
            c.user_id == challenge.user_id && c.phone == challenge.phone && !c.is_verified
        };
        challenges.retain(|c| !(same_pair(c) && c.expires_at < challenge.created_at));
        if challenges.iter().any(same_pair) {
            return Err(ApiError::OtpAlreadyPending);
        }
        challenges.push(challenge.clone());
        Ok(())
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<Option<i32>, ApiError> {
        let mut challenges = self.challenges.lock().unwrap();
        Ok(challenges
            .iter_mut()
            .find(|c| c.id == id && c.attempts < OTP_MAX_ATTEMPTS)
            .map(|c| {
                c.attempts += 1;
                c.attempts
            }))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.challenges.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn delete_for(&self, user_id: Uuid, phone: &str) -> Result<u64, ApiError> {
        let mut challenges = self.challenges.lock().unwrap();
        let before = challenges.len();
        challenges.retain(|c| !(c.user_id == user_id && c.phone == phone));
        Ok((before - challenges.len()) as u64)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, ApiError> {
        let mut challenges = self.challenges.lock().unwrap();
        let before = challenges.len();
        challenges.retain(|c| c.expires_at >= now);
        Ok((before - challenges.len()) as u64)
    }

    async fn confirm_phone(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        phone: &str,
    ) -> Result<PhoneConfirmation, ApiError> {
        let mut challenges = self.challenges.lock().unwrap();
        if !challenges
            .iter()
            .any(|c| c.id == challenge_id && c.attempts < OTP_MAX_ATTEMPTS)
        {
            return Ok(PhoneConfirmation::ChallengeSpent);
        }
        if !self.known_users.contains(&user_id) {
            return Ok(PhoneConfirmation::UserMissing);
        }
        challenges.retain(|c| c.id != challenge_id);
        self.confirmed
            .lock()
            .unwrap()
            .push((user_id, phone.to_owned()));
        Ok(PhoneConfirmation::Confirmed)
    }
}

// ── MockSms ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum SmsOutcome {
    Delivered,
    Rejected,
    Unreachable,
}

pub struct MockSms {
    pub outcome: SmsOutcome,
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSms {
    pub fn new(outcome: SmsOutcome) -> Self {
        Self {
            outcome,
            sent: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn delivering() -> Self {
        Self::new(SmsOutcome::Delivered)
    }

    /// `(phone, message)` pairs handed to the provider, delivered or not.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl SmsGateway for MockSms {
    async fn send(&self, phone: &str, message: &str) -> Result<bool, ApiError> {
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_owned(), message.to_owned()));
        match self.outcome {
            SmsOutcome::Delivered => Ok(true),
            SmsOutcome::Rejected => Ok(false),
            SmsOutcome::Unreachable => Err(ApiError::Internal(anyhow::anyhow!(
                "connection refused"
            ))),
        }
    }
}

// ── MockHasher ───────────────────────────────────────────────────────────────

/// Reversible stand-in for the password hasher: `hashed:<password>`.
pub struct MockHasher;

impl CredentialHasher for MockHasher {
    fn hash(&self, password: &str) -> Result<String, ApiError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, ApiError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

// ── MockWorkRepo ─────────────────────────────────────────────────────────────

pub struct MockWorkRepo {
    pub samples: Arc<Mutex<Vec<WorkSample>>>,
}

impl MockWorkRepo {
    pub fn new(samples: Vec<WorkSample>) -> Self {
        Self {
            samples: Arc::new(Mutex::new(samples)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn samples_handle(&self) -> Arc<Mutex<Vec<WorkSample>>> {
        Arc::clone(&self.samples)
    }

    fn matching(&self, filter: &WorkSampleFilter) -> Vec<WorkSample> {
        self.samples
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                filter
                    .talent_profile_id
                    .is_none_or(|id| s.talent_profile_id == id)
                    && filter.sample_type.is_none_or(|t| s.sample_type == t)
                    && filter.status.is_none_or(|st| s.status == st)
            })
            .cloned()
            .collect()
    }
}

impl WorkSampleRepository for MockWorkRepo {
    async fn create(&self, sample: &WorkSample) -> Result<(), ApiError> {
        self.samples.lock().unwrap().push(sample.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkSample>, ApiError> {
        Ok(self.samples.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self, filter: &WorkSampleFilter) -> Result<Vec<WorkSample>, ApiError> {
        Ok(self.matching(filter))
    }

    async fn count(&self, filter: &WorkSampleFilter) -> Result<u64, ApiError> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &WorkSampleChanges,
    ) -> Result<Option<WorkSample>, ApiError> {
        let mut samples = self.samples.lock().unwrap();
        let Some(sample) = samples.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            sample.title = title.clone();
        }
        if let Some(t) = changes.sample_type {
            sample.sample_type = t;
        }
        if let Some(url) = &changes.url {
            sample.url = url.clone();
        }
        if let Some(st) = changes.status {
            sample.status = st;
        }
        Ok(Some(sample.clone()))
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: WorkStatus,
    ) -> Result<Option<WorkSample>, ApiError> {
        let changes = WorkSampleChanges {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut samples = self.samples.lock().unwrap();
        let before = samples.len();
        samples.retain(|s| s.id != id);
        Ok(samples.len() < before)
    }

    async fn delete_by_talent(&self, talent_profile_id: Uuid) -> Result<u64, ApiError> {
        let mut samples = self.samples.lock().unwrap();
        let before = samples.len();
        samples.retain(|s| s.talent_profile_id != talent_profile_id);
        Ok((before - samples.len()) as u64)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user() -> User {
    User::new(
        "talent@example.com".to_owned(),
        "hashed:correct-horse".to_owned(),
        None,
        "user".to_owned(),
    )
}

/// Unverified challenge created `age` ago with the standard lifetime.
pub fn challenge(user_id: Uuid, code: &str, age: Duration) -> OtpChallenge {
    let created_at = Utc::now() - age;
    OtpChallenge {
        id: Uuid::now_v7(),
        user_id,
        phone: TEST_PHONE.to_owned(),
        otp: code.to_owned(),
        expires_at: created_at + Duration::minutes(OTP_TTL_MINUTES),
        is_verified: false,
        attempts: 0,
        created_at,
    }
}

pub fn social_account(
    talent_profile_id: Uuid,
    platform: Platform,
    followers_count: i64,
    is_primary: bool,
) -> SocialAccount {
    let now = Utc::now();
    SocialAccount {
        id: Uuid::now_v7(),
        talent_profile_id,
        platform,
        handle: format!("@{platform}"),
        profile_url: format!("https://{platform}.example.com/me"),
        followers_count,
        engagement_rate: None,
        is_verified: false,
        is_primary,
        created_at: now,
        updated_at: now,
    }
}

/// Number of primary accounts for a talent profile.
pub fn primary_count(accounts: &[SocialAccount], talent_profile_id: Uuid) -> usize {
    accounts
        .iter()
        .filter(|a| a.talent_profile_id == talent_profile_id && a.is_primary)
        .count()
}
