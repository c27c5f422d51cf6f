//! Social accounts and the primary-account selector.
//!
//! A talent profile has at most one primary account. Creating, updating or
//! promoting an account as primary demotes its siblings in the same store
//! transaction; see [`SocialAccountRepository`].

use chrono::Utc;
use uuid::Uuid;

use kala_domain::social::Platform;

use crate::domain::repository::{SocialAccountRepository, TalentRepository};
use crate::domain::types::{SocialAccount, SocialAccountChanges};
use crate::error::ApiError;

// ── CreateSocialAccount ──────────────────────────────────────────────────────

pub struct CreateSocialAccountInput {
    pub talent_profile_id: Uuid,
    pub platform: Platform,
    pub handle: String,
    pub profile_url: String,
    pub followers_count: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_primary: Option<bool>,
}

pub struct CreateSocialAccountUseCase<S: SocialAccountRepository, T: TalentRepository> {
    pub socials: S,
    pub talents: T,
}

impl<S: SocialAccountRepository, T: TalentRepository> CreateSocialAccountUseCase<S, T> {
    pub async fn execute(
        &self,
        input: CreateSocialAccountInput,
    ) -> Result<SocialAccount, ApiError> {
        if self
            .talents
            .find_by_id(input.talent_profile_id)
            .await?
            .is_none()
        {
            return Err(ApiError::TalentProfileNotFound);
        }
        let now = Utc::now();
        let account = SocialAccount {
            id: Uuid::now_v7(),
            talent_profile_id: input.talent_profile_id,
            platform: input.platform,
            handle: input.handle,
            profile_url: input.profile_url,
            followers_count: input.followers_count.unwrap_or(0),
            engagement_rate: input.engagement_rate,
            is_verified: input.is_verified.unwrap_or(false),
            is_primary: input.is_primary.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        self.socials.insert(&account).await?;
        Ok(account)
    }
}

// ── GetSocialAccount ─────────────────────────────────────────────────────────

pub struct GetSocialAccountUseCase<S: SocialAccountRepository> {
    pub socials: S,
}

impl<S: SocialAccountRepository> GetSocialAccountUseCase<S> {
    pub async fn execute(&self, id: Uuid) -> Result<SocialAccount, ApiError> {
        self.socials
            .find_by_id(id)
            .await?
            .ok_or(ApiError::SocialAccountNotFound)
    }
}

// ── ListSocialAccounts ───────────────────────────────────────────────────────

pub struct ListSocialAccountsUseCase<S: SocialAccountRepository> {
    pub socials: S,
}

impl<S: SocialAccountRepository> ListSocialAccountsUseCase<S> {
    /// Primary first, then by followers descending.
    pub async fn execute(&self, talent_profile_id: Uuid) -> Result<Vec<SocialAccount>, ApiError> {
        self.socials.list_by_talent(talent_profile_id).await
    }

    pub async fn by_platform(
        &self,
        talent_profile_id: Uuid,
        platform: Platform,
    ) -> Result<Vec<SocialAccount>, ApiError> {
        self.socials
            .list_by_platform(talent_profile_id, platform)
            .await
    }
}

// ── UpdateSocialAccount ──────────────────────────────────────────────────────

pub struct UpdateSocialAccountUseCase<S: SocialAccountRepository> {
    pub socials: S,
}

impl<S: SocialAccountRepository> UpdateSocialAccountUseCase<S> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: SocialAccountChanges,
    ) -> Result<SocialAccount, ApiError> {
        self.socials
            .update(id, &changes)
            .await?
            .ok_or(ApiError::SocialAccountNotFound)
    }
}

// ── SetPrimarySocialAccount ──────────────────────────────────────────────────

pub struct SetPrimarySocialAccountUseCase<S: SocialAccountRepository> {
    pub socials: S,
}

impl<S: SocialAccountRepository> SetPrimarySocialAccountUseCase<S> {
    pub async fn execute(&self, id: Uuid) -> Result<SocialAccount, ApiError> {
        self.socials
            .set_primary(id)
            .await?
            .ok_or(ApiError::SocialAccountNotFound)
    }
}

// ── DeleteSocialAccount ──────────────────────────────────────────────────────

pub struct DeleteSocialAccountUseCase<S: SocialAccountRepository> {
    pub socials: S,
}

impl<S: SocialAccountRepository> DeleteSocialAccountUseCase<S> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if self.socials.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::SocialAccountNotFound)
        }
    }
}
