use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{DEFAULT_COUNTRY, DEFAULT_TIME_ZONE, ProfileChanges, UserProfile};
use crate::error::ApiError;

// ── CreateProfile ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CreateProfileInput {
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
}

pub struct CreateProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> CreateProfileUseCase<P> {
    pub async fn execute(&self, input: CreateProfileInput) -> Result<UserProfile, ApiError> {
        let now = Utc::now();
        let profile = UserProfile {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            first_name: input.first_name,
            last_name: input.last_name,
            display_name: input.display_name,
            bio: input.bio,
            profile_image_url: input.profile_image_url,
            banner_image_url: input.banner_image_url,
            location_city: input.location_city,
            location_state: input.location_state,
            location_country: input
                .location_country
                .or_else(|| Some(DEFAULT_COUNTRY.to_owned())),
            website_url: input.website_url,
            languages: input.languages,
            time_zone: input.time_zone.or_else(|| Some(DEFAULT_TIME_ZONE.to_owned())),
            created_at: now,
            updated_at: now,
        };
        self.profiles.create(&profile).await?;
        Ok(profile)
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetProfileUseCase<P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<UserProfile, ApiError> {
        self.profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ApiError::ProfileNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateProfileUseCase<P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<UserProfile, ApiError> {
        self.profiles
            .update(user_id, &changes)
            .await?
            .ok_or(ApiError::ProfileNotFound)
    }
}

// ── DeleteProfile ────────────────────────────────────────────────────────────

pub struct DeleteProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> DeleteProfileUseCase<P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        if self.profiles.delete(user_id).await? {
            Ok(())
        } else {
            Err(ApiError::ProfileNotFound)
        }
    }
}

// ── SearchProfiles ───────────────────────────────────────────────────────────

pub struct SearchProfilesUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> SearchProfilesUseCase<P> {
    /// Blank queries match nothing rather than every profile.
    pub async fn execute(&self, query: &str) -> Result<Vec<UserProfile>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }
        self.profiles.search(query).await
    }
}
