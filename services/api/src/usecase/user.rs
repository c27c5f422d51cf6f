use uuid::Uuid;

use kala_domain::pagination::{Page, PageMeta};

use crate::domain::repository::{
    CredentialHasher, ProfileRepository, ReviewRepository, SocialAccountRepository,
    TalentRepository, UserRepository,
};
use crate::domain::types::{TalentView, User, UserChanges, UserFilter, UserStats};
use crate::error::ApiError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub user_type: String,
}

pub struct CreateUserUseCase<U: UserRepository, H: CredentialHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: CredentialHasher> CreateUserUseCase<U, H> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiError> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailAlreadyExists);
        }
        let password_hash = self.hasher.hash(&input.password)?;
        let user = User::new(input.email, password_hash, input.phone, input.user_type);
        self.users.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self, mut filter: UserFilter) -> Result<Page<User>, ApiError> {
        filter.page = filter.page.clamped();
        let (data, total) = self.users.list(&filter).await?;
        Ok(Page {
            data,
            meta: PageMeta::new(filter.page, total),
        })
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid, changes: UserChanges) -> Result<User, ApiError> {
        if changes.is_empty() {
            return Err(ApiError::InvalidInput("no fields to update".to_owned()));
        }
        self.users
            .update(user_id, &changes)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── DeactivateUser / DeleteUser ──────────────────────────────────────────────

pub struct DeactivateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeactivateUserUseCase<U> {
    /// Soft delete: the account stays but `is_active` becomes false.
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        let changes = UserChanges {
            is_active: Some(false),
            ..Default::default()
        };
        self.users
            .update(user_id, &changes)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        if self.users.delete(user_id).await? {
            Ok(())
        } else {
            Err(ApiError::UserNotFound)
        }
    }
}

// ── UserStats ────────────────────────────────────────────────────────────────

pub struct UserStatsUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UserStatsUseCase<U> {
    pub async fn execute(&self) -> Result<UserStats, ApiError> {
        self.users.stats().await
    }
}

// ── TalentView ───────────────────────────────────────────────────────────────

pub struct GetTalentViewUseCase<U, P, T, S, R>
where
    U: UserRepository,
    P: ProfileRepository,
    T: TalentRepository,
    S: SocialAccountRepository,
    R: ReviewRepository,
{
    pub users: U,
    pub profiles: P,
    pub talents: T,
    pub socials: S,
    pub reviews: R,
}

impl<U, P, T, S, R> GetTalentViewUseCase<U, P, T, S, R>
where
    U: UserRepository,
    P: ProfileRepository,
    T: TalentRepository,
    S: SocialAccountRepository,
    R: ReviewRepository,
{
    /// Public page of an active user. Deactivated accounts are `UserNotFound`.
    pub async fn execute(&self, user_id: Uuid) -> Result<TalentView, ApiError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(ApiError::UserNotFound)?;

        let profile = self.profiles.find_by_user(user_id).await?;
        let talent = self.talents.find_by_user(user_id).await?;
        let social_accounts = match &talent {
            Some(t) => self.socials.list_by_talent(t.id).await?,
            None => vec![],
        };
        let rating = self.reviews.rating_for(user_id).await?;

        Ok(TalentView {
            user,
            profile,
            talent,
            social_accounts,
            rating,
        })
    }
}
