use chrono::Utc;
use uuid::Uuid;

use kala_auth_types::token::issue_access_token;

use crate::domain::repository::{CredentialHasher, UserRepository};
use crate::domain::types::{TalentProfile, User, UserProfile};
use crate::error::ApiError;

/// Authenticated user plus a freshly signed access token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

fn session(user: User, secret: &str) -> Result<AuthSession, ApiError> {
    let token = issue_access_token(user.id, &user.email, secret)?;
    Ok(AuthSession { user, token })
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub user_type: String,
}

pub struct RegisterUseCase<U: UserRepository, H: CredentialHasher> {
    pub users: U,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<U: UserRepository, H: CredentialHasher> RegisterUseCase<U, H> {
    pub async fn execute(&self, input: RegisterInput) -> Result<AuthSession, ApiError> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailAlreadyExists);
        }
        let password_hash = self.hasher.hash(&input.password)?;
        let user = User::new(input.email, password_hash, None, input.user_type);
        let profile = UserProfile::empty(user.id);
        let talent = TalentProfile::empty(user.id);

        self.users.register(&user, &profile, &talent).await?;
        session(user, &self.jwt_secret)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository, H: CredentialHasher> {
    pub users: U,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<U: UserRepository, H: CredentialHasher> LoginUseCase<U, H> {
    pub async fn execute(&self, input: LoginInput) -> Result<AuthSession, ApiError> {
        let mut user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !user.is_active || !self.hasher.verify(&input.password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        let now = Utc::now();
        self.users.touch_last_login(user.id, now).await?;
        user.last_login = Some(now);
        session(user, &self.jwt_secret)
    }
}

// ── UpdatePassword ───────────────────────────────────────────────────────────

pub struct UpdatePasswordUseCase<U: UserRepository, H: CredentialHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: CredentialHasher> UpdatePasswordUseCase<U, H> {
    pub async fn execute(&self, user_id: Uuid, password: &str) -> Result<(), ApiError> {
        let password_hash = self.hasher.hash(password)?;
        if self.users.set_password_hash(user_id, &password_hash).await? {
            Ok(())
        } else {
            Err(ApiError::UserNotFound)
        }
    }
}
