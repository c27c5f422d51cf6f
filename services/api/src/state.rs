use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use kala_auth_types::identity::JwtSecret;

use crate::config::SmsConfig;
use crate::infra::crypto::Argon2Hasher;
use crate::infra::db::{
    DbBannerRepository, DbOtpRepository, DbProfileRepository, DbReviewRepository,
    DbSocialAccountRepository, DbTalentRepository, DbUserRepository, DbWorkSampleRepository,
};
use crate::infra::sms::HttpSmsGateway;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub sms: SmsConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn talent_repo(&self) -> DbTalentRepository {
        DbTalentRepository {
            db: self.db.clone(),
        }
    }

    pub fn social_repo(&self) -> DbSocialAccountRepository {
        DbSocialAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }

    pub fn banner_repo(&self) -> DbBannerRepository {
        DbBannerRepository {
            db: self.db.clone(),
        }
    }

    pub fn work_repo(&self) -> DbWorkSampleRepository {
        DbWorkSampleRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }

    pub fn sms_gateway(&self) -> HttpSmsGateway {
        HttpSmsGateway {
            client: self.http.clone(),
            config: self.sms.clone(),
        }
    }

    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
