use uuid::Uuid;

use kala_api::error::ApiError;
use kala_api::usecase::auth::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UpdatePasswordUseCase,
};
use kala_auth_types::token::validate_access_token;
use kala_testing::auth::TEST_JWT_SECRET;

use crate::helpers::{MockHasher, MockUserRepo, test_user};

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_owned(),
        password: "correct-horse".to_owned(),
        user_type: "user".to_owned(),
    }
}

#[tokio::test]
async fn should_register_user_with_empty_profiles() {
    let repo = MockUserRepo::empty();
    let users = repo.users_handle();
    let profiles = repo.profiles_handle();
    let talents = repo.talents_handle();

    let uc = RegisterUseCase {
        users: repo,
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let session = uc.execute(register_input("new@example.com")).await.unwrap();

    assert_eq!(session.user.email, "new@example.com");
    assert_eq!(session.user.password_hash, "hashed:correct-horse");
    assert!(session.user.is_active);

    let info = validate_access_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, session.user.id);
    assert_eq!(info.email, "new@example.com");

    assert_eq!(users.lock().unwrap().len(), 1);
    let profiles = profiles.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].user_id, session.user.id);
    let talents = talents.lock().unwrap();
    assert_eq!(talents.len(), 1);
    assert_eq!(talents[0].user_id, session.user.id);
    assert_eq!(talents[0].currency, "INR");
}

#[tokio::test]
async fn should_reject_duplicate_registration() {
    let existing = test_user();
    let repo = MockUserRepo::new(vec![existing.clone()]);
    let profiles = repo.profiles_handle();

    let uc = RegisterUseCase {
        users: repo,
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = uc.execute(register_input(&existing.email)).await;

    assert!(
        matches!(result, Err(ApiError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {result:?}"
    );
    assert!(profiles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_login_and_record_last_login() {
    let user = test_user();
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users = repo.users_handle();

    let uc = LoginUseCase {
        users: repo,
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let session = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "correct-horse".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.id, user.id);
    assert!(session.user.last_login.is_some());
    assert!(users.lock().unwrap()[0].last_login.is_some());
    assert!(validate_access_token(&session.token, TEST_JWT_SECRET).is_ok());
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let user = test_user();
    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "battery-staple".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_email_like_wrong_password() {
    let uc = LoginUseCase {
        users: MockUserRepo::empty(),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: "ghost@example.com".to_owned(),
            password: "correct-horse".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_login_for_deactivated_user() {
    let mut user = test_user();
    user.is_active = false;
    let uc = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: MockHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            email: user.email.clone(),
            password: "correct-horse".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_update_password_hash() {
    let user = test_user();
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users = repo.users_handle();

    let uc = UpdatePasswordUseCase {
        users: repo,
        hasher: MockHasher,
    };
    uc.execute(user.id, "new-password").await.unwrap();

    assert_eq!(users.lock().unwrap()[0].password_hash, "hashed:new-password");
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_password() {
    let uc = UpdatePasswordUseCase {
        users: MockUserRepo::empty(),
        hasher: MockHasher,
    };

    let result = uc.execute(Uuid::now_v7(), "new-password").await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
