use chrono::{Duration, Utc};
use uuid::Uuid;

use kala_api::domain::types::{OTP_MAX_ATTEMPTS, OTP_TTL_MINUTES};
use kala_api::error::ApiError;
use kala_api::usecase::otp::{
    ResendOtpUseCase, SendOtpUseCase, SweepExpiredOtpsUseCase, VerifyOtpUseCase,
};

use crate::helpers::{MockOtpRepo, MockSms, SmsOutcome, TEST_PHONE, challenge};

/// Pull the code out of "Your OTP is NNNNNN. ..."
fn code_from(message: &str) -> String {
    message
        .trim_start_matches("Your OTP is ")
        .chars()
        .take(6)
        .collect()
}

// ── send ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_send_otp_and_store_challenge() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::for_user(user_id);
    let challenges = repo.challenges_handle();
    let sms = MockSms::delivering();
    let sent = sms.sent_handle();

    let uc = SendOtpUseCase { otps: repo, sms };
    let issued = uc.execute(user_id, TEST_PHONE).await.unwrap();

    assert_eq!(issued.phone, TEST_PHONE);
    assert_eq!(issued.expires_in_minutes, OTP_TTL_MINUTES);

    let challenges = challenges.lock().unwrap();
    assert_eq!(challenges.len(), 1);
    let stored = &challenges[0];
    assert_eq!(stored.attempts, 0);
    assert!(!stored.is_verified);
    assert_eq!(stored.otp.len(), 6);
    assert_eq!(
        (stored.expires_at - stored.created_at).num_minutes(),
        OTP_TTL_MINUTES
    );

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, TEST_PHONE);
    assert_eq!(code_from(&sent[0].1), stored.otp);
    assert!(sent[0].1.contains("Valid for 10 minutes"));
}

#[tokio::test]
async fn should_reject_send_while_challenge_pending() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(2))],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();
    let sms = MockSms::delivering();
    let sent = sms.sent_handle();

    let uc = SendOtpUseCase { otps: repo, sms };
    let result = uc.execute(user_id, TEST_PHONE).await;

    assert!(
        matches!(result, Err(ApiError::OtpAlreadyPending)),
        "expected OtpAlreadyPending, got {result:?}"
    );
    assert!(sent.lock().unwrap().is_empty(), "no SMS should be sent");
    assert_eq!(challenges.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_send_again_once_previous_challenge_expired() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(11))],
        vec![user_id],
    );
    let uc = SendOtpUseCase {
        otps: repo,
        sms: MockSms::delivering(),
    };

    let result = uc.execute(user_id, TEST_PHONE).await;
    assert!(result.is_ok(), "expected Ok, got {result:?}");
}

#[tokio::test]
async fn should_not_block_other_phone_numbers() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(1))],
        vec![user_id],
    );
    let uc = SendOtpUseCase {
        otps: repo,
        sms: MockSms::delivering(),
    };

    let result = uc.execute(user_id, "9123456780").await;
    assert!(result.is_ok(), "expected Ok, got {result:?}");
}

#[tokio::test]
async fn should_persist_nothing_when_provider_rejects() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::for_user(user_id);
    let challenges = repo.challenges_handle();

    let uc = SendOtpUseCase {
        otps: repo,
        sms: MockSms::new(SmsOutcome::Rejected),
    };
    let result = uc.execute(user_id, TEST_PHONE).await;

    assert!(
        matches!(result, Err(ApiError::OtpDeliveryFailed)),
        "expected OtpDeliveryFailed, got {result:?}"
    );
    assert!(challenges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_treat_unreachable_provider_as_delivery_failure() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::for_user(user_id);
    let challenges = repo.challenges_handle();

    let uc = SendOtpUseCase {
        otps: repo,
        sms: MockSms::new(SmsOutcome::Unreachable),
    };
    let result = uc.execute(user_id, TEST_PHONE).await;

    assert!(
        matches!(result, Err(ApiError::OtpDeliveryFailed)),
        "expected OtpDeliveryFailed, got {result:?}"
    );
    assert!(challenges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_store_one_challenge_for_concurrent_sends() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::for_user(user_id);
    let challenges = repo.challenges_handle();
    let sms = MockSms::delivering();
    let sent = sms.sent_handle();
    let uc = SendOtpUseCase { otps: repo, sms };

    let (first, second) = tokio::join!(
        uc.execute(user_id, TEST_PHONE),
        uc.execute(user_id, TEST_PHONE)
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(ApiError::OtpAlreadyPending))),
        "expected one OtpAlreadyPending, got {results:?}"
    );

    let challenges = challenges.lock().unwrap();
    assert_eq!(challenges.len(), 1);
    assert!(
        sent.lock()
            .unwrap()
            .iter()
            .any(|(_, message)| code_from(message) == challenges[0].otp)
    );
}

// ── verify ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_verify_code_once_then_forget_it() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::for_user(user_id);
    let challenges = repo.challenges_handle();
    let confirmed = repo.confirmed_handle();
    let sms = MockSms::delivering();
    let sent = sms.sent_handle();

    SendOtpUseCase {
        otps: MockOtpRepo {
            challenges: challenges.clone(),
            known_users: vec![user_id],
            confirmed: confirmed.clone(),
        },
        sms,
    }
    .execute(user_id, TEST_PHONE)
    .await
    .unwrap();
    let code = code_from(&sent.lock().unwrap()[0].1);

    let verify = VerifyOtpUseCase { otps: repo };
    verify.execute(user_id, TEST_PHONE, &code).await.unwrap();

    assert_eq!(
        confirmed.lock().unwrap().as_slice(),
        &[(user_id, TEST_PHONE.to_owned())]
    );
    assert!(challenges.lock().unwrap().is_empty());

    let again = verify.execute(user_id, TEST_PHONE, &code).await;
    assert!(
        matches!(again, Err(ApiError::OtpNotFound)),
        "expected OtpNotFound, got {again:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_without_challenge() {
    let user_id = Uuid::now_v7();
    let uc = VerifyOtpUseCase {
        otps: MockOtpRepo::for_user(user_id),
    };

    let result = uc.execute(user_id, TEST_PHONE, "123456").await;
    assert!(
        matches!(result, Err(ApiError::OtpNotFound)),
        "expected OtpNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_count_down_attempts_then_discard_challenge() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(1))],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();
    let uc = VerifyOtpUseCase { otps: repo };

    for expected in (0..OTP_MAX_ATTEMPTS).rev() {
        let result = uc.execute(user_id, TEST_PHONE, "000000").await;
        assert!(
            matches!(result, Err(ApiError::InvalidOtp { remaining }) if remaining == expected),
            "expected InvalidOtp {{ remaining: {expected} }}, got {result:?}"
        );
    }
    assert_eq!(challenges.lock().unwrap()[0].attempts, OTP_MAX_ATTEMPTS);

    // Even the right code is refused once attempts are spent.
    let result = uc.execute(user_id, TEST_PHONE, "123456").await;
    assert!(
        matches!(result, Err(ApiError::OtpAttemptsExceeded)),
        "expected OtpAttemptsExceeded, got {result:?}"
    );
    assert!(challenges.lock().unwrap().is_empty());

    let result = uc.execute(user_id, TEST_PHONE, "123456").await;
    assert!(
        matches!(result, Err(ApiError::OtpNotFound)),
        "expected OtpNotFound, got {result:?}"
    );
}

/// Remaining-attempt counts reported to wrong guesses, highest first.
fn remaining_reported(results: &[Result<(), ApiError>]) -> Vec<i32> {
    let mut remaining: Vec<i32> = results
        .iter()
        .filter_map(|r| match r {
            Err(ApiError::InvalidOtp { remaining }) => Some(*remaining),
            _ => None,
        })
        .collect();
    remaining.sort_unstable_by(|a, b| b.cmp(a));
    remaining
}

#[tokio::test]
async fn should_charge_each_concurrent_wrong_guess_once() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(1))],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();
    let uc = VerifyOtpUseCase { otps: repo };

    let (a, b, c, d, e) = tokio::join!(
        uc.execute(user_id, TEST_PHONE, "000001"),
        uc.execute(user_id, TEST_PHONE, "000002"),
        uc.execute(user_id, TEST_PHONE, "000003"),
        uc.execute(user_id, TEST_PHONE, "000004"),
        uc.execute(user_id, TEST_PHONE, "000005"),
    );
    let results = [a, b, c, d, e];

    assert_eq!(remaining_reported(&results), vec![2, 1, 0]);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(ApiError::OtpAttemptsExceeded)))
            .count(),
        2,
        "expected two OtpAttemptsExceeded, got {results:?}"
    );
    assert!(challenges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_refuse_right_code_racing_spent_attempts() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(1))],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();
    let confirmed = repo.confirmed_handle();
    let uc = VerifyOtpUseCase { otps: repo };

    let (a, b, c, d, e, right) = tokio::join!(
        uc.execute(user_id, TEST_PHONE, "000001"),
        uc.execute(user_id, TEST_PHONE, "000002"),
        uc.execute(user_id, TEST_PHONE, "000003"),
        uc.execute(user_id, TEST_PHONE, "000004"),
        uc.execute(user_id, TEST_PHONE, "000005"),
        uc.execute(user_id, TEST_PHONE, "123456"),
    );
    let wrong = [a, b, c, d, e];
    let charged = remaining_reported(&wrong);
    let expected: Vec<i32> = (OTP_MAX_ATTEMPTS - charged.len() as i32..OTP_MAX_ATTEMPTS)
        .rev()
        .collect();
    assert_eq!(charged, expected, "each wrong guess charged once");

    if right.is_ok() {
        assert!(charged.len() < OTP_MAX_ATTEMPTS as usize);
        assert_eq!(confirmed.lock().unwrap().len(), 1);
    } else {
        assert!(
            matches!(right, Err(ApiError::OtpAttemptsExceeded)),
            "expected OtpAttemptsExceeded, got {right:?}"
        );
        assert_eq!(charged.len(), OTP_MAX_ATTEMPTS as usize);
        assert!(confirmed.lock().unwrap().is_empty());
    }
    assert!(challenges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_expired_code_and_delete_it() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(11))],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();
    let confirmed = repo.confirmed_handle();
    let uc = VerifyOtpUseCase { otps: repo };

    let result = uc.execute(user_id, TEST_PHONE, "123456").await;
    assert!(
        matches!(result, Err(ApiError::OtpExpired)),
        "expected OtpExpired, got {result:?}"
    );
    assert!(challenges.lock().unwrap().is_empty());
    assert!(confirmed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_keep_challenge_when_user_vanished() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "123456", Duration::minutes(1))],
        vec![],
    );
    let challenges = repo.challenges_handle();
    let uc = VerifyOtpUseCase { otps: repo };

    let result = uc.execute(user_id, TEST_PHONE, "123456").await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
    assert_eq!(challenges.lock().unwrap().len(), 1);
}

// ── resend ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_pending_challenge_on_resend() {
    let user_id = Uuid::now_v7();
    let old = challenge(user_id, "111111", Duration::minutes(1));
    let repo = MockOtpRepo::new(vec![old.clone()], vec![user_id]);
    let challenges = repo.challenges_handle();
    let sms = MockSms::delivering();
    let sent = sms.sent_handle();

    let uc = ResendOtpUseCase { otps: repo, sms };
    uc.execute(user_id, TEST_PHONE).await.unwrap();
    uc.execute(user_id, TEST_PHONE).await.unwrap();

    let challenges = challenges.lock().unwrap();
    assert_eq!(challenges.len(), 1, "resend keeps a single challenge");
    assert_ne!(challenges[0].id, old.id);

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(code_from(&sent[1].1), challenges[0].otp);
}

#[tokio::test]
async fn should_drop_old_challenge_even_if_resend_delivery_fails() {
    let user_id = Uuid::now_v7();
    let repo = MockOtpRepo::new(
        vec![challenge(user_id, "111111", Duration::minutes(1))],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();

    let uc = ResendOtpUseCase {
        otps: repo,
        sms: MockSms::new(SmsOutcome::Rejected),
    };
    let result = uc.execute(user_id, TEST_PHONE).await;

    assert!(
        matches!(result, Err(ApiError::OtpDeliveryFailed)),
        "expected OtpDeliveryFailed, got {result:?}"
    );
    assert!(challenges.lock().unwrap().is_empty());
}

// ── sweep ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_sweep_only_expired_challenges() {
    let user_id = Uuid::now_v7();
    let live = challenge(user_id, "222222", Duration::minutes(3));
    let repo = MockOtpRepo::new(
        vec![
            challenge(user_id, "111111", Duration::minutes(30)),
            challenge(user_id, "333333", Duration::minutes(12)),
            live.clone(),
        ],
        vec![user_id],
    );
    let challenges = repo.challenges_handle();

    let uc = SweepExpiredOtpsUseCase { otps: repo };
    let removed = uc.execute(Utc::now()).await.unwrap();

    assert_eq!(removed, 2);
    let remaining = challenges.lock().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);
}
