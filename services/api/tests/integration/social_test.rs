use uuid::Uuid;

use kala_api::domain::types::{SocialAccountChanges, TalentProfile};
use kala_api::error::ApiError;
use kala_api::usecase::social::{
    CreateSocialAccountInput, CreateSocialAccountUseCase, SetPrimarySocialAccountUseCase,
    UpdateSocialAccountUseCase,
};
use kala_domain::social::Platform;

use crate::helpers::{MockSocialRepo, MockTalentRepo, primary_count, social_account};

fn create_input(
    talent_profile_id: Uuid,
    platform: Platform,
    is_primary: bool,
) -> CreateSocialAccountInput {
    CreateSocialAccountInput {
        talent_profile_id,
        platform,
        handle: "@kala".to_owned(),
        profile_url: "https://example.com/kala".to_owned(),
        followers_count: None,
        engagement_rate: None,
        is_verified: None,
        is_primary: Some(is_primary),
    }
}

#[tokio::test]
async fn should_keep_single_primary_when_new_primary_is_created() {
    let talent = TalentProfile::empty(Uuid::now_v7());
    let a = social_account(talent.id, Platform::Instagram, 10, true);
    let b = social_account(talent.id, Platform::Youtube, 20, false);
    let c = social_account(talent.id, Platform::Twitter, 30, false);
    let socials = MockSocialRepo::new(vec![a.clone(), b, c]);
    let accounts = socials.accounts_handle();

    let uc = CreateSocialAccountUseCase {
        socials,
        talents: MockTalentRepo::new(vec![talent.clone()]),
    };
    let d = uc
        .execute(create_input(talent.id, Platform::Tiktok, true))
        .await
        .unwrap();

    let accounts = accounts.lock().unwrap();
    assert_eq!(accounts.len(), 4);
    assert_eq!(primary_count(&accounts, talent.id), 1);
    let primary = accounts.iter().find(|x| x.is_primary).unwrap();
    assert_eq!(primary.id, d.id);
    assert!(!accounts.iter().find(|x| x.id == a.id).unwrap().is_primary);
}

#[tokio::test]
async fn should_default_new_accounts_to_zero_followers_and_unverified() {
    let talent = TalentProfile::empty(Uuid::now_v7());
    let uc = CreateSocialAccountUseCase {
        socials: MockSocialRepo::empty(),
        talents: MockTalentRepo::new(vec![talent.clone()]),
    };

    let mut input = create_input(talent.id, Platform::Instagram, false);
    input.is_primary = None;
    let account = uc.execute(input).await.unwrap();

    assert_eq!(account.followers_count, 0);
    assert!(!account.is_verified);
    assert!(!account.is_primary);
}

#[tokio::test]
async fn should_reject_account_for_unknown_talent() {
    let socials = MockSocialRepo::empty();
    let accounts = socials.accounts_handle();
    let uc = CreateSocialAccountUseCase {
        socials,
        talents: MockTalentRepo::empty(),
    };

    let result = uc
        .execute(create_input(Uuid::now_v7(), Platform::Instagram, true))
        .await;

    assert!(
        matches!(result, Err(ApiError::TalentProfileNotFound)),
        "expected TalentProfileNotFound, got {result:?}"
    );
    assert!(accounts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_touch_other_talents_primary() {
    let mine = Uuid::now_v7();
    let theirs = Uuid::now_v7();
    let their_primary = social_account(theirs, Platform::Instagram, 5, true);
    let mut talent = TalentProfile::empty(Uuid::now_v7());
    talent.id = mine;
    let socials = MockSocialRepo::new(vec![their_primary.clone()]);
    let accounts = socials.accounts_handle();

    CreateSocialAccountUseCase {
        socials,
        talents: MockTalentRepo::new(vec![talent]),
    }
    .execute(create_input(mine, Platform::Youtube, true))
    .await
    .unwrap();

    let accounts = accounts.lock().unwrap();
    assert_eq!(primary_count(&accounts, mine), 1);
    assert_eq!(primary_count(&accounts, theirs), 1);
}

#[tokio::test]
async fn should_be_idempotent_when_setting_primary_twice() {
    let talent_id = Uuid::now_v7();
    let a = social_account(talent_id, Platform::Instagram, 10, true);
    let b = social_account(talent_id, Platform::Youtube, 20, false);
    let socials = MockSocialRepo::new(vec![a.clone(), b.clone()]);
    let accounts = socials.accounts_handle();

    let uc = SetPrimarySocialAccountUseCase { socials };
    let first = uc.execute(b.id).await.unwrap();
    let second = uc.execute(b.id).await.unwrap();

    assert!(first.is_primary && second.is_primary);
    let accounts = accounts.lock().unwrap();
    assert_eq!(primary_count(&accounts, talent_id), 1);
    assert!(!accounts.iter().find(|x| x.id == a.id).unwrap().is_primary);
}

#[tokio::test]
async fn should_return_not_found_when_setting_unknown_primary() {
    let uc = SetPrimarySocialAccountUseCase {
        socials: MockSocialRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(ApiError::SocialAccountNotFound)),
        "expected SocialAccountNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_demote_siblings_when_update_promotes() {
    let talent_id = Uuid::now_v7();
    let a = social_account(talent_id, Platform::Instagram, 10, true);
    let b = social_account(talent_id, Platform::Youtube, 20, false);
    let socials = MockSocialRepo::new(vec![a.clone(), b.clone()]);
    let accounts = socials.accounts_handle();

    let uc = UpdateSocialAccountUseCase { socials };
    let updated = uc
        .execute(
            b.id,
            SocialAccountChanges {
                followers_count: Some(2_000),
                is_primary: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.is_primary);
    assert_eq!(updated.followers_count, 2_000);
    let accounts = accounts.lock().unwrap();
    assert_eq!(primary_count(&accounts, talent_id), 1);
}
