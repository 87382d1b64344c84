use crate::e2e::helpers;

use chorddice_backend::domain::usage::{
    AdRewardOutcome, RollOutcome, RollSource, UsageServiceApi, UsageServiceError,
};
use chrono::{Duration, Utc};
use helpers::assertions::assert_usage_status;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use serial_test::serial;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_a_fresh_free_account(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("fresh@example.com").await.unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/usage/status", &ctx.token_for(&user.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_usage_status(body, 0, 0, 5);
    assert_eq!(body.get("dice_rolls_limit").and_then(|v| v.as_i64()), Some(5));
    assert_eq!(body.get("can_roll").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(body.get("unlimited").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(body.get("entitlement").and_then(|v| v.as_str()), Some("free"));
    assert_eq!(body.get("daily_ad_cap").and_then(|v| v.as_i64()), Some(5));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_stale_counters_as_reset(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("stale@example.com").await.unwrap();
    let yesterday = Utc::now().date_naive() - Duration::days(1);
    ctx.fixtures
        .set_rolls(user.id, 5, 2, Some(yesterday))
        .await
        .unwrap();
    ctx.fixtures
        .set_ads(user.id, 5, Some(yesterday))
        .await
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/usage/status", &ctx.token_for(&user.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    // Tokens survive the day boundary, counters do not
    let body = response.body.as_ref().unwrap();
    assert_usage_status(body, 0, 2, 7);
    assert_eq!(body.get("ads_watched_today").and_then(|v| v.as_i64()), Some(0));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_exhausted_allowance(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("spent@example.com").await.unwrap();
    ctx.fixtures
        .set_rolls(user.id, 5, 0, Some(Utc::now().date_naive()))
        .await
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/usage/status", &ctx.token_for(&user.id))
        .await
        .unwrap();

    let body = response.body.as_ref().unwrap();
    assert_usage_status(body, 5, 0, 0);
    assert_eq!(body.get("can_roll").and_then(|v| v.as_bool()), Some(false));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_grant_a_token_per_watched_ad(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("ads@example.com").await.unwrap();
    ctx.fixtures
        .set_rolls(user.id, 5, 0, Some(Utc::now().date_naive()))
        .await
        .unwrap();
    let token = ctx.token_for(&user.id);

    let response = ctx
        .client
        .post_with_auth("/api/usage/watch-ad", &json!({}), &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("success").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(body.get("extra_roll_tokens").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(body.get("ads_watched_today").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(body.get("ads_remaining_today").and_then(|v| v.as_i64()), Some(4));
    assert_eq!(body.get("remaining_rolls").and_then(|v| v.as_i64()), Some(1));

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.total_ads_watched, 1);

    // The token buys exactly one more roll
    let response = ctx
        .client
        .post_with_auth("/api/roll", &json!({ "mode": "single" }), &token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_ads_past_the_daily_cap(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("binge@example.com").await.unwrap();
    let token = ctx.token_for(&user.id);

    for _ in 0..5 {
        ctx.client
            .post_with_auth("/api/usage/watch-ad", &json!({}), &token)
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    let response = ctx
        .client
        .post_with_auth("/api/usage/watch-ad", &json!({}), &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::TOO_MANY_REQUESTS)
        .assert_error_message("Daily ad limit of 5 reached");

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.extra_roll_tokens, 5);
    assert_eq!(stored.ads_watched_today, 5);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_restart_the_ad_count_on_a_new_day(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("rollover@example.com").await.unwrap();
    let today = Utc::now().date_naive();
    ctx.fixtures
        .set_ads(user.id, 5, Some(today - Duration::days(1)))
        .await
        .unwrap();

    let response = ctx
        .client
        .post_with_auth("/api/usage/watch-ad", &json!({}), &ctx.token_for(&user.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response
            .body
            .as_ref()
            .and_then(|b| b.get("ads_watched_today"))
            .and_then(|v| v.as_i64()),
        Some(1)
    );

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.ads_watch_date, Some(today));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_unavailable_when_ad_rewards_are_disabled(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("noads@example.com").await.unwrap();

    let result = ctx.usage_service(false).grant_ad_token(user.id).await;

    assert!(matches!(result, Err(UsageServiceError::AdRewardsDisabled)));

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.extra_roll_tokens, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_missing_accounts(ctx: &TestContext) {
    let service = ctx.usage_service(true);

    let result = service.consume_roll(Uuid::new_v4()).await;
    assert!(matches!(result, Err(UsageServiceError::NotFound)));

    let result = service.grant_ad_token(Uuid::new_v4()).await;
    assert!(matches!(result, Err(UsageServiceError::NotFound)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_consume_base_allowance_before_tokens(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("order@example.com").await.unwrap();
    ctx.fixtures
        .set_rolls(user.id, 4, 1, Some(Utc::now().date_naive()))
        .await
        .unwrap();
    let service = ctx.usage_service(true);

    match service.consume_roll(user.id).await.unwrap() {
        RollOutcome::Consumed { source, account } => {
            assert_eq!(source, RollSource::BaseAllowance);
            assert_eq!(account.dice_rolls_used, 5);
            assert_eq!(account.extra_roll_tokens, 1);
        }
        other => panic!("Expected a consumed roll, got {:?}", other),
    }

    match service.consume_roll(user.id).await.unwrap() {
        RollOutcome::Consumed { source, account } => {
            assert_eq!(source, RollSource::ExtraToken);
            assert_eq!(account.extra_roll_tokens, 0);
        }
        other => panic!("Expected a consumed roll, got {:?}", other),
    }

    assert_eq!(service.consume_roll(user.id).await.unwrap(), RollOutcome::Denied);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_record_rolls_for_demo_accounts(ctx: &TestContext) {
    let user = ctx.fixtures.create_demo_user("demo@example.com").await.unwrap();
    let service = ctx.usage_service(true);

    for _ in 0..10 {
        assert_eq!(service.consume_roll(user.id).await.unwrap(), RollOutcome::Unlimited);
    }

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.dice_rolls_used, 0);
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_grant_the_last_roll_to_exactly_one_request(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("race@example.com").await.unwrap();
    ctx.fixtures
        .set_rolls(user.id, 4, 0, Some(Utc::now().date_naive()))
        .await
        .unwrap();
    let service = ctx.usage_service(true);

    let (a, b, c) = tokio::join!(
        service.consume_roll(user.id),
        service.consume_roll(user.id),
        service.consume_roll(user.id),
    );

    let outcomes = [a.unwrap(), b.unwrap(), c.unwrap()];
    let consumed = outcomes.iter().filter(|o| o.is_allowed()).count();
    assert_eq!(consumed, 1);

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.dice_rolls_used, 5);
}

#[test_context(TestContext)]
#[tokio::test]
#[serial]
async fn it_should_never_grant_more_ads_than_the_cap(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("adrace@example.com").await.unwrap();
    ctx.fixtures
        .set_ads(user.id, 4, Some(Utc::now().date_naive()))
        .await
        .unwrap();
    let service = ctx.usage_service(true);

    let (a, b) = tokio::join!(service.grant_ad_token(user.id), service.grant_ad_token(user.id));

    let granted = [a.unwrap(), b.unwrap()]
        .iter()
        .filter(|o| matches!(o, AdRewardOutcome::Granted(_)))
        .count();
    assert_eq!(granted, 1);

    let stored = ctx.fixtures.get_user(user.id).await.unwrap();
    assert_eq!(stored.ads_watched_today, 5);
    assert_eq!(stored.extra_roll_tokens, 1);
}
