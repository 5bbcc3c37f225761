use actix_web::{App, http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use morefans::routes;

mod common;

#[actix_web::test]
async fn test_tip_moves_balance_to_team() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/teams/{}/tip?user_id=fan-user-123", cobra_id))
        .set_json(json!({"amount": 100}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "Tipped 100 to Project COBRA"})
    );

    let req = test::TestRequest::get()
        .uri("/api/wallet/balance?user_id=fan-user-123")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"balance": 900}));

    assert_eq!(ctx.team_earnings(&cobra_id).await.unwrap(), 100);
}

#[actix_web::test]
async fn test_negative_tip_is_rejected() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    for amount in [-5, 0] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/teams/{}/tip", cobra_id))
            .set_json(json!({ "amount": amount }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Invalid amount"}));
    }

    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 1000);
    assert_eq!(ctx.team_earnings(&cobra_id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_missing_amount_is_rejected() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/teams/{}/tip", cobra_id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 1000);
}

#[actix_web::test]
async fn test_malformed_body_is_rejected() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/teams/{}/tip", cobra_id))
        .set_json(json!({"amount": "lots"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 1000);
}

#[actix_web::test]
async fn test_tip_over_balance_is_rejected() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/teams/{}/tip", cobra_id))
        .set_json(json!({"amount": 1001}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Insufficient balance"}));
    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 1000);
    assert_eq!(ctx.team_earnings(&cobra_id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_tip_entire_balance() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let uri = format!("/api/teams/{}/tip", cobra_id);
    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(json!({"amount": 1000}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 0);

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(json!({"amount": 1}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(ctx.team_earnings(&cobra_id).await.unwrap(), 1000);
}

#[actix_web::test]
async fn test_tip_unknown_team_or_user() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/teams/missing/tip")
        .set_json(json!({"amount": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "User or Team not found"}));

    let req = test::TestRequest::post()
        .uri(&format!("/api/teams/{}/tip?user_id=ghost", cobra_id))
        .set_json(json!({"amount": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 1000);
    assert_eq!(ctx.team_earnings(&cobra_id).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_tips_from_several_users_accumulate() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let cobra_id = ctx.cobra_id().await.unwrap();
    let other = ctx.create_fake_fan().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    for (user_id, amount) in [
        (common::FAN_USER_ID, 250),
        (other.user_id.as_str(), 40),
        (common::FAN_USER_ID, 10),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/teams/{}/tip?user_id={}", cobra_id, user_id))
            .set_json(json!({ "amount": amount }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    assert_eq!(ctx.balance(common::FAN_USER_ID).await.unwrap(), 740);
    assert_eq!(ctx.balance(&other.user_id).await.unwrap(), 960);
    assert_eq!(ctx.team_earnings(&cobra_id).await.unwrap(), 300);
}

#[actix_web::test]
async fn test_balance_defaults_to_fan_and_404s_for_unknown() {
    common::setup_test_env();
    let ctx = common::TestContext::seeded().await.unwrap();
    let app =
        test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/api/wallet/balance").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"balance": 1000}));

    let req = test::TestRequest::get()
        .uri("/api/wallet/balance?user_id=ghost")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "User not found"}));
}
