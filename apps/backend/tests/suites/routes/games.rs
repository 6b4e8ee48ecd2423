use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_response;
use serde_json::{json, Value};

use crate::support::auth::bearer_header;
use crate::support::create_test_app;
use crate::support::factory::{create_game, create_started_game, memory_state, seed_caller};

#[actix_web::test]
async fn create_game_returns_201_for_caller() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let auth = bearer_header(owner.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "name": "Tombolata" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Tombolata");
    assert_eq!(body["owner_id"], owner.id);
    assert_eq!(body["phase"], "CREATED");
    assert_eq!(body["is_active"], false);
    assert!(body["started_at"].is_null());
}

#[actix_web::test]
async fn create_game_requires_caller_role() {
    let (store, state) = memory_state().await;
    let plain = store.add_user("no-role");
    let auth = bearer_header(plain.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "name": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "INSUFFICIENT_ROLE", StatusCode::FORBIDDEN, None).await;
}

#[actix_web::test]
async fn create_game_rejects_empty_name() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let auth = bearer_header(owner.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "INVALID_GAME_NAME", StatusCode::BAD_REQUEST, None).await;
}

#[actix_web::test]
async fn lifecycle_over_http() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let game = create_game(&state, &owner).await;
    let auth = bearer_header(owner.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let start = |auth: &str| {
        test::TestRequest::post()
            .uri(&format!("/api/games/{}/start", game.id))
            .insert_header(("Authorization", auth.to_string()))
            .to_request()
    };

    let resp = test::call_service(&app, start(&auth)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["phase"], "STARTED");
    assert_eq!(body["is_active"], true);

    let resp = test::call_service(&app, start(&auth)).await;
    assert_problem_response(resp, "GAME_ALREADY_STARTED", StatusCode::CONFLICT, None).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/end", game.id))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["phase"], "ENDED");
}

#[actix_web::test]
async fn non_owner_gets_403() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let intruder = seed_caller(&store, "intruder");
    let game = create_game(&state, &owner).await;
    let auth = bearer_header(intruder.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{}/start", game.id))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "NOT_OWNER", StatusCode::FORBIDDEN, None).await;
}

#[actix_web::test]
async fn unknown_game_is_404() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let auth = bearer_header(owner.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/games/777/status")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, Some("777")).await;

    let req = test::TestRequest::post()
        .uri("/api/games/777/start")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}

#[actix_web::test]
async fn listings() {
    let (store, state) = memory_state().await;
    let alice = seed_caller(&store, "alice");
    let bob = seed_caller(&store, "bob");
    let idle = create_game(&state, &alice).await;
    let running = create_started_game(&state, &bob).await;
    let auth = bearer_header(alice.id, &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let ids = |body: &Value| -> Vec<i64> {
        body["games"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["id"].as_i64().unwrap())
            .collect()
    };

    let req = test::TestRequest::get().uri("/api/games").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec![running.id, idle.id]);

    let req = test::TestRequest::get().uri("/api/games?status=active").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec![running.id]);

    let req = test::TestRequest::get().uri("/api/games/active").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec![running.id]);

    let req = test::TestRequest::get()
        .uri("/api/games/mine")
        .insert_header(("Authorization", auth))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec![idle.id]);

    let req = test::TestRequest::get().uri("/api/games?status=paused").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "INVALID_STATUS_FILTER", StatusCode::BAD_REQUEST, None).await;
}

#[actix_web::test]
async fn card_check_is_public() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let card = store.add_card("c", "v1", (1..=15).collect());
    let game = create_started_game(&state, &owner).await;
    for n in [1, 2, 3] {
        state.games.draw_number(owner.id, game.id, n).await.unwrap();
    }
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/cards/{}", game.id, card.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["tier"], "TERNO");
    assert_eq!(body["tier_value"], 3);
    assert_eq!(body["description"], "Terno");

    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{}/cards/9999", game.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_response(resp, "CARD_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}
