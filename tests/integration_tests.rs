//! Integration tests for the courtside tournament service
//!
//! These tests validate the entire system working together, including:
//! - Complete signup and matchmaking workflows over the HTTP API
//! - Policy selection and deterministic closest-rating pairing
//! - Error handling and recovery
//! - Concurrent signups against the shared roster

// Modules for organizing tests
mod fixtures;

use axum::http::StatusCode;
use courtside::types::MatchPolicy;
use serde_json::json;

use fixtures::{
    create_test_router, create_test_router_with_policy, get_json, get_text, post_json,
    signup_payload, uniform_stats,
};

#[tokio::test]
async fn test_complete_tournament_workflow() {
    let app = create_test_router();

    // Step 1: Welcome message
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to 1v1 World!");

    // Step 2: Predict a rating without signing up
    let (status, body) = post_json(&app, "/predict", &uniform_stats(6.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player rating"], 11.8);

    // Step 3: Two players sign up
    let (status, body) = post_json(&app, "/signup", &signup_payload("Ava", 5.0)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["player"]["id"], 1);
    assert_eq!(body["player"]["rating"], 9.83);

    let (status, body) = post_json(&app, "/signup", &signup_payload("Ben", 6.0)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["player"]["id"], 2);
    assert_eq!(body["player"]["rating"], 11.8);

    // Step 4: Roster listing reflects both signups
    let (status, body) = get_json(&app, "/players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    // Step 5: Matchmaking pairs them
    let (status, body) = get_json(&app, "/match").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Match found!");
    assert_eq!(body["match"]["rating_difference"], 1.97);

    // Step 6: Tournament announcement
    let (status, body) = get_json(&app, "/tournament/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_players"], 2);

    // Step 7: Service statistics
    let (status, body) = get_json(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roster"]["total_players"], 2);
    assert_eq!(body["roster"]["average_rating"], 10.82);

    println!("✅ Complete tournament workflow test passed");
}

#[tokio::test]
async fn test_closest_rating_always_pairs_the_middle_player() {
    let app = create_test_router();

    // Ratings come out as 9.83, 10.03, and 17.7, so whichever player is
    // drawn first, the middle player belongs to the closest pair.
    post_json(&app, "/signup", &signup_payload("Ava", 5.0)).await;
    post_json(&app, "/signup", &signup_payload("Ben", 5.1)).await;
    post_json(&app, "/signup", &signup_payload("Cara", 9.0)).await;

    for _ in 0..10 {
        let (status, body) = get_json(&app, "/match?policy=closest-rating").await;
        assert_eq!(status, StatusCode::OK);

        let name1 = body["match"]["player1"]["name"].as_str().unwrap();
        let name2 = body["match"]["player2"]["name"].as_str().unwrap();
        assert!(
            name1 == "Ben" || name2 == "Ben",
            "closest-rating pair {} vs {} skipped the middle player",
            name1,
            name2
        );
    }

    println!("✅ Closest-rating pairing test passed");
}

#[tokio::test]
async fn test_default_policy_flows_into_match_metrics() {
    let app = create_test_router_with_policy(MatchPolicy::Random);

    post_json(&app, "/signup", &signup_payload("Ava", 5.0)).await;
    post_json(&app, "/signup", &signup_payload("Ben", 6.0)).await;

    let (status, body) = get_json(&app, "/match").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Match found!");

    // The recorded policy label proves the configured default was used
    let (status, text) = get_text(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("policy=\"random\""));

    println!("✅ Default policy metrics test passed");
}

#[tokio::test]
async fn test_signup_validation_and_recovery() {
    let app = create_test_router();

    // Step 1: A valid signup takes id 1
    let (status, body) = post_json(&app, "/signup", &signup_payload("Ava", 5.0)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["player"]["id"], 1);

    // Step 2: Duplicate name is rejected, case-insensitively
    let (status, body) = post_json(&app, "/signup", &signup_payload("AVA", 6.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Player name 'AVA' is already taken");

    // Step 3: Out-of-range stat is rejected
    let mut payload = signup_payload("Ben", 5.0);
    payload["speed"] = json!(-2);
    let (status, _) = post_json(&app, "/signup", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Step 4: Missing fields are listed
    let (status, body) = post_json(&app, "/signup", &json!({ "name": "Ben" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missing_fields"].as_array().unwrap().len(), 9);

    // Step 5: Rejected signups never consumed an id
    let (status, body) = post_json(&app, "/signup", &signup_payload("Ben", 6.0)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["player"]["id"], 2);

    println!("✅ Signup validation and recovery test passed");
}

#[tokio::test]
async fn test_matchmaking_refuses_until_two_players() {
    let app = create_test_router();

    // No players at all
    let (status, body) = get_json(&app, "/match").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not enough players for matchmaking");
    assert_eq!(body["required_players"], 2);
    assert_eq!(body["current_players"], 0);

    // One player is still not enough, for the tournament either
    post_json(&app, "/signup", &signup_payload("Ava", 5.0)).await;

    let (status, body) = get_json(&app, "/match").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["current_players"], 1);

    let (status, body) = get_json(&app, "/tournament/start").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["current_players"], 1);

    println!("✅ Matchmaking refusal test passed");
}

#[tokio::test]
async fn test_tournament_message_format() {
    let app = create_test_router();

    post_json(&app, "/signup", &signup_payload("Ava", 5.0)).await;
    post_json(&app, "/signup", &signup_payload("Ben", 6.0)).await;

    let (status, body) = get_json(&app, "/tournament/start").await;
    assert_eq!(status, StatusCode::OK);

    let message = body["message"].as_str().unwrap();
    assert!(
        message == "Matchup:Ava vs Ben" || message == "Matchup:Ben vs Ava",
        "unexpected matchup message: {}",
        message
    );

    println!("✅ Tournament message format test passed");
}

#[tokio::test]
async fn test_prediction_does_not_register_players() {
    let app = create_test_router();

    let (status, _) = post_json(&app, "/predict", &uniform_stats(7.0)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, "/players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);

    println!("✅ Prediction isolation test passed");
}

#[tokio::test]
async fn test_concurrent_signups_get_unique_ids() {
    let app = create_test_router();

    // Fire 8 signups at once against the shared roster
    let mut tasks = Vec::new();
    for i in 0..8 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            let name = format!("Player {}", i);
            post_json(&app, "/signup", &signup_payload(&name, 5.0)).await
        }));
    }

    let results = futures::future::join_all(tasks).await;
    let mut ids = Vec::new();
    for result in results {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["player"]["id"].as_u64().unwrap());
    }

    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let (_, body) = get_json(&app, "/players").await;
    assert_eq!(body["count"], 8);

    println!("✅ Concurrent signup test passed");
}
