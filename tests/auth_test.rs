// ABOUTME: Tests for the mock authentication service
// ABOUTME: Validates login by email, failure results, and current-user lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recette_core::auth::MockAuth;
use recette_core::errors::ErrorCode;
use recette_core::providers::LatencyProfile;
use recette_core::samples;

fn instant_auth() -> MockAuth {
    MockAuth::new().with_latency(LatencyProfile::instant())
}

#[tokio::test]
async fn test_login_succeeds_for_known_email() {
    let auth = instant_auth();
    let user = auth.login("taro@example.com", "whatever").await.unwrap();
    assert_eq!(user.id, "user-1");
}

#[tokio::test]
async fn test_login_fails_for_unknown_email() {
    let auth = instant_auth();
    let err = auth.login("nobody@example.com", "pw").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_current_user_is_first_seeded_user() {
    let auth = instant_auth();
    let user = auth.current_user().await.unwrap();
    assert_eq!(user.id, samples::sample_users()[0].id);
}

#[tokio::test]
async fn test_current_user_fails_with_no_users() {
    let auth = MockAuth::with_users(Vec::new()).with_latency(LatencyProfile::instant());
    let err = auth.current_user().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_logout_completes() {
    let auth = instant_auth();
    auth.logout().await;
}
