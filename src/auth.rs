// ABOUTME: Mock authentication service: login by email, logout, and current-user lookup
// ABOUTME: Stands in for a real auth backend; no passwords are checked beyond presence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

//! Mock authentication over the seeded user set. The password argument is
//! accepted but not verified; login succeeds for any known email. This
//! mirrors the backend-less behavior the screens were built against and is
//! not an authentication protocol.

use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::providers::mock::LatencyProfile;
use crate::samples;
use tokio::time::sleep;
use tracing::debug;

/// Mock authentication service
///
/// Owns its user set per instance, like the recipe provider owns its
/// backing collection; tests can construct isolated instances.
pub struct MockAuth {
    users: Vec<User>,
    latency: LatencyProfile,
}

impl MockAuth {
    /// Create an auth service over the sample user set
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(samples::sample_users())
    }

    /// Create an auth service over a custom user set
    ///
    /// The first user is treated as the signed-in user for
    /// [`current_user`](Self::current_user).
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            latency: LatencyProfile::default(),
        }
    }

    /// Replace the latency profile
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Log in with an email address
    ///
    /// The password is not verified; this is a mock.
    ///
    /// # Errors
    ///
    /// Returns an invalid-credentials error if no user has the given email.
    pub async fn login(&self, email: &str, _password: &str) -> AppResult<User> {
        sleep(self.latency.login).await;

        self.users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .map(|user| {
                debug!(user_id = %user.id, "login succeeded");
                user
            })
            .ok_or_else(|| AppError::auth_invalid("Invalid credentials"))
    }

    /// Log out the current session
    pub async fn logout(&self) {
        sleep(self.latency.session).await;
        debug!("logged out");
    }

    /// Get the signed-in user
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the service has no users at all.
    pub async fn current_user(&self) -> AppResult<User> {
        sleep(self.latency.session).await;

        self.users
            .first()
            .cloned()
            .ok_or_else(|| AppError::not_found("User"))
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new()
    }
}
