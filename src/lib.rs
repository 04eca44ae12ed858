// ABOUTME: Main library entry point for the Recette client-side core
// ABOUTME: Recipe store, data provider contract, and mock backend for the recipe-capture app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

#![deny(unsafe_code)]

//! # Recette Core
//!
//! The client-side core of the Recette recipe-capture app: the recipe
//! store, the data-service contract, and a mock backend that simulates a
//! remote API. Screens, navigation, and styling live elsewhere and consume
//! this crate.
//!
//! ## Architecture
//!
//! - **Models**: plain data shapes for recipes, ingredients, and users
//! - **Store**: the in-process authoritative recipe collection plus
//!   UI-facing selection/filter/sort/status state, mutated only through
//!   named total operations
//! - **Providers**: the [`RecipeProvider`] seam and a mock implementation
//!   with per-instance state, simulated latency, and the staged
//!   video-analysis pipeline
//! - **Auth**: a mock login/session service over seeded users
//!
//! Control flow: the view layer calls a provider, then writes the result
//! into the store through its operations, then re-renders from store state.
//! Provider failures come back as [`AppError`] values, never panics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use recette_core::providers::{MockRecipeProvider, RecipeFilter, RecipeProvider};
//! use recette_core::pagination::PageParams;
//! use recette_core::store::RecipeStore;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let provider = MockRecipeProvider::seeded();
//!     let mut store = RecipeStore::new();
//!
//!     store.set_loading(true);
//!     match provider
//!         .get_recipes(PageParams::default(), &RecipeFilter::none())
//!         .await
//!     {
//!         Ok(page) => store.set_recipes(page.data),
//!         Err(err) => store.set_error(Some(err.to_string())),
//!     }
//! }
//! ```
//!
//! [`RecipeProvider`]: providers::RecipeProvider
//! [`AppError`]: errors::AppError

/// Mock authentication service
pub mod auth;

/// Unified error handling: `AppError`, `ErrorCode`, `AppResult`
pub mod errors;

/// Logging configuration and tracing setup
pub mod logging;

/// Domain models: recipes, ingredients, users, request payloads
pub mod models;

/// Page-based pagination types for list operations
pub mod pagination;

/// Data provider contract, the mock backend, and the analysis pipeline
pub mod providers;

/// Seed data for the mock backend
pub mod samples;

/// Client-side recipe store and view state
pub mod store;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Difficulty, Ingredient, Recipe, RecipeDraft, RecipeUpdate, SourceType, User};
pub use pagination::{Page, PageParams};
pub use store::{RecipeStore, SortBy};
