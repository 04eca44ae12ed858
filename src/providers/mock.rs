// ABOUTME: Mock recipe provider standing in for a remote backend during development
// ABOUTME: Per-instance RwLock backing store, simulated latency, and the staged analysis pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

//! # Mock Recipe Provider
//!
//! A provider implementation that simulates a remote backend:
//!
//! - Requires no network or credentials
//! - Supports dynamic recipe injection for tests
//! - Provides deterministic data for development and demos
//! - Sleeps a configurable artificial latency before every operation
//!
//! ## Backing Store
//!
//! Each instance owns its backing collection behind an `RwLock`; there is no
//! process-wide shared state, so tests can instantiate isolated providers.
//! Individual operations are serialized by the lock. Overlapping updates to
//! the same recipe id resolve last-write-wins; no cross-call transaction is
//! attempted.
//!
//! ## Latency
//!
//! Delays come from a [`LatencyProfile`] value on the instance.
//! [`LatencyProfile::instant`] removes them for unit tests; integration
//! tests drive the realistic profile under tokio's paused clock.

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeDraft, RecipeUpdate, User};
use crate::pagination::{Page, PageParams};
use crate::providers::analysis::{AnalysisProgress, VideoAnalysis, ANALYSIS_STAGES};
use crate::providers::core::{RecipeFilter, RecipeProvider};
use crate::samples;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

/// Provider name reported by [`MockRecipeProvider`]
pub const MOCK_PROVIDER: &str = "mock";

/// Artificial latency applied before each mock operation
///
/// The realistic profile mirrors the delays the app was tuned against;
/// `instant` zeroes everything for synchronous-feeling tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before the list operation
    pub list: Duration,
    /// Delay before a point lookup
    pub get: Duration,
    /// Delay before create
    pub create: Duration,
    /// Delay before update
    pub update: Duration,
    /// Delay before delete
    pub delete: Duration,
    /// Delay before favorite toggling
    pub toggle_favorite: Duration,
    /// Delay before each analysis pipeline stage
    pub analysis_stage: Duration,
    /// Delay before login
    pub login: Duration,
    /// Delay before logout / current-user lookups
    pub session: Duration,
}

impl LatencyProfile {
    /// The delays the original app simulates
    #[must_use]
    pub const fn realistic() -> Self {
        Self {
            list: Duration::from_millis(800),
            get: Duration::from_millis(600),
            create: Duration::from_millis(1000),
            update: Duration::from_millis(800),
            delete: Duration::from_millis(600),
            toggle_favorite: Duration::from_millis(400),
            analysis_stage: Duration::from_millis(1500),
            login: Duration::from_millis(1000),
            session: Duration::from_millis(500),
        }
    }

    /// No artificial latency; operations resolve immediately
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            toggle_favorite: Duration::ZERO,
            analysis_stage: Duration::ZERO,
            login: Duration::ZERO,
            session: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::realistic()
    }
}

/// Mock recipe provider for development, testing, and demonstrations
///
/// Owns an injectable in-memory backing collection and implements the full
/// [`RecipeProvider`] contract against it, including the staged
/// video-analysis simulation.
pub struct MockRecipeProvider {
    /// Backing recipe collection, insertion-ordered newest first
    recipes: Arc<RwLock<Vec<Recipe>>>,
    /// The user stamped as owner on created recipes
    current_user: User,
    /// Artificial latency applied before each operation
    latency: LatencyProfile,
}

impl MockRecipeProvider {
    /// Create an empty provider (no recipes) with the default mock user
    #[must_use]
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Create a provider pre-loaded with the given recipes
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
            current_user: samples::default_user(),
            latency: LatencyProfile::default(),
        }
    }

    /// Create a provider pre-loaded with the sample recipe set
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_recipes(samples::sample_recipes())
    }

    /// Replace the latency profile
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the user stamped as owner on created recipes
    #[must_use]
    pub fn with_current_user(mut self, user: User) -> Self {
        self.current_user = user;
        self
    }

    /// The user this provider stamps as owner on created recipes
    #[must_use]
    pub const fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Number of recipes currently in the backing collection
    ///
    /// # Errors
    ///
    /// Returns an internal error if the backing lock is poisoned.
    pub fn recipe_count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Recipe>>> {
        self.recipes
            .read()
            .map_err(|_| AppError::internal("RwLock poisoned: recipes lock"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Recipe>>> {
        self.recipes
            .write()
            .map_err(|_| AppError::internal("RwLock poisoned: recipes lock"))
    }
}

impl Default for MockRecipeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    fn name(&self) -> &'static str {
        MOCK_PROVIDER
    }

    async fn get_recipes(
        &self,
        params: PageParams,
        filter: &RecipeFilter,
    ) -> AppResult<Page<Recipe>> {
        sleep(self.latency.list).await;

        // Category filter first, then search, then pagination
        let filtered: Vec<Recipe> = self
            .read()?
            .iter()
            .filter(|r| filter.category.as_ref().map_or(true, |c| &r.category == c))
            .filter(|r| {
                filter
                    .search
                    .as_ref()
                    .map_or(true, |query| r.matches_search(query))
            })
            .cloned()
            .collect();

        debug!(
            page = params.page,
            page_size = params.page_size,
            total = filtered.len(),
            "listing recipes"
        );

        Ok(Page::paginate(filtered, params))
    }

    async fn get_recipe(&self, id: &str) -> AppResult<Recipe> {
        sleep(self.latency.get).await;

        self.read()?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    async fn create_recipe(&self, draft: RecipeDraft) -> AppResult<Recipe> {
        sleep(self.latency.create).await;

        // Reject before mutating anything
        draft.validate()?;

        let recipe = Recipe::from_draft(
            draft,
            Uuid::new_v4().to_string(),
            self.current_user.id.clone(),
            Utc::now(),
        );

        debug!(recipe_id = %recipe.id, title = %recipe.title, "recipe created");
        self.write()?.insert(0, recipe.clone());

        Ok(recipe)
    }

    async fn update_recipe(&self, id: &str, update: RecipeUpdate) -> AppResult<Recipe> {
        sleep(self.latency.update).await;

        let mut recipes = self.write()?;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        update.apply(recipe);
        recipe.updated_at = Utc::now();

        debug!(recipe_id = %id, "recipe updated");
        Ok(recipe.clone())
    }

    async fn delete_recipe(&self, id: &str) -> AppResult<()> {
        sleep(self.latency.delete).await;

        let mut recipes = self.write()?;
        let position = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recipe"))?;
        recipes.remove(position);

        debug!(recipe_id = %id, "recipe deleted");
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> AppResult<Recipe> {
        sleep(self.latency.toggle_favorite).await;

        let mut recipes = self.write()?;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        recipe.is_favorite = !recipe.is_favorite;
        recipe.updated_at = Utc::now();

        debug!(recipe_id = %id, is_favorite = recipe.is_favorite, "favorite toggled");
        Ok(recipe.clone())
    }

    async fn analyze_video(
        &self,
        url: &str,
        on_progress: &mut (dyn FnMut(AnalysisProgress) + Send),
    ) -> AppResult<VideoAnalysis> {
        debug!(%url, "starting video analysis");

        for stage in ANALYSIS_STAGES {
            sleep(self.latency.analysis_stage).await;
            on_progress(stage.report());
        }

        Ok(samples::extracted_recipe(url))
    }
}
