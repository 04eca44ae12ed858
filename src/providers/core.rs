// ABOUTME: Core provider trait defining the data-service contract for recipe operations
// ABOUTME: Screens depend on this seam so the mock backend can be swapped for a real one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

//! # Recipe Provider Contract
//!
//! The [`RecipeProvider`] trait is the boundary between the view layer and
//! whatever backend serves recipe data. Every operation is a suspension
//! point that resumes with a definite result: success with a payload or a
//! failure carried as an [`AppError`] value. Nothing is thrown past this
//! boundary.
//!
//! Once issued, an operation runs to completion; there is no cancellation.
//! Progress for [`analyze_video`] is delivered through an out-of-band
//! callback, one report per pipeline stage, strictly in order.
//!
//! [`AppError`]: crate::errors::AppError
//! [`analyze_video`]: RecipeProvider::analyze_video

use crate::errors::AppResult;
use crate::models::{Recipe, RecipeDraft, RecipeUpdate};
use crate::pagination::{Page, PageParams};
use crate::providers::analysis::{AnalysisProgress, VideoAnalysis};
use async_trait::async_trait;

/// Optional filters for the list operation
///
/// The category filter is an exact match against `Recipe::category`; the
/// search filter is a case-insensitive substring match over title,
/// description, and ingredient names. Category is applied first, then
/// search, then pagination.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Exact-match category filter
    pub category: Option<String>,
    /// Case-insensitive substring search
    pub search: Option<String>,
}

impl RecipeFilter {
    /// No filtering; the full collection is paginated
    #[must_use]
    pub const fn none() -> Self {
        Self {
            category: None,
            search: None,
        }
    }

    /// Filter by exact category match
    #[must_use]
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search: None,
        }
    }

    /// Filter by search query
    #[must_use]
    pub fn by_search(search: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(search.into()),
        }
    }
}

/// Core recipe data provider trait
///
/// All implementations must be `Send + Sync` for concurrent access across
/// async tasks. Results are data: lookup misses come back as not-found
/// errors, validation failures as invalid-input errors, and no operation
/// panics.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get provider name (e.g., "mock")
    fn name(&self) -> &'static str;

    /// List recipes with optional filters and page-based pagination
    ///
    /// `total_count` on the returned page is the size of the filtered set,
    /// not of the full collection.
    async fn get_recipes(
        &self,
        params: PageParams,
        filter: &RecipeFilter,
    ) -> AppResult<Page<Recipe>>;

    /// Get a single recipe by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no recipe has the given id.
    async fn get_recipe(&self, id: &str) -> AppResult<Recipe>;

    /// Create a recipe from a draft
    ///
    /// The provider assigns a unique id, sets both timestamps to now, and
    /// stamps the current user as owner. The created recipe is prepended to
    /// the collection (newest first) and returned.
    ///
    /// # Errors
    ///
    /// Returns a validation error, before any state is mutated, if the
    /// draft's title is empty.
    async fn create_recipe(&self, draft: RecipeDraft) -> AppResult<Recipe>;

    /// Merge partial fields into an existing recipe
    ///
    /// Refreshes `updated_at` on success and returns the updated entity.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no recipe has the given id.
    async fn update_recipe(&self, id: &str, update: RecipeUpdate) -> AppResult<Recipe>;

    /// Delete a recipe by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no recipe has the given id.
    async fn delete_recipe(&self, id: &str) -> AppResult<()>;

    /// Flip a recipe's favorite flag
    ///
    /// Refreshes `updated_at` and returns the updated entity. Applying the
    /// operation twice restores the original flag.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no recipe has the given id.
    async fn toggle_favorite(&self, id: &str) -> AppResult<Recipe>;

    /// Run the video-analysis pipeline for a `URL`
    ///
    /// Invokes `on_progress` once per pipeline stage, strictly in order
    /// (progress 20, 40, 60, 80, 100), then resolves with the extraction
    /// result. The result's recipe draft carries `source_type = youtube`
    /// and `source_url` equal to the input `URL`.
    async fn analyze_video(
        &self,
        url: &str,
        on_progress: &mut (dyn FnMut(AnalysisProgress) + Send),
    ) -> AppResult<VideoAnalysis>;
}
