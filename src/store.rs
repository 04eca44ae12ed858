// ABOUTME: Client-side recipe store holding the canonical collection and UI view state
// ABOUTME: All mutation goes through named total operations so invariants hold by construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

//! # Recipe Store
//!
//! The in-process authoritative holder of recipe data plus the UI-facing
//! derived state around it: the single selection slot, the filter/sort
//! inputs, and the loading/error status.
//!
//! Mutation happens only through the named operations on [`RecipeStore`].
//! Every operation is total: none of them panics, fails, or returns an
//! error. A miss on an id lookup is a no-op at this layer; failures are the
//! data service's business and arrive here only as [`set_error`] messages.
//!
//! Two invariants are maintained across operations:
//!
//! - every recipe in the collection has a unique `id`, and the collection is
//!   insertion-ordered (newest first) which is what "recent" sort means;
//! - the selection stays consistent with the collection: updating or
//!   deleting the selected recipe updates or clears the selection too. The
//!   selection may also reference a recipe fetched individually that is not
//!   in the bulk collection, so it is stored as its own value, not an index.
//!
//! [`set_error`]: RecipeStore::set_error

use crate::models::Recipe;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort modes for the recipe list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first (the collection's insertion order)
    #[default]
    Recent,
    /// Favorites first, otherwise insertion order
    Favorite,
    /// Title A-Z, case-insensitive
    Alphabetical,
}

impl SortBy {
    /// Parse a sort mode from a string (case-insensitive)
    ///
    /// Unknown values fall back to `Recent`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "favorite" => Self::Favorite,
            "alphabetical" => Self::Alphabetical,
            _ => Self::Recent,
        }
    }

    /// Get the string representation used by the view layer
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Favorite => "favorite",
            Self::Alphabetical => "alphabetical",
        }
    }
}

/// Client-side recipe store: collection, selection, and view state
///
/// The fields are private by design; screens read through the accessors and
/// mutate through the named operations, so ad-hoc external mutation cannot
/// break the store's invariants.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    selected_recipe: Option<Recipe>,
    search_query: String,
    selected_category: Option<String>,
    sort_by: SortBy,
    is_loading: bool,
    error: Option<String>,
}

impl RecipeStore {
    /// Create an empty store with neutral view state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The recipe collection in insertion order (newest first)
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The currently selected recipe, if any
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    /// The current search query (empty string means no search filter)
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The current exact-match category filter
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// The current sort mode
    #[must_use]
    pub const fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last recorded error message, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The collection filtered and sorted by the held view state
    ///
    /// Applies the category filter (exact match), then the search query
    /// (case-insensitive over title, description, and ingredient names),
    /// then the sort mode. Does not mutate anything; the underlying
    /// collection keeps its insertion order.
    #[must_use]
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        let mut visible: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| {
                self.selected_category
                    .as_ref()
                    .map_or(true, |c| &r.category == c)
            })
            .filter(|r| self.search_query.is_empty() || r.matches_search(&self.search_query))
            .collect();

        match self.sort_by {
            SortBy::Recent => {}
            SortBy::Favorite => {
                // Stable sort keeps insertion order within each group
                visible.sort_by_key(|r| !r.is_favorite);
            }
            SortBy::Alphabetical => {
                visible.sort_by(|a, b| {
                    let ord = a.title.to_lowercase().cmp(&b.title.to_lowercase());
                    if ord == Ordering::Equal {
                        a.id.cmp(&b.id)
                    } else {
                        ord
                    }
                });
            }
        }

        visible
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Replace the collection wholesale after a successful full fetch
    ///
    /// Clears any recorded error and ends the loading phase.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.is_loading = false;
        self.error = None;
    }

    /// Insert a recipe at the front of the collection (newest first)
    ///
    /// The caller guarantees a valid recipe with an id not already present.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.insert(0, recipe);
    }

    /// Replace the collection entry whose id matches; no-op on a miss
    ///
    /// If the replaced entry is currently selected, the selection is updated
    /// to the new value as well.
    pub fn update_recipe(&mut self, recipe: Recipe) {
        if let Some(existing) = self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            *existing = recipe.clone();
        }
        if let Some(selected) = &mut self.selected_recipe {
            if selected.id == recipe.id {
                *selected = recipe;
            }
        }
    }

    /// Remove the entry with the given id; no-op on a miss
    ///
    /// Clears the selection if the removed recipe was selected.
    pub fn delete_recipe(&mut self, id: &str) {
        self.recipes.retain(|r| r.id != id);
        if self.selected_recipe.as_ref().is_some_and(|s| s.id == id) {
            self.selected_recipe = None;
        }
    }

    /// Set the single-selection slot
    ///
    /// No validation that the recipe exists in the collection; a recipe
    /// fetched individually may be selected before the bulk collection
    /// contains it.
    pub fn select_recipe(&mut self, recipe: Recipe) {
        self.selected_recipe = Some(recipe);
    }

    /// Clear the single-selection slot
    pub fn clear_selected_recipe(&mut self) {
        self.selected_recipe = None;
    }

    /// Flip `is_favorite` on the matching collection entry and, separately,
    /// on the selection if its id matches
    ///
    /// Both copies are flipped because they may be the same logical recipe
    /// held in two places; skipping either would let them drift apart.
    pub fn toggle_favorite(&mut self, id: &str) {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            recipe.is_favorite = !recipe.is_favorite;
        }
        if let Some(selected) = &mut self.selected_recipe {
            if selected.id == id {
                selected.is_favorite = !selected.is_favorite;
            }
        }
    }

    /// Set the search query; does not touch the collection
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Set or clear the exact-match category filter; does not touch the collection
    pub fn set_selected_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// Set the sort mode; does not touch the collection
    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    /// Set the loading flag
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Record an error message, or clear it with `None`
    ///
    /// Recording an error always ends the loading phase so the view layer
    /// cannot be left in a perpetual spinner state.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.is_loading = false;
    }
}
