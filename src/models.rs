// ABOUTME: Domain entities for the recipe-capture app: recipes, ingredients, users
// ABOUTME: RecipeDraft and RecipeUpdate carry create/update request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

//! # Domain Models
//!
//! Plain data shapes shared between the store and the data providers. All
//! wire-shaped types serialize with camelCase field names so JSON payloads
//! match what the app's screens already consume.
//!
//! A [`Recipe`] is owned by a user and identified by an immutable `id`
//! assigned at creation. Its `updated_at` timestamp is refreshed on every
//! mutation; provenance (`source_url`/`source_type`) records whether it was
//! entered manually or extracted from a video.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single ingredient line within a recipe
///
/// Ingredients have no identity of their own; they are owned by their parent
/// recipe as an ordered sequence, and the order is the display order.
/// `amount` is a free-form string ("200g", "to taste") with no unit parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, matched by the search filter
    pub name: String,
    /// Free-form quantity description
    pub amount: String,
}

impl Ingredient {
    /// Create an ingredient from a name and a free-form amount
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Subjective difficulty rating for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Where a recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Entered by hand in the editor
    Manual,
    /// Extracted from a video by the analysis pipeline
    Youtube,
}

/// A cooking instruction set with ingredients, steps, and metadata
///
/// Identified by an immutable `id` unique within any collection that holds
/// it. `cooking_time` and `servings` are free-form display strings, not
/// validated or parsed. `steps` are ordered by execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: String,
    /// Recipe title (required, non-empty)
    pub title: String,
    /// Optional longer description, matched by the search filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `URL` of a cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form cooking time ("20 min")
    pub cooking_time: String,
    /// Free-form serving size ("2 servings")
    pub servings: String,
    /// Ordered ingredient list (order is display order)
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps (order is execution order)
    pub steps: Vec<String>,
    /// Free-form category used for exact-match filtering
    pub category: String,
    /// Subjective difficulty rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Whether the owning user marked this recipe as a favorite
    pub is_favorite: bool,
    /// Creation timestamp, set once by the create operation
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp, refreshed on every mutation
    pub updated_at: DateTime<Utc>,
    /// Source `URL` when the recipe was extracted from a video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Provenance of the recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Identifier of the owning user
    pub user_id: String,
}

impl Recipe {
    /// Build a full recipe from a draft, assigning identity and ownership
    ///
    /// The server side of the create operation: `id`, timestamps, and
    /// `user_id` are provider-assigned, everything else comes from the draft.
    #[must_use]
    pub fn from_draft(draft: RecipeDraft, id: String, user_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            cooking_time: draft.cooking_time,
            servings: draft.servings,
            ingredients: draft.ingredients,
            steps: draft.steps,
            category: draft.category,
            difficulty: draft.difficulty,
            is_favorite: draft.is_favorite,
            created_at: now,
            updated_at: now,
            source_url: draft.source_url,
            source_type: draft.source_type,
            user_id,
        }
    }

    /// Case-insensitive substring match over title, description, and
    /// ingredient names (any ingredient counts as a hit)
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
            || self
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(&needle))
    }
}

/// Create-request payload for a recipe
///
/// A [`Recipe`] minus the provider-assigned fields (`id`, timestamps,
/// `user_id`). The only validated field is `title`; everything else defaults
/// to an empty/neutral value and is accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cooking_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

impl RecipeDraft {
    /// Create a draft with the given title and neutral defaults everywhere else
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_url: None,
            cooking_time: String::new(),
            servings: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            category: String::new(),
            difficulty: None,
            is_favorite: false,
            source_url: None,
            source_type: None,
        }
    }

    /// Validate the draft for creation
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the title is empty or whitespace.
    /// No cross-field validation is performed; `cooking_time` and `servings`
    /// are accepted as free-form text.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::missing_field("title"));
        }
        Ok(())
    }
}

/// Partial update payload for a recipe
///
/// Every field is optional; only fields that are present are merged into the
/// existing entity. Identity (`id`), ownership (`user_id`), and `created_at`
/// are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

impl RecipeUpdate {
    /// Merge the present fields into an existing recipe
    ///
    /// Does not touch `updated_at`; the caller refreshes it as part of the
    /// mutation contract.
    pub fn apply(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(description) = self.description {
            recipe.description = Some(description);
        }
        if let Some(image_url) = self.image_url {
            recipe.image_url = Some(image_url);
        }
        if let Some(cooking_time) = self.cooking_time {
            recipe.cooking_time = cooking_time;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(steps) = self.steps {
            recipe.steps = steps;
        }
        if let Some(category) = self.category {
            recipe.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            recipe.difficulty = Some(difficulty);
        }
        if let Some(is_favorite) = self.is_favorite {
            recipe.is_favorite = is_favorite;
        }
        if let Some(source_url) = self.source_url {
            recipe.source_url = Some(source_url);
        }
        if let Some(source_type) = self.source_type {
            recipe.source_type = Some(source_type);
        }
    }
}

/// A user account as seen by the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: String,
    /// Login email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Whether the user is on a premium plan
    pub is_premium: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}
