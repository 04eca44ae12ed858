// ABOUTME: Tests for MockRecipeProvider CRUD, filtering, pagination, and latency simulation
// ABOUTME: Validates the service contract the screens depend on, including failure results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recette_core::errors::ErrorCode;
use recette_core::models::{Ingredient, RecipeDraft, RecipeUpdate};
use recette_core::pagination::PageParams;
use recette_core::providers::{LatencyProfile, MockRecipeProvider, RecipeFilter, RecipeProvider};
use std::time::Duration;

fn instant_provider() -> MockRecipeProvider {
    MockRecipeProvider::seeded().with_latency(LatencyProfile::instant())
}

fn draft(title: &str) -> RecipeDraft {
    RecipeDraft::new(title)
}

#[tokio::test]
async fn test_get_recipes_unfiltered_single_page() {
    let provider = instant_provider();
    let page = provider
        .get_recipes(PageParams::new(1, 10), &RecipeFilter::none())
        .await
        .unwrap();

    assert_eq!(page.total_count, 3);
    assert_eq!(page.data.len(), 3);
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_get_recipes_paginates_across_pages() {
    let provider = instant_provider();

    let first = provider
        .get_recipes(PageParams::new(1, 2), &RecipeFilter::none())
        .await
        .unwrap();
    assert_eq!(first.data.len(), 2);
    assert!(first.has_more);
    assert_eq!(first.total_count, 3);

    let second = provider
        .get_recipes(PageParams::new(2, 2), &RecipeFilter::none())
        .await
        .unwrap();
    assert_eq!(second.data.len(), 1);
    assert!(!second.has_more);
    // No overlap between pages
    assert!(first.data.iter().all(|r| r.id != second.data[0].id));
}

#[tokio::test]
async fn test_category_filter_is_exact_match() {
    let provider = instant_provider();
    let page = provider
        .get_recipes(PageParams::default(), &RecipeFilter::by_category("Italian"))
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert!(page.data.iter().all(|r| r.category == "Italian"));

    let none = provider
        .get_recipes(PageParams::default(), &RecipeFilter::by_category("italian"))
        .await
        .unwrap();
    assert_eq!(none.total_count, 0);
}

#[tokio::test]
async fn test_search_matches_ingredient_names_case_insensitively() {
    let provider = instant_provider();

    // "Wakame" appears only as an ingredient of the miso soup sample
    let page = provider
        .get_recipes(PageParams::default(), &RecipeFilter::by_search("WAKAME"))
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
    assert_eq!(page.data[0].title, "Everyday Miso Soup");
}

#[tokio::test]
async fn test_search_total_count_reflects_filtered_set() {
    let provider = instant_provider();

    // "Eggs" is an ingredient of two sample recipes
    let page = provider
        .get_recipes(PageParams::new(1, 1), &RecipeFilter::by_search("eggs"))
        .await
        .unwrap();

    assert_eq!(page.total_count, 2);
    assert_eq!(page.data.len(), 1);
    assert!(page.has_more);
}

#[tokio::test]
async fn test_get_recipe_by_id_and_not_found() {
    let provider = instant_provider();

    let recipe = provider.get_recipe("recipe-1").await.unwrap();
    assert_eq!(recipe.id, "recipe-1");

    let err = provider.get_recipe("ghost").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_create_assigns_fresh_identity_and_prepends() {
    let provider = instant_provider();

    let mut d = draft("Weeknight Stir Fry");
    d.ingredients = vec![Ingredient::new("Broccoli", "1 head")];
    let created = provider.create_recipe(d).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.user_id, provider.current_user().id);

    let page = provider
        .get_recipes(PageParams::default(), &RecipeFilter::none())
        .await
        .unwrap();
    assert_eq!(page.total_count, 4);
    assert_eq!(page.data[0].id, created.id);

    // Fresh ids never collide with existing entries
    let again = provider.create_recipe(draft("Another")).await.unwrap();
    assert!(page.data.iter().all(|r| r.id != again.id));
    assert_ne!(created.id, again.id);
}

#[tokio::test]
async fn test_create_rejects_blank_title_without_mutating() {
    let provider = instant_provider();

    let err = provider.create_recipe(draft("   ")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(provider.recipe_count().unwrap(), 3);
}

#[tokio::test]
async fn test_update_merges_fields_and_bumps_updated_at() {
    let provider = instant_provider();
    let before = provider.get_recipe("recipe-1").await.unwrap();

    let update = RecipeUpdate {
        title: Some("Carbonara, Improved".to_owned()),
        servings: Some("4 servings".to_owned()),
        ..RecipeUpdate::default()
    };
    let updated = provider.update_recipe("recipe-1", update).await.unwrap();

    assert_eq!(updated.title, "Carbonara, Improved");
    assert_eq!(updated.servings, "4 servings");
    assert_eq!(updated.category, before.category);
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at > before.updated_at);

    let err = provider
        .update_recipe("ghost", RecipeUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_removes_entry_and_misses_fail() {
    let provider = instant_provider();

    provider.delete_recipe("recipe-2").await.unwrap();
    assert_eq!(provider.recipe_count().unwrap(), 2);

    let err = provider.delete_recipe("recipe-2").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(provider.recipe_count().unwrap(), 2);
}

#[tokio::test]
async fn test_toggle_favorite_is_an_involution_and_bumps_updated_at() {
    let provider = instant_provider();
    let original = provider.get_recipe("recipe-1").await.unwrap();

    let once = provider.toggle_favorite("recipe-1").await.unwrap();
    assert_eq!(once.is_favorite, !original.is_favorite);
    assert!(once.updated_at > original.updated_at);

    let twice = provider.toggle_favorite("recipe-1").await.unwrap();
    assert_eq!(twice.is_favorite, original.is_favorite);
    assert!(twice.updated_at > once.updated_at);

    let err = provider.toggle_favorite("ghost").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_isolated_instances_share_no_state() {
    let a = MockRecipeProvider::new().with_latency(LatencyProfile::instant());
    let b = MockRecipeProvider::new().with_latency(LatencyProfile::instant());

    a.create_recipe(draft("Only in A")).await.unwrap();

    assert_eq!(a.recipe_count().unwrap(), 1);
    assert_eq!(b.recipe_count().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_realistic_latency_delays_resolution() {
    let provider = MockRecipeProvider::seeded();
    let start = tokio::time::Instant::now();

    provider
        .get_recipes(PageParams::default(), &RecipeFilter::none())
        .await
        .unwrap();

    // The paused clock auto-advances through the simulated 800ms list delay
    assert!(start.elapsed() >= Duration::from_millis(800));
}
