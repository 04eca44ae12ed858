// ABOUTME: Seed data for the mock backend: sample users, sample recipes, and the analysis fixture
// ABOUTME: Deterministic content so demos and tests see the same collection every run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

use crate::models::{Difficulty, Ingredient, Recipe, RecipeDraft, SourceType, User};
use crate::providers::analysis::VideoAnalysis;
use chrono::{Duration, Utc};

/// The user the mock backend treats as signed in
#[must_use]
pub fn default_user() -> User {
    User {
        id: "user-1".to_owned(),
        email: "taro@example.com".to_owned(),
        name: "Taro Yamada".to_owned(),
        is_premium: false,
        created_at: Utc::now() - Duration::days(90),
    }
}

/// All known mock users
///
/// The first entry is the default signed-in user.
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        default_user(),
        User {
            id: "user-2".to_owned(),
            email: "hanako@example.com".to_owned(),
            name: "Hanako Sato".to_owned(),
            is_premium: true,
            created_at: Utc::now() - Duration::days(30),
        },
    ]
}

/// Sample recipes pre-loaded by `MockRecipeProvider::seeded`
///
/// Insertion-ordered newest first, all owned by the default user, with
/// distinct categories and ingredient names so filter and search paths are
/// exercised by the seed set alone.
#[must_use]
pub fn sample_recipes() -> Vec<Recipe> {
    let user = default_user();
    let now = Utc::now();

    let mut carbonara = RecipeDraft::new("Classic Carbonara");
    carbonara.description = Some("Rich and creamy pasta without cream".to_owned());
    carbonara.image_url = Some("https://via.placeholder.com/400x300".to_owned());
    carbonara.cooking_time = "20 min".to_owned();
    carbonara.servings = "2 servings".to_owned();
    carbonara.ingredients = vec![
        Ingredient::new("Spaghetti", "200g"),
        Ingredient::new("Guanciale", "80g"),
        Ingredient::new("Eggs", "2"),
        Ingredient::new("Parmesan", "40g"),
        Ingredient::new("Black pepper", "to taste"),
    ];
    carbonara.steps = vec![
        "Boil the pasta".to_owned(),
        "Crisp the guanciale".to_owned(),
        "Whisk eggs and cheese".to_owned(),
        "Toss off the heat".to_owned(),
        "Serve immediately".to_owned(),
    ];
    carbonara.category = "Italian".to_owned();
    carbonara.difficulty = Some(Difficulty::Medium);

    let mut miso_soup = RecipeDraft::new("Everyday Miso Soup");
    miso_soup.description = Some("Comforting soup with tofu and wakame".to_owned());
    miso_soup.cooking_time = "10 min".to_owned();
    miso_soup.servings = "4 servings".to_owned();
    miso_soup.ingredients = vec![
        Ingredient::new("Dashi stock", "800ml"),
        Ingredient::new("Miso paste", "3 tbsp"),
        Ingredient::new("Silken tofu", "150g"),
        Ingredient::new("Wakame", "2 tbsp"),
    ];
    miso_soup.steps = vec![
        "Bring dashi to a simmer".to_owned(),
        "Add tofu and wakame".to_owned(),
        "Dissolve the miso off the boil".to_owned(),
    ];
    miso_soup.category = "Japanese".to_owned();
    miso_soup.difficulty = Some(Difficulty::Easy);

    let mut pancakes = RecipeDraft::new("Fluffy Pancakes");
    pancakes.description = Some("Weekend breakfast stack".to_owned());
    pancakes.cooking_time = "25 min".to_owned();
    pancakes.servings = "3 servings".to_owned();
    pancakes.ingredients = vec![
        Ingredient::new("Flour", "200g"),
        Ingredient::new("Milk", "180ml"),
        Ingredient::new("Eggs", "2"),
        Ingredient::new("Baking powder", "2 tsp"),
        Ingredient::new("Maple syrup", "to serve"),
    ];
    pancakes.steps = vec![
        "Whisk the dry ingredients".to_owned(),
        "Fold in milk and eggs".to_owned(),
        "Cook until bubbles form, then flip".to_owned(),
    ];
    pancakes.category = "Breakfast".to_owned();
    pancakes.difficulty = Some(Difficulty::Easy);

    // Newest first: stagger created_at to match insertion order
    let mut recipes = vec![
        Recipe::from_draft(
            carbonara,
            "recipe-1".to_owned(),
            user.id.clone(),
            now - Duration::days(1),
        ),
        Recipe::from_draft(
            miso_soup,
            "recipe-2".to_owned(),
            user.id.clone(),
            now - Duration::days(3),
        ),
        Recipe::from_draft(
            pancakes,
            "recipe-3".to_owned(),
            user.id.clone(),
            now - Duration::days(7),
        ),
    ];
    recipes[1].is_favorite = true;

    recipes
}

/// The fixed extraction result returned by the analysis pipeline
///
/// The draft carries youtube provenance and the analyzed `URL`, ready for
/// the create operation.
#[must_use]
pub fn extracted_recipe(url: &str) -> VideoAnalysis {
    let mut recipe = RecipeDraft::new("Authentic Carbonara");
    recipe.description = Some("Recipe extracted from YouTube".to_owned());
    recipe.image_url = Some("https://via.placeholder.com/400x300".to_owned());
    recipe.cooking_time = "20 min".to_owned();
    recipe.servings = "2 servings".to_owned();
    recipe.ingredients = vec![
        Ingredient::new("Pasta", "200g"),
        Ingredient::new("Bacon", "80g"),
        Ingredient::new("Eggs", "2"),
        Ingredient::new("Parmesan cheese", "40g"),
        Ingredient::new("Black pepper", "to taste"),
    ];
    recipe.steps = vec![
        "Boil the pasta".to_owned(),
        "Fry the bacon".to_owned(),
        "Mix eggs and cheese".to_owned(),
        "Toss with the pasta".to_owned(),
        "Done".to_owned(),
    ];
    recipe.category = "Italian".to_owned();
    recipe.difficulty = Some(Difficulty::Medium);
    recipe.source_url = Some(url.to_owned());
    recipe.source_type = Some(SourceType::Youtube);

    VideoAnalysis {
        video_title: "Easy! How to Make Authentic Carbonara".to_owned(),
        channel_name: "Home Cooking Channel".to_owned(),
        thumbnail: "https://via.placeholder.com/480x360".to_owned(),
        recipe,
    }
}
