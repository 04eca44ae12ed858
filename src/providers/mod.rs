// ABOUTME: Data provider seam: the service contract and its mock implementation
// ABOUTME: Screens talk to a RecipeProvider; the mock stands in for a remote backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

/// Video-analysis pipeline stages and result types
pub mod analysis;

/// Core provider trait and request types
pub mod core;

/// Mock provider simulating a remote backend with artificial latency
pub mod mock;

pub use analysis::{AnalysisProgress, AnalysisStep, VideoAnalysis, ANALYSIS_STAGES};
pub use core::{RecipeFilter, RecipeProvider};
pub use mock::{LatencyProfile, MockRecipeProvider};
