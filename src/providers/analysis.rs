// ABOUTME: Video-analysis pipeline types: stages, progress reports, and the extraction result
// ABOUTME: The pipeline is a fixed linear sequence; progress is reported once per stage in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

//! # Video Analysis Pipeline
//!
//! The analysis operation walks a fixed five-stage pipeline:
//!
//! ```text
//! idle → fetching(20%) → analyzing(40%) → extracting(60%) → structuring(80%) → completed(100%)
//! ```
//!
//! Strictly linear: no branching, no retry, no skipping, and `completed` is
//! terminal. One [`AnalysisProgress`] report is delivered per stage, in
//! pipeline order. No failure path is modeled; the observed behavior of the
//! operation always succeeds, and inventing error cases here would change
//! the contract the screens were built against.

use crate::models::RecipeDraft;
use serde::{Deserialize, Serialize};

/// One stage of the video-analysis pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStep {
    /// Fetching video metadata
    Fetching,
    /// Analyzing the audio track
    Analyzing,
    /// Extracting the recipe
    Extracting,
    /// Structuring the extracted data
    Structuring,
    /// Terminal stage
    Completed,
}

/// The five pipeline stages in execution order
pub const ANALYSIS_STAGES: [AnalysisStep; 5] = [
    AnalysisStep::Fetching,
    AnalysisStep::Analyzing,
    AnalysisStep::Extracting,
    AnalysisStep::Structuring,
    AnalysisStep::Completed,
];

impl AnalysisStep {
    /// Overall progress percentage once this stage completes
    ///
    /// Fixed 20-point increments: 20, 40, 60, 80, 100.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        match self {
            Self::Fetching => 20,
            Self::Analyzing => 40,
            Self::Extracting => 60,
            Self::Structuring => 80,
            Self::Completed => 100,
        }
    }

    /// User-facing status message for this stage
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Fetching => "Fetching video metadata...",
            Self::Analyzing => "Analyzing audio track...",
            Self::Extracting => "Extracting recipe...",
            Self::Structuring => "Structuring recipe data...",
            Self::Completed => "Analysis complete!",
        }
    }

    /// Build the progress report delivered when this stage completes
    #[must_use]
    pub fn report(&self) -> AnalysisProgress {
        AnalysisProgress {
            step: *self,
            progress: self.progress(),
            message: self.message().to_owned(),
        }
    }
}

/// Progress report delivered to the caller once per completed stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisProgress {
    /// The stage that just completed
    pub step: AnalysisStep,
    /// Overall progress, 0-100 in 20-point increments
    pub progress: u8,
    /// User-facing status message
    pub message: String,
}

/// Result of a completed video analysis
///
/// Carries video metadata plus an extracted [`RecipeDraft`] tagged with
/// youtube provenance and the analyzed `URL`, ready to be passed to the
/// create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysis {
    /// Title of the analyzed video
    pub video_title: String,
    /// Name of the channel that published the video
    pub channel_name: String,
    /// Thumbnail `URL` for the video
    pub thumbnail: String,
    /// The extracted recipe, not yet created on the backend
    pub recipe: RecipeDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_progress_is_monotonic_in_20s() {
        let values: Vec<u8> = ANALYSIS_STAGES.iter().map(AnalysisStep::progress).collect();
        assert_eq!(values, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_completed_is_last_stage() {
        assert_eq!(ANALYSIS_STAGES[4], AnalysisStep::Completed);
    }

    #[test]
    fn test_step_serializes_lowercase() {
        let json = serde_json::to_string(&AnalysisStep::Structuring).unwrap();
        assert_eq!(json, "\"structuring\"");
    }
}
