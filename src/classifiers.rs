// ABOUTME: Discovery of per-exercise form classifier model files on disk
// ABOUTME: Reports which exercise types have a trained model available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use coach_core::constants::models::CLASSIFIER_SUFFIX;
use coach_intelligence::ExerciseType;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Which exercise types have a classifier model under the model directory
///
/// Models are discovered once at startup. Scoring never calls them; the
/// registry only feeds readiness reporting.
#[derive(Debug, Clone, Default)]
pub struct FormModelRegistry {
    model_path: PathBuf,
    models: BTreeMap<&'static str, Option<PathBuf>>,
}

impl FormModelRegistry {
    /// Scan `model_path` for `<exercise>_form_classifier.h5` files
    #[must_use]
    pub fn discover(model_path: &Path) -> Self {
        let models = ExerciseType::ALL
            .iter()
            .map(|exercise| {
                let candidate =
                    model_path.join(format!("{}{CLASSIFIER_SUFFIX}", exercise.as_str()));
                if candidate.is_file() {
                    info!(exercise.type = %exercise, path = %candidate.display(), "Form model found");
                    (exercise.as_str(), Some(candidate))
                } else {
                    warn!(
                        exercise.type = %exercise,
                        path = %candidate.display(),
                        "Form model not found"
                    );
                    (exercise.as_str(), None)
                }
            })
            .collect();

        Self {
            model_path: model_path.to_path_buf(),
            models,
        }
    }

    /// Directory that was scanned
    #[must_use]
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Model file for an exercise, if one was found
    #[doc(hidden)]
    #[must_use]
    pub fn model_for(&self, exercise: ExerciseType) -> Option<&Path> {
        self.models
            .get(exercise.as_str())
            .and_then(Option::as_deref)
    }

    /// Availability per exercise type, keyed by its request name
    #[must_use]
    pub fn availability(&self) -> BTreeMap<String, bool> {
        self.models
            .iter()
            .map(|(name, path)| ((*name).to_owned(), path.is_some()))
            .collect()
    }

    /// Number of exercise types with a model
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.models.values().filter(|path| path.is_some()).count()
    }
}
