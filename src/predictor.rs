// ==============================================================================
// predictor.rs - X Heterozygosity Sex Prediction
// ==============================================================================
// Description: Predicts biological sex from X-chromosome het call counts
// Author: Matt Barham
// Created: 2026-03-03
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   X_het >= female_cutoff -> female   (checked first)
//   X_het <= male_cutoff   -> male
//   otherwise              -> unknown
// ==============================================================================

use crate::models::PredictedSex;

/// Default inclusive lower bound for a female call
pub const DEFAULT_FEMALE_CUTOFF: i64 = 45;

/// Default inclusive upper bound for a male call
pub const DEFAULT_MALE_CUTOFF: i64 = 1;

/// Threshold-based sex predictor over X heterozygosity counts.
///
/// The cutoffs are independent and are not cross-validated. The female
/// branch is evaluated first, so if the cutoffs are inverted
/// (`female_cutoff <= male_cutoff`) the two ranges overlap, female wins on
/// the overlap, and no value is classified unknown (the unknown gap
/// `[male_cutoff + 1, female_cutoff - 1]` is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexPredictor {
    /// X het count at or above which a sample is called female
    pub female_cutoff: i64,
    /// X het count at or below which a sample is called male
    pub male_cutoff: i64,
}

impl Default for SexPredictor {
    fn default() -> Self {
        Self {
            female_cutoff: DEFAULT_FEMALE_CUTOFF,
            male_cutoff: DEFAULT_MALE_CUTOFF,
        }
    }
}

impl SexPredictor {
    pub fn new(female_cutoff: i64, male_cutoff: i64) -> Self {
        Self {
            female_cutoff,
            male_cutoff,
        }
    }

    /// Classify one sample's X het count. Pure and idempotent.
    pub fn predict(&self, x_het: i64) -> PredictedSex {
        if x_het >= self.female_cutoff {
            PredictedSex::Female
        } else if x_het <= self.male_cutoff {
            PredictedSex::Male
        } else {
            PredictedSex::Unknown
        }
    }
}
