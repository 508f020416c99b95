// ==============================================================================
// matcher.rs - Reported vs Predicted Sex Match Evaluation
// ==============================================================================
// Description: Tri-state comparison of pedigree sex against predicted sex
// Author: Matt Barham
// Created: 2026-03-04
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================
// Policy: NA dominates. Reported "unknown" (code 0) and "none" (code 3)
// both withhold a verdict, as does a predicted "unknown"; equality is only
// computed between two determinate categories.
// ==============================================================================

use crate::models::{PedigreeSex, PredictedSex, SexMatch};

/// Evaluate the match verdict for one sample.
///
/// * Reported unknown/none -> [`SexMatch::NotApplicable`], regardless of
///   the prediction.
/// * Predicted unknown -> [`SexMatch::NotApplicable`].
/// * Otherwise [`SexMatch::Match`] iff the two categories agree.
///
/// Equality is never computed with an indeterminate reported side, so a
/// reported "none" cannot accidentally match anything (structurally it
/// could not anyway: [`PredictedSex`] has no none variant).
pub fn evaluate_match(reported: PedigreeSex, predicted: PredictedSex) -> SexMatch {
    if reported.is_indeterminate() {
        return SexMatch::NotApplicable;
    }

    if predicted == PredictedSex::Unknown {
        return SexMatch::NotApplicable;
    }

    let agree = matches!(
        (reported, predicted),
        (PedigreeSex::Male, PredictedSex::Male) | (PedigreeSex::Female, PredictedSex::Female)
    );

    if agree {
        SexMatch::Match
    } else {
        SexMatch::Mismatch
    }
}
