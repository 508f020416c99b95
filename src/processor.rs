// ==============================================================================
// processor.rs - Sex-Check Enrichment Pipeline
// ==============================================================================
// Description: Runs the four enrichment stages over a parsed samples table
// Author: Matt Barham
// Created: 2026-03-04
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================

use std::collections::HashSet;
use tracing::{debug, info};

use crate::matcher::evaluate_match;
use crate::models::{
    PedigreeSex, PredictedSex, SampleRecord, SexCheckError, SexCheckRecord, SexMatch,
};
use crate::predictor::SexPredictor;

/// Orchestrates uniqueness validation, recoding, prediction and match
/// evaluation over one in-memory samples table.
pub struct SexCheckProcessor {
    predictor: SexPredictor,
}

impl SexCheckProcessor {
    pub fn new(female_cutoff: i64, male_cutoff: i64) -> Self {
        Self {
            predictor: SexPredictor::new(female_cutoff, male_cutoff),
        }
    }

    pub fn with_predictor(predictor: SexPredictor) -> Self {
        Self { predictor }
    }

    /// Run all enrichment stages, consuming the parsed table.
    ///
    /// Sample-ID uniqueness is validated first, before any derived value is
    /// computed. The first invalid sex code aborts the run with no output.
    pub fn process(
        &self,
        samples: Vec<SampleRecord>,
    ) -> Result<Vec<SexCheckRecord>, SexCheckError> {
        // 1. Uniqueness gate (must precede all derived columns)
        Self::validate_unique_sample_ids(&samples)?;

        // 2-4. Recode, predict, evaluate per record
        let mut records = Vec::with_capacity(samples.len());
        for sample in samples {
            let reported_sex = PedigreeSex::from_code(sample.sex).ok_or_else(|| {
                SexCheckError::InvalidSexCode {
                    sample_id: sample.sample_id.clone(),
                    code: sample.sex,
                }
            })?;

            let predicted_sex = self.predictor.predict(sample.x_het);
            let sex_match = evaluate_match(reported_sex, predicted_sex);

            records.push(SexCheckRecord {
                sample,
                reported_sex,
                predicted_sex,
                sex_match,
            });
        }

        Self::log_summary(&records);
        Ok(records)
    }

    /// The count of sample IDs must equal the count of distinct sample IDs
    fn validate_unique_sample_ids(samples: &[SampleRecord]) -> Result<(), SexCheckError> {
        let total = samples.len();
        let distinct: HashSet<&str> = samples.iter().map(|s| s.sample_id.as_str()).collect();

        if distinct.len() != total {
            return Err(SexCheckError::DuplicateSampleIds {
                total,
                distinct: distinct.len(),
            });
        }

        debug!("Unique sample IDs confirmed: {}", total);
        Ok(())
    }

    fn log_summary(records: &[SexCheckRecord]) {
        let female = records
            .iter()
            .filter(|r| r.predicted_sex == PredictedSex::Female)
            .count();
        let male = records
            .iter()
            .filter(|r| r.predicted_sex == PredictedSex::Male)
            .count();
        let unknown = records.len() - female - male;
        let mismatches = records
            .iter()
            .filter(|r| r.sex_match == SexMatch::Mismatch)
            .count();

        info!(
            "Sex prediction: {} female, {} male, {} unknown",
            female, male, unknown
        );
        info!("Reported/predicted sex mismatches: {}", mismatches);
    }
}
