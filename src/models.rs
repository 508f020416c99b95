// ==============================================================================
// models.rs - Sex-Check Data Models
// ==============================================================================
// Description: Data structures for somalier sex-check reformatting
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================
// Encoding: somalier pedigree sex codes
//   0 = unknown, 1 = male, 2 = female, 3 = none (not provided)
// ==============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pedigree sex as reported upstream, recoded from the integer column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PedigreeSex {
    /// Code 0: truly indeterminate
    Unknown,
    /// Code 1
    Male,
    /// Code 2
    Female,
    /// Code 3: not provided / inapplicable (distinct from unknown)
    None,
}

impl PedigreeSex {
    /// Recode a raw somalier sex code into its semantic category.
    ///
    /// Returns `None` for codes outside {0, 1, 2, 3}; the processor turns
    /// that into a fatal [`SexCheckError::InvalidSexCode`].
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PedigreeSex::Unknown),
            1 => Some(PedigreeSex::Male),
            2 => Some(PedigreeSex::Female),
            3 => Some(PedigreeSex::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PedigreeSex::Unknown => "unknown",
            PedigreeSex::Male => "male",
            PedigreeSex::Female => "female",
            PedigreeSex::None => "none",
        }
    }

    /// True for the categories excluded from match evaluation
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, PedigreeSex::Unknown | PedigreeSex::None)
    }
}

/// Sex predicted from X-chromosome heterozygosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictedSex {
    Female,
    Male,
    /// X het count fell between the male and female cutoffs
    Unknown,
}

impl PredictedSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictedSex::Female => "female",
            PredictedSex::Male => "male",
            PredictedSex::Unknown => "unknown",
        }
    }
}

/// Tri-state verdict comparing reported against predicted sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SexMatch {
    /// Reported and predicted sex agree
    #[serde(rename = "true")]
    Match,
    /// Reported and predicted sex disagree
    #[serde(rename = "false")]
    Mismatch,
    /// Either side is indeterminate; no verdict
    #[serde(rename = "NA")]
    NotApplicable,
}

impl SexMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            SexMatch::Match => "true",
            SexMatch::Mismatch => "false",
            SexMatch::NotApplicable => "NA",
        }
    }
}

/// One parsed row of a somalier samples report.
///
/// QC metric columns are carried verbatim as strings so the writer never
/// reformats numeric text; only `sex` and `x_het` are interpreted. The
/// input's `original_pedigree_sex` placeholder is consumed at parse time
/// and repopulated by the recoder.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    pub family_id: String,
    pub sample_id: String,
    pub paternal_id: String,
    pub maternal_id: String,
    /// Raw pedigree sex code (0-3); recoded before output
    pub sex: i64,
    pub phenotype: String,
    pub gt_depth_mean: String,
    pub gt_depth_sd: String,
    pub depth_mean: String,
    pub depth_sd: String,
    pub ab_mean: String,
    pub ab_std: String,
    pub n_hom_ref: String,
    pub n_het: String,
    pub n_hom_alt: String,
    pub n_unknown: String,
    pub p_middling_ab: String,
    pub x_depth_mean: String,
    pub x_n: String,
    pub x_hom_ref: String,
    /// Heterozygous call count on the X chromosome
    pub x_het: i64,
    pub x_hom_alt: String,
    pub y_depth_mean: String,
    pub y_n: String,
}

/// A sample record enriched by the four pipeline stages
#[derive(Debug, Clone, PartialEq)]
pub struct SexCheckRecord {
    pub sample: SampleRecord,
    /// Recoded reported sex; serialized as `original_pedigree_sex`
    pub reported_sex: PedigreeSex,
    pub predicted_sex: PredictedSex,
    pub sex_match: SexMatch,
}

/// Fatal input-validation errors for the sex-check pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SexCheckError {
    #[error("Duplicate sample identifiers: {total} sample IDs but only {distinct} distinct values")]
    DuplicateSampleIds { total: usize, distinct: usize },

    #[error(
        "Invalid pedigree sex code {code} for sample '{sample_id}': expected 0-3, \
         verify the upstream sex-check output"
    )]
    InvalidSexCode { sample_id: String, code: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recode_valid_codes() {
        assert_eq!(PedigreeSex::from_code(0), Some(PedigreeSex::Unknown));
        assert_eq!(PedigreeSex::from_code(1), Some(PedigreeSex::Male));
        assert_eq!(PedigreeSex::from_code(2), Some(PedigreeSex::Female));
        assert_eq!(PedigreeSex::from_code(3), Some(PedigreeSex::None));
    }

    #[test]
    fn test_recode_rejects_out_of_domain_codes() {
        assert_eq!(PedigreeSex::from_code(-1), None);
        assert_eq!(PedigreeSex::from_code(4), None);
        assert_eq!(PedigreeSex::from_code(9), None);
        assert_eq!(PedigreeSex::from_code(i64::MAX), None);
    }

    #[test]
    fn test_pedigree_sex_str() {
        assert_eq!(PedigreeSex::Unknown.as_str(), "unknown");
        assert_eq!(PedigreeSex::Male.as_str(), "male");
        assert_eq!(PedigreeSex::Female.as_str(), "female");
        assert_eq!(PedigreeSex::None.as_str(), "none");
    }

    #[test]
    fn test_indeterminate_categories() {
        assert!(PedigreeSex::Unknown.is_indeterminate());
        assert!(PedigreeSex::None.is_indeterminate());
        assert!(!PedigreeSex::Male.is_indeterminate());
        assert!(!PedigreeSex::Female.is_indeterminate());
    }

    #[test]
    fn test_predicted_sex_str() {
        assert_eq!(PredictedSex::Female.as_str(), "female");
        assert_eq!(PredictedSex::Male.as_str(), "male");
        assert_eq!(PredictedSex::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_sex_match_str() {
        assert_eq!(SexMatch::Match.as_str(), "true");
        assert_eq!(SexMatch::Mismatch.as_str(), "false");
        assert_eq!(SexMatch::NotApplicable.as_str(), "NA");
    }

    #[test]
    fn test_error_messages_report_counts() {
        let err = SexCheckError::DuplicateSampleIds {
            total: 5,
            distinct: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_invalid_sex_code_names_sample_and_upstream() {
        let err = SexCheckError::InvalidSexCode {
            sample_id: "NA12878".to_string(),
            code: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("NA12878"));
        assert!(msg.contains('7'));
        assert!(msg.contains("upstream"));
    }
}
