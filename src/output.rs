// ==============================================================================
// output.rs - MultiQC Report Writer
// ==============================================================================
// Description: Serializes enriched sex-check records as a MultiQC-ready TSV
// Author: Matt Barham
// Created: 2026-03-04
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================
// Layout: 24 normalized input columns (sample_id first, raw sex code
// dropped, original_pedigree_sex recoded) plus Predicted_Sex and
// Match_Sexes. Written as Multiqc_<input file name> into the current
// working directory, overwriting any previous report.
// ==============================================================================

use anyhow::{anyhow, Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{PedigreeSex, PredictedSex, SexCheckRecord, SexMatch};

/// Prefix marking the report for MultiQC aggregation
pub const OUTPUT_PREFIX: &str = "Multiqc_";

/// Fixed output column order
pub const OUTPUT_COLUMNS: [&str; 26] = [
    "sample_id",
    "paternal_id",
    "maternal_id",
    "family_id",
    "phenotype",
    "original_pedigree_sex",
    "gt_depth_mean",
    "gt_depth_sd",
    "depth_mean",
    "depth_sd",
    "ab_mean",
    "ab_std",
    "n_hom_ref",
    "n_het",
    "n_hom_alt",
    "n_unknown",
    "p_middling_ab",
    "X_depth_mean",
    "X_n",
    "X_hom_ref",
    "X_het",
    "X_hom_alt",
    "Y_depth_mean",
    "Y_n",
    "Predicted_Sex",
    "Match_Sexes",
];

/// One output row; field order defines the serialized column order
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    sample_id: &'a str,
    paternal_id: &'a str,
    maternal_id: &'a str,
    family_id: &'a str,
    phenotype: &'a str,
    original_pedigree_sex: PedigreeSex,
    gt_depth_mean: &'a str,
    gt_depth_sd: &'a str,
    depth_mean: &'a str,
    depth_sd: &'a str,
    ab_mean: &'a str,
    ab_std: &'a str,
    n_hom_ref: &'a str,
    n_het: &'a str,
    n_hom_alt: &'a str,
    n_unknown: &'a str,
    p_middling_ab: &'a str,
    #[serde(rename = "X_depth_mean")]
    x_depth_mean: &'a str,
    #[serde(rename = "X_n")]
    x_n: &'a str,
    #[serde(rename = "X_hom_ref")]
    x_hom_ref: &'a str,
    #[serde(rename = "X_het")]
    x_het: i64,
    #[serde(rename = "X_hom_alt")]
    x_hom_alt: &'a str,
    #[serde(rename = "Y_depth_mean")]
    y_depth_mean: &'a str,
    #[serde(rename = "Y_n")]
    y_n: &'a str,
    #[serde(rename = "Predicted_Sex")]
    predicted_sex: PredictedSex,
    #[serde(rename = "Match_Sexes")]
    match_sexes: SexMatch,
}

impl<'a> From<&'a SexCheckRecord> for ReportRow<'a> {
    fn from(record: &'a SexCheckRecord) -> Self {
        let s = &record.sample;
        Self {
            sample_id: &s.sample_id,
            paternal_id: &s.paternal_id,
            maternal_id: &s.maternal_id,
            family_id: &s.family_id,
            phenotype: &s.phenotype,
            original_pedigree_sex: record.reported_sex,
            gt_depth_mean: &s.gt_depth_mean,
            gt_depth_sd: &s.gt_depth_sd,
            depth_mean: &s.depth_mean,
            depth_sd: &s.depth_sd,
            ab_mean: &s.ab_mean,
            ab_std: &s.ab_std,
            n_hom_ref: &s.n_hom_ref,
            n_het: &s.n_het,
            n_hom_alt: &s.n_hom_alt,
            n_unknown: &s.n_unknown,
            p_middling_ab: &s.p_middling_ab,
            x_depth_mean: &s.x_depth_mean,
            x_n: &s.x_n,
            x_hom_ref: &s.x_hom_ref,
            x_het: s.x_het,
            x_hom_alt: &s.x_hom_alt,
            y_depth_mean: &s.y_depth_mean,
            y_n: &s.y_n,
            predicted_sex: record.predicted_sex,
            match_sexes: record.sex_match,
        }
    }
}

/// Report file name for a given input: `Multiqc_` + the input's file name
pub fn report_file_name(input_path: &Path) -> Result<PathBuf> {
    let name = input_path
        .file_name()
        .ok_or_else(|| anyhow!("Input path {:?} has no file name", input_path))?;
    Ok(PathBuf::from(format!(
        "{OUTPUT_PREFIX}{}",
        name.to_string_lossy()
    )))
}

/// Write the report into the current working directory, named after the
/// input file. Returns the path written.
pub fn write_report(records: &[SexCheckRecord], input_path: &Path) -> Result<PathBuf> {
    let output_path = report_file_name(input_path)?;
    write_to(&output_path, records)?;

    info!("Wrote {} samples to {:?}", records.len(), output_path);
    Ok(output_path)
}

/// Serialize all records as a TSV at the given path, overwriting it
pub fn write_to(path: &Path, records: &[SexCheckRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("Failed to create output file {path:?}"))?;

    for record in records {
        writer
            .serialize(ReportRow::from(record))
            .context("Failed to serialize sample row")?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {path:?}"))
}
