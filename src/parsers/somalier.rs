// ==============================================================================
// somalier.rs - Somalier Samples Report Parser
// ==============================================================================
// Description: Parser for somalier {sample}.somalier.samples.tsv reports
// Author: Matt Barham
// Created: 2026-03-03
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================
// Format: Tab-delimited with a fixed 25-column header; the first header
// cell carries somalier's comment marker:
//   #family_id  sample_id  paternal_id  maternal_id  sex  phenotype
//   original_pedigree_sex  gt_depth_mean ... Y_depth_mean  Y_n
// Column order is trusted; header text is replaced with canonical names.
// ==============================================================================

use csv::ReaderBuilder;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::SampleRecord;

/// Width of a somalier samples report
pub const INPUT_COLUMN_COUNT: usize = 25;

// Positions of the two interpreted columns
const COL_SEX: usize = 4;
const COL_X_HET: usize = 21;

/// Errors that can occur while parsing a somalier samples report
#[derive(Error, Debug)]
pub enum SomalierParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Expected {expected} tab-delimited header columns, found {found}")]
    InvalidColumnCount { expected: usize, found: usize },

    #[error("Invalid row at line {line}: expected {expected} fields, found {found}")]
    InvalidFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid integer in column '{column}' at line {line}: {value}")]
    InvalidInteger {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("File is empty or contains no sample rows")]
    EmptyFile,
}

/// Parser for somalier samples reports
pub struct SomalierParser;

impl SomalierParser {
    /// Parse a somalier samples report into sample records.
    ///
    /// # Arguments
    /// * `path` - Path to the report (`{sample}.somalier.samples.tsv`)
    ///
    /// # Returns
    /// * `Ok(Vec<SampleRecord>)` - Successfully parsed records
    /// * `Err(SomalierParseError)` - Parse error
    ///
    /// The header must be exactly 25 columns wide; its text (including the
    /// `#` marker on the family-id cell) is discarded and canonical column
    /// names are assigned by position. `sex` and `X_het` must parse as
    /// integers; every other column is carried through verbatim.
    pub fn parse(path: impl AsRef<Path>) -> Result<Vec<SampleRecord>, SomalierParseError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;

        let headers = reader.headers()?.clone();
        if headers.len() != INPUT_COLUMN_COUNT {
            return Err(SomalierParseError::InvalidColumnCount {
                expected: INPUT_COLUMN_COUNT,
                found: headers.len(),
            });
        }

        let family_header = headers.get(0).unwrap_or("").trim_start_matches('#');
        debug!(
            "Header normalized, family-id column was '{}'",
            family_header
        );

        let mut records = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // Header is line 1, first data row is line 2
            let line_number = idx + 2;
            let record = result?;

            let parsed = Self::parse_record(&record, line_number)?;
            records.push(parsed);
        }

        if records.is_empty() {
            return Err(SomalierParseError::EmptyFile);
        }

        debug!("Parsed {} sample rows", records.len());
        Ok(records)
    }

    /// Parse a single data row into a sample record
    fn parse_record(
        record: &csv::StringRecord,
        line_number: usize,
    ) -> Result<SampleRecord, SomalierParseError> {
        if record.len() != INPUT_COLUMN_COUNT {
            return Err(SomalierParseError::InvalidFieldCount {
                line: line_number,
                expected: INPUT_COLUMN_COUNT,
                found: record.len(),
            });
        }

        let fields: Vec<&str> = record.iter().map(str::trim).collect();

        let sex = Self::parse_int(fields[COL_SEX], "sex", line_number)?;
        let x_het = Self::parse_int(fields[COL_X_HET], "X_het", line_number)?;

        // Field 6 (original_pedigree_sex placeholder) is dropped here; the
        // recoder repopulates it from the sex code.
        Ok(SampleRecord {
            family_id: fields[0].to_string(),
            sample_id: fields[1].to_string(),
            paternal_id: fields[2].to_string(),
            maternal_id: fields[3].to_string(),
            sex,
            phenotype: fields[5].to_string(),
            gt_depth_mean: fields[7].to_string(),
            gt_depth_sd: fields[8].to_string(),
            depth_mean: fields[9].to_string(),
            depth_sd: fields[10].to_string(),
            ab_mean: fields[11].to_string(),
            ab_std: fields[12].to_string(),
            n_hom_ref: fields[13].to_string(),
            n_het: fields[14].to_string(),
            n_hom_alt: fields[15].to_string(),
            n_unknown: fields[16].to_string(),
            p_middling_ab: fields[17].to_string(),
            x_depth_mean: fields[18].to_string(),
            x_n: fields[19].to_string(),
            x_hom_ref: fields[20].to_string(),
            x_het,
            x_hom_alt: fields[22].to_string(),
            y_depth_mean: fields[23].to_string(),
            y_n: fields[24].to_string(),
        })
    }

    fn parse_int(
        value: &str,
        column: &'static str,
        line_number: usize,
    ) -> Result<i64, SomalierParseError> {
        value
            .parse::<i64>()
            .map_err(|_| SomalierParseError::InvalidInteger {
                line: line_number,
                column,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "#family_id\tsample_id\tpaternal_id\tmaternal_id\tsex\tphenotype\t\
original_pedigree_sex\tgt_depth_mean\tgt_depth_sd\tdepth_mean\tdepth_sd\tab_mean\tab_std\t\
n_hom_ref\tn_het\tn_hom_alt\tn_unknown\tp_middling_ab\tX_depth_mean\tX_n\tX_hom_ref\tX_het\t\
X_hom_alt\tY_depth_mean\tY_n";

    /// Build one 25-field data row with fixed metric values
    fn row(family: &str, sample: &str, sex: &str, x_het: &str) -> String {
        format!(
            "{family}\t{sample}\t0\t0\t{sex}\t-9\t-9\t30.1\t5.2\t28.4\t6.0\t0.49\t0.05\t\
             1000\t500\t400\t10\t0.01\t15.3\t120\t60\t{x_het}\t20\t10.5\t50"
        )
    }

    fn create_test_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_valid_report() {
        let contents = format!(
            "{HEADER}\n{}\n{}\n",
            row("FAM1", "NA12878", "2", "48"),
            row("FAM2", "NA12891", "1", "1")
        );
        let file = create_test_file(&contents);

        let records = SomalierParser::parse(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].family_id, "FAM1");
        assert_eq!(records[0].sample_id, "NA12878");
        assert_eq!(records[0].sex, 2);
        assert_eq!(records[0].x_het, 48);
        assert_eq!(records[0].gt_depth_mean, "30.1");
        assert_eq!(records[0].y_n, "50");
        assert_eq!(records[1].sample_id, "NA12891");
        assert_eq!(records[1].sex, 1);
        assert_eq!(records[1].x_het, 1);
    }

    #[test]
    fn test_parse_preserves_metric_text_verbatim() {
        let contents = format!("{HEADER}\n{}\n", row("FAM1", "S1", "1", "0"));
        let file = create_test_file(&contents);

        let records = SomalierParser::parse(file.path()).unwrap();

        // Passthrough metrics keep their upstream formatting
        assert_eq!(records[0].ab_mean, "0.49");
        assert_eq!(records[0].p_middling_ab, "0.01");
        assert_eq!(records[0].x_depth_mean, "15.3");
    }

    #[test]
    fn test_parse_tolerates_field_whitespace() {
        let mut padded = row("FAM1", "S1", "1", "3");
        padded = padded.replace("S1", "  S1  ");
        let contents = format!("{HEADER}\n{padded}\n");
        let file = create_test_file(&contents);

        let records = SomalierParser::parse(file.path()).unwrap();
        assert_eq!(records[0].sample_id, "S1");
    }

    #[test]
    fn test_invalid_header_width() {
        let contents = "#family_id\tsample_id\tsex\nFAM1\tS1\t1\n";
        let file = create_test_file(contents);

        let result = SomalierParser::parse(file.path());
        match result.unwrap_err() {
            SomalierParseError::InvalidColumnCount { expected, found } => {
                assert_eq!(expected, 25);
                assert_eq!(found, 3);
            }
            other => panic!("Expected InvalidColumnCount error, got {other:?}"),
        }
    }

    #[test]
    fn test_short_data_row() {
        let contents = format!("{HEADER}\nFAM1\tS1\t0\t0\t1\n");
        let file = create_test_file(&contents);

        let result = SomalierParser::parse(file.path());
        match result.unwrap_err() {
            SomalierParseError::InvalidFieldCount { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 5);
            }
            other => panic!("Expected InvalidFieldCount error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_sex() {
        let contents = format!("{HEADER}\n{}\n", row("FAM1", "S1", "XX", "3"));
        let file = create_test_file(&contents);

        let result = SomalierParser::parse(file.path());
        match result.unwrap_err() {
            SomalierParseError::InvalidInteger { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "sex");
                assert_eq!(value, "XX");
            }
            other => panic!("Expected InvalidInteger error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_x_het() {
        let contents = format!(
            "{HEADER}\n{}\n{}\n",
            row("FAM1", "S1", "1", "0"),
            row("FAM1", "S2", "2", "46.5")
        );
        let file = create_test_file(&contents);

        let result = SomalierParser::parse(file.path());
        match result.unwrap_err() {
            SomalierParseError::InvalidInteger { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "X_het");
                assert_eq!(value, "46.5");
            }
            other => panic!("Expected InvalidInteger error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_file() {
        let contents = format!("{HEADER}\n");
        let file = create_test_file(&contents);

        let result = SomalierParser::parse(file.path());
        match result.unwrap_err() {
            SomalierParseError::EmptyFile => {}
            other => panic!("Expected EmptyFile error, got {other:?}"),
        }
    }
}
