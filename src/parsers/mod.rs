// ==============================================================================
// parsers/mod.rs - File parser modules
// ==============================================================================
// Description: Parsers for sex-check report file formats
// Author: Matt Barham
// Created: 2026-03-03
// Modified: 2026-03-03
// Version: 1.0.0
// ==============================================================================

pub mod somalier;

pub use somalier::{SomalierParseError, SomalierParser, INPUT_COLUMN_COUNT};
