// ==============================================================================
// lib.rs - Somalier Sex-Check Reformatter Library
// ==============================================================================
// Description: Library interface for sex-check reformatting modules
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================

pub mod parsers;
pub mod models;
pub mod predictor;
pub mod matcher;
pub mod processor;
pub mod output;
