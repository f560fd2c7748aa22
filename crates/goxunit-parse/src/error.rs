// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for goxunit-parse

use thiserror::Error;

/// Errors that can occur while parsing test output
///
/// Every structural variant carries the 1-based number of the offending line.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Error reading the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A package failed to build or set up
    #[error("{line}: package build failed: {text}")]
    BuildFailed {
        /// Line number of the announcement
        line: usize,
        /// The announcement itself
        text: String,
    },

    /// An end marker arrived while no test was open
    #[error("{line}: orphan end test: {text}")]
    OrphanEnd {
        /// Line number of the end marker
        line: usize,
        /// The end marker line
        text: String,
    },

    /// An end marker named a different test than the open one
    #[error("{line}: name mismatch: got {found}, expected {expected}")]
    NameMismatch {
        /// Line number of the end marker
        line: usize,
        /// Name on the end marker
        found: String,
        /// Name of the open test
        expected: String,
    },

    /// A gocheck start marker arrived while another test was open
    #[error("{line}: start of {started} in middle of {open}")]
    StartInMiddle {
        /// Line number of the start marker
        line: usize,
        /// `suite.test` of the test left open
        open: String,
        /// `suite.test` of the new start marker
        started: String,
    },
}

impl ParseError {
    /// Line number the error refers to, if it is a structural error
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io(_) => None,
            ParseError::BuildFailed { line, .. }
            | ParseError::OrphanEnd { line, .. }
            | ParseError::NameMismatch { line, .. }
            | ParseError::StartInMiddle { line, .. } => Some(*line),
        }
    }
}
