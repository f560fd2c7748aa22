// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! goxunit-xml: report rendering for goxunit
//!
//! Renders a [`Report`] as xUnit XML understood by common CI dashboards, or
//! as JSON for other tooling.
//!
//! # Example
//!
//! ```no_run
//! use goxunit_parse::{Report, Suite, Test};
//! use goxunit_xml::write_xml;
//!
//! let mut suite = Suite::new("pkg/math");
//! suite.tests.push(Test::new("TestAdd"));
//! let report = Report::new(vec![suite], false);
//!
//! let mut out = Vec::new();
//! write_xml(&report, &mut out).unwrap();
//! ```

pub mod error;
pub mod json;
pub mod xml;

use std::io::Write;

use goxunit_parse::Report;

pub use error::RenderError;
pub use json::write_json;
pub use xml::write_xml;

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// xUnit XML
    #[default]
    Xml,
    /// Pretty-printed JSON of the report model
    Json,
}

impl OutputFormat {
    /// Render a report in this format
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if serialization or writing fails.
    pub fn render(self, report: &Report, writer: impl Write) -> Result<(), RenderError> {
        match self {
            OutputFormat::Xml => write_xml(report, writer),
            OutputFormat::Json => write_json(report, writer),
        }
    }
}
