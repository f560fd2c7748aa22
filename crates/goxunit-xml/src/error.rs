// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for goxunit-xml

use thiserror::Error;

/// Errors that can occur while rendering a report
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error writing XML
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error serializing JSON
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing to the output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
