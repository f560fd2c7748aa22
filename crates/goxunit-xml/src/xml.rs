// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xUnit XML serialization
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <testsuites>                                  only for several suites
//!   <testsuite name tests errors failures skip time>
//!     <testcase classname name time>
//!       <skipped/>
//!       <error/>
//!       <failure type="go.error" message="error">output</failure>
//!     </testcase>
//!   </testsuite>
//! </testsuites>
//! ```

use std::io;

use goxunit_parse::{Report, Suite, Test};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::error::RenderError;

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static FAILURE_TAG: &str = "failure";
static ERROR_TAG: &str = "error";
static SKIPPED_TAG: &str = "skipped";

static FAILURE_TYPE: &str = "go.error";
static FAILURE_MESSAGE: &str = "error";

/// Write a report as an xUnit XML document
///
/// # Errors
///
/// Returns `RenderError` if the underlying writer fails.
pub fn write_xml(report: &Report, writer: impl io::Write) -> Result<(), RenderError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let Report { suites, multi } = report;
    if *multi {
        writer.write_event(Event::Start(BytesStart::new(TESTSUITES_TAG)))?;
    }
    for suite in suites {
        serialize_suite(suite, &mut writer)?;
    }
    if *multi {
        writer.write_event(Event::End(BytesEnd::new(TESTSUITES_TAG)))?;
    }

    // Add a trailing newline.
    writer.write_indent()?;
    debug!(suites = suites.len(), multi, "Wrote XML report");
    Ok(())
}

fn serialize_suite(suite: &Suite, writer: &mut Writer<impl io::Write>) -> Result<(), RenderError> {
    let mut tag = BytesStart::new(TESTSUITE_TAG);
    tag.push_attribute(("name", suite.name.as_str()));
    tag.push_attribute(("tests", suite.count().to_string().as_str()));
    tag.push_attribute(("errors", suite.error_count().to_string().as_str()));
    tag.push_attribute(("failures", suite.failed_count().to_string().as_str()));
    tag.push_attribute(("skip", suite.skipped_count().to_string().as_str()));
    if let Some(time) = &suite.time {
        tag.push_attribute(("time", time.as_str()));
    }

    if suite.tests.is_empty() {
        writer.write_event(Event::Empty(tag))?;
        return Ok(());
    }

    writer.write_event(Event::Start(tag))?;
    for test in &suite.tests {
        serialize_test(&suite.name, test, writer)?;
    }
    writer.write_event(Event::End(BytesEnd::new(TESTSUITE_TAG)))?;
    Ok(())
}

fn serialize_test(
    classname: &str,
    test: &Test,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), RenderError> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let Test {
        name,
        time,
        message,
        failed,
        skipped,
        errored,
    } = test;

    let mut tag = BytesStart::new(TESTCASE_TAG);
    tag.push_attribute(("classname", classname));
    tag.push_attribute(("name", name.as_str()));
    tag.push_attribute(("time", time.as_str()));

    if !(*failed || *skipped || *errored) {
        writer.write_event(Event::Empty(tag))?;
        return Ok(());
    }

    writer.write_event(Event::Start(tag))?;
    if *skipped {
        writer.write_event(Event::Empty(BytesStart::new(SKIPPED_TAG)))?;
    }
    if *errored {
        writer.write_event(Event::Empty(BytesStart::new(ERROR_TAG)))?;
    }
    if *failed {
        let mut failure = BytesStart::new(FAILURE_TAG);
        failure.push_attribute(("type", FAILURE_TYPE));
        failure.push_attribute(("message", FAILURE_MESSAGE));
        if message.is_empty() {
            writer.write_event(Event::Empty(failure))?;
        } else {
            writer.write_event(Event::Start(failure))?;
            writer.write_event(Event::Text(BytesText::new(message)))?;
            writer.write_event(Event::End(BytesEnd::new(FAILURE_TAG)))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(TESTCASE_TAG)))?;
    Ok(())
}
