// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the line-at-a-time gocheck parser

#![no_main]

use libfuzzer_sys::fuzz_target;

use goxunit_parse::{GoCheckParser, ParseOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parser = GoCheckParser::new(&ParseOptions::default());

        // Stop at the first structural error, as the stream parser does
        for line in input.lines() {
            if parser.process_line(line).is_err() {
                return;
            }
        }

        // Finalize should never panic
        let _ = parser.finish();
    }
});
