// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the go test parser
//!
//! Raw bytes go straight in: the sanitizer must cope with invalid UTF-8 and
//! control characters, and the parser must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use goxunit_parse::{ParseOptions, parse_gotest};

fuzz_target!(|data: &[u8]| {
    let _ = parse_gotest(data, &ParseOptions::default());
});
