// Copyright 2026 osac Contributors
// SPDX-License-Identifier: Apache-2.0

//! osac command-line frontend.
//!
//! This library crate exposes the CLI definitions for testing.

pub mod cli;
