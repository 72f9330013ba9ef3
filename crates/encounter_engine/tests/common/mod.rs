//! Shared test utilities for encounter resolution tests.
//!
//! Imported by every integration test binary; not every binary uses every
//! helper.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
pub mod tables;
