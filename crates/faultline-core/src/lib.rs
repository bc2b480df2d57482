// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the faultline crash-report delivery pipeline.
//!
//! This crate provides the shared vocabulary of the pipeline: report field
//! identifiers and their canonical wire names, the immutable crash record,
//! the closed HTTP method/encoding sets, and the daily payload signing
//! token. It performs no I/O; delivery lives in the `faultline` crate.

pub mod error;
pub mod field;
pub mod record;
pub mod signature;
pub mod wire;

pub use error::{ReportError, Result};
pub use field::{ReportField, DEFAULT_REPORT_FIELDS};
pub use record::{CrashRecord, CrashRecordBuilder};
pub use signature::compute_signature;
pub use wire::{Encoding, Method};
