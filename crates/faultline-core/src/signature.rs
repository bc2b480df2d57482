// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tamper-evident signing token for form-encoded reports.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Compute the daily signing token for a form-encoded report.
///
/// The token is a SHA-256 hex digest over the calendar date (YYYYMMDD)
/// followed by the shared secret. The collector recomputes the same digest
/// to check that the payload was produced by a holder of the secret on that
/// day. The date is an explicit parameter; delivery passes the current UTC
/// date, so within one calendar day every send carries the same token.
pub fn compute_signature(date: NaiveDate, secret: &str) -> String {
	let mut hasher = Sha256::new();
	hasher.update(date.format("%Y%m%d").to_string().as_bytes());
	hasher.update(secret.as_bytes());
	hex::encode(hasher.finalize())
}
