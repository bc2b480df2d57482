// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the delivery SDK.

use faultline_core::{Encoding, Method, ReportError};
use thiserror::Error;

/// Result type alias for delivery operations.
pub type Result<T> = std::result::Result<T, SenderError>;

/// Errors surfaced by the report sender.
///
/// Transport and collector failures carry the method and encoding that were
/// attempted, so a caller logging a failed delivery sees the exact request
/// shape without keeping its own copy of the configuration.
#[derive(Debug, Error)]
pub enum SenderError {
	/// The configured endpoint is not a valid HTTP(S) URL.
	#[error("invalid endpoint URL: {0}")]
	InvalidEndpoint(String),

	/// A configured static header has an invalid name or value.
	#[error("invalid header: {0}")]
	InvalidHeader(String),

	/// PUT delivery addresses the report as a resource and needs REPORT_ID.
	#[error("PUT delivery requires a REPORT_ID field on the record")]
	MissingReportId,

	/// Payload rendering failed. Surfaced instead of silently delivering a
	/// degraded payload; the caller decides whether to re-submit a reduced
	/// record.
	#[error("failed to render report payload: {0}")]
	Format(#[from] ReportError),

	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),

	/// Network-level delivery failure (connect, timeout, write).
	#[error("failed to deliver {encoding} report via HTTP {method}: {source}")]
	Transport {
		method: Method,
		encoding: Encoding,
		#[source]
		source: reqwest::Error,
	},

	/// The collector answered with a non-2xx status.
	#[error("collector rejected {encoding} report via HTTP {method} (status {status}): {message}")]
	Server {
		method: Method,
		encoding: Encoding,
		status: u16,
		/// Response text, kept only for the error report.
		message: String,
	},
}
