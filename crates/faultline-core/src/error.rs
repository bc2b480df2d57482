// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the report pipeline core.

use thiserror::Error;

/// Errors raised by the core report types.
#[derive(Debug, Error)]
pub enum ReportError {
	/// Only POST and PUT are supported for report delivery.
	#[error("unsupported HTTP method: {0}")]
	UnsupportedMethod(String),

	#[error("unsupported report encoding: {0}")]
	UnsupportedEncoding(String),

	#[error("unknown report field: {0}")]
	UnknownField(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for core report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
