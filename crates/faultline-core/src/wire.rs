// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed HTTP method and payload encoding sets for report delivery.
//!
//! Both enums are exhaustive by construction: a delivery cannot be configured
//! with anything outside {POST, PUT} x {FORM, JSON}. The configuration
//! boundary is [`FromStr`] — parsing any other method or encoding string
//! fails before a sender exists, hence before any network attempt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// HTTP methods available for report delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
	Post,
	/// PUT addresses the report as a REST resource: the record's REPORT_ID
	/// is appended to the endpoint path.
	Put,
}

impl Method {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Post => "POST",
			Self::Put => "PUT",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Method {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"POST" => Ok(Self::Post),
			"PUT" => Ok(Self::Put),
			other => Err(ReportError::UnsupportedMethod(other.to_string())),
		}
	}
}

/// Payload encoding for the report body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Encoding {
	/// Key/value pairs as `application/x-www-form-urlencoded`.
	Form,
	/// The full record as a structured JSON object.
	Json,
}

impl Encoding {
	/// Canonical MIME value for the request `Content-Type` header.
	pub fn content_type(&self) -> &'static str {
		match self {
			Self::Form => "application/x-www-form-urlencoded",
			Self::Json => "application/json",
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Form => "FORM",
			Self::Json => "JSON",
		}
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Encoding {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"FORM" => Ok(Self::Form),
			"JSON" => Ok(Self::Json),
			other => Err(ReportError::UnsupportedEncoding(other.to_string())),
		}
	}
}
