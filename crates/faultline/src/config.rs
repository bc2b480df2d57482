// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Delivery configuration for the report sender.

use std::collections::HashMap;
use std::time::Duration;

use faultline_core::{Encoding, Method, ReportField};

/// HTTP Basic credentials for the collector endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	pub login: String,
	pub password: String,
}

impl Credentials {
	pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			login: login.into(),
			password: password.into(),
		}
	}
}

/// Static values carried by the signed form layout.
#[derive(Debug, Clone, Default)]
pub struct SignedFormProfile {
	/// Shared secret mixed into the daily `sign` token. The collector holds
	/// the same secret and recomputes the token for validation.
	pub shared_secret: String,
	/// Human-readable description sent alongside every report.
	pub message: String,
	/// Channel/source tag identifying this application build.
	pub channel: String,
}

/// How FORM-encoded payloads are laid out.
#[derive(Debug, Clone)]
pub enum FormLayout {
	/// The fixed `{sign, context, message, channel}` form, where `context`
	/// embeds the full record as JSON. This is the default layout.
	Signed(SignedFormProfile),
	/// Generic per-field form: each configured field becomes one pair, named
	/// through the mapping when present and by its canonical name otherwise.
	/// An empty field list means [`faultline_core::DEFAULT_REPORT_FIELDS`].
	Fields {
		fields: Vec<ReportField>,
		mapping: HashMap<ReportField, String>,
	},
}

impl Default for FormLayout {
	fn default() -> Self {
		Self::Signed(SignedFormProfile::default())
	}
}

/// Read-only delivery configuration.
///
/// Constructed once and never mutated during delivery; a sender holding it is
/// safe to share across concurrent submits.
#[derive(Debug, Clone)]
pub struct TransportConfig {
	/// Collector endpoint URL.
	pub endpoint: String,
	pub method: Method,
	pub encoding: Encoding,
	pub connect_timeout: Duration,
	/// Covers the whole request/response exchange once connected.
	pub request_timeout: Duration,
	/// Static headers attached to every request.
	pub headers: HashMap<String, String>,
	/// Default Basic credentials; a sender-level override takes precedence.
	pub credentials: Option<Credentials>,
	pub form_layout: FormLayout,
	/// Log rendered payload bodies at debug level. Explicit configuration,
	/// not a process-global toggle.
	pub log_payloads: bool,
}

impl TransportConfig {
	/// A POST + FORM configuration with default timeouts, no headers and no
	/// credentials.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			method: Method::Post,
			encoding: Encoding::Form,
			connect_timeout: Duration::from_secs(5),
			request_timeout: Duration::from_secs(20),
			headers: HashMap::new(),
			credentials: None,
			form_layout: FormLayout::default(),
			log_payloads: false,
		}
	}
}

impl Default for TransportConfig {
	fn default() -> Self {
		Self::new("")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_config_defaults_to_post_form() {
		let config = TransportConfig::new("http://collector.example/report");
		assert_eq!(config.method, Method::Post);
		assert_eq!(config.encoding, Encoding::Form);
		assert!(config.credentials.is_none());
		assert!(matches!(config.form_layout, FormLayout::Signed(_)));
	}

	#[test]
	fn timeouts_default_sane() {
		let config = TransportConfig::default();
		assert!(config.connect_timeout < config.request_timeout);
	}
}
