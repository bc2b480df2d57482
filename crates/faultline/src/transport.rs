// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP delivery of rendered report payloads.
//!
//! One attempt per report: resolve the effective URL, issue the request with
//! the encoding's Content-Type and optional Basic authorization, classify
//! the outcome. No retries, no backoff, no response-body parsing beyond the
//! status line (the body text is kept only inside rejection errors).

use faultline_core::{CrashRecord, Encoding, Method, ReportField};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::Credentials;
use crate::error::{Result, SenderError};

/// A report accepted by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
	/// The 2xx status the collector answered with.
	pub status: u16,
}

/// Resolve the effective target URL for one send.
///
/// PUT addresses the report as a REST resource and appends `/<REPORT_ID>`
/// to the base URL; a record without REPORT_ID cannot be PUT and fails here,
/// before any connection is attempted. POST uses the base URL unchanged.
pub fn resolve_url(base: &Url, method: Method, record: &CrashRecord) -> Result<Url> {
	match method {
		Method::Post => Ok(base.clone()),
		Method::Put => {
			let report_id = record
				.get(ReportField::ReportId)
				.ok_or(SenderError::MissingReportId)?;
			let target = format!(
				"{}/{}",
				base.as_str().trim_end_matches('/'),
				urlencoding::encode(report_id)
			);
			Url::parse(&target).map_err(|_| SenderError::InvalidEndpoint(target))
		}
	}
}

/// Execute one delivery attempt and classify the outcome.
pub async fn dispatch(
	client: &reqwest::Client,
	url: Url,
	method: Method,
	encoding: Encoding,
	credentials: Option<&Credentials>,
	body: String,
) -> Result<Delivery> {
	debug!(url = %url, method = %method, encoding = %encoding, "Delivering crash report");

	let mut request = match method {
		Method::Post => client.post(url),
		Method::Put => client.put(url),
	};
	request = request.header(CONTENT_TYPE, encoding.content_type());
	if let Some(credentials) = credentials {
		request = request.basic_auth(&credentials.login, Some(&credentials.password));
	}

	let response = request
		.body(body)
		.send()
		.await
		.map_err(|source| SenderError::Transport {
			method,
			encoding,
			source,
		})?;

	let status = response.status();
	if status.is_success() {
		Ok(Delivery {
			status: status.as_u16(),
		})
	} else {
		let message = response.text().await.unwrap_or_default();
		Err(rejection(method, encoding, status, message))
	}
}

/// Blocking variant of [`dispatch`] for contexts without an async runtime,
/// such as a panic hook during process teardown.
pub fn dispatch_blocking(
	client: &reqwest::blocking::Client,
	url: Url,
	method: Method,
	encoding: Encoding,
	credentials: Option<&Credentials>,
	body: String,
) -> Result<Delivery> {
	debug!(url = %url, method = %method, encoding = %encoding, "Delivering crash report (blocking)");

	let mut request = match method {
		Method::Post => client.post(url),
		Method::Put => client.put(url),
	};
	request = request.header(CONTENT_TYPE, encoding.content_type());
	if let Some(credentials) = credentials {
		request = request.basic_auth(&credentials.login, Some(&credentials.password));
	}

	let response = request
		.body(body)
		.send()
		.map_err(|source| SenderError::Transport {
			method,
			encoding,
			source,
		})?;

	let status = response.status();
	if status.is_success() {
		Ok(Delivery {
			status: status.as_u16(),
		})
	} else {
		let message = response.text().unwrap_or_default();
		Err(rejection(method, encoding, status, message))
	}
}

fn rejection(method: Method, encoding: Encoding, status: StatusCode, message: String) -> SenderError {
	SenderError::Server {
		method,
		encoding,
		status: status.as_u16(),
		message,
	}
}
