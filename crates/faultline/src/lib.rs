// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Crash-report delivery SDK.
//!
//! faultline takes a [`CrashRecord`] assembled by a crash-capture
//! collaborator, renders it into a transport payload (JSON, or a signed
//! form-encoded layout) and delivers it to a collector endpoint over HTTP
//! with a single POST or PUT. One attempt per report: no queueing, no
//! retries, no backoff. Every failure comes back to the caller as one typed
//! outcome.
//!
//! # Example
//!
//! ```ignore
//! use faultline::{CrashRecord, ReportField, ReportSender, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let record = CrashRecord::builder()
//!         .generated_report_id()
//!         .field(ReportField::AppVersionName, "1.0")
//!         .field(ReportField::StackTrace, "thread 'main' panicked at ...")
//!         .build();
//!
//!     let config = TransportConfig::new("https://collector.example.com/report");
//!     let sender = ReportSender::new(config)?;
//!     let delivery = sender.submit(&record).await?;
//!     println!("accepted with status {}", delivery.status);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod sender;
pub mod transport;

pub use config::{Credentials, FormLayout, SignedFormProfile, TransportConfig};
pub use error::{Result, SenderError};
pub use sender::{submit, ReportSender, ReportSenderBuilder};
pub use transport::Delivery;

// Re-export core types for convenience
pub use faultline_core::{
	compute_signature, CrashRecord, CrashRecordBuilder, Encoding, Method, ReportError,
	ReportField, DEFAULT_REPORT_FIELDS,
};
