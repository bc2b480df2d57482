// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The crash record: an ordered, immutable snapshot of an application fault.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::Result;
use crate::field::ReportField;

/// An ordered mapping from report field to captured value.
///
/// A record is assembled once by the crash-capture collaborator via
/// [`CrashRecordBuilder`] and is read-only afterwards. Iteration order (and
/// therefore JSON key order) follows the declaration order of
/// [`ReportField`], so a given record always renders to the same payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrashRecord {
	fields: BTreeMap<ReportField, String>,
}

impl CrashRecord {
	/// Starts building a new record.
	pub fn builder() -> CrashRecordBuilder {
		CrashRecordBuilder::new()
	}

	/// Returns the captured value for a field, if present.
	pub fn get(&self, field: ReportField) -> Option<&str> {
		self.fields.get(&field).map(String::as_str)
	}

	/// Returns true if the record captured a value for the field.
	pub fn contains(&self, field: ReportField) -> bool {
		self.fields.contains_key(&field)
	}

	/// Number of captured fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterates over the captured fields in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (ReportField, &str)> {
		self.fields.iter().map(|(field, value)| (*field, value.as_str()))
	}

	/// Renders the full record as a single JSON object.
	///
	/// Keys are the canonical field names, values the captured strings,
	/// no filtering. This is both the JSON payload body and the embedded
	/// `context` value of the signed form layout.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Builder for a [`CrashRecord`].
pub struct CrashRecordBuilder {
	fields: BTreeMap<ReportField, String>,
}

impl CrashRecordBuilder {
	pub fn new() -> Self {
		Self {
			fields: BTreeMap::new(),
		}
	}

	/// Captures a field value. A repeated field keeps the last value.
	pub fn field(mut self, field: ReportField, value: impl Into<String>) -> Self {
		self.fields.insert(field, value.into());
		self
	}

	/// Captures the report identifier used for PUT resource addressing.
	pub fn report_id(self, id: Uuid) -> Self {
		self.field(ReportField::ReportId, id.to_string())
	}

	/// Captures a freshly generated report identifier.
	pub fn generated_report_id(self) -> Self {
		self.report_id(Uuid::now_v7())
	}

	/// Seals the record. No mutation is possible afterwards.
	pub fn build(self) -> CrashRecord {
		CrashRecord {
			fields: self.fields,
		}
	}
}

impl Default for CrashRecordBuilder {
	fn default() -> Self {
		Self::new()
	}
}
