// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report field identifiers and their canonical wire names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// A field of a crash record.
///
/// The canonical wire name of each variant (its SCREAMING_SNAKE serialized
/// form) is used as the JSON object key and as the default form parameter
/// name when no remapping is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportField {
	/// Unique report identifier; appended to the endpoint path on PUT sends.
	ReportId,
	AppVersionCode,
	AppVersionName,
	PackageName,
	PhoneModel,
	Brand,
	AndroidVersion,
	/// The fault's stack trace, rendered as a single string.
	StackTrace,
	/// Collaborator-supplied key/value pairs, one `key = value` per line.
	CustomData,
	UserComment,
	UserCrashDate,
	InstallationId,
	AvailableMemSize,
	TotalMemSize,
}

impl ReportField {
	/// All fields, in declaration order.
	pub const ALL: &'static [ReportField] = &[
		Self::ReportId,
		Self::AppVersionCode,
		Self::AppVersionName,
		Self::PackageName,
		Self::PhoneModel,
		Self::Brand,
		Self::AndroidVersion,
		Self::StackTrace,
		Self::CustomData,
		Self::UserComment,
		Self::UserCrashDate,
		Self::InstallationId,
		Self::AvailableMemSize,
		Self::TotalMemSize,
	];

	/// The canonical wire name of this field.
	pub fn canonical_name(&self) -> &'static str {
		match self {
			Self::ReportId => "REPORT_ID",
			Self::AppVersionCode => "APP_VERSION_CODE",
			Self::AppVersionName => "APP_VERSION_NAME",
			Self::PackageName => "PACKAGE_NAME",
			Self::PhoneModel => "PHONE_MODEL",
			Self::Brand => "BRAND",
			Self::AndroidVersion => "ANDROID_VERSION",
			Self::StackTrace => "STACK_TRACE",
			Self::CustomData => "CUSTOM_DATA",
			Self::UserComment => "USER_COMMENT",
			Self::UserCrashDate => "USER_CRASH_DATE",
			Self::InstallationId => "INSTALLATION_ID",
			Self::AvailableMemSize => "AVAILABLE_MEM_SIZE",
			Self::TotalMemSize => "TOTAL_MEM_SIZE",
		}
	}
}

/// The fields a collector receives when no explicit field set is configured.
pub const DEFAULT_REPORT_FIELDS: &[ReportField] = &[
	ReportField::ReportId,
	ReportField::AppVersionCode,
	ReportField::AppVersionName,
	ReportField::PackageName,
	ReportField::PhoneModel,
	ReportField::Brand,
	ReportField::AndroidVersion,
	ReportField::StackTrace,
	ReportField::CustomData,
	ReportField::UserCrashDate,
	ReportField::InstallationId,
];

impl fmt::Display for ReportField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.canonical_name())
	}
}

impl FromStr for ReportField {
	type Err = ReportError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.find(|field| field.canonical_name() == s)
			.copied()
			.ok_or_else(|| ReportError::UnknownField(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn canonical_names_are_screaming_snake() {
		for field in ReportField::ALL {
			let name = field.canonical_name();
			assert!(!name.is_empty());
			assert!(name
				.chars()
				.all(|c| c.is_ascii_uppercase() || c == '_' || c.is_ascii_digit()));
		}
	}

	#[test]
	fn serde_name_matches_canonical_name() {
		for field in ReportField::ALL {
			let json = serde_json::to_string(field).unwrap();
			assert_eq!(json, format!("\"{}\"", field.canonical_name()));
		}
	}

	#[test]
	fn unknown_field_is_rejected() {
		let err = "NOT_A_FIELD".parse::<ReportField>().unwrap_err();
		assert!(matches!(err, ReportError::UnknownField(_)));
	}

	#[test]
	fn default_fields_are_a_subset_of_all() {
		for field in DEFAULT_REPORT_FIELDS {
			assert!(ReportField::ALL.contains(field));
		}
	}

	proptest! {
		#[test]
		fn field_name_roundtrip(idx in 0..ReportField::ALL.len()) {
			let field = ReportField::ALL[idx];
			let parsed: ReportField = field.canonical_name().parse().unwrap();
			prop_assert_eq!(field, parsed);
		}
	}
}
