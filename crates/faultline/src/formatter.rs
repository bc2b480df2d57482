// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering of crash records into transport payload bodies.
//!
//! JSON encoding serializes the full record verbatim. FORM encoding renders
//! one of two layouts: the signed fixed form `{sign, context, message,
//! channel}` (the shipped default), or the generic per-field form built on
//! [`remap_fields`]. Rendering failures surface as errors rather than
//! degrading to a partial payload; the caller decides whether to re-submit a
//! reduced record.

use chrono::NaiveDate;
use std::collections::HashMap;

use faultline_core::{
	compute_signature, CrashRecord, Encoding, ReportField, Result, DEFAULT_REPORT_FIELDS,
};

use crate::config::{FormLayout, SignedFormProfile};

/// Render a record into the request body for the given encoding.
///
/// `date` is the signing date for the signed form layout; delivery passes
/// the current UTC date. It is explicit here so that the daily determinism
/// of the `sign` token is testable without clock control.
pub fn render(
	record: &CrashRecord,
	encoding: Encoding,
	layout: &FormLayout,
	date: NaiveDate,
) -> Result<String> {
	match encoding {
		Encoding::Json => record.to_json(),
		Encoding::Form => match layout {
			FormLayout::Signed(profile) => render_signed_form(record, profile, date),
			FormLayout::Fields { fields, mapping } => {
				Ok(encode_form(&remap_fields(record, fields, mapping)))
			}
		},
	}
}

/// The fixed signed form: exactly `sign`, `context`, `message`, `channel`.
///
/// `sign` is the daily token over the shared secret, `context` the full
/// record re-serialized as JSON and embedded as one form value, `message`
/// and `channel` static configuration. Record contents beyond `context` do
/// not change the key set.
fn render_signed_form(
	record: &CrashRecord,
	profile: &SignedFormProfile,
	date: NaiveDate,
) -> Result<String> {
	let context = record.to_json()?;
	let pairs = [
		("sign".to_string(), compute_signature(date, &profile.shared_secret)),
		("context".to_string(), context),
		("message".to_string(), profile.message.clone()),
		("channel".to_string(), profile.channel.clone()),
	];
	Ok(encode_form(&pairs))
}

/// Name each configured field through the mapping, falling back to the
/// canonical name. Fields the record did not capture are skipped. An empty
/// field list selects [`DEFAULT_REPORT_FIELDS`].
///
/// This is the reusable per-field remap primitive; the default delivery
/// configuration does not exercise it (the signed layout above ships), but
/// [`FormLayout::Fields`] wires it into the FORM path.
pub fn remap_fields(
	record: &CrashRecord,
	fields: &[ReportField],
	mapping: &HashMap<ReportField, String>,
) -> Vec<(String, String)> {
	let fields = if fields.is_empty() {
		DEFAULT_REPORT_FIELDS
	} else {
		fields
	};

	fields
		.iter()
		.filter_map(|field| {
			record.get(*field).map(|value| {
				let name = mapping
					.get(field)
					.cloned()
					.unwrap_or_else(|| field.to_string());
				(name, value.to_string())
			})
		})
		.collect()
}

/// Percent-encode key/value pairs as an `application/x-www-form-urlencoded`
/// body.
pub fn encode_form(pairs: &[(String, String)]) -> String {
	pairs
		.iter()
		.map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
		.collect::<Vec<_>>()
		.join("&")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn day(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	fn sample_record() -> CrashRecord {
		CrashRecord::builder()
			.field(ReportField::StackTrace, "NullPointerException")
			.field(ReportField::AppVersionName, "1.0")
			.build()
	}

	fn profile() -> SignedFormProfile {
		SignedFormProfile {
			shared_secret: "5a2f956673127".to_string(),
			message: "crash report".to_string(),
			channel: "beta".to_string(),
		}
	}

	fn decode_form(body: &str) -> Vec<(String, String)> {
		body.split('&')
			.map(|pair| {
				let (key, value) = pair.split_once('=').unwrap();
				(
					urlencoding::decode(key).unwrap().into_owned(),
					urlencoding::decode(value).unwrap().into_owned(),
				)
			})
			.collect()
	}

	#[test]
	fn json_renders_full_record() {
		let body = render(
			&sample_record(),
			Encoding::Json,
			&FormLayout::default(),
			day(2016, 9, 1),
		)
		.unwrap();

		let value: serde_json::Value = serde_json::from_str(&body).unwrap();
		assert_eq!(value["STACK_TRACE"], "NullPointerException");
		assert_eq!(value["APP_VERSION_NAME"], "1.0");
	}

	#[test]
	fn signed_form_has_exactly_the_fixed_keys() {
		let body = render(
			&sample_record(),
			Encoding::Form,
			&FormLayout::Signed(profile()),
			day(2016, 9, 1),
		)
		.unwrap();

		let keys: Vec<String> = decode_form(&body).into_iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["sign", "context", "message", "channel"]);
	}

	#[test]
	fn signed_form_key_set_is_independent_of_record_contents() {
		let big = CrashRecord::builder()
			.field(ReportField::ReportId, "id")
			.field(ReportField::Brand, "acme")
			.field(ReportField::PhoneModel, "one")
			.field(ReportField::UserComment, "it broke")
			.build();

		let body = render(
			&big,
			Encoding::Form,
			&FormLayout::Signed(profile()),
			day(2016, 9, 1),
		)
		.unwrap();

		assert_eq!(decode_form(&body).len(), 4);
	}

	#[test]
	fn signed_form_context_embeds_record_json() {
		let body = render(
			&sample_record(),
			Encoding::Form,
			&FormLayout::Signed(profile()),
			day(2016, 9, 1),
		)
		.unwrap();

		let pairs = decode_form(&body);
		let context = &pairs.iter().find(|(k, _)| k == "context").unwrap().1;
		assert!(context.contains("\"STACK_TRACE\":\"NullPointerException\""));

		let value: serde_json::Value = serde_json::from_str(context).unwrap();
		assert_eq!(value["APP_VERSION_NAME"], "1.0");
	}

	#[test]
	fn signed_form_sign_is_deterministic_per_day() {
		let layout = FormLayout::Signed(profile());
		let a = render(&sample_record(), Encoding::Form, &layout, day(2016, 9, 1)).unwrap();
		let b = render(&sample_record(), Encoding::Form, &layout, day(2016, 9, 1)).unwrap();
		let c = render(&sample_record(), Encoding::Form, &layout, day(2016, 9, 2)).unwrap();

		let sign = |body: &str| decode_form(body)[0].1.clone();
		assert_eq!(sign(&a), sign(&b));
		assert_ne!(sign(&a), sign(&c));
	}

	#[test]
	fn fields_layout_uses_canonical_names_without_mapping() {
		let body = render(
			&sample_record(),
			Encoding::Form,
			&FormLayout::Fields {
				fields: vec![ReportField::StackTrace, ReportField::AppVersionName],
				mapping: HashMap::new(),
			},
			day(2016, 9, 1),
		)
		.unwrap();

		assert_eq!(
			decode_form(&body),
			[
				("STACK_TRACE".to_string(), "NullPointerException".to_string()),
				("APP_VERSION_NAME".to_string(), "1.0".to_string()),
			]
		);
	}

	#[test]
	fn fields_layout_applies_mapping_per_field() {
		let mut mapping = HashMap::new();
		mapping.insert(ReportField::StackTrace, "trace".to_string());

		let pairs = remap_fields(
			&sample_record(),
			&[ReportField::StackTrace, ReportField::AppVersionName],
			&mapping,
		);

		// Mapped field gets the wire name from the table, the rest keep
		// their canonical names.
		assert_eq!(
			pairs,
			[
				("trace".to_string(), "NullPointerException".to_string()),
				("APP_VERSION_NAME".to_string(), "1.0".to_string()),
			]
		);
	}

	#[test]
	fn empty_field_list_selects_defaults() {
		let record = CrashRecord::builder()
			.field(ReportField::StackTrace, "trace")
			.field(ReportField::UserComment, "not in defaults? it is not sent")
			.build();

		let pairs = remap_fields(&record, &[], &HashMap::new());
		assert_eq!(pairs.len(), 1);
		assert_eq!(pairs[0].0, "STACK_TRACE");
	}

	#[test]
	fn form_encoding_escapes_reserved_characters() {
		let pairs = [(
			"CUSTOM_DATA".to_string(),
			"key = a&b, plus = 1+1".to_string(),
		)];
		let body = encode_form(&pairs);
		assert!(!body.contains(' '));
		assert_eq!(body.matches('&').count(), 0);
		assert_eq!(body.matches('=').count(), 1);
	}

	proptest! {
		#[test]
		fn form_bodies_always_decode_back(value in "[^\\x00]{0,60}") {
			let record = CrashRecord::builder()
				.field(ReportField::CustomData, value.clone())
				.build();
			let pairs = remap_fields(&record, &[ReportField::CustomData], &HashMap::new());
			let decoded = decode_form(&encode_form(&pairs));
			prop_assert_eq!(&decoded[0].1, &value);
		}
	}
}
