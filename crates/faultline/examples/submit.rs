// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: Deliver a crash report using the faultline SDK.
//!
//! Run with:
//!   cargo run --example submit -p faultline

use faultline::{
	CrashRecord, Encoding, FormLayout, ReportField, ReportSender, SignedFormProfile,
	TransportConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let endpoint = std::env::var("FAULTLINE_ENDPOINT")
		.unwrap_or_else(|_| "http://127.0.0.1:8080/crash/report".to_string());

	println!("Delivering demo crash report to {endpoint}");

	// What a crash-capture collaborator would assemble at fault time.
	let record = CrashRecord::builder()
		.generated_report_id()
		.field(ReportField::AppVersionCode, "7")
		.field(ReportField::AppVersionName, "1.0")
		.field(ReportField::PackageName, "com.example.demo")
		.field(ReportField::AndroidVersion, "7.0")
		.field(
			ReportField::StackTrace,
			"java.lang.NullPointerException\n\tat com.example.demo.MainActivity.onClick",
		)
		.field(ReportField::CustomData, "testKey1 = testValue1")
		.build();

	let mut config = TransportConfig::new(endpoint);
	config.encoding = Encoding::Form;
	config.form_layout = FormLayout::Signed(SignedFormProfile {
		shared_secret: "5a2f956673127".to_string(),
		message: "demo crash".to_string(),
		channel: "development".to_string(),
	});
	config.log_payloads = true;

	let sender = ReportSender::builder()
		.config(config)
		.basic_auth("demo", "demo")
		.build()?;

	match sender.submit(&record).await {
		Ok(delivery) => println!("collector accepted the report (status {})", delivery.status),
		Err(err) => println!("delivery failed: {err}"),
	}

	Ok(())
}
