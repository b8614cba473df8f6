// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for file-to-file conversion.
//!
//! These tests run `convert` against real files and check the YAML output
//! line by line.

mod common;

use common::EnvFixture;
use envyaml::domain::{ConvertError, SkipSet};
use envyaml::prelude::*;
use std::collections::BTreeMap;

#[test]
fn test_end_to_end_example() {
    let fixture = EnvFixture::new(
        "FOO=bar\nNEXTAUTH_URL=https://example.com\n# comment\nBAZ=it's fine\n",
    );

    let count = convert(&fixture.source, &fixture.dest, &SkipSet::default()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(fixture.output(), "FOO: 'bar'\nBAZ: 'it'\"'\"'s fine'\n");
}

#[test]
fn test_count_matches_output_lines() {
    let fixture = EnvFixture::new(
        "A=1\n\n# note\nB=2\nGOOGLE_APPLICATION_CREDENTIALS=/keys/sa.json\nnot-a-pair\nC=3\n",
    );

    let count = convert(&fixture.source, &fixture.dest, &SkipSet::default()).unwrap();

    assert_eq!(count, 3);
    assert_eq!(fixture.output().lines().count(), count);
}

#[test]
fn test_skipped_keys_never_in_output() {
    let fixture = EnvFixture::new(
        "NEXTAUTH_URL=http://localhost:3000\n\
         APP=web\n\
         GOOGLE_APPLICATION_CREDENTIALS='/home/me/key.json'\n\
         NEXTAUTH_URL=https://prod.example.com\n",
    );

    convert(&fixture.source, &fixture.dest, &SkipSet::default()).unwrap();
    let output = fixture.output();

    assert_eq!(output, "APP: 'web'\n");
    assert!(!output.contains("NEXTAUTH_URL"));
    assert!(!output.contains("GOOGLE_APPLICATION_CREDENTIALS"));
}

#[test]
fn test_custom_skip_set() {
    let fixture = EnvFixture::new("NEXTAUTH_URL=x\nSECRET=y\n");

    let count = convert(
        &fixture.source,
        &fixture.dest,
        &SkipSet::from_keys(["SECRET"]),
    )
    .unwrap();

    assert_eq!(count, 1);
    assert_eq!(fixture.output(), "NEXTAUTH_URL: 'x'\n");
}

#[test]
fn test_long_base64_value() {
    let key = "QUJD".repeat(2048);
    let fixture = EnvFixture::new(&format!("GCP_SA_KEY_B64={}\n", key));

    convert(&fixture.source, &fixture.dest, &SkipSet::default()).unwrap();

    assert_eq!(fixture.output(), format!("GCP_SA_KEY_B64: '{}'\n", key));
}

#[test]
fn test_output_without_quotes_is_yaml_string_map() {
    let fixture = EnvFixture::new(
        "PORT=3000\nENABLED=true\nRATIO=0.5\nNULLISH=null\nDSN=postgres://u:p@h:5432/db?sslmode=require\n",
    );

    convert(&fixture.source, &fixture.dest, &SkipSet::default()).unwrap();

    let parsed: BTreeMap<String, String> = serde_yaml::from_str(&fixture.output()).unwrap();
    assert_eq!(parsed.len(), 5);
    assert_eq!(parsed["PORT"], "3000");
    assert_eq!(parsed["ENABLED"], "true");
    assert_eq!(parsed["RATIO"], "0.5");
    assert_eq!(parsed["NULLISH"], "null");
    assert_eq!(parsed["DSN"], "postgres://u:p@h:5432/db?sslmode=require");
}

#[test]
fn test_render_matches_file_conversion() {
    let content = "X=1\nY=it's\n";
    let fixture = EnvFixture::new(content);

    convert(&fixture.source, &fixture.dest, &SkipSet::default()).unwrap();
    let rendered = Converter::new().render(content);

    assert_eq!(rendered.output, fixture.output());
}

#[test]
fn test_missing_source_file() {
    let fixture = EnvFixture::new("");
    let missing = fixture.dir.path().join("does-not-exist.env");

    let result = convert(&missing, &fixture.dest, &SkipSet::default());

    assert!(matches!(result, Err(ConvertError::SourceNotFound { .. })));
}

#[test]
fn test_unwritable_destination() {
    let fixture = EnvFixture::new("A=1\n");
    // The directory itself cannot be opened as a file for writing
    let dest = fixture.dir.path().to_path_buf();

    let result = convert(&fixture.source, &dest, &SkipSet::default());

    assert!(matches!(result, Err(ConvertError::DestinationWrite { .. })));
}
