//! Tests for decode and encode subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;
use tic_core::logging::LogSink;

#[test]
fn cli_parse_decode() {
    match parse(&["tic", "decode", "/tmp/capture.bin"]) {
        Some(CliCommand::Decode { path, json }) => {
            assert_eq!(path, Path::new("/tmp/capture.bin"));
            assert!(!json);
        }
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_decode_json() {
    match parse(&["tic", "decode", "x.bin", "--json"]) {
        Some(CliCommand::Decode { json, .. }) => assert!(json),
        _ => panic!("expected Decode with --json"),
    }
}

#[test]
fn cli_parse_encode() {
    match parse(&[
        "tic",
        "encode",
        "ADCO=999999999999",
        "PAPP=00450",
        "--out",
        "frame.bin",
    ]) {
        Some(CliCommand::Encode { datasets, out }) => {
            assert_eq!(datasets, vec!["ADCO=999999999999", "PAPP=00450"]);
            assert_eq!(out, Path::new("frame.bin"));
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_encode_requires_datasets_and_out() {
    assert!(Cli::try_parse_from(["tic", "encode", "--out", "frame.bin"]).is_err());
    assert!(Cli::try_parse_from(["tic", "encode", "ADCO=1"]).is_err());
}

#[test]
fn decode_and_encode_log_to_state_file() {
    let decode = parse(&["tic", "decode", "x.bin"]).unwrap();
    assert_eq!(decode.log_sink(), LogSink::StateFile);
    let encode = parse(&["tic", "encode", "A=1", "--out", "f.bin"]).unwrap();
    assert_eq!(encode.log_sink(), LogSink::StateFile);
}
