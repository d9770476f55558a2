//! Additional tests for the CLI module

use chatscan::cli::{Args, DEFAULT_OUTPUT, OutputFormat};
use chatscan::config::AnalysisConfig;
use chatscan::parsing::HeaderStyle;
use clap::{Parser, ValueEnum};

fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("chatscan").chain(argv.iter().copied()))
}

#[test]
fn test_output_format_value_names() {
    assert_eq!(OutputFormat::from_str("csv", true).unwrap(), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_str("json", true).unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("jsonl", true).unwrap(), OutputFormat::Jsonl);

    // Alias and case variations
    assert_eq!(OutputFormat::from_str("ndjson", true).unwrap(), OutputFormat::Jsonl);
    assert_eq!(OutputFormat::from_str("JSON", true).unwrap(), OutputFormat::Json);
}

#[test]
fn test_output_format_value_errors() {
    assert!(OutputFormat::from_str("", true).is_err());
    assert!(OutputFormat::from_str("xml", true).is_err());
    assert!(OutputFormat::from_str("txt", true).is_err());
}

#[test]
fn test_output_format_into_library() {
    for (cli, lib) in [
        (OutputFormat::Csv, chatscan::format::OutputFormat::Csv),
        (OutputFormat::Json, chatscan::format::OutputFormat::Json),
        (OutputFormat::Jsonl, chatscan::format::OutputFormat::Jsonl),
    ] {
        assert_eq!(chatscan::format::OutputFormat::from(cli), lib);
        assert_eq!(cli.to_string(), lib.to_string());
    }
}

#[test]
fn test_output_format_serde() {
    let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
    assert_eq!(json, "\"jsonl\"");
    let back: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
    assert_eq!(back, OutputFormat::Csv);
}

#[test]
fn test_args_defaults() {
    let args = parse(&["chat.txt"]).unwrap();
    assert_eq!(args.input, "chat.txt");
    assert_eq!(args.output, DEFAULT_OUTPUT);
    assert_eq!(args.output_path(), "chat_events.csv");
    assert!(args.bad_words.is_empty());
    assert!(!args.sensitive);
    assert_eq!(args.analysis_config(), AnalysisConfig::default());
    assert_eq!(args.transcript_config().header_style, HeaderStyle::TwelveHour);
}

#[test]
fn test_args_full_command_line() {
    let args = parse(&[
        "chat.txt",
        "-o",
        "events.json",
        "-f",
        "json",
        "--user",
        "Alice",
        "--after",
        "2024-01-01",
        "--before",
        "2024-12-31",
        "--stop-words",
        "stop.txt",
        "--bad-words",
        "bad.txt",
        "--sensitive",
        "--search",
        "meet",
        "--top",
        "10",
        "-v",
    ])
    .unwrap();

    assert_eq!(args.output_path(), "events.json");
    assert_eq!(args.stop_words.as_deref(), Some("stop.txt"));
    assert!(args.sensitive);
    assert_eq!(args.search.as_deref(), Some("meet"));
    assert_eq!(args.analysis_config().top_words, 10);
    assert_eq!(args.log_level(), "debug");

    let selector = args.selector().unwrap();
    assert_eq!(selector.user.as_deref(), Some("Alice"));
    assert!(selector.has_date_filter());
}

#[test]
fn test_args_errors() {
    assert!(parse(&[]).is_err());
    assert!(parse(&["chat.txt", "--top", "many"]).is_err());
    assert!(parse(&["chat.txt", "-f", "xml"]).is_err());

    let args = parse(&["chat.txt", "--after", "2024/01/01"]).unwrap();
    assert!(args.selector().unwrap_err().is_invalid_date());
}
