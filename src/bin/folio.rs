//! Command-line interface for folio
//! This binary converts folio markup files into HTML articles, or dumps the intermediate
//! tokens and trees for inspection.
//!
//! Usage:
//!   folio `<path>` [--format `<format>`] [--config `<file>`] [--indent `<n>`]  - Convert a file
//!   folio --list-formats                                                - List output formats

use clap::{value_parser, Arg, ArgAction, Command};
use folio::folio::config::Loader;
use folio::folio::diagnostics::TracingSink;
use folio::folio::processor::{process_file, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts folio markup into nested HTML articles")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the folio file")
                .required_unless_present("list-formats")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (html, tokens-json, ast-json)")
                .default_value("html"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level in the HTML output")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser activity to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        eprintln!("Error: a path is required unless listing formats");
        std::process::exit(1);
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    let config_path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let indent = matches.get_one::<u16>("indent").copied();

    handle_convert_command(path, format, config_path, indent);
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "folio=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    path: &Path,
    format: &str,
    config_path: Option<&Path>,
    indent: Option<u16>,
) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut loader = Loader::new();
    if let Some(config_path) = config_path {
        loader = loader.with_file(config_path);
    }
    if let Some(indent) = indent {
        loader = loader
            .set_override("render.indent_width", i64::from(indent))
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, format, &config, &TracingSink).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::available() {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
