//! Command-line interface for runguide
//! This binary converts plain-text speedrun guides into the guide files read by the overlay.
//!
//! Usage:
//!   runguide convert [`<input>`] [`<output>`] [--format `<format>`]  - Parse a guide and write it
//!   runguide check `<input>`                                      - Parse a guide and report problems
//!   runguide list-formats                                       - List all available output formats
//!
//! Parser options (convert, check):
//!   --config `<file>`     YAML parser configuration
//!   --strict            Fail on lines that don't fit the grammar instead of warning
//!   --prefix-keywords   Menu keywords only count at the start of a line
//!   --headings          Emit act and chapter steps
//!
//! `-v` enables debug logging, `-vv` trace logging. Otherwise `RUST_LOG` applies (default: warn).

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{info, LevelFilter};
use runguide::guide::config::{GrammarPolicy, KeywordMatch, ParserConfig};
use runguide::guide::formats::FormatRegistry;
use runguide::guide::loader::{parse_file, write_guide, GuideError};
use std::collections::BTreeMap;
use std::process;

const DEFAULT_INPUT: &str = "speedrun.txt";
const DEFAULT_OUTPUT: &str = "clair-obscur-guide-complete.json";

fn parser_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("YAML parser configuration file"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject lines that don't fit the grammar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prefix-keywords")
                .long("prefix-keywords")
                .help("Only match menu keywords at the start of a line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("headings")
                .long("headings")
                .help("Emit act and chapter steps")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = Command::new("runguide")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert plain-text speedrun guides into structured guide files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(parser_args(
            Command::new("convert")
                .about("Parse a guide and write it in the chosen format")
                .arg(
                    Arg::new("input")
                        .help("Path to the guide source")
                        .default_value(DEFAULT_INPUT)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("Path of the file to write")
                        .default_value(DEFAULT_OUTPUT)
                        .index(2),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'treeviz')")
                        .default_value("json"),
                ),
        ))
        .subcommand(parser_args(
            Command::new("check")
                .about("Parse a guide and report problems without writing anything")
                .arg(
                    Arg::new("input")
                        .help("Path to the guide source")
                        .required(true)
                        .index(1),
                ),
        ))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("convert", convert_matches)) => handle_convert_command(convert_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

/// Builds the parser configuration: the config file if given, then command-line flags on top.
fn parser_config(matches: &ArgMatches) -> Result<ParserConfig, GuideError> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ParserConfig::load(path)?,
        None => ParserConfig::default(),
    };
    if matches.get_flag("strict") {
        config.grammar = GrammarPolicy::Strict;
    }
    if matches.get_flag("prefix-keywords") {
        config.menu_keywords = KeywordMatch::Prefix;
    }
    if matches.get_flag("headings") {
        config.headings = true;
    }
    Ok(config)
}

fn handle_convert_command(matches: &ArgMatches) -> Result<(), GuideError> {
    let input = matches
        .get_one::<String>("input")
        .map_or(DEFAULT_INPUT, String::as_str);
    let output = matches
        .get_one::<String>("output")
        .map_or(DEFAULT_OUTPUT, String::as_str);
    let format = matches
        .get_one::<String>("format")
        .map_or("json", String::as_str);

    let config = parser_config(matches)?;
    let guide = parse_file(input, &config)?;
    write_guide(&guide, output, format)?;
    info!("converted {} to {}", input, output);

    println!(
        "Wrote {} ({} groups, {} steps)",
        output,
        guide.action_groups.len(),
        guide.step_count()
    );
    Ok(())
}

fn handle_check_command(matches: &ArgMatches) -> Result<(), GuideError> {
    let input = matches
        .get_one::<String>("input")
        .map_or(DEFAULT_INPUT, String::as_str);
    let config = parser_config(matches)?;
    let guide = parse_file(input, &config)?;

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for group in &guide.action_groups {
        *by_kind.entry(group.kind.as_str()).or_default() += 1;
    }

    println!("{} ({})", guide.game, guide.category);
    println!(
        "  {} groups, {} steps, {} chapters",
        guide.action_groups.len(),
        guide.step_count(),
        guide.chapters().len()
    );
    for (kind, count) in &by_kind {
        println!("  {:<10} {}", kind, count);
    }

    guide.validate()?;
    println!("  ok");
    Ok(())
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map_or("", |f| f.description());
        println!("  {:<10} {}", name, description);
    }
}
