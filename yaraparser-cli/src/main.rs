//! CLI utility to tokenize and parse rule files.
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use codespan_reporting::{
    files::SimpleFile,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use yaraparser::error::Error;
use yaraparser::lexer::tokenize;
use yaraparser::rule::{PatternValue, Rule};
use yaraparser::ParseParams;

// Used in integration tests, not in the binary.
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;
#[cfg(test)]
use tempfile as _;

fn build_command() -> Command {
    command!()
        .arg(
            Arg::new("tokens")
                .short('t')
                .long("tokens")
                .action(ArgAction::SetTrue)
                .help("Print the tokens of each file instead of parsing it"),
        )
        .arg(
            Arg::new("no_condition_skip")
                .long("no-condition-skip")
                .action(ArgAction::SetTrue)
                .help("Do not skip the body of conditions sections")
                .long_help(
                    "Do not skip the body of conditions sections.\n\
                     Tokens following 'conditions:' are then parsed as another section.",
                ),
        )
        .arg(
            Arg::new("rules_files")
                .value_name("RULES_FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .required(true)
                .help("Path to a file containing a rule, can be repeated"),
        )
}

#[derive(Debug)]
struct Options {
    print_tokens: bool,
    params: ParseParams,
    rules_files: Vec<PathBuf>,
}

impl Options {
    fn from_args(args: &mut ArgMatches) -> Self {
        let rules_files = match args.remove_many::<PathBuf>("rules_files") {
            Some(v) => v.collect(),
            None => Vec::new(),
        };

        Self {
            print_tokens: args.get_flag("tokens"),
            params: ParseParams::default().skip_condition_body(!args.get_flag("no_condition_skip")),
            rules_files,
        }
    }
}

fn main() -> ExitCode {
    let mut args = build_command().get_matches();
    let options = Options::from_args(&mut args);

    let mut has_errors = false;
    for path in &options.rules_files {
        let contents = match std::fs::read_to_string(path) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("Cannot read rules file {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        };

        if options.print_tokens {
            print_tokens(&contents);
            continue;
        }

        match yaraparser::parse_with_params(&contents, options.params.clone()) {
            Ok(rule) => print_rule(&rule),
            Err(err) => {
                display_diagnostic(path, &contents, &err);
                has_errors = true;
            }
        }
    }

    if has_errors {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn print_tokens(contents: &str) {
    for token in tokenize(contents) {
        println!("{} {:?}", token.kind, token.literal);
    }
}

/// Print a rule, one line per metadata and pattern.
fn print_rule(rule: &Rule) {
    print!("rule {}", rule.name);
    if !rule.tags.is_empty() {
        print!(" : {}", rule.tags.join(" "));
    }
    println!();

    for (key, value) in &rule.metadata {
        println!("    meta {key} = \"{value}\"");
    }
    for (name, pattern) in &rule.patterns {
        match &pattern.value {
            PatternValue::String(s) => print!("    string {name} = \"{s}\""),
            PatternValue::Regex(s) => print!("    string {name} = /{s}/"),
            PatternValue::HexString(s) => print!("    string {name} = {{ {s} }}"),
        }
        for modifier in &pattern.modifiers {
            print!(" {}", modifier.0);
        }
        println!();
    }
}

fn display_diagnostic(path: &Path, contents: &str, err: &Error) {
    let color_choice = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    let path = path.display().to_string();
    let files = SimpleFile::new(&path, contents);
    let diag = err.to_diagnostic();
    let mut lock = writer.lock();
    if let Err(e) = term::emit(&mut lock, &config, &files, &diag) {
        eprintln!("cannot emit diagnostics: {e}");
    }
}
