// foil, a first-order inductive learner
// Copyright (C) 2024 FOIL contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! `foil learn <FILE> [--cache] [--json]`: parses a problem file, runs
//! `foil_lib::learn`, and prints the resulting hypothesis. Everything THE
//! CORE is explicitly forbidden from doing — parsing, file I/O, logging,
//! process exit codes (spec §1, §6) — lives here instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{crate_version, Arg, Command};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::{
    self,
    termcolor::{ColorChoice, StandardStream},
    Config,
};
use colored::Colorize;

use foil::{problem_file, report};
use foil_lib::Cache;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("foil")
        .version(crate_version!())
        .about("Learns definite Horn clauses from labelled examples (FOIL)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("learn")
                .about("Learns a hypothesis for a target relation from a problem file")
                .arg(
                    Arg::new("FILE")
                        .required(true)
                        .index(1)
                        .help("Path to the problem file"),
                )
                .arg(
                    Arg::new("cache")
                        .long("cache")
                        .help("Consult and update a memoization cache keyed by problem"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the hypothesis as JSON instead of clause text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("learn", sub)) => run_learn(sub),
        _ => ExitCode::FAILURE,
    }
}

fn run_learn(sub: &clap::ArgMatches) -> ExitCode {
    let path = PathBuf::from(sub.value_of("FILE").expect("FILE is required"));
    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "{} reading {}: {}",
                "error:".red().bold(),
                path.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let file = SimpleFile::new(display_name(&path), source.clone());
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = Config::default();

    let problem = match problem_file::load(&source) {
        Ok(problem) => problem,
        Err(e) => {
            emit(&report::load_error_diagnostic(&e), &writer, &config, &file);
            return ExitCode::FAILURE;
        }
    };

    let cache = if sub.is_present("cache") {
        Some(Cache::new())
    } else {
        None
    };

    let hypothesis = match foil_lib::learn(&problem, cache.as_ref()) {
        Ok(hypothesis) => hypothesis,
        Err(e) => {
            emit(&report::foil_error_diagnostic(&e), &writer, &config, &file);
            return ExitCode::FAILURE;
        }
    };

    if sub.is_present("json") {
        match serde_json::to_string_pretty(&hypothesis) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} serializing hypothesis: {}", "error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        }
    } else if hypothesis.is_empty() {
        println!("{}", "no hypothesis found".yellow());
    } else {
        for clause in &hypothesis {
            println!("{}", clause);
        }
    }

    ExitCode::SUCCESS
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("problem")
        .to_string()
}

fn emit(
    diagnostic: &Diagnostic<()>,
    writer: &StandardStream,
    config: &Config,
    file: &SimpleFile<String, String>,
) {
    term::emit(&mut writer.lock(), config, file, diagnostic).expect("failed to emit diagnostic");
}
