//! Plotlang CLI - Command line interface
//!
//! Runs a script file, a single `-e` command, or an interactive loop on
//! stdin. All commands in one invocation share a single session, so
//! attribute statements affect every later draw.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use plotlang_api::{init_config, run_with_report, RunConfig, Session};
use plotlang_log::{FileSink, Level, Logger, StderrSink};

#[derive(Parser)]
#[command(
    name = "plotlang",
    about = "Parametric 2-D plot language - command interpreter",
    version = "0.1.0"
)]
struct Cli {
    /// Script file; one command per line (omit for interactive mode)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Execute a single command and exit
    #[arg(short = 'e', long = "eval", value_name = "COMMAND")]
    eval: Option<String>,

    /// Emit results and errors as JSON
    #[arg(long)]
    json: bool,

    /// Echo each command before its result
    #[arg(long)]
    show_source: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, default_value = "silent")]
    log_level: String,

    /// Append log records to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let logger = build_logger(&cli);
    let config = RunConfig {
        echo_source: cli.show_source,
        logger,
        ..Default::default()
    };
    init_config(config.clone());

    let mut session = Session::new();

    if let Some(command) = &cli.eval {
        let failed = !execute_command(command, &mut session, &config, &cli);
        if failed {
            process::exit(1);
        }
        return;
    }

    if let Some(path) = &cli.script {
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: Cannot read script '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !execute_command(line, &mut session, &config, &cli) {
                process::exit(1);
            }
        }
        return;
    }

    interactive_loop(&mut session, &config, &cli);
}

/// Execute one command and print the result; returns false on failure.
fn execute_command(command: &str, session: &mut Session, config: &RunConfig, cli: &Cli) -> bool {
    if config.echo_source {
        println!("> {command}");
    }

    match run_with_report(command, session, config) {
        Ok(output) => {
            if cli.json {
                match serde_json::to_string(&output) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("Error: cannot serialize output: {e}"),
                }
            } else {
                println!("{}", output.message);
                for point in &output.points {
                    println!("  ( {}, {} )", point.x, point.y);
                }
            }
            true
        }
        Err(report) => {
            if cli.json {
                eprintln!("{}", report.to_json());
            } else {
                eprintln!("{report}");
            }
            false
        }
    }
}

/// Read commands from stdin until EOF; errors do not end the loop.
fn interactive_loop(session: &mut Session, config: &RunConfig, cli: &Cli) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("plot> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: cannot read input: {e}");
                break;
            }
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" || command == "exit" {
            break;
        }

        execute_command(command, session, config, cli);
    }
}

/// Build the logger from the CLI flags.
fn build_logger(cli: &Cli) -> Arc<Logger> {
    let Some(level) = parse_log_level(&cli.log_level) else {
        eprintln!("Error: unknown log level '{}'", cli.log_level);
        process::exit(1);
    };

    let Some(level) = level else {
        return Logger::noop();
    };

    // diagnostics go to stderr so stdout stays parseable
    let logger = Logger::new(level).with_sink(StderrSink);
    if let Some(path) = &cli.log_file {
        match FileSink::new(path) {
            Ok(sink) => logger.add_sink(sink),
            Err(e) => {
                eprintln!("Error: cannot open log file '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }
    logger
}

/// Outer Option is parse success; inner None means logging is off.
fn parse_log_level(s: &str) -> Option<Option<Level>> {
    match s.to_lowercase().as_str() {
        "silent" => Some(None),
        "error" => Some(Some(Level::Error)),
        "warn" => Some(Some(Level::Warn)),
        "info" => Some(Some(Level::Info)),
        "debug" => Some(Some(Level::Debug)),
        "trace" => Some(Some(Level::Trace)),
        _ => None,
    }
}
