//! pipereel CLI: parse shell lines into pipelines.
//!
//! Reads lines from stdin (or a single line given with `-c`), parses each
//! into pipe-delimited subcommands with classified redirections, and prints
//! a text or JSON rendering per line.
//!
//! Exit codes: 0 when every line parsed clean, 1 on a fatal parse or I/O
//! failure, 2 when any line contained a syntax error.

use std::io::{self, BufRead};

use log::debug;

use pipereel::config::Config;
use pipereel::{logging, parse, render};

fn print_usage() {
    eprintln!("usage: pipereel [--json | --text] [--fail-fast] [--dump-config] [-c <line>]");
}

fn main() {
    let mut config = Config::load();
    let mut command: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => config.settings.format = "json".into(),
            "--text" => config.settings.format = "text".into(),
            "--fail-fast" => config.settings.fail_fast = true,
            "-c" => match args.next() {
                Some(line) => command = Some(line),
                None => {
                    eprintln!("pipereel: -c needs an argument");
                    print_usage();
                    std::process::exit(1);
                }
            },
            "--dump-config" => {
                match toml::to_string_pretty(&config) {
                    Ok(rendered) => print!("{rendered}"),
                    Err(e) => {
                        eprintln!("pipereel: failed to render config: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("pipereel: unknown flag: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
    }

    logging::init(&config.settings.log_level);
    debug!(
        "format={} fail_fast={}",
        config.settings.format, config.settings.fail_fast
    );

    let mut had_syntax_error = false;

    if let Some(line) = command {
        process_line(&line, &config, &mut had_syntax_error);
    } else {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("pipereel: failed to read stdin: {e}");
                    std::process::exit(1);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            process_line(&line, &config, &mut had_syntax_error);
            if had_syntax_error && config.settings.fail_fast {
                break;
            }
        }
    }

    if had_syntax_error {
        std::process::exit(2);
    }
}

/// Parse one line and print it per the configured format.
fn process_line(line: &str, config: &Config, had_syntax_error: &mut bool) {
    let pipeline = match parse(line) {
        Ok(p) => p,
        Err(e) => {
            // Fatal: allocation failure or an internal count mismatch.
            eprintln!("pipereel: {e}");
            std::process::exit(1);
        }
    };

    for (index, segment) in pipeline.segments.iter().enumerate() {
        if let Err(e) = segment {
            eprintln!("pipereel: subcommand {}: {e}", index + 1);
        }
    }

    if !pipeline.is_clean() {
        *had_syntax_error = true;
        if config.settings.fail_fast {
            return;
        }
    }

    if config.settings.format == "json" {
        println!("{}", render::to_json(&pipeline));
    } else {
        print!("{pipeline}");
    }
}
