// Copyright (c) 2025 knix
// All rights reserved.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use herang::{RuntimeConfig, Session, ViolationPolicy};
use log::info;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// What an out-of-range index or empty scatter source does. Defaults to
    /// HERANG_ON_VIOLATION, then to abort
    #[arg(long, value_enum)]
    on_violation: Option<ViolationPolicy>,

    /// Log every builtin dispatch
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Call one builtin; each argument is an expression like "1 | 2" or "(4|5) + 1"
    Call { builtin: String, args: Vec<String> },
    /// Evaluate statements from stdin: `a = 1 | 2`, `a[0] = 7`, `print(a + a)`
    Repl,
}

fn run_call(config: RuntimeConfig, builtin: &str, args: &[String]) -> Result<ExitCode> {
    let mut session = Session::stdio(config);
    let args = args
        .iter()
        .map(|arg| session.eval_line(arg).with_context(|| format!("bad argument '{arg}'")))
        .collect::<Result<Vec<_>>>()?;
    match session.runtime_mut().call(builtin, &args) {
        Ok(value) => {
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}: {e}", "Error".red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_repl(config: RuntimeConfig) -> Result<ExitCode> {
    let mut session = Session::stdio(config);
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = session.read_source_line()? else {
            return Ok(ExitCode::SUCCESS);
        };
        if line.trim().is_empty() {
            continue;
        }
        match session.eval_line(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{}: {e}", "Err".red()),
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let l = Box::leak(Box::new(
        env_logger::Builder::new()
            .format_timestamp(None)
            .filter_level(log::LevelFilter::Debug)
            .build(),
    ));
    log::set_logger(l).map_err(|e| anyhow!("{e}"))?;
    log::set_max_level(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn });

    let config = RuntimeConfig::from_env().with_override(args.on_violation);
    info!("herang v0.1.0, on violation: {}", config.on_violation);

    match args.command {
        Command::Call { builtin, args } => run_call(config, &builtin, &args),
        Command::Repl => run_repl(config),
    }
}
