//! shvars: interactive shell with `$`-delimited user variables.
//!
//! Reads lines from a rustyline prompt (or stdin with `--batch`), rewrites
//! variable references, runs `set` / `show variables` / `help`, and prints
//! any other line after substitution.

use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use shvars::config::Config;
use shvars::editor::VarsHelper;
use shvars::{Outcome, Session, logging};

#[derive(Parser, Debug)]
#[command(name = "shvars", version, about = "Shell with $-delimited user variables")]
struct Cli {
    /// Config overlay to merge instead of ~/.config/shvars/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read lines from stdin with no prompt or history
    #[arg(long)]
    batch: bool,

    /// Print the merged configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Empty | Outcome::Assigned { .. } => {}
        Outcome::Variables(vars) => {
            for (name, value) in vars {
                println!("{name}: '{value}'");
            }
        }
        Outcome::Help(text) => print!("{text}"),
        Outcome::Passthrough(line) => println!("{line}"),
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit")
}

/// Process stdin line by line. Fails if any line was rejected.
fn run_batch(session: &mut Session) -> ExitCode {
    let mut failed = false;
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("shvars: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        };
        if is_exit(&line) {
            break;
        }
        match session.handle_line(&line) {
            Ok(outcome) => print_outcome(&outcome),
            Err(e) => {
                eprintln!("shvars: {e}");
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_repl(session: &mut Session, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    use rustyline::error::ReadlineError;
    use rustyline::history::DefaultHistory;
    use rustyline::{CompletionType, Editor};

    let rl_config = rustyline::Config::builder()
        .completion_type(CompletionType::List)
        .max_history_size(config.history.max_entries)?
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let mut rl: Editor<VarsHelper, DefaultHistory> = Editor::with_config(rl_config)?;
    rl.set_helper(Some(VarsHelper::new(session.store().clone())));

    let history_path = config.history_path();
    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    println!("shvars v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for variable syntax, 'exit' to quit.");

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.store = session.store().clone();
        }

        match rl.readline(&config.settings.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                if is_exit(&line) {
                    break;
                }

                match session.handle_line(&line) {
                    Ok(outcome) => print_outcome(&outcome),
                    Err(e) => eprintln!("shvars: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("shvars: {err}");
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        let _ = rl.save_history(path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("shvars: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::load(),
    };

    if cli.dump_config {
        return match config.to_toml() {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("shvars: failed to serialize config: {e}");
                ExitCode::FAILURE
            }
        };
    }

    logging::init(&config);
    let mut session = Session::from_config(&config);

    if cli.batch {
        return run_batch(&mut session);
    }

    match run_repl(&mut session, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shvars: {e}");
            ExitCode::FAILURE
        }
    }
}
