use clap::{Parser, Subcommand};
use git_playground::core::{
    error::Result, print_error, print_info, print_outcome, print_section_header,
    print_success, print_transcript_entry, PlaygroundConfig, Session,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "git-playground")]
#[command(about = "Simulate git commands on an in-memory repository and lay out its history")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Session snapshot to load and save (defaults to the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more git command lines, e.g. run "git init" "git commit -m 'first'"
    Run {
        /// Full command lines, each starting with "git"
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Read git command lines from stdin until EOF or "exit"
    Repl,
    /// Print the layout of the current repository as JSON
    Layout,
    /// Print the session snapshot as JSON
    Show,
    /// Print every command run so far with its outcome
    History,
    /// Start over with an uninitialized repository
    Clear,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            if e.is_internal() {
                log::error!("Repository model is corrupt: {e}");
            }
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when a simulated command was rejected
fn run(cli: Cli) -> Result<bool> {
    let config = PlaygroundConfig::load_or_create()?;
    let path = match cli.state {
        Some(path) => path,
        None => config.session_path()?,
    };
    let mut session = Session::load(&path)?.with_interpreter(config.interpreter());

    match cli.command {
        Commands::Run { commands } => {
            let mut all_succeeded = true;
            for command in &commands {
                let outcome = session.run(command)?;
                print_outcome(&outcome);
                all_succeeded &= outcome.success;
            }
            session.save(&path)?;
            Ok(all_succeeded)
        }
        Commands::Repl => {
            repl(&mut session, &path)?;
            Ok(true)
        }
        Commands::Layout => {
            println!("{}", serde_json::to_string_pretty(session.layout())?);
            Ok(true)
        }
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(&session)?);
            Ok(true)
        }
        Commands::History => {
            if session.transcript().is_empty() {
                print_info("No commands run yet");
            } else {
                print_section_header("Transcript");
                session.transcript().iter().for_each(print_transcript_entry);
            }
            Ok(true)
        }
        Commands::Clear => {
            session.reset();
            session.save(&path)?;
            print_success("Session cleared");
            Ok(true)
        }
    }
}

fn repl(session: &mut Session, path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let outcome = session.run(line)?;
        print_outcome(&outcome);
        // Save after each command so an interrupted repl keeps its progress
        session.save(path)?;
    }

    println!();
    Ok(())
}
