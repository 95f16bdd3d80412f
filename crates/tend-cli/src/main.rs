use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use tend_core::{Category, Config, FlowController, Step, TendError};

mod screens;

/// tend - a guided reflection flow for the terminal.
#[derive(Parser)]
#[command(name = "tend")]
#[command(about = "A guided reflection flow for the terminal", long_about = None)]
struct Cli {
    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated analysis delay
    #[arg(long)]
    fast: bool,

    /// Path to a config file (defaults to ~/.config/tend/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/history".to_string(),
                "/stats".to_string(),
                "/paths".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The main entry point for the tend reflection REPL.
///
/// Sets up a rustyline-based REPL that:
/// 1. Loads configuration and builds the flow controller (seedable via --seed)
/// 2. Provides command completion for /history, /stats, /paths, and /quit
/// 3. Dispatches each line to the current flow step
/// 4. Runs the simulated analysis delay on a tokio timer
/// 5. Displays colored output per screen
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut flow = match cli.seed {
        Some(seed) => FlowController::with_seed(config, seed),
        None => FlowController::new(config),
    };
    log::debug!("flow controller ready (seeded: {})", cli.seed.is_some());

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    screens::welcome();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "/quit" || trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Until next time.".bright_green());
                    break;
                }

                // Slash commands work at any step
                if trimmed.starts_with('/') {
                    handle_command(trimmed, &mut flow);
                    continue;
                }

                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(&line);
                }

                if let Err(e) = dispatch(&mut flow, trimmed, cli.fast).await {
                    eprintln!("{}", format!("Error: {e}").red());
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

/// Routes a line of input to the transition the current step expects.
async fn dispatch(flow: &mut FlowController, input: &str, fast: bool) -> Result<()> {
    match flow.step() {
        Step::Welcome => {
            if input.eq_ignore_ascii_case("tour") {
                flow.begin_onboarding()?;
                screens::onboarding();
            } else {
                flow.begin()?;
                screens::input(flow.profile());
            }
        }
        Step::Onboarding => {
            flow.finish_onboarding()?;
            screens::input(flow.profile());
        }
        Step::Input => match flow.submit(input) {
            Ok(()) => {
                screens::processing();
                if !fast {
                    tokio::time::sleep(flow.processing_delay()).await;
                }
                flow.finish_processing()?;
                let link = flow.explorer_link();
                screens::insight(flow.session(), link.as_deref());
            }
            Err(e @ TendError::InputTooShort { .. }) => {
                screens::input_too_short(&e.to_string());
            }
            Err(e) => return Err(e.into()),
        },
        // Processing is never an interactive step: the Input arm runs the
        // delay and finishes the analysis before returning to the prompt.
        Step::Processing => {
            flow.finish_processing()?;
            let link = flow.explorer_link();
            screens::insight(flow.session(), link.as_deref());
        }
        Step::Insight => {
            flow.reveal()?;
            screens::path_selection(flow.session().assigned);
        }
        Step::PathSelection => match input.parse::<Category>() {
            Ok(chosen) => {
                flow.confirm(chosen)?;
                let stats = flow.community_stats();
                screens::dashboard(flow, &stats);
            }
            Err(e) => screens::unknown_path(&e.to_string()),
        },
        Step::Dashboard => {
            flow.start_new()?;
            screens::input(flow.profile());
        }
    }
    Ok(())
}

/// Handles slash commands, available at any step.
fn handle_command(command: &str, flow: &mut FlowController) {
    match command {
        "/history" => {
            if flow.history().is_empty() {
                println!("{}", "No reflections yet.".bright_black());
            } else {
                screens::history(flow.history());
            }
        }
        "/stats" => {
            let stats = flow.community_stats();
            let profile = flow.profile();
            println!(
                "{}",
                format!(
                    "{} reflections · {} day streak",
                    profile.total_reflections, profile.current_streak
                )
                .bright_white()
            );
            screens::community(&stats);
        }
        "/paths" => screens::paths(),
        _ => println!("{}", "Unknown command".bright_black()),
    }
}
