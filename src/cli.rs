use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use crate::app::{print_keypad, run_keypad};
use crate::calculator::{
    ERROR_MESSAGE, Evaluation, NumeralSystem, Orientation, evaluate_expression,
};
use crate::clipboard::{ResultClipboard, copy_to_clipboard};
use crate::config::{AppConfig, init_config, resolve_config_path, save_config_to};
use crate::input::InputBuffer;

#[derive(Parser)]
#[command(name = "radix-calc")]
#[command(version)]
#[command(about = "A binary/hexadecimal keypad calculator")]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one `operand operator operand` expression
    Eval {
        /// Expression such as `101+11` or `a*5`
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Numeral system the operands are written in
        #[arg(short, long, value_enum)]
        mode: Option<NumeralSystem>,

        /// Radix (2-36) the operands are written in
        #[arg(
            short,
            long,
            conflicts_with = "mode",
            value_parser = clap::value_parser!(u32).range(2..=36)
        )]
        radix: Option<u32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Copy the result to the clipboard, waiting until another program
        /// takes it over
        #[arg(long)]
        copy: bool,
    },
    /// Start an interactive keypad session (default)
    Keypad {
        /// Numeral system of the keypad
        #[arg(short, long, value_enum)]
        mode: Option<NumeralSystem>,

        /// Orientation that picks the keypad when no mode is given
        #[arg(short, long, value_enum, conflicts_with = "mode")]
        orientation: Option<Orientation>,
    },
    /// Print the effective configuration
    Config {
        /// Write the config file if none exists yet
        #[arg(long)]
        init: bool,
    },
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = init_config(cli.config.as_deref());

    let command = cli.command.unwrap_or(Commands::Keypad {
        mode: None,
        orientation: None,
    });

    match command {
        Commands::Eval {
            expression,
            mode,
            radix,
            json,
            copy,
        } => {
            let radix = radix.unwrap_or_else(|| resolve_system(config, mode, None).radix());
            handle_eval(&expression, radix, json, copy)
        }
        Commands::Keypad { mode, orientation } => {
            handle_keypad(config, resolve_system(config, mode, orientation))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { init } => {
            handle_config(cli.config.as_deref(), config, init)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Pick the numeral system from command line flags, falling back to config.
///
/// An explicit mode beats an explicit orientation, which beats the
/// configured mode and then the configured orientation.
pub fn resolve_system(
    config: &AppConfig,
    mode: Option<NumeralSystem>,
    orientation: Option<Orientation>,
) -> NumeralSystem {
    mode.or_else(|| orientation.map(NumeralSystem::for_orientation))
        .unwrap_or_else(|| config.numeral_system())
}

/// Evaluate and print one expression; the exit code reflects success.
fn handle_eval(expression: &str, radix: u32, json: bool, copy: bool) -> Result<ExitCode> {
    let evaluation = {
        let mut stdout = io::stdout().lock();
        let evaluation = write_evaluation(&mut stdout, expression, radix, json)?;
        stdout.flush()?;
        evaluation
    };
    let Some(evaluation) = evaluation else {
        return Ok(ExitCode::FAILURE);
    };

    if copy {
        match copy_to_clipboard(&evaluation.message()) {
            Ok(()) => info!("Clipboard handed over to another program"),
            Err(e) => warn!("{}", e),
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Write the result of evaluating `expression`, or the error sentinel.
///
/// Returns the evaluation on success.
pub fn write_evaluation<W: Write>(
    output: &mut W,
    expression: &str,
    radix: u32,
    json: bool,
) -> Result<Option<Evaluation>> {
    match evaluate_expression(expression, radix) {
        Ok(evaluation) => {
            if json {
                writeln!(output, "{}", serde_json::to_string_pretty(&evaluation)?)?;
            } else {
                writeln!(output, "{}", evaluation.message())?;
            }
            Ok(Some(evaluation))
        }
        Err(e) => {
            debug!(expression, radix, "Evaluation failed: {}", e);
            if json {
                let error = serde_json::json!({
                    "expression": expression,
                    "radix": radix,
                    "error": ERROR_MESSAGE,
                });
                writeln!(output, "{}", serde_json::to_string_pretty(&error)?)?;
            } else {
                writeln!(output, "{}", ERROR_MESSAGE)?;
            }
            Ok(None)
        }
    }
}

fn handle_keypad(config: &AppConfig, system: NumeralSystem) -> Result<()> {
    info!(mode = system.display_name(), "Starting keypad session");

    let mut stdout = io::stdout();
    if config.show_keypad {
        print_keypad(system, &mut stdout)?;
    }

    let mut clipboard = if config.copy_results {
        ResultClipboard::new()
            .inspect_err(|e| warn!("{}, results will not be copied", e))
            .ok()
    } else {
        None
    };

    let mut buffer = InputBuffer::new(system);
    run_keypad(
        &mut buffer,
        &config.prompt,
        io::stdin().lock(),
        &mut stdout,
        |result| {
            if result == ERROR_MESSAGE {
                return;
            }
            if let Some(clipboard) = clipboard.as_mut() {
                match clipboard.copy(result) {
                    Ok(()) => debug!("Result on clipboard while the session runs"),
                    Err(e) => warn!("{}", e),
                }
            }
        },
    )
    .context("Keypad session failed")
}

fn handle_config(path: Option<&Path>, config: &AppConfig, init: bool) -> Result<()> {
    let path = resolve_config_path(path)?;

    if init {
        if path.exists() {
            warn!("Config file already exists at {:?}, leaving it untouched", path);
        } else {
            save_config_to(config, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote config file to {:?}", path);
        }
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "# {}", path.display())?;
    write!(stdout, "{}", toml::to_string_pretty(config)?)?;
    Ok(())
}
