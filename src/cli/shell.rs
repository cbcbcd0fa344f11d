use std::{env, io};

use crate::cli::input::{EditorSource, LineSource, ScriptSource};
use crate::cli::io::{print_info, Prompter};
use crate::cli::menus::main_menu;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::session::Session;
use crate::config::ConfigManager;
use crate::errors::CliError;

/// When set, input is read line by line from stdin instead of a line editor.
pub const SCRIPT_ENV: &str = "BUDGET_TRACKER_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new().load()?;
    crate::init_with_level(&config.log_level);
    output::set_preferences(OutputPreferences::from(&config));

    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    tracing::info!(?mode, "session starting");

    match mode {
        CliMode::Interactive => run_session(&mut Prompter::new(EditorSource::new()?))?,
        CliMode::Script => run_session(&mut Prompter::new(ScriptSource::new(io::stdin().lock())))?,
    };
    Ok(())
}

/// Runs the main menu until the user exits or input ends, returning the
/// session so callers can inspect what was recorded.
pub fn run_session<S: LineSource>(prompter: &mut Prompter<S>) -> Result<Session, CliError> {
    let mut session = Session::new();

    loop {
        match main_menu::run(&mut session, prompter) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) if err.ends_session() => {
                print_info("Input closed. Goodbye!");
                break;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => session.report_error(&err),
        }
    }

    tracing::info!(records = session.expenses().len(), "session finished");
    Ok(session)
}
