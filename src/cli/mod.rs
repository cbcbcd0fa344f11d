//! Interactive session driver: menus, validated prompts and styled output.

pub mod input;
pub mod io;
pub mod menus;
pub mod output;
pub mod session;
mod shell;
pub mod validation;

pub use shell::{run_cli, run_session, CliMode, LoopControl, SCRIPT_ENV};
