//! Facade over the command layer. Callers get structured results and decide
//! for themselves how to present them.

use crate::commands::greet;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub fn greet<S: AsRef<str>>(names: &[S]) -> CmdResult {
    greet::run(names)
}
