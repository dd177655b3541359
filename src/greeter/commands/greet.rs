use crate::commands::{CmdMessage, CmdResult};

pub const GREETING_PREFIX: &str = "Hello ";
pub const GREETING_SUFFIX: &str = ", Welcome to the jungle";
pub const NAME_SEPARATOR: &str = " ";
pub const MISSING_NAMES: &str = "[ERROR]: Please type name(s) as argument";

/// Greets every name in order, or asks for names when there are none.
///
/// Exactly one message is produced either way.
pub fn run<S: AsRef<str>>(names: &[S]) -> CmdResult {
    if names.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(MISSING_NAMES));
        return result;
    }

    let greeted: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(greeting(&greeted)));
    result.with_greeted(greeted)
}

/// Builds the greeting line. Empty names are kept as empty slots between separators.
pub fn greeting<S: AsRef<str>>(names: &[S]) -> String {
    let joined = names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR);
    format!("{}{}{}", GREETING_PREFIX, joined, GREETING_SUFFIX)
}
