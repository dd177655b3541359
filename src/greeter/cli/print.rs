use greeter::api::{CmdMessage, MessageLevel};
use greeter::error::Result;
use std::io::Write;

/// Writes each message as one plain line. Error-level messages go to the same
/// writer as everything else.
pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Success => log::debug!("printing greeting"),
            MessageLevel::Error => log::debug!("printing advisory"),
        }
        writeln!(out, "{}", message.content)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(messages: &[CmdMessage]) -> String {
        let mut buf = Vec::new();
        print_messages(&mut buf, messages).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prints_one_line_per_message() {
        let out = render(&[CmdMessage::success("Hello World, Welcome to the jungle")]);
        assert_eq!(out, "Hello World, Welcome to the jungle\n");
    }

    #[test]
    fn error_messages_are_printed_verbatim() {
        let out = render(&[CmdMessage::error("[ERROR]: Please type name(s) as argument")]);
        assert_eq!(out, "[ERROR]: Please type name(s) as argument\n");
    }

    #[test]
    fn nothing_to_print() {
        assert_eq!(render(&[]), "");
    }
}
