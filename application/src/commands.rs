//! User intents understood by the picker.
//!
//! The REPL grammar is parsed here so any front end (line editor, script,
//! test) drives the controller through the same closed set of commands.

use std::str::FromStr;
use thiserror::Error;

/// A single user intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    /// Add one name
    Add(String),
    /// Add 3-10 names from comma or newline separated text
    AddBatch(String),
    /// Remove the name at a 0-based position
    RemoveAt(usize),
    /// Remove every name (asks for confirmation)
    Clear,
    /// Draw a winner
    Draw,
    /// Show the pool
    List,
    /// Switch persistence; `None` toggles
    SetPersist(Option<bool>),
    /// Switch the duplicate rule; `None` toggles
    SetAllowDuplicates(Option<bool>),
    /// Switch removal of winners; `None` toggles
    SetRemoveAfterPick(Option<bool>),
    SaveQuestion(String),
    ClearQuestion,
    ShowOptions,
    Help,
    Quit,
}

/// Why a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid switch '{0}', expected on or off")]
    InvalidSwitch(String),
}

fn parse_switch(arg: &str) -> Result<Option<bool>, CommandParseError> {
    match arg.to_lowercase().as_str() {
        "" => Ok(None),
        "on" | "true" | "yes" | "1" => Ok(Some(true)),
        "off" | "false" | "no" | "0" => Ok(Some(false)),
        _ => Err(CommandParseError::InvalidSwitch(arg.to_string())),
    }
}

impl FromStr for PickerCommand {
    type Err = CommandParseError;

    /// Parse a REPL line.
    ///
    /// Lines not starting with `/` add a single name. Positions given to
    /// `/remove` are 1-based, as displayed in the list.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if !line.starts_with('/') {
            return Ok(PickerCommand::Add(line.to_string()));
        }

        let parts: Vec<&str> = line.splitn(2, ' ').collect();
        let command = parts.first().copied().unwrap_or("");
        let args = parts.get(1).copied().unwrap_or("").trim();

        match command {
            "/add" => Ok(PickerCommand::Add(args.to_string())),
            "/batch" | "/b" => {
                if args.is_empty() {
                    return Err(CommandParseError::Usage("/batch <name>, <name>, <name>..."));
                }
                Ok(PickerCommand::AddBatch(args.to_string()))
            }
            "/remove" | "/rm" => {
                let position: usize = args
                    .parse()
                    .map_err(|_| CommandParseError::Usage("/remove <position>"))?;
                if position == 0 {
                    return Err(CommandParseError::Usage("/remove <position> (starting at 1)"));
                }
                Ok(PickerCommand::RemoveAt(position - 1))
            }
            "/clear" => Ok(PickerCommand::Clear),
            "/draw" | "/pick" | "/d" => Ok(PickerCommand::Draw),
            "/list" | "/ls" => Ok(PickerCommand::List),
            "/persist" => Ok(PickerCommand::SetPersist(parse_switch(args)?)),
            "/dups" | "/duplicates" => Ok(PickerCommand::SetAllowDuplicates(parse_switch(args)?)),
            "/autoremove" => Ok(PickerCommand::SetRemoveAfterPick(parse_switch(args)?)),
            "/question" => {
                if args.is_empty() {
                    return Err(CommandParseError::Usage("/question <text>"));
                }
                Ok(PickerCommand::SaveQuestion(args.to_string()))
            }
            "/unquestion" => Ok(PickerCommand::ClearQuestion),
            "/options" | "/config" => Ok(PickerCommand::ShowOptions),
            "/help" | "/h" | "/?" => Ok(PickerCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(PickerCommand::Quit),
            _ => Err(CommandParseError::Unknown(command.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<PickerCommand, CommandParseError> {
        line.parse()
    }

    #[test]
    fn test_plain_text_adds_name() {
        assert_eq!(parse("  Alice "), Ok(PickerCommand::Add("Alice".to_string())));
    }

    #[test]
    fn test_batch() {
        assert_eq!(
            parse("/batch A, B, C"),
            Ok(PickerCommand::AddBatch("A, B, C".to_string()))
        );
        assert!(matches!(parse("/batch"), Err(CommandParseError::Usage(_))));
    }

    #[test]
    fn test_remove_is_one_based() {
        assert_eq!(parse("/remove 1"), Ok(PickerCommand::RemoveAt(0)));
        assert_eq!(parse("/rm 3"), Ok(PickerCommand::RemoveAt(2)));
        assert!(matches!(parse("/remove 0"), Err(CommandParseError::Usage(_))));
        assert!(matches!(parse("/remove x"), Err(CommandParseError::Usage(_))));
    }

    #[test]
    fn test_switches() {
        assert_eq!(parse("/persist"), Ok(PickerCommand::SetPersist(None)));
        assert_eq!(parse("/dups on"), Ok(PickerCommand::SetAllowDuplicates(Some(true))));
        assert_eq!(
            parse("/autoremove OFF"),
            Ok(PickerCommand::SetRemoveAfterPick(Some(false)))
        );
        assert_eq!(
            parse("/persist maybe"),
            Err(CommandParseError::InvalidSwitch("maybe".to_string()))
        );
    }

    #[test]
    fn test_question() {
        assert_eq!(
            parse("/question Who presents first?"),
            Ok(PickerCommand::SaveQuestion("Who presents first?".to_string()))
        );
        assert_eq!(parse("/unquestion"), Ok(PickerCommand::ClearQuestion));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("/pick"), Ok(PickerCommand::Draw));
        assert_eq!(parse("/q"), Ok(PickerCommand::Quit));
        assert_eq!(parse("/?"), Ok(PickerCommand::Help));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse("/shuffle"),
            Err(CommandParseError::Unknown("/shuffle".to_string()))
        );
    }
}
