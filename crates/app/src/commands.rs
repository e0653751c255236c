use std::fmt;

use rate_core::model::TagName;
use services::ClickTarget;
use ui::RaterIntent;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Intent(RaterIntent),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    MissingValue { command: &'static str },
    InvalidValue { command: &'static str, raw: String },
    Unknown(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "type a command, or `help`"),
            CommandError::MissingValue { command } => write!(f, "{command} requires a value"),
            CommandError::InvalidValue { command, raw } => {
                write!(f, "invalid {command} value: {raw}")
            }
            CommandError::Unknown(raw) => write!(f, "unknown command: {raw}"),
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
Commands:
  next | skip        load another profile
  tag <name>         toggle a tag
  rate <1-10>        set the base rating
  preset <n>         pick quick rating button n (1-based)
  up | down          +1 / -1
  submit             send the rating
  me                 show your own rating
  top                open the top 5
  close              close the top 5
  outside | inside   click outside / inside the top 5
  help | quit";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(CommandError::Empty);
    };
    let rest = parts.collect::<Vec<_>>().join(" ");

    let intent = match head.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "next" | "skip" => RaterIntent::LoadNext,
        "tag" => {
            let tag =
                TagName::new(rest).map_err(|_| CommandError::MissingValue { command: "tag" })?;
            RaterIntent::ToggleTag(tag)
        }
        "rate" => {
            let raw = require(&rest, "rate")?;
            let value = raw
                .parse::<f64>()
                .map_err(|_| CommandError::InvalidValue {
                    command: "rate",
                    raw: raw.to_string(),
                })?;
            RaterIntent::SetRating(value)
        }
        "preset" => {
            let raw = require(&rest, "preset")?;
            let index = raw
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| CommandError::InvalidValue {
                    command: "preset",
                    raw: raw.to_string(),
                })?;
            RaterIntent::SelectPreset(index)
        }
        "up" | "+" => RaterIntent::ThumbsUp,
        "down" | "-" => RaterIntent::ThumbsDown,
        "submit" | "send" => RaterIntent::Submit,
        "me" => RaterIntent::ShowMyProfile,
        "top" => RaterIntent::OpenLeaderboard,
        "close" => RaterIntent::CloseLeaderboard,
        "outside" => RaterIntent::ClickLeaderboard(ClickTarget::Backdrop),
        "inside" => RaterIntent::ClickLeaderboard(ClickTarget::Content),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Intent(intent))
}

fn require<'a>(value: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingValue { command });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rating_commands() {
        assert_eq!(
            parse_command("rate 7.5").unwrap(),
            Command::Intent(RaterIntent::SetRating(7.5))
        );
        assert_eq!(
            parse_command("preset 1").unwrap(),
            Command::Intent(RaterIntent::SelectPreset(0))
        );
        assert_eq!(
            parse_command("  TAG  kind ").unwrap(),
            Command::Intent(RaterIntent::ToggleTag(TagName::new("kind").unwrap()))
        );
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("   ").unwrap_err(), CommandError::Empty);
        assert_eq!(
            parse_command("rate").unwrap_err(),
            CommandError::MissingValue { command: "rate" }
        );
        assert!(matches!(
            parse_command("preset 0").unwrap_err(),
            CommandError::InvalidValue { command: "preset", .. }
        ));
        assert_eq!(
            parse_command("premium").unwrap_err(),
            CommandError::Unknown("premium".into())
        );
    }
}
