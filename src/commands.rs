//! Команды интерактивного режима: по одной на строку stdin.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Seat(i64),
    Like(i64),
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` expects a numeric id")]
    MissingId(&'static str),
}

fn parse_id(name: &'static str, arg: Option<&str>) -> Result<i64, CommandError> {
    arg.and_then(|s| s.parse().ok())
        .ok_or(CommandError::MissingId(name))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;

        match name.to_ascii_lowercase().as_str() {
            "seat" => parse_id("seat", parts.next()).map(Command::Seat),
            "like" => parse_id("like", parts.next()).map(Command::Like),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
