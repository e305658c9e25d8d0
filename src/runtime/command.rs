//! Parsing of shell input lines.

use std::fmt;
use std::path::PathBuf;

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list`
    ListAll,
    /// `list <index>`
    List(isize),
    /// `artist <text>`
    Artist(String),
    /// `add <file>`
    Add(PathBuf),
    /// `remove <index>`
    Remove(isize),
    /// `play <index>`
    Play(isize),
    First,
    Stop,
    Shuffle,
    ShuffleAll,
    Count,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingArgument(&'static str),
    UnexpectedArgument(&'static str),
    BadIndex(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "Unknown command: {word} (try `help`)"),
            Self::MissingArgument(cmd) => write!(f, "`{cmd}` needs an argument"),
            Self::UnexpectedArgument(cmd) => write!(f, "`{cmd}` takes no argument"),
            Self::BadIndex(arg) => write!(f, "Not a track index: {arg}"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
Commands:
  list               list all tracks
  list <index>       show one track
  artist <text>      list tracks whose artist contains <text>
  add <file>         add a track by file name
  remove <index>     remove a track
  play <index>       play a short sample of a track
  first              play the first track
  stop               stop playback
  shuffle            play one random track
  shuffle-all        play every track once in random order
  count              show the number of tracks
  help               show this list
  quit               leave";

fn index(arg: &str) -> Result<isize, ParseError> {
    arg.parse().map_err(|_| ParseError::BadIndex(arg.to_string()))
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |name: &'static str| {
            if arg.is_empty() {
                Err(ParseError::MissingArgument(name))
            } else {
                Ok(arg)
            }
        };
        let bare = |name: &'static str, cmd: Command| {
            if arg.is_empty() {
                Ok(cmd)
            } else {
                Err(ParseError::UnexpectedArgument(name))
            }
        };

        let cmd = match word {
            "list" | "ls" if arg.is_empty() => Command::ListAll,
            "list" | "ls" => Command::List(index(arg)?),
            "artist" => Command::Artist(required("artist")?.to_string()),
            "add" => Command::Add(PathBuf::from(required("add")?)),
            "remove" | "rm" => Command::Remove(index(required("remove")?)?),
            "play" => Command::Play(index(required("play")?)?),
            "first" => bare("first", Command::First)?,
            "stop" => bare("stop", Command::Stop)?,
            "shuffle" => bare("shuffle", Command::Shuffle)?,
            "shuffle-all" => bare("shuffle-all", Command::ShuffleAll)?,
            "count" => bare("count", Command::Count)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(cmd))
    }
}
