use crate::sdk::routing::route::{Point, Profile};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  start <address>                set the start address
  end <address>                  set the end address
  profile <driving|walking|cycling>
  go                             geocode both addresses and draw the route
  coords <lat1> <lon1> <lat2> <lon2>
                                 route between two coordinates
  prev | first | next            move through the instructions
  roads                          list the roads along the route
  map [path]                     write the map page (default path from --map)
  form                           show the current inputs
  reset                          forget the current route
  help                           show this text
  quit                           leave";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetStart(String),
    SetEnd(String),
    SetProfile(Profile),
    Go,
    Coords { start: Point, end: Point },
    Previous,
    First,
    Next,
    Roads,
    Map(Option<PathBuf>),
    Form,
    Reset,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("{0}")]
    Invalid(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "start" | "from" => Ok(Command::SetStart(rest.to_string())),
            "end" | "to" => Ok(Command::SetEnd(rest.to_string())),
            "profile" | "mode" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "profile",
                        expected: "one of driving, walking, cycling",
                    });
                }
                rest.parse().map(Command::SetProfile).map_err(CommandError::Invalid)
            }
            "go" | "route" => Ok(Command::Go),
            "coords" => parse_coords(rest),
            "prev" | "previous" | "p" => Ok(Command::Previous),
            "first" => Ok(Command::First),
            "next" | "n" => Ok(Command::Next),
            "roads" => Ok(Command::Roads),
            "map" => Ok(Command::Map((!rest.is_empty()).then(|| PathBuf::from(rest)))),
            "form" => Ok(Command::Form),
            "reset" => Ok(Command::Reset),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_coords(rest: &str) -> Result<Command, CommandError> {
    let values = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| CommandError::Invalid(format!("`{part}` is not a number")))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    match values.as_slice() {
        &[lat1, lon1, lat2, lon2] => Ok(Command::Coords {
            start: Point::from_lat_lon(lat1, lon1),
            end: Point::from_lat_lon(lat2, lon2),
        }),
        _ => Err(CommandError::MissingArgument {
            command: "coords",
            expected: "four numbers: lat1 lon1 lat2 lon2",
        }),
    }
}

impl Command {
    /// Whether the command can change what is on screen.
    pub fn changes_view(&self) -> bool {
        matches!(
            self,
            Command::Go
                | Command::Coords { .. }
                | Command::Previous
                | Command::First
                | Command::Next
                | Command::Reset
        )
    }
}
