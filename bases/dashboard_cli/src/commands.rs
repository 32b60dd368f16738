use thiserror::Error;
use track_query::FilterCommand;

/// One line typed in interactive mode
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Filter(FilterCommand),
    SelectArtist(String),
    DeselectArtist(String),
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0:?} is not a number")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
commands:
  genre <name>         toggle a genre filter
  popularity <n>       lowest popularity to show
  year-min <year>      first year to show
  year-max <year>      last year to show
  years <from> <to>    year range, fractional years are rounded
  artist <name>        add an artist to the radar
  drop-artist <name>   remove an artist from the radar
  reset                clear every filter
  show                 print the current view again
  quit";

/// Parse one input line. Blank lines give `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_lowercase().as_str() {
        "genre" => Command::Filter(FilterCommand::ToggleGenre(text(rest, "genre", "a genre")?)),
        "popularity" => Command::Filter(FilterCommand::SetMinPopularity(integer(rest, "popularity")?)),
        "year-min" => Command::Filter(FilterCommand::SetYearMin(integer(rest, "year-min")?)),
        "year-max" => Command::Filter(FilterCommand::SetYearMax(integer(rest, "year-max")?)),
        "years" => {
            let mut bounds = rest.split_whitespace();
            let from = fraction(bounds.next(), "years")?;
            let to = fraction(bounds.next(), "years")?;
            Command::Filter(FilterCommand::SetYearRange { from, to })
        }
        "artist" => Command::SelectArtist(text(rest, "artist", "an artist name")?),
        "drop-artist" => Command::DeselectArtist(text(rest, "drop-artist", "an artist name")?),
        "reset" => Command::Filter(FilterCommand::Reset),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn text(rest: &str, command: &'static str, argument: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(rest.to_string())
}

fn integer(rest: &str, command: &'static str) -> Result<i32, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a number",
        });
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidNumber(rest.to_string()))
}

fn fraction(value: Option<&str>, command: &'static str) -> Result<f64, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument {
        command,
        argument: "two years",
    })?;
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("genre dance pop", Command::Filter(FilterCommand::ToggleGenre("dance pop".into())))]
    #[case("  popularity 40 ", Command::Filter(FilterCommand::SetMinPopularity(40)))]
    #[case("year-min 2005", Command::Filter(FilterCommand::SetYearMin(2005)))]
    #[case("YEAR-MAX 2019", Command::Filter(FilterCommand::SetYearMax(2019)))]
    #[case("years 2004.4 2011.6", Command::Filter(FilterCommand::SetYearRange { from: 2004.4, to: 2011.6 }))]
    #[case("artist Dua Lipa", Command::SelectArtist("Dua Lipa".into()))]
    #[case("drop-artist Dua Lipa", Command::DeselectArtist("Dua Lipa".into()))]
    #[case("reset", Command::Filter(FilterCommand::Reset))]
    #[case("show", Command::Show)]
    #[case("?", Command::Help)]
    #[case("quit", Command::Quit)]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse_command(line), Ok(Some(expected)));
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn unknown_command() {
        assert_matches!(parse_command("dance"), Err(CommandError::Unknown(word)) if word == "dance");
    }

    #[rstest]
    #[case("genre")]
    #[case("popularity")]
    #[case("years 2001")]
    #[case("artist   ")]
    fn missing_arguments(#[case] line: &str) {
        assert_matches!(parse_command(line), Err(CommandError::MissingArgument { .. }));
    }

    #[rstest]
    #[case("popularity high")]
    #[case("year-min 20.5")]
    #[case("years 2001 NaN")]
    fn invalid_numbers(#[case] line: &str) {
        assert_matches!(parse_command(line), Err(CommandError::InvalidNumber(_)));
    }
}
