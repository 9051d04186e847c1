//! Interactive prompts that collect the trip request.

use anyhow::{Result, anyhow, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use caravan_core::TripRequest;

/// Ask the traveler for destination preference, budget and duration.
///
/// Returns a validated [`TripRequest`] or an error if the user aborts
/// the session or enters a value that cannot be parsed.
pub fn read_trip_request(editor: &mut DefaultEditor) -> Result<TripRequest> {
    let preference = read_line(editor, "What city are you interested in? ")?;
    let budget: f64 = parse_answer(read_line(
        editor,
        "What is your total budget for the trip? (in Rupees): ",
    )?)?;
    let duration: i64 = parse_answer(read_line(
        editor,
        "How many days do you plan to travel?: ",
    )?)?;

    Ok(TripRequest::new(preference, budget, duration)?)
}

fn read_line(editor: &mut DefaultEditor, prompt: &str) -> Result<String> {
    match editor.readline(prompt) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted) => bail!("interrupted, no travel plan generated"),
        Err(ReadlineError::Eof) => bail!("input closed, no travel plan generated"),
        Err(err) => Err(err.into()),
    }
}

fn parse_answer<T>(raw: String) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|err| anyhow!("invalid value '{raw}': {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_answers() {
        let budget: f64 = parse_answer("30000".to_string()).unwrap();
        assert_eq!(budget, 30000.0);

        let duration: i64 = parse_answer("3".to_string()).unwrap();
        assert_eq!(duration, 3);
    }

    #[test]
    fn rejects_non_numeric_answers() {
        let result: Result<f64> = parse_answer("a lot".to_string());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("invalid value 'a lot'"));
    }
}
