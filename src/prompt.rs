//! Line-oriented terminal prompting over any reader/writer pair.

use std::io::{BufRead, Write};

use crate::error::ExplorerResult;
use crate::selection::InputRejection;

/// Asks questions on `output` and reads answers from `input`.
///
/// Answers are trimmed and lowercased. End of input is reported as `None` so callers can wind
/// down instead of spinning on an empty stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input/output pair, e.g. locked stdin and stdout.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output, for multi-line blocks such as report sections.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) -> ExplorerResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `question` and read one answer.
    pub fn ask(&mut self, question: &str) -> ExplorerResult<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Ask until `parse` accepts the answer, printing each rejection.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputRejection>,
    ) -> ExplorerResult<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(rejection) => {
                    log::debug!("rejected answer: {rejection}");
                    self.say(&format!("Invalid input: {rejection}. Please try again."))?;
                }
            }
        }
    }

    /// Consume the prompter and return the output, e.g. a `Vec<u8>` transcript in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::Prompter;
    use crate::selection::{City, parse_city};

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_normalizes_answer() {
        let mut p = prompter("  YES \n");
        assert_eq!(p.ask("? ").unwrap(), Some("yes".to_string()));
        assert_eq!(p.ask("? ").unwrap(), None);
    }

    #[test]
    fn ask_until_reprompts_on_rejection() {
        let mut p = prompter("boston\n\nWashington\n");
        let city = p.ask_until("city: ", parse_city).unwrap();
        assert_eq!(city, Some(City::Washington));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("city: ").count(), 3);
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn ask_until_gives_up_at_end_of_input() {
        let mut p = prompter("boston\n");
        assert_eq!(p.ask_until("city: ", parse_city).unwrap(), None);
    }
}
