//! Interactive CLI mode
//!
//! Suggests guesses for a game played elsewhere; the user types back the
//! feedback they were shown.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::core::{Feedback, FeedbackCode, Word};
use crate::error::{Result, WordleError};
use crate::solver::{FeedbackSource, SolveStatus, Solver, Strategy};

const TERMINAL: &str = "<terminal>";

/// Feedback typed by a person for each suggested guess
pub struct TerminalFeedback<R, W> {
    input: R,
    output: W,
    round: usize,
}

impl<R: BufRead, W: Write> TerminalFeedback<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            round: 0,
        }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ").map_err(|e| WordleError::io(TERMINAL, e))?;
        self.output
            .flush()
            .map_err(|e| WordleError::io(TERMINAL, e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| WordleError::io(TERMINAL, e))?;

        Ok((read > 0).then(|| line.trim().to_string()))
    }

    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| WordleError::io(TERMINAL, e))
    }
}

impl<R: BufRead, W: Write> FeedbackSource for TerminalFeedback<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackCode> {
        self.round += 1;
        self.say(format!(
            "\nTurn {}: try {}",
            self.round,
            guess.text().to_uppercase().bright_white().bold()
        ))?;

        loop {
            let Some(input) = self.prompt("Feedback (!+- or G/Y/_, 'win', 'quit')")? else {
                return Err(WordleError::Aborted);
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Err(WordleError::Aborted),
                "win" | "correct" | "solved" => return Ok(FeedbackCode::all_exact(guess.len())),
                _ => {}
            }

            match FeedbackCode::parse(&input) {
                Some(code) if code.len() == guess.len() => return Ok(code),
                Some(code) => self.say(format!(
                    "{} expected {} symbols, got {}",
                    "✗".red(),
                    guess.len(),
                    code.len()
                ))?,
                None => self.say(format!(
                    "{} use ! (right spot), + (wrong spot), - (absent)",
                    "✗".red()
                ))?,
            }
        }
    }
}

/// Run the interactive solver until the user quits
///
/// Returns the number of games that ended with a single candidate.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run_interactive<S: Strategy, R: BufRead, W: Write>(
    solver: &mut Solver<'_, S>,
    max_rounds: Option<usize>,
    input: R,
    output: W,
) -> Result<usize> {
    let mut term = TerminalFeedback::new(input, output);
    let mut solved = 0;

    term.say(format!("{}", "Wordle Solver - Interactive Mode".bright_cyan().bold()))?;
    term.say(format!(
        "Words have {} letters. Enter the feedback for each suggested guess.",
        solver.word_list().word_len()
    ))?;

    loop {
        term.round = 0;

        match solver.solve(&mut term, max_rounds, false) {
            Ok(report) => match report.status {
                SolveStatus::Solved(word) => {
                    solved += 1;
                    let rounds = report.rounds;
                    term.say(format!(
                        "\n{} {} after {} {}",
                        "✓ The answer is".green().bold(),
                        word.text().to_uppercase().bright_green().bold(),
                        rounds,
                        if rounds == 1 { "guess" } else { "guesses" }
                    ))?;
                    for step in &report.steps {
                        term.say(format!(
                            "  {} {}  {} exact, {} present",
                            step.guess.text().to_uppercase(),
                            step.feedback.to_emoji(),
                            step.feedback.count(Feedback::Exact),
                            step.feedback.count(Feedback::Present)
                        ))?;
                    }
                }
                SolveStatus::Exhausted { remaining } => {
                    term.say(format!(
                        "\n{} {remaining} candidates left after {} rounds",
                        "Out of rounds:".yellow().bold(),
                        report.rounds
                    ))?;
                }
            },
            Err(WordleError::Aborted) => {
                term.say("\nThanks for playing!")?;
                return Ok(solved);
            }
            Err(err @ WordleError::InconsistentState { .. }) => {
                term.say(format!("\n{} {err}", "✗".red()))?;
                term.say("Check the feedback you entered.")?;
            }
            Err(err) => return Err(err),
        }

        match term.prompt("\nPlay again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => {
                term.say("\nThanks for playing!")?;
                return Ok(solved);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EntropyStrategy;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn setup_list() -> WordList {
        WordList::from_strs(
            &["crane", "slate", "irate", "crate", "grate", "adieu"],
            &["irate", "crate", "grate", "slate"],
        )
        .unwrap()
    }

    fn run(script: &str) -> (Result<usize>, String) {
        colored::control::set_override(false);
        let list = setup_list();
        let mut solver = Solver::with_seed(EntropyStrategy, &list, 1);
        let mut out = Vec::new();
        let result = run_interactive(&mut solver, Some(6), Cursor::new(script), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn solves_from_typed_feedback() {
        // crane then irate against a hidden "grate"
        let (result, out) = run("-!!-!\n-!!!!\nno\n");
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("try CRANE"));
        assert!(out.contains("try IRATE"));
        assert!(out.contains("GRATE after 2 guesses"));
        assert!(out.contains("3 exact, 0 present"));
        assert!(out.contains("4 exact, 0 present"));
    }

    #[test]
    fn accepts_letter_aliases() {
        let (result, out) = run("_GG_G\n_GGGG\nn\n");
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("GRATE"));
    }

    #[test]
    fn reprompts_on_bad_input() {
        let (result, out) = run("hello\n!!\n-!!-!\n-!!!!\nno\n");
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("expected 5 symbols, got 2"));
    }

    #[test]
    fn inconsistent_feedback_is_reported() {
        // crane is not a challenge, so all-exact leaves nothing
        let (result, out) = run("win\nno\n");
        assert_eq!(result.unwrap(), 0);
        assert!(out.contains("leaves no candidates"));
    }

    #[test]
    fn quit_and_end_of_input() {
        let (result, out) = run("quit\n");
        assert_eq!(result.unwrap(), 0);
        assert!(out.contains("Thanks for playing"));

        let (result, _) = run("");
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn plays_again() {
        let (result, _) = run("-!!-!\n-!!!!\nyes\n!!!-!\nno\n");
        assert_eq!(result.unwrap(), 2);
    }
}
