//! Interactive guessing mode
//!
//! Text prompt loop driving a `Session` until the score runs out or the player exits

use crate::game::{EXIT_SIGNAL, GuessOutcome, Session, SessionState, WordPicker};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive game loop
///
/// Reads one guess per line from `input` and writes prompts and feedback to `output`.
/// End of input is treated like the exit signal.
///
/// Returns the state the session ended in (`SessionOver` or `UserExited`).
///
/// # Errors
///
/// Returns an error if reading a guess or writing feedback fails.
pub fn run_play<P, R, W>(
    session: &mut Session<P>,
    mut input: R,
    mut output: W,
) -> io::Result<SessionState>
where
    P: WordPicker,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Let's play a word guessing game!")?;

    loop {
        match session.state() {
            SessionState::AwaitingGuess => {}
            SessionState::RoundSolved => {
                let solved = format!("You solved it! Word: {}", session.round().target());
                writeln!(output, "{}", solved.bright_green().bold())?;
                session.next_round();
                continue;
            }
            SessionState::SessionOver => {
                let over = format!("Game over. Final score: {}", session.score());
                writeln!(output, "{}", over.red().bold())?;
                return Ok(SessionState::SessionOver);
            }
            SessionState::UserExited => {
                writeln!(output, "Game exited.")?;
                return Ok(SessionState::UserExited);
            }
        }

        writeln!(output, "{}", session.round().pattern())?;

        let guess = read_guess(&mut input, &mut output)?;
        let line = guess.as_deref().unwrap_or(EXIT_SIGNAL);

        match session.guess(line) {
            GuessOutcome::Right { .. } => {
                writeln!(output, "{}", "Right!".green())?;
                writeln!(output, "Score is {}", session.score())?;
            }
            GuessOutcome::Wrong => {
                writeln!(output, "{}", "Sorry, guess again.".red())?;
                writeln!(output, "Score is {}", session.score())?;
            }
            GuessOutcome::Repeat => {
                writeln!(output, "{}", "Already guessed that letter.".yellow())?;
            }
            GuessOutcome::Invalid => {
                writeln!(output, "{}", "Please enter a single letter.".yellow())?;
            }
            GuessOutcome::Exited | GuessOutcome::Finished => {}
        }
    }
}

/// Prompt for a guess and read one line
///
/// Returns `None` at end of input.
fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "Guess a letter: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CandidateList;
    use crate::game::{GameConfig, RandomPicker};
    use rand::rngs::StdRng;

    fn banana_session() -> Session<RandomPicker<StdRng>> {
        let candidates = CandidateList::new(vec!["banana".to_string()]).unwrap();
        Session::new(candidates, RandomPicker::seeded(11), &GameConfig::default())
    }

    fn play(session: &mut Session<RandomPicker<StdRng>>, script: &str) -> (SessionState, String) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let state = run_play(session, script.as_bytes(), &mut output).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solving_a_word_starts_a_new_round() {
        let mut session = banana_session();
        let (state, transcript) = play(&mut session, "a\nn\nb\n!\n");

        assert_eq!(state, SessionState::UserExited);
        assert_eq!(session.score(), 8);
        assert_eq!(session.words_solved(), 1);

        let expected = [
            "Let's play a word guessing game!",
            "_ _ _ _ _ _",
            "Guess a letter: Right!",
            "Score is 6",
            "_ a _ a _ a",
            "Guess a letter: Right!",
            "Score is 7",
            "_ a n a n a",
            "Guess a letter: Right!",
            "Score is 8",
            "You solved it! Word: banana",
            "_ _ _ _ _ _",
            "Guess a letter: Game exited.",
        ];
        assert_eq!(transcript.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn six_wrong_guesses_end_the_game() {
        let mut session = banana_session();
        let (state, transcript) = play(&mut session, "z\nq\nx\nj\nv\nw\na\n");

        assert_eq!(state, SessionState::SessionOver);
        assert_eq!(session.score(), -1);

        let scores: Vec<&str> = transcript
            .lines()
            .filter(|line| line.starts_with("Score is"))
            .collect();
        assert_eq!(
            scores,
            vec![
                "Score is 4",
                "Score is 3",
                "Score is 2",
                "Score is 1",
                "Score is 0",
                "Score is -1"
            ]
        );
        assert!(transcript.ends_with("Game over. Final score: -1\n"));
        assert_eq!(transcript.matches("Sorry, guess again.").count(), 6);
    }

    #[test]
    fn exit_signal_prints_only_the_notice() {
        let mut session = banana_session();
        let (state, transcript) = play(&mut session, "!\n");

        assert_eq!(state, SessionState::UserExited);
        assert_eq!(session.score(), 5);
        assert_eq!(
            transcript,
            "Let's play a word guessing game!\n_ _ _ _ _ _\nGuess a letter: Game exited.\n"
        );
    }

    #[test]
    fn repeat_and_invalid_guesses_are_reported() {
        let mut session = banana_session();
        let (_, transcript) = play(&mut session, "a\nA\nban\n\n!\n");

        assert_eq!(transcript.matches("Already guessed that letter.").count(), 1);
        assert_eq!(transcript.matches("Please enter a single letter.").count(), 2);
        assert_eq!(transcript.matches("Score is").count(), 1);
        assert_eq!(session.score(), 6);
    }

    #[test]
    fn end_of_input_exits() {
        let mut session = banana_session();
        let (state, transcript) = play(&mut session, "a\n");

        assert_eq!(state, SessionState::UserExited);
        assert!(transcript.ends_with("Game exited.\n"));
        assert_eq!(session.score(), 6);
    }
}
