//! Yes/no confirmation prompts

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Something that can answer a yes/no question. Every implementation
/// defaults to "no" when it cannot get an answer.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Returns true for a case-insensitive "y" or "yes".
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Prompts on a writer and reads one line of the answer from a reader.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if write!(self.output, "{} [y/N]: ", question).is_err() || self.output.flush().is_err() {
            return false;
        }

        let mut response = String::new();
        match self.input.read_line(&mut response) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&response),
        }
    }
}

/// Answers yes to everything without asking (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, question: &str) -> bool {
        tracing::debug!("auto-confirmed: {}", question);
        true
    }
}

/// Replays canned answers and records the questions asked. Runs out as "no".
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl Scripted {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for Scripted {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
