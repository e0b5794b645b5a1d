//! Answer parsing and per-quiz scoring.

use std::num::IntErrorKind;

use crate::error::ChoiceError;
use crate::model::{AttemptCounts, Question, QuizAttempt, Subject};

/// Parse a 1-indexed option choice into a 0-based index.
///
/// Surrounding whitespace and a leading sign are accepted; anything else that
/// is not an integer is `NotANumber`. Integers too large for `i64` are still
/// numbers and come back as `OutOfRange` with a saturated value.
pub fn parse_choice(input: &str, option_count: usize) -> Result<usize, ChoiceError> {
    let value = match input.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            let value = match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(ChoiceError::NotANumber { max: option_count }),
            };
            return Err(ChoiceError::OutOfRange {
                value,
                max: option_count,
            });
        }
    };

    if value < 1 || value as u64 > option_count as u64 {
        return Err(ChoiceError::OutOfRange {
            value,
            max: option_count,
        });
    }

    Ok(value as usize - 1)
}

/// Result of answering a question with a valid option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

/// Running tally for an in-progress quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorecard {
    correct: u32,
    wrong: u32,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score an in-range choice against `question` and count it.
    pub fn answer(&mut self, question: &Question, index: usize) -> AnswerOutcome {
        if question.is_correct(index) {
            self.correct += 1;
            AnswerOutcome::Correct
        } else {
            self.wrong += 1;
            AnswerOutcome::Wrong
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn attempts(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Close the tally into a recorded attempt for `subject`.
    pub fn finish(self, subject: &Subject) -> QuizAttempt {
        QuizAttempt::new(
            subject.display_name().to_string(),
            AttemptCounts {
                correct: self.correct,
                wrong: self.wrong,
            },
        )
    }
}
