//! Core data model types for quizapp.
//!
//! Users and their recorded attempts live only in memory for the lifetime of
//! the process. Questions and subjects come from the read-only catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Display name, used in the login greeting.
    pub name: String,
    /// Registry key; unique across the session.
    pub email: String,
    /// Enrollment number as typed at registration.
    pub enrollment: String,
    /// Stored as plaintext.
    pub password: String,
    /// Completed quiz attempts, in completion order.
    pub results: Vec<QuizAttempt>,
}

impl User {
    pub fn new(name: String, email: String, enrollment: String, password: String) -> Self {
        Self {
            name,
            email,
            enrollment,
            password,
            results: Vec::new(),
        }
    }
}

/// Summary of one full pass through a subject.
///
/// Only built from a finished [`crate::scoring::Scorecard`], so
/// `attempts == correct + wrong` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptCounts {
    pub correct: u32,
    pub wrong: u32,
}

/// A recorded quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    /// Subject name with the numeric prefix stripped (e.g. "Python Basics").
    pub subject: String,
    counts: AttemptCounts,
}

impl QuizAttempt {
    pub(crate) fn new(subject: String, counts: AttemptCounts) -> Self {
        Self { subject, counts }
    }

    pub fn correct(&self) -> u32 {
        self.counts.correct
    }

    pub fn wrong(&self) -> u32 {
        self.counts.wrong
    }

    /// Total answers given, right or wrong.
    pub fn attempts(&self) -> u32 {
        self.counts.correct + self.counts.wrong
    }
}

impl fmt::Display for QuizAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f, "Correct Answers: {}", self.correct())?;
        writeln!(f, "Wrong Attempts: {}", self.wrong())?;
        write!(f, "Total Attempts: {}", self.attempts())
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    #[serde(rename = "question")]
    pub text: String,
    /// Answer options, shown 1-indexed.
    pub options: Vec<String>,
    /// Must equal one of `options`.
    pub answer: String,
    /// Shown after the correct option is chosen.
    pub explanation: String,
}

impl Question {
    /// Whether the option at `index` (0-based) is the answer.
    pub fn is_correct(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(|option| *option == self.answer)
    }
}

/// A quiz subject and its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Menu label, e.g. "1. Python Basics".
    pub label: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Subject {
    /// The label without its "N. " prefix.
    pub fn display_name(&self) -> &str {
        match self.label.split_once(". ") {
            Some((_, name)) => name,
            None => &self.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            text: "What is the output of 3 + 2 * 2?".into(),
            options: vec!["10".into(), "7".into(), "9".into(), "5".into()],
            answer: "7".into(),
            explanation: "Precedence.".into(),
        }
    }

    #[test]
    fn is_correct_checks_option_text() {
        let q = question();
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert!(!q.is_correct(4));
    }

    #[test]
    fn display_name_strips_prefix() {
        let subject = Subject {
            label: "1. Python Basics".into(),
            questions: vec![],
        };
        assert_eq!(subject.display_name(), "Python Basics");

        let bare = Subject {
            label: "Misc".into(),
            questions: vec![],
        };
        assert_eq!(bare.display_name(), "Misc");
    }

    #[test]
    fn attempt_totals() {
        let attempt = QuizAttempt::new(
            "DBMS".into(),
            AttemptCounts {
                correct: 2,
                wrong: 3,
            },
        );
        assert_eq!(attempt.attempts(), 5);
        let text = attempt.to_string();
        assert!(text.contains("Subject: DBMS"));
        assert!(text.contains("Total Attempts: 5"));
    }

    #[test]
    fn new_user_has_no_results() {
        let user = User::new("Alice".into(), "a@b.com".into(), "E1".into(), "pw".into());
        assert!(user.results.is_empty());
    }
}
