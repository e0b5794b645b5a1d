//! The interactive menu loop.
//!
//! Prompts on the console, calls into [`Session`], and prints the outcome.
//! Validation failures are printed and the loop carries on. A fault inside a
//! quiz is caught and reported without recording the attempt; faults during
//! registration or login end the loop with an error.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::console::Console;
use crate::error::QuizError;
use crate::scoring::{parse_choice, AnswerOutcome, Scorecard};
use crate::session::{is_valid_email, Registration, Session};

/// Menu entries in display order.
const MENU: [&str; 5] = [
    "1. Register",
    "2. Login",
    "3. Take Quiz",
    "4. View Results",
    "5. Exit",
];

/// The console quiz application.
pub struct QuizApp<R, W> {
    session: Session,
    console: Console<R, W>,
    show_explanations: bool,
}

impl<R: BufRead, W: Write> QuizApp<R, W> {
    pub fn new(session: Session, console: Console<R, W>) -> Self {
        Self {
            session,
            console,
            show_explanations: true,
        }
    }

    pub fn with_explanations(mut self, show: bool) -> Self {
        self.show_explanations = show;
        self
    }

    pub fn into_parts(self) -> (Session, Console<R, W>) {
        (self.session, self.console)
    }

    /// Run the menu until "5" is chosen or the input ends at the menu prompt.
    pub fn run(&mut self) -> Result<(), QuizError> {
        loop {
            self.console.write_line("\n=== Welcome to Quiz App ===")?;
            for entry in MENU {
                self.console.write_line(entry)?;
            }

            let choice = match self.console.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(QuizError::InputClosed) => {
                    debug!("input closed at menu");
                    self.console.write_line("")?;
                    break;
                }
                Err(e) => return Err(e),
            };

            match choice.as_str() {
                "1" => self.register()?,
                "2" => self.login()?,
                "3" => self.take_quiz()?,
                "4" => self.view_results()?,
                "5" => break,
                other => {
                    debug!(choice = other, "unrecognized menu choice");
                    self.console.write_line("Invalid choice! Please try again.")?;
                }
            }
        }

        self.console.write_line("Thank you for using the Quiz App!")
    }

    pub fn register(&mut self) -> Result<(), QuizError> {
        self.console.write_line("\n=== Register ===")?;
        let name = self.console.prompt("Enter your name: ")?;
        let email = self.console.prompt("Enter your email: ")?;
        if !is_valid_email(&email) {
            return self.console.write_line(QuizError::InvalidEmail);
        }
        let enrollment = self.console.prompt("Enter your enrollment number: ")?;
        let password = self.console.prompt("Create a password: ")?;
        let confirm_password = self.console.prompt("Confirm your password: ")?;

        let form = Registration {
            name,
            email,
            enrollment,
            password,
            confirm_password,
        };
        match self.session.register(form) {
            Ok(_) => self
                .console
                .write_line("Registration successful! Please login to continue."),
            Err(e) if e.is_validation() => self.console.write_line(e),
            Err(e) => Err(e),
        }
    }

    pub fn login(&mut self) -> Result<(), QuizError> {
        self.console.write_line("\n=== Login ===")?;
        let email = self.console.prompt("Enter your email: ")?;
        let password = self.console.prompt("Enter your password: ")?;

        match self.session.login(&email, &password) {
            Ok(user) => self.console.write_line(format!("Welcome {}!", user.name)),
            Err(e) if e.is_validation() => self.console.write_line(e),
            Err(e) => Err(e),
        }
    }

    pub fn take_quiz(&mut self) -> Result<(), QuizError> {
        if let Err(e) = self.session.require_user() {
            return self.console.write_line(e);
        }

        self.console.write_line("\n=== Quiz Section ===")?;
        self.console.write_line("Select a subject:")?;
        for label in self.session.catalog().labels() {
            self.console.write_line(label)?;
        }

        match self.run_quiz() {
            Ok(()) => Ok(()),
            Err(e) if e.is_validation() => self.console.write_line(e),
            Err(e) => {
                warn!(error = %e, "quiz aborted");
                self.console
                    .write_line(format!("An unexpected error occurred: {e}"))
            }
        }
    }

    fn run_quiz(&mut self) -> Result<(), QuizError> {
        let choice = self.console.prompt("Enter the subject number: ")?;
        let subject = self.session.select_subject(choice.trim())?;

        let mut card = Scorecard::new();
        for question in &subject.questions {
            self.console.write_line(format!("\n{}", question.text))?;
            for (i, option) in question.options.iter().enumerate() {
                self.console.write_line(format!("{}. {option}", i + 1))?;
            }

            let max = question.options.len();
            let prompt = format!("Enter your choice (1-{max}): ");
            loop {
                let line = self.console.prompt(&prompt)?;
                let index = match parse_choice(&line, max) {
                    Ok(index) => index,
                    Err(e) => {
                        debug!(input = %line, "rejected answer input");
                        self.console.write_line(e)?;
                        continue;
                    }
                };

                match card.answer(question, index) {
                    AnswerOutcome::Correct => {
                        self.console.write_line("Correct!")?;
                        if self.show_explanations {
                            self.console
                                .write_line(format!("Explanation: {}", question.explanation))?;
                        }
                        break;
                    }
                    AnswerOutcome::Wrong => {
                        self.console.write_line("Wrong answer. Try again.")?;
                    }
                }
            }
        }

        let attempt = card.finish(subject);
        let attempt = self.session.record_attempt(attempt)?;
        self.console.write_line("\n=== Quiz Result ===")?;
        self.console.write_line(attempt)
    }

    pub fn view_results(&mut self) -> Result<(), QuizError> {
        let results = match self.session.results() {
            Ok(results) => results,
            Err(e) => return self.console.write_line(e),
        };

        self.console.write_line("\n=== Previous Quiz Results ===")?;
        if results.is_empty() {
            return self.console.write_line("No quiz results found!");
        }

        for (idx, attempt) in results.iter().enumerate() {
            self.console.write_line(format!("\nAttempt {}:", idx + 1))?;
            self.console.write_line(attempt)?;
        }
        Ok(())
    }
}
