//! Error types for the quiz session and console flow.
//!
//! Validation failures are ordinary values here: the menu loop prints them
//! and carries on. Only `InputClosed` and `Io` are faults.

use thiserror::Error;

/// Errors raised by session operations and console I/O.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The email does not have a `local@domain.tld` shape.
    #[error("Invalid email format!")]
    InvalidEmail,

    /// Password and confirmation differ.
    #[error("Passwords do not match! Try again.")]
    PasswordMismatch,

    /// A user with this email is already registered.
    #[error("User already exists! Please login.")]
    UserExists(String),

    /// Unknown email or wrong password.
    #[error("Invalid email or password!")]
    InvalidCredentials,

    /// The operation needs an authenticated user.
    #[error("Please login first!")]
    NotLoggedIn,

    /// No catalog subject starts with the given prefix.
    #[error("Invalid subject selection!")]
    InvalidSubject(String),

    /// The input stream ended while a prompt was waiting.
    #[error("input stream closed")]
    InputClosed,

    /// Reading or writing the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` for errors that are reported to the user and then
    /// ignored, as opposed to faults that abort the current flow.
    pub fn is_validation(&self) -> bool {
        !matches!(self, QuizError::InputClosed | QuizError::Io(_))
    }
}

/// Why an answer line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// The input is not an integer.
    #[error("Invalid input. Please enter a number between 1 and {max}.")]
    NotANumber { max: usize },

    /// The integer is outside `1..=max`.
    #[error("Invalid choice. Please select a number between 1 and {max}.")]
    OutOfRange { value: i64, max: usize },
}
