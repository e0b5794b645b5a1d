//! In-memory session manager.
//!
//! Owns the user registry, the catalog, and the current login. Nothing here
//! touches the console; [`crate::app::QuizApp`] does the prompting and
//! printing around these operations.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::QuizError;
use crate::model::{QuizAttempt, Subject, User};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Whether `email` has a `local@domain.tld` shape.
///
/// Only the start is anchored: trailing text after a matching prefix is
/// accepted.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("valid email regex"))
        .is_match(email)
}

/// Fields collected by the registration form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub enrollment: String,
    pub password: String,
    pub confirm_password: String,
}

/// Registry of users plus the single current login.
#[derive(Debug)]
pub struct Session {
    users: HashMap<String, User>,
    /// Registry key of the logged-in user.
    current_user: Option<String>,
    catalog: Catalog,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            users: HashMap::new(),
            current_user: None,
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Create a user. Does not log them in.
    pub fn register(&mut self, form: Registration) -> Result<&User, QuizError> {
        if !is_valid_email(&form.email) {
            return Err(QuizError::InvalidEmail);
        }
        if form.password != form.confirm_password {
            return Err(QuizError::PasswordMismatch);
        }
        if self.users.contains_key(&form.email) {
            return Err(QuizError::UserExists(form.email));
        }

        info!(email = %form.email, "registered user");
        let user = User::new(form.name, form.email.clone(), form.enrollment, form.password);
        Ok(self.users.entry(form.email).or_insert(user))
    }

    /// Authenticate and make the user current. On failure the current user
    /// is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, QuizError> {
        match self.users.get(email) {
            Some(user) if user.password == password => {
                info!(email, "user logged in");
                self.current_user = Some(email.to_string());
                Ok(user)
            }
            _ => {
                debug!(email, "rejected login");
                Err(QuizError::InvalidCredentials)
            }
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user
            .as_deref()
            .and_then(|email| self.users.get(email))
    }

    /// The current user, or `NotLoggedIn`.
    pub fn require_user(&self) -> Result<&User, QuizError> {
        self.current_user().ok_or(QuizError::NotLoggedIn)
    }

    /// First catalog subject whose label starts with `prefix`.
    pub fn select_subject(&self, prefix: &str) -> Result<&Subject, QuizError> {
        let subject = self
            .catalog
            .select(prefix)
            .ok_or_else(|| QuizError::InvalidSubject(prefix.to_string()))?;
        debug!(prefix, label = %subject.label, "selected subject");
        Ok(subject)
    }

    /// Append a finished attempt to the current user's results.
    pub fn record_attempt(&mut self, attempt: QuizAttempt) -> Result<&QuizAttempt, QuizError> {
        let email = self.current_user.as_deref().ok_or(QuizError::NotLoggedIn)?;
        let user = self.users.get_mut(email).ok_or(QuizError::NotLoggedIn)?;

        info!(
            email,
            subject = %attempt.subject,
            correct = attempt.correct(),
            wrong = attempt.wrong(),
            "recorded quiz attempt"
        );
        user.results.push(attempt);
        let last = user.results.len() - 1;
        Ok(&user.results[last])
    }

    /// The current user's attempts in completion order.
    pub fn results(&self) -> Result<&[QuizAttempt], QuizError> {
        Ok(&self.require_user()?.results)
    }
}
