//! quizapp-core — Session, catalog, and scoring for the console quiz.
//!
//! This crate holds the data model, the built-in question catalog, the
//! in-memory session manager, and the interactive menu loop that the
//! `quizapp` binary drives over stdin/stdout.

pub mod app;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod scoring;
pub mod session;

pub use app::QuizApp;
pub use catalog::Catalog;
pub use config::{load_config_from, QuizAppConfig};
pub use console::Console;
pub use error::{ChoiceError, QuizError};
pub use session::Session;
