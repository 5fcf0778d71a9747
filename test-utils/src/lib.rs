//! Shared test utilities.
//!
//! Factories for Serenity API objects used by the classifier tests. See the
//! [`serenity`] module for the available factories.

pub mod serenity;
