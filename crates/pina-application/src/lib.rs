//! Use-case layer for the Pina app.
//!
//! Composes the domain core into the two things the shell drives: the
//! [`AppController`] owning navigation and session state, and the
//! [`ChatSession`] behind the Pine-Bot screen.

pub mod chat_session;
pub mod controller;

pub use chat_session::ChatSession;
pub use controller::{AppController, Notice};
