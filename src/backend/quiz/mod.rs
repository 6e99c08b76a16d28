//! Quiz Module
//!
//! Session-authenticated quiz score submission, one submission per user.

pub mod handlers;

pub use handlers::submit_quiz;
