//! Live-path operations: selection, submission, approval, announcement.
//!
//! Handlers hand raw wire text to these functions and map the returned
//! errors to HTTP statuses; nothing here knows about the HTTP layer.

pub mod approval;
pub mod error;
pub mod notify;
pub mod submission;
pub mod upcoming;
