//! Presentation of completed studies.
//!
//! The study loop never prints; these helpers consume a finished
//! [`StudySummary`](crate::StudySummary) and render it for humans
//! (terminal) or machines (JSON).

pub mod json;
pub mod terminal;
