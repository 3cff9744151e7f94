//! Strategy traits for the checker system.
//!
//! [`check::Check`] implementations evaluate one assignment kind's predicates;
//! [`feedback::Feedback`] implementations render evaluated outcomes into
//! student-facing messages.

pub mod check;
pub mod feedback;
