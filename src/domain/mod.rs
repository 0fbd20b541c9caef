//! Core domain types.

pub mod visit_event;

pub use visit_event::VisitEvent;
