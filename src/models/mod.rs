//! # Read Models
//!
//! Rows the onboarding checks read from the product database, plus the
//! checklist entry they produce. Nothing here writes to the store.

pub mod checklist;
pub mod integration;
pub mod member;
pub mod project;

pub use checklist::ChecklistEntry;
pub use integration::Integration;
pub use member::Member;
pub use project::Project;
