//! Data models for the Name Meaning application.
//!
//! These models match the mobile client's JSON shapes (camelCase) so records
//! can be rendered and persisted without translation.

mod favorite;
mod name_record;

pub use favorite::*;
pub use name_record::*;
