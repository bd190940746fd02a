//! Request types for HTTP handlers.

mod courses;
mod creator;
mod materials;
mod paginations;
mod paths;
mod semesters;
mod topics;
mod validations;

pub use courses::*;
pub use creator::*;
pub use materials::*;
pub use paginations::*;
pub use paths::*;
pub use semesters::*;
pub use topics::*;
pub use validations::*;
