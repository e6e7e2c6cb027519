// Application layer - validation, orchestration and reporting on top of
// the file-backed store.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
