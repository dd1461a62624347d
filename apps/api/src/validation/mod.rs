// Resume-content screening: keyword categories and the ATS-style validator.
// Pure and synchronous; the validator is built once and shared through AppState.

pub mod categories;
pub mod validator;

pub use categories::CategoryDefinition;
pub use validator::{ResumeValidator, ValidationResult, ATS_THRESHOLD};
