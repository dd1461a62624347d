// Upload orchestration: extract text, validate, build and store the analysis.
// Everything downstream of the validator is heuristic and deterministic.

pub mod builder;
pub mod extraction;
pub mod handlers;
pub mod impact;
pub mod profile;
pub mod report;
pub mod store;
