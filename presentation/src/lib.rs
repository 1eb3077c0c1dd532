//! Presentation layer for courselib
//!
//! This crate contains the HTTP router, request handlers, wire DTOs,
//! the comma-separated query binder and the server's CLI definition.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::Cli;
pub use http::problem::{ApiProblem, ProblemCode};
pub use http::query::{CommaSeparated, parse_comma_separated};
pub use http::{AppState, build_router};
