// src/core/mod.rs

// Everything here is independent of the terminal: the wire models, the
// validation rule, the presentation table and the HTTP client.

/// Request, result and usage types exchanged with the analysis service.
pub mod models;

/// Error types for validation, analysis requests and usage fetches.
pub mod error;

/// The empty-review rule applied before anything is sent.
pub mod validator;

/// Sentiment to icon/badge/bar mapping.
pub mod presentation;

/// `reqwest` client for `POST /analyze` and `GET /usage`.
pub mod client;
