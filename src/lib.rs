//! Maturity assessment service.
//!
//! Scores a fixed two-section questionnaire (LGPD privacy compliance and
//! CIS Controls security hygiene) and renders the normalized results as a
//! side-by-side radar chart. The [`assessment`] module holds the scoring
//! and projection pipeline; the HTTP boundary lives in the binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
