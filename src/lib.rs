//! armp-notices library
//!
//! This crate provides the core functionality for the `armp-notices` binary.
//! Keep the crate root minimal; implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle the steps of turning a
//! tender result page into structured notices:
//!
//! - [`extractor`] - Turns one result list item into a [`models::Notice`] (DOM probe,
//!   label dictionary or raw markup patterns)
//! - [`pipeline`] - Runs the configured strategy over every item of a page
//! - [`fetcher`] - Fetches the result page or reads a saved copy
//! - [`output`] - Renders notices as YAML or JSON and writes them out
//! - [`cli`] - Command-line interface orchestrating the workflow
//! - [`config`] - Defaults, TOML file and environment overrides
//! - [`models`] - Notice record and the enums selecting behavior
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```
//! use armp_notices::{config::ResolvedConfig, models::Strategy, pipeline};
//!
//! # fn main() -> Result<(), armp_notices::errors::AppError> {
//! let html = r#"<html lang="fr"><body><ul class="list-group">
//!   <li class="list-group-item">
//!     <strong>AO 042/2025</strong>
//!     <div class="d-table-cell">MO/AC:</div><div class="d-table-cell">Commune de Kribi</div>
//!   </li>
//! </ul></body></html>"#;
//!
//! let config = ResolvedConfig { strategy: Strategy::Probe, ..ResolvedConfig::default() };
//! let notices = pipeline::extract_notices(html, &config)?;
//! assert_eq!(notices[0].authority, "Commune de Kribi");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod output;
pub mod pipeline;
