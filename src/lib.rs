//! catseed - seed a store's category tree from its product catalog.
//!
//! Products are categorized by keyword, their brands grouped under each
//! category, and the API calls that create the categories and file each
//! product under `<category>/<brand>` are printed, never sent.

pub mod app;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod grouping;
pub mod logging;

pub use error::{AppError, Result};
