//! # API Design Util
//!
//! A command-line tool for capturing example responses from the home API.
//!
//! This library provides functionality to:
//! - Locate and read the API key from the home CLI config file
//! - Issue one authenticated GET request against the `api/v3` API
//! - Redact string values in the JSON response before printing it
//!
//! ## Modules
//!
//! - [`app`] - Command orchestration and output rendering
//! - [`app_deps`] - Client traits used by [`app`]
//! - [`cli`] - Command-line arguments
//! - [`config`] - Config file reading (API key)
//! - [`home`] - HTTP client for the home API
//! - [`redact`] - String redaction over JSON values
//! - [`validation`] - API path normalization
//! - [`paths`] - XDG-compliant path resolution
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod errors;
pub mod home;
pub mod paths;
pub mod redact;
pub mod validation;
