//! Core components for decoding credential documents.
//!
//! This crate provides the foundational types shared by the credfile crates:
//!
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **Error**: The single error type returned by every credfile operation
//!
//! ## Example
//!
//! ```
//! use credfile_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     home_dir: None,
//!     envs: HashMap::from([(
//!         "GOOGLE_APPLICATION_CREDENTIALS".to_string(),
//!         "/etc/gcp/creds.json".to_string(),
//!     )]),
//! });
//!
//! assert_eq!(
//!     ctx.env_var("GOOGLE_APPLICATION_CREDENTIALS").as_deref(),
//!     Some("/etc/gcp/creds.json")
//! );
//! ```
//!
//! ## Traits
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: Base64 helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod context;
pub use context::Context;
mod fs;
pub use fs::{FileRead, NoopFileRead};
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
