//! `insured-registry` - An in-memory registry of insured persons
//!
//! This library provides the registry itself, the record type it stores,
//! and the interactive console that collects and validates user input.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logging;
pub mod person;
pub mod registry;

pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use person::InsuredPerson;
pub use registry::Registry;
