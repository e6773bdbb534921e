//! Foundation types for DEVCON.
//!
//! This crate contains the types shared by the engine and its hosts: the
//! typed value model, the host logging capability, console configuration,
//! and the error enum.

pub mod config;
pub mod error;
pub mod host;
pub mod value;
