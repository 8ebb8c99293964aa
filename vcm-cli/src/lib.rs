//! vcm library interface
//!
//! Exposes command and service modules for the `vcm` binary and for
//! integration testing.

pub mod commands;
pub mod services;
