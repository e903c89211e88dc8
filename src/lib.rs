//! Arraykit: small array and record utilities, plus a fixture-driven harness
//! that checks them against literal input/output cases.

pub use crate::errors::ArraykitError;
pub use crate::value::Value;

pub mod cli;
pub mod errors;
pub mod harness;
pub mod utilities;
pub mod value;
