//! OpenLambda CLI Library
//!
//! This crate is for shared code and utilities that are not specific to invoking functions.

pub mod transaction;
pub mod utils;
#[macro_use]
pub mod macros;
pub mod logging;
