//! Core library components.
//!
//! This module contains the reusable logic for input resolution, parameter
//! store access, and the export pipeline. Everything here is driven through
//! the `ParameterStore` and `CiRunner` traits so it can be exercised with
//! in-memory fakes.

pub mod action;
pub mod args;
pub mod constants;
pub mod creds;
pub mod runner;
pub mod store;
