//! Initialization of shared resources.
//!
//! This module provides functions to initialize the HTTP clients and logger
//! used across the engine.

mod client;
mod logger;

pub use client::{init_client, init_head_client};
pub use logger::init_logger_with;
