//! Executor Layer Tests
//!
//! Tests for the vela-executor crate which provides:
//! - Command enum - the administrative instruction set
//! - Executor - command dispatch over a session
//! - PhysicalCommand - the operator honouring the pipeline contract
//! - Session/global/config variable scopes

mod common;

mod command_dispatch;
mod concurrency;
mod error_handling;
mod profile_export;
