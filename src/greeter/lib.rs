//! # Greeter
//!
//! Greeter welcomes a list of names to the jungle. The binary is a thin shell around
//! a library that knows nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, writes stdout         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic, returns a `CmdResult` of leveled messages    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing name list is not a failure: the command answers with an
//! [`MessageLevel::Error`](commands::MessageLevel::Error) message which the CLI
//! prints on stdout like any other line, and the process still exits 0.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command logic and result types
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
