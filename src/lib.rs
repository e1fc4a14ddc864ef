//! Core library for the `perfctl` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration and SMPS spec loading, test parameter resolution,
//! the auth token file, and the requests sent to a Meshery server. The
//! primary user-facing interface is the `perfctl` command-line application;
//! library APIs may evolve as the CLI grows.
pub mod args;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod perf;
pub mod smps;
