//! `listcheck` command-line front end.
//!
//! The only part of the workspace that touches the filesystem or the
//! environment: it loads profiles and listings from disk, runs them through
//! [`listcheck_core`], and renders the reports.

pub mod cli;
pub mod commands;
pub mod config;
