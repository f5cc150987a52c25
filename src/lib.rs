//! # dpl - DeepL Translation CLI
//!
//! `dpl` is a command-line client for the DeepL API. It submits text to
//! the translation endpoint and prints the result, and can report the
//! character quota of the account.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a text into Japanese
//! dpl translate -t ja "Hello, world"
//!
//! # Translate from stdin, auto-detecting the source language
//! echo "Guten Tag" | dpl translate -s "" -t en
//!
//! # Check the character quota
//! dpl usage
//! ```
//!
//! ## Configuration
//!
//! The authentication key is read from `--auth_key`, the `DPL_AUTH_KEY`
//! environment variable, or `~/.config/dpl/config.toml`:
//!
//! ```toml
//! auth_key = "your-key"
//! api_url = "https://api-free.deepl.com"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and option resolution.
pub mod config;

/// DeepL API (v2) client.
pub mod deepl;

/// Input reading from the command line and stdin.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
