//! Core library for the `scroll-assist` CLI.
//!
//! The [`assist`] module holds the scroll checkpoint recorder and player:
//! a session state machine, an eased frame-stepped animator and the key
//! router. The page being scrolled and the key-value store behind the
//! checkpoints are traits ([`assist::ScrollHost`], [`store::KeyValueStore`]),
//! so the core runs against any host. The [`page`] module provides the text
//! document host used by the terminal presentation view.
pub mod args;
pub mod assist;
pub mod config;
pub mod error;
pub mod page;
pub mod store;
pub mod system;
