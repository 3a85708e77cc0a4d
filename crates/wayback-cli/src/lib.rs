//! Wayback Shell
//!
//! Terminal front end for the content store: lists specialisms and years,
//! renders one selection, or assembles the full page with its bibliography and
//! navigation links, in text, Markdown, HTML or JSON.

#![warn(unreachable_pub)]

pub mod config;
pub mod render;
pub mod shell;

pub use config::{ConfigError, NavLink, ShellConfig, Source};
pub use render::{OutputFormat, Renderer, Selection, EMPTY_STORE, NO_CONTENT};
pub use shell::{Shell, ShellError, ShellResult};
