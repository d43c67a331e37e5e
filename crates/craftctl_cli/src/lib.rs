//! # craftctl
//!
//! Command-line front end:
//! - `create [version] [dir]` - download a server and write default configuration
//! - `run [min] [max]` - run the server in the foreground
//! - `clean [all]` - remove generated files
//! - `conf set|get|list|reset|search` - edit `server.properties` and the icon

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod cli;
pub mod commands;
pub mod logging;
