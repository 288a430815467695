//! Command modules for the path template CLI.
//!
//! - `template_cmd`: render, size, match and instantiate templates
//! - `config_cmd`: resolve layered client configuration files

pub mod config_cmd;
pub mod template_cmd;
