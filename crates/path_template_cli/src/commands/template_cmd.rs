//! Template commands for the path template CLI.
//!
//! ```bash
//! path-template render 'buckets/*/objects/**'
//! path-template match 'projects/{project}/topics/*' projects/p1/topics/t1 --json
//! path-template instantiate 'bar/**/foo/*' '$0=1/2' '$1=3'
//! ```

use clap::Subcommand;
use path_template::{Bindings, PathTemplate};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "template_cmd_tests.rs"]
mod tests;

/// Subcommands that operate on a single template.
#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Print the canonical form of a template
    Render {
        /// Template text, e.g. "buckets/*/objects/**"
        template: String,
    },

    /// Print the number of atoms in a template
    Size {
        /// Template text
        template: String,
    },

    /// Match a path and print the bindings
    Match {
        /// Template text
        template: String,

        /// Path to match, e.g. "buckets/b1/objects/a/b"
        path: String,

        /// Print bindings as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Build a path from NAME=VALUE bindings
    Instantiate {
        /// Template text
        template: String,

        /// Binding values in NAME=VALUE form
        #[arg(value_parser = parse_key_val)]
        bindings: Vec<(String, String)>,
    },
}

/// Split a `NAME=VALUE` argument at the first `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid NAME=VALUE: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Execute a template command, returning the text to print.
#[instrument]
pub fn execute(cmd: &TemplateCommands) -> Result<String, Error> {
    match cmd {
        TemplateCommands::Render { template } => render(template),
        TemplateCommands::Size { template } => size(template),
        TemplateCommands::Match {
            template,
            path,
            json,
        } => match_path(template, path, *json),
        TemplateCommands::Instantiate { template, bindings } => instantiate(template, bindings),
    }
}

fn render(template: &str) -> Result<String, Error> {
    Ok(PathTemplate::new(template)?.to_string())
}

fn size(template: &str) -> Result<String, Error> {
    Ok(PathTemplate::new(template)?.size().to_string())
}

fn match_path(template: &str, path: &str, json: bool) -> Result<String, Error> {
    let template = PathTemplate::new(template)?;
    let bindings = template.match_path(path)?;
    debug!("Matched {} binding(s)", bindings.len());

    // Sorted output keeps the result stable between runs.
    let sorted: BTreeMap<String, String> = bindings.into_iter().collect();
    if json {
        return serde_json::to_string_pretty(&sorted).map_err(|e| Error::Output(e.to_string()));
    }

    Ok(sorted
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn instantiate(template: &str, pairs: &[(String, String)]) -> Result<String, Error> {
    let template = PathTemplate::new(template)?;

    let mut bindings = Bindings::new();
    for (name, value) in pairs {
        if bindings.insert(name.clone(), value.clone()).is_some() {
            return Err(Error::InvalidArguments(format!(
                "binding '{}' given more than once",
                name
            )));
        }
    }

    Ok(template.instantiate(&bindings)?)
}
