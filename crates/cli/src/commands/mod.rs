//! Subcommand implementations.
//!
//! Each `cmd_*` prints its result to stdout, or reports the failure to stderr
//! and exits with status 1.

mod edit;
mod query;

use std::path::Path;
use std::process;

use marquee_catalog::CatalogError;
use serde::de::DeserializeOwned;

use crate::{report_error, OutputFormat};

pub(crate) use edit::{cmd_add, cmd_delete, cmd_update};
pub(crate) use query::{cmd_get, cmd_latest, cmd_list, cmd_search};

/// Report a catalog failure and exit. Field errors are listed one per line
/// (text) or as an `errors` array (json).
fn fail(err: CatalogError, output: OutputFormat, quiet: bool) -> ! {
    match &err {
        CatalogError::InvalidField(invalid) if !quiet => match output {
            OutputFormat::Json => eprintln!("{}", invalid.to_json_value()),
            OutputFormat::Text => {
                eprintln!("invalid movie");
                for field in &invalid.errors {
                    eprintln!("  - {}", field);
                }
            }
        },
        _ => report_error(&err.to_string(), output, quiet),
    }
    process::exit(1);
}

/// Read and parse a JSON request file, exiting on failure.
fn read_json<T: DeserializeOwned>(path: &Path, output: OutputFormat, quiet: bool) -> T {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error parsing JSON in '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
