use std::path::Path;

use marquee_catalog::Catalog;
use marquee_core::{MovieDraft, MovieId, MoviePatch};
use marquee_storage::MovieStore;

use super::{fail, read_json};
use crate::render::print_movie;
use crate::OutputFormat;

pub(crate) async fn cmd_add<S: MovieStore>(
    catalog: &Catalog<S>,
    file: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    let draft: MovieDraft = read_json(file, output, quiet);
    match catalog.create(draft).await {
        Ok(view) => {
            if !quiet {
                print_movie(&view, output);
            }
        }
        Err(e) => fail(e, output, quiet),
    }
}

pub(crate) async fn cmd_update<S: MovieStore>(
    catalog: &Catalog<S>,
    id: MovieId,
    file: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    let patch: MoviePatch = read_json(file, output, quiet);
    match catalog.update(id, patch).await {
        Ok(view) => {
            if !quiet {
                print_movie(&view, output);
            }
        }
        Err(e) => fail(e, output, quiet),
    }
}

pub(crate) async fn cmd_delete<S: MovieStore>(
    catalog: &Catalog<S>,
    id: MovieId,
    output: OutputFormat,
    quiet: bool,
) {
    match catalog.delete(id).await {
        Ok(()) => {
            if !quiet {
                match output {
                    OutputFormat::Text => println!("deleted movie {}", id),
                    OutputFormat::Json => println!("{}", serde_json::json!({ "deleted": id.0 })),
                }
            }
        }
        Err(e) => fail(e, output, quiet),
    }
}
