use marquee_catalog::Catalog;
use marquee_core::MovieId;
use marquee_storage::MovieStore;

use super::fail;
use crate::render::{print_movie, print_movies};
use crate::OutputFormat;

pub(crate) async fn cmd_list<S: MovieStore>(catalog: &Catalog<S>, output: OutputFormat, quiet: bool) {
    match catalog.list().await {
        Ok(views) => print_movies(&views, output),
        Err(e) => fail(e, output, quiet),
    }
}

pub(crate) async fn cmd_latest<S: MovieStore>(
    catalog: &Catalog<S>,
    count: Option<usize>,
    output: OutputFormat,
    quiet: bool,
) {
    let result = match count {
        Some(n) => catalog.latest_n(n).await,
        None => catalog.latest().await,
    };
    match result {
        Ok(views) => print_movies(&views, output),
        Err(e) => fail(e, output, quiet),
    }
}

pub(crate) async fn cmd_search<S: MovieStore>(
    catalog: &Catalog<S>,
    category: &str,
    value: &str,
    output: OutputFormat,
    quiet: bool,
) {
    match catalog.search(category, value).await {
        Ok(views) => print_movies(&views, output),
        Err(e) => fail(e, output, quiet),
    }
}

pub(crate) async fn cmd_get<S: MovieStore>(
    catalog: &Catalog<S>,
    id: MovieId,
    output: OutputFormat,
    quiet: bool,
) {
    match catalog.get(id).await {
        Ok(view) => print_movie(&view, output),
        Err(e) => fail(e, output, quiet),
    }
}
