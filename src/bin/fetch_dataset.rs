//! Pre-fetch a dataset into the local cache so the viewer works offline.
//!
//! Usage:
//! ```text
//! fetch_dataset [URL] [OUT_PATH]
//! ```
//! With no arguments it fetches the gapminder CSV into `data/gapminder.csv`.

use std::path::PathBuf;

use anyhow::Result;

use histoverlay::data::fetch;

const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/jennybc/gapminder/main/inst/extdata/gapminder.csv";
const DEFAULT_OUT: &str = "data/gapminder.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let url = args.next().unwrap_or_else(|| DEFAULT_URL.to_string());
    let out = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUT.to_string()));

    let table = fetch::load_remote(&url, &out)?;
    log::info!(
        "fetched {} -> {} ({} rows, columns {:?})",
        url,
        out.display(),
        table.n_rows(),
        table.column_names()
    );
    println!(
        "{}: {} rows, columns {:?}",
        out.display(),
        table.n_rows(),
        table.column_names()
    );
    Ok(())
}
