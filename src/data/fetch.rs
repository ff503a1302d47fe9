use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::loader;
use super::model::Table;

// ---------------------------------------------------------------------------
// Fetch-if-absent dataset acquisition
// ---------------------------------------------------------------------------

/// Ensure `cache_path` exists locally, downloading it from `url` once if
/// missing. Returns the local path.
///
/// No retry and no freshness check: an existing file is used as-is.
pub fn ensure_cached(url: &str, cache_path: &Path) -> Result<PathBuf> {
    if cache_path.exists() {
        log::debug!("using cached dataset at {}", cache_path.display());
        return Ok(cache_path.to_path_buf());
    }

    if let Some(parent) = cache_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating cache directory {}", parent.display()))?;
    }

    log::info!("downloading {url} -> {}", cache_path.display());
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("server rejected {url}"))?;
    let body = response.bytes().context("reading response body")?;

    std::fs::write(cache_path, &body)
        .with_context(|| format!("writing {}", cache_path.display()))?;

    Ok(cache_path.to_path_buf())
}

/// Fetch-if-absent, then parse the local file into a [`Table`].
pub fn load_remote(url: &str, cache_path: &Path) -> Result<Table> {
    let local = ensure_cached(url, cache_path)?;
    loader::load_file(&local)
}
