//! Artwork source resolution and loading.
//!
//! Sources resolve in a fixed precedence order (inline text, single source,
//! source list, manifest directory, config list, built-in defaults) and every
//! failure degrades: a bad source is reported and skipped, and an empty
//! result falls back to the embedded artworks so the animation always has
//! something to show.

use tracing::{error, info};

use crate::config::Config;
use crate::playlist::{embedded_artworks, Artwork};
use crate::{LovewaveError, Result};

/// Where the artworks come from, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtSource {
    /// Raw ASCII text given directly (frame markers allowed).
    Inline(String),
    /// One file path or URL.
    Single(String),
    /// An ordered list of file paths or URLs.
    List(Vec<String>),
    /// A directory (or base URL) with a `manifest.json` array of file names.
    Dir(String),
    /// The compiled-in defaults.
    Embedded,
}

impl ArtSource {
    /// Pick the source from CLI values and the config file, first match
    /// wins: inline, single, list, manifest directory, config list, config
    /// directory, defaults.
    pub fn resolve(
        inline: Option<String>,
        mut arts: Vec<String>,
        art_dir: Option<String>,
        config: &Config,
    ) -> Self {
        if let Some(text) = inline {
            return ArtSource::Inline(text);
        }
        if arts.len() > 1 {
            return ArtSource::List(arts);
        }
        if let Some(single) = arts.pop() {
            return ArtSource::Single(single);
        }
        if let Some(dir) = art_dir {
            return ArtSource::Dir(dir);
        }
        if let Some(src) = &config.ascii_src {
            return ArtSource::Single(src.clone());
        }
        if !config.ascii_list.is_empty() {
            return ArtSource::List(config.ascii_list.clone());
        }
        if let Some(dir) = &config.ascii_dir {
            return ArtSource::Dir(dir.clone());
        }
        ArtSource::Embedded
    }

    /// Status-bar description of the source.
    pub fn description(&self) -> String {
        match self {
            ArtSource::Inline(_) => "Inline text".to_string(),
            ArtSource::Single(src) => format!("Single source: {src}"),
            ArtSource::List(list) => format!("List ({} sources)", list.len()),
            ArtSource::Dir(dir) => format!("Directory manifest: {dir}"),
            ArtSource::Embedded => "Built-in default".to_string(),
        }
    }

    /// Sources that pin the display to one artwork turn auto-rotation off.
    pub fn forces_single_artwork(&self) -> bool {
        matches!(self, ArtSource::Inline(_) | ArtSource::Single(_))
    }
}

/// Outcome of loading a source: the artworks plus everything worth telling
/// the user about.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub artworks: Vec<Artwork>,
    pub description: String,
    pub errors: Vec<String>,
}

/// Load every artwork a source names. Never fails outright: per-source
/// errors are collected and an empty result falls back to the defaults.
pub async fn load(source: &ArtSource) -> LoadReport {
    let mut artworks = Vec::new();
    let mut errors = Vec::new();

    match source {
        ArtSource::Inline(text) => {
            if let Some(art) = Artwork::new(text, "Inline", "command line") {
                artworks.push(art);
            }
        }
        ArtSource::Single(src) => {
            load_one(src, &mut artworks, &mut errors).await;
        }
        ArtSource::List(list) => {
            for src in list {
                load_one(src, &mut artworks, &mut errors).await;
            }
        }
        ArtSource::Dir(dir) => match manifest_entries(dir).await {
            Ok(sources) => {
                for src in &sources {
                    load_one(src, &mut artworks, &mut errors).await;
                }
            }
            Err(e) => errors.push(format!("Manifest load failed for {dir}: {e}")),
        },
        ArtSource::Embedded => artworks = embedded_artworks(),
    }

    if artworks.is_empty() && *source != ArtSource::Embedded {
        errors.push("No artworks loaded; using built-in defaults".to_string());
        artworks = embedded_artworks();
    }

    info!(count = artworks.len(), source = %source.description(), "artworks loaded");
    LoadReport {
        artworks,
        description: source.description(),
        errors,
    }
}

async fn load_one(src: &str, artworks: &mut Vec<Artwork>, errors: &mut Vec<String>) {
    match fetch_text(src).await {
        Ok(text) => {
            let label = if is_url(src) { "URL" } else { "File" };
            match Artwork::new(&text, label, src) {
                Some(art) => artworks.push(art),
                None => errors.push(LovewaveError::EmptySource(src.to_string()).to_string()),
            }
        }
        Err(e) => {
            error!(source = src, "artwork load failed: {e}");
            errors.push(format!("ASCII load failed for {src}: {e}"));
        }
    }
}

fn is_url(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// Read a source as text: HTTP(S) via reqwest, anything else from disk.
async fn fetch_text(src: &str) -> Result<String> {
    if is_url(src) {
        let response = reqwest::get(src).await?;
        if !response.status().is_success() {
            return Err(LovewaveError::Fetch(format!("{src} ({})", response.status())));
        }
        Ok(response.text().await?)
    } else {
        Ok(tokio::fs::read_to_string(src).await?)
    }
}

/// Resolve `<dir>/manifest.json` into the full source paths it lists.
async fn manifest_entries(dir: &str) -> Result<Vec<String>> {
    let base = dir.trim_end_matches('/');
    let manifest = format!("{base}/manifest.json");
    let text = fetch_text(&manifest).await?;
    let files: Vec<String> =
        serde_json::from_str(&text).map_err(|_| LovewaveError::Manifest(manifest.clone()))?;
    if files.is_empty() {
        return Err(LovewaveError::Manifest(manifest));
    }
    Ok(files.into_iter().map(|f| format!("{base}/{f}")).collect())
}
