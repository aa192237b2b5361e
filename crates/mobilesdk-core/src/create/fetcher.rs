//! Template fetching from a repo URI or local directory
//!
//! Remote templates arrive as zip archives (GitHub serves one for any repo
//! ref); local templates are read straight from disk. Either way the result
//! is an in-memory file map, so copying behaves identically for both.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;
use walkdir::WalkDir;
use zip::ZipArchive;

use super::manifest::TemplateManifest;

/// Name of the manifest file at the template root
pub const MANIFEST_FILE: &str = "template.yaml";

/// Where a template comes from
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Remote(Url),
    Local(PathBuf),
}

impl TemplateSource {
    /// Interpret a `templaterepouri` value: http(s) URIs are remote repos,
    /// anything else is a local directory path.
    pub fn from_uri(uri: &str) -> Result<Self> {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            let url =
                Url::parse(uri).with_context(|| format!("Invalid template URI: {}", uri))?;
            Ok(Self::Remote(url))
        } else {
            Ok(Self::Local(PathBuf::from(uri)))
        }
    }

    /// URL of the zip archive for a remote source. URIs already naming a
    /// zip are used as-is; bare repo URIs get the archive suffix appended.
    fn archive_url(url: &Url) -> Result<Url> {
        if url.path().ends_with(".zip") {
            return Ok(url.clone());
        }
        let mut archive = url.clone();
        archive
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", url))?
            .pop_if_empty()
            .extend(["archive", "HEAD.zip"]);
        Ok(archive)
    }
}

/// A fetched template: its manifest plus every file, keyed by relative path
#[derive(Debug, Clone)]
pub struct TemplateFiles {
    pub manifest: TemplateManifest,
    files: HashMap<String, Vec<u8>>,
}

/// True when a path stays inside the directory it is joined onto:
/// plain relative components only, no `..`, no root, no drive prefix.
pub(crate) fn is_clean_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, std::path::Component::Normal(_)))
}

impl TemplateFiles {
    fn from_map(files: HashMap<String, Vec<u8>>) -> Result<Self> {
        if let Some(bad) = files.keys().find(|p| !is_clean_relative(p)) {
            anyhow::bail!("Template contains an unsafe file path: {}", bad);
        }
        let manifest_bytes = files
            .get(MANIFEST_FILE)
            .ok_or_else(|| anyhow::anyhow!("Template is missing {}", MANIFEST_FILE))?;
        let manifest: TemplateManifest =
            serde_yaml::from_str(&String::from_utf8_lossy(manifest_bytes))
                .context("Failed to parse template manifest")?;
        Ok(Self { manifest, files })
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Relative paths in deterministic (sorted) order
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.files.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

/// Fetches a template from its source into memory
pub struct TemplateFetcher {
    source: TemplateSource,
    client: reqwest::Client,
}

impl TemplateFetcher {
    pub fn new(source: TemplateSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub async fn fetch(&self) -> Result<TemplateFiles> {
        let files = match &self.source {
            TemplateSource::Remote(url) => {
                let archive_url = TemplateSource::archive_url(url)?;
                let response = self
                    .client
                    .get(archive_url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch template from {}", archive_url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch template from {}: HTTP {}",
                        archive_url,
                        response.status()
                    );
                }

                let bytes = response.bytes().await?.to_vec();
                extract_zip(&bytes)?
            }
            TemplateSource::Local(path) => read_local_dir(path).await?,
        };

        TemplateFiles::from_map(files)
    }
}

/// Extract a zip archive into a path→bytes map. Repo archives wrap their
/// contents in a single top-level directory; that prefix is stripped.
fn extract_zip(zip_bytes: &[u8]) -> Result<HashMap<String, Vec<u8>>> {
    let cursor = Cursor::new(zip_bytes);
    let mut archive = ZipArchive::new(cursor).context("Failed to read template archive")?;

    let mut files = HashMap::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        files.insert(file.name().to_string(), contents);
    }

    Ok(strip_common_prefix(files))
}

fn strip_common_prefix(files: HashMap<String, Vec<u8>>) -> HashMap<String, Vec<u8>> {
    let mut prefixes = files
        .keys()
        .map(|path| path.split('/').next().unwrap_or(""));
    let Some(first) = prefixes.next() else {
        return files;
    };
    let shared = !first.is_empty()
        && prefixes.all(|p| p == first)
        && files.keys().all(|path| path.len() > first.len() + 1);
    if !shared {
        return files;
    }

    let skip = first.len() + 1;
    files
        .into_iter()
        .map(|(path, bytes)| (path[skip..].to_string(), bytes))
        .collect()
}

async fn read_local_dir(dir: &Path) -> Result<HashMap<String, Vec<u8>>> {
    if !dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", dir.display());
    }

    let mut files = HashMap::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .with_context(|| format!("Path outside template dir: {}", entry.path().display()))?;
        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let contents = tokio::fs::read(entry.path())
            .await
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        files.insert(key, contents);
    }

    Ok(files)
}
