//! Self-update checker.
//!
//! Fetches a JSON manifest (`{version, description, files:[{url, path}]}`),
//! compares its version with the running one and optionally downloads the
//! listed files. Failures are logged and reported as "no update".

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const USER_AGENT: &str = concat!("bdreminder/", env!("CARGO_PKG_VERSION"), " (update-check)");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestFile {
    pub url: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<ManifestFile>,
}

impl Manifest {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn parsed_version(&self) -> AppResult<Version> {
        self.version.parse()
    }
}

/// Dotted numeric version such as `1.2.10`.
///
/// A leading `v` is accepted and any pre-release/build suffix after `-` or
/// `+` is ignored. Missing trailing components compare as zero, so `1.0`
/// equals `1.0.0`.
#[derive(Debug, Clone)]
pub struct Version(Vec<u64>);

impl FromStr for Version {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let numeric = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let numeric = numeric.split(['-', '+']).next().unwrap_or_default();

        if numeric.is_empty() {
            return Err(AppError::InvalidVersion(s.to_string()));
        }

        let parts = numeric
            .split('.')
            .map(|p| p.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AppError::InvalidVersion(s.to_string()))?;

        Ok(Version(parts))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", s.join("."))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(15))
        .timeout_read(Duration::from_secs(60))
        .build()
}

fn http_get(url: &str) -> AppResult<ureq::Response> {
    agent()
        .get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| AppError::Update(format!("GET {url} failed: {e}")))
}

/// Read a manifest from an http(s) URL or a local file path.
pub fn fetch_manifest(source: &str) -> AppResult<Manifest> {
    let raw = if is_remote(source) {
        http_get(source)?
            .into_string()
            .map_err(|e| AppError::Update(format!("cannot read manifest body: {e}")))?
    } else {
        fs::read_to_string(source)?
    };
    Manifest::from_json(&raw)
}

/// `Some(manifest)` when `manifest` announces a version strictly newer than
/// `current`.
pub fn newer_than(manifest: Manifest, current: &str) -> AppResult<Option<Manifest>> {
    let remote = manifest.parsed_version()?;
    let local: Version = current.parse()?;
    if remote > local {
        tracing::info!(%remote, %local, "new version available");
        Ok(Some(manifest))
    } else {
        tracing::debug!(%remote, %local, "already up to date");
        Ok(None)
    }
}

/// Check `source` for a newer version. Any failure is logged and treated as
/// "no update available".
pub fn check_for_updates(source: &str, current: &str) -> Option<Manifest> {
    match fetch_manifest(source).and_then(|m| newer_than(m, current)) {
        Ok(found) => found,
        Err(e) => {
            tracing::error!(error = %e, source, "update check failed");
            None
        }
    }
}

/// Resolve a manifest path under `base_dir`, refusing absolute paths and
/// parent-directory components.
fn target_path(base_dir: &Path, rel: &str) -> AppResult<PathBuf> {
    let rel_path = Path::new(rel);
    let safe = rel_path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if rel.is_empty() || !safe {
        return Err(AppError::Update(format!("refusing unsafe target path '{rel}'")));
    }
    Ok(base_dir.join(rel_path))
}

fn download_file(file: &ManifestFile, base_dir: &Path) -> AppResult<PathBuf> {
    let dest = target_path(base_dir, &file.path)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if is_remote(&file.url) {
        let resp = http_get(&file.url)?;
        let mut reader = resp.into_reader();
        let mut out = fs::File::create(&dest)?;
        std::io::copy(&mut reader, &mut out)?;
    } else {
        fs::copy(&file.url, &dest)?;
    }

    Ok(dest)
}

/// Download every file of `manifest` below `base_dir`.
/// Stops at the first failure, logs it and returns `false`.
pub fn download_update(manifest: &Manifest, base_dir: &Path) -> bool {
    for file in &manifest.files {
        match download_file(file, base_dir) {
            Ok(dest) => tracing::info!(url = %file.url, dest = %dest.display(), "update file downloaded"),
            Err(e) => {
                tracing::error!(error = %e, url = %file.url, "update download failed");
                return false;
            }
        }
    }
    true
}
