//! # Resource Inspection
//!
//! Inspects every entry of [`RESOURCES`] under a public directory and grades it.
//!
//! | situation | level |
//! |---|---|
//! | required file missing | failure |
//! | required PNG with the wrong size | failure |
//! | optional file or screenshot missing | warning |
//! | dimensions unreadable, screenshot not 9:16 | warning |

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::png::{read_dimensions, Dimensions};
use crate::resources::{has_screenshot_ratio, ResourceKind, ResourceSpec, RESOURCES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Ok,
    Warning,
    Failure,
}

/// Result for one expected file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceReport {
    #[serde(flatten)]
    pub spec: ResourceSpec,
    pub present: bool,
    pub size_bytes: Option<u64>,
    pub dimensions: Option<Dimensions>,
    pub level: Level,
    pub note: Option<String>,
}

impl ResourceReport {
    pub fn size_kb(&self) -> Option<f64> {
        self.size_bytes.map(|bytes| bytes as f64 / 1024.0)
    }

    fn graded(mut self, level: Level, note: impl Into<String>) -> Self {
        self.level = level;
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub public_dir: PathBuf,
    pub resources: Vec<ResourceReport>,
}

impl CheckReport {
    /// Required files that are absent.
    pub fn missing_required(&self) -> Vec<&ResourceReport> {
        self.resources
            .iter()
            .filter(|r| r.spec.kind == ResourceKind::Required && !r.present)
            .collect()
    }

    pub fn failures(&self) -> usize {
        self.count(Level::Failure)
    }

    pub fn warnings(&self) -> usize {
        self.count(Level::Warning)
    }

    pub fn passed(&self) -> bool {
        self.failures() == 0
    }

    fn count(&self, level: Level) -> usize {
        self.resources.iter().filter(|r| r.level == level).count()
    }
}

// region:    --- Error
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("public directory not found: {0}")]
    NotADirectory(PathBuf),
}
// endregion: --- Error

pub fn check_public_dir(dir: impl AsRef<Path>) -> Result<CheckReport, CheckError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(CheckError::NotADirectory(dir.to_path_buf()));
    }

    let resources = RESOURCES.iter().map(|spec| inspect(dir, *spec)).collect();
    Ok(CheckReport {
        public_dir: dir.to_path_buf(),
        resources,
    })
}

fn inspect(dir: &Path, spec: ResourceSpec) -> ResourceReport {
    let path = dir.join(spec.path);
    let report = ResourceReport {
        spec,
        present: false,
        size_bytes: None,
        dimensions: None,
        level: Level::Ok,
        note: None,
    };

    let metadata = match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => {
            tracing::debug!(path = %path.display(), "Resource missing");
            return match spec.kind {
                ResourceKind::Required => report.graded(Level::Failure, "missing required file"),
                ResourceKind::Optional => report.graded(Level::Warning, "optional file missing"),
                ResourceKind::Screenshot => report.graded(Level::Warning, "screenshot missing"),
            };
        }
    };

    let mut report = ResourceReport {
        present: true,
        size_bytes: Some(metadata.len()),
        ..report
    };

    if !spec.path.ends_with(".png") {
        return report;
    }

    let dims = match read_dimensions(&path) {
        Ok(dims) => dims,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unreadable PNG");
            return report.graded(Level::Warning, format!("could not read dimensions: {}", e));
        }
    };
    report.dimensions = Some(dims);

    if let Some((width, height)) = spec.declared_size {
        if (dims.width, dims.height) != (width, height) {
            let level = match spec.kind {
                ResourceKind::Required => Level::Failure,
                _ => Level::Warning,
            };
            return report.graded(level, format!("expected {}x{}, found {}", width, height, dims));
        }
    }

    if spec.kind == ResourceKind::Screenshot && !has_screenshot_ratio(dims.width, dims.height) {
        return report.graded(Level::Warning, format!("{} is not the recommended 9:16 ratio", dims));
    }

    report
}
