//! Renaming driver: `{id}.svg` -> `{id}_{slug}.svg`.
//!
//! Every asset is processed independently; a failure on one file is recorded
//! in the report and the batch moves on. Only a missing target directory is
//! fatal.

mod scan;

use crate::hints::extract_hints;
use crate::identify::InstitutionIdentifier;
use crate::search::SearchEngine;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub use scan::{parse_numbered_name, scan_assets, NumberedAsset};

/// Fatal errors for a rename run.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("directory '{}' not found", .0.display())]
    MissingDirectory(PathBuf),
    #[error("cannot list '{}': {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { to: String },
    /// Dry run: the rename that would have happened.
    WouldRename { to: String },
    /// No query produced a usable slug.
    NoMatch,
    /// The target name is already taken; nothing was touched.
    TargetExists { target: String },
    /// Reading or renaming failed.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReport {
    pub id: u64,
    pub file_name: String,
    pub outcome: RenameOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct RenameReport {
    pub assets: Vec<AssetReport>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed { .. } | RenameOutcome::WouldRename { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.assets.len() - self.renamed()
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.assets.iter().filter(|a| pred(&a.outcome)).count()
    }
}

/// Renames numbered assets in one directory.
pub struct Renamer<S> {
    dir: PathBuf,
    extension: String,
    identifier: InstitutionIdentifier<S>,
    pause: Duration,
    dry_run: bool,
}

impl<S: SearchEngine> Renamer<S> {
    pub fn new(
        dir: impl Into<PathBuf>,
        extension: &str,
        identifier: InstitutionIdentifier<S>,
        pause: Duration,
    ) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
            identifier,
            pause,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Target file name for an identified asset.
    pub fn target_name(&self, id: u64, slug: &str) -> String {
        format!("{}_{}.{}", id, slug, self.extension)
    }

    /// Processes every numbered asset in identifier order.
    ///
    /// `on_asset` is called after each asset (the CLI prints progress there).
    pub fn run_with<F>(&self, mut on_asset: F) -> Result<RenameReport, RenameError>
    where
        F: FnMut(&AssetReport),
    {
        if !self.dir.is_dir() {
            return Err(RenameError::MissingDirectory(self.dir.clone()));
        }
        let assets = scan_assets(&self.dir, &self.extension).map_err(|source| RenameError::Scan {
            path: self.dir.clone(),
            source,
        })?;
        tracing::info!(dir = %self.dir.display(), count = assets.len(), "scanned assets");

        let mut report = RenameReport::default();
        for asset in assets {
            let outcome = self.process(&asset);
            match &outcome {
                RenameOutcome::Renamed { to } => {
                    tracing::info!(from = %asset.file_name, to = %to, "renamed");
                }
                RenameOutcome::Failed { error } => {
                    tracing::warn!(file = %asset.file_name, "rename failed: {}", error);
                }
                other => tracing::info!(file = %asset.file_name, outcome = ?other, "skipped"),
            }
            let renamed = matches!(outcome, RenameOutcome::Renamed { .. });
            let entry = AssetReport {
                id: asset.id,
                file_name: asset.file_name,
                outcome,
            };
            on_asset(&entry);
            report.assets.push(entry);
            if renamed && !self.pause.is_zero() {
                std::thread::sleep(self.pause);
            }
        }
        Ok(report)
    }

    pub fn run(&self) -> Result<RenameReport, RenameError> {
        self.run_with(|_| {})
    }

    fn process(&self, asset: &NumberedAsset) -> RenameOutcome {
        let content = match fs::read(&asset.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                return RenameOutcome::Failed {
                    error: format!("read {}: {}", asset.path.display(), e),
                }
            }
        };
        let hints = extract_hints(&content);
        tracing::debug!(id = asset.id, ?hints, "extracted hints");

        let Some(found) = self.identifier.identify(asset.id, &hints) else {
            return RenameOutcome::NoMatch;
        };
        let target = self.target_name(asset.id, found.slug.as_str());
        let target_path = self.dir.join(&target);
        if target_path.exists() {
            return RenameOutcome::TargetExists { target };
        }
        if self.dry_run {
            return RenameOutcome::WouldRename { to: target };
        }
        match fs::rename(&asset.path, &target_path) {
            Ok(()) => RenameOutcome::Renamed { to: target },
            Err(e) => RenameOutcome::Failed {
                error: format!("rename to {}: {}", target, e),
            },
        }
    }
}

#[cfg(test)]
mod tests;
