//! `iconctl rename` – rename numbered icons by institution.

use anyhow::Result;
use iconctl_core::config::IconctlConfig;
use iconctl_core::http::CurlClient;
use iconctl_core::identify::InstitutionIdentifier;
use iconctl_core::rename::{AssetReport, RenameOutcome, Renamer};
use iconctl_core::search::DuckDuckGo;
use std::path::PathBuf;

fn print_asset(a: &AssetReport) {
    match &a.outcome {
        RenameOutcome::Renamed { to } => println!("Renamed {} -> {}", a.file_name, to),
        RenameOutcome::WouldRename { to } => println!("Would rename {} -> {}", a.file_name, to),
        RenameOutcome::NoMatch => println!("Skipped {}: no confident match.", a.file_name),
        RenameOutcome::TargetExists { target } => {
            println!("Skipped {}: target exists ({}).", a.file_name, target)
        }
        RenameOutcome::Failed { error } => println!("Skipped {}: {}", a.file_name, error),
    }
}

/// Fails only when the directory is missing or unreadable; per-file problems are reported and skipped.
pub fn run_rename(cfg: &IconctlConfig, dir: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| cfg.output_dir.clone());
    let search = DuckDuckGo::new(CurlClient::new(), &cfg.search);
    let identifier = InstitutionIdentifier::new(search, &cfg.naming);
    let renamer = Renamer::new(&dir, &cfg.naming.extension, identifier, cfg.naming.pause())
        .dry_run(dry_run);

    let report = renamer.run_with(print_asset)?;
    if report.assets.is_empty() {
        println!("No {} files found to rename.", cfg.naming.extension.to_uppercase());
    } else {
        tracing::info!(
            renamed = report.renamed(),
            skipped = report.skipped(),
            "rename finished"
        );
    }
    Ok(())
}
