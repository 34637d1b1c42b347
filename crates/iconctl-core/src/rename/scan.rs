//! Directory scan for not-yet-renamed assets (`{id}.{ext}`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An asset still named by its identifier alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedAsset {
    pub id: u64,
    pub file_name: String,
    pub path: PathBuf,
}

/// Parses `{digits}.{ext}`; `None` for anything else (including renamed assets).
pub fn parse_numbered_name(file_name: &str, extension: &str) -> Option<u64> {
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match stem.parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(file = file_name, "identifier does not fit in u64, skipping");
            None
        }
    }
}

/// Numbered assets in `dir`, sorted by identifier ascending.
///
/// Only opening `dir` can fail; an entry that cannot be inspected is logged and skipped.
pub fn scan_assets(dir: &Path, extension: &str) -> io::Result<Vec<NumberedAsset>> {
    let mut assets: Vec<NumberedAsset> = fs::read_dir(dir)?
        .filter_map(|entry| numbered_asset(entry, extension))
        .collect();
    assets.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.file_name.cmp(&b.file_name)));
    Ok(assets)
}

/// Classifies one directory entry. Symlinks are followed, so a link to a regular file counts.
fn numbered_asset(entry: io::Result<fs::DirEntry>, extension: &str) -> Option<NumberedAsset> {
    let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
            tracing::warn!("skipping unreadable directory entry: {}", e);
            return None;
        }
    };
    let file_name = entry.file_name().to_str()?.to_string();
    let id = parse_numbered_name(&file_name, extension)?;
    let path = entry.path();
    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Some(NumberedAsset {
            id,
            file_name,
            path,
        }),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(file = %path.display(), "skipping asset: {}", e);
            None
        }
    }
}
