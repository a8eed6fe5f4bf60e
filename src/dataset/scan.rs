use crate::error::{FeatureError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: [&str; 7] = ["bmp", "png", "jpg", "jpeg", "tif", "tiff", "gif"];

/// One image file and the label of the folder it sits in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    pub path: PathBuf,
    pub label: String,
}

/// True when the extension looks like a raster image (case-insensitive).
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// List every image at depth two under `root`, sorted by path.
///
/// Files directly under the root, deeper nesting and non-image files are
/// ignored. Unreadable directories are an error; undecodable images are not
/// detected here.
pub fn scan_dataset(root: &Path) -> Result<Vec<DatasetEntry>> {
    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name();
    for item in walker {
        let item = item.map_err(|source| FeatureError::DatasetScan {
            root: root.to_path_buf(),
            source,
        })?;
        if !item.file_type().is_file() || !is_image_file(item.path()) {
            continue;
        }
        let label = item
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push(DatasetEntry {
            path: item.into_path(),
            label,
        });
    }
    Ok(entries)
}
