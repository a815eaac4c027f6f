//! Layout files on disk.
//!
//! The format follows the extension: `.bin` holds a binary snapshot, anything
//! else holds JSON. Writes go to `{path}.tmp` first and are renamed into
//! place after `sync_all()`, so an interrupted save leaves the previous file
//! intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use generation::CityLayout;

use crate::json_codec::{layout_from_json, layout_to_json};
use crate::save_error::SaveError;
use crate::snapshot::{decode_snapshot, encode_snapshot};

fn is_snapshot_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write `data` to `path` through a synced temporary file and a rename.
fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn write_layout_file(path: &Path, layout: &CityLayout) -> Result<(), SaveError> {
    let bytes = if is_snapshot_path(path) {
        encode_snapshot(layout)?
    } else {
        layout_to_json(layout)?.into_bytes()
    };
    write_atomically(path, &bytes)?;
    Ok(())
}

pub fn read_layout_file(path: &Path) -> Result<CityLayout, SaveError> {
    let bytes = fs::read(path)?;
    if is_snapshot_path(path) {
        decode_snapshot(&bytes)
    } else {
        let text = String::from_utf8(bytes).map_err(|e| SaveError::Decode(e.to_string()))?;
        layout_from_json(&text)
    }
}
