//! Documentation bundle handling.
//!
//! A bundle is a gzip-compressed tar archive produced by the project's CI
//! docs job. Bundles conventionally wrap their content in a top-level
//! `public/` directory, which is flattened away so the extracted tree serves
//! directly under `<output>/<tag>/`.

use crate::error::{DocsPublishError, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tar::Archive;

/// Directory wrapper found at the top level of CI docs bundles
const BUNDLE_WRAPPER: &str = "public";

/// Extract a docs bundle into a version directory.
///
/// Any previous content of `dest` is replaced. After extraction the
/// top-level `public/` wrapper is flattened; a bundle without the wrapper is
/// accepted as already flat.
///
/// # Arguments
/// * `data` - Raw tar.gz bytes as downloaded from the host
/// * `dest` - Version directory to extract into (created if missing)
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(ArtifactUnavailable)` if the archive cannot be unpacked
pub fn extract_bundle(data: &[u8], dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    let decoder = GzDecoder::new(Cursor::new(data));
    let mut archive = Archive::new(decoder);
    archive.unpack(dest).map_err(|e| {
        DocsPublishError::artifact(format!(
            "cannot extract docs bundle into {}: {}",
            dest.display(),
            e
        ))
    })?;

    flatten_wrapper(dest)?;
    Ok(())
}

/// Move the contents of `dest/public/` up one level and drop the wrapper
fn flatten_wrapper(dest: &Path) -> Result<()> {
    let wrapper = dest.join(BUNDLE_WRAPPER);
    if !wrapper.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(&wrapper)? {
        let entry = entry?;
        fs::rename(entry.path(), dest.join(entry.file_name()))?;
    }
    fs::remove_dir(&wrapper)?;

    Ok(())
}

/// HTML list-item fragment linking one published version
pub fn version_entry_fragment(tag: &str) -> String {
    format!(
        "<li class=\"toctree-l1\"><a class=\"reference internal\" href=\"{tag}/index.html\">{tag}</a></li>"
    )
}
