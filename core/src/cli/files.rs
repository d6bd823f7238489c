use crate::ingest::is_remote;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Expands command-line sources into file locations
///
/// URLs and plain files pass through unchanged; directories are replaced
/// by the DICOM files they contain, sorted by path so the submission order
/// does not depend on the filesystem.
pub fn expand_sources(sources: &[String]) -> std::io::Result<Vec<String>> {
    let mut locations = Vec::new();
    for source in sources {
        let path = Path::new(source);
        if !is_remote(source) && path.is_dir() {
            let files = collect_dicom_files(path)?;
            info!("Found {} DICOM files in {}", files.len(), path.display());
            locations.extend(files.into_iter().map(|f| f.display().to_string()));
        } else {
            locations.push(source.clone());
        }
    }
    Ok(locations)
}

/// Lists the DICOM files directly inside `directory`
pub fn collect_dicom_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom") => {
                files.push(path)
            }
            Some(_) => {}
            None if is_dicom_file(&path) => {
                debug!("Found extension-less DICOM file: {}", path.display());
                files.push(path);
            }
            None => {}
        }
    }

    files.sort();
    Ok(files)
}

/// Checks for the `DICM` magic after the 128-byte preamble
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}
