//! Decides where a flag value comes from and which format it is in.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::FlagError;
use crate::format::Format;
use crate::fs::{EntryKind, FileSystem};

/// Prefix marking a flag value as a file reference.
pub const FILE_PREFIX: char = '@';
/// Prefix an inline YAML document must start with.
pub const YAML_MARKER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Inline,
}

#[derive(Debug, Clone)]
/// Raw document bytes together with where they came from and their format.
pub struct Classified {
    pub source: Source,
    pub format: Format,
    pub content: Vec<u8>,
}

/// Classifies `raw` and loads its content.
///
/// A value starting with `@` names a file whose extension selects the
/// format. Anything else is inline data: after trimming, `---` selects
/// YAML and `{` or `[` select JSON.
pub fn classify<F: FileSystem>(fs: &F, raw: &str) -> Result<Classified, FlagError> {
    match raw.strip_prefix(FILE_PREFIX) {
        Some(path) => classify_file(fs, Path::new(path)),
        None => classify_inline(raw),
    }
}

fn classify_file<F: FileSystem>(fs: &F, path: &Path) -> Result<Classified, FlagError> {
    debug!(file = %path.display(), "Resolving flag value from file");
    match fs.kind(path) {
        Ok(EntryKind::File) => {}
        Ok(EntryKind::Directory) => {
            return Err(FlagError::IsADirectory {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FlagError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(FlagError::FileReadFailure {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    let ext = dotted_extension(path);
    let Some(format) = Format::from_extension(ext.trim_start_matches('.')) else {
        return Err(FlagError::UnsupportedFileExtension { ext });
    };

    let content = fs.read(path).map_err(|e| FlagError::FileReadFailure {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(file = %path.display(), %format, bytes = content.len(), "Read flag file");
    Ok(Classified {
        source: Source::File(path.to_path_buf()),
        format,
        content,
    })
}

/// Everything from the last `.` of the file name on, dot included; empty
/// when the name has no dot. A bare `.json` counts as a JSON file.
fn dotted_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.rfind('.')
        .map(|i| name[i..].to_string())
        .unwrap_or_default()
}

fn classify_inline(raw: &str) -> Result<Classified, FlagError> {
    let text = raw.trim();
    let format = sniff(text).ok_or(FlagError::UnrecognisedInlineFormat)?;
    debug!(%format, "Detected inline flag value");
    Ok(Classified {
        source: Source::Inline,
        format,
        content: text.as_bytes().to_vec(),
    })
}

/// Prefix sniff for trimmed inline text. YAML wins over JSON so that a
/// `---` document whose body is a flow collection is still read as YAML.
fn sniff(text: &str) -> Option<Format> {
    if text.starts_with(YAML_MARKER) {
        Some(Format::Yaml)
    } else if text.starts_with('{') || text.starts_with('[') {
        Some(Format::Json)
    } else {
        None
    }
}
