//! Guide loading and writing
//!
//! File IO around the parser: read a guide source from disk and parse it, load a previously
//! written guide file, and write a guide in one of the registered formats.
//!
//! Writes are atomic: the output is written to a temporary file in the destination directory
//! and moved into place once complete, so a failed conversion never leaves a truncated guide
//! file behind.
//!
//! Example:
//!
//!     let guide = GuideLoader::from_path("speedrun.txt")?.parse(&ParserConfig::default())?;
//!     write_guide(&guide, "clair-obscur-guide-complete.json", "json")?;

use crate::guide::ast::{Guide, ValidationError};
use crate::guide::config::ParserConfig;
use crate::guide::formats::{FormatError, FormatRegistry};
use crate::guide::parsing::{parse_guide, ParseError};
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Everything that can go wrong between a guide file on disk and a parsed [`Guide`].
#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid guide file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("invalid guide: {0}")]
    Invalid(#[from] ValidationError),
}

impl GuideError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        GuideError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A guide source, read from a file or given as a string.
#[derive(Debug, Clone)]
pub struct GuideLoader {
    source: String,
    origin: Option<PathBuf>,
}

impl GuideLoader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GuideError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| GuideError::io(path, e))?;
        info!("read {} ({} bytes)", path.display(), source.len());
        Ok(GuideLoader {
            source,
            origin: Some(path.to_path_buf()),
        })
    }

    pub fn from_string(source: impl Into<String>) -> Self {
        GuideLoader {
            source: source.into(),
            origin: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn parse(&self, config: &ParserConfig) -> Result<Guide, GuideError> {
        let guide = parse_guide(&self.source, config)?;
        if let Some(origin) = &self.origin {
            info!(
                "parsed {}: {} group(s)",
                origin.display(),
                guide.action_groups.len()
            );
        }
        Ok(guide)
    }
}

/// Parses a guide source string.
pub fn parse_str(source: &str, config: &ParserConfig) -> Result<Guide, GuideError> {
    GuideLoader::from_string(source).parse(config)
}

/// Reads and parses a guide source file.
pub fn parse_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Guide, GuideError> {
    GuideLoader::from_path(path)?.parse(config)
}

/// Loads a guide previously written as JSON.
pub fn load_guide(path: impl AsRef<Path>) -> Result<Guide, GuideError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| GuideError::io(path, e))?;
    let guide = Guide::from_json(&json)?;
    info!(
        "loaded {}: {} group(s)",
        path.display(),
        guide.action_groups.len()
    );
    Ok(guide)
}

/// Serializes `guide` in `format` and writes it atomically to `path`.
pub fn write_guide(guide: &Guide, path: impl AsRef<Path>, format: &str) -> Result<(), GuideError> {
    let contents = FormatRegistry::with_defaults().serialize(guide, format)?;
    write_atomic(path.as_ref(), &contents)?;
    info!("wrote {} ({})", path.as_ref().display(), format);
    Ok(())
}

/// Writes `contents` to a temporary file next to `path`, then moves it into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GuideError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| GuideError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| GuideError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| GuideError::io(path, e.error))?;
    Ok(())
}
