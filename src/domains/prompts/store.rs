//! Prompt store implementation.
//!
//! The PromptStore turns a directory of `.txt` files into a mapping from
//! shortcut name to prompt text. The directory is rescanned on every query:
//! there is no cache, so a prompt added or edited on disk is visible on the
//! very next call.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// File suffix recognized as a prompt file.
pub const PROMPT_SUFFIX: &str = ".txt";

/// Mapping from shortcut name to prompt text.
pub type PromptMap = BTreeMap<String, String>;

/// Build the sentence returned when a shortcut is not in the store.
pub fn not_found_message(name: &str) -> String {
    format!("Prompt '{}' not found.", name)
}

/// Derive the shortcut name for a prompt file name.
///
/// The final extension is dropped (with `Path::file_stem` semantics, so a
/// dotfile such as `.txt` keeps its whole name) and underscores become spaces.
pub fn shortcut_for(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.replace('_', " ")
}

/// Why a prompt file was left out of the mapping.
#[derive(Debug)]
pub enum SkipReason {
    /// The file name is not valid UTF-8.
    NotUtf8Name,

    /// The entry is a directory or another non-regular file.
    NotAFile,

    /// The file could not be read.
    Unreadable(io::Error),

    /// The file content is not valid UTF-8.
    NotUtf8Content,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotUtf8Name => write!(f, "file name is not valid UTF-8"),
            Self::NotAFile => write!(f, "not a regular file"),
            Self::Unreadable(e) => write!(f, "unreadable: {}", e),
            Self::NotUtf8Content => write!(f, "content is not valid UTF-8"),
        }
    }
}

/// Result of scanning one prompt file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read and contributes an entry.
    Loaded {
        file_name: String,
        shortcut: String,
        text: String,
    },

    /// The file was skipped and is invisible in the mapping.
    Skipped { file_name: String, reason: SkipReason },
}

impl FileOutcome {
    /// The on-disk name of the file this outcome is about.
    pub fn file_name(&self) -> &str {
        match self {
            Self::Loaded { file_name, .. } | Self::Skipped { file_name, .. } => file_name,
        }
    }

    /// Whether the file made it into the mapping.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// A read-only view of a prompts directory.
#[derive(Debug, Clone)]
pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    /// Create a store over the given directory.
    ///
    /// The directory does not need to exist; a missing directory simply
    /// holds no prompts.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scan the directory and report what happened to every prompt file.
    ///
    /// Entries are visited in ascending byte order of their names. Entries
    /// without the prompt suffix are not reported.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn scan(&self) -> Vec<FileOutcome> {
        if !self.dir.is_dir() {
            debug!("Prompts directory missing or not a directory");
            return Vec::new();
        }

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to read prompts directory: {}", e);
                return Vec::new();
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(e) => {
                    warn!("Error reading directory entry: {}", e);
                    None
                }
            })
            .collect();
        entries.sort_by_key(|e| e.file_name());

        entries
            .into_iter()
            .filter_map(|entry| Self::read_entry(&entry.path(), entry.file_name()))
            .inspect(|outcome| {
                if let FileOutcome::Skipped { file_name, reason } = outcome {
                    debug!("Skipping prompt file {}: {}", file_name, reason);
                }
            })
            .collect()
    }

    /// Read one directory entry, or `None` if it is not a prompt file.
    fn read_entry(path: &Path, raw_name: std::ffi::OsString) -> Option<FileOutcome> {
        let file_name = match raw_name.into_string() {
            Ok(name) => name,
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                return lossy.ends_with(PROMPT_SUFFIX).then(|| FileOutcome::Skipped {
                    file_name: lossy,
                    reason: SkipReason::NotUtf8Name,
                });
            }
        };

        if !file_name.ends_with(PROMPT_SUFFIX) {
            return None;
        }

        if !path.is_file() {
            return Some(FileOutcome::Skipped {
                file_name,
                reason: SkipReason::NotAFile,
            });
        }

        Some(Self::outcome_from_read(file_name, fs::read(path)))
    }

    /// Classify the result of reading a prompt file's bytes.
    fn outcome_from_read(file_name: String, read: io::Result<Vec<u8>>) -> FileOutcome {
        match read {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => FileOutcome::Loaded {
                    shortcut: shortcut_for(&file_name),
                    file_name,
                    text,
                },
                Err(_) => FileOutcome::Skipped {
                    file_name,
                    reason: SkipReason::NotUtf8Content,
                },
            },
            Err(e) => FileOutcome::Skipped {
                file_name,
                reason: SkipReason::Unreadable(e),
            },
        }
    }

    /// Build a fresh mapping from the directory.
    ///
    /// Never fails: missing directories and unreadable files yield fewer
    /// entries. When two files collapse to the same shortcut, the one whose
    /// file name sorts last wins.
    pub fn load(&self) -> PromptMap {
        let prompts: PromptMap = self
            .scan()
            .into_iter()
            .filter_map(|outcome| match outcome {
                FileOutcome::Loaded { shortcut, text, .. } => Some((shortcut, text)),
                FileOutcome::Skipped { .. } => None,
            })
            .collect();

        debug!("Loaded {} prompts from {}", prompts.len(), self.dir.display());
        prompts
    }

    /// List the names of all available prompts.
    pub fn list_names(&self) -> Vec<String> {
        self.load().into_keys().collect()
    }

    /// Get one prompt's text, or the not-found sentence for unknown names.
    pub fn get_one(&self, name: &str) -> String {
        self.load()
            .remove(name)
            .unwrap_or_else(|| not_found_message(name))
    }

    /// Get every prompt.
    pub fn get_all(&self) -> PromptMap {
        self.load()
    }
}
