// Alias file: an in-memory snapshot of the shell-sourced alias lines

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::alias::AliasRecord;
use crate::error::{Result, WkaError};

/// Newest alias file format this build reads and writes
pub const FORMAT_VERSION: u32 = 1;

const HEADER_PREFIX: &str = "# wka-aliases v";

/// Header line written at the top of a freshly created alias file
pub fn format_header() -> String {
    format!("{}{}", HEADER_PREFIX, FORMAT_VERSION)
}

/// One line of the alias file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Record(AliasRecord),
    /// Blank lines and `#` comments, kept verbatim
    Comment(String),
    /// Lines that do not parse, kept verbatim so a rewrite never loses them
    Malformed(String),
}

impl Entry {
    fn parse(line: &str) -> Self {
        if line.trim().is_empty() || line.starts_with('#') {
            return Entry::Comment(line.to_string());
        }
        match AliasRecord::parse(line) {
            Ok(record) => Entry::Record(record),
            Err(e) => {
                log::debug!("Keeping unparsable line as-is: {}", e);
                Entry::Malformed(line.to_string())
            }
        }
    }

    fn text(&self) -> String {
        match self {
            Entry::Record(record) => record.format(),
            Entry::Comment(line) | Entry::Malformed(line) => line.clone(),
        }
    }
}

/// Result of [`AliasStore::append`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Added,
    /// The identical line is already present; nothing changed
    Duplicate,
}

/// Alias file loaded into memory
///
/// Mutations only touch the snapshot; call [`AliasStore::save`] to persist.
#[derive(Debug)]
pub struct AliasStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl AliasStore {
    /// Load the alias file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(WkaError::StoreMissing(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let store = Self::from_content(path, &content)?;
        log::debug!(
            "Loaded {} line(s) from {:?}",
            store.entries.len(),
            store.path
        );
        Ok(store)
    }

    /// Create the alias file with just a header, unless it already exists
    ///
    /// Returns true when a new file was written.
    pub fn create(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        let store = Self {
            path: path.to_path_buf(),
            entries: vec![Entry::Comment(format_header())],
        };
        store.save()?;
        Ok(true)
    }

    /// Build a store from file contents without touching the disk
    pub fn from_content(path: &Path, content: &str) -> Result<Self> {
        check_format_version(content)?;

        let entries = content.lines().map(Entry::parse).collect();
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed records in file order
    pub fn records(&self) -> impl Iterator<Item = &AliasRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Record(record) => Some(record),
            _ => None,
        })
    }

    /// Lines that failed to parse, with their 1-based line numbers
    pub fn malformed(&self) -> Vec<(usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Entry::Malformed(line) => Some((index + 1, line.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }

    /// First record whose full name is exactly `token`
    pub fn find(&self, token: &str) -> Option<&AliasRecord> {
        self.records().find(|record| record.is_named(token))
    }

    /// Append `record` unless an identical line already exists
    pub fn append(&mut self, record: AliasRecord) -> AppendOutcome {
        let line = record.format();
        if self.entries.iter().any(|entry| entry.text() == line) {
            return AppendOutcome::Duplicate;
        }

        self.entries.push(Entry::Record(record));
        AppendOutcome::Added
    }

    /// Remove the first record or malformed line containing `token`
    ///
    /// The whole line goes, never just the matched text. Comments never
    /// match. Returns the removed line.
    pub fn remove(&mut self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }

        let index = self.entries.iter().position(|entry| match entry {
            Entry::Comment(_) => false,
            other => other.text().contains(token),
        })?;

        Some(self.entries.remove(index).text())
    }

    /// Point the alias named `token` at `path`, keeping its name
    ///
    /// Returns the record as it was before the edit.
    pub fn edit(&mut self, token: &str, path: &str) -> Result<Option<AliasRecord>> {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| matches!(entry, Entry::Record(record) if record.is_named(token)))
        else {
            return Ok(None);
        };

        let Entry::Record(record) = &mut self.entries[index] else {
            return Ok(None);
        };
        let updated = AliasRecord::new(record.prefix.clone(), record.name.clone(), path)?;
        Ok(Some(std::mem::replace(record, updated)))
    }

    /// Count records carrying `prefix`
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.records().filter(|record| record.prefix == prefix).count()
    }

    /// Full file contents for the current snapshot
    pub fn render(&self) -> String {
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&entry.text());
            content.push('\n');
        }
        content
    }

    /// Write the snapshot to a temporary file next to the alias file and
    /// rename it into place
    pub fn save(&self) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(self.render().as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        log::debug!("Saved {} line(s) to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}

/// Refuse files whose header announces a newer format
fn check_format_version(content: &str) -> Result<()> {
    let Some(first) = content.lines().next() else {
        return Ok(());
    };
    let Some(version) = first.strip_prefix(HEADER_PREFIX) else {
        return Ok(());
    };

    let found: u32 = version
        .trim()
        .parse()
        .map_err(|_| WkaError::malformed(first, "unreadable format version"))?;

    if found > FORMAT_VERSION {
        return Err(WkaError::UnsupportedFormat {
            found,
            supported: FORMAT_VERSION,
        });
    }
    Ok(())
}
