// Well-known directories and the alias prefixes derived from them

use std::fmt;
use std::path::{Path, PathBuf};

/// Group a registered directory belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Work,
    Tools,
    Research,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Tools => "tools",
            Category::Research => "research",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered directory with its alias prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub label: &'static str,
    pub prefix: &'static str,
    pub path: PathBuf,
    pub category: Category,
}

/// (label, prefix, path relative to home, category)
const WELL_KNOWN: &[(&str, &str, &str, Category)] = &[
    ("workspace", "wk", "Workspace", Category::Work),
    ("projects", "pr", "Projects", Category::Work),
    ("downloads", "dl", "Downloads", Category::Tools),
    ("documents", "dc", "Documents", Category::Research),
    ("pictures", "pc", "Pictures", Category::Research),
    ("videos", "vd", "Videos", Category::Research),
    ("music", "mu", "Music", Category::Research),
    ("desktop", "dt", "Desktop", Category::Research),
    ("home", "hm", "", Category::Research),
];

/// Static table of well-known directories rooted at a home directory
#[derive(Debug, Clone)]
pub struct PathRegistry {
    entries: Vec<PathEntry>,
}

impl PathRegistry {
    /// Build the registry for the given home directory
    pub fn for_home(home: &Path) -> Self {
        let entries = WELL_KNOWN
            .iter()
            .map(|&(label, prefix, relative, category)| PathEntry {
                label,
                prefix,
                path: if relative.is_empty() {
                    home.to_path_buf()
                } else {
                    home.join(relative)
                },
                category,
            })
            .collect();

        Self { entries }
    }

    /// All entries in table order
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Find the entry registered for the parent of `dir`.
    ///
    /// Only an exact match on the parent counts: `~/Workspace/app` resolves to
    /// `wk`, `~/Workspace/app/src` resolves to nothing.
    pub fn resolve(&self, dir: &Path) -> Option<&PathEntry> {
        let parent = dir.parent()?;
        let found = self.entries.iter().find(|entry| entry.path == parent);
        log::debug!(
            "Resolved {:?} (parent {:?}) to prefix {:?}",
            dir,
            parent,
            found.map(|entry| entry.prefix)
        );
        found
    }

    /// Prefix for `dir`, empty when no entry matches
    pub fn prefix_for(&self, dir: &Path) -> &'static str {
        self.resolve(dir).map(|entry| entry.prefix).unwrap_or("")
    }

    /// Entries grouped by category, categories in first-appearance order
    pub fn by_category(&self) -> Vec<(Category, Vec<&PathEntry>)> {
        let mut groups: Vec<(Category, Vec<&PathEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(category, _)| *category == entry.category) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.category, vec![entry])),
            }
        }
        groups
    }
}
