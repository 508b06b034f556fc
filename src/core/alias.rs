use std::fmt;

use crate::error::{Result, WkaError};

/// Keyword every alias line starts with
pub const ALIAS_KEYWORD: &str = "alias ";

/// A single shell alias pointing at a directory
///
/// Serialized as `alias <prefix>-<name>='<path>'`, or `alias <name>='<path>'`
/// when the prefix is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub prefix: String,
    pub name: String,
    pub path: String,
}

impl AliasRecord {
    /// Create a new record
    ///
    /// # Errors
    /// Returns an error if the prefix or name is not a single shell word free
    /// of `=` and `'`, or if the path is empty or cannot be single-quoted.
    pub fn new<P, N, D>(prefix: P, name: N, path: D) -> Result<Self>
    where
        P: Into<String>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut prefix = prefix.into();
        let mut name = name.into();

        // Without a prefix a dashed name reads back as `<prefix>-<name>`, so
        // store it split the same way
        if prefix.is_empty() {
            let split = name
                .split_once('-')
                .map(|(head, tail)| (head.to_string(), tail.to_string()));
            if let Some((head, tail)) = split {
                if head.is_empty() || tail.is_empty() {
                    return Err(WkaError::invalid_name(name));
                }
                prefix = head;
                name = tail;
            }
        }

        let record = Self {
            prefix,
            name,
            path: path.into(),
        };

        if !is_valid_word(&record.name) {
            return Err(WkaError::invalid_name(record.name));
        }
        let bad_prefix = !is_valid_word(&record.prefix) || record.prefix.contains('-');
        if !record.prefix.is_empty() && bad_prefix {
            return Err(WkaError::invalid_name(record.full_name()));
        }
        validate_path(&record.path)?;

        Ok(record)
    }

    /// Name the shell sees
    pub fn full_name(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}-{}", self.prefix, self.name)
        }
    }

    /// Render the alias line, without trailing newline
    pub fn format(&self) -> String {
        format!("{}{}='{}'", ALIAS_KEYWORD, self.full_name(), self.path)
    }

    /// Parse one alias line
    ///
    /// Anything that would not format back to the identical line is rejected.
    pub fn parse(line: &str) -> Result<Self> {
        let rest = line
            .strip_prefix(ALIAS_KEYWORD)
            .ok_or_else(|| WkaError::malformed(line, "expected the 'alias' keyword"))?;

        let (full_name, quoted) = rest
            .split_once('=')
            .ok_or_else(|| WkaError::malformed(line, "missing '='"))?;

        let path = quoted
            .strip_prefix('\'')
            .and_then(|p| p.strip_suffix('\''))
            .ok_or_else(|| WkaError::malformed(line, "path must be wrapped in single quotes"))?;

        Self::new("", full_name, path).map_err(|e| WkaError::malformed(line, e.to_string()))
    }

    /// Whether `token` names this alias exactly
    pub fn is_named(&self, token: &str) -> bool {
        self.full_name() == token
    }
}

impl fmt::Display for AliasRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty()
        && !word
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '\'')
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WkaError::invalid_path("path cannot be empty"));
    }
    if path.contains('\'') || path.contains('\n') || path.contains('\r') {
        return Err(WkaError::invalid_path(format!(
            "'{}' cannot be stored inside single quotes",
            path.escape_debug()
        )));
    }
    Ok(())
}
