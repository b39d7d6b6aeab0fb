//! Insertion-ordered key/value store fed by the line parser.
//!
//! Keys are unique and keep their first-insertion position across updates,
//! so a re-sourced rendering preserves the original file's shape. All
//! parsing goes through the pure core; this is plumbing.

use std::cmp::Ordering;
use std::path::Path;

use crate::error::{ErrorKind, LoadError, ParseError};
use crate::parse::{is_legal_name, is_legal_value, CanonicalAssignment};
use crate::serialize::serialize;

/// Ordered collection of canonical assignments with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    entries: Vec<CanonicalAssignment>,
}

impl EnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalAssignment> {
        self.entries.iter()
    }

    /// Insert or update a pair, validating both sides.
    ///
    /// A value holding a NUL, CR, or LF byte is rejected, never truncated.
    /// An existing name keeps its position; a new name appends.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ErrorKind> {
        if !is_legal_name(name) {
            return Err(ErrorKind::IllegalName(name.to_string()));
        }
        if !is_legal_value(value) {
            return Err(ErrorKind::IllegalValue);
        }
        self.insert(CanonicalAssignment {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn insert(&mut self, assignment: CanonicalAssignment) {
        match self.entries.iter_mut().find(|a| a.name == assignment.name) {
            Some(existing) => existing.value = assignment.value,
            None => self.entries.push(assignment),
        }
    }

    /// Parse a `\n`-joined source and merge every assignment, aborting on
    /// the first failing line. Later lines win; first-insertion order is
    /// kept.
    pub fn merge_source(&mut self, text: &str) -> Result<(), ParseError> {
        for line in text.split('\n') {
            if let Some(assignment) = crate::parse_line(line)? {
                self.insert(assignment);
            }
        }
        Ok(())
    }

    /// Best-effort merge: failing lines are skipped and returned.
    pub fn merge_source_lossy(&mut self, text: &str) -> Vec<ParseError> {
        let mut errors = Vec::new();
        for line in text.split('\n') {
            match crate::parse_line(line) {
                Ok(Some(assignment)) => self.insert(assignment),
                Ok(None) => {}
                Err(err) => errors.push(err),
            }
        }
        errors
    }

    /// Read a dotfile from disk and merge it, aborting on the first
    /// failing line.
    pub fn load_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let content = std::fs::read_to_string(path)?;
        self.merge_source(&content)?;
        Ok(())
    }

    /// Sort entries by name.
    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Sort entries with a caller-supplied comparator.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&CanonicalAssignment, &CanonicalAssignment) -> Ordering,
    {
        self.entries.sort_by(|a, b| cmp(a, b));
    }

    /// Render every entry as a re-sourceable shell line, newline-joined.
    pub fn render(&self, prefix: Option<&str>) -> String {
        let mut out = String::new();
        for a in &self.entries {
            out.push_str(&serialize(&a.name, &a.value, prefix));
            out.push('\n');
        }
        out
    }
}
