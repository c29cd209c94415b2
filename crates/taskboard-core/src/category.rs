use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Labels offered by both the add form and the edit overlay unless configured otherwise.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Work", "Personal", "Shopping", "Health", "Education"];

/// A single category label.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Borrow the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised while building a [`CategorySet`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    /// No categories were supplied.
    #[error("category set must not be empty")]
    Empty,
    /// A label was empty after trimming.
    #[error("category label must not be blank")]
    Blank,
    /// The same label appeared twice.
    #[error("duplicate category detected: {0}")]
    Duplicate(String),
}

/// Ordered, duplicate-free list of selectable categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet {
    values: Vec<Category>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            values: DEFAULT_CATEGORIES
                .iter()
                .map(|label| Category((*label).to_owned()))
                .collect(),
        }
    }
}

impl CategorySet {
    /// Build a set from raw labels, trimming each one.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError`] when the list is empty, a label is blank,
    /// or a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: Vec<Category> = Vec::new();
        for raw in labels {
            let label = raw.as_ref().trim();
            if label.is_empty() {
                return Err(CategoryError::Blank);
            }
            if values.iter().any(|existing| existing.as_str() == label) {
                return Err(CategoryError::Duplicate(label.to_owned()));
            }
            values.push(Category(label.to_owned()));
        }
        if values.is_empty() {
            return Err(CategoryError::Empty);
        }
        Ok(Self { values })
    }

    /// Whether `label` names a member of the set (exact match).
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// Index of `label` within the set.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.values.iter().position(|value| value.as_str() == label)
    }

    /// Member named `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Category> {
        self.values.iter().find(|value| value.as_str() == label)
    }

    /// Category at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.values.get(index)
    }

    /// Iterate in configured order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Category> + '_ {
        self.values.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a successfully built set; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_matches_builtin_order() {
        let set = CategorySet::default();
        let labels: Vec<&str> = set.iter().map(Category::as_str).collect();
        assert_eq!(labels, DEFAULT_CATEGORIES);
    }

    #[test]
    fn labels_are_trimmed() {
        let set = match CategorySet::new(["  Errands ", "Garden"]) {
            Ok(set) => set,
            Err(err) => panic!("valid labels: {err}"),
        };
        assert!(set.contains("Errands"));
        assert_eq!(set.position("Garden"), Some(1));
        assert!(!set.contains("  Errands "));
    }

    #[test]
    fn invalid_sets_are_rejected() {
        assert_eq!(CategorySet::new(Vec::<String>::new()), Err(CategoryError::Empty));
        assert_eq!(CategorySet::new(["Work", "  "]), Err(CategoryError::Blank));
        assert_eq!(
            CategorySet::new(["Work", "Work "]),
            Err(CategoryError::Duplicate("Work".into()))
        );
    }
}
