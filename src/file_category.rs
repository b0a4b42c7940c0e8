//! Filename classification against configured categories.
//!
//! Categories come from the configuration as an ordered mapping of category
//! name to extension list. The mapping is compiled into an ordered rule list
//! so that "first matching category wins" is an explicit contract rather than
//! a property of map iteration.
//!
//! # Examples
//!
//! ```
//! use indexmap::IndexMap;
//! use sortbox::file_category::{CategoryMap, DEFAULT_CATEGORY};
//!
//! let mut file_types = IndexMap::new();
//! file_types.insert("Images".to_string(), vec![".png".to_string()]);
//!
//! let categories = CategoryMap::from_config(&file_types);
//! assert_eq!(categories.classify("photo.png"), Some("Images"));
//! assert_eq!(categories.resolve("notes.txt"), Some(DEFAULT_CATEGORY));
//! ```

use indexmap::IndexMap;

/// Destination for files that match no configured extension.
pub const DEFAULT_CATEGORY: &str = "Others";

/// A single category and the extensions it claims.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Category name, doubling as the destination subdirectory name.
    pub name: String,
    /// Extension strings compared as literal suffixes (e.g. ".pdf").
    pub extensions: Vec<String>,
}

impl CategoryRule {
    /// True if any of this rule's extensions is a suffix of `file_name`.
    ///
    /// The comparison is a literal, case-sensitive suffix match: `.JPG` and
    /// `.jpg` are distinct extensions.
    fn matches(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Ordered set of category rules compiled from the configuration.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    rules: Vec<CategoryRule>,
}

impl CategoryMap {
    /// Compile the configured `file_types` mapping, keeping its order.
    pub fn from_config(file_types: &IndexMap<String, Vec<String>>) -> Self {
        let rules = file_types
            .iter()
            .map(|(name, extensions)| CategoryRule {
                name: name.clone(),
                extensions: extensions.clone(),
            })
            .collect();

        Self { rules }
    }

    /// The first category whose extension list matches `file_name`.
    pub fn classify(&self, file_name: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(file_name))
            .map(|rule| rule.name.as_str())
    }

    /// True if any extension anywhere in the configuration matches `file_name`.
    pub fn is_known_extension(&self, file_name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(file_name))
    }

    /// Destination category for `file_name`, or `None` to leave it in place.
    ///
    /// First matching category wins, in configuration order. A name matching
    /// no category falls back to [`DEFAULT_CATEGORY`], guarded by a second
    /// check that no configured extension matches it at all.
    pub fn resolve(&self, file_name: &str) -> Option<&str> {
        match self.classify(file_name) {
            Some(category) => Some(category),
            None if self.is_known_extension(file_name) => None,
            None => Some(DEFAULT_CATEGORY),
        }
    }

    /// True if no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The compiled rules, in match order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}
