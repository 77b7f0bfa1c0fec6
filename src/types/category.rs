//! Life-domain categories that drive template selection

use serde::{Deserialize, Serialize};

/// Life-domain category of a statement
///
/// `Unrecognized` holds a caller-supplied label outside the known set.
/// It is kept verbatim and behaves like `Other` in every template lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Health,
    Study,
    Work,
    Finance,
    Relationship,
    Habit,
    Other,
    Unrecognized(String),
}

impl Category {
    /// Keyword-bearing categories, in classification order
    pub const CLASSIFIED: [Category; 6] = [
        Category::Health,
        Category::Study,
        Category::Work,
        Category::Finance,
        Category::Relationship,
        Category::Habit,
    ];

    /// Wire name ("health", "study", ...)
    pub fn as_str(&self) -> &str {
        match self {
            Self::Health => "health",
            Self::Study => "study",
            Self::Work => "work",
            Self::Finance => "finance",
            Self::Relationship => "relationship",
            Self::Habit => "habit",
            Self::Other => "other",
            Self::Unrecognized(label) => label,
        }
    }

    /// Category used for template lookups
    pub fn template_key(&self) -> &Category {
        match self {
            Self::Unrecognized(_) => &Category::Other,
            known => known,
        }
    }

    /// Short Japanese label ("学習", "健康", ...)
    pub fn label(&self) -> &'static str {
        match self.template_key() {
            Self::Study => "学習",
            Self::Health => "健康",
            Self::Work => "仕事",
            Self::Finance => "家計",
            Self::Relationship => "関係",
            Self::Habit => "習慣",
            _ => "取り組み",
        }
    }

    /// Name of the "train line" the delay board reports on
    pub fn line_label(&self) -> &'static str {
        match self.template_key() {
            Self::Study => "学習線",
            Self::Health => "健康線",
            Self::Work => "仕事線",
            Self::Finance => "家計線",
            Self::Relationship => "関係線",
            Self::Habit => "習慣線",
            _ => "一般線",
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "health" => Self::Health,
            "study" => Self::Study,
            "work" => Self::Work,
            "finance" => Self::Finance,
            "relationship" => Self::Relationship,
            "habit" => Self::Habit,
            "other" => Self::Other,
            label => Self::Unrecognized(label.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
