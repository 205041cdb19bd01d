use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_number: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        course_number: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            course_number: course_number.into(),
            title: title.into(),
            prerequisites,
        }
    }

    /// Builds a course from positional fields: number, title, then prerequisites.
    /// Missing leading fields become empty strings.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = fields.into_iter().map(Into::<String>::into);
        let course_number = fields.next().unwrap_or_default();
        let title = fields.next().unwrap_or_default();

        Self {
            course_number,
            title,
            prerequisites: fields.collect(),
        }
    }
}

/// The three interchangeable store strategies offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreKind {
    Linear,
    Hash,
    Tree,
}

impl StoreKind {
    pub const ALL: [StoreKind; 3] = [StoreKind::Linear, StoreKind::Hash, StoreKind::Tree];

    /// 對應選單編號 1/2/3
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(StoreKind::Linear),
            2 => Some(StoreKind::Hash),
            3 => Some(StoreKind::Tree),
            _ => None,
        }
    }

    pub fn choice(self) -> u32 {
        match self {
            StoreKind::Linear => 1,
            StoreKind::Hash => 2,
            StoreKind::Tree => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StoreKind::Linear => "Vector",
            StoreKind::Hash => "HashTable",
            StoreKind::Tree => "Tree",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
