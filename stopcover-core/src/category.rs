//! Category tags attached to graph nodes.
//!
//! Only the `hostel` tag carries meaning for the solver: it marks a node as
//! demand that must be covered. The match is exact, so `"Hostel"` is an other
//! tag. Every other tag is preserved verbatim so the editor can round-trip it.
//!
//! # Examples
//! ```
//! use stopcover_core::Category;
//!
//! assert_eq!(Category::Hostel.as_str(), "hostel");
//! assert_eq!("gate".parse::<Category>(), Ok(Category::Other("gate".into())));
//! ```

use std::convert::Infallible;

/// Category tag of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    /// Student accommodation; the default demand category.
    #[default]
    Hostel,
    /// Any other tag. Such nodes are candidate stops only.
    Other(String),
}

const HOSTEL: &str = "hostel";

impl Category {
    /// Return the tag as written in the interchange document.
    ///
    /// # Examples
    /// ```
    /// use stopcover_core::Category;
    ///
    /// assert_eq!(Category::Other("library".into()).as_str(), "library");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hostel => HOSTEL,
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        if tag == HOSTEL {
            Self::Hostel
        } else {
            Self::Other(tag)
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Hostel => HOSTEL.to_owned(),
            Category::Other(tag) => tag,
        }
    }
}
