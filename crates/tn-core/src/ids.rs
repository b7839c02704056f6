//! Location identifiers.
//!
//! A dataset names its locations either by integer (`1001400`) or by string
//! (`"A"`).  Both are carried by [`LocationId`], which is `Ord + Hash` so it can
//! key the ordered maps used by the distance matrix.  Mixing the two kinds in
//! one dataset is rejected by the graph builder; the derived ordering between
//! kinds (`Int` before `Name`) only exists to make the type totally ordered.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Which representation a [`LocationId`] uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum IdKind {
    Int,
    Name,
}

impl IdKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IdKind::Int  => "integer",
            IdKind::Name => "string",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque, totally ordered location key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(untagged))]
pub enum LocationId {
    Int(i64),
    Name(String),
}

impl LocationId {
    #[inline]
    pub fn kind(&self) -> IdKind {
        match self {
            LocationId::Int(_)  => IdKind::Int,
            LocationId::Name(_) => IdKind::Name,
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationId::Int(n)  => write!(f, "{n}"),
            LocationId::Name(s) => f.write_str(s),
        }
    }
}

impl FromStr for LocationId {
    type Err = CoreError;

    /// Integers win: `"42"` is `Int(42)`, `"A42"` is `Name("A42")`.
    /// Surrounding whitespace is ignored; an empty field is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoreError::Parse("empty location identifier".into()));
        }
        Ok(match s.parse::<i64>() {
            Ok(n)  => LocationId::Int(n),
            Err(_) => LocationId::Name(s.to_owned()),
        })
    }
}

impl From<i64> for LocationId {
    fn from(n: i64) -> Self {
        LocationId::Int(n)
    }
}

impl From<i32> for LocationId {
    fn from(n: i32) -> Self {
        LocationId::Int(n.into())
    }
}

impl From<u32> for LocationId {
    fn from(n: u32) -> Self {
        LocationId::Int(n.into())
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        LocationId::Name(s.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        LocationId::Name(s)
    }
}
