mod relation;
mod version;

pub use relation::{Operator, Relation, Satisfaction};
pub use version::{Version, VersionCmpCache};

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Priority classes, ordered from most to least essential
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Required,
    Important,
    Standard,
    Optional,
    Extra,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Required,
        Priority::Important,
        Priority::Standard,
        Priority::Optional,
        Priority::Extra,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Required => "required",
            Priority::Important => "important",
            Priority::Standard => "standard",
            Priority::Optional => "optional",
            Priority::Extra => "extra",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Priority::Required),
            "important" => Ok(Priority::Important),
            "standard" => Ok(Priority::Standard),
            "optional" => Ok(Priority::Optional),
            "extra" => Ok(Priority::Extra),
            _ => Err(ParseError::UnknownPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The relation fields that get checked, each one independently
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    PreDepends,
    Depends,
    Recommends,
}

impl RelationKind {
    pub const ALL: [RelationKind; 3] = [
        RelationKind::PreDepends,
        RelationKind::Depends,
        RelationKind::Recommends,
    ];

    /// Noun used in warnings, plural when more than one relation failed
    pub fn noun(self, count: usize) -> &'static str {
        match (self, count > 1) {
            (RelationKind::PreDepends, false) => "pre-dependency",
            (RelationKind::PreDepends, true) => "pre-dependencies",
            (RelationKind::Depends, false) => "dependency",
            (RelationKind::Depends, true) => "dependencies",
            (RelationKind::Recommends, false) => "recommendation",
            (RelationKind::Recommends, true) => "recommendations",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkgMeta {
    pub name: String,
    pub version: Version,
    pub priority: Priority,
    pub section: String,
    pub distribution: String,
    pub provides: Vec<String>,
    pub pre_depends: Vec<Relation>,
    pub depends: Vec<Relation>,
    pub recommends: Vec<Relation>,
}

impl PkgMeta {
    pub fn relations(&self, kind: RelationKind) -> &[Relation] {
        match kind {
            RelationKind::PreDepends => &self.pre_depends,
            RelationKind::Depends => &self.depends,
            RelationKind::Recommends => &self.recommends,
        }
    }

    pub fn relations_mut(&mut self, kind: RelationKind) -> &mut Vec<Relation> {
        match kind {
            RelationKind::PreDepends => &mut self.pre_depends,
            RelationKind::Depends => &mut self.depends,
            RelationKind::Recommends => &mut self.recommends,
        }
    }
}
