use super::{PackagePool, PkgId};
use crate::types::{PkgMeta, Version};

use std::collections::HashMap;

/// What the index knows about a name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Available<'a> {
    /// A real package with this version
    Real(&'a Version),
    /// Only provided by other packages. Never fulfills a versioned relation.
    Virtual,
    /// Any version is acceptable
    Any,
}

/// Flat map from every available name to its version, rebuilt for each
/// package set that gets checked.
#[derive(Clone, Debug, Default)]
pub struct PackageIndex<'a> {
    entries: HashMap<&'a str, Available<'a>>,
}

impl<'a> PackageIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index of the given packages of a pool
    pub fn build(pool: &'a PackagePool, ids: &[PkgId]) -> Self {
        Self::from_pkgs(ids.iter().filter_map(|id| pool.get_pkg_by_id(*id)))
    }

    pub fn from_pkgs(pkgs: impl IntoIterator<Item = &'a PkgMeta>) -> Self {
        let mut index = PackageIndex::new();
        for pkg in pkgs {
            index.insert(&pkg.name, Available::Real(&pkg.version));
            for provided in &pkg.provides {
                index.insert_provide(provided);
            }
        }
        index
    }

    pub fn insert(&mut self, name: &'a str, available: Available<'a>) {
        self.entries.insert(name, available);
    }

    /// Add a virtual name unless something is already known under it
    pub fn insert_provide(&mut self, name: &'a str) {
        self.entries.entry(name).or_insert(Available::Virtual);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Available<'a>> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
