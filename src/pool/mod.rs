mod index;
pub mod source;

pub use index::{Available, PackageIndex};

use crate::types::{PkgMeta, Priority};
use crate::warn;

use std::collections::HashMap;

/// Position of a package inside a [`PackagePool`]
pub type PkgId = usize;

/// Owns every package record of a run.
///
/// Checking stages refer to packages through [`PkgId`] handles, so relations
/// pruned at one stage stay pruned for every later stage.
#[derive(Default, Debug)]
pub struct PackagePool {
    pkgs: Vec<PkgMeta>,
    name_to_id: HashMap<String, PkgId>,
}

impl PackagePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package. A later package with an already known name replaces the
    /// earlier one and keeps its id.
    pub fn add(&mut self, meta: PkgMeta) -> PkgId {
        if let Some(&id) = self.name_to_id.get(&meta.name) {
            warn!(
                "Duplicate package {}: {} replaces {}",
                meta.name, meta.version, self.pkgs[id].version
            );
            self.pkgs[id] = meta;
            return id;
        }

        let id = self.pkgs.len();
        self.name_to_id.insert(meta.name.clone(), id);
        self.pkgs.push(meta);
        id
    }

    pub fn get_pkg_by_id(&self, id: PkgId) -> Option<&PkgMeta> {
        self.pkgs.get(id)
    }

    pub fn get_pkg_by_id_mut(&mut self, id: PkgId) -> Option<&mut PkgMeta> {
        self.pkgs.get_mut(id)
    }

    pub fn get_pkg_by_name(&self, name: &str) -> Option<&PkgMeta> {
        self.name_to_id.get(name).map(|id| &self.pkgs[*id])
    }

    /// Ids of every package in the pool
    pub fn ids(&self) -> Vec<PkgId> {
        (0..self.pkgs.len()).collect()
    }

    /// Ids of the packages among `ids` that match `pred`, order kept
    pub fn select(&self, ids: &[PkgId], pred: impl Fn(&PkgMeta) -> bool) -> Vec<PkgId> {
        ids.iter()
            .copied()
            .filter(|id| self.get_pkg_by_id(*id).map_or(false, |p| pred(p)))
            .collect()
    }

    /// Ids of every package whose priority is `priority` or more essential
    pub fn up_to_priority(&self, priority: Priority) -> Vec<PkgId> {
        self.select(&self.ids(), |p| p.priority <= priority)
    }

    pub fn len(&self) -> usize {
        self.pkgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pkgs.is_empty()
    }
}

impl FromIterator<PkgMeta> for PackagePool {
    fn from_iter<T: IntoIterator<Item = PkgMeta>>(iter: T) -> Self {
        let mut pool = PackagePool::new();
        for meta in iter {
            pool.add(meta);
        }
        pool
    }
}

/// Minimal package for tests, relations added by the caller
#[cfg(test)]
pub fn test_pkg(name: &str, version: &str, priority: &str, section: &str) -> PkgMeta {
    PkgMeta {
        name: name.to_string(),
        version: crate::types::Version::parse(version).unwrap(),
        priority: priority.parse().unwrap(),
        section: section.to_string(),
        distribution: "main".to_string(),
        provides: Vec::new(),
        pre_depends: Vec::new(),
        depends: Vec::new(),
        recommends: Vec::new(),
    }
}
