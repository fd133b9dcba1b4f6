pub mod cascade;

use crate::{
    debug,
    pool::{PackageIndex, PackagePool, PkgId},
    types::{PkgMeta, Relation, RelationKind, Satisfaction, VersionCmpCache},
};

/// Unmet relations of one kind on one package
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub pkg: PkgId,
    pub kind: RelationKind,
    /// Positions of the failed relations in the package's list
    pub positions: Vec<usize>,
    /// Rendered warning, `name: noun rel, rel, ...`
    pub warning: String,
}

/// Holds the package pool and the comparison cache for one run
pub struct Checker {
    pub pool: PackagePool,
    cache: VersionCmpCache,
}

impl Checker {
    pub fn new(pool: PackagePool) -> Self {
        Checker {
            pool,
            cache: VersionCmpCache::new(),
        }
    }

    /// Check `pkgs` against the packages of `reference`.
    ///
    /// Every failed relation is removed from its package, so it cannot be
    /// reported again by a later check. Returns the sorted warnings.
    pub fn check(&mut self, pkgs: &[PkgId], reference: &[PkgId]) -> Vec<String> {
        let failures = {
            let index = PackageIndex::build(&self.pool, reference);
            debug!(
                "Checking {} packages against {} available names",
                pkgs.len(),
                index.len()
            );
            find_failures(&self.pool, pkgs, &index, &mut self.cache)
        };
        prune(&mut self.pool, &failures);

        let mut warnings: Vec<String> = failures.into_iter().map(|f| f.warning).collect();
        warnings.sort();
        warnings
    }

    /// Check a package set against itself
    pub fn check_within(&mut self, pkgs: &[PkgId]) -> Vec<String> {
        self.check(pkgs, pkgs)
    }

    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.stats()
    }
}

/// Evaluate every relation of every package in `pkgs` against `index`
pub fn find_failures(
    pool: &PackagePool,
    pkgs: &[PkgId],
    index: &PackageIndex,
    cache: &mut VersionCmpCache,
) -> Vec<Failure> {
    let mut res = Vec::new();
    for &id in pkgs {
        let pkg = match pool.get_pkg_by_id(id) {
            Some(pkg) => pkg,
            None => continue,
        };
        for kind in RelationKind::ALL {
            if let Some(failure) = check_relations(id, pkg, kind, index, cache) {
                res.push(failure);
            }
        }
    }
    res
}

fn check_relations(
    id: PkgId,
    pkg: &PkgMeta,
    kind: RelationKind,
    index: &PackageIndex,
    cache: &mut VersionCmpCache,
) -> Option<Failure> {
    let mut positions = Vec::new();
    for (pos, rel) in pkg.relations(kind).iter().enumerate() {
        match rel.satisfied_by(index, cache) {
            Satisfaction::Satisfied(names) => {
                if matches!(rel, Relation::Alternatives(_)) {
                    debug!("{}: {} satisfied by {}", pkg.name, rel, names.join(", "));
                }
            }
            Satisfaction::Unsatisfied => positions.push(pos),
        }
    }
    if positions.is_empty() {
        return None;
    }

    let failed: Vec<String> = positions
        .iter()
        .map(|pos| pkg.relations(kind)[*pos].to_string())
        .collect();
    let warning = format!(
        "{}: {} {}",
        pkg.name,
        kind.noun(failed.len()),
        failed.join(", ")
    );
    Some(Failure {
        pkg: id,
        kind,
        positions,
        warning,
    })
}

/// Remove reported relations from their packages
pub fn prune(pool: &mut PackagePool, failures: &[Failure]) {
    for failure in failures {
        if let Some(pkg) = pool.get_pkg_by_id_mut(failure.pkg) {
            let relations = pkg.relations_mut(failure.kind);
            // Back to front so earlier positions stay valid
            for pos in failure.positions.iter().rev() {
                if *pos < relations.len() {
                    relations.remove(*pos);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pool::test_pkg;

    fn with_depends(mut pkg: PkgMeta, kind: RelationKind, rels: &[&str]) -> PkgMeta {
        *pkg.relations_mut(kind) = rels.iter().map(|r| Relation::parse(r).unwrap()).collect();
        pkg
    }

    fn sample_pool() -> PackagePool {
        vec![
            with_depends(
                test_pkg("lynx", "2.8-1", "optional", "web"),
                RelationKind::Depends,
                &["libc6 (>= 2.0.7)", "libncurses4", "libssl09 (>= 0.9)"],
            ),
            with_depends(
                test_pkg("mutt", "0.93-1", "extra", "mail"),
                RelationKind::Recommends,
                &["mail-transport-agent", "urlview | lynx (>> 3.0)"],
            ),
            with_depends(
                test_pkg("dpkg", "1.4.0-1", "required", "base"),
                RelationKind::PreDepends,
                &["libc6 (>= 2.0.7)"],
            ),
            test_pkg("libc6", "2.0.7u-7", "required", "base"),
            test_pkg("libncurses4", "4.2-1", "required", "base"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn warnings_are_rendered_and_sorted() {
        let mut checker = Checker::new(sample_pool());
        let all = checker.pool.ids();
        assert_eq!(
            checker.check_within(&all),
            vec![
                "lynx: dependency libssl09 (>= 0.9)".to_string(),
                "mutt: recommendations mail-transport-agent, urlview | lynx (>> 3.0)".to_string(),
            ]
        );
    }

    #[test]
    fn failed_relations_are_pruned() {
        let mut checker = Checker::new(sample_pool());
        let all = checker.pool.ids();
        assert_eq!(checker.check_within(&all).len(), 2);

        let lynx = checker.pool.get_pkg_by_name("lynx").unwrap();
        let depends: Vec<String> = lynx.depends.iter().map(|r| r.to_string()).collect();
        assert_eq!(depends, vec!["libc6 (>= 2.0.7)", "libncurses4"]);
        assert!(checker.pool.get_pkg_by_name("mutt").unwrap().recommends.is_empty());

        // Nothing left to report the second time
        assert!(checker.check_within(&all).is_empty());
    }

    #[test]
    fn categories_are_independent() {
        let pkg = test_pkg("apt", "0.1-1", "important", "admin");
        let pkg = with_depends(pkg, RelationKind::Depends, &["libstdc++2.8", "libc6"]);
        let pkg = with_depends(pkg, RelationKind::PreDepends, &["libc6"]);
        let mut checker = Checker::new(vec![pkg].into_iter().collect());
        let all = checker.pool.ids();
        assert_eq!(
            checker.check_within(&all),
            vec![
                "apt: dependencies libstdc++2.8, libc6".to_string(),
                "apt: pre-dependency libc6".to_string(),
            ]
        );
    }

    #[test]
    fn reference_set_differs() {
        let mut checker = Checker::new(sample_pool());
        let dpkg = checker.pool.select(&checker.pool.ids(), |p| p.name == "dpkg");
        // libc6 is not part of the reference set
        assert_eq!(
            checker.check(&dpkg, &dpkg),
            vec!["dpkg: pre-dependency libc6 (>= 2.0.7)".to_string()]
        );
        assert!(checker.check(&dpkg, &checker.pool.ids()).is_empty());
    }

    #[test]
    fn empty_set() {
        let mut checker = Checker::new(PackagePool::new());
        assert!(checker.check_within(&[]).is_empty());
    }
}
