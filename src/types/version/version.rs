use std::fmt;

/// dpkg style package version: `[epoch:]upstream[-revision]`
///
/// Equality and ordering follow the archive policy comparison, so two
/// versions that only differ by leading zeros (`1.0` and `1.00`) are equal.
/// Use [`Version::same_as`] for a cheap structural check.
#[derive(Clone, Debug)]
pub struct Version {
    pub(super) epoch: u64,
    pub(super) upstream: String,
    pub(super) revision: Option<String>,
}

impl Version {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Structural equality. Implies `cmp() == Equal`, the reverse does not hold.
    pub fn same_as(&self, other: &Version) -> bool {
        self.epoch == other.epoch
            && self.upstream == other.upstream
            && self.revision == other.revision
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // An upstream part containing ':' needs the epoch to stay parseable
        if self.epoch != 0 || self.upstream.contains(':') {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.upstream)?;
        if let Some(revision) = &self.revision {
            write!(f, "-{}", revision)?;
        }
        Ok(())
    }
}
