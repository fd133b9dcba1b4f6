use super::Version;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Archive policy comparison of two upstream (or revision) strings.
///
/// Both strings are consumed in lock-step as (non-digit run, digit run)
/// pairs. Non-digit runs are compared with [`compare_non_digits`], digit
/// runs numerically with an empty run counting as zero. Whichever string
/// still has content once the other is exhausted is newer.
pub fn compare_segments(mut x: &str, mut y: &str) -> Ordering {
    while !x.is_empty() && !y.is_empty() {
        let (x_nondigit, x_digit) = split_pair(x, |c| !c.is_ascii_digit());
        let (y_nondigit, y_digit) = split_pair(y, |c| !c.is_ascii_digit());

        if x_nondigit != y_nondigit {
            return compare_non_digits(x_nondigit, y_nondigit);
        }
        match compare_numeric(x_digit, y_digit) {
            Ordering::Equal => (),
            res => return res,
        }
        x = &x[x_nondigit.len() + x_digit.len()..];
        y = &y[y_nondigit.len() + y_digit.len()..];
    }

    x.len().cmp(&y.len())
}

/// Compare two non-digit runs. A non-letter sorts newer than any letter,
/// and the end of a run sorts older than everything.
pub fn compare_non_digits(mut x: &str, mut y: &str) -> Ordering {
    while !x.is_empty() && !y.is_empty() {
        let (x_alpha, x_nonalpha) = split_pair(x, |c| c.is_ascii_alphabetic());
        let (y_alpha, y_nonalpha) = split_pair(y, |c| c.is_ascii_alphabetic());

        if x_alpha == y_alpha {
            if x_nonalpha != y_nonalpha {
                return x_nonalpha.cmp(y_nonalpha);
            }
            x = &x[x_alpha.len() + x_nonalpha.len()..];
            y = &y[y_alpha.len() + y_nonalpha.len()..];
            continue;
        }

        let common = x_alpha.len().min(y_alpha.len());
        if x_alpha[..common] != y_alpha[..common] {
            return x_alpha[..common].cmp(&y_alpha[..common]);
        }
        // One letter run is a prefix of the other. What follows the shorter
        // one decides: a non-letter beats more letters, the end loses to them.
        return if x_alpha.len() == common {
            if x_nonalpha.is_empty() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        } else if y_nonalpha.is_empty() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    x.len().cmp(&y.len())
}

/// Split `s` into the longest prefix matching `pred` and the run of
/// non-matching characters after it.
fn split_pair(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let first_end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    let rest = &s[first_end..];
    let second_end = rest.find(|c: char| pred(c)).unwrap_or(rest.len());
    (&s[..first_end], &rest[..second_end])
}

/// Compare two runs of ASCII digits by value, without overflowing.
fn compare_numeric(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

fn compare_with(
    this: &Version,
    that: &Version,
    mut segments: impl FnMut(&str, &str) -> Ordering,
) -> Ordering {
    if this.epoch != that.epoch {
        return this.epoch.cmp(&that.epoch);
    }
    if this.upstream != that.upstream {
        match segments(&this.upstream, &that.upstream) {
            Ordering::Equal => (),
            res => return res,
        }
    }
    match (&this.revision, &that.revision) {
        (None, None) => Ordering::Equal,
        // The absence of a revision compares earlier than the presence of one
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) if x == y => Ordering::Equal,
        (Some(x), Some(y)) => segments(x, y),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_with(self, other, compare_segments)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) || self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Memoized segment comparisons for one checking run.
///
/// The same upstream strings are compared over and over while checking a
/// large pool, so results are kept for both orders of every pair seen.
#[derive(Default, Debug)]
pub struct VersionCmpCache {
    results: HashMap<String, HashMap<String, Ordering>>,
    hits: usize,
    misses: usize,
}

impl VersionCmpCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(&mut self, this: &Version, that: &Version) -> Ordering {
        compare_with(this, that, |x, y| self.compare_segments(x, y))
    }

    fn compare_segments(&mut self, x: &str, y: &str) -> Ordering {
        if let Some(res) = self.results.get(x).and_then(|m| m.get(y)) {
            self.hits += 1;
            return *res;
        }
        self.misses += 1;
        let res = compare_segments(x, y);
        self.results
            .entry(x.to_string())
            .or_default()
            .insert(y.to_string(), res);
        self.results
            .entry(y.to_string())
            .or_default()
            .insert(x.to_string(), res.reverse());
        res
    }

    /// (hits, misses) so far
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
