#[cfg(test)]
mod test {
    use super::super::{Version, VersionCmpCache};
    use std::cmp::Ordering::{self, *};

    fn ver(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn ver_ord() {
        let source = vec![
            ("1.1.1", Less, "1.1.2"),
            ("1.0", Less, "1.1"),
            ("1.1", Less, "2.0"),
            ("1b", Greater, "1a"),
            ("1", Less, "1.1"),
            ("1.2", Less, "1.11"),
            ("1.0-1", Greater, "1.0"),
            ("1.0-1", Less, "1.1"),
            ("1.0-1", Less, "1.0-12"),
            ("1.0-1", Less, "1.0-2"),
            ("1:0.9", Greater, "2.0"),
            ("1:1.0-0", Greater, "1:1.0"),
            ("1.0", Equal, "1.0"),
            ("1.0", Equal, "1.00"),
            ("0:1.0", Equal, "1.0"),
            ("1.0-1", Equal, "1.0-1"),
            ("1:1.0-1", Equal, "1:1.0-1"),
            ("1.0final-5", Greater, "1.0a7-2"),
            ("1.0final-5sarge1", Greater, "1.0final-5"),
            ("0.9.2-5", Less, "0.9.2+cvs.1.0.dev.2004.07.28-1"),
            ("1:500", Less, "1:5000"),
            ("100:500", Greater, "11:5000"),
            ("1.0.4-2", Greater, "1.0pre7-2"),
            // Trailing letters are more content, a following non-letter beats them
            ("1.5rc1", Greater, "1.5"),
            ("1.5rc1", Less, "1.5+1"),
            ("1.5rc1", Less, "1.5.1"),
            ("1.5rc1", Less, "1.5rc2"),
            ("1.5rc1", Greater, "1.5dev0"),
            ("2.0-1", Greater, "2.0-0.1"),
        ];

        let mut cache = VersionCmpCache::new();
        for (this, res, that) in source {
            assert_eq!(ver(this).cmp(&ver(that)), res, "{} vs {}", this, that);
            assert_eq!(ver(that).cmp(&ver(this)), res.reverse(), "{} vs {}", that, this);
            assert_eq!(cache.compare(&ver(this), &ver(that)), res, "cached {} vs {}", this, that);
            assert_eq!(ver(this) == ver(that), res == Equal);
        }
    }

    #[test]
    fn ver_eq() {
        let source = vec![("1.1+git2021", "1.1+git2021"), ("1:2.0-1", "1:2.0-1")];
        for (this, that) in source {
            assert!(ver(this).same_as(&ver(that)));
            assert_eq!(ver(this), ver(that));
        }
        // Equal by policy, different by structure
        assert!(!ver("1.0").same_as(&ver("1.00")));
        assert_eq!(ver("1.0"), ver("1.00"));
    }

    #[test]
    fn ver_total_order() {
        let source: Vec<Version> = vec![
            "1.0", "1.00", "1.0-1", "1.0rc1", "1.0a", "1.0+", "1.0.1", "1:0.1", "0.9",
            "1.0ab", "1.0a.", "1.0-1.1", "1.0-1a", "2", "1.0final", "1.0+b1",
        ]
        .into_iter()
        .map(ver)
        .collect();

        for a in &source {
            for b in &source {
                let ab = a.cmp(b);
                assert_eq!(ab, b.cmp(a).reverse(), "{} vs {}", a, b);
                for c in &source {
                    let bc = b.cmp(c);
                    if ab == bc && ab != Ordering::Equal {
                        assert_eq!(a.cmp(c), ab, "{} {} {}", a, b, c);
                    }
                    if ab == Equal {
                        assert_eq!(a.cmp(c), bc, "{} {} {}", a, b, c);
                    }
                }
            }
        }

        let mut sorted = source.clone();
        sorted.sort();
        for pair in sorted.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(sorted[0], ver("0.9"));
        assert_eq!(sorted[sorted.len() - 1], ver("1:0.1"));
    }
}
