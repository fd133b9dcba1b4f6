use crate::error::ParseError;
use crate::types::Relation;

/// Parse a Depends-like field into relations. Empty clauses (a trailing
/// comma, say) are skipped; anything else must be a valid relation.
pub fn parse_pkg_list(s: &str) -> Result<Vec<Relation>, ParseError> {
    s.split(',')
        .filter(|clause| !clause.trim().is_empty())
        .map(Relation::parse)
        .collect()
}

/// Parse a Provides field into the list of provided names
pub fn parse_provides(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a Section field into (distribution, section). `contrib/net` lives
/// in contrib, a bare section in main.
pub fn parse_section(s: &str) -> (String, String) {
    match s.trim().split_once('/') {
        Some((dist, section)) => (dist.to_string(), section.to_string()),
        None => ("main".to_string(), s.trim().to_string()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pkg_list() {
        let deps = parse_pkg_list("libc6 (>= 2.0.7), libncurses4,\n mail-transport-agent | smail,").unwrap();
        let rendered: Vec<String> = deps.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["libc6 (>= 2.0.7)", "libncurses4", "mail-transport-agent | smail"]
        );
        assert!(parse_pkg_list("").unwrap().is_empty());
        assert!(parse_pkg_list("libc6 (>= 2.0.7").is_err());
    }

    #[test]
    fn test_provides() {
        assert_eq!(
            parse_provides("www-browser, news-reader"),
            vec!["www-browser".to_string(), "news-reader".to_string()]
        );
        assert!(parse_provides(" ").is_empty());
    }

    #[test]
    fn test_section() {
        let source = vec![
            ("base", ("main", "base")),
            ("contrib/net", ("contrib", "net")),
            ("non-free/oldlibs", ("non-free", "oldlibs")),
        ];
        for (input, (dist, section)) in source {
            assert_eq!(parse_section(input), (dist.to_string(), section.to_string()));
        }
    }
}
