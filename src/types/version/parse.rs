use super::Version;
use crate::error::ParseError;

use lazy_static::lazy_static;
use regex::Regex;
use std::convert::TryFrom;
use std::str::FromStr;

impl Version {
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        lazy_static! {
            // Lazy upstream so the revision takes everything after the last hyphen
            static ref VER_PARTITION: Regex = Regex::new(
                r"^((?P<epoch>[0-9]+):)?(?P<upstream>[A-Za-z0-9][A-Za-z0-9+.:\-]*?)(-(?P<revision>[A-Za-z0-9+.]+))?$"
            )
            .unwrap();
        }

        let segments = VER_PARTITION
            .captures(s)
            .ok_or_else(|| ParseError::MalformedVersion(s.to_string()))?;
        let epoch = match segments.name("epoch") {
            Some(e) => e
                .as_str()
                .parse()
                .map_err(|_| ParseError::MalformedVersion(s.to_string()))?,
            None => 0,
        };
        let upstream = segments
            .name("upstream")
            .ok_or_else(|| ParseError::MalformedVersion(s.to_string()))?
            .as_str()
            .to_string();
        let revision = segments.name("revision").map(|r| r.as_str().to_string());

        Ok(Version {
            epoch,
            upstream,
            revision,
        })
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Version::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ver_from_str() {
        let source = vec![
            ("1.1.1.", 0, "1.1.1.", None),
            ("999:0+git20210608-1", 999, "0+git20210608", Some("1")),
            ("1.0-2-3", 0, "1.0-2", Some("3")),
            ("2:1:3", 2, "1:3", None),
            ("1.0-", 0, "1.0-", None),
            ("0.9.2+cvs.1.0.dev.2004.07.28-1.1", 0, "0.9.2+cvs.1.0.dev.2004.07.28", Some("1.1")),
        ];

        for (input, epoch, upstream, revision) in source {
            let ver = Version::parse(input).unwrap();
            assert_eq!(ver.epoch(), epoch, "epoch of {}", input);
            assert_eq!(ver.upstream(), upstream, "upstream of {}", input);
            assert_eq!(ver.revision(), revision, "revision of {}", input);
        }
    }

    #[test]
    fn malformed_ver() {
        let source = vec![
            "",
            "-1",
            ".1",
            "1.0~rc1",
            "1.0 ",
            "1.0-1_2",
            "99999999999999999999999:1",
        ];
        for input in source {
            assert_eq!(
                Version::parse(input).unwrap_err(),
                ParseError::MalformedVersion(input.to_string()),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn ver_display() {
        let source = vec![
            ("1.0", "1.0"),
            ("0:1.0-1", "1.0-1"),
            ("3:2.4.1-0.1", "3:2.4.1-0.1"),
            ("0:1:2", "0:1:2"),
        ];
        for (input, output) in source {
            assert_eq!(Version::parse(input).unwrap().to_string(), output);
        }
    }
}
