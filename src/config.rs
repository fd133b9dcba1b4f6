use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Parser, Debug)]
#[clap(about, version)]
pub struct Opts {
    #[clap(help = "Packages or available file to check, may be .gz or .xz compressed")]
    pub packages: Option<PathBuf>,
    #[clap(help = "File with warnings to suppress, such as a previous report")]
    pub suppress: Option<PathBuf>,
    #[clap(short, long, help = "Read settings from this TOML file")]
    pub config: Option<PathBuf>,
    #[clap(short, long, help = "Print additional debug information")]
    pub verbose: bool,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub packages: PathBuf,
    pub suppress: Option<PathBuf>,
    pub sections: Sections,
}

/// Sections that have a meaning for the cascading check
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Sections {
    pub base: String,
    pub legacy: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            packages: PathBuf::from("/var/lib/dpkg/available"),
            suppress: None,
            sections: Sections::default(),
        }
    }
}

impl Default for Sections {
    fn default() -> Self {
        Sections {
            base: "base".to_string(),
            legacy: "oldlibs".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .context(format!("Failed to read config file at {}", path.display()))?;
        toml::from_str(&data).context(format!("Failed to parse config file at {}", path.display()))
    }

    /// Load the config file if one was given, then apply command line values
    pub fn load(opts: &Opts) -> Result<Self> {
        let mut config = match &opts.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(packages) = &opts.packages {
            config.packages = packages.clone();
        }
        if let Some(suppress) = &opts.suppress {
            config.suppress = Some(suppress.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_config() {
        let config: Config = toml::from_str(
            r#"
packages = "/srv/mirror/dists/hamm/main/binary-i386/Packages.gz"

[sections]
legacy = "libs-old"
"#,
        )
        .unwrap();
        assert_eq!(
            config.packages,
            PathBuf::from("/srv/mirror/dists/hamm/main/binary-i386/Packages.gz")
        );
        assert_eq!(config.suppress, None);
        assert_eq!(config.sections.base, "base");
        assert_eq!(config.sections.legacy, "libs-old");

        assert_eq!(toml::from_str::<Config>("").unwrap(), Config::default());
        assert!(toml::from_str::<Config>("packagez = \"x\"").is_err());
    }

    #[test]
    fn command_line_overrides() {
        let opts = Opts::parse_from(vec!["depcheck", "Packages", "known.txt", "-v"]);
        let config = Config::load(&opts).unwrap();
        assert!(opts.verbose);
        assert_eq!(config.packages, PathBuf::from("Packages"));
        assert_eq!(config.suppress, Some(PathBuf::from("known.txt")));

        let opts = Opts::parse_from(vec!["depcheck"]);
        assert_eq!(Config::load(&opts).unwrap(), Config::default());
    }
}
