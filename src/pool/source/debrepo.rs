/// Utilities to deal with deb package db
use crate::{
    error::ParseError,
    types::{PkgMeta, Version},
    utils::debcontrol::{parse_pkg_list, parse_provides, parse_section},
};
use anyhow::{format_err, Result};
use debcontrol::{BufParse, Streaming};
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::Read;

const INTERESTED_FIELDS: &[&str] = &[
    "package",
    "version",
    "priority",
    "section",
    "provides",
    "pre-depends",
    "depends",
    "recommends",
];

/// Read every paragraph of a control file and turn it into a package
pub fn read_packages(db: impl Read) -> Result<Vec<PkgMeta>> {
    let mut buf_parse = BufParse::new(db, 16384);
    let mut paragraphs = Vec::new();

    while let Some(result) = buf_parse
        .try_next()
        .map_err(|e| format_err!("Malformed control data: {}", e))?
    {
        match result {
            Streaming::Item(paragraph) => {
                let mut fields = HashMap::new();
                for field in paragraph.fields {
                    let name = field.name.to_ascii_lowercase();
                    if INTERESTED_FIELDS.contains(&name.as_str()) {
                        fields.insert(name, field.value);
                    }
                }
                paragraphs.push(fields);
            }
            Streaming::Incomplete => buf_parse.buffer()?,
        }
    }

    // Parse fields in parallel
    let pkgs = paragraphs
        .into_par_iter()
        .map(fields_to_packagemeta)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pkgs)
}

fn fields_to_packagemeta(mut f: HashMap<String, String>) -> Result<PkgMeta, ParseError> {
    let name = f
        .remove("package")
        .map(|name| name.trim().to_string())
        .ok_or_else(|| ParseError::MissingField {
            package: "<unknown>".to_string(),
            field: "Package",
        })?;
    let mut required = |field: &'static str| {
        f.remove(&field.to_ascii_lowercase())
            .ok_or_else(|| ParseError::MissingField {
                package: name.clone(),
                field,
            })
    };
    let version = Version::parse(required("Version")?.trim())?;
    let priority = required("Priority")?.parse()?;
    let (distribution, section) = parse_section(&required("Section")?);

    let relations = |field: &str| match f.get(field) {
        Some(list) => parse_pkg_list(list),
        None => Ok(Vec::new()),
    };
    Ok(PkgMeta {
        pre_depends: relations("pre-depends")?,
        depends: relations("depends")?,
        recommends: relations("recommends")?,
        provides: f.get("provides").map(|p| parse_provides(p)).unwrap_or_default(),
        name,
        version,
        priority,
        section,
        distribution,
    })
}
