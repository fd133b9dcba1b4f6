pub mod debrepo;

use super::PackagePool;
use crate::info;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::{fs::File, io::Read, path::Path};
use xz2::read::XzDecoder;

/// Load every package of a Packages/available file into a new pool
pub fn create_pool(db: &Path) -> Result<PackagePool> {
    info!("Reading package metadata from {}...", db.display());
    let reader = open_db(db)?;
    let pkgs = debrepo::read_packages(reader)
        .context(format!("Failed to parse package metadata in {}", db.display()))?;
    Ok(pkgs.into_iter().collect())
}

/// Open a control file, decompressing it on the fly based on its extension
fn open_db(db: &Path) -> Result<Box<dyn Read>> {
    let f = File::open(db).context(format!("Failed to open {}", db.display()))?;
    let reader: Box<dyn Read> = match db.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(GzDecoder::new(f)),
        Some("xz") => Box::new(XzDecoder::new(f)),
        _ => Box::new(f),
    };
    Ok(reader)
}
