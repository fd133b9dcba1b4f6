mod checker;
mod cli;
mod config;
mod error;
mod pool;
mod suppress;
mod types;
mod utils;

use anyhow::Result;
use checker::{cascade, Checker};
use clap::Parser;
use config::{Config, Opts};
use suppress::Suppressions;

/// Exit codes:
/// 1 => failed to load input
fn main() {
    if let Err(err) = try_main() {
        error!("{}", err.to_string());
        err.chain().skip(1).for_each(|cause| {
            due_to!("{}", cause);
        });
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let opts = Opts::parse();
    cli::set_verbose(opts.verbose);
    let config = Config::load(&opts)?;
    debug!("Using {:?}", config);

    let suppress = match &config.suppress {
        Some(path) => Suppressions::from_file(path)?,
        None => Suppressions::default(),
    };
    if !suppress.is_empty() {
        info!("Loaded {} suppressed warnings", suppress.len());
    }

    let pool = pool::source::create_pool(&config.packages)?;
    info!("Checking relations of {} packages...", pool.len());
    let mut checker = Checker::new(pool);
    let reports = cascade::run(&mut checker, &config.sections, &suppress);

    let (hits, misses) = checker.cache_stats();
    debug!("Version comparison cache: {} hits, {} misses", hits, misses);

    let mut total = 0;
    let mut suppressed = 0;
    for report in &reports {
        print!("{}", report);
        total += report.warnings.len();
        suppressed += report.suppressed;
    }
    if total == 0 {
        success!("All relations can be satisfied ({} suppressed)", suppressed);
    } else {
        warn!("{} unsatisfiable relation sets ({} suppressed)", total, suppressed);
    }

    Ok(())
}
