mod ord;
mod parse;
mod test;
mod version;

pub use ord::VersionCmpCache;
pub use version::Version;
