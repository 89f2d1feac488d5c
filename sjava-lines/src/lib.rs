pub mod normalizer;

use std::path::Path;

pub use normalizer::{NormalizedSource, Normalizer, RawLine, RejectReason, normalize};

pub fn read_source<P: AsRef<Path>>(path: P) -> std::io::Result<NormalizedSource> {
    let content = std::fs::read_to_string(path)?;
    Ok(normalize(&content))
}
