use std::path::Path;

use sjava_config::Config;
use sjava_lines::NormalizedSource;
use sjava_semantic::SemanticInfo;

use crate::error::{Error, Result};

pub fn check_file(path: &Path, config: &Config) -> Result<SemanticInfo> {
    if let Some(expected) = &config.source_extension
        && !config.accepts_path(path)
    {
        return Err(Error::UnexpectedExtension {
            path: path.to_path_buf(),
            expected: expected.clone(),
        });
    }

    let source = sjava_lines::read_source(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "read {} source line(s) from {}",
        source.lines.len(),
        path.display()
    );

    check_source(&source)
}

/// Rejected raw lines make the whole file invalid before any analysis runs.
pub fn check_source(source: &NormalizedSource) -> Result<SemanticInfo> {
    if !source.is_clean() {
        return Err(Error::InvalidLines {
            count: source.rejected,
        });
    }

    let partition = sjava_syntax::partition(&source.lines)?;
    let info = sjava_semantic::validate(&partition)?;
    Ok(info)
}
