use anyhow::{Context, Result};
use projscan_config::{CliScanArgs, TomlConfig, discover_config};
use tracing::debug;

/// Load `--config FILE`, or `<PATH>/projscan.toml` when present.
///
/// An explicit file must exist. Either file must parse.
pub(crate) fn load_scan_config(args: &CliScanArgs) -> Result<Option<TomlConfig>> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match discover_config(&args.root()) {
            Some(path) => path,
            None => {
                debug!("no config file found");
                return Ok(None);
            }
        },
    };

    let config = TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to load config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(Some(config))
}
