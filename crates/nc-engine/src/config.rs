//! Persisted denoise settings (JSON)

use std::fs;
use std::path::Path;

use nc_core::DenoiseConfig;

use crate::EngineResult;

/// Load settings; fields missing from the file keep their defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> EngineResult<DenoiseConfig> {
    let text = fs::read_to_string(path.as_ref())?;
    let config: DenoiseConfig = serde_json::from_str(&text)?;
    log::debug!("Loaded config from {}", path.as_ref().display());
    Ok(config)
}

/// Save settings as pretty-printed JSON
pub fn save_config<P: AsRef<Path>>(path: P, config: &DenoiseConfig) -> EngineResult<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}
