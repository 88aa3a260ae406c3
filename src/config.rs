use crate::error::{AuditError, Result};
use crate::types::config::AuditConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "geoaudit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".geoaudit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/geoaudit/config.toml";

/// Load the layered config for `root`. `explicit` replaces `root/geoaudit.toml`
/// and must exist.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<AuditConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<AuditConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AuditError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }
    let main_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));

    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    if let Some(path) = global_path {
        layers += merge_file_if_exists(&mut merged, path)?;
    }
    layers += merge_file_if_exists(&mut merged, &main_path)?;
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if layers == 0 {
        debug!(root = %root.display(), "no config layers found");
        return Ok(None);
    }

    let cfg: AuditConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AuditError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    info!(path = %path.display(), "merged config layer");
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AuditError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
