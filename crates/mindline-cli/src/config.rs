use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_LEXICON_PATH: &str = "data/mental_illnesses.csv";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindlineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: PathBuf,
    /// Remote completion is only attempted when this section is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_region")]
    pub region: String,
    pub model_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for MindlineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            lexicon_path: default_lexicon_path(),
            completion: None,
        }
    }
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEXICON_PATH)
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

/// Resolve the config file: explicit flag, then `MINDLINE_CONFIG`, then the
/// platform config directory.
pub fn config_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("MINDLINE_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("mindline").join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<MindlineConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MindlineConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        None => 0,
        Some(v) => u32::try_from(v).map_err(|_| {
            eyre::eyre!("config_version {v} is newer than this build supports ({CURRENT_VERSION})")
        })?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: MindlineConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update mindline."
        ));
    }

    // v0 -> v1: stamp the version; every v1 field has a default.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 -> v1");
    }

    Ok(json)
}

/// Apply `MINDLINE_*` overrides. `lookup` is `std::env::var` in the binary.
pub fn apply_env_overrides(
    mut config: MindlineConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> MindlineConfig {
    if let Some(path) = lookup("MINDLINE_LEXICON") {
        config.lexicon_path = PathBuf::from(path);
    }

    let region = lookup("MINDLINE_REGION");

    if let Some(model_id) = lookup("MINDLINE_MODEL_ID") {
        match config.completion.as_mut() {
            Some(completion) => completion.model_id = model_id,
            None => {
                config.completion = Some(CompletionConfig {
                    region: region
                        .clone()
                        .or_else(|| lookup("AWS_REGION"))
                        .unwrap_or_else(default_region),
                    model_id,
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                    temperature: DEFAULT_TEMPERATURE,
                });
            }
        }
    }

    if let (Some(region), Some(completion)) = (region, config.completion.as_mut()) {
        completion.region = region;
    }

    config
}

pub fn save_config(config: &MindlineConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
