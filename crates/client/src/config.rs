//! Client configuration from environment variables.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal client configuration.
///
/// Environment variables:
/// - `STAGESTRIKE_DATA_DIR` - directory for the save file (default: platform data dir)
/// - `STAGESTRIKE_EPHEMERAL` - `1`/`true`/`yes` keeps matches in memory only
/// - `STAGESTRIKE_RESTORE_DELAY_MS` - delay before the deferred restore check (default: 100)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: Option<PathBuf>,
    pub ephemeral: bool,
    pub restore_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            ephemeral: false,
            restore_delay: Duration::from_millis(100),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults; configuration
    /// never fails startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("STAGESTRIKE_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(flag) = read_env::<String>("STAGESTRIKE_EPHEMERAL") {
            config.ephemeral = matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(millis) = read_env::<u64>("STAGESTRIKE_RESTORE_DELAY_MS") {
            config.restore_delay = Duration::from_millis(millis);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
