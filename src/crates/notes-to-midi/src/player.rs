use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::PlaybackError;

/// External media player settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub enabled: bool,
    /// Executable to launch
    pub command: String,
    /// Extra arguments placed before the file path
    pub args: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "vlc".to_string(),
            args: Vec::new(),
        }
    }
}

/// Opens a generated file in an external player
pub struct PlaybackLauncher {
    command: String,
    args: Vec<String>,
}

impl PlaybackLauncher {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Start the player on `path` and return without waiting for it.
    ///
    /// Only a failure to start the process is reported; the player's own exit
    /// status is never observed.
    pub fn launch(&self, path: &Path) -> Result<(), PlaybackError> {
        if self.command.trim().is_empty() {
            return Err(PlaybackError::NoCommand);
        }

        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlaybackError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        log::info!(
            "Launched {} (pid {}) on {}",
            self.command,
            child.id(),
            path.display()
        );
        Ok(())
    }
}
