use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use notes_to_midi::{convert, Config, PlaybackLauncher};

#[derive(Parser, Debug)]
#[command(name = "notes-to-midi")]
#[command(about = "Convert encoded note lines (e.g. C4Q) to a MIDI file and play it", long_about = None)]
struct Args {
    /// Path to the note file (default: notes.txt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output MIDI path (default: notes.midi)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; command line flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player executable to open the MIDI file with (default: vlc)
    #[arg(long)]
    player: Option<String>,

    /// Only write the MIDI file, do not launch a player
    #[arg(long)]
    no_play: bool,

    /// MIDI resolution in ticks per quarter note
    #[arg(long)]
    ticks_per_quarter: Option<u16>,

    /// Note-on velocity (0-127)
    #[arg(long)]
    velocity: Option<u8>,

    /// Suppress informational messages (only warnings and errors)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show debug output, including the raw lines read
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Defaults, then the config file, then flags
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(player) = self.player {
            config.player.command = player;
        }
        if self.no_play {
            config.player.enabled = false;
        }
        if let Some(ticks) = self.ticks_per_quarter {
            config.midi.ticks_per_quarter = ticks;
        }
        if let Some(velocity) = self.velocity {
            config.midi.velocity = velocity;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    let config = args.into_config()?;

    let conversion = convert(&config)
        .with_context(|| format!("Failed to convert {}", config.input_path.display()))?;

    if !conversion.warnings.is_empty() {
        log::warn!(
            "{} line(s) used the default duration",
            conversion.warnings.len()
        );
    }

    if config.player.enabled {
        let launcher = PlaybackLauncher::new(&config.player);
        if let Err(e) = launcher.launch(&conversion.output_path) {
            log::warn!("{:#}", anyhow::Error::new(e));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "notes-to-midi",
            "--input",
            "in.txt",
            "-o",
            "out.mid",
            "--no-play",
            "--velocity",
            "64",
        ]);
        let config = args.into_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.mid"));
        assert!(!config.player.enabled);
        assert_eq!(config.midi.velocity, 64);
        assert_eq!(config.midi.ticks_per_quarter, 480);
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("notes-to-midi-cli-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "input_path": "from-file.txt", "output_path": "from-file.mid", "player": { "command": "timidity" } }"#,
        )
        .unwrap();

        let args = Args::parse_from([
            "notes-to-midi",
            "--config",
            path.to_str().unwrap(),
            "--output",
            "flag.mid",
        ]);
        let config = args.into_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.input_path, PathBuf::from("from-file.txt"));
        assert_eq!(config.output_path, PathBuf::from("flag.mid"));
        assert_eq!(config.player.command, "timidity");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Args::parse_from(["notes-to-midi", "-q"]).log_level(), "warn");
        assert_eq!(Args::parse_from(["notes-to-midi", "-v"]).log_level(), "debug");
        assert_eq!(Args::parse_from(["notes-to-midi"]).log_level(), "info");
        assert!(Args::try_parse_from(["notes-to-midi", "-q", "-v"]).is_err());
    }
}
