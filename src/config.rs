//! Configuration and CLI argument handling

use clap::Parser;

use crate::timer::{PhaseDurations, TimerError};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "eye-break")]
#[command(about = "A 20-20-20 work/break phase timer served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20020")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Work phase length in seconds
    #[arg(short, long, default_value = "1200")]
    pub work_secs: u64,

    /// Break phase length in seconds
    #[arg(short, long, default_value = "20")]
    pub break_secs: u64,

    /// Audio player used for transition sounds
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Sound file played at every phase change
    #[arg(long, default_value = "/usr/share/sounds/freedesktop/stereo/complete.oga")]
    pub sound: String,

    /// Log transitions instead of playing a sound
    #[arg(long)]
    pub mute: bool,

    /// Draw a status line on the terminal
    #[arg(long)]
    pub display: bool,

    /// Start the first work phase immediately
    #[arg(long)]
    pub autostart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validated phase durations
    pub fn durations(&self) -> Result<PhaseDurations, TimerError> {
        PhaseDurations::new(self.work_secs, self.break_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_20_20_20_rule() {
        let config = Config::try_parse_from(["eye-break"]).unwrap();
        let durations = config.durations().unwrap();
        assert_eq!(durations.work_secs(), 1200);
        assert_eq!(durations.break_secs(), 20);
        assert_eq!(config.address(), "127.0.0.1:20020");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn zero_work_secs_is_rejected() {
        let config = Config::try_parse_from(["eye-break", "-w", "0"]).unwrap();
        assert!(config.durations().is_err());
    }

    #[test]
    fn flags_parse() {
        let config = Config::try_parse_from([
            "eye-break", "--mute", "--display", "--autostart", "-v", "-b", "30", "-p", "9000",
        ])
        .unwrap();
        assert!(config.mute && config.display && config.autostart);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.break_secs, 30);
        assert_eq!(config.port, 9000);
    }
}
