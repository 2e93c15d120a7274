use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "weather-to-postgres")]
#[command(about = "Fetch an OpenWeatherMap forecast alongside a Postgres connection", version)]
pub struct CliConfig {
    /// Directory for the rotating log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Never prompt for missing secrets; treat them as missing configuration
    #[arg(long)]
    pub non_interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory per phase")]
    pub monitor: bool,
}

impl CliConfig {
    /// Prompting needs a terminal on stdin and no `--non-interactive`.
    pub fn interactive(&self) -> bool {
        !self.non_interactive && std::io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["weather-to-postgres"]);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(!config.non_interactive);
        assert!(!config.verbose);
        assert!(!config.monitor);
    }

    #[test]
    fn test_non_interactive_flag_disables_prompting() {
        let config = CliConfig::parse_from([
            "weather-to-postgres",
            "--non-interactive",
            "--log-dir",
            "/tmp/wtp",
        ]);
        assert!(!config.interactive());
        assert_eq!(config.log_dir, PathBuf::from("/tmp/wtp"));
    }
}
