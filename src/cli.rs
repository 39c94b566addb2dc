//! Command-line interface for strictly_hanoi.

use clap::Parser;
use strictly_hanoi::MAX_DISKS;

/// Strictly Hanoi - move the tower, one disk at a time
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Tower of Hanoi puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of disks (1-99). Overrides the config file.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_DISKS)))]
    pub disks: Option<u8>,

    /// Path to a TOML config file. Ignored if it doesn't exist.
    #[arg(short, long, default_value = "hanoi.toml")]
    pub config: std::path::PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_hanoi"]).unwrap();
        assert_eq!(cli.disks, None);
        assert_eq!(cli.config, std::path::PathBuf::from("hanoi.toml"));
    }

    #[test]
    fn test_disks_flag() {
        let cli = Cli::try_parse_from(["strictly_hanoi", "--disks", "3"]).unwrap();
        assert_eq!(cli.disks, Some(3));
    }

    #[test]
    fn test_zero_disks_rejected() {
        assert!(Cli::try_parse_from(["strictly_hanoi", "-d", "0"]).is_err());
    }

    #[test]
    fn test_disks_range_follows_max() {
        let max = MAX_DISKS.to_string();
        let cli = Cli::try_parse_from(["strictly_hanoi", "-d", max.as_str()]).unwrap();
        assert_eq!(cli.disks, Some(MAX_DISKS));

        let above = (u16::from(MAX_DISKS) + 1).to_string();
        assert!(Cli::try_parse_from(["strictly_hanoi", "-d", above.as_str()]).is_err());
    }
}
