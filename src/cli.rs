use std::path::PathBuf;
use clap::Parser;

use slidemenu::constants::{DEFAULT_ASSET_DIR, DEFAULT_SCALE};

#[derive(Debug, Parser)]
#[command(version, about = "Button driven slide menu simulator")]
pub struct Cli {
    /// Slide table to use instead of the built-in menu
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,

    /// Directory the slide bitmaps are read from
    #[arg(long, short, default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,

    /// Window pixels per display pixel
    #[arg(long, short, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(i32).range(1..=8))]
    pub scale: i32,

    /// Check the slide table and its bitmaps, then exit
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["slidemenu"]).unwrap();
        assert_eq!(cli.manifest, None);
        assert_eq!(cli.assets, PathBuf::from(DEFAULT_ASSET_DIR));
        assert_eq!(cli.scale, DEFAULT_SCALE);
        assert!(!cli.check);
        assert_eq!(cli.verbosity.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn parses_options() {
        let cli = Cli::try_parse_from(["slidemenu", "-m", "menu.toml", "--scale", "4", "-vv", "--check"]).unwrap();
        assert_eq!(cli.manifest, Some(PathBuf::from("menu.toml")));
        assert_eq!(cli.scale, 4);
        assert_eq!(cli.verbosity.log_level_filter(), log::LevelFilter::Trace);
        assert!(cli.check);
    }

    #[test]
    fn quiet_lowers_the_level() {
        let cli = Cli::try_parse_from(["slidemenu", "-q"]).unwrap();
        assert_eq!(cli.verbosity.log_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn rejects_zero_scale() {
        assert!(Cli::try_parse_from(["slidemenu", "--scale", "0"]).is_err());
    }

    #[test]
    fn command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
