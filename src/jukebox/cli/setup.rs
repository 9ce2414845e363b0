use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jukebox", bin_name = "jukebox", version)]
#[command(about = "Pick a song from the menu and read its lyrics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read the catalog from a JSON file instead of the built-in songs
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print the welcome banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the song menu and exit
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Play a single selection and exit
    #[command(alias = "p", display_order = 2)]
    Play {
        /// Song number (0 exits)
        #[arg(allow_hyphen_values = true)]
        selection: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["jukebox"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_global_options() {
        let cli = Cli::try_parse_from([
            "jukebox",
            "--catalog",
            "songs.json",
            "--no-color",
            "--no-banner",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("songs.json")));
        assert!(cli.no_color && cli.no_banner && cli.verbose);
    }

    #[test]
    fn parses_play_with_negative_selection() {
        let cli = Cli::try_parse_from(["jukebox", "play", "-1"]).unwrap();
        match cli.command {
            Some(Commands::Play { selection }) => assert_eq!(selection, "-1"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_alias() {
        let cli = Cli::try_parse_from(["jukebox", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
