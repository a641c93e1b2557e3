use std::path::PathBuf;

use clap::Parser;

/// texclean — remove LaTeX build byproducts from a directory tree
#[derive(Parser, Debug)]
#[command(
    name = "texclean",
    version,
    about = "Remove LaTeX build byproducts from a directory tree",
    long_about = "texclean walks a directory tree and deletes every regular file whose name\n\
                  ends with .aux, .log, .synctex.gz, .fdb_latexmk, .fls or .pre.\n\
                  Deletion is permanent; files that cannot be removed are reported and skipped.",
    after_help = "EXAMPLES:\n  \
        texclean                    Clean the current directory\n  \
        texclean thesis/            Clean a specific tree\n  \
        texclean -v ~/papers        Clean with debug logging on stderr"
)]
pub struct Cli {
    /// Directory to clean (defaults to the current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// The directory to clean, falling back to the working directory
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_root_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["texclean"]).unwrap();
        assert_eq!(cli.root(), PathBuf::from("."));
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let cli = Cli::try_parse_from(["texclean", "thesis", "other", "more"]).unwrap();
        assert_eq!(cli.root(), PathBuf::from("thesis"));
        assert_eq!(cli.ignored.len(), 2);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["texclean", "-v", "--no-color", "dir"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.root(), PathBuf::from("dir"));
    }
}
