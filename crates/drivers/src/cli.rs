use clap::{ArgAction, Parser, Subcommand};

const LONG_ABOUT: &str = r#"Browse a published plate gallery.

A site is a directory or http(s) base URL holding index.html and data/pages.json.

Examples:
  platebook                               Open the gallery in the current directory
  platebook presentation_site             Open a local site
  platebook http://localhost:8000/ list   Print the plates a served site exposes"#;

#[derive(Debug, Parser)]
#[command(name = "platebook")]
#[command(author, version, about = "Browse a published plate gallery")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Site directory or http(s) base URL [default: .]
    #[arg(value_name = "SITE")]
    pub site_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Same as SITE, usable after the subcommand; SITE wins when both are given
    #[arg(short, long, global = true)]
    pub site: Option<String>,

    /// Data resource path, relative to the site
    #[arg(long, global = true)]
    pub data_path: Option<String>,

    /// Hosting document path, relative to the site
    #[arg(long, global = true)]
    pub document: Option<String>,

    /// Id of the element holding inline fallback data
    #[arg(long, global = true)]
    pub inline_id: Option<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    pub fn site(&self) -> Option<&str> {
        self.site_path.as_deref().or(self.site.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Open the gallery window
    Ui,

    /// Load the plates and print one row per page
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_window() {
        let cli = Cli::try_parse_from(["platebook"]).expect("should parse");
        assert!(cli.command.is_none());
        assert!(cli.site().is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn list_accepts_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "platebook",
            "list",
            "--site",
            "http://localhost:8000/",
            "--inline-id",
            "plates",
            "-vv",
        ])
        .expect("should parse");
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(cli.site(), Some("http://localhost:8000/"));
        assert_eq!(cli.inline_id.as_deref(), Some("plates"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn positional_site_precedes_subcommand() {
        let cli = Cli::try_parse_from(["platebook", "./out", "list"]).expect("should parse");
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(cli.site(), Some("./out"));
    }

    #[test]
    fn positional_site_alone_opens_window() {
        let cli = Cli::try_parse_from(["platebook", "http://localhost:8000/"])
            .expect("should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.site(), Some("http://localhost:8000/"));
    }

    #[test]
    fn positional_site_wins_over_flag() {
        let cli = Cli::try_parse_from(["platebook", "./out", "list", "--site", "./other"])
            .expect("should parse");
        assert_eq!(cli.site(), Some("./out"));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["platebook", "import"]).is_err());
    }
}
