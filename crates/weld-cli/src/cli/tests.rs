#[cfg(test)]
mod tests {
    use crate::cli::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_build() {
        let cli = Cli::try_parse_from(["weld"]).unwrap();
        assert_eq!(cli.effective_command(), Command::Build);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["weld", "emit"]).unwrap();
        assert_eq!(cli.effective_command(), Command::Emit);
        let cli = Cli::try_parse_from(["weld", "inspect"]).unwrap();
        assert_eq!(cli.effective_command(), Command::Inspect);
        assert!(Cli::try_parse_from(["weld", "publish"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "weld",
            "build",
            "--verbose",
            "--no-color",
            "--config",
            "alt.json",
            "--cwd",
            "app",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("alt.json")));
        assert_eq!(cli.cwd.as_deref(), Some(std::path::Path::new("app")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["weld", "-v", "-q"]).is_err());
    }
}
