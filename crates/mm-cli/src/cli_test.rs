use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the argument definitions: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["merge-migrations"]).unwrap();
    assert!(cli.output.is_none());
    assert!(!cli.preview);
    assert!(!cli.verbose);
    assert!(cli.base_dir.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn test_short_flags() {
    let cli =
        Cli::try_parse_from(["merge-migrations", "-o", "out.sql", "-p", "-v", "-d", "/srv/db"])
            .unwrap();
    assert_eq!(cli.output.as_deref(), Some("out.sql"));
    assert!(cli.preview);
    assert!(cli.verbose);
    assert_eq!(cli.base_dir, Some(PathBuf::from("/srv/db")));
}

#[test]
fn test_long_flags() {
    let cli = Cli::try_parse_from([
        "merge-migrations",
        "--output",
        "build/all.sql",
        "--preview",
        "--config",
        "cfg.yml",
    ])
    .unwrap();
    assert_eq!(cli.output.as_deref(), Some("build/all.sql"));
    assert!(cli.preview);
    assert_eq!(cli.config, Some(PathBuf::from("cfg.yml")));
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["merge-migrations", "--force"]).is_err());
}
