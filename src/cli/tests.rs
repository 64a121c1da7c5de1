use super::*;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn no_subcommand_means_chat() {
    let args = parse_args(&["pulsechat"]);
    assert!(args.command.is_none());
    assert!(args.config.is_none());
    assert!(args.theme.is_none());
    assert!(args.seed.is_none());
    assert!(args.log.is_none());
}

#[test]
fn parses_subcommands() {
    for (argv, expected) in [
        (&["pulsechat", "chat"][..], Commands::Chat),
        (&["pulsechat", "config"][..], Commands::Config),
        (&["pulsechat", "themes"][..], Commands::Themes),
    ] {
        assert_eq!(
            parse_args(argv).command,
            Some(expected),
            "argv={argv:?}"
        );
    }
}

#[test]
fn global_flags_work_before_and_after_subcommand() {
    let argv = ["pulsechat", "--theme", "light", "chat", "--seed", "42"];
    let args = parse_args(&argv);
    assert_eq!(args.command, Some(Commands::Chat));
    assert_eq!(args.theme.as_deref(), Some("light"));
    assert_eq!(args.seed, Some(42));

    let short = parse_args(&["pulsechat", "-c", "/tmp/pc.toml", "-l", "/tmp/pc.log"]);
    assert_eq!(short.config, Some(PathBuf::from("/tmp/pc.toml")));
    assert_eq!(short.log, Some(PathBuf::from("/tmp/pc.log")));
}

#[test]
fn rejects_non_numeric_seed() {
    assert!(Args::try_parse_from(["pulsechat", "--seed", "abc"]).is_err());
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Args::try_parse_from(["pulsechat", "auth"]).is_err());
}

#[test]
fn cli_seed_beats_config_seed() {
    let config = Config {
        seed: Some(7),
        ..Default::default()
    };
    assert_eq!(resolve_seed(Some(99), &config).unwrap(), 99);
    assert_eq!(resolve_seed(None, &config).unwrap(), 7);
    assert!(resolve_seed(None, &Config::default()).is_ok());
}

#[test]
fn version_includes_package_version() {
    assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
}
