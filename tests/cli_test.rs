use clap::Parser;
use rat::cli::{Action, Args};
use rat::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("rat")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_project_only() {
    let parsed = Args::try_parse_from(make_args(&["./hello"])).unwrap();

    assert_eq!(
        parsed.action().unwrap(),
        Action::Materialize {
            boilerplate: None,
            project: PathBuf::from("./hello"),
        }
    );
}

#[test]
fn test_boilerplate_and_project() {
    let parsed = Args::try_parse_from(make_args(&["rust", "./hello"])).unwrap();

    assert_eq!(
        parsed.action().unwrap(),
        Action::Materialize {
            boilerplate: Some("rust".to_string()),
            project: PathBuf::from("./hello"),
        }
    );
}

#[test]
fn test_list_flags() {
    for flag in ["--list", "-l"] {
        let parsed = Args::try_parse_from(make_args(&[flag])).unwrap();
        assert_eq!(parsed.action().unwrap(), Action::List);
    }
}

#[test]
fn test_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--root",
        "/srv/boilerplates",
        "--select-cmd",
        "fzf --height 40%",
        "-v",
        "hello",
    ]))
    .unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.root.as_deref(), Some("/srv/boilerplates"));
    assert_eq!(parsed.select_cmd.as_deref(), Some("fzf --height 40%"));

    let config = parsed.config().unwrap();
    assert_eq!(config.root, PathBuf::from("/srv/boilerplates"));
    assert_eq!(config.select_cmd.as_deref(), Some("fzf --height 40%"));
}

#[test]
fn test_missing_project() {
    let parsed = Args::try_parse_from(make_args(&["-v"])).unwrap();
    assert!(matches!(parsed.action(), Err(Error::UsageError(_))));
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["rust", "./hello", "extra"])).is_err());
}
