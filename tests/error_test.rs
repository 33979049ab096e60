use rat::error::Error;
use std::error::Error as _;
use std::io;
use std::path::PathBuf;

#[test]
fn test_error_display() {
    let err = Error::SourceNotFound {
        template_dir: PathBuf::from("/home/me/.rat/rust"),
    };
    assert_eq!(err.to_string(), "Not exists directory '/home/me/.rat/rust'");

    assert_eq!(Error::NoSelectionMade.to_string(), "No boilerplate selected");

    let err = Error::ConfigError("failed to get a home directory path".to_string());
    assert_eq!(err.to_string(), "Configuration error: failed to get a home directory path");
}

#[test]
fn test_io_source_is_kept() {
    let err = Error::FileOpenFailed {
        path: PathBuf::from("secret.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };

    assert!(err.to_string().starts_with("Cannot open 'secret.txt'"));
    let source = err.source().unwrap().downcast_ref::<io::Error>().unwrap();
    assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
}
