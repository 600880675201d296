//! Library integration tests.

use netsec_pkg::PackagingError;

#[test]
fn error_types_are_public() {
    let err = PackagingError::MetadataValidationError {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> netsec_pkg::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use netsec_pkg::cli::{Cli, Commands};

    let cli = Cli::parse_from(["netsec-pkg", "show", "--json"]);

    if let Some(Commands::Show(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Show command");
    }
}
