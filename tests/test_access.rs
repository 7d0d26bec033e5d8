//! Integration tests for command-line credential resolution.
//!
//! Run with: cargo test --test test_access

use ttsamples::samples;
use ttsamples::{get_credentials, get_credentials_to, usage, Error, DEFAULT_CONNECT_STRING};

fn cli(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_usage_invocation_line() {
    let text = usage(samples::sql::NAME);
    assert_eq!(
        text.matches("node sql -u <userName> -p <password>").count(),
        1
    );
    // The same banner is rendered for every sample, only the name changes.
    let text = usage(samples::queries_plsql::NAME);
    assert_eq!(
        text.matches("node queriesAndPlsql -u <userName> -p <password>")
            .count(),
        1
    );
}

#[test]
fn test_usage_quotes_the_default_connect_string() {
    let text = usage(samples::simple::NAME);
    assert!(text.contains(&format!("(Default: \"{DEFAULT_CONNECT_STRING}\")")));
}

#[test]
fn test_flag_order_does_not_matter() {
    let creds = get_credentials(
        samples::sql::NAME,
        &cli(&["-c", "tthost/appdb:timesten_client", "-p", "secret", "-u", "appuser"]),
    )
    .unwrap();
    assert_eq!(creds.username, "appuser");
    assert_eq!(creds.password, "secret");
    assert_eq!(creds.connect_string, "tthost/appdb:timesten_client");
}

#[test]
fn test_missing_credential_wins_over_dangling_flag() {
    // -p is absent and -c dangles; the credential check comes first.
    let err = get_credentials(samples::sql::NAME, &cli(&["-u", "appuser", "-c"])).unwrap_err();
    assert!(matches!(err, Error::MissingCredential));
    assert_eq!(
        err.to_string(),
        "Bad options format: -u and -p are required"
    );
}

#[test]
fn test_dangling_flag_message_names_the_flag() {
    let err = get_credentials(samples::sql::NAME, &cli(&["-u", "appuser", "-p", "secret", "-c"]))
        .unwrap_err();
    assert_eq!(err.to_string(), "Option -c requires 1 argument");

    let err = get_credentials(
        samples::sql::NAME,
        &cli(&["-u", "appuser", "-p", "secret", "-verbose"]),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Option -verbose requires 1 argument");
}

#[test]
fn test_flags_consume_the_next_token_blindly() {
    // "-p" lands as the value of -u; the later -p pair still parses.
    let creds = get_credentials(samples::sql::NAME, &cli(&["-u", "-p", "-p", "secret"])).unwrap();
    assert_eq!(creds.username, "-p");
    assert_eq!(creds.password, "secret");
}

#[test]
fn test_repeated_connect_flag_keeps_last_value() {
    let creds = get_credentials(
        samples::sql::NAME,
        &cli(&[
            "-u",
            "appuser",
            "-p",
            "secret",
            "-c",
            "tthost/appdb:timesten_direct",
            "-c",
            "sampledb_ds",
        ]),
    )
    .unwrap();
    assert_eq!(creds.connect_string, "sampledb_ds");
}

#[test]
fn test_no_args_fails_with_missing_credential() {
    let err = get_credentials(samples::simple::NAME, &[]).unwrap_err();
    assert!(matches!(err, Error::MissingCredential));
}

#[test]
fn test_missing_credential_writes_the_banner_once() {
    let mut diag: Vec<u8> = Vec::new();
    let err = get_credentials_to(samples::sql::NAME, &cli(&["-u", "appuser"]), &mut diag)
        .unwrap_err();
    assert!(matches!(err, Error::MissingCredential));

    // The banner reaches the stream before the error reaches the caller.
    let text = String::from_utf8(diag).unwrap();
    assert_eq!(
        text.matches("node sql -u <userName> -p <password>").count(),
        1
    );
}

#[test]
fn test_dangling_flag_failure_writes_no_banner() {
    // Only the credential check explains itself with the usage text.
    let mut diag: Vec<u8> = Vec::new();
    let err = get_credentials_to(
        samples::sql::NAME,
        &cli(&["-u", "appuser", "-p", "secret", "-c"]),
        &mut diag,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingArgumentValue { .. }));
    assert!(diag.is_empty());
}

#[test]
fn test_successful_resolution_stays_quiet() {
    let mut diag: Vec<u8> = Vec::new();
    let creds = get_credentials_to(
        samples::sql::NAME,
        &cli(&["-u", "appuser", "-p", "secret"]),
        &mut diag,
    )
    .unwrap();
    assert_eq!(creds.username, "appuser");
    assert!(diag.is_empty());
}
