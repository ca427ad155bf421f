use std::{process::Command, time::Duration};

use headerfan::{
    util::{
        cert_domain_names, decode_alias, domain, encode_alias, exit_status, parse_duration,
        parse_sections, wildcard_matches,
    },
    DurationErrorReason, Error,
};

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[test]
fn exit_status_codes() {
    let status = Command::new("echo").arg("hello").arg("world").output().map(|x| x.status);
    assert_eq!("0", exit_status(&status));

    let status = Command::new("nope-not-a-command").status();
    assert_eq!("?", exit_status(&status));

    let status = Command::new("sh")
        .arg("-c")
        .arg("echo hello > /dev/null && exit 5")
        .status();
    assert_eq!("5", exit_status(&status));
}

#[test]
fn duration_approximations() {
    assert_eq!(DAY, parse_duration("1d").unwrap());
    assert_eq!(DAY.mul_f64(1.5), parse_duration("1.5d").unwrap());
    assert_eq!(DAY * 7, parse_duration("1w").unwrap());
    assert_eq!(DAY * 14, parse_duration("2w").unwrap());
    assert_eq!(DAY * 30, parse_duration("1mo").unwrap());
    assert_eq!(DAY * 30, parse_duration("1M").unwrap());
    assert_eq!(DAY * 45, parse_duration("1.5mo").unwrap());
}

#[test]
fn duration_go_style() {
    assert_eq!(Duration::from_secs(15 * 60), parse_duration("15m").unwrap());
    assert_eq!(HOUR + Duration::from_secs(30 * 60), parse_duration("1h30m").unwrap());
    assert_eq!(Duration::from_millis(1500), parse_duration("1.5s").unwrap());
    assert_eq!(Duration::from_millis(250), parse_duration("250ms").unwrap());
    assert_eq!(Duration::from_micros(3), parse_duration("3us").unwrap());
    assert_eq!(Duration::from_nanos(7), parse_duration("7ns").unwrap());
    assert_eq!(DAY + HOUR * 12, parse_duration("1d12h").unwrap());
    assert_eq!(Duration::ZERO, parse_duration("0").unwrap());
    assert_eq!(HOUR, parse_duration("+1h").unwrap());
}

fn reason(input: &str) -> DurationErrorReason {
    match parse_duration(input) {
        Err(Error::InvalidDuration { reason, .. }) => reason,
        other => panic!("expected invalid duration for {input:?}, got {other:?}"),
    }
}

#[test]
fn duration_errors() {
    assert_eq!(DurationErrorReason::Empty, reason(""));
    assert_eq!(DurationErrorReason::Negative, reason("-1h"));
    assert_eq!(DurationErrorReason::MissingUnit, reason("15"));
    assert_eq!(DurationErrorReason::UnknownUnit, reason("3y"));
    assert_eq!(DurationErrorReason::Number, reason("h"));
    assert_eq!(DurationErrorReason::Number, reason("1.2.3s"));
    assert_eq!(DurationErrorReason::Overflow, reason("999999999999mo"));

    let message = parse_duration("3y").unwrap_err().to_string();
    assert_eq!("invalid duration '3y': unknown unit", message);
}

#[test]
fn apex_domain() {
    assert_eq!("example.com", domain("example.com"));
    assert_eq!("example.com", domain("api.example.com"));
    assert_eq!("example.com", domain("v1.api.example.com"));

    assert_eq!("example.co.uk", domain("example.co.uk"));
    assert_eq!("example.co.uk", domain("api.example.co.uk"));
    assert_eq!("example.co.uk", domain("v1.api.example.co.uk"));
}

#[test]
fn certificate_names() {
    assert_eq!(
        ["example.com", "*.example.com"],
        cert_domain_names("example.com")
    );
    assert_eq!(
        ["example.com", "*.example.com"],
        cert_domain_names("api.example.com")
    );
    assert_eq!(
        ["api.example.com", "*.api.example.com"],
        cert_domain_names("v1.api.example.com")
    );
    assert_eq!(
        ["example.co.uk", "*.example.co.uk"],
        cert_domain_names("api.example.co.uk")
    );
}

#[test]
fn wildcards() {
    assert!(wildcard_matches("*.api.example.com", "v1.api.example.com"));
    assert!(wildcard_matches("*.example.com", "api.example.com"));
    assert!(wildcard_matches("*.Example.com", "API.example.COM"));
    assert!(wildcard_matches("example.com", "EXAMPLE.com"));
    assert!(!wildcard_matches("example.com", "api.example.com"));
    assert!(!wildcard_matches("*.api.example.com", "api.example.com"));
    assert!(!wildcard_matches("*.example.com", "v1.api.example.com"));
    assert!(!wildcard_matches("*.example.com", ".example.com"));
}

#[test]
fn credential_sections() {
    let input = "[personal]
aws_access_key_id = personal_key
aws_secret_access_key = personal_secret
[app]
aws_access_key_id = app_key
aws_secret_access_key = app_secret

; shared ci profile
[ foo_bar ]
aws_access_key_id = foo_bar_key
aws_secret_access_key = foo_bar_secret
";

    let sections = parse_sections(input.as_bytes()).unwrap();
    assert_eq!(vec!["personal", "app", "foo_bar"], sections);
    assert!(parse_sections(&b""[..]).unwrap().is_empty());
}

#[test]
fn aliases() {
    assert_eq!("commit-v1_2_3-beta", encode_alias("v1.2.3-beta"));
    assert_eq!("v1.2.3-beta", decode_alias(&encode_alias("v1.2.3-beta")));
    assert_eq!("v1.2", decode_alias("v1_2"));
}
