//! Integration tests for the optable-core crate.

use optable_core::{
    HandlerError, HandlerResult, OptionDescriptor, OptionError, OptionTable, Status, UsageLayout,
    audit_table, execute, is_present, render_usage, validate,
};

/// Host context recording every handler invocation.
#[derive(Default)]
struct Trace {
    calls: Vec<String>,
}

fn on_help(trace: &mut Trace, _: Option<&str>) -> HandlerResult {
    trace.calls.push("help".to_string());
    Ok(())
}

fn on_port(trace: &mut Trace, arg: Option<&str>) -> HandlerResult {
    let arg = arg.unwrap_or_default();
    arg.parse::<u16>()
        .map_err(|_| HandlerError::with_code(format!("bad port: {arg}"), 2))?;
    trace.calls.push(format!("port {arg}"));
    Ok(())
}

fn on_speed(trace: &mut Trace, arg: Option<&str>) -> HandlerResult {
    trace.calls.push(format!("speed {}", arg.unwrap_or_default()));
    Ok(())
}

/// The table from the documented scenario: help, then a required port.
fn scenario_table() -> OptionTable<Trace> {
    OptionTable::new()
        .with_option(
            OptionDescriptor::flag("h", "help")
                .with_description("Print usage")
                .with_handler(on_help),
        )
        .with_option(
            OptionDescriptor::with_argument("p", "port", "NUM")
                .with_description("Port number")
                .required()
                .with_handler(on_port),
        )
}

fn full_table() -> OptionTable<Trace> {
    scenario_table()
        .with_option(
            OptionDescriptor::with_argument("s", "speed", "SPEED")
                .with_description("Serial speed")
                .with_handler(on_speed),
        )
        .with_option(OptionDescriptor::flag("", "debug").with_description("Turn on debugging"))
}

// ---------------------------------------------------------------------------
// Documented scenario
// ---------------------------------------------------------------------------

#[test]
fn scenario_help_alone_misses_required_port() {
    assert_eq!(
        validate(&scenario_table(), &["--help"]),
        Err(OptionError::RequiredOptionMissing("-p".to_string()))
    );
}

#[test]
fn scenario_port_with_argument_is_valid() {
    assert_eq!(validate(&scenario_table(), &["-p", "8080"]), Ok(()));
}

#[test]
fn scenario_port_without_argument() {
    assert_eq!(
        validate(&scenario_table(), &["-p"]),
        Err(OptionError::MissingArgument {
            option: "-p".to_string(),
            argument: "NUM".to_string(),
        })
    );
}

#[test]
fn scenario_unknown_option() {
    assert_eq!(
        validate(&scenario_table(), &["-x"]),
        Err(OptionError::UnknownOption("-x".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Presence checker
// ---------------------------------------------------------------------------

#[test]
fn presence_rejects_identities_outside_table() {
    let table = full_table();
    let vectors: [&[&str]; 3] = [&[], &["-q"], &["--help", "-p", "1"]];
    for identity in ["q", "quiet", "-h", "--help", "PORT"] {
        for args in vectors {
            assert_eq!(
                is_present(&table, identity, args),
                Err(OptionError::BadIdentity(identity.to_string()))
            );
        }
    }
}

#[test]
fn presence_is_independent_of_validation() {
    // The vector is invalid (unknown token), but presence is a plain query.
    let table = full_table();
    assert_eq!(is_present(&table, "debug", &["bogus", "--debug"]), Ok(true));
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

#[test]
fn exact_display_forms_are_never_unknown() {
    let table = full_table();
    for option in &table {
        for form in [option.short_form(), option.long_form()].into_iter().flatten() {
            let args = vec![form.clone(), "1".to_string(), "-p".to_string(), "2".to_string()];
            let result = validate(&table, &args);
            assert!(
                !matches!(&result, Err(OptionError::UnknownOption(token)) if *token == form),
                "{form} classified as unknown: {result:?}"
            );
        }
    }
}

#[test]
fn following_option_is_never_consumed_as_argument() {
    let table = full_table();
    for next in ["-h", "--help", "-", "--", "-1"] {
        assert_eq!(
            validate(&table, &["-p", "1", "--speed", next]),
            Err(OptionError::MissingArgument {
                option: "--speed".to_string(),
                argument: "SPEED".to_string(),
            }),
            "next token {next}"
        );
    }
}

#[test]
fn required_option_checked_even_when_syntax_is_perfect() {
    let table = full_table();
    assert_eq!(
        validate(&table, &["--debug", "-s", "9600", "-h"]),
        Err(OptionError::RequiredOptionMissing("-p".to_string()))
    );
}

#[test]
fn long_form_satisfies_required_option() {
    assert_eq!(validate(&full_table(), &["--port", "80"]), Ok(()));
}

#[test]
fn validation_errors_map_to_bad_parameters() {
    let err = validate(&full_table(), &["-x"]).unwrap_err();
    assert_eq!(err.status(), Status::BadParameters);
    assert_eq!(err.status().exit_code(), 1);
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

#[test]
fn dispatch_follows_table_order() {
    let table = full_table();
    let args = ["-s", "9600", "--debug", "--port", "80", "-h"];
    validate(&table, &args).unwrap();

    let mut trace = Trace::default();
    execute(&table, &mut trace, &args).unwrap();
    assert_eq!(trace.calls, vec!["help", "port 80", "speed 9600"]);
}

#[test]
fn dispatch_stops_at_first_failing_handler() {
    let table = full_table();
    let args = ["-s", "9600", "-p", "notaport", "-h"];
    validate(&table, &args).unwrap();

    let mut trace = Trace::default();
    let err = execute(&table, &mut trace, &args).unwrap_err();

    assert_eq!(trace.calls, vec!["help"]);
    assert_eq!(err.status(), Status::HandlerFailed(2));
    assert_eq!(err.to_string(), "Option -p failed: bad port: notaport");
}

#[test]
fn dispatch_accepts_owned_arguments() {
    let table = full_table();
    let args: Vec<String> = ["-p", "443"].iter().map(ToString::to_string).collect();
    validate(&table, &args).unwrap();

    let mut trace = Trace::default();
    execute(&table, &mut trace, &args).unwrap();
    assert_eq!(trace.calls, vec!["port 443"]);
}

// ---------------------------------------------------------------------------
// Usage and audit
// ---------------------------------------------------------------------------

#[test]
fn usage_lists_every_descriptor_in_order() {
    let text = render_usage(&full_table(), &UsageLayout::default());
    let help = text.find("--help").unwrap();
    let port = text.find("--port").unwrap();
    let speed = text.find("--speed").unwrap();
    let debug = text.find("--debug").unwrap();
    assert!(help < port && port < speed && speed < debug);
    assert_eq!(text, render_usage(&full_table(), &UsageLayout::default()));
}

#[test]
fn audit_flags_required_long_only_option() {
    let table = full_table().with_option(OptionDescriptor::flag("", "force").required());
    let issues = audit_table(&table);
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].to_string(),
        "required option --force has no short identifier and can never be satisfied"
    );
}
