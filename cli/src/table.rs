//! The `optable` option table and its handlers.
//!
//! Handlers run in table order, so the table lists the options that adjust
//! the session (`--quiet`, `--name`, `--repeat`) before the ones that
//! produce output from it (`--greet`).

use std::io::{self, Write};

use optable_core::{
    HandlerError, HandlerResult, OptionDescriptor, OptionTable, write_usage,
};

use crate::config::HostConfig;
use crate::error::Result;

const PROGRAM: &str = "optable";
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Option table of the `optable` binary, writing to `W`.
pub type HostTable<W> = OptionTable<Session<W>>;

/// State shared by the handlers during one dispatch.
pub struct Session<W> {
    out: W,
    config: HostConfig,
    usage: String,
    listing: String,
    dump: String,
    name: String,
    repeat: usize,
    quiet: bool,
}

impl<W: Write> Session<W> {
    /// Creates a session for `table`, pre-rendering the table reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the usage text or the JSON dump cannot be produced.
    pub fn new(table: &HostTable<W>, config: HostConfig, out: W) -> Result<Self> {
        let mut usage = Vec::new();
        write_usage(&mut usage, write_banner, table, &config.usage)?;
        let mut dump = serde_json::to_string_pretty(table)?;
        dump.push('\n');

        Ok(Self {
            out,
            usage: String::from_utf8_lossy(&usage).into_owned(),
            listing: option_listing(table),
            dump,
            config,
            name: "world".to_string(),
            repeat: 1,
            quiet: false,
        })
    }

    /// Writes the banner and usage listing.
    pub fn print_usage(&mut self) -> io::Result<()> {
        self.out.write_all(self.usage.as_bytes())
    }
}

/// Builds the option table.
pub fn host_table<W: Write>() -> HostTable<W> {
    OptionTable::new()
        .with_option(
            OptionDescriptor::flag("h", "help")
                .with_description("Print complete help message on program usage")
                .with_handler(print_help::<W>),
        )
        .with_option(
            OptionDescriptor::flag("v", "version")
                .with_description("Display version")
                .with_handler(print_version::<W>),
        )
        .with_option(OptionDescriptor::flag("", "debug").with_description("Turn on debugging"))
        .with_option(
            OptionDescriptor::flag("q", "quiet")
                .with_description("Quiet output (default=verbose)")
                .with_handler(set_quiet::<W>),
        )
        .with_option(
            OptionDescriptor::with_argument("n", "name", "NAME")
                .with_description("Name to greet (default=world)")
                .with_handler(set_name::<W>),
        )
        .with_option(
            OptionDescriptor::with_argument("r", "repeat", "COUNT")
                .with_description("Number of greetings (default=1)")
                .with_handler(set_repeat::<W>),
        )
        .with_option(
            OptionDescriptor::with_argument("w", "write-config", "FILE")
                .with_description("Write the effective configuration to FILE")
                .with_handler(write_config::<W>),
        )
        .with_option(
            OptionDescriptor::flag("l", "list-options")
                .with_description("List every option, one per line")
                .with_handler(list_options::<W>),
        )
        .with_option(
            OptionDescriptor::flag("d", "dump-table")
                .with_description("Print the option table as JSON")
                .with_handler(dump_table::<W>),
        )
        .with_option(
            OptionDescriptor::flag("g", "greet")
                .with_description("Print the greeting")
                .with_handler(greet::<W>),
        )
}

/// Writes the identification banner.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PROGRAM} {PACKAGE_VERSION}")?;
    writeln!(out)
}

/// One line per option: its forms, argument placeholder and required marker.
pub fn option_listing<C>(table: &OptionTable<C>) -> String {
    let mut listing = String::new();
    for option in table {
        let forms: Vec<String> = [option.short_form(), option.long_form()]
            .into_iter()
            .flatten()
            .collect();
        listing.push_str(&forms.join(", "));
        if option.takes_argument() {
            listing.push(' ');
            listing.push_str(&option.argument);
        }
        if option.required {
            listing.push_str(" (required)");
        }
        listing.push('\n');
    }
    listing
}

fn output_error(err: io::Error) -> HandlerError {
    HandlerError::new(format!("cannot write output: {err}"))
}

fn write_text<W: Write>(out: &mut W, text: &str) -> HandlerResult {
    out.write_all(text.as_bytes()).map_err(output_error)
}

fn print_help<W: Write>(session: &mut Session<W>, _: Option<&str>) -> HandlerResult {
    write_text(&mut session.out, &session.usage)
}

fn print_version<W: Write>(session: &mut Session<W>, _: Option<&str>) -> HandlerResult {
    write_banner(&mut session.out).map_err(output_error)
}

fn set_quiet<W: Write>(session: &mut Session<W>, _: Option<&str>) -> HandlerResult {
    session.quiet = true;
    Ok(())
}

fn set_name<W: Write>(session: &mut Session<W>, arg: Option<&str>) -> HandlerResult {
    session.name = arg.unwrap_or_default().to_string();
    Ok(())
}

fn set_repeat<W: Write>(session: &mut Session<W>, arg: Option<&str>) -> HandlerResult {
    let arg = arg.unwrap_or_default();
    match arg.parse::<usize>() {
        Ok(count) if count > 0 => {
            session.repeat = count;
            Ok(())
        }
        _ => Err(HandlerError::new(format!(
            "invalid repeat count \"{arg}\", expected a positive integer"
        ))),
    }
}

fn write_config<W: Write>(session: &mut Session<W>, arg: Option<&str>) -> HandlerResult {
    let path = arg.unwrap_or_default();
    session
        .config
        .save(path)
        .map_err(|err| HandlerError::new(format!("cannot write configuration to {path}: {err}")))?;
    if !session.quiet {
        writeln!(session.out, "Configuration written to {path}").map_err(output_error)?;
    }
    Ok(())
}

fn list_options<W: Write>(session: &mut Session<W>, _: Option<&str>) -> HandlerResult {
    write_text(&mut session.out, &session.listing)
}

fn dump_table<W: Write>(session: &mut Session<W>, _: Option<&str>) -> HandlerResult {
    write_text(&mut session.out, &session.dump)
}

fn greet<W: Write>(session: &mut Session<W>, _: Option<&str>) -> HandlerResult {
    if session.quiet {
        return Ok(());
    }
    for _ in 0..session.repeat {
        writeln!(session.out, "Hello, {}!", session.name).map_err(output_error)?;
    }
    Ok(())
}
