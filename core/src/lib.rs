//! Table-driven command-line option engine.
//!
//! A host builds an [`OptionTable`] of [`OptionDescriptor`]s once, then runs
//! each argument vector through two phases:
//!
//! - [`validate`] checks the whole vector for unknown options, missing
//!   arguments and missing required options. Nothing runs yet.
//! - [`execute`] invokes each present option's [`Handler`] with its
//!   argument, in table order, stopping at the first failure.
//!
//! [`is_present`] answers "does this option occur?" for one option at any
//! time, and [`render_usage`] turns the same table into a help listing.
//! [`audit_table`] reports table-authoring mistakes such as duplicate ids.
//!
//! Handlers receive an explicit host context `C`, so independent tables and
//! parses never share state.
//!
//! Only `-x` and `--xyz` forms are recognized. An argument is always the
//! next token; `--opt=value`, clustered short options, subcommands and
//! positional arguments are not supported.
//!
//! # Example
//!
//! ```
//! use optable_core::*;
//!
//! #[derive(Default)]
//! struct Settings {
//!     port: u16,
//!     verbose: bool,
//! }
//!
//! fn set_port(settings: &mut Settings, arg: Option<&str>) -> HandlerResult {
//!     let arg = arg.unwrap_or_default();
//!     settings.port = arg
//!         .parse()
//!         .map_err(|_| HandlerError::new(format!("not a port: {arg}")))?;
//!     Ok(())
//! }
//!
//! fn set_verbose(settings: &mut Settings, _: Option<&str>) -> HandlerResult {
//!     settings.verbose = true;
//!     Ok(())
//! }
//!
//! let table = OptionTable::new()
//!     .with_option(
//!         OptionDescriptor::with_argument("p", "port", "NUM")
//!             .with_description("Port to listen on")
//!             .required()
//!             .with_handler(set_port),
//!     )
//!     .with_option(
//!         OptionDescriptor::flag("v", "verbose")
//!             .with_description("Chatty output")
//!             .with_handler(set_verbose),
//!     );
//!
//! let args = ["-v", "--port", "8080"];
//! validate(&table, &args).unwrap();
//!
//! let mut settings = Settings::default();
//! execute(&table, &mut settings, &args).unwrap();
//! assert_eq!(settings.port, 8080);
//! assert!(settings.verbose);
//!
//! assert!(matches!(
//!     validate(&table, &["-v"]),
//!     Err(OptionError::RequiredOptionMissing(_))
//! ));
//! ```

mod dispatch;
mod error;
mod presence;
mod types;
mod usage;
mod validate;

pub use dispatch::execute;
pub use error::{HandlerError, OptionError, Result, Status};
pub use presence::is_present;
pub use types::*;
pub use usage::{UsageLayout, render_usage, write_usage};
pub use validate::{TableIssue, audit_table, validate};
