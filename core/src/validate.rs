//! Argument-vector validation and option-table auditing.
//!
//! [`validate`] checks a raw argument vector against a table in one
//! left-to-right pass, then enforces required options. It fails fast: only
//! the first problem is reported.
//!
//! [`audit_table`] checks the table itself for authoring mistakes the engine
//! tolerates but resolves arbitrarily, such as duplicate identifiers.
//!
//! # Examples
//!
//! ```
//! use optable_core::*;
//!
//! let table: OptionTable<()> = OptionTable::new()
//!     .with_option(OptionDescriptor::flag("h", "help"))
//!     .with_option(OptionDescriptor::with_argument("p", "port", "NUM").required());
//!
//! assert!(audit_table(&table).is_empty());
//! assert_eq!(validate(&table, &["-p", "8080"]), Ok(()));
//! assert_eq!(
//!     validate(&table, &["--help"]),
//!     Err(OptionError::RequiredOptionMissing("-p".into()))
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::error::{OptionError, Result};
use crate::presence::is_present;
use crate::types::{OptionDescriptor, OptionTable, looks_like_option};

/// Option-table authoring problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    /// A descriptor has neither a short nor a long identifier.
    #[error("option at position {0} has no short or long identifier")]
    MissingOptionName(usize),
    /// An identifier carries its own prefix or contains whitespace.
    #[error("invalid option identifier: {0:?}")]
    InvalidIdentifier(String),
    /// Two descriptors share a short identifier.
    #[error("duplicate short option: -{0}")]
    DuplicateShortId(String),
    /// Two descriptors share a long identifier.
    #[error("duplicate long option: --{0}")]
    DuplicateLongId(String),
    /// A required option has no short identifier, so the required check,
    /// which probes the short identifier, can never be satisfied.
    #[error("required option --{0} has no short identifier and can never be satisfied")]
    RequiredWithoutShortId(String),
}

/// Audits an option table for authoring mistakes.
///
/// Reports every issue found, in table order. An empty result means every
/// matchable form is unique and every required option can be satisfied.
///
/// # Examples
///
/// ```
/// use optable_core::*;
///
/// let table: OptionTable<()> = OptionTable::new()
///     .with_option(OptionDescriptor::flag("v", "verbose"))
///     .with_option(OptionDescriptor::flag("v", "version"));
///
/// assert_eq!(audit_table(&table), vec![TableIssue::DuplicateShortId("v".into())]);
/// ```
pub fn audit_table<C>(table: &OptionTable<C>) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    let mut seen_short: HashSet<&str> = HashSet::new();
    let mut seen_long: HashSet<&str> = HashSet::new();

    for (position, option) in table.iter().enumerate() {
        if option.short_id.is_empty() && option.long_id.is_empty() {
            issues.push(TableIssue::MissingOptionName(position));
            continue;
        }

        for id in [&option.short_id, &option.long_id] {
            if !id.is_empty() && !is_valid_identifier(id) {
                issues.push(TableIssue::InvalidIdentifier(id.clone()));
            }
        }

        if !option.short_id.is_empty() && !seen_short.insert(&option.short_id) {
            issues.push(TableIssue::DuplicateShortId(option.short_id.clone()));
        }
        if !option.long_id.is_empty() && !seen_long.insert(&option.long_id) {
            issues.push(TableIssue::DuplicateLongId(option.long_id.clone()));
        }

        if option.required && option.short_id.is_empty() {
            issues.push(TableIssue::RequiredWithoutShortId(option.long_id.clone()));
        }
    }

    issues
}

fn is_valid_identifier(id: &str) -> bool {
    !id.starts_with('-') && !id.chars().any(char::is_whitespace)
}

/// Outcome of matching one token against the whole table.
enum TokenMatch<'t, C> {
    Unmatched,
    Matched { consumes_next: bool },
    MissingArgument(&'t OptionDescriptor<C>),
}

/// Validates an argument vector against the table.
///
/// `args` excludes the program name. Each token must be an exact display
/// form of some descriptor. An argument-bearing option consumes the next
/// token unless that token is missing or itself looks like an option.
/// After the pass, every required descriptor must be present, probed by its
/// short identifier.
///
/// # Errors
///
/// - [`OptionError::UnknownOption`] for the first token matching no descriptor.
/// - [`OptionError::MissingArgument`] when an argument-bearing option is the
///   last token or is followed by another option-looking token.
/// - [`OptionError::RequiredOptionMissing`] for the first required descriptor
///   (in table order) not present. A required descriptor without a short
///   identifier always fails this check; see [`audit_table`].
pub fn validate<C, A: AsRef<str>>(table: &OptionTable<C>, args: &[A]) -> Result<()> {
    let mut position = 0;
    while position < args.len() {
        let token = args[position].as_ref();
        let next = args.get(position + 1).map(AsRef::as_ref);

        match match_token(table, token, next) {
            TokenMatch::Unmatched => {
                debug!(position, token, "Unknown option");
                return Err(OptionError::UnknownOption(token.to_string()));
            }
            TokenMatch::MissingArgument(option) => {
                debug!(position, token, argument = %option.argument, "Missing argument");
                return Err(OptionError::MissingArgument {
                    option: token.to_string(),
                    argument: option.argument.clone(),
                });
            }
            TokenMatch::Matched { consumes_next } => {
                debug!(position, token, consumes_next, "Matched option");
                position += if consumes_next { 2 } else { 1 };
            }
        }
    }

    for option in table.iter().filter(|option| option.required) {
        // A missing short identifier is a bad identity, which counts as absent.
        let present = is_present(table, &option.short_id, args).unwrap_or(false);
        if !present {
            return Err(OptionError::RequiredOptionMissing(option.display_name()));
        }
    }

    Ok(())
}

/// Matches `token` against every descriptor; the last matching descriptor in
/// table order decides the outcome.
fn match_token<'t, C>(
    table: &'t OptionTable<C>,
    token: &str,
    next: Option<&str>,
) -> TokenMatch<'t, C> {
    let mut outcome = TokenMatch::Unmatched;
    for option in table.iter().filter(|option| option.matches_token(token)) {
        outcome = if !option.takes_argument() {
            TokenMatch::Matched {
                consumes_next: false,
            }
        } else if next.is_some_and(|next| !looks_like_option(next)) {
            TokenMatch::Matched {
                consumes_next: true,
            }
        } else {
            TokenMatch::MissingArgument(option)
        };
    }
    outcome
}
