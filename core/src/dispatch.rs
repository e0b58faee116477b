//! Handler dispatch for a validated argument vector.

use tracing::debug;

use crate::error::{OptionError, Result};
use crate::types::OptionTable;

/// Invokes the handler of every option present in `args`.
///
/// Call this only after [`validate`](crate::validate) accepted the same
/// vector; nothing is re-checked here. Iteration is over the table, so
/// handlers run in table order regardless of command-line order, and once
/// per occurrence. Descriptors without a handler are skipped. Tokens are
/// compared with all leading `-` removed. An argument-bearing option
/// receives the following token, which is then skipped.
///
/// # Errors
///
/// Returns [`OptionError::HandlerFailure`] for the first handler that
/// fails; no further handlers run.
///
/// # Examples
///
/// ```
/// use optable_core::*;
///
/// fn name(out: &mut Vec<String>, arg: Option<&str>) -> HandlerResult {
///     out.push(format!("name={}", arg.unwrap_or_default()));
///     Ok(())
/// }
///
/// fn greet(out: &mut Vec<String>, _: Option<&str>) -> HandlerResult {
///     out.push("greet".into());
///     Ok(())
/// }
///
/// let table = OptionTable::new()
///     .with_option(OptionDescriptor::with_argument("n", "name", "NAME").with_handler(name))
///     .with_option(OptionDescriptor::flag("g", "greet").with_handler(greet));
///
/// let args = ["--greet", "-n", "world"];
/// validate(&table, &args).unwrap();
///
/// let mut out = Vec::new();
/// execute(&table, &mut out, &args).unwrap();
/// assert_eq!(out, vec!["name=world", "greet"]);
/// ```
pub fn execute<C, A: AsRef<str>>(
    table: &OptionTable<C>,
    context: &mut C,
    args: &[A],
) -> Result<()> {
    for option in table.iter() {
        let Some(handler) = option.handler else {
            continue;
        };

        let mut position = 0;
        while position < args.len() {
            let token = args[position].as_ref();
            if option.matches_stripped(token) {
                let argument = if option.takes_argument() {
                    position += 1;
                    args.get(position).map(AsRef::as_ref)
                } else {
                    None
                };

                debug!(option = %option.display_name(), argument, "Dispatching option handler");
                handler(context, argument).map_err(|source| OptionError::HandlerFailure {
                    option: option.display_name(),
                    source,
                })?;
            }
            position += 1;
        }
    }

    Ok(())
}
