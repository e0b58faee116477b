//! Presence checks for a single option.

use tracing::trace;

use crate::error::{OptionError, Result};
use crate::types::OptionTable;

/// Reports whether the option named by `identity` occurs in `args`.
///
/// `identity` is a bare short or long identifier (`"p"` or `"port"`). The
/// whole vector is scanned for an exact occurrence of either display form of
/// the matching descriptor; argument positions are not skipped.
///
/// # Errors
///
/// Returns [`OptionError::BadIdentity`] if no descriptor in the table has
/// `identity` as its short or long identifier, whatever `args` contains.
///
/// # Examples
///
/// ```
/// use optable_core::{OptionDescriptor, OptionError, OptionTable, is_present};
///
/// let table: OptionTable<()> = OptionTable::new()
///     .with_option(OptionDescriptor::flag("d", "debug"));
///
/// assert_eq!(is_present(&table, "d", &["--debug"]), Ok(true));
/// assert_eq!(is_present(&table, "debug", &["-x"]), Ok(false));
/// assert_eq!(
///     is_present(&table, "zzz", &["--debug"]),
///     Err(OptionError::BadIdentity("zzz".into()))
/// );
/// ```
pub fn is_present<C, A: AsRef<str>>(
    table: &OptionTable<C>,
    identity: &str,
    args: &[A],
) -> Result<bool> {
    let Some(option) = table.find(identity) else {
        return Err(OptionError::BadIdentity(identity.to_string()));
    };

    let found = args
        .iter()
        .map(AsRef::as_ref)
        .any(|token| option.matches_token(token));
    trace!(identity, found, "Presence check");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionDescriptor;

    fn table() -> OptionTable<()> {
        OptionTable::new()
            .with_option(OptionDescriptor::flag("h", "help"))
            .with_option(OptionDescriptor::with_argument("p", "port", "NUM"))
            .with_option(OptionDescriptor::flag("", "debug"))
    }

    #[test]
    fn test_found_by_either_form() {
        let table = table();
        assert_eq!(is_present(&table, "p", &["-p", "80"]), Ok(true));
        assert_eq!(is_present(&table, "p", &["--port", "80"]), Ok(true));
        assert_eq!(is_present(&table, "port", &["-p", "80"]), Ok(true));
    }

    #[test]
    fn test_scans_whole_vector() {
        let table = table();
        assert_eq!(is_present(&table, "h", &["-p", "80", "x", "--help"]), Ok(true));
    }

    #[test]
    fn test_not_found() {
        let table = table();
        assert_eq!(is_present(&table, "h", &["-p", "80"]), Ok(false));
        assert_eq!(is_present::<(), &str>(&table, "h", &[]), Ok(false));
    }

    #[test]
    fn test_requires_exact_display_form() {
        let table = table();
        assert_eq!(is_present(&table, "help", &["help", "-help", "--h"]), Ok(false));
    }

    #[test]
    fn test_bad_identity_regardless_of_args() {
        let table = table();
        for args in [vec![], vec!["-x"], vec!["-h", "--help"]] {
            assert_eq!(
                is_present(&table, "x", &args),
                Err(OptionError::BadIdentity("x".to_string()))
            );
        }
    }

    #[test]
    fn test_empty_identity_is_bad() {
        let table = table();
        assert_eq!(
            is_present(&table, "", &["--debug"]),
            Err(OptionError::BadIdentity(String::new()))
        );
    }

    #[test]
    fn test_ambiguous_identity_uses_last_descriptor() {
        let table: OptionTable<()> = OptionTable::new()
            .with_option(OptionDescriptor::flag("x", "first"))
            .with_option(OptionDescriptor::flag("y", "x"));

        assert_eq!(is_present(&table, "x", &["--x"]), Ok(true));
        assert_eq!(is_present(&table, "x", &["-x"]), Ok(false));
    }
}
