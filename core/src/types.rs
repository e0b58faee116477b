//! Option descriptor and option table definitions.
//!
//! An [`OptionTable`] is an ordered list of [`OptionDescriptor`]s. It is
//! built once by the host before any parsing and is only read afterwards:
//! every engine operation takes it by shared reference.

use std::fmt;

use serde::Serialize;

use crate::error::HandlerError;

/// Prefix of a short option (`-p`).
pub const SHORT_PREFIX: &str = "-";

/// Prefix of a long option (`--port`).
pub const LONG_PREFIX: &str = "--";

/// Result returned by an option handler.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Callable attached to a descriptor.
///
/// Receives the host context and the option's argument (`None` for options
/// that take no argument).
pub type Handler<C> = fn(&mut C, Option<&str>) -> HandlerResult;

/// One recognized command-line option.
///
/// Empty `short_id`/`long_id` mean "no such form". A non-empty `argument`
/// both marks the option as consuming the next token and provides the
/// placeholder shown in usage output.
///
/// # Examples
///
/// ```
/// use optable_core::OptionDescriptor;
///
/// let port: OptionDescriptor<()> = OptionDescriptor::with_argument("p", "port", "NUM")
///     .with_description("Port to listen on")
///     .required();
///
/// assert!(port.takes_argument());
/// assert!(port.required);
/// assert_eq!(port.short_form().as_deref(), Some("-p"));
/// assert_eq!(port.long_form().as_deref(), Some("--port"));
/// assert!(port.matches_token("--port"));
/// assert!(!port.matches_token("port"));
/// ```
#[derive(Serialize)]
#[serde(bound(serialize = ""))]
pub struct OptionDescriptor<C> {
    /// Short identifier without prefix (e.g. `"p"`), empty for none.
    pub short_id: String,
    /// Long identifier without prefix (e.g. `"port"`), empty for none.
    pub long_id: String,
    /// Argument placeholder, empty when the option takes no argument.
    pub argument: String,
    /// Whether the option must appear in every valid argument vector.
    pub required: bool,
    /// Description shown in usage output.
    pub description: String,
    /// Handler invoked during dispatch, if any.
    #[serde(skip)]
    pub handler: Option<Handler<C>>,
}

impl<C> OptionDescriptor<C> {
    /// Creates an option that takes no argument.
    pub fn flag(short_id: &str, long_id: &str) -> Self {
        Self::with_argument(short_id, long_id, "")
    }

    /// Creates an option that consumes the next token as its argument.
    pub fn with_argument(short_id: &str, long_id: &str, argument: &str) -> Self {
        Self {
            short_id: short_id.to_string(),
            long_id: long_id.to_string(),
            argument: argument.to_string(),
            required: false,
            description: String::new(),
            handler: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a handler.
    pub fn with_handler(mut self, handler: Handler<C>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Returns `true` if the option consumes an argument.
    pub fn takes_argument(&self) -> bool {
        !self.argument.is_empty()
    }

    /// Returns `true` if a handler is attached.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Short display form (`-p`), or `None` without a short identifier.
    pub fn short_form(&self) -> Option<String> {
        (!self.short_id.is_empty()).then(|| format!("{SHORT_PREFIX}{}", self.short_id))
    }

    /// Long display form (`--port`), or `None` without a long identifier.
    pub fn long_form(&self) -> Option<String> {
        (!self.long_id.is_empty()).then(|| format!("{LONG_PREFIX}{}", self.long_id))
    }

    /// Name used in diagnostics: short form preferred, long form otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use optable_core::OptionDescriptor;
    ///
    /// let both: OptionDescriptor<()> = OptionDescriptor::flag("q", "quiet");
    /// assert_eq!(both.display_name(), "-q");
    ///
    /// let long_only: OptionDescriptor<()> = OptionDescriptor::flag("", "debug");
    /// assert_eq!(long_only.display_name(), "--debug");
    /// ```
    pub fn display_name(&self) -> String {
        self.short_form()
            .or_else(|| self.long_form())
            .unwrap_or_default()
    }

    /// Checks whether `identity` equals this option's short or long identifier.
    ///
    /// Empty identifiers never match.
    pub fn matches_identity(&self, identity: &str) -> bool {
        !identity.is_empty() && (self.short_id == identity || self.long_id == identity)
    }

    /// Checks whether `token` is exactly one of this option's display forms.
    pub fn matches_token(&self, token: &str) -> bool {
        let short = !self.short_id.is_empty()
            && token
                .strip_prefix(SHORT_PREFIX)
                .is_some_and(|rest| rest == self.short_id);
        let long = !self.long_id.is_empty()
            && token
                .strip_prefix(LONG_PREFIX)
                .is_some_and(|rest| rest == self.long_id);
        short || long
    }

    /// Checks whether `token`, with every leading `-` removed, names this
    /// option by either identifier.
    pub fn matches_stripped(&self, token: &str) -> bool {
        let bare = token.trim_start_matches('-');
        (!self.short_id.is_empty() && bare == self.short_id)
            || (!self.long_id.is_empty() && bare == self.long_id)
    }
}

impl<C> fmt::Debug for OptionDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("short_id", &self.short_id)
            .field("long_id", &self.long_id)
            .field("argument", &self.argument)
            .field("required", &self.required)
            .field("description", &self.description)
            .field("handler", &self.has_handler())
            .finish()
    }
}

/// Returns `true` if `token` starts with a short or long option prefix.
pub fn looks_like_option(token: &str) -> bool {
    token.starts_with(SHORT_PREFIX) || token.starts_with(LONG_PREFIX)
}

/// Ordered, read-only set of option descriptors.
///
/// Table order matters: it is the dispatch order, the usage order, and the
/// tie-break order for ambiguous tables (the later descriptor wins).
///
/// # Examples
///
/// ```
/// use optable_core::{OptionDescriptor, OptionTable};
///
/// let table: OptionTable<()> = OptionTable::new()
///     .with_option(OptionDescriptor::flag("h", "help"))
///     .with_option(OptionDescriptor::with_argument("p", "port", "NUM"));
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.find("port").unwrap().argument, "NUM");
/// assert!(table.find("x").is_none());
/// ```
#[derive(Serialize)]
#[serde(transparent, bound(serialize = ""))]
pub struct OptionTable<C> {
    options: Vec<OptionDescriptor<C>>,
}

impl<C> OptionTable<C> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends a descriptor (builder form).
    pub fn with_option(mut self, option: OptionDescriptor<C>) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a descriptor.
    pub fn push(&mut self, option: OptionDescriptor<C>) {
        self.options.push(option);
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the table has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates descriptors in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor<C>> {
        self.options.iter()
    }

    /// Finds the descriptor whose short or long identifier equals `identity`.
    ///
    /// When several descriptors match, the last one in table order wins.
    pub fn find(&self, identity: &str) -> Option<&OptionDescriptor<C>> {
        self.options
            .iter()
            .rev()
            .find(|option| option.matches_identity(identity))
    }
}

impl<C> Default for OptionTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for OptionTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.options.iter()).finish()
    }
}

impl<C> FromIterator<OptionDescriptor<C>> for OptionTable<C> {
    fn from_iter<I: IntoIterator<Item = OptionDescriptor<C>>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<'a, C> IntoIterator for &'a OptionTable<C> {
    type Item = &'a OptionDescriptor<C>;
    type IntoIter = std::slice::Iter<'a, OptionDescriptor<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

/// Collects the process arguments, skipping the program name.
pub fn args_from_env() -> Vec<String> {
    std::env::args().skip(1).collect()
}
