//! Usage text rendering.
//!
//! The usage listing is a pure function of the table and a [`UsageLayout`]:
//! a heading, a column title, a rule, one line per descriptor in table
//! order, a closing rule and footer lines.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::types::OptionTable;

/// Layout settings for the usage listing.
///
/// # Examples
///
/// ```
/// use optable_core::UsageLayout;
///
/// let layout: UsageLayout = serde_yaml::from_str("description_column: 30").unwrap();
/// assert_eq!(layout.description_column, 30);
/// assert_eq!(layout.rule_width, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageLayout {
    /// Width of the option column; descriptions start one space after it.
    pub description_column: usize,
    /// Number of dashes in the rules above and below the option list.
    pub rule_width: usize,
    /// First line of the listing.
    pub heading: String,
    /// Title of the option column.
    pub column_title: String,
    /// Lines printed after the closing rule.
    pub footer: Vec<String>,
}

impl Default for UsageLayout {
    fn default() -> Self {
        Self {
            description_column: 38,
            rule_width: 80,
            heading: "Usage:".to_string(),
            column_title: "Short/long options (& argument)".to_string(),
            footer: vec!["[Use double-quotes around arguments]".to_string()],
        }
    }
}

/// Renders the usage listing for `table`.
///
/// Every descriptor is listed, required or not, in table order. Missing
/// forms and placeholders are rendered as a single blank.
///
/// # Examples
///
/// ```
/// use optable_core::*;
///
/// let table: OptionTable<()> = OptionTable::new()
///     .with_option(OptionDescriptor::with_argument("p", "port", "NUM").with_description("Port"));
///
/// let text = render_usage(&table, &UsageLayout::default());
/// assert!(text.contains(" -p   --port NUM                       Port\n"));
/// assert_eq!(text, render_usage(&table, &UsageLayout::default()));
/// ```
pub fn render_usage<C>(table: &OptionTable<C>, layout: &UsageLayout) -> String {
    let width = layout.description_column;
    let rule = "-".repeat(layout.rule_width);

    let mut text = String::new();
    text.push_str(&layout.heading);
    text.push('\n');
    text.push_str(&format!("{:<width$} Description\n", layout.column_title));
    text.push_str(&rule);
    text.push('\n');

    for option in table {
        let short = option
            .short_form()
            .map_or_else(|| " ".to_string(), |form| format!("{form} "));
        let long = option.long_form().unwrap_or_else(|| " ".to_string());
        let argument = if option.takes_argument() {
            option.argument.as_str()
        } else {
            " "
        };
        let forms = format!(" {short:<4} {long} {argument}");
        text.push_str(&format!("{forms:<width$} {}\n", option.description));
    }

    text.push_str(&rule);
    text.push('\n');
    for line in &layout.footer {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Writes the banner followed by the usage listing to `out`.
///
/// `banner` is called exactly once, before any usage text.
///
/// # Errors
///
/// Propagates any I/O error from `banner` or from writing to `out`.
pub fn write_usage<C, W, B>(
    out: &mut W,
    banner: B,
    table: &OptionTable<C>,
    layout: &UsageLayout,
) -> io::Result<()>
where
    W: Write,
    B: FnOnce(&mut W) -> io::Result<()>,
{
    banner(out)?;
    out.write_all(render_usage(table, layout).as_bytes())
}
