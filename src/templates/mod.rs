//! Template selection and rendering
//!
//! Resolves which message template applies to a webhook event (operator
//! override first, then the merged-state special case, then the
//! registry) and executes it against the event snapshot with HTML
//! auto-escaping.

pub mod registry;

use minijinja::{AutoEscape, Environment, Output, State, UndefinedBehavior, Value};
use std::fmt::Write as _;

use crate::error::{NotifyError, Result};
use crate::events::TemplateData;

/// Template-author helper bounding free-text length.
///
/// Counts characters rather than bytes, so multi-byte input is never
/// split mid-character. Total over all lengths: a non-positive
/// `max_len` yields just the marker (or the input unchanged when it is
/// already empty).
fn truncate(text: String, max_len: i64) -> String {
    let max = usize::try_from(max_len).unwrap_or(0);
    if text.chars().count() <= max {
        return text;
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Escapes the characters Telegram's HTML parser cares about: `&`,
/// `<`, `>`, `"`, `'`. Everything else passes through, notably `/`,
/// which the engine's built-in HTML mode would rewrite to `&#x2f;` and
/// thereby mangle repository names, file paths, and URLs.
fn write_escaped(out: &mut Output, text: &str) -> std::result::Result<(), minijinja::Error> {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&#x27;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

fn telegram_html_formatter(
    out: &mut Output,
    _state: &State,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    if value.is_safe() {
        return Ok(write!(out, "{value}")?);
    }
    match value.as_str() {
        Some(text) => write_escaped(out, text),
        // numbers and other non-string scalars carry no markup
        None => Ok(write!(out, "{value}")?),
    }
}

/// Engine for one render. Every interpolation is escaped for Telegram
/// HTML (custom templates cannot opt out) and undefined lookups are
/// strict, so a bad field path fails instead of rendering empty.
fn engine<'a>() -> Environment<'a> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Custom("telegram-html"));
    env.set_formatter(telegram_html_formatter);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_function("truncate", truncate);
    env
}

/// Renders the notification message for one webhook event.
///
/// A non-empty `custom_template` is used verbatim as the template
/// source and the registry is never consulted. Otherwise the merged
/// predicate takes priority over the literal action (a "closed" action
/// with merged=true never reaches the plain closed template), then the
/// `event_name:action` registry key is tried.
///
/// Escaping inside href attributes rewrites `&` in query-bearing URLs.
/// GitHub URLs are clean ASCII, so default templates are unaffected;
/// only custom templates embedding arbitrary URLs can observe this.
pub fn render(data: &TemplateData, custom_template: &str) -> Result<String> {
    let source = if custom_template.is_empty() {
        select_default(data).ok_or_else(|| NotifyError::NoTemplate {
            event: data.event_name.clone(),
            action: data.action.clone(),
        })?
    } else {
        custom_template
    };

    let env = engine();
    let tmpl = env
        .template_from_str(source)
        .map_err(NotifyError::TemplateParse)?;

    tmpl.render(data).map_err(NotifyError::TemplateExecute)
}

fn select_default(data: &TemplateData) -> Option<&'static str> {
    if data.is_merged() {
        return registry::lookup(registry::MERGED_KEY);
    }
    registry::lookup(&format!("{}:{}", data.event_name, data.action))
}
