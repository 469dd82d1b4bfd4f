//! # codetidy Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Thin wrapper around the Tera templating engine. Callers hand over a
//! template string and any `Serialize` value as the context; the result is
//! the rendered text.
//!
//! Autoescaping is turned off: the output is Markdown, not HTML, and file
//! contents quoted into it (code excerpts, paths) must come through verbatim.
//!
//! ## Examples
//!
//! ```rust
//! #[derive(Serialize)]
//! struct Ctx { title: String }
//!
//! let text = templating::render_markdown("readme", "# {{ title }}", &Ctx { title: "demo".into() })?;
//! assert_eq!(text, "# demo");
//! ```
//!
use crate::core::error::{CodetidyError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

/// # Render Markdown Template (`render_markdown`)
///
/// Renders `template` with the fields of `context` available as variables.
/// `name` only appears in error messages.
///
/// ## Errors
///
/// Returns `CodetidyError::Template` if the context cannot be serialized or
/// the template fails to parse or render.
pub fn render_markdown<T: Serialize>(name: &str, template: &str, context: &T) -> Result<String> {
    let tera_context = Context::from_serialize(context).map_err(|e| {
        anyhow!(CodetidyError::Template { source: e })
            .context(format!("Failed to build template context for '{}'", name))
    })?;
    let rendered = Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(CodetidyError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })?;
    debug!("Rendered template '{}' ({} bytes)", name, rendered.len());
    Ok(rendered)
}
