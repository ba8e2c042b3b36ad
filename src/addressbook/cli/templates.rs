//! # CLI Templates
//!
//! Terminal output goes through `outstanding` (minijinja) templates kept as
//! standalone files and included here as string constants.
//!
//! Templates use `{%- -%}` whitespace control everywhere and emit every line
//! break explicitly with `{{ "\n" }}`, so the template layout does not leak
//! into the output. Column widths and truncation are computed in Rust and
//! handed over as ready-made strings.
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const EDITOR_TEMPLATE: &str = include_str!("templates/editor.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const FIELDS_TEMPLATE: &str = include_str!("templates/fields.tmp");
