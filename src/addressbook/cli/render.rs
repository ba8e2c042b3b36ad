//! # Rendering Module
//!
//! Styled terminal output via the `outstanding` crate.
//!
//! Layout math (column widths, truncation, padding) stays in Rust because it
//! needs Unicode-aware width handling. Templates only pick styles from
//! semantic fields (`index_style`, `text_style`) and lay out lines.

use super::styles::{names, ADDRESSBOOK_THEME};
use super::templates::{EDITOR_TEMPLATE, FIELDS_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE};
use addressbook::api::{CmdMessage, MessageLevel};
use addressbook::binding::EditorBinding;
use addressbook::model::{ContactId, Field};
use addressbook::view::ListView;
use outstanding::{render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const SELECTED_MARKER: &str = "> ";
const MARKER_WIDTH: usize = 2;
const MAX_LINE_WIDTH: usize = 1000;

/// Width settings for the contact list.
#[derive(Debug, Clone, Copy)]
pub struct ListLayout {
    pub line_width: usize,
    /// Maximum rows printed; 0 prints everything.
    pub limit: usize,
}

#[derive(Serialize)]
struct RowData {
    marker: String,
    index: String,
    columns: String,
    index_style: String,
    text_style: String,
}

#[derive(Serialize)]
struct ListData {
    header: String,
    rows: Vec<RowData>,
    empty: bool,
    empty_message: String,
    hidden: usize,
    more_message: String,
}

#[derive(Serialize)]
struct EditorFieldData {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct EditorData {
    visible: bool,
    title: String,
    fields: Vec<EditorFieldData>,
    hidden_message: String,
}

#[derive(Serialize)]
struct FieldKeyData {
    key: String,
    padding: String,
    label: String,
}

#[derive(Serialize)]
struct FieldsData {
    fields: Vec<FieldKeyData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Column widths for the three visible list columns.
struct Columns {
    first: usize,
    last: usize,
    company: usize,
}

impl Columns {
    fn for_width(available: usize) -> Self {
        let first = available / 10 * 3;
        let last = first;
        let company = available.saturating_sub(first.saturating_add(last).saturating_add(2));
        Self {
            first,
            last,
            company,
        }
    }

    fn format(&self, first: &str, last: &str, company: &str) -> String {
        format!(
            "{} {} {}",
            fit_to_width(first, self.first),
            fit_to_width(last, self.last),
            truncate_to_width(company, self.company)
        )
        .trim_end()
        .to_string()
    }
}

/// Renders the visible contact list with First Name, Last Name and Company.
pub fn render_list(
    list: &ListView,
    selection: Option<ContactId>,
    layout: ListLayout,
    use_color: bool,
) -> String {
    let digits = list.len().max(1).to_string().len();
    let index_width = digits + 2;
    let columns = Columns::for_width(
        layout
            .line_width
            .min(MAX_LINE_WIDTH)
            .saturating_sub(MARKER_WIDTH + index_width),
    );

    let shown = if layout.limit == 0 {
        list.len()
    } else {
        layout.limit.min(list.len())
    };
    let hidden = list.len() - shown;

    let rows = list.rows()[..shown]
        .iter()
        .map(|row| {
            let is_selected = selection == Some(row.contact.id);
            RowData {
                marker: if is_selected {
                    SELECTED_MARKER.to_string()
                } else {
                    " ".repeat(MARKER_WIDTH)
                },
                index: format!("{:>digits$}. ", row.index),
                columns: columns.format(
                    row.contact.get(Field::FirstName),
                    row.contact.get(Field::LastName),
                    row.contact.get(Field::Company),
                ),
                index_style: names::INDEX.to_string(),
                text_style: if is_selected {
                    names::SELECTED.to_string()
                } else {
                    names::ROW.to_string()
                },
            }
        })
        .collect();

    let header = format!(
        "{}{}",
        " ".repeat(MARKER_WIDTH + index_width),
        columns.format(
            Field::FirstName.label(),
            Field::LastName.label(),
            Field::Company.label()
        )
    );

    let data = ListData {
        header,
        rows,
        empty: list.is_empty(),
        empty_message: "No contacts.".to_string(),
        hidden,
        more_message: format!("  … and {} more (search to narrow the list)", hidden),
    };

    render_with_color(
        LIST_TEMPLATE,
        &data,
        ThemeChoice::from(&*ADDRESSBOOK_THEME),
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the editor form: one labelled line per field, in schema order.
pub fn render_editor(editor: &EditorBinding, use_color: bool) -> String {
    let label_width = Field::ALL
        .iter()
        .map(|f| f.label().width())
        .max()
        .unwrap_or(0)
        + 2;

    let fields = editor
        .fields()
        .map(|(field, value)| EditorFieldData {
            label: format!("{:<label_width$}", format!("{}:", field.label())),
            value: value.to_string(),
        })
        .collect();

    let name = format!(
        "{} {}",
        editor.value(Field::FirstName),
        editor.value(Field::LastName)
    );
    let name = name.trim();

    let data = EditorData {
        visible: editor.is_visible(),
        title: if name.is_empty() {
            "Editing (unnamed contact)".to_string()
        } else {
            format!("Editing {}", name)
        },
        fields,
        hidden_message: "No contact selected.".to_string(),
    };

    render_with_color(
        EDITOR_TEMPLATE,
        &data,
        ThemeChoice::from(&*ADDRESSBOOK_THEME),
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the editable field names accepted by `set`.
pub fn render_fields(use_color: bool) -> String {
    let key_width = Field::ALL
        .iter()
        .map(|f| f.key().width())
        .max()
        .unwrap_or(0)
        + 2;

    let fields = Field::ALL
        .iter()
        .map(|f| FieldKeyData {
            key: f.key().to_string(),
            padding: " ".repeat(key_width - f.key().width()),
            label: f.label().to_string(),
        })
        .collect();

    render_with_color(
        FIELDS_TEMPLATE,
        &FieldsData { fields },
        ThemeChoice::from(&*ADDRESSBOOK_THEME),
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_with_color(
        MESSAGES_TEMPLATE,
        &data,
        ThemeChoice::from(&*ADDRESSBOOK_THEME),
        use_color,
    )
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width - 1;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn fit_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}
