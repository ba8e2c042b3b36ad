use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style names referenced from the templates.
pub mod names {
    pub const HEADER: &str = "header";
    pub const INDEX: &str = "index";
    pub const ROW: &str = "row";
    pub const SELECTED: &str = "selected";
    pub const MARKER: &str = "marker";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static ADDRESSBOOK_THEME: Lazy<Theme> = Lazy::new(|| {
    let gray = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::INDEX, Style::new().yellow())
        .add(names::ROW, Style::new())
        .add(names::SELECTED, Style::new().cyan().bold())
        .add(names::MARKER, Style::new().cyan().bold())
        .add(names::LABEL, gray.clone())
        .add(names::MUTED, gray.italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
