use crate::commands::{CmdMessage, CmdResult, Refresh};
use crate::error::Result;
use crate::filter::ContactFilter;
use crate::session::Session;
use crate::store::ContactStore;

/// Replaces the filter and recomputes the list. The selection is kept even
/// if the selected contact no longer matches; a warning says so.
pub fn run<S: ContactStore>(session: &mut Session<S>, text: &str) -> Result<CmdResult> {
    session.filter = ContactFilter::new(text);
    session.refresh_list();
    tracing::debug!(query = session.filter.query(), visible = session.list.len(), "search");

    let mut result = CmdResult::default().with_refresh(Refresh::list());
    if session.list.is_empty() && !session.filter.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts match \"{}\"",
            text
        )));
    }
    if let Some(selected) = session.selection {
        if !session.list.contains(&selected) {
            result.add_message(CmdMessage::warning("Selected contact is hidden by the search"));
        }
    }
    Ok(result)
}
