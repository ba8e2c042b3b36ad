use crate::commands::{CmdResult, Refresh};
use crate::error::Result;
use crate::model::ContactId;
use crate::session::Session;
use crate::store::ContactStore;

/// Applies a list selection change: binds the editor to the new contact, or
/// unbinds it when the selection becomes empty.
pub fn run<S: ContactStore>(
    session: &mut Session<S>,
    selection: Option<ContactId>,
) -> Result<CmdResult> {
    match selection {
        Some(id) => {
            session.editor.select(&session.store, id)?;
            session.selection = Some(id);
        }
        None => {
            session.editor.deselect();
            session.selection = None;
        }
    }

    let affected = match selection {
        Some(id) => vec![session.store.get(&id)?],
        None => Vec::new(),
    };
    Ok(CmdResult::default()
        .with_affected(affected)
        .with_refresh(Refresh::all()))
}
