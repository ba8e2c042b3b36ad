use crate::commands::{CmdMessage, CmdResult, Refresh};
use crate::error::Result;
use crate::session::Session;
use crate::store::ContactStore;

/// Removes the selected contact. With nothing selected this is a no-op.
pub fn run<S: ContactStore>(session: &mut Session<S>) -> Result<CmdResult> {
    let Some(id) = session.selection else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No contact selected"));
        return Ok(result);
    };

    let removed = session.store.remove(&id);
    session.selection = None;
    if session.editor.bound_id() == Some(id) {
        session.editor.deselect();
    }
    session.refresh_list();
    tracing::debug!(%id, found = removed.is_some(), "contact removed");

    let mut result = CmdResult::default().with_refresh(Refresh::all());
    if let Some(contact) = removed {
        result.add_message(CmdMessage::success(format!(
            "Contact removed: {}",
            contact.display_name()
        )));
        result.affected.push(contact);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingState;
    use crate::commands::{add, select};
    use crate::error::AddressBookError;
    use crate::model::Field;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_bound_contact_and_unbinds() {
        let fixture = StoreFixture::new()
            .with_contact("Peter", "Smith")
            .with_contact("Alice", "Gordon");
        let peter = fixture.ids[0];
        let mut session = Session::new(fixture.store);
        select::run(&mut session, Some(peter)).unwrap();

        let result = run(&mut session).unwrap();

        assert_eq!(result.affected[0].id, peter);
        assert_eq!(session.editor().state(), BindingState::Unbound);
        assert_eq!(session.selection(), None);
        assert_eq!(session.list().len(), 1);
        assert!(matches!(
            session.store().get_field(&peter, Field::FirstName),
            Err(AddressBookError::NotFound(_))
        ));
    }

    #[test]
    fn without_selection_is_noop() {
        let fixture = StoreFixture::new().with_contacts(3);
        let mut session = Session::new(fixture.store);

        let result = run(&mut session).unwrap();

        assert_eq!(session.store().len(), 3);
        assert!(result.affected.is_empty());
        assert_eq!(result.refresh, Refresh::default());
    }

    #[test]
    fn add_then_remove_leaves_empty_store() {
        let mut session = Session::new(InMemoryStore::new());
        add::run(&mut session).unwrap();

        run(&mut session).unwrap();

        assert!(session.store().is_empty());
        assert!(session.list().is_empty());
        assert_eq!(session.editor().state(), BindingState::Unbound);
    }
}
