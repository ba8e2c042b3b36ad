use crate::commands::{select, CmdMessage, CmdResult, Refresh};
use crate::error::Result;
use crate::filter::ContactFilter;
use crate::model::{ContactFields, Field};
use crate::session::Session;
use crate::store::ContactStore;

pub const NEW_FIRST_NAME: &str = "New";
pub const NEW_LAST_NAME: &str = "Contact";

/// Inserts a "New Contact" at the top of the store and selects it.
///
/// The filter is cleared first so the new row is guaranteed to be visible.
pub fn run<S: ContactStore>(session: &mut Session<S>) -> Result<CmdResult> {
    session.filter = ContactFilter::default();

    let fields = ContactFields::new()
        .with(Field::FirstName, NEW_FIRST_NAME)
        .with(Field::LastName, NEW_LAST_NAME);
    let id = session.store.insert_at(0, fields);
    session.refresh_list();
    tracing::debug!(%id, "contact added");

    let mut result = select::run(session, Some(id))?.with_refresh(Refresh::all());
    result.add_message(CmdMessage::success(format!(
        "Contact added: {} {}",
        NEW_FIRST_NAME, NEW_LAST_NAME
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingState;
    use crate::commands::search;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_selected_contact_to_empty_store() {
        let mut session = Session::new(InMemoryStore::new());

        let result = run(&mut session).unwrap();

        let all = session.store().all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].get(Field::FirstName), "New");
        assert_eq!(all[0].get(Field::LastName), "Contact");
        assert_eq!(session.selection(), Some(all[0].id));
        assert_eq!(session.editor().state(), BindingState::Bound(all[0].id));
        assert_eq!(result.affected[0].id, all[0].id);
    }

    #[test]
    fn new_contact_is_first_even_when_filtered() {
        let fixture = StoreFixture::new()
            .with_contact("Peter", "Smith")
            .with_contact("Alice", "Gordon");
        let mut session = Session::new(fixture.store);
        search::run(&mut session, "gordon").unwrap();

        run(&mut session).unwrap();

        let new_id = session.selection().unwrap();
        assert!(session.filter().is_empty());
        assert_eq!(session.store().all()[0].id, new_id);
        assert_eq!(session.list().rows()[0].contact.id, new_id);
        assert_eq!(session.list().len(), 3);
    }
}
