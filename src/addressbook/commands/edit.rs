use crate::commands::{CmdResult, Refresh};
use crate::error::Result;
use crate::model::Field;
use crate::session::Session;
use crate::store::ContactStore;

/// Writes one editor field through to the bound contact.
///
/// The list is recomputed too: an edit can change a visible column or
/// whether the contact still matches the filter.
pub fn run<S: ContactStore>(
    session: &mut Session<S>,
    field: Field,
    value: String,
) -> Result<CmdResult> {
    session.editor.edit(&mut session.store, field, value)?;
    session.refresh_list();

    let affected = match session.editor.bound_id() {
        Some(id) => vec![session.store.get(&id)?],
        None => Vec::new(),
    };
    Ok(CmdResult::default()
        .with_affected(affected)
        .with_refresh(Refresh::all()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{search, select};
    use crate::error::AddressBookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn edit_is_visible_in_store_without_commit() {
        let fixture = StoreFixture::new().with_contact("Peter", "Smith");
        let peter = fixture.ids[0];
        let mut session = Session::new(fixture.store);
        select::run(&mut session, Some(peter)).unwrap();

        run(&mut session, Field::FirstName, "X".into()).unwrap();

        assert_eq!(
            session.store().get_field(&peter, Field::FirstName).unwrap(),
            "X"
        );
        assert_eq!(session.list().rows()[0].contact.get(Field::FirstName), "X");
    }

    #[test]
    fn edit_can_drop_contact_from_filtered_list() {
        let fixture = StoreFixture::new()
            .with_contact("Peter", "Smith")
            .with_contact("Alice", "Smith");
        let peter = fixture.ids[0];
        let mut session = Session::new(fixture.store);
        search::run(&mut session, "smith").unwrap();
        select::run(&mut session, Some(peter)).unwrap();

        run(&mut session, Field::LastName, "Brown".into()).unwrap();

        assert_eq!(session.list().len(), 1);
        assert_eq!(session.editor().bound_id(), Some(peter));
    }

    #[test]
    fn edit_without_selection_fails() {
        let fixture = StoreFixture::new().with_contact("Peter", "Smith");
        let mut session = Session::new(fixture.store);

        let err = run(&mut session, Field::City, "Turku".into()).unwrap_err();
        assert!(matches!(err, AddressBookError::NoSelection));
    }
}
