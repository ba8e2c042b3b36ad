use addressbook::api::AddressBookApi;
use addressbook::binding::BindingState;
use addressbook::error::AddressBookError;
use addressbook::model::{ContactFields, ContactId, Field};
use addressbook::store::memory::InMemoryStore;
use addressbook::store::ContactStore;

fn seeded(names: &[(&str, &str)]) -> (AddressBookApi<InMemoryStore>, Vec<ContactId>) {
    let mut store = InMemoryStore::new();
    let ids = names
        .iter()
        .map(|(first, last)| {
            store.push(
                ContactFields::new()
                    .with(Field::FirstName, *first)
                    .with(Field::LastName, *last),
            )
        })
        .collect();
    (AddressBookApi::new(store), ids)
}

fn visible(api: &AddressBookApi<InMemoryStore>) -> Vec<ContactId> {
    api.list().rows().iter().map(|r| r.contact.id).collect()
}

#[test]
fn search_then_clear_restores_original_order() {
    let (mut api, ids) = seeded(&[("Peter", "Smith"), ("Alice", "Gordon")]);

    api.search_text_changed("smith").unwrap();
    assert_eq!(visible(&api), vec![ids[0]]);

    api.search_text_changed("").unwrap();
    assert_eq!(visible(&api), ids);
}

#[test]
fn filtering_preserves_relative_order() {
    let (mut api, _) = seeded(&[
        ("Rita", "Ross"),
        ("Dan", "Brown"),
        ("Rene", "Rowling"),
        ("Nina", "Tate"),
        ("Rita", "Barks"),
    ]);
    let store_order: Vec<ContactId> = api.store().all().iter().map(|c| c.id).collect();

    for query in ["r", "ro", "rita", "a", "zz", ""] {
        api.search_text_changed(query).unwrap();
        let shown = visible(&api);
        let positions: Vec<usize> = shown
            .iter()
            .map(|id| store_order.iter().position(|s| s == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query:?}");
    }
}

#[test]
fn add_is_first_and_bound_regardless_of_filter() {
    let (mut api, _) = seeded(&[("Peter", "Smith"), ("Alice", "Gordon")]);
    api.search_text_changed("gordon").unwrap();

    api.add_contact().unwrap();

    let new_id = api.selection().unwrap();
    assert_eq!(api.store().all()[0].id, new_id);
    assert_eq!(visible(&api)[0], new_id);
    assert_eq!(api.editor().state(), BindingState::Bound(new_id));
    assert_eq!(api.query(), "");
}

#[test]
fn edits_need_no_commit() {
    let (mut api, ids) = seeded(&[("Peter", "Smith")]);
    api.selection_changed(Some(ids[0])).unwrap();

    api.edit_field("first-name", "X").unwrap();

    assert_eq!(api.store().get_field(&ids[0], Field::FirstName).unwrap(), "X");
}

#[test]
fn removing_bound_contact_unbinds_editor() {
    let (mut api, ids) = seeded(&[("Peter", "Smith"), ("Alice", "Gordon")]);
    api.selection_changed(Some(ids[1])).unwrap();

    api.remove_selected().unwrap();

    assert_eq!(api.editor().state(), BindingState::Unbound);
    assert!(matches!(
        api.store().get_field(&ids[1], Field::FirstName),
        Err(AddressBookError::NotFound(_))
    ));
    assert_eq!(visible(&api), vec![ids[0]]);
}

#[test]
fn add_then_remove_on_empty_store() {
    let mut api = AddressBookApi::new(InMemoryStore::new());

    api.add_contact().unwrap();
    let contacts = api.store().all();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].get(Field::FirstName), "New");
    assert_eq!(contacts[0].get(Field::LastName), "Contact");
    assert_eq!(api.selection(), Some(contacts[0].id));

    api.remove_selected().unwrap();
    assert!(api.store().is_empty());
    assert_eq!(api.editor().state(), BindingState::Unbound);
}

#[test]
fn identities_are_not_reused() {
    let mut api = AddressBookApi::new(InMemoryStore::new());
    let mut seen = Vec::new();
    for _ in 0..20 {
        api.add_contact().unwrap();
        let id = api.selection().unwrap();
        assert!(!seen.contains(&id));
        seen.push(id);
        api.remove_selected().unwrap();
    }
}
