use crate::binding::EditorBinding;
use crate::filter::ContactFilter;
use crate::model::ContactId;
use crate::store::ContactStore;
use crate::view::ListView;

/// Everything one user session owns: the store, the current filter, the
/// selection, the editor binding and the list computed from them.
///
/// Commands mutate this directly; the list is kept consistent by calling
/// [`Session::refresh_list`] after every filter change or store mutation.
#[derive(Debug)]
pub struct Session<S: ContactStore> {
    pub(crate) store: S,
    pub(crate) filter: ContactFilter,
    pub(crate) selection: Option<ContactId>,
    pub(crate) editor: EditorBinding,
    pub(crate) list: ListView,
}

impl<S: ContactStore> Session<S> {
    pub fn new(store: S) -> Self {
        let filter = ContactFilter::default();
        let list = ListView::compute(&store, &filter);
        Self {
            store,
            filter,
            selection: None,
            editor: EditorBinding::new(),
            list,
        }
    }

    pub(crate) fn refresh_list(&mut self) {
        self.list = ListView::compute(&self.store, &self.filter);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn filter(&self) -> &ContactFilter {
        &self.filter
    }

    pub fn selection(&self) -> Option<ContactId> {
        self.selection
    }

    pub fn editor(&self) -> &EditorBinding {
        &self.editor
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }
}
