use crate::filter::ContactFilter;
use crate::model::{Contact, ContactId};
use crate::store::ContactStore;

/// One visible row. `index` is the 1-based position in the filtered list,
/// which is how the user refers to rows.
#[derive(Debug, Clone)]
pub struct ListRow {
    pub index: usize,
    pub contact: Contact,
}

/// The filtered, ordered projection of the store currently shown.
///
/// Always recomputed from scratch; there is no incremental diffing.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<ListRow>,
}

impl ListView {
    pub fn compute<S: ContactStore>(store: &S, filter: &ContactFilter) -> Self {
        let rows: Vec<ListRow> = store
            .all()
            .into_iter()
            .filter(|contact| filter.matches(contact))
            .enumerate()
            .map(|(i, contact)| ListRow {
                index: i + 1,
                contact,
            })
            .collect();
        tracing::trace!(visible = rows.len(), query = filter.query(), "list recomputed");
        Self { rows }
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Maps a display index back to the contact identity.
    pub fn resolve(&self, index: usize) -> Option<ContactId> {
        index
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|row| row.contact.id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.rows.iter().any(|row| row.contact.id == *id)
    }
}
