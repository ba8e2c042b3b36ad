//! # API Facade
//!
//! [`AddressBookApi`] is the application controller and the single entry point
//! for any UI. It reacts to the user events of the address book screen:
//!
//! - search text changed → [`AddressBookApi::search_text_changed`]
//! - add clicked → [`AddressBookApi::add_contact`]
//! - remove clicked → [`AddressBookApi::remove_selected`]
//! - list selection changed → [`AddressBookApi::selection_changed`]
//!
//! plus editor input ([`AddressBookApi::edit_field`]) and selection by visible
//! row number ([`AddressBookApi::select_index`]).
//!
//! The facade normalizes inputs (row numbers into identities, field names into
//! [`Field`]) and dispatches to `commands/*.rs`. It does no I/O; the caller
//! renders from the returned [`CmdResult`] and the read accessors.
//!
//! Generic over [`ContactStore`] so tests and the CLI share the same code path.

use crate::binding::EditorBinding;
use crate::commands;
use crate::error::{AddressBookError, Result};
use crate::model::{ContactId, Field};
use crate::session::Session;
use crate::store::ContactStore;
use crate::view::ListView;

pub struct AddressBookApi<S: ContactStore> {
    session: Session<S>,
}

impl<S: ContactStore> AddressBookApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: Session::new(store),
        }
    }

    pub fn search_text_changed(&mut self, text: &str) -> Result<CmdResult> {
        commands::search::run(&mut self.session, text)
    }

    pub fn add_contact(&mut self) -> Result<CmdResult> {
        commands::add::run(&mut self.session)
    }

    pub fn remove_selected(&mut self) -> Result<CmdResult> {
        commands::remove::run(&mut self.session)
    }

    pub fn selection_changed(&mut self, selection: Option<ContactId>) -> Result<CmdResult> {
        commands::select::run(&mut self.session, selection)
    }

    /// Selects the contact shown at 1-based row `index` of the current list.
    pub fn select_index(&mut self, index: usize) -> Result<CmdResult> {
        let id = self
            .session
            .list()
            .resolve(index)
            .ok_or(AddressBookError::InvalidIndex(index))?;
        self.selection_changed(Some(id))
    }

    /// Edits a field of the bound contact. `field` may be a key
    /// (`first-name`) or a label (`First Name`).
    pub fn edit_field(&mut self, field: &str, value: impl Into<String>) -> Result<CmdResult> {
        let field: Field = field.parse()?;
        commands::edit::run(&mut self.session, field, value.into())
    }

    pub fn list(&self) -> &ListView {
        self.session.list()
    }

    pub fn editor(&self) -> &EditorBinding {
        self.session.editor()
    }

    /// The lowercased search query currently applied.
    pub fn query(&self) -> &str {
        self.session.filter().query()
    }

    pub fn selection(&self) -> Option<ContactId> {
        self.session.selection()
    }

    pub fn store(&self) -> &S {
        self.session.store()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, Refresh};
