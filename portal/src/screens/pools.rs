//! Pool list, detail and edit screen.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{Pool, PoolEditError, PoolEditForm};
use crate::selection::DetailSelection;
use crate::shell::{NavigationShell, PendingNavigation, Section, navigate_after};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolActionError {
    #[error("no pool with id {id}")]
    UnknownPool { id: String },
    #[error("no pool edit in progress")]
    NotEditing,
    #[error("pool edit rejected: {0}")]
    Edit(#[from] PoolEditError),
}

/// Which half of the pools screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolViewMode {
    #[default]
    List,
    Detail,
}

#[derive(Debug)]
pub struct PoolsScreen {
    pools: Vec<Pool>,
    details: DetailSelection<String>,
    edit: Option<PoolEditForm>,
    pending: Option<PendingNavigation>,
}

impl PoolsScreen {
    /// Opens on the list with nothing selected.
    pub fn new(pools: Vec<Pool>) -> Self {
        Self {
            pools,
            details: DetailSelection::default(),
            edit: None,
            pending: None,
        }
    }

    pub fn pools(&self) -> &[Pool] {
        self.pools.as_slice()
    }

    pub fn mode(&self) -> PoolViewMode {
        if self.details.is_open() {
            PoolViewMode::Detail
        } else {
            PoolViewMode::List
        }
    }

    /// Opens the detail view of `id`.
    ///
    /// # Errors
    ///
    /// [`PoolActionError::UnknownPool`] when no pool has that id.
    pub fn view_details(&mut self, id: &str) -> Result<&Pool, PoolActionError> {
        let index = self.index_of(id)?;
        self.details.open(id.to_owned());
        Ok(&self.pools[index])
    }

    /// Returns to the list, discarding any unsaved edit.
    pub fn back_to_list(&mut self) {
        self.details.close();
        self.edit = None;
    }

    pub fn selected(&self) -> Option<&Pool> {
        let id = self.details.selected()?;
        self.pools.iter().find(|pool| pool.id() == id)
    }

    /// Opens the edit dialog seeded from the pool's current values.
    pub fn start_edit(&mut self, id: &str) -> Result<&mut PoolEditForm, PoolActionError> {
        let index = self.index_of(id)?;
        Ok(self.edit.insert(PoolEditForm::for_pool(&self.pools[index])))
    }

    pub fn edit_form(&self) -> Option<&PoolEditForm> {
        self.edit.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut PoolEditForm> {
        self.edit.as_mut()
    }

    /// Validates the open edit and replaces the pool in the list.
    ///
    /// A rejected edit stays open with its field errors.
    pub fn save_edit(&mut self) -> Result<&Pool, PoolActionError> {
        let form = self.edit.as_mut().ok_or(PoolActionError::NotEditing)?;
        let updated = form.submit()?;
        let index = self.index_of(updated.id())?;
        info!(pool_id = updated.id(), "pool details saved");
        self.pools[index] = updated;
        self.edit = None;
        Ok(&self.pools[index])
    }

    /// Closes the edit dialog and drops its changes.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Schedules the switch to the services section.
    ///
    /// Replacing or dropping the screen cancels a switch that has not fired.
    pub fn book_service(&mut self, shell: Arc<Mutex<NavigationShell>>, delay: Duration) {
        self.pending = Some(navigate_after(shell, Section::Services, delay));
    }

    /// The "book service" navigation still waiting to apply.
    pub fn pending_navigation(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    /// Hands the scheduled navigation to the caller, if any.
    pub fn take_pending_navigation(&mut self) -> Option<PendingNavigation> {
        self.pending.take()
    }

    fn index_of(&self, id: &str) -> Result<usize, PoolActionError> {
        self.pools
            .iter()
            .position(|pool| pool.id() == id)
            .ok_or_else(|| PoolActionError::UnknownPool { id: id.to_owned() })
    }
}
