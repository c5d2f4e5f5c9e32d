//! User management domain
//!
//! Owns the collection store plus the transient UI state around it: the
//! open form, the filter panel draft and a delete waiting for confirmation.

pub mod form;
pub mod messages;
pub mod store;
pub mod update;

pub use form::{FormMode, UserForm};
pub use messages::{Message, UserManagementEvent};
pub use store::{UserStore, VisiblePage};

use userdeck_model::{UserFilters, UserId};

/// User management domain state
#[derive(Debug)]
pub struct UserManagementDomainState {
    pub store: UserStore,
    pub form: Option<UserForm>,
    /// Filter panel contents; only reach the store on apply.
    pub filter_draft: UserFilters,
    pub pending_delete: Option<UserId>,
}

impl UserManagementDomainState {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            form: None,
            filter_draft: UserFilters::default(),
            pending_delete: None,
        }
    }
}

#[derive(Debug)]
pub struct UserManagementDomain {
    pub state: UserManagementDomainState,
}

impl UserManagementDomain {
    pub fn new(state: UserManagementDomainState) -> Self {
        Self { state }
    }

    pub async fn update(&mut self, message: Message) -> Vec<UserManagementEvent> {
        update::update_user_management(&mut self.state, message).await
    }
}
