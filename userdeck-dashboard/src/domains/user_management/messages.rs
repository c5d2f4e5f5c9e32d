use userdeck_model::{SortConfig, SortKey, UserField, UserId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    // Collection
    LoadUsers,
    Refresh,
    DismissError,

    // Search, filters and sorting
    SearchChanged(String),
    FilterDraftChanged(UserField, String),
    ApplyFilters,
    ClearFilters,
    SortBy(SortKey),
    SortChanged(SortConfig),

    // Pagination
    PageChanged(usize),
    PageSizeChanged(usize),

    // Create / edit form
    OpenAddForm,
    OpenEditForm(UserId),
    FormFieldChanged(UserField, String),
    SubmitForm,
    CancelForm,

    // User deletion
    DeleteUser(UserId),
    DeleteUserConfirm(UserId),
    DeleteUserCancel,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            // Collection
            Self::LoadUsers => "UserManagement::LoadUsers",
            Self::Refresh => "UserManagement::Refresh",
            Self::DismissError => "UserManagement::DismissError",

            // Search, filters and sorting
            Self::SearchChanged(_) => "UserManagement::SearchChanged",
            Self::FilterDraftChanged(_, _) => "UserManagement::FilterDraftChanged",
            Self::ApplyFilters => "UserManagement::ApplyFilters",
            Self::ClearFilters => "UserManagement::ClearFilters",
            Self::SortBy(_) => "UserManagement::SortBy",
            Self::SortChanged(_) => "UserManagement::SortChanged",

            // Pagination
            Self::PageChanged(_) => "UserManagement::PageChanged",
            Self::PageSizeChanged(_) => "UserManagement::PageSizeChanged",

            // Create / edit form
            Self::OpenAddForm => "UserManagement::OpenAddForm",
            Self::OpenEditForm(_) => "UserManagement::OpenEditForm",
            Self::FormFieldChanged(_, _) => "UserManagement::FormFieldChanged",
            Self::SubmitForm => "UserManagement::SubmitForm",
            Self::CancelForm => "UserManagement::CancelForm",

            // User deletion
            Self::DeleteUser(_) => "UserManagement::DeleteUser",
            Self::DeleteUserConfirm(_) => "UserManagement::DeleteUserConfirm",
            Self::DeleteUserCancel => "UserManagement::DeleteUserCancel",
        }
    }
}

/// What an update produced that the front end may want to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserManagementEvent {
    UsersLoaded(usize),
    UserCreated(UserId),
    UserUpdated(UserId),
    UserDeleted(UserId),
    /// A delete is waiting for a yes/no answer.
    DeleteConfirmationRequested { user_id: UserId, prompt: String },
    /// The form failed local validation and was not sent.
    FormRejected,
    /// A remote call failed; the message is also in the store's banner.
    OperationFailed(String),
}
