use tracing::{debug, info, warn};

use crate::domains::user_management::{
    UserManagementDomainState,
    form::{FormMode, UserForm},
    messages::{Message, UserManagementEvent},
};

/// Handle user management domain messages
pub async fn update_user_management(
    state: &mut UserManagementDomainState,
    message: Message,
) -> Vec<UserManagementEvent> {
    debug!("User management update: {}", message.name());

    match message {
        // Collection
        Message::LoadUsers | Message::Refresh => {
            info!("Loading users from server");
            state.store.load().await;
            loaded_or_failed(state)
        }

        Message::DismissError => {
            state.store.dismiss_error().await;
            loaded_or_failed(state)
        }

        // Search, filters and sorting
        Message::SearchChanged(term) => {
            state.store.set_search_term(term);
            Vec::new()
        }

        Message::FilterDraftChanged(field, value) => {
            state.filter_draft.set(field, value);
            Vec::new()
        }

        Message::ApplyFilters => {
            state.store.set_filters(state.filter_draft.clone());
            Vec::new()
        }

        Message::ClearFilters => {
            state.filter_draft = Default::default();
            state.store.clear_filters();
            Vec::new()
        }

        Message::SortBy(key) => {
            state.store.set_sort(key);
            Vec::new()
        }

        Message::SortChanged(sort) => {
            state.store.set_sort_config(sort);
            Vec::new()
        }

        // Pagination
        Message::PageChanged(page) => {
            state.store.set_page(page);
            Vec::new()
        }

        Message::PageSizeChanged(size) => {
            state.store.set_page_size(size);
            Vec::new()
        }

        // Create / edit form
        Message::OpenAddForm => {
            state.form = Some(UserForm::add());
            Vec::new()
        }

        Message::OpenEditForm(user_id) => {
            match state.store.display(user_id) {
                Some(row) => state.form = Some(UserForm::edit(&row)),
                None => warn!("Cannot edit unknown user {}", user_id),
            }
            Vec::new()
        }

        Message::FormFieldChanged(field, value) => {
            if let Some(form) = state.form.as_mut() {
                form.set_field(field, value);
            }
            Vec::new()
        }

        Message::SubmitForm => submit_form(state).await,

        Message::CancelForm => {
            state.form = None;
            Vec::new()
        }

        // User deletion
        Message::DeleteUser(user_id) => {
            let Some(user) = state.store.user(user_id) else {
                warn!("Cannot delete unknown user {}", user_id);
                return Vec::new();
            };
            let prompt = format!("Are you sure you want to delete {}?", user.name);
            state.pending_delete = Some(user_id);
            vec![UserManagementEvent::DeleteConfirmationRequested { user_id, prompt }]
        }

        Message::DeleteUserConfirm(user_id) => {
            state.pending_delete = None;
            if state.store.remove(user_id).await {
                vec![UserManagementEvent::UserDeleted(user_id)]
            } else {
                failed(state)
            }
        }

        Message::DeleteUserCancel => {
            debug!("Delete cancelled");
            state.pending_delete = None;
            Vec::new()
        }
    }
}

async fn submit_form(state: &mut UserManagementDomainState) -> Vec<UserManagementEvent> {
    let Some(form) = state.form.as_mut() else {
        return Vec::new();
    };

    if !form.validate() {
        debug!("Form rejected: {}", form.errors);
        return vec![UserManagementEvent::FormRejected];
    }

    form.submitting = true;
    let mode = form.mode;
    let data = form.data.clone();

    let event = match mode {
        FormMode::Add => {
            if state.store.add(&data).await {
                let created = state.store.users().first();
                created.map(|u| UserManagementEvent::UserCreated(u.id))
            } else {
                None
            }
        }
        FormMode::Edit(user_id) => state
            .store
            .update(user_id, &data)
            .await
            .then_some(UserManagementEvent::UserUpdated(user_id)),
    };

    match event {
        Some(event) => {
            state.form = None;
            vec![event]
        }
        None => {
            if let Some(form) = state.form.as_mut() {
                form.submitting = false;
            }
            failed(state)
        }
    }
}

fn loaded_or_failed(state: &UserManagementDomainState) -> Vec<UserManagementEvent> {
    if state.store.error().is_some() {
        failed(state)
    } else {
        vec![UserManagementEvent::UsersLoaded(state.store.users().len())]
    }
}

fn failed(state: &UserManagementDomainState) -> Vec<UserManagementEvent> {
    let message = state.store.error().unwrap_or_default().to_string();
    vec![UserManagementEvent::OperationFailed(message)]
}
