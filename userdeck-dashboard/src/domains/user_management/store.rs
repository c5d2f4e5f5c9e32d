//! The collection store: sole owner of the fetched records and of every
//! query parameter the dashboard derives its page from.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use userdeck_core::{
    from_form_data,
    query::{Page, UserQuery, paginate, run_query},
    to_display,
};
use userdeck_model::{
    PaginationState, SortConfig, SortKey, User, UserDisplay, UserFilters,
    UserFormData, UserId,
};

use crate::infrastructure::{ApiError, UserAdminService};

/// The page the front end renders, derived from the store on each read.
pub type VisiblePage = Page<UserDisplay>;

const LOAD_FALLBACK: &str = "An unexpected error occurred";
const ADD_FALLBACK: &str = "Failed to add user";
const UPDATE_FALLBACK: &str = "Failed to update user";
const DELETE_FALLBACK: &str = "Failed to delete user";

/// Message shown for a failed call: the error's own text, or `fallback`
/// when it has none worth showing.
fn failure_message(err: &ApiError, fallback: &str) -> String {
    if err.is_unexpected() {
        fallback.to_string()
    } else {
        err.to_string()
    }
}

pub struct UserStore {
    service: Arc<dyn UserAdminService>,
    users: Vec<User>,
    search_term: String,
    filters: UserFilters,
    sort: SortConfig,
    pagination: PaginationState,
    loading: bool,
    error: Option<String>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("users", &self.users.len())
            .field("search_term", &self.search_term)
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("pagination", &self.pagination)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

impl UserStore {
    pub fn new(service: Arc<dyn UserAdminService>) -> Self {
        Self {
            service,
            users: Vec::new(),
            search_term: String::new(),
            filters: UserFilters::default(),
            sort: SortConfig::default(),
            pagination: PaginationState::default(),
            loading: false,
            error: None,
        }
    }

    /// Same as [`UserStore::new`] with a non-default page size.
    pub fn with_page_size(service: Arc<dyn UserAdminService>, page_size: usize) -> Self {
        let mut store = Self::new(service);
        store.pagination.page_size = page_size.max(1);
        store
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Display projection of one record, whether or not it is on the
    /// current page.
    pub fn display(&self, id: UserId) -> Option<UserDisplay> {
        self.user(id).map(to_display)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &UserFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a search term or any filter currently narrows the list.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || !self.filters.is_empty()
    }

    /// Fetch the full collection, replacing what the store holds.
    ///
    /// On failure the previous records stay in place and the message is
    /// kept for the error banner.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.service.list_users().await {
            Ok(users) => {
                info!("Successfully loaded {} users", users.len());
                self.pagination.total_items = users.len();
                self.users = users;
            }
            Err(e) => {
                error!("Failed to load users: {}", e);
                self.error = Some(failure_message(&e, LOAD_FALLBACK));
            }
        }

        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Clear the banner and start over with a full reload.
    pub async fn dismiss_error(&mut self) {
        self.error = None;
        self.load().await;
    }

    /// Create a record from `form` and put it at the front of the list.
    ///
    /// The id the remote hands back is not trusted; the local id is one past
    /// the largest id held when the call started (1 for an empty set).
    pub async fn add(&mut self, form: &UserFormData) -> bool {
        self.error = None;
        let max_id = self.users.iter().map(|u| u.id).max().unwrap_or(0);
        let Some(next_id) = max_id.checked_add(1) else {
            warn!("No local id left for a new user");
            self.error = Some(ADD_FALLBACK.to_string());
            return false;
        };
        let patch = from_form_data(form, None);

        match self.service.create_user(&patch).await {
            Ok(mut created) => {
                created.id = next_id;
                info!("Created user {} ({})", created.id, created.name);
                self.users.insert(0, created);
                self.pagination.total_items = self.users.len();
                true
            }
            Err(e) => {
                warn!("Failed to create user: {}", e);
                self.error = Some(failure_message(&e, ADD_FALLBACK));
                false
            }
        }
    }

    /// Send the edited form and merge what was sent into the local record.
    pub async fn update(&mut self, id: UserId, form: &UserFormData) -> bool {
        self.error = None;
        let patch = from_form_data(form, Some(id));

        match self.service.update_user(id, &patch).await {
            Ok(_) => {
                match self.users.iter_mut().find(|u| u.id == id) {
                    Some(user) => user.apply_patch(&patch),
                    None => debug!("Updated user {} is not held locally", id),
                }
                info!("Updated user {}", id);
                true
            }
            Err(e) => {
                warn!("Failed to update user {}: {}", id, e);
                self.error = Some(failure_message(&e, UPDATE_FALLBACK));
                false
            }
        }
    }

    pub async fn remove(&mut self, id: UserId) -> bool {
        self.error = None;

        match self.service.delete_user(id).await {
            Ok(()) => {
                self.users.retain(|u| u.id != id);
                self.pagination.total_items = self.users.len();
                info!("Deleted user {}", id);
                true
            }
            Err(e) => {
                warn!("Failed to delete user {}: {}", id, e);
                self.error = Some(failure_message(&e, DELETE_FALLBACK));
                false
            }
        }
    }

    /// Fetch one record straight from the remote without touching the
    /// collection. Failures land in the banner like any other call.
    pub async fn fetch(&mut self, id: UserId) -> Option<User> {
        self.error = None;

        match self.service.get_user(id).await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Failed to fetch user {}: {}", id, e);
                self.error = Some(failure_message(&e, LOAD_FALLBACK));
                None
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_filters(&mut self, filters: UserFilters) {
        self.filters = filters;
    }

    /// Header activation: the active key flips direction, a new key starts
    /// ascending.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = self.sort.activate(key);
    }

    pub fn set_sort_config(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    /// Change the page size and go back to the first page. Zero counts as 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.current_page = 1;
    }

    /// Jump to `page`. Out-of-range pages are kept and render empty.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.current_page = page;
    }

    /// Drop the search term and every filter, then go back to page 1.
    pub fn clear_filters(&mut self) {
        self.filters = UserFilters::default();
        self.search_term.clear();
        self.pagination.current_page = 1;
    }

    pub fn query(&self) -> UserQuery {
        UserQuery {
            search: self.search_term.clone(),
            filters: self.filters.clone(),
            sort: self.sort,
        }
    }

    /// Run search, filters, sort and pagination over the current records.
    pub fn visible_page(&self) -> VisiblePage {
        let rows = run_query(&self.users, &self.query());
        paginate(
            &rows,
            self.pagination.current_page,
            self.pagination.page_size,
        )
    }
}
