//! In-memory gateway used by the store and update-loop unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use userdeck_model::{Company, User, UserId, UserPatch};

use crate::infrastructure::errors::{ApiError, ApiOperation, ApiResult};
use crate::infrastructure::services::UserAdminService;

#[derive(Debug, Default)]
pub struct MockUserAdminService {
    users: Mutex<Vec<User>>,
    failures: Mutex<HashMap<ApiOperation, StatusCode>>,
    calls: Mutex<Vec<ApiOperation>>,
}

impl MockUserAdminService {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    /// Make every later call of `operation` answer with `status`.
    pub fn fail(&self, operation: ApiOperation, status: StatusCode) {
        self.failures.lock().unwrap().insert(operation, status);
    }

    pub fn recover(&self, operation: ApiOperation) {
        self.failures.lock().unwrap().remove(&operation);
    }

    pub fn calls(&self) -> Vec<ApiOperation> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, operation: ApiOperation) -> ApiResult<()> {
        self.calls.lock().unwrap().push(operation);
        match self.failures.lock().unwrap().get(&operation) {
            Some(status) => Err(ApiError::from_status(operation, *status)),
            None => Ok(()),
        }
    }

    fn not_found(operation: ApiOperation) -> ApiError {
        ApiError::from_status(operation, StatusCode::NOT_FOUND)
    }
}

#[async_trait]
impl UserAdminService for MockUserAdminService {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.enter(ApiOperation::List)?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, user_id: UserId) -> ApiResult<User> {
        self.enter(ApiOperation::Get)?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| Self::not_found(ApiOperation::Get))
    }

    async fn create_user(&self, user: &UserPatch) -> ApiResult<User> {
        self.enter(ApiOperation::Create)?;
        // The fake server always hands out the same id, like JSONPlaceholder.
        let mut created = User::from_patch(user);
        created.id = 11;
        Ok(created)
    }

    async fn update_user(&self, user_id: UserId, user: &UserPatch) -> ApiResult<User> {
        self.enter(ApiOperation::Update)?;
        let users = self.users.lock().unwrap();
        let mut updated = users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| Self::not_found(ApiOperation::Update))?;
        updated.apply_patch(user);
        Ok(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> ApiResult<()> {
        self.enter(ApiOperation::Delete)?;
        let users = self.users.lock().unwrap();
        if users.iter().any(|u| u.id == user_id) {
            Ok(())
        } else {
            Err(Self::not_found(ApiOperation::Delete))
        }
    }
}

pub fn sample_user(id: UserId, name: &str, email: &str, company: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        company: Company {
            name: company.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The first three JSONPlaceholder users.
pub fn placeholder_users() -> Vec<User> {
    vec![
        sample_user(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
        sample_user(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
        sample_user(3, "Clementine Bauch", "Nathan@yesenia.net", "Romaguera-Jacobson"),
    ]
}
