use async_trait::async_trait;
use std::sync::Arc;
use userdeck_model::{User, UserId, UserPatch};

use crate::infrastructure::{
    api_client::ApiClient,
    api_routes::{USERS, utils},
    errors::{ApiOperation, ApiResult},
};

/// Remote operations on the users collection.
#[async_trait]
pub trait UserAdminService: Send + Sync {
    async fn list_users(&self) -> ApiResult<Vec<User>>;
    async fn get_user(&self, user_id: UserId) -> ApiResult<User>;
    async fn create_user(&self, user: &UserPatch) -> ApiResult<User>;
    async fn update_user(&self, user_id: UserId, user: &UserPatch) -> ApiResult<User>;
    async fn delete_user(&self, user_id: UserId) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.client.get(USERS, ApiOperation::List).await
    }

    async fn get_user(&self, user_id: UserId) -> ApiResult<User> {
        self.client
            .get(&utils::user_item(user_id), ApiOperation::Get)
            .await
    }

    async fn create_user(&self, user: &UserPatch) -> ApiResult<User> {
        self.client.post(USERS, user, ApiOperation::Create).await
    }

    async fn update_user(&self, user_id: UserId, user: &UserPatch) -> ApiResult<User> {
        // The body always names the record; an id already in the patch wins.
        let body = UserPatch {
            id: user.id.or(Some(user_id)),
            ..user.clone()
        };
        self.client
            .put(&utils::user_item(user_id), &body, ApiOperation::Update)
            .await
    }

    async fn delete_user(&self, user_id: UserId) -> ApiResult<()> {
        self.client
            .delete(&utils::user_item(user_id), ApiOperation::Delete)
            .await
    }
}
