//! # Userdeck Dashboard
//!
//! The stateful half of Userdeck: the reqwest gateway to the remote users
//! resource, the [`UserStore`](domains::user_management::UserStore) that owns
//! the fetched collection and its query parameters, the message/update loop
//! a front end drives it with, configuration and the terminal renderer used
//! by the `userdeck` binary.

#![allow(missing_docs)]

pub mod config;
pub mod domains;
pub mod infrastructure;
pub mod view;

pub use config::{Config, ConfigError};
pub use domains::user_management::{
    Message, UserManagementDomain, UserManagementDomainState, UserManagementEvent,
    UserStore, VisiblePage,
};
pub use infrastructure::{
    ApiClient, ApiError, ApiOperation, UserAdminApiAdapter, UserAdminService,
};
