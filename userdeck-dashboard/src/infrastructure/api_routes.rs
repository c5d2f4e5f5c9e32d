//! Route table for the remote `/users` resource.

pub const USERS: &str = "/users";
pub const USER_ITEM: &str = "/users/{id}";

pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Path of a single user record.
    pub fn user_item(id: u64) -> String {
        replace_param(super::USER_ITEM, "{id}", id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_item_fills_the_id() {
        assert_eq!(utils::user_item(7), "/users/7");
        assert_eq!(utils::replace_param(USER_ITEM, "{id}", "abc"), "/users/abc");
    }
}
