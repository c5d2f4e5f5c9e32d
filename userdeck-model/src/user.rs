//! Wire-level user records as served by the remote `/users` resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric identity of a user record.
pub type UserId = u64;

/// A user record exactly as the remote service describes it.
///
/// Only `id`, `name`, `email` and `company.name` are interpreted by the
/// dashboard. Everything else rides along untouched, including members the
/// model does not know about (kept in [`User::extra`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// A partial user record: the body of create/update calls and the source of
/// the local shallow merge after a successful update.
///
/// Absent members are skipped on the wire and left alone by
/// [`User::apply_patch`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl User {
    /// Shallow merge: every member present in `patch` replaces the
    /// corresponding member wholesale, absent members are preserved.
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(address) = &patch.address {
            self.address = address.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(website) = &patch.website {
            self.website = website.clone();
        }
        if let Some(company) = &patch.company {
            self.company = company.clone();
        }
    }

    /// Build a record from a partial, defaulting everything absent.
    pub fn from_patch(patch: &UserPatch) -> Self {
        let mut user = User::default();
        user.apply_patch(patch);
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leanne_json() -> Value {
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            },
            "favoriteColor": "teal"
        })
    }

    #[test]
    fn deserializes_placeholder_record_and_keeps_unknown_members() {
        let user: User = serde_json::from_value(leanne_json()).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.extra.get("favoriteColor"), Some(&json!("teal")));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, leanne_json());
    }

    #[test]
    fn sparse_record_fills_defaults() {
        let user: User =
            serde_json::from_value(json!({ "id": 7, "name": "Solo" })).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "");
        assert_eq!(user.company, Company::default());
    }

    #[test]
    fn patch_skips_absent_members_on_the_wire() {
        let patch = UserPatch {
            name: Some("Ada Lovelace".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "name": "Ada Lovelace" })
        );
    }

    #[test]
    fn apply_patch_is_shallow() {
        let mut user: User = serde_json::from_value(leanne_json()).unwrap();
        let patch = UserPatch {
            name: Some("Leanne Smith".into()),
            company: Some(Company {
                name: "Acme".into(),
                ..Default::default()
            }),
            ..Default::default()
        };

        user.apply_patch(&patch);

        assert_eq!(user.name, "Leanne Smith");
        assert_eq!(user.company.name, "Acme");
        assert_eq!(user.company.bs, "");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.phone, "1-770-736-8031 x56442");
        assert!(user.extra.contains_key("favoriteColor"));
    }
}
