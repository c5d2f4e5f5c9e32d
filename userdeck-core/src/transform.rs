use userdeck_model::{
    Address, Company, User, UserDisplay, UserFormData, UserId, UserPatch,
};

/// Split the record's full name into first/last and pick out the fields the
/// form edits.
///
/// The first whitespace-delimited token becomes the first name; every other
/// token is re-joined with single spaces into the last name.
pub fn to_form_data(user: &User) -> UserFormData {
    let mut parts = user.name.split_whitespace();
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");

    UserFormData {
        first_name,
        last_name,
        email: user.email.clone(),
        department: user.company.name.clone(),
    }
}

/// Shape form data into the partial record sent on create/update.
///
/// Attributes the form does not edit are reset to empty values, matching
/// what the dashboard has always submitted. `id` is only included for
/// updates.
pub fn from_form_data(form: &UserFormData, id: Option<UserId>) -> UserPatch {
    UserPatch {
        id,
        name: Some(
            format!("{} {}", form.first_name, form.last_name)
                .trim()
                .to_string(),
        ),
        username: None,
        email: Some(form.email.clone()),
        address: Some(Address::default()),
        phone: Some(String::new()),
        website: Some(String::new()),
        company: Some(Company {
            name: form.department.clone(),
            catch_phrase: String::new(),
            bs: String::new(),
        }),
    }
}

pub fn to_display(user: &User) -> UserDisplay {
    let UserFormData {
        first_name,
        last_name,
        email,
        department,
    } = to_form_data(user);

    UserDisplay {
        id: user.id,
        first_name,
        last_name,
        email,
        department,
    }
}

/// Seed the edit form from a table row.
pub fn display_to_form(display: &UserDisplay) -> UserFormData {
    UserFormData {
        first_name: display.first_name.clone(),
        last_name: display.last_name.clone(),
        email: display.email.clone(),
        department: display.department.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, name: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            company: Company {
                name: company.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn splits_on_first_whitespace_run() {
        let form = to_form_data(&user(3, "Clementine   du  Bauch", "Acme"));
        assert_eq!(form.first_name, "Clementine");
        assert_eq!(form.last_name, "du Bauch");
        assert_eq!(form.department, "Acme");
    }

    #[test]
    fn single_token_name_has_empty_last_name() {
        let form = to_form_data(&user(1, "Cher", "Acme"));
        assert_eq!(form.first_name, "Cher");
        assert_eq!(form.last_name, "");
    }

    #[test]
    fn missing_name_yields_empty_strings() {
        let form = to_form_data(&user(1, "   ", "Acme"));
        assert_eq!(form.first_name, "");
        assert_eq!(form.last_name, "");
    }

    #[test]
    fn from_form_data_blanks_unedited_attributes() {
        let form = UserFormData {
            first_name: "Ada".into(),
            last_name: "".into(),
            email: "ada@example.com".into(),
            department: "Engines".into(),
        };

        let patch = from_form_data(&form, None);
        assert_eq!(patch.id, None);
        assert_eq!(patch.name.as_deref(), Some("Ada"));
        assert_eq!(patch.phone.as_deref(), Some(""));
        assert_eq!(patch.address, Some(Address::default()));
        assert_eq!(patch.username, None);
        assert_eq!(patch.company.unwrap().name, "Engines");

        let patch = from_form_data(&form, Some(4));
        assert_eq!(patch.id, Some(4));
    }

    #[test]
    fn display_carries_the_record_id() {
        let display = to_display(&user(9, "Glenna Reichert", "Yost and Sons"));
        assert_eq!(display.id, 9);
        assert_eq!(display.last_name, "Reichert");
        assert_eq!(
            display_to_form(&display),
            to_form_data(&user(9, "Glenna Reichert", "Yost and Sons"))
        );
    }
}
