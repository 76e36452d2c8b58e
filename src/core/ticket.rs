use crate::core::form_data::FormData;
use serde::{Deserialize, Serialize};

/// Snapshot of the form taken by the last successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    full_name: String,
    email: String,
    avatar_url: String,
}

impl Ticket {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn avatar_alt(&self) -> String {
        format!("Avatar for {}", self.full_name)
    }

    pub fn matches(&self, form: &FormData) -> bool {
        self.full_name == form.full_name
            && self.email == form.email
            && self.avatar_url == form.avatar_url
    }
}

impl From<&FormData> for Ticket {
    fn from(form: &FormData) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            avatar_url: form.avatar_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ticket;
    use crate::core::form_data::FormData;

    #[test]
    fn snapshot_is_detached_from_form() {
        let mut form = FormData::new("Ada", "ada@example.com", "https://x.com/a.png");
        let ticket = Ticket::from(&form);
        form.full_name = "Grace".to_string();

        assert_eq!(ticket.full_name(), "Ada");
        assert!(!ticket.matches(&form));
        assert_eq!(ticket.avatar_alt(), "Avatar for Ada");
    }
}
