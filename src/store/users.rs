//! User directory
//!
//! Side component for the user endpoints; not involved in checkout.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::domain::User;
use crate::error::{Result, ShopError};

pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn with_seed_data() -> Self {
        Self {
            users: vec![
                User {
                    id: "1".into(),
                    name: "Alice Johnson".into(),
                    email: "alice@example.com".into(),
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                },
                User {
                    id: "2".into(),
                    name: "Bob Smith".into(),
                    email: "bob@example.com".into(),
                    created_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                },
            ],
        }
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn create(&mut self, name: &str, email: &str) -> Result<User> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(ShopError::InvalidInput(
                "Name and email are required".into(),
            ));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}
