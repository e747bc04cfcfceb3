use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub joined: NaiveDate,
}

impl User {
    pub fn new(name: String, email: String, joined: NaiveDate) -> Self {
        Self {
            id: UserId(Uuid::new_v4()),
            name,
            email,
            avatar: None,
            joined,
        }
    }

    /// Display name guessed from an email address: `jamie.lee@x.io` -> `Jamie Lee`.
    pub fn name_from_email(email: &str) -> String {
        let local = email.split('@').next().unwrap_or("");
        let words: Vec<String> = local
            .split(['.', '_', '-', '+'])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect();
        if words.is_empty() {
            "Lagom User".to_string()
        } else {
            words.join(" ")
        }
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
