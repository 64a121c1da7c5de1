use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn is_user(self) -> bool {
        self == Role::User
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// `user-N` or `assistant-N`, unique within a session
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(id: String, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Clock time shown in the message header, e.g. `3:07 PM`.
    pub fn time_label(&self) -> String {
        format_time_label(&self.timestamp)
    }

    /// Author shown in the message header.
    pub fn author<'a>(&self, assistant_name: &'a str) -> &'a str {
        match self.role {
            Role::User => "You",
            Role::Assistant => assistant_name,
        }
    }

    /// Content split into the paragraphs rendered for it, one per line.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

pub fn format_time_label<Tz: chrono::TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%-I:%M %p").to_string()
}

/// Hands out `user-N` / `assistant-N` ids from a single counter.
#[derive(Debug, Default, Clone)]
pub struct MessageIds {
    next: u64,
}

impl MessageIds {
    pub fn next_id(&mut self, role: Role) -> String {
        self.next += 1;
        format!("{}-{}", role.as_str(), self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn time_label_uses_twelve_hour_clock() {
        let afternoon = Utc.with_ymd_and_hms(2024, 3, 9, 15, 7, 0).unwrap();
        assert_eq!(format_time_label(&afternoon), "3:07 PM");

        let midnight = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
        assert_eq!(format_time_label(&midnight), "12:30 AM");
    }

    #[test]
    fn ids_are_prefixed_by_role_and_unique() {
        let mut ids = MessageIds::default();
        assert_eq!(ids.next_id(Role::Assistant), "assistant-1");
        assert_eq!(ids.next_id(Role::User), "user-2");
        assert_eq!(ids.next_id(Role::Assistant), "assistant-3");
    }

    #[test]
    fn author_depends_on_role() {
        let user = Message::new("user-1".into(), Role::User, "hi");
        let bot = Message::new("assistant-2".into(), Role::Assistant, "hello");
        assert_eq!(user.author("Pulse"), "You");
        assert_eq!(bot.author("Pulse"), "Pulse");
    }

    #[test]
    fn each_line_is_a_paragraph() {
        let msg = Message::new("assistant-1".into(), Role::Assistant, "one\n\ntwo");
        assert_eq!(msg.paragraphs().collect::<Vec<_>>(), vec!["one", "", "two"]);
    }
}
