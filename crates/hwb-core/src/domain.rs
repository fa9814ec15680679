/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Review status of a homework, as reported by the status API.
///
/// Any other wire value is an undocumented state and must not be silently
/// forwarded to the chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse the wire value. `None` for undocumented statuses.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(ReviewStatus::parse("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::parse("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::parse("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn rejects_unknown_statuses() {
        assert_eq!(ReviewStatus::parse("on_hold"), None);
        assert_eq!(ReviewStatus::parse("Approved"), None);
        assert_eq!(ReviewStatus::parse(""), None);
    }
}
