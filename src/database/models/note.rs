use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub content: String,
    pub is_private: bool,
    pub project_id: i32,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Public notes are visible to everyone, private notes only to their author
    pub fn is_visible_to(&self, user_id: i32) -> bool {
        !self.is_private || self.created_by == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(is_private: bool, created_by: i32) -> Note {
        Note {
            id: 1,
            content: "Pour schedule moved".to_string(),
            is_private,
            project_id: 1,
            created_by,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn public_notes_visible_to_everyone() {
        assert!(note(false, 1).is_visible_to(1));
        assert!(note(false, 1).is_visible_to(2));
    }

    #[test]
    fn private_notes_visible_to_author_only() {
        assert!(note(true, 1).is_visible_to(1));
        assert!(!note(true, 1).is_visible_to(2));
    }
}
