use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{PostStatus, PostType, RequestStatus, UserRole};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// A tenant. Every user and post belongs to exactly one institution
/// (except the platform super-admin, which belongs to none).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: Uuid,
    pub name: String,
    /// Short join code, unique case-insensitively by convention.
    pub code: String,
    pub logo: String,
    pub description: String,
    pub theme_color: String,
}

/// A prospective institution's application, reviewed by the super-admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub id: Uuid,
    pub institute_name: String,
    pub email: String,
    pub contact_name: String,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: Uuid,
    /// `None` only for the platform-wide super-admin sentinel.
    pub institution_id: Option<Uuid>,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roll_no: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub blocked: bool,
}

/// Author name/role on a post are snapshots taken at creation time;
/// later profile edits do not retroactively update historical posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub institution_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_role: UserRole,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub status: PostStatus,
    pub post_type: PostType,
}

/// Append-only; comments are never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub text: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub text: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Input for creating a post. Id, timestamp, likes, comments, and the
/// Pending status are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub institution_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_role: UserRole,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub post_type: PostType,
}

/// Result of a scoped login attempt. Auth failure is data, not an error:
/// `user` is `None` and `error` carries the user-facing reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginOutcome {
    pub fn granted(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            user: None,
            error: Some(reason.into()),
        }
    }

    /// Credentials matched nothing; no reason is surfaced.
    pub fn not_found() -> Self {
        Self {
            user: None,
            error: None,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.user.is_some()
    }
}

/// Partial profile update. Only `Some` fields are applied; everything
/// else is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub roll_no: Option<String>,
    pub batch: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// One row of a user's inbox: the peer plus last-message info and how
/// many of their messages are still unread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub peer_id: Uuid,
    pub last_message: String,
    #[serde(with = "datetime_format")]
    pub last_message_at: DateTime<Utc>,
    pub unread_count: usize,
}
