use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    InstitutionAdmin,
    Student,
    Alumni,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::InstitutionAdmin => "INSTITUTION_ADMIN",
            UserRole::Student => "STUDENT",
            UserRole::Alumni => "ALUMNI",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SUPER_ADMIN" => Some(UserRole::SuperAdmin),
            "INSTITUTION_ADMIN" => Some(UserRole::InstitutionAdmin),
            "STUDENT" => Some(UserRole::Student),
            "ALUMNI" => Some(UserRole::Alumni),
            _ => None,
        }
    }

    /// Admin roles are excluded from member listings and the directory.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin | UserRole::InstitutionAdmin)
    }
}

/// Moderation state of a post. Only ever advances Pending -> Verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Pending,
    Verified,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Pending => "PENDING",
            PostStatus::Verified => "VERIFIED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(PostStatus::Pending),
            "VERIFIED" => Some(PostStatus::Verified),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostType {
    Newsletter,
    Job,
    Events,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Newsletter => "NEWSLETTER",
            PostType::Job => "JOB",
            PostType::Events => "EVENTS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NEWSLETTER" => Some(PostType::Newsletter),
            "JOB" => Some(PostType::Job),
            "EVENTS" => Some(PostType::Events),
            _ => None,
        }
    }
}

/// Review state of an onboarding request. Only ever advances
/// Pending -> Approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(RequestStatus::Pending),
            "APPROVED" => Some(RequestStatus::Approved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [
            UserRole::SuperAdmin,
            UserRole::InstitutionAdmin,
            UserRole::Student,
            UserRole::Alumni,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("PROFESSOR"), None);
    }

    #[test]
    fn admin_roles_are_flagged() {
        assert!(UserRole::SuperAdmin.is_admin());
        assert!(UserRole::InstitutionAdmin.is_admin());
        assert!(!UserRole::Student.is_admin());
        assert!(!UserRole::Alumni.is_admin());
    }

    #[test]
    fn post_type_serializes_screaming_snake() {
        let json = serde_json::to_string(&PostType::Newsletter).unwrap();
        assert_eq!(json, "\"NEWSLETTER\"");
    }
}
