use chrono::Utc;
use uuid::Uuid;

use quad_types::{Institution, Post, PostStatus, PostType, UserProfile, UserRole};

use crate::store::{generated_avatar, Store};

/// Hardcoded super-admin access code. A deliberately weak mock, matching
/// the rest of the plaintext credential scheme.
const SUPER_ADMIN_SECRET: &str = "quad_root";

/// Fallback logo for institutions created without one.
const DEFAULT_LOGO: &str = "https://cdn-icons-png.flaticon.com/512/3135/3135715.png";

pub struct InstitutionRepository {
    store: Store,
}

impl InstitutionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Plain equality against the single platform secret. No hashing, no
    /// rate limiting; hardening is out of scope for the mock.
    pub fn login_super_admin(&self, password: &str) -> bool {
        password == SUPER_ADMIN_SECRET
    }

    pub fn get_institutions(&self) -> Vec<Institution> {
        self.store.read().institutions.clone()
    }

    /// Case-insensitive exact match on the join code.
    pub fn get_institution_by_code(&self, code: &str) -> Option<Institution> {
        let wanted = code.trim().to_uppercase();
        self.store
            .read()
            .institutions
            .iter()
            .find(|i| i.code.trim().to_uppercase() == wanted)
            .cloned()
    }

    /// Create a tenant and auto-provision its admin account plus a welcome
    /// post. The welcome post is the one post that skips the moderation
    /// queue: it is created pending and verified by id in the same write.
    pub fn create_institution(
        &self,
        name: &str,
        code: &str,
        logo: &str,
        description: &str,
        theme_color: &str,
    ) -> Institution {
        let institution = Institution {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: code.to_string(),
            logo: if logo.is_empty() {
                DEFAULT_LOGO.to_string()
            } else {
                logo.to_string()
            },
            description: description.to_string(),
            theme_color: theme_color.to_string(),
        };

        let admin_name = format!("{code} Admin");
        let admin = UserProfile {
            uid: Uuid::new_v4(),
            institution_id: Some(institution.id),
            name: admin_name.clone(),
            role: UserRole::InstitutionAdmin,
            email: None,
            roll_no: None,
            batch: None,
            bio: None,
            avatar: Some(generated_avatar(&admin_name)),
            blocked: false,
        };

        let welcome = Post {
            id: Uuid::new_v4(),
            institution_id: institution.id,
            author_id: admin.uid,
            author_name: admin_name,
            author_role: UserRole::InstitutionAdmin,
            title: Some(format!("Welcome to {name}")),
            content: format!("Welcome to the official {name} social platform powered by Quad."),
            created_at: Utc::now(),
            likes: 0,
            comments: vec![],
            status: PostStatus::Pending,
            post_type: PostType::Newsletter,
        };
        let welcome_id = welcome.id;

        let mut data = self.store.write();
        data.institutions.push(institution.clone());
        data.users.push(admin);
        data.posts.insert(0, welcome);
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == welcome_id) {
            post.status = PostStatus::Verified;
        }

        tracing::info!(institution = %institution.id, code, "institution created");
        institution
    }

    /// Delete a tenant and cascade to every user and post scoped to it.
    /// Messages are intentionally left behind (no cascade in the source
    /// design); other tenants are untouched.
    pub fn delete_institution(&self, institution_id: Uuid) {
        let mut data = self.store.write();
        data.institutions.retain(|i| i.id != institution_id);
        data.users
            .retain(|u| u.institution_id != Some(institution_id));
        data.posts.retain(|p| p.institution_id != institution_id);
        tracing::info!(institution = %institution_id, "institution deleted with cascade");
    }
}
