use uuid::Uuid;

use quad_types::{LoginOutcome, UserProfile, UserRole, UserUpdate};

use crate::error::StoreError;
use crate::store::{generated_avatar, Store};

/// Shared mock password for every institution admin. Not a security model,
/// just the pretend backend's stand-in for one.
const INST_ADMIN_PASSWORD: &str = "admin";

const BLOCKED_ERROR: &str = "Access Denied: Blocked.";

pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // --- Scoped authentication ---

    /// Students are keyed by (email, institution). Blocked accounts are
    /// denied even with matching credentials.
    pub fn login_student(&self, email: &str, institution_id: Uuid) -> LoginOutcome {
        let data = self.store.read();
        let user = data.users.iter().find(|u| {
            u.role == UserRole::Student
                && u.email.as_deref() == Some(email)
                && u.institution_id == Some(institution_id)
        });
        match user {
            Some(u) if u.blocked => LoginOutcome::denied(BLOCKED_ERROR),
            Some(u) => LoginOutcome::granted(u.clone()),
            None => LoginOutcome::not_found(),
        }
    }

    /// Alumni are keyed by (roll number, institution).
    pub fn login_alumni(&self, roll_no: &str, institution_id: Uuid) -> LoginOutcome {
        let data = self.store.read();
        let user = data.users.iter().find(|u| {
            u.role == UserRole::Alumni
                && u.roll_no.as_deref() == Some(roll_no)
                && u.institution_id == Some(institution_id)
        });
        match user {
            Some(u) if u.blocked => LoginOutcome::denied(BLOCKED_ERROR),
            Some(u) => LoginOutcome::granted(u.clone()),
            None => LoginOutcome::not_found(),
        }
    }

    /// One shared password unlocks the institution's admin record. A tenant
    /// somehow missing its admin surfaces as a configuration error.
    pub fn login_inst_admin(&self, password: &str, institution_id: Uuid) -> LoginOutcome {
        if password != INST_ADMIN_PASSWORD {
            return LoginOutcome::denied("Invalid Admin Credentials");
        }
        let data = self.store.read();
        match data.users.iter().find(|u| {
            u.role == UserRole::InstitutionAdmin && u.institution_id == Some(institution_id)
        }) {
            Some(u) => LoginOutcome::granted(u.clone()),
            None => LoginOutcome::denied("Admin account configuration error."),
        }
    }

    // --- Signup ---

    pub fn signup_student(
        &self,
        institution_id: Uuid,
        name: &str,
        email: &str,
        batch: &str,
    ) -> Result<UserProfile, StoreError> {
        let mut data = self.store.write();
        let taken = data.users.iter().any(|u| {
            u.role == UserRole::Student
                && u.institution_id == Some(institution_id)
                && u.email.as_deref() == Some(email)
        });
        if taken {
            return Err(StoreError::DuplicateCredential { field: "email" });
        }

        let user = UserProfile {
            uid: Uuid::new_v4(),
            institution_id: Some(institution_id),
            name: name.to_string(),
            role: UserRole::Student,
            email: Some(email.to_string()),
            roll_no: None,
            batch: Some(batch.to_string()),
            bio: Some("Student".to_string()),
            avatar: Some(generated_avatar(name)),
            blocked: false,
        };
        data.users.push(user.clone());
        tracing::debug!(user = %user.uid, institution = %institution_id, "student signed up");
        Ok(user)
    }

    pub fn signup_alumni(
        &self,
        institution_id: Uuid,
        name: &str,
        roll_no: &str,
        batch: &str,
        bio: &str,
    ) -> Result<UserProfile, StoreError> {
        let mut data = self.store.write();
        let taken = data.users.iter().any(|u| {
            u.role == UserRole::Alumni
                && u.institution_id == Some(institution_id)
                && u.roll_no.as_deref() == Some(roll_no)
        });
        if taken {
            return Err(StoreError::DuplicateCredential { field: "roll_no" });
        }

        let user = UserProfile {
            uid: Uuid::new_v4(),
            institution_id: Some(institution_id),
            name: name.to_string(),
            role: UserRole::Alumni,
            email: None,
            roll_no: Some(roll_no.to_string()),
            batch: Some(batch.to_string()),
            bio: Some(if bio.is_empty() { "Alumni" } else { bio }.to_string()),
            avatar: Some(generated_avatar(name)),
            blocked: false,
        };
        data.users.push(user.clone());
        tracing::debug!(user = %user.uid, institution = %institution_id, "alumni signed up");
        Ok(user)
    }

    // --- Profile ---

    /// Shallow merge: only fields set in the update are applied. No field
    /// validation is performed.
    pub fn update_user(&self, uid: Uuid, update: UserUpdate) -> Option<UserProfile> {
        let mut data = self.store.write();
        let user = data.users.iter_mut().find(|u| u.uid == uid)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = Some(email);
        }
        if let Some(roll_no) = update.roll_no {
            user.roll_no = Some(roll_no);
        }
        if let Some(batch) = update.batch {
            user.batch = Some(batch);
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        Some(user.clone())
    }

    pub fn get_by_id(&self, uid: Uuid) -> Option<UserProfile> {
        self.store.read().users.iter().find(|u| u.uid == uid).cloned()
    }

    // --- Admin user management (scoped to one institution) ---

    /// Every member of the tenant except admin accounts, blocked or not.
    pub fn admin_all_users(&self, institution_id: Uuid) -> Vec<UserProfile> {
        self.store
            .read()
            .users
            .iter()
            .filter(|u| u.institution_id == Some(institution_id) && !u.role.is_admin())
            .cloned()
            .collect()
    }

    /// Hard delete. Posts and messages authored by the user survive with
    /// their denormalized name snapshots.
    pub fn admin_delete_user(&self, uid: Uuid) {
        self.store.write().users.retain(|u| u.uid != uid);
        tracing::info!(user = %uid, "user deleted");
    }

    pub fn admin_toggle_block(&self, uid: Uuid) -> Option<UserProfile> {
        let mut data = self.store.write();
        let user = data.users.iter_mut().find(|u| u.uid == uid)?;
        user.blocked = !user.blocked;
        tracing::info!(user = %uid, blocked = user.blocked, "block flag toggled");
        Some(user.clone())
    }

    // --- Directory ---

    /// "Connect with people": non-admin, non-blocked members of the tenant,
    /// excluding the caller.
    pub fn directory(&self, current_uid: Uuid, institution_id: Uuid) -> Vec<UserProfile> {
        self.store
            .read()
            .users
            .iter()
            .filter(|u| {
                u.institution_id == Some(institution_id)
                    && u.uid != current_uid
                    && u.role != UserRole::InstitutionAdmin
                    && !u.blocked
            })
            .cloned()
            .collect()
    }
}
