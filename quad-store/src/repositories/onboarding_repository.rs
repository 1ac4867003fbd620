use rand::seq::SliceRandom;
use uuid::Uuid;

use quad_types::{Institution, OnboardingRequest, RequestStatus};

use crate::repositories::InstitutionRepository;
use crate::store::Store;

/// Theme colors assigned to institutions onboarded via request approval,
/// picked uniformly at random.
const THEME_PALETTE: [&str; 5] = ["#FF725E", "#4AA4F2", "#6C63FF", "#43D9AD", "#FFC75F"];

/// Number of leading characters of the institute name used as the join code.
const CODE_LEN: usize = 4;

pub struct OnboardingRepository {
    store: Store,
}

impl OnboardingRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Public submission; lands in the super-admin review queue as Pending.
    pub fn submit_request(
        &self,
        institute_name: &str,
        email: &str,
        contact_name: &str,
    ) -> OnboardingRequest {
        let request = OnboardingRequest {
            id: Uuid::new_v4(),
            institute_name: institute_name.to_string(),
            email: email.to_string(),
            contact_name: contact_name.to_string(),
            status: RequestStatus::Pending,
        };
        self.store.write().requests.push(request.clone());
        tracing::debug!(request = %request.id, institute_name, "onboarding request submitted");
        request
    }

    /// Only requests still awaiting review. Approved requests are kept but
    /// never listed again.
    pub fn pending_requests(&self) -> Vec<OnboardingRequest> {
        self.store
            .read()
            .requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .cloned()
            .collect()
    }

    /// Approve a pending request and create its institution as a side
    /// effect. Flips Pending -> Approved exactly once; approving an unknown
    /// or already-approved request is a no-op returning `None`.
    pub fn approve_request(&self, request_id: Uuid) -> Option<Institution> {
        let institute_name = {
            let mut data = self.store.write();
            let request = data
                .requests
                .iter_mut()
                .find(|r| r.id == request_id && r.status == RequestStatus::Pending)?;
            request.status = RequestStatus::Approved;
            request.institute_name.clone()
        };

        let code: String = institute_name
            .chars()
            .take(CODE_LEN)
            .collect::<String>()
            .to_uppercase();
        let color = THEME_PALETTE
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(THEME_PALETTE[0]);

        let institutions = InstitutionRepository::new(self.store.clone());
        let institution =
            institutions.create_institution(&institute_name, &code, "", "Partner Institution", color);
        tracing::info!(request = %request_id, institution = %institution.id, "onboarding request approved");
        Some(institution)
    }
}
