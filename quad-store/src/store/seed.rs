//! Demo dataset loaded by [`Store::seeded`]: two tenants with an admin and
//! a student each, two already-verified posts, and one pending onboarding
//! request awaiting super-admin review.

use chrono::{Duration, Utc};
use uuid::Uuid;

use quad_types::{
    Institution, OnboardingRequest, Post, PostStatus, PostType, RequestStatus, UserProfile,
    UserRole,
};

use super::{generated_avatar, Store};

pub(super) fn load_demo_data(store: &Store) {
    let mut data = store.write();

    let northgate = Institution {
        id: Uuid::new_v4(),
        name: "Northgate University".to_string(),
        code: "NGU".to_string(),
        logo: "https://cdn-icons-png.flaticon.com/512/3413/3413535.png".to_string(),
        description: "Northgate University campus network".to_string(),
        theme_color: "#FF725E".to_string(),
    };
    let riverside = Institution {
        id: Uuid::new_v4(),
        name: "Riverside Tech Connect".to_string(),
        code: "RVT".to_string(),
        logo: "https://cdn-icons-png.flaticon.com/512/2997/2997274.png".to_string(),
        description: "Riverside Institute of Technology".to_string(),
        theme_color: "#6C63FF".to_string(),
    };

    data.users.push(UserProfile {
        uid: Uuid::new_v4(),
        institution_id: None,
        name: "Quad Platform Admin".to_string(),
        role: UserRole::SuperAdmin,
        email: None,
        roll_no: None,
        batch: None,
        bio: None,
        avatar: Some(generated_avatar("Quad Admin")),
        blocked: false,
    });

    let ngu_admin = UserProfile {
        uid: Uuid::new_v4(),
        institution_id: Some(northgate.id),
        name: "NGU Admin".to_string(),
        role: UserRole::InstitutionAdmin,
        email: None,
        roll_no: None,
        batch: None,
        bio: None,
        avatar: Some(generated_avatar("NGU Admin")),
        blocked: false,
    };
    let ngu_student = UserProfile {
        uid: Uuid::new_v4(),
        institution_id: Some(northgate.id),
        name: "Rohan Sharma".to_string(),
        role: UserRole::Student,
        email: Some("rohan@northgate.edu".to_string()),
        roll_no: None,
        batch: Some("2023-2025".to_string()),
        bio: Some("Aspiring security analyst.".to_string()),
        avatar: Some(generated_avatar("Rohan Sharma")),
        blocked: false,
    };
    let rvt_admin = UserProfile {
        uid: Uuid::new_v4(),
        institution_id: Some(riverside.id),
        name: "RVT Admin".to_string(),
        role: UserRole::InstitutionAdmin,
        email: None,
        roll_no: None,
        batch: None,
        bio: None,
        avatar: Some(generated_avatar("RVT Admin")),
        blocked: false,
    };
    let rvt_student = UserProfile {
        uid: Uuid::new_v4(),
        institution_id: Some(riverside.id),
        name: "Vikram Singh".to_string(),
        role: UserRole::Student,
        email: Some("vikram@riverside.edu".to_string()),
        roll_no: None,
        batch: Some("2022-2026".to_string()),
        bio: Some("CS undergrad.".to_string()),
        avatar: Some(generated_avatar("Vikram Singh")),
        blocked: false,
    };

    data.posts.push(Post {
        id: Uuid::new_v4(),
        institution_id: northgate.id,
        author_id: ngu_admin.uid,
        author_name: ngu_admin.name.clone(),
        author_role: UserRole::InstitutionAdmin,
        title: Some("Security Conference 2026".to_string()),
        content: "Join us for the annual campus security conference.".to_string(),
        created_at: Utc::now() - Duration::minutes(100),
        likes: 150,
        comments: vec![],
        status: PostStatus::Verified,
        post_type: PostType::Events,
    });
    data.posts.push(Post {
        id: Uuid::new_v4(),
        institution_id: riverside.id,
        author_id: rvt_student.uid,
        author_name: rvt_student.name.clone(),
        author_role: UserRole::Student,
        title: None,
        content: "Robotics club meet at 5 PM.".to_string(),
        created_at: Utc::now() - Duration::minutes(50),
        likes: 20,
        comments: vec![],
        status: PostStatus::Verified,
        post_type: PostType::Newsletter,
    });

    data.requests.push(OnboardingRequest {
        id: Uuid::new_v4(),
        institute_name: "Stanford University".to_string(),
        email: "admin@stanford.edu".to_string(),
        contact_name: "John Dean".to_string(),
        status: RequestStatus::Pending,
    });

    data.users
        .extend([ngu_admin, ngu_student, rvt_admin, rvt_student]);
    data.institutions.extend([northgate, riverside]);
}
