//! Walks the seeded store through the main platform flows and, when a
//! credential is configured, opens the assistant panel for one exchange.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quad_assistant::{ChatPanel, PanelPhase};
use quad_store::repositories::{
    InstitutionRepository, MessageRepository, OnboardingRepository, PostRepository, UserRepository,
};
use quad_store::Store;
use quad_types::{PostDraft, PostType};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quad_demo=info,quad_store=debug,quad_assistant=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Store::seeded();
    let institutions = InstitutionRepository::new(store.clone());
    let onboarding = OnboardingRepository::new(store.clone());
    let users = UserRepository::new(store.clone());
    let posts = PostRepository::new(store.clone());
    let messages = MessageRepository::new(store.clone());

    for institution in institutions.get_institutions() {
        println!("tenant: {} [{}]", institution.name, institution.code);
    }

    // Super-admin review queue.
    assert!(institutions.login_super_admin("quad_root"));
    for request in onboarding.pending_requests() {
        println!("pending onboarding request: {}", request.institute_name);
        let institution = onboarding
            .approve_request(request.id)
            .expect("request was pending");
        println!("approved -> new tenant {} [{}]", institution.name, institution.code);
    }

    // A student joins the newest tenant and posts through the moderation gate.
    let institution = institutions
        .get_institutions()
        .last()
        .cloned()
        .expect("at least one tenant");
    let student =
        users.signup_student(institution.id, "Ana Gomez", "ana@example.edu", "2024-2028")?;
    let post = posts.create_post(PostDraft {
        institution_id: institution.id,
        author_id: student.uid,
        author_name: student.name.clone(),
        author_role: student.role,
        title: Some("Study group".to_string()),
        content: "Security 101 study group, Thursday 7pm.".to_string(),
        post_type: PostType::Events,
    });
    println!(
        "pending posts before review: {}",
        posts.pending_posts(institution.id).len()
    );
    posts.verify_post(post.id);
    println!(
        "events feed after review: {} post(s)",
        posts.get_posts(institution.id, PostType::Events, true).len()
    );

    // One direct message to the tenant admin.
    if let Some(admin) = users.login_inst_admin("admin", institution.id).user {
        messages.send_message(student.uid, admin.uid, "Hi! Could you verify my event post?");
        println!(
            "conversations for the student: {}",
            messages.conversation_summaries(student.uid).len()
        );
    }

    // Assistant panel: degrades to a disabled panel without a credential.
    let mut panel = ChatPanel::open("events");
    match panel.phase().clone() {
        PanelPhase::ConfigError(reason) => {
            println!("assistant disabled: {reason}");
        }
        _ => {
            panel
                .send("Draft a one-line invite for a Thursday study group")
                .await;
            for turn in panel.transcript() {
                println!("[{:?}] {}", turn.role, turn.text);
            }
        }
    }

    Ok(())
}
