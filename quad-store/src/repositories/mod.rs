mod institution_repository;
mod message_repository;
mod onboarding_repository;
mod post_repository;
mod user_repository;

pub use institution_repository::InstitutionRepository;
pub use message_repository::MessageRepository;
pub use onboarding_repository::OnboardingRepository;
pub use post_repository::PostRepository;
pub use user_repository::UserRepository;
