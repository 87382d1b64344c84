pub mod progression_repository;
pub mod referral_repository;
pub mod usage_repository;
pub mod user_repository;

pub use progression_repository::ProgressionRepository;
pub use referral_repository::ReferralRepository;
pub use usage_repository::UsageRepository;
pub use user_repository::UserRepository;
