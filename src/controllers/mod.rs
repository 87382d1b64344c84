pub mod auth;
pub mod genre;
pub mod health;
pub mod progression;
pub mod referral;
pub mod roll;
pub mod usage;
pub mod user;
