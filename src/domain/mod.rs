pub mod auth;
pub mod music;
pub mod progression;
pub mod referral;
pub mod roll;
pub mod usage;
pub mod user;
