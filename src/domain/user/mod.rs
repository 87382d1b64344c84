pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{MeResponse, SubscriptionStatusResponse};
pub use error::UserServiceError;
pub use model::{SubscriptionStatus, User};
pub use service::{UserService, UserServiceApi};
