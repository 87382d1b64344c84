pub mod error;
pub mod model;
pub mod service;

pub use error::ReferralServiceError;
pub use model::{
    ApplyReferralRequest, ApplyReferralResponse, Referral, ReferralApplication,
    ReferralCodeResponse, ReferralDashboard, SettlementReport,
};
pub use service::{CodeSource, ReferralService, ReferralServiceApi};
