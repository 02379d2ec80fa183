//! Application use cases. Orchestrate domain logic via ports.

pub mod article_service;
pub mod profile_service;
pub mod registration_service;

#[cfg(test)]
mod test_support;

pub use article_service::{ArticleService, ShareOutcome};
pub use profile_service::{ProfileService, ProfileTab};
pub use registration_service::{RegistrationService, SubmitOutcome};
