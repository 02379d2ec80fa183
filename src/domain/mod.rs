//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod preferences;
pub mod reaction;
pub mod registration;

pub use entities::{
    Article, Location, NewUserPayload, ProfileStats, RecentlyViewed, Route, User, UserPatch,
    UserProfile,
};
pub use errors::{DomainError, ShareError, ValidationError};
pub use preferences::{PreferenceCategory, PreferenceSet};
pub use reaction::{Reaction, ReactionState};
pub use registration::{FieldErrors, FormField, RegistrationForm};
