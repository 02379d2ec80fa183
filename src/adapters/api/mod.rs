//! Collaborator API adapters. Implement UserApiPort and LocationPort.
//!
//! HTTP clients for the real service plus in-memory mocks for offline use.

pub mod http_user_api;
pub mod location_api;
pub mod mock_api;

pub use http_user_api::HttpUserApi;
pub use location_api::HttpLocationApi;
pub use mock_api::{MockLocation, MockUserApi};
