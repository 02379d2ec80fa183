//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into collaborators

pub mod inbound;
pub mod outbound;

pub use inbound::InputPort;
pub use outbound::{
    ClipboardPort, LocationPort, NotifierPort, SessionPort, SharePort, ShareRequest, UserApiPort,
};
