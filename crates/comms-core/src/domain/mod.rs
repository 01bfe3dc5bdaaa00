//! Domain entities and value types.

mod communication;
mod role;

pub use communication::{
    AudienceSegment, Communication, CommunicationPatch, CommunicationType, NewCommunication,
    Priority, Status, derive_excerpt,
};
pub use role::Role;
