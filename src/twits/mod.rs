// ABOUTME: Twits demonstration data and its context populator
// ABOUTME: Exposes the participant mapping and the initializer that publishes it

pub mod populator;
pub mod record;

pub use populator::{TwitsPopulator, TWITS_KEY};
pub use record::{participants, ParticipantMapping, ParticipantRecord};
