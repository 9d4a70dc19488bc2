mod marker;
mod message_generator;

pub use marker::StatusMarker;
pub use message_generator::StatusMessageGenerator;
