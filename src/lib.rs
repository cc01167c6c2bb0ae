pub mod error;
pub mod ring;

pub use error::{StringRingError, StringRingResult};
pub use ring::StringRing;
