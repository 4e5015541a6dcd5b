// mod.rs - Core logic module

pub mod conservation;
pub mod error;
pub mod padding;

// Re-export main types for convenience
pub use conservation::{analyze, ConservationProfile, ProfileStats, TieStrategy};
pub use error::ConservationError;
pub use padding::pad;
