// Utility functions
pub mod error;
pub mod crypto;
pub mod ids;

pub use error::*;
pub use crypto::*;
pub use ids::*;
