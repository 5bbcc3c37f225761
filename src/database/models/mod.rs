pub mod objective;
pub mod team;
pub mod user;

// Re-export all models for easy importing
pub use objective::*;
pub use team::*;
pub use user::*;
