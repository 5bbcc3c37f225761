pub mod objective;
pub mod team;
pub mod user;

// Re-export all repositories for easy importing
pub use objective::ObjectiveRepository;
pub use team::TeamRepository;
pub use user::UserRepository;
