pub mod follow;
pub mod seed;
pub mod wallet;

pub use follow::FollowService;
pub use seed::{SeedReport, SeedService};
pub use wallet::WalletService;
