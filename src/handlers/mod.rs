pub mod health;
pub mod objectives;
pub mod shared;
pub mod teams;
pub mod users;
pub mod wallet;
