pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::command_result::CommandResult;
pub use models::container_ref::ContainerRef;
pub use models::player::Player;
pub use models::roster_result::RosterResult;
pub use models::status::Status;
