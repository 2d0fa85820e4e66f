pub mod command_result;
pub mod container_ref;
pub mod player;
pub mod roster_result;
pub mod status;
