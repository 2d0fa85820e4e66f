pub mod error;
pub mod lifecycle;
pub mod players;
pub mod status;
pub mod streams;
