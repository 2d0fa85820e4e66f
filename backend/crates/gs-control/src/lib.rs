pub mod cancel_topic;
pub mod cancellation_bus;
pub mod cancellation_guard;
pub mod container_commands;
pub mod control_plane;
pub mod edge_trigger;
pub mod error;
pub mod failure_kind;
pub mod invocation;
pub mod lifecycle_controller;
pub mod metrics;
pub mod process_output;
pub mod process_runner;
pub mod rcon_settings;
pub mod roster_parser;
pub mod roster_query;
#[cfg(any(test, feature = "test-support"))]
pub mod scripted_runner;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod status_prober;
pub mod stream_broadcaster;
mod stream_context;
pub mod stream_end;
pub mod stream_event;
pub mod stream_id;
pub mod stream_kind;
pub mod stream_settings;

pub use cancel_topic::CancelTopic;
pub use cancellation_bus::CancellationBus;
pub use cancellation_guard::CancellationGuard;
pub use container_commands::ContainerCommands;
pub use control_plane::ControlPlane;
pub use edge_trigger::EdgeTrigger;
pub use error::{ControlError, Result};
pub use failure_kind::FailureKind;
pub use invocation::{Invocation, REDACTED};
pub use lifecycle_controller::LifecycleController;
pub use metrics::Metrics;
pub use process_output::ProcessOutput;
pub use process_runner::{ProcessRunner, TokioProcessRunner};
pub use rcon_settings::RconSettings;
pub use roster_parser::parse_roster;
pub use roster_query::RosterQuery;
#[cfg(any(test, feature = "test-support"))]
pub use scripted_runner::{ScriptedReply, ScriptedRunner};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use status_prober::StatusProber;
pub use stream_broadcaster::StreamBroadcaster;
pub use stream_end::StreamEnd;
pub use stream_event::{PresenceSnapshot, StreamEvent};
pub use stream_id::StreamId;
pub use stream_kind::StreamKind;
pub use stream_settings::StreamSettings;

#[cfg(test)]
mod tests;
