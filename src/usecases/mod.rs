//! Application use cases. Orchestrate domain logic via ports.

pub mod edit_session;
pub mod export_service;
pub mod poll_service;

pub use edit_session::{CommitMode, GridEdit, ParticipantEdit};
pub use export_service::ExportService;
pub use poll_service::PollService;
