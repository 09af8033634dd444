// State management module
// Handles the agent roster and score edit state

pub mod app_state;

pub use app_state::{Agent, AgentStore, DashboardState};
