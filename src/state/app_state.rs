// Application state
// Contains the agent roster and the score edit buffers

use std::collections::HashMap;

use tracing::debug;

/// Unique identifier for an agent
pub type AgentId = String;

/// A tracked agent with a performance percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    /// Unique identifier for the agent
    pub id: AgentId,
    /// Display name of the agent
    pub name: String,
    /// Performance score, always within 0..=100
    pub percentage: u8,
}

impl Agent {
    /// Create a new agent with the given ID, name, and score
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, percentage: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            percentage: percentage.min(100),
        }
    }
}

/// Parse a raw score edit and force it into 0..=100
/// Anything that does not parse as an integer counts as 0
fn coerce_score(raw: &str) -> u8 {
    raw.trim().parse::<i64>().unwrap_or(0).clamp(0, 100) as u8
}

/// Ordered roster of agents
/// Display order is insertion order; the roster is fixed at startup and
/// only the per-agent percentage ever changes
#[derive(Debug, Clone)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// Build the store with the fixed seed roster
    pub fn seeded() -> Self {
        Self {
            agents: vec![
                Agent::new("1", "Sarah Johnson", 85),
                Agent::new("2", "Mike Chen", 72),
                Agent::new("3", "Emily Rodriguez", 94),
                Agent::new("4", "David Kim", 68),
                Agent::new("5", "Lisa Thompson", 91),
                Agent::new("6", "James Wilson", 76),
                Agent::new("7", "Maria Garcia", 88),
                Agent::new("8", "Robert Brown", 63),
            ],
        }
    }

    /// All agents in display order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Look up an agent by ID
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Apply a raw score edit to the agent with the given ID
    /// Non-numeric input becomes 0, out-of-range input is clamped to 0..=100
    /// Returns true if an agent matched; unknown IDs are a no-op
    pub fn update(&mut self, id: &str, raw_input: &str) -> bool {
        match self.agents.iter_mut().find(|a| a.id == id) {
            Some(agent) => {
                agent.percentage = coerce_score(raw_input);
                true
            }
            None => false,
        }
    }
}

/// Dashboard-wide state: the roster plus one text edit buffer per agent
///
/// egui is immediate-mode, so each editable score field needs an owned
/// `String` the widget can mutate in place. After an edit is accepted the
/// buffer is resynced to the stored value, so the field always shows the
/// coerced/clamped score.
#[derive(Debug, Clone)]
pub struct DashboardState {
    store: AgentStore,
    score_inputs: HashMap<AgentId, String>,
}

impl DashboardState {
    /// Create the dashboard state from the seed roster
    pub fn new() -> Self {
        let store = AgentStore::seeded();
        let score_inputs = store
            .agents()
            .iter()
            .map(|a| (a.id.clone(), a.percentage.to_string()))
            .collect();
        Self {
            store,
            score_inputs,
        }
    }

    /// Read-only view of the roster
    pub fn store(&self) -> &AgentStore {
        &self.store
    }

    /// Mutable edit buffer for one agent's score field
    pub fn score_input_mut(&mut self, id: &str) -> &mut String {
        self.score_inputs.entry(id.to_string()).or_default()
    }

    /// Commit the current edit buffer for the given agent
    /// Routes through `AgentStore::update` and resyncs the buffer to the
    /// coerced value
    pub fn submit_score(&mut self, id: &str) {
        let raw = match self.score_inputs.get(id) {
            Some(text) => text.clone(),
            None => return,
        };
        if self.store.update(id, &raw) {
            if let Some(agent) = self.store.agent(id) {
                debug!(
                    agent = %agent.name,
                    percentage = agent.percentage,
                    "score updated"
                );
                if let Some(buffer) = self.score_inputs.get_mut(id) {
                    *buffer = agent.percentage.to_string();
                }
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster() {
        let store = AgentStore::seeded();
        assert_eq!(store.agents().len(), 8);

        // IDs are unique
        let mut ids: Vec<_> = store.agents().iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        // Insertion order is preserved
        assert_eq!(store.agents()[0].name, "Sarah Johnson");
        assert_eq!(store.agents()[7].name, "Robert Brown");
    }

    #[test]
    fn test_update_valid_score() {
        let mut store = AgentStore::seeded();
        let before: Vec<Agent> = store.agents().to_vec();

        assert!(store.update("2", "42"));
        assert_eq!(store.agent("2").unwrap().percentage, 42);

        // All other agents and the ordering are untouched
        for (i, agent) in store.agents().iter().enumerate() {
            if agent.id != "2" {
                assert_eq!(*agent, before[i]);
            }
            assert_eq!(agent.id, before[i].id);
        }
    }

    #[test]
    fn test_update_non_numeric_becomes_zero() {
        let mut store = AgentStore::seeded();
        assert!(store.update("1", "abc"));
        assert_eq!(store.agent("1").unwrap().percentage, 0);

        assert!(store.update("1", ""));
        assert_eq!(store.agent("1").unwrap().percentage, 0);
    }

    #[test]
    fn test_update_clamps_out_of_range() {
        let mut store = AgentStore::seeded();
        assert!(store.update("3", "150"));
        assert_eq!(store.agent("3").unwrap().percentage, 100);

        assert!(store.update("3", "-5"));
        assert_eq!(store.agent("3").unwrap().percentage, 0);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut a = AgentStore::seeded();
        let mut b = AgentStore::seeded();

        a.update("4", "42");
        b.update("4", "42");
        b.update("4", "42");

        assert_eq!(a.agents(), b.agents());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = AgentStore::seeded();
        let before: Vec<Agent> = store.agents().to_vec();

        assert!(!store.update("999", "50"));
        assert_eq!(store.agents(), before.as_slice());
    }

    #[test]
    fn test_dashboard_state_buffers_seeded() {
        let mut state = DashboardState::new();
        assert_eq!(state.score_input_mut("1").as_str(), "85");
        assert_eq!(state.score_input_mut("8").as_str(), "63");
    }

    #[test]
    fn test_submit_score_coerces_and_resyncs() {
        let mut state = DashboardState::new();

        *state.score_input_mut("5") = "abc".to_string();
        state.submit_score("5");
        assert_eq!(state.store().agent("5").unwrap().percentage, 0);
        assert_eq!(state.score_input_mut("5").as_str(), "0");

        *state.score_input_mut("5") = "150".to_string();
        state.submit_score("5");
        assert_eq!(state.store().agent("5").unwrap().percentage, 100);
        assert_eq!(state.score_input_mut("5").as_str(), "100");
    }

    #[test]
    fn test_submit_score_unknown_id() {
        let mut state = DashboardState::new();
        let before: Vec<Agent> = state.store().agents().to_vec();

        *state.score_input_mut("999") = "50".to_string();
        state.submit_score("999");
        assert_eq!(state.store().agents(), before.as_slice());
    }
}
