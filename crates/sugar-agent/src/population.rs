//! `AgentPopulation` — ordered storage of live agents.
//!
//! Iteration order is insertion order and is the order in which the
//! scheduler runs agents within a phase.  Removal preserves the relative
//! order of the survivors, so slots stay meaningful between removals.

use std::collections::HashSet;

use sugar_core::AgentId;

use crate::Agent;

#[derive(Clone, Debug, Default)]
pub struct AgentPopulation {
    agents: Vec<Agent>,
}

impl AgentPopulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { agents: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Append `agent` after every existing agent.
    pub fn push(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    /// The agent at iteration position `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&Agent> {
        self.agents.get(slot)
    }

    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Agent> {
        self.agents.get_mut(slot)
    }

    /// Iteration position of the agent with `id`.  Linear scan.
    pub fn position(&self, id: AgentId) -> Option<usize> {
        self.agents.iter().position(|a| a.id() == id)
    }

    pub fn find(&self, id: AgentId) -> Option<&Agent> {
        self.position(id).map(|slot| &self.agents[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Ids of every agent for which [`Agent::is_expired`] holds, in
    /// iteration order.
    pub fn expired_ids(&self) -> Vec<AgentId> {
        self.agents.iter().filter(|a| a.is_expired()).map(Agent::id).collect()
    }

    /// Drop every agent whose id is in `ids`.  Returns how many were dropped.
    pub fn remove_ids(&mut self, ids: &[AgentId]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let doomed: HashSet<AgentId> = ids.iter().copied().collect();
        let before = self.agents.len();
        self.agents.retain(|a| !doomed.contains(&a.id()));
        before - self.agents.len()
    }

    /// Sum of every agent's wealth.
    pub fn total_wealth(&self) -> i64 {
        self.agents.iter().map(|a| a.wealth).sum()
    }
}

impl<'a> IntoIterator for &'a AgentPopulation {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
