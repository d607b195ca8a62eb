//! Simulation controller — which scenario is active and whether it runs.
//!
//! The controller never writes to the store. Scenario *execution*
//! (materializing templates into transactions) lives behind the desk's
//! apply operation; this state machine only tracks run state.

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SimulationState {
    #[default]
    Reset,
    Running {
        scenario_id: EntityId,
    },
    Paused {
        scenario_id: EntityId,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationController {
    state: SimulationState,
}

impl SimulationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SimulationState::Running { .. })
    }

    /// Scenario id remembered while running or paused.
    pub fn active_scenario(&self) -> Option<&str> {
        match &self.state {
            SimulationState::Reset => None,
            SimulationState::Running { scenario_id } | SimulationState::Paused { scenario_id } => {
                Some(scenario_id)
            }
        }
    }

    /// Start (or switch to) a scenario. Starting while another scenario
    /// runs replaces it — start overwrites active. Callers validate the
    /// id against the catalog before invoking; `start_unchecked` exists
    /// so the desk can do the catalog lookup once and keep this machine
    /// store-free.
    pub fn start_unchecked(&mut self, scenario_id: EntityId) {
        log::info!("simulation: running scenario {scenario_id}");
        self.state = SimulationState::Running { scenario_id };
    }

    /// Pause the running scenario. A documented no-op when nothing is
    /// running; returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            SimulationState::Running { scenario_id } => {
                log::info!("simulation: paused scenario {scenario_id}");
                self.state = SimulationState::Paused { scenario_id };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Return to Reset from any state, forgetting the scenario id.
    pub fn reset(&mut self) {
        log::info!("simulation: reset");
        self.state = SimulationState::Reset;
    }
}
