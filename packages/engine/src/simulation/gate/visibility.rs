use serde::Serialize;

/// Where the backdrop is in its scroll lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GateState {
    /// Out of view: no spawning, no bodies
    Hidden,
    /// Crossed the entry threshold; spawning starts on the next frame
    Entering,
    /// Spawning or fully spawned
    Active,
}

impl GateState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateState::Hidden => "hidden",
            GateState::Entering => "entering",
            GateState::Active => "active",
        }
    }
}

/// Edge reported by `VisibilityGate::observe`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    Entered,
    Left,
}

/// Turns raw in-view/out-of-view signals into single-shot transitions
#[derive(Clone, Debug)]
pub struct VisibilityGate {
    state: GateState,
    entries: u32,
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Hidden,
            entries: 0,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Times the gate has gone Hidden -> Entering
    pub fn entries(&self) -> u32 {
        self.entries
    }

    /// Feed a visibility signal. Repeats of the current side are ignored.
    pub fn observe(&mut self, visible: bool) -> Option<GateTransition> {
        match (self.state, visible) {
            (GateState::Hidden, true) => {
                self.state = GateState::Entering;
                self.entries += 1;
                Some(GateTransition::Entered)
            }
            (GateState::Entering | GateState::Active, false) => {
                self.state = GateState::Hidden;
                Some(GateTransition::Left)
            }
            _ => None,
        }
    }

    /// Entering -> Active. True exactly once per entry; the caller starts spawning.
    pub fn begin_active(&mut self) -> bool {
        if self.state == GateState::Entering {
            self.state = GateState::Active;
            true
        } else {
            false
        }
    }

    /// Re-arm an in-view gate after the world was rebuilt
    pub fn restart(&mut self) {
        if self.state == GateState::Active {
            self.state = GateState::Entering;
        }
    }
}
