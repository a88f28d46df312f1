use crate::rigid_body::Vec2;

/// Latest and previous-frame pointer positions, backdrop-local px.
///
/// Pointer events only overwrite `current`; the frame loop reads the
/// displacement once and then calls `advance`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    current: Option<Vec2>,
    previous: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position. Bursts collapse into the last value.
    pub fn record(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            return;
        }
        self.current = Some(pos);
        // First sighting: no motion yet.
        if self.previous.is_none() {
            self.previous = Some(pos);
        }
    }

    pub fn current(&self) -> Option<Vec2> {
        self.current
    }

    pub fn previous(&self) -> Option<Vec2> {
        self.previous
    }

    /// Movement since the last `advance`
    pub fn displacement(&self) -> Vec2 {
        match (self.current, self.previous) {
            (Some(c), Some(p)) => c - p,
            _ => Vec2::zero(),
        }
    }

    /// Move `previous` up to `current`. Call exactly once per frame.
    pub fn advance(&mut self) {
        self.previous = self.current;
    }

    /// Forget the pointer (e.g. it left the window)
    pub fn clear(&mut self) {
        self.current = None;
        self.previous = None;
    }
}
