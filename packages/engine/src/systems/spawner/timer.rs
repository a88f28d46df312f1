/// Repeating timer driven by the host frame clock.
///
/// The first poll after `start` fires immediately; afterwards one firing is
/// reported per elapsed interval, so a late frame catches up on missed batches.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    interval_ms: f64,
    next_due_ms: Option<f64>,
    running: bool,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(f64::EPSILON),
            next_due_ms: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.next_due_ms = None;
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Number of intervals that came due at or before `now_ms`, at most `limit`.
    ///
    /// Every missed interval is consumed, fired or not.
    pub fn poll(&mut self, now_ms: f64, limit: u32) -> u32 {
        if !self.running || !now_ms.is_finite() {
            return 0;
        }

        let interval = self.interval_ms;
        let due = *self.next_due_ms.get_or_insert(now_ms);
        if now_ms < due {
            return 0;
        }

        let elapsed = ((now_ms - due) / interval).floor() + 1.0;
        let next = due + elapsed * interval;
        self.next_due_ms = Some(if next > now_ms { next } else { now_ms + interval });

        elapsed.min(limit as f64) as u32
    }
}
