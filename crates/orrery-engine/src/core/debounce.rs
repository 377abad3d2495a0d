/// Trailing-edge debouncer polled from the frame loop.
///
/// Each `schedule` cancels the pending value and restarts the quiet
/// period. `poll` hands the value out once, after `delay` seconds have
/// passed since the last `schedule`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: f64) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value; it fires at `now + delay`.
    pub fn schedule(&mut self, value: T, now: f64) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }
}
