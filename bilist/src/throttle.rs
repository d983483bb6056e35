/// Result of a throttled invocation attempt.
///
/// `Suppressed` is distinct from whatever the wrapped callback returns, so a callback returning
/// `()` still reports `Passed(())` when it ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Throttled<R> {
    Passed(R),
    Suppressed,
}

impl<R> Throttled<R> {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }

    pub fn passed(self) -> Option<R> {
        match self {
            Self::Passed(r) => Some(r),
            Self::Suppressed => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Throttled<U> {
        match self {
            Self::Passed(r) => Throttled::Passed(f(r)),
            Self::Suppressed => Throttled::Suppressed,
        }
    }
}

/// A leading-edge rate limiter driven by host timestamps.
///
/// A call passes when no call has passed yet, or when at least `cooldown_ms` elapsed since the
/// last call that passed. Calls inside the window are dropped: no queue, no trailing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrottleGate {
    cooldown_ms: u64,
    last_passed_ms: Option<u64>,
}

impl ThrottleGate {
    pub const DEFAULT_COOLDOWN_MS: u64 = 1000;

    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_passed_ms: None,
        }
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Changes the cooldown. The last-pass timestamp is kept.
    pub fn set_cooldown_ms(&mut self, cooldown_ms: u64) {
        self.cooldown_ms = cooldown_ms;
    }

    pub fn last_passed_ms(&self) -> Option<u64> {
        self.last_passed_ms
    }

    /// Returns `true` if a call at `now_ms` would pass, without recording anything.
    pub fn is_open(&self, now_ms: u64) -> bool {
        match self.last_passed_ms {
            None => true,
            // A clock that went backwards counts as no elapsed time.
            Some(last) => now_ms.saturating_sub(last) >= self.cooldown_ms,
        }
    }

    pub fn try_pass(&mut self, now_ms: u64) -> bool {
        if !self.is_open(now_ms) {
            btrace!(now_ms, cooldown_ms = self.cooldown_ms, "ThrottleGate: suppressed");
            return false;
        }
        self.last_passed_ms = Some(now_ms);
        true
    }

    pub fn call<R>(&mut self, now_ms: u64, f: impl FnOnce() -> R) -> Throttled<R> {
        if self.try_pass(now_ms) {
            Throttled::Passed(f())
        } else {
            Throttled::Suppressed
        }
    }
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COOLDOWN_MS)
    }
}

/// A callback bundled with its [`ThrottleGate`].
#[derive(Clone, Debug)]
pub struct Throttle<F> {
    gate: ThrottleGate,
    f: F,
}

impl<F> Throttle<F> {
    pub fn new(f: F, cooldown_ms: u64) -> Self {
        Self {
            gate: ThrottleGate::new(cooldown_ms),
            f,
        }
    }

    pub fn gate(&self) -> &ThrottleGate {
        &self.gate
    }

    pub fn set_cooldown_ms(&mut self, cooldown_ms: u64) {
        self.gate.set_cooldown_ms(cooldown_ms);
    }

    /// Swaps the wrapped callback. The gate (and its last-pass timestamp) carries over.
    pub fn with_callback<G>(self, f: G) -> Throttle<G> {
        Throttle { gate: self.gate, f }
    }

    pub fn call<R>(&mut self, now_ms: u64) -> Throttled<R>
    where
        F: FnMut() -> R,
    {
        let f = &mut self.f;
        self.gate.call(now_ms, f)
    }
}
