//! Mission time model.
//!
//! Simulated time is a monotonically increasing count of whole minutes since
//! scenario start.  Search works with fractional `f64` minutes internally and
//! rounds **up** exactly once, when an operation is stamped, so a vehicle is
//! never scheduled earlier than it can physically act.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute mission time, in whole minutes since scenario start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Minutes elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This tick as fractional minutes, for elapsed-time arithmetic.
    #[inline]
    pub fn as_minutes(self) -> f64 {
        self.0 as f64
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

/// Minutes from `rhs` to `self`, zero when `rhs` is later.  Same as [`Tick::since`].
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Guard against binary floating-point noise (e.g. `11.000000000000002`)
/// pushing an exact value over an integer boundary.
const ROUNDING_EPSILON: f64 = 1e-9;

/// Round fractional minutes up to the next whole tick.
///
/// Negative inputs clamp to `Tick::ZERO`.
#[inline]
pub fn ceil_minutes(minutes: f64) -> Tick {
    if minutes <= 0.0 {
        return Tick::ZERO;
    }
    Tick((minutes - ROUNDING_EPSILON).ceil().max(0.0) as u64)
}

// ── MissionClock ──────────────────────────────────────────────────────────────

/// The global simulated clock threaded through the mission execution loop.
///
/// Holds no heap data; the loop owns it by value and advances it once per
/// iteration.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionClock {
    /// The current tick, advanced by `MissionClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl MissionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Break elapsed time into (hours, minutes) for human-readable logging.
    pub fn elapsed_hm(&self) -> (u64, u64) {
        (self.current_tick.0 / 60, self.current_tick.0 % 60)
    }
}

impl fmt::Display for MissionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.elapsed_hm();
        write!(f, "{} ({:02}:{:02})", self.current_tick, h, m)
    }
}
