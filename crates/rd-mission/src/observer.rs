//! Mission observer trait: the reporting sink.

use rd_core::Tick;
use rd_fleet::Operation;
use rd_network::Destructible;

use crate::{Assignment, MissionReport};

/// Callbacks invoked by [`Mission::run`][crate::Mission::run] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: operation printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl MissionObserver for Printer {
///     fn on_operation(&mut self, op: &Operation) {
///         println!("{op}");
///     }
/// }
/// ```
pub trait MissionObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per element that was actually destroyed this tick.
    fn on_destroyed(&mut self, _tick: Tick, _element: &Destructible) {}

    /// Called after every planning round: the initial one at tick 0 and
    /// each one triggered by destruction.
    fn on_replan(&mut self, _tick: Tick, _assignment: &Assignment) {}

    /// Called for each operation as it is executed.
    fn on_operation(&mut self, _op: &Operation) {}

    /// Called at the end of each tick with the number of operations executed.
    fn on_tick_end(&mut self, _tick: Tick, _executed: usize) {}

    /// Called once after the loop stops.
    fn on_mission_end(&mut self, _report: &MissionReport) {}
}

/// A [`MissionObserver`] that does nothing.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}
