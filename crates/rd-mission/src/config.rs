/// Run-level knobs for [`Mission`](crate::Mission).
///
/// The search strategy is chosen per call to `run`, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissionConfig {
    /// Stop with [`Outcome::Halted`](crate::Outcome::Halted) once the clock
    /// reaches this tick.  `None` runs until a terminal state.
    pub max_ticks: Option<u64>,
}

impl MissionConfig {
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }
}
