//! `MissionOutputObserver<W>`: bridges `MissionObserver` to an `OutputWriter`.

use rd_core::Tick;
use rd_fleet::Operation;
use rd_mission::{Assignment, MissionObserver, MissionReport, Scenario};
use rd_network::Destructible;

use crate::row::{CatastropheRow, OperationRecord, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`MissionObserver`] that writes the operation log, tick summaries and
/// the final catastrophe table to any [`OutputWriter`] backend.
///
/// Operations are buffered per tick and written in one batch at tick end.
/// Errors from the writer are stored internally because `MissionObserver`
/// methods have no return value.  After `mission.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct MissionOutputObserver<W: OutputWriter> {
    writer:        W,
    vehicle_names: Vec<String>,
    node_names:    Vec<String>,
    buffer:        Vec<OperationRecord>,
    destroyed:     u32,
    replanned:     bool,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> MissionOutputObserver<W> {
    /// Create an observer backed by `writer`, taking vehicle and node names
    /// from `scenario`.
    pub fn new(writer: W, scenario: &Scenario) -> Self {
        Self {
            writer,
            vehicle_names: scenario.fleet.iter().map(|v| v.name.clone()).collect(),
            node_names:    scenario.network.node_name.clone(),
            buffer:        Vec::new(),
            destroyed:     0,
            replanned:     false,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after `mission.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> MissionObserver for MissionOutputObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.destroyed = 0;
    }

    fn on_destroyed(&mut self, _tick: Tick, _element: &Destructible) {
        self.destroyed += 1;
    }

    fn on_replan(&mut self, _tick: Tick, _assignment: &Assignment) {
        self.replanned = true;
    }

    fn on_operation(&mut self, op: &Operation) {
        let vehicle = self.vehicle_names.get(op.vehicle.index()).map_or("?", String::as_str);
        let node = self.node_names.get(op.node.index()).map_or("?", String::as_str);
        self.buffer.push(OperationRecord::new(op, vehicle, node));
    }

    fn on_tick_end(&mut self, tick: Tick, executed: usize) {
        if !self.buffer.is_empty() {
            let rows = std::mem::take(&mut self.buffer);
            let result = self.writer.write_operations(&rows);
            self.store_err(result);
        }
        let row = TickSummaryRow {
            tick:       tick.0,
            operations: executed as u64,
            destroyed:  self.destroyed,
            replanned:  std::mem::take(&mut self.replanned),
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_mission_end(&mut self, report: &MissionReport) {
        let rows: Vec<CatastropheRow> = report.statuses.iter().map(CatastropheRow::from).collect();
        let result = self.writer.write_catastrophes(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
