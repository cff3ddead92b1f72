//! `rd-output`: mission output writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                               |
//! |-----------|---------|-------------------------------------------------------------|
//! | *(none)*  | CSV     | `operations.csv`, `tick_summaries.csv`, `catastrophes.csv`  |
//! | `sqlite`  | SQLite  | `output.db`                                                 |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`MissionOutputObserver`], which implements `rd_mission::MissionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rd_output::{CsvWriter, MissionOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = MissionOutputObserver::new(writer, mission.scenario());
//! mission.run(SearchStrategy::Ucs, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MissionOutputObserver;
pub use row::{CatastropheRow, OperationRecord, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
