use thiserror::Error;

use rd_fleet::FleetError;
use rd_network::NetworkError;
use rd_search::SearchError;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("resource model error: {0}")]
    Fleet(#[from] FleetError),

    #[error("route search error: {0}")]
    Search(#[from] SearchError),
}

pub type MissionResult<T> = Result<T, MissionError>;
