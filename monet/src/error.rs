use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("at least one trial per strategy is required")]
    NoTrials,
    #[error("no games were recorded, so there is nothing to summarize")]
    EmptyAccumulator,
}
