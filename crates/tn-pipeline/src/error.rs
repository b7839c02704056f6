use tn_graph::GraphError;
use tn_toll::TollError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Toll(#[from] TollError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
