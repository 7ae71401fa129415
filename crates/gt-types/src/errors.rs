use thiserror::Error;

/// Main error type for the GraphTune system
#[derive(Error, Debug)]
pub enum TuneError {
    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Unknown hyperparameter: {name}")]
    UnknownParameter { name: String },

    #[error("Hyperparameter {name} expects {expected}, got {got}")]
    ParameterType {
        name: String,
        expected: &'static str,
        got: String,
    },

    #[error("Split not found in training output: {split}")]
    MissingSplit { split: String },

    #[error("Metric map is empty, no scalar score can be computed")]
    EmptyMetric,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Training-flow errors
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Unknown flow kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Training failed: {message}")]
    Train { message: String },

    #[error("Data loading failed: {message}")]
    Data { message: String },
}

/// Result type alias for GraphTune operations
pub type TuneResult<T> = Result<T, TuneError>;
