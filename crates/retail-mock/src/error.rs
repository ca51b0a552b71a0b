use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("weighted distribution error: {0}")]
    Distribution(#[from] rand::distributions::WeightedError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type MockResult<T> = Result<T, MockError>;
