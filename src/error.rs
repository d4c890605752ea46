use thiserror::Error;

pub type PlotGridResult<T> = Result<T, PlotGridError>;

#[derive(Debug, Error)]
pub enum PlotGridError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("import failed: {0}")]
    Import(String),

    #[error("template error: {0}")]
    Template(String),
}
