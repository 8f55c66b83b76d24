use thiserror::Error;

pub type SticksResult<T> = Result<T, SticksError>;

#[derive(Debug, Error)]
pub enum SticksError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
