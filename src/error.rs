use thiserror::Error;

pub type HookResult<T> = Result<T, HookError>;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
