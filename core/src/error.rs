use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DropError {
    #[error("Column is outside the board")]
    InvalidColumn,
    #[error("Column has no empty row left")]
    ColumnFull,
    #[error("Game already ended, no new drops are accepted")]
    GameAlreadyOver,
}

pub type Result<T> = core::result::Result<T, DropError>;
