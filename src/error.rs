use std::io;

use thiserror::Error;

/// ワークスペース読み込みエラー
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Symbol {0} has no view")]
    NotNavigable(String),

    #[error("No workspace component to start from")]
    NoEntry,
}

/// ドライバー（stdin/stdout ループ）のエラー
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
}
