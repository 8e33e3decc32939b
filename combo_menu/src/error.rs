//! 候选列表加载的错误类型。

use std::path::PathBuf;

/// 候选列表操作的 `Result` 别名。
pub type Result<T> = std::result::Result<T, MenuError>;

/// 加载候选列表时可能出现的错误。
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// 文件读取失败
    #[error("Failed to read menu list '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文件里没有任何候选
    #[error("Menu list '{path}' has no entries")]
    Empty { path: PathBuf },
}

impl MenuError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
