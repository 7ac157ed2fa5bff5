use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum VitalogError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("数据解析失败: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("数据序列化失败: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("无法获取用户数据目录")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, VitalogError>;
