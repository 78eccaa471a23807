//! 错误类型定义模块
//!
//! 定义 mdmerge 中可能出现的所有错误类型。

use std::path::PathBuf;
use thiserror::Error;

/// mdmerge 中可能出现的错误类型
#[derive(Error, Debug)]
pub enum MergeError {
    /// 内容目录不存在
    #[error("找不到 {path} 目录")]
    ContentDirNotFound { path: PathBuf },

    /// 配置文件不存在
    #[error("找不到配置文件 {path}")]
    ConfigNotFound { path: PathBuf },

    /// 配置文件解析失败
    #[error("配置文件格式不正确 - {reason}")]
    ConfigParseError { reason: String },

    /// chapters 列表为空
    #[error("chapters 为空")]
    EmptyChapters,

    /// 输出文件创建失败
    #[error("无法创建输出文件 ({path}): {reason}")]
    OutputCreateError { path: PathBuf, reason: String },

    /// 输出文件写入失败
    #[error("写入失败: {reason}")]
    WriteError { reason: String },

    /// 章节文件读取失败
    #[error("读取失败 ({file}): {reason}")]
    ChapterReadError { file: PathBuf, reason: String },

    /// 章节文件解码失败 (UTF-8 与 GBK 均不可用)
    #[error("解码失败 ({file}): 不是有效的 UTF-8 或 GBK 文本")]
    ChapterDecodeError { file: PathBuf },
}

/// mdmerge 结果类型别名
pub type Result<T> = std::result::Result<T, MergeError>;
