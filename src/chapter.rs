//! 章节文件处理模块
//!
//! 负责单个章节文件的读取、解码与段落渲染。
//! 主编码为 UTF-8，解码失败时回退尝试 GBK。

use encoding_rs::GBK;
use std::path::Path;

use crate::error::{MergeError, Result};

/// 段落分隔线
pub const SECTION_RULE: &str = "\n\n---\n\n";

/// 单个章节的处理结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterOutcome {
    /// UTF-8 读取成功
    Merged,
    /// GBK 回退读取成功
    MergedGbk,
    /// 文件缺失，写入占位段落
    Missing,
    /// 读取失败，写入错误段落
    Failed,
    /// UTF-8 与 GBK 均解码失败，不写入段落
    Undecodable,
}

impl ChapterOutcome {
    /// 是否计入成功数
    pub fn is_success(&self) -> bool {
        matches!(self, ChapterOutcome::Merged | ChapterOutcome::MergedGbk)
    }
}

/// 章节处理结果
#[derive(Debug)]
pub struct ChapterResult {
    /// 清单中的文件名
    pub filename: String,
    /// 清单中的序号 (从 1 开始)
    pub index: usize,
    /// 渲染好的输出段落 (Undecodable 时为 None)
    pub section: Option<String>,
    /// 处理结局
    pub outcome: ChapterOutcome,
    /// 错误信息 (失败时)
    pub error: Option<String>,
}

impl ChapterResult {
    /// 成功结果
    fn merged(filename: String, index: usize, section: String, gbk: bool) -> Self {
        Self {
            filename,
            index,
            section: Some(section),
            outcome: if gbk {
                ChapterOutcome::MergedGbk
            } else {
                ChapterOutcome::Merged
            },
            error: None,
        }
    }

    /// 文件缺失结果
    fn missing(filename: String, index: usize, section: String) -> Self {
        Self {
            filename,
            index,
            section: Some(section),
            outcome: ChapterOutcome::Missing,
            error: None,
        }
    }

    /// 读取失败结果
    fn failed(filename: String, index: usize, section: String, error: String) -> Self {
        Self {
            filename,
            index,
            section: Some(section),
            outcome: ChapterOutcome::Failed,
            error: Some(error),
        }
    }

    /// 解码失败结果 (不产生段落)
    fn undecodable(filename: String, index: usize, error: String) -> Self {
        Self {
            filename,
            index,
            section: None,
            outcome: ChapterOutcome::Undecodable,
            error: Some(error),
        }
    }
}

/// 处理单个章节文件
///
/// # Arguments
/// * `content_dir` - 内容目录
/// * `index` - 清单序号 (从 1 开始)
/// * `filename` - 章节文件名
///
/// # Returns
/// 包含渲染段落与结局的 `ChapterResult`，所有错误均被捕获为结果而非返回 Err
pub fn process_chapter(content_dir: &Path, index: usize, filename: &str) -> ChapterResult {
    let path = content_dir.join(filename);

    if !path.exists() {
        let section = render_missing_section(filename);
        return ChapterResult::missing(filename.to_string(), index, section);
    }

    match read_chapter(&path) {
        Ok((content, gbk)) => {
            let section = render_content_section(index, filename, &content);
            ChapterResult::merged(filename.to_string(), index, section, gbk)
        }
        Err(e @ MergeError::ChapterDecodeError { .. }) => {
            ChapterResult::undecodable(filename.to_string(), index, e.to_string())
        }
        Err(e) => {
            let message = e.to_string();
            let section = render_error_section(filename, &message);
            ChapterResult::failed(filename.to_string(), index, section, message)
        }
    }
}

/// 读取并解码章节文件，返回去除首尾空白的内容
///
/// 先按 UTF-8 严格解码，失败后按 GBK 严格解码。
/// 返回值的 bool 表示是否使用了 GBK 回退。
pub fn read_chapter(path: &Path) -> Result<(String, bool)> {
    let bytes = std::fs::read(path).map_err(|e| MergeError::ChapterReadError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok((text.trim().to_string(), false));
    }

    let (decoded, had_errors) = GBK.decode_without_bom_handling(&bytes);
    if had_errors {
        return Err(MergeError::ChapterDecodeError {
            file: path.to_path_buf(),
        });
    }

    Ok((decoded.trim().to_string(), true))
}

/// 渲染正文段落: 分隔线 + 来源注释 + 内容
pub fn render_content_section(index: usize, filename: &str, content: &str) -> String {
    format!(
        "{}<!-- 第 {} 篇 | 来源: {} -->\n\n{}\n\n",
        SECTION_RULE, index, filename, content
    )
}

/// 渲染缺失占位段落
pub fn render_missing_section(filename: &str) -> String {
    format!("{}## ⚠️ {}\n\n*此文件缺失*\n\n", SECTION_RULE, filename)
}

/// 渲染错误占位段落
pub fn render_error_section(filename: &str, error: &str) -> String {
    format!("{}## ❌ {}\n\n*读取失败: {}*\n\n", SECTION_RULE, filename, error)
}
