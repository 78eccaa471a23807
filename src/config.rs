//! 配置文件处理模块
//!
//! 负责 config.json 的读取与解析。配置在一次运行中只加载一次，之后只读。

use serde::Deserialize;
use std::path::Path;

use crate::error::{MergeError, Result};

/// 站点信息 (所有字段可选，缺省时渲染回退文本或直接省略)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteInfo {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub other: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
}

/// 合并配置: chapters 定义合并顺序，siteInfo 用于输出文件头
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// 章节文件名列表，顺序即输出顺序
    #[serde(default)]
    pub chapters: Vec<String>,

    /// 站点信息
    #[serde(rename = "siteInfo", default)]
    pub site_info: SiteInfo,
}

impl Config {
    /// 从指定路径加载配置文件
    ///
    /// 文件不存在与 JSON 格式错误分别返回不同的错误类型，
    /// 以便调用方输出对应的提示信息。
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|_| MergeError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;

        serde_json::from_str(&text).map_err(|e| MergeError::ConfigParseError {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "chapters": ["01.md", "02.md"],
                "siteInfo": {
                    "title": "测试站点",
                    "subtitle": "副标题",
                    "author": "张三",
                    "url": "https://example.com"
                }
            }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.chapters, vec!["01.md", "02.md"]);
        assert_eq!(config.site_info.title.as_deref(), Some("测试站点"));
        assert_eq!(config.site_info.author.as_deref(), Some("张三"));
        assert!(config.site_info.other.is_none());
    }

    #[test]
    fn test_load_missing_fields_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"chapters": ["a.md"]}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.chapters.len(), 1);
        assert!(config.site_info.title.is_none());
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"chapters": [], "theme": "dark", "siteInfo": {"title": "t", "lang": "zh"}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.chapters.is_empty());
        assert_eq!(config.site_info.title.as_deref(), Some("t"));
    }

    #[test]
    fn test_load_not_found() {
        let result = Config::load(Path::new("/nonexistent/config.json"));
        assert!(matches!(result, Err(MergeError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"chapters": ["a.md",]"#).unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(MergeError::ConfigParseError { .. })));
    }
}
