//! mdmerge - MARKDOWN CHAPTER MERGER
//!
//! 根据 config.json 中 chapters 的顺序，把内容目录下的 markdown
//! 文件整合为单个输出文件的 CLI 工具。
//!
//! # 主要功能
//!
//! - 📚 **清单顺序合并**: 严格按 chapters 列表顺序拼接，带来源注释
//! - 🛡️ **软失败**: 缺失/错误文件写入占位段落，不中断整体合并
//! - 🔤 **编码回退**: UTF-8 解码失败时自动尝试 GBK
//! - 📄 **文件头**: 输出站点标题、作者、网址与生成时间
//! - 📊 **统计汇总**: 成功/缺失/错误计数与耗时
//! - 🧪 **干跑模式**: 只列出将要合并的章节，不实际写入
//! - 🎨 **彩色输出**: 可读性高的彩色终端输出
//!
//! # 示例
//!
//! ```bash
//! # 默认: 读 config.json，合并 content/ 到 merged_output.md
//! mdmerge
//!
//! # 指定路径
//! mdmerge -c book.json -d chapters -o book.md
//!
//! # 干跑
//! mdmerge --dry-run
//! ```

pub mod chapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod merger;
pub mod stats;

// Re-exports for convenient access
pub use chapter::{process_chapter, read_chapter, ChapterOutcome, ChapterResult};
pub use cli::Args;
pub use config::{Config, SiteInfo};
pub use error::{MergeError, Result};
pub use merger::{render_header, MergeReport, Merger};
pub use stats::MergeStats;
