//! CLI 参数解析模块
//!
//! 使用 clap 定义并解析命令行参数。
//! 所有参数均有默认值，不带参数运行即按 `config.json` + `content/` 合并。

use clap::Parser;
use std::path::PathBuf;

/// mdmerge CLI 参数结构体
#[derive(Parser, Debug)]
#[command(
    name = "mdmerge",
    author = "YourName <your@email.com>",
    version,
    about = "MARKDOWN CHAPTER MERGER - 根据 config.json 章节顺序合并 markdown 文件的 CLI 工具",
    long_about = r#"
MARKDOWN CHAPTER MERGER
=======================

根据配置文件中 chapters 的顺序，
将内容目录下的 markdown 文件整合为单个输出文件。

特点:
  • 按清单顺序逐个合并，带来源注释
  • 缺失/错误文件写入占位段落，不中断整体合并
  • UTF-8 解码失败时自动尝试 GBK 编码
  • 详细的合并统计信息

示例:
  mdmerge
  mdmerge -c book.json -d chapters -o book.md
  mdmerge --dry-run
  mdmerge --verbose
"#
)]
pub struct Args {
    /// 配置文件路径 (包含 chapters 与 siteInfo)
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// 章节文件所在的内容目录
    #[arg(short = 'd', long, default_value = "content")]
    pub content_dir: PathBuf,

    /// 生成的合并输出文件路径
    #[arg(short, long, default_value = "merged_output.md")]
    pub output: PathBuf,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 只显示将要合并的章节列表，不实际写入
    #[arg(long)]
    pub dry_run: bool,
}
