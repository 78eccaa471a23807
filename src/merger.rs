//! 合并执行模块
//!
//! 按清单顺序把章节文件整合为单个输出文件。
//! 整个流程单线程顺序执行: 先做前置检查，再写文件头，
//! 然后逐章节处理并追加段落，最后刷新缓冲。

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::chapter::{process_chapter, ChapterOutcome, ChapterResult};
use crate::config::{Config, SiteInfo};
use crate::error::{MergeError, Result};
use crate::stats::MergeStats;

/// 合并器
///
/// 持有一次运行所需的全部路径。前置检查 (`prepare`) 与实际合并
/// (`merge`) 分开，出错时不会创建输出文件。
#[derive(Debug)]
pub struct Merger {
    /// 配置文件路径
    pub config_path: PathBuf,
    /// 内容目录
    pub content_dir: PathBuf,
    /// 输出文件路径
    pub output_path: PathBuf,
    /// 详细输出模式
    pub verbose: bool,
}

/// 一次合并的完整报告
#[derive(Debug)]
pub struct MergeReport {
    /// 统计计数
    pub stats: MergeStats,
    /// 按清单顺序的逐章节结果
    pub results: Vec<ChapterResult>,
}

impl Merger {
    /// 创建合并器
    pub fn new(config_path: PathBuf, content_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            config_path,
            content_dir,
            output_path,
            verbose: false,
        }
    }

    /// 设置详细输出模式
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 前置检查: 内容目录存在、配置可解析、chapters 非空
    ///
    /// 任何一项失败都在创建输出文件之前返回错误。
    pub fn prepare(&self) -> Result<Config> {
        if !self.content_dir.exists() {
            return Err(MergeError::ContentDirNotFound {
                path: self.content_dir.clone(),
            });
        }

        let config = Config::load(&self.config_path)?;

        if config.chapters.is_empty() {
            return Err(MergeError::EmptyChapters);
        }

        Ok(config)
    }

    /// 执行合并: 写入文件头，按顺序处理每个章节并追加段落
    ///
    /// 单个章节的缺失/错误不会中断整体流程，只计入统计；
    /// 清单中的重复文件名按出现次数逐次处理，不去重。
    pub fn merge(&self, config: &Config) -> Result<MergeReport> {
        let total = config.chapters.len();
        let stats = MergeStats::new(total);
        let mut results = Vec::with_capacity(total);

        let file = File::create(&self.output_path).map_err(|e| MergeError::OutputCreateError {
            path: self.output_path.clone(),
            reason: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);

        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let header = render_header(&config.site_info, &generated_at);
        write_section(&mut writer, &header)?;

        let pb = create_progress_bar(total);
        let mut errors: Vec<(String, String)> = Vec::new();

        for (i, filename) in config.chapters.iter().enumerate() {
            let index = i + 1;

            if self.verbose {
                println!("[{}/{}] 处理: {}", index, total, filename);
            }

            let result = process_chapter(&self.content_dir, index, filename);

            match result.outcome {
                ChapterOutcome::Merged => {
                    stats.increment_success();
                    if self.verbose {
                        println!("    {} 成功", "✅".green());
                    }
                }
                ChapterOutcome::MergedGbk => {
                    stats.increment_success();
                    if self.verbose {
                        println!("    {} 编码错误，尝试其他编码", "❌".red());
                        println!("    {} 成功 (使用 GBK 编码)", "✅".green());
                    }
                }
                ChapterOutcome::Missing => {
                    stats.increment_missing();
                    if self.verbose {
                        println!("    {} 文件不存在，跳过", "⚠️".yellow());
                    }
                }
                ChapterOutcome::Failed | ChapterOutcome::Undecodable => {
                    stats.increment_error();
                    let message = result.error.clone().unwrap_or_default();
                    if self.verbose {
                        println!("    {} 读取失败: {}", "❌".red(), message);
                    }
                    errors.push((filename.clone(), message));
                }
            }

            if let Some(ref section) = result.section {
                write_section(&mut writer, section)?;
            }

            results.push(result);
            pb.inc(1);
        }

        pb.finish_with_message("完成!");

        writer.flush().map_err(|e| MergeError::WriteError {
            reason: e.to_string(),
        })?;

        print_errors(&errors, self.verbose);

        Ok(MergeReport { stats, results })
    }

    /// 前置检查 + 合并
    pub fn run(&self) -> Result<MergeReport> {
        let config = self.prepare()?;
        self.merge(&config)
    }
}

/// 渲染输出文件头: 站点信息 + 生成时间 + 分隔线
pub fn render_header(site_info: &SiteInfo, generated_at: &str) -> String {
    let mut header = String::new();

    header.push_str(&format!(
        "# {}\n\n",
        site_info.title.as_deref().unwrap_or("Untitled")
    ));
    header.push_str(&format!(
        "**{}**\n\n",
        site_info.subtitle.as_deref().unwrap_or("")
    ));

    if let Some(other) = site_info.other.as_deref().filter(|s| !s.is_empty()) {
        header.push_str(&format!("*{}*\n\n", other));
    }

    header.push_str(&format!(
        "作者: {}\n\n",
        site_info.author.as_deref().unwrap_or("Unknown")
    ));
    header.push_str(&format!("网站: {}\n\n", site_info.url.as_deref().unwrap_or("")));
    header.push_str(&format!("生成时间: {}\n\n", generated_at));
    header.push_str(&"=".repeat(80));
    header.push_str("\n\n");

    header
}

/// 向输出写入一段文本
fn write_section<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|e| MergeError::WriteError {
            reason: e.to_string(),
        })
}

/// 进度条创建
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}

/// 错误文件列表输出
fn print_errors(errors: &[(String, String)], verbose: bool) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 错误文件:".bright_red());
    for (filename, error) in errors {
        println!("  {} {}", "•".red(), filename);
        if verbose {
            println!("    {}", error.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_header_full() {
        let info = SiteInfo {
            title: Some("我的书".to_string()),
            subtitle: Some("一本测试书".to_string()),
            other: Some("备注".to_string()),
            author: Some("李四".to_string()),
            url: Some("https://example.com".to_string()),
        };

        let header = render_header(&info, "2024-01-01 12:00:00");
        assert!(header.starts_with("# 我的书\n\n"));
        assert!(header.contains("**一本测试书**\n\n"));
        assert!(header.contains("*备注*\n\n"));
        assert!(header.contains("作者: 李四\n\n"));
        assert!(header.contains("网站: https://example.com\n\n"));
        assert!(header.contains("生成时间: 2024-01-01 12:00:00\n\n"));
        assert!(header.contains(&"=".repeat(80)));
    }

    #[test]
    fn test_render_header_defaults() {
        let info = SiteInfo::default();
        let header = render_header(&info, "2024-01-01 12:00:00");

        assert!(header.starts_with("# Untitled\n\n"));
        assert!(header.contains("****\n\n"));
        assert!(header.contains("作者: Unknown\n\n"));
        assert!(header.contains("网站: \n\n"));
        // other 为空时整行省略
        assert!(!header.contains("*备注*"));
    }

    #[test]
    fn test_render_header_empty_other_omitted() {
        let info = SiteInfo {
            other: Some(String::new()),
            ..Default::default()
        };
        let header = render_header(&info, "2024-01-01 12:00:00");
        // 空字符串按缺省处理，不渲染斜体行，星号只来自副标题的加粗
        assert_eq!(header.matches('*').count(), 4);
    }
}
