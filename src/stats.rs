//! 统计模块
//!
//! 负责合并统计的收集与汇总输出。

use colored::Colorize;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// 合并统计结构体
#[derive(Debug, Default)]
pub struct MergeStats {
    /// 清单章节总数
    pub total_chapters: usize,
    /// 成功合并数
    pub success_count: AtomicUsize,
    /// 缺失文件数
    pub missing_count: AtomicUsize,
    /// 错误文件数
    pub error_count: AtomicUsize,
    /// 开始时间
    start_time: Option<Instant>,
}

impl MergeStats {
    /// 创建新的统计实例
    pub fn new(total_chapters: usize) -> Self {
        Self {
            total_chapters,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 成功计数 +1
    pub fn increment_success(&self) {
        self.success_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 缺失计数 +1
    pub fn increment_missing(&self) {
        self.missing_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 错误计数 +1
    pub fn increment_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 返回成功数
    pub fn get_success_count(&self) -> usize {
        self.success_count.load(Ordering::Relaxed)
    }

    /// 返回缺失数
    pub fn get_missing_count(&self) -> usize {
        self.missing_count.load(Ordering::Relaxed)
    }

    /// 返回错误数
    pub fn get_error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// 返回经过时间
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 输出合并统计汇总
    pub fn print_summary(&self, output_path: &Path) {
        let success = self.get_success_count();
        let missing = self.get_missing_count();
        let errors = self.get_error_count();

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " ✨ 合并完成!".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} 总计:    {} 个文件", "📁".bright_cyan(), self.total_chapters);
        println!(
            "  {} 成功:    {} 个",
            "✅".bright_green(),
            success.to_string().green()
        );

        if missing > 0 {
            println!(
                "  {} 缺失:    {} 个",
                "⚠️".bright_yellow(),
                missing.to_string().yellow()
            );
        } else {
            println!("  {} 缺失:    {} 个", "✅".bright_green(), "0".green());
        }

        if errors > 0 {
            println!(
                "  {} 错误:    {} 个",
                "❌".bright_red(),
                errors.to_string().red()
            );
        } else {
            println!("  {} 错误:    {} 个", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 处理时间: {:.2}秒",
            "⏱️".bright_cyan(),
            self.elapsed().as_secs_f64()
        );
        println!("  {} 输出文件: {:?}", "📄".bright_green(), output_path);

        println!("{}", "═".repeat(50).bright_blue());
    }
}
