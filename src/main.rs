//! mdmerge - MARKDOWN CHAPTER MERGER
//!
//! 主入口

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mdmerge::{error::MergeError, Args, Merger};

fn main() -> Result<()> {
    let args = Args::parse();

    // 头部输出
    print_header(&args);

    let merger = Merger::new(args.config, args.content_dir, args.output).with_verbose(args.verbose);

    // 前置检查: 失败只打印提示，不产生输出文件，进程仍正常退出
    let config = match merger.prepare() {
        Ok(config) => config,
        Err(MergeError::EmptyChapters) => {
            println!("{} chapters 为空", "⚠️ 警告:".yellow());
            return Ok(());
        }
        Err(e) => {
            println!("{} {}", "❌ 错误:".red(), e);
            return Ok(());
        }
    };

    // 干跑模式
    if args.dry_run {
        print_dry_run(&config.chapters);
        return Ok(());
    }

    println!(
        "\n{} 开始合并 {} 个文件...\n",
        "🚀".bright_white(),
        config.chapters.len().to_string().bright_green()
    );

    // 合并过程中的错误同样只打印提示
    match merger.merge(&config) {
        Ok(report) => report.stats.print_summary(&merger.output_path),
        Err(e) => println!("{} {}", "❌ 错误:".red(), e),
    }

    Ok(())
}

/// 头部输出
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 📚 MARKDOWN CHAPTER MERGER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 配置文件: {:?}", "⚙️".bright_yellow(), args.config);
    println!("  {} 内容目录: {:?}", "📂".bright_cyan(), args.content_dir);
    println!("  {} 输出文件: {:?}", "📄".bright_green(), args.output);

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "干跑模式 (不实际写入)".yellow()
        );
    }

    if args.verbose {
        println!("  {} {}", "🔍".bright_cyan(), "详细输出模式".cyan());
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 干跑输出: 按清单顺序列出将要合并的章节
fn print_dry_run(chapters: &[String]) {
    println!("\n{}", "📋 待合并章节列表:".bright_cyan());
    for (i, filename) in chapters.iter().enumerate() {
        println!("  {}. {}", i + 1, filename);
    }
    println!(
        "\n{} 共 {} 个章节待合并。",
        "ℹ️".bright_blue(),
        chapters.len().to_string().bright_green()
    );
}
