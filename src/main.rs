// ==========================================
// 风管配件规格归一化引擎 - 命令行入口
// ==========================================
// 输入: JSON 数组 / CSV 文件,或标准输入
// 输出: 标准输出写归一化结果 JSON; 日志与汇总写标准错误
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use duct_normalizer::{logging, EngineConfig, InputFormat, Normalizer, RecordImporter};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => InputFormat::Json,
            FormatArg::Csv => InputFormat::Csv,
        }
    }
}

#[derive(Parser)]
#[command(name = "duct-normalizer")]
#[command(version, about = "风管配件规格归一化: 原始描述 → 标准目录名称")]
struct Cli {
    /// 输入文件(.json / .csv); 省略时读取标准输入
    input: Option<PathBuf>,

    /// 标准输入的格式
    #[arg(long, value_enum, default_value = "json")]
    format: FormatArg,

    /// 引擎配置文件(JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 使用 rayon 并行处理
    #[arg(long)]
    parallel: bool,

    /// 输出完整批次报告(含批次号与统计)而非仅结果行
    #[arg(long)]
    report: bool,

    /// 日志输出为 JSON
    #[arg(long)]
    json_log: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_log);

    tracing::info!(version = duct_normalizer::VERSION, "{}", duct_normalizer::APP_NAME);

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let importer = RecordImporter::default();
    let outcome = match &cli.input {
        Some(path) => importer
            .import_file(path)
            .with_context(|| format!("无法导入输入文件: {}", path.display()))?,
        None => importer
            .import_reader(cli.format.into(), &mut io::stdin().lock())
            .context("无法解析标准输入")?,
    };

    let normalizer = Normalizer::new(config);
    let report = normalizer.process_batch_with_report(&outcome.records, cli.parallel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.report {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &report.rows)?;
    }
    writeln!(out)?;

    eprintln!(
        "批次 {}: 输入 {} 行, 输出 {} 行, 失败 {} 行, 导入拒绝 {} 行",
        report.batch_id,
        report.input_rows,
        report.output_rows,
        report.failed_rows,
        outcome.rejected.len()
    );

    Ok(())
}
