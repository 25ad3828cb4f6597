//! waifu2x命令行工具
//!
//! ```bash
//! waifu2x -i src.png -o dst.png -m models/scale2.0x_model.json -c 4
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use waifu2x::engine::{EngineConfig, fraction};
use waifu2x::{UpscaleConfig, Upscaler};

#[derive(Parser)]
#[command(version, about = "用waifu2x模型放大图像（CPU推理）")]
struct Args {
    /// 输入图像路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输出图像路径，格式由扩展名（png/jpg/jpeg）决定
    #[arg(short, long, default_value = "dst.png")]
    output: PathBuf,

    /// 模型JSON文件路径
    #[arg(short, long)]
    model: PathBuf,

    /// 工作线程数，缺省为逻辑CPU数
    #[arg(short, long)]
    cpu: Option<usize>,

    /// 最近邻预放大倍数
    #[arg(short, long, default_value_t = 2)]
    scale: u32,

    /// 提高日志级别（可重复，如-vv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 不显示进度
    #[arg(short, long)]
    quiet: bool,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run(args: &Args) -> Result<(), waifu2x::Error> {
    let engine = match args.cpu {
        Some(workers) => EngineConfig::default().with_workers(workers),
        None => EngineConfig::default(),
    };
    let config = UpscaleConfig::default()
        .with_scale(args.scale)
        .with_engine(engine);
    let upscaler = Upscaler::from_model_file(&args.model, config)?;

    if args.quiet {
        upscaler.upscale_file(&args.input, &args.output)
    } else {
        let progress = |completed: usize, total: usize| {
            eprint!("\r{:.1}%...", fraction(completed, total) * 100.0);
        };
        let result = upscaler.upscale_file_with_progress(&args.input, &args.output, &progress);
        eprintln!();
        result
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("无法初始化日志: {e}");
    }

    match run(&args) {
        Ok(()) => {
            tracing::info!("已保存到{}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("错误: {e}");
            ExitCode::FAILURE
        }
    }
}
