//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取任意二进制载荷，并通过 MD5 摘要校验其完整性。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取任意二进制载荷，并通过 MD5 摘要校验其完整性。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将二进制载荷文件嵌入到无损格式图像 (如 PNG, BMP) 中。
    Embed(EmbedArgs),

    /// 从经过隐写的图像中提取隐藏的载荷并校验完整性。
    Extract(ExtractArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 用于隐写的载体图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的载荷文件路径。
    #[arg(short, long)]
    pub payload: PathBuf,

    /// 嵌入完成后，保存结果图像的输出路径 (始终以 PNG 编码)。
    /// 省略时默认在载体图像旁生成 "stego_<原文件名>.png"。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 当输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已嵌入载荷的隐写图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取出的载荷的保存路径。
    /// 省略时默认在隐写图像旁生成 "recovered_<原文件名>.bin"。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 当输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}
