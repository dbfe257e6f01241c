//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::carrier::Carrier;
use crate::checksum::{bytes_digest_hex, verify_payload, Verification};
use crate::cli::{EmbedArgs, ExtractArgs};
use crate::steganography::{
    build_frame, check_capacity, embed_frame, extract_frame, required_bits, split_frame,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责读取载体图像和载荷文件、在任何写入发生之前检查隐写容量、
/// 计算载荷的 MD5 摘要、构建并嵌入帧，最后将结果图像以 PNG 写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或载荷文件。
/// * 图像的样本数不足以容纳载荷、摘要和结束标记。
/// * 无法写入到目标图像文件。
///
/// 任何一步失败时都不会产生输出文件，载体图像也不会被修改。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_embed_dest(&args.image));

    ensure_writable(&dest, args.force)?;

    let mut carrier = Carrier::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = fs::read(&args.payload).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.payload.to_string_lossy().red().bold()
        )
    })?;

    check_capacity(carrier.capacity(), payload.len()).with_context(|| {
        format!(
            "Not enough space in the image to hide the payload. \nRequired: {} bits, Available: {} bits",
            required_bits(payload.len()).to_string().red().bold(),
            carrier.capacity().to_string().green().bold()
        )
    })?;

    // 对已读入内存的字节计算摘要，保证摘要与实际嵌入的载荷一致，
    // 即使源文件在读取后被修改。
    let digest = bytes_digest_hex(&payload);

    let frame = build_frame(&payload, &digest);
    embed_frame(carrier.samples_mut(), &frame).with_context(|| {
        "Failed to write the frame into the image samples. \nThe capacity check should have caught this earlier."
    })?;

    carrier.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Embedded {} bytes, MD5: {}",
        payload.len().to_string().green().bold(),
        digest.green()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取隐写图像、从样本的最低有效位恢复帧、拆分出载荷与嵌入的摘要，
/// 将载荷写入目标文件，并在内存中重新计算摘要进行比对。
///
/// 摘要不匹配并不是错误：载荷文件仍会被写出，本函数返回
/// [`Verification::Mismatch`] 并打印警告，由调用方决定严重程度。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 扫描完全部样本仍未找到结束标记 (图像不含隐藏数据)。
/// * 恢复出的帧太短，无法包含摘要和结束标记。
/// * 无法写入到目标载荷文件。
///
/// 结束标记未找到或帧格式不合法时，不会写出任何部分数据。
pub fn handle_extract(args: ExtractArgs) -> Result<Verification> {
    let output = args
        .output
        .unwrap_or_else(|| default_extract_output(&args.image));

    ensure_writable(&output, args.force)?;

    let carrier = Carrier::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let frame = extract_frame(carrier.samples()).with_context(|| {
        format!(
            "No hidden payload found in '{}'. \nThe image may not contain hidden data or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let (payload, embedded_digest) = split_frame(&frame).with_context(|| {
        format!(
            "The data recovered from '{}' is malformed. \nIt is too short to contain a digest and end marker.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&output, payload).with_context(|| {
        format!(
            "Unable to write to target payload file: {}",
            output.to_string_lossy().red().bold()
        )
    })?;

    let verification = verify_payload(payload, embedded_digest);
    match &verification {
        Verification::Verified => {
            println!(
                "The payload has been successfully recovered and saved: {}",
                output.to_string_lossy().green().bold()
            );
            println!("MD5 verified: {}", embedded_digest.green().bold());
        }
        Verification::Mismatch {
            embedded,
            recovered,
        } => {
            println!(
                "The payload has been recovered and saved: {}",
                output.to_string_lossy().yellow().bold()
            );
            eprintln!(
                "{} MD5 verification failed. \nEmbedded:  {}\nRecovered: {}",
                "Warning:".yellow().bold(),
                embedded.red().bold(),
                recovered.red().bold()
            );
        }
    }

    Ok(verification)
}

/// 为 'embed' 命令推导默认输出路径：载体图像旁的 "stego_<原文件名>.png"。
fn default_embed_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    image.with_file_name(format!("stego_{stem}.png"))
}

/// 为 'extract' 命令推导默认输出路径：隐写图像旁的 "recovered_<原文件名>.bin"。
fn default_extract_output(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map_or_else(|| "payload".to_string(), |s| s.to_string_lossy().into_owned());
    image.with_file_name(format!("recovered_{stem}.bin"))
}

/// 覆盖保护：输出文件已存在且未指定 `--force` 时拒绝执行。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
