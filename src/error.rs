//! # 核心错误类型模块
//!
//! 定义隐写核心在嵌入与提取过程中可能产生的所有错误。
//! 每一类失败都是一个可匹配的枚举成员，调用方据此决定如何处置，
//! 核心本身从不 panic。

use thiserror::Error;

/// 隐写核心的错误类型。
#[derive(Error, Debug)]
pub enum StegoError {
    /// 载体图像的样本数不足以容纳整个帧。
    /// 该检查在任何写入发生之前完成，失败时载体不会被修改。
    #[error(
        "Not enough capacity in the carrier image: required {required} bits, available {available} bits"
    )]
    CapacityExceeded {
        /// 嵌入整个帧所需的比特数。
        required: usize,
        /// 载体图像可提供的比特数 (即样本数)。
        available: usize,
    },

    /// 扫描完全部样本仍未找到结束标记。
    /// 说明该图像不含隐藏数据，或数据已损坏；不会产生部分输出。
    #[error("End marker not found; the image does not appear to contain hidden data")]
    MarkerNotFound,

    /// 恢复出的帧太短，无法同时容纳摘要文本与结束标记。
    #[error("Recovered frame is too short to contain a digest and end marker ({len} bytes)")]
    MalformedFrame {
        /// 恢复出的帧的实际长度 (字节)。
        len: usize,
    },

    /// 图像解码或编码失败。
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// 文件读写失败。
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
