//! # 完整性校验模块
//!
//! 负责计算载荷的 MD5 摘要并进行比对。
//! 嵌入与提取均对内存中的载荷字节计算摘要，以 32 个小写十六进制
//! 字符的文本形式参与比较；另提供分块读取的文件摘要接口，
//! 用于对大于内存的文件独立计算摘要。

use crate::constants::DIGEST_CHUNK_SIZE;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// 完整性校验的结果。
///
/// 校验只是建议性的：摘要不匹配并不阻止载荷被写出，
/// 由调用方决定如何报告。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// 重新计算的摘要与嵌入的摘要一致。
    Verified,
    /// 摘要不一致，载荷可能已被篡改或损坏。
    Mismatch {
        /// 帧中嵌入的摘要文本。
        embedded: String,
        /// 对恢复出的载荷重新计算得到的摘要文本。
        recovered: String,
    },
}

/// 分块读取文件并计算其 MD5 摘要，返回小写十六进制文本。
///
/// 每次读取 [`DIGEST_CHUNK_SIZE`] 字节，因此可以处理大于内存的文件。
pub fn file_digest_hex(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut chunk = [0u8; DIGEST_CHUNK_SIZE];

    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// 计算内存中一段字节的 MD5 摘要，返回小写十六进制文本。
pub fn bytes_digest_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// 校验恢复出的载荷是否与嵌入的摘要一致。
///
/// 比较按大小写敏感的字符串进行。本函数从不失败，
/// 不一致时返回 [`Verification::Mismatch`] 并附带两个摘要。
pub fn verify_payload(payload: &[u8], embedded: &str) -> Verification {
    let recovered = bytes_digest_hex(payload);
    if recovered == embedded {
        Verification::Verified
    } else {
        Verification::Mismatch {
            embedded: embedded.to_string(),
            recovered,
        }
    }
}
