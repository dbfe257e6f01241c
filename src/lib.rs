//! # lsb_seal 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：帧的构建与拆分、
//! 最低有效位的写入与读取，以及基于 MD5 的完整性校验。

// 声明库包含的所有模块。

pub mod carrier;
pub mod checksum;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
