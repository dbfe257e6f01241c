//! # 载体图像模块
//!
//! 隐写核心与图像格式之间的唯一边界。
//! 解码后图像被统一为 RGBA8，以行优先、通道交错的顺序暴露为
//! 一段扁平的样本缓冲区；核心只把它当作可写的字节序列，
//! 不关心任何容器格式的细节。

use crate::error::StegoError;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// 一次嵌入或提取操作所独占的载体图像。
pub struct Carrier {
    image: RgbaImage,
}

impl Carrier {
    /// 解码图像文件并统一为 RGBA8 样本。
    pub fn open(path: &Path) -> Result<Self, StegoError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self { image })
    }

    /// 载体的隐写容量，即样本总数 (每个样本承载 1 比特)。
    pub fn capacity(&self) -> usize {
        self.image.as_raw().len()
    }

    /// 以只读方式访问扁平的样本缓冲区。
    pub fn samples(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// 以可写方式访问扁平的样本缓冲区。
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    /// 将载体编码为 PNG 写入目标路径。
    ///
    /// 无论输出路径的扩展名是什么都使用 PNG：输出必须是无损格式，
    /// 否则嵌入的最低有效位会在再编码中丢失。
    pub fn save(&self, path: &Path) -> Result<(), StegoError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
