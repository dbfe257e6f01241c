use crate::constants::{DIGEST_HEX_LEN, END_MARKER, MARKER_LEN, TRAILER_LEN};
use crate::error::StegoError;

/// 构建待嵌入的帧：载荷 ‖ 摘要文本 ‖ 结束标记。
pub fn build_frame(payload: &[u8], digest_hex: &str) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + TRAILER_LEN);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(digest_hex.as_bytes());
    frame.extend_from_slice(END_MARKER);
    frame
}

/// 嵌入指定长度的载荷所需的比特数 (每个样本承载 1 比特)。
pub fn required_bits(payload_len: usize) -> usize {
    (payload_len + TRAILER_LEN) * 8
}

/// 在任何写入发生之前检查载体容量是否足够。
/// 所需容量由载荷长度直接推算，而非等到比特流构建完毕才检查。
pub fn check_capacity(capacity: usize, payload_len: usize) -> Result<(), StegoError> {
    let required = required_bits(payload_len);
    if required > capacity {
        return Err(StegoError::CapacityExceeded {
            required,
            available: capacity,
        });
    }
    Ok(())
}

/// 将帧逐比特写入样本缓冲区的最低有效位。
///
/// 每个字节按高位在前的顺序展开；被写入的样本只有最低位改变，
/// 比特流之后的样本完全不被触碰。
pub fn embed_frame(samples: &mut [u8], frame: &[u8]) -> Result<(), StegoError> {
    let required = frame.len() * 8;
    if required > samples.len() {
        return Err(StegoError::CapacityExceeded {
            required,
            available: samples.len(),
        });
    }

    for (sample, bit) in samples.iter_mut().zip(frame_bits(frame)) {
        *sample = (*sample & !1) | bit;
    }

    Ok(())
}

/// 从样本缓冲区的最低有效位恢复帧 (含结束标记)。
///
/// 每读满 8 比特拼成一个字节；自累计字节数达到标记长度起，
/// 每拼出一个字节就检查缓冲区是否以结束标记结尾，命中即停止，
/// 之后的样本不再被消费。扫描完全部样本仍未命中则返回
/// [`StegoError::MarkerNotFound`]。
pub fn extract_frame(samples: &[u8]) -> Result<Vec<u8>, StegoError> {
    let mut frame = Vec::with_capacity(samples.len() / 8);
    let mut acc: u8 = 0;
    let mut filled: u8 = 0;

    for &sample in samples {
        acc = (acc << 1) | (sample & 1);
        filled += 1;

        if filled == 8 {
            frame.push(acc);
            acc = 0;
            filled = 0;

            if frame.len() >= MARKER_LEN && frame.ends_with(END_MARKER) {
                return Ok(frame);
            }
        }
    }

    Err(StegoError::MarkerNotFound)
}

/// 将恢复出的帧拆分为载荷与嵌入的摘要文本。
///
/// 帧 (含结束标记) 不足 46 字节、或摘要区不是合法的 UTF-8 文本时，
/// 返回 [`StegoError::MalformedFrame`]。
pub fn split_frame(frame: &[u8]) -> Result<(&[u8], &str), StegoError> {
    if frame.len() < TRAILER_LEN {
        return Err(StegoError::MalformedFrame { len: frame.len() });
    }

    let payload_end = frame.len() - TRAILER_LEN;
    let digest = std::str::from_utf8(&frame[payload_end..payload_end + DIGEST_HEX_LEN])
        .map_err(|_| StegoError::MalformedFrame { len: frame.len() })?;

    Ok((&frame[..payload_end], digest))
}

fn frame_bits(frame: &[u8]) -> impl Iterator<Item = u8> + '_ {
    frame
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
}
