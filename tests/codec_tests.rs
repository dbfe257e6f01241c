use lsb_seal::checksum::{bytes_digest_hex, file_digest_hex, verify_payload, Verification};
use lsb_seal::constants::{DIGEST_HEX_LEN, END_MARKER, TRAILER_LEN};
use lsb_seal::error::StegoError;
use lsb_seal::steganography::{
    build_frame, check_capacity, embed_frame, extract_frame, required_bits, split_frame,
};
use std::fs;
use tempfile::tempdir;

/// 验证帧的布局：载荷 ‖ 摘要文本 ‖ 结束标记
#[test]
fn test_build_frame_layout() {
    let payload = b"hello";
    let digest = bytes_digest_hex(payload);
    let frame = build_frame(payload, &digest);

    assert_eq!(frame.len(), payload.len() + TRAILER_LEN);
    assert_eq!(&frame[..payload.len()], payload);
    assert_eq!(
        &frame[payload.len()..payload.len() + DIGEST_HEX_LEN],
        digest.as_bytes()
    );
    assert!(frame.ends_with(END_MARKER));
}

/// 验证比特按每字节高位在前的顺序写入最低有效位
#[test]
fn test_embed_frame_writes_bits_msb_first() {
    let mut samples = vec![0u8; 8];
    embed_frame(&mut samples, &[0b1011_0010]).unwrap();
    assert_eq!(samples, vec![1, 0, 1, 1, 0, 0, 1, 0]);
}

/// 验证嵌入只改变最低位，且比特流之后的样本完全不被触碰
#[test]
fn test_embed_frame_touches_only_the_lsb() {
    let mut samples = vec![0xFFu8; 16];
    embed_frame(&mut samples, &[0x00]).unwrap();

    assert_eq!(&samples[..8], &[0xFE; 8]);
    assert_eq!(&samples[8..], &[0xFF; 8], "Trailing samples must be untouched.");
}

/// 验证容量检查的精确边界：恰好足够时成功，少一比特时失败
#[test]
fn test_check_capacity_exact_boundary() {
    let payload_len = 10;
    let required = required_bits(payload_len);
    assert_eq!(required, (payload_len + TRAILER_LEN) * 8);

    assert!(check_capacity(required, payload_len).is_ok());

    let err = check_capacity(required - 1, payload_len).unwrap_err();
    assert!(matches!(
        err,
        StegoError::CapacityExceeded { required: r, available: a }
            if r == required && a == required - 1
    ));
}

/// 验证缓冲区不足时嵌入在写入前失败
#[test]
fn test_embed_frame_rejects_short_buffer() {
    let mut samples = vec![0u8; 7];
    let err = embed_frame(&mut samples, &[0xAB]).unwrap_err();
    assert!(matches!(err, StegoError::CapacityExceeded { .. }));
    assert_eq!(samples, vec![0u8; 7], "Samples must not be modified on failure.");
}

/// 验证在样本层面的完整往返：嵌入后提取并拆分得到原始载荷
#[test]
fn test_frame_round_trip_through_samples() {
    let payload = b"\x00\x01binary payload\xFF\xFE";
    let digest = bytes_digest_hex(payload);
    let frame = build_frame(payload, &digest);

    let mut samples = vec![0b1010_1010u8; frame.len() * 8 + 64];
    embed_frame(&mut samples, &frame).unwrap();

    let recovered = extract_frame(&samples).unwrap();
    assert_eq!(recovered, frame);

    let (recovered_payload, embedded_digest) = split_frame(&recovered).unwrap();
    assert_eq!(recovered_payload, payload);
    assert_eq!(embedded_digest, digest);
    assert_eq!(verify_payload(recovered_payload, embedded_digest), Verification::Verified);
}

/// 载荷本身包含结束标记时，提取在首次出现处截断。
/// 这是已知的格式歧义，此处固定其行为：截断后的帧太短，拆分失败。
#[test]
fn test_marker_inside_payload_truncates_extraction() {
    let payload = b"abc<<END_OF_EXE>>def";
    let digest = bytes_digest_hex(payload);
    let frame = build_frame(payload, &digest);

    let mut samples = vec![0u8; frame.len() * 8];
    embed_frame(&mut samples, &frame).unwrap();

    let recovered = extract_frame(&samples).unwrap();
    assert_eq!(recovered, b"abc<<END_OF_EXE>>");

    let err = split_frame(&recovered).unwrap_err();
    assert!(matches!(err, StegoError::MalformedFrame { len: 17 }));
}

/// 验证扫描完全部样本仍无标记时返回 MarkerNotFound
#[test]
fn test_extract_frame_without_marker_fails() {
    let samples = vec![0u8; 4096];
    let err = extract_frame(&samples).unwrap_err();
    assert!(matches!(err, StegoError::MarkerNotFound));
}

/// 验证过短的帧无法拆分
#[test]
fn test_split_frame_rejects_short_frame() {
    let err = split_frame(&vec![0u8; TRAILER_LEN - 1]).unwrap_err();
    assert!(matches!(err, StegoError::MalformedFrame { .. }));
}

/// 验证摘要区不是合法 UTF-8 文本的帧无法拆分
#[test]
fn test_split_frame_rejects_non_utf8_digest() {
    // 4 字节载荷 + 32 字节摘要区 (含非法 UTF-8 序列) + 结束标记 = 50 字节
    let mut frame = Vec::new();
    frame.extend_from_slice(b"data");
    frame.extend_from_slice(&[0xFF, 0xFE]);
    frame.extend_from_slice(&[b'0'; DIGEST_HEX_LEN - 2]);
    frame.extend_from_slice(END_MARKER);
    assert_eq!(frame.len(), 50);

    let err = split_frame(&frame).unwrap_err();
    assert!(matches!(err, StegoError::MalformedFrame { len: 50 }));
}

/// 验证摘要计算与已知向量一致，且文件与内存两种路径结果相同
#[test]
fn test_digest_known_vectors_and_file_consistency() -> anyhow::Result<()> {
    assert_eq!(bytes_digest_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(bytes_digest_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");

    let dir = tempdir()?;
    let path = dir.path().join("payload.bin");
    let data = b"The quick brown fox jumps over the lazy dog";
    fs::write(&path, data)?;
    assert_eq!(file_digest_hex(&path)?, bytes_digest_hex(data));

    Ok(())
}

/// 验证摘要比对是大小写敏感的字符串比较，且不匹配时返回两个摘要
#[test]
fn test_verify_payload_mismatch_reports_both_digests() {
    let payload = b"payload";
    let actual = bytes_digest_hex(payload);
    let tampered = actual.to_uppercase();

    match verify_payload(payload, &tampered) {
        Verification::Mismatch {
            embedded,
            recovered,
        } => {
            assert_eq!(embedded, tampered);
            assert_eq!(recovered, actual);
        }
        Verification::Verified => panic!("Case-sensitive comparison must not match."),
    }
}

/// 验证空载荷的帧只由摘要和标记组成，且可以正常往返
#[test]
fn test_empty_payload_round_trip() {
    let digest = bytes_digest_hex(b"");
    let frame = build_frame(b"", &digest);
    assert_eq!(frame.len(), TRAILER_LEN);

    let mut samples = vec![0xF0u8; frame.len() * 8];
    embed_frame(&mut samples, &frame).unwrap();

    let recovered = extract_frame(&samples).unwrap();
    let (payload, embedded_digest) = split_frame(&recovered).unwrap();
    assert!(payload.is_empty());
    assert_eq!(verify_payload(payload, embedded_digest), Verification::Verified);
}
