/// 嵌入数据的结束标记。
/// 提取时扫描到该字节序列的首次出现即停止读取。
pub const END_MARKER: &[u8] = b"<<END_OF_EXE>>";

/// 结束标记的长度 (14 字节)。
pub const MARKER_LEN: usize = END_MARKER.len();

/// 摘要在帧中的长度 (字节)。
/// MD5 摘要本身为 16 字节，但帧中存储的是其 32 个小写十六进制
/// 字符的 ASCII 文本形式，因此占用 32 字节。
pub const DIGEST_HEX_LEN: usize = 32;

/// 帧尾部 (摘要文本 + 结束标记) 的总长度 (字节)。
/// 任何合法的帧都不会短于这个长度。
pub const TRAILER_LEN: usize = DIGEST_HEX_LEN + MARKER_LEN;

/// 计算文件摘要时单次读取的块大小 (字节)。
/// 分块读取使得摘要计算可以处理大于内存的文件。
pub const DIGEST_CHUNK_SIZE: usize = 4096;
