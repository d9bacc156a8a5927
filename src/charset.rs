//! 符号表定义
//!
//! Crockford Base32 变体：32 个数据符号（排除易混淆的 i/l/o/u）
//! + 5 个校验位专用符号，共 37 个。

/// 数据符号：0-9 + 小写字母（去掉 i, l, o, u）
pub const VALUE_SYMBOLS: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// 校验位专用符号（索引 32-36，只出现在末位）
pub const CHECK_SYMBOLS: &[u8; 5] = b"*~$=u";

/// 符号总数（数据 + 校验位专用）
pub const SYMBOL_COUNT: usize = 37;

/// 校验位模数
pub const CHECK_MOD: u8 = 37;

/// 解码表中的无效符号标记
const INVALID: i8 = -1;

/// 索引 -> 符号编码表
pub(crate) const ENC_TABLE: [u8; SYMBOL_COUNT] = build_enc_table();

/// 符号 -> 索引解码表，覆盖全部 256 个字节值，-1 表示无效
pub(crate) const DEC_TABLE: [i8; 256] = build_dec_table();

/// 拼接数据符号与校验位符号为 37 项编码表
const fn build_enc_table() -> [u8; SYMBOL_COUNT] {
    let mut table = [0u8; SYMBOL_COUNT];
    let mut i = 0;
    while i < VALUE_SYMBOLS.len() {
        table[i] = VALUE_SYMBOLS[i];
        i += 1;
    }
    let mut j = 0;
    while j < CHECK_SYMBOLS.len() {
        table[VALUE_SYMBOLS.len() + j] = CHECK_SYMBOLS[j];
        j += 1;
    }
    table
}

/// 由编码表导出解码表：基础填充（含大小写）在前，别名折叠在后
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn build_dec_table() -> [i8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOL_COUNT {
        let sym = ENC_TABLE[i];
        table[sym as usize] = i as i8;
        if sym.is_ascii_lowercase() {
            table[sym.to_ascii_uppercase() as usize] = i as i8;
        }
        i += 1;
    }
    // 别名折叠必须在基础填充之后写入，冲突时别名优先
    table[b'i' as usize] = 1;
    table[b'I' as usize] = 1;
    table[b'l' as usize] = 1;
    table[b'L' as usize] = 1;
    table[b'o' as usize] = 0;
    table[b'O' as usize] = 0;
    table
}

/// 符号转索引 (0-36)，无效符号返回 None
///
/// 大小写不敏感，并折叠别名 i/I/l/L -> 1、o/O -> 0。
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)] // 已验证非负
pub const fn decode_value(c: u8) -> Option<u8> {
    let v = DEC_TABLE[c as usize];
    if v < 0 {
        None
    } else {
        Some(v as u8)
    }
}

/// 索引转符号，越界返回 None
#[inline]
#[must_use]
pub const fn encode_symbol(index: u8) -> Option<u8> {
    if (index as usize) < SYMBOL_COUNT {
        Some(ENC_TABLE[index as usize])
    } else {
        None
    }
}

/// 验证字符是否可解码（含别名与大小写折叠）
#[inline]
#[must_use]
pub const fn is_valid_char(c: u8) -> bool {
    DEC_TABLE[c as usize] >= 0
}

/// 计算字节对应的校验位符号（取模 37 后查编码表）
#[inline]
#[must_use]
pub const fn check_symbol(byte: u8) -> u8 {
    ENC_TABLE[(byte % CHECK_MOD) as usize]
}
