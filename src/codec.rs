//! Base32 编解码与校验位验证
//!
//! 把字节序列视为 bit 流（byte 0 的最低位在前），每 5 bit 取一个符号：
//!
//! ```text
//! bytes:   [b0] [b1] [b2] ...          (LSB first)
//! bits:    |-5-|-5-|-5-|-5-| ...       符号数 = ceil(8 * len / 5)
//! output:  s0  s1  s2  s3  ... [校验位]
//! ```
//!
//! 可选校验位为 `payload[0] % 37` 对应的符号，只覆盖首字节，
//! 用于捕捉人工抄写时最易出错的开头字符。

use crate::charset::{check_symbol, decode_value, CHECK_MOD, DEC_TABLE, ENC_TABLE};
use crate::error::{Error, Result};

/// 编码输出的符号数（不含校验位）
#[inline]
#[must_use]
pub const fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(5)
}

/// 编码字节序列
///
/// 空输入返回空字符串。
#[must_use]
pub fn encode(val: &[u8]) -> String {
    encode_impl(val, false)
}

/// 编码字节序列并追加一个校验位符号
///
/// 空输入返回空字符串，不追加校验位（无数据可校验）。
#[must_use]
pub fn encode_with_checksum(val: &[u8]) -> String {
    encode_impl(val, true)
}

/// 编码实现：按 5 bit 步进扫描 bit 流
fn encode_impl(val: &[u8], with_checksum: bool) -> String {
    if val.is_empty() {
        return String::new();
    }

    let total_bits = val.len() * 8;
    let mut out = String::with_capacity(encoded_len(val.len()) + usize::from(with_checksum));

    let mut bit = 0;
    while bit < total_bits {
        let byi = bit >> 3;
        // 16-bit 窗口：当前字节 + 下一字节（末字节时高位补 0）
        let mut window = u16::from(val[byi]);
        if byi != val.len() - 1 {
            window |= u16::from(val[byi + 1]) << 8;
        }
        let index = (window >> (bit & 0x7)) & 0x1F;
        out.push(char::from(ENC_TABLE[index as usize]));
        bit += 5;
    }

    if with_checksum {
        out.push(char::from(check_symbol(val[0])));
    }

    out
}

/// 解码到调用方提供的目标缓冲区
///
/// 目标长度即期望的解码字节数（编码不携带长度信息）；符号数与
/// 目标长度不一致时返回错误。
///
/// # Errors
/// 输入含无效符号、符号数与目标长度不匹配或输入为空时返回错误。
pub fn decode(src: &str, dest: &mut [u8]) -> Result<()> {
    decode_impl(src, dest, false)
}

/// 解码并验证末位校验位
///
/// # Errors
/// 除 [`decode`] 的错误外，校验位不匹配时返回 [`Error::ChecksumMismatch`]。
pub fn decode_with_checksum(src: &str, dest: &mut [u8]) -> Result<()> {
    decode_impl(src, dest, true)
}

/// 解码实现：5 bit 累积、8 bit 输出
#[allow(clippy::cast_possible_truncation)] // bitbuf 低 8 bit 截断是算法本身
fn decode_impl(src: &str, dest: &mut [u8], with_checksum: bool) -> Result<()> {
    let bytes = src.as_bytes();
    let n = if with_checksum {
        bytes.len().saturating_sub(1)
    } else {
        bytes.len()
    };
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let mut bitbuf: u32 = 0;
    let mut nbits = 0;
    let mut di = 0;
    let mut consumed = 0;

    for &c in &bytes[..n] {
        if di >= dest.len() {
            break;
        }
        let Some(v) = decode_value(c) else {
            return Err(Error::InvalidSymbol(char::from(c)));
        };
        if v > 31 {
            // 校验位专用符号不允许出现在数据位置
            return Err(Error::CheckSymbolInData(char::from(c)));
        }
        bitbuf |= u32::from(v) << nbits;
        nbits += 5;
        if nbits >= 8 {
            dest[di] = (bitbuf & 0xFF) as u8;
            di += 1;
            bitbuf >>= 8;
            nbits -= 8;
        }
        consumed += 1;
    }

    if nbits > 0 {
        if di == dest.len() {
            // 目标已满时残余 bit 必须全为 0
            if bitbuf != 0 {
                return Err(Error::LengthMismatch {
                    symbols: n,
                    dest: dest.len(),
                });
            }
        } else {
            dest[di] = (bitbuf & 0xFF) as u8;
            di += 1;
        }
    }

    // 符号须全部消费且目标恰好填满
    if consumed != n || di != dest.len() {
        return Err(Error::LengthMismatch {
            symbols: n,
            dest: dest.len(),
        });
    }

    if with_checksum {
        let got = bytes[n];
        let Some(got_value) = decode_value(got) else {
            return Err(Error::InvalidSymbol(char::from(got)));
        };
        if dest[0] % CHECK_MOD != got_value {
            return Err(Error::ChecksumMismatch {
                expected: char::from(check_symbol(dest[0])),
                got: char::from(got),
            });
        }
    }

    Ok(())
}

/// 仅凭编码字符串验证校验位（无需目标缓冲区）
///
/// 要求至少 1 个数据符号 + 1 个校验位符号。校验位专用符号只允许
/// 出现在末位；首字节由前 1-2 个符号重建后与末位符号比对。
#[must_use]
pub fn verify_checksum(src: &str) -> bool {
    let bytes = src.as_bytes();
    if bytes.len() < 2 {
        return false;
    }

    for (i, &c) in bytes.iter().enumerate() {
        let v = DEC_TABLE[c as usize];
        if v < 0 {
            return false;
        }
        if v > 31 && (i + 1 < bytes.len() || v > 36) {
            return false;
        }
    }

    // 字符已全部验证，decode_value 必定成功
    let value_at = |i: usize| u16::from(decode_value(bytes[i]).unwrap_or(0));
    let lo = value_at(0);
    let hi = if bytes.len() == 2 { 0 } else { value_at(1) };
    let first_byte = (lo | (hi << 5)) & 0xFF;
    first_byte % u16::from(CHECK_MOD) == value_at(bytes.len() - 1)
}
