//! 随机标识符生成
//!
//! 生成 16 字节 UUID v4 形状的随机标识符（version = 4，variant = 10），
//! 以 Base32 编码输出：26 符号，含校验位 27 符号。

use rand::rngs::OsRng;
use rand::RngCore;

use crate::codec::{decode, decode_with_checksum, encode, encode_with_checksum, encoded_len};
use crate::error::{Error, Result};

/// 标识符字节长度
pub const GUID_LEN: usize = 16;

/// 生成随机标识符（26 符号）
///
/// # Errors
/// 熵源不可用时返回 [`Error::EntropySource`]。
pub fn new_guid() -> Result<String> {
    Ok(Guid::new()?.encode())
}

/// 生成随机标识符并追加校验位（27 符号）
///
/// # Errors
/// 熵源不可用时返回 [`Error::EntropySource`]。
pub fn new_guid_with_checksum() -> Result<String> {
    Ok(Guid::new()?.encode_with_checksum())
}

/// 16 字节 UUID v4 形状的随机标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guid {
    /// 原始字节，version/variant 位已固定
    bytes: [u8; GUID_LEN],
}

impl Guid {
    /// 从系统 CSPRNG 生成
    ///
    /// # Errors
    /// 熵源不可用时返回 [`Error::EntropySource`]，无回退熵源。
    pub fn new() -> Result<Self> {
        let mut bytes = [0u8; GUID_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// 从原始字节构造，强制写入 version/variant 位
    #[must_use]
    pub const fn from_bytes(mut bytes: [u8; GUID_LEN]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant is 10
        Self { bytes }
    }

    /// 获取字节数组
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; GUID_LEN] {
        &self.bytes
    }

    /// version 字段（byte 6 高 4 bit，固定为 4）
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.bytes[6] >> 4
    }

    /// variant 高 2 bit（byte 8，固定为 0b10）
    #[must_use]
    pub const fn variant(&self) -> u8 {
        self.bytes[8] >> 6
    }

    /// 编码为 26 符号字符串
    #[must_use]
    pub fn encode(&self) -> String {
        encode(&self.bytes)
    }

    /// 编码为 27 符号字符串（含校验位）
    #[must_use]
    pub fn encode_with_checksum(&self) -> String {
        encode_with_checksum(&self.bytes)
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl std::str::FromStr for Guid {
    type Err = Error;

    /// 解析 26 符号编码或 27 符号含校验位编码
    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; GUID_LEN];
        if s.len() == encoded_len(GUID_LEN) + 1 {
            decode_with_checksum(s, &mut bytes)?;
        } else {
            decode(s, &mut bytes)?;
        }

        let guid = Self { bytes };
        if guid.version() != 4 || guid.variant() != 0b10 {
            return Err(Error::InvalidGuidBits);
        }
        Ok(guid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_version_and_variant_bits() {
        let guid = Guid::new().unwrap();
        assert_eq!(guid.version(), 4);
        assert_eq!(guid.variant(), 0b10);
    }

    #[test]
    fn test_from_bytes_forces_bits() {
        let guid = Guid::from_bytes([0u8; GUID_LEN]);
        assert_eq!(guid.as_bytes()[6], 0x40);
        assert_eq!(guid.as_bytes()[8], 0x80);

        let guid = Guid::from_bytes([0xFFu8; GUID_LEN]);
        assert_eq!(guid.as_bytes()[6], 0x4F);
        assert_eq!(guid.as_bytes()[8], 0xBF);
    }

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(new_guid().unwrap().len(), 26);
        assert_eq!(new_guid_with_checksum().unwrap().len(), 27);
    }

    #[test]
    fn test_parse_round_trip() {
        let guid = Guid::new().unwrap();

        let parsed: Guid = guid.to_string().parse().unwrap();
        assert_eq!(guid, parsed);

        let parsed: Guid = guid.encode_with_checksum().parse().unwrap();
        assert_eq!(guid, parsed);
    }

    #[test]
    fn test_parse_rejects_missing_bits() {
        // 清掉 version 位后编码的 16 字节不是合法标识符
        let mut bytes = *Guid::new().unwrap().as_bytes();
        bytes[6] &= 0x0f;
        let enc = crate::codec::encode(&bytes);
        assert!(matches!(
            enc.parse::<Guid>(),
            Err(Error::InvalidGuidBits)
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            "zqzv".parse::<Guid>(),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
