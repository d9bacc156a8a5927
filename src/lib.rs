//! B32Kit - Crockford Base32 Toolkit
//!
//! Douglas Crockford Base32 变体编解码库，面向人工抄写场景：排除易混淆
//! 字符、解码时折叠别名、支持单符号校验位与随机标识符生成。
//!
//! # 符号表
//!
//! ```text
//! ┌──────────────────────────────────┬───────────────┐
//! │          数据符号 (0-31)          │ 校验位 (32-36) │
//! │ 0123456789abcdefghjkmnpqrstvwxyz │     *~$=u     │
//! └──────────────────────────────────┴───────────────┘
//!        解码别名: i/I/l/L -> 1, o/O -> 0, 大小写不敏感
//! ```
//!
//! 编码不分组、不填充：符号数 = ceil(8 × 字节数 / 5)，解码时由调用方
//! 提供期望的字节长度。
//!
//! # Example
//!
//! ```
//! let enc = b32kit::encode_with_checksum(&[0x12, 0x34]);
//! assert_eq!(enc, "j0d0j");
//! assert!(b32kit::verify_checksum(&enc));
//!
//! let mut dec = [0u8; 2];
//! b32kit::decode_with_checksum(&enc, &mut dec).unwrap();
//! assert_eq!(dec, [0x12, 0x34]);
//!
//! let id = b32kit::new_guid_with_checksum().unwrap();
//! assert_eq!(id.len(), 27);
//! assert!(b32kit::verify_checksum(&id));
//! ```

pub mod charset;
pub mod codec;
pub mod error;
pub mod guid;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use codec::{
    decode, decode_with_checksum, encode, encode_with_checksum, encoded_len, verify_checksum,
};
pub use error::{Error, Result};
pub use guid::{new_guid, new_guid_with_checksum, Guid, GUID_LEN};
