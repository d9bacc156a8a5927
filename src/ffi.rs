//! C FFI 导出
//!
//! 提供 C ABI 接口供其他语言调用

// FFI 模块需要 unsafe 代码
#![allow(unsafe_code)]

use std::ffi::{c_char, CStr};
use std::ptr;
use std::slice;

use crate::codec;
use crate::error::Error;
use crate::guid::Guid;

/// FFI 错误码
#[repr(i32)]
pub enum B32Error {
    Success = 0,
    NullPointer = -1,
    InvalidUtf8 = -2,
    InvalidSymbol = -3,
    LengthMismatch = -4,
    ChecksumMismatch = -5,
    BufferTooSmall = -6,
    EntropyFailure = -7,
}

/// 库错误到 FFI 错误码的映射
fn error_code(err: &Error) -> i32 {
    match err {
        Error::InvalidSymbol(_) | Error::CheckSymbolInData(_) => B32Error::InvalidSymbol as i32,
        Error::EmptyInput | Error::LengthMismatch { .. } | Error::InvalidGuidBits => {
            B32Error::LengthMismatch as i32
        }
        Error::ChecksumMismatch { .. } => B32Error::ChecksumMismatch as i32,
        Error::EntropySource(_) => B32Error::EntropyFailure as i32,
    }
}

/// 编码输出所需的缓冲区长度（符号数 + NUL 终止符）
#[no_mangle]
pub extern "C" fn b32_encoded_len(byte_len: usize, with_checksum: bool) -> usize {
    if byte_len == 0 {
        return 1;
    }
    codec::encoded_len(byte_len) + usize::from(with_checksum) + 1
}

/// 编码字节序列为 NUL 终止字符串
///
/// # Safety
/// - `data` 必须指向至少 `len` 字节（`len` 为 0 时可为 NULL）
/// - `out` 必须指向至少 `out_cap` 字节的缓冲区
#[no_mangle]
pub unsafe extern "C" fn b32_encode(
    data: *const u8,
    len: usize,
    with_checksum: bool,
    out: *mut c_char,
    out_cap: usize,
) -> i32 {
    if out.is_null() || (data.is_null() && len != 0) {
        return B32Error::NullPointer as i32;
    }

    let input: &[u8] = if len == 0 {
        &[]
    } else {
        slice::from_raw_parts(data, len)
    };

    let encoded = if with_checksum {
        codec::encode_with_checksum(input)
    } else {
        codec::encode(input)
    };

    if encoded.len() + 1 > out_cap {
        return B32Error::BufferTooSmall as i32;
    }
    ptr::copy_nonoverlapping(encoded.as_ptr(), out.cast::<u8>(), encoded.len());
    *out.add(encoded.len()) = 0; // null terminator
    B32Error::Success as i32
}

/// 解码 NUL 终止字符串到字节缓冲区
///
/// `out_len` 即期望的解码字节数。
///
/// # Safety
/// - `src` 必须是有效的 C 字符串
/// - `out` 必须指向至少 `out_len` 字节的缓冲区
#[no_mangle]
pub unsafe extern "C" fn b32_decode(
    src: *const c_char,
    with_checksum: bool,
    out: *mut u8,
    out_len: usize,
) -> i32 {
    if src.is_null() || out.is_null() {
        return B32Error::NullPointer as i32;
    }

    let src_str = match CStr::from_ptr(src).to_str() {
        Ok(s) => s,
        Err(_) => return B32Error::InvalidUtf8 as i32,
    };

    let dest = slice::from_raw_parts_mut(out, out_len);
    let result = if with_checksum {
        codec::decode_with_checksum(src_str, dest)
    } else {
        codec::decode(src_str, dest)
    };

    match result {
        Ok(()) => B32Error::Success as i32,
        Err(err) => error_code(&err),
    }
}

/// 验证含校验位的编码字符串
///
/// 返回 1 表示校验通过，0 表示失败，负值为参数错误。
///
/// # Safety
/// - `src` 必须是有效的 C 字符串
#[no_mangle]
pub unsafe extern "C" fn b32_verify_checksum(src: *const c_char) -> i32 {
    if src.is_null() {
        return B32Error::NullPointer as i32;
    }

    let src_str = match CStr::from_ptr(src).to_str() {
        Ok(s) => s,
        Err(_) => return B32Error::InvalidUtf8 as i32,
    };

    i32::from(codec::verify_checksum(src_str))
}

/// 生成随机标识符并写入 NUL 终止缓冲区
///
/// # Safety
/// - `out` 必须指向至少 `out_cap` 字节的缓冲区（26/27 符号 + NUL）
#[no_mangle]
pub unsafe extern "C" fn b32_new_guid(with_checksum: bool, out: *mut c_char, out_cap: usize) -> i32 {
    if out.is_null() {
        return B32Error::NullPointer as i32;
    }

    let guid = match Guid::new() {
        Ok(guid) => guid,
        Err(err) => return error_code(&err),
    };
    let encoded = if with_checksum {
        guid.encode_with_checksum()
    } else {
        guid.encode()
    };

    if encoded.len() + 1 > out_cap {
        return B32Error::BufferTooSmall as i32;
    }
    ptr::copy_nonoverlapping(encoded.as_ptr(), out.cast::<u8>(), encoded.len());
    *out.add(encoded.len()) = 0; // null terminator
    B32Error::Success as i32
}
