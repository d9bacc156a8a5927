//! 随机标识符公共 API 契约测试

#![allow(clippy::expect_used)]

use std::str::FromStr;

use b32kit::Guid;

#[test]
fn generated_identifier_carries_version_and_variant_bits() {
    for _ in 0..100 {
        let enc = b32kit::new_guid().expect("entropy source");
        assert_eq!(enc.len(), 26);

        let mut bytes = [0u8; b32kit::GUID_LEN];
        b32kit::decode(&enc, &mut bytes).expect("decode identifier");
        assert_eq!(bytes[6] >> 4, 4, "version nibble");
        assert_eq!(bytes[8] >> 6, 0b10, "variant bits");
    }
}

#[test]
fn checksummed_identifier_always_verifies() {
    for _ in 0..100 {
        let enc = b32kit::new_guid_with_checksum().expect("entropy source");
        assert_eq!(enc.len(), 27);
        assert!(b32kit::verify_checksum(&enc));
    }
}

#[test]
fn identifier_display_parse_round_trip() {
    let guid = Guid::new().expect("entropy source");

    let parsed = Guid::from_str(&guid.to_string()).expect("parse canonical form");
    assert_eq!(guid, parsed);

    let parsed = Guid::from_str(&guid.encode_with_checksum()).expect("parse checksummed form");
    assert_eq!(guid, parsed);
}

#[test]
fn identifiers_are_unique() {
    let a = b32kit::new_guid().expect("entropy source");
    let b = b32kit::new_guid().expect("entropy source");
    assert_ne!(a, b);
}
