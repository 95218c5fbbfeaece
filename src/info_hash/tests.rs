use super::*;

#[test]
fn test_info_hash_from_hex() {
    let hex = "0123456789abcdef0123456789abcdef01234567";
    let hash = InfoHash::from_hex(hex).unwrap();
    assert_eq!(hash.to_hex(), hex.to_uppercase());
    assert_eq!(hash.as_bytes()[0], 0x01);
}

#[test]
fn test_info_hash_display_is_uppercase() {
    let hash = InfoHash::new([0xab; INFO_HASH_LEN]);
    let shown = hash.to_string();
    assert_eq!(shown.len(), 40);
    assert_eq!(shown, "AB".repeat(20));
    assert_eq!(format!("{:?}", hash), format!("InfoHash({})", shown));
}

#[test]
fn test_info_hash_parse_roundtrip() {
    let hash = InfoHash::new([7; INFO_HASH_LEN]);
    let parsed: InfoHash = hash.to_hex().parse().unwrap();
    assert_eq!(parsed, hash);
}

#[test]
fn test_info_hash_invalid_length() {
    assert_eq!(
        InfoHash::from_bytes(&[0u8; 32]),
        Err(InfoHashError::InvalidLength(32))
    );
    assert_eq!(
        InfoHash::from_hex("abcd"),
        Err(InfoHashError::InvalidLength(2))
    );
}

#[test]
fn test_info_hash_invalid_hex() {
    assert!(matches!(
        InfoHash::from_hex("zz23456789abcdef0123456789abcdef01234567"),
        Err(InfoHashError::InvalidHex(_))
    ));
}
