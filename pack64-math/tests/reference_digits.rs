use pack64_math::{decode_symbols, encode_symbols, ALPHABET};

// Fixed digit groups taken from vectors packed by the reference bindings.
// Each entry is (integer, three-symbol group).
const GROUPS: &[(i64, &str)] = &[
    (0, "AAA"),
    (1, "AAB"),
    (63, "AA_"),
    (64, "ABA"),
    (4095, "A__"),
    (4096, "BAA"),
    (32768, "IAA"),
    (65535, "P__"),
    (65536, "QAA"),
    (131071, "f__"),
    (-1, "___"),
    (-64, "__A"),
    (-65536, "wAA"),
    (-131072, "gAA"),
];

#[test]
fn test_reference_groups_encode() {
    for &(value, group) in GROUPS {
        let symbols: String = encode_symbols(value).unwrap().iter().collect();
        assert_eq!(symbols, group, "encoding {}", value);
    }
}

#[test]
fn test_reference_groups_decode() {
    for &(value, group) in GROUPS {
        assert_eq!(decode_symbols(group).unwrap() as i64, value, "decoding {}", group);
    }
}

#[test]
fn test_alphabet_is_url_safe() {
    for &b in ALPHABET.iter() {
        let c = b as char;
        assert!(c.is_ascii_alphanumeric() || c == '-' || c == '_');
    }
}
