use gatt_uuid::normalize::{clean, dashify, expand, normalize, CANONICAL_LEN};
use gatt_uuid::{BitWidth, GattUuid, UuidSource};

const DEVICE_INFORMATION: &str = "0000180a-0000-1000-8000-00805f9b34fb";
const CUSTOM: &str = "00000002-1e3c-fad4-74e2-97a033f1bfaa";

fn assert_canonical_shape(s: &str) {
    assert_eq!(s.len(), CANONICAL_LEN, "{s}");
    for (i, c) in s.char_indices() {
        if [8, 13, 18, 23].contains(&i) {
            assert_eq!(c, '-', "{s}");
        } else {
            assert!(matches!(c, '0'..='9' | 'a'..='f'), "{s}");
        }
    }
}

#[test]
fn clean_strips_non_hex_and_lowercases() {
    assert_eq!(clean("0000180A-0000-1000-8000-00805F9B34FB"), "0000180a00001000800000805f9b34fb");
    assert_eq!(clean("  {29:01}  "), "2901");
    assert_eq!(clean("ghijklmnop"), "");
    assert_eq!(clean("é2é9é0é1"), "2901");
    assert_eq!(clean(""), "");
}

#[test]
fn separator_tolerance() {
    assert_eq!(
        clean("0000180A/0000.1000_zzzzzz_8000+00805f9b34fb"),
        clean("0000180A00001000800000805f9b34fb")
    );
    assert_eq!(
        GattUuid::new("0000180A/0000.1000_zzzzzz_8000+00805f9b34fb"),
        GattUuid::new("0000180A00001000800000805f9b34fb")
    );
    assert_eq!(GattUuid::new("{2 9 : 0 1}"), GattUuid::new("2901"));
}

#[test]
fn dashify_examples() {
    assert_eq!(dashify("0000180A-0000-1000-8000-00805f9b34fb"), DEVICE_INFORMATION);
    assert_eq!(dashify("0000180A00001000800000805f9b34fb"), DEVICE_INFORMATION);
    assert_eq!(dashify("0000180A/0000.1000_zzzzzz_8000+00805f9b34fb"), DEVICE_INFORMATION);
    assert_eq!(dashify("rqzp"), "");
}

#[test]
fn dashify_partial_input() {
    assert_eq!(dashify(""), "");
    assert_eq!(dashify("0000180a"), "0000180a");
    assert_eq!(dashify("0000180a0"), "0000180a-0");
    assert_eq!(dashify("0000180a0000"), "0000180a-0000");
    assert_eq!(dashify("0000180a00001"), "0000180a-0000-1");
    assert_eq!(dashify("0000180a0000100"), "0000180a-0000-100");
    assert_eq!(dashify("0000180a000010008"), "0000180a-0000-1000-8");
    assert_eq!(dashify("0000180a0000100080000"), "0000180a-0000-1000-8000-0");
}

#[test]
fn dashify_longer_input_keeps_four_dashes() {
    assert_eq!(
        dashify("0000180a00001000800000805f9b34fb00"),
        "0000180a-0000-1000-8000-00805f9b34fb00"
    );
}

#[test]
fn expand_templates() {
    assert_eq!(
        expand("2901"),
        ("00002901-0000-1000-8000-00805f9b34fb".to_owned(), BitWidth::Bits16)
    );
    assert_eq!(
        expand("0000180a"),
        ("0000180a-0000-1000-8000-00805f9b34fb".to_owned(), BitWidth::Bits32)
    );
    assert_eq!(
        expand("000000021e3cfad474e297a033f1bfaa"),
        ("000000021e3cfad474e297a033f1bfaa".to_owned(), BitWidth::Bits128)
    );
    assert_eq!(expand("123"), (String::new(), BitWidth::Invalid));
}

#[test]
fn width_classification_is_total() {
    for len in 0..40 {
        let input = "a".repeat(len);
        let (canonical, width) = normalize(&input);
        let uuid = GattUuid::new(&input);
        match len {
            4 | 8 | 32 => {
                assert!(width.is_valid());
                assert_canonical_shape(&canonical);
                assert_eq!(uuid.full(), canonical);
            }
            _ => {
                assert_eq!(width, BitWidth::Invalid);
                assert_eq!(canonical, "");
                assert_eq!(uuid, GattUuid::invalid());
                assert_eq!(uuid.bit_count(), 0);
            }
        }
    }
}

#[test]
fn idempotent_on_canonical_output() {
    for input in ["2901", "0000180A", CUSTOM, "00000002-1E3C-FAD4-74E2-97A033F1BFAA"] {
        let first = GattUuid::new(input);
        let second = GattUuid::new(first.full());
        assert_eq!(first.full(), second.full());
        assert_eq!(second.width(), BitWidth::Bits128);
    }
}

#[test]
fn case_insensitive() {
    assert_eq!(GattUuid::new("00000002-1E3C-FAD4-74E2-97A033F1BFAA").full(), CUSTOM);
    assert_eq!(GattUuid::new("2A19"), GattUuid::new("2a19"));
    assert_eq!(GattUuid::new("AbCd"), GattUuid::new("abcd"));
}

#[test]
fn round_trip_16_bit() {
    let from_str = GattUuid::new("2901");
    let from_num = GattUuid::from_u16(0x2901);
    assert_eq!(from_str, from_num);
    assert_eq!(from_str.full(), "00002901-0000-1000-8000-00805f9b34fb");
    assert_eq!(from_str.bit_count(), 16);
    assert_eq!(from_str.short16(), "2901");
    assert_eq!(from_str.as_width_str(), "2901");
    assert_eq!(from_str.to_string(), "2901");
}

#[test]
fn round_trip_32_bit() {
    let from_str = GattUuid::new("0000180a");
    let from_num = GattUuid::from_u32(0x0000_180a);
    assert_eq!(from_str, from_num);
    assert_eq!(from_str.full(), DEVICE_INFORMATION);
    assert_eq!(from_str.bit_count(), 32);
    assert_eq!(from_str.short32(), "0000180a");
    assert_eq!(from_str.as_width_str(), "0000180a");
}

#[test]
fn numeric_constructors_pad_with_zeros() {
    assert_eq!(GattUuid::from_u16(0x1).full(), "00000001-0000-1000-8000-00805f9b34fb");
    assert_eq!(GattUuid::from_u32(0x1).full(), "00000001-0000-1000-8000-00805f9b34fb");
    assert_eq!(GattUuid::from_u32(0xdead_beef).full(), "deadbeef-0000-1000-8000-00805f9b34fb");
    assert_canonical_shape(GattUuid::from_u32(u32::MAX).full());
}

#[test]
fn five_fields_match_string_constructor() {
    let from_fields = GattUuid::from_fields(0x1234_5678, 0x9abc, 0xdef0, 0x1234, 0x5);
    let from_str = GattUuid::new("12345678-9ABC-DEF0-1234-000000000005");
    assert_eq!(from_fields, from_str);
    assert_eq!(from_fields.bit_count(), 128);

    let from_fields = GattUuid::from_fields(u32::MAX, u16::MAX, u16::MAX, u16::MAX, 0xffff_ffff_ffff);
    assert_eq!(from_fields.full(), "ffffffff-ffff-ffff-ffff-ffffffffffff");
    assert_eq!(from_fields, GattUuid::new("ffffffffffffffffffffffffffffffff"));
}

#[test]
fn five_fields_last_group_shifts_upper_digits() {
    // Upper 8 digits come from `part5 >> 4`, lower 4 from `part5 & 0xffff`.
    let uuid = GattUuid::from_fields(0x0000_0002, 0x1e3c, 0xfad4, 0x74e2, 0x97a0_33f1_bfaa);
    assert_eq!(uuid.full(), "00000002-1e3c-fad4-74e2-033f1bfabfaa");
    assert_ne!(uuid.full(), CUSTOM);
    assert_canonical_shape(uuid.full());

    let uuid = GattUuid::from_fields(0, 0, 0, 0, u64::MAX);
    assert_eq!(uuid.full(), "00000000-0000-0000-0000-ffffffffffff");
}

#[test]
fn from_u128_is_exact() {
    let uuid = GattUuid::from_u128(0x00000002_1e3c_fad4_74e2_97a033f1bfaa);
    assert_eq!(uuid.full(), CUSTOM);
    assert_eq!(uuid, GattUuid::new(CUSTOM));
}

#[test]
fn uuid_source_dispatch() {
    let sources = [
        (UuidSource::RawString("2901".into()), BitWidth::Bits16),
        (UuidSource::Short16(0x2901), BitWidth::Bits16),
        (UuidSource::Short32(0x2901), BitWidth::Bits32),
        (
            UuidSource::FieldSet5 {
                part1: 0x2901,
                part2: 0,
                part3: 0x1000,
                part4: 0x8000,
                part5: 0x5,
            },
            BitWidth::Bits128,
        ),
    ];
    for (source, width) in sources {
        let uuid = GattUuid::from(source);
        assert_eq!(uuid.width(), width);
        assert_eq!(uuid.short32(), "00002901");
    }
}

#[test]
fn invalid_sentinel() {
    let uuid = GattUuid::new("rqzp");
    assert!(!uuid.is_valid());
    assert_eq!(uuid.bit_count(), 0);
    assert_eq!(uuid.width(), BitWidth::Invalid);
    assert_eq!(uuid.short16(), "");
    assert_eq!(uuid.short32(), "");
    assert_eq!(uuid.full(), "");
    assert_eq!(uuid.as_str(), "");
    assert_eq!(uuid.as_width_str(), "");
    assert_eq!(uuid.to_string(), "");
    assert_eq!(uuid.to_uuid(), None);
    assert_eq!(uuid, GattUuid::invalid());
    assert_eq!(uuid, GattUuid::default());
}

#[test]
fn width_display() {
    assert_eq!(BitWidth::Invalid.to_string(), "invalid");
    assert_eq!(BitWidth::Bits16.to_string(), "16-bit");
    assert_eq!(BitWidth::Bits32.to_string(), "32-bit");
    assert_eq!(BitWidth::Bits128.to_string(), "128-bit");
}

#[test]
fn accessors_are_plain_substrings() {
    let uuid = GattUuid::new(CUSTOM);
    assert_eq!(uuid.as_str(), uuid.full());
    assert_eq!(uuid.short16(), "0002");
    assert_eq!(uuid.short32(), "00000002");
    assert_eq!(uuid.as_width_str(), CUSTOM);
    assert_eq!(uuid.to_string(), CUSTOM);
}
