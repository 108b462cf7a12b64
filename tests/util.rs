extern crate env_logger;
extern crate rid3;

use std::io::Cursor;

use rid3::frame::TextEncoding;
use rid3::readable::{Readable, ReadableFactory};
use rid3::util;
use rid3::writable::WritableFactory;

fn readable_of(bytes: Vec<u8>) -> Readable<Cursor<Vec<u8>>> {
    Cursor::new(bytes).to_readable()
}

#[test]
fn synchsafe_bijection() {
    let _ = env_logger::try_init();

    for v in vec![0u32, 1, 127, 128, 255, 256, 0x3fff, 0x4000, 0x1f_ffff, 0x20_0000,
                  0x0fff_fffe, 0x0fff_ffff] {
        let mut writable = Cursor::new(vec![]).to_writable();
        writable.synchsafe(v).unwrap();

        let mut bytes = Vec::new();
        writable.copy(&mut bytes).unwrap();

        assert_eq!(4, bytes.len());
        for b in &bytes {
            assert_eq!(0, b & 0x80, "MSB set in synchsafe encoding of {}", v);
        }

        assert_eq!(v, readable_of(bytes).synchsafe().unwrap());
    }
}

#[test]
fn synchsafe_rejects_set_msb() {
    assert!(readable_of(vec![0x80, 0x00, 0x00, 0x00]).synchsafe().is_err());
    assert!(readable_of(vec![0x00, 0x00, 0x00, 0xff]).synchsafe().is_err());

    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(writable.synchsafe(0x1000_0000).is_err());
}

#[test]
fn unsynchronisation_round_trip() {
    let cases: Vec<Vec<u8>> = vec![vec![],
                                   vec![0x00],
                                   vec![0xff],
                                   vec![0xff, 0x00],
                                   vec![0xff, 0xff, 0xff],
                                   vec![0xff, 0x41],
                                   vec![0xff, 0xe0, 0xff, 0x00, 0xff],
                                   vec![0x01, 0xff, 0xfb, 0x90, 0xff, 0x00, 0x00, 0xff]];

    for case in cases {
        let mut encoded = util::to_unsynchronize(&case);
        let len = util::to_synchronize(&mut encoded);
        encoded.truncate(len);
        assert_eq!(case, encoded);
    }
}

#[test]
fn unsynchronisation_insertions() {
    let encoded = util::to_unsynchronize(&[0xff, 0xe0, 0xff, 0x00, 0xff]);
    assert_eq!(vec![0xff, 0x00, 0xe0, 0xff, 0x00, 0x00, 0xff, 0x00], encoded);

    // 0xFF before an ordinary byte is left alone
    assert_eq!(vec![0xff, 0x41], util::to_unsynchronize(&[0xff, 0x41]));
}

#[test]
fn identifier_remap_round_trip() {
    assert_eq!(62, util::ID_V2_TO_V4.len());
    assert_eq!(62, util::ID_V4_TO_V2.len());

    for (id_v2, id_v4) in util::ID_V2_TO_V4.iter() {
        assert_eq!(id_v4.to_string(), util::id_for_version(id_v2, 3).unwrap());
        assert_eq!(id_v2.to_string(), util::id_for_version(id_v4, 2).unwrap());
    }

    assert_eq!("COMM", util::id_for_version("COM", 4).unwrap());
    assert_eq!("APIC", util::id_for_version("PIC", 3).unwrap());
    assert_eq!("UFI", util::id_for_version("UFID", 2).unwrap());
}

#[test]
fn identifier_remap_failures() {
    // no mapping at all
    assert!(util::id_for_version("TSST", 2).is_err());
    assert!(util::id_for_version("WPAY", 2).is_err());
    assert!(util::id_for_version("XXX", 3).is_err());

    // removed in 2.4
    for dropped in vec!["TDAT", "TIME", "TORY", "TRDA", "TSIZ", "TYER"] {
        assert!(util::id_for_version(dropped, 4).is_err());
        assert!(util::id_for_version(dropped, 3).is_ok());
    }

    assert_eq!("TALB", util::id_for_version("TALB", 4).unwrap());
}

#[test]
fn flag_byte_packing() {
    assert_eq!(0xa4,
               util::to_flag_byte(&[true, false, true, false, false, true]));
    assert_eq!(0x00, util::to_flag_byte(&[false; 6]));
    assert_eq!(0xfc, util::to_flag_byte(&[true; 6]));

    assert_eq!(vec![true, false, true, false, false, true],
               util::from_flag_byte(0xa4, 6));
}

#[test]
fn utf16_terminator_is_pair_aligned() {
    // "AȀ" in UTF-16LE: 0x41 0x00, 0x00 0x02. A byte wise scan would stop
    // at the zero bytes that straddle the two code units.
    let bytes = vec![0xff, 0xfe, 0x41, 0x00, 0x00, 0x02, 0x00, 0x00, 0xff, 0xfe, 0x42, 0x00,
                     0x00, 0x00];
    let mut readable = readable_of(bytes);

    let first = util::read_null_terminated(&TextEncoding::UTF16, &mut readable).unwrap();
    let second = util::read_null_terminated(&TextEncoding::UTF16, &mut readable).unwrap();

    assert_eq!("A\u{200}", first);
    assert_eq!("B", second);
}

#[test]
fn text_bytes_round_trip() {
    let text = "caf\u{e9}";

    let iso = util::encode_text_bytes(&TextEncoding::ISO88591, text).unwrap();
    assert_eq!(vec![0x63, 0x61, 0x66, 0xe9], iso);
    assert_eq!(text,
               util::decode_text_bytes(&TextEncoding::ISO88591, &iso).unwrap());

    let utf16 = util::encode_text_bytes(&TextEncoding::UTF16, text).unwrap();
    assert_eq!(&[0xff, 0xfe], &utf16[0..2]);
    assert_eq!(text, util::decode_text_bytes(&TextEncoding::UTF16, &utf16).unwrap());

    let utf16be = util::encode_text_bytes(&TextEncoding::UTF16BE, text).unwrap();
    assert_eq!(vec![0x00, 0x63, 0x00, 0x61, 0x00, 0x66, 0x00, 0xe9], utf16be);

    let utf8 = util::encode_text_bytes(&TextEncoding::UTF8, text).unwrap();
    assert_eq!(text.as_bytes(), utf8.as_slice());
}

#[test]
fn utf16_without_bom_is_rejected() {
    assert!(util::decode_text_bytes(&TextEncoding::UTF16, &[0x41, 0x00]).is_err());
    assert!(util::decode_text_bytes(&TextEncoding::UTF16, &[0x41]).is_err());
    assert_eq!("", util::decode_text_bytes(&TextEncoding::UTF16, &[]).unwrap());
}

#[test]
fn unknown_encoding_byte_is_rejected() {
    assert!(util::to_encoding(4).is_err());
    assert!(util::to_encoding(0xff).is_err());
    assert_eq!(TextEncoding::UTF8, util::to_encoding(3).unwrap());
}

#[test]
fn encoding_legality_per_version() {
    assert!(util::encoding_supported_in(&TextEncoding::ISO88591, 2));
    assert!(util::encoding_supported_in(&TextEncoding::UTF8, 2));
    assert!(!util::encoding_supported_in(&TextEncoding::UTF16, 2));
    assert!(!util::encoding_supported_in(&TextEncoding::UTF16BE, 2));

    assert!(util::encoding_supported_in(&TextEncoding::ISO88591, 3));
    assert!(util::encoding_supported_in(&TextEncoding::UTF16, 3));
    assert!(!util::encoding_supported_in(&TextEncoding::UTF8, 3));
    assert!(!util::encoding_supported_in(&TextEncoding::UTF16BE, 3));

    assert!(util::encoding_supported_in(&TextEncoding::UTF16BE, 4));
    assert!(util::encoding_supported_in(&TextEncoding::UTF8, 4));
}

#[test]
fn counter_widths() {
    assert_eq!(4, util::counter_width(0));
    assert_eq!(4, util::counter_width(0xffff_ffff));
    assert_eq!(5, util::counter_width(0x1_0000_0000));
    assert_eq!(8, util::counter_width(u64::max_value()));
}

#[test]
fn deviation_bit_widths() {
    assert_eq!(8, util::deviation_bit_width(0).unwrap());
    assert_eq!(8, util::deviation_bit_width(1).unwrap());
    assert_eq!(8, util::deviation_bit_width(255).unwrap());
    assert_eq!(16, util::deviation_bit_width(256).unwrap());
    assert_eq!(16, util::deviation_bit_width(65535).unwrap());
    assert_eq!(24, util::deviation_bit_width(65536).unwrap());
    assert_eq!(32, util::deviation_bit_width(0xffff_ffff).unwrap());
}
