extern crate env_logger;
extern crate rid3;

use rid3::frame::*;
use rid3::metadata::{EncodeOptions, MetadataReader, MetadataWriter};

fn text_frame(text: &str) -> TEXT {
    TEXT {
        text_encoding: TextEncoding::ISO88591,
        text: text.to_string(),
    }
}

fn synchsafe4(v: u32) -> [u8; 4] {
    [((v >> 21) & 0x7f) as u8, ((v >> 14) & 0x7f) as u8, ((v >> 7) & 0x7f) as u8,
     (v & 0x7f) as u8]
}

fn options_for(version: u8) -> EncodeOptions {
    let mut options = EncodeOptions::default();
    options.version = Some(version);
    options
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..haystack.len() - needle.len() + 1).find(|&i| &haystack[i..i + needle.len()] == needle)
}

#[test]
fn minimal_v23_round_trip() {
    let _ = env_logger::try_init();

    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("Hello"))),
                      Frame::new(FrameBody::TPE1(text_frame("World")))];

    let bytes = MetadataWriter::new(options_for(3)).write(frames.clone()).unwrap();

    assert_eq!(&[0x49, 0x44, 0x33, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20],
               &bytes[0..10]);

    assert_eq!(b"TIT2", &bytes[10..14]);
    assert_eq!(&[0x00, 0x00, 0x00, 0x06], &bytes[14..18]);
    assert_eq!(&[0x00, 0x00], &bytes[18..20]);
    assert_eq!(0x00, bytes[20]);
    assert_eq!(b"Hello", &bytes[21..26]);

    assert_eq!(b"TPE1", &bytes[26..30]);
    assert_eq!(b"World", &bytes[37..42]);
    assert_eq!(42, bytes.len());

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert_eq!(3, tag.head.version);
    assert_eq!(2, tag.frames.len());
    assert_eq!(frames[0].body, tag.frames[0].body);
    assert_eq!(frames[1].body, tag.frames[1].body);
}

#[test]
fn v24_tag_size_is_synchsafe() {
    let long_text = "a".repeat(200);
    let frames = vec![Frame::new(FrameBody::TIT2(TEXT {
        text_encoding: TextEncoding::UTF8,
        text: long_text,
    }))];

    let bytes = MetadataWriter::new(options_for(4)).write(frames).unwrap();

    for b in &bytes[6..10] {
        assert_eq!(0, b & 0x80);
    }

    // 10 byte frame header plus the encoding byte plus 200 bytes of text
    assert_eq!(synchsafe4(211), &bytes[6..10]);
    assert_eq!(211 + 10, bytes.len());
}

#[test]
fn unsynchronisation_transparency() {
    let body = vec![0xff, 0xe0, 0xff, 0x00, 0xff];
    let frames = vec![Frame::new(FrameBody::MCDI(MCDI { cd_toc: body.clone() }))];

    let mut options = options_for(3);
    options.unsynchronisation = true;
    let bytes = MetadataWriter::new(options).write(frames).unwrap();

    assert_eq!(0x80, bytes[5] & 0x80);
    assert_eq!(synchsafe4(18), &bytes[6..10]);
    assert!(find_subsequence(&bytes[10..],
                             &[0xff, 0x00, 0xe0, 0xff, 0x00, 0x00, 0xff, 0x00])
        .is_some());

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert_eq!(FrameBody::MCDI(MCDI { cd_toc: body }), tag.frames[0].body);
}

#[test]
fn version_downgrade_rejection() {
    let frames = vec![Frame::new(FrameBody::EQU2(EQU2 {
        interpolation_method: InterpolationMethod::Linear,
        identification: "front".to_string(),
        adjustment_points: vec![],
    }))];

    let err = MetadataWriter::new(options_for(3)).write(frames).unwrap_err();
    let message = format!("{}", err);
    assert!(message.contains("only supported in ID3v2.4"), "{}", message);
}

#[test]
fn v22_identifier_upgrade() {
    let frames = vec![Frame::new(FrameBody::COMM(COMM {
        text_encoding: TextEncoding::ISO88591,
        language: "eng".to_string(),
        short_description: "desc".to_string(),
        actual_text: "text".to_string(),
    }))];

    let v2_bytes = MetadataWriter::new(options_for(2)).write(frames).unwrap();
    assert_eq!(2, v2_bytes[3]);
    assert_eq!(b"COM", &v2_bytes[10..13]);

    let tag = MetadataReader::new(&v2_bytes).unwrap().read().unwrap();
    assert_eq!(None, tag.frames[0].flags);

    let v4_bytes = MetadataWriter::new(options_for(4)).write(tag.frames.clone()).unwrap();
    assert_eq!(b"COMM", &v4_bytes[10..14]);
    // the 6 byte v2.2 frame header becomes the 10 byte form with default flags
    assert_eq!(&[0x00, 0x00], &v4_bytes[18..20]);

    let upgraded = MetadataReader::new(&v4_bytes).unwrap().read().unwrap();
    assert_eq!(tag.frames[0].body, upgraded.frames[0].body);
}

#[test]
fn attached_picture_across_versions() {
    let picture = APIC {
        text_encoding: TextEncoding::ISO88591,
        mime_type: "image/png".to_string(),
        picture_type: PictureType::CoverFront,
        description: "cover".to_string(),
        picture_data: vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a],
    };
    let frames = vec![Frame::new(FrameBody::APIC(picture.clone()))];

    let v2_bytes = MetadataWriter::new(options_for(2)).write(frames.clone()).unwrap();
    assert!(find_subsequence(&v2_bytes, b"PIC").is_some());
    assert!(find_subsequence(&v2_bytes, b"PNG").is_some());
    assert!(find_subsequence(&v2_bytes, b"image/png").is_none());

    let v2_tag = MetadataReader::new(&v2_bytes).unwrap().read().unwrap();
    assert_eq!(FrameBody::APIC(picture.clone()), v2_tag.frames[0].body);

    let v4_bytes = MetadataWriter::new(options_for(4)).write(frames).unwrap();
    assert!(find_subsequence(&v4_bytes, b"image/png\x00").is_some());

    let v4_tag = MetadataReader::new(&v4_bytes).unwrap().read().unwrap();
    assert_eq!(v2_tag.frames[0].body, v4_tag.frames[0].body);
}

#[test]
fn ordering_is_preserved() {
    let frames = vec![Frame::new(FrameBody::TPE1(text_frame("artist"))),
                      Frame::new(FrameBody::TIT2(text_frame("title"))),
                      Frame::new(FrameBody::TXXX(TXXX {
                          text_encoding: TextEncoding::ISO88591,
                          description: "first".to_string(),
                          value: "1".to_string(),
                      })),
                      Frame::new(FrameBody::TXXX(TXXX {
                          text_encoding: TextEncoding::ISO88591,
                          description: "second".to_string(),
                          value: "2".to_string(),
                      })),
                      Frame::new(FrameBody::TALB(text_frame("album")))];

    let bytes = MetadataWriter::new(options_for(4)).write(frames.clone()).unwrap();
    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();

    assert_eq!(frames.len(), tag.frames.len());
    for (written, decoded) in frames.iter().zip(tag.frames.iter()) {
        assert_eq!(written.body, decoded.body);
    }
}

#[test]
fn decode_then_encode_is_byte_exact() {
    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("title"))),
                      Frame::new(FrameBody::TLEN(text_frame("231000"))),
                      Frame::new(FrameBody::COMM(COMM {
                          text_encoding: TextEncoding::UTF16,
                          language: "eng".to_string(),
                          short_description: "desc".to_string(),
                          actual_text: "a \u{266b} comment".to_string(),
                      }))];

    let bytes = MetadataWriter::new(options_for(3)).write(frames).unwrap();
    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    let again = MetadataWriter::new(options_for(3)).write(tag.frames).unwrap();

    assert_eq!(bytes, again);
}

#[test]
fn padding_is_ignored() {
    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("padded")))];
    let bytes = MetadataWriter::new(options_for(3)).write(frames.clone()).unwrap();

    let padding = 64;
    let old_size = (bytes.len() - 10) as u32;
    let mut padded = bytes.clone();
    padded.extend(vec![0u8; padding]);
    let new_size = synchsafe4(old_size + padding as u32);
    padded[6..10].copy_from_slice(&new_size);

    let tag = MetadataReader::new(&padded).unwrap().read().unwrap();
    assert_eq!(1, tag.frames.len());
    assert_eq!(frames[0].body, tag.frames[0].body);
}

#[test]
fn automatic_version_selection() {
    let highest = vec![Frame::new(FrameBody::TIT2(text_frame("t")))];
    let bytes = MetadataWriter::new(EncodeOptions::default()).write(highest).unwrap();
    assert_eq!(4, bytes[3]);

    // TYER was removed in 2.4, so the selector falls back
    let with_year = vec![Frame::new(FrameBody::TIT2(text_frame("t"))),
                         Frame::new(FrameBody::TYER(text_frame("2003")))];
    let bytes = MetadataWriter::new(EncodeOptions::default()).write(with_year).unwrap();
    assert_eq!(3, bytes[3]);

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert_eq!(2, tag.frames.len());
}

#[test]
fn selection_failure_aggregates_reasons() {
    let mut options = EncodeOptions::default();
    options.tag_is_an_update = true;

    // the update flag needs 2.4, TYER refuses it
    let frames = vec![Frame::new(FrameBody::TYER(text_frame("1999")))];
    let err = MetadataWriter::new(options).write(frames).unwrap_err();
    let message = format!("{}", err);

    assert!(message.contains("TYER"), "{}", message);
    assert!(message.contains("update flag"), "{}", message);
}

#[test]
fn global_text_encoding_is_applied() {
    let mut options = options_for(3);
    options.text_encoding = Some(TextEncoding::UTF16);

    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("caf\u{e9}")))];
    let bytes = MetadataWriter::new(options).write(frames).unwrap();

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    match tag.frames[0].body {
        FrameBody::TIT2(ref body) => {
            assert_eq!(TextEncoding::UTF16, body.text_encoding);
            assert_eq!("caf\u{e9}", body.text);
        }
        ref other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn global_text_encoding_legality() {
    let mut options = options_for(3);
    options.text_encoding = Some(TextEncoding::UTF8);
    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("t")))];
    assert!(MetadataWriter::new(options).write(frames.clone()).is_err());

    let mut options = options_for(2);
    options.text_encoding = Some(TextEncoding::UTF16);
    assert!(MetadataWriter::new(options).write(frames.clone()).is_err());

    let mut options = options_for(2);
    options.text_encoding = Some(TextEncoding::UTF8);
    assert!(MetadataWriter::new(options).write(frames).is_ok());
}

#[test]
fn v23_extended_header_carries_crc() {
    let mut options = options_for(3);
    options.crc_data = Some(0xdead_beef);

    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("t")))];
    let bytes = MetadataWriter::new(options).write(frames).unwrap();

    assert_eq!(0x40, bytes[5] & 0x40);

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    let extended = tag.extended.unwrap();
    assert_eq!(Some(0xdead_beef), extended.crc);
    assert_eq!(0, extended.padding_size);
    assert_eq!(1, tag.frames.len());
}

#[test]
fn v24_extended_header_sub_sections() {
    let restrictions = TagRestrictions {
        tag_size: 2,
        text_encoding: 1,
        text_field_size: 0,
        image_encoding: 0,
        image_size: 3,
    };

    let mut options = options_for(4);
    options.tag_is_an_update = true;
    options.crc_data = Some(0xdead_beef);
    options.tag_restrictions = Some(restrictions.clone());

    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("t")))];
    let bytes = MetadataWriter::new(options).write(frames.clone()).unwrap();

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    let extended = tag.extended.unwrap();
    assert!(extended.tag_is_an_update);
    assert_eq!(Some(0xdead_beef), extended.crc);
    assert_eq!(Some(restrictions), extended.restrictions);
    assert_eq!(frames[0].body, tag.frames[0].body);
}

#[test]
fn unknown_identifier_aborts_the_tag() {
    let mut bytes = vec![0x49, 0x44, 0x33, 0x03, 0x00, 0x00];
    bytes.extend(synchsafe4(11).iter().cloned());
    bytes.extend(b"ZZZZ".iter().cloned());
    bytes.extend(vec![0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x41]);

    assert!(MetadataReader::new(&bytes).unwrap().read().is_err());
}

#[test]
fn frame_flags_round_trip() {
    let mut flags = FrameFlags::default();
    flags.file_alter_preservation = true;
    flags.read_only = true;

    let frames = vec![Frame::with_flags(FrameBody::TIT2(text_frame("flagged")), flags.clone())];
    let bytes = MetadataWriter::new(options_for(3)).write(frames).unwrap();

    assert_eq!(0x60, bytes[18]);

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert_eq!(Some(flags), tag.frames[0].flags);
}

#[test]
fn v24_per_frame_unsynchronisation() {
    let body = MCDI { cd_toc: vec![0xff, 0xe5, 0x00, 0xff] };
    let mut flags = FrameFlags::default();
    flags.unsynchronisation = true;

    let frames = vec![Frame::with_flags(FrameBody::MCDI(body.clone()), flags.clone())];
    let bytes = MetadataWriter::new(options_for(4)).write(frames).unwrap();

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert_eq!(Some(flags), tag.frames[0].flags);
    assert_eq!(FrameBody::MCDI(body), tag.frames[0].body);
}

#[test]
fn v24_data_length_indicator() {
    let body = MCDI { cd_toc: vec![0x01, 0x02, 0x03, 0x04, 0x05] };
    let mut flags = FrameFlags::default();
    flags.data_length_indicator = true;

    let frames = vec![Frame::with_flags(FrameBody::MCDI(body.clone()), flags.clone())];
    let bytes = MetadataWriter::new(options_for(4)).write(frames).unwrap();

    // frame size covers the 4 indicator bytes plus the body
    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert_eq!(Some(flags), tag.frames[0].flags);
    assert_eq!(FrameBody::MCDI(body), tag.frames[0].body);
}

#[test]
fn unsynchronisation_and_data_length_require_v24() {
    let mut flags = FrameFlags::default();
    flags.unsynchronisation = true;

    let frames = vec![Frame::with_flags(FrameBody::TIT2(text_frame("t")), flags)];
    assert!(MetadataWriter::new(options_for(3)).write(frames.clone()).is_err());
    assert!(MetadataWriter::new(options_for(2)).write(frames.clone()).is_err());
    assert!(MetadataWriter::new(options_for(4)).write(frames).is_ok());
}

#[test]
fn popularimeter_after_a_frame_with_zero_bytes() {
    // the email terminator scan must stay inside the POPM body even when an
    // earlier frame carries plenty of zero bytes
    let frames = vec![Frame::new(FrameBody::COMM(COMM {
                          text_encoding: TextEncoding::ISO88591,
                          language: "eng".to_string(),
                          short_description: "a description".to_string(),
                          actual_text: "zeroes ahead".to_string(),
                      })),
                      Frame::new(FrameBody::POPM(POPM {
                          email_to_user: "rating@example.com".to_string(),
                          rating: 255,
                          counter: 12,
                      }))];

    let bytes = MetadataWriter::new(options_for(3)).write(frames).unwrap();
    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();

    match tag.frames[1].body {
        FrameBody::POPM(ref body) => {
            assert_eq!("rating@example.com", body.email_to_user);
            assert_eq!(255, body.rating);
            assert_eq!(12, body.counter);
        }
        ref other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn experimental_flag_is_written() {
    let mut options = options_for(4);
    options.experimental = true;

    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("t")))];
    let bytes = MetadataWriter::new(options).write(frames).unwrap();

    assert_eq!(0x20, bytes[5] & 0x20);

    let tag = MetadataReader::new(&bytes).unwrap().read().unwrap();
    assert!(tag.head.has_flag(HeadFlag::ExperimentalIndicator));
}

#[test]
fn signature_is_located_past_leading_bytes() {
    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("offset")))];
    let bytes = MetadataWriter::new(options_for(3)).write(frames.clone()).unwrap();

    let mut shifted = vec![0x00, 0x10, 0x42];
    shifted.extend(bytes);

    let tag = MetadataReader::new(&shifted).unwrap().read().unwrap();
    assert_eq!(frames[0].body, tag.frames[0].body);
}

#[test]
fn missing_signature_is_an_error() {
    assert!(MetadataReader::new(&[0x00, 0x01, 0x02, 0x03]).is_err());
    assert!(MetadataReader::new(&[]).is_err());
}

#[test]
fn pinned_version_success_implies_automatic_success() {
    let frames = vec![Frame::new(FrameBody::TIT2(text_frame("t"))),
                      Frame::new(FrameBody::TRCK(text_frame("7")))];

    assert!(MetadataWriter::new(options_for(3)).write(frames.clone()).is_ok());

    // the automatic selector must also succeed, at 3 or higher
    let bytes = MetadataWriter::new(EncodeOptions::default()).write(frames).unwrap();
    assert!(bytes[3] >= 3);
}
