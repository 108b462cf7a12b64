extern crate env_logger;
extern crate rid3;

use std::io::Cursor;

use rid3::frame::*;
use rid3::readable::{Readable, ReadableFactory};
use rid3::writable::WritableFactory;

fn body_of<F: FrameWriterDefault>(frame: &F) -> Vec<u8> {
    let mut writable = Cursor::new(vec![]).to_writable();
    frame.write(&mut writable).unwrap();

    let mut buf = Vec::new();
    writable.copy(&mut buf).unwrap();
    buf
}

fn readable_of(bytes: Vec<u8>) -> Readable<Cursor<Vec<u8>>> {
    Cursor::new(bytes).to_readable()
}

#[test]
fn text_body_round_trip() {
    let _ = env_logger::try_init();

    let frame = TEXT {
        text_encoding: TextEncoding::ISO88591,
        text: "Hello".to_string(),
    };

    let bytes = body_of(&frame);
    assert_eq!(vec![0x00, 0x48, 0x65, 0x6c, 0x6c, 0x6f], bytes);
    assert_eq!(frame, TEXT::read(&mut readable_of(bytes)).unwrap());

    let utf16 = TEXT {
        text_encoding: TextEncoding::UTF16,
        text: "Hell\u{f6}".to_string(),
    };
    let bytes = body_of(&utf16);
    assert_eq!(&[0x01, 0xff, 0xfe], &bytes[0..3]);
    assert_eq!(utf16, TEXT::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn text_body_keeps_whitespace() {
    let frame = TEXT {
        text_encoding: TextEncoding::UTF8,
        text: "  padded  ".to_string(),
    };

    assert_eq!(frame, TEXT::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn comment_body_round_trip() {
    let frame = COMM {
        text_encoding: TextEncoding::UTF16,
        language: "eng".to_string(),
        short_description: "short".to_string(),
        actual_text: "this is a comment".to_string(),
    };

    assert_eq!(frame, COMM::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn comment_rejects_bad_language() {
    let frame = COMM {
        text_encoding: TextEncoding::ISO88591,
        language: "english".to_string(),
        short_description: String::new(),
        actual_text: String::new(),
    };

    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(frame.write(&mut writable).is_err());
}

#[test]
fn attached_picture_per_version() {
    let frame = APIC {
        text_encoding: TextEncoding::ISO88591,
        mime_type: "image/png".to_string(),
        picture_type: PictureType::CoverFront,
        description: "front".to_string(),
        picture_data: vec![0x89, 0x50, 0x4e, 0x47],
    };

    let mut writable = Cursor::new(vec![]).to_writable();
    frame.write(&mut writable, 2).unwrap();
    let mut v2_bytes = Vec::new();
    writable.copy(&mut v2_bytes).unwrap();

    assert_eq!(&[0x00, 0x50, 0x4e, 0x47, 0x03], &v2_bytes[0..5]);
    assert_eq!(frame, APIC::read(&mut readable_of(v2_bytes), 2).unwrap());

    let mut writable = Cursor::new(vec![]).to_writable();
    frame.write(&mut writable, 4).unwrap();
    let mut v4_bytes = Vec::new();
    writable.copy(&mut v4_bytes).unwrap();

    assert_eq!(b"image/png\x00", &v4_bytes[1..11]);
    assert_eq!(frame, APIC::read(&mut readable_of(v4_bytes), 4).unwrap());
}

#[test]
fn attached_picture_v2_rejects_other_mime_types() {
    let frame = APIC {
        text_encoding: TextEncoding::ISO88591,
        mime_type: "image/gif".to_string(),
        picture_type: PictureType::Other,
        description: String::new(),
        picture_data: vec![],
    };

    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(frame.write(&mut writable, 2).is_err());
    assert!(FrameBody::APIC(frame).supports_version(2).is_err());
}

#[test]
fn unique_file_identifier_limits() {
    let frame = UFID {
        owner_identifier: "http://www.id3.org/dummy/ufid.html".to_string(),
        identifier: vec![0x01; 64],
    };
    assert_eq!(frame, UFID::read(&mut readable_of(body_of(&frame))).unwrap());

    let too_long = UFID {
        owner_identifier: "owner".to_string(),
        identifier: vec![0x01; 65],
    };
    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(too_long.write(&mut writable).is_err());

    let empty_owner = UFID {
        owner_identifier: String::new(),
        identifier: vec![0x01],
    };
    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(empty_owner.write(&mut writable).is_err());
}

#[test]
fn involved_people_pairs() {
    let frame = IPLS {
        text_encoding: TextEncoding::ISO88591,
        people: vec![("producer".to_string(), "Alice".to_string()),
                     ("mix".to_string(), "Bob".to_string())],
    };

    let bytes = body_of(&frame);
    // encoding byte plus four terminated strings
    assert_eq!(1 + 9 + 1 + 5 + 1 + 3 + 1 + 3 + 1, bytes.len());
    assert_eq!(frame, IPLS::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn event_timing_codes_round_trip() {
    let frame = ETCO {
        timestamp_format: TimestampFormat::Milliseconds,
        event_timing_codes: vec![EventTimingCode::IntroStart(0),
                                 EventTimingCode::MainPartStart(45_000),
                                 EventTimingCode::AudioEnd(183_000)],
    };

    let bytes = body_of(&frame);
    assert_eq!(1 + 3 * 5, bytes.len());
    assert_eq!(frame, ETCO::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn lookup_table_bit_stream() {
    let frame = MLLT {
        frames_between_reference: 1,
        bytes_between_reference: 0x100,
        millis_between_reference: 0x200,
        references: vec![MpegLocationReference {
                             bytes_deviation: 0xab,
                             millis_deviation: 0xcd,
                         }],
    };

    // one byte per deviation: the widths are byte rounded
    let bytes = body_of(&frame);
    assert_eq!(vec![0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x00, 0x08, 0x08, 0xab, 0xcd],
               bytes);
    assert_eq!(frame, MLLT::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn lookup_table_mixed_widths() {
    let frame = MLLT {
        frames_between_reference: 4,
        bytes_between_reference: 0xff_ffff,
        millis_between_reference: 26_000,
        references: vec![MpegLocationReference {
                             bytes_deviation: 300,
                             millis_deviation: 1,
                         },
                         MpegLocationReference {
                             bytes_deviation: 5,
                             millis_deviation: 70_000,
                         }],
    };

    let bytes = body_of(&frame);
    // 16 bits for the byte deviations, 24 for the millis
    assert_eq!(0x10, bytes[8]);
    assert_eq!(0x18, bytes[9]);
    assert_eq!(frame, MLLT::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn lookup_table_preamble_limits() {
    let frame = MLLT {
        frames_between_reference: 1,
        bytes_between_reference: 0x100_0000,
        millis_between_reference: 0,
        references: vec![],
    };

    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(frame.write(&mut writable).is_err());
}

#[test]
fn tempo_codes_extension_byte() {
    let frame = SYTC {
        timestamp_format: TimestampFormat::MpegFrames,
        tempo_codes: vec![TempoCode {
                              tempo: 100,
                              timestamp: 10,
                          },
                          TempoCode {
                              tempo: 255,
                              timestamp: 20,
                          },
                          TempoCode {
                              tempo: 510,
                              timestamp: 30,
                          }],
    };

    let bytes = body_of(&frame);
    assert_eq!(0x64, bytes[1]);
    assert_eq!(&[0xff, 0x00], &bytes[6..8]);
    assert_eq!(&[0xff, 0xff], &bytes[12..14]);
    assert_eq!(frame, SYTC::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn tempo_codes_out_of_range() {
    for tempo in vec![0u16, 511] {
        let frame = SYTC {
            timestamp_format: TimestampFormat::Milliseconds,
            tempo_codes: vec![TempoCode {
                                  tempo: tempo,
                                  timestamp: 0,
                              }],
        };
        let mut writable = Cursor::new(vec![]).to_writable();
        assert!(frame.write(&mut writable).is_err());
    }
}

#[test]
fn synchronised_lyrics_round_trip() {
    let frame = SYLT {
        text_encoding: TextEncoding::UTF16,
        language: "eng".to_string(),
        timestamp_format: TimestampFormat::Milliseconds,
        content_type: ContentType::Lyrics,
        content_descriptor: "verse".to_string(),
        lyrics: vec![SyncedText {
                         text: "Strangers in the night".to_string(),
                         timestamp: 0,
                     },
                     SyncedText {
                         text: "Exchanging glances".to_string(),
                         timestamp: 4_300,
                     }],
    };

    assert_eq!(frame, SYLT::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn volume_adjustment_fixture() {
    let frame = RVAD {
        bits_used_for_volume: 16,
        right: VolumeAdjustment {
            increment: true,
            relative_volume: 0x0102,
            peak_volume: 0x0304,
        },
        left: VolumeAdjustment {
            increment: false,
            relative_volume: 0x0506,
            peak_volume: 0x0708,
        },
        right_back: None,
        left_back: None,
        center: None,
        bass: None,
    };

    // increment byte packs {bass, center, left back, right back, left, right}
    let bytes = body_of(&frame);
    assert_eq!(vec![0x04, 0x10, 0x01, 0x02, 0x05, 0x06, 0x03, 0x04, 0x07, 0x08],
               bytes);
    assert_eq!(frame, RVAD::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn volume_adjustment_all_channels() {
    let channel = |inc: bool, rel: u32, peak: u32| {
        VolumeAdjustment {
            increment: inc,
            relative_volume: rel,
            peak_volume: peak,
        }
    };

    let frame = RVAD {
        bits_used_for_volume: 8,
        right: channel(true, 1, 2),
        left: channel(false, 3, 4),
        right_back: Some(channel(true, 5, 6)),
        left_back: Some(channel(false, 7, 8)),
        center: Some(channel(true, 9, 10)),
        bass: Some(channel(false, 11, 12)),
    };

    let bytes = body_of(&frame);
    assert_eq!(2 + 4 + 4 + 2 + 2, bytes.len());
    assert_eq!(frame, RVAD::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn volume_adjustment_channel_nesting() {
    let channel = VolumeAdjustment {
        increment: false,
        relative_volume: 0,
        peak_volume: 0,
    };

    let frame = RVAD {
        bits_used_for_volume: 8,
        right: channel.clone(),
        left: channel.clone(),
        right_back: None,
        left_back: None,
        center: None,
        bass: Some(channel.clone()),
    };

    let mut writable = Cursor::new(vec![]).to_writable();
    assert!(frame.write(&mut writable).is_err());
}

#[test]
fn volume_adjustment2_round_trip() {
    let frame = RVA2 {
        identification: "album".to_string(),
        channels: vec![ChannelVolume {
                           channel_type: ChannelType::MasterVolume,
                           volume_adjustment: -512,
                           bits_representing_peak: 16,
                           peak_volume: 0xffff,
                       }],
    };

    let bytes = body_of(&frame);
    assert_eq!(vec![0x61, 0x6c, 0x62, 0x75, 0x6d, 0x00, 0x01, 0xfe, 0x00, 0x10, 0xff, 0xff],
               bytes);
    assert_eq!(frame, RVA2::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn volume_adjustment2_zero_peak_bits() {
    let frame = RVA2 {
        identification: "track".to_string(),
        channels: vec![ChannelVolume {
                           channel_type: ChannelType::FrontLeft,
                           volume_adjustment: 256,
                           bits_representing_peak: 0,
                           peak_volume: 0,
                       }],
    };

    assert_eq!(frame, RVA2::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn equalisation_increment_bit() {
    let frame = EQUA {
        adjustment_bits: 16,
        bands: vec![EqualisationBand {
                        increment: true,
                        frequency: 1000,
                        adjustment: 0x0203,
                    },
                    EqualisationBand {
                        increment: false,
                        frequency: 0x7fff,
                        adjustment: 1,
                    }],
    };

    let bytes = body_of(&frame);
    assert_eq!(vec![0x10, 0x83, 0xe8, 0x02, 0x03, 0x7f, 0xff, 0x00, 0x01], bytes);
    assert_eq!(frame, EQUA::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn equalisation2_round_trip() {
    let frame = EQU2 {
        interpolation_method: InterpolationMethod::Linear,
        identification: "front".to_string(),
        adjustment_points: vec![FrequencyAdjustment {
                                    frequency: 2000,
                                    volume_adjustment: -1024,
                                },
                                FrequencyAdjustment {
                                    frequency: 40,
                                    volume_adjustment: 512,
                                }],
    };

    assert_eq!(frame, EQU2::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn reverb_fixture() {
    let frame = RVRB {
        reverb_left: 0x0102,
        reverb_right: 0x0304,
        reverb_bounce_left: 5,
        reverb_bounce_right: 6,
        reverb_feedback_left_to_left: 7,
        reverb_feedback_left_to_right: 8,
        reverb_feedback_right_to_right: 9,
        reverb_feedback_right_to_left: 10,
        premix_left_to_right: 11,
        premix_right_to_left: 12,
    };

    let bytes = body_of(&frame);
    assert_eq!(vec![0x01, 0x02, 0x03, 0x04, 5, 6, 7, 8, 9, 10, 11, 12], bytes);
    assert_eq!(frame, RVRB::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn play_counter_widths() {
    let frame = PCNT { counter: 0x1234 };
    let bytes = body_of(&frame);
    assert_eq!(vec![0x00, 0x00, 0x12, 0x34], bytes);
    assert_eq!(frame, PCNT::read(&mut readable_of(bytes)).unwrap());

    let wide = PCNT { counter: 0x1_0000_0000 };
    let bytes = body_of(&wide);
    assert_eq!(vec![0x01, 0x00, 0x00, 0x00, 0x00], bytes);
    assert_eq!(wide, PCNT::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn popularimeter_round_trip() {
    let frame = POPM {
        email_to_user: "rating@example.com".to_string(),
        rating: 196,
        counter: 2_190_967,
    };

    assert_eq!(frame, POPM::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn buffer_size_offset_is_optional() {
    let with_offset = RBUF {
        buffer_size: 0x1234,
        embedded_info: true,
        offset_to_next_tag: Some(0x00ff_ffff),
    };
    let bytes = body_of(&with_offset);
    assert_eq!(7, bytes.len());
    assert_eq!(with_offset, RBUF::read(&mut readable_of(bytes)).unwrap());

    let without = RBUF {
        buffer_size: 0x10,
        embedded_info: false,
        offset_to_next_tag: None,
    };
    let bytes = body_of(&without);
    assert_eq!(4, bytes.len());
    assert_eq!(without, RBUF::read(&mut readable_of(bytes)).unwrap());

    // the embedded info byte is 0 or 1
    assert!(RBUF::read(&mut readable_of(vec![0x00, 0x00, 0x10, 0x02])).is_err());
}

#[test]
fn audio_encryption_round_trip() {
    let frame = AENC {
        owner_identifier: "mailto:crypt@example.com".to_string(),
        preview_start: 0,
        preview_length: 1024,
        encryption_info: vec![0xde, 0xad, 0xbe, 0xef],
    };

    assert_eq!(frame, AENC::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn encapsulated_object_round_trip() {
    let frame = GEOB {
        text_encoding: TextEncoding::UTF16,
        mime_type: "application/pdf".to_string(),
        filename: "booklet.pdf".to_string(),
        content_description: "album booklet".to_string(),
        encapsulation_object: vec![0x25, 0x50, 0x44, 0x46],
    };

    assert_eq!(frame, GEOB::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn user_defined_text_round_trip() {
    let frame = TXXX {
        text_encoding: TextEncoding::UTF8,
        description: "replaygain_track_gain".to_string(),
        value: "-6.2 dB".to_string(),
    };

    assert_eq!(frame, TXXX::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn user_defined_url_is_latin1() {
    let frame = WXXX {
        text_encoding: TextEncoding::UTF16,
        description: "st\u{f6}re".to_string(),
        url: "http://example.com/shop".to_string(),
    };

    let bytes = body_of(&frame);
    let url_offset = bytes.len() - frame.url.len();
    assert_eq!(frame.url.as_bytes(), &bytes[url_offset..]);
    assert_eq!(frame, WXXX::read(&mut readable_of(bytes)).unwrap());
}

#[test]
fn unsynchronised_lyrics_round_trip() {
    let frame = USLT {
        text_encoding: TextEncoding::UTF16,
        language: "kor".to_string(),
        content_descriptor: "translation".to_string(),
        lyrics: "\u{c548}\u{b155}".to_string(),
    };

    assert_eq!(frame, USLT::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn music_cd_identifier_is_opaque() {
    let frame = MCDI { cd_toc: vec![0xff, 0x00, 0x12, 0xff] };

    assert_eq!(frame, MCDI::read(&mut readable_of(body_of(&frame))).unwrap());
}

#[test]
fn version_support_by_content() {
    let equ2 = FrameBody::EQU2(EQU2 {
        interpolation_method: InterpolationMethod::Band,
        identification: String::new(),
        adjustment_points: vec![],
    });
    let reason = equ2.supports_version(3).unwrap_err();
    assert!(reason.contains("only supported in ID3v2.4"), "{}", reason);
    assert!(equ2.supports_version(4).is_ok());

    let ipls = FrameBody::IPLS(IPLS {
        text_encoding: TextEncoding::ISO88591,
        people: vec![],
    });
    assert!(ipls.supports_version(4).is_err());
    assert!(ipls.supports_version(3).is_ok());
    assert!(ipls.supports_version(2).is_ok());

    let tsst = FrameBody::TSST(TEXT {
        text_encoding: TextEncoding::ISO88591,
        text: String::new(),
    });
    assert!(tsst.supports_version(2).is_err());
    assert!(tsst.supports_version(3).is_err());
    assert!(tsst.supports_version(4).is_ok());

    let utf16be = FrameBody::TIT2(TEXT {
        text_encoding: TextEncoding::UTF16BE,
        text: "x".to_string(),
    });
    assert!(utf16be.supports_version(3).is_err());
    assert!(utf16be.supports_version(4).is_ok());
}

#[test]
fn version_support_by_flags() {
    let mut flags = FrameFlags::default();
    assert!(flags.unsupported_reason("TIT2", 2).is_none());

    flags.read_only = true;
    assert!(flags.unsupported_reason("TIT2", 2).is_some());
    assert!(flags.unsupported_reason("TIT2", 3).is_none());

    flags.unsynchronisation = true;
    let reason = flags.unsupported_reason("TIT2", 3).unwrap();
    assert!(reason.contains("only supported in ID3v2.4"), "{}", reason);
    assert!(flags.unsupported_reason("TIT2", 4).is_none());
}

#[test]
fn default_flags_discard_on_file_alteration() {
    assert!(FrameFlags::default_for("TLEN").file_alter_preservation);
    assert!(FrameFlags::default_for("ETCO").file_alter_preservation);
    assert!(FrameFlags::default_for("RVA2").file_alter_preservation);
    assert!(!FrameFlags::default_for("TIT2").file_alter_preservation);
    assert!(!FrameFlags::default_for("COMM").file_alter_preservation);
}
