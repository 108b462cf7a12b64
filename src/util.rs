extern crate encoding;
extern crate regex;

use self::encoding::all::{ISO_8859_1, UTF_16BE, UTF_16LE, UTF_8};
use self::encoding::{DecoderTrap, EncoderTrap, Encoding};

use errors::{ParsingError, WriteError};
use frame::*;
use frame::id;
use readable::Readable;
use writable::{Writable, WritableFactory};

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Error, ErrorKind, Result};
use std::result;
use std::vec::Vec;

pub const BIT7: u8 = 0x80;
pub const BIT6: u8 = 0x40;
pub const BIT5: u8 = 0x20;
pub const BIT4: u8 = 0x10;
pub const BIT3: u8 = 0x08;
pub const BIT2: u8 = 0x04;
pub const BIT1: u8 = 0x02;
pub const BIT0: u8 = 0x01;

lazy_static! {
    ///
    /// The 62 pairs of a V2.2 3 character identifier and its V2.3/V2.4
    /// 4 character form.
    ///
    pub static ref ID_V2_TO_V4: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(id::BUF_STR, id::RBUF_STR);
        m.insert(id::CNT_STR, id::PCNT_STR);
        m.insert(id::COM_STR, id::COMM_STR);
        m.insert(id::CRA_STR, id::AENC_STR);
        m.insert(id::ETC_STR, id::ETCO_STR);
        m.insert(id::EQU_STR, id::EQUA_STR);
        m.insert(id::GEO_STR, id::GEOB_STR);
        m.insert(id::IPL_STR, id::IPLS_STR);
        m.insert(id::LNK_STR, id::LINK_STR);
        m.insert(id::MCI_STR, id::MCDI_STR);
        m.insert(id::MLL_STR, id::MLLT_STR);
        m.insert(id::PIC_STR, id::APIC_STR);
        m.insert(id::POP_STR, id::POPM_STR);
        m.insert(id::REV_STR, id::RVRB_STR);
        m.insert(id::RVA_STR, id::RVAD_STR);
        m.insert(id::SLT_STR, id::SYLT_STR);
        m.insert(id::STC_STR, id::SYTC_STR);
        m.insert(id::TAL_STR, id::TALB_STR);
        m.insert(id::TBP_STR, id::TBPM_STR);
        m.insert(id::TCM_STR, id::TCOM_STR);
        m.insert(id::TCO_STR, id::TCON_STR);
        m.insert(id::TCR_STR, id::TCOP_STR);
        m.insert(id::TDA_STR, id::TDAT_STR);
        m.insert(id::TDY_STR, id::TDLY_STR);
        m.insert(id::TEN_STR, id::TENC_STR);
        m.insert(id::TFT_STR, id::TFLT_STR);
        m.insert(id::TIM_STR, id::TIME_STR);
        m.insert(id::TKE_STR, id::TKEY_STR);
        m.insert(id::TLA_STR, id::TLAN_STR);
        m.insert(id::TLE_STR, id::TLEN_STR);
        m.insert(id::TMT_STR, id::TMED_STR);
        m.insert(id::TOA_STR, id::TOPE_STR);
        m.insert(id::TOF_STR, id::TOFN_STR);
        m.insert(id::TOL_STR, id::TOLY_STR);
        m.insert(id::TOR_STR, id::TORY_STR);
        m.insert(id::TOT_STR, id::TOAL_STR);
        m.insert(id::TP1_STR, id::TPE1_STR);
        m.insert(id::TP2_STR, id::TPE2_STR);
        m.insert(id::TP3_STR, id::TPE3_STR);
        m.insert(id::TP4_STR, id::TPE4_STR);
        m.insert(id::TPA_STR, id::TPOS_STR);
        m.insert(id::TPB_STR, id::TPUB_STR);
        m.insert(id::TRC_STR, id::TSRC_STR);
        m.insert(id::TRD_STR, id::TRDA_STR);
        m.insert(id::TRK_STR, id::TRCK_STR);
        m.insert(id::TSI_STR, id::TSIZ_STR);
        m.insert(id::TSS_STR, id::TSSE_STR);
        m.insert(id::TT1_STR, id::TIT1_STR);
        m.insert(id::TT2_STR, id::TIT2_STR);
        m.insert(id::TT3_STR, id::TIT3_STR);
        m.insert(id::TXT_STR, id::TEXT_STR);
        m.insert(id::TXX_STR, id::TXXX_STR);
        m.insert(id::TYE_STR, id::TYER_STR);
        m.insert(id::UFI_STR, id::UFID_STR);
        m.insert(id::ULT_STR, id::USLT_STR);
        m.insert(id::WAF_STR, id::WOAF_STR);
        m.insert(id::WAR_STR, id::WOAR_STR);
        m.insert(id::WAS_STR, id::WOAS_STR);
        m.insert(id::WCM_STR, id::WCOM_STR);
        m.insert(id::WCP_STR, id::WCOP_STR);
        m.insert(id::WPB_STR, id::WPUB_STR);
        m.insert(id::WXX_STR, id::WXXX_STR);

        m
    };

    pub static ref ID_V4_TO_V2: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for (id_v2, id_v4) in ID_V2_TO_V4.iter() {
            m.insert(*id_v4, *id_v2);
        }

        m
    };

    ///
    /// Identifiers that were removed in V2.4.
    ///
    pub static ref V4_DROPPED_IDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert(id::TDAT_STR);
        s.insert(id::TIME_STR);
        s.insert(id::TORY_STR);
        s.insert(id::TRDA_STR);
        s.insert(id::TSIZ_STR);
        s.insert(id::TYER_STR);

        s
    };

    ///
    /// Identifiers that only exist in V2.4.
    ///
    pub static ref V24_ONLY_IDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert(id::EQU2_STR);
        s.insert(id::RVA2_STR);
        s.insert(id::TDEN_STR);
        s.insert(id::TDOR_STR);
        s.insert(id::TDRC_STR);
        s.insert(id::TDRL_STR);
        s.insert(id::TDTG_STR);
        s.insert(id::TIPL_STR);
        s.insert(id::TMCL_STR);
        s.insert(id::TMOO_STR);
        s.insert(id::TPRO_STR);
        s.insert(id::TSOA_STR);
        s.insert(id::TSOP_STR);
        s.insert(id::TSOT_STR);
        s.insert(id::TSST_STR);

        s
    };

    ///
    /// Identifiers that V2.4 dropped, plus the frame kinds V2.4 replaced.
    ///
    pub static ref NOT_V24_IDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert(id::EQUA_STR);
        s.insert(id::IPLS_STR);
        s.insert(id::RVAD_STR);
        for dropped in V4_DROPPED_IDS.iter() {
            s.insert(*dropped);
        }

        s
    };

    ///
    /// The identifiers whose default frame flags carry FileAlter.
    ///
    pub static ref DEFAULT_FILE_ALTER_IDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert(id::ASPI_STR);
        s.insert(id::AENC_STR);
        s.insert(id::ETCO_STR);
        s.insert(id::EQUA_STR);
        s.insert(id::EQU2_STR);
        s.insert(id::MLLT_STR);
        s.insert(id::POSS_STR);
        s.insert(id::SEEK_STR);
        s.insert(id::SYLT_STR);
        s.insert(id::SYTC_STR);
        s.insert(id::RVAD_STR);
        s.insert(id::RVA2_STR);
        s.insert(id::TENC_STR);
        s.insert(id::TLEN_STR);
        s.insert(id::TSIZ_STR);

        s
    };

    static ref FRAME_ID_V2_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z][A-Z0-9]{2}$")
        .unwrap();
    static ref FRAME_ID_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z][A-Z0-9]{3}$").unwrap();
    static ref TRIM_REGEX: regex::Regex =
        regex::Regex::new("(^[\\x{0}\\x{feff}\\x{fffe}]+|[\\x{0}\\x{feff}\\x{fffe}]+$)").unwrap();
}

///
/// Remap an identifier to the form used by `version`. The lookup fails
/// explicitly when no mapping exists.
///
pub fn id_for_version(id: &str, version: u8) -> result::Result<String, String> {
    match version {
        2 => {
            if id.len() == 3 {
                Ok(id.to_string())
            } else {
                match ID_V4_TO_V2.get(id) {
                    Some(mapped) => Ok(mapped.to_string()),
                    None => Err(format!("{} has no ID3v2.2 frame identifier", id)),
                }
            }
        }
        3 | 4 => {
            let id_v4 = if id.len() == 3 {
                match ID_V2_TO_V4.get(id) {
                    Some(mapped) => *mapped,
                    None => return Err(format!("{} has no ID3v2.{} frame identifier", id, version)),
                }
            } else {
                id
            };

            if version == 4 && V4_DROPPED_IDS.contains(id_v4) {
                return Err(format!("{} is not supported in ID3v2.4", id_v4));
            }

            Ok(id_v4.to_string())
        }
        _ => Err(format!("unknown ID3v2 version {}", version)),
    }
}

pub fn is_valid_frame_id(id: &str, version: u8) -> bool {
    if version == 2 {
        FRAME_ID_V2_REGEX.is_match(id)
    } else {
        FRAME_ID_REGEX.is_match(id)
    }
}

///
/// Trim the BOM and terminator residue a decoded string may carry. Real
/// whitespace is part of the value and survives.
///
pub fn trim(text: String) -> String {
    TRIM_REGEX.replace_all(text.as_str(), "").into_owned()
}

pub fn to_picture_type(t: u8) -> PictureType {
    match t {
        0x00 => PictureType::Other,
        0x01 => PictureType::FileIcon,
        0x02 => PictureType::OtherFileIcon,
        0x03 => PictureType::CoverFront,
        0x04 => PictureType::CoverBack,
        0x05 => PictureType::LeafletPage,
        0x06 => PictureType::Media,
        0x07 => PictureType::LeadArtist,
        0x08 => PictureType::Artist,
        0x09 => PictureType::Conductor,
        0x0a => PictureType::Band,
        0x0b => PictureType::Composer,
        0x0c => PictureType::Lyricist,
        0x0d => PictureType::RecordingLocation,
        0x0e => PictureType::DuringRecording,
        0x0f => PictureType::DuringPerformance,
        0x10 => PictureType::MovieScreenCapture,
        0x11 => PictureType::BrightColouredFish,
        0x12 => PictureType::Illustration,
        0x13 => PictureType::BandLogotype,
        0x14 => PictureType::PublisherLogoType,
        _ => PictureType::Other,
    }
}

pub fn from_picture_type(t: &PictureType) -> u8 {
    match t {
        &PictureType::Other => 0x00,
        &PictureType::FileIcon => 0x01,
        &PictureType::OtherFileIcon => 0x02,
        &PictureType::CoverFront => 0x03,
        &PictureType::CoverBack => 0x04,
        &PictureType::LeafletPage => 0x05,
        &PictureType::Media => 0x06,
        &PictureType::LeadArtist => 0x07,
        &PictureType::Artist => 0x08,
        &PictureType::Conductor => 0x09,
        &PictureType::Band => 0x0a,
        &PictureType::Composer => 0x0b,
        &PictureType::Lyricist => 0x0c,
        &PictureType::RecordingLocation => 0x0d,
        &PictureType::DuringRecording => 0x0e,
        &PictureType::DuringPerformance => 0x0f,
        &PictureType::MovieScreenCapture => 0x10,
        &PictureType::BrightColouredFish => 0x11,
        &PictureType::Illustration => 0x12,
        &PictureType::BandLogotype => 0x13,
        &PictureType::PublisherLogoType => 0x14,
    }
}

pub fn to_interpolation_method(t: u8) -> Result<InterpolationMethod> {
    match t {
        0x00 => Ok(InterpolationMethod::Band),
        0x01 => Ok(InterpolationMethod::Linear),
        _ => {
            Err(Error::new(ErrorKind::InvalidData,
                           format!("unknown interpolation method {}", t)))
        }
    }
}

pub fn from_interpolation_method(t: &InterpolationMethod) -> u8 {
    match t {
        &InterpolationMethod::Band => 0x00,
        &InterpolationMethod::Linear => 0x01,
    }
}

pub fn to_timestamp_format(t: u8) -> Result<TimestampFormat> {
    match t {
        0x01 => Ok(TimestampFormat::MpegFrames),
        0x02 => Ok(TimestampFormat::Milliseconds),
        _ => {
            Err(Error::new(ErrorKind::InvalidData,
                           format!("unknown timestamp format {}", t)))
        }
    }
}

pub fn from_timestamp_format(t: &TimestampFormat) -> u8 {
    match t {
        &TimestampFormat::MpegFrames => 0x01,
        &TimestampFormat::Milliseconds => 0x02,
    }
}

pub fn to_channel_type(t: u8) -> Result<ChannelType> {
    match t {
        0x00 => Ok(ChannelType::Other),
        0x01 => Ok(ChannelType::MasterVolume),
        0x02 => Ok(ChannelType::FrontRight),
        0x03 => Ok(ChannelType::FrontLeft),
        0x04 => Ok(ChannelType::BackRight),
        0x05 => Ok(ChannelType::BackLeft),
        0x06 => Ok(ChannelType::FrontCentre),
        0x07 => Ok(ChannelType::BackCentre),
        0x08 => Ok(ChannelType::Subwoofer),
        _ => Err(Error::new(ErrorKind::InvalidData, format!("unknown channel type {}", t))),
    }
}

pub fn from_channel_type(t: &ChannelType) -> u8 {
    match t {
        &ChannelType::Other => 0x00,
        &ChannelType::MasterVolume => 0x01,
        &ChannelType::FrontRight => 0x02,
        &ChannelType::FrontLeft => 0x03,
        &ChannelType::BackRight => 0x04,
        &ChannelType::BackLeft => 0x05,
        &ChannelType::FrontCentre => 0x06,
        &ChannelType::BackCentre => 0x07,
        &ChannelType::Subwoofer => 0x08,
    }
}

pub fn to_content_type(t: u8) -> ContentType {
    match t {
        0x00 => ContentType::Other,
        0x01 => ContentType::Lyrics,
        0x02 => ContentType::TextTranscription,
        0x03 => ContentType::MovementName,
        0x04 => ContentType::Events,
        0x05 => ContentType::Chord,
        0x06 => ContentType::Trivia,
        0x07 => ContentType::UrlsToWebpages,
        0x08 => ContentType::UrlsToImages,
        _ => ContentType::Other,
    }
}

pub fn from_content_type(t: &ContentType) -> u8 {
    match t {
        &ContentType::Other => 0x00,
        &ContentType::Lyrics => 0x01,
        &ContentType::TextTranscription => 0x02,
        &ContentType::MovementName => 0x03,
        &ContentType::Events => 0x04,
        &ContentType::Chord => 0x05,
        &ContentType::Trivia => 0x06,
        &ContentType::UrlsToWebpages => 0x07,
        &ContentType::UrlsToImages => 0x08,
    }
}

pub fn to_event_timing_code(t: u8, timestamp: u32) -> EventTimingCode {
    match t {
        0x00 => EventTimingCode::Padding(timestamp),
        0x01 => EventTimingCode::EndOfInitialSilence(timestamp),
        0x02 => EventTimingCode::IntroStart(timestamp),
        0x03 => EventTimingCode::MainPartStart(timestamp),
        0x04 => EventTimingCode::OutroStart(timestamp),
        0x05 => EventTimingCode::OutroEnd(timestamp),
        0x06 => EventTimingCode::VerseStart(timestamp),
        0x07 => EventTimingCode::RefrainStart(timestamp),
        0x08 => EventTimingCode::InterludeStart(timestamp),
        0x09 => EventTimingCode::ThemeStart(timestamp),
        0x0a => EventTimingCode::VariationStart(timestamp),
        0x0b => EventTimingCode::KeyChange(timestamp),
        0x0c => EventTimingCode::TimeChange(timestamp),
        0x0d => EventTimingCode::MomentaryUnwantedNoise(timestamp),
        0x0e => EventTimingCode::SustainedNoise(timestamp),
        0x0f => EventTimingCode::SustainedNoiseEnd(timestamp),
        0x10 => EventTimingCode::IntroEnd(timestamp),
        0x11 => EventTimingCode::MainPartEnd(timestamp),
        0x12 => EventTimingCode::VerseEnd(timestamp),
        0x13 => EventTimingCode::RefrainEnd(timestamp),
        0x14 => EventTimingCode::ThemeEnd(timestamp),
        0x15 => EventTimingCode::Profanity(timestamp),
        0x16 => EventTimingCode::ProfanityEnd(timestamp),
        0x17...0xdf => EventTimingCode::ReservedForFutureUse(timestamp, t),
        0xe0...0xef => EventTimingCode::NotPredefinedSynch(timestamp, t),
        0xf0...0xfc => EventTimingCode::ReservedForFutureUse(timestamp, t),
        0xfd => EventTimingCode::AudioEnd(timestamp),
        0xfe => EventTimingCode::AudioFileEnds(timestamp),
        _ => EventTimingCode::OneMoreByteOfEventsFollows(timestamp),
    }
}

pub fn from_event_timing_code(e: &EventTimingCode) -> (u8, u32) {
    match e {
        &EventTimingCode::Padding(timestamp) => (0x00, timestamp),
        &EventTimingCode::EndOfInitialSilence(timestamp) => (0x01, timestamp),
        &EventTimingCode::IntroStart(timestamp) => (0x02, timestamp),
        &EventTimingCode::MainPartStart(timestamp) => (0x03, timestamp),
        &EventTimingCode::OutroStart(timestamp) => (0x04, timestamp),
        &EventTimingCode::OutroEnd(timestamp) => (0x05, timestamp),
        &EventTimingCode::VerseStart(timestamp) => (0x06, timestamp),
        &EventTimingCode::RefrainStart(timestamp) => (0x07, timestamp),
        &EventTimingCode::InterludeStart(timestamp) => (0x08, timestamp),
        &EventTimingCode::ThemeStart(timestamp) => (0x09, timestamp),
        &EventTimingCode::VariationStart(timestamp) => (0x0a, timestamp),
        &EventTimingCode::KeyChange(timestamp) => (0x0b, timestamp),
        &EventTimingCode::TimeChange(timestamp) => (0x0c, timestamp),
        &EventTimingCode::MomentaryUnwantedNoise(timestamp) => (0x0d, timestamp),
        &EventTimingCode::SustainedNoise(timestamp) => (0x0e, timestamp),
        &EventTimingCode::SustainedNoiseEnd(timestamp) => (0x0f, timestamp),
        &EventTimingCode::IntroEnd(timestamp) => (0x10, timestamp),
        &EventTimingCode::MainPartEnd(timestamp) => (0x11, timestamp),
        &EventTimingCode::VerseEnd(timestamp) => (0x12, timestamp),
        &EventTimingCode::RefrainEnd(timestamp) => (0x13, timestamp),
        &EventTimingCode::ThemeEnd(timestamp) => (0x14, timestamp),
        &EventTimingCode::Profanity(timestamp) => (0x15, timestamp),
        &EventTimingCode::ProfanityEnd(timestamp) => (0x16, timestamp),
        &EventTimingCode::ReservedForFutureUse(timestamp, t) => {
            if (0x17 <= t && t <= 0xdf) || (0xf0 <= t && t <= 0xfc) {
                (t, timestamp)
            } else {
                (0x17, timestamp)
            }
        }
        &EventTimingCode::NotPredefinedSynch(timestamp, t) => {
            if 0xe0 <= t && t <= 0xef {
                (t, timestamp)
            } else {
                (0xe0, timestamp)
            }
        }
        &EventTimingCode::AudioEnd(timestamp) => (0xfd, timestamp),
        &EventTimingCode::AudioFileEnds(timestamp) => (0xfe, timestamp),
        &EventTimingCode::OneMoreByteOfEventsFollows(timestamp) => (0xff, timestamp),
    }
}

pub fn to_encoding(encoding: u8) -> Result<TextEncoding> {
    match encoding {
        0 => Ok(TextEncoding::ISO88591),
        1 => Ok(TextEncoding::UTF16),
        2 => Ok(TextEncoding::UTF16BE),
        3 => Ok(TextEncoding::UTF8),
        _ => {
            Err(Error::new(ErrorKind::InvalidData,
                           format!("unrecognised text encoding byte {}", encoding)))
        }
    }
}

pub fn from_encoding(encoding: &TextEncoding) -> u8 {
    match encoding {
        &TextEncoding::ISO88591 => 0,
        &TextEncoding::UTF16 => 1,
        &TextEncoding::UTF16BE => 2,
        &TextEncoding::UTF8 => 3,
    }
}

///
/// The text encodings each version may carry: V2.2 permits ISO-8859-1 and
/// UTF-8, V2.3 permits ISO-8859-1 and UTF-16 with a byte order mark, V2.4
/// permits all four.
///
pub fn encoding_supported_in(text_encoding: &TextEncoding, version: u8) -> bool {
    match version {
        2 => {
            match text_encoding {
                &TextEncoding::ISO88591 | &TextEncoding::UTF8 => true,
                _ => false,
            }
        }
        3 => {
            match text_encoding {
                &TextEncoding::ISO88591 | &TextEncoding::UTF16 => true,
                _ => false,
            }
        }
        _ => true,
    }
}

pub fn default_text_encoding(version: u8) -> TextEncoding {
    match version {
        2 | 3 => TextEncoding::ISO88591,
        _ => TextEncoding::UTF8,
    }
}

///
/// Decode already sliced text bytes. The UTF16 form dispatches on its byte
/// order mark.
///
pub fn decode_text_bytes(text_encoding: &TextEncoding, bytes: &[u8]) -> Result<String> {
    fn strict(decoded: result::Result<String, ::std::borrow::Cow<'static, str>>)
              -> Result<String> {
        decoded.map_err(|msg| Error::new(ErrorKind::InvalidData, msg.into_owned()))
    }

    match text_encoding {
        &TextEncoding::ISO88591 => strict(ISO_8859_1.decode(bytes, DecoderTrap::Strict)),
        &TextEncoding::UTF8 => strict(UTF_8.decode(bytes, DecoderTrap::Strict)),
        &TextEncoding::UTF16BE => strict(UTF_16BE.decode(bytes, DecoderTrap::Strict)),
        &TextEncoding::UTF16 => {
            if bytes.is_empty() {
                return Ok(String::new());
            }
            if bytes.len() < 2 {
                return Err(Error::new(ErrorKind::InvalidData,
                                      "UTF-16 string is shorter than its byte order mark"));
            }
            match (bytes[0], bytes[1]) {
                (0xff, 0xfe) => strict(UTF_16LE.decode(&bytes[2..], DecoderTrap::Strict)),
                (0xfe, 0xff) => strict(UTF_16BE.decode(&bytes[2..], DecoderTrap::Strict)),
                _ => {
                    Err(Error::new(ErrorKind::InvalidData,
                                   "UTF-16 string has an invalid byte order mark"))
                }
            }
        }
    }
}

///
/// Encode text for the wire. The UTF16 form is emitted little-endian with
/// a `FF FE` byte order mark.
///
pub fn encode_text_bytes(text_encoding: &TextEncoding, text: &str) -> Result<Vec<u8>> {
    fn strict(encoded: result::Result<Vec<u8>, ::std::borrow::Cow<'static, str>>)
              -> Result<Vec<u8>> {
        encoded.map_err(|msg| Error::new(ErrorKind::InvalidInput, msg.into_owned()))
    }

    match text_encoding {
        &TextEncoding::ISO88591 => strict(ISO_8859_1.encode(text, EncoderTrap::Strict)),
        &TextEncoding::UTF8 => strict(UTF_8.encode(text, EncoderTrap::Strict)),
        &TextEncoding::UTF16BE => strict(UTF_16BE.encode(text, EncoderTrap::Strict)),
        &TextEncoding::UTF16 => {
            let mut bytes = vec![0xff, 0xfe];
            bytes.extend(strict(UTF_16LE.encode(text, EncoderTrap::Strict))?);

            Ok(bytes)
        }
    }
}

///
/// Read a string terminated per the encoding: one zero byte for the single
/// byte encodings, a zero pair on the code unit boundary for the UTF-16
/// forms. The terminator is consumed but never part of the value.
///
pub fn read_null_terminated(text_encoding: &TextEncoding,
                            readable: &mut Readable<Cursor<Vec<u8>>>)
                            -> Result<String> {
    let bytes = match text_encoding {
        &TextEncoding::ISO88591 | &TextEncoding::UTF8 => readable.non_utf16_bytes()?,
        _ => readable.utf16_bytes()?,
    };

    decode_text_bytes(text_encoding, &bytes)
}

pub fn write_null_terminated(text_encoding: &TextEncoding,
                             text: &str,
                             writable: &mut Writable<Cursor<Vec<u8>>>)
                             -> Result<()> {
    writable.write(&encode_text_bytes(text_encoding, text)?)?;
    match text_encoding {
        &TextEncoding::ISO88591 | &TextEncoding::UTF8 => writable.u8(0),
        _ => {
            writable.u8(0)?;
            writable.u8(0)
        }
    }
}

///
/// Decode everything left in the reader as one string. A trailing
/// terminator is legal on the wire and trimmed away.
///
pub fn decode_rest(text_encoding: &TextEncoding,
                   readable: &mut Readable<Cursor<Vec<u8>>>)
                   -> Result<String> {
    let mut bytes = readable.all_bytes()?;

    // drop a trailing terminator before strict decoding
    match text_encoding {
        &TextEncoding::ISO88591 | &TextEncoding::UTF8 => {
            if bytes.last() == Some(&0) {
                bytes.pop();
            }
        }
        _ => {
            if bytes.len() >= 2 && bytes[bytes.len() - 2..] == [0, 0] {
                bytes.truncate(bytes.len() - 2);
            }
        }
    }

    Ok(trim(decode_text_bytes(text_encoding, &bytes)?))
}

///
/// The language field is always exactly 3 ISO-8859-1 bytes.
///
pub fn write_language(language: &str, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
    if language.len() != 3 {
        return Err(Error::new(ErrorKind::InvalidInput,
                              format!("language '{}' must be exactly 3 bytes", language)));
    }

    writable.string(language)
}

///
/// Pack booleans into the high-order bits of one byte, MSB first.
///
pub fn to_flag_byte(flags: &[bool]) -> u8 {
    let mut byte = 0u8;
    for (i, flag) in flags.iter().enumerate() {
        if *flag {
            byte = byte | (BIT7 >> i);
        }
    }

    byte
}

pub fn from_flag_byte(byte: u8, count: usize) -> Vec<bool> {
    (0..count).map(|i| byte & (BIT7 >> i) != 0).collect()
}

///
/// Read a big-endian unsigned integer of `width` bytes.
///
pub fn read_uint(readable: &mut Readable<Cursor<Vec<u8>>>, width: usize) -> Result<u64> {
    let mut v: u64 = 0;
    for b in &readable.bytes(width)? {
        v = (v << 8) | *b as u64;
    }

    Ok(v)
}

///
/// Write a big-endian unsigned integer into exactly `width` bytes.
///
pub fn write_uint(writable: &mut Writable<Cursor<Vec<u8>>>,
                  value: u64,
                  width: usize)
                  -> Result<()> {
    if width < 8 && value >= 1u64 << (width * 8) {
        return Err(Error::new(ErrorKind::InvalidInput,
                              format!("{} does not fit in {} bytes", value, width)));
    }

    for i in (0..width).rev() {
        writable.u8((value >> (i * 8)) as u8)?;
    }

    Ok(())
}

///
/// The play counter is 4 bytes until the value no longer fits.
///
pub fn counter_width(counter: u64) -> usize {
    let mut width = 4;
    let mut rest = counter >> 32;
    while rest > 0 {
        width = width + 1;
        rest = rest >> 8;
    }

    width
}

///
/// The deviation bit width the lookup table encoder uses: the minimum byte
/// count rounded up, times 8, never less than one byte.
///
pub fn deviation_bit_width(max_deviation: u32) -> Result<u8> {
    let mut bits = 0;
    let mut rest = max_deviation;
    while rest > 0 {
        bits = bits + 1;
        rest = rest >> 1;
    }

    let bits = ((bits + 7) / 8) * 8;
    if bits > 255 {
        return Err(Error::new(ErrorKind::InvalidInput,
                              format!("a deviation bit width of {} exceeds 255", bits)));
    }

    Ok(if bits == 0 { 8 } else { bits as u8 })
}

///
/// Reverse the unsynchronisation scheme in place: one `0x00` following each
/// `0xFF` is dropped. Returns the synchronised length, the tail is left for
/// the caller to truncate.
///
pub fn to_synchronize(bytes: &mut Vec<u8>) -> usize {
    let mut copy = true;
    let mut to = 0;
    for i in 0..bytes.len() {
        let b = bytes[i];
        if copy || b != 0 {
            bytes[to] = b;
            to = to + 1
        }
        copy = b != 0xff;
    }

    to
}

///
/// Apply the unsynchronisation scheme: a `0x00` is inserted after every
/// `0xFF` that is followed by `0x00`, a byte of `0xE0` or above, or the end
/// of the buffer.
///
pub fn to_unsynchronize(bytes: &[u8]) -> Vec<u8> {
    fn require_unsync(bytes: &[u8]) -> usize {
        let len = bytes.len();
        if len == 0 {
            return 0;
        }

        let mut count = 0;
        for i in 0..len - 1 {
            if bytes[i] == 0xff && (bytes[i + 1] >= 0xe0 || bytes[i + 1] == 0) {
                count = count + 1;
            }
        }
        if bytes[len - 1] == 0xff {
            count = count + 1;
        }
        count
    }

    let count = require_unsync(bytes);
    if count == 0 {
        return bytes.to_vec();
    }

    let len = bytes.len();
    let mut out = Vec::with_capacity(len + count);
    for i in 0..len - 1 {
        out.push(bytes[i]);
        if bytes[i] == 0xff && (bytes[i + 1] >= 0xe0 || bytes[i + 1] == 0) {
            out.push(0);
        }
    }
    out.push(bytes[len - 1]);
    if bytes[len - 1] == 0xff {
        out.push(0);
    }

    out
}

#[allow(dead_code)]
pub fn to_hex(bytes: &[u8]) -> String {
    let strs: Vec<String> = bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    strs.join(" ")
}

///
/// Build the typed frame for `id`. An identifier outside the recognized set
/// aborts the tag.
///
pub fn id_to_frame_body(id: &str,
                        version: u8,
                        mut readable: Readable<Cursor<Vec<u8>>>)
                        -> result::Result<FrameBody, ParsingError> {
    let frame_body = match id {
        id::BUF_STR => FrameBody::RBUF(RBUF::read(&mut readable)?),
        id::CNT_STR => FrameBody::PCNT(PCNT::read(&mut readable)?),
        id::COM_STR => FrameBody::COMM(COMM::read(&mut readable)?),
        id::CRA_STR => FrameBody::AENC(AENC::read(&mut readable)?),
        id::ETC_STR => FrameBody::ETCO(ETCO::read(&mut readable)?),
        id::EQU_STR => FrameBody::EQUA(EQUA::read(&mut readable)?),
        id::GEO_STR => FrameBody::GEOB(GEOB::read(&mut readable)?),
        id::IPL_STR => FrameBody::IPLS(IPLS::read(&mut readable)?),
        id::MCI_STR => FrameBody::MCDI(MCDI::read(&mut readable)?),
        id::MLL_STR => FrameBody::MLLT(MLLT::read(&mut readable)?),
        id::PIC_STR => FrameBody::APIC(APIC::read(&mut readable, version)?),
        id::POP_STR => FrameBody::POPM(POPM::read(&mut readable)?),
        id::REV_STR => FrameBody::RVRB(RVRB::read(&mut readable)?),
        id::RVA_STR => FrameBody::RVAD(RVAD::read(&mut readable)?),
        id::SLT_STR => FrameBody::SYLT(SYLT::read(&mut readable)?),
        id::STC_STR => FrameBody::SYTC(SYTC::read(&mut readable)?),
        id::TAL_STR => FrameBody::TALB(TEXT::read(&mut readable)?),
        id::TBP_STR => FrameBody::TBPM(TEXT::read(&mut readable)?),
        id::TCM_STR => FrameBody::TCOM(TEXT::read(&mut readable)?),
        id::TCO_STR => FrameBody::TCON(TEXT::read(&mut readable)?),
        id::TCR_STR => FrameBody::TCOP(TEXT::read(&mut readable)?),
        id::TDA_STR => FrameBody::TDAT(TEXT::read(&mut readable)?),
        id::TDY_STR => FrameBody::TDLY(TEXT::read(&mut readable)?),
        id::TEN_STR => FrameBody::TENC(TEXT::read(&mut readable)?),
        id::TFT_STR => FrameBody::TFLT(TEXT::read(&mut readable)?),
        id::TIM_STR => FrameBody::TIME(TEXT::read(&mut readable)?),
        id::TKE_STR => FrameBody::TKEY(TEXT::read(&mut readable)?),
        id::TLA_STR => FrameBody::TLAN(TEXT::read(&mut readable)?),
        id::TLE_STR => FrameBody::TLEN(TEXT::read(&mut readable)?),
        id::TMT_STR => FrameBody::TMED(TEXT::read(&mut readable)?),
        id::TOA_STR => FrameBody::TOPE(TEXT::read(&mut readable)?),
        id::TOF_STR => FrameBody::TOFN(TEXT::read(&mut readable)?),
        id::TOL_STR => FrameBody::TOLY(TEXT::read(&mut readable)?),
        id::TOR_STR => FrameBody::TORY(TEXT::read(&mut readable)?),
        id::TOT_STR => FrameBody::TOAL(TEXT::read(&mut readable)?),
        id::TP1_STR => FrameBody::TPE1(TEXT::read(&mut readable)?),
        id::TP2_STR => FrameBody::TPE2(TEXT::read(&mut readable)?),
        id::TP3_STR => FrameBody::TPE3(TEXT::read(&mut readable)?),
        id::TP4_STR => FrameBody::TPE4(TEXT::read(&mut readable)?),
        id::TPA_STR => FrameBody::TPOS(TEXT::read(&mut readable)?),
        id::TPB_STR => FrameBody::TPUB(TEXT::read(&mut readable)?),
        id::TRC_STR => FrameBody::TSRC(TEXT::read(&mut readable)?),
        id::TRD_STR => FrameBody::TRDA(TEXT::read(&mut readable)?),
        id::TRK_STR => FrameBody::TRCK(TEXT::read(&mut readable)?),
        id::TSI_STR => FrameBody::TSIZ(TEXT::read(&mut readable)?),
        id::TSS_STR => FrameBody::TSSE(TEXT::read(&mut readable)?),
        id::TT1_STR => FrameBody::TIT1(TEXT::read(&mut readable)?),
        id::TT2_STR => FrameBody::TIT2(TEXT::read(&mut readable)?),
        id::TT3_STR => FrameBody::TIT3(TEXT::read(&mut readable)?),
        id::TXT_STR => FrameBody::TEXT(TEXT::read(&mut readable)?),
        id::TYE_STR => FrameBody::TYER(TEXT::read(&mut readable)?),
        id::TXX_STR => FrameBody::TXXX(TXXX::read(&mut readable)?),
        id::UFI_STR => FrameBody::UFID(UFID::read(&mut readable)?),
        id::ULT_STR => FrameBody::USLT(USLT::read(&mut readable)?),
        id::WAF_STR => FrameBody::WOAF(LINK::read(&mut readable)?),
        id::WAR_STR => FrameBody::WOAR(LINK::read(&mut readable)?),
        id::WAS_STR => FrameBody::WOAS(LINK::read(&mut readable)?),
        id::WCM_STR => FrameBody::WCOM(LINK::read(&mut readable)?),
        id::WCP_STR => FrameBody::WCOP(LINK::read(&mut readable)?),
        id::WPB_STR => FrameBody::WPUB(LINK::read(&mut readable)?),
        id::WXX_STR => FrameBody::WXXX(WXXX::read(&mut readable)?),
        id::AENC_STR => FrameBody::AENC(AENC::read(&mut readable)?),
        id::APIC_STR => FrameBody::APIC(APIC::read(&mut readable, version)?),
        id::COMM_STR => FrameBody::COMM(COMM::read(&mut readable)?),
        id::EQUA_STR => FrameBody::EQUA(EQUA::read(&mut readable)?),
        id::EQU2_STR => FrameBody::EQU2(EQU2::read(&mut readable)?),
        id::ETCO_STR => FrameBody::ETCO(ETCO::read(&mut readable)?),
        id::GEOB_STR => FrameBody::GEOB(GEOB::read(&mut readable)?),
        id::IPLS_STR => FrameBody::IPLS(IPLS::read(&mut readable)?),
        id::MCDI_STR => FrameBody::MCDI(MCDI::read(&mut readable)?),
        id::MLLT_STR => FrameBody::MLLT(MLLT::read(&mut readable)?),
        id::PCNT_STR => FrameBody::PCNT(PCNT::read(&mut readable)?),
        id::POPM_STR => FrameBody::POPM(POPM::read(&mut readable)?),
        id::RBUF_STR => FrameBody::RBUF(RBUF::read(&mut readable)?),
        id::RVAD_STR => FrameBody::RVAD(RVAD::read(&mut readable)?),
        id::RVA2_STR => FrameBody::RVA2(RVA2::read(&mut readable)?),
        id::RVRB_STR => FrameBody::RVRB(RVRB::read(&mut readable)?),
        id::SYLT_STR => FrameBody::SYLT(SYLT::read(&mut readable)?),
        id::SYTC_STR => FrameBody::SYTC(SYTC::read(&mut readable)?),
        id::TALB_STR => FrameBody::TALB(TEXT::read(&mut readable)?),
        id::TBPM_STR => FrameBody::TBPM(TEXT::read(&mut readable)?),
        id::TCOM_STR => FrameBody::TCOM(TEXT::read(&mut readable)?),
        id::TCON_STR => FrameBody::TCON(TEXT::read(&mut readable)?),
        id::TCOP_STR => FrameBody::TCOP(TEXT::read(&mut readable)?),
        id::TDAT_STR => FrameBody::TDAT(TEXT::read(&mut readable)?),
        id::TDEN_STR => FrameBody::TDEN(TEXT::read(&mut readable)?),
        id::TDLY_STR => FrameBody::TDLY(TEXT::read(&mut readable)?),
        id::TDOR_STR => FrameBody::TDOR(TEXT::read(&mut readable)?),
        id::TDRC_STR => FrameBody::TDRC(TEXT::read(&mut readable)?),
        id::TDRL_STR => FrameBody::TDRL(TEXT::read(&mut readable)?),
        id::TDTG_STR => FrameBody::TDTG(TEXT::read(&mut readable)?),
        id::TENC_STR => FrameBody::TENC(TEXT::read(&mut readable)?),
        id::TEXT_STR => FrameBody::TEXT(TEXT::read(&mut readable)?),
        id::TFLT_STR => FrameBody::TFLT(TEXT::read(&mut readable)?),
        id::TIME_STR => FrameBody::TIME(TEXT::read(&mut readable)?),
        id::TIPL_STR => FrameBody::TIPL(TEXT::read(&mut readable)?),
        id::TIT1_STR => FrameBody::TIT1(TEXT::read(&mut readable)?),
        id::TIT2_STR => FrameBody::TIT2(TEXT::read(&mut readable)?),
        id::TIT3_STR => FrameBody::TIT3(TEXT::read(&mut readable)?),
        id::TKEY_STR => FrameBody::TKEY(TEXT::read(&mut readable)?),
        id::TLAN_STR => FrameBody::TLAN(TEXT::read(&mut readable)?),
        id::TLEN_STR => FrameBody::TLEN(TEXT::read(&mut readable)?),
        id::TMCL_STR => FrameBody::TMCL(TEXT::read(&mut readable)?),
        id::TMED_STR => FrameBody::TMED(TEXT::read(&mut readable)?),
        id::TMOO_STR => FrameBody::TMOO(TEXT::read(&mut readable)?),
        id::TOAL_STR => FrameBody::TOAL(TEXT::read(&mut readable)?),
        id::TOFN_STR => FrameBody::TOFN(TEXT::read(&mut readable)?),
        id::TOLY_STR => FrameBody::TOLY(TEXT::read(&mut readable)?),
        id::TOPE_STR => FrameBody::TOPE(TEXT::read(&mut readable)?),
        id::TORY_STR => FrameBody::TORY(TEXT::read(&mut readable)?),
        id::TOWN_STR => FrameBody::TOWN(TEXT::read(&mut readable)?),
        id::TPE1_STR => FrameBody::TPE1(TEXT::read(&mut readable)?),
        id::TPE2_STR => FrameBody::TPE2(TEXT::read(&mut readable)?),
        id::TPE3_STR => FrameBody::TPE3(TEXT::read(&mut readable)?),
        id::TPE4_STR => FrameBody::TPE4(TEXT::read(&mut readable)?),
        id::TPOS_STR => FrameBody::TPOS(TEXT::read(&mut readable)?),
        id::TPRO_STR => FrameBody::TPRO(TEXT::read(&mut readable)?),
        id::TPUB_STR => FrameBody::TPUB(TEXT::read(&mut readable)?),
        id::TRCK_STR => FrameBody::TRCK(TEXT::read(&mut readable)?),
        id::TRDA_STR => FrameBody::TRDA(TEXT::read(&mut readable)?),
        id::TRSN_STR => FrameBody::TRSN(TEXT::read(&mut readable)?),
        id::TRSO_STR => FrameBody::TRSO(TEXT::read(&mut readable)?),
        id::TSIZ_STR => FrameBody::TSIZ(TEXT::read(&mut readable)?),
        id::TSOA_STR => FrameBody::TSOA(TEXT::read(&mut readable)?),
        id::TSOP_STR => FrameBody::TSOP(TEXT::read(&mut readable)?),
        id::TSOT_STR => FrameBody::TSOT(TEXT::read(&mut readable)?),
        id::TSRC_STR => FrameBody::TSRC(TEXT::read(&mut readable)?),
        id::TSSE_STR => FrameBody::TSSE(TEXT::read(&mut readable)?),
        id::TSST_STR => FrameBody::TSST(TEXT::read(&mut readable)?),
        id::TYER_STR => FrameBody::TYER(TEXT::read(&mut readable)?),
        id::TXXX_STR => FrameBody::TXXX(TXXX::read(&mut readable)?),
        id::UFID_STR => FrameBody::UFID(UFID::read(&mut readable)?),
        id::USLT_STR => FrameBody::USLT(USLT::read(&mut readable)?),
        id::WCOM_STR => FrameBody::WCOM(LINK::read(&mut readable)?),
        id::WCOP_STR => FrameBody::WCOP(LINK::read(&mut readable)?),
        id::WOAF_STR => FrameBody::WOAF(LINK::read(&mut readable)?),
        id::WOAR_STR => FrameBody::WOAR(LINK::read(&mut readable)?),
        id::WOAS_STR => FrameBody::WOAS(LINK::read(&mut readable)?),
        id::WORS_STR => FrameBody::WORS(LINK::read(&mut readable)?),
        id::WPAY_STR => FrameBody::WPAY(LINK::read(&mut readable)?),
        id::WPUB_STR => FrameBody::WPUB(LINK::read(&mut readable)?),
        id::WXXX_STR => FrameBody::WXXX(WXXX::read(&mut readable)?),
        _ => {
            warn!("unknown frame identifier '{}'", id);
            return Err(ParsingError::BadData(format!("unknown frame identifier '{}'", id)));
        }
    };

    Ok(frame_body)
}

///
/// The identifier a frame is written with at `version`.
///
pub fn frame_body_to_id(frame_body: &FrameBody,
                        version: u8)
                        -> result::Result<String, WriteError> {
    if let &FrameBody::SKIP(ref id, _) = frame_body {
        return Ok(id.clone());
    }

    let id4 = frame_body.id4().unwrap_or("");
    id_for_version(id4, version).map_err(WriteError::BadInput)
}

///
/// Encode a frame body and pick its identifier for the target version.
///
pub fn frame_body_as_bytes(frame_body: &FrameBody,
                           version: u8)
                           -> result::Result<(String, Vec<u8>), WriteError> {
    let mut writable = Cursor::new(vec![0u8; 0]).to_writable();

    match frame_body {
        &FrameBody::AENC(ref frame) => frame.write(&mut writable)?,
        &FrameBody::APIC(ref frame) => frame.write(&mut writable, version)?,
        &FrameBody::COMM(ref frame) => frame.write(&mut writable)?,
        &FrameBody::EQUA(ref frame) => frame.write(&mut writable)?,
        &FrameBody::EQU2(ref frame) => frame.write(&mut writable)?,
        &FrameBody::ETCO(ref frame) => frame.write(&mut writable)?,
        &FrameBody::GEOB(ref frame) => frame.write(&mut writable)?,
        &FrameBody::IPLS(ref frame) => frame.write(&mut writable)?,
        &FrameBody::MCDI(ref frame) => frame.write(&mut writable)?,
        &FrameBody::MLLT(ref frame) => frame.write(&mut writable)?,
        &FrameBody::PCNT(ref frame) => frame.write(&mut writable)?,
        &FrameBody::POPM(ref frame) => frame.write(&mut writable)?,
        &FrameBody::RBUF(ref frame) => frame.write(&mut writable)?,
        &FrameBody::RVAD(ref frame) => frame.write(&mut writable)?,
        &FrameBody::RVA2(ref frame) => frame.write(&mut writable)?,
        &FrameBody::RVRB(ref frame) => frame.write(&mut writable)?,
        &FrameBody::SYLT(ref frame) => frame.write(&mut writable)?,
        &FrameBody::SYTC(ref frame) => frame.write(&mut writable)?,
        &FrameBody::TALB(ref frame) |
        &FrameBody::TBPM(ref frame) |
        &FrameBody::TCOM(ref frame) |
        &FrameBody::TCON(ref frame) |
        &FrameBody::TCOP(ref frame) |
        &FrameBody::TDAT(ref frame) |
        &FrameBody::TDEN(ref frame) |
        &FrameBody::TDLY(ref frame) |
        &FrameBody::TDOR(ref frame) |
        &FrameBody::TDRC(ref frame) |
        &FrameBody::TDRL(ref frame) |
        &FrameBody::TDTG(ref frame) |
        &FrameBody::TENC(ref frame) |
        &FrameBody::TEXT(ref frame) |
        &FrameBody::TFLT(ref frame) |
        &FrameBody::TIME(ref frame) |
        &FrameBody::TIPL(ref frame) |
        &FrameBody::TIT1(ref frame) |
        &FrameBody::TIT2(ref frame) |
        &FrameBody::TIT3(ref frame) |
        &FrameBody::TKEY(ref frame) |
        &FrameBody::TLAN(ref frame) |
        &FrameBody::TLEN(ref frame) |
        &FrameBody::TMCL(ref frame) |
        &FrameBody::TMED(ref frame) |
        &FrameBody::TMOO(ref frame) |
        &FrameBody::TOAL(ref frame) |
        &FrameBody::TOFN(ref frame) |
        &FrameBody::TOLY(ref frame) |
        &FrameBody::TOPE(ref frame) |
        &FrameBody::TORY(ref frame) |
        &FrameBody::TOWN(ref frame) |
        &FrameBody::TPE1(ref frame) |
        &FrameBody::TPE2(ref frame) |
        &FrameBody::TPE3(ref frame) |
        &FrameBody::TPE4(ref frame) |
        &FrameBody::TPOS(ref frame) |
        &FrameBody::TPRO(ref frame) |
        &FrameBody::TPUB(ref frame) |
        &FrameBody::TRCK(ref frame) |
        &FrameBody::TRDA(ref frame) |
        &FrameBody::TRSN(ref frame) |
        &FrameBody::TRSO(ref frame) |
        &FrameBody::TSIZ(ref frame) |
        &FrameBody::TSOA(ref frame) |
        &FrameBody::TSOP(ref frame) |
        &FrameBody::TSOT(ref frame) |
        &FrameBody::TSRC(ref frame) |
        &FrameBody::TSSE(ref frame) |
        &FrameBody::TSST(ref frame) |
        &FrameBody::TYER(ref frame) => frame.write(&mut writable)?,
        &FrameBody::TXXX(ref frame) => frame.write(&mut writable)?,
        &FrameBody::UFID(ref frame) => frame.write(&mut writable)?,
        &FrameBody::USLT(ref frame) => frame.write(&mut writable)?,
        &FrameBody::WCOM(ref frame) |
        &FrameBody::WCOP(ref frame) |
        &FrameBody::WOAF(ref frame) |
        &FrameBody::WOAR(ref frame) |
        &FrameBody::WOAS(ref frame) |
        &FrameBody::WORS(ref frame) |
        &FrameBody::WPAY(ref frame) |
        &FrameBody::WPUB(ref frame) => frame.write(&mut writable)?,
        &FrameBody::WXXX(ref frame) => frame.write(&mut writable)?,
        &FrameBody::SKIP(_, ref bytes) => writable.write(bytes)?,
    };

    let id = frame_body_to_id(frame_body, version)?;

    let mut buf = Vec::new();
    writable.copy(&mut buf)?;

    Ok((id, buf))
}
