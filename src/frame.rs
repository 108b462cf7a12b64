extern crate bitstream_io;

use self::bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use errors::ParsingError;
use util;
use writable::Writable;

use std::io::{Cursor, Error, ErrorKind, Result};
use std::result;
use std::vec::Vec;

type Readable = ::readable::Readable<Cursor<Vec<u8>>>;

pub trait FrameReaderDefault<T> {
    fn read(readable: &mut Readable) -> Result<T>;
}

pub trait FrameReaderVersionAware<T> {
    fn read(readable: &mut Readable, version: u8) -> Result<T>;
}

pub trait FrameWriterDefault {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()>;
}

pub trait FrameWriterVersionAware<T> {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>, version: u8) -> Result<()>;
}

pub trait FlagAware<T> {
    fn has_flag(&self, flag: T) -> bool;
    fn set_flag(&mut self, flag: T);
}

///
/// # Tag Header
///
/// - [V2.3](http://id3.org/id3v2.3.0#ID3v2_header)
/// - [V2.4](http://id3.org/id3v2.4.0-structure) > 3.1. ID3v2 header
///
/// `size` is the tag payload length excluding the 10 header bytes.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Head {
    pub version: u8,
    pub minor_version: u8,
    pub flag: u8,
    pub size: u32,
}

impl Head {
    pub fn read(readable: &mut Readable) -> result::Result<Self, ParsingError> {
        let tag_id = readable.string(3)?;
        let version = readable.u8()?;
        let minor_version = readable.u8()?;
        let flag = readable.u8()?;
        let size = readable.synchsafe()?;

        if tag_id != "ID3" {
            return Err(ParsingError::BadData(format!("bad tag signature '{}'", tag_id)));
        }

        if version != 2 && version != 3 && version != 4 {
            return Err(ParsingError::BadData(format!("unknown ID3v2 version {}.{}",
                                                     version,
                                                     minor_version)));
        }

        let head = Head {
            version: version,
            minor_version: minor_version,
            flag: flag,
            size: size,
        };

        // A compression scheme was never defined for ID3v2.2.
        if head.version == 2 && head.has_flag(HeadFlag::Compression) {
            return Err(ParsingError::BadData("compressed ID3v2.2 tags are not supported"
                .to_string()));
        }

        Ok(head)
    }
}

///
/// # Head flags
///
/// - [See](http://id3.org/id3v2.3.0#ID3v2_header)
/// - [See](http://id3.org/id3v2.4.0-structure) > 3.1. ID3v2 header
///
/// ## V2.4 only flag
/// - FooterPresent
///
impl FlagAware<HeadFlag> for Head {
    fn has_flag(&self, flag: HeadFlag) -> bool {
        match self.version {
            2 => {
                match flag {
                    HeadFlag::Unsynchronisation => self.flag & util::BIT7 != 0,
                    HeadFlag::Compression => self.flag & util::BIT6 != 0,
                    _ => false,
                }
            }
            3 => {
                match flag {
                    HeadFlag::Unsynchronisation => self.flag & util::BIT7 != 0,
                    HeadFlag::ExtendedHeader => self.flag & util::BIT6 != 0,
                    HeadFlag::ExperimentalIndicator => self.flag & util::BIT5 != 0,
                    _ => false,
                }
            }
            4 => {
                match flag {
                    HeadFlag::Unsynchronisation => self.flag & util::BIT7 != 0,
                    HeadFlag::ExtendedHeader => self.flag & util::BIT6 != 0,
                    HeadFlag::ExperimentalIndicator => self.flag & util::BIT5 != 0,
                    HeadFlag::FooterPresent => self.flag & util::BIT4 != 0,
                    _ => false,
                }
            }
            _ => {
                warn!("Head.has_flag=> Unknown version!");
                false
            }
        }
    }

    fn set_flag(&mut self, flag: HeadFlag) {
        match self.version {
            2 => {
                match flag {
                    HeadFlag::Unsynchronisation => self.flag = self.flag | util::BIT7,
                    _ => (),
                }
            }
            3 | 4 => {
                match flag {
                    HeadFlag::Unsynchronisation => self.flag = self.flag | util::BIT7,
                    HeadFlag::ExtendedHeader => self.flag = self.flag | util::BIT6,
                    HeadFlag::ExperimentalIndicator => self.flag = self.flag | util::BIT5,
                    HeadFlag::FooterPresent => {
                        if self.version == 4 {
                            self.flag = self.flag | util::BIT4
                        }
                    }
                    _ => (),
                }
            }
            _ => {
                warn!("Head.set_flag=> Unknown version!");
            }
        }
    }
}

impl FrameWriterDefault for Head {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.string("ID3")?;
        writable.u8(self.version)?;
        writable.u8(self.minor_version)?;
        writable.u8(self.flag)?;
        writable.synchsafe(self.size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HeadFlag {
    Unsynchronisation,
    Compression,
    ExtendedHeader,
    ExperimentalIndicator,
    FooterPresent,
}

///
/// # Tag restrictions
///
/// The packed restriction byte of the V2.4 extended header:
/// `%ppqrrstt` with tag size (pp), text encoding (q), text field size (rr),
/// image encoding (s) and image size (tt).
///
/// [See](http://id3.org/id3v2.4.0-structure) > 3.2. Extended header
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TagRestrictions {
    pub tag_size: u8,
    pub text_encoding: u8,
    pub text_field_size: u8,
    pub image_encoding: u8,
    pub image_size: u8,
}

impl TagRestrictions {
    pub fn from_byte(byte: u8) -> Self {
        TagRestrictions {
            tag_size: byte >> 6,
            text_encoding: (byte & 0x20) >> 5,
            text_field_size: (byte & 0x18) >> 3,
            image_encoding: (byte & 0x04) >> 2,
            image_size: byte & 0x03,
        }
    }

    pub fn as_byte(&self) -> Result<u8> {
        if self.tag_size > 3 || self.text_encoding > 1 || self.text_field_size > 3 ||
           self.image_encoding > 1 || self.image_size > 3 {
            return Err(Error::new(ErrorKind::InvalidInput, "tag restriction field out of range"));
        }

        Ok((self.tag_size << 6) | (self.text_encoding << 5) | (self.text_field_size << 3) |
           (self.image_encoding << 2) | self.image_size)
    }
}

///
/// # Extended Header
///
/// - [V2.3](http://id3.org/id3v2.3.0#ID3v2_extended_header)
/// - [V2.4](http://id3.org/id3v2.4.0-structure) > 3.2. Extended header
///
/// The V2.3 size and CRC are plain big-endian, the V2.4 size and CRC are
/// synchsafe. The V2.4 sub-sections are length prefixed.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendedHead {
    pub size: u32,
    /// V2.3 only
    pub padding_size: u32,
    /// V2.4 only
    pub tag_is_an_update: bool,
    pub crc: Option<u32>,
    pub restrictions: Option<TagRestrictions>,
}

impl ExtendedHead {
    pub fn read(readable: &mut Readable, version: u8) -> result::Result<Self, ParsingError> {
        match version {
            3 => {
                let size = readable.u32()?;
                let flags = readable.u16()?;
                let padding_size = readable.u32()?;
                let crc = if flags & 0x8000 != 0 {
                    Some(readable.u32()?)
                } else {
                    None
                };

                Ok(ExtendedHead {
                    size: size,
                    padding_size: padding_size,
                    tag_is_an_update: false,
                    crc: crc,
                    restrictions: None,
                })
            }
            4 => {
                let start = readable.pos()?;
                let size = readable.synchsafe()?;

                if size < 6 {
                    return Err(ParsingError::BadData(format!("extended header size {} is \
                                                              too small",
                                                             size)));
                }

                let _num_flag_bytes = readable.u8()?;
                let flags = readable.u8()?;

                let tag_is_an_update = flags & util::BIT6 != 0;
                if tag_is_an_update {
                    let _data_length = readable.u8()?;
                }

                let crc = if flags & util::BIT5 != 0 {
                    let _data_length = readable.u8()?;
                    Some(readable.synchsafe5()?)
                } else {
                    None
                };

                let restrictions = if flags & util::BIT4 != 0 {
                    let _data_length = readable.u8()?;
                    Some(TagRestrictions::from_byte(readable.u8()?))
                } else {
                    None
                };

                // the declared size wins over what we recognize
                let consumed = readable.pos()? - start;
                if (size as u64) > consumed {
                    readable.skip(size as i64 - consumed as i64)?;
                }

                Ok(ExtendedHead {
                    size: size,
                    padding_size: 0,
                    tag_is_an_update: tag_is_an_update,
                    crc: crc,
                    restrictions: restrictions,
                })
            }
            _ => {
                Err(ParsingError::BadData(format!("ID3v2.{} has no extended header", version)))
            }
        }
    }
}

impl FrameWriterVersionAware<ExtendedHead> for ExtendedHead {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>, version: u8) -> Result<()> {
        match version {
            3 => {
                let flags: u16 = if self.crc.is_some() { 0x8000 } else { 0 };
                writable.u32(if self.crc.is_some() { 10 } else { 6 })?;
                writable.u16(flags)?;
                writable.u32(self.padding_size)?;
                if let Some(crc) = self.crc {
                    writable.u32(crc)?;
                }

                Ok(())
            }
            4 => {
                let mut size = 6;
                let mut flags = 0u8;
                if self.tag_is_an_update {
                    flags = flags | util::BIT6;
                    size = size + 1;
                }
                if self.crc.is_some() {
                    flags = flags | util::BIT5;
                    size = size + 6;
                }
                if self.restrictions.is_some() {
                    flags = flags | util::BIT4;
                    size = size + 2;
                }

                writable.synchsafe(size)?;
                writable.u8(1)?;
                writable.u8(flags)?;
                if self.tag_is_an_update {
                    writable.u8(0)?;
                }
                if let Some(crc) = self.crc {
                    writable.u8(5)?;
                    writable.synchsafe5(crc)?;
                }
                if let Some(ref restrictions) = self.restrictions {
                    writable.u8(1)?;
                    writable.u8(restrictions.as_byte()?)?;
                }

                Ok(())
            }
            _ => {
                Err(Error::new(ErrorKind::InvalidInput,
                               format!("ID3v2.{} has no extended header", version)))
            }
        }
    }
}

///
/// # Frame Header V2.2
///
/// [See](http://id3.org/id3v2-00) > 3.2. ID3v2 frames overview
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameHeaderV2 {
    pub id: String,
    pub size: u32,
}

impl FrameHeaderV2 {
    pub fn read(readable: &mut Readable) -> result::Result<Self, ParsingError> {
        let id = readable.string(3)?;
        let size = readable.u24()?;

        Ok(FrameHeaderV2 {
            id: id,
            size: size,
        })
    }
}

///
/// # No flags
///
/// There is no flag for 2.2 frame.
///
impl FlagAware<FrameHeaderFlag> for FrameHeaderV2 {
    #[allow(unused_variables)]
    fn has_flag(&self, flag: FrameHeaderFlag) -> bool {
        false
    }
    #[allow(unused_variables)]
    fn set_flag(&mut self, flag: FrameHeaderFlag) {}
}

impl FrameWriterDefault for FrameHeaderV2 {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.string(self.id.as_str())?;
        writable.u24(self.size)
    }
}

///
/// # Frame Header V2.3
///
/// [See](http://id3.org/id3v2.3.0#ID3v2_frame_overview)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameHeaderV3 {
    pub id: String,
    pub size: u32,
    pub status_flag: u8,
    pub encoding_flag: u8,
}

impl FrameHeaderV3 {
    pub fn read(readable: &mut Readable) -> result::Result<Self, ParsingError> {
        let id = readable.string(4)?;
        let size = readable.u32()?;
        let status_flag = readable.u8()?;
        let encoding_flag = readable.u8()?;

        Ok(FrameHeaderV3 {
            id: id,
            size: size,
            status_flag: status_flag,
            encoding_flag: encoding_flag,
        })
    }
}

///
/// # Frame header flags V2.3
///
/// [See](http://id3.org/id3v2.3.0#Frame_header_flags)
///
impl FlagAware<FrameHeaderFlag> for FrameHeaderV3 {
    fn has_flag(&self, flag: FrameHeaderFlag) -> bool {
        match flag {
            FrameHeaderFlag::TagAlter => self.status_flag & util::BIT7 != 0,
            FrameHeaderFlag::FileAlter => self.status_flag & util::BIT6 != 0,
            FrameHeaderFlag::ReadOnly => self.status_flag & util::BIT5 != 0,
            FrameHeaderFlag::Compression => self.encoding_flag & util::BIT7 != 0,
            FrameHeaderFlag::Encryption => self.encoding_flag & util::BIT6 != 0,
            FrameHeaderFlag::GroupIdentity => self.encoding_flag & util::BIT5 != 0,
            _ => false,
        }
    }

    fn set_flag(&mut self, flag: FrameHeaderFlag) {
        match flag {
            FrameHeaderFlag::TagAlter => self.status_flag = self.status_flag | util::BIT7,
            FrameHeaderFlag::FileAlter => self.status_flag = self.status_flag | util::BIT6,
            FrameHeaderFlag::ReadOnly => self.status_flag = self.status_flag | util::BIT5,
            FrameHeaderFlag::Compression => self.encoding_flag = self.encoding_flag | util::BIT7,
            FrameHeaderFlag::Encryption => self.encoding_flag = self.encoding_flag | util::BIT6,
            FrameHeaderFlag::GroupIdentity => self.encoding_flag = self.encoding_flag | util::BIT5,
            _ => (),
        }
    }
}

impl FrameWriterDefault for FrameHeaderV3 {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.string(self.id.as_str())?;
        writable.u32(self.size)?;
        writable.u8(self.status_flag)?;
        writable.u8(self.encoding_flag)
    }
}

///
/// # Frame Header V2.4
///
/// [See](http://id3.org/id3v2.4.0-structure) > 4. ID3v2 frames overview
///
/// The frame size is synchsafe.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameHeaderV4 {
    pub id: String,
    pub size: u32,
    pub status_flag: u8,
    pub encoding_flag: u8,
}

impl FrameHeaderV4 {
    pub fn read(readable: &mut Readable) -> result::Result<Self, ParsingError> {
        let id = readable.string(4)?;
        let size = readable.synchsafe()?;
        let status_flag = readable.u8()?;
        let encoding_flag = readable.u8()?;

        Ok(FrameHeaderV4 {
            id: id,
            size: size,
            status_flag: status_flag,
            encoding_flag: encoding_flag,
        })
    }
}

///
/// # Frame header flags V2.4
///
/// [See](http://id3.org/id3v2.4.0-structure) > 4.1 Frame header flags
///
impl FlagAware<FrameHeaderFlag> for FrameHeaderV4 {
    fn has_flag(&self, flag: FrameHeaderFlag) -> bool {
        match flag {
            FrameHeaderFlag::TagAlter => self.status_flag & util::BIT6 != 0,
            FrameHeaderFlag::FileAlter => self.status_flag & util::BIT5 != 0,
            FrameHeaderFlag::ReadOnly => self.status_flag & util::BIT4 != 0,
            FrameHeaderFlag::GroupIdentity => self.encoding_flag & util::BIT6 != 0,
            FrameHeaderFlag::Compression => self.encoding_flag & util::BIT3 != 0,
            FrameHeaderFlag::Encryption => self.encoding_flag & util::BIT2 != 0,
            FrameHeaderFlag::Unsynchronisation => self.encoding_flag & util::BIT1 != 0,
            FrameHeaderFlag::DataLength => self.encoding_flag & util::BIT0 != 0,
        }
    }

    fn set_flag(&mut self, flag: FrameHeaderFlag) {
        match flag {
            FrameHeaderFlag::TagAlter => self.status_flag = self.status_flag | util::BIT6,
            FrameHeaderFlag::FileAlter => self.status_flag = self.status_flag | util::BIT5,
            FrameHeaderFlag::ReadOnly => self.status_flag = self.status_flag | util::BIT4,
            FrameHeaderFlag::GroupIdentity => self.encoding_flag = self.encoding_flag | util::BIT6,
            FrameHeaderFlag::Compression => self.encoding_flag = self.encoding_flag | util::BIT3,
            FrameHeaderFlag::Encryption => self.encoding_flag = self.encoding_flag | util::BIT2,
            FrameHeaderFlag::Unsynchronisation => {
                self.encoding_flag = self.encoding_flag | util::BIT1
            }
            FrameHeaderFlag::DataLength => self.encoding_flag = self.encoding_flag | util::BIT0,
        }
    }
}

impl FrameWriterDefault for FrameHeaderV4 {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.string(self.id.as_str())?;
        writable.synchsafe(self.size)?;
        writable.u8(self.status_flag)?;
        writable.u8(self.encoding_flag)
    }
}

///
/// # Frame header flag
///
/// [See](http://id3.org/id3v2.3.0#Frame_header_flags)
///
/// ## V2.4 only flags
/// - Unsynchronisation
/// - DataLength
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FrameHeaderFlag {
    TagAlter,
    FileAlter,
    ReadOnly,
    Compression,
    Encryption,
    GroupIdentity,
    //2.4 only
    Unsynchronisation,
    //2.4 only
    DataLength,
}

///
/// # Frame flags
///
/// The version neutral form of the frame header flags. V2.2 frames carry no
/// flag bytes at all, which is what `Frame.flags == None` means.
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameFlags {
    pub tag_alter_preservation: bool,
    pub file_alter_preservation: bool,
    pub read_only: bool,
    pub grouping_identity: bool,
    pub compression: bool,
    pub encryption: bool,
    /// V2.4 only
    pub unsynchronisation: bool,
    /// V2.4 only
    pub data_length_indicator: bool,
}

impl FrameFlags {
    ///
    /// The defaults used when a frame is written without explicit flags:
    /// `FileAlter` for the identifiers the spec marks as bound to the audio
    /// stream, everything else cleared.
    ///
    pub fn default_for(id: &str) -> Self {
        let mut flags = FrameFlags::default();
        flags.file_alter_preservation = util::DEFAULT_FILE_ALTER_IDS.contains(id);
        flags
    }

    pub fn from_header_v3(header: &FrameHeaderV3) -> Self {
        FrameFlags {
            tag_alter_preservation: header.has_flag(FrameHeaderFlag::TagAlter),
            file_alter_preservation: header.has_flag(FrameHeaderFlag::FileAlter),
            read_only: header.has_flag(FrameHeaderFlag::ReadOnly),
            grouping_identity: header.has_flag(FrameHeaderFlag::GroupIdentity),
            compression: header.has_flag(FrameHeaderFlag::Compression),
            encryption: header.has_flag(FrameHeaderFlag::Encryption),
            unsynchronisation: false,
            data_length_indicator: false,
        }
    }

    pub fn from_header_v4(header: &FrameHeaderV4) -> Self {
        FrameFlags {
            tag_alter_preservation: header.has_flag(FrameHeaderFlag::TagAlter),
            file_alter_preservation: header.has_flag(FrameHeaderFlag::FileAlter),
            read_only: header.has_flag(FrameHeaderFlag::ReadOnly),
            grouping_identity: header.has_flag(FrameHeaderFlag::GroupIdentity),
            compression: header.has_flag(FrameHeaderFlag::Compression),
            encryption: header.has_flag(FrameHeaderFlag::Encryption),
            unsynchronisation: header.has_flag(FrameHeaderFlag::Unsynchronisation),
            data_length_indicator: header.has_flag(FrameHeaderFlag::DataLength),
        }
    }

    pub fn to_header_v3(&self, id: String, size: u32) -> FrameHeaderV3 {
        let mut header = FrameHeaderV3 {
            id: id,
            size: size,
            status_flag: 0,
            encoding_flag: 0,
        };

        if self.tag_alter_preservation {
            header.set_flag(FrameHeaderFlag::TagAlter);
        }
        if self.file_alter_preservation {
            header.set_flag(FrameHeaderFlag::FileAlter);
        }
        if self.read_only {
            header.set_flag(FrameHeaderFlag::ReadOnly);
        }
        if self.grouping_identity {
            header.set_flag(FrameHeaderFlag::GroupIdentity);
        }
        if self.compression {
            header.set_flag(FrameHeaderFlag::Compression);
        }
        if self.encryption {
            header.set_flag(FrameHeaderFlag::Encryption);
        }

        header
    }

    pub fn to_header_v4(&self, id: String, size: u32) -> FrameHeaderV4 {
        let mut header = FrameHeaderV4 {
            id: id,
            size: size,
            status_flag: 0,
            encoding_flag: 0,
        };

        if self.tag_alter_preservation {
            header.set_flag(FrameHeaderFlag::TagAlter);
        }
        if self.file_alter_preservation {
            header.set_flag(FrameHeaderFlag::FileAlter);
        }
        if self.read_only {
            header.set_flag(FrameHeaderFlag::ReadOnly);
        }
        if self.grouping_identity {
            header.set_flag(FrameHeaderFlag::GroupIdentity);
        }
        if self.compression {
            header.set_flag(FrameHeaderFlag::Compression);
        }
        if self.encryption {
            header.set_flag(FrameHeaderFlag::Encryption);
        }
        if self.unsynchronisation {
            header.set_flag(FrameHeaderFlag::Unsynchronisation);
        }
        if self.data_length_indicator {
            header.set_flag(FrameHeaderFlag::DataLength);
        }

        header
    }

    fn any(&self) -> bool {
        self.tag_alter_preservation || self.file_alter_preservation || self.read_only ||
        self.grouping_identity || self.compression || self.encryption ||
        self.unsynchronisation || self.data_length_indicator
    }

    ///
    /// The reason this flag set can not be written at `version`, if any.
    ///
    pub fn unsupported_reason(&self, id: &str, version: u8) -> Option<String> {
        match version {
            2 => {
                if self.any() {
                    Some(format!("{}: frame flags cannot be represented in ID3v2.2", id))
                } else {
                    None
                }
            }
            3 => {
                if self.unsynchronisation || self.data_length_indicator {
                    Some(format!("{}: the unsynchronisation and data length indicator flags \
                                  are only supported in ID3v2.4",
                                 id))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

///
/// # Frame
///
/// A typed frame plus its flags. `flags: None` means the frame was read from
/// a V2.2 tag or was built programmatically, and the defaults of
/// [FrameFlags::default_for](struct.FrameFlags.html#method.default_for) are
/// written.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub flags: Option<FrameFlags>,
    pub body: FrameBody,
}

impl Frame {
    pub fn new(body: FrameBody) -> Self {
        Frame {
            flags: None,
            body: body,
        }
    }

    pub fn with_flags(body: FrameBody, flags: FrameFlags) -> Self {
        Frame {
            flags: Some(flags),
            body: body,
        }
    }
}

///
/// # Frame Encoding
///
/// [See](http://id3.org/id3v2.4.0-structure) > 4. ID3v2 frame overview
///
/// The wire byte is 0 for ISO88591, 1 for UTF16 (with a byte order mark),
/// 2 for UTF16BE and 3 for UTF8.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TextEncoding {
    ISO88591,
    UTF16,
    UTF16BE,
    UTF8,
}

///
/// # Picture Type
///
/// See: PIC, APIC
///
/// [See](http://id3.org/id3v2.3.0#Attached_picture)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PictureType {
    Other,
    FileIcon,
    OtherFileIcon,
    CoverFront,
    CoverBack,
    LeafletPage,
    Media,
    LeadArtist,
    Artist,
    Conductor,
    Band,
    Composer,
    Lyricist,
    RecordingLocation,
    DuringRecording,
    DuringPerformance,
    MovieScreenCapture,
    BrightColouredFish,
    Illustration,
    BandLogotype,
    PublisherLogoType,
}

///
/// # Interpolation method
///
/// See: EQU2
///
/// [See](http://id3.org/id3v2.4.0-frames) > 4.12. Equalisation (2)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InterpolationMethod {
    Band,
    Linear,
}

///
/// # Content Type
///
/// See: SYLT
///
/// [See](http://id3.org/id3v2.4.0-frames) > 4.9. Synchronised lyrics/text
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ContentType {
    Other,
    Lyrics,
    TextTranscription,
    MovementName,
    Events,
    Chord,
    Trivia,
    UrlsToWebpages,
    UrlsToImages,
}

///
/// # Timestamp format
///
/// See: ETCO, SYLT, SYTC
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TimestampFormat {
    MpegFrames,
    Milliseconds,
}

///
/// # Channel type
///
/// See: RVA2
///
/// [See](http://id3.org/id3v2.4.0-frames) > 4.11. Relative volume adjustment (2)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChannelType {
    Other,
    MasterVolume,
    FrontRight,
    FrontLeft,
    BackRight,
    BackLeft,
    FrontCentre,
    BackCentre,
    Subwoofer,
}

///
/// # Event Timing Code
///
/// See: ETCO
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventTimingCode {
    Padding(u32),
    EndOfInitialSilence(u32),
    IntroStart(u32),
    MainPartStart(u32),
    OutroStart(u32),
    OutroEnd(u32),
    VerseStart(u32),
    RefrainStart(u32),
    InterludeStart(u32),
    ThemeStart(u32),
    VariationStart(u32),
    KeyChange(u32),
    TimeChange(u32),
    MomentaryUnwantedNoise(u32),
    SustainedNoise(u32),
    SustainedNoiseEnd(u32),
    IntroEnd(u32),
    MainPartEnd(u32),
    VerseEnd(u32),
    RefrainEnd(u32),
    ThemeEnd(u32),
    Profanity(u32),
    ProfanityEnd(u32),
    ReservedForFutureUse(u32, u8),
    NotPredefinedSynch(u32, u8),
    AudioEnd(u32),
    AudioFileEnds(u32),
    OneMoreByteOfEventsFollows(u32),
}

///
/// Audio encryption
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AENC {
    pub owner_identifier: String,
    pub preview_start: u16,
    pub preview_length: u16,
    pub encryption_info: Vec<u8>,
}

impl FrameReaderDefault<AENC> for AENC {
    fn read(readable: &mut Readable) -> Result<AENC> {
        let owner_identifier = util::decode_text_bytes(&TextEncoding::ISO88591,
                                                       &readable.non_utf16_bytes()?)?;
        let preview_start = readable.u16()?;
        let preview_length = readable.u16()?;
        let encryption_info = readable.all_bytes()?;

        Ok(AENC {
            owner_identifier: owner_identifier,
            preview_start: preview_start,
            preview_length: preview_length,
            encryption_info: encryption_info,
        })
    }
}

impl FrameWriterDefault for AENC {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        util::write_null_terminated(&TextEncoding::ISO88591,
                                    self.owner_identifier.as_str(),
                                    writable)?;
        writable.u16(self.preview_start)?;
        writable.u16(self.preview_length)?;
        writable.write(&self.encryption_info)
    }
}

///
/// # Attached picture
///
/// The V2.2 form stores a 3 character image format instead of a mime type
/// and only knows `image/png` and `image/jpg`. The mime type is
/// re-canonicalised on read so the same value round trips through every
/// version.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct APIC {
    pub text_encoding: TextEncoding,
    pub mime_type: String,
    pub picture_type: PictureType,
    pub description: String,
    pub picture_data: Vec<u8>,
}

impl FrameReaderVersionAware<APIC> for APIC {
    fn read(readable: &mut Readable, version: u8) -> Result<APIC> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let mime_type = if version == 2 {
            let image_format = readable.string(3)?;
            match image_format.to_uppercase().as_str() {
                "PNG" => "image/png".to_string(),
                "JPG" => "image/jpg".to_string(),
                _ => {
                    return Err(Error::new(ErrorKind::InvalidData,
                                          format!("unsupported ID3v2.2 image format '{}'",
                                                  image_format)))
                }
            }
        } else {
            util::decode_text_bytes(&TextEncoding::ISO88591, &readable.non_utf16_bytes()?)?
        };
        let picture_type = util::to_picture_type(readable.u8()?);
        let description = util::read_null_terminated(&text_encoding, readable)?;
        let picture_data = readable.all_bytes()?;

        Ok(APIC {
            text_encoding: text_encoding,
            mime_type: mime_type,
            picture_type: picture_type,
            description: description,
            picture_data: picture_data,
        })
    }
}

impl FrameWriterVersionAware<APIC> for APIC {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>, version: u8) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        if version == 2 {
            match self.mime_type.as_str() {
                "image/png" => writable.string("PNG")?,
                "image/jpg" => writable.string("JPG")?,
                _ => {
                    return Err(Error::new(ErrorKind::InvalidInput,
                                          format!("mime type '{}' cannot be written as an \
                                                   ID3v2.2 image format",
                                                  self.mime_type)))
                }
            }
        } else {
            util::write_null_terminated(&TextEncoding::ISO88591,
                                        self.mime_type.as_str(),
                                        writable)?;
        }
        writable.u8(util::from_picture_type(&self.picture_type))?;
        util::write_null_terminated(&self.text_encoding, self.description.as_str(), writable)?;
        writable.write(&self.picture_data)
    }
}

///
/// Comments
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct COMM {
    pub text_encoding: TextEncoding,
    pub language: String,
    pub short_description: String,
    pub actual_text: String,
}

impl FrameReaderDefault<COMM> for COMM {
    fn read(readable: &mut Readable) -> Result<COMM> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let language = readable.string(3)?;
        let short_description = util::read_null_terminated(&text_encoding, readable)?;
        let actual_text = util::decode_rest(&text_encoding, readable)?;

        Ok(COMM {
            text_encoding: text_encoding,
            language: language,
            short_description: short_description,
            actual_text: actual_text,
        })
    }
}

impl FrameWriterDefault for COMM {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        util::write_language(self.language.as_str(), writable)?;
        util::write_null_terminated(&self.text_encoding,
                                    self.short_description.as_str(),
                                    writable)?;
        writable.write(&util::encode_text_bytes(&self.text_encoding,
                                                self.actual_text.as_str())?)
    }
}

///
/// # Equalisation
///
/// 2.2 and 2.3 only. The top bit of each 2 byte frequency field is the
/// increment flag, the remaining 15 bits the frequency in Hz.
///
/// [See](http://id3.org/id3v2.3.0#Equalization)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EqualisationBand {
    pub increment: bool,
    pub frequency: u16,
    pub adjustment: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EQUA {
    pub adjustment_bits: u8,
    pub bands: Vec<EqualisationBand>,
}

impl FrameReaderDefault<EQUA> for EQUA {
    fn read(readable: &mut Readable) -> Result<EQUA> {
        let adjustment_bits = readable.u8()?;
        if adjustment_bits == 0 || adjustment_bits > 32 {
            return Err(Error::new(ErrorKind::InvalidData,
                                  format!("equalisation adjustment width of {} bits is out \
                                           of range",
                                          adjustment_bits)));
        }
        let width = (adjustment_bits as usize + 7) / 8;

        let mut bands = Vec::new();
        while readable.remain()? > 0 {
            let frequency = readable.u16()?;
            let adjustment = util::read_uint(readable, width)? as u32;
            bands.push(EqualisationBand {
                increment: frequency & 0x8000 != 0,
                frequency: frequency & 0x7fff,
                adjustment: adjustment,
            });
        }

        Ok(EQUA {
            adjustment_bits: adjustment_bits,
            bands: bands,
        })
    }
}

impl FrameWriterDefault for EQUA {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        if self.adjustment_bits == 0 || self.adjustment_bits > 32 {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  format!("equalisation adjustment width of {} bits is out \
                                           of range",
                                          self.adjustment_bits)));
        }
        let width = (self.adjustment_bits as usize + 7) / 8;

        writable.u8(self.adjustment_bits)?;
        for band in &self.bands {
            if band.frequency > 0x7fff {
                return Err(Error::new(ErrorKind::InvalidInput,
                                      format!("equalisation frequency {} exceeds 15 bits",
                                              band.frequency)));
            }
            let frequency = if band.increment {
                band.frequency | 0x8000
            } else {
                band.frequency
            };
            writable.u16(frequency)?;
            util::write_uint(writable, band.adjustment as u64, width)?;
        }

        Ok(())
    }
}

///
/// # Equalisation (2)
///
/// 2.4 only.
///
/// [See](http://id3.org/id3v2.4.0-frames) > 4.12. Equalisation (2)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequencyAdjustment {
    /// in units of 1/2 Hz
    pub frequency: u16,
    /// fixed point with 512 steps per dB
    pub volume_adjustment: i16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EQU2 {
    pub interpolation_method: InterpolationMethod,
    pub identification: String,
    pub adjustment_points: Vec<FrequencyAdjustment>,
}

impl FrameReaderDefault<EQU2> for EQU2 {
    fn read(readable: &mut Readable) -> Result<EQU2> {
        let interpolation_method = util::to_interpolation_method(readable.u8()?)?;
        let identification = util::decode_text_bytes(&TextEncoding::ISO88591,
                                                     &readable.non_utf16_bytes()?)?;

        let mut adjustment_points = Vec::new();
        while readable.remain()? > 0 {
            let frequency = readable.u16()?;
            let volume_adjustment = readable.u16()? as i16;
            adjustment_points.push(FrequencyAdjustment {
                frequency: frequency,
                volume_adjustment: volume_adjustment,
            });
        }

        Ok(EQU2 {
            interpolation_method: interpolation_method,
            identification: identification,
            adjustment_points: adjustment_points,
        })
    }
}

impl FrameWriterDefault for EQU2 {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_interpolation_method(&self.interpolation_method))?;
        util::write_null_terminated(&TextEncoding::ISO88591,
                                    self.identification.as_str(),
                                    writable)?;
        for point in &self.adjustment_points {
            writable.u16(point.frequency)?;
            writable.u16(point.volume_adjustment as u16)?;
        }

        Ok(())
    }
}

///
/// Event timing codes
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ETCO {
    pub timestamp_format: TimestampFormat,
    pub event_timing_codes: Vec<EventTimingCode>,
}

impl FrameReaderDefault<ETCO> for ETCO {
    fn read(readable: &mut Readable) -> Result<ETCO> {
        let timestamp_format = util::to_timestamp_format(readable.u8()?)?;
        let mut event_timing_codes: Vec<EventTimingCode> = Vec::new();
        while readable.remain()? > 0 {
            let code_type = readable.u8()?;
            let timestamp = readable.u32()?;
            event_timing_codes.push(util::to_event_timing_code(code_type, timestamp));
        }

        Ok(ETCO {
            timestamp_format: timestamp_format,
            event_timing_codes: event_timing_codes,
        })
    }
}

impl FrameWriterDefault for ETCO {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_timestamp_format(&self.timestamp_format))?;
        for e in &self.event_timing_codes {
            let (code, timestamp) = util::from_event_timing_code(e);
            writable.u8(code)?;
            writable.u32(timestamp)?;
        }

        Ok(())
    }
}

///
/// General encapsulated object
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GEOB {
    pub text_encoding: TextEncoding,
    pub mime_type: String,
    pub filename: String,
    pub content_description: String,
    pub encapsulation_object: Vec<u8>,
}

impl FrameReaderDefault<GEOB> for GEOB {
    fn read(readable: &mut Readable) -> Result<GEOB> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let mime_type = util::decode_text_bytes(&TextEncoding::ISO88591,
                                                &readable.non_utf16_bytes()?)?;
        let filename = util::read_null_terminated(&text_encoding, readable)?;
        let content_description = util::read_null_terminated(&text_encoding, readable)?;
        let encapsulation_object = readable.all_bytes()?;

        Ok(GEOB {
            text_encoding: text_encoding,
            mime_type: mime_type,
            filename: filename,
            content_description: content_description,
            encapsulation_object: encapsulation_object,
        })
    }
}

impl FrameWriterDefault for GEOB {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        util::write_null_terminated(&TextEncoding::ISO88591, self.mime_type.as_str(), writable)?;
        util::write_null_terminated(&self.text_encoding, self.filename.as_str(), writable)?;
        util::write_null_terminated(&self.text_encoding,
                                    self.content_description.as_str(),
                                    writable)?;
        writable.write(&self.encapsulation_object)
    }
}

///
/// # Involved people list
///
/// 2.2 and 2.3 only. An ordered list of role and name pairs, every entry
/// terminated.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IPLS {
    pub text_encoding: TextEncoding,
    pub people: Vec<(String, String)>,
}

impl FrameReaderDefault<IPLS> for IPLS {
    fn read(readable: &mut Readable) -> Result<IPLS> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let mut people = Vec::new();
        while readable.remain()? > 0 {
            let role = util::read_null_terminated(&text_encoding, readable)?;
            if role.is_empty() && readable.remain()? == 0 {
                break;
            }
            let name = util::read_null_terminated(&text_encoding, readable)?;
            people.push((role, name));
        }

        Ok(IPLS {
            text_encoding: text_encoding,
            people: people,
        })
    }
}

impl FrameWriterDefault for IPLS {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        for &(ref role, ref name) in &self.people {
            util::write_null_terminated(&self.text_encoding, role.as_str(), writable)?;
            util::write_null_terminated(&self.text_encoding, name.as_str(), writable)?;
        }

        Ok(())
    }
}

///
/// URL link frames (W000 - WZZZ)
///
/// The URL is always ISO-8859-1, the frame size bounds it.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LINK {
    pub url: String,
}

impl FrameReaderDefault<LINK> for LINK {
    fn read(readable: &mut Readable) -> Result<LINK> {
        let url = util::trim(util::decode_text_bytes(&TextEncoding::ISO88591,
                                                     &readable.all_bytes()?)?);

        Ok(LINK { url: url })
    }
}

impl FrameWriterDefault for LINK {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.write(&util::encode_text_bytes(&TextEncoding::ISO88591, self.url.as_str())?)
    }
}

///
/// Music CD identifier
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCDI {
    pub cd_toc: Vec<u8>,
}

impl FrameReaderDefault<MCDI> for MCDI {
    fn read(readable: &mut Readable) -> Result<MCDI> {
        let cd_toc = readable.all_bytes()?;

        Ok(MCDI { cd_toc: cd_toc })
    }
}

impl FrameWriterDefault for MCDI {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.write(&self.cd_toc)
    }
}

///
/// # MPEG location lookup table
///
/// A 10 byte preamble followed by a big-endian bit stream of
/// `(bytes deviation, millis deviation)` references. The deviation bit
/// widths are computed from the data on write: the minimum byte count,
/// times 8.
///
/// [See](http://id3.org/id3v2.3.0#MPEG_location_lookup_table)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MpegLocationReference {
    pub bytes_deviation: u32,
    pub millis_deviation: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MLLT {
    pub frames_between_reference: u16,
    pub bytes_between_reference: u32,
    pub millis_between_reference: u32,
    pub references: Vec<MpegLocationReference>,
}

impl FrameReaderDefault<MLLT> for MLLT {
    fn read(readable: &mut Readable) -> Result<MLLT> {
        let frames_between_reference = readable.u16()?;
        let bytes_between_reference = readable.u24()?;
        let millis_between_reference = readable.u24()?;
        let bits_for_bytes = readable.u8()?;
        let bits_for_millis = readable.u8()?;
        let data = readable.all_bytes()?;

        let mut references = Vec::new();
        if !data.is_empty() {
            if bits_for_bytes == 0 || bits_for_millis == 0 {
                return Err(Error::new(ErrorKind::InvalidData,
                                      "lookup table declares a zero deviation bit width"));
            }
            if bits_for_bytes > 32 || bits_for_millis > 32 {
                return Err(Error::new(ErrorKind::InvalidData,
                                      format!("deviation bit widths {}/{} are out of range",
                                              bits_for_bytes,
                                              bits_for_millis)));
            }

            let pair_bits = bits_for_bytes as usize + bits_for_millis as usize;
            let count = data.len() * 8 / pair_bits;
            let mut reader = BitReader::endian(Cursor::new(data.as_slice()), BigEndian);
            for _ in 0..count {
                let bytes_deviation: u32 = reader.read(bits_for_bytes as u32)?;
                let millis_deviation: u32 = reader.read(bits_for_millis as u32)?;
                references.push(MpegLocationReference {
                    bytes_deviation: bytes_deviation,
                    millis_deviation: millis_deviation,
                });
            }
        }

        Ok(MLLT {
            frames_between_reference: frames_between_reference,
            bytes_between_reference: bytes_between_reference,
            millis_between_reference: millis_between_reference,
            references: references,
        })
    }
}

impl FrameWriterDefault for MLLT {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        if self.bytes_between_reference > 0xff_ffff {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  format!("{} bytes between references does not fit in 24 \
                                           bits",
                                          self.bytes_between_reference)));
        }
        if self.millis_between_reference > 0xff_ffff {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  format!("{} millis between references does not fit in 24 \
                                           bits",
                                          self.millis_between_reference)));
        }

        let max_bytes = self.references.iter().map(|r| r.bytes_deviation).max().unwrap_or(0);
        let max_millis = self.references.iter().map(|r| r.millis_deviation).max().unwrap_or(0);
        let bits_for_bytes = util::deviation_bit_width(max_bytes)?;
        let bits_for_millis = util::deviation_bit_width(max_millis)?;

        writable.u16(self.frames_between_reference)?;
        writable.u24(self.bytes_between_reference)?;
        writable.u24(self.millis_between_reference)?;
        writable.u8(bits_for_bytes)?;
        writable.u8(bits_for_millis)?;

        let mut bits = BitWriter::endian(Vec::new(), BigEndian);
        for reference in &self.references {
            bits.write(bits_for_bytes as u32, reference.bytes_deviation)?;
            bits.write(bits_for_millis as u32, reference.millis_deviation)?;
        }
        bits.byte_align()?;
        writable.write(&bits.into_writer())
    }
}

///
/// Play counter
///
/// The counter is at least 4 bytes on the wire and grows a byte at a time
/// when it no longer fits.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PCNT {
    pub counter: u64,
}

impl FrameReaderDefault<PCNT> for PCNT {
    fn read(readable: &mut Readable) -> Result<PCNT> {
        let bytes = readable.all_bytes()?;
        if bytes.len() > 8 {
            return Err(Error::new(ErrorKind::InvalidData,
                                  format!("play counter of {} bytes is too wide", bytes.len())));
        }

        let mut counter: u64 = 0;
        for b in &bytes {
            counter = (counter << 8) | *b as u64;
        }

        Ok(PCNT { counter: counter })
    }
}

impl FrameWriterDefault for PCNT {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        util::write_uint(writable, self.counter, util::counter_width(self.counter))
    }
}

///
/// Popularimeter
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct POPM {
    pub email_to_user: String,
    pub rating: u8,
    pub counter: u64,
}

impl FrameReaderDefault<POPM> for POPM {
    fn read(readable: &mut Readable) -> Result<POPM> {
        let email_to_user = util::decode_text_bytes(&TextEncoding::ISO88591,
                                                    &readable.non_utf16_bytes()?)?;
        let rating = readable.u8()?;
        let bytes = readable.all_bytes()?;
        if bytes.len() > 8 {
            return Err(Error::new(ErrorKind::InvalidData,
                                  format!("play counter of {} bytes is too wide", bytes.len())));
        }

        let mut counter: u64 = 0;
        for b in &bytes {
            counter = (counter << 8) | *b as u64;
        }

        Ok(POPM {
            email_to_user: email_to_user,
            rating: rating,
            counter: counter,
        })
    }
}

impl FrameWriterDefault for POPM {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        util::write_null_terminated(&TextEncoding::ISO88591,
                                    self.email_to_user.as_str(),
                                    writable)?;
        writable.u8(self.rating)?;
        util::write_uint(writable, self.counter, util::counter_width(self.counter))
    }
}

///
/// Recommended buffer size
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RBUF {
    pub buffer_size: u32,
    pub embedded_info: bool,
    pub offset_to_next_tag: Option<u32>,
}

impl FrameReaderDefault<RBUF> for RBUF {
    fn read(readable: &mut Readable) -> Result<RBUF> {
        let buffer_size = readable.u24()?;
        let embedded_info = match readable.u8()? {
            0 => false,
            1 => true,
            v => {
                return Err(Error::new(ErrorKind::InvalidData,
                                      format!("embedded info flag must be 0 or 1, got {}", v)))
            }
        };
        let offset_to_next_tag = if readable.remain()? > 0 {
            Some(readable.u24()?)
        } else {
            None
        };

        Ok(RBUF {
            buffer_size: buffer_size,
            embedded_info: embedded_info,
            offset_to_next_tag: offset_to_next_tag,
        })
    }
}

impl FrameWriterDefault for RBUF {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        if self.buffer_size > 0xff_ffff {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  format!("buffer size {} does not fit in 24 bits",
                                          self.buffer_size)));
        }

        writable.u24(self.buffer_size)?;
        writable.u8(if self.embedded_info { 1 } else { 0 })?;
        if let Some(offset) = self.offset_to_next_tag {
            if offset > 0xff_ffff {
                return Err(Error::new(ErrorKind::InvalidInput,
                                      format!("offset to next tag {} does not fit in 24 bits",
                                              offset)));
            }
            writable.u24(offset)?;
        }

        Ok(())
    }
}

///
/// # Relative volume adjustment
///
/// 2.2 and 2.3 only. The increment byte packs `{bass, center, left back,
/// right back, left, right}` into the high six bits, MSB first. The right
/// and left channels are mandatory, the back pair, center and bass blocks
/// are present when the frame is long enough.
///
/// [See](http://id3.org/id3v2.3.0#Relative_volume_adjustment)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeAdjustment {
    pub increment: bool,
    pub relative_volume: u32,
    pub peak_volume: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RVAD {
    pub bits_used_for_volume: u8,
    pub right: VolumeAdjustment,
    pub left: VolumeAdjustment,
    pub right_back: Option<VolumeAdjustment>,
    pub left_back: Option<VolumeAdjustment>,
    pub center: Option<VolumeAdjustment>,
    pub bass: Option<VolumeAdjustment>,
}

impl FrameReaderDefault<RVAD> for RVAD {
    fn read(readable: &mut Readable) -> Result<RVAD> {
        let increments = util::from_flag_byte(readable.u8()?, 6);
        let (inc_bass, inc_center) = (increments[0], increments[1]);
        let (inc_left_back, inc_right_back) = (increments[2], increments[3]);
        let (inc_left, inc_right) = (increments[4], increments[5]);

        let bits_used_for_volume = readable.u8()?;
        if bits_used_for_volume == 0 || bits_used_for_volume > 32 {
            return Err(Error::new(ErrorKind::InvalidData,
                                  format!("volume description width of {} bits is out of \
                                           range",
                                          bits_used_for_volume)));
        }
        let width = (bits_used_for_volume as usize + 7) / 8;

        let right_relative = util::read_uint(readable, width)? as u32;
        let left_relative = util::read_uint(readable, width)? as u32;
        let right_peak = util::read_uint(readable, width)? as u32;
        let left_peak = util::read_uint(readable, width)? as u32;

        let right = VolumeAdjustment {
            increment: inc_right,
            relative_volume: right_relative,
            peak_volume: right_peak,
        };
        let left = VolumeAdjustment {
            increment: inc_left,
            relative_volume: left_relative,
            peak_volume: left_peak,
        };

        let mut right_back = None;
        let mut left_back = None;
        let mut center = None;
        let mut bass = None;

        if readable.remain()? >= 4 * width as u64 {
            let right_back_relative = util::read_uint(readable, width)? as u32;
            let left_back_relative = util::read_uint(readable, width)? as u32;
            let right_back_peak = util::read_uint(readable, width)? as u32;
            let left_back_peak = util::read_uint(readable, width)? as u32;
            right_back = Some(VolumeAdjustment {
                increment: inc_right_back,
                relative_volume: right_back_relative,
                peak_volume: right_back_peak,
            });
            left_back = Some(VolumeAdjustment {
                increment: inc_left_back,
                relative_volume: left_back_relative,
                peak_volume: left_back_peak,
            });
        }

        if readable.remain()? >= 2 * width as u64 {
            let center_relative = util::read_uint(readable, width)? as u32;
            let center_peak = util::read_uint(readable, width)? as u32;
            center = Some(VolumeAdjustment {
                increment: inc_center,
                relative_volume: center_relative,
                peak_volume: center_peak,
            });
        }

        if readable.remain()? >= 2 * width as u64 {
            let bass_relative = util::read_uint(readable, width)? as u32;
            let bass_peak = util::read_uint(readable, width)? as u32;
            bass = Some(VolumeAdjustment {
                increment: inc_bass,
                relative_volume: bass_relative,
                peak_volume: bass_peak,
            });
        }

        Ok(RVAD {
            bits_used_for_volume: bits_used_for_volume,
            right: right,
            left: left,
            right_back: right_back,
            left_back: left_back,
            center: center,
            bass: bass,
        })
    }
}

impl FrameWriterDefault for RVAD {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        if self.bits_used_for_volume == 0 || self.bits_used_for_volume > 32 {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  format!("volume description width of {} bits is out of \
                                           range",
                                          self.bits_used_for_volume)));
        }
        if self.right_back.is_some() != self.left_back.is_some() {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  "the back channels must be present together"));
        }
        if self.center.is_some() && self.right_back.is_none() {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  "a center channel requires the back channels"));
        }
        if self.bass.is_some() && self.center.is_none() {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  "a bass channel requires a center channel"));
        }

        let width = (self.bits_used_for_volume as usize + 7) / 8;

        let inc = |v: &Option<VolumeAdjustment>| v.as_ref().map(|v| v.increment).unwrap_or(false);
        writable.u8(util::to_flag_byte(&[inc(&self.bass),
                                         inc(&self.center),
                                         inc(&self.left_back),
                                         inc(&self.right_back),
                                         self.left.increment,
                                         self.right.increment]))?;
        writable.u8(self.bits_used_for_volume)?;

        util::write_uint(writable, self.right.relative_volume as u64, width)?;
        util::write_uint(writable, self.left.relative_volume as u64, width)?;
        util::write_uint(writable, self.right.peak_volume as u64, width)?;
        util::write_uint(writable, self.left.peak_volume as u64, width)?;

        if let (&Some(ref right_back), &Some(ref left_back)) = (&self.right_back,
                                                                &self.left_back) {
            util::write_uint(writable, right_back.relative_volume as u64, width)?;
            util::write_uint(writable, left_back.relative_volume as u64, width)?;
            util::write_uint(writable, right_back.peak_volume as u64, width)?;
            util::write_uint(writable, left_back.peak_volume as u64, width)?;
        }

        if let Some(ref center) = self.center {
            util::write_uint(writable, center.relative_volume as u64, width)?;
            util::write_uint(writable, center.peak_volume as u64, width)?;
        }

        if let Some(ref bass) = self.bass {
            util::write_uint(writable, bass.relative_volume as u64, width)?;
            util::write_uint(writable, bass.peak_volume as u64, width)?;
        }

        Ok(())
    }
}

///
/// # Relative volume adjustment (2)
///
/// 2.4 only.
///
/// [See](http://id3.org/id3v2.4.0-frames) > 4.11. Relative volume adjustment (2)
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelVolume {
    pub channel_type: ChannelType,
    /// fixed point with 512 steps per dB
    pub volume_adjustment: i16,
    pub bits_representing_peak: u8,
    pub peak_volume: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RVA2 {
    pub identification: String,
    pub channels: Vec<ChannelVolume>,
}

impl FrameReaderDefault<RVA2> for RVA2 {
    fn read(readable: &mut Readable) -> Result<RVA2> {
        let identification = util::decode_text_bytes(&TextEncoding::ISO88591,
                                                     &readable.non_utf16_bytes()?)?;

        let mut channels = Vec::new();
        while readable.remain()? > 0 {
            let channel_type = util::to_channel_type(readable.u8()?)?;
            let volume_adjustment = readable.u16()? as i16;
            let bits_representing_peak = readable.u8()?;
            let width = (bits_representing_peak as usize + 7) / 8;
            if width > 8 {
                return Err(Error::new(ErrorKind::InvalidData,
                                      format!("a peak volume of {} bits is too wide",
                                              bits_representing_peak)));
            }
            let peak_volume = util::read_uint(readable, width)?;
            channels.push(ChannelVolume {
                channel_type: channel_type,
                volume_adjustment: volume_adjustment,
                bits_representing_peak: bits_representing_peak,
                peak_volume: peak_volume,
            });
        }

        Ok(RVA2 {
            identification: identification,
            channels: channels,
        })
    }
}

impl FrameWriterDefault for RVA2 {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        util::write_null_terminated(&TextEncoding::ISO88591,
                                    self.identification.as_str(),
                                    writable)?;
        for channel in &self.channels {
            let width = (channel.bits_representing_peak as usize + 7) / 8;
            if width > 8 {
                return Err(Error::new(ErrorKind::InvalidInput,
                                      format!("a peak volume of {} bits is too wide",
                                              channel.bits_representing_peak)));
            }
            writable.u8(util::from_channel_type(&channel.channel_type))?;
            writable.u16(channel.volume_adjustment as u16)?;
            writable.u8(channel.bits_representing_peak)?;
            util::write_uint(writable, channel.peak_volume, width)?;
        }

        Ok(())
    }
}

///
/// Reverb
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RVRB {
    pub reverb_left: u16,
    pub reverb_right: u16,
    pub reverb_bounce_left: u8,
    pub reverb_bounce_right: u8,
    pub reverb_feedback_left_to_left: u8,
    pub reverb_feedback_left_to_right: u8,
    pub reverb_feedback_right_to_right: u8,
    pub reverb_feedback_right_to_left: u8,
    pub premix_left_to_right: u8,
    pub premix_right_to_left: u8,
}

impl FrameReaderDefault<RVRB> for RVRB {
    fn read(readable: &mut Readable) -> Result<RVRB> {
        let reverb_left = readable.u16()?;
        let reverb_right = readable.u16()?;
        let reverb_bounce_left = readable.u8()?;
        let reverb_bounce_right = readable.u8()?;
        let reverb_feedback_left_to_left = readable.u8()?;
        let reverb_feedback_left_to_right = readable.u8()?;
        let reverb_feedback_right_to_right = readable.u8()?;
        let reverb_feedback_right_to_left = readable.u8()?;
        let premix_left_to_right = readable.u8()?;
        let premix_right_to_left = readable.u8()?;

        Ok(RVRB {
            reverb_left: reverb_left,
            reverb_right: reverb_right,
            reverb_bounce_left: reverb_bounce_left,
            reverb_bounce_right: reverb_bounce_right,
            reverb_feedback_left_to_left: reverb_feedback_left_to_left,
            reverb_feedback_left_to_right: reverb_feedback_left_to_right,
            reverb_feedback_right_to_right: reverb_feedback_right_to_right,
            reverb_feedback_right_to_left: reverb_feedback_right_to_left,
            premix_left_to_right: premix_left_to_right,
            premix_right_to_left: premix_right_to_left,
        })
    }
}

impl FrameWriterDefault for RVRB {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u16(self.reverb_left)?;
        writable.u16(self.reverb_right)?;
        writable.u8(self.reverb_bounce_left)?;
        writable.u8(self.reverb_bounce_right)?;
        writable.u8(self.reverb_feedback_left_to_left)?;
        writable.u8(self.reverb_feedback_left_to_right)?;
        writable.u8(self.reverb_feedback_right_to_right)?;
        writable.u8(self.reverb_feedback_right_to_left)?;
        writable.u8(self.premix_left_to_right)?;
        writable.u8(self.premix_right_to_left)
    }
}

///
/// # Synchronised lyric/text
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyncedText {
    pub text: String,
    pub timestamp: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SYLT {
    pub text_encoding: TextEncoding,
    pub language: String,
    pub timestamp_format: TimestampFormat,
    pub content_type: ContentType,
    pub content_descriptor: String,
    pub lyrics: Vec<SyncedText>,
}

impl FrameReaderDefault<SYLT> for SYLT {
    fn read(readable: &mut Readable) -> Result<SYLT> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let language = readable.string(3)?;
        let timestamp_format = util::to_timestamp_format(readable.u8()?)?;
        let content_type = util::to_content_type(readable.u8()?);
        let content_descriptor = util::read_null_terminated(&text_encoding, readable)?;

        let mut lyrics = Vec::new();
        while readable.remain()? > 0 {
            let text = util::read_null_terminated(&text_encoding, readable)?;
            let timestamp = readable.u32()?;
            lyrics.push(SyncedText {
                text: text,
                timestamp: timestamp,
            });
        }

        Ok(SYLT {
            text_encoding: text_encoding,
            language: language,
            timestamp_format: timestamp_format,
            content_type: content_type,
            content_descriptor: content_descriptor,
            lyrics: lyrics,
        })
    }
}

impl FrameWriterDefault for SYLT {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        util::write_language(self.language.as_str(), writable)?;
        writable.u8(util::from_timestamp_format(&self.timestamp_format))?;
        writable.u8(util::from_content_type(&self.content_type))?;
        util::write_null_terminated(&self.text_encoding,
                                    self.content_descriptor.as_str(),
                                    writable)?;
        for entry in &self.lyrics {
            util::write_null_terminated(&self.text_encoding, entry.text.as_str(), writable)?;
            writable.u32(entry.timestamp)?;
        }

        Ok(())
    }
}

///
/// # Synchronised tempo codes
///
/// A tempo of 255 or above is stored as `0xFF` plus a second byte.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TempoCode {
    /// beats per minute, 1 - 510
    pub tempo: u16,
    pub timestamp: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SYTC {
    pub timestamp_format: TimestampFormat,
    pub tempo_codes: Vec<TempoCode>,
}

impl FrameReaderDefault<SYTC> for SYTC {
    fn read(readable: &mut Readable) -> Result<SYTC> {
        let timestamp_format = util::to_timestamp_format(readable.u8()?)?;

        let mut tempo_codes = Vec::new();
        while readable.remain()? > 0 {
            let first = readable.u8()?;
            let tempo = if first == 0xff {
                0xff + readable.u8()? as u16
            } else {
                first as u16
            };
            let timestamp = readable.u32()?;
            tempo_codes.push(TempoCode {
                tempo: tempo,
                timestamp: timestamp,
            });
        }

        Ok(SYTC {
            timestamp_format: timestamp_format,
            tempo_codes: tempo_codes,
        })
    }
}

impl FrameWriterDefault for SYTC {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_timestamp_format(&self.timestamp_format))?;
        for code in &self.tempo_codes {
            if code.tempo < 1 || code.tempo > 510 {
                return Err(Error::new(ErrorKind::InvalidInput,
                                      format!("tempo {} is out of the 1 - 510 range",
                                              code.tempo)));
            }
            if code.tempo >= 0xff {
                writable.u8(0xff)?;
                writable.u8((code.tempo - 0xff) as u8)?;
            } else {
                writable.u8(code.tempo as u8)?;
            }
            writable.u32(code.timestamp)?;
        }

        Ok(())
    }
}

///
/// Unique file identifier
///
/// The owner identifier must be non empty and the identifier is at most
/// 64 bytes.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UFID {
    pub owner_identifier: String,
    pub identifier: Vec<u8>,
}

impl FrameReaderDefault<UFID> for UFID {
    fn read(readable: &mut Readable) -> Result<UFID> {
        let owner_identifier = util::decode_text_bytes(&TextEncoding::ISO88591,
                                                       &readable.non_utf16_bytes()?)?;
        let identifier = readable.all_bytes()?;

        if owner_identifier.is_empty() {
            return Err(Error::new(ErrorKind::InvalidData, "empty UFID owner identifier"));
        }
        if identifier.len() > 64 {
            return Err(Error::new(ErrorKind::InvalidData,
                                  format!("UFID identifier of {} bytes exceeds 64",
                                          identifier.len())));
        }

        Ok(UFID {
            owner_identifier: owner_identifier,
            identifier: identifier,
        })
    }
}

impl FrameWriterDefault for UFID {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        if self.owner_identifier.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput, "empty UFID owner identifier"));
        }
        if self.identifier.len() > 64 {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  format!("UFID identifier of {} bytes exceeds 64",
                                          self.identifier.len())));
        }

        util::write_null_terminated(&TextEncoding::ISO88591,
                                    self.owner_identifier.as_str(),
                                    writable)?;
        writable.write(&self.identifier)
    }
}

///
/// Unsynchronised lyric/text transcription
///
/// Shares its wire format with the comment frame.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct USLT {
    pub text_encoding: TextEncoding,
    pub language: String,
    pub content_descriptor: String,
    pub lyrics: String,
}

impl FrameReaderDefault<USLT> for USLT {
    fn read(readable: &mut Readable) -> Result<USLT> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let language = readable.string(3)?;
        let content_descriptor = util::read_null_terminated(&text_encoding, readable)?;
        let lyrics = util::decode_rest(&text_encoding, readable)?;

        Ok(USLT {
            text_encoding: text_encoding,
            language: language,
            content_descriptor: content_descriptor,
            lyrics: lyrics,
        })
    }
}

impl FrameWriterDefault for USLT {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        util::write_language(self.language.as_str(), writable)?;
        util::write_null_terminated(&self.text_encoding,
                                    self.content_descriptor.as_str(),
                                    writable)?;
        writable.write(&util::encode_text_bytes(&self.text_encoding, self.lyrics.as_str())?)
    }
}

///
/// For all the T??? types
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TEXT {
    pub text_encoding: TextEncoding,
    pub text: String,
}

impl FrameReaderDefault<TEXT> for TEXT {
    fn read(readable: &mut Readable) -> Result<TEXT> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let text = util::decode_rest(&text_encoding, readable)?;

        Ok(TEXT {
            text_encoding: text_encoding,
            text: text,
        })
    }
}

impl FrameWriterDefault for TEXT {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        writable.write(&util::encode_text_bytes(&self.text_encoding, self.text.as_str())?)
    }
}

///
/// User defined text information frame
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TXXX {
    pub text_encoding: TextEncoding,
    pub description: String,
    pub value: String,
}

impl FrameReaderDefault<TXXX> for TXXX {
    fn read(readable: &mut Readable) -> Result<TXXX> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let description = util::read_null_terminated(&text_encoding, readable)?;
        let value = util::decode_rest(&text_encoding, readable)?;

        Ok(TXXX {
            text_encoding: text_encoding,
            description: description,
            value: value,
        })
    }
}

impl FrameWriterDefault for TXXX {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        util::write_null_terminated(&self.text_encoding, self.description.as_str(), writable)?;
        writable.write(&util::encode_text_bytes(&self.text_encoding, self.value.as_str())?)
    }
}

///
/// User defined URL link frame
///
/// The description uses the frame encoding, the URL itself is ISO-8859-1.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WXXX {
    pub text_encoding: TextEncoding,
    pub description: String,
    pub url: String,
}

impl FrameReaderDefault<WXXX> for WXXX {
    fn read(readable: &mut Readable) -> Result<WXXX> {
        let text_encoding = util::to_encoding(readable.u8()?)?;
        let description = util::read_null_terminated(&text_encoding, readable)?;
        let url = util::trim(util::decode_text_bytes(&TextEncoding::ISO88591,
                                                     &readable.all_bytes()?)?);

        Ok(WXXX {
            text_encoding: text_encoding,
            description: description,
            url: url,
        })
    }
}

impl FrameWriterDefault for WXXX {
    fn write(&self, writable: &mut Writable<Cursor<Vec<u8>>>) -> Result<()> {
        writable.u8(util::from_encoding(&self.text_encoding))?;
        util::write_null_terminated(&self.text_encoding, self.description.as_str(), writable)?;
        writable.write(&util::encode_text_bytes(&TextEncoding::ISO88591, self.url.as_str())?)
    }
}

///
/// Frame types
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FrameBody {
    /// Audio encryption
    AENC(AENC),

    /// Attached picture
    APIC(APIC),

    /// Comments
    COMM(COMM),

    /// 2.2 and 2.3 only
    /// Equalisation
    EQUA(EQUA),

    /// 2.4 only
    /// Equalisation (2)
    EQU2(EQU2),

    /// Event timing codes
    ETCO(ETCO),

    /// General encapsulated object
    GEOB(GEOB),

    /// 2.2 and 2.3 only
    /// Involved people list
    IPLS(IPLS),

    /// Music CD identifier
    MCDI(MCDI),

    /// MPEG location lookup table
    MLLT(MLLT),

    /// Play counter
    PCNT(PCNT),

    /// Popularimeter
    POPM(POPM),

    /// Recommended buffer size
    RBUF(RBUF),

    /// 2.2 and 2.3 only
    /// Relative volume adjustment
    RVAD(RVAD),

    /// 2.4 only
    /// Relative volume adjustment (2)
    RVA2(RVA2),

    /// Reverb
    RVRB(RVRB),

    /// Synchronised lyric/text
    SYLT(SYLT),

    /// Synchronised tempo codes
    SYTC(SYTC),

    /// Album/Movie/Show title
    TALB(TEXT),

    /// BPM (beats per minute)
    TBPM(TEXT),

    /// Composer
    TCOM(TEXT),

    /// Content type
    TCON(TEXT),

    /// Copyright message
    TCOP(TEXT),

    /// 2.2 and 2.3 only
    /// Date
    TDAT(TEXT),

    /// 2.4 only
    /// Encoding time
    TDEN(TEXT),

    /// Playlist delay
    TDLY(TEXT),

    /// 2.4 only
    /// Original release time
    TDOR(TEXT),

    /// 2.4 only
    /// Recording time
    TDRC(TEXT),

    /// 2.4 only
    /// Release time
    TDRL(TEXT),

    /// 2.4 only
    /// Tagging time
    TDTG(TEXT),

    /// Encoded by
    TENC(TEXT),

    /// Lyricist/Text writer
    TEXT(TEXT),

    /// File type
    TFLT(TEXT),

    /// 2.2 and 2.3 only
    /// Time
    TIME(TEXT),

    /// 2.4 only
    /// Involved people list
    TIPL(TEXT),

    /// Content group description
    TIT1(TEXT),

    /// Title/songname/content description
    TIT2(TEXT),

    /// Subtitle/Description refinement
    TIT3(TEXT),

    /// Initial key
    TKEY(TEXT),

    /// Language(s)
    TLAN(TEXT),

    /// Length
    TLEN(TEXT),

    /// 2.4 only
    /// Musician credits list
    TMCL(TEXT),

    /// Media type
    TMED(TEXT),

    /// 2.4 only
    /// Mood
    TMOO(TEXT),

    /// Original album/movie/show title
    TOAL(TEXT),

    /// Original filename
    TOFN(TEXT),

    /// Original lyricist(s)/text writer(s)
    TOLY(TEXT),

    /// Original artist(s)/performer(s)
    TOPE(TEXT),

    /// 2.2 and 2.3 only
    /// Original release year
    TORY(TEXT),

    /// 2.3 and 2.4 only
    /// File owner/licensee
    TOWN(TEXT),

    /// Lead performer(s)/Soloist(s)
    TPE1(TEXT),

    /// Band/orchestra/accompaniment
    TPE2(TEXT),

    /// Conductor/performer refinement
    TPE3(TEXT),

    /// Interpreted, remixed, or otherwise modified by
    TPE4(TEXT),

    /// Part of a set
    TPOS(TEXT),

    /// 2.4 only
    /// Produced notice
    TPRO(TEXT),

    /// Publisher
    TPUB(TEXT),

    /// Track number/Position in set
    TRCK(TEXT),

    /// 2.2 and 2.3 only
    /// Recording dates
    TRDA(TEXT),

    /// 2.3 and 2.4 only
    /// Internet radio station name
    TRSN(TEXT),

    /// 2.3 and 2.4 only
    /// Internet radio station owner
    TRSO(TEXT),

    /// 2.2 and 2.3 only
    /// Size
    TSIZ(TEXT),

    /// 2.4 only
    /// Album sort order
    TSOA(TEXT),

    /// 2.4 only
    /// Performer sort order
    TSOP(TEXT),

    /// 2.4 only
    /// Title sort order
    TSOT(TEXT),

    /// ISRC (international standard recording code)
    TSRC(TEXT),

    /// Software/Hardware and settings used for encoding
    TSSE(TEXT),

    /// 2.4 only
    /// Set subtitle
    TSST(TEXT),

    /// 2.2 and 2.3 only
    /// Year
    TYER(TEXT),

    /// User defined text information frame
    TXXX(TXXX),

    /// Unique file identifier
    UFID(UFID),

    /// Unsychronized lyric/text transcription
    USLT(USLT),

    /// Commercial information
    WCOM(LINK),

    /// Copyright/Legal information
    WCOP(LINK),

    /// Official audio file webpage
    WOAF(LINK),

    /// Official artist/performer webpage
    WOAR(LINK),

    /// Official audio source webpage
    WOAS(LINK),

    /// 2.3 and 2.4 only
    /// Official internet radio station homepage
    WORS(LINK),

    /// 2.3 and 2.4 only
    /// Payment
    WPAY(LINK),

    /// Publishers official webpage
    WPUB(LINK),

    /// User defined URL link frame
    WXXX(WXXX),

    /// A compressed or encrypted frame kept as raw bytes. The first field
    /// is the identifier as it appeared on the wire.
    SKIP(String, Vec<u8>),
}

impl FrameBody {
    ///
    /// The canonical 4 character identifier of this frame kind. `None` for
    /// raw SKIP bodies, whose identifier is carried verbatim.
    ///
    pub fn id4(&self) -> Option<&'static str> {
        match *self {
            FrameBody::AENC(_) => Some(self::id::AENC_STR),
            FrameBody::APIC(_) => Some(self::id::APIC_STR),
            FrameBody::COMM(_) => Some(self::id::COMM_STR),
            FrameBody::EQUA(_) => Some(self::id::EQUA_STR),
            FrameBody::EQU2(_) => Some(self::id::EQU2_STR),
            FrameBody::ETCO(_) => Some(self::id::ETCO_STR),
            FrameBody::GEOB(_) => Some(self::id::GEOB_STR),
            FrameBody::IPLS(_) => Some(self::id::IPLS_STR),
            FrameBody::MCDI(_) => Some(self::id::MCDI_STR),
            FrameBody::MLLT(_) => Some(self::id::MLLT_STR),
            FrameBody::PCNT(_) => Some(self::id::PCNT_STR),
            FrameBody::POPM(_) => Some(self::id::POPM_STR),
            FrameBody::RBUF(_) => Some(self::id::RBUF_STR),
            FrameBody::RVAD(_) => Some(self::id::RVAD_STR),
            FrameBody::RVA2(_) => Some(self::id::RVA2_STR),
            FrameBody::RVRB(_) => Some(self::id::RVRB_STR),
            FrameBody::SYLT(_) => Some(self::id::SYLT_STR),
            FrameBody::SYTC(_) => Some(self::id::SYTC_STR),
            FrameBody::TALB(_) => Some(self::id::TALB_STR),
            FrameBody::TBPM(_) => Some(self::id::TBPM_STR),
            FrameBody::TCOM(_) => Some(self::id::TCOM_STR),
            FrameBody::TCON(_) => Some(self::id::TCON_STR),
            FrameBody::TCOP(_) => Some(self::id::TCOP_STR),
            FrameBody::TDAT(_) => Some(self::id::TDAT_STR),
            FrameBody::TDEN(_) => Some(self::id::TDEN_STR),
            FrameBody::TDLY(_) => Some(self::id::TDLY_STR),
            FrameBody::TDOR(_) => Some(self::id::TDOR_STR),
            FrameBody::TDRC(_) => Some(self::id::TDRC_STR),
            FrameBody::TDRL(_) => Some(self::id::TDRL_STR),
            FrameBody::TDTG(_) => Some(self::id::TDTG_STR),
            FrameBody::TENC(_) => Some(self::id::TENC_STR),
            FrameBody::TEXT(_) => Some(self::id::TEXT_STR),
            FrameBody::TFLT(_) => Some(self::id::TFLT_STR),
            FrameBody::TIME(_) => Some(self::id::TIME_STR),
            FrameBody::TIPL(_) => Some(self::id::TIPL_STR),
            FrameBody::TIT1(_) => Some(self::id::TIT1_STR),
            FrameBody::TIT2(_) => Some(self::id::TIT2_STR),
            FrameBody::TIT3(_) => Some(self::id::TIT3_STR),
            FrameBody::TKEY(_) => Some(self::id::TKEY_STR),
            FrameBody::TLAN(_) => Some(self::id::TLAN_STR),
            FrameBody::TLEN(_) => Some(self::id::TLEN_STR),
            FrameBody::TMCL(_) => Some(self::id::TMCL_STR),
            FrameBody::TMED(_) => Some(self::id::TMED_STR),
            FrameBody::TMOO(_) => Some(self::id::TMOO_STR),
            FrameBody::TOAL(_) => Some(self::id::TOAL_STR),
            FrameBody::TOFN(_) => Some(self::id::TOFN_STR),
            FrameBody::TOLY(_) => Some(self::id::TOLY_STR),
            FrameBody::TOPE(_) => Some(self::id::TOPE_STR),
            FrameBody::TORY(_) => Some(self::id::TORY_STR),
            FrameBody::TOWN(_) => Some(self::id::TOWN_STR),
            FrameBody::TPE1(_) => Some(self::id::TPE1_STR),
            FrameBody::TPE2(_) => Some(self::id::TPE2_STR),
            FrameBody::TPE3(_) => Some(self::id::TPE3_STR),
            FrameBody::TPE4(_) => Some(self::id::TPE4_STR),
            FrameBody::TPOS(_) => Some(self::id::TPOS_STR),
            FrameBody::TPRO(_) => Some(self::id::TPRO_STR),
            FrameBody::TPUB(_) => Some(self::id::TPUB_STR),
            FrameBody::TRCK(_) => Some(self::id::TRCK_STR),
            FrameBody::TRDA(_) => Some(self::id::TRDA_STR),
            FrameBody::TRSN(_) => Some(self::id::TRSN_STR),
            FrameBody::TRSO(_) => Some(self::id::TRSO_STR),
            FrameBody::TSIZ(_) => Some(self::id::TSIZ_STR),
            FrameBody::TSOA(_) => Some(self::id::TSOA_STR),
            FrameBody::TSOP(_) => Some(self::id::TSOP_STR),
            FrameBody::TSOT(_) => Some(self::id::TSOT_STR),
            FrameBody::TSRC(_) => Some(self::id::TSRC_STR),
            FrameBody::TSSE(_) => Some(self::id::TSSE_STR),
            FrameBody::TSST(_) => Some(self::id::TSST_STR),
            FrameBody::TYER(_) => Some(self::id::TYER_STR),
            FrameBody::TXXX(_) => Some(self::id::TXXX_STR),
            FrameBody::UFID(_) => Some(self::id::UFID_STR),
            FrameBody::USLT(_) => Some(self::id::USLT_STR),
            FrameBody::WCOM(_) => Some(self::id::WCOM_STR),
            FrameBody::WCOP(_) => Some(self::id::WCOP_STR),
            FrameBody::WOAF(_) => Some(self::id::WOAF_STR),
            FrameBody::WOAR(_) => Some(self::id::WOAR_STR),
            FrameBody::WOAS(_) => Some(self::id::WOAS_STR),
            FrameBody::WORS(_) => Some(self::id::WORS_STR),
            FrameBody::WPAY(_) => Some(self::id::WPAY_STR),
            FrameBody::WPUB(_) => Some(self::id::WPUB_STR),
            FrameBody::WXXX(_) => Some(self::id::WXXX_STR),
            FrameBody::SKIP(_, _) => None,
        }
    }

    ///
    /// The text encoding this frame carries, if its layout has one.
    ///
    pub fn text_encoding(&self) -> Option<&TextEncoding> {
        match *self {
            FrameBody::APIC(ref frame) => Some(&frame.text_encoding),
            FrameBody::COMM(ref frame) => Some(&frame.text_encoding),
            FrameBody::GEOB(ref frame) => Some(&frame.text_encoding),
            FrameBody::IPLS(ref frame) => Some(&frame.text_encoding),
            FrameBody::SYLT(ref frame) => Some(&frame.text_encoding),
            FrameBody::USLT(ref frame) => Some(&frame.text_encoding),
            FrameBody::TXXX(ref frame) => Some(&frame.text_encoding),
            FrameBody::WXXX(ref frame) => Some(&frame.text_encoding),
            FrameBody::TALB(ref frame) |
            FrameBody::TBPM(ref frame) |
            FrameBody::TCOM(ref frame) |
            FrameBody::TCON(ref frame) |
            FrameBody::TCOP(ref frame) |
            FrameBody::TDAT(ref frame) |
            FrameBody::TDEN(ref frame) |
            FrameBody::TDLY(ref frame) |
            FrameBody::TDOR(ref frame) |
            FrameBody::TDRC(ref frame) |
            FrameBody::TDRL(ref frame) |
            FrameBody::TDTG(ref frame) |
            FrameBody::TENC(ref frame) |
            FrameBody::TEXT(ref frame) |
            FrameBody::TFLT(ref frame) |
            FrameBody::TIME(ref frame) |
            FrameBody::TIPL(ref frame) |
            FrameBody::TIT1(ref frame) |
            FrameBody::TIT2(ref frame) |
            FrameBody::TIT3(ref frame) |
            FrameBody::TKEY(ref frame) |
            FrameBody::TLAN(ref frame) |
            FrameBody::TLEN(ref frame) |
            FrameBody::TMCL(ref frame) |
            FrameBody::TMED(ref frame) |
            FrameBody::TMOO(ref frame) |
            FrameBody::TOAL(ref frame) |
            FrameBody::TOFN(ref frame) |
            FrameBody::TOLY(ref frame) |
            FrameBody::TOPE(ref frame) |
            FrameBody::TORY(ref frame) |
            FrameBody::TOWN(ref frame) |
            FrameBody::TPE1(ref frame) |
            FrameBody::TPE2(ref frame) |
            FrameBody::TPE3(ref frame) |
            FrameBody::TPE4(ref frame) |
            FrameBody::TPOS(ref frame) |
            FrameBody::TPRO(ref frame) |
            FrameBody::TPUB(ref frame) |
            FrameBody::TRCK(ref frame) |
            FrameBody::TRDA(ref frame) |
            FrameBody::TRSN(ref frame) |
            FrameBody::TRSO(ref frame) |
            FrameBody::TSIZ(ref frame) |
            FrameBody::TSOA(ref frame) |
            FrameBody::TSOP(ref frame) |
            FrameBody::TSOT(ref frame) |
            FrameBody::TSRC(ref frame) |
            FrameBody::TSSE(ref frame) |
            FrameBody::TSST(ref frame) |
            FrameBody::TYER(ref frame) => Some(&frame.text_encoding),
            _ => None,
        }
    }

    ///
    /// Replace the stored text encoding, when the layout has one.
    ///
    pub fn set_text_encoding(&mut self, text_encoding: &TextEncoding) {
        match *self {
            FrameBody::APIC(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::COMM(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::GEOB(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::IPLS(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::SYLT(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::USLT(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::TXXX(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::WXXX(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            FrameBody::TALB(ref mut frame) |
            FrameBody::TBPM(ref mut frame) |
            FrameBody::TCOM(ref mut frame) |
            FrameBody::TCON(ref mut frame) |
            FrameBody::TCOP(ref mut frame) |
            FrameBody::TDAT(ref mut frame) |
            FrameBody::TDEN(ref mut frame) |
            FrameBody::TDLY(ref mut frame) |
            FrameBody::TDOR(ref mut frame) |
            FrameBody::TDRC(ref mut frame) |
            FrameBody::TDRL(ref mut frame) |
            FrameBody::TDTG(ref mut frame) |
            FrameBody::TENC(ref mut frame) |
            FrameBody::TEXT(ref mut frame) |
            FrameBody::TFLT(ref mut frame) |
            FrameBody::TIME(ref mut frame) |
            FrameBody::TIPL(ref mut frame) |
            FrameBody::TIT1(ref mut frame) |
            FrameBody::TIT2(ref mut frame) |
            FrameBody::TIT3(ref mut frame) |
            FrameBody::TKEY(ref mut frame) |
            FrameBody::TLAN(ref mut frame) |
            FrameBody::TLEN(ref mut frame) |
            FrameBody::TMCL(ref mut frame) |
            FrameBody::TMED(ref mut frame) |
            FrameBody::TMOO(ref mut frame) |
            FrameBody::TOAL(ref mut frame) |
            FrameBody::TOFN(ref mut frame) |
            FrameBody::TOLY(ref mut frame) |
            FrameBody::TOPE(ref mut frame) |
            FrameBody::TORY(ref mut frame) |
            FrameBody::TOWN(ref mut frame) |
            FrameBody::TPE1(ref mut frame) |
            FrameBody::TPE2(ref mut frame) |
            FrameBody::TPE3(ref mut frame) |
            FrameBody::TPE4(ref mut frame) |
            FrameBody::TPOS(ref mut frame) |
            FrameBody::TPRO(ref mut frame) |
            FrameBody::TPUB(ref mut frame) |
            FrameBody::TRCK(ref mut frame) |
            FrameBody::TRDA(ref mut frame) |
            FrameBody::TRSN(ref mut frame) |
            FrameBody::TRSO(ref mut frame) |
            FrameBody::TSIZ(ref mut frame) |
            FrameBody::TSOA(ref mut frame) |
            FrameBody::TSOP(ref mut frame) |
            FrameBody::TSOT(ref mut frame) |
            FrameBody::TSRC(ref mut frame) |
            FrameBody::TSSE(ref mut frame) |
            FrameBody::TSST(ref mut frame) |
            FrameBody::TYER(ref mut frame) => frame.text_encoding = text_encoding.clone(),
            _ => (),
        }
    }

    ///
    /// Whether this frame kind can be written at `version`. On failure the
    /// reason is returned for version selection to aggregate.
    ///
    pub fn supports_version(&self, version: u8) -> result::Result<(), String> {
        if let FrameBody::SKIP(ref id, _) = *self {
            let expected = if version == 2 { 3 } else { 4 };
            if id.len() != expected {
                return Err(format!("raw frame '{}' cannot be written at ID3v2.{}", id, version));
            }
            return Ok(());
        }

        let id4 = self.id4().unwrap_or("");

        match version {
            2 => {
                if util::V24_ONLY_IDS.contains(id4) {
                    return Err(format!("{} is only supported in ID3v2.4", id4));
                }
                if let Err(reason) = util::id_for_version(id4, 2) {
                    return Err(reason);
                }
                if let FrameBody::APIC(ref frame) = *self {
                    if frame.mime_type != "image/png" && frame.mime_type != "image/jpg" {
                        return Err(format!("APIC mime type '{}' is not supported in ID3v2.2",
                                           frame.mime_type));
                    }
                }
            }
            3 => {
                if util::V24_ONLY_IDS.contains(id4) {
                    return Err(format!("{} is only supported in ID3v2.4", id4));
                }
            }
            4 => {
                if util::NOT_V24_IDS.contains(id4) {
                    return Err(format!("{} is not supported in ID3v2.4", id4));
                }
            }
            _ => return Err(format!("unknown ID3v2 version {}", version)),
        }

        if let Some(text_encoding) = self.text_encoding() {
            if !util::encoding_supported_in(text_encoding, version) {
                return Err(format!("{:?} text encoding is not supported in ID3v2.{}",
                                   text_encoding,
                                   version));
            }
        }

        Ok(())
    }
}

///
/// # Frame id
///
/// ## V2.2
/// - All of 3 characters
///
/// ## V2.2 vs 2.3|2.4 mapping
///
/// See [util::ID_V2_TO_V4](../util/struct.ID_V2_TO_V4.html)
///
pub mod id {
    //
    // 2.2
    //
    pub const BUF_STR: &'static str = "BUF";
    pub const CNT_STR: &'static str = "CNT";
    pub const COM_STR: &'static str = "COM";
    pub const CRA_STR: &'static str = "CRA";
    pub const ETC_STR: &'static str = "ETC";
    pub const EQU_STR: &'static str = "EQU";
    pub const GEO_STR: &'static str = "GEO";
    pub const IPL_STR: &'static str = "IPL";
    pub const LNK_STR: &'static str = "LNK";
    pub const MCI_STR: &'static str = "MCI";
    pub const MLL_STR: &'static str = "MLL";
    pub const PIC_STR: &'static str = "PIC";
    pub const POP_STR: &'static str = "POP";
    pub const REV_STR: &'static str = "REV";
    pub const RVA_STR: &'static str = "RVA";
    pub const SLT_STR: &'static str = "SLT";
    pub const STC_STR: &'static str = "STC";
    pub const TAL_STR: &'static str = "TAL";
    pub const TBP_STR: &'static str = "TBP";
    pub const TCM_STR: &'static str = "TCM";
    pub const TCO_STR: &'static str = "TCO";
    pub const TCR_STR: &'static str = "TCR";
    pub const TDA_STR: &'static str = "TDA";
    pub const TDY_STR: &'static str = "TDY";
    pub const TEN_STR: &'static str = "TEN";
    pub const TFT_STR: &'static str = "TFT";
    pub const TIM_STR: &'static str = "TIM";
    pub const TKE_STR: &'static str = "TKE";
    pub const TLA_STR: &'static str = "TLA";
    pub const TLE_STR: &'static str = "TLE";
    pub const TMT_STR: &'static str = "TMT";
    pub const TOA_STR: &'static str = "TOA";
    pub const TOF_STR: &'static str = "TOF";
    pub const TOL_STR: &'static str = "TOL";
    pub const TOR_STR: &'static str = "TOR";
    pub const TOT_STR: &'static str = "TOT";
    pub const TP1_STR: &'static str = "TP1";
    pub const TP2_STR: &'static str = "TP2";
    pub const TP3_STR: &'static str = "TP3";
    pub const TP4_STR: &'static str = "TP4";
    pub const TPA_STR: &'static str = "TPA";
    pub const TPB_STR: &'static str = "TPB";
    pub const TRC_STR: &'static str = "TRC";
    pub const TRD_STR: &'static str = "TRD";
    pub const TRK_STR: &'static str = "TRK";
    pub const TSI_STR: &'static str = "TSI";
    pub const TSS_STR: &'static str = "TSS";
    pub const TT1_STR: &'static str = "TT1";
    pub const TT2_STR: &'static str = "TT2";
    pub const TT3_STR: &'static str = "TT3";
    pub const TXT_STR: &'static str = "TXT";
    pub const TXX_STR: &'static str = "TXX";
    pub const TYE_STR: &'static str = "TYE";
    pub const UFI_STR: &'static str = "UFI";
    pub const ULT_STR: &'static str = "ULT";
    pub const WAF_STR: &'static str = "WAF";
    pub const WAR_STR: &'static str = "WAR";
    pub const WAS_STR: &'static str = "WAS";
    pub const WCM_STR: &'static str = "WCM";
    pub const WCP_STR: &'static str = "WCP";
    pub const WPB_STR: &'static str = "WPB";
    pub const WXX_STR: &'static str = "WXX";

    //
    // 2.3 & 2.4
    //
    pub const AENC_STR: &'static str = "AENC";
    pub const APIC_STR: &'static str = "APIC";
    pub const ASPI_STR: &'static str = "ASPI";
    pub const COMM_STR: &'static str = "COMM";
    pub const EQU2_STR: &'static str = "EQU2";
    // 2.3 only
    pub const EQUA_STR: &'static str = "EQUA";
    pub const ETCO_STR: &'static str = "ETCO";
    pub const GEOB_STR: &'static str = "GEOB";
    // 2.3 only
    pub const IPLS_STR: &'static str = "IPLS";
    pub const LINK_STR: &'static str = "LINK";
    pub const MCDI_STR: &'static str = "MCDI";
    pub const MLLT_STR: &'static str = "MLLT";
    pub const PCNT_STR: &'static str = "PCNT";
    pub const POPM_STR: &'static str = "POPM";
    pub const POSS_STR: &'static str = "POSS";
    pub const RBUF_STR: &'static str = "RBUF";
    // 2.3 only
    pub const RVAD_STR: &'static str = "RVAD";
    pub const RVA2_STR: &'static str = "RVA2";
    pub const RVRB_STR: &'static str = "RVRB";
    pub const SEEK_STR: &'static str = "SEEK";
    pub const SYLT_STR: &'static str = "SYLT";
    pub const SYTC_STR: &'static str = "SYTC";
    pub const TALB_STR: &'static str = "TALB";
    pub const TBPM_STR: &'static str = "TBPM";
    pub const TCOM_STR: &'static str = "TCOM";
    pub const TCON_STR: &'static str = "TCON";
    pub const TCOP_STR: &'static str = "TCOP";
    // 2.3 only
    pub const TDAT_STR: &'static str = "TDAT";
    pub const TDEN_STR: &'static str = "TDEN";
    pub const TDLY_STR: &'static str = "TDLY";
    pub const TDOR_STR: &'static str = "TDOR";
    pub const TDRC_STR: &'static str = "TDRC";
    pub const TDRL_STR: &'static str = "TDRL";
    pub const TDTG_STR: &'static str = "TDTG";
    pub const TENC_STR: &'static str = "TENC";
    pub const TEXT_STR: &'static str = "TEXT";
    pub const TFLT_STR: &'static str = "TFLT";
    // 2.3 only
    pub const TIME_STR: &'static str = "TIME";
    pub const TIPL_STR: &'static str = "TIPL";
    pub const TIT1_STR: &'static str = "TIT1";
    pub const TIT2_STR: &'static str = "TIT2";
    pub const TIT3_STR: &'static str = "TIT3";
    pub const TKEY_STR: &'static str = "TKEY";
    pub const TLAN_STR: &'static str = "TLAN";
    pub const TLEN_STR: &'static str = "TLEN";
    pub const TMCL_STR: &'static str = "TMCL";
    pub const TMED_STR: &'static str = "TMED";
    pub const TMOO_STR: &'static str = "TMOO";
    pub const TOAL_STR: &'static str = "TOAL";
    pub const TOFN_STR: &'static str = "TOFN";
    pub const TOLY_STR: &'static str = "TOLY";
    pub const TOPE_STR: &'static str = "TOPE";
    // 2.3 only
    pub const TORY_STR: &'static str = "TORY";
    pub const TOWN_STR: &'static str = "TOWN";
    pub const TPE1_STR: &'static str = "TPE1";
    pub const TPE2_STR: &'static str = "TPE2";
    pub const TPE3_STR: &'static str = "TPE3";
    pub const TPE4_STR: &'static str = "TPE4";
    pub const TPOS_STR: &'static str = "TPOS";
    pub const TPRO_STR: &'static str = "TPRO";
    pub const TPUB_STR: &'static str = "TPUB";
    pub const TRCK_STR: &'static str = "TRCK";
    // 2.3 only
    pub const TRDA_STR: &'static str = "TRDA";
    pub const TRSN_STR: &'static str = "TRSN";
    pub const TRSO_STR: &'static str = "TRSO";
    // 2.3 only
    pub const TSIZ_STR: &'static str = "TSIZ";
    pub const TSOA_STR: &'static str = "TSOA";
    pub const TSOP_STR: &'static str = "TSOP";
    pub const TSOT_STR: &'static str = "TSOT";
    pub const TSRC_STR: &'static str = "TSRC";
    pub const TSSE_STR: &'static str = "TSSE";
    pub const TSST_STR: &'static str = "TSST";
    // 2.3 only
    pub const TYER_STR: &'static str = "TYER";
    pub const TXXX_STR: &'static str = "TXXX";
    pub const UFID_STR: &'static str = "UFID";
    pub const USLT_STR: &'static str = "USLT";
    pub const WCOM_STR: &'static str = "WCOM";
    pub const WCOP_STR: &'static str = "WCOP";
    pub const WOAF_STR: &'static str = "WOAF";
    pub const WOAR_STR: &'static str = "WOAR";
    pub const WOAS_STR: &'static str = "WOAS";
    pub const WORS_STR: &'static str = "WORS";
    pub const WPAY_STR: &'static str = "WPAY";
    pub const WPUB_STR: &'static str = "WPUB";
    pub const WXXX_STR: &'static str = "WXXX";
}
