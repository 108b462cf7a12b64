use errors::{ParsingError, WriteError};
use frame::*;
use util;
use readable::Readable;
use writable::Writable;

use std::io::Cursor;
use std::result;
use std::vec::Vec;

///
/// A decoded tag: the header, the extended header when one was present, and
/// the frames in the order they appeared.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub head: Head,
    pub extended: Option<ExtendedHead>,
    pub frames: Vec<Frame>,
}

fn find_signature(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 3 {
        return None;
    }

    for i in 0..bytes.len() - 2 {
        if &bytes[i..i + 3] == b"ID3" {
            return Some(i);
        }
    }

    None
}

///
/// # Tag reader
///
/// Decodes a whole tag out of a byte buffer. The decode is strict: an
/// unrecognised frame identifier, a bad size field or a truncated buffer
/// abort the tag instead of being skipped.
///
pub struct MetadataReader {
    readable: Readable<Cursor<Vec<u8>>>,
}

impl MetadataReader {
    pub fn new(bytes: &[u8]) -> result::Result<Self, ParsingError> {
        let offset = match find_signature(bytes) {
            Some(offset) => offset,
            None => {
                return Err(ParsingError::BadData("no ID3v2 tag signature found".to_string()))
            }
        };

        debug!("tag signature at {}", offset);

        let mut readable = Readable::new(Cursor::new(bytes.to_vec()));
        readable.position(offset as u64)?;

        Ok(MetadataReader { readable: readable })
    }

    pub fn read(mut self) -> result::Result<Tag, ParsingError> {
        let head = Head::read(&mut self.readable)?;

        debug!("{:?}", head);

        let mut extended = None;
        let mut extended_size: u64 = 0;
        if head.has_flag(HeadFlag::ExtendedHeader) {
            let before = self.readable.pos()?;
            extended = Some(ExtendedHead::read(&mut self.readable, head.version)?);
            extended_size = self.readable.pos()? - before;
        }

        if extended_size > head.size as u64 {
            return Err(ParsingError::BadData("extended header exceeds the tag size"
                .to_string()));
        }

        let mut frame_bytes = self.readable.bytes((head.size as u64 - extended_size) as usize)?;
        if head.has_flag(HeadFlag::Unsynchronisation) {
            let len = util::to_synchronize(&mut frame_bytes);
            frame_bytes.truncate(len);
        }

        let mut frames = Vec::new();
        let mut readable = Readable::new(Cursor::new(frame_bytes));
        loop {
            let remain = readable.remain()?;
            if remain == 0 {
                break;
            }
            if remain == 1 {
                if readable.look_u8()? == 0 {
                    break;
                }
                return Err(ParsingError::BadData("trailing byte is not padding".to_string()));
            }
            // two zero bytes start the padding
            if readable.look_u16()? == 0 {
                break;
            }

            let frame = match head.version {
                2 => self.frame2(&mut readable)?,
                3 => self.frame3(&mut readable)?,
                _ => self.frame4(&mut readable)?,
            };
            frames.push(frame);
        }

        Ok(Tag {
            head: head,
            extended: extended,
            frames: frames,
        })
    }

    fn frame2(&mut self,
              readable: &mut Readable<Cursor<Vec<u8>>>)
              -> result::Result<Frame, ParsingError> {
        let frame_header = FrameHeaderV2::read(readable)?;

        if !util::is_valid_frame_id(frame_header.id.as_str(), 2) {
            return Err(ParsingError::BadData(format!("unknown frame identifier '{}'",
                                                     frame_header.id)));
        }

        let frame_readable = readable.to_readable(frame_header.size as usize)?;
        let frame_body = util::id_to_frame_body(frame_header.id.as_str(), 2, frame_readable)?;

        Ok(Frame::new(frame_body))
    }

    fn frame3(&mut self,
              readable: &mut Readable<Cursor<Vec<u8>>>)
              -> result::Result<Frame, ParsingError> {
        let frame_header = FrameHeaderV3::read(readable)?;

        if !util::is_valid_frame_id(frame_header.id.as_str(), 3) {
            return Err(ParsingError::BadData(format!("unknown frame identifier '{}'",
                                                     frame_header.id)));
        }

        let mut extra_size: u32 = 0;
        if frame_header.has_flag(FrameHeaderFlag::GroupIdentity) {
            let _ = readable.u8()?;
            extra_size = extra_size + 1;
        }

        if frame_header.has_flag(FrameHeaderFlag::Encryption) {
            let _ = readable.u8()?;
            extra_size = extra_size + 1;
        }

        if frame_header.has_flag(FrameHeaderFlag::Compression) {
            let _ = readable.u32()?;
            extra_size = extra_size + 4;
        }

        if frame_header.size < extra_size {
            return Err(ParsingError::BadData(format!("frame '{}' is smaller than its flag \
                                                      data",
                                                     frame_header.id)));
        }

        let body_bytes = readable.bytes((frame_header.size - extra_size) as usize)?;
        let flags = FrameFlags::from_header_v3(&frame_header);

        let frame_body = if flags.compression || flags.encryption {
            debug!("'{}' is kept as raw bytes", frame_header.id);

            FrameBody::SKIP(frame_header.id.clone(), body_bytes)
        } else {
            let frame_readable = Readable::new(Cursor::new(body_bytes));
            util::id_to_frame_body(frame_header.id.as_str(), 3, frame_readable)?
        };

        Ok(Frame::with_flags(frame_body, flags))
    }

    fn frame4(&mut self,
              readable: &mut Readable<Cursor<Vec<u8>>>)
              -> result::Result<Frame, ParsingError> {
        let frame_header = FrameHeaderV4::read(readable)?;

        if !util::is_valid_frame_id(frame_header.id.as_str(), 4) {
            return Err(ParsingError::BadData(format!("unknown frame identifier '{}'",
                                                     frame_header.id)));
        }

        let mut extra_size: u32 = 0;
        if frame_header.has_flag(FrameHeaderFlag::GroupIdentity) {
            let _ = readable.u8()?;
            extra_size = extra_size + 1;
        }

        if frame_header.has_flag(FrameHeaderFlag::Encryption) {
            let _ = readable.u8()?;
            extra_size = extra_size + 1;
        }

        if frame_header.has_flag(FrameHeaderFlag::DataLength) {
            let _ = readable.synchsafe()?;
            extra_size = extra_size + 4;
        }

        if frame_header.size < extra_size {
            return Err(ParsingError::BadData(format!("frame '{}' is smaller than its flag \
                                                      data",
                                                     frame_header.id)));
        }

        let mut body_bytes = readable.bytes((frame_header.size - extra_size) as usize)?;

        if frame_header.has_flag(FrameHeaderFlag::Unsynchronisation) {
            debug!("'{}' is unsynchronised", frame_header.id);

            let len = util::to_synchronize(&mut body_bytes);
            body_bytes.truncate(len);
        }

        let flags = FrameFlags::from_header_v4(&frame_header);

        let frame_body = if flags.compression || flags.encryption {
            debug!("'{}' is kept as raw bytes", frame_header.id);

            FrameBody::SKIP(frame_header.id.clone(), body_bytes)
        } else {
            let frame_readable = Readable::new(Cursor::new(body_bytes));
            util::id_to_frame_body(frame_header.id.as_str(), 4, frame_readable)?
        };

        Ok(Frame::with_flags(frame_body, flags))
    }
}

///
/// # Encode options
///
/// `version: None` means "pick the highest version every frame and option
/// supports". `text_encoding: Some(..)` replaces the text encoding of every
/// encoding carrying frame; `None` keeps what each frame carries, which is
/// what makes a decode then encode round trip byte exact.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodeOptions {
    pub version: Option<u8>,
    pub text_encoding: Option<TextEncoding>,
    pub unsynchronisation: bool,
    pub experimental: bool,
    pub tag_is_an_update: bool,
    pub crc_data: Option<u32>,
    pub tag_restrictions: Option<TagRestrictions>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            version: None,
            text_encoding: None,
            unsynchronisation: false,
            experimental: false,
            tag_is_an_update: false,
            crc_data: None,
            tag_restrictions: None,
        }
    }
}

impl EncodeOptions {
    ///
    /// The per version defaults: ISO-8859-1 text for V2.2 and V2.3, UTF-8
    /// for V2.4, every boolean cleared.
    ///
    pub fn default_for(version: u8) -> Self {
        let mut options = EncodeOptions::default();
        options.version = Some(version);
        options.text_encoding = Some(util::default_text_encoding(version));

        options
    }
}

///
/// # Tag writer
///
/// Encodes a frame list into a complete tag. Version selection, the frame
/// stream, the optional extended header and the tag header are assembled
/// here.
///
pub struct MetadataWriter {
    options: EncodeOptions,
}

impl MetadataWriter {
    pub fn new(options: EncodeOptions) -> Self {
        MetadataWriter { options: options }
    }

    pub fn write(&self, frames: Vec<Frame>) -> result::Result<Vec<u8>, WriteError> {
        let frames = self.apply_text_encoding(frames);
        let version = self.select_version(&frames)?;

        debug!("writing ID3v2.{}", version);

        let mut frame_stream = Writable::new(Cursor::new(vec![]));
        for frame in &frames {
            frame_stream.write(&self.frame(frame, version)?)?;
        }

        let mut frame_bytes = Vec::new();
        frame_stream.copy(&mut frame_bytes)?;

        if self.options.unsynchronisation {
            frame_bytes = util::to_unsynchronize(&frame_bytes);
        }

        let extended_bytes = match self.extended_head(version) {
            Some(extended) => {
                let mut writable = Writable::new(Cursor::new(vec![]));
                extended.write(&mut writable, version)?;

                let mut buf = Vec::new();
                writable.copy(&mut buf)?;
                buf
            }
            None => vec![],
        };

        let mut head = Head {
            version: version,
            minor_version: 0,
            flag: 0,
            size: (extended_bytes.len() + frame_bytes.len()) as u32,
        };
        if self.options.unsynchronisation {
            head.set_flag(HeadFlag::Unsynchronisation);
        }
        if !extended_bytes.is_empty() {
            head.set_flag(HeadFlag::ExtendedHeader);
        }
        if self.options.experimental {
            head.set_flag(HeadFlag::ExperimentalIndicator);
        }

        let mut writable = Writable::new(Cursor::new(vec![]));
        head.write(&mut writable)?;
        writable.write(&extended_bytes)?;
        writable.write(&frame_bytes)?;

        let mut buf = Vec::new();
        writable.copy(&mut buf)?;

        Ok(buf)
    }

    ///
    /// Extended header presence: never for V2.2, V2.3 when CRC data was
    /// supplied, V2.4 when any of the update flag, CRC data or restrictions
    /// was supplied.
    ///
    fn extended_head(&self, version: u8) -> Option<ExtendedHead> {
        let required = match version {
            3 => self.options.crc_data.is_some(),
            4 => {
                self.options.tag_is_an_update || self.options.crc_data.is_some() ||
                self.options.tag_restrictions.is_some()
            }
            _ => false,
        };

        if !required {
            return None;
        }

        Some(ExtendedHead {
            size: 0,
            padding_size: 0,
            tag_is_an_update: version == 4 && self.options.tag_is_an_update,
            crc: self.options.crc_data,
            restrictions: if version == 4 {
                self.options.tag_restrictions.clone()
            } else {
                None
            },
        })
    }

    fn apply_text_encoding(&self, frames: Vec<Frame>) -> Vec<Frame> {
        let text_encoding = match self.options.text_encoding {
            Some(ref text_encoding) => text_encoding.clone(),
            None => return frames,
        };

        frames.into_iter()
            .map(|mut frame| {
                frame.body.set_text_encoding(&text_encoding);
                frame
            })
            .collect()
    }

    ///
    /// Pick the target version: verify the pinned one, or try 4, 3, 2 in
    /// order. Every failure reason is aggregated.
    ///
    fn select_version(&self, frames: &[Frame]) -> result::Result<u8, WriteError> {
        if let Some(version) = self.options.version {
            if version != 2 && version != 3 && version != 4 {
                return Err(WriteError::BadInput(format!("unknown ID3v2 version {}", version)));
            }

            let reasons = self.version_reasons(frames, version);
            if reasons.is_empty() {
                return Ok(version);
            }
            return Err(WriteError::Unsupported(reasons));
        }

        let mut all_reasons = Vec::new();
        for version in &[4u8, 3, 2] {
            let reasons = self.version_reasons(frames, *version);
            if reasons.is_empty() {
                return Ok(*version);
            }
            for reason in reasons {
                all_reasons.push(format!("ID3v2.{}: {}", version, reason));
            }
        }

        Err(WriteError::Unsupported(all_reasons))
    }

    fn version_reasons(&self, frames: &[Frame], version: u8) -> Vec<String> {
        let mut reasons = Vec::new();

        for frame in frames {
            if let Err(reason) = frame.body.supports_version(version) {
                reasons.push(reason);
            }

            if let Some(ref flags) = frame.flags {
                let id = match frame.body {
                    FrameBody::SKIP(ref id, _) => id.clone(),
                    _ => frame.body.id4().unwrap_or("").to_string(),
                };
                if let Some(reason) = flags.unsupported_reason(id.as_str(), version) {
                    reasons.push(reason);
                }
            }
        }

        if let Some(ref text_encoding) = self.options.text_encoding {
            if !util::encoding_supported_in(text_encoding, version) {
                reasons.push(format!("{:?} text encoding is not supported in ID3v2.{}",
                                     text_encoding,
                                     version));
            }
        }

        match version {
            2 => {
                if self.options.experimental {
                    reasons.push("the experimental flag is not supported in ID3v2.2"
                        .to_string());
                }
                if self.options.crc_data.is_some() {
                    reasons.push("CRC data is not supported in ID3v2.2".to_string());
                }
                if self.options.tag_is_an_update {
                    reasons.push("the update flag is not supported in ID3v2.2".to_string());
                }
                if self.options.tag_restrictions.is_some() {
                    reasons.push("tag restrictions are not supported in ID3v2.2".to_string());
                }
            }
            3 => {
                if self.options.tag_is_an_update {
                    reasons.push("the update flag is not supported in ID3v2.3".to_string());
                }
                if self.options.tag_restrictions.is_some() {
                    reasons.push("tag restrictions are not supported in ID3v2.3".to_string());
                }
            }
            _ => (),
        }

        reasons
    }

    ///
    /// One frame: body, flag data, header, in wire order. The V2.4 data
    /// length indicator carries the body length before unsynchronisation.
    ///
    fn frame(&self, frame: &Frame, version: u8) -> result::Result<Vec<u8>, WriteError> {
        let (id, mut body) = util::frame_body_as_bytes(&frame.body, version)?;
        let flags = match frame.flags {
            Some(ref flags) => flags.clone(),
            None => FrameFlags::default_for(id.as_str()),
        };

        let mut writable = Writable::new(Cursor::new(vec![]));

        match version {
            2 => {
                let frame_header = FrameHeaderV2 {
                    id: id,
                    size: body.len() as u32,
                };
                frame_header.write(&mut writable)?;
                writable.write(&body)?;
            }
            3 => {
                let mut extra: Vec<u8> = Vec::new();
                if flags.grouping_identity {
                    extra.push(0);
                }
                if flags.encryption {
                    extra.push(0);
                }
                if flags.compression {
                    extra.extend_from_slice(&[0, 0, 0, 0]);
                }

                let frame_header = flags.to_header_v3(id, (extra.len() + body.len()) as u32);
                frame_header.write(&mut writable)?;
                writable.write(&extra)?;
                writable.write(&body)?;
            }
            _ => {
                let mut extra = Writable::new(Cursor::new(vec![]));
                if flags.grouping_identity {
                    extra.u8(0)?;
                }
                if flags.encryption {
                    extra.u8(0)?;
                }
                if flags.data_length_indicator {
                    extra.synchsafe(body.len() as u32)?;
                }

                if flags.unsynchronisation {
                    body = util::to_unsynchronize(&body);
                }

                let mut extra_bytes = Vec::new();
                extra.copy(&mut extra_bytes)?;

                let size = (extra_bytes.len() + body.len()) as u32;
                let frame_header = flags.to_header_v4(id, size);
                frame_header.write(&mut writable)?;
                writable.write(&extra_bytes)?;
                writable.write(&body)?;
            }
        }

        let mut buf = Vec::new();
        writable.copy(&mut buf)?;

        Ok(buf)
    }
}
