// tunion-rs/libtunion/src/protocol/tlv.rs

//! EMV-style TLV walker for select-application responses.
//!
//! Each level walks its own slice, so a value region can never be read past
//! its declared length. Constructed tags recurse into their value with the
//! depth passed by value; recognized leaf tags are dispatched through
//! [`TAG_HANDLERS`].
//!
//! A constructed tag whose contents fail to decode, or a recognized leaf whose
//! value its handler rejects, is logged and skipped: its siblings still count,
//! and the walk succeeds if any recognized tag decoded anywhere in the tree.
//! A header or length overrunning its slice fails the level, and exceeding
//! [`MAX_TLV_DEPTH`] is never skipped.

use log::{trace, warn};

use crate::card::Message;
use crate::constants::*;
use crate::protocol::{parser, responses};
use crate::types::{Aid, Application};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Where recognized tags land: the session's application descriptor and the
/// caller's message.
pub struct DecodeTarget<'a> {
    pub application: &'a mut Application,
    pub message: &'a mut Message,
}

type TagHandler = fn(&[u8], &mut DecodeTarget<'_>) -> Result<()>;

/// Recognized leaf tags and their decoders.
pub const TAG_HANDLERS: &[(u16, &str, TagHandler)] = &[
    (TAG_AID, "TAG_AID", decode_aid),
    (TAG_APPL_LABEL, "TAG_APPL_LABEL", decode_label),
    (TAG_DF_NAME, "TAG_DF_NAME", decode_df_name),
    (TAG_PRIORITY, "TAG_PRIORITY", decode_priority),
    (TAG_APP_VERSION, "TAG_APP_VERSION", decode_app_version),
    (TAG_APP_META, "TAG_APP_META", decode_app_meta),
];

fn handler_for(tag: u16) -> Option<(&'static str, TagHandler)> {
    TAG_HANDLERS
        .iter()
        .find(|(t, _, _)| *t == tag)
        .map(|(_, name, f)| (*name, *f))
}

fn decode_aid(value: &[u8], target: &mut DecodeTarget<'_>) -> Result<()> {
    target.application.aid = Aid::try_from(value)?;
    Ok(())
}

fn decode_label(value: &[u8], target: &mut DecodeTarget<'_>) -> Result<()> {
    target.application.set_label(value)
}

fn decode_df_name(_value: &[u8], _target: &mut DecodeTarget<'_>) -> Result<()> {
    Ok(())
}

// Empty values leave the field untouched.
fn decode_priority(value: &[u8], target: &mut DecodeTarget<'_>) -> Result<()> {
    if let Some(&b) = value.first() {
        target.application.priority = b;
    }
    Ok(())
}

fn decode_app_version(value: &[u8], target: &mut DecodeTarget<'_>) -> Result<()> {
    if let Some(&b) = value.first() {
        target.message.app_version = b;
    }
    Ok(())
}

fn decode_app_meta(value: &[u8], target: &mut DecodeTarget<'_>) -> Result<()> {
    responses::decode_app_meta(value, target.message)
}

/// Tag and length header of one TLV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    pub tag: u16,
    /// Bit 0x20 of the first tag byte
    pub constructed: bool,
    /// Value length in bytes
    pub len: usize,
    /// Bytes taken by tag and length fields
    pub header_len: usize,
}

/// Parse the header at the start of `data`.
///
/// Low five tag bits all set selects a two-byte tag. A length byte with the
/// top bit set is followed by one byte holding the real length.
pub fn parse_header(data: &[u8]) -> Result<TlvHeader> {
    let truncated = || Error::MalformedTlv(format!("truncated header: {}", bytes_to_hex_spaced(data)));

    let first = *data.first().ok_or_else(truncated)?;
    let (tag, mut i) = if first & 0x1F == 0x1F {
        let second = *data.get(1).ok_or_else(truncated)?;
        trace!(" 2-byte TLV EMV tag: {:X}", u16::from(first) << 8 | u16::from(second));
        (u16::from(first) << 8 | u16::from(second), 2)
    } else {
        trace!(" 1-byte TLV EMV tag: {:X}", first);
        (u16::from(first), 1)
    };

    let mut len = *data.get(i).ok_or_else(truncated)?;
    if len & 0x80 == 0x80 {
        i += 1;
        len = *data.get(i).ok_or_else(truncated)?;
        trace!(" 2-byte TLV length: {}", len);
    } else {
        trace!(" 1-byte TLV length: {}", len);
    }
    i += 1;

    Ok(TlvHeader {
        tag,
        constructed: first & 0x20 == 0x20,
        len: len as usize,
        header_len: i,
    })
}

/// Walk a select response, decoding every recognized tag into `target`.
///
/// Returns how many recognized tags were decoded. A bare `6x xx` status word
/// is reported as [`Error::CardStatus`]; a tree without any recognized tag is
/// [`Error::NoRecognizedTags`].
pub fn decode_tlv(data: &[u8], target: &mut DecodeTarget<'_>) -> Result<usize> {
    match decode_level(data, 0, target)? {
        0 => Err(Error::NoRecognizedTags),
        found => Ok(found),
    }
}

fn decode_level(data: &[u8], depth: usize, target: &mut DecodeTarget<'_>) -> Result<usize> {
    if depth >= MAX_TLV_DEPTH {
        return Err(Error::TlvTooDeep(MAX_TLV_DEPTH));
    }
    parser::check_status(data)?;

    let mut found = 0;
    let mut i = 0;
    while i < data.len() {
        let header = parse_header(&data[i..])?;
        let start = i + header.header_len;
        let value = parser::slice_at(data, start, header.len).map_err(|_| {
            Error::MalformedTlv(format!(
                "tag {:X} declares {} bytes, {} remain",
                header.tag,
                header.len,
                data.len().saturating_sub(start)
            ))
        })?;

        if header.constructed {
            trace!("Constructed TLV {:X}", header.tag);
            match decode_level(value, depth + 1, target) {
                Ok(n) => found += n,
                Err(e @ Error::TlvTooDeep(_)) => return Err(e),
                Err(e) => warn!("Failed to decode response for {:X}: {}", header.tag, e),
            }
        } else if let Some((name, handler)) = handler_for(header.tag) {
            match handler(value, target) {
                Ok(()) => {
                    trace!("found {} {:X}: {}", name, header.tag, bytes_to_hex_spaced(value));
                    found += 1;
                }
                Err(e) => warn!("Failed to decode {} {:X}: {}", name, header.tag, e),
            }
        } else {
            trace!("skipping unrecognized tag {:X}", header.tag);
        }

        i = start + header.len;
    }
    Ok(found)
}
