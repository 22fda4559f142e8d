//! Hazel transport: the outermost tagged envelope carried by every UDP
//! datagram, plus the length-tagged sub-frame records that Reliable/None
//! frames carry.

use wirecore::{Cursor, WireError, WireResult};

/// One Hazel sub-frame: `[u16LE length, u8 tag, length bytes]`. Parsing of
/// the payload depends on `tag` and is handled by the sub-message decoder
/// (tags 5/6) or left opaque (any other tag).
pub struct SubFrame<'a> {
    pub tag: u8,
    pub payload: &'a [u8],
}

/// The outermost Hazel envelope.
pub enum HazelFrame<'a> {
    None(Vec<SubFrame<'a>>),
    Reliable { id: u16, subframes: Vec<SubFrame<'a>> },
    Hello { id: u16 },
    Disconnect,
    Ack { id: u16, terminator: u8 },
    /// Fragment reassembly is observed but not decoded further (opaque to this spec).
    Fragment,
    Ping { id: u16 },
}

const TYPE_NONE: u8 = 0;
const TYPE_RELIABLE: u8 = 1;
const TYPE_HELLO: u8 = 8;
const TYPE_DISCONNECT: u8 = 9;
const TYPE_ACK: u8 = 10;
const TYPE_FRAGMENT: u8 = 11;
const TYPE_PING: u8 = 12;

/// Decode one UDP datagram body into a Hazel envelope.
pub fn decode(datagram: &[u8]) -> WireResult<HazelFrame<'_>> {
    let mut cur = Cursor::new(datagram);
    let frame_type = cur.read_u8()?;

    Ok(match frame_type {
        TYPE_NONE => HazelFrame::None(decode_subframes(&mut cur)?),
        TYPE_RELIABLE => {
            let id = cur.read_u16le()?;
            HazelFrame::Reliable { id, subframes: decode_subframes(&mut cur)? }
        }
        TYPE_HELLO => HazelFrame::Hello { id: cur.read_u16le()? },
        TYPE_DISCONNECT => HazelFrame::Disconnect,
        TYPE_ACK => {
            let id = cur.read_u16le()?;
            let terminator = cur.read_u8()?;
            HazelFrame::Ack { id, terminator }
        }
        TYPE_FRAGMENT => HazelFrame::Fragment,
        TYPE_PING => HazelFrame::Ping { id: cur.read_u16le()? },
        other => return Err(WireError::UnknownTag(other)),
    })
}

fn decode_subframes<'a>(cur: &mut Cursor<'a>) -> WireResult<Vec<SubFrame<'a>>> {
    let mut frames = Vec::new();
    while !cur.is_empty() {
        let length = cur.read_u16le()? as usize;
        let tag = cur.read_u8()?;
        let payload = cur.read_bytes(length)?;
        frames.push(SubFrame { tag, payload });
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subframe(tag: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.push(tag);
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn decodes_ping() {
        let datagram = [TYPE_PING, 0x34, 0x12];
        match decode(&datagram).unwrap() {
            HazelFrame::Ping { id } => assert_eq!(id, 0x1234),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn decodes_ack_with_terminator() {
        let datagram = [TYPE_ACK, 0x01, 0x00, 0xff];
        match decode(&datagram).unwrap() {
            HazelFrame::Ack { id, terminator } => {
                assert_eq!(id, 1);
                assert_eq!(terminator, 0xff);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn decodes_reliable_with_subframes() {
        let mut datagram = vec![TYPE_RELIABLE, 0x02, 0x00];
        datagram.extend(subframe(5, &[1, 2, 3]));
        datagram.extend(subframe(6, &[4, 5]));

        match decode(&datagram).unwrap() {
            HazelFrame::Reliable { id, subframes } => {
                assert_eq!(id, 2);
                assert_eq!(subframes.len(), 2);
                assert_eq!(subframes[0].tag, 5);
                assert_eq!(subframes[0].payload, &[1, 2, 3]);
                assert_eq!(subframes[1].tag, 6);
                assert_eq!(subframes[1].payload, &[4, 5]);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn rejects_trailing_partial_record() {
        let mut datagram = vec![TYPE_NONE];
        datagram.extend(subframe(5, &[1, 2, 3]));
        datagram.push(0xff); // one dangling byte, not a full record header
        assert!(decode(&datagram).is_err());
    }

    #[test]
    fn unknown_type_byte_is_an_error_not_a_panic() {
        let datagram = [0x42];
        assert!(decode(&datagram).is_err());
    }
}
