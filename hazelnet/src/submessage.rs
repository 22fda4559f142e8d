//! Game-layer sub-message framing, carried inside Hazel sub-frames tagged
//! 5 (broadcast to game) or 6 (directed).

use crate::frame::SubFrame;
use wirecore::{Cursor, WireResult};

pub const TAG_BROADCAST: u8 = 5;
pub const TAG_DIRECTED: u8 = 6;

pub const MSG_DATA_UPDATE: u8 = 0x01;
pub const MSG_RPC: u8 = 0x02;
pub const MSG_SPAWN: u8 = 0x04;
pub const MSG_DESPAWN: u8 = 0x05;
pub const MSG_CHANGE_SCENE: u8 = 0x06;
pub const MSG_MARK_READY: u8 = 0x07;

/// One game sub-message: `[u16LE length, u8 tag, length bytes]`.
pub struct GameMessage<'a> {
    pub tag: u8,
    pub payload: &'a [u8],
}

/// The game-id-scoped envelope carried by a broadcast or directed sub-frame.
pub struct GameEnvelope<'a> {
    pub game_id: u32,
    /// Present only for directed (tag 6) sub-frames.
    pub client_id: Option<u32>,
    pub messages: Vec<GameMessage<'a>>,
}

/// Decode the payload of a Hazel sub-frame whose tag is 5 or 6. Returns
/// `Ok(None)` for any other tag — the state tracker skips those as opaque.
pub fn decode_envelope<'a>(subframe: &SubFrame<'a>) -> WireResult<Option<GameEnvelope<'a>>> {
    if subframe.tag != TAG_BROADCAST && subframe.tag != TAG_DIRECTED {
        return Ok(None);
    }

    let mut cur = Cursor::new(subframe.payload);
    let game_id = cur.read_u32le()?;
    let client_id = if subframe.tag == TAG_DIRECTED { Some(cur.read_u7v()?) } else { None };
    let messages = decode_messages(&mut cur)?;

    Ok(Some(GameEnvelope { game_id, client_id, messages }))
}

fn decode_messages<'a>(cur: &mut Cursor<'a>) -> WireResult<Vec<GameMessage<'a>>> {
    let mut messages = Vec::new();
    while !cur.is_empty() {
        let length = cur.read_u16le()? as usize;
        let tag = cur.read_u8()?;
        let payload = cur.read_bytes(length)?;
        messages.push(GameMessage { tag, payload });
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_message(tag: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.push(tag);
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn broadcast_has_no_client_id() {
        let mut payload = vec![0x01, 0x00, 0x00, 0x00]; // game_id = 1
        payload.extend(game_message(MSG_DESPAWN, &[0x07]));
        let subframe = SubFrame { tag: TAG_BROADCAST, payload: &payload };

        let envelope = decode_envelope(&subframe).unwrap().unwrap();
        assert_eq!(envelope.game_id, 1);
        assert!(envelope.client_id.is_none());
        assert_eq!(envelope.messages.len(), 1);
        assert_eq!(envelope.messages[0].tag, MSG_DESPAWN);
    }

    #[test]
    fn directed_has_client_id() {
        let mut payload = vec![0x02, 0x00, 0x00, 0x00, 0x05]; // game_id = 2, client_id = 5 (u7v)
        payload.extend(game_message(MSG_MARK_READY, &[]));
        let subframe = SubFrame { tag: TAG_DIRECTED, payload: &payload };

        let envelope = decode_envelope(&subframe).unwrap().unwrap();
        assert_eq!(envelope.game_id, 2);
        assert_eq!(envelope.client_id, Some(5));
    }

    #[test]
    fn opaque_tag_is_skipped_not_errored() {
        let subframe = SubFrame { tag: 3, payload: &[0xff, 0xff] };
        assert!(decode_envelope(&subframe).unwrap().is_none());
    }
}
