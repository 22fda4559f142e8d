//! MeetingHud data layouts (§4.4.3).

use crate::rpc::{decode_vote_byte, VoteRecord};
use wirecore::{Cursor, WireResult};

pub fn decode_initial(payload: &[u8]) -> WireResult<Vec<VoteRecord>> {
    let mut cur = Cursor::new(payload);
    let mut votes = Vec::new();
    while !cur.is_empty() {
        votes.push(decode_vote_byte(cur.read_u8()?));
    }
    Ok(votes)
}

/// An update: a bitset-varint index set followed by one vote byte per index,
/// in the order the indices were listed.
pub fn decode_update(payload: &[u8]) -> WireResult<Vec<(u8, VoteRecord)>> {
    let mut cur = Cursor::new(payload);
    let indices = cur.read_bitset()?;
    let mut out = Vec::with_capacity(indices.len());
    for idx in indices {
        out.push((idx, decode_vote_byte(cur.read_u8()?)));
    }
    Ok(out)
}
