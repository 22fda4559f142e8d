//! Spawn/despawn and scene/ready sub-message payloads.

use wirecore::{Cursor, WireResult};

/// One child record inside a spawn message: `[u7v net_id, u16LE msg_len,
/// u8 tag, msg_len bytes]`.
pub struct ChildRecord<'a> {
    pub net_id: u32,
    pub tag: u8,
    pub msg: &'a [u8],
}

pub struct SpawnMessage<'a> {
    pub spawnable_id: u32,
    pub owner_id: u32,
    pub is_client_character: bool,
    pub children: Vec<ChildRecord<'a>>,
}

pub fn decode_spawn<'a>(payload: &'a [u8]) -> WireResult<SpawnMessage<'a>> {
    let mut cur = Cursor::new(payload);
    let spawnable_id = cur.read_u7v()?;
    let owner_id = cur.read_u7v()?;
    let flags = cur.read_u8()?;
    let is_client_character = flags & 0x01 != 0;
    let child_count = cur.read_u7v()? as usize;

    let mut children = Vec::with_capacity(child_count);
    for _ in 0..child_count {
        let net_id = cur.read_u7v()?;
        let msg_len = cur.read_u16le()? as usize;
        let tag = cur.read_u8()?;
        let msg = cur.read_bytes(msg_len)?;
        children.push(ChildRecord { net_id, tag, msg });
    }

    Ok(SpawnMessage { spawnable_id, owner_id, is_client_character, children })
}

pub fn decode_despawn(payload: &[u8]) -> WireResult<u32> {
    let mut cur = Cursor::new(payload);
    cur.read_u7v()
}

pub struct ChangeSceneMessage<'a> {
    pub client_id: u32,
    pub scene: &'a str,
}

pub fn decode_change_scene(payload: &[u8]) -> WireResult<ChangeSceneMessage<'_>> {
    let mut cur = Cursor::new(payload);
    let client_id = cur.read_u7v()?;
    let scene = cur.read_short_str()?;
    Ok(ChangeSceneMessage { client_id, scene })
}

pub fn decode_mark_ready(payload: &[u8]) -> WireResult<u32> {
    let mut cur = Cursor::new(payload);
    cur.read_u7v()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_spawn_with_two_children() {
        let mut payload = vec![4u8]; // spawnable_id = Player (u7v)
        payload.push(1); // owner_id
        payload.push(0x01); // flags: is_client_character
        payload.push(2); // children_cnt

        // child 1: net_id=20, tag=5 (opaque here), msg=[3]
        payload.push(20);
        payload.extend_from_slice(&1u16.to_le_bytes());
        payload.push(5);
        payload.push(3);

        // child 2: net_id=21, tag=6, msg=[]
        payload.push(21);
        payload.extend_from_slice(&0u16.to_le_bytes());
        payload.push(6);

        let spawn = decode_spawn(&payload).unwrap();
        assert_eq!(spawn.spawnable_id, 4);
        assert_eq!(spawn.owner_id, 1);
        assert!(spawn.is_client_character);
        assert_eq!(spawn.children.len(), 2);
        assert_eq!(spawn.children[0].net_id, 20);
        assert_eq!(spawn.children[0].msg, &[3]);
        assert_eq!(spawn.children[1].net_id, 21);
        assert!(spawn.children[1].msg.is_empty());
    }

    #[test]
    fn decodes_change_scene() {
        let mut payload = vec![7u8];
        let scene = b"EndGame";
        payload.push(scene.len() as u8);
        payload.extend_from_slice(scene);
        let msg = decode_change_scene(&payload).unwrap();
        assert_eq!(msg.client_id, 7);
        assert_eq!(msg.scene, "EndGame");
    }
}
