//! End-to-end scenarios built byte-by-byte from raw datagrams, covering the
//! numbered scenarios in spec.md §8. Each datagram is assembled at the
//! Hazel-frame level (type byte + sub-frames) down through the game-message
//! and payload layers, exercising the full decode path rather than calling
//! any per-layer decoder directly.

use innerstate::{GameState, NetObject, RoundState, ShipStatus};
use slog::Discard;
use wirecore::varint::encode_bitset;

fn log() -> slog::Logger {
    slog::Logger::root(Discard, slog::o!())
}

fn u7v(value: u32) -> Vec<u8> {
    let mut out = Vec::new();
    wirecore::varint::encode_u7v(value, &mut out);
    out
}

/// `[u16LE length, u8 tag, payload]` — the shared framing used by Hazel
/// sub-frames, game sub-messages, and spawn child records.
fn framed(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    out.push(tag);
    out.extend_from_slice(payload);
    out
}

/// A Hazel `None` frame carrying one broadcast (tag 5) sub-frame with the
/// given already-framed game sub-messages concatenated inside it.
fn broadcast_datagram(game_id: u32, messages: &[u8]) -> Vec<u8> {
    let mut payload = game_id.to_le_bytes().to_vec();
    payload.extend_from_slice(messages);
    let mut datagram = vec![0u8]; // HazelFrame::None
    datagram.extend(framed(5, &payload));
    datagram
}

fn spawn_message(spawnable_id: u32, owner_id: u32, flags: u8, children: &[(u32, u8, &[u8])]) -> Vec<u8> {
    let mut payload = u7v(spawnable_id);
    payload.extend(u7v(owner_id));
    payload.push(flags);
    payload.extend(u7v(children.len() as u32));
    for &(net_id, tag, msg) in children {
        payload.extend(u7v(net_id));
        payload.extend_from_slice(&(msg.len() as u16).to_le_bytes());
        payload.push(tag);
        payload.extend_from_slice(msg);
    }
    framed(4 /* MSG_SPAWN */, &payload)
}

fn despawn_message(net_id: u32) -> Vec<u8> {
    framed(5 /* MSG_DESPAWN */, &u7v(net_id))
}

fn data_update_message(net_id: u32, body: &[u8]) -> Vec<u8> {
    let mut payload = u7v(net_id);
    payload.extend_from_slice(body);
    framed(1 /* MSG_DATA_UPDATE */, &payload)
}

fn rpc_message(net_id: u32, opcode: u8, body: &[u8]) -> Vec<u8> {
    let mut payload = u7v(net_id);
    payload.push(opcode);
    payload.extend_from_slice(body);
    framed(2 /* MSG_RPC */, &payload)
}

fn player_info_bytes(name: &str, color_id: u8, is_dead: bool) -> Vec<u8> {
    let mut out = vec![name.len() as u8];
    out.extend_from_slice(name.as_bytes());
    out.push(color_id);
    out.extend(u7v(0)); // hat_id
    out.extend(u7v(0)); // pet_id
    out.extend(u7v(0)); // skin_id
    out.push(if is_dead { 0b0000_0100 } else { 0 }); // flags byte
    out.push(0); // task_count
    out
}

fn cnt_bytes(seq: u16, x: u16, y: u16, x_vel: i16, y_vel: i16) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&seq.to_le_bytes());
    out.extend_from_slice(&x.to_le_bytes());
    out.extend_from_slice(&y.to_le_bytes());
    out.extend_from_slice(&x_vel.to_le_bytes());
    out.extend_from_slice(&y_vel.to_le_bytes());
    out
}

#[test]
fn scenario_lobby_spawn_then_color_set() {
    let mut state = GameState::new(log());

    // Spawn LobbyBehavior@7 — resets state (a no-op here) and installs the child.
    let lobby_spawn = spawn_message(2 /* LobbyBehavior prefab */, 0, 0, &[(7, 0x02, &[])]);
    assert!(state.process_datagram(&broadcast_datagram(1, &lobby_spawn)));
    assert_eq!(state.round_state(), RoundState::Lobby);

    // GameData spawns before any player joins, as in a real lobby session.
    let game_data_spawn =
        spawn_message(3 /* GameData prefab */, 0, 0, &[(30, 0x03, &u7v(0)), (31, 0x04, &[])]);
    assert!(state.process_datagram(&broadcast_datagram(1, &game_data_spawn)));

    // Spawn a Player: PlayerControl@20 (player_id=3), PlayerPhysics@21, CNT@22.
    let player_spawn = spawn_message(
        4, /* Player prefab */
        1,
        0x01,
        &[(20, 0x05, &[1, 3]), (21, 0x06, &[]), (22, 0x07, &[])],
    );
    assert!(state.process_datagram(&broadcast_datagram(1, &player_spawn)));

    // RPC SET_COLOR on net_id=20 (the PlayerControl) with color=4.
    let set_color = rpc_message(20, 0x08 /* SET_COLOR */, &[4]);
    assert!(state.process_datagram(&broadcast_datagram(1, &set_color)));

    assert_eq!(state.round_state(), RoundState::Lobby);
    let game_data = state
        .net_obj_map
        .values()
        .find_map(|e| match &e.object {
            NetObject::GameData(gd) => Some(gd),
            _ => None,
        })
        .unwrap();
    let player = game_data.players.iter().find(|p| p.player_id == 3).expect("player 3 lazily created");
    assert_eq!(player.color_id, 4);
}

#[test]
fn scenario_meeting_vote_flow() {
    let mut state = GameState::new(log());

    let game_data_spawn =
        spawn_message(3, 0, 0, &[(30, 0x03, &u7v(0)), (31, 0x04, &[])]);
    assert!(state.process_datagram(&broadcast_datagram(1, &game_data_spawn)));

    // MeetingHud@50 with 3 empty votes (initial: a run of vote bytes, no mask).
    let meeting_spawn = spawn_message(1 /* MeetingHud prefab */, 0, 0, &[(50, 0x01, &[0, 0, 0])]);
    assert!(state.process_datagram(&broadcast_datagram(1, &meeting_spawn)));
    assert_eq!(state.round_state(), RoundState::Meeting);

    let cast_0 = rpc_message(50, 0x18 /* CAST_VOTE */, &[0, 1]);
    assert!(state.process_datagram(&broadcast_datagram(1, &cast_0)));
    let cast_2 = rpc_message(50, 0x18, &[2, 0xFF]);
    assert!(state.process_datagram(&broadcast_datagram(1, &cast_2)));

    let voting_complete = rpc_message(50, 0x17 /* VOTING_COMPLETE */, &[0, 1, 0]);
    assert!(state.process_datagram(&broadcast_datagram(1, &voting_complete)));

    let exiled = state
        .net_obj_map
        .values()
        .find_map(|e| match &e.object {
            NetObject::GameData(gd) => gd.players.iter().find(|p| p.player_id == 1),
            _ => None,
        })
        .expect("player 1 was created via CAST_VOTE suspect resolution");
    assert!(exiled.is_dead);

    assert_eq!(state.round_state(), RoundState::Meeting);
    let close_hud = rpc_message(50, 0x16 /* CLOSE_MEETING_HUD */, &[]);
    assert!(state.process_datagram(&broadcast_datagram(1, &close_hud)));
    assert_eq!(state.round_state(), RoundState::Active);
}

#[test]
fn scenario_custom_network_transform_wrap() {
    let mut state = GameState::new(log());

    let player_spawn = spawn_message(
        4,
        1,
        0x01,
        &[(98, 0x05, &[1, 1]), (99, 0x06, &[]), (100, 0x07, &cnt_bytes(0xFFFE, 1, 1, 0, 0))],
    );
    assert!(state.process_datagram(&broadcast_datagram(1, &player_spawn)));

    let accepted_wrap = data_update_message(100, &cnt_bytes(0x0001, 5, 5, 0, 0));
    assert!(state.process_datagram(&broadcast_datagram(1, &accepted_wrap)));
    let cnt_state = |state: &GameState| -> (u16, (u16, u16)) {
        state
            .net_obj_map
            .get(&100)
            .and_then(|e| match &e.object {
                NetObject::CustomNetworkTransform(cnt) => Some((cnt.sequence_number, cnt.pos)),
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(cnt_state(&state), (0x0001, (5, 5)));

    let second_update = data_update_message(100, &cnt_bytes(0x7FFD, 9, 9, 0, 0));
    assert!(state.process_datagram(&broadcast_datagram(1, &second_update)));
    assert_eq!(cnt_state(&state), (0x7FFD, (9, 9)));

    // Duplicate/stale sequence number: rejected, state unchanged.
    let duplicate = data_update_message(100, &cnt_bytes(0x7FFD, 42, 42, 0, 0));
    state.process_datagram(&broadcast_datagram(1, &duplicate));
    assert_eq!(cnt_state(&state), (0x7FFD, (9, 9)));
}

#[test]
fn scenario_ship_status_polus_update_touches_only_masked_subsystems() {
    let mut state = GameState::new(log());

    let mut initial = Vec::new();
    initial.extend([1u8, 0, 2]); // switch: expected, active, value
    initial.extend(u7v(0)); // med_scan count
    initial.extend(u7v(0)); // security_camera count
    initial.push(0); // hud_override active=false
    initial.push(0); // doors_polus timer count
    initial.extend(vec![0u8; 16]); // doors_polus status
    initial.extend(9.5f32.to_le_bytes()); // sabotage countdown
    initial.extend(30.0f32.to_le_bytes()); // reactor countdown
    initial.extend(u7v(0)); // reactor user count

    let spawn = spawn_message(6 /* ShipStatus_Polus prefab */, 0, 0, &[(200, 0xF2, &initial)]);
    assert!(state.process_datagram(&broadcast_datagram(1, &spawn)));

    let mut mask = Vec::new();
    encode_bitset(&[7, 17], &mut mask);
    let mut update = mask;
    update.extend([9u8, 9, 9]); // new switch values
    update.extend(99.0f32.to_le_bytes()); // new sabotage countdown

    let update_msg = data_update_message(200, &update);
    assert!(state.process_datagram(&broadcast_datagram(1, &update_msg)));

    let status = match &state.net_obj_map.get(&200).unwrap().object {
        NetObject::ShipStatus(ShipStatus::Polus(p)) => p.clone(),
        _ => panic!("expected a Polus ship status"),
    };
    assert_eq!(status.switch.unwrap().value, 9);
    assert_eq!(status.sabotage.unwrap().countdown, 99.0);
    assert_eq!(status.reactor.unwrap().countdown, 30.0); // untouched
    assert_eq!(status.med_scan.unwrap().users.len(), 0); // untouched
}

#[test]
fn scenario_despawn_then_tombstone_reference() {
    let mut state = GameState::new(log());

    let player_spawn =
        spawn_message(4, 1, 0x01, &[(20, 0x05, &[1, 3]), (21, 0x06, &[]), (22, 0x07, &[])]);
    assert!(state.process_datagram(&broadcast_datagram(1, &player_spawn)));

    assert!(state.process_datagram(&broadcast_datagram(1, &despawn_message(21))));
    assert!(state.net_obj_map.get(&21).unwrap().dead);

    let enter_vent = rpc_message(21, 0x13 /* ENTER_VENT */, &u7v(5));
    assert!(state.process_datagram(&broadcast_datagram(1, &enter_vent)));

    match &state.net_obj_map.get(&21).unwrap().object {
        NetObject::PlayerPhysics(phys) => assert!(phys.in_vent),
        _ => panic!("expected PlayerPhysics"),
    }
}

#[test]
fn game_data_player_info_rpc_upserts_by_player_id() {
    let mut state = GameState::new(log());
    let spawn = spawn_message(3, 0, 0, &[(30, 0x03, &u7v(0)), (31, 0x04, &[])]);
    assert!(state.process_datagram(&broadcast_datagram(1, &spawn)));

    let mut body = Vec::new();
    let info = player_info_bytes("Cyan", 5, false);
    body.extend_from_slice(&(info.len() as u16).to_le_bytes());
    body.push(9); // player_id
    body.extend_from_slice(&info);

    let player_info_rpc = rpc_message(30, 0x1E /* PLAYER_INFO */, &body);
    assert!(state.process_datagram(&broadcast_datagram(1, &player_info_rpc)));

    let game_data = match &state.net_obj_map.get(&30).unwrap().object {
        NetObject::GameData(gd) => gd,
        _ => panic!("expected GameData"),
    };
    let player = game_data.players.iter().find(|p| p.player_id == 9).unwrap();
    assert_eq!(player.name, "Cyan");
    assert_eq!(player.color_id, 5);
}
