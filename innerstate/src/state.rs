//! The packet-driven state tracker (§4.5-§4.7): folds decoded sub-messages
//! into a live `NetObjectMap` plus a handful of top-level fields.

use hazelnet::shipstatus::{
    decode_mira_hq_initial, decode_mira_hq_update, decode_polus_initial, decode_polus_update, decode_skeld_initial,
    decode_skeld_update,
};
use hazelnet::{submessage, CntData, GameOptions, HazelFrame, NetClass, RpcOp, RpcPayload, SpawnPrefab, SubFrame};
use indexmap::IndexMap;
use serde::Serialize;
use slog::{debug, o, warn, Logger};
use wirecore::{Cursor, WireResult};

use crate::netobj::{
    CustomNetworkTransform, GameData, MeetingHud, NetObject, NetObjectEntry, PlayerControl, PlayerPhysics,
    PlayerRecord, ShipStatus,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RoundState {
    Lobby,
    Active,
    Meeting,
    Postgame,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatEntry {
    pub player_id: u8,
    pub player_name: String,
    pub is_dead: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoteCastNote {
    pub player_id: u8,
    pub player_name: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MeetingCall {
    pub caller_id: u8,
    pub target_id: Option<u8>,
}

pub struct GameState {
    pub game_options: Option<GameOptions>,
    pub net_obj_map: IndexMap<u32, NetObjectEntry>,
    pub scene: String,
    pub chat_log: Vec<ChatEntry>,
    pub vote_cast_notes: Vec<VoteCastNote>,
    pub last_meeting_call: Option<MeetingCall>,
    pub countdown: Option<u8>,
    log: Logger,
}

impl GameState {
    pub fn new(log: Logger) -> GameState {
        GameState {
            game_options: None,
            net_obj_map: IndexMap::new(),
            scene: "OnlineGame".to_string(),
            chat_log: Vec::new(),
            vote_cast_notes: Vec::new(),
            last_meeting_call: None,
            countdown: None,
            log: log.new(o!()),
        }
    }

    pub fn round_state(&self) -> RoundState {
        if self.live_of_class(NetClass::LobbyBehavior).next().is_some() {
            RoundState::Lobby
        } else if self.scene == "EndGame" {
            RoundState::Postgame
        } else if self.live_of_class(NetClass::MeetingHud).next().is_some() {
            RoundState::Meeting
        } else {
            RoundState::Active
        }
    }

    fn live_of_class(&self, class: NetClass) -> impl Iterator<Item = &NetObjectEntry> {
        self.net_obj_map.values().filter(move |e| !e.dead && e.object.class() == class)
    }

    fn game_data_mut(&mut self) -> Option<&mut GameData> {
        self.net_obj_map.values_mut().find_map(|e| {
            if e.dead {
                return None;
            }
            match &mut e.object {
                NetObject::GameData(gd) => Some(gd),
                _ => None,
            }
        })
    }

    /// Lazily creates a `PlayerRecord` on first reference (§3.3 invariant:
    /// lookup never fails). Returns `None` only if no live GameData object
    /// exists yet to hold it — unreachable on the wire in practice, logged
    /// defensively rather than panicking.
    pub fn get_game_data_player(&mut self, player_id: u8) -> Option<&mut PlayerRecord> {
        let log = self.log.clone();
        let gd = match self.game_data_mut() {
            Some(gd) => gd,
            None => {
                warn!(log, "no live GameData object to resolve player"; "player_id" => player_id);
                return None;
            }
        };
        if !gd.players.iter().any(|p| p.player_id == player_id) {
            debug!(log, "lazily creating PlayerInfo"; "player_id" => player_id);
            gd.players.push(PlayerRecord::new(player_id));
        }
        gd.players.iter_mut().find(|p| p.player_id == player_id)
    }

    fn player_control_id(&self, net_id: u32) -> Option<u8> {
        match &self.net_obj_map.get(&net_id)?.object {
            NetObject::PlayerControl(pc) => Some(pc.player_id),
            _ => None,
        }
    }

    /// PlayerPhysics resolves its owning PlayerControl at `net_id - 1`
    /// (§3.3, §9 "inter-object references").
    fn player_id_via_physics_sibling(&self, physics_net_id: u32) -> Option<u8> {
        let control_id = physics_net_id.checked_sub(1)?;
        self.player_control_id(control_id)
    }

    fn reset(&mut self) {
        debug!(self.log, "resetting state");
        self.net_obj_map.clear();
        self.game_options = None;
    }

    /// Process one Hazel datagram body. Returns `true` iff at least one
    /// recognized game-layer sub-message was found (§6.1).
    pub fn process_datagram(&mut self, bytes: &[u8]) -> bool {
        let frame = match hazelnet::decode_frame(bytes) {
            Ok(f) => f,
            Err(e) => {
                debug!(self.log, "datagram failed to parse at hazel layer"; "error" => %e);
                return false;
            }
        };

        let subframes: &[SubFrame] = match &frame {
            HazelFrame::None(s) | HazelFrame::Reliable { subframes: s, .. } => s,
            _ => return false,
        };

        let mut handled_any = false;
        for subframe in subframes {
            let envelope = match submessage::decode_envelope(subframe) {
                Ok(Some(e)) => e,
                Ok(None) => continue,
                Err(e) => {
                    debug!(self.log, "sub-frame failed to parse"; "error" => %e, "tag" => subframe.tag);
                    continue;
                }
            };
            for message in envelope.messages {
                if self.process_game_message(message.tag, message.payload) {
                    handled_any = true;
                }
            }
        }
        handled_any
    }

    fn process_game_message(&mut self, tag: u8, payload: &[u8]) -> bool {
        match tag {
            submessage::MSG_SPAWN => {
                self.handle_spawn(payload);
                true
            }
            submessage::MSG_DESPAWN => {
                self.handle_despawn(payload);
                true
            }
            submessage::MSG_DATA_UPDATE => {
                self.handle_data_update(payload);
                true
            }
            submessage::MSG_RPC => {
                self.handle_rpc(payload);
                true
            }
            submessage::MSG_CHANGE_SCENE => {
                self.handle_change_scene(payload);
                true
            }
            submessage::MSG_MARK_READY => {
                // Accepted and discarded (§4.7) — parsed only so truncation
                // still surfaces as a log, never a panic.
                if let Err(e) = hazelnet::spawn::decode_mark_ready(payload) {
                    debug!(self.log, "mark ready failed to parse"; "error" => %e);
                }
                true
            }
            other => {
                debug!(self.log, "unknown game sub-message tag"; "tag" => other);
                false
            }
        }
    }

    fn handle_spawn(&mut self, payload: &[u8]) {
        let spawn = match hazelnet::spawn::decode_spawn(payload) {
            Ok(s) => s,
            Err(e) => {
                debug!(self.log, "spawn failed to parse"; "error" => %e);
                return;
            }
        };
        let prefab = match SpawnPrefab::from_id(spawn.spawnable_id) {
            Some(p) => p,
            None => {
                warn!(self.log, "unknown spawn prefab id"; "spawnable_id" => spawn.spawnable_id);
                return;
            }
        };

        if prefab == SpawnPrefab::LobbyBehavior {
            self.reset();
        }

        let declared = prefab.children();
        if declared.len() != spawn.children.len() {
            warn!(self.log, "spawn child count mismatch";
                "spawnable_id" => spawn.spawnable_id,
                "declared" => declared.len(),
                "observed" => spawn.children.len());
            return;
        }

        for (&class, child) in declared.iter().zip(spawn.children.iter()) {
            if let Some(existing) = self.net_obj_map.get(&child.net_id) {
                if !existing.dead {
                    warn!(self.log, "spawning on top of a live object";
                        "class" => class.name(), "net_id" => child.net_id);
                }
            }
            let object = match self.construct_initial(class, child.msg) {
                Ok(Some(obj)) => obj,
                Ok(None) => continue,
                Err(e) => {
                    warn!(self.log, "initial data decode failed"; "class" => class.name(), "error" => %e);
                    continue;
                }
            };
            self.net_obj_map.insert(child.net_id, NetObjectEntry { net_id: child.net_id, dead: false, object });
        }
    }

    fn construct_initial(&self, class: NetClass, msg: &[u8]) -> WireResult<Option<NetObject>> {
        Ok(match class {
            NetClass::ShipStatusSkeld => Some(NetObject::ShipStatus(ShipStatus::Skeld(decode_skeld_initial(msg)?))),
            NetClass::ShipStatusMiraHq => {
                Some(NetObject::ShipStatus(ShipStatus::MiraHq(decode_mira_hq_initial(msg)?)))
            }
            NetClass::ShipStatusPolus => Some(NetObject::ShipStatus(ShipStatus::Polus(decode_polus_initial(msg)?))),
            NetClass::MeetingHud => {
                let votes = hazelnet::meetinghud::decode_initial(msg)?;
                Some(NetObject::MeetingHud(MeetingHud { votes }))
            }
            NetClass::LobbyBehavior => Some(NetObject::LobbyBehavior),
            NetClass::GameData => {
                let entries = hazelnet::gamedata::decode_game_data_initial(msg)?;
                let players = entries
                    .into_iter()
                    .map(|e| {
                        let mut p = PlayerRecord::new(e.player_id);
                        p.apply_player_info(&e.info);
                        p
                    })
                    .collect();
                Some(NetObject::GameData(GameData { players }))
            }
            NetClass::VoteBanSystem => Some(NetObject::VoteBanSystem),
            NetClass::PlayerControl => {
                // Initial layout is `[is_new, player_id]`; `is_new` is parsed
                // and discarded (only `player_id` is mirrored).
                if msg.len() < 2 {
                    None
                } else {
                    let player_id = msg[1];
                    Some(NetObject::PlayerControl(PlayerControl { player_id, medbay_scanner: None }))
                }
            }
            NetClass::PlayerPhysics => {
                // No initial-data decoder exists for this class (§4.4); an
                // empty payload is the expected, supported case.
                if msg.is_empty() {
                    Some(NetObject::PlayerPhysics(PlayerPhysics::default()))
                } else {
                    None
                }
            }
            NetClass::CustomNetworkTransform => {
                let cnt = if msg.is_empty() { CntData::default() } else { hazelnet::gamedata::decode_cnt(msg)? };
                Some(NetObject::CustomNetworkTransform(CustomNetworkTransform {
                    sequence_number: cnt.seq,
                    pos: (cnt.x, cnt.y),
                    vel: (cnt.x_vel, cnt.y_vel),
                }))
            }
        })
    }

    fn handle_despawn(&mut self, payload: &[u8]) {
        let net_id = match hazelnet::spawn::decode_despawn(payload) {
            Ok(id) => id,
            Err(e) => {
                debug!(self.log, "despawn failed to parse"; "error" => %e);
                return;
            }
        };
        match self.net_obj_map.get_mut(&net_id) {
            Some(entry) => entry.dead = true,
            None => warn!(self.log, "despawning net_id that was never spawned"; "net_id" => net_id),
        }
    }

    fn handle_change_scene(&mut self, payload: &[u8]) {
        match hazelnet::spawn::decode_change_scene(payload) {
            Ok(msg) => {
                debug!(self.log, "changing scene"; "scene" => msg.scene);
                self.scene = msg.scene.to_string();
            }
            Err(e) => debug!(self.log, "change scene failed to parse"; "error" => %e),
        }
    }

    fn handle_data_update(&mut self, payload: &[u8]) {
        let mut cur = Cursor::new(payload);
        let net_id = match cur.read_u7v() {
            Ok(v) => v,
            Err(e) => {
                debug!(self.log, "data update failed to parse"; "error" => %e);
                return;
            }
        };
        let rest = cur.rest();

        let class = match self.net_obj_map.get(&net_id) {
            Some(entry) => {
                if entry.dead {
                    warn!(self.log, "data update for tombstoned object"; "net_id" => net_id);
                }
                entry.object.class()
            }
            None => {
                warn!(self.log, "data update for net_id that was never spawned"; "net_id" => net_id);
                return;
            }
        };

        let result = match class {
            NetClass::ShipStatusSkeld => self.update_skeld(net_id, rest),
            NetClass::ShipStatusMiraHq => self.update_mira_hq(net_id, rest),
            NetClass::ShipStatusPolus => self.update_polus(net_id, rest),
            NetClass::MeetingHud => self.update_meeting_hud(net_id, rest),
            NetClass::CustomNetworkTransform => self.update_cnt(net_id, rest),
            _ => {
                warn!(self.log, "no update decoder for class"; "class" => class.name());
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!(self.log, "data update payload failed to parse"; "class" => class.name(), "error" => %e);
        }
    }

    fn update_skeld(&mut self, net_id: u32, payload: &[u8]) -> WireResult<()> {
        let prior = match self.net_obj_map.get(&net_id).map(|e| &e.object) {
            Some(NetObject::ShipStatus(ShipStatus::Skeld(s))) => s.clone(),
            _ => return Ok(()),
        };
        let updated = decode_skeld_update(payload, &prior)?;
        if let Some(e) = self.net_obj_map.get_mut(&net_id) {
            e.object = NetObject::ShipStatus(ShipStatus::Skeld(updated));
        }
        Ok(())
    }

    fn update_mira_hq(&mut self, net_id: u32, payload: &[u8]) -> WireResult<()> {
        let prior = match self.net_obj_map.get(&net_id).map(|e| &e.object) {
            Some(NetObject::ShipStatus(ShipStatus::MiraHq(s))) => s.clone(),
            _ => return Ok(()),
        };
        let updated = decode_mira_hq_update(payload, &prior)?;
        if let Some(e) = self.net_obj_map.get_mut(&net_id) {
            e.object = NetObject::ShipStatus(ShipStatus::MiraHq(updated));
        }
        Ok(())
    }

    fn update_polus(&mut self, net_id: u32, payload: &[u8]) -> WireResult<()> {
        let prior = match self.net_obj_map.get(&net_id).map(|e| &e.object) {
            Some(NetObject::ShipStatus(ShipStatus::Polus(s))) => s.clone(),
            _ => return Ok(()),
        };
        let updated = decode_polus_update(payload, &prior)?;
        if let Some(e) = self.net_obj_map.get_mut(&net_id) {
            e.object = NetObject::ShipStatus(ShipStatus::Polus(updated));
        }
        Ok(())
    }

    fn update_meeting_hud(&mut self, net_id: u32, payload: &[u8]) -> WireResult<()> {
        let updates = hazelnet::meetinghud::decode_update(payload)?;
        if let Some(e) = self.net_obj_map.get_mut(&net_id) {
            if let NetObject::MeetingHud(hud) = &mut e.object {
                for (idx, vote) in updates {
                    let idx = idx as usize;
                    if idx >= hud.votes.len() {
                        hud.votes.resize(idx + 1, Default::default());
                    }
                    hud.votes[idx] = vote;
                }
            }
        }
        Ok(())
    }

    fn update_cnt(&mut self, net_id: u32, payload: &[u8]) -> WireResult<()> {
        let cnt_data = hazelnet::gamedata::decode_cnt(payload)?;
        if let Some(e) = self.net_obj_map.get_mut(&net_id) {
            if let NetObject::CustomNetworkTransform(cnt) = &mut e.object {
                if cnt.accepts(cnt_data.seq) {
                    cnt.sequence_number = cnt_data.seq;
                    cnt.pos = (cnt_data.x, cnt_data.y);
                    cnt.vel = (cnt_data.x_vel, cnt_data.y_vel);
                }
            }
        }
        Ok(())
    }

    fn handle_rpc(&mut self, payload: &[u8]) {
        let mut cur = Cursor::new(payload);
        let net_id = match cur.read_u7v() {
            Ok(v) => v,
            Err(e) => {
                debug!(self.log, "rpc failed to parse"; "error" => %e);
                return;
            }
        };
        let opcode = match cur.read_u8() {
            Ok(v) => v,
            Err(e) => {
                debug!(self.log, "rpc failed to parse"; "error" => %e);
                return;
            }
        };
        let rest = cur.rest();

        let op = match RpcOp::from_opcode(opcode) {
            Some(op) => op,
            None => {
                warn!(self.log, "unknown rpc opcode"; "opcode" => opcode);
                return;
            }
        };

        let rpc_payload = match hazelnet::decode_rpc(op, rest) {
            Ok(p) => p,
            Err(e) => {
                warn!(self.log, "rpc payload failed to parse"; "op" => ?op, "error" => %e);
                return;
            }
        };

        let class = match self.net_obj_map.get(&net_id) {
            Some(entry) => {
                if entry.dead {
                    warn!(self.log, "rpc sent to tombstoned object"; "net_id" => net_id, "op" => ?op);
                }
                entry.object.class()
            }
            None => {
                warn!(self.log, "rpc sent to net_id that was never spawned"; "net_id" => net_id, "op" => ?op);
                return;
            }
        };

        self.dispatch_rpc(net_id, class, op, rpc_payload);
    }

    fn dispatch_rpc(&mut self, net_id: u32, class: NetClass, op: RpcOp, payload: RpcPayload) {
        match class {
            NetClass::PlayerControl => self.dispatch_player_control_rpc(net_id, op, payload),
            NetClass::PlayerPhysics => self.dispatch_player_physics_rpc(net_id, op, payload),
            NetClass::MeetingHud => self.dispatch_meeting_hud_rpc(net_id, op, payload),
            NetClass::GameData => self.dispatch_game_data_rpc(net_id, op, payload),
            NetClass::CustomNetworkTransform => self.dispatch_cnt_rpc(net_id, op, payload),
            NetClass::VoteBanSystem => self.dispatch_vote_ban_rpc(op, payload),
            NetClass::ShipStatusSkeld | NetClass::ShipStatusMiraHq | NetClass::ShipStatusPolus => {
                self.dispatch_ship_status_rpc(op, payload)
            }
            NetClass::LobbyBehavior => {
                warn!(self.log, "rpc has no registered handler for this class"; "class" => class.name(), "op" => ?op)
            }
        }
    }

    fn dispatch_player_control_rpc(&mut self, net_id: u32, op: RpcOp, payload: RpcPayload) {
        let player_id = match self.player_control_id(net_id) {
            Some(id) => id,
            None => return,
        };
        match payload {
            RpcPayload::SetName { name } => {
                if let Some(p) = self.get_game_data_player(player_id) {
                    p.name = name;
                }
            }
            RpcPayload::SetColor { color } => {
                if let Some(p) = self.get_game_data_player(player_id) {
                    p.color_id = color;
                }
            }
            RpcPayload::SetHat { hat_id } => {
                if let Some(p) = self.get_game_data_player(player_id) {
                    p.hat_id = hat_id;
                }
            }
            RpcPayload::SetSkin { skin_id } => {
                if let Some(p) = self.get_game_data_player(player_id) {
                    p.skin_id = skin_id;
                }
            }
            RpcPayload::SetPet { pet_id } => {
                if let Some(p) = self.get_game_data_player(player_id) {
                    p.pet_id = pet_id;
                }
            }
            RpcPayload::CompleteTask { task_id } => {
                if let Some(p) = self.get_game_data_player(player_id) {
                    if let Some(t) = p.tasks.iter_mut().find(|t| t.task_id == task_id) {
                        t.task_done = true;
                    }
                }
            }
            RpcPayload::MurderPlayer { target_net_id } => match self.player_control_id(target_net_id) {
                Some(target_player_id) => {
                    if let Some(p) = self.get_game_data_player(target_player_id) {
                        p.is_dead = true;
                    }
                }
                None => warn!(self.log, "murder target has no resolvable PlayerControl"; "target_net_id" => target_net_id),
            },
            RpcPayload::GameOptions(opts) => self.game_options = Some(opts),
            RpcPayload::AddChat { message } => {
                let (name, is_dead) = self
                    .get_game_data_player(player_id)
                    .map(|p| (p.name.clone(), p.is_dead))
                    .unwrap_or_else(|| ("???".to_string(), false));
                self.chat_log.push(ChatEntry { player_id, player_name: name, is_dead, message });
            }
            RpcPayload::AddChatNote { src_player_id, note_id } => {
                if note_id == 0x00 {
                    if let Some(p) = self.get_game_data_player(src_player_id) {
                        let player_name = p.name.clone();
                        self.vote_cast_notes.push(VoteCastNote { player_id: src_player_id, player_name });
                    }
                }
            }
            RpcPayload::ReportDeadBody { who } | RpcPayload::StartMeeting { who } => {
                self.last_meeting_call = Some(MeetingCall { caller_id: player_id, target_id: who });
            }
            RpcPayload::SetScanner { on, scanner_id } => {
                if let Some(entry) = self.net_obj_map.get_mut(&net_id) {
                    if let NetObject::PlayerControl(pc) = &mut entry.object {
                        pc.medbay_scanner = Some((scanner_id, on));
                    }
                }
            }
            RpcPayload::GameCountdown { countdown, .. } => {
                self.countdown = if countdown == 0xFF { None } else { Some(countdown) };
            }
            RpcPayload::PlayAnimation { .. }
            | RpcPayload::SetInfected { .. }
            | RpcPayload::CheckName { .. }
            | RpcPayload::CheckColor { .. }
            | RpcPayload::Exiled => {
                // Observation-only: present in the closed opcode set but
                // has no effect on the mirror.
            }
            other => warn!(self.log, "rpc not valid for PlayerControl"; "op" => ?op, "payload" => ?other),
        }
    }

    fn dispatch_player_physics_rpc(&mut self, net_id: u32, op: RpcOp, payload: RpcPayload) {
        match payload {
            RpcPayload::EnterVent { .. } => match self.player_id_via_physics_sibling(net_id) {
                Some(_) => self.set_in_vent(net_id, true),
                None => warn!(self.log, "PlayerPhysics sibling lookup failed, skipping rpc"; "net_id" => net_id, "op" => ?op),
            },
            RpcPayload::ExitVent { .. } => match self.player_id_via_physics_sibling(net_id) {
                Some(_) => self.set_in_vent(net_id, false),
                None => warn!(self.log, "PlayerPhysics sibling lookup failed, skipping rpc"; "net_id" => net_id, "op" => ?op),
            },
            other => warn!(self.log, "rpc not valid for PlayerPhysics"; "op" => ?op, "payload" => ?other),
        }
    }

    fn set_in_vent(&mut self, net_id: u32, in_vent: bool) {
        if let Some(entry) = self.net_obj_map.get_mut(&net_id) {
            if let NetObject::PlayerPhysics(phys) = &mut entry.object {
                phys.in_vent = in_vent;
            }
        }
    }

    fn dispatch_meeting_hud_rpc(&mut self, net_id: u32, op: RpcOp, payload: RpcPayload) {
        match payload {
            RpcPayload::CastVote { src_player_id, suspect_player_id } => {
                // Observational only (§4.7): resolves names but mutates
                // nothing beyond the lazy-create side effect.
                self.get_game_data_player(src_player_id);
                if let Some(suspect) = suspect_player_id {
                    self.get_game_data_player(suspect);
                }
            }
            RpcPayload::VotingComplete { exiled_player_id, tie, .. } => {
                if !tie {
                    if let Some(exiled) = exiled_player_id {
                        if let Some(p) = self.get_game_data_player(exiled) {
                            p.is_dead = true;
                        }
                    }
                }
            }
            RpcPayload::CloseMeetingHud => {
                if let Some(entry) = self.net_obj_map.get_mut(&net_id) {
                    entry.dead = true;
                }
            }
            RpcPayload::ClearVote => {}
            other => warn!(self.log, "rpc not valid for MeetingHud"; "op" => ?op, "payload" => ?other),
        }
    }

    fn dispatch_game_data_rpc(&mut self, net_id: u32, op: RpcOp, payload: RpcPayload) {
        match payload {
            RpcPayload::PlayerInfo(entries) => {
                if let Some(entry) = self.net_obj_map.get_mut(&net_id) {
                    if let NetObject::GameData(gd) = &mut entry.object {
                        for (pid, info) in entries {
                            match gd.players.iter_mut().find(|p| p.player_id == pid) {
                                Some(p) => p.apply_player_info(&info),
                                None => {
                                    let mut p = PlayerRecord::new(pid);
                                    p.apply_player_info(&info);
                                    gd.players.push(p);
                                }
                            }
                        }
                    }
                }
            }
            RpcPayload::SetTasks { player_id, task_types } => {
                if let Some(entry) = self.net_obj_map.get_mut(&net_id) {
                    if let NetObject::GameData(gd) = &mut entry.object {
                        if let Some(p) = gd.players.iter_mut().find(|p| p.player_id == player_id) {
                            p.set_task_types(&task_types);
                        }
                    }
                }
            }
            other => warn!(self.log, "rpc not valid for GameData"; "op" => ?op, "payload" => ?other),
        }
    }

    fn dispatch_cnt_rpc(&mut self, net_id: u32, op: RpcOp, payload: RpcPayload) {
        match payload {
            RpcPayload::CntSnapTo { x, y, sequence_number } => {
                if let Some(entry) = self.net_obj_map.get_mut(&net_id) {
                    if let NetObject::CustomNetworkTransform(cnt) = &mut entry.object {
                        if cnt.accepts(sequence_number) {
                            cnt.sequence_number = sequence_number;
                            cnt.pos = (x, y);
                            cnt.vel = (0, 0);
                        }
                    }
                }
            }
            other => warn!(self.log, "rpc not valid for CustomNetworkTransform"; "op" => ?op, "payload" => ?other),
        }
    }

    fn dispatch_vote_ban_rpc(&mut self, op: RpcOp, payload: RpcPayload) {
        match payload {
            RpcPayload::AddVoteBanVote { .. } => {}
            other => warn!(self.log, "rpc not valid for VoteBanSystem"; "op" => ?op, "payload" => ?other),
        }
    }

    fn dispatch_ship_status_rpc(&mut self, op: RpcOp, payload: RpcPayload) {
        match payload {
            RpcPayload::RepairSystem { .. } | RpcPayload::CloseDoorsOfType { .. } => {}
            other => warn!(self.log, "rpc not valid for ShipStatus"; "op" => ?op, "payload" => ?other),
        }
    }
}
