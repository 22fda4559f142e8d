//! Per-class net-object mirrors (§3.3). One enum variant per class tag;
//! dispatch on class is a `match`, following the closed tagged-union
//! approach the wire codec itself uses for its registration tables.

use hazelnet::shipstatus::{MiraHqStatus, PolusStatus, SkeldStatus};
use hazelnet::NetClass;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TaskRecord {
    pub task_id: u32,
    pub task_done: bool,
    pub task_type: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub player_id: u8,
    pub name: String,
    pub color_id: u8,
    pub hat_id: u32,
    pub pet_id: u32,
    pub skin_id: u32,
    pub is_dead: bool,
    pub is_impostor: bool,
    pub disconnected: bool,
    pub tasks: Vec<TaskRecord>,
}

impl PlayerRecord {
    pub fn new(player_id: u8) -> Self {
        PlayerRecord {
            player_id,
            name: "???".to_string(),
            color_id: 0,
            hat_id: 0,
            pet_id: 0,
            skin_id: 0,
            is_dead: false,
            is_impostor: false,
            disconnected: false,
            tasks: Vec::new(),
        }
    }

    pub fn apply_player_info(&mut self, info: &hazelnet::PlayerInfoData) {
        self.name = info.name.clone();
        self.color_id = info.color_id;
        self.hat_id = info.hat_id;
        self.pet_id = info.pet_id;
        self.skin_id = info.skin_id;
        self.is_dead = info.is_dead;
        self.is_impostor = info.is_impostor;
        self.disconnected = info.disconnected;

        if self.tasks.is_empty() {
            self.tasks = info
                .tasks
                .iter()
                .map(|t| TaskRecord { task_id: t.task_id, task_done: t.task_done, task_type: None })
                .collect();
            return;
        }

        let mut by_id: std::collections::HashMap<u32, usize> =
            self.tasks.iter().enumerate().map(|(i, t)| (t.task_id, i)).collect();
        for incoming in &info.tasks {
            match by_id.get(&incoming.task_id) {
                Some(&idx) => self.tasks[idx].task_done = incoming.task_done,
                None => {
                    by_id.insert(incoming.task_id, self.tasks.len());
                    self.tasks.push(TaskRecord {
                        task_id: incoming.task_id,
                        task_done: incoming.task_done,
                        task_type: None,
                    });
                }
            }
        }
    }

    pub fn set_task_types(&mut self, task_types: &[u8]) {
        if self.tasks.len() != task_types.len() {
            self.tasks = task_types
                .iter()
                .enumerate()
                .map(|(idx, &ty)| TaskRecord { task_id: idx as u32, task_done: false, task_type: Some(ty) })
                .collect();
        } else {
            for (task, &ty) in self.tasks.iter_mut().zip(task_types) {
                task.task_type = Some(ty);
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameData {
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeetingHud {
    pub votes: Vec<hazelnet::VoteRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerControl {
    pub player_id: u8,
    /// Last observed SET_SCANNER call: (scanner id, on/off).
    pub medbay_scanner: Option<(u8, bool)>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct PlayerPhysics {
    pub in_vent: bool,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CustomNetworkTransform {
    pub sequence_number: u16,
    pub pos: (u16, u16),
    pub vel: (i16, i16),
}

impl CustomNetworkTransform {
    /// Forward-half-ring acceptance test (§4.6).
    pub fn accepts(&self, seq: u16) -> bool {
        let s = self.sequence_number;
        let w = s.wrapping_add(0x7FFF);
        if s < w {
            seq > s && seq <= w
        } else {
            !(seq > w && seq <= s)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "map")]
pub enum ShipStatus {
    Skeld(SkeldStatus),
    MiraHq(MiraHqStatus),
    Polus(PolusStatus),
}

#[derive(Debug, Clone, Serialize)]
pub enum NetObject {
    ShipStatus(ShipStatus),
    MeetingHud(MeetingHud),
    LobbyBehavior,
    GameData(GameData),
    VoteBanSystem,
    PlayerControl(PlayerControl),
    PlayerPhysics(PlayerPhysics),
    CustomNetworkTransform(CustomNetworkTransform),
}

impl NetObject {
    pub fn class(&self) -> NetClass {
        match self {
            NetObject::ShipStatus(ShipStatus::Skeld(_)) => NetClass::ShipStatusSkeld,
            NetObject::ShipStatus(ShipStatus::MiraHq(_)) => NetClass::ShipStatusMiraHq,
            NetObject::ShipStatus(ShipStatus::Polus(_)) => NetClass::ShipStatusPolus,
            NetObject::MeetingHud(_) => NetClass::MeetingHud,
            NetObject::LobbyBehavior => NetClass::LobbyBehavior,
            NetObject::GameData(_) => NetClass::GameData,
            NetObject::VoteBanSystem => NetClass::VoteBanSystem,
            NetObject::PlayerControl(_) => NetClass::PlayerControl,
            NetObject::PlayerPhysics(_) => NetClass::PlayerPhysics,
            NetObject::CustomNetworkTransform(_) => NetClass::CustomNetworkTransform,
        }
    }
}

/// An entry in the net-object map: the object plus its tombstone flag.
/// Despawn sets `dead`, never removes the entry (§3.3, §5).
#[derive(Debug, Clone, Serialize)]
pub struct NetObjectEntry {
    pub net_id: u32,
    pub dead: bool,
    pub object: NetObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cnt_accepts_forward_half_ring_from_zero() {
        let cnt = CustomNetworkTransform { sequence_number: 0, ..Default::default() };
        assert!(cnt.accepts(1));
        assert!(cnt.accepts(0x7FFF));
        assert!(!cnt.accepts(0));
        assert!(!cnt.accepts(0x8000));
    }

    #[test]
    fn cnt_accepts_forward_half_ring_near_wrap() {
        let cnt = CustomNetworkTransform { sequence_number: 0xFFFE, ..Default::default() };
        assert!(cnt.accepts(0xFFFF));
        assert!(cnt.accepts(0x0000));
        assert!(cnt.accepts(0x7FFD));
        assert!(!cnt.accepts(0xFFFE));
        assert!(!cnt.accepts(0x7FFE));
    }

    #[test]
    fn cnt_accepts_forward_half_ring_from_mid_ring() {
        let cnt = CustomNetworkTransform { sequence_number: 0x8000, ..Default::default() };
        assert!(cnt.accepts(0x8001));
        assert!(cnt.accepts(0xFFFF));
        assert!(!cnt.accepts(0x8000));
        assert!(!cnt.accepts(0x0000));
    }

    #[test]
    fn set_task_types_replaces_when_count_mismatches() {
        let mut p = PlayerRecord::new(1);
        p.set_task_types(&[2, 5]);
        assert_eq!(p.tasks.len(), 2);
        assert_eq!(p.tasks[1].task_type, Some(5));

        p.set_task_types(&[9, 9]);
        assert_eq!(p.tasks[0].task_type, Some(9));
        assert!(!p.tasks[0].task_done);
    }
}
