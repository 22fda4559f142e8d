//! Net-object class tags and spawn-prefab -> child-class bindings
//! (AmongUsInnerNetClients / AmongUsInnerNetSpawnPrefabs).

/// A net-object class tag, as carried in spawn child records and data updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetClass {
    ShipStatusSkeld,
    MeetingHud,
    LobbyBehavior,
    GameData,
    VoteBanSystem,
    PlayerControl,
    PlayerPhysics,
    CustomNetworkTransform,
    ShipStatusMiraHq,
    ShipStatusPolus,
}

impl NetClass {
    pub fn from_tag(tag: u8) -> Option<NetClass> {
        Some(match tag {
            0x00 => NetClass::ShipStatusSkeld,
            0x01 => NetClass::MeetingHud,
            0x02 => NetClass::LobbyBehavior,
            0x03 => NetClass::GameData,
            0x04 => NetClass::VoteBanSystem,
            0x05 => NetClass::PlayerControl,
            0x06 => NetClass::PlayerPhysics,
            0x07 => NetClass::CustomNetworkTransform,
            0xf1 => NetClass::ShipStatusMiraHq,
            0xf2 => NetClass::ShipStatusPolus,
            _ => return None,
        })
    }

    pub fn tag(self) -> u8 {
        match self {
            NetClass::ShipStatusSkeld => 0x00,
            NetClass::MeetingHud => 0x01,
            NetClass::LobbyBehavior => 0x02,
            NetClass::GameData => 0x03,
            NetClass::VoteBanSystem => 0x04,
            NetClass::PlayerControl => 0x05,
            NetClass::PlayerPhysics => 0x06,
            NetClass::CustomNetworkTransform => 0x07,
            NetClass::ShipStatusMiraHq => 0xf1,
            NetClass::ShipStatusPolus => 0xf2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NetClass::ShipStatusSkeld => "ShipStatusSkeld",
            NetClass::MeetingHud => "MeetingHud",
            NetClass::LobbyBehavior => "LobbyBehavior",
            NetClass::GameData => "GameData",
            NetClass::VoteBanSystem => "VoteBanSystem",
            NetClass::PlayerControl => "PlayerControl",
            NetClass::PlayerPhysics => "PlayerPhysics",
            NetClass::CustomNetworkTransform => "CustomNetworkTransform",
            NetClass::ShipStatusMiraHq => "ShipStatusMiraHq",
            NetClass::ShipStatusPolus => "ShipStatusPolus",
        }
    }
}

/// A spawn prefab id, bound to an ordered list of child classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPrefab {
    ShipStatusSkeld,
    MeetingHud,
    LobbyBehavior,
    GameData,
    Player,
    ShipStatusMiraHq,
    ShipStatusPolus,
}

impl SpawnPrefab {
    pub fn from_id(id: u32) -> Option<SpawnPrefab> {
        Some(match id {
            0 => SpawnPrefab::ShipStatusSkeld,
            1 => SpawnPrefab::MeetingHud,
            2 => SpawnPrefab::LobbyBehavior,
            3 => SpawnPrefab::GameData,
            4 => SpawnPrefab::Player,
            5 => SpawnPrefab::ShipStatusMiraHq,
            6 => SpawnPrefab::ShipStatusPolus,
            _ => return None,
        })
    }

    /// The ordered list of child classes this prefab spawns.
    pub fn children(self) -> &'static [NetClass] {
        match self {
            SpawnPrefab::ShipStatusSkeld => &[NetClass::ShipStatusSkeld],
            SpawnPrefab::MeetingHud => &[NetClass::MeetingHud],
            SpawnPrefab::LobbyBehavior => &[NetClass::LobbyBehavior],
            SpawnPrefab::GameData => &[NetClass::GameData, NetClass::VoteBanSystem],
            SpawnPrefab::Player => {
                &[NetClass::PlayerControl, NetClass::PlayerPhysics, NetClass::CustomNetworkTransform]
            }
            SpawnPrefab::ShipStatusMiraHq => &[NetClass::ShipStatusMiraHq],
            SpawnPrefab::ShipStatusPolus => &[NetClass::ShipStatusPolus],
        }
    }
}
