//! PlayerInfo / GameOptions / GameData / CustomNetworkTransform payload
//! layouts.

use serde::Serialize;
use wirecore::{BitReader, Cursor, WireResult};

#[derive(Debug, Clone, Serialize)]
pub struct TaskData {
    pub task_id: u32,
    pub task_done: bool,
}

fn decode_task(cur: &mut Cursor<'_>) -> WireResult<TaskData> {
    let task_id = cur.read_u7v()?;
    let task_done = cur.read_u8()? != 0;
    Ok(TaskData { task_id, task_done })
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerInfoData {
    pub name: String,
    pub color_id: u8,
    pub hat_id: u32,
    pub pet_id: u32,
    pub skin_id: u32,
    pub is_dead: bool,
    pub is_impostor: bool,
    pub disconnected: bool,
    pub tasks: Vec<TaskData>,
}

/// Parses the `PlayerInfo` body (§3.3): everything after the wrapping
/// `player_id` byte used both by GameData's initial list and by the
/// PLAYER_INFO RPC's per-player sub-messages.
pub fn decode_player_info(cur: &mut Cursor<'_>) -> WireResult<PlayerInfoData> {
    let name = cur.read_short_str()?.to_string();
    let color_id = cur.read_u8()?;
    let hat_id = cur.read_u7v()?;
    let pet_id = cur.read_u7v()?;
    let skin_id = cur.read_u7v()?;

    let flags_byte = cur.read_u8()?;
    let mut bits = BitReader::new(flags_byte);
    bits.read(5); // reserved
    let is_dead = bits.read_bool();
    let is_impostor = bits.read_bool();
    let disconnected = bits.read_bool();

    let task_count = cur.read_u8()? as usize;
    let mut tasks = Vec::with_capacity(task_count);
    for _ in 0..task_count {
        tasks.push(decode_task(cur)?);
    }

    Ok(PlayerInfoData { name, color_id, hat_id, pet_id, skin_id, is_dead, is_impostor, disconnected, tasks })
}

/// A `(player_id, PlayerInfo)` pair as carried by GameData's initial list
/// and by each sub-message of the PLAYER_INFO RPC.
pub struct PlayerInfoEntry {
    pub player_id: u8,
    pub info: PlayerInfoData,
}

pub fn decode_game_data_initial(payload: &[u8]) -> WireResult<Vec<PlayerInfoEntry>> {
    let mut cur = Cursor::new(payload);
    let count = cur.read_u7v()? as usize;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let player_id = cur.read_u8()?;
        let info = decode_player_info(&mut cur)?;
        entries.push(PlayerInfoEntry { player_id, info });
    }
    Ok(entries)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMap {
    Skeld,
    MiraHq,
    Polus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KillDistance {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOptions {
    pub version: u8,
    pub max_players: u8,
    pub keywords: u32,
    pub map: GameMap,
    pub player_speed: f32,
    pub player_vision: f32,
    pub imposter_vision: f32,
    pub kill_cooldown: f32,
    pub common_tasks: u8,
    pub long_tasks: u8,
    pub short_tasks: u8,
    pub emergency_meetings: u32,
    pub imposter_count: u8,
    pub kill_distance: KillDistance,
    pub discussion_time: u32,
    pub voting_time: u32,
    pub is_defaults: bool,
    pub emergency_cooldown: u8,
    pub confirm_ejects: bool,
    pub visual_tasks: bool,
}

pub fn decode_game_options(payload: &[u8]) -> WireResult<GameOptions> {
    let mut cur = Cursor::new(payload);
    Ok(GameOptions {
        version: cur.read_u8()?,
        max_players: cur.read_u8()?,
        keywords: cur.read_u32le()?,
        map: match cur.read_u8()? {
            1 => GameMap::MiraHq,
            2 => GameMap::Polus,
            _ => GameMap::Skeld,
        },
        player_speed: cur.read_f32le()?,
        player_vision: cur.read_f32le()?,
        imposter_vision: cur.read_f32le()?,
        kill_cooldown: cur.read_f32le()?,
        common_tasks: cur.read_u8()?,
        long_tasks: cur.read_u8()?,
        short_tasks: cur.read_u8()?,
        emergency_meetings: cur.read_u32le()?,
        imposter_count: cur.read_u8()?,
        kill_distance: match cur.read_u8()? {
            0 => KillDistance::Short,
            2 => KillDistance::Long,
            _ => KillDistance::Medium,
        },
        discussion_time: cur.read_u32le()?,
        voting_time: cur.read_u32le()?,
        is_defaults: cur.read_u8()? != 0,
        emergency_cooldown: cur.read_u8()?,
        confirm_ejects: cur.read_u8()? != 0,
        visual_tasks: cur.read_u8()? != 0,
    })
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CntData {
    pub seq: u16,
    pub x: u16,
    pub y: u16,
    pub x_vel: i16,
    pub y_vel: i16,
}

/// CustomNetworkTransform's initial and update data share this layout.
pub fn decode_cnt(payload: &[u8]) -> WireResult<CntData> {
    let mut cur = Cursor::new(payload);
    Ok(CntData {
        seq: cur.read_u16le()?,
        x: cur.read_u16le()?,
        y: cur.read_u16le()?,
        x_vel: cur.read_i16le()?,
        y_vel: cur.read_i16le()?,
    })
}
