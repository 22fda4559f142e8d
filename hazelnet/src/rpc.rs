//! RPC opcode table (§4.4): the closed 0x00-0x1E set, each paired with its
//! payload layout.

use crate::gamedata::{decode_player_info, GameOptions, PlayerInfoData};
use serde::Serialize;
use wirecore::{BitReader, Cursor, WireResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcOp {
    PlayAnimation,
    CompleteTask,
    GameOptions,
    SetInfected,
    Exiled,
    CheckName,
    SetName,
    CheckColor,
    SetColor,
    SetHat,
    SetSkin,
    ReportDeadBody,
    MurderPlayer,
    AddChat,
    StartMeeting,
    SetScanner,
    AddChatNote,
    SetPet,
    GameCountdown,
    EnterVent,
    ExitVent,
    CntSnapTo,
    CloseMeetingHud,
    VotingComplete,
    CastVote,
    ClearVote,
    AddVoteBanVote,
    CloseDoorsOfType,
    RepairSystem,
    SetTasks,
    PlayerInfo,
}

impl RpcOp {
    pub fn from_opcode(op: u8) -> Option<RpcOp> {
        use RpcOp::*;
        Some(match op {
            0x00 => PlayAnimation,
            0x01 => CompleteTask,
            0x02 => GameOptions,
            0x03 => SetInfected,
            0x04 => Exiled,
            0x05 => CheckName,
            0x06 => SetName,
            0x07 => CheckColor,
            0x08 => SetColor,
            0x09 => SetHat,
            0x0A => SetSkin,
            0x0B => ReportDeadBody,
            0x0C => MurderPlayer,
            0x0D => AddChat,
            0x0E => StartMeeting,
            0x0F => SetScanner,
            0x10 => AddChatNote,
            0x11 => SetPet,
            0x12 => GameCountdown,
            0x13 => EnterVent,
            0x14 => ExitVent,
            0x15 => CntSnapTo,
            0x16 => CloseMeetingHud,
            0x17 => VotingComplete,
            0x18 => CastVote,
            0x19 => ClearVote,
            0x1A => AddVoteBanVote,
            0x1B => CloseDoorsOfType,
            0x1C => RepairSystem,
            0x1D => SetTasks,
            0x1E => PlayerInfo,
            _ => return None,
        })
    }
}

/// A fully decoded vote byte: `[dead:1, has_voted:1, was_reporter:1,
/// reserved:1, voted_for:4]`. `voted_for` is unbiased here (-1..14).
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct VoteRecord {
    pub is_dead: bool,
    pub has_voted: bool,
    pub was_reporter: bool,
    pub voted_for: i8,
}

pub fn decode_vote_byte(byte: u8) -> VoteRecord {
    let mut bits = BitReader::new(byte);
    let is_dead = bits.read_bool();
    let has_voted = bits.read_bool();
    let was_reporter = bits.read_bool();
    bits.read(1); // reserved
    let voted_for_wire = bits.read(4);
    VoteRecord { is_dead, has_voted, was_reporter, voted_for: voted_for_wire as i8 - 1 }
}

#[derive(Debug)]
pub enum RpcPayload {
    PlayAnimation { id: u8 },
    CompleteTask { task_id: u32 },
    GameOptions(GameOptions),
    SetInfected { player_ids: Vec<u8> },
    Exiled,
    CheckName { name: String },
    SetName { name: String },
    CheckColor { color: u8 },
    SetColor { color: u8 },
    SetHat { hat_id: u32 },
    SetSkin { skin_id: u32 },
    ReportDeadBody { who: Option<u8> },
    MurderPlayer { target_net_id: u32 },
    AddChat { message: String },
    StartMeeting { who: Option<u8> },
    SetScanner { on: bool, scanner_id: u8 },
    AddChatNote { src_player_id: u8, note_id: u8 },
    SetPet { pet_id: u32 },
    GameCountdown { sequence_number: u32, countdown: u8 },
    EnterVent { vent_id: u32 },
    ExitVent { vent_id: u32 },
    CntSnapTo { x: u16, y: u16, sequence_number: u16 },
    CloseMeetingHud,
    VotingComplete { votes: Vec<VoteRecord>, exiled_player_id: Option<u8>, tie: bool },
    CastVote { src_player_id: u8, suspect_player_id: Option<u8> },
    ClearVote,
    AddVoteBanVote { src_client_id: i32, target_client_id: i32 },
    CloseDoorsOfType { door_type_id: u8 },
    RepairSystem { system_id: u8, net_id: u32, amount: u8 },
    SetTasks { player_id: u8, task_types: Vec<u8> },
    PlayerInfo(Vec<(u8, PlayerInfoData)>),
}

fn no_player(id: u8) -> Option<u8> {
    if id == 0xFF {
        None
    } else {
        Some(id)
    }
}

/// Decode one RPC's payload bytes given the opcode already stripped out of
/// the envelope.
pub fn decode_rpc(op: RpcOp, payload: &[u8]) -> WireResult<RpcPayload> {
    let mut cur = Cursor::new(payload);
    Ok(match op {
        RpcOp::PlayAnimation => RpcPayload::PlayAnimation { id: cur.read_u8()? },
        RpcOp::CompleteTask => RpcPayload::CompleteTask { task_id: cur.read_u7v()? },
        RpcOp::GameOptions => {
            let len = cur.read_u7v()? as usize;
            let block = cur.read_bytes(len)?;
            RpcPayload::GameOptions(crate::gamedata::decode_game_options(block)?)
        }
        RpcOp::SetInfected => {
            let n = cur.read_u8()? as usize;
            RpcPayload::SetInfected { player_ids: cur.read_bytes(n)?.to_vec() }
        }
        RpcOp::Exiled => RpcPayload::Exiled,
        RpcOp::CheckName => RpcPayload::CheckName { name: cur.read_short_str()?.to_string() },
        RpcOp::SetName => RpcPayload::SetName { name: cur.read_short_str()?.to_string() },
        RpcOp::CheckColor => RpcPayload::CheckColor { color: cur.read_u8()? },
        RpcOp::SetColor => RpcPayload::SetColor { color: cur.read_u8()? },
        RpcOp::SetHat => RpcPayload::SetHat { hat_id: cur.read_u7v()? },
        RpcOp::SetSkin => RpcPayload::SetSkin { skin_id: cur.read_u7v()? },
        RpcOp::ReportDeadBody => RpcPayload::ReportDeadBody { who: no_player(cur.read_u8()?) },
        RpcOp::MurderPlayer => RpcPayload::MurderPlayer { target_net_id: cur.read_u7v()? },
        RpcOp::AddChat => RpcPayload::AddChat { message: cur.read_short_str()?.to_string() },
        RpcOp::StartMeeting => RpcPayload::StartMeeting { who: no_player(cur.read_u8()?) },
        RpcOp::SetScanner => {
            let on = cur.read_u8()? != 0;
            let scanner_id = cur.read_u8()?;
            RpcPayload::SetScanner { on, scanner_id }
        }
        RpcOp::AddChatNote => {
            let src_player_id = cur.read_u8()?;
            let note_id = cur.read_u8()?;
            RpcPayload::AddChatNote { src_player_id, note_id }
        }
        RpcOp::SetPet => RpcPayload::SetPet { pet_id: cur.read_u7v()? },
        RpcOp::GameCountdown => {
            let sequence_number = cur.read_u7v()?;
            let countdown = cur.read_u8()?;
            RpcPayload::GameCountdown { sequence_number, countdown }
        }
        RpcOp::EnterVent => RpcPayload::EnterVent { vent_id: cur.read_u7v()? },
        RpcOp::ExitVent => RpcPayload::ExitVent { vent_id: cur.read_u7v()? },
        RpcOp::CntSnapTo => {
            let x = cur.read_u16le()?;
            let y = cur.read_u16le()?;
            let sequence_number = cur.read_u16le()?;
            RpcPayload::CntSnapTo { x, y, sequence_number }
        }
        RpcOp::CloseMeetingHud => RpcPayload::CloseMeetingHud,
        RpcOp::VotingComplete => {
            let n = cur.read_u8()? as usize;
            let mut votes = Vec::with_capacity(n);
            for _ in 0..n {
                votes.push(decode_vote_byte(cur.read_u8()?));
            }
            let exiled_player_id = no_player(cur.read_u8()?);
            let tie = cur.read_u8()? != 0;
            RpcPayload::VotingComplete { votes, exiled_player_id, tie }
        }
        RpcOp::CastVote => {
            let src_player_id = cur.read_u8()?;
            let suspect_player_id = no_player(cur.read_u8()?);
            RpcPayload::CastVote { src_player_id, suspect_player_id }
        }
        RpcOp::ClearVote => RpcPayload::ClearVote,
        RpcOp::AddVoteBanVote => {
            let src = cur.read_bytes(4)?;
            let dst = cur.read_bytes(4)?;
            RpcPayload::AddVoteBanVote {
                src_client_id: i32::from_be_bytes([src[0], src[1], src[2], src[3]]),
                target_client_id: i32::from_be_bytes([dst[0], dst[1], dst[2], dst[3]]),
            }
        }
        RpcOp::CloseDoorsOfType => RpcPayload::CloseDoorsOfType { door_type_id: cur.read_u8()? },
        RpcOp::RepairSystem => {
            let system_id = cur.read_u8()?;
            let net_id = cur.read_u7v()?;
            let amount = cur.read_u8()?;
            RpcPayload::RepairSystem { system_id, net_id, amount }
        }
        RpcOp::SetTasks => {
            let player_id = cur.read_u8()?;
            let n = cur.read_u8()? as usize;
            RpcPayload::SetTasks { player_id, task_types: cur.read_bytes(n)?.to_vec() }
        }
        RpcOp::PlayerInfo => {
            let mut entries = Vec::new();
            while !cur.is_empty() {
                let length = cur.read_u16le()? as usize;
                let player_id = cur.read_u8()?;
                let mut body = Cursor::new(cur.read_bytes(length)?);
                entries.push((player_id, decode_player_info(&mut body)?));
            }
            RpcPayload::PlayerInfo(entries)
        }
    })
}
