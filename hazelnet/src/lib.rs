//! Hazel transport + InnerNet game-layer wire codec: frame decoding,
//! sub-message framing, and the per-tag payload layouts (§4.2-§4.5 of the
//! observed protocol). This crate is a pure codec — it has no notion of a
//! live game, only of how to turn bytes into typed values and back.

pub mod classes;
pub mod frame;
pub mod gamedata;
pub mod meetinghud;
pub mod rpc;
pub mod shipstatus;
pub mod spawn;
pub mod submessage;

pub use classes::{NetClass, SpawnPrefab};
pub use frame::{decode as decode_frame, HazelFrame, SubFrame};
pub use gamedata::{CntData, GameMap, GameOptions, KillDistance, PlayerInfoData, PlayerInfoEntry, TaskData};
pub use rpc::{decode_rpc, RpcOp, RpcPayload, VoteRecord};
pub use submessage::{decode_envelope, GameEnvelope, GameMessage};
