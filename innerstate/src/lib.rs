//! Packet-driven state tracker for the Among Us InnerNet wire protocol:
//! folds decoded sub-messages into a live, typed object graph and exposes
//! a structural snapshot of it.

pub mod netobj;
pub mod snapshot;
pub mod state;

pub use netobj::{
    CustomNetworkTransform, GameData, MeetingHud, NetObject, NetObjectEntry, PlayerControl, PlayerPhysics,
    PlayerRecord, ShipStatus, TaskRecord,
};
pub use state::{ChatEntry, GameState, MeetingCall, RoundState, VoteCastNote};
