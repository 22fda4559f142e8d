//! Structural snapshot export (§4.8). Not a stable wire contract — just a
//! `serde_json::Value` tree built from the current mirror, dead entries
//! excluded and back-references to the root state omitted by construction
//! (each net-object serializes only its own fields).

use serde_json::{json, Value};

use crate::state::GameState;

pub fn snapshot(state: &GameState) -> Value {
    let net_objects: Vec<Value> = state
        .net_obj_map
        .values()
        .filter(|entry| !entry.dead)
        .map(|entry| {
            json!({
                "net_id": entry.net_id,
                "class": entry.object.class().name(),
                "state": entry.object,
            })
        })
        .collect();

    json!({
        "scene": state.scene,
        "round_state": state.round_state(),
        "game_options": state.game_options,
        "chat_log": state.chat_log,
        "vote_cast_notes": state.vote_cast_notes,
        "last_meeting_call": state.last_meeting_call,
        "countdown": state.countdown,
        "net_objects": net_objects,
    })
}
