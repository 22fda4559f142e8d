//! Per-map ship-status layouts (§4.4.2): a fixed, ordered list of optional
//! sub-systems per map, each gated by a flag-byte index. Initial spawns
//! carry every sub-system in order with no mask; updates are prefixed by a
//! bitset-varint mask and only carry the sub-systems whose index is set.

use serde::Serialize;
use wirecore::{Cursor, WireResult};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Reactor {
    pub countdown: f32,
    pub users: Vec<(u8, u8)>,
}

fn decode_reactor(cur: &mut Cursor<'_>) -> WireResult<Reactor> {
    let countdown = cur.read_f32le()?;
    let n = cur.read_u7v()? as usize;
    let mut users = Vec::with_capacity(n);
    for _ in 0..n {
        let user = cur.read_u8()?;
        let console = cur.read_u8()?;
        users.push((user, console));
    }
    Ok(Reactor { countdown, users })
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Switch {
    pub expected: u8,
    pub active: u8,
    pub value: u8,
}

fn decode_switch(cur: &mut Cursor<'_>) -> WireResult<Switch> {
    Ok(Switch { expected: cur.read_u8()?, active: cur.read_u8()?, value: cur.read_u8()? })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LifeSupport {
    pub countdown: f32,
    pub consoles: Vec<u32>,
}

fn decode_life_support(cur: &mut Cursor<'_>) -> WireResult<LifeSupport> {
    let countdown = cur.read_f32le()?;
    let n = cur.read_u7v()? as usize;
    let mut consoles = Vec::with_capacity(n);
    for _ in 0..n {
        consoles.push(cur.read_u7v()?);
    }
    Ok(LifeSupport { countdown, consoles })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserList {
    pub users: Vec<u8>,
}

fn decode_user_list(cur: &mut Cursor<'_>) -> WireResult<UserList> {
    let n = cur.read_u7v()? as usize;
    Ok(UserList { users: cur.read_bytes(n)?.to_vec() })
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HudOverride {
    pub active: bool,
}

fn decode_hud_override(cur: &mut Cursor<'_>) -> WireResult<HudOverride> {
    Ok(HudOverride { active: cur.read_u8()? != 0 })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HudOverrideMira {
    pub active: Vec<(u8, u8)>,
    pub completed: Vec<u8>,
}

fn decode_hud_override_mira(cur: &mut Cursor<'_>) -> WireResult<HudOverrideMira> {
    let a = cur.read_u7v()? as usize;
    let mut active = Vec::with_capacity(a);
    for _ in 0..a {
        let console = cur.read_u8()?;
        let user = cur.read_u8()?;
        active.push((console, user));
    }
    let c = cur.read_u7v()? as usize;
    let completed = cur.read_bytes(c)?.to_vec();
    Ok(HudOverrideMira { active, completed })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Doors {
    pub open: Vec<u8>,
}

fn decode_doors_initial_skeld(cur: &mut Cursor<'_>) -> WireResult<Doors> {
    Ok(Doors { open: cur.read_bytes(13)?.to_vec() })
}

fn decode_doors_update_skeld(cur: &mut Cursor<'_>) -> WireResult<Doors> {
    let mask = cur.read_bitset()?;
    let open = cur.read_bytes(mask.len())?.to_vec();
    Ok(Doors { open })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DoorsPolus {
    pub timers: Vec<(u8, f32)>,
    pub status: Vec<u8>,
}

fn decode_doors_polus(cur: &mut Cursor<'_>) -> WireResult<DoorsPolus> {
    let n = cur.read_u8()? as usize;
    let mut timers = Vec::with_capacity(n);
    for _ in 0..n {
        let door_id = cur.read_u8()?;
        let timer = cur.read_f32le()?;
        timers.push((door_id, timer));
    }
    let status = cur.read_bytes(16)?.to_vec();
    Ok(DoorsPolus { timers, status })
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Sabotage {
    pub countdown: f32,
}

fn decode_sabotage(cur: &mut Cursor<'_>) -> WireResult<Sabotage> {
    Ok(Sabotage { countdown: cur.read_f32le()? })
}

/// The live mirror of a ship-status net-object: one record per map, with
/// `Option<T>` per sub-system so an update that omits a sub-system leaves
/// its prior value untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkeldStatus {
    pub reactor: Option<Reactor>,
    pub switch: Option<Switch>,
    pub life_support: Option<LifeSupport>,
    pub med_scan: Option<UserList>,
    pub security_camera: Option<UserList>,
    pub hud_override: Option<HudOverride>,
    pub doors: Option<Doors>,
    pub sabotage: Option<Sabotage>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MiraHqStatus {
    pub reactor: Option<Reactor>,
    pub switch: Option<Switch>,
    pub life_support: Option<LifeSupport>,
    pub med_scan: Option<UserList>,
    pub hud_override_mira: Option<HudOverrideMira>,
    pub sabotage: Option<Sabotage>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PolusStatus {
    pub switch: Option<Switch>,
    pub med_scan: Option<UserList>,
    pub security_camera: Option<UserList>,
    pub hud_override: Option<HudOverride>,
    pub doors_polus: Option<DoorsPolus>,
    pub sabotage: Option<Sabotage>,
    pub reactor: Option<Reactor>,
}

fn flag_set(mask: &[u8], index: u8) -> bool {
    mask.contains(&index)
}

pub fn decode_skeld_initial(payload: &[u8]) -> WireResult<SkeldStatus> {
    let mut cur = Cursor::new(payload);
    Ok(SkeldStatus {
        reactor: Some(decode_reactor(&mut cur)?),
        switch: Some(decode_switch(&mut cur)?),
        life_support: Some(decode_life_support(&mut cur)?),
        med_scan: Some(decode_user_list(&mut cur)?),
        security_camera: Some(decode_user_list(&mut cur)?),
        hud_override: Some(decode_hud_override(&mut cur)?),
        doors: Some(decode_doors_initial_skeld(&mut cur)?),
        sabotage: Some(decode_sabotage(&mut cur)?),
    })
}

pub fn decode_skeld_update(payload: &[u8], prior: &SkeldStatus) -> WireResult<SkeldStatus> {
    let mut cur = Cursor::new(payload);
    let mask = cur.read_bitset()?;
    let mut out = prior.clone();
    if flag_set(&mask, 3) {
        out.reactor = Some(decode_reactor(&mut cur)?);
    }
    if flag_set(&mask, 7) {
        out.switch = Some(decode_switch(&mut cur)?);
    }
    if flag_set(&mask, 8) {
        out.life_support = Some(decode_life_support(&mut cur)?);
    }
    if flag_set(&mask, 10) {
        out.med_scan = Some(decode_user_list(&mut cur)?);
    }
    if flag_set(&mask, 11) {
        out.security_camera = Some(decode_user_list(&mut cur)?);
    }
    if flag_set(&mask, 14) {
        out.hud_override = Some(decode_hud_override(&mut cur)?);
    }
    if flag_set(&mask, 16) {
        out.doors = Some(decode_doors_update_skeld(&mut cur)?);
    }
    if flag_set(&mask, 17) {
        out.sabotage = Some(decode_sabotage(&mut cur)?);
    }
    Ok(out)
}

pub fn decode_mira_hq_initial(payload: &[u8]) -> WireResult<MiraHqStatus> {
    let mut cur = Cursor::new(payload);
    Ok(MiraHqStatus {
        reactor: Some(decode_reactor(&mut cur)?),
        switch: Some(decode_switch(&mut cur)?),
        life_support: Some(decode_life_support(&mut cur)?),
        med_scan: Some(decode_user_list(&mut cur)?),
        hud_override_mira: Some(decode_hud_override_mira(&mut cur)?),
        sabotage: Some(decode_sabotage(&mut cur)?),
    })
}

pub fn decode_mira_hq_update(payload: &[u8], prior: &MiraHqStatus) -> WireResult<MiraHqStatus> {
    let mut cur = Cursor::new(payload);
    let mask = cur.read_bitset()?;
    let mut out = prior.clone();
    if flag_set(&mask, 3) {
        out.reactor = Some(decode_reactor(&mut cur)?);
    }
    if flag_set(&mask, 7) {
        out.switch = Some(decode_switch(&mut cur)?);
    }
    if flag_set(&mask, 8) {
        out.life_support = Some(decode_life_support(&mut cur)?);
    }
    if flag_set(&mask, 10) {
        out.med_scan = Some(decode_user_list(&mut cur)?);
    }
    if flag_set(&mask, 14) {
        out.hud_override_mira = Some(decode_hud_override_mira(&mut cur)?);
    }
    if flag_set(&mask, 17) {
        out.sabotage = Some(decode_sabotage(&mut cur)?);
    }
    Ok(out)
}

pub fn decode_polus_initial(payload: &[u8]) -> WireResult<PolusStatus> {
    let mut cur = Cursor::new(payload);
    Ok(PolusStatus {
        switch: Some(decode_switch(&mut cur)?),
        med_scan: Some(decode_user_list(&mut cur)?),
        security_camera: Some(decode_user_list(&mut cur)?),
        hud_override: Some(decode_hud_override(&mut cur)?),
        doors_polus: Some(decode_doors_polus(&mut cur)?),
        sabotage: Some(decode_sabotage(&mut cur)?),
        reactor: Some(decode_reactor(&mut cur)?),
    })
}

pub fn decode_polus_update(payload: &[u8], prior: &PolusStatus) -> WireResult<PolusStatus> {
    let mut cur = Cursor::new(payload);
    let mask = cur.read_bitset()?;
    let mut out = prior.clone();
    if flag_set(&mask, 7) {
        out.switch = Some(decode_switch(&mut cur)?);
    }
    if flag_set(&mask, 10) {
        out.med_scan = Some(decode_user_list(&mut cur)?);
    }
    if flag_set(&mask, 11) {
        out.security_camera = Some(decode_user_list(&mut cur)?);
    }
    if flag_set(&mask, 14) {
        out.hud_override = Some(decode_hud_override(&mut cur)?);
    }
    if flag_set(&mask, 16) {
        out.doors_polus = Some(decode_doors_polus(&mut cur)?);
    }
    if flag_set(&mask, 17) {
        out.sabotage = Some(decode_sabotage(&mut cur)?);
    }
    if flag_set(&mask, 21) {
        out.reactor = Some(decode_reactor(&mut cur)?);
    }
    Ok(out)
}
