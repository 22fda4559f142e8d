//! Public boundary (§6). This crate is the only thing an external
//! collaborator — capture loop, voice-chat bot, websocket fan-out — talks
//! to: `Observer::process_datagram` is the inbound surface, `snapshot`/
//! `digest`/`subscribe` are the outbound ones. Everything upstream of this
//! (raw UDP capture, the collaborators themselves) is out of scope (§1).

pub mod config;
pub mod digest;

pub use digest::Digest;
pub use innerstate::RoundState;

use innerstate::GameState;
use serde_json::Value;
use slog::Logger;
use std::sync::Mutex;

/// A subscriber callback, invoked with the post-update digest after any
/// datagram that changed state (§6.2). Subscribers are never unregistered —
/// they live for the `Observer`'s lifetime, matching the process-lifetime
/// collaborators (bot, websocket server) described in §1.
pub type Subscriber = Box<dyn Fn(&Digest) + Send>;

/// Owns the state tracker behind a single mutex (§5: "a single mutex around
/// the state is sufficient; the design assumes no internal suspension
/// points"). Safe to share between a capture thread calling
/// `process_datagram` and any number of reader threads calling `snapshot`
/// or `digest`.
pub struct Observer {
    state: Mutex<GameState>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Observer {
    pub fn new(log: Logger) -> Observer {
        Observer { state: Mutex::new(GameState::new(log)), subscribers: Mutex::new(Vec::new()) }
    }

    /// §6.1: process one raw UDP payload captured on port 22023 (either
    /// direction; decoders are direction-agnostic, §6.4). Returns `true` iff
    /// the datagram contained at least one recognized game-layer
    /// sub-message — never raises, even for malformed input.
    pub fn process_datagram(&self, bytes: &[u8]) -> bool {
        let changed = self.state.lock().expect("state mutex poisoned").process_datagram(bytes);
        if changed {
            self.notify();
        }
        changed
    }

    /// §6.2 / §4.8: the full structural snapshot of the live mirror.
    pub fn snapshot(&self) -> Value {
        let state = self.state.lock().expect("state mutex poisoned");
        innerstate::snapshot::snapshot(&state)
    }

    /// §6.2: the coarse digest of interest, without the cost of a full
    /// structural export.
    pub fn digest(&self) -> Digest {
        let state = self.state.lock().expect("state mutex poisoned");
        Digest::from_state(&state)
    }

    /// Register a change-subscription callback (§6.2). Invoked synchronously
    /// from whichever thread called `process_datagram`; a slow subscriber
    /// therefore delays the caller — collaborators needing async fan-out
    /// (the websocket server) are expected to hand the digest off to their
    /// own queue rather than block here.
    pub fn subscribe(&self, callback: Subscriber) {
        self.subscribers.lock().expect("subscribers mutex poisoned").push(callback);
    }

    fn notify(&self) {
        let digest = self.digest();
        for callback in self.subscribers.lock().expect("subscribers mutex poisoned").iter() {
            callback(&digest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn test_logger() -> Logger {
        slog::Logger::root(slog::Discard, slog::o!())
    }

    fn subframe(tag: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.push(tag);
        out.extend_from_slice(payload);
        out
    }

    fn game_message(tag: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        out.push(tag);
        out.extend_from_slice(payload);
        out
    }

    fn change_scene_datagram(scene: &str) -> Vec<u8> {
        let mut msg = vec![0u8]; // client_id (u7v)
        msg.push(scene.len() as u8);
        msg.extend_from_slice(scene.as_bytes());
        let mut broadcast_payload = vec![1u8, 0, 0, 0]; // game_id = 1
        broadcast_payload.extend(game_message(0x06 /* MSG_CHANGE_SCENE */, &msg));
        let mut datagram = vec![0u8]; // HazelFrame::None
        datagram.extend(subframe(5 /* TAG_BROADCAST */, &broadcast_payload));
        datagram
    }

    #[test]
    fn process_datagram_returns_false_for_ping() {
        let observer = Observer::new(test_logger());
        assert!(!observer.process_datagram(&[12, 0x01, 0x00])); // Ping id=1
    }

    #[test]
    fn process_datagram_returns_true_and_updates_scene() {
        let observer = Observer::new(test_logger());
        let datagram = change_scene_datagram("EndGame");
        assert!(observer.process_datagram(&datagram));
        assert_eq!(observer.digest().scene, "EndGame");
        assert_eq!(observer.snapshot()["scene"], "EndGame");
    }

    #[test]
    fn subscribers_are_notified_once_per_state_change() {
        let observer = Observer::new(test_logger());
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_callback = calls.clone();
        observer.subscribe(Box::new(move |_digest| {
            calls_in_callback.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(!observer.process_datagram(&[12, 0x01, 0x00])); // Ping: no change, no notify
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        observer.process_datagram(&change_scene_datagram("EndGame"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
