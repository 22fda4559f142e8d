//! Low-level primitives shared by the InnerNet wire codec and the state
//! tracker: varint encoding, fixed-width little-endian primitives, a
//! truncation-aware read cursor, the error taxonomy, and logging bootstrap.

pub mod error;
pub mod logging;
pub mod primitives;
pub mod varint;

pub use error::{WireError, WireResult};
pub use primitives::{BitReader, BitWriter, Cursor};
