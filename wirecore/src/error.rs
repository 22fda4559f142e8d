use std::fmt;
use std::io;

/// Error taxonomy for the wire codec and state tracker.
///
/// Most of these are recoverable: the caller that owns the "keep processing
/// the rest of the datagram" policy (frame loop, spawn-child loop, RPC
/// dispatch) logs the error and moves on rather than propagating it out of
/// `process_datagram`.
#[derive(Debug)]
pub enum WireError {
    /// End of buffer reached before a varint's continuation bit cleared.
    TruncatedVarint,
    /// A varint consumed more than 5 bytes without terminating.
    OverlongVarint,
    /// A frame or sub-frame's declared length didn't fit in the remaining buffer.
    TruncatedFrame,
    /// Trailing bytes after the last well-formed record in a frame.
    TrailingBytes,
    /// A tag byte isn't bound to any decoder in the relevant registration table.
    UnknownTag(u8),
    /// A net-object class tag isn't bound to a dataclass in the registry.
    UnknownClass(u8),
    /// A class is known but has no decoder registered for this context (initial/update).
    MissingDecoder,
    /// An RPC or sibling lookup referenced a net_id never observed.
    ReferenceMissing(u32),
    /// An update or RPC targeted a tombstoned (despawned) object.
    AlreadyDead(u32),
    /// A length-prefixed field wasn't valid UTF-8.
    InvalidUtf8,
    Io(io::ErrorKind),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::TruncatedVarint => write!(f, "truncated varint"),
            WireError::OverlongVarint => write!(f, "varint wider than 5 bytes"),
            WireError::TruncatedFrame => write!(f, "frame truncated before declared length"),
            WireError::TrailingBytes => write!(f, "trailing bytes after last frame record"),
            WireError::UnknownTag(tag) => write!(f, "unknown tag 0x{:02x}", tag),
            WireError::UnknownClass(class) => write!(f, "unknown net-object class 0x{:02x}", class),
            WireError::MissingDecoder => write!(f, "no decoder registered for this class/context"),
            WireError::ReferenceMissing(id) => write!(f, "reference to unseen net_id {}", id),
            WireError::AlreadyDead(id) => write!(f, "target net_id {} is already despawned", id),
            WireError::InvalidUtf8 => write!(f, "length-prefixed field was not valid utf-8"),
            WireError::Io(kind) => write!(f, "io error: {:?}", kind),
        }
    }
}

impl std::error::Error for WireError {}

impl From<io::Error> for WireError {
    #[inline]
    fn from(err: io::Error) -> Self {
        WireError::Io(err.kind())
    }
}

pub type WireResult<T> = Result<T, WireError>;
