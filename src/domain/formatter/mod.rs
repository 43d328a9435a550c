//! Reply formatter: the pure pipeline that turns a raw bot reply string
//! into renderable content nodes. No I/O, no shared state; every call
//! is independent and deterministic, so it is safe to re-run on every
//! render of every message.

mod classify;
mod emphasis;

pub use classify::classify_message;
pub use emphasis::{split_emphasis, EmphasisSegments};
