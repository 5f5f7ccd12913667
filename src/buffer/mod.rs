//! Internal scratch buffer for the read loop.
//!
//! One buffer, growing up to `chunk_size` bytes, is owned by each chunking
//! run and overwritten by every segment. It is an implementation detail and not part
//! of the public API.

mod scratch;

pub(crate) use scratch::ReadBuffer;
