//! Low-level building blocks the protocol layer is built from: bit-level
//! I/O, primitive wire codecs, and the shared grammar-bookkeeping helpers.
pub mod codec;
