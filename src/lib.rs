//! `iso15118-exi`: a schema-informed EXI (Efficient XML Interchange) codec
//! for the ISO 15118-2 V2G (Vehicle-to-Grid) application message set, in a
//! `no_std` environment. Given a compact binary EXI stream this crate
//! reconstructs a strongly-typed `V2GMessage` tree; given such a tree it
//! emits a bit-exact EXI stream. The transport layer (V2GTP/TLS framing),
//! session management, and the XML Schema -> grammar-table compiler are
//! external collaborators and out of scope here; see `protocol::messages`
//! for the hand-authored grammar tables this crate assumes were produced by
//! that compiler.
#![no_std]
//==================================================================================
/// Shared value containers for the typed message tree: biased ranged
/// integers, fixed-capacity strings/binary/arrays.
pub mod core;
/// Closed error taxonomy surfaced by `decode_document`/`encode_document`,
/// plus the lower-level bit-reader/bit-writer errors it wraps.
pub mod error;
/// Bit-level I/O, primitive EXI value codecs, and shared grammar bookkeeping.
pub mod infra;
/// The ISO 15118-2 typed message tree, its grammar-shaped `decode`/`encode`
/// methods, and the document-level entry points.
pub mod protocol;
//==================================================================================
