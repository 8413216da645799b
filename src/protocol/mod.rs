//! The ISO 15118-2 typed message tree (Component D) and document-level
//! dispatch (the root-element half of Component C).
//!
//! - [`types`] holds the schema's simple types (enumerations, ranged
//!   newtypes) and the handful of complex types shared by several messages
//!   (`PhysicalValue`, `DcEvStatus`, `CertificateChain`, ...).
//! - [`messages`] holds one module per request/response pair, the `Body`
//!   discriminated union, and the `Header`.
//! - [`document`] is the single entry point pair (`decode_document`/
//!   `encode_document`) and the root-element dispatch described in
//!   spec.md §4.3 ("Root dispatch").
pub mod document;
pub mod messages;
pub mod types;
