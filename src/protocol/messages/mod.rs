//! Hand-authored grammar tables for the ISO 15118-2 `V2G_Message` tree
//! (spec.md Component D). One module per request/response pair, plus the
//! shared `Header` and the top-level `Body` discriminated union.
//!
//! The grammar compiler that would normally produce these tables from the
//! XML Schema is out of scope (spec.md §1); every `decode`/`encode` method
//! here is a literal, by-hand transcription of its type's DFA, following the
//! `CostType` worked example in spec.md §4.5.
pub mod authorization;
pub mod body;
pub mod cable_check;
pub mod certificate_installation;
pub mod certificate_update;
pub mod charge_parameter_discovery;
pub mod charging_status;
pub mod cost;
pub mod current_demand;
pub mod header;
pub mod metering_receipt;
pub mod payment_details;
pub mod payment_service_selection;
pub mod power_delivery;
pub mod pre_charge;
pub mod service_detail;
pub mod service_discovery;
pub mod session_setup;
pub mod session_stop;
pub mod welding_detection;

pub use body::Body;
pub use header::Header;
