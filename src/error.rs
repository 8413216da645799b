//! Error definitions shared across the codec.
//! Each type models a specific failure scenario (bit-level I/O, grammar
//! dispatch, primitive decoding); see `ErrorKind` for the closed taxonomy
//! exposed by the public `decode_document`/`encode_document` entry points.
use thiserror_no_std::Error;

#[derive(Debug, Error)]
/// Errors raised during bitwise buffer reads.
pub enum BitReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when required.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}

#[derive(Debug, Error)]
/// Errors raised during bitwise writes into a buffer.
pub enum BitWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Field is too large for the provided type.
    #[error("Cannot write more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when the operation requires it.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}

#[derive(Debug, Error)]
/// Closed error taxonomy for the codec, per the wire-protocol failure model.
/// The first error encountered aborts the current decode/encode call; there is
/// no partial-success contract and no retry inside the codec.
pub enum ErrorKind {
    /// Not enough bits remain to satisfy a read.
    #[error("End of stream: {source}")]
    EndOfStream {
        #[from]
        source: BitReaderError,
    },
    /// Buffer too small to hold the value being written.
    #[error("End of output buffer: {source}")]
    EndOfBuffer {
        #[from]
        source: BitWriterError,
    },
    /// Decoded event code is >= the transition count of the current grammar state.
    #[error("Unknown event code {code} in state with {transitions} transitions")]
    UnknownEventCode { code: u32, transitions: u32 },
    /// Interpreter reached a state id not present in the type's grammar table.
    #[error("Unknown grammar id {id}")]
    UnknownGrammarId { id: u8 },
    /// Second-level (non-schema) EXI event encountered; this profile models no deviations.
    #[error("Unsupported sub-event code {code}")]
    UnsupportedSubEvent { code: u32 },
    /// Terminal element-end slot carried a deviation flag.
    #[error("Deviants are not supported by this profile")]
    DeviantsNotSupported,
    /// String length prefix indicated a string-table reference (wire value < 2).
    #[error("String table values are not supported by this profile")]
    StringValuesNotSupported,
    /// String, binary, or array length/count exceeds the per-field bound.
    #[error("Capacity exceeded: wanted {wanted}, max {max}")]
    CapacityExceeded { wanted: usize, max: usize },
    /// The EXI document header does not match the expected profile.
    #[error("Header mismatch: expected {expected:#04x}, got {got:#04x}")]
    HeaderMismatch { expected: u8, got: u8 },
    /// A variable-length integer's accumulated value overflowed the target width.
    #[error("Variable-length integer overflowed its target width ({bits} bits)")]
    VarIntOverflow { bits: u8 },
}
