//! `ServiceDetailReq`/`ServiceDetailRes`.
use crate::core::{FixedString, FixedVec};
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{ParameterSetId, PhysicalValue, ResponseCode};

/// Maximum number of `Parameter` entries in a `ParameterSet`.
pub const MAX_PARAMETERS: usize = 8;
/// Maximum number of `ParameterSet` entries in a `ParameterSetList`.
pub const MAX_PARAMETER_SETS: usize = 4;

/// `ParameterType.Value` choice group: exactly one of the schema's value
/// types, never more than one (the EXI choice this codec represents as a Rust
/// `enum` rather than the teacher's parallel-optional-field pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterValue {
    BoolValue(bool),
    ByteValue(i8),
    ShortValue(i16),
    IntValue(i32),
    PhysicalValue(PhysicalValue),
    StringValue(FixedString<32>),
}

impl Default for ParameterValue {
    fn default() -> Self {
        Self::BoolValue(false)
    }
}

impl ParameterValue {
    const CHOICE_COUNT: u32 = 6;

    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        let code = engine::read_event_code(reader, Self::CHOICE_COUNT)?;
        // Scalar arms read the trailing deviation bit themselves; the
        // `PhysicalValue` arm is a nested element whose own grammar already
        // ends in EE_ONLY/DONE, so no extra deviation bit follows it here.
        let value = match code {
            0 => {
                let v = primitives::read_boolean(reader)?;
                engine::read_scalar_end(reader)?;
                Self::BoolValue(v)
            }
            1 => {
                let v = primitives::read_svarint8(reader)?;
                engine::read_scalar_end(reader)?;
                Self::ByteValue(v)
            }
            2 => {
                let v = primitives::read_svarint16(reader)?;
                engine::read_scalar_end(reader)?;
                Self::ShortValue(v)
            }
            3 => {
                let v = primitives::read_svarint32(reader)?;
                engine::read_scalar_end(reader)?;
                Self::IntValue(v)
            }
            4 => Self::PhysicalValue(PhysicalValue::decode(reader)?),
            5 => {
                let v = primitives::read_string(reader)?;
                engine::read_scalar_end(reader)?;
                Self::StringValue(v)
            }
            _ => unreachable!("read_event_code bounds `code` to `0..CHOICE_COUNT`"),
        };
        Ok(value)
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        match self {
            Self::BoolValue(v) => {
                engine::write_event_code(writer, 0, Self::CHOICE_COUNT)?;
                primitives::write_boolean(writer, *v)?;
                engine::write_scalar_end(writer)?;
            }
            Self::ByteValue(v) => {
                engine::write_event_code(writer, 1, Self::CHOICE_COUNT)?;
                primitives::write_svarint8(writer, *v)?;
                engine::write_scalar_end(writer)?;
            }
            Self::ShortValue(v) => {
                engine::write_event_code(writer, 2, Self::CHOICE_COUNT)?;
                primitives::write_svarint16(writer, *v)?;
                engine::write_scalar_end(writer)?;
            }
            Self::IntValue(v) => {
                engine::write_event_code(writer, 3, Self::CHOICE_COUNT)?;
                primitives::write_svarint32(writer, *v)?;
                engine::write_scalar_end(writer)?;
            }
            Self::PhysicalValue(v) => {
                engine::write_event_code(writer, 4, Self::CHOICE_COUNT)?;
                v.encode(writer)?;
            }
            Self::StringValue(v) => {
                engine::write_event_code(writer, 5, Self::CHOICE_COUNT)?;
                primitives::write_string(writer, v)?;
                engine::write_scalar_end(writer)?;
            }
        }
        Ok(())
    }
}

/// `ParameterType`: `Name -> Value -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parameter {
    pub name: FixedString<32>,
    pub value: ParameterValue,
}

impl GrammarElement for Parameter {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let name = primitives::read_string(reader)?;
        engine::read_scalar_end(reader)?;
        engine::read_event_code(reader, 1)?;
        let value = ParameterValue::decode(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self { name, value })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_string(writer, &self.name)?;
        engine::write_scalar_end(writer)?;
        engine::write_event_code(writer, 0, 1)?;
        self.value.encode(writer)?;
        engine::write_ee_only(writer)
    }
}

/// `ParameterSetType`: `ParameterSetID -> Parameter[1..8] -> END` (trailing
/// array chain closes the record, as in `CertificateChain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    pub parameter_set_id: ParameterSetId,
    pub parameters: FixedVec<Parameter, MAX_PARAMETERS>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            parameter_set_id: ParameterSetId::from_wire(0),
            parameters: FixedVec::default(),
        }
    }
}

impl GrammarElement for ParameterSet {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let parameter_set_id = primitives::read_ranged(reader)?;
        engine::read_scalar_end(reader)?;

        let mut parameters = FixedVec::default();
        loop {
            let has_room = parameters.len() < MAX_PARAMETERS;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let parameter = Parameter::decode(reader)?;
            parameters
                .push(parameter)
                .expect("capacity checked by `has_room` above");
        }
        Ok(Self {
            parameter_set_id,
            parameters,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_ranged(writer, self.parameter_set_id)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for parameter in self.parameters.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            parameter.encode(writer)?;
            emitted += 1;
        }
        if emitted < MAX_PARAMETERS {
            engine::write_event_code(writer, 1, 2)?;
        } else {
            engine::write_event_code(writer, 0, 1)?;
        }
        Ok(())
    }
}

/// `ServiceDetailReq`: `ServiceID -> END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceDetailReq {
    pub service_id: u16,
}

impl GrammarElement for ServiceDetailReq {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let service_id = primitives::read_uint_n(reader, 16)? as u16;
        engine::read_scalar_end(reader)?;
        engine::read_ee_only(reader)?;
        Ok(Self { service_id })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.service_id as u32, 16)?;
        engine::write_scalar_end(writer)?;
        engine::write_ee_only(writer)
    }
}

/// `ServiceDetailRes`: `ResponseCode -> ServiceID -> ParameterSet[0..4] ->
/// END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDetailRes {
    pub response_code: ResponseCode,
    pub service_id: u16,
    pub parameter_sets: FixedVec<ParameterSet, MAX_PARAMETER_SETS>,
}

impl Default for ServiceDetailRes {
    fn default() -> Self {
        Self {
            response_code: ResponseCode::Ok,
            service_id: 0,
            parameter_sets: FixedVec::default(),
        }
    }
}

impl GrammarElement for ServiceDetailRes {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        engine::read_event_code(reader, 1)?;
        let response_code = ResponseCode::decode(reader)?;
        engine::read_scalar_end(reader)?;

        engine::read_event_code(reader, 1)?;
        let service_id = primitives::read_uint_n(reader, 16)? as u16;
        engine::read_scalar_end(reader)?;

        let mut parameter_sets = FixedVec::default();
        loop {
            let has_room = parameter_sets.len() < MAX_PARAMETER_SETS;
            let transitions = if has_room { 2 } else { 1 };
            let code = engine::read_event_code(reader, transitions)?;
            if !has_room || code == 1 {
                break;
            }
            let set = ParameterSet::decode(reader)?;
            parameter_sets
                .push(set)
                .expect("capacity checked by `has_room` above");
        }
        Ok(Self {
            response_code,
            service_id,
            parameter_sets,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.response_code.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.service_id as u32, 16)?;
        engine::write_scalar_end(writer)?;

        let mut emitted = 0usize;
        for set in self.parameter_sets.as_slice() {
            engine::write_event_code(writer, 0, 2)?;
            set.encode(writer)?;
            emitted += 1;
        }
        if emitted < MAX_PARAMETER_SETS {
            engine::write_event_code(writer, 1, 2)?;
        } else {
            engine::write_event_code(writer, 0, 1)?;
        }
        Ok(())
    }
}
