//! `CostType`, reproduced from the worked grammar example in spec.md §4.5:
//!
//! ```text
//! S0 --(EC=0, START costKind)--------> S1
//! S1 --(EC=0, START amount)----------> S2
//! S2 --(EC=0, START amountMultiplier)-> S3
//! S2 --(EC=1, END)--------------------> DONE
//! S3 --(EC=0, END)--------------------> DONE
//! ```
//!
//! S0/S1/S3 have a single production and read a 1-bit event code (the
//! reserved second-level slot, per `infra::codec::engine::event_code_bits`);
//! S2 has two productions and reads 2 bits.
use crate::error::ErrorKind;
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::engine;
use crate::infra::codec::primitives;
use crate::infra::codec::traits::GrammarElement;
use crate::protocol::types::{CostKind, UnitMultiplier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostType {
    pub cost_kind: CostKind,
    pub amount: u32,
    pub amount_multiplier: Option<UnitMultiplier>,
}

impl Default for CostType {
    fn default() -> Self {
        Self {
            cost_kind: CostKind::EnergyFee,
            amount: 0,
            amount_multiplier: None,
        }
    }
}

impl GrammarElement for CostType {
    fn decode(reader: &mut BitReader) -> Result<Self, ErrorKind> {
        // S0 -> S1
        engine::read_event_code(reader, 1)?;
        let cost_kind = CostKind::decode(reader)?;
        engine::read_scalar_end(reader)?;

        // S1 -> S2
        engine::read_event_code(reader, 1)?;
        let amount = primitives::read_uint_n(reader, 32)?;
        engine::read_scalar_end(reader)?;

        // S2: EC0 -> S3 (amountMultiplier present), EC1 -> DONE.
        let code = engine::read_event_code(reader, 2)?;
        let amount_multiplier = if code == 0 {
            let value: UnitMultiplier = primitives::read_ranged(reader)?;
            engine::read_scalar_end(reader)?;
            // S3 -> DONE
            engine::read_ee_only(reader)?;
            Some(value)
        } else {
            None
        };

        Ok(Self {
            cost_kind,
            amount,
            amount_multiplier,
        })
    }

    fn encode(&self, writer: &mut BitWriter) -> Result<(), ErrorKind> {
        engine::write_event_code(writer, 0, 1)?;
        self.cost_kind.encode(writer)?;
        engine::write_scalar_end(writer)?;

        engine::write_event_code(writer, 0, 1)?;
        primitives::write_uint_n(writer, self.amount, 32)?;
        engine::write_scalar_end(writer)?;

        match self.amount_multiplier {
            Some(value) => {
                engine::write_event_code(writer, 0, 2)?;
                primitives::write_ranged(writer, value)?;
                engine::write_scalar_end(writer)?;
                engine::write_ee_only(writer)?;
            }
            None => {
                engine::write_event_code(writer, 1, 2)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// spec.md scenario S1's tree shape: `costKind = energyFee, amount = 0,
    /// amountMultiplier absent` — the END-element short path out of S2.
    fn cost_type_round_trips_without_multiplier() {
        let value = CostType {
            cost_kind: CostKind::EnergyFee,
            amount: 0,
            amount_multiplier: None,
        };
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(CostType::decode(&mut reader).unwrap(), value);
    }

    #[test]
    fn cost_type_round_trips_with_multiplier() {
        let value = CostType {
            cost_kind: CostKind::RelativePricePercentage,
            amount: 1234,
            amount_multiplier: Some(UnitMultiplier::new(2).unwrap()),
        };
        let mut buffer = [0x00; 8];
        {
            let mut writer = BitWriter::new(&mut buffer);
            value.encode(&mut writer).unwrap();
        }
        let mut reader = BitReader::new(&buffer);
        assert_eq!(CostType::decode(&mut reader).unwrap(), value);
    }
}
