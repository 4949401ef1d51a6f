//! The shared conformance-suite format.
//!
//! Every port of the algebra consumes the same JSON suites:
//!
//! ```json
//! { "version": "1.0.0",
//!   "tests": [
//!     { "op": "op_concatenate",
//!       "in": [{"Mem": ["bit", 1, 0, 1]}, {"Mem": ["bit", 1, 0, 1]}],
//!       "out": [{"Mem": ["bit", 1, 0, 1, 1, 0, 1]}],
//!       "tag": "concat-two-triples" } ] }
//! ```
//!
//! Operand atoms are integer, float and boolean literals plus the tagged
//! constructors `{"Mem": n}` and `{"Num": n}` (a zero region of `n` bits)
//! and `{"Mem": ["bit", ...]}` / `{"Mem": ["byte", ...]}`. An expected
//! output may instead be one of the five stable error symbols, asserting
//! that the operation fails with that kind. The runner dispatches by
//! operation name and compares outputs structurally. Following the
//! reference implementation, integer atoms read as signed.

use anyhow::{bail, Context};
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::Deserialize;
use serde_json::Value;

use crate::codec::{
    from_bit_list, from_bytes, from_numeric_big_integer, into_numeric_big_integer, Signedness,
};
use crate::error::Error;
use crate::ops::{
    op_concatenate, op_ensure_bit_length, op_ensure_byte_length, op_extend, op_get_bit,
    op_get_bits, op_get_byte, op_get_bytes, op_identity, op_reverse, op_reverse_bits,
    op_reverse_bytes, op_set_bit, op_set_bits, op_set_byte, op_set_bytes, op_truncate,
};
use crate::region::Region;

const SUPPORTED_MAJOR: &str = "1";

const ERROR_SYMBOLS: [&str; 5] = [
    "InvalidMemoryRegion",
    "BoundsError",
    "ByteAlignmentError",
    "NumericRangeError",
    "OrientationError",
];

#[derive(Debug, Deserialize)]
pub struct Suite {
    version: String,
    tests: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    op: String,
    #[serde(rename = "in")]
    input: Vec<Value>,
    out: Vec<Value>,
    tag: String,
}

#[derive(Debug)]
pub struct SuiteReport {
    pub total: usize,
    pub failures: Vec<String>,
}

impl SuiteReport {
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Suite {
    pub fn from_json(json: &str) -> anyhow::Result<Suite> {
        let suite: Suite = serde_json::from_str(json).context("malformed suite document")?;
        let major = suite.version.split('.').next().unwrap_or_default();
        if major != SUPPORTED_MAJOR {
            bail!("unsupported suite version {}", suite.version);
        }
        Ok(suite)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Runs every case, collecting mismatches per tag. A malformed case is
    /// a suite-authoring fault and aborts the run.
    pub fn run(&self) -> anyhow::Result<SuiteReport> {
        let mut failures = Vec::new();
        for case in &self.tests {
            trace!("case `{}`: {}", case.tag, case.op);
            if let Some(mismatch) = case
                .check()
                .with_context(|| format!("malformed case `{}`", case.tag))?
            {
                failures.push(format!("`{}`: {mismatch}", case.tag));
            }
        }
        debug!(
            "suite v{}: {}/{} cases passed",
            self.version,
            self.tests.len() - failures.len(),
            self.tests.len()
        );
        Ok(SuiteReport {
            total: self.tests.len(),
            failures,
        })
    }
}

impl TestCase {
    /// `Ok(None)` on pass, `Ok(Some(description))` on mismatch, `Err` when
    /// the case itself cannot be interpreted.
    fn check(&self) -> anyhow::Result<Option<String>> {
        let input: Vec<Operand> = self
            .input
            .iter()
            .map(decode_operand)
            .collect::<anyhow::Result<_>>()
            .context("bad input operand")?;
        let expected: Vec<Operand> = self
            .out
            .iter()
            .map(decode_operand)
            .collect::<anyhow::Result<_>>()
            .context("bad output operand")?;

        let actual = apply(&self.op, &input)?;

        let verdict = match (&actual, expected.as_slice()) {
            (Err(error), [Operand::ErrorSymbol(symbol)]) => {
                if error.symbol() == symbol {
                    None
                } else {
                    Some(format!("expected {symbol}, got {}", error.symbol()))
                }
            }
            (Err(error), _) => Some(format!("unexpected {}: {error}", error.symbol())),
            (Ok(outputs), _) => {
                if *outputs == expected {
                    None
                } else {
                    Some(format!("expected {expected:?}, got {outputs:?}"))
                }
            }
        };
        Ok(verdict)
    }
}

/// A decoded operand. Structural equality is exactly the suite's notion of
/// output equality.
#[derive(Debug, PartialEq)]
enum Operand {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Region(Region),
    ErrorSymbol(String),
}

fn decode_operand(value: &Value) -> anyhow::Result<Operand> {
    match value {
        Value::Bool(flag) => Ok(Operand::Bool(*flag)),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Ok(Operand::Integer(integer))
            } else if let Some(float) = number.as_f64() {
                Ok(Operand::Float(float))
            } else {
                bail!("unrepresentable number {number}")
            }
        }
        Value::String(symbol) if ERROR_SYMBOLS.contains(&symbol.as_str()) => {
            Ok(Operand::ErrorSymbol(symbol.clone()))
        }
        Value::String(other) => bail!("unknown symbol `{other}`"),
        Value::Object(object) => {
            let (tag, argument) = object
                .iter()
                .next()
                .filter(|_| object.len() == 1)
                .context("constructor must have exactly one tag")?;
            match tag.as_str() {
                "Mem" | "Num" => decode_region(argument).map(Operand::Region),
                other => bail!("unknown constructor tag `{other}`"),
            }
        }
        other => bail!("unsupported operand {other}"),
    }
}

fn decode_region(argument: &Value) -> anyhow::Result<Region> {
    match argument {
        // {"Mem": n} and {"Num": n}: a zero region of n bits
        Value::Number(number) => {
            let bit_length = number
                .as_u64()
                .context("region length must be a natural number")? as usize;
            Ok(std::iter::repeat(0).take(bit_length).collect())
        }
        Value::Array(items) => {
            let kind = items
                .first()
                .and_then(Value::as_str)
                .context("list constructor needs a leading \"bit\" or \"byte\"")?;
            let values: Vec<u64> = items[1..]
                .iter()
                .map(|item| item.as_u64().context("list elements must be naturals"))
                .collect::<anyhow::Result<_>>()?;
            match kind {
                "bit" => {
                    let bits: Vec<u8> = values.iter().map(|&value| value as u8).collect();
                    Ok(from_bit_list(&bits)?)
                }
                "byte" => {
                    if let Some(wide) = values.iter().find(|&&value| value > 0xFF) {
                        bail!("byte value {wide} out of range");
                    }
                    let bytes: Vec<u8> = values.iter().map(|&value| value as u8).collect();
                    Ok(from_bytes(&bytes))
                }
                other => bail!("unknown list constructor `{other}`"),
            }
        }
        other => bail!("unsupported region constructor {other}"),
    }
}

/// Dispatches by operation name. The outer error is a malformed case; the
/// inner one is the algebra failing, to be matched against an expected
/// error symbol.
fn apply(op: &str, input: &[Operand]) -> anyhow::Result<Result<Vec<Operand>, Error>> {
    let result = match op {
        "bit_length" => integer(region_arg(input, 0)?.bit_length()),
        "byte_length" => integer(region_arg(input, 0)?.byte_length()),
        "iterate_logical_bits" => {
            let bits: Region = region_arg(input, 0)?.bits().collect();
            Ok(vec![Operand::Region(bits)])
        }
        "op_identity" => Ok(vec![Operand::Region(op_identity(region_arg(input, 0)?))]),
        "op_reverse" => Ok(vec![Operand::Region(op_reverse(region_arg(input, 0)?))]),
        "op_reverse_bits" => Ok(vec![Operand::Region(op_reverse_bits(region_arg(input, 0)?))]),
        "op_reverse_bytes" => Ok(vec![Operand::Region(op_reverse_bytes(region_arg(input, 0)?))]),
        "op_get_bit" => region_result(op_get_bit(region_arg(input, 0)?, usize_arg(input, 1)?)),
        "op_get_byte" => region_result(op_get_byte(region_arg(input, 0)?, usize_arg(input, 1)?)),
        "op_get_bits" => region_result(op_get_bits(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            usize_arg(input, 2)?,
        )),
        "op_get_bytes" => region_result(op_get_bytes(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            usize_arg(input, 2)?,
        )),
        "op_set_bit" => region_result(op_set_bit(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            region_arg(input, 2)?,
        )),
        "op_set_byte" => region_result(op_set_byte(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            region_arg(input, 2)?,
        )),
        "op_set_bits" => region_result(op_set_bits(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            region_arg(input, 2)?,
        )),
        "op_set_bytes" => region_result(op_set_bytes(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            region_arg(input, 2)?,
        )),
        "op_truncate" => region_result(op_truncate(region_arg(input, 0)?, usize_arg(input, 1)?)),
        "op_extend" => region_result(op_extend(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            bool_arg(input, 2)?,
        )),
        "op_ensure_bit_length" => region_result(op_ensure_bit_length(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            bool_arg(input, 2)?,
        )),
        "op_ensure_byte_length" => region_result(op_ensure_byte_length(
            region_arg(input, 0)?,
            usize_arg(input, 1)?,
            bool_arg(input, 2)?,
        )),
        "op_concatenate" => Ok(vec![Operand::Region(op_concatenate(
            region_arg(input, 0)?,
            region_arg(input, 1)?,
        ))]),
        "from_numeric_big_integer" => {
            let value = BigInt::from(int_arg(input, 0)?);
            let bit_length = usize_arg(input, 1)?;
            region_result(from_numeric_big_integer(
                &value,
                bit_length,
                signedness_arg(input, 2)?,
            ))
        }
        "into_numeric_big_integer" => {
            let value =
                into_numeric_big_integer(region_arg(input, 0)?, signedness_arg(input, 1)?);
            let value = value
                .to_i64()
                .with_context(|| format!("{value} exceeds the suite's integer atoms"))?;
            Ok(vec![Operand::Integer(value)])
        }
        other => bail!("unknown operation `{other}`"),
    };
    Ok(result)
}

fn region_result(result: crate::Result<Region>) -> Result<Vec<Operand>, Error> {
    result.map(|region| vec![Operand::Region(region)])
}

fn integer(value: usize) -> Result<Vec<Operand>, Error> {
    Ok(vec![Operand::Integer(value as i64)])
}

fn region_arg<'a>(input: &'a [Operand], index: usize) -> anyhow::Result<&'a Region> {
    match input.get(index) {
        Some(Operand::Region(region)) => Ok(region),
        other => bail!("operand {index} should be a region, got {other:?}"),
    }
}

fn int_arg(input: &[Operand], index: usize) -> anyhow::Result<i64> {
    match input.get(index) {
        Some(Operand::Integer(value)) => Ok(*value),
        other => bail!("operand {index} should be an integer, got {other:?}"),
    }
}

fn usize_arg(input: &[Operand], index: usize) -> anyhow::Result<usize> {
    usize::try_from(int_arg(input, index)?)
        .with_context(|| format!("operand {index} should be a natural number"))
}

fn bool_arg(input: &[Operand], index: usize) -> anyhow::Result<bool> {
    match input.get(index) {
        Some(Operand::Bool(flag)) => Ok(*flag),
        Some(Operand::Integer(0)) => Ok(false),
        Some(Operand::Integer(1)) => Ok(true),
        other => bail!("operand {index} should be a bit or boolean, got {other:?}"),
    }
}

/// Integer atoms read as signed unless the case says otherwise.
fn signedness_arg(input: &[Operand], index: usize) -> anyhow::Result<Signedness> {
    match input.get(index) {
        None => Ok(Signedness::Signed),
        Some(Operand::Bool(true)) => Ok(Signedness::Signed),
        Some(Operand::Bool(false)) => Ok(Signedness::Unsigned),
        other => bail!("operand {index} should be a signedness flag, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_case(op: &str, input: &str, out: &str) -> String {
        format!(
            r#"{{ "version": "1.0.0", "tests": [
                 {{ "op": "{op}", "in": {input}, "out": {out}, "tag": "case" }} ] }}"#
        )
    }

    #[test]
    fn a_passing_case_produces_a_clean_report() {
        let json = single_case(
            "op_concatenate",
            r#"[{"Mem": ["bit", 1, 0, 1]}, {"Mem": ["bit", 1, 0, 1]}]"#,
            r#"[{"Mem": ["bit", 1, 0, 1, 1, 0, 1]}]"#,
        );

        let report = Suite::from_json(&json).unwrap().run().unwrap();

        assert_eq!(report.total, 1);
        assert!(report.is_pass());
    }

    #[test]
    fn a_mismatch_is_reported_under_its_tag() {
        let json = single_case(
            "bit_length",
            r#"[{"Mem": ["bit", 1, 0, 1]}]"#,
            r#"[4]"#,
        );

        let report = Suite::from_json(&json).unwrap().run().unwrap();

        assert!(!report.is_pass());
        assert!(report.failures[0].contains("case"));
    }

    #[test]
    fn an_expected_error_symbol_matches_the_failure_kind() {
        let json = single_case(
            "op_truncate",
            r#"[{"Mem": ["bit", 1, 0, 1]}, 9]"#,
            r#"["BoundsError"]"#,
        );

        let report = Suite::from_json(&json).unwrap().run().unwrap();

        assert!(report.is_pass());
    }

    #[test]
    fn empty_and_zero_valued_constructors_build_zero_regions() {
        let json = single_case(
            "op_concatenate",
            r#"[{"Mem": 3}, {"Num": 5}]"#,
            r#"[{"Mem": ["bit", 0, 0, 0, 0, 0, 0, 0, 0]}]"#,
        );

        let report = Suite::from_json(&json).unwrap().run().unwrap();

        assert!(report.is_pass());
    }

    #[test]
    fn integers_read_as_signed_by_default() {
        let json = single_case(
            "into_numeric_big_integer",
            r#"[{"Mem": ["bit", 1, 0, 1]}]"#,
            r#"[-3]"#,
        );

        let report = Suite::from_json(&json).unwrap().run().unwrap();

        assert!(report.is_pass());
    }

    #[test]
    fn an_unsupported_version_is_refused() {
        let json = r#"{ "version": "2.0.0", "tests": [] }"#;

        assert!(Suite::from_json(json).is_err());
    }

    #[test]
    fn an_unknown_operation_is_a_malformed_case() {
        let json = single_case("op_frobnicate", "[]", "[]");

        assert!(Suite::from_json(&json).unwrap().run().is_err());
    }
}
