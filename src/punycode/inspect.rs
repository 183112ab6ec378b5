// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Step-by-step view of a decode, for debugging odd labels.

use serde::Serialize;

use crate::error::PunycodeError;

use super::decode::decode_into;
use super::split_basic;

/// One variable-length integer and what it did to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionStep {
    /// The digit characters that made up this integer.
    pub digits: String,
    /// The decoded integer (how far `i` advanced).
    pub delta: u32,
    /// Bias after adapting to this delta.
    pub bias: u32,
    /// The code point inserted.
    pub code_point: char,
    /// Where it went, as an index into the output at the time.
    pub position: usize,
}

/// A decoded Punycode string with its insertion history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub basic: String,
    pub steps: Vec<InsertionStep>,
    #[serde(skip)]
    output: Vec<char>,
}

impl Inspection {
    /// The decoded string, identical to what [`decode`](super::decode) returns.
    pub fn decoded(&self) -> String {
        self.output.iter().collect()
    }
}

/// Decode `input`, recording every insertion.
///
/// Fails exactly when [`decode`](super::decode) fails.
pub fn inspect(input: &str) -> Result<Inspection, PunycodeError> {
    let mut output = Vec::with_capacity(input.len());
    let mut steps = Vec::new();

    decode_into(input, &mut output, |insertion| {
        steps.push(InsertionStep {
            digits: insertion.digits.to_string(),
            delta: insertion.delta,
            bias: insertion.bias,
            code_point: insertion.code_point,
            position: insertion.position,
        });
    })?;

    let (basic, _) = split_basic(input);
    Ok(Inspection {
        basic: basic.to_string(),
        steps,
        output,
    })
}
