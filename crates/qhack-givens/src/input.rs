//! Reader for the `a,b,c,d` amplitude line.

use crate::error::{GivensError, GivensResult};
use crate::rotations::Amplitudes;

/// Parse four comma-separated real amplitudes.
pub fn parse_amplitudes(input: &str) -> GivensResult<Amplitudes> {
    let fields: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    let [a, b, c, d] = fields.as_slice() else {
        return Err(GivensError::FieldCount(fields.len()));
    };
    Ok(Amplitudes::new(
        parse_field(a)?,
        parse_field(b)?,
        parse_field(c)?,
        parse_field(d)?,
    ))
}

fn parse_field(field: &str) -> GivensResult<f64> {
    field
        .parse::<f64>()
        .map_err(|_| GivensError::InvalidAmplitude(field.to_string()))
}
