//! Parsers for option values
use nalgebra::Vector2;
use nom::{
    character::complete::char,
    combinator::all_consuming,
    number::complete::float,
    sequence::separated_pair,
    IResult,
};

use crate::config::ConfigError;

fn light_vector(input: &str) -> IResult<&str, (f32, f32)> {
    separated_pair(float, char(','), float)(input)
}

/// Parse a light direction written as `x,y` with no spaces
pub fn parse_light_vector(input: &str) -> Result<Vector2<f32>, ConfigError> {
    match all_consuming(light_vector)(input) {
        Ok((_, (x, y))) => Ok(Vector2::new(x, y)),
        Err(_) => Err(ConfigError::InvalidLightVector(input.to_string())),
    }
}

/// Parse the numeric value given to option `flag`
pub fn parse_float(flag: char, input: &str) -> Result<f32, ConfigError> {
    let parsed: IResult<&str, f32> = all_consuming(float)(input.trim());
    match parsed {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(ConfigError::InvalidNumber {
            flag,
            value: input.to_string(),
        }),
    }
}
