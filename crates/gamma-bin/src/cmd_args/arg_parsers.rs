/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Value parsers that reject negative numbers with a readable message

pub fn parse_non_negative_float(value: &str) -> Result<f32, String> {
    let parsed = value
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid argument {value:?}, expected a float"))?;

    if !parsed.is_finite() {
        return Err(format!("Invalid argument {value:?}, expected a finite number"));
    }
    if parsed < 0.0 {
        return Err(format!("The argument {value:?} can't be negative"));
    }
    Ok(parsed)
}

pub fn parse_non_negative_integer(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();

    if trimmed.starts_with('-') {
        return Err(format!("The argument {value:?} can't be negative"));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("Invalid argument {value:?}, expected an integer"))
}
