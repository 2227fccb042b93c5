/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};
use std::path::Path;

use gamma_kernels::{GammaParams, Variant};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Summary printed after a run
pub struct RunReport<'a> {
    seconds:     f64,
    variant:     Variant,
    repetitions: u32,
    params:      &'a GammaParams,
    output:      &'a Path
}

impl<'a> RunReport<'a> {
    pub fn new(
        seconds: f64, variant: Variant, repetitions: u32, params: &'a GammaParams, output: &'a Path
    ) -> RunReport<'a> {
        RunReport {
            seconds,
            variant,
            repetitions,
            params,
            output
        }
    }
}

impl<'a> Serialize for RunReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("RunReport", 6)?;

        state.serialize_field("seconds", &self.seconds)?;
        state.serialize_field("variant", &self.variant.selector())?;
        state.serialize_field("repetitions", &self.repetitions)?;
        state.serialize_field("coefficients", &self.params.weights())?;
        state.serialize_field("gamma", &self.params.gamma())?;
        state.serialize_field("output", &self.output.to_string_lossy())?;

        state.end()
    }
}

impl<'a> Display for RunReport<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.params.weights();

        writeln!(f, "Elapsed time: {:.6} seconds", self.seconds)?;
        writeln!(f, "Variant: {}", self.variant)?;
        writeln!(f, "Repetitions: {}", self.repetitions)?;
        writeln!(f, "Coefficients: a = {a}, b = {b}, c = {c}")?;
        writeln!(f, "Gamma: {}", self.params.gamma())?;
        write!(f, "Output: {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use gamma_kernels::{GammaParams, Variant};

    use crate::serde::RunReport;

    #[test]
    fn json_fields() {
        let params = GammaParams::new([1.0, 0.0, 0.0], 2.0).unwrap();
        let report = RunReport::new(0.25, Variant::TwoPass, 3, &params, Path::new("out.pgm"));

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["seconds"], 0.25);
        assert_eq!(value["variant"], 2);
        assert_eq!(value["repetitions"], 3);
        assert_eq!(value["coefficients"][0], 1.0);
        assert_eq!(value["gamma"], 2.0);
        assert_eq!(value["output"], "out.pgm");
    }

    #[test]
    fn text_lists_the_run() {
        let params = GammaParams::default();
        let report = RunReport::new(1.5, Variant::VectorTaylor, 10, &params, Path::new("o.pgm"));

        let text = report.to_string();

        assert!(text.contains("Variant: 4 (vector-taylor)"));
        assert!(text.contains("Repetitions: 10"));
        assert!(text.ends_with("Output: o.pgm"));
    }
}
