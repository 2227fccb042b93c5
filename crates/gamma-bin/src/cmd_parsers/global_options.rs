/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use gamma_core::options::DecoderOptions;
use gamma_kernels::params::{DEFAULT_GAMMA, DEFAULT_WEIGHTS};
use gamma_kernels::{GammaParams, Variant};
use log::{debug, info, warn, Level};

use crate::cmd_parsers::get_decoder_options;
use crate::errors::CliErrors;

/// Everything a run needs, validated
#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:       PathBuf,
    pub output:      PathBuf,
    pub variant:     Variant,
    pub repetitions: u32,
    pub params:      GammaParams,
    pub decoder:     DecoderOptions,
    pub json:        bool
}

/// Append `.pgm` to `name` unless it already ends with it
pub fn output_path(name: &str) -> PathBuf {
    if name.ends_with(".pgm") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.pgm"))
    }
}

/// Validate parsed arguments into [`CmdOptions`]
///
/// Nothing is read or allocated before this succeeds.
pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, CliErrors> {
    let input = options
        .get_one::<PathBuf>("in")
        .cloned()
        .ok_or(CliErrors::Static("No input file given"))?;

    let selector = options.get_one::<u32>("variant").copied().unwrap_or(0);
    let variant = Variant::try_from(selector)?;
    info!("Variant: {variant}");

    let repetitions = options.get_one::<u32>("bench").copied().unwrap_or(1);

    if repetitions == 0 {
        warn!("Zero repetitions requested, no kernel will run");
    }

    let weights = match options.get_many::<f32>("coeffs") {
        Some(values) => {
            let values: Vec<f32> = values.copied().collect();

            <[f32; 3]>::try_from(values.as_slice())
                .map_err(|_| CliErrors::Static("Expected exactly three coefficients"))?
        }
        None => DEFAULT_WEIGHTS
    };
    let gamma = options
        .get_one::<f32>("gamma")
        .copied()
        .unwrap_or(DEFAULT_GAMMA);

    let params = GammaParams::new(weights, gamma)?;

    if options.value_source("coeffs") == Some(ValueSource::CommandLine) {
        info!("Using weights {weights:?}");
    }
    debug!("Gamma: {gamma}");

    let name = options
        .get_one::<String>("out")
        .map_or("output", String::as_str);

    Ok(CmdOptions {
        input,
        output: output_path(name),
        variant,
        repetitions,
        params,
        decoder: get_decoder_options(options),
        json: options.get_flag("json")
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        // also the behaviour of --warn
        Level::Warn
    };

    // a second run in the same process keeps the first logger
    if simple_logger::init_with_level(log_level).is_err() {
        log::set_max_level(log_level.to_level_filter());
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use gamma_kernels::Variant;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{output_path, parse_options};
    use crate::errors::CliErrors;

    #[test]
    fn pgm_extension_is_appended_once() {
        assert_eq!(output_path("output"), PathBuf::from("output.pgm"));
        assert_eq!(output_path("dark.pgm"), PathBuf::from("dark.pgm"));
        assert_eq!(output_path("a.png"), PathBuf::from("a.png.pgm"));
    }

    #[test]
    fn options_are_collected() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "gamma", "-V", "3", "-B", "10", "-o", "res", "--gamma", "2.2", "--json", "in.ppm"
            ])
            .unwrap();
        let options = parse_options(&matches).unwrap();

        assert_eq!(options.variant, Variant::VectorExact);
        assert_eq!(options.repetitions, 10);
        assert_eq!(options.output, PathBuf::from("res.pgm"));
        assert_eq!(options.params.gamma(), 2.2);
        assert!(options.json);
        assert_eq!(options.decoder.get_max_width(), 16384);
    }

    #[test]
    fn unknown_variant_is_a_configuration_error() {
        let matches = create_cmd_args()
            .try_get_matches_from(["gamma", "-V", "7", "in.ppm"])
            .unwrap();
        let err = parse_options(&matches).unwrap_err();

        assert!(matches!(err, CliErrors::Kernel(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let matches = create_cmd_args()
            .try_get_matches_from(["gamma", "--coeffs", "0", "0", "0", "in.ppm"])
            .unwrap();

        assert_eq!(parse_options(&matches).unwrap_err().exit_code(), 2);
    }
}
