/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_non_negative_float, parse_non_negative_integer};
use crate::cmd_args::help_strings::{BENCH_HELP, COEFFS_HELP, GAMMA_HELP, VARIANT_HELP};

pub(crate) mod arg_parsers;
mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("gamma")
        .about("Convert an RGB pixel map to a gamma corrected graymap and time the conversion")
        .arg(Arg::new("in")
            .help("Binary RGB pixel map (P6) to read")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("variant")
            .short('V')
            .long("variant")
            .help("Kernel implementation to run, 0 to 4")
            .long_help(VARIANT_HELP)
            .value_parser(parse_non_negative_integer)
            .default_value("0"))
        .arg(Arg::new("bench")
            .short('B')
            .long("bench")
            .help("Number of times the kernel is run")
            .long_help(BENCH_HELP)
            .value_parser(parse_non_negative_integer)
            .default_value("1"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output file name, `.pgm` is appended if missing")
            .default_value("output"))
        .arg(Arg::new("coeffs")
            .long("coeffs")
            .help("Red, green and blue weights of the grayscale conversion")
            .long_help(COEFFS_HELP)
            .num_args(3)
            .value_names(["A", "B", "C"])
            .allow_negative_numbers(true)
            .value_parser(parse_non_negative_float)
            .default_values(["0.299", "0.587", "0.114"]))
        .arg(Arg::new("gamma")
            .long("gamma")
            .help("Gamma exponent")
            .long_help(GAMMA_HELP)
            .allow_negative_numbers(true)
            .value_parser(parse_non_negative_float)
            .default_value("0.5"))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the run report as JSON"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Largest image width accepted by the decoder")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Largest image height accepted by the decoder")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the run"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn defaults() {
        let matches = create_cmd_args().try_get_matches_from(["gamma", "in.ppm"]).unwrap();

        assert_eq!(*matches.get_one::<u32>("variant").unwrap(), 0);
        assert_eq!(*matches.get_one::<u32>("bench").unwrap(), 1);
        assert_eq!(*matches.get_one::<f32>("gamma").unwrap(), 0.5);

        let coeffs: Vec<f32> = matches.get_many::<f32>("coeffs").unwrap().copied().collect();
        assert_eq!(coeffs, [0.299, 0.587, 0.114]);
    }

    #[test]
    fn negative_values_are_rejected() {
        let result = create_cmd_args().try_get_matches_from(["gamma", "--gamma", "-1", "in.ppm"]);
        assert!(result.is_err());

        let result = create_cmd_args()
            .try_get_matches_from(["gamma", "--coeffs", "0.2", "-0.5", "0.3", "in.ppm"]);
        assert!(result.is_err());

        let result = create_cmd_args().try_get_matches_from(["gamma", "-B", "-3", "in.ppm"]);
        assert!(result.is_err());
    }

    #[test]
    fn coefficients_take_three_values() {
        let result = create_cmd_args().try_get_matches_from(["gamma", "--coeffs", "1", "2"]);
        assert!(result.is_err());

        let matches = create_cmd_args()
            .try_get_matches_from(["gamma", "--coeffs", "1", "2", "3", "in.ppm", "-V", "4"])
            .unwrap();
        let coeffs: Vec<f32> = matches.get_many::<f32>("coeffs").unwrap().copied().collect();

        assert_eq!(coeffs, [1.0, 2.0, 3.0]);
        assert_eq!(*matches.get_one::<u32>("variant").unwrap(), 4);
    }
}
