/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end
//!
//! Reads a binary RGB pixel map, runs one kernel variant a number of times,
//! writes the result as a binary graymap and prints a short report.
use std::ffi::OsString;
use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
pub mod errors;
mod file_io;
mod serde;
mod workflow;

pub fn main() {
    exit(run(std::env::args_os()));
}

/// Parse `args`, run the workflow and return the process exit status
///
/// The first item of `args` is the program name.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone
{
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches_from(args) {
        Ok(options) => options,
        Err(err) => {
            // help goes to stdout with a zero status, usage errors to stderr
            let _ = err.print();
            return err.exit_code();
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    let result = cmd_parsers::global_options::parse_options(&options)
        .and_then(|parsed_opts| create_and_exec_workflow_from_cmd(&parsed_opts));

    match result {
        Ok(()) => 0,
        Err(err) => {
            println!();
            error!(" Could not complete workflow, reason {err:?}");
            println!();
            err.exit_code()
        }
    }
}
