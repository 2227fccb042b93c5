/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use gamma_kernels::{benchmark, RgbImage};
use log::{info, trace};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{write_graymap, RgbFile};
use crate::serde::RunReport;

/// Read the input, run the kernel, write the result and print the report
///
/// The output file is only created once the kernel ran successfully.
pub(crate) fn create_and_exec_workflow_from_cmd(options: &CmdOptions) -> Result<(), CliErrors> {
    let file = RgbFile::open(&options.input, options.decoder)?;
    let image = RgbImage::new(&file.pixels, file.width, file.height)?;

    let mut out = image.allocate_output()?;
    trace!("Allocated {} output bytes", out.len());

    let seconds = benchmark(
        options.repetitions,
        options.variant,
        &image,
        &options.params,
        &mut out
    )?;
    info!("Kernel finished in {seconds} seconds");

    write_graymap(&options.output, image.width(), image.height(), &out)?;

    let report = RunReport::new(
        seconds,
        options.variant,
        options.repetitions,
        &options.params,
        &options.output
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
