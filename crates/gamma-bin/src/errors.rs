/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that end a command line run
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use gamma_kernels::KernelErrors;
use gamma_ppm::{PPMDecodeErrors, PPMErrors};

/// Exit status for invalid configuration
pub const EXIT_CONFIGURATION: i32 = 2;
/// Exit status for unreadable or malformed input images
pub const EXIT_DECODE: i32 = 3;
/// Exit status for allocation and I/O failures
pub const EXIT_RESOURCE: i32 = 4;

pub enum CliErrors {
    Static(&'static str),
    Kernel(KernelErrors),
    Decode(PPMDecodeErrors),
    Encode(PPMErrors),
    /// Input was a valid pixel map but not an RGB one
    UnsupportedImage(String),
    IoErrors(PathBuf, std::io::Error),
    Serialize(serde_json::Error)
}

impl CliErrors {
    /// Process exit status for this error, never zero
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliErrors::Static(_) => EXIT_CONFIGURATION,
            CliErrors::Kernel(err) => {
                if err.is_configuration_error() {
                    EXIT_CONFIGURATION
                } else {
                    EXIT_RESOURCE
                }
            }
            CliErrors::Decode(_) | CliErrors::UnsupportedImage(_) => EXIT_DECODE,
            CliErrors::Encode(_) | CliErrors::IoErrors(_, _) | CliErrors::Serialize(_) => {
                EXIT_RESOURCE
            }
        }
    }
}

impl From<KernelErrors> for CliErrors {
    fn from(err: KernelErrors) -> Self {
        CliErrors::Kernel(err)
    }
}

impl From<PPMDecodeErrors> for CliErrors {
    fn from(err: PPMDecodeErrors) -> Self {
        CliErrors::Decode(err)
    }
}

impl From<PPMErrors> for CliErrors {
    fn from(err: PPMErrors) -> Self {
        CliErrors::Encode(err)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(err: serde_json::Error) -> Self {
        CliErrors::Serialize(err)
    }
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Static(err) => writeln!(f, "{err}"),
            CliErrors::Kernel(err) => writeln!(f, "{err:?}"),
            CliErrors::Decode(err) => writeln!(f, "Could not decode input: {err:?}"),
            CliErrors::Encode(err) => writeln!(f, "Could not encode output: {err:?}"),
            CliErrors::UnsupportedImage(kind) => {
                writeln!(f, "Expected an RGB pixel map (P6) but found {kind}")
            }
            CliErrors::IoErrors(path, err) => writeln!(f, "{}: {err}", path.display()),
            CliErrors::Serialize(err) => writeln!(f, "Could not serialize report: {err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for CliErrors {}
