/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Closed set of kernel variants
use std::fmt::{Display, Formatter};

use crate::errors::KernelErrors;
use crate::image::RgbImage;
use crate::kernels::{
    gamma_decomposed_scalar, gamma_exact_scalar, gamma_exact_x4, gamma_taylor_x4,
    gamma_two_pass, KernelFn
};
use crate::params::GammaParams;
use crate::power::PowerApprox;

/// A kernel implementation, numbered `0` to `4` on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Variant {
    /// 0, scalar with `powf`
    Reference,
    /// 1, scalar with the decomposed power
    Decomposed,
    /// 2, grayscale pass followed by an in place gamma pass
    TwoPass,
    /// 3, four lanes with `powf` per lane
    VectorExact,
    /// 4, four lanes with Taylor series `ln` and `exp`
    VectorTaylor
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Reference,
        Variant::Decomposed,
        Variant::TwoPass,
        Variant::VectorExact,
        Variant::VectorTaylor
    ];

    /// Numeric selector of this variant
    pub const fn selector(self) -> u32 {
        match self {
            Variant::Reference => 0,
            Variant::Decomposed => 1,
            Variant::TwoPass => 2,
            Variant::VectorExact => 3,
            Variant::VectorTaylor => 4
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Reference => "reference",
            Variant::Decomposed => "decomposed",
            Variant::TwoPass => "two-pass",
            Variant::VectorExact => "vector-exact",
            Variant::VectorTaylor => "vector-taylor"
        }
    }

    /// Power strategy used for the bulk of the pixels
    pub const fn power_approx(self) -> PowerApprox {
        match self {
            Variant::Reference | Variant::TwoPass | Variant::VectorExact => PowerApprox::Exact,
            Variant::Decomposed => PowerApprox::Decomposed,
            Variant::VectorTaylor => PowerApprox::Taylor
        }
    }

    pub const fn is_vectorized(self) -> bool {
        matches!(self, Variant::VectorExact | Variant::VectorTaylor)
    }

    /// The kernel function behind this variant
    ///
    /// It does not validate the output buffer, prefer [`Variant::execute`]
    pub fn kernel(self) -> KernelFn {
        match self {
            Variant::Reference => gamma_exact_scalar,
            Variant::Decomposed => gamma_decomposed_scalar,
            Variant::TwoPass => gamma_two_pass,
            Variant::VectorExact => gamma_exact_x4,
            Variant::VectorTaylor => gamma_taylor_x4
        }
    }

    /// Run this variant once, writing `image.pixels()` bytes to `out`
    ///
    /// # Errors
    /// [`KernelErrors::BufferSizeMismatch`] if `out` is shorter than
    /// `image.pixels()`
    pub fn execute(
        self, image: &RgbImage, params: &GammaParams, out: &mut [u8]
    ) -> Result<(), KernelErrors> {
        let out = image.output_region(out)?;

        (self.kernel())(image, params, out);

        Ok(())
    }
}

impl TryFrom<u32> for Variant {
    type Error = KernelErrors;

    fn try_from(selector: u32) -> Result<Self, Self::Error> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.selector() == selector)
            .ok_or(KernelErrors::UnknownVariant(selector))
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.selector(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::KernelErrors;
    use crate::image::RgbImage;
    use crate::params::GammaParams;
    use crate::power::PowerApprox;
    use crate::variant::Variant;

    #[test]
    fn selectors_round_trip() {
        for (i, variant) in Variant::ALL.into_iter().enumerate() {
            assert_eq!(variant.selector() as usize, i);
            assert_eq!(Variant::try_from(variant.selector()).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_selector_is_an_error() {
        assert!(matches!(
            Variant::try_from(7),
            Err(KernelErrors::UnknownVariant(7))
        ));
        assert!(matches!(
            Variant::try_from(5),
            Err(KernelErrors::UnknownVariant(5))
        ));
    }

    #[test]
    fn strategies() {
        assert_eq!(Variant::Decomposed.power_approx(), PowerApprox::Decomposed);
        assert_eq!(Variant::VectorTaylor.power_approx(), PowerApprox::Taylor);
        assert!(Variant::VectorExact.is_vectorized());
        assert!(!Variant::TwoPass.is_vectorized());
        assert_eq!(Variant::VectorTaylor.to_string(), "4 (vector-taylor)");
    }

    #[test]
    fn execute_rejects_short_output() {
        let pixels = [0; 12];
        let image = RgbImage::new(&pixels, 2, 2).unwrap();
        let mut out = [0; 3];

        for variant in Variant::ALL {
            assert!(matches!(
                variant.execute(&image, &GammaParams::default(), &mut out),
                Err(KernelErrors::BufferSizeMismatch(4, 3))
            ));
        }
    }
}
