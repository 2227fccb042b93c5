/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Transform parameters shared by every kernel
use crate::errors::KernelErrors;

/// Luma weights from ITU-R BT.601
pub const DEFAULT_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

pub const DEFAULT_GAMMA: f32 = 0.5;

/// Grayscale weights and gamma exponent
///
/// A value of this type is always valid, every weight is non-negative,
/// the weights have a non-zero sum and gamma is non-negative.
/// It is created once and read by all kernels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GammaParams {
    weights:    [f32; 3],
    weight_sum: f32,
    gamma:      f32
}

impl GammaParams {
    /// Create validated parameters
    ///
    /// # Errors
    /// - [`KernelErrors::NegativeWeight`] if a weight is negative or not finite
    /// - [`KernelErrors::ZeroWeightSum`] if all weights are zero
    /// - [`KernelErrors::NegativeGamma`] if gamma is negative or not finite
    pub fn new(weights: [f32; 3], gamma: f32) -> Result<GammaParams, KernelErrors> {
        for (index, weight) in weights.iter().enumerate() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(KernelErrors::NegativeWeight(index, *weight));
            }
        }
        // same operation order the reducer used to divide per pixel
        let weight_sum = weights[0] + weights[1] + weights[2];

        if weight_sum <= 0.0 || !weight_sum.is_finite() {
            return Err(KernelErrors::ZeroWeightSum);
        }
        if !gamma.is_finite() || gamma < 0.0 {
            return Err(KernelErrors::NegativeGamma(gamma));
        }
        Ok(GammaParams {
            weights,
            weight_sum,
            gamma
        })
    }

    /// Red, green and blue weights
    pub const fn weights(&self) -> [f32; 3] {
        self.weights
    }

    pub const fn weight_sum(&self) -> f32 {
        self.weight_sum
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Return a copy with a different gamma
    ///
    /// # Errors
    /// [`KernelErrors::NegativeGamma`] if gamma is negative or not finite
    pub fn with_gamma(self, gamma: f32) -> Result<GammaParams, KernelErrors> {
        GammaParams::new(self.weights, gamma)
    }
}

impl Default for GammaParams {
    fn default() -> Self {
        GammaParams {
            weights:    DEFAULT_WEIGHTS,
            weight_sum: DEFAULT_WEIGHTS[0] + DEFAULT_WEIGHTS[1] + DEFAULT_WEIGHTS[2],
            gamma:      DEFAULT_GAMMA
        }
    }
}
