/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Row traversal shared by the four lane kernels
use crate::deinterleave::{GROUP_BYTES, GROUP_PIXELS};
use crate::image::{RgbImage, RGB_STRIDE};
use crate::kernels::scalar::exact_pixel;
use crate::params::GammaParams;

/// Which remainder rule produced a [`RowPlan`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TailBranch {
    /// Width is a multiple of four, the tail starts at the last vector position
    AlignedWidth,
    /// Width leaves a remainder, the tail covers everything after the vector loop
    UnalignedWidth
}

/// How a row of `width` pixels is split into vector groups and a scalar tail
///
/// Groups advance while `x < width - width % 4` and at least six pixels
/// remain, so a row always ends with two to five scalar pixels unless it is
/// shorter than that. Every row of an image shares the same plan.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RowPlan {
    /// Number of four pixel groups at the start of the row
    pub groups:     usize,
    /// First pixel handled by the scalar tail
    pub tail_start: usize,
    pub branch:     TailBranch
}

impl RowPlan {
    pub const fn new(width: usize) -> RowPlan {
        let processed = width - width % GROUP_PIXELS;

        let mut x = 0;
        let mut rest = width;

        while x < processed && rest >= 6 {
            x += GROUP_PIXELS;
            rest -= GROUP_PIXELS;
        }
        if width % GROUP_PIXELS == 0 {
            // the loop always stops with four pixels left here
            RowPlan {
                groups:     x / GROUP_PIXELS,
                tail_start: x,
                branch:     TailBranch::AlignedWidth
            }
        } else {
            // for width % 4 == 1 the loop stops one group before `processed`,
            // starting the tail at `processed` would leave that group unwritten
            RowPlan {
                groups:     x / GROUP_PIXELS,
                tail_start: x,
                branch:     TailBranch::UnalignedWidth
            }
        }
    }

    /// First pixel after the last vector group
    pub const fn vector_end(&self) -> usize {
        self.groups * GROUP_PIXELS
    }
}

/// Run `group` over every four pixel group of every row and [`exact_pixel`]
/// over the tails
///
/// `group` receives twelve interleaved bytes and four output bytes.
#[inline(always)]
pub(crate) fn for_each_group<F>(image: &RgbImage, params: &GammaParams, out: &mut [u8], mut group: F)
where
    F: FnMut(&[u8], &mut [u8])
{
    let width = image.width();
    let plan = RowPlan::new(width);
    let vector_end = plan.vector_end();
    let out = &mut out[..image.pixels()];

    for (src_row, dst_row) in image.rows().zip(out.chunks_exact_mut(width)) {
        let src_groups = src_row[..vector_end * RGB_STRIDE].chunks_exact(GROUP_BYTES);
        let dst_groups = dst_row[..vector_end].chunks_exact_mut(GROUP_PIXELS);

        for (src, dst) in src_groups.zip(dst_groups) {
            group(src, dst);
        }

        let src_tail = src_row[plan.tail_start * RGB_STRIDE..].chunks_exact(RGB_STRIDE);

        for (src, dst) in src_tail.zip(dst_row[plan.tail_start..].iter_mut()) {
            *dst = exact_pixel(src, params);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::kernels::vector::{RowPlan, TailBranch};

    #[test]
    fn narrow_rows_are_all_tail() {
        for width in [1, 2, 3, 4, 5] {
            let plan = RowPlan::new(width);

            assert_eq!(plan.groups, 0, "width {width}");
            assert_eq!(plan.tail_start, 0, "width {width}");
        }
    }

    #[test]
    fn remainder_widths() {
        assert_eq!(
            RowPlan::new(6),
            RowPlan {
                groups:     1,
                tail_start: 4,
                branch:     TailBranch::UnalignedWidth
            }
        );
        assert_eq!(RowPlan::new(7).tail_start, 4);
        assert_eq!(RowPlan::new(10).groups, 2);
    }

    #[test]
    fn aligned_widths_keep_one_group_for_the_tail() {
        let plan = RowPlan::new(8);

        assert_eq!(plan.branch, TailBranch::AlignedWidth);
        assert_eq!(plan.groups, 1);
        assert_eq!(plan.tail_start, 4);

        assert_eq!(RowPlan::new(64).vector_end(), 60);
    }

    #[test]
    fn width_one_past_a_group_has_no_gap() {
        // vector loop stops at 4, a tail from 8 would skip pixels 4..8
        let plan = RowPlan::new(9);

        assert_eq!(plan.branch, TailBranch::UnalignedWidth);
        assert_eq!(plan.vector_end(), 4);
        assert_eq!(plan.tail_start, 4);
    }

    #[test]
    fn tail_always_follows_vector_groups() {
        for width in 1..200 {
            let plan = RowPlan::new(width);

            assert_eq!(plan.tail_start, plan.vector_end());
            assert!(width - plan.tail_start <= 5 || width < 6);
        }
    }
}
