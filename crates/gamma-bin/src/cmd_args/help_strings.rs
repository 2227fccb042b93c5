pub static VARIANT_HELP: &str = "Kernel implementation to run

0  scalar, library power function
1  scalar, integer power with a square root or linear fractional part
2  grayscale pass followed by an in place gamma pass
3  four pixels at a time, library power function per pixel
4  four pixels at a time, Taylor series power, least accurate for dark pixels

Any other value is rejected";

pub static BENCH_HELP: &str = "Number of times the kernel is run

The elapsed wall clock time covers all repetitions and is printed
after the run. Zero runs no kernel at all and writes a black image.";

pub static COEFFS_HELP: &str = "Weights of the grayscale conversion

gray = (A * R + B * G + C * B) / (A + B + C)

All weights must be non-negative and at least one must be larger than zero.";

pub static GAMMA_HELP: &str = "Gamma exponent applied to the normalized grayscale value

Values above one darken the image, values below one brighten it.
Must be non-negative.";
