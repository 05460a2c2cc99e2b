//! Box-filter downsampling of the rendered buffer.

use ripple_lattice::{ColorField, LatticeError};

/// Reduces a rendered buffer by an integer factor for presentation.
///
/// Each output pixel is the unweighted mean of its `factor × factor`
/// source block, per channel (box-filter antialiasing). A factor of 1
/// is an identity copy.
#[derive(Clone, Copy, Debug)]
pub struct Downsampler {
    factor: usize,
}

impl Downsampler {
    /// Create a downsampler with the given reduction factor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `factor` is zero.
    pub fn new(factor: usize) -> Result<Self, String> {
        if factor == 0 {
            return Err("reduction factor must be at least 1".into());
        }
        Ok(Self { factor })
    }

    /// The reduction factor.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Output side length for a `src_side` source.
    pub fn output_side(&self, src_side: usize) -> usize {
        src_side / self.factor
    }

    /// Box-filter `src` into `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SizeMismatch`] if the factor does not
    /// divide the source side, or if `dst` is not at the reduced side.
    pub fn downsample(&self, src: &ColorField, dst: &mut ColorField) -> Result<(), LatticeError> {
        let f = self.factor;
        let out_side = src.side() / f;
        if out_side * f != src.side() {
            return Err(LatticeError::SizeMismatch {
                expected: out_side * f,
                got: src.side(),
            });
        }
        if dst.side() != out_side {
            return Err(LatticeError::SizeMismatch {
                expected: out_side,
                got: dst.side(),
            });
        }

        if f == 1 {
            dst.as_mut_slice().copy_from_slice(src.as_slice());
            return Ok(());
        }

        let n = src.side();
        let data = src.as_slice();
        let out = dst.as_mut_slice();
        let inv_area = 1.0 / (f * f) as f32;
        for oy in 0..out_side {
            for ox in 0..out_side {
                let mut sum = [0.0f32; ColorField::CHANNELS];
                for sy in oy * f..(oy + 1) * f {
                    for sx in ox * f..(ox + 1) * f {
                        let base = (sy * n + sx) * ColorField::CHANNELS;
                        for (acc, &c) in sum.iter_mut().zip(&data[base..base + 3]) {
                            *acc += c;
                        }
                    }
                }
                let base = (oy * out_side + ox) * ColorField::CHANNELS;
                for (slot, acc) in out[base..base + 3].iter_mut().zip(sum) {
                    *slot = acc * inv_area;
                }
            }
        }
        Ok(())
    }
}
