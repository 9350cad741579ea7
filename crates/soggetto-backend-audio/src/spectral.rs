//! FFT-based buffer operations.
//!
//! Convolution multiplies spectra; band removal zeroes a range of bins and
//! its mirror image. Every result keeps only the real part of the inverse
//! transform.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::buffer::AudioBuffer;
use crate::error::{AudioError, AudioResult};

/// Forward FFT of `samples`, zero-padded to `len`.
fn spectrum(planner: &mut FftPlanner<f64>, samples: &[f64], len: usize) -> Vec<Complex<f64>> {
    let mut bins: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    bins.resize(len, Complex::new(0.0, 0.0));
    planner.plan_fft_forward(len).process(&mut bins);
    bins
}

/// Inverse FFT scaled by 1/N, real part only.
fn real_inverse(planner: &mut FftPlanner<f64>, mut bins: Vec<Complex<f64>>) -> Vec<f64> {
    let len = bins.len();
    planner.plan_fft_inverse(len).process(&mut bins);
    bins.iter().map(|c| c.re / len as f64).collect()
}

/// Circular convolution of `a` and `b` over `len` points.
fn convolve(a: &[f64], b: &[f64], len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    let mut planner = FftPlanner::new();
    let fa = spectrum(&mut planner, a, len);
    let fb = spectrum(&mut planner, b, len);
    let product = fa.iter().zip(&fb).map(|(&x, &y)| x * y).collect();
    real_inverse(&mut planner, product)
}

impl AudioBuffer {
    /// Circular convolution with `other`.
    ///
    /// The shorter buffer is zero-padded to the length of the longer one,
    /// which is also the length of the result.
    ///
    /// # Errors
    /// [`AudioError::SampleRateMismatch`] if the rates differ.
    pub fn convolve_circular(&self, other: &AudioBuffer) -> AudioResult<AudioBuffer> {
        self.ensure_same_rate(other)?;
        let len = self.len().max(other.len());
        Ok(AudioBuffer::new(
            convolve(self.samples(), other.samples(), len),
            self.sample_rate(),
        ))
    }

    /// Linear convolution with `other`.
    ///
    /// The result holds `self.len() + other.len() - 1` samples, or none if
    /// either buffer is empty. Both inputs are padded to the next power of
    /// two so the circular product does not wrap.
    ///
    /// # Errors
    /// [`AudioError::SampleRateMismatch`] if the rates differ.
    pub fn convolve_linear(&self, other: &AudioBuffer) -> AudioResult<AudioBuffer> {
        self.ensure_same_rate(other)?;
        if self.is_empty() || other.is_empty() {
            return Ok(AudioBuffer::empty(self.sample_rate()));
        }

        let out_len = self.len() + other.len() - 1;
        let mut samples = convolve(self.samples(), other.samples(), out_len.next_power_of_two());
        samples.truncate(out_len);
        Ok(AudioBuffer::new(samples, self.sample_rate()))
    }

    /// Removes the frequencies in `[low_freq, high_freq)` Hz.
    ///
    /// Bin indices are `floor(freq * len / sample_rate)`, clamped to the
    /// buffer length; the mirrored negative-frequency bins are zeroed too.
    ///
    /// # Errors
    /// [`AudioError::InvalidBand`] if either edge is negative or not finite,
    /// or `low_freq > high_freq`.
    pub fn clean(&mut self, low_freq: f64, high_freq: f64) -> AudioResult<()> {
        if !low_freq.is_finite() || !high_freq.is_finite() || low_freq < 0.0 || low_freq > high_freq
        {
            return Err(AudioError::InvalidBand {
                low: low_freq,
                high: high_freq,
            });
        }

        let n = self.len();
        if n == 0 {
            return Ok(());
        }

        let bins_per_hz = n as f64 / self.sample_rate() as f64;
        let k_low = ((low_freq * bins_per_hz) as usize).min(n);
        let k_high = ((high_freq * bins_per_hz) as usize).min(n);

        let mut planner = FftPlanner::new();
        let mut bins = spectrum(&mut planner, self.samples(), n);
        let zero = Complex::new(0.0, 0.0);
        bins[k_low..k_high].fill(zero);
        bins[n - k_high..n - k_low].fill(zero);

        *self = AudioBuffer::new(real_inverse(&mut planner, bins), self.sample_rate());
        Ok(())
    }
}
