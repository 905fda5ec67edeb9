use mel_spec::prelude::*;
use ndarray::{Array1, Array2};

use crate::config::FeatureConfig;
use crate::features::FeatureMatrix;

/// Convert mono PCM at `config.sample_rate` into an MFCC matrix.
///
/// Each hop of input feeds the STFT; every emitted FFT frame becomes one row
/// of `config.n_mfcc` cepstral coefficients. Rows are time, columns are
/// coefficients. The STFT emits its first frame on the second hop, so input
/// of `config.hop_size` samples or fewer yields zero rows.
pub fn pcm_to_mfcc(pcm: &[f32], config: &FeatureConfig) -> FeatureMatrix {
    let mut stft = Spectrogram::new(config.fft_size, config.hop_size);
    let mut mel = MelSpectrogram::new(config.fft_size, config.sample_rate as f64, config.n_mels);
    let basis = dct_basis(config.n_mfcc, config.n_mels);

    let mut rows = 0usize;
    let mut coefficients: Vec<f32> = Vec::new();

    for chunk in pcm.chunks(config.hop_size) {
        // pad the final short hop
        let mut hop = vec![0.0f32; config.hop_size];
        hop[..chunk.len()].copy_from_slice(chunk);

        if let Some(fft_frame) = stft.add(&hop) {
            let mel_frame: Array2<f64> = mel.add(&fft_frame);
            let log_mel: Array1<f64> = mel_frame.iter().copied().collect();
            let cepstrum = basis.dot(&log_mel);
            coefficients.extend(cepstrum.iter().map(|&c| c as f32));
            rows += 1;
        }
    }

    // every frame contributed exactly n_mfcc values, row after row
    Array2::from_shape_fn((rows, config.n_mfcc), |(r, c)| coefficients[r * config.n_mfcc + c])
}

/// Orthonormal DCT-II basis restricted to the first `n_out` coefficients,
/// shape `(n_out, n_in)`.
fn dct_basis(n_out: usize, n_in: usize) -> Array2<f64> {
    let n = n_in as f64;
    Array2::from_shape_fn((n_out, n_in), |(k, i)| {
        let scale = if k == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
        scale * (std::f64::consts::PI / n * (i as f64 + 0.5) * k as f64).cos()
    })
}
