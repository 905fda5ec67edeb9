use anyhow::{Context, Result, anyhow, bail};
use std::path::Path;

use symphonia::core::{
    audio::SampleBuffer,
    codecs::{CODEC_TYPE_NULL, DecoderOptions},
    errors::Error as SymphoniaError,
    formats::FormatOptions,
    io::MediaSourceStream,
    meta::MetadataOptions,
    probe::Hint,
};

use audioadapter_buffers::direct::InterleavedSlice;
use rubato::{Fft, FixedSync, Resampler};

/// Chunk size handed to the FFT resampler for whole-clip processing.
const RESAMPLE_CHUNK: usize = 1024;

/// Decode an audio file to mono f32 samples at `sample_rate` Hz.
///
/// Multi-channel audio is downmixed by averaging channels. Files already at
/// the target rate skip resampling.
pub fn decode_to_mono<P: AsRef<Path>>(path: P, sample_rate: u32) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let (interleaved, rate_in, channels) = decode_interleaved(path)?;

    let mono = downmix(interleaved, channels);

    if rate_in == sample_rate {
        return Ok(mono);
    }
    resample(&mono, rate_in, sample_rate)
        .with_context(|| format!("failed to resample {} Hz to {} Hz", rate_in, sample_rate))
}

/// Returns interleaved samples, the source sample rate and the channel count.
fn decode_interleaved(path: &Path) -> Result<(Vec<f32>, u32, usize)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open audio file: {}", path.display()))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("unsupported format or failed to probe container")?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| anyhow!("no supported audio tracks found"))?;

    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track.codec_params.channels.map(|c| c.count());
    let expected_frames = track.codec_params.n_frames;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("failed to create decoder for selected track")?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            // End of stream surfaces as an I/O error.
            Err(SymphoniaError::IoError(_)) => break,
            Err(SymphoniaError::ResetRequired) => bail!("chained streams are not supported"),
            Err(e) => return Err(e).context("error reading next packet"),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder.decode(&packet).context("corrupt audio packet")?;

        sample_rate.get_or_insert(decoded.spec().rate);
        channels.get_or_insert(decoded.spec().channels.count());

        let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, *decoded.spec());
        buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buf.samples());
    }

    let sample_rate = sample_rate.ok_or_else(|| anyhow!("could not determine sample rate"))?;
    let channels = channels.ok_or_else(|| anyhow!("could not determine channel count"))?;

    if samples.is_empty() {
        bail!("decoded audio was empty");
    }

    // The container's frame count is authoritative; stopping short of it
    // means the stream was cut off.
    if let Some(expected) = expected_frames {
        let decoded = (samples.len() / channels.max(1)) as u64;
        if decoded < expected {
            bail!("truncated audio: decoded {decoded} of {expected} frames");
        }
    }

    Ok((samples, sample_rate, channels))
}

fn downmix(interleaved: Vec<f32>, channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved;
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

fn resample(mono: &[f32], rate_in: u32, rate_out: u32) -> Result<Vec<f32>> {
    let mut resampler = Fft::<f32>::new(
        rate_in as usize,
        rate_out as usize,
        RESAMPLE_CHUNK,
        1,
        1,
        FixedSync::Input,
    )
    .context("failed to construct FFT resampler")?;

    let frames_in = mono.len();
    let frames_out = resampler.process_all_needed_output_len(frames_in);
    let mut out = vec![0.0f32; frames_out];

    let input = InterleavedSlice::new(mono, 1, frames_in).context("bad input adapter")?;
    let mut output =
        InterleavedSlice::new_mut(&mut out, 1, frames_out).context("bad output adapter")?;

    let (_read, written) = resampler.process_all_into_buffer(&input, &mut output, frames_in, None)?;

    out.truncate(written);
    Ok(out)
}
