//! RIFF/WAVE serialization and PCM conversion.

use std::io::Write;

use super::format::WavFormat;
use crate::error::{AudioError, AudioResult};

/// Size of the canonical header written before the PCM data.
pub const WAV_HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Errors
/// [`AudioError::TooLong`] if the data does not fit a RIFF chunk, or
/// [`AudioError::Io`] if the writer fails.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> AudioResult<()> {
    let data_size = data_chunk_size(format, pcm_data.len())?;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Size field of the `data` chunk for `pcm_len` bytes of PCM.
///
/// # Errors
/// [`AudioError::TooLong`] if the RIFF size field (`36 + pcm_len`) would
/// overflow a `u32`.
pub(crate) fn data_chunk_size(format: &WavFormat, pcm_len: usize) -> AudioResult<u32> {
    u32::try_from(pcm_len)
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or(AudioError::TooLong {
            num_samples: pcm_len / format.block_align().max(1) as usize,
        })
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are expected to be in range [-1.0, 1.0]. Values outside this range
/// are clipped, so the output spans [-32767, 32767].
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}
