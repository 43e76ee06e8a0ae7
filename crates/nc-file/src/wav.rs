//! WAV reading and writing

use std::path::Path;

use nc_core::AudioSignal;
use nc_dsp::{SampleData, to_mono_signal};

use crate::{FileError, FileResult};

/// Decoded WAV contents, interleaved, in the file's own encoding
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channels: usize,
    /// Raw samples
    pub data: SampleData,
}

impl DecodedAudio {
    /// Number of sample frames
    pub fn num_frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.data.len() / self.channels
        }
    }

    /// Normalize to a mono float signal
    pub fn to_signal(&self) -> FileResult<AudioSignal> {
        Ok(to_mono_signal(self.sample_rate, self.channels, &self.data)?)
    }
}

fn check_extension(path: &Path) -> FileResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("wav") || ext.eq_ignore_ascii_case("wave") => {
            Ok(())
        }
        _ => Err(FileError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Read WAV file using hound
pub fn read_wav<P: AsRef<Path>>(path: P) -> FileResult<DecodedAudio> {
    let path = path.as_ref();
    check_extension(path)?;

    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let data = match spec.sample_format {
        hound::SampleFormat::Float => SampleData::Float(
            reader
                .into_samples::<f32>()
                .collect::<Result<Vec<_>, _>>()?,
        ),
        hound::SampleFormat::Int => SampleData::Int {
            bits_per_sample: spec.bits_per_sample,
            samples: reader
                .into_samples::<i32>()
                .collect::<Result<Vec<_>, _>>()?,
        },
    };

    log::debug!(
        "Read {}: {} Hz, {} ch, {} bit {:?}, {} samples",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format,
        data.len()
    );

    Ok(DecodedAudio {
        sample_rate: spec.sample_rate,
        channels: spec.channels as usize,
        data,
    })
}

/// Read a WAV file straight into a mono float signal
pub fn read_signal<P: AsRef<Path>>(path: P) -> FileResult<AudioSignal> {
    read_wav(path)?.to_signal()
}

/// Write mono 16-bit PCM WAV
pub fn write_wav_i16<P: AsRef<Path>>(path: P, sample_rate: u32, samples: &[i16]) -> FileResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    log::info!(
        "Wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nc_core::DenoiseError;

    fn write_stereo_i16(path: &Path, frames: &[(i16, i16)]) {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &(l, r) in frames {
            writer.write_sample(l).unwrap();
            writer.write_sample(r).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_write_then_read_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        write_wav_i16(&path, 16000, &[0, 32767, -32767, 100]).unwrap();

        let decoded = read_wav(&path).unwrap();
        assert_eq!(decoded.sample_rate, 16000);
        assert_eq!(decoded.channels, 1);
        assert_eq!(
            decoded.data,
            SampleData::Int {
                bits_per_sample: 16,
                samples: vec![0, 32767, -32767, 100],
            }
        );
    }

    #[test]
    fn test_stereo_file_to_signal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_stereo_i16(&path, &[(32767, 32767), (32767, -32767), (0, 16384)]);

        let signal = read_signal(&path).unwrap();
        assert_eq!(signal.sample_rate(), 22050);
        assert_eq!(signal.len(), 3);
        assert_eq!(signal.samples()[0], 1.0);
        assert_eq!(signal.samples()[1], 0.0);
        assert_abs_diff_eq!(signal.samples()[2], 16384.0 / 65534.0, epsilon = 1e-6);
    }

    #[test]
    fn test_float_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for s in [0.25f32, -0.75, 0.5] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let signal = read_signal(&path).unwrap();
        assert_eq!(signal.samples(), &[0.25, -0.75, 0.5]);
    }

    #[test]
    fn test_empty_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        write_wav_i16(&path, 16000, &[]).unwrap();

        assert!(matches!(
            read_signal(&path),
            Err(FileError::Denoise(DenoiseError::Format(_)))
        ));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(matches!(
            read_wav("track.mp3"),
            Err(FileError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_wav(dir.path().join("missing.wav")),
            Err(FileError::Io(_))
        ));
    }
}
