use std::{fs, path::{Path, PathBuf}};

use custom_error::custom_error;
use gif_support::{Animation, Frame, GIFWriter, GIFWriterOptions};

use crate::patterns::{diagonal_frame, gradient_frame, stripe_frame, HEIGHT, PALETTE, WIDTH};

custom_error! {pub SampleError
    FailedToEncode {description: String} = "Failed to encode sample: {description}",
    FailedToWrite {description: String} = "Failed to write sample: {description}",
}

pub struct Sample {
    pub key: &'static str,
    pub file_name: &'static str,
    pub animation: Animation,
}

pub struct WrittenSample {
    pub key: &'static str,
    pub path: PathBuf,
    pub data: Vec<u8>,
}

pub fn samples() -> Vec<Sample> {
    let frame = |indices: Vec<u8>, delay: u16| Frame::new(indices, WIDTH, HEIGHT).with_delay(delay);
    let animation = || Animation::new(WIDTH, HEIGHT, PALETTE.to_vec());

    vec![
        Sample {
            key: "rickroll",
            file_name: "rickroll-loop.gif",
            animation: animation()
                .with_frame(frame(diagonal_frame(WIDTH, HEIGHT, 1, 2), 8))
                .with_frame(frame(diagonal_frame(WIDTH, HEIGHT, 2, 1), 8)),
        },
        Sample {
            key: "nyan-cat",
            file_name: "nyan-cat-trail.gif",
            animation: animation()
                .with_frame(frame(stripe_frame(WIDTH, HEIGHT, &[7, 4, 3, 1, 2, 5]), 6))
                .with_frame(frame(stripe_frame(WIDTH, HEIGHT, &[5, 2, 1, 3, 4, 7]), 6)),
        },
        Sample {
            key: "dancing-baby",
            file_name: "dancing-baby-wave.gif",
            animation: animation()
                .with_frame(frame(gradient_frame(WIDTH, HEIGHT), 10))
                .with_frame(frame(diagonal_frame(WIDTH, HEIGHT, 5, 6), 10))
                .with_frame(frame(diagonal_frame(WIDTH, HEIGHT, 6, 5), 10)),
        },
    ]
}

pub fn write_samples(output_dir: &Path, options: &GIFWriterOptions) -> Result<Vec<WrittenSample>, SampleError> {
    let writer = GIFWriter::new();
    let mut encoded = Vec::new();

    // nothing is written unless every sample encodes
    for sample in samples() {
        let data = writer.write(&sample.animation, options).map_err(|err| SampleError::FailedToEncode {
            description: format!("{}: {}", sample.file_name, err),
        })?;
        encoded.push((sample, data));
    }

    fs::create_dir_all(output_dir).map_err(|err| SampleError::FailedToWrite {
        description: format!("failed to create output directory {}: {}", output_dir.display(), err),
    })?;

    let mut written = Vec::new();
    for (sample, data) in encoded {
        let path = output_dir.join(sample.file_name);
        fs::write(&path, &data).map_err(|err| SampleError::FailedToWrite {
            description: format!("{}: {}", path.display(), err),
        })?;

        info!("Generated {} ({} bytes)", sample.file_name, data.len());

        written.push(WrittenSample {
            key: sample.key,
            path,
            data,
        });
    }

    Ok(written)
}
