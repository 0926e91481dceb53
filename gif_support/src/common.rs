use crate::errors::GIFWriterError;

pub const MAX_COLOR_TABLE_ENTRIES: usize = 256;
pub const MAX_DIMENSION: usize = u16::MAX as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Color {
            red,
            green,
            blue,
        }
    }
}

/// Global color table, padded with black up to a power of two entries.
#[derive(Clone, Debug)]
pub struct ColorTable {

    pub size: usize, // size of table in bytes
    pub bits: u8, // table holds 2^bits entries
    pub colors: Vec<Color>,
}

impl ColorTable {

    pub fn from_palette(palette: &[Color]) -> Result<Self, GIFWriterError> {
        if palette.is_empty() {
            return Err(GIFWriterError::ValidationError {
                description: "palette should contain at least one color".to_string(),
            });
        }

        if palette.len() > MAX_COLOR_TABLE_ENTRIES {
            return Err(GIFWriterError::ValidationError {
                description: format!(
                    "palette has {} colors, but global color table holds at most {}",
                    palette.len(),
                    MAX_COLOR_TABLE_ENTRIES,
                ),
            });
        }

        let bits = color_table_bits(palette.len());
        let mut colors = palette.to_vec();
        colors.resize(1 << bits, Color::black());

        Ok(ColorTable {
            size: colors.len() * 3,
            bits,
            colors,
        })
    }

    /// LZW minimum code size for image data indexing into this table.
    pub fn min_code_size(&self) -> u8 {
        min_code_size_for(self.bits)
    }
}

/// Smallest `bits >= 1` such that `2^bits >= number_of_colors`.
pub fn color_table_bits(number_of_colors: usize) -> u8 {
    let mut bits = 1;
    while (1 << bits) < number_of_colors {
        bits += 1;
    }
    bits
}

// decoders reject minimum code sizes below 2, even for two-color tables
pub fn min_code_size_for(color_table_bits: u8) -> u8 {
    color_table_bits.max(2)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {

    pub indices: Vec<u8>, // starting at top left pixel, pos = y * width + x
    pub width: usize,
    pub height: usize,
    pub delay: u16, // centiseconds
    pub transparent_index: Option<u8>,
}

impl Frame {

    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        Frame {
            indices,
            width,
            height,
            delay: 0,
            transparent_index: None,
        }
    }

    pub fn with_delay(mut self, delay: u16) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_transparent_index(mut self, transparent_index: u8) -> Self {
        self.transparent_index = Some(transparent_index);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Animation {
    pub width: usize,
    pub height: usize,
    pub palette: Vec<Color>,
    pub frames: Vec<Frame>,
}

impl Animation {

    pub fn new(width: usize, height: usize, palette: Vec<Color>) -> Self {
        Animation {
            width,
            height,
            palette,
            frames: Vec::new(),
        }
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }
}
