use byteorder::{ByteOrder, LittleEndian};

use crate::{
    common::{Animation, Color, ColorTable, Frame, MAX_DIMENSION},
    errors::GIFWriterError,
    lzw::compress,
    options::{GIFWriterOptions, OPTION_LOOP, OPTION_LOOP_COUNT},
};

// see https://www.w3.org/Graphics/GIF/spec-gif89a.txt

pub const MAX_SUB_BLOCK_SIZE: usize = 255;

const EXTENSION_INTRODUCER: u8 = 0x21;
const APPLICATION_EXTENSION_LABEL: u8 = 0xFF;
const GRAPHIC_CONTROL_EXTENSION_LABEL: u8 = 0xF9;
const IMAGE_SEPARATOR: u8 = 0x2C;
const BLOCK_TERMINATOR: u8 = 0x00;
const TRAILER: u8 = 0x3B;

pub struct GIFWriter {
}

impl GIFWriter {

    pub fn new() -> Self {
        GIFWriter {
        }
    }

    pub fn write(&self, animation: &Animation, options: &GIFWriterOptions) -> Result<Vec<u8>, GIFWriterError> {
        let looping = options.get_bool(OPTION_LOOP, true)?;
        let loop_count = options.get_u32(OPTION_LOOP_COUNT, 0)?;

        if loop_count > u16::MAX as u32 {
            return Err(GIFWriterError::InvalidOptions {
                description: format!("loop count should fit into 16 bits, got {}", loop_count),
            });
        }

        write_gif(
            animation.width,
            animation.height,
            &animation.palette,
            &animation.frames,
            if looping { Some(loop_count as u16) } else { None },
        )
    }
}

/// Encodes frames into a complete GIF89a file, looping forever when `looping` is set.
pub fn build(width: usize, height: usize, palette: &[Color], frames: &[Frame], looping: bool) -> Result<Vec<u8>, GIFWriterError> {
    write_gif(width, height, palette, frames, if looping { Some(0) } else { None })
}

fn write_gif(width: usize, height: usize, palette: &[Color], frames: &[Frame], loop_count: Option<u16>) -> Result<Vec<u8>, GIFWriterError> {
    let global_color_table = ColorTable::from_palette(palette)?;
    let (screen_width, screen_height) = check_dimensions(width, height)?;

    if frames.is_empty() {
        return Err(GIFWriterError::ValidationError {
            description: "gif should contain at least one frame".to_string(),
        });
    }

    for (frame_index, frame) in frames.iter().enumerate() {
        validate_frame(frame_index, frame, palette.len())?;
    }

    debug!(
        "writing {}x{} gif: {} frames, {} colors in a {} bit global color table",
        width,
        height,
        frames.len(),
        palette.len(),
        global_color_table.bits,
    );

    let mut data = Vec::new();
    data.append(&mut write_header(screen_width, screen_height, &global_color_table));
    data.append(&mut write_color_table(&global_color_table));

    if let Some(loop_count) = loop_count {
        data.append(&mut write_application_extension(loop_count));
    }

    let min_code_size = global_color_table.min_code_size();
    for (frame_index, frame) in frames.iter().enumerate() {
        let mut image_block = build_image_block(
            &frame.indices,
            min_code_size,
            frame.width,
            frame.height,
            frame.delay,
            frame.transparent_index,
        )?;
        trace!("frame #{} takes {} bytes", frame_index, image_block.len());

        data.append(&mut image_block);
    }

    data.push(TRAILER);

    Ok(data)
}

/// Graphic control extension, image descriptor and LZW image data for a single full-canvas frame.
pub fn build_image_block(
    indices: &[u8],
    min_code_size: u8,
    width: usize,
    height: usize,
    delay: u16,
    transparent_index: Option<u8>,
) -> Result<Vec<u8>, GIFWriterError> {
    let (image_width, image_height) = check_dimensions(width, height)?;
    check_frame_length(indices, width, height)?;

    if let Some(transparent_index) = transparent_index {
        // any u8 fits into 8 bit codes, larger code sizes are rejected by compress
        if min_code_size < 8 && (transparent_index as usize) >= (1usize << min_code_size) {
            return Err(GIFWriterError::ValidationError {
                description: format!("transparent index {} does not fit into {} bit codes", transparent_index, min_code_size),
            });
        }
    }

    let compressed_data = compress(indices, min_code_size)?;

    let mut sub_blocks = write_sub_blocks(&compressed_data)?;
    trace!(
        "compressed {} indices into {} bytes of lzw data, {} bytes with sub-block framing",
        indices.len(),
        compressed_data.len(),
        sub_blocks.len(),
    );

    let mut data = Vec::with_capacity(8 + 10 + 1 + sub_blocks.len());
    data.append(&mut write_graphic_control_extension(delay, transparent_index));
    data.append(&mut write_local_image_descriptor(image_width, image_height));
    data.push(min_code_size);
    data.append(&mut sub_blocks);

    Ok(data)
}

fn write_header(width: u16, height: u16, global_color_table: &ColorTable) -> Vec<u8> {
    let mut data: Vec<u8> = vec![0 as u8; 13];
    data[0..6].copy_from_slice(b"GIF89a");

    LittleEndian::write_u16(&mut data[6..8], width);
    LittleEndian::write_u16(&mut data[8..10], height);

    let size_of_global_color_table = global_color_table.bits - 1;
    let mut packed: u8 = 0;
    packed = packed | size_of_global_color_table;
    packed = packed | (size_of_global_color_table << 4); // color resolution
    packed = packed | 0b10000000; // use global color table
    data[10] = packed;

    // data[11] is background color index, data[12] is pixel aspect ratio, both stay 0

    data
}

fn write_color_table(color_table: &ColorTable) -> Vec<u8> {
    let mut data = Vec::with_capacity(color_table.size);

    for color in &color_table.colors {
        data.push(color.red);
        data.push(color.green);
        data.push(color.blue);
    }

    data
}

// NETSCAPE2.0 looping extension, loop count 0 means forever
fn write_application_extension(loop_count: u16) -> Vec<u8> {
    let mut data: Vec<u8> = vec![0 as u8; 19];
    data[0] = EXTENSION_INTRODUCER;
    data[1] = APPLICATION_EXTENSION_LABEL;
    data[2] = 0x0B;
    data[3..14].copy_from_slice(b"NETSCAPE2.0");
    data[14] = 0x03; // sub-block size
    data[15] = 0x01; // sub-block id
    LittleEndian::write_u16(&mut data[16..18], loop_count);
    data[18] = BLOCK_TERMINATOR;

    data
}

fn write_graphic_control_extension(delay: u16, transparent_index: Option<u8>) -> Vec<u8> {
    let mut data: Vec<u8> = vec![0 as u8; 8];
    data[0] = EXTENSION_INTRODUCER;
    data[1] = GRAPHIC_CONTROL_EXTENSION_LABEL;
    data[2] = 0x04;

    let (packed, transparent_color_index) = match transparent_index {
        Some(index) => (0b1, index),
        None => (0, 0),
    };
    data[3] = packed;

    LittleEndian::write_u16(&mut data[4..6], delay);
    data[6] = transparent_color_index;
    data[7] = BLOCK_TERMINATOR;

    data
}

fn write_local_image_descriptor(width: u16, height: u16) -> Vec<u8> {
    let mut data: Vec<u8> = vec![0 as u8; 10];
    data[0] = IMAGE_SEPARATOR;

    LittleEndian::write_u16(&mut data[1..3], 0); // left
    LittleEndian::write_u16(&mut data[3..5], 0); // top
    LittleEndian::write_u16(&mut data[5..7], width);
    LittleEndian::write_u16(&mut data[7..9], height);

    data[9] = 0; // no local color table, not interlaced

    data
}

/// Splits data into length-prefixed sub-blocks followed by the zero-length terminator.
pub fn write_sub_blocks(data: &[u8]) -> Result<Vec<u8>, GIFWriterError> {
    let mut blocks = Vec::with_capacity(data.len() + data.len() / MAX_SUB_BLOCK_SIZE + 2);

    for chunk in data.chunks(MAX_SUB_BLOCK_SIZE) {
        write_sub_block(&mut blocks, chunk)?;
    }

    blocks.push(BLOCK_TERMINATOR);

    Ok(blocks)
}

fn write_sub_block(blocks: &mut Vec<u8>, chunk: &[u8]) -> Result<(), GIFWriterError> {
    if chunk.len() > MAX_SUB_BLOCK_SIZE {
        return Err(GIFWriterError::CapacityError {
            description: format!("sub-block holds at most {} bytes, got {}", MAX_SUB_BLOCK_SIZE, chunk.len()),
        });
    }

    blocks.push(chunk.len() as u8);
    blocks.extend_from_slice(chunk);

    Ok(())
}

fn check_dimensions(width: usize, height: usize) -> Result<(u16, u16), GIFWriterError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(GIFWriterError::CapacityError {
            description: format!("{}x{} does not fit into 16 bit dimensions", width, height),
        });
    }

    Ok((width as u16, height as u16))
}

fn check_frame_length(indices: &[u8], width: usize, height: usize) -> Result<(), GIFWriterError> {
    if indices.is_empty() {
        return Err(GIFWriterError::ValidationError {
            description: "frame has no pixels".to_string(),
        });
    }

    if indices.len() != width * height {
        return Err(GIFWriterError::ValidationError {
            description: format!("frame has {} pixels, expected {}x{}", indices.len(), width, height),
        });
    }

    Ok(())
}

fn validate_frame(frame_index: usize, frame: &Frame, palette_size: usize) -> Result<(), GIFWriterError> {
    check_dimensions(frame.width, frame.height)?;
    check_frame_length(&frame.indices, frame.width, frame.height)?;

    if let Some(position) = frame.indices.iter().position(|v| *v as usize >= palette_size) {
        return Err(GIFWriterError::ValidationError {
            description: format!(
                "frame #{}: index {} at position {} is out of palette with {} colors",
                frame_index,
                frame.indices[position],
                position,
                palette_size,
            ),
        });
    }

    if let Some(transparent_index) = frame.transparent_index {
        if transparent_index as usize >= palette_size {
            return Err(GIFWriterError::ValidationError {
                description: format!(
                    "frame #{}: transparent index {} is out of palette with {} colors",
                    frame_index,
                    transparent_index,
                    palette_size,
                ),
            });
        }
    }

    Ok(())
}
