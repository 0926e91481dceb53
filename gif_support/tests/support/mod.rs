// Minimal GIF89a reader, only used to check what the writer produces.
#![allow(dead_code)]

use bit_vec::BitVec;
use byteorder::{ByteOrder, LittleEndian};

const MAX_CODE_SIZE: u8 = 12;
const MAX_DICTIONARY_SIZE: usize = 1 << MAX_CODE_SIZE;

pub struct DecodedGIF {
    pub width: u16,
    pub height: u16,
    pub colors: Vec<(u8, u8, u8)>,
    pub loop_count: Option<u16>,
    pub frames: Vec<DecodedFrame>,
}

pub struct DecodedFrame {
    pub width: u16,
    pub height: u16,
    pub delay: u16,
    pub transparent_index: Option<u8>,
    pub min_code_size: u8,
    pub indices: Vec<u8>,
}

#[derive(Default)]
struct GraphicControl {
    delay: u16,
    transparent_index: Option<u8>,
}

pub fn read_gif(data: &[u8]) -> DecodedGIF {
    assert_eq!(&data[0..6], b"GIF89a", "unexpected signature");

    let width = LittleEndian::read_u16(&data[6..8]);
    let height = LittleEndian::read_u16(&data[8..10]);
    let packed = data[10];
    assert_eq!(packed & 0b10000000, 0b10000000, "expected global color table");

    let number_of_colors = 1usize << ((packed & 0b111) + 1);
    let colors: Vec<(u8, u8, u8)> = data[13..13 + number_of_colors * 3]
        .chunks(3)
        .map(|c| (c[0], c[1], c[2]))
        .collect();

    let mut data = &data[13 + number_of_colors * 3..];
    let mut loop_count = None;
    let mut frames = Vec::new();
    let mut graphic_control = GraphicControl::default();

    loop {
        match data[0] {
            0x21 if data[1] == 0xF9 => {
                assert_eq!(data[2], 0x04, "unexpected graphic control extension size");
                let packed = data[3];
                graphic_control = GraphicControl {
                    delay: LittleEndian::read_u16(&data[4..6]),
                    transparent_index: if packed & 0b1 == 1 { Some(data[6]) } else { None },
                };
                assert_eq!(data[7], 0, "expected block terminator");
                data = &data[8..];
            },
            0x21 if data[1] == 0xFF => {
                let identifier_size = data[2] as usize;
                let identifier = &data[3..3 + identifier_size];
                let (payload, rest) = read_sub_blocks(&data[3 + identifier_size..]);
                if identifier == b"NETSCAPE2.0" && payload.len() >= 3 && payload[0] == 0x01 {
                    loop_count = Some(LittleEndian::read_u16(&payload[1..3]));
                }
                data = rest;
            },
            0x21 => {
                let (_, rest) = read_sub_blocks(&data[2..]);
                data = rest;
            },
            0x2C => {
                let frame_width = LittleEndian::read_u16(&data[5..7]);
                let frame_height = LittleEndian::read_u16(&data[7..9]);
                assert_eq!(data[9], 0, "local color tables and interlacing are not expected");

                let min_code_size = data[10];
                let (compressed_data, rest) = read_sub_blocks(&data[11..]);
                let indices = decompress(&compressed_data, min_code_size);

                frames.push(DecodedFrame {
                    width: frame_width,
                    height: frame_height,
                    delay: graphic_control.delay,
                    transparent_index: graphic_control.transparent_index,
                    min_code_size,
                    indices,
                });
                graphic_control = GraphicControl::default();
                data = rest;
            },
            0x3B => {
                assert_eq!(data.len(), 1, "unexpected data after trailer");
                break;
            },
            other => panic!("unexpected block introducer: {:x}", other),
        }
    }

    DecodedGIF {
        width,
        height,
        colors,
        loop_count,
        frames,
    }
}

/// Returns concatenated sub-block payload and the data following the block terminator.
pub fn read_sub_blocks(mut data: &[u8]) -> (Vec<u8>, &[u8]) {
    let mut payload = Vec::new();

    while data[0] != 0 {
        let size = data[0] as usize;
        payload.extend_from_slice(&data[1..size + 1]);
        data = &data[size + 1..];
    }

    (payload, &data[1..])
}

pub fn decompress(data: &[u8], min_code_size: u8) -> Vec<u8> {
    let bits = bit_vec_for_source_bytes(data);

    let clear_code = 1usize << min_code_size;
    let end_code = clear_code + 1;

    let mut pixels = Vec::new();
    let mut dictionary = init_dictionary(clear_code);
    let mut code_size = min_code_size + 1;
    let mut offset = 0;
    let mut prev: Option<Vec<u8>> = None;

    while offset + code_size as usize <= bits.len() {
        let code = read_bits(&bits, offset, code_size) as usize;
        offset += code_size as usize;

        if code == clear_code {
            dictionary = init_dictionary(clear_code);
            code_size = min_code_size + 1;
            prev = None;
            continue;
        }

        if code == end_code {
            return pixels;
        }

        let entry = if code < dictionary.len() {
            dictionary[code].clone()
        } else if code == dictionary.len() {
            // match to an entry that has just been encoded
            let prev = prev.as_ref().expect("expected prev code to be present for a code which is not in dictionary yet");
            let mut entry = prev.clone();
            entry.push(prev[0]);
            entry
        } else {
            panic!("code {} is out of dictionary with {} entries", code, dictionary.len());
        };

        if let Some(prev) = prev {
            if dictionary.len() < MAX_DICTIONARY_SIZE {
                let mut new_entry = prev;
                new_entry.push(entry[0]);
                dictionary.push(new_entry);
            }
        }

        if dictionary.len() == (1 << code_size) && code_size < MAX_CODE_SIZE {
            code_size += 1;
        }

        pixels.extend_from_slice(&entry);
        prev = Some(entry);
    }

    panic!("lzw data ended without end code");
}

fn init_dictionary(clear_code: usize) -> Vec<Vec<u8>> {
    let mut dictionary: Vec<Vec<u8>> = (0..clear_code).map(|i| vec![i as u8]).collect();
    dictionary.push(Vec::new()); // clear
    dictionary.push(Vec::new()); // end
    dictionary
}

fn read_bits(bits: &BitVec, offset: usize, total: u8) -> u16 {
    let mut result = 0;

    for i in 0..total {
        result = result << 1;
        let bit = if bits[offset + (total as usize - 1 - i as usize)] { 1 } else { 0 };
        result = result | bit;
    }

    result
}

fn bit_vec_for_source_bytes(data: &[u8]) -> BitVec {
    BitVec::from_fn(data.len() * 8, |x| (data[x / 8] >> (x % 8)) & 0b1 == 1)
}
