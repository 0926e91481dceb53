use std::collections::HashMap;

use crate::errors::GIFWriterError;

// see https://www.w3.org/Graphics/GIF/spec-gif89a.txt, appendix F

pub const MAX_CODE_SIZE: u8 = 12;
pub const MAX_DICTIONARY_SIZE: usize = 1 << MAX_CODE_SIZE;

type Code = u16;

/// Compresses color table indices into a GIF LZW code stream (without sub-block framing).
pub fn compress(indices: &[u8], min_code_size: u8) -> Result<Vec<u8>, GIFWriterError> {
    if min_code_size < 2 || min_code_size > 8 {
        return Err(GIFWriterError::ValidationError {
            description: format!("lzw minimum code size should be in 2..=8, got {}", min_code_size),
        });
    }

    let (first, rest) = match indices.split_first() {
        Some(v) => v,
        None => return Err(GIFWriterError::ValidationError {
            description: "can not compress an empty frame".to_string(),
        }),
    };

    let clear_code: Code = 1 << min_code_size;
    let end_code: Code = clear_code + 1;

    if let Some(index) = indices.iter().find(|v| (**v as Code) >= clear_code) {
        return Err(GIFWriterError::ValidationError {
            description: format!("index {} does not fit into {} bit codes", index, min_code_size),
        });
    }

    // single indices are implicit: code of [i] is i
    let mut dictionary: HashMap<(Code, u8), Code> = HashMap::new();
    let mut dictionary_size = end_code as usize + 1;
    let mut code_size = min_code_size + 1;

    let mut bits = BitWriter::with_capacity(indices.len() / 2);
    bits.write_code(clear_code, code_size);

    let mut prefix = *first as Code;
    for &index in rest {
        if let Some(&code) = dictionary.get(&(prefix, index)) {
            prefix = code;
            continue;
        }

        bits.write_code(prefix, code_size);

        // once the table is full, keep emitting codes for existing entries without a reset
        if dictionary_size < MAX_DICTIONARY_SIZE {
            dictionary.insert((prefix, index), dictionary_size as Code);
            dictionary_size += 1;

            if should_increase_code_size(dictionary_size, code_size) {
                code_size += 1;
            }
        }

        prefix = index as Code;
    }

    bits.write_code(prefix, code_size);
    bits.write_code(end_code, code_size);

    Ok(bits.finish())
}

// the decoder lags one entry behind, so widen only once the next code would not fit
pub fn should_increase_code_size(dictionary_size: usize, code_size: u8) -> bool {
    dictionary_size > (1 << code_size) && code_size < MAX_CODE_SIZE
}

/// Packs variable width codes least significant bit first.
struct BitWriter {
    data: Vec<u8>,
    current: u32,
    bits_in_current: u8,
}

impl BitWriter {

    fn with_capacity(capacity: usize) -> Self {
        BitWriter {
            data: Vec::with_capacity(capacity),
            current: 0,
            bits_in_current: 0,
        }
    }

    fn write_code(&mut self, code: Code, code_size: u8) {
        let mask = (1u32 << code_size) - 1;
        self.current |= (code as u32 & mask) << self.bits_in_current;
        self.bits_in_current += code_size;

        while self.bits_in_current >= 8 {
            self.data.push((self.current & 0xFF) as u8);
            self.current >>= 8;
            self.bits_in_current -= 8;
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.bits_in_current > 0 {
            self.data.push((self.current & 0xFF) as u8);
        }
        self.data
    }
}
