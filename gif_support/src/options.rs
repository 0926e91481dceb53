use std::collections::HashMap;

use crate::errors::GIFWriterError;

pub const OPTION_LOOP: &str = "loop";
pub const OPTION_LOOP_COUNT: &str = "loop_count";

#[derive(Clone, Debug, Default)]
pub struct GIFWriterOptions {

    options: HashMap<String, String>,
}

impl GIFWriterOptions {

    pub fn with_option(&self, key: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.insert(key.to_string(), value.to_string());

        Self {
            options,
        }
    }

    pub fn with_option_u32(&self, key: &str, value: u32) -> Self {
        self.with_option(key, &value.to_string())
    }

    pub fn with_option_bool(&self, key: &str, value: bool) -> Self {
        self.with_option(key, if value {
            "true"
        } else {
            "false"
        })
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, GIFWriterError> {
        let value = match self.options.get(key) {
            Some(v) => v,
            None => return Ok(default),
        };

        match value.to_lowercase().trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(GIFWriterError::InvalidOptions {
                description: format!("failed to parse option {} as a bool: {}", key, other),
            })
        }
    }

    pub fn get_u32(&self, key: &str, default: u32) -> Result<u32, GIFWriterError> {
        let value = match self.options.get(key) {
            Some(v) => v,
            None => return Ok(default),
        };

        value.trim().parse().map_err(|err| GIFWriterError::InvalidOptions {
            description: format!("failed to parse option {} as u32: {}", key, err),
        })
    }
}
