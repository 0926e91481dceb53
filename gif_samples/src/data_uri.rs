use base64::{engine::general_purpose::STANDARD, Engine};

pub const MIME_TYPE: &str = "image/gif";

pub fn data_uri(data: &[u8]) -> String {
    format!("data:{};base64,{}", MIME_TYPE, STANDARD.encode(data))
}

/// JavaScript module exposing every gif as a data uri, keyed by sample name.
pub fn sources_module(sources: &[(&str, &[u8])]) -> String {
    let mut module = String::from("export const POPULAR_GIF_SOURCES = {\n");

    for (key, data) in sources {
        module.push_str(&format!("  '{}': '{}',\n", key, data_uri(data)));
    }

    module.push_str("};\n\n");
    module.push_str("if (typeof window !== \"undefined\") {\n");
    module.push_str("  window.POPULAR_GIF_SOURCES = POPULAR_GIF_SOURCES;\n");
    module.push_str("}\n");

    module
}
