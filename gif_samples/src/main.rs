#[macro_use]
extern crate log;

use std::{env, fs, path::Path, process};

use env_logger::Env;
use gif_support::{GIFWriterOptions, OPTION_LOOP_COUNT};

mod data_uri;
mod patterns;
mod samples;

const DEFAULT_LOGGING_LEVEL: &str = "info";
const DEFAULT_OUTPUT_DIR: &str = "generated-gifs";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    if let Err(err) = run(&args) {
        error!("{}", err);
        error!("usage:\ngif_samples --output-dir=generated-gifs --data-file=assets/js/popularSources.js --loop-count=0");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let output_dir = argument_value(args, "output-dir").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    let mut options = GIFWriterOptions::default();
    if let Some(loop_count) = argument_value(args, "loop-count") {
        options = options.with_option(OPTION_LOOP_COUNT, &loop_count);
    }

    let written = samples::write_samples(Path::new(&output_dir), &options).map_err(|err| err.to_string())?;

    if let Some(data_file) = argument_value(args, "data-file") {
        let sources: Vec<(&str, &[u8])> = written.iter()
            .map(|sample| (sample.key, sample.data.as_slice()))
            .collect();

        if let Some(parent) = Path::new(&data_file).parent() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create directory for {}: {}", data_file, err))?;
        }

        fs::write(&data_file, data_uri::sources_module(&sources))
            .map_err(|err| format!("failed to write {}: {}", data_file, err))?;

        info!("data uris written to {}", data_file);
    }

    for sample in &written {
        debug!("{} saved to {}", sample.key, sample.path.display());
    }
    info!("Finished! {} gifs saved to {}/", written.len(), output_dir);

    Ok(())
}

fn argument_value(args: &[String], argument_name: &str) -> Option<String> {
    let prefix = format!("--{}=", argument_name);
    args.iter()
        .find(|s| s.starts_with(&prefix))
        .map(|s| s[prefix.len()..].to_string())
}
