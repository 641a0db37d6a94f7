use log::{debug, error};
use std::process;

use recipe_writer::{run_stdio, WriterConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match WriterConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!("{:#?}", config);

    match run_stdio(config) {
        Ok(written) => debug!("wrote {} recipe file(s)", written.len()),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
