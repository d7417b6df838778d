use clap::Parser;
use log::{error, info};
use simple_logger::init_with_level;
use orfscan::{Args, orfscan};

fn main() {
    let start = std::time::Instant::now();
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting orfscan with args: {}", args);

    if let Err(e) = orfscan(args) {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Elapsed time: {:.3?}", start.elapsed());
}
