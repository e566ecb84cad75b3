//! Example: Parsing a Command Line
//!
//! Parses this process's arguments the way the batch tester does at startup,
//! checking `-device` against CUDA devices found by candle (none unless built
//! with `--features cuda`).
//!
//! Run with:
//!
//! ```bash
//! cargo run --example parse_args -- -logstep 10000 -uid alice/box1
//! cargo run --example parse_args -- -h
//! cargo run --example parse_args --features cuda -- -device 0 -time kernels
//! OWL_STRICT_NUMBERS=1 cargo run --example parse_args -- -logstep 10k
//! ```

use std::process::ExitCode;

use owl_args::{
    init_logging, CandleDevices, ConfigParser, LogConfig, ParseOutcome, ParserOptions,
    TracingLogger,
};

fn main() -> ExitCode {
    init_logging(&LogConfig::production());

    let devices = CandleDevices::probe();
    let strict = std::env::var("OWL_STRICT_NUMBERS").is_ok_and(|v| v == "1");
    let parser = ConfigParser::new(&devices, &TracingLogger)
        .with_options(ParserOptions::new().with_strict_numbers(strict));

    match parser.parse(std::env::args()) {
        ParseOutcome::Parsed(config) => {
            println!("log every {} iterations", config.log_step);
            println!("checkpoint every {} iterations", config.save_step);
            println!("check every {} iterations", config.check_step);
            match config.device {
                Some(ordinal) => println!("device {ordinal}"),
                None => println!("device: first available"),
            }
            ExitCode::SUCCESS
        }
        ParseOutcome::Help => ExitCode::SUCCESS,
        ParseOutcome::Error(_) => ExitCode::from(2),
    }
}
