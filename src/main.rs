extern crate simple_logging;
extern crate log;

use std::fs::File;
use std::process;
use std::io::{self, Read};
use atty::Stream;
use clap::{App, Arg};
use log::LevelFilter;

use feedharvest::config::CONFIG;
use feedharvest::export::{download_json, FileDownload};
use feedharvest::options::Options;

fn load_stdin() -> io::Result<String> {
    log::trace!("In load_stdin");

    if atty::is(Stream::Stdin) {
        return Err(io::Error::new(io::ErrorKind::Other, "stdin not redirected"));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    return Ok(buffer);
}

fn main() {
    let _ = simple_logging::log_to_file("debug.log", LevelFilter::Trace);

    log::trace!("In main");

    let mut document = String::new();

    match load_stdin() {
        Ok(stdin) => {
            document = stdin;
        }
        Err(_e) => {
            log::debug!("Did not receive input from stdin");
        }
    }

    let matches = App::new("chat-to-json")
        .arg(Arg::with_name("file")
             .short('f')
             .long("file")
             .value_name("FILE")
             .help("Provide file as feed snapshot for extraction"))
        .arg(Arg::with_name("beautify")
             .short('b')
             .long("beautify")
             .takes_value(false)
             .help("Pretty-print the exported JSON"))
        .arg(Arg::with_name("delay")
             .short('d')
             .long("delay")
             .value_name("MS")
             .help("Pacing between extraction ticks in milliseconds"))
        .arg(Arg::with_name("output")
             .short('o')
             .long("output")
             .value_name("FILE")
             .help("Override the export filename"))
        .get_matches();

    if let Some(file_name) = matches.value_of("file") {
        log::debug!("file_name: {}", file_name);
        let mut file = File::open(file_name).unwrap_or_else(|err| {
            eprintln!("Failed to open file: {}", err);
            process::exit(1);
        });

        file.read_to_string(&mut document).unwrap_or_else(|err| {
            eprintln!("Failed to read file: {}", err);
            process::exit(1);
        });
    } else {
        log::debug!("File not provided");
    }

    if document.trim().is_empty() {
        log::debug!("Document not provided, aborting...");
        return;
    }

    let mut options = Options::default();
    options.beautify = matches.is_present("beautify");

    if let Some(delay) = matches.value_of("delay") {
        match delay.parse::<u64>() {
            Ok(delay) => options.delay = delay,
            Err(_) => log::error!("Unexpected delay value: {}", delay),
        }
    }

    match feedharvest::extract(document, &options) {
        Ok(messages) => {
            let filename = matches
                .value_of("output")
                .map(str::to_string)
                .unwrap_or_else(|| CONFIG.read().unwrap().export.filename.clone());

            download_json(&mut FileDownload, &messages, &filename, options.beautify);
            println!("{} messages -> {}", messages.len(), filename);
        }
        Err(err) => {
            log::error!("Extraction failed: {:?}", err);
            process::exit(1);
        }
    }
}
