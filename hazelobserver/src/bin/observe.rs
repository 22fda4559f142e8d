//! Demo replay runner: feeds a recorded sequence of captured datagrams
//! through an `Observer` and prints the resulting digest (or full snapshot)
//! after each one that changed state. Stands in for the external capture
//! collaborator (§1 "out of scope") just enough to exercise the public
//! boundary from a terminal; it does not touch a live socket.
//!
//! Input is a sequence of `[u32LE length][length bytes]` records — the
//! simplest framing for a saved `tcpdump`/`scapy`-style capture, one record
//! per UDP payload observed on port 22023 (§6.4).

use byteorder::{LittleEndian, ReadBytesExt};
use clap::{App, Arg};
use hazelobserver::config::ObserverConfig;
use hazelobserver::Observer;
use sloggers::terminal::{Destination, TerminalLoggerBuilder};
use sloggers::types::Severity;
use sloggers::Build;
use std::fs::File;
use std::io::{self, BufReader, Read};

fn build_logger(level: &str) -> slog::Logger {
    let severity = match level.to_ascii_lowercase().as_str() {
        "trace" => Severity::Trace,
        "debug" => Severity::Debug,
        "warning" | "warn" => Severity::Warning,
        "error" => Severity::Error,
        _ => Severity::Info,
    };
    let mut builder = TerminalLoggerBuilder::new();
    builder.level(severity);
    builder.destination(Destination::Stderr);
    builder.build().unwrap_or_else(|_| slog::Logger::root(slog::Discard, slog::o!()))
}

fn read_records(path: &str) -> io::Result<Vec<Vec<u8>>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    loop {
        let len = match reader.read_u32::<LittleEndian>() {
            Ok(len) => len as usize,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        records.push(buf);
    }
    Ok(records)
}

fn main() {
    let matches = App::new("hazelobserver-observe")
        .version("0.1")
        .author("SleepingPills")
        .about("Replays a recorded capture of InnerNet datagrams through the state tracker")
        .arg(Arg::with_name("CAPTURE_FILE").help("Path to a length-prefixed datagram capture").required(true))
        .arg(Arg::with_name("config").long("config").takes_value(true).help("Path to an observer config TOML file"))
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => ObserverConfig::load(path),
        None => ObserverConfig::default(),
    };

    let log = build_logger(&config.log_level);
    let observer = Observer::new(log.clone());

    let capture_path = matches.value_of("CAPTURE_FILE").unwrap();
    let records = read_records(capture_path).unwrap_or_else(|err| {
        eprintln!("failed to read capture file {}: {}", capture_path, err);
        std::process::exit(1);
    });

    slog::info!(log, "replaying capture"; "path" => capture_path, "records" => records.len());

    for datagram in &records {
        if !observer.process_datagram(datagram) {
            continue;
        }
        if config.full_snapshots {
            println!("{}", serde_json::to_string(&observer.snapshot()).unwrap());
        } else {
            println!("{}", serde_json::to_string(&observer.digest()).unwrap());
        }
    }
}
