use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use sibocrc::crc::{Crc16, INIT};
use sibocrc::verify::ChecksumMismatch;

#[derive(Parser, Debug)]
#[command(name = "sibocrc", about = "CRC-16/XMODEM checksum of files or stdin")]
struct Args {
    /// Input files. Reads stdin when empty or "-".
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Initial register value (hex with 0x prefix, or decimal)
    #[arg(
        long,
        value_name = "SEED",
        env = "SIBOCRC_SEED",
        value_parser = parse_u16,
        default_value_t = INIT
    )]
    seed: u16,

    /// Exit with status 1 unless every input has this checksum
    #[arg(long, value_name = "CRC", env = "SIBOCRC_EXPECT", value_parser = parse_u16)]
    expect: Option<u16>,
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("'{s}' is not a 16-bit value: {e}"))
}

fn checksum_reader<R: Read>(reader: &mut R, seed: u16) -> io::Result<u16> {
    let mut state = Crc16::with_seed(seed);
    let total = io::copy(reader, &mut state)?;
    log::debug!("read {} bytes, crc=0x{:04X}", total, state.value());
    Ok(state.value())
}

fn checksum_path(path: &str, seed: u16) -> io::Result<u16> {
    if path == "-" {
        log::debug!("reading stdin");
        return checksum_reader(&mut io::stdin().lock(), seed);
    }
    log::debug!("reading '{}'", path);
    let mut file = File::open(path)?;
    checksum_reader(&mut file, seed)
}

/// Print one `XXXX  path` line per input to `out`. Returns false if any
/// input could not be read or did not match `--expect`.
fn run<W: Write>(args: &Args, out: &mut W) -> bool {
    let stdin_only = ["-".to_string()];
    let files = if args.files.is_empty() {
        &stdin_only[..]
    } else {
        &args.files[..]
    };

    let mut ok = true;

    for path in files {
        let crc = match checksum_path(path, args.seed) {
            Ok(crc) => crc,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                ok = false;
                continue;
            }
        };

        if let Err(e) = writeln!(out, "{:04X}  {}", crc, path) {
            eprintln!("failed to write output: {}", e);
            return false;
        }

        if let Some(expected) = args.expect {
            if crc != expected {
                let err = ChecksumMismatch {
                    expected,
                    computed: crc,
                };
                log::debug!("{}: {:?}", path, err);
                eprintln!("{}: {}", path, err);
                ok = false;
            }
        }
    }

    ok
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if run(&args, &mut io::stdout().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
