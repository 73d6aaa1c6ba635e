use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use segacrp2::{DecryptedRom, EncryptedRom, Variant};
use sha1::{Digest, Sha1};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser, Debug)]
struct ActionDecrypt {
    /// Encrypted program ROM dumps
    #[arg(index = 1, required = true)]
    input: Vec<PathBuf>,

    /// CPU part number (e.g. 315-5177) or MAME device name
    #[arg(short, long, value_parser = Variant::lookup)]
    cpu: Variant,

    /// Output directory. Defaults to next to each input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long, default_value = "false")]
    force: bool,
}

#[derive(Parser, Debug)]
struct ActionHash {
    /// Encrypted program ROM dumps
    #[arg(index = 1, required = true)]
    input: Vec<PathBuf>,

    /// CPU part number (e.g. 315-5177) or MAME device name
    #[arg(short, long, value_parser = Variant::lookup)]
    cpu: Variant,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// List supported CPU parts
    List,
    /// Decrypt ROM dumps into <name>.opcodes.bin and <name>.data.bin
    Decrypt(ActionDecrypt),
    /// Print SHA-1 of the decrypted opcode and data planes
    Hash(ActionHash),
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Log progress to stderr
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

fn main() -> Result<(), segacrp2::Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.action {
        Action::List => list(),
        Action::Decrypt(args) => decrypt(args),
        Action::Hash(args) => hash(args),
    }
}

fn init_logging(verbose: bool) {
    let default = match verbose {
        true => LevelFilter::INFO,
        false => LevelFilter::WARN,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(input: &Path, cpu: Variant) -> Result<DecryptedRom, segacrp2::Error> {
    let rom = EncryptedRom::read(&mut BufReader::new(File::open(input)?))?;
    tracing::info!("decrypting {} as {}", input.display(), cpu.description());
    Ok(rom.decrypt(cpu))
}

fn list() -> Result<(), segacrp2::Error> {
    for variant in Variant::iter() {
        let key = match variant.shift() {
            Some(shift) => format!("shift {shift}"),
            None => "inline".to_string(),
        };
        println!(
            "{:<10}{:<10}{}",
            variant.to_string(),
            key,
            variant.games().join(", ")
        );
    }
    Ok(())
}

/// `(opcodes, data)` output paths for `input`.
fn output_paths(input: &Path, output: Option<&Path>) -> (PathBuf, PathBuf) {
    let dir = match output {
        Some(output) => output.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    (
        dir.join(format!("{stem}.opcodes.bin")),
        dir.join(format!("{stem}.data.bin")),
    )
}

fn decrypt(args: ActionDecrypt) -> Result<(), segacrp2::Error> {
    let outputs: Vec<_> = args
        .input
        .iter()
        .map(|input| output_paths(input, args.output.as_deref()))
        .collect();

    // inputs are written in parallel, so no two of them may share an output
    let mut seen = HashSet::new();
    for (opcodes_path, data_path) in &outputs {
        for path in [opcodes_path, data_path] {
            if !seen.insert(path) {
                return Err(segacrp2::Error::DuplicateOutput(
                    path.to_string_lossy().into_owned(),
                ));
            }
        }
    }

    if let Some(output) = &args.output {
        fs::create_dir_all(output)?;
    }
    args.input
        .par_iter()
        .zip(&outputs)
        .try_for_each(|(input, (opcodes_path, data_path))| -> Result<(), segacrp2::Error> {
            if !args.force {
                for path in [opcodes_path, data_path] {
                    if path.exists() {
                        return Err(segacrp2::Error::OutputExists(
                            path.to_string_lossy().into_owned(),
                        ));
                    }
                }
            }

            let rom = load(input, args.cpu)?;
            fs::write(opcodes_path, rom.opcodes())?;
            fs::write(data_path, rom.data())?;
            tracing::info!(
                "wrote {} and {}",
                opcodes_path.display(),
                data_path.display()
            );
            Ok(())
        })?;
    let count = args.input.len();
    println!(
        "Decrypted {count} image{} with {}",
        if count == 1 { "" } else { "s" },
        args.cpu.description()
    );
    Ok(())
}

fn hash(args: ActionHash) -> Result<(), segacrp2::Error> {
    let hashes = args
        .input
        .par_iter()
        .map(|input| -> Result<_, segacrp2::Error> {
            let rom = load(input, args.cpu)?;
            Ok((
                hex::encode(Sha1::digest(rom.opcodes())),
                hex::encode(Sha1::digest(rom.data())),
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;
    for (input, (opcodes, data)) in args.input.iter().zip(hashes) {
        println!("{opcodes} {data} {}", input.display());
    }
    Ok(())
}
