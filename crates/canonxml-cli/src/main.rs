//! `canonxml` CLI — convert XML documents into their canonical JSON shape.
//!
//! ## Usage
//!
//! ```sh
//! # Convert XML to canonical JSON (stdin → stdout, pretty by default)
//! echo '<a><b>x</b></a>' | canonxml convert
//!
//! # Convert from file to file, compact output
//! canonxml convert -i data.xml -o data.json --compact
//!
//! # Print the textually extracted root tag
//! canonxml root-tag -i data.xml
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "canonxml",
    version,
    about = "Parse XML and normalize it into a canonical JSON shape"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an XML document to canonical JSON
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the document's root tag, extracted textually from the input
    RootTag {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
        } => {
            let xml = read_input(input.as_deref())?;
            let value = canonxml_core::parse_xml_blocking(&xml)
                .map_err(|e| anyhow!("{}: {}", e.code(), e))?;

            let mut json = if compact {
                serde_json::to_string(&value).context("Failed to serialize JSON output")?
            } else {
                serde_json::to_string_pretty(&value).context("Failed to serialize JSON output")?
            };
            json.push('\n');
            write_output(output.as_deref(), &json)?;
        }
        Commands::RootTag { input } => {
            let xml = read_input(input.as_deref())?;
            println!("{}", canonxml_core::envelope::extract_root_tag(&xml));
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
