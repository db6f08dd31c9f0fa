use std::{fs, process};
use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use huffman_text_codec::{compress_with_stats, decompress_str};


#[derive(Subcommand)]
pub enum Mode {
    /// Compresses a text file
    #[command(visible_alias = "c")]
    Compress {
        /// Text file to compress
        input: PathBuf,
        /// Where to write the compressed artifact
        output: PathBuf,
    },
    /// Restores the text of a compressed artifact
    #[command(visible_alias = "d")]
    Decompress {
        /// Compressed artifact
        input: PathBuf,
        /// Where to write the text
        output: PathBuf,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Huffman text compressor.
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}


fn run(mode: Mode) -> Result<(), Box<dyn Error>> {

    match mode {

        Mode::Compress { input, output } => {

            let text = fs::read_to_string(&input)
                .map_err(|e| format!("Could not read file {}: {e}", input.display()))?;

            let (compressed, stats) = compress_with_stats(text.chars())?;

            fs::write(&output, compressed)
                .map_err(|e| format!("Could not write to file {}: {e}", output.display()))?;

            println!("Original size: {} bytes\nCompressed size: {} bytes\nCompression ratio: {:.2}%",
                stats.original_bytes, stats.artifact_bytes, stats.ratio() * 100.0);
            println!("Entropy: {:.3} bits/symbol\nAverage code length: {:.3} bits/symbol",
                stats.entropy, stats.average_code_len());
        },

        Mode::Decompress { input, output } => {

            let compressed = fs::read(&input)
                .map_err(|e| format!("Could not read file {}: {e}", input.display()))?;

            let text = decompress_str(&compressed)?;

            fs::write(&output, &text)
                .map_err(|e| format!("Could not write to file {}: {e}", output.display()))?;

            println!("Decompressed {} bytes into {} bytes", compressed.len(), text.len());
        },
    }

    Ok(())
}


fn main() {

    // Usage errors exit with status 2
    let cli = Cli::parse();

    if let Err(err) = run(cli.mode) {
        eprintln!("{err}");
        process::exit(1);
    }
}


#[cfg(test)]
mod tests {

    use clap::error::ErrorKind;

    use super::*;


    #[test]
    fn parses_modes() {

        let cli = Cli::try_parse_from(["huffman_text_codec", "compress", "in.txt", "out.huff"]).unwrap();
        assert!(matches!(cli.mode, Mode::Compress { input, output }
            if input == PathBuf::from("in.txt") && output == PathBuf::from("out.huff")));

        let cli = Cli::try_parse_from(["huffman_text_codec", "d", "out.huff", "back.txt"]).unwrap();
        assert!(matches!(cli.mode, Mode::Decompress { .. }));
    }


    #[test]
    fn unknown_mode_is_usage_error() {

        let err = Cli::try_parse_from(["huffman_text_codec", "bogus", "a", "b"]).err().unwrap();

        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(err.exit_code(), 2);
    }


    #[test]
    fn missing_output_is_usage_error() {

        let err = Cli::try_parse_from(["huffman_text_codec", "compress", "a"]).err().unwrap();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

}
