use anyhow::Context;
use clap::{Parser, ValueEnum};
use classical_ciphers::{CipherKind, Ciphers};
use tracing::info;

/// Command-line arguments for the classical cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the cipher (letters only)
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Second key: the second transposition key, or the table key of the combined cipher
    #[arg(short, long, help = "Second key (double transposition / combined)")]
    second_key: Option<String>,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Cipher to apply
    #[arg(short, long, value_enum, default_value_t = CipherArg::Vigenere)]
    cipher: CipherArg,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Cipher selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Vigenere,
    Transposition,
    DoubleTransposition,
    Table,
    Combined,
}

impl From<CipherArg> for CipherKind {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Vigenere => CipherKind::Vigenere,
            CipherArg::Transposition => CipherKind::Transposition,
            CipherArg::DoubleTransposition => CipherKind::DoubleTransposition,
            CipherArg::Table => CipherKind::Table,
            CipherArg::Combined => CipherKind::Combined,
        }
    }
}

/// Main entry point for the classical cipher program.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classical_cipher=info".into()),
        )
        .init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    let cipher = Ciphers::build(cli.cipher.into(), &cli.key, cli.second_key.as_deref())?;

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            info!(cipher = cipher.name(), key = %cli.key, "encrypting");
            cipher.encrypt(&content)?
        }
        OperationMode::Decrypt => {
            info!(cipher = cipher.name(), key = %cli.key, "decrypting");
            cipher.decrypt(&content)?
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}
