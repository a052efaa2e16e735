//! Runs every cipher and the Vigenère cryptanalysis over one text and prints the
//! results.

use anyhow::Context;
use clap::Parser;
use classical_ciphers::analysis::{self, AnalysisConfig};
use classical_ciphers::sample::WILDE_PREFACE;
use classical_ciphers::{
    ClassicalCipher, ColumnKey, CombinedCipher, DoubleTransposition, TableCipher, Transposition,
    Vigenere, VigenereKey,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to run the demo on; the built-in sample text when omitted
    #[arg(short, long)]
    file: Option<String>,

    #[arg(long, default_value = "CRYPTOGRAPHY")]
    vigenere_key: VigenereKey,

    #[arg(long, default_value = "SECRET")]
    first_key: ColumnKey,

    #[arg(long, default_value = "CRYPTO")]
    second_key: ColumnKey,

    #[arg(long, default_value = "MATRIX")]
    table_key: ColumnKey,

    /// Number of Kasiski factors to print
    #[arg(short, long, default_value_t = 10)]
    top: usize,
}

fn run_cipher(cipher: &dyn ClassicalCipher, text: &str) -> anyhow::Result<()> {
    let encrypted = cipher.encrypt(text)?;
    let decrypted = cipher.decrypt(&encrypted)?;
    println!("Encrypted {}: {}", cipher.name(), encrypted);
    println!("Decrypted {}: {}", cipher.name(), decrypted);
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cipher_demo=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {path}"))?,
        None => WILDE_PREFACE.to_string(),
    };
    info!(chars = text.chars().count(), "running demo");

    let vigenere = Vigenere::new(cli.vigenere_key.clone());
    run_cipher(&vigenere, &text)?;

    // Attack the Vigenère ciphertext without the key
    let ciphertext = vigenere.encrypt(&text)?;
    let report = analysis::analyze(&ciphertext, &AnalysisConfig::default())?;
    let kasiski: Vec<String> = report
        .kasiski
        .iter()
        .take(cli.top)
        .map(|vote| format!("({}, {})", vote.factor, vote.votes))
        .collect();
    println!("Kasiski Examination Result: [{}]", kasiski.join(", "));
    println!("Friedman key length estimate: {:.2}", report.friedman_estimate);
    println!("Recovered key: {}", report.best.key);
    println!(
        "Recovered key matches: {}",
        report.best.key == cli.vigenere_key
    );
    println!();

    run_cipher(&Transposition::new(cli.first_key.clone()), &text)?;
    run_cipher(
        &DoubleTransposition::new(cli.first_key.clone(), cli.second_key.clone()),
        &text,
    )?;
    run_cipher(&TableCipher::new(cli.table_key.clone()), &text)?;
    run_cipher(&CombinedCipher::new(cli.vigenere_key, cli.table_key), &text)?;

    Ok(())
}
