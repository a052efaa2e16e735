use anyhow::Context;
use clap::Parser;
use classical_ciphers::alphabet::LetterSequence;
use classical_ciphers::analysis::{self, AnalysisConfig, Language, ShiftMetric};
use tracing::{info, warn};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Key lengths tried stay below this bound
    #[arg(short, long, default_value_t = 100, help = "Exclusive upper bound on the key length")]
    max_key_len: usize,

    /// Reference language for frequency analysis
    #[arg(short, long, default_value_t = Language::English, help = "Reference language (english/german)")]
    language: Language,

    /// Metric comparing column frequencies against the language
    #[arg(long, default_value_t = ShiftMetric::L1Distance, help = "Column metric (l1/chi-squared)")]
    metric: ShiftMetric,

    /// How many Kasiski factors to print
    #[arg(short, long, default_value_t = 10, help = "Number of Kasiski factors to show")]
    top: usize,
}

const MIN_RELIABLE_LETTERS: usize = 50;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigenere_decrypter=info".into()),
        )
        .init();

    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let letters = LetterSequence::from_text(&input).len();
    if letters < MIN_RELIABLE_LETTERS {
        warn!(letters, "text may be too short for reliable analysis");
    }

    let config = AnalysisConfig {
        max_key_len: cli.max_key_len,
        language: cli.language,
        metric: cli.metric,
        ..AnalysisConfig::default()
    };
    info!(?config, "analyzing ciphertext");

    let report = analysis::analyze(&input, &config)?;

    println!("Index of coincidence: {:.5}", report.index_of_coincidence);
    println!("Friedman estimate: {:.2}", report.friedman_estimate);
    println!("Kasiski factors (factor: votes):");
    for vote in report.kasiski.iter().take(cli.top) {
        println!("  {:>4}: {}", vote.factor, vote.votes);
    }
    if let Some(&(length, ic)) = report.ic_ranking.first() {
        println!("Best column IC: length {} ({:.5})", length, ic);
    }
    println!("Found key length: {}", report.best.key.len());

    // Output key to stdout
    println!("{}", report.best.key);

    // Write decrypted text to file
    std::fs::write(&cli.output, &report.best.plaintext)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    Ok(())
}
