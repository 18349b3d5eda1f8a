//! dialcipher command-line entry point.
//!
//! Reads a message from the arguments or stdin, applies the cipher keyed
//! by the three dials and prints the result.

use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dialcipher::dials::parse_dial;
use dialcipher::{DialCipher, Dials};

#[derive(Parser)]
#[command(name = "dialcipher")]
#[command(version)]
#[command(about = "Reversible letter/digit substitution keyed by three dials", long_about = None)]
struct Cli {
    /// The three dials, each 0-9. Invalid values are replaced by 0
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["A", "B", "C"],
        default_values = ["0", "0", "0"],
        allow_negative_numbers = true
    )]
    dials: Vec<String>,

    /// Message to transform. Read from stdin when omitted
    message: Option<String>,

    /// Print the letter and digit substitution rows before the output
    #[arg(long)]
    show_key: bool,

    /// Log filter (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

/// Applies the lenient dial rule, logging every input that falls back to 0.
fn read_dials(inputs: &[String]) -> anyhow::Result<Dials> {
    let mut values = [0u8; 3];
    for (slot, input) in values.iter_mut().zip(inputs) {
        *slot = parse_dial(input).unwrap_or_else(|| {
            warn!(input = %input, "dial is not an integer in 0-9, using 0");
            0
        });
    }
    Dials::try_from(values).context("dial triple out of range")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let dials = read_dials(&cli.dials)?;
    info!(%dials, "deriving cipher");
    let cipher = DialCipher::new(dials);

    let (message, from_stdin) = match cli.message {
        Some(message) => (message, false),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            (buf, true)
        }
    };

    let mut stdout = io::stdout().lock();
    if cli.show_key {
        writeln!(stdout, "dials   {}", cipher.dials())?;
        writeln!(stdout, "letters {}", String::from_iter(cipher.letters().symbols()))?;
        writeln!(stdout, "        {}", cipher.letters())?;
        writeln!(stdout, "digits  {}", String::from_iter(cipher.digits().symbols()))?;
        writeln!(stdout, "        {}", cipher.digits())?;
    }

    let output = cipher.apply(&message);
    if from_stdin {
        write!(stdout, "{}", output)?;
    } else {
        writeln!(stdout, "{}", output)?;
    }
    stdout.flush().context("failed to write output")?;

    Ok(())
}
