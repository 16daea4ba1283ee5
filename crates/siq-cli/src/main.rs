//! siq-cli - SI quantities on the command line
//!
//! Usage:
//!   siq-cli parse velocity "3.6 km/h"      # Parse a literal, print it in base units
//!   siq-cli render 1 0 -2                  # Symbol of an exponent vector
//!   siq-cli types                          # Registered quantity type names
//!   siq-cli check example.siq              # Check "Kind: literal => display" lines
//!   cat example.siq | siq-cli check        # Same, from stdin

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use siq_core::units::{
    Acceleration, AmountOfSubstance, ElectricCurrent, Force, Frequency, Length, LuminousIntensity,
    Mass, Pressure, Temperature, Time, Velocity,
};
use siq_core::dimension::MAX_EXPONENT;
use siq_core::{Dimension, Exponents, Quantity, SymbolConfig, SymbolRegistry, TypeRegistry};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "siq-cli")]
#[command(about = "Parse and display SI quantities", long_about = None)]
struct Args {
    /// Symbol configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    symbols: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a quantity literal and print it in base units
    Parse {
        kind: Kind,
        literal: String,
    },
    /// Print the symbol of a dimension given as exponents of
    /// m, kg, s, A, K, mol, cd (missing trailing exponents are 0)
    Render {
        #[arg(
            allow_negative_numbers = true,
            num_args = 1..=7,
            required = true,
            value_parser = clap::value_parser!(i32)
                .range(-i64::from(MAX_EXPONENT)..=i64::from(MAX_EXPONENT))
        )]
        exponents: Vec<i32>,
    },
    /// List the registered quantity type names
    Types,
    /// Check a file of "Kind: literal => display" lines
    Check {
        /// Read from stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Named quantity kinds
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Frequency,
    Force,
    Pressure,
    Velocity,
    Acceleration,
}

fn round_trip<D: Dimension>(literal: &str) -> Result<String> {
    let quantity: Quantity<D> = literal
        .parse()
        .with_context(|| format!("Failed to parse '{}'", literal.trim()))?;
    Ok(quantity.to_string())
}

/// Dimension of a quantity alias
trait QuantityKind {
    type Dimension: Dimension;
}

impl<D: Dimension> QuantityKind for Quantity<D> {
    type Dimension = D;
}

macro_rules! dispatch {
    ($kind:expr, $literal:expr, $($name:ident),*) => {
        match $kind {
            $(Kind::$name => round_trip::<<$name as QuantityKind>::Dimension>($literal),)*
        }
    };
}

impl Kind {
    /// Parse `literal` as this kind and display it
    fn display(self, literal: &str) -> Result<String> {
        dispatch!(
            self,
            literal,
            Length,
            Mass,
            Time,
            ElectricCurrent,
            Temperature,
            AmountOfSubstance,
            LuminousIntensity,
            Frequency,
            Force,
            Pressure,
            Velocity,
            Acceleration
        )
    }

    /// Accepts both "electric-current" and "ElectricCurrent"
    fn from_name(name: &str) -> Option<Kind> {
        let normalize = |s: &str| {
            s.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        };
        let wanted = normalize(name);
        Kind::value_variants().iter().copied().find(|kind| {
            kind.to_possible_value()
                .is_some_and(|value| normalize(value.get_name()) == wanted)
        })
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_symbols(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(path) => SymbolConfig::load(path)
            .with_context(|| format!("Failed to load symbols from {}", path.display()))?,
        None => SymbolConfig::load_default().context("Failed to load default symbols")?,
    };
    debug!(symbols = config.symbols.len(), "applying symbol configuration");
    config.apply(&mut SymbolRegistry::global().lock());
    Ok(())
}

fn render(exponents: &[i32]) -> String {
    let mut padded = [0; 7];
    for (slot, exponent) in padded.iter_mut().zip(exponents) {
        *slot = *exponent;
    }
    SymbolRegistry::global()
        .lock()
        .format(Exponents::new(padded), None)
}

/// Evaluate one "Kind: literal [=> expected]" line.
///
/// Returns `None` for blank lines and comments, otherwise the display and
/// whether it matched the expectation.
fn check_line(line: &str) -> Option<(String, bool)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let Some((name, rest)) = trimmed.split_once(':') else {
        return Some(("error: expected 'Kind: literal'".to_string(), false));
    };
    let (literal, expected) = match rest.split_once("=>") {
        Some((literal, expected)) => (literal, Some(expected.trim())),
        None => (rest, None),
    };
    let Some(kind) = Kind::from_name(name.trim()) else {
        return Some((format!("error: unknown kind '{}'", name.trim()), false));
    };

    Some(match kind.display(literal) {
        Ok(display) => {
            let ok = expected.map_or(true, |expected| expected == display);
            match expected {
                Some(expected) if !ok => (format!("{display} (expected {expected})"), false),
                _ => (display, true),
            }
        }
        Err(e) => (format!("error: {e:#}"), false),
    })
}

fn check<R: BufRead>(input: R) -> Result<()> {
    let mut failures = 0;
    for line in input.lines() {
        let line = line?;
        let Some((result, ok)) = check_line(&line) else {
            continue;
        };
        // Pad input to align results
        let padding = 40usize.saturating_sub(line.len());
        println!("{}{:>width$} = {}", line.trim(), "", result, width = padding);
        if !ok {
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} line(s) failed");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    load_symbols(args.symbols.as_deref())?;

    match &args.command {
        Command::Parse { kind, literal } => println!("{}", kind.display(literal)?),
        Command::Render { exponents } => println!("{}", render(exponents)),
        Command::Types => {
            for entry in TypeRegistry::with_builtin_quantities().entries() {
                match &entry.alias {
                    Some(alias) => println!("{} ({})", entry.name, alias),
                    None => println!("{}", entry.name),
                }
            }
        }
        Command::Check { file: Some(path) } => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            check(io::BufReader::new(file))?;
        }
        Command::Check { file: None } => check(io::stdin().lock())?,
    }

    Ok(())
}
