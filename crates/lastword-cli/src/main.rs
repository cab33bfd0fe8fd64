//! lastword command-line interface
//!
//! Recovers the missing final checksum word of a BIP39 mnemonic, derives
//! the BIP-48 multisig account key, and prints the SLIP-132 extended
//! public key together with its root fingerprint and Specter-Desktop key
//! origin.

use anyhow::{bail, Context};
use clap::Parser;
use lastword_core::{
    derive_path, find_checksum_words, master_key, reencode_xprv, reencode_xpub, root_fingerprint,
    to_seed, validate_words, DerivationPath, Prefix,
};
use lastword_params::{Network, NetworkType};
use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

const DIVIDER_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "lastword")]
#[command(
    about = "Recover the last word of a BIP39 mnemonic and derive SLIP-132 multisig keys",
    long_about = None
)]
struct Cli {
    /// First words of the mnemonic (typically 23 of 24)
    #[arg(short, long)]
    first_words: String,

    /// Use testnet (default is mainnet)
    #[arg(long)]
    testnet: bool,

    /// Optional BIP39 passphrase
    #[arg(short, long, default_value = "")]
    passphrase: String,

    /// EXPERTS ONLY: which valid checksum word to append, using a 0-index
    #[arg(short, long, default_value_t = 0)]
    checksum: usize,

    /// Verbose printout (default is quiet)
    #[arg(short, long)]
    verbose: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    mnemonic: String,
    word_count: usize,
    network: &'static str,
    derivation_path: String,
    slip132_xpub: String,
    root_fingerprint: String,
    key_origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    advanced: Option<Advanced>,
}

#[derive(Serialize)]
struct Advanced {
    child_xpub: String,
    child_xprv: String,
    slip132_xprv: String,
    valid_checksum_words: Vec<&'static str>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if cli.checksum > 0 {
        println!("WARNING!");
        println!("You have selected a checksum word other than the first.");
        println!("This should only be attempted by expert users.");
        println!("If you do not know what you're doing, DO NOT CONTINUE.");
        println!("{}", "-".repeat(DIVIDER_WIDTH));
    }

    let report = run(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    debug!(
        testnet = cli.testnet,
        checksum = cli.checksum,
        verbose = cli.verbose,
        "input flags"
    );

    let first_words = cli.first_words.trim();
    if first_words.is_empty() {
        bail!("no mnemonic first words supplied");
    }

    validate_words(first_words)?;

    let candidates = find_checksum_words(first_words)?;
    if cli.checksum >= candidates.len() {
        bail!(
            "checksum index {} is out of range: only {} valid checksum word(s) found",
            cli.checksum,
            candidates.len()
        );
    }

    let checksum_word = candidates[cli.checksum];
    let mnemonic = Zeroizing::new(format!("{first_words} {checksum_word}"));
    let word_count = mnemonic.split_whitespace().count();

    let network_type = if cli.testnet {
        NetworkType::Testnet
    } else {
        NetworkType::Mainnet
    };
    let network = Network::from_type(network_type);

    let seed = to_seed(&mnemonic, &cli.passphrase)?;
    let master = master_key(&seed[..])?;
    let fingerprint = root_fingerprint(&master)?;

    let path: DerivationPath = network.multisig_path.parse()?;
    let child =
        derive_path(&master, &path).context("deriving the multisig account key failed")?;
    let child_xpub = child.public_key();

    let slip132_xpub = reencode_xpub(&child_xpub, network.p2wsh_multisig.public)?.to_string();
    let key_origin = format!("[{fingerprint}/{}]{slip132_xpub}", path.to_key_origin());

    let advanced = cli
        .verbose
        .then(|| -> anyhow::Result<Advanced> {
            Ok(Advanced {
                child_xpub: child_xpub.to_extended_key(Prefix::XPUB).to_string(),
                child_xprv: child.to_extended_key(Prefix::XPRV).to_string(),
                slip132_xprv: reencode_xprv(&child, network.p2wsh_multisig.private)?.to_string(),
                valid_checksum_words: candidates.clone(),
            })
        })
        .transpose()?;

    Ok(Report {
        mnemonic: mnemonic.to_string(),
        word_count,
        network: network.name,
        derivation_path: path.to_string(),
        slip132_xpub,
        root_fingerprint: fingerprint,
        key_origin,
        advanced,
    })
}

fn print_report(report: &Report) {
    let divider = "-".repeat(DIVIDER_WIDTH);

    println!("SECRET INFO:");
    println!("Full mnemonic (with checksum word): {}", report.mnemonic);
    println!("Full mnemonic length (# words): {}", report.word_count);
    println!("{divider}");
    println!("PUBLIC INFO:");
    println!("SLIP132 Extended Pubkey: {}", report.slip132_xpub);
    println!("Root Fingerprint: {}", report.root_fingerprint);
    println!("Network: {}", report.network);
    println!("Derivation Path: {}", report.derivation_path);
    println!("Specter-Desktop Input Format:");
    println!("  {}", report.key_origin);
    println!("{divider}");

    if let Some(advanced) = &report.advanced {
        println!("Advanced Details:");
        println!("  Child xpub: {}", advanced.child_xpub);
        println!("  Child xprv: {}", advanced.child_xprv);
        println!("  SLIP132 Extended Privkey: {}", advanced.slip132_xprv);
        println!(
            "  {} valid checksum words: {}",
            advanced.valid_checksum_words.len(),
            advanced.valid_checksum_words.join(" ")
        );
    }
}
