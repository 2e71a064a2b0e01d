//! DelegateRegistry CLI — `dreg` command.
//!
//! Provides a command-line interface for issuing and revoking delegations,
//! checking rights, enumerating grants and inspecting raw records.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use delegate_registry::registry::interface::{registry_interface_id, INTERFACE_PROBE_ID};
use delegate_registry::{
    supports_interface, DelegateRegistry, DelegationRecord, DelegationRequest, Fingerprint,
    GrantShape, RecordCell, RegistryConfig, RegistryStore, Rights, Scope,
};

// ── Directory helpers ─────────────────────────────────────────────────────────

const CONFIG_FILE: &str = "config.json";
const REGISTRY_FILE: &str = "registry.json";

fn registry_home(home: Option<&Path>) -> Result<PathBuf> {
    match home {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let home = std::env::var("HOME").context("HOME not set; pass --home")?;
            Ok(PathBuf::from(home).join(".delegate-registry"))
        }
    }
}

/// Open the registry under `home`, returning it with the store it came from.
fn open_registry(home: &Path) -> Result<(DelegateRegistry, RegistryStore)> {
    log::debug!("registry home: {}", home.display());
    let config = RegistryConfig::load_or_default(home.join(CONFIG_FILE))
        .context("failed to load config")?;
    let store = RegistryStore::new(home.join(REGISTRY_FILE));
    let registry = store.load(config).context("failed to load registry")?;
    Ok((registry, store))
}

// ── Argument parsing helpers ──────────────────────────────────────────────────

fn parse_address(s: &str) -> Result<Address> {
    Address::from_str(s.trim()).map_err(|e| anyhow!("invalid address '{s}': {e}"))
}

fn parse_amount(s: &str) -> Result<U256> {
    U256::from_str(s.trim()).map_err(|e| anyhow!("invalid amount '{s}': {e}"))
}

fn parse_rights(s: Option<&str>) -> Result<Rights> {
    match s {
        None => Ok(Rights::WILDCARD),
        Some(s) => Rights::from_str(s).context("invalid rights"),
    }
}

fn parse_interface_id(s: &str) -> Result<[u8; 4]> {
    let digits = s.trim().trim_start_matches("0x");
    let bytes = hex::decode(digits).map_err(|e| anyhow!("invalid interface id '{s}': {e}"))?;
    <[u8; 4]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow!("interface id must be 4 bytes, got {}", bytes.len()))
}

/// Build the scope for `shape`, insisting on the fields it needs.
fn build_scope(shape: GrantShape, contract: Option<&str>, token_id: Option<&str>) -> Result<Scope> {
    let contract = match contract {
        Some(c) => Some(parse_address(c)?),
        None if shape.has_contract() => bail!("--contract is required for {shape} grants"),
        None => None,
    };
    let token_id = match token_id {
        Some(t) => Some(parse_amount(t)?),
        None if shape.has_token_id() => bail!("--token-id is required for {shape} grants"),
        None => None,
    };
    Ok(Scope::from_parts(shape, contract, token_id))
}

fn format_amount(amount: U256) -> String {
    if amount == U256::MAX {
        "unlimited".to_string()
    } else {
        amount.to_string()
    }
}

fn print_record(registry: &DelegateRegistry, record: &DelegationRecord, verbose: bool) {
    let fingerprint = record.fingerprint();
    println!("  {} {fingerprint}", record.shape);
    println!("    Vault:    {}", record.vault);
    println!("    Delegate: {}", record.delegate);
    println!("    Rights:   {}", record.rights);
    if record.shape.has_contract() {
        println!("    Contract: {}", record.contract);
    }
    if record.shape.has_token_id() {
        println!("    Token ID: {}", record.token_id);
    }
    if record.shape.has_balance() {
        println!("    Balance:  {}", record.balance);
    }
    if verbose {
        println!("    Location: {}", registry.location_of(&fingerprint));
    }
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// DelegateRegistry CLI — issue, revoke, check and inspect delegations.
#[derive(Parser, Debug)]
#[command(
    name = "dreg",
    about = "DelegateRegistry CLI",
    version,
    long_about = "dreg — DelegateRegistry CLI\n\nIssue and revoke scoped delegations from vaults to delegates,\ncheck rights, and inspect the content-addressed record store."
)]
struct Cli {
    /// Registry state directory (default: ~/.delegate-registry)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enable or disable a delegation
    Delegate {
        /// Grant shape (all, contract, erc721, erc20, erc1155)
        shape: String,

        /// Granting vault address
        #[arg(long)]
        vault: String,

        /// Receiving delegate address
        #[arg(long)]
        delegate: String,

        /// Asset contract address
        #[arg(long)]
        contract: Option<String>,

        /// Token id (decimal or 0x-hex)
        #[arg(long)]
        token_id: Option<String>,

        /// Balance ceiling for erc20/erc1155 grants (decimal or 0x-hex)
        #[arg(long)]
        balance: Option<String>,

        /// Rights label or 0x-prefixed 32-byte word (default: wildcard)
        #[arg(long)]
        rights: Option<String>,

        /// Disable the delegation instead of enabling it
        #[arg(long)]
        disable: bool,
    },

    /// Apply a JSON array of delegation requests atomically
    Batch {
        /// Granting vault address
        #[arg(long)]
        vault: String,

        /// Path to the requests file
        #[arg(long)]
        file: PathBuf,
    },

    /// Check whether a delegate holds rights over a vault's assets
    Check {
        /// Grant shape to check (all, contract, erc721, erc20, erc1155)
        shape: String,

        /// Vault address
        #[arg(long)]
        vault: String,

        /// Delegate address
        #[arg(long)]
        delegate: String,

        /// Asset contract address
        #[arg(long)]
        contract: Option<String>,

        /// Token id (decimal or 0x-hex)
        #[arg(long)]
        token_id: Option<String>,

        /// Rights label or 0x-prefixed 32-byte word (default: wildcard)
        #[arg(long)]
        rights: Option<String>,
    },

    /// List live delegations of a vault or a delegate
    List {
        /// List grants issued by this vault
        #[arg(long, conflicts_with = "delegate", required_unless_present = "delegate")]
        vault: Option<String>,

        /// List grants received by this delegate
        #[arg(long)]
        delegate: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the location and raw cells behind a fingerprint
    Inspect {
        /// Fingerprint (0x-prefixed 32-byte hex)
        fingerprint: String,
    },

    /// Answer the feature probe for an interface id
    Probe {
        /// 4-byte interface id (e.g. 0x01ffc9a7); omit to print known ids
        interface_id: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = registry_home(cli.home.as_deref()).and_then(|home| match cli.command {
        Commands::Delegate {
            shape,
            vault,
            delegate,
            contract,
            token_id,
            balance,
            rights,
            disable,
        } => cmd_delegate(
            &home,
            &shape,
            &vault,
            &delegate,
            contract.as_deref(),
            token_id.as_deref(),
            balance.as_deref(),
            rights.as_deref(),
            !disable,
            verbose,
        ),
        Commands::Batch { vault, file } => cmd_batch(&home, &vault, &file, verbose),
        Commands::Check {
            shape,
            vault,
            delegate,
            contract,
            token_id,
            rights,
        } => cmd_check(
            &home,
            &shape,
            &vault,
            &delegate,
            contract.as_deref(),
            token_id.as_deref(),
            rights.as_deref(),
        ),
        Commands::List {
            vault,
            delegate,
            json,
        } => cmd_list(&home, vault.as_deref(), delegate.as_deref(), json, verbose),
        Commands::Inspect { fingerprint } => cmd_inspect(&home, &fingerprint),
        Commands::Probe { interface_id } => cmd_probe(interface_id.as_deref()),
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `dreg delegate SHAPE --vault V --delegate D [...]`
#[allow(clippy::too_many_arguments)]
fn cmd_delegate(
    home: &Path,
    shape: &str,
    vault: &str,
    delegate: &str,
    contract: Option<&str>,
    token_id: Option<&str>,
    balance: Option<&str>,
    rights: Option<&str>,
    enable: bool,
    verbose: bool,
) -> Result<()> {
    let shape = GrantShape::from_str(shape)?;
    let vault = parse_address(vault)?;
    let delegate = parse_address(delegate)?;
    let scope = build_scope(shape, contract, token_id)?;
    let rights = parse_rights(rights)?;

    let balance = match balance {
        Some(b) if shape.has_balance() => parse_amount(b)?,
        Some(_) => bail!("--balance only applies to erc20 and erc1155 grants"),
        None => U256::ZERO,
    };

    let request = DelegationRequest {
        delegate,
        rights,
        scope,
        balance,
        enable,
    };

    let (mut registry, store) = open_registry(home)?;
    let fingerprint = registry.apply(vault, &request);
    store.save(&registry).context("failed to save registry")?;

    println!(
        "{} {shape} delegation",
        if enable { "Enabled" } else { "Disabled" }
    );
    println!("  Fingerprint: {fingerprint}");

    if verbose {
        println!("  Location:    {}", registry.location_of(&fingerprint));
        for event in registry.drain_events() {
            println!("  Event:       {event}");
        }
    }

    Ok(())
}

/// `dreg batch --vault V --file requests.json`
fn cmd_batch(home: &Path, vault: &str, file: &Path, verbose: bool) -> Result<()> {
    let vault = parse_address(vault)?;
    let bytes = std::fs::read(file)
        .with_context(|| format!("failed to read batch file {}", file.display()))?;
    let requests: Vec<DelegationRequest> =
        serde_json::from_slice(&bytes).context("invalid batch file")?;

    let (mut registry, store) = open_registry(home)?;
    let fingerprints = registry.transact(|r| -> Result<Vec<Fingerprint>> {
        let fingerprints = r.batch_delegate(vault, &requests);
        store.save(r).context("failed to save registry")?;
        Ok(fingerprints)
    })?;

    println!("Applied {} delegation requests", fingerprints.len());
    for (request, fingerprint) in requests.iter().zip(&fingerprints) {
        println!(
            "  {} {} {fingerprint}",
            if request.enable { "+" } else { "-" },
            request.shape()
        );
    }

    if verbose {
        for event in registry.drain_events() {
            println!("  Event: {event}");
        }
    }

    Ok(())
}

/// `dreg check SHAPE --vault V --delegate D [...]`
fn cmd_check(
    home: &Path,
    shape: &str,
    vault: &str,
    delegate: &str,
    contract: Option<&str>,
    token_id: Option<&str>,
    rights: Option<&str>,
) -> Result<()> {
    let shape = GrantShape::from_str(shape)?;
    let vault = parse_address(vault)?;
    let delegate = parse_address(delegate)?;
    let scope = build_scope(shape, contract, token_id)?;
    let rights = parse_rights(rights)?;

    let (registry, _) = open_registry(home)?;

    match scope {
        Scope::All => {
            println!("{}", registry.check_delegate_for_all(delegate, vault, rights));
        }
        Scope::Contract { contract } => {
            println!(
                "{}",
                registry.check_delegate_for_contract(delegate, vault, contract, rights)
            );
        }
        Scope::Erc721 { contract, token_id } => {
            println!(
                "{}",
                registry.check_delegate_for_erc721(delegate, vault, contract, token_id, rights)
            );
        }
        Scope::Erc20 { contract } => {
            let amount = registry.check_delegate_for_erc20(delegate, vault, contract, rights);
            println!("{}", format_amount(amount));
        }
        Scope::Erc1155 { contract, token_id } => {
            let amount =
                registry.check_delegate_for_erc1155(delegate, vault, contract, token_id, rights);
            println!("{}", format_amount(amount));
        }
    }

    Ok(())
}

/// `dreg list (--vault V | --delegate D) [--json]`
fn cmd_list(
    home: &Path,
    vault: Option<&str>,
    delegate: Option<&str>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let (registry, _) = open_registry(home)?;

    let (label, owner, records, log_len) = match (vault, delegate) {
        (Some(v), _) => {
            let v = parse_address(v)?;
            ("vault", v, registry.delegations_for_vault(v), registry.outbox_len_for_vault(v))
        }
        (None, Some(d)) => {
            let d = parse_address(d)?;
            (
                "delegate",
                d,
                registry.delegations_for_delegate(d),
                registry.outbox_len_for_delegate(d),
            )
        }
        (None, None) => bail!("one of --vault or --delegate is required"),
    };

    if json {
        let out = serde_json::to_string_pretty(&records).context("failed to encode records")?;
        println!("{out}");
        return Ok(());
    }

    if records.is_empty() {
        println!("No live delegations for {label} {owner}");
    } else {
        println!("Delegations for {label} {owner}:");
        for record in &records {
            print_record(&registry, record, verbose);
        }
    }

    if verbose {
        println!("Outbox: {log_len} entries, {} live", records.len());
    }

    Ok(())
}

/// `dreg inspect FINGERPRINT`
fn cmd_inspect(home: &Path, fingerprint: &str) -> Result<()> {
    let fingerprint = Fingerprint::from_str(fingerprint)?;
    let (registry, _) = open_registry(home)?;

    let location = registry.location_of(&fingerprint);
    let record = registry.read_record(&location);

    println!("Fingerprint: {fingerprint}");
    match fingerprint.shape() {
        Ok(shape) => println!("  Shape:    {shape}"),
        Err(e) => println!("  Shape:    ({e})"),
    }
    println!("  Location: {location}");
    println!("  Enabled:  {}", registry.is_enabled(&fingerprint));
    for cell in RecordCell::ALL {
        println!(
            "  [{}] {:<9} 0x{}",
            cell.index(),
            cell.as_str(),
            hex::encode(record.word(cell))
        );
    }

    Ok(())
}

/// `dreg probe [INTERFACE_ID]`
fn cmd_probe(interface_id: Option<&str>) -> Result<()> {
    match interface_id {
        Some(id) => {
            let id = parse_interface_id(id)?;
            println!("{}", supports_interface(id));
        }
        None => {
            println!("Probe:    0x{}", hex::encode(INTERFACE_PROBE_ID));
            println!("Registry: 0x{}", hex::encode(registry_interface_id()));
        }
    }
    Ok(())
}
