//! Example building a short administrative chain

use chain_admin::constants::SIG_LENGTH;
use chain_admin::{AdminBlock, AdminChain, AdminChainConfig, Signature, WireCodec};
use chain_core::Hash;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AdminChainConfig::from_toml(
        r#"
        name = ["admin"]
        entry_capacity_hint = 8
        "#,
    )?;
    let chain = AdminChain::from_config(&config)?;
    println!("Admin chain {}", chain.chain_id());

    // Origin block: one minute marker
    let mut origin = chain.begin_next_block(None)?;
    origin.add_end_of_minute_marker(1)?;
    println!(
        "Block {} hash {} ({} bytes)",
        origin.height(),
        origin.hash()?,
        origin.encoded_size()
    );

    // Second block: a directory block signature and a marker
    let mut next = chain.begin_next_block(Some(&mut origin))?;
    next.add_db_signature(
        Hash::new([0x88; 32]),
        Hash::new([0x99; 32]),
        Signature::new([0x5a; SIG_LENGTH]),
    )?;
    next.add_end_of_minute_marker(2)?;

    let bytes = next.encode()?;
    let decoded = AdminBlock::from_bytes(&bytes)?;
    println!(
        "Block {} parent {} entries {} ({} bytes)",
        decoded.height(),
        decoded.header.prev_hash,
        decoded.entry_count(),
        bytes.len()
    );
    println!("{}", serde_json::to_string_pretty(&decoded)?);

    Ok(())
}
