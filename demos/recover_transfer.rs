// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Recovery script for a failed/interrupted transfer
//!
//! Resumes from an existing source-chain transaction to complete the
//! attestation and redemption phases. Also shows where the signed VAA can be
//! fetched directly from the Wormholescan API while waiting.
//!
//! Environment variables (set these in a .env file):
//! - ETH_PRIVATE_KEY: EVM wallet private key (must start with 0x)
//! - SOL_PRIVATE_KEY: base58-encoded Solana keypair
//!
//! Run with: `cargo run --example recover_transfer`

use portal_rs::providers::WormholescanClient;
use portal_rs::testing::FakeTokenBridge;
use portal_rs::{
    EnvConfig, EvmPlatform, Network, PlatformRegistry, PortalError, SolanaPlatform,
    TransferOrchestrator, VaaId,
};

// Known transaction details from the interrupted transfer
const RECOVER_TXID: &str = "0x3f1a6be22577d8b1a7f24be0085cd0cb8e2878d7a21f5b8a6ad46bb2c0a9ce09";

// Emitter of the token bridge on Avalanche Fuji, zero-padded to 32 bytes
const FUJI_TOKEN_BRIDGE_EMITTER: &str =
    "0x00000000000000000000000061e44e506ca5659e6c0bba9b678586fa2d729756";
const RECOVER_SEQUENCE: u64 = 1784;

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("🔄 Transfer Recovery: Avalanche → Solana");
    println!("========================================\n");

    let config = EnvConfig::from_env();
    let registry = PlatformRegistry::new(
        Network::Testnet,
        vec![Box::new(EvmPlatform::new()), Box::new(SolanaPlatform::new())],
    );

    let send_chain = registry.chain_with_config("Avalanche", &config)?;
    let rcv_chain = registry.chain_with_config("Solana", &config)?;

    let source = registry.signer(&send_chain, &config).await?;
    let destination = registry.signer(&rcv_chain, &config).await?;

    println!("📍 Wallet: {}", source.address());
    println!("📍 Recovering txid: {RECOVER_TXID}\n");

    // Where the signed VAA for this transfer lives while we wait
    let wormholescan = WormholescanClient::for_network(registry.network());
    let vaa_id = VaaId::new(
        send_chain.name().wormhole_chain_id(),
        FUJI_TOKEN_BRIDGE_EMITTER,
        RECOVER_SEQUENCE,
    );
    println!("🔍 VAA endpoint: {}\n", wormholescan.vaa_url(&vaa_id));

    // Swap FakeTokenBridge for your SDK's TokenBridge implementation.
    let orchestrator = TransferOrchestrator::builder()
        .bridge(FakeTokenBridge::new())
        .source(source)
        .destination(destination)
        .build();

    println!("1️⃣  Reconstructing transfer from on-chain state...");
    let receipt = orchestrator.recover(send_chain.name(), RECOVER_TXID).await?;

    println!("2️⃣  Redemption:");
    for txid in receipt.destination_txids() {
        println!("   ✅ Mint TX: {txid}");
    }

    println!("\n🎉 Transfer Recovery Complete!");
    println!("✅ Recovery: {}", receipt.state());

    Ok(())
}
