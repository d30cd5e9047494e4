// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Circle-bridged USDC auto transfer: Sepolia to Avalanche (Fuji)
//!
//! Relayer-delivered USDC over the Circle route. The amount is given directly
//! in base units (200 USDC at 6 decimals) and the attestation wait is skipped:
//! the relayer observes the attestation and redeems on the destination chain
//! without this process's involvement.
//!
//! Environment variables (set these in a .env file):
//! - ETH_PRIVATE_KEY: EVM wallet private key (must start with 0x)
//!
//! Run with: `cargo run --example usdc_auto_transfer`

use alloy_primitives::U256;
use portal_rs::testing::FakeTokenBridge;
use portal_rs::{
    AttestationConfig, DeliveryOptions, EnvConfig, EvmPlatform, Network, PlatformRegistry,
    PortalError, TokenReference, TransferAmount, TransferOrchestrator, TransferRequest,
};

const USDC_DECIMALS: u8 = 6;

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    tracing_subscriber::fmt::init();

    println!("🌉 USDC Auto Transfer: Sepolia → Avalanche");
    println!("==========================================\n");

    let config = EnvConfig::from_env();
    let registry = PlatformRegistry::new(Network::Testnet, vec![Box::new(EvmPlatform::new())]);

    let send_chain = registry.chain_with_config("Sepolia", &config)?;
    let rcv_chain = registry.chain_with_config("Avalanche", &config)?;

    let source = registry.signer(&send_chain, &config).await?;
    let destination = registry.signer(&rcv_chain, &config).await?;

    // 200 USDC, already in base units
    let amount = TransferAmount::from_base_units(U256::from(200_000_000u64), USDC_DECIMALS);
    let native_gas = TransferAmount::parse("0.0", USDC_DECIMALS)?;

    let request = TransferRequest::builder()
        .token(TokenReference::native())
        .amount(amount)
        .source_address(source.address().to_string())
        .destination_address(destination.address().to_string())
        .delivery(DeliveryOptions::automatic(Some(native_gas)))
        .build();

    // The relayer performs attestation and redemption on its own; skip the
    // explicit wait and report the source-side identifiers only.
    let orchestrator = TransferOrchestrator::builder()
        .bridge(FakeTokenBridge::new())
        .source(source)
        .destination(destination)
        .attestation(AttestationConfig::default().with_await_attestation(false))
        .build();

    println!("Starting Transfer");
    let receipt = orchestrator.transfer_usdc(&request).await?;
    println!("Started Transfer: {:?}", receipt.source_txids());

    Ok(())
}
