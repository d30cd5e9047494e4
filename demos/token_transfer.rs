//! End-to-end token transfer: Avalanche (Fuji) to Solana (devnet)
//!
//! Drives a relayer-delivered USDC transfer through all three phases against
//! the bridge implementation wired in below. The fake bridge from
//! `portal_rs::testing` stands in for a real SDK integration so the demo runs
//! without funded wallets; swap it for your own `TokenBridge` implementation
//! to move real tokens.
//!
//! Environment variables (set these in a .env file):
//! - ETH_PRIVATE_KEY: EVM wallet private key (must start with 0x)
//! - SOL_PRIVATE_KEY: base58-encoded Solana keypair
//!
//! Run with: `cargo run --example token_transfer`

use portal_rs::testing::FakeTokenBridge;
use portal_rs::{
    DeliveryOptions, EnvConfig, EvmPlatform, Network, PlatformRegistry, PortalError,
    SolanaPlatform, TokenReference, TransferAmount, TransferOrchestrator, TransferRequest,
};

// USDC token contract on Avalanche Fuji
const USDC_TOKEN_ADDRESS: &str = "0x5425890298aed601595a70ab815c96711a31bc65";

#[tokio::main]
async fn main() -> Result<(), PortalError> {
    // Initialize tracing for better debugging
    tracing_subscriber::fmt::init();

    println!("🌉 Token Transfer: Avalanche → Solana");
    println!("=====================================\n");

    // Step 1: Load configuration and register platforms
    println!("1️⃣ Resolving chains...");

    let config = EnvConfig::from_env();
    let registry = PlatformRegistry::new(
        Network::Testnet,
        vec![Box::new(EvmPlatform::new()), Box::new(SolanaPlatform::new())],
    );

    let send_chain = registry.chain_with_config("Avalanche", &config)?;
    let rcv_chain = registry.chain_with_config("Solana", &config)?;
    println!("   Source: {send_chain}");
    println!("   Destination: {rcv_chain}\n");

    // Step 2: Build signers from the configured keys
    println!("2️⃣ Building signers...");
    let source = registry.signer(&send_chain, &config).await?;
    let destination = registry.signer(&rcv_chain, &config).await?;
    println!("   Source address: {}", source.address());
    println!("   Destination address: {}\n", destination.address());

    // Step 3: Describe the transfer
    let token = TokenReference::contract(send_chain.name(), USDC_TOKEN_ADDRESS);
    let automatic = true;

    // Swap FakeTokenBridge for your SDK's TokenBridge implementation.
    let orchestrator = TransferOrchestrator::builder()
        .bridge(FakeTokenBridge::new())
        .source(source)
        .destination(destination)
        .build();

    // Normalize amounts at the token's on-chain precision
    let decimals = orchestrator
        .token_decimals(send_chain.name(), &token)
        .await?;

    // The relayer can deliver some destination-chain gas alongside the
    // tokens, swapped at the rate quoted by the contract.
    let native_gas = if automatic {
        Some(TransferAmount::parse("0.01", decimals)?)
    } else {
        None
    };

    let request = TransferRequest::builder()
        .token(token)
        .amount(TransferAmount::parse("0.01", decimals)?)
        .source_address(orchestrator.source().address().to_string())
        .destination_address(orchestrator.destination().address().to_string())
        .delivery(if automatic {
            DeliveryOptions::automatic(native_gas)
        } else {
            DeliveryOptions::manual()
        })
        .build();

    println!("3️⃣ Transfer parameters:");
    println!("   Token: {}", request.token());
    println!("   Amount: {}", request.amount().format()?);
    println!("   Automatic: {automatic}");
    println!(
        "   {} finality time: {} seconds\n",
        send_chain.name(),
        send_chain.name().finality_average_time_seconds()
    );

    // Step 4: Run the three phases
    println!("4️⃣ Starting transfer\n");
    let receipt = orchestrator.transfer(&request).await?;

    println!(
        "   {} Transaction ID: {}",
        send_chain.name(),
        receipt.source_txid().map(String::as_str).unwrap_or("-")
    );
    println!(
        "   Wormhole Transaction ID: {}\n",
        receipt.message_id().map(String::as_str).unwrap_or("-")
    );

    println!("   Completed Transfer: {:?}\n", receipt.destination_txids());
    println!("✅ Transfer completed successfully ({})", receipt.state());

    Ok(())
}
