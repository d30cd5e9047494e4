//! Integration tests for the transfer orchestrator using fake implementations
//!
//! These tests exercise the three-phase flow, the pre-submission quote gate,
//! the recovery path and the bounded attestation wait entirely against the
//! fakes in `portal_rs::testing`.

use alloy_primitives::{I256, U256};
use portal_rs::testing::{
    test_signer, FakeAttestation, FakeHandleScript, FakeTokenBridge, FakeTransferHandle,
};
use portal_rs::{
    AttestationConfig, ChainName, DeliveryOptions, PortalError, TokenReference, TransferAmount,
    TransferOrchestrator, TransferQuote, TransferRequest, TransferState,
};

fn create_orchestrator(bridge: FakeTokenBridge) -> TransferOrchestrator<FakeTokenBridge> {
    TransferOrchestrator::builder()
        .bridge(bridge)
        .source(test_signer(ChainName::Avalanche))
        .destination(test_signer(ChainName::Solana))
        .build()
}

fn usdc_request(delivery: DeliveryOptions) -> TransferRequest {
    TransferRequest::builder()
        .token(TokenReference::contract(
            ChainName::Avalanche,
            "0x5425890298aed601595a70ab815c96711a31bc65",
        ))
        .amount(TransferAmount::parse("0.01", 6).unwrap())
        .source_address("Avalanche-test-address".to_string())
        .destination_address("Solana-test-address".to_string())
        .delivery(delivery)
        .build()
}

#[tokio::test]
async fn test_standard_automatic_transfer_completes() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());

    let native_gas = TransferAmount::parse("0.01", 6).unwrap();
    let request = usdc_request(DeliveryOptions::automatic(Some(native_gas)));

    let receipt = orchestrator.transfer(&request).await.unwrap();

    assert_eq!(receipt.state(), TransferState::Completed);
    assert_eq!(receipt.source_txid(), Some(&"0xsrc".to_string()));
    assert_eq!(receipt.message_id(), Some(&"0xmsg".to_string()));
    assert_eq!(receipt.destination_txids(), &["0xdst".to_string()]);
    assert_eq!(receipt.attestation_ids().len(), 1);

    assert_eq!(
        bridge.recorder().calls(),
        vec![
            "token_transfer",
            "quote",
            "initiate",
            "fetch_attestation",
            "complete"
        ]
    );
    assert_eq!(
        bridge.last_attestation_timeout(),
        Some(std::time::Duration::from_secs(60)),
        "the default attestation wait is bounded at 60 seconds"
    );
}

#[tokio::test]
async fn test_token_decimals_shortcuts_native_assets() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());

    let native = orchestrator
        .token_decimals(ChainName::Solana, &TokenReference::native())
        .await
        .unwrap();
    assert_eq!(native, 9);
    assert_eq!(bridge.recorder().count("decimals"), 0);

    let usdc = TokenReference::contract(
        ChainName::Avalanche,
        "0x5425890298aed601595a70ab815c96711a31bc65",
    );
    let looked_up = orchestrator
        .token_decimals(ChainName::Avalanche, &usdc)
        .await
        .unwrap();
    assert_eq!(looked_up, 6);
    assert_eq!(bridge.recorder().count("decimals"), 1);
}

#[tokio::test]
async fn test_negative_quote_aborts_before_initiate() {
    let bridge = FakeTokenBridge::new();
    bridge.set_quote(TransferQuote::new(
        I256::try_from(-42).expect("fits in 256 bits"),
        U256::from(10_000u64),
        U256::from(10_000u64),
    ));
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::automatic(None));
    let result = orchestrator.transfer(&request).await;

    assert!(matches!(
        result.unwrap_err(),
        PortalError::QuoteInsufficient { .. }
    ));
    assert_eq!(
        bridge.recorder().count("initiate"),
        0,
        "no on-chain side effect may be attempted after a negative quote"
    );
    assert_eq!(bridge.recorder().count("complete"), 0);
}

#[tokio::test]
async fn test_negative_quote_does_not_gate_manual_transfer() {
    let bridge = FakeTokenBridge::new();
    bridge.set_quote(TransferQuote::new(
        I256::try_from(-42).expect("fits in 256 bits"),
        U256::from(10_000u64),
        U256::ZERO,
    ));
    bridge.set_handle_script(FakeHandleScript {
        automatic: false,
        ..Default::default()
    });
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::manual());
    let receipt = orchestrator.transfer(&request).await.unwrap();

    assert_eq!(receipt.state(), TransferState::Completed);
    assert_eq!(bridge.recorder().count("initiate"), 1);
}

#[tokio::test]
async fn test_manual_transfer_treats_native_gas_as_absent() {
    let configured = TransferAmount::parse("0.01", 6).unwrap();
    let request = usdc_request(DeliveryOptions::manual_with_native_gas(Some(configured)));

    assert!(
        request.delivery().native_gas().is_none(),
        "manual delivery must mask any configured native gas"
    );

    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());
    let receipt = orchestrator.transfer(&request).await.unwrap();
    assert_eq!(receipt.state(), TransferState::Completed);
}

#[tokio::test]
async fn test_phase_ordering_is_strict() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::automatic(None));
    orchestrator.transfer(&request).await.unwrap();

    let calls = bridge.recorder().calls();
    let position = |name: &str| calls.iter().position(|c| c == name).unwrap();
    assert!(position("quote") < position("initiate"));
    assert!(position("initiate") < position("fetch_attestation"));
    assert!(position("fetch_attestation") < position("complete"));
}

#[tokio::test]
async fn test_recovery_skips_initiate() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());

    let receipt = orchestrator
        .recover(ChainName::Avalanche, "0xdeadbeef")
        .await
        .unwrap();

    assert_eq!(receipt.state(), TransferState::Completed);
    assert!(receipt.source_txids().is_empty());
    assert_eq!(receipt.destination_txids(), &["0xdst".to_string()]);
    assert_eq!(
        bridge.recorder().calls(),
        vec!["transfer_from_txid", "fetch_attestation", "complete"]
    );
}

#[tokio::test]
async fn test_attestation_timeout_aborts_before_complete() {
    let bridge = FakeTokenBridge::new();
    bridge.set_handle_script(FakeHandleScript {
        attestation: FakeAttestation::NeverResolves,
        ..Default::default()
    });
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::automatic(None));
    let result = orchestrator.transfer(&request).await;

    assert!(matches!(
        result.unwrap_err(),
        PortalError::AttestationTimeout
    ));
    assert_eq!(bridge.recorder().count("initiate"), 1);
    assert_eq!(
        bridge.recorder().count("complete"),
        0,
        "completion must never run without an attestation"
    );
}

#[tokio::test]
async fn test_attestation_failure_propagates_unchanged() {
    let bridge = FakeTokenBridge::new();
    bridge.set_handle_script(FakeHandleScript {
        attestation: FakeAttestation::Fails("guardian set rejected the observation".to_string()),
        ..Default::default()
    });
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::automatic(None));
    let result = orchestrator.transfer(&request).await;

    match result.unwrap_err() {
        PortalError::AttestationFailed { reason } => {
            assert_eq!(reason, "guardian set rejected the observation");
        }
        other => panic!("expected AttestationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_skipping_attestation_wait_still_completes() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = TransferOrchestrator::builder()
        .bridge(bridge.clone())
        .source(test_signer(ChainName::Avalanche))
        .destination(test_signer(ChainName::Solana))
        .attestation(AttestationConfig::default().with_await_attestation(false))
        .build();

    let request = usdc_request(DeliveryOptions::automatic(None));
    let receipt = orchestrator.transfer(&request).await.unwrap();

    assert_eq!(receipt.state(), TransferState::Completed);
    assert!(receipt.attestation_ids().is_empty());
    assert_eq!(bridge.recorder().count("fetch_attestation"), 0);
    assert_eq!(bridge.recorder().count("complete"), 1);
}

#[tokio::test]
async fn test_usdc_route_uses_circle_factory() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::automatic(None));
    let receipt = orchestrator.transfer_usdc(&request).await.unwrap();

    assert_eq!(receipt.state(), TransferState::Completed);
    assert_eq!(bridge.recorder().count("circle_transfer"), 1);
    assert_eq!(bridge.recorder().count("token_transfer"), 0);
}

#[tokio::test]
async fn test_relayer_winning_completion_race_yields_empty_destination_ids() {
    let bridge = FakeTokenBridge::new();
    bridge.set_handle_script(FakeHandleScript {
        destination_txids: vec![],
        ..Default::default()
    });
    let orchestrator = create_orchestrator(bridge.clone());

    let request = usdc_request(DeliveryOptions::automatic(None));
    let receipt = orchestrator.transfer(&request).await.unwrap();

    assert_eq!(receipt.state(), TransferState::Completed);
    assert!(receipt.destination_txids().is_empty());
}

#[tokio::test]
async fn test_mismatched_native_gas_precision_rejected_before_any_call() {
    let bridge = FakeTokenBridge::new();
    let orchestrator = create_orchestrator(bridge.clone());

    let request = TransferRequest::builder()
        .token(TokenReference::native())
        .amount(TransferAmount::parse("0.01", 18).unwrap())
        .source_address("src".to_string())
        .destination_address("dst".to_string())
        .delivery(DeliveryOptions::automatic(Some(
            TransferAmount::parse("0.01", 6).unwrap(),
        )))
        .build();

    let result = orchestrator.transfer(&request).await;
    assert!(matches!(
        result.unwrap_err(),
        PortalError::InvalidAmount { .. }
    ));
    assert!(bridge.recorder().calls().is_empty());
}

#[test]
fn test_fake_handle_reports_scripted_automatic_flag() {
    use portal_rs::testing::CallRecorder;
    use portal_rs::TransferHandle;

    let handle = FakeTransferHandle::new(
        FakeHandleScript {
            automatic: false,
            ..Default::default()
        },
        CallRecorder::new(),
    );
    assert!(!handle.is_automatic());
}
