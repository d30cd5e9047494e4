//! OpenTelemetry span helpers for transfer operations
//!
//! One span constructor per orchestrated operation, with static span names
//! and structured attributes so the phase boundaries stay legible in any
//! OTel backend.
//!
//! The [`TransferOrchestrator`](crate::TransferOrchestrator) calls these
//! internally; they are public so SDK integrations can attach their own
//! child spans under the same names.

use tracing::Span;

use crate::chain::ChainName;
use crate::token::TokenReference;

/// Create span for one full transfer run (initiate → attest → complete).
///
/// Parent: caller's span, if any
/// Children: portal_rs.initiate / portal_rs.fetch_attestation / portal_rs.complete
#[inline]
pub fn transfer(
    source_chain: ChainName,
    destination_chain: ChainName,
    token: &TokenReference,
    automatic: bool,
) -> Span {
    tracing::info_span!(
        "portal_rs.transfer",
        source_chain = %source_chain,
        destination_chain = %destination_chain,
        token = %token,
        automatic = automatic,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a recovery run resumed from a source transaction id.
///
/// Parent: caller's span, if any
/// Children: portal_rs.fetch_attestation / portal_rs.complete
#[inline]
pub fn recover(source_chain: ChainName, txid: &str) -> Span {
    tracing::info_span!(
        "portal_rs.recover",
        source_chain = %source_chain,
        txid = %txid,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the pre-submission quote check.
///
/// Parent: portal_rs.transfer
#[inline]
pub fn quote(source_chain: ChainName, destination_chain: ChainName) -> Span {
    tracing::info_span!(
        "portal_rs.quote",
        source_chain = %source_chain,
        destination_chain = %destination_chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the source-chain submission.
///
/// Parent: portal_rs.transfer
/// Children: SDK submission spans, if instrumented
#[inline]
pub fn initiate(source_chain: ChainName) -> Span {
    tracing::info_span!(
        "portal_rs.initiate",
        source_chain = %source_chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the bounded attestation wait.
///
/// Parent: portal_rs.transfer or portal_rs.recover
#[inline]
pub fn fetch_attestation(timeout_secs: u64) -> Span {
    tracing::info_span!(
        "portal_rs.fetch_attestation",
        timeout_secs = timeout_secs,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the destination-chain redemption.
///
/// Parent: portal_rs.transfer or portal_rs.recover
#[inline]
pub fn complete(destination_chain: ChainName) -> Span {
    tracing::info_span!(
        "portal_rs.complete",
        destination_chain = %destination_chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Records error details on the current span using OpenTelemetry semantic
/// conventions.
///
/// # Arguments
///
/// * `error_type` - Classification of the error (e.g. "QuoteInsufficient")
/// * `error_message` - The error message
/// * `error_source` - Additional context about where/why the error occurred
pub fn record_error_with_context(
    error_type: &str,
    error_message: &str,
    error_source: Option<&str>,
) {
    let span = Span::current();
    span.record("error.type", error_type);
    span.record("error.message", error_message);
    if let Some(source) = error_source {
        span.record("error.source", source);
    }
    span.record("otel.status_code", "ERROR");
}
