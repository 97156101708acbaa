//! TLS setup for the outbound transport.
//!
//! Native root certificates are loaded from the OS store once per process
//! and cached; the store lookup is slow on some platforms.

use std::sync::{Arc, OnceLock};

use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use rustls_pki_types::CertificateDer;

use super::config::{TlsRootConfig, TransportSecurity};
use super::error::HttpError;

/// Empty vec means no certs were found (warned, not errored).
static NATIVE_ROOTS_CACHE: OnceLock<Vec<CertificateDer<'static>>> = OnceLock::new();

fn load_native_certs() -> Vec<CertificateDer<'static>> {
    let result = rustls_native_certs::load_native_certs();

    for err in &result.errors {
        tracing::warn!(error = %err, "error loading native root certificate");
    }

    if result.certs.is_empty() {
        tracing::warn!("no native root CA certificates found");
    } else {
        tracing::debug!(count = result.certs.len(), "loaded native root certificates");
    }

    result.certs
}

fn native_root_certs() -> &'static [CertificateDer<'static>] {
    NATIVE_ROOTS_CACHE.get_or_init(load_native_certs).as_slice()
}

/// Use the process-wide default provider if one is installed, otherwise a
/// fresh aws-lc-rs provider (without installing it globally).
fn crypto_provider() -> Arc<rustls::crypto::CryptoProvider> {
    rustls::crypto::CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

fn native_roots_client_config() -> Result<rustls::ClientConfig, String> {
    let certs = native_root_certs();
    if certs.is_empty() {
        return Err("no native root CA certificates found in OS certificate store".to_owned());
    }

    let mut root_store = rustls::RootCertStore::empty();
    let (added, ignored) = root_store.add_parsable_certificates(certs.iter().cloned());
    if ignored > 0 {
        tracing::warn!(added, ignored, "some native root certificates could not be parsed");
    }
    if added == 0 {
        return Err(format!(
            "no valid native root CA certificates parsed (found {}, all failed to parse)",
            certs.len()
        ));
    }

    rustls::ClientConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()
        .map_err(|e| format!("failed to set TLS protocol versions: {e}"))
        .map(|builder| {
            builder
                .with_root_certificates(root_store)
                .with_no_client_auth()
        })
}

/// Build the HTTPS connector for the configured roots.
///
/// ALPN advertises both h2 and http/1.1; plain `http://` is only wired in
/// when the transport allows it.
///
/// # Errors
///
/// Returns `HttpError::Tls` if the provider cannot be set up or, for
/// `TlsRootConfig::Native`, no usable root certificate is available.
pub fn build_https_connector(
    tls_roots: TlsRootConfig,
    transport: TransportSecurity,
) -> Result<HttpsConnector<HttpConnector>, HttpError> {
    let allow_http = transport == TransportSecurity::AllowInsecureHttp;

    let connector = match tls_roots {
        TlsRootConfig::WebPki => {
            let builder = hyper_rustls::HttpsConnectorBuilder::new()
                .with_provider_and_webpki_roots(crypto_provider())
                .map_err(|e| HttpError::Tls(Box::new(e)))?;
            if allow_http {
                builder.https_or_http().enable_all_versions().build()
            } else {
                builder.https_only().enable_all_versions().build()
            }
        }
        TlsRootConfig::Native => {
            let client_config = native_roots_client_config().map_err(|e| HttpError::Tls(e.into()))?;
            let builder = hyper_rustls::HttpsConnectorBuilder::new().with_tls_config(client_config);
            if allow_http {
                builder.https_or_http().enable_all_versions().build()
            } else {
                builder.https_only().enable_all_versions().build()
            }
        }
    };

    Ok(connector)
}
