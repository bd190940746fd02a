//! HTTPS server using rustls.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::ServiceExt;
use axum::extract::Request;
use axum_server::tls_rustls::RustlsConfig;

use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;
use crate::server::lifecycle::serve_with_shutdown;
use crate::server::{App, Result, ServerError, shutdown_signal};

/// Serves `app` over HTTPS until a shutdown signal.
pub(crate) async fn serve_https(
    app: App,
    server_config: ServerConfig,
    cert_path: PathBuf,
    key_path: PathBuf,
) -> Result<()> {
    server_config
        .validate()
        .map_err(|err| ServerError::InvalidConfig(err.to_string()))?;

    validate_tls_files(&cert_path, &key_path)?;

    let tls_config = RustlsConfig::from_pem_file(&cert_path, &key_path)
        .await
        .map_err(|err| ServerError::TlsCertificate(err.to_string()))?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        cert_path = %cert_path.display(),
        key_path = %key_path.display(),
        "TLS certificates loaded successfully"
    );

    let server_addr = server_config.server_addr();
    let shutdown_timeout = server_config.shutdown_timeout();

    serve_with_shutdown(&server_config, move || async move {
        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            shutdown_signal(shutdown_timeout).await;
            shutdown_handle.graceful_shutdown(Some(shutdown_timeout));
        });

        let make_service =
            ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

        axum_server::bind_rustls(server_addr, tls_config)
            .handle(handle)
            .serve(make_service)
            .await
    })
    .await
}

fn validate_tls_files(cert_path: &Path, key_path: &Path) -> Result<()> {
    let validate_file = |path: &Path, file_type: &str| -> Result<()> {
        let metadata = std::fs::metadata(path).map_err(|err| {
            ServerError::TlsCertificate(format!(
                "Cannot read {} file {}: {}",
                file_type,
                path.display(),
                err
            ))
        })?;

        if !metadata.is_file() || metadata.len() == 0 {
            return Err(ServerError::TlsCertificate(format!(
                "{} file is missing or empty: {}",
                file_type,
                path.display()
            )));
        }

        Ok(())
    };

    validate_file(cert_path, "Certificate")?;
    validate_file(key_path, "Private key")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_files() {
        let result = validate_tls_files(
            Path::new("missing_cert.pem"),
            Path::new("missing_key.pem"),
        );

        assert!(
            matches!(result, Err(ServerError::TlsCertificate(msg)) if msg.contains("Certificate"))
        );
    }

    #[test]
    fn rejects_empty_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let cert = dir.path().join("cert.pem");
        let key = dir.path().join("key.pem");
        std::fs::write(&cert, "")?;
        std::fs::write(&key, "key")?;

        assert!(validate_tls_files(&cert, &key).is_err());
        Ok(())
    }
}
