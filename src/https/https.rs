use crate::bundle::enums::bundle_error::BundleError;
use crate::bundle::structs::bundle_store::BundleStore;
use crate::config::structs::multicert_server_config::MulticertServerConfig;
use crate::https::structs::slot_status::SlotStatus;
use crate::ssl::ssl::create_server_config_with_resolver;
use crate::ssl::structs::multicert_resolver::MulticertResolver;
use crate::ssl::structs::rustls_host::RustlsHost;
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{
    Data,
    ServiceConfig
};
use actix_web::{
    web,
    App,
    HttpResponse,
    HttpServer
};
use log::info;
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Compiles and publishes the server's bundle, then builds the resolver and
/// the rustls configuration that serves it.
pub fn https_prepare(
    store: &Arc<BundleStore<RustlsHost>>,
    server: &MulticertServerConfig,
) -> Result<(Arc<MulticertResolver>, rustls::ServerConfig), BundleError> {
    let host = Arc::new(server.rustls_host()?);
    let server_id = server.server_identifier();
    store.compile_and_publish(server_id.clone(), Arc::clone(&host), server.certificate_paths()?)?;
    let resolver = Arc::new(MulticertResolver::new(Arc::clone(store), server_id)?);
    let tls_config = create_server_config_with_resolver(Arc::clone(&resolver), &host)
        .map_err(|e| BundleError::ServingContext(e.to_string()))?;
    Ok((resolver, tls_config))
}

pub fn https_service_routes(resolver: Arc<MulticertResolver>) -> Box<dyn Fn(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(Arc::clone(&resolver)));
        cfg.service(web::resource("/").route(web::get().to(https_service_status)));
        cfg.default_service(web::route().to(https_service_not_found));
    })
}

pub fn https_service(
    addr: SocketAddr,
    server: &MulticertServerConfig,
    resolver: Arc<MulticertResolver>,
    tls_config: rustls::ServerConfig,
) -> std::io::Result<(ServerHandle, impl Future<Output = Result<(), std::io::Error>> + use<>)> {
    info!("[HTTPS] Starting server listener {} on {}", server.name, addr);
    let mut http_server = HttpServer::new(move || {
        App::new().configure(https_service_routes(Arc::clone(&resolver)))
    })
        .keep_alive(Duration::from_secs(server.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(server.request_timeout.unwrap_or(15)))
        .client_disconnect_timeout(Duration::from_secs(server.disconnect_timeout.unwrap_or(15)))
        .workers(server.threads.unwrap_or(1) as usize);
    if let Some(max_connections) = server.max_connections {
        http_server = http_server.max_connections(max_connections as usize);
    }
    let server = http_server
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        .disable_signals()
        .run();
    Ok((server.handle(), server))
}

pub async fn https_service_status(data: Data<Arc<MulticertResolver>>) -> HttpResponse {
    let Some(bundle) = data.bundle() else {
        return HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({
            "status": "no bundle published"
        }));
    };
    let slots: Vec<SlotStatus> = bundle
        .populated_slots()
        .filter_map(|slot| {
            bundle.get(slot).map(|context| SlotStatus {
                slot: slot.name().to_string(),
                signature_algorithm: context.signature_algorithm.to_string(),
                cert_path: context.cert_path.clone(),
                loaded_at: context.loaded_at.to_rfc3339(),
                default: Arc::ptr_eq(context, bundle.default_context()),
            })
        })
        .collect();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "server": data.server_id().to_string(),
        "slots": slots,
        "ecdsa_cipher_suites": bundle.ecdsa_ciphers().len(),
    }))
}

pub async fn https_service_not_found() -> HttpResponse {
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
