use clap::Parser;
use futures_util::future::try_join_all;
use log::{
    error,
    info,
    warn
};
use multicert::bundle::structs::bundle_store::BundleStore;
use multicert::common::common::setup_logging;
use multicert::config::structs::configuration::Configuration;
use multicert::https::https::{
    https_prepare,
    https_service
};
use multicert::ssl::ssl::create_selfsigned_certificates;
use multicert::ssl::structs::multicert_resolver::MulticertResolver;
use multicert::ssl::structs::rustls_host::RustlsHost;
use multicert::structs::Cli;
use parking_lot::deadlock;
use std::net::SocketAddr;
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        match create_selfsigned_certificates(Path::new(&args.selfsigned_dir), &args.selfsigned_domain) {
            Ok(entries) => {
                for entry in entries {
                    println!("[CERTGEN] {} / {} (use only for development)", entry.cert_path, entry.key_path);
                }
                exit(0)
            }
            Err(error) => {
                eprintln!("[CERTGEN] {}", error);
                exit(1)
            }
        }
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", error);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let store: Arc<BundleStore<RustlsHost>> = Arc::new(BundleStore::new());
    let mut listeners = Vec::new();
    for server in config.server.iter().filter(|server| server.enabled) {
        match https_prepare(&store, server) {
            Ok((resolver, tls_config)) => {
                listeners.push((server.clone(), resolver, tls_config));
            }
            Err(error) => {
                error!("[BOOT] Server {} cannot be activated: {}", server.server_identifier(), error);
                exit(1);
            }
        }
    }

    if args.check {
        for (server, resolver, _) in &listeners {
            let slots = resolver
                .bundle()
                .map(|bundle| bundle.populated_slots().map(|slot| slot.name()).collect::<Vec<_>>())
                .unwrap_or_default();
            println!("{}: {}", server.server_identifier(), slots.join(", "));
        }
        println!("Configuration OK");
        exit(0);
    }

    if listeners.is_empty() {
        warn!("[BOOT] No enabled servers in {}, exiting...", args.config);
        exit(0);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let Ok(tokio_shutdown) = Shutdown::new() else {
                error!("[BOOT] Unable to register shutdown handler");
                exit(1);
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let resolvers: Vec<Arc<MulticertResolver>> = listeners
                .iter()
                .map(|(_, resolver, _)| Arc::clone(resolver))
                .collect();

            let mut handles = Vec::new();
            let mut futures = Vec::new();
            for (server, resolver, tls_config) in listeners {
                let address: SocketAddr = match server.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[BOOT] Invalid bind address {}: {}", server.bind_address, error);
                        exit(1);
                    }
                };
                let (handle, future) = https_service(address, &server, resolver, tls_config)?;
                handles.push(handle);
                futures.push(future);
            }
            let servers = tokio::spawn(try_join_all(futures));

            #[cfg(unix)]
            {
                let reload_store = Arc::clone(&store);
                let reload_handler = tokio_shutdown.clone();
                tokio::spawn(async move {
                    let Ok(mut hangup) = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup()) else {
                        warn!("[BOOT] Unable to listen for SIGHUP, reloading disabled");
                        return;
                    };
                    info!("[BOOT] Starting thread for certificate reloads...");
                    loop {
                        tokio::select! {
                            _ = hangup.recv() => {
                                info!("[CERTIFICATE] SIGHUP received, reloading bundles...");
                                for (server_id, result) in reload_store.reload_all() {
                                    if let Err(error) = result {
                                        error!("[CERTIFICATE] Reload of {} failed, keeping current bundle: {}", server_id, error);
                                    }
                                }
                                for resolver in &resolvers {
                                    if let Err(error) = resolver.refresh_cache() {
                                        error!("[CERTIFICATE] Refresh of {} failed: {}", resolver.server_id(), error);
                                    }
                                }
                            }
                            _ = reload_handler.handle() => {
                                info!("[BOOT] Shutting down thread for certificate reloads...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    for handle in &handles {
                        handle.stop(true).await;
                    }
                    tokio_shutdown.handle().await;
                    info!("Server shutting down completed");
                    Ok(())
                }
                result = servers => {
                    match result {
                        Ok(Ok(_)) => Ok(()),
                        Ok(Err(error)) => {
                            error!("[HTTPS] Listener stopped: {}", error);
                            Err(error)
                        }
                        Err(error) => {
                            error!("[HTTPS] Listener task failed: {}", error);
                            Err(std::io::Error::other(error))
                        }
                    }
                }
            }
        })
}
