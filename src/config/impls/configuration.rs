use crate::common::common::{
    LOG_LEVELS,
    parse_log_level
};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::tls_protocol::TlsProtocol;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::multicert_server_config::MulticertServerConfig;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            certificates: vec![],
            certificate_keys: vec![],
            server: vec!(
                MulticertServerConfig {
                    enabled: true,
                    name: String::from("default"),
                    bind_address: String::from("0.0.0.0:8443"),
                    threads: Some(available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1)),
                    keep_alive: Some(60),
                    request_timeout: Some(15),
                    disconnect_timeout: Some(15),
                    max_connections: Some(25000),
                    protocols: vec![TlsProtocol::tls12, TlsProtocol::tls13],
                    cipher_suites: vec![],
                    certificates: vec![
                        String::from("certs/ecdsa-p256.pem"),
                        String::from("certs/ecdsa-p384.pem"),
                    ],
                    certificate_keys: vec![
                        String::from("certs/ecdsa-p256.key"),
                        String::from("certs/ecdsa-p384.key"),
                    ],
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        let mut config: Configuration = toml::from_str(&String::from_utf8_lossy(data))?;
        config.inherit_certificates();
        Ok(config)
    }

    /// Fills each server's empty `certificates` and `certificate_keys` from
    /// the top-level lists. The two lists are merged independently.
    pub fn inherit_certificates(&mut self) {
        for server in self.server.iter_mut() {
            if server.certificates.is_empty() {
                server.certificates = self.certificates.clone();
            }
            if server.certificate_keys.is_empty() {
                server.certificate_keys = self.certificate_keys.clone();
            }
        }
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads and validates `path`. When the file is missing or corrupt and
    /// `create` is set, a default configuration is written instead and
    /// `ConfigurationError::Created` is returned.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(path, config_toml)?;
                eprintln!("Please edit {} and start again, exiting now...", path);
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "log_level \"{}\" is not one of {:?}",
                self.log_level, LOG_LEVELS
            )));
        }

        let mut names = HashSet::new();
        let mut addresses = HashSet::new();
        for server in self.server.iter().filter(|server| server.enabled) {
            Self::validate_value("[SERVER] Name", &server.name, r"^[A-Za-z0-9_.-]{1,64}$")?;
            if !names.insert(server.name.as_str()) {
                return Err(ConfigurationError::ValidationError(format!("duplicate server name \"{}\"", server.name)));
            }
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!(
                    "[SERVER: {}] bind_address \"{}\" is not a socket address",
                    server.name, server.bind_address
                )));
            }
            if !addresses.insert(server.bind_address.as_str()) {
                return Err(ConfigurationError::ValidationError(format!(
                    "[SERVER: {}] bind_address \"{}\" is already used",
                    server.name, server.bind_address
                )));
            }
            if server.protocols.is_empty() {
                return Err(ConfigurationError::ValidationError(format!("[SERVER: {}] no protocols enabled", server.name)));
            }
            if server.threads == Some(0) {
                return Err(ConfigurationError::ValidationError(format!("[SERVER: {}] threads must be at least 1", server.name)));
            }
            for cipher_suite in &server.cipher_suites {
                Self::validate_value("[SERVER] Cipher suite", cipher_suite, r"^TLS(13)?_[A-Z0-9_]+$")?;
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{} [:] Regex: \"{}\" [:] {}", name, regex, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}
