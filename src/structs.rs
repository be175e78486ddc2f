use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Compile every enabled server's bundle, print the slots and exit.
    #[arg(long)]
    pub check: bool,
    /// Write self-signed ECDSA P-256 and P-384 certificates for development and exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "certs")]
    pub selfsigned_dir: String,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
}
