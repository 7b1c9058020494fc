#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storefront_core::StorefrontConfig;

/// How the desktop shell reaches a cart
#[derive(Clone, Debug)]
pub enum Backend {
    /// Live storefront over HTTP
    Remote(StorefrontConfig),
    /// Built-in demo store
    Offline,
}

/// Global backend choice, set from command line
static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Get the backend (set from command line or env defaults)
pub fn get_backend() -> Backend {
    BACKEND
        .get()
        .cloned()
        .unwrap_or_else(|| Backend::Remote(StorefrontConfig::from_env()))
}

/// Storefront - desktop cart
#[derive(Parser, Debug)]
#[command(name = "storefront-desktop")]
#[command(about = "Storefront - server-authoritative shopping cart")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Storefront origin, overrides STOREFRONT_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Session cookie header, overrides STOREFRONT_COOKIE
    #[arg(long)]
    cookie: Option<String>,

    /// Run against the built-in demo store
    #[arg(long)]
    offline: bool,
}

fn main() {
    let args = Args::parse();
    storefront_core::logging::setup_logging(args.verbose);

    let (backend, title) = if args.offline {
        (Backend::Offline, "Storefront (offline demo)".to_string())
    } else {
        let mut config = StorefrontConfig::from_env();
        if let Some(base_url) = args.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(cookie) = args.cookie {
            config = config.with_session_cookie(cookie);
        }
        let title = format!("Storefront - {}", config.base_url);
        (Backend::Remote(config), title)
    };

    tracing::info!("Starting '{}'", title);
    let _ = BACKEND.set(backend);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
