//! Storefront Cart CLI
//!
//! Thin wrapper around storefront-core for driving a session cart from the
//! terminal, either against a live storefront or an in-memory demo store.
//!
//! ## Usage
//!
//! ```bash
//! # Browse the demo catalog
//! storefront --offline catalog
//!
//! # Show the cart of a logged-in session
//! storefront --base-url https://shop.example.com --cookie "sessionid=...; csrftoken=..." cart show
//!
//! # Add a product, then bump and lower a line
//! storefront cart add 42
//! storefront cart inc 7
//! storefront cart dec 7
//!
//! # Set a line quantity (0 removes it)
//! storefront cart set 7 3
//!
//! # Subtotal, VAT and total
//! storefront cart summary
//!
//! # Script several steps against one cart, one per line on stdin
//! printf "add 1\nadd 1\nshow\n" | storefront --offline session
//! ```

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use storefront_core::{
    CartApi, CartBody, CartController, CsrfCookieAuthorizer, HttpCartApi, LineId, LineMedia,
    MemoryCartApi, Notification, Notifier, OrderSummary, ProductId, StorefrontConfig,
    ViewBindings,
};
use tokio::io::AsyncBufReadExt;

/// Storefront Cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(version = "0.1.0")]
#[command(about = "Storefront cart - server-authoritative session cart")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Storefront origin (default: STOREFRONT_BASE_URL or http://127.0.0.1:8000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Session cookie header forwarded on every request
    #[arg(long, global = true)]
    cookie: Option<String>,

    /// Use the built-in demo store instead of a server
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List demo products (offline only)
    Catalog,

    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Read cart steps from stdin, one per line (e.g. "add 1", "show")
    Session,
}

#[derive(Subcommand, Clone)]
enum CartAction {
    /// Show cart lines and total
    Show,
    /// Add one unit of a product
    Add { product_id: String },
    /// Remove a cart line
    Remove { line_id: String },
    /// Increase a line by one
    Inc { line_id: String },
    /// Decrease a line by one (removes it at 1)
    Dec { line_id: String },
    /// Set a line quantity
    Set { line_id: String, quantity: u32 },
    /// Subtotal, VAT and total
    Summary,
}

impl CartAction {
    /// Parse one session line such as `add 42` or `set 3 2`
    fn parse_step(line: &str) -> Result<Option<CartAction>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let mut arg = |what: &str| {
            words
                .next()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("'{}' needs a {}", verb, what))
        };

        let action = match verb {
            "show" => CartAction::Show,
            "summary" => CartAction::Summary,
            "add" => CartAction::Add { product_id: arg("product id")? },
            "remove" => CartAction::Remove { line_id: arg("line id")? },
            "inc" => CartAction::Inc { line_id: arg("line id")? },
            "dec" => CartAction::Dec { line_id: arg("line id")? },
            "set" => {
                let line_id = arg("line id")?;
                let quantity = arg("quantity")?
                    .parse()
                    .context("quantity must be a whole number")?;
                CartAction::Set { line_id, quantity }
            }
            other if other.starts_with('#') => return Ok(None),
            other => bail!("unknown step '{}'", other),
        };
        Ok(Some(action))
    }
}

/// Prints toasts to stdout, prefixed with their icon
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{} {}", notification.level.icon(), notification.message);
    }
}

/// The cart plus the API it talks to
struct Session {
    api: Arc<dyn CartApi>,
    cart: CartController,
}

impl Session {
    async fn connect(cli: &Cli) -> Result<Self> {
        let api: Arc<dyn CartApi> = if cli.offline {
            Arc::new(MemoryCartApi::demo())
        } else {
            let mut config = StorefrontConfig::from_env();
            if let Some(base_url) = &cli.base_url {
                config = config.with_base_url(base_url.clone());
            }
            if let Some(cookie) = &cli.cookie {
                config = config.with_session_cookie(cookie.clone());
            }
            let auth = Arc::new(CsrfCookieAuthorizer::from_config(&config));
            let api = HttpCartApi::new(config, auth).context("invalid storefront config")?;
            Arc::new(api)
        };

        let cart =
            CartController::new(api.clone(), Arc::new(ConsoleNotifier), ViewBindings::all());
        // Open so every reload renders the lines we print
        cart.open().await;

        Ok(Self { api, cart })
    }

    /// Current quantity of a line from the last render
    fn quantity_of(&self, line: LineId) -> Result<u32> {
        self.cart
            .display()
            .rendered
            .and_then(|r| r.lines().iter().find(|l| l.id == line).map(|l| l.quantity))
            .ok_or_else(|| anyhow!("line {} is not in the cart", line))
    }

    async fn run(&self, action: CartAction) -> Result<()> {
        match action {
            CartAction::Show => {
                self.cart.reload().await;
                self.print_cart();
            }
            CartAction::Add { product_id } => {
                // Invalid ids are ignored by the controller, say so here
                if product_id.parse::<ProductId>().is_err() {
                    bail!("invalid product id '{}'", product_id);
                }
                if !self.cart.handle_add_click(Some(&product_id)).await {
                    bail!("product {} was not added", product_id);
                }
            }
            CartAction::Remove { line_id } => {
                let line = parse_line(&line_id)?;
                if !self.cart.remove_item(line).await {
                    bail!("line {} was not removed", line);
                }
            }
            CartAction::Inc { line_id } => {
                let line = parse_line(&line_id)?;
                let current = self.quantity_of(line)?;
                if !self.cart.increment_item(line, current).await {
                    bail!("line {} was not updated", line);
                }
            }
            CartAction::Dec { line_id } => {
                let line = parse_line(&line_id)?;
                let current = self.quantity_of(line)?;
                if !self.cart.decrement_item(line, current).await {
                    bail!("line {} was not updated", line);
                }
            }
            CartAction::Set { line_id, quantity } => {
                let line = parse_line(&line_id)?;
                if !self.cart.update_quantity(line, quantity).await {
                    bail!("line {} was not updated", line);
                }
            }
            CartAction::Summary => {
                let state = self.api.fetch_cart().await?;
                println!("{}", OrderSummary::from_state(&state));
            }
        }
        Ok(())
    }

    fn print_cart(&self) {
        let display = self.cart.display();
        println!("Cart ({} items)", display.badge.count);

        let Some(rendered) = display.rendered else {
            println!("  (not loaded)");
            return;
        };
        match &rendered.body {
            CartBody::Empty => println!("  Your cart is empty"),
            CartBody::Lines(lines) => {
                for line in lines {
                    let media = match &line.media {
                        LineMedia::Image { src, .. } => src.as_str(),
                        LineMedia::Icon(icon) => icon.as_str(),
                    };
                    println!(
                        "  [{}] {} x{} @ {}  ({})",
                        line.id, line.name, line.quantity, line.price_text, media
                    );
                }
            }
        }
        println!("Total: {}", rendered.total_text);
    }
}

/// List the demo store's products; there is no catalog endpoint to ask
fn print_catalog(offline: bool) -> Result<()> {
    if !offline {
        bail!("the catalog is only available with --offline");
    }

    let mut products = MemoryCartApi::demo().catalog();
    products.sort_by_key(|p| p.id);
    println!("Catalog:");
    for product in products {
        let stock = if product.stock == 0 {
            "out of stock".to_string()
        } else {
            format!("{} in stock", product.stock)
        };
        println!(
            "  [{}] {} {} ({})",
            product.id,
            product.name,
            storefront_core::money::format_price(product.price),
            stock
        );
    }
    Ok(())
}

fn parse_line(raw: &str) -> Result<LineId> {
    Ok(raw.parse::<LineId>()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    storefront_core::logging::setup_logging(cli.verbose);

    match &cli.command {
        // No cart is needed, so nothing is fetched
        Commands::Catalog => print_catalog(cli.offline)?,
        Commands::Cart { action } => {
            let session = Session::connect(&cli).await?;
            session.run(action.clone()).await?
        }
        Commands::Session => {
            let session = Session::connect(&cli).await?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut lines = stdin.lines();
            while let Some(line) = lines.next_line().await? {
                let step = CartAction::parse_step(&line);
                let result = match step {
                    Ok(Some(action)) => session.run(action).await,
                    Ok(None) => Ok(()),
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    println!("skipped: {}", e);
                }
            }
        }
    }

    Ok(())
}
