//! # Terminal UI
//!
//! Line-oriented front end over the screen commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list              home screen (current list, no fetch)                 │
//! │  refresh           re-fetch the catalog                                 │
//! │  show <id>         product detail                                       │
//! │  add <id>          add from the detail screen                           │
//! │  buy <id>          add straight from the list                           │
//! │  cart              recent purchases and their total                     │
//! │  inc <id>          quantity + 1                                         │
//! │  dec <id>          quantity - 1 (stops at 1)                            │
//! │  rm <id>           remove, after a y/N confirmation                     │
//! │  checkout          proceed to checkout                                  │
//! │  help              this list                                            │
//! │  quit              exit (EOF works too)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so the whole loop can be driven from tests.

use std::io::{BufRead, Write};

use shopfront_core::ProductId;
use tracing::{debug, warn};

use crate::app::AppHandle;
use crate::commands::cart::{self as cart_cmd, CartView};
use crate::commands::product::{self as product_cmd, HomeScreen, ProductDetail};
use crate::error::ApiError;

const HELP: &str = "\
Commands:
  list              show the product list
  refresh           reload products from the catalog
  show <id>         product details
  add <id>          add the product to your cart
  buy <id>          same as add, from the list
  cart              show your cart
  inc <id>          increase quantity
  dec <id>          decrease quantity
  rm <id>           remove from cart
  checkout          proceed to checkout
  help              show this help
  quit              exit";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Show(ProductId),
    Add(ProductId),
    Buy(ProductId),
    Cart,
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
    Checkout,
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let verb = verb.to_ascii_lowercase();

    let mut id = || -> Result<ProductId, String> {
        let raw = parts
            .next()
            .ok_or_else(|| format!("Usage: {} <id>", verb))?;
        raw.parse()
            .map_err(|_| format!("Not a product id: {}", raw))
    };

    let command = match verb.as_str() {
        "list" | "ls" | "home" => Command::List,
        "refresh" => Command::Refresh,
        "show" => Command::Show(id()?),
        "add" => Command::Add(id()?),
        "buy" => Command::Buy(id()?),
        "cart" => Command::Cart,
        "inc" | "+" => Command::Increase(id()?),
        "dec" | "-" => Command::Decrease(id()?),
        "rm" | "remove" => Command::Remove(id()?),
        "checkout" => Command::Checkout,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(Some(command))
}

/// Runs the UI until `quit` or end of input.
///
/// Command errors are printed and the loop continues; fatal errors end it.
pub async fn run<R, W>(app: &AppHandle, mut input: R, mut out: W) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    let home = product_cmd::load_products(app).await?;
    render_home(&mut out, &home)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!(?command, "Dispatching");

        if command == Command::Quit {
            break;
        }

        match dispatch(app, command, &mut input, &mut out).await {
            Ok(()) => {}
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(code = ?e.code, "{}", e.message);
                writeln!(out, "Error: {}", e.message)?;
            }
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

async fn dispatch<R, W>(
    app: &AppHandle,
    command: Command,
    input: &mut R,
    out: &mut W,
) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    match command {
        Command::List => render_home(out, &product_cmd::home_screen(app)?)?,
        Command::Refresh => render_home(out, &product_cmd::refresh_products(app).await?)?,
        Command::Show(id) => render_detail(out, &product_cmd::product_detail(app, id)?)?,
        Command::Add(id) => {
            let detail = product_cmd::product_detail(app, id)?;
            let added = product_cmd::add_to_cart(app, &detail.product)?;
            render_banner(out, added.banner.as_deref(), added.badge_count)?;
        }
        Command::Buy(id) => {
            let added = product_cmd::buy(app, id)?;
            render_banner(out, added.banner.as_deref(), added.badge_count)?;
        }
        Command::Cart => render_cart(out, &cart_cmd::view_cart(app)?)?,
        Command::Increase(id) => render_cart(out, &cart_cmd::increase(app, id)?.view)?,
        Command::Decrease(id) => render_cart(out, &cart_cmd::decrease(app, id)?.view)?,
        Command::Remove(id) => {
            let prompt = cart_cmd::confirm_remove_prompt(app, id)?;
            writeln!(out, "{}", prompt.title)?;
            write!(out, "{} [y/N] ", prompt.message)?;
            out.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                render_cart(out, &cart_cmd::remove(app, id)?.view)?;
            } else {
                writeln!(out, "Cancelled")?;
            }
        }
        Command::Checkout => {
            let ack = cart_cmd::checkout(app)?;
            writeln!(out, "{} ({} items, {})", ack.message, ack.item_count, ack.total_label)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

fn render_home<W: Write>(out: &mut W, home: &HomeScreen) -> std::io::Result<()> {
    if home.badge_count > 0 {
        writeln!(out, "== {} ==  [cart: {}]", home.store_name, home.badge_count)?;
    } else {
        writeln!(out, "== {} ==", home.store_name)?;
    }
    if let Some(banner) = &home.banner {
        writeln!(out, "{}", banner)?;
    }
    if let Some(error) = &home.load_error {
        writeln!(out, "Could not load products: {}", error.message)?;
    }
    if home.products.is_empty() {
        writeln!(out, "No products to show. Try 'refresh'.")?;
    }
    for card in &home.products {
        match &card.category {
            Some(category) => writeln!(
                out,
                "  [{}] {}  {}  ({})",
                card.id, card.title, card.price_label, category
            )?,
            None => writeln!(out, "  [{}] {}  {}", card.id, card.title, card.price_label)?,
        }
        if !card.description_preview.is_empty() {
            writeln!(out, "      {}", card.description_preview)?;
        }
        writeln!(
            out,
            "      ⭐ {:.1} ({} reviews)",
            card.rating.rate, card.rating.count
        )?;
    }
    Ok(())
}

fn render_detail<W: Write>(out: &mut W, detail: &ProductDetail) -> std::io::Result<()> {
    let product = &detail.product;
    writeln!(out, "== {} ==", detail.screen_title)?;
    writeln!(out, "{}", detail.price_label)?;
    if let Some(category) = &product.category {
        writeln!(out, "Category: {}", category)?;
    }
    writeln!(
        out,
        "Rating: {:.1} ({} reviews)",
        product.rating.rate, product.rating.count
    )?;
    if !product.description.is_empty() {
        writeln!(out, "{}", product.description)?;
    }
    if detail.in_cart > 0 {
        writeln!(out, "In your cart: {}", detail.in_cart)?;
    }
    writeln!(out, "'add {}' to add to cart", product.id)
}

fn render_cart<W: Write>(out: &mut W, view: &CartView) -> std::io::Result<()> {
    if let Some(message) = &view.empty_message {
        return writeln!(out, "{}", message);
    }

    writeln!(out, "== Recent Purchases ==  [cart: {}]", view.badge_count)?;
    for line in &view.lines {
        writeln!(
            out,
            "  [{}] {}  {} x {} = {}",
            line.id, line.title, line.unit_price_label, line.quantity, line.line_total_label
        )?;
    }
    writeln!(out, "Total: {}", view.total_label)?;
    writeln!(out, "'checkout' to proceed")
}

fn render_banner<W: Write>(out: &mut W, banner: Option<&str>, badge: usize) -> std::io::Result<()> {
    if let Some(banner) = banner {
        writeln!(out, "{}", banner)?;
    }
    writeln!(out, "[cart: {}]", badge)
}
