use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;

use inventory_api::{
    browse::{render, ProductBrowser, ProductFilter},
    client::{ApiClient, ClientError, DEFAULT_API_URL},
    handlers::products::CreateProductRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url.clone()).context("failed to build HTTP client")?;

    let outcome = match cli.command {
        Commands::Categories => list_categories(&client, cli.json).await,
        Commands::Brands => list_brands(&client, cli.json).await,
        Commands::Stores => list_stores(&client, cli.json).await,
        Commands::Products(args) => list_products(&client, args, cli.json).await,
        Commands::Add(args) => add_product(&client, args, cli.json).await,
    };

    if let Err(err) = outcome {
        // API failures show the server's message (or the generic fallback) and nothing else
        if let Some(client_err) = err.downcast_ref::<ClientError>() {
            eprintln!("Error: {}", client_err.user_message());
            std::process::exit(1);
        }
        return Err(err).with_context(|| format!("request to {} failed", client.base_url()));
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "inventory", about = "Browse and add products through the inventory API", version)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "INVENTORY_API_URL",
        default_value = DEFAULT_API_URL,
        help = "Base URL of the inventory API"
    )]
    api_url: String,
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories
    Categories,
    /// List brands
    Brands,
    /// List stores
    Stores,
    /// List products, newest first
    Products(ProductsArgs),
    /// Add a product
    Add(AddArgs),
}

#[derive(Args)]
struct ProductsArgs {
    #[arg(long, default_value = "", help = "Case-insensitive text the product name must contain")]
    search: String,
    #[arg(long, help = "Exact category name")]
    category: Option<String>,
    #[arg(long, help = "Exact brand name")]
    brand: Option<String>,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long, allow_negative_numbers = true)]
    stock: i32,
    #[arg(long, allow_negative_numbers = true)]
    price: f64,
    #[arg(long, help = "Category id")]
    category: Option<i32>,
    #[arg(long, help = "Brand id")]
    brand: Option<i32>,
    #[arg(long, help = "Store id")]
    store: Option<i32>,
}

async fn list_categories(client: &ApiClient, json: bool) -> Result<()> {
    let categories = client.categories().await?;
    if json {
        return print_json(&categories);
    }
    for c in &categories {
        println!("{:>4}  {}", c.id, c.name.as_deref().unwrap_or("-"));
    }
    Ok(())
}

async fn list_brands(client: &ApiClient, json: bool) -> Result<()> {
    let brands = client.brands().await?;
    if json {
        return print_json(&brands);
    }
    for b in &brands {
        println!("{:>4}  {}", b.id, b.name.as_deref().unwrap_or("-"));
    }
    Ok(())
}

async fn list_stores(client: &ApiClient, json: bool) -> Result<()> {
    let stores = client.stores().await?;
    if json {
        return print_json(&stores);
    }
    for s in &stores {
        println!(
            "{:>4}  {:<16} {:<20} {}",
            s.id,
            s.name.as_deref().unwrap_or("-"),
            s.address.as_deref().unwrap_or("-"),
            s.phone.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

async fn list_products(client: &ApiClient, args: ProductsArgs, json: bool) -> Result<()> {
    let mut browser = ProductBrowser::new();
    browser.refresh(client).await?;

    let mut filter = ProductFilter::new(args.search);
    filter.category = args.category;
    filter.brand = args.brand;

    let rows = browser.filtered(&filter);
    if json {
        return print_json(&rows);
    }
    print!("{}", render(&rows));
    if rows.is_empty() {
        println!();
    }
    Ok(())
}

async fn add_product(client: &ApiClient, args: AddArgs, json: bool) -> Result<()> {
    let request = CreateProductRequest {
        pname: args.name,
        p_stock: args.stock,
        price: args.price,
        cid: args.category,
        bid: args.brand,
        sid: args.store,
    };

    let created = client.create_product(&request).await?;
    if json {
        return print_json(&created);
    }
    println!("{} (id {})", created.message, created.product_id);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
