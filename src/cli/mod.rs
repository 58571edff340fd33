//! Command-line interface for sumu.
//!
//! Every invocation starts from the seed catalog: there is no persistence, so
//! admin commands print the resulting content instead of saving it.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config;
use crate::contact::{ContactForm, DEFAULT_SUBJECT};
use crate::core::{ContentStore, StyleTokens};
use crate::domain::{EntityId, SiteContent};
use crate::lookup;

pub mod admin;

/// sumu - content tooling for the SUMU Stationery website
#[derive(Parser, Debug)]
#[command(name = "sumu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show hero, about and contact details
    Show {
        /// Dump the whole content as JSON
        #[arg(long)]
        json: bool,
    },

    /// List products
    Products,

    /// Show one product
    Product {
        /// Product ID
        id: String,
    },

    /// List blog posts (most recent first)
    Blog,

    /// List gallery images with their recommended products
    Gallery,

    /// Show the product and context image recommended for a gallery category
    Recommend {
        /// Category name (Student, Corporate, Product, Lifestyle, Artist)
        category: String,
    },

    /// Validate a contact inquiry and print its WhatsApp link
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = DEFAULT_SUBJECT)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Show resolved configuration (debug)
    Config,

    /// Edit content (requires admin credentials)
    Admin {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        command: admin::AdminCommands,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let tokens = StyleTokens::new();
        let store = ContentStore::seeded(tokens.clone());

        match self.command {
            Commands::Show { json } => show_site(&store.content(), json),
            Commands::Products => {
                list_products(&store.content());
                Ok(())
            }
            Commands::Product { id } => show_product(&store.content(), &id),
            Commands::Blog => {
                list_blog(&store.content());
                Ok(())
            }
            Commands::Gallery => {
                list_gallery(&store.content());
                Ok(())
            }
            Commands::Recommend { category } => recommend(&store.content(), &category),
            Commands::Contact {
                name,
                email,
                subject,
                message,
            } => {
                let form = ContactForm {
                    name,
                    email,
                    subject,
                    message,
                };
                send_contact(&form)
            }
            Commands::Config => show_config(),
            Commands::Admin {
                username,
                password,
                command,
            } => admin::execute(store, tokens, &username, &password, command).await,
        }
    }
}

fn show_site(content: &Arc<SiteContent>, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(content.as_ref()).context("Failed to serialize content")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", content.hero_headline);
    println!("{}", content.hero_subheadline);
    println!();
    println!("{}", content.about_text);
    println!();
    println!("Email:  {}", content.contact_email);
    println!("Phone:  {}", content.contact_phone);
    println!("Theme:  {}", content.theme_color);
    println!();
    println!(
        "{} products, {} blog posts, {} gallery images",
        content.products.len(),
        content.blog_posts.len(),
        content.gallery.len()
    );

    Ok(())
}

fn list_products(content: &SiteContent) {
    println!("{:<38} {:<24} {:<28} {}", "ID", "NAME", "CATEGORY", "PRICE");
    println!("{}", "-".repeat(100));

    for product in &content.products {
        let price = if product.is_priced() {
            product.price.as_str()
        } else {
            "-"
        };
        println!(
            "{:<38} {:<24} {:<28} {}",
            product.id, product.name, product.category, price
        );
    }
}

fn show_product(content: &SiteContent, id: &str) -> Result<()> {
    let product = content
        .product(&EntityId::new(id))
        .with_context(|| format!("Product not found: {}", id))?;

    println!("{}", product.name);
    println!("Category:       {}", product.category);
    println!("Description:    {}", product.description);
    println!("Specifications: {}", product.specifications);
    println!("Use case:       {}", product.use_case);
    println!("Image:          {}", product.image_url);
    if product.is_priced() {
        println!("Price:          {}", product.price);
    }

    Ok(())
}

fn list_blog(content: &SiteContent) {
    if content.blog_posts.is_empty() {
        println!("No blog posts");
        return;
    }

    for post in &content.blog_posts {
        println!("{}  {}  [{}]", post.date, post.title, post.id);
        println!("    {}", post.excerpt);
    }
}

fn list_gallery(content: &SiteContent) {
    println!("{:<38} {:<22} {:<10} {:<24} {}", "ID", "CAPTION", "CATEGORY", "RECOMMENDED", "CONTEXT");
    println!("{}", "-".repeat(120));

    for image in &content.gallery {
        let category = image.category.as_str();
        let recommended = lookup::recommended_product(&content.products, category)
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        println!(
            "{:<38} {:<22} {:<10} {:<24} {}",
            image.id,
            image.caption,
            category,
            recommended,
            lookup::context_image(category)
        );
    }
}

fn recommend(content: &SiteContent, category: &str) -> Result<()> {
    let product = lookup::recommended_product(&content.products, category)
        .with_context(|| format!("No product to recommend for category: {}", category))?;

    println!("Product:       {} [{}]", product.name, product.id);
    println!("Context image: {}", lookup::context_image(category));

    Ok(())
}

fn send_contact(form: &ContactForm) -> Result<()> {
    let cfg = config::config()?;
    let url = form.whatsapp_url(&cfg.contact.whatsapp_number)?;
    println!("{}", url);
    Ok(())
}

fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("SUMU Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Gemini:");
    println!("  Model:   {}", cfg.gemini.model);
    println!(
        "  API key: {}",
        if cfg.gemini.api_key.is_some() { "set" } else { "(not set)" }
    );
    println!();
    println!("Admin:");
    match &cfg.admin {
        Some(admin) => println!("  Username: {}", admin.username),
        None => println!("  (disabled - set SUMU_ADMIN_USER and SUMU_ADMIN_PASSWORD)"),
    }
    println!();
    println!("Contact:");
    println!("  WhatsApp: {}", cfg.contact.whatsapp_number);

    Ok(())
}
