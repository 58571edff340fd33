//! Admin subcommands.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::debug;

use crate::adapters::GeminiClient;
use crate::admin::{AdminSession, GalleryDraft, ProductDraft, SettingsForm, StaticCredentials};
use crate::config;
use crate::core::{ContentStore, StyleTokens};
use crate::domain::{EntityId, GalleryCategory};

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Add a product
    AddProduct {
        name: String,
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        specifications: String,

        #[arg(long, default_value = "")]
        use_case: String,

        #[arg(long, default_value = "")]
        image_url: String,

        #[arg(long, default_value = "")]
        price: String,

        /// Write the description with the text generator
        #[arg(long)]
        generate_description: bool,
    },

    /// Delete a product
    DeleteProduct { id: String },

    /// Add a gallery image
    AddImage {
        url: String,

        #[arg(long, default_value = "")]
        caption: String,

        #[arg(long, default_value = "Lifestyle")]
        category: GalleryCategory,
    },

    /// Delete a gallery image
    DeleteImage { id: String },

    /// Delete a blog post
    DeletePost { id: String },

    /// Generate a blog post about a topic and publish it
    GeneratePost { topic: String },

    /// Replace the hero headline and subheadline
    Hero { headline: String, subheadline: String },

    /// Update about text, contact details and theme color
    Settings {
        #[arg(long)]
        about: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        theme_color: Option<String>,
    },
}

/// Log in, apply one admin command, and print the resulting content
pub async fn execute(
    store: ContentStore,
    tokens: StyleTokens,
    username: &str,
    password: &str,
    command: AdminCommands,
) -> Result<()> {
    let cfg = config::config()?;
    let credentials = cfg
        .admin
        .as_ref()
        .context("Admin is disabled: set SUMU_ADMIN_USER and SUMU_ADMIN_PASSWORD")?;
    let check = StaticCredentials::from(credentials);

    let updates = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&updates);
    let _subscription = store.subscribe(move |content| {
        counter.set(counter.get() + 1);
        debug!(products = content.products.len(), posts = content.blog_posts.len(), "content delivered");
    });

    let session = AdminSession::login(&check, store.clone(), username, password)?;
    let generator = GeminiClient::from_settings(&cfg.gemini);

    match command {
        AdminCommands::AddProduct {
            name,
            category,
            description,
            specifications,
            use_case,
            image_url,
            price,
            generate_description,
        } => {
            let description = if generate_description {
                session
                    .enhance_description(&generator, &name, &specifications)
                    .await?
            } else {
                description
            };
            let draft = ProductDraft {
                name,
                category,
                description,
                specifications,
                use_case,
                image_url,
                price,
            };
            let id = session.create_product(draft)?;
            eprintln!("[Created product {}]", id);
        }
        AdminCommands::DeleteProduct { id } => session.delete_product(&EntityId::new(id)),
        AdminCommands::AddImage {
            url,
            caption,
            category,
        } => {
            let id = session.add_gallery_image(GalleryDraft {
                url,
                caption,
                category,
            })?;
            eprintln!("[Added gallery image {}]", id);
        }
        AdminCommands::DeleteImage { id } => session.delete_gallery_image(&EntityId::new(id)),
        AdminCommands::DeletePost { id } => session.delete_blog_post(&EntityId::new(id)),
        AdminCommands::GeneratePost { topic } => {
            let id = session.publish_generated_post(&generator, &topic).await?;
            eprintln!("[Published blog post {}]", id);
        }
        AdminCommands::Hero {
            headline,
            subheadline,
        } => session.store().update_hero(headline, subheadline),
        AdminCommands::Settings {
            about,
            email,
            phone,
            theme_color,
        } => {
            let current = SettingsForm::from_content(&store.content());
            session.save_settings(SettingsForm {
                about_text: about.unwrap_or(current.about_text),
                contact_email: email.unwrap_or(current.contact_email),
                contact_phone: phone.unwrap_or(current.contact_phone),
                theme_color: theme_color.unwrap_or(current.theme_color),
                ..current
            });
        }
    }

    let rendered =
        serde_json::to_string_pretty(store.content().as_ref()).context("Failed to serialize content")?;
    println!("{}", rendered);
    eprintln!("{}", tokens.to_css());
    eprintln!("[{} content deliveries, version {}]", updates.get(), store.version());

    Ok(())
}
