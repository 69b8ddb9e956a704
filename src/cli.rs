use crate::application::PropertyApplication;
use crate::models::PropertyId;
use crate::repository::{PropertyReader, DEFAULT_TOP_LIMIT};
use crate::search::price::find_suggestion;
use crate::search::{SearchView, PRICE_SUGGESTIONS};
use crate::views::contact::ContactMessage;
use crate::views::render::{render_detail, render_featured, render_listing, render_search};
use crate::views::{ContactForm, DetailView, FeaturedView, ListingView};
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

/// Browse and search property listings from the command line
#[derive(Parser)]
#[command(name = "estate-scout")]
#[command(about = "Browse and search property listings", long_about = None)]
pub struct Cli {
    /// Listing API base URL, overrides ESTATE_API_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Landing page: first page of listings and the featured sidebar
    Home,

    /// Search properties and show one page of the results
    Search(SearchArgs),

    /// Show a single property
    Show {
        /// Property identifier
        id: String,
    },

    /// Most expensive properties
    Top {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: u32,
    },

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Name contains
    #[arg(long)]
    pub name: Option<String>,

    /// Address contains
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    /// Quick price range, e.g. "$500K - $1M"
    #[arg(long)]
    pub price_range: Option<String>,

    /// Results page to show
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl SearchArgs {
    fn has_filters(&self) -> bool {
        self.name.is_some()
            || self.address.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.price_range.is_some()
    }
}

/// Execute CLI command
pub async fn execute_command<R: PropertyReader>(
    command: Commands,
    app: Arc<PropertyApplication<R>>,
) -> Result<()> {
    match command {
        Commands::Home => {
            let listing = ListingView::load(&*app).await;
            let featured = FeaturedView::load(&*app).await;
            print!("{}", render_listing(&listing));
            print!("{}", render_featured(&featured));
        }
        Commands::Search(args) => {
            let view = run_search(app, args).await?;
            print!("{}", render_search(&view));
            if view.can_reset() {
                println!("Run `search` without filters to see every property again.");
            }
        }
        Commands::Show { id } => {
            let id: PropertyId = id.parse()?;
            let view = DetailView::load(&*app, id).await;
            print!("{}", render_detail(&view));
        }
        Commands::Top { limit } => {
            let featured = FeaturedView::load_with_limit(&*app, limit).await;
            if featured.properties.is_empty() {
                println!("No featured properties available.");
            } else {
                print!("{}", render_featured(&featured));
            }
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::default();
            form.draft = ContactMessage {
                name,
                email,
                message,
            };
            form.submit().await?;
            println!("Thank you for your message! We'll get back to you soon.");
        }
    }

    Ok(())
}

/// Mount the search view, apply `args` and land on the requested page
pub async fn run_search<R: PropertyReader>(
    app: Arc<PropertyApplication<R>>,
    args: SearchArgs,
) -> Result<SearchView<R>> {
    let mut view = SearchView::mount(app).await;

    if args.has_filters() {
        if let Some(label) = &args.price_range {
            let Some(suggestion) = find_suggestion(label) else {
                let labels: Vec<&str> = PRICE_SUGGESTIONS.iter().map(|s| s.label).collect();
                bail!("Unknown price range {:?}, expected one of: {}", label, labels.join(", "));
            };
            view.apply_price_suggestion(suggestion);
        }
        if let Some(name) = args.name {
            view.set_name(name);
        }
        if let Some(address) = args.address {
            view.set_address(address);
        }
        if let Some(min_price) = args.min_price {
            view.set_min_price(min_price);
        }
        if let Some(max_price) = args.max_price {
            view.set_max_price(max_price);
        }

        info!("Searching with {:?}", view.filters());
        view.search().await;
    }

    view.set_page(args.page);
    Ok(view)
}
