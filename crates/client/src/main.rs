//! Marketplace client - command-line driver for the registration flow.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client_lib::clients::{HttpMarketplaceClient, MarketplaceApi};
use client_lib::config::ClientConfig;
use client_lib::form::{parse_selected_options, SubmitOutcome};
use client_lib::navigation::RecordingNavigator;
use client_lib::session::{InMemorySessionStore, SessionInfo, SessionStore};
use client_lib::views::{ServiceDetailView, ServiceViewState};
use domain::{AccountField, AccountKind, AddressField, MembershipTier};

#[derive(Parser)]
#[command(name = "yotereparo")]
#[command(about = "Marketplace registration client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the city catalog
    Cities,
    /// List the neighborhoods of a city
    Neighborhoods {
        #[arg(long)]
        city: i64,
    },
    /// Register a new account
    Register {
        /// Account type: empleador or usuario
        #[arg(long, default_value = "usuario")]
        kind: AccountKind,
        #[arg(long)]
        id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        surname: String,
        #[arg(long)]
        city: Option<i64>,
        /// Neighborhood ids to cover, providers only
        #[arg(long, value_delimiter = ',')]
        neighborhoods: Vec<String>,
        #[arg(long, default_value = "GRATUITA")]
        membership: MembershipTier,
        #[arg(long, default_value = "")]
        street: String,
        #[arg(long, default_value_t = 0)]
        number: u32,
        #[arg(long, default_value = "")]
        floor: String,
        #[arg(long, default_value = "")]
        unit: String,
    },
    /// Show a service
    Service {
        #[arg(long)]
        id: i64,
        #[arg(long, env = "USER_NAME")]
        user: String,
        #[arg(long, env = "ACCESS_TOKEN")]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    match cli.command {
        Commands::Cities => {
            let api = HttpMarketplaceClient::new(&config.http)?;
            for city in api.fetch_cities().await? {
                println!("{}\t{}", city.id, city.description);
            }
        }
        Commands::Neighborhoods { city } => {
            let api = HttpMarketplaceClient::new(&config.http)?;
            for hood in api.fetch_neighborhoods(city).await? {
                println!("{}\t{}\t{}", hood.id, hood.description, hood.postal_code);
            }
        }
        Commands::Register {
            kind,
            id,
            email,
            password,
            confirm,
            name,
            surname,
            city,
            neighborhoods,
            membership,
            street,
            number,
            floor,
            unit,
        } => {
            let form = client_lib::mount_registration_form(kind, config).await?;

            form.update_account_field(AccountField::Id(id)).await?;
            form.update_account_field(AccountField::Email(email)).await?;
            form.update_account_field(AccountField::Password(password)).await?;
            form.update_account_field(AccountField::PasswordConfirmation(confirm))
                .await?;
            form.update_account_field(AccountField::GivenName(name)).await?;
            form.update_account_field(AccountField::FamilyName(surname)).await?;
            form.update_account_field(AccountField::Membership(membership))
                .await?;
            if let Some(city) = city {
                form.update_account_field(AccountField::City(city)).await?;
            }
            if kind.is_provider() && !neighborhoods.is_empty() {
                form.update_neighborhood_selection(parse_selected_options(&neighborhoods)?)
                    .await?;
            }

            for field in [
                AddressField::Street(street),
                AddressField::StreetNumber(number),
                AddressField::Floor(floor),
                AddressField::Unit(unit),
            ] {
                form.update_address_field(field).await?;
            }

            match form.submit().await? {
                SubmitOutcome::Succeeded => info!("Account created"),
                SubmitOutcome::Blocked(errors) | SubmitOutcome::Failed(errors) => {
                    for error in errors {
                        warn!("{}", error.message);
                        eprintln!("{}", error.message);
                    }
                    std::process::exit(1);
                }
            }
        }
        Commands::Service { id, user, token } => {
            let session = Arc::new(InMemorySessionStore::new());
            let marker = serde_json::to_string(&SessionInfo {
                username: user,
                access_token: token,
            })?;
            session.set(&config.session_cookie_name, marker).await;

            let view = ServiceDetailView::new(
                Arc::new(HttpMarketplaceClient::new(&config.http)?),
                session,
                Arc::new(RecordingNavigator::new()),
                config,
            );
            match view.load(id, None).await {
                ServiceViewState::Loaded(detail) => {
                    println!("{} ({})", detail.title, detail.provider);
                    println!("{}", detail.body);
                    println!("{}", "*".repeat(detail.stars() as usize));
                }
                ServiceViewState::NotFound(msg) | ServiceViewState::Unavailable(msg) => {
                    eprintln!("{}", msg);
                    std::process::exit(1);
                }
                ServiceViewState::RedirectedToLogin => {
                    eprintln!("not signed in");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
