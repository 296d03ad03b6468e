use adyen_client::{
    hpp::{DirectoryLookupRequest, SkipHppRequest},
    model::Amount,
    modification::{Cancel, Capture, Refund},
    recurring::RecurringDetailsRequest,
    Adyen, AdyenConfig,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[macro_use]
extern crate tracing;

/// Adyen playground. Credentials and defaults are read from `ADYEN_*` variables (a `.env` file
/// works too).
#[derive(Parser)]
#[command(name = "adyen-playground", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the URL of the client-side encryption script
    ClientUrl { client_id: String },
    /// List the HPP payment methods available for an amount
    Directory(HppArgs),
    /// Print a signed skip-details redirect URL
    RedirectUrl {
        #[command(flatten)]
        hpp: HppArgs,
        #[arg(long)]
        brand_code: String,
        #[arg(long, default_value = "")]
        issuer_id: String,
        /// e.g. 2030-01-05
        #[arg(long)]
        ship_before_date: String,
    },
    /// Capture an authorised payment
    Capture(ModificationArgs),
    /// Cancel an authorised payment
    Cancel(ModificationArgs),
    /// Refund a captured payment
    Refund(ModificationArgs),
    /// List the stored payment details of a shopper
    RecurringDetails { shopper_reference: String },
}

#[derive(Args)]
struct HppArgs {
    #[arg(long)]
    reference: String,
    /// Amount in minor units
    #[arg(long)]
    amount: i64,
    #[arg(long, env = "ADYEN_SKIN_CODE")]
    skin_code: String,
    /// e.g. 2030-01-01T00:00:00Z
    #[arg(long)]
    session_validity: String,
    #[arg(long, default_value = "")]
    country_code: String,
}

#[derive(Args)]
struct ModificationArgs {
    /// pspReference of the original payment
    original_reference: String,
    #[arg(long, default_value = "")]
    reference: String,
    /// Amount in minor units. Ignored by cancel.
    #[arg(long, default_value_t = 0)]
    amount: i64,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AdyenConfig::new_from_env_or_default()?;
    let adyen = Adyen::from_config(&config)?;
    info!("Using the {} environment", adyen.credentials().env());

    match cli.command {
        Command::ClientUrl { client_id } => println!("{}", adyen.client_url(&client_id)),
        Command::Directory(args) => {
            let req = DirectoryLookupRequest {
                currency_code: adyen.currency().to_string(),
                merchant_account: adyen.merchant_account().to_string(),
                payment_amount: args.amount,
                skin_code: args.skin_code,
                merchant_reference: args.reference,
                session_validity: args.session_validity,
                country_code: args.country_code,
                ..Default::default()
            };
            print_json(&adyen.hpp().directory_lookup(&req).await?)?;
        }
        Command::RedirectUrl {
            hpp,
            brand_code,
            issuer_id,
            ship_before_date,
        } => {
            let req = SkipHppRequest {
                merchant_reference: hpp.reference,
                payment_amount: hpp.amount,
                currency_code: adyen.currency().to_string(),
                ship_before_date,
                skin_code: hpp.skin_code,
                merchant_account: adyen.merchant_account().to_string(),
                session_validity: hpp.session_validity,
                country_code: hpp.country_code,
                brand_code,
                issuer_id,
                ..Default::default()
            };
            println!("{}", adyen.hpp().redirect_url(&req)?);
        }
        Command::Capture(args) => {
            let req = Capture {
                merchant_account: adyen.merchant_account().to_string(),
                modification_amount: Amount::new(adyen.currency(), args.amount),
                original_reference: args.original_reference,
                reference: args.reference,
            };
            print_json(&adyen.modification().capture(&req).await?)?;
        }
        Command::Cancel(args) => {
            let req = Cancel {
                merchant_account: adyen.merchant_account().to_string(),
                original_reference: args.original_reference,
                reference: args.reference,
            };
            print_json(&adyen.modification().cancel(&req).await?)?;
        }
        Command::Refund(args) => {
            let req = Refund {
                merchant_account: adyen.merchant_account().to_string(),
                modification_amount: Amount::new(adyen.currency(), args.amount),
                original_reference: args.original_reference,
                reference: args.reference,
            };
            print_json(&adyen.modification().refund(&req).await?)?;
        }
        Command::RecurringDetails { shopper_reference } => {
            let req = RecurringDetailsRequest {
                merchant_account: adyen.merchant_account().to_string(),
                recurring: None,
                shopper_reference,
            };
            print_json(&adyen.recurring().list_recurring_details(&req).await?)?;
        }
    }
    Ok(())
}
