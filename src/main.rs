use clap::{Args, Parser, Subcommand};
use listing_wizard::config::AppConfig;
use listing_wizard::error::AppError;
use listing_wizard::telemetry;
use listing_wizard::wizard::domain::{
    AvailabilitySection, DetailsSection, LocationSection, Photo, PhotoId, PricingSection,
    PropertyType, SectionPayload,
};
use listing_wizard::wizard::store::{DraftStore, FileDraftStore, MemoryDraftStore};
use listing_wizard::wizard::{ListingWizard, StepRegistry};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Wizard",
    about = "Walk a rental listing through the seven-step creation flow from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the stored draft's progress and preview
    Status,
    /// Print the step catalog
    Steps,
    /// Choose the property type (step 0)
    SelectType {
        /// room, apartment, or house
        property_type: String,
    },
    /// Fill in the location section
    SetLocation(LocationArgs),
    /// Fill in the title and description
    SetDetails(DetailsArgs),
    /// Fill in the pricing section
    SetPricing(PricingArgs),
    /// Fill in the availability section
    SetAvailability(AvailabilityArgs),
    /// Advance to the next step (denied while the current step is incomplete)
    Next,
    /// Go back one step
    Back,
    /// Jump to a step (backward jumps only)
    Goto { index: usize },
    /// Force an explicit draft save
    Save,
    /// Run the completeness check and publish the listing
    Publish,
    /// Discard the stored draft
    Clear,
    /// Scripted happy-path walkthrough against an in-memory store
    Demo,
}

#[derive(Args, Debug)]
struct LocationArgs {
    #[arg(long)]
    address: String,
    #[arg(long)]
    city: String,
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long, default_value = "")]
    zip_code: String,
    #[arg(long, default_value = "")]
    country: String,
    #[arg(long)]
    unit: Option<String>,
    #[arg(long)]
    neighborhood: Option<String>,
}

#[derive(Args, Debug)]
struct DetailsArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    bedrooms: Option<String>,
    #[arg(long)]
    bathrooms: Option<String>,
    #[arg(long)]
    furnishing: Option<String>,
}

#[derive(Args, Debug)]
struct PricingArgs {
    #[arg(long)]
    base_rent: String,
    #[arg(long)]
    security_deposit: Option<String>,
}

#[derive(Args, Debug)]
struct AvailabilityArgs {
    #[arg(long)]
    available_from: String,
    #[arg(long)]
    available_to: Option<String>,
    #[arg(long)]
    max_occupants: Option<String>,
    #[arg(long)]
    allow_pets: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Status => {
            let wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            print_json(&wizard.snapshot())?;
        }
        Command::Steps => {
            let registry = StepRegistry::standard();
            for step in registry.steps() {
                println!("{}. {} [{}] - {}", step.index, step.title, step.icon, step.description);
            }
        }
        Command::SelectType { property_type } => {
            let parsed: PropertyType = property_type.parse()?;
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.select_property_type(parsed);
            print_json(&wizard.snapshot())?;
        }
        Command::SetLocation(args) => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.apply_change(SectionPayload::Location(LocationSection {
                address: args.address,
                unit: args.unit,
                city: args.city,
                state: args.state,
                zip_code: args.zip_code,
                country: args.country,
                neighborhood: args.neighborhood,
            }));
            print_json(&wizard.snapshot())?;
        }
        Command::SetDetails(args) => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.apply_change(SectionPayload::Details(DetailsSection {
                title: args.title,
                description: args.description,
                bedrooms: args.bedrooms,
                bathrooms: args.bathrooms,
                furnishing: args.furnishing,
                ..DetailsSection::default()
            }));
            print_json(&wizard.snapshot())?;
        }
        Command::SetPricing(args) => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.apply_change(SectionPayload::Pricing(PricingSection {
                base_rent: args.base_rent,
                security_deposit: args.security_deposit,
                ..PricingSection::default()
            }));
            print_json(&wizard.snapshot())?;
        }
        Command::SetAvailability(args) => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.apply_change(SectionPayload::Availability(AvailabilitySection {
                available_from: args.available_from,
                available_to: args.available_to,
                max_occupants: args.max_occupants,
                allow_pets: args.allow_pets,
                ..AvailabilitySection::default()
            }));
            print_json(&wizard.snapshot())?;
        }
        Command::Next => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.advance();
            print_json(&wizard.snapshot())?;
        }
        Command::Back => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.retreat();
            print_json(&wizard.snapshot())?;
        }
        Command::Goto { index } => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            wizard.go_to_step(index);
            print_json(&wizard.snapshot())?;
        }
        Command::Save => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            let stamp = wizard.save_draft()?;
            println!("draft saved at {stamp}");
        }
        Command::Publish => {
            let mut wizard = ListingWizard::open(FileDraftStore::new(&config.storage.dir))?;
            let listing = wizard.publish()?;
            print_json(&listing)?;
        }
        Command::Clear => {
            FileDraftStore::new(&config.storage.dir).clear()?;
            println!("stored draft discarded");
        }
        Command::Demo => run_demo()?,
    }

    Ok(())
}

/// Fills every step in order and publishes, printing the snapshot as each
/// stage lands. Stands in for the presentation adapter.
fn run_demo() -> Result<(), AppError> {
    let mut wizard = ListingWizard::open(MemoryDraftStore::new())?;

    wizard.select_property_type(PropertyType::Apartment);
    wizard.advance();

    wizard.apply_change(SectionPayload::Location(LocationSection {
        address: "123 Main St".to_string(),
        city: "NYC".to_string(),
        state: "NY".to_string(),
        zip_code: "10001".to_string(),
        country: "us".to_string(),
        ..LocationSection::default()
    }));
    wizard.advance();

    wizard.apply_change(SectionPayload::Details(DetailsSection {
        title: "Sunny two-bedroom near the park".to_string(),
        description: "Recently renovated apartment with open kitchen and balcony.".to_string(),
        bedrooms: Some("2".to_string()),
        bathrooms: Some("1".to_string()),
        ..DetailsSection::default()
    }));
    wizard.advance();

    for amenity in ["wifi", "heating", "dishwasher"] {
        wizard.toggle_amenity(amenity);
    }
    wizard.advance();

    wizard.add_photo(Photo {
        id: PhotoId("photo_1".to_string()),
        url: "https://images.example.com/photo_1.jpg".to_string(),
        name: "living-room.jpg".to_string(),
        size: 482_113,
    });
    wizard.advance();

    wizard.apply_change(SectionPayload::Pricing(PricingSection {
        base_rent: "1200".to_string(),
        security_deposit: Some("1200".to_string()),
        ..PricingSection::default()
    }));
    wizard.advance();

    wizard.apply_change(SectionPayload::Availability(AvailabilitySection {
        available_from: "2025-01-01".to_string(),
        max_occupants: Some("2".to_string()),
        allow_pets: true,
        ..AvailabilitySection::default()
    }));

    info!("all steps filled, publishing");
    print_json(&wizard.snapshot())?;

    let listing = wizard.publish()?;
    print_json(&listing)?;

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
