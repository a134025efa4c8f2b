use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use directory::reference::{SPECIALITY_KEYWORDS, SPECIALTIES, SYMPTOM_SPECIALTIES};
use directory::{Doctor, NOT_MENTIONED};
use engine::pagination::{has_next, has_previous};
use engine::{Action, FilterItem, PageControl, SearchSession};
use remote::{DoctorListingClient, DEFAULT_BASE_URL};
use tracing::warn;

/// doc-finder - search the doctor directory from the terminal
#[derive(Parser)]
#[command(name = "doc-finder")]
#[command(about = "Doctor directory search and filtering", long_about = None)]
struct Cli {
    /// Base URL of the listing backend
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Skip the remote fetch and use only the embedded dataset
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search doctors with any combination of filters
    Search {
        /// Free-text specialty search (e.g. "cardio", "teeth")
        #[arg(long)]
        query: Option<String>,

        /// Restrict to a single state (exact, case-insensitive)
        #[arg(long)]
        state: Option<String>,

        /// Symptom to infer specialties from (repeatable)
        #[arg(long = "symptom")]
        symptoms: Vec<String>,

        /// Specialty filter (repeatable, substring match)
        #[arg(long = "specialty")]
        specialties: Vec<String>,

        /// Location filter over city or state (repeatable)
        #[arg(long = "location")]
        locations: Vec<String>,

        /// Acceptable fee ceiling in rupees (repeatable)
        #[arg(long = "max-fee")]
        fees: Vec<u32>,

        /// Exact star rating 1-5 (repeatable)
        #[arg(long = "rating")]
        ratings: Vec<u32>,

        /// Language filter (repeatable)
        #[arg(long = "language")]
        languages: Vec<String>,

        /// Availability slot filter (repeatable)
        #[arg(long = "available")]
        availability: Vec<String>,

        /// Experience bracket, e.g. "10+ years" (repeatable)
        #[arg(long = "experience")]
        experience: Vec<String>,

        /// Page of results to show
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// List the known specialties and their search keywords
    Specialties,

    /// List the symptoms that map to specialties
    Symptoms,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            state,
            symptoms,
            specialties,
            locations,
            fees,
            ratings,
            languages,
            availability,
            experience,
            page,
        } => {
            let mut session = open_session(&cli.api_url, cli.offline, query.as_deref()).await;

            if let Some(selected) = state {
                session.dispatch(Action::SetSelectedState(selected));
            }

            let items = symptoms
                .into_iter()
                .map(FilterItem::Symptom)
                .chain(specialties.into_iter().map(FilterItem::Specialty))
                .chain(locations.into_iter().map(FilterItem::Location))
                .chain(fees.into_iter().map(FilterItem::FeeCeiling))
                .chain(ratings.into_iter().map(FilterItem::Rating))
                .chain(languages.into_iter().map(FilterItem::Language))
                .chain(availability.into_iter().map(FilterItem::Availability))
                .chain(experience.into_iter().map(FilterItem::Experience));
            for item in items {
                session.dispatch(Action::Toggle(item));
            }

            if page > 1 && !session.set_page(page) {
                println!(
                    "{}",
                    format!(
                        "Page {} is out of range (1-{}); showing page 1.",
                        page,
                        session.total_pages().max(1)
                    )
                    .yellow()
                );
            }

            render_results(&session);
        }
        Commands::Specialties => {
            for specialty in SPECIALTIES {
                let keywords = SPECIALITY_KEYWORDS
                    .get(specialty.to_lowercase().as_str())
                    .copied()
                    .unwrap_or(&[]);
                println!("{}  ({})", specialty.bold(), keywords.join(", "));
            }
        }
        Commands::Symptoms => {
            for (symptom, specialties) in SYMPTOM_SPECIALTIES.iter() {
                println!("{}  -> {}", symptom.bold(), specialties.join(", "));
            }
        }
    }

    Ok(())
}

/// Fetch the listing and open a session; a failed fetch degrades to the
/// embedded dataset with a visible banner instead of aborting.
async fn open_session(api_url: &str, offline: bool, seed_query: Option<&str>) -> SearchSession {
    if offline {
        return SearchSession::new(Vec::new(), seed_query);
    }

    let client = DoctorListingClient::new(api_url);
    match client.fetch_all().await {
        Ok(records) => SearchSession::new(records, seed_query),
        Err(err) => {
            warn!(error = %err, "listing fetch failed, using fallback dataset only");
            SearchSession::with_load_error(
                "Failed to load doctors. Please try again later.",
                seed_query,
            )
        }
    }
}

fn render_results(session: &SearchSession) {
    if let Some(banner) = session.load_error() {
        println!("{}  {}", banner.red().bold(), "(run again to retry)".dimmed());
        println!();
    }

    if session.has_active_filters() {
        let tags: Vec<String> = session
            .filter_tags()
            .into_iter()
            .map(|tag| format!("[{}]", tag.label))
            .collect();
        println!("{} {}", "Active filters:".bold(), tags.join(" "));
        println!();
    }

    if session.results().is_empty() {
        println!("No doctors found matching your criteria.");
        return;
    }

    for doctor in session.page() {
        render_card(doctor);
    }

    println!(
        "{} doctors matched, page {} of {}",
        session.results().len(),
        session.current_page(),
        session.total_pages()
    );
    if session.total_pages() > 1 {
        println!("{}", pagination_row(session));
    }
}

fn render_card(doctor: &Doctor) {
    println!(
        "{} {}",
        "Dr.".bold(),
        doctor.full_name.to_uppercase().bold()
    );
    println!("  Specialty:  {}", doctor.medical_speciality);
    println!(
        "  Experience: {} {}",
        doctor.experience_years,
        if doctor.experience_years == 1 { "year" } else { "years" }
    );
    println!("  Location:   {}, {}", doctor.city, doctor.state);
    println!("  Languages:  {}", doctor.languages.join(", "));
    println!("  Available:  {}", doctor.availability.join(", "));

    let fee = match doctor.consultation_fee {
        Some(fee) => format!("₹{fee}"),
        None => "N/A".to_string(),
    };
    let rating = match doctor.rating {
        Some(rating) => format!("{} ({rating})", stars(rating).yellow()),
        None => "N/A".to_string(),
    };
    println!("  Fee: {}   Rating: {}", fee.green(), rating);

    if doctor.phone != NOT_MENTIONED || doctor.email != NOT_MENTIONED {
        println!("  Contact:    {} / {}", doctor.phone, doctor.email);
    }
    println!();
}

fn stars(rating: f32) -> String {
    let full = (rating.floor() as usize).min(5);
    let half = rating - rating.floor() >= 0.5;
    let mut out = "★".repeat(full);
    if half && full < 5 {
        out.push('½');
    }
    while out.chars().count() < 5 {
        out.push('☆');
    }
    out
}

fn pagination_row(session: &SearchSession) -> String {
    let current = session.current_page();
    let total = session.total_pages();

    let mut parts = Vec::new();
    parts.push(if has_previous(current) {
        "‹".to_string()
    } else {
        "‹".dimmed().to_string()
    });
    for control in session.page_controls() {
        match control {
            PageControl::Page(page) if page == current => {
                parts.push(format!("[{page}]").bold().to_string())
            }
            PageControl::Page(page) => parts.push(page.to_string()),
            PageControl::Ellipsis => parts.push("…".to_string()),
        }
    }
    parts.push(if has_next(current, total) {
        "›".to_string()
    } else {
        "›".dimmed().to_string()
    });
    parts.join(" ")
}
