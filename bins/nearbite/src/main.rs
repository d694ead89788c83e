//! Nearbite CLI
//!
//! Find restaurants near an address or coordinate, and read the blog posts
//! written about them.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nearbite_cli::output::{format_count, OutputFormat, Status};
use nearbite_cli::table;
use nearbite_core::catalog::{BlogPost, Catalog};
use nearbite_core::config::Config;
use nearbite_core::error::{exit_codes, Error};
use nearbite_core::validation::{validate_search_input, SearchInput};
use nearbite_geo::{format_distance, haversine_distance, Coordinate};
use nearbite_search::{Gazetteer, RankedRestaurant, SearchCriteria, SearchRequest};
use nearbite_telemetry::TelemetryConfig;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nearbite")]
#[command(about = "Find restaurants near an address or coordinate")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Restaurant data file (overrides config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Blog data file (overrides config)
    #[arg(long, global = true)]
    blogs: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank restaurants by distance from a location
    Search(SearchArgs),

    /// Show where a piece of location text resolves to
    Resolve {
        /// Location text, e.g. "Rice Village" or "77036"
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Great-circle distance between two coordinates
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },

    /// List blog posts
    Blogs {
        /// Only posts about this restaurant id
        #[arg(long)]
        restaurant: Option<String>,
    },

    /// Show one blog post
    Blog {
        /// Blog post id
        id: String,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Location text; ignored when --lat/--lng are given
    address: Vec<String>,

    /// Origin latitude (requires --lng)
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Origin longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,

    /// Cuisine, matched case-insensitively
    #[arg(long)]
    cuisine: Option<String>,

    /// Minimum rating (0-5)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Price tier: $, $$, $$$ or $$$$
    #[arg(long)]
    price: Option<String>,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

/// Data files after applying command-line overrides
struct DataPaths {
    restaurants: PathBuf,
    blogs: Option<PathBuf>,
}

/// Where a search was centred, and how that was decided
#[derive(Debug, Serialize)]
struct Origin {
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
}

impl Origin {
    fn at(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            query: None,
            keyword: None,
        }
    }

    fn resolve(gazetteer: &Gazetteer, text: &str) -> Self {
        let resolution = gazetteer.resolve_match(text);
        Self {
            query: Some(text.to_string()),
            keyword: resolution.keyword.map(str::to_string),
            ..Self::at(resolution.coordinate)
        }
    }

    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    fn describe(&self) -> String {
        match (&self.query, &self.keyword) {
            (Some(query), Some(keyword)) => format!("\"{}\" ({})", query, keyword),
            (Some(query), None) => format!("\"{}\" (not recognised, using default location)", query),
            (None, _) => self.coordinate().to_string(),
        }
    }
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    restaurants: &'a [RankedRestaurant],
    origin: &'a Origin,
}

#[derive(Serialize)]
struct DistanceOutput {
    km: f64,
    formatted: String,
}

#[derive(Serialize)]
struct BlogsOutput<'a> {
    blogs: Vec<&'a BlogPost>,
}

#[derive(Serialize)]
struct BlogOutput<'a> {
    blog: &'a BlogPost,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let format = cli.format;
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            report(&err, format);
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(cli.config.as_deref())?;

    let level = match cli.verbose {
        0 => config.schema.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    nearbite_telemetry::init_with_config(
        TelemetryConfig::with_level(level).json(config.schema.logging.json),
    )?;
    tracing::debug!(path = ?config.path, "Loaded configuration");

    let paths = DataPaths {
        restaurants: cli.data.unwrap_or_else(|| config.restaurants_path()),
        blogs: cli.blogs.or_else(|| config.blogs_path()),
    };
    let format = cli.format;

    match cli.command {
        Commands::Search(args) => run_search(&config, &paths, format, args),
        Commands::Resolve { text } => run_resolve(&config, format, &text.join(" ")),
        Commands::Distance { lat1, lon1, lat2, lon2 } => {
            run_distance(format, (lat1, lon1), (lat2, lon2))
        }
        Commands::Blogs { restaurant } => run_blogs(&paths, format, restaurant.as_deref()),
        Commands::Blog { id } => run_blog(&paths, format, &id),
    }
}

fn run_search(
    config: &Config,
    paths: &DataPaths,
    format: OutputFormat,
    args: SearchArgs,
) -> Result<i32> {
    nearbite_telemetry::timed_span!("search");

    let limit = args.limit.unwrap_or(config.schema.search.limit);
    let input = SearchInput {
        latitude: args.lat,
        longitude: args.lng,
        min_rating: args.min_rating,
        price_range: args.price.clone(),
        limit,
    };
    validate_search_input(&input).to_result()?;

    let catalog = Catalog::load(&paths.restaurants, None)?;

    let origin = match (args.lat, args.lng) {
        (Some(latitude), Some(longitude)) => Origin::at(Coordinate::new(latitude, longitude)),
        _ if !args.address.is_empty() => Origin::resolve(&config.gazetteer(), &args.address.join(" ")),
        _ => Origin::at(config.default_location()),
    };

    let criteria = SearchCriteria {
        cuisine: args.cuisine,
        min_rating: args.min_rating,
        price_range: args.price,
    };
    let request = SearchRequest::near(origin.coordinate())
        .criteria(criteria)
        .limit(limit);
    let results = catalog.search(&request);

    match format {
        OutputFormat::Json => print_json(&SearchOutput {
            restaurants: &results,
            origin: &origin,
        })?,
        OutputFormat::Text => {
            Status::header(&format!("Restaurants near {}", origin.describe()));
            if results.is_empty() {
                Status::info("No restaurants match the given filters");
            } else {
                print!("{}", table::results_table(&results).render());
                println!();
                println!("{}", format_count(results.len(), "result", "results"));
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn run_resolve(config: &Config, format: OutputFormat, text: &str) -> Result<i32> {
    let origin = Origin::resolve(&config.gazetteer(), text);

    match format {
        OutputFormat::Json => print_json(&origin)?,
        OutputFormat::Text => {
            let how = match &origin.keyword {
                Some(keyword) => format!("matched \"{}\"", keyword),
                None => "no match, default location".to_string(),
            };
            println!("{}  ({})", origin.coordinate(), how);
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn run_distance(format: OutputFormat, from: (f64, f64), to: (f64, f64)) -> Result<i32> {
    let from = Coordinate::validated(from.0, from.1).map_err(Error::from)?;
    let to = Coordinate::validated(to.0, to.1).map_err(Error::from)?;

    let km = haversine_distance(&from, &to);
    let output = DistanceOutput {
        km,
        formatted: format_distance(km),
    };

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => println!("{:.3} km ({})", output.km, output.formatted),
    }

    Ok(exit_codes::SUCCESS)
}

fn run_blogs(paths: &DataPaths, format: OutputFormat, restaurant: Option<&str>) -> Result<i32> {
    let catalog = load_with_blogs(paths)?;

    let posts: Vec<&BlogPost> = match restaurant {
        Some(id) => {
            if catalog.restaurant(id).is_none() {
                Status::warning(&format!("No restaurant with id '{}'", id));
            }
            catalog.blogs_for_restaurant(id).collect()
        }
        None => catalog.blogs().iter().collect(),
    };

    match format {
        OutputFormat::Json => print_json(&BlogsOutput { blogs: posts })?,
        OutputFormat::Text if posts.is_empty() => Status::info("No blog posts"),
        OutputFormat::Text => {
            print!("{}", table::blogs_table(posts.iter().copied()).render());
            println!();
            println!("{}", format_count(posts.len(), "post", "posts"));
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn run_blog(paths: &DataPaths, format: OutputFormat, id: &str) -> Result<i32> {
    let catalog = load_with_blogs(paths)?;
    let post = catalog.require_blog(id)?;

    match format {
        OutputFormat::Json => print_json(&BlogOutput { blog: post })?,
        OutputFormat::Text => print!("{}", table::render_blog(post)),
    }

    Ok(exit_codes::SUCCESS)
}

fn load_with_blogs(paths: &DataPaths) -> Result<Catalog> {
    let blogs = paths.blogs.as_deref().ok_or_else(|| {
        Error::config("No blog data file configured")
            .with_suggestion("Pass --blogs or set data.blogs in nearbite.toml")
    })?;
    Ok(Catalog::load(&paths.restaurants, Some(blogs))?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// JSON mode writes a structured report to stderr for known errors
fn report(err: &anyhow::Error, format: OutputFormat) {
    match (format, err.downcast_ref::<Error>()) {
        (OutputFormat::Json, Some(known)) => match serde_json::to_string(&known.to_report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => Status::error(&format!("{:#}", err)),
        },
        _ => Status::error(&format!("{:#}", err)),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>()
        .map_or(exit_codes::FAILURE, Error::exit_code)
}
