use clap::{Args, Parser, Subcommand};
use log::debug;

use recipe_hub::filter::{CUISINES, MAX_TIME_OPTIONS};
use recipe_hub::session::CATEGORIES;
use recipe_hub::{
    format_cook_time, BrowseError, Browser, BrowserConfig, Difficulty, FilterCriteria,
    HttpRecipeSource, Page, Recipe, RecipeSource, SessionState,
};

#[derive(Parser, Debug)]
#[command(name = "recipe-hub")]
#[command(about = "Browse, search and filter recipes", long_about = None)]
struct Cli {
    /// Override the recipe API base URL
    #[arg(long, global = true, env = "RECIPEHUB_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List recipes, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search recipes by name, cuisine or ingredient
    Search {
        /// Search query
        query: String,

        /// Match locally instead of asking the API
        #[arg(long)]
        local: bool,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe with ingredients and instructions
    Show {
        /// Recipe ID
        id: u64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List browse categories and filter choices
    Categories,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Only recipes of this cuisine
    #[arg(long)]
    cuisine: Option<String>,

    /// Only recipes of this difficulty (easy, medium, hard)
    #[arg(long)]
    difficulty: Option<String>,

    /// Maximum cooking time in minutes
    #[arg(long)]
    max_time: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            cuisine: args.cuisine.unwrap_or_default(),
            difficulty: args.difficulty.unwrap_or_default(),
            max_time: args.max_time.unwrap_or_default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.source.base_url = base_url;
    }
    debug!("Using recipe API at {}", config.source.base_url);
    let browser = Browser::new(HttpRecipeSource::new(&config.source)?);

    match cli.command {
        Commands::List { filters, json } => {
            let state = load(&browser).await?;
            let state = state.set_filters(filters.into()).navigate(Page::Search);
            print_recipes(&state.visible_recipes(), json)?;
        }
        Commands::Search {
            query,
            local,
            filters,
            json,
        } => {
            let state = load(&browser).await?;
            let state = state.set_filters(filters.into()).navigate(Page::Search);
            let state = if local {
                state.set_query(query)
            } else {
                browser.submit_search(state, query).await
            };
            if let Some(notice) = state.notice() {
                eprintln!("{}", notice);
            }
            print_recipes(&state.visible_recipes(), json)?;
        }
        Commands::Show { id, json } => {
            let recipe = browser.source().get_by_id(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                print_detail(&recipe);
            }
        }
        Commands::Categories => print_categories(),
    }

    Ok(())
}

async fn load(browser: &Browser<HttpRecipeSource>) -> Result<SessionState, Box<dyn std::error::Error>> {
    let state = browser.load(SessionState::new()).await;
    match state.notice() {
        Some(notice) if notice.is_blocking() => Err(notice.message().into()),
        _ => Ok(state),
    }
}

fn print_recipes(recipes: &[Recipe], json: bool) -> Result<(), BrowseError> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found. Try adjusting your search or filters.");
        return Ok(());
    }

    for recipe in recipes {
        let rating = recipe
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let difficulty = recipe
            .difficulty_level()
            .map_or(recipe.difficulty.as_str(), |level| level.as_str());
        println!(
            "{:>4}  {:<40} {:<14} {:<7} {:>7}  {}",
            recipe.id,
            recipe.name,
            recipe.cuisine,
            difficulty,
            format_cook_time(recipe.cook_time_minutes),
            rating
        );
    }
    Ok(())
}

fn print_detail(recipe: &Recipe) {
    println!("{}", recipe.name);
    println!(
        "{} | {} | {}",
        recipe.cuisine,
        format_cook_time(recipe.cook_time_minutes),
        recipe.difficulty
    );
    if let Some(image) = &recipe.image {
        println!("{}", image);
    }

    println!("\nIngredients");
    for ingredient in recipe.ingredient_list() {
        println!("  • {}", ingredient);
    }

    println!("\nInstructions");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }

    if let Some(calories) = recipe.calories_per_serving {
        println!("\nNutrition (per serving)");
        println!("  Calories   {}", calories);
        if let Some(servings) = recipe.servings {
            println!("  Servings   {}", servings);
        }
        if let Some(prep) = recipe.prep_time_minutes {
            println!("  Prep Time  {}", format_cook_time(prep));
        }
    }
}

fn print_categories() {
    println!("Categories: {}", CATEGORIES.join(", "));
    println!("Cuisines:   {}", CUISINES.join(", "));
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    println!("Difficulty: {}", difficulties.join(", "));
    let times: Vec<String> = MAX_TIME_OPTIONS
        .iter()
        .map(|m| format_cook_time(*m))
        .collect();
    println!("Max time:   {}", times.join(", "));
}
