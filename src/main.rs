use clap::Parser;
use dotenv::dotenv;
use gita_guide::{Config, Insight, InsightPipeline};

/// Ask the Bhagavad Gita about a problem you are facing.
#[derive(Parser, Debug)]
#[command(name = "gita-guide", version)]
struct Args {
    /// Model to use instead of GROQ_MODEL / the default.
    #[arg(long)]
    model: Option<String>,

    /// Print the insight as JSON.
    #[arg(long)]
    json: bool,

    /// What is troubling you.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().init();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(model) = args.model {
        config = config.with_model(model);
    }

    let pipeline = InsightPipeline::new(config);
    let query = args.query.join(" ");

    match pipeline.ask(&query).await {
        Ok(insight) if args.json => {
            println!("{}", serde_json::to_string_pretty(&insight)?);
        }
        Ok(insight) => print_insight(&insight),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_insight(insight: &Insight) {
    println!("\n{}", insight.shloka);
    println!("    — {}\n", insight.reference);
    println!("\"{}\"\n", insight.translation);
    println!("✨ Divine Wisdom");
    println!("{}\n", insight.wisdom);
    println!("🪷 Path of Action");
    println!("{}", insight.actionable_advice);
}
