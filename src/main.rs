//! Resale Radar
//!
//! Price-monitoring bot: estimates fair resale value from marketplace
//! sources and flags profitable listings.

use clap::{Parser, Subcommand};
use resale_radar::{
    checker::PriceChecker,
    classifier::DealClassifier,
    config::Config,
    notify::Notifier,
    types::DealTier,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "resale-radar")]
#[command(about = "Resale price monitoring bot for e-commerce arbitrage")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a listing price is a profitable resale opportunity
    Check {
        /// Product query, e.g. "iPhone 15 Pro 128GB"
        query: String,
        /// Listed price of the candidate
        price: Decimal,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
        /// Send a Telegram notification when the deal clears policy
        #[arg(long)]
        notify: bool,
    },
    /// Show the aggregated resale estimate for a product
    Estimate {
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Classify a discount percentage into a deal tier
    Classify {
        discount_pct: Decimal,
    },
    /// Test Telegram notification
    TestNotify,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Check {
            query,
            price,
            json,
            notify,
        } => check(config, &query, price, json, notify).await,
        Commands::Estimate { query, json } => estimate(config, &query, json).await,
        Commands::Classify { discount_pct } => classify(config, discount_pct),
        Commands::TestNotify => test_notify(config).await,
    }
}

async fn check(
    config: Config,
    query: &str,
    price: Decimal,
    json: bool,
    notify: bool,
) -> anyhow::Result<()> {
    let checker = PriceChecker::new(&config)?;
    let report = checker.check(query, price).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n📊 Deal Report: {}\n", report.product_query);
        println!("Current price:   ${}", report.current_price);
        println!("Average resale:  ${}", report.estimate.mean);
        if report.estimate.has_samples() {
            println!("Range:           {}", report.estimate.range);
        }
        println!(
            "Samples:         {} ({} confidence)",
            report.estimate.sample_count(),
            report.estimate.confidence
        );
        println!(
            "Profit:          ${} ({:.1}%)",
            report.verdict.profit_amount,
            report.verdict.profit_ratio * dec!(100)
        );
        println!("Tier:            {}", report.tier);
        println!(
            "Verdict:         {}",
            if report.verdict.is_good_deal {
                "✅ good deal"
            } else {
                "❌ not a deal"
            }
        );
        println!("\n{}", report.verdict.reasoning);
    }

    if notify {
        let notifier = Notifier::from_config(config.telegram.as_ref());
        if notifier.is_enabled() {
            notifier.deal_found(&report).await?;
        } else {
            tracing::warn!("Telegram not configured, notification skipped");
        }
    }

    Ok(())
}

async fn estimate(config: Config, query: &str, json: bool) -> anyhow::Result<()> {
    let checker = PriceChecker::new(&config)?;
    let estimate = checker.estimate(query).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("\n💰 Resale Estimate: {}\n", estimate.product_query);
    if estimate.has_samples() {
        println!("Mean:       ${}", estimate.mean);
        println!("Range:      {}", estimate.range);
        println!(
            "Samples:    {} ({} confidence)",
            estimate.sample_count(),
            estimate.confidence
        );
        for sample in &estimate.samples {
            println!("  {} → ${}", sample.source, sample.value);
        }
    } else {
        println!("No resale prices found from any source.");
    }

    Ok(())
}

fn classify(config: Config, discount_pct: Decimal) -> anyhow::Result<()> {
    let classifier = DealClassifier::new(config.classifier);
    let tier = classifier.classify(discount_pct);
    let emoji = match tier {
        DealTier::Excellent => "🔥",
        DealTier::Good => "💰",
        DealTier::None => "—",
    };
    println!("{emoji} {discount_pct}% → {tier}");
    Ok(())
}

async fn test_notify(config: Config) -> anyhow::Result<()> {
    let tg = config
        .telegram
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Telegram not configured in config.toml"))?;

    let notifier = Notifier::new(
        tg.bot_token.clone(),
        tg.chat_id.clone(),
        tg.high_priority_chat_id.clone(),
    );
    notifier
        .send_raw("🧪 <b>Test Notification</b>\n\nIf you see this, Telegram integration is working!")
        .await?;

    println!("✅ Test notification sent!");
    Ok(())
}
