//! Gem appraisal driver
//!
//! Hires a cutter, draws a batch of gems from the standard tables and runs
//! it through appraisal and cutting. Every choice comes from the command
//! line, so a seeded run is fully reproducible.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gem_appraisal::batch::{
    BatchEngine, BatchObserver, BatchRequest, BatchResult, GemAppraisalContext, GemPlan,
    GemStartContext,
};
use gem_appraisal::catalog::{self, GemCategory, CATEGORIES};
use gem_appraisal::core::{format_sp, AppraisalError, EngineConfig, GemRng, Result};
use gem_appraisal::cutting::SuperbStep;
use gem_appraisal::retainer::{RetainerRequest, RetainerState};

/// Appraise and cut a batch of gems
#[derive(Parser, Debug)]
#[command(name = "gem-appraisal")]
#[command(about = "Appraise and cut gems using the standard treasure tables")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Gemcutter race: Normal, Dwarf or Gnome
    #[arg(long, default_value = "Normal")]
    race: String,

    /// Retainer term in months
    #[arg(long, default_value_t = 1)]
    months: u32,

    /// Cutter skill tier, rolled when omitted
    #[arg(long)]
    tier: Option<String>,

    /// Gem category (1-6), rolled on d% when omitted
    #[arg(long)]
    category: Option<usize>,

    /// Gem name within the category, rolled when omitted
    #[arg(long, conflicts_with = "mixed")]
    gem: Option<String>,

    /// Roll a separate gem for every stone in the batch
    #[arg(long)]
    mixed: bool,

    /// Number of gems in the batch
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Size class (1 Very Small .. 6 Huge)
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Skip appraisal (and therefore cutting); no retainer is hired
    #[arg(long)]
    no_appraise: bool,

    /// Cut every appraised gem
    #[arg(long)]
    cut: bool,

    /// Attempts a Superb cutter may make on each gem
    #[arg(long, default_value_t = 1)]
    superb_attempts: usize,

    /// TOML file overriding the house-rule constants
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Prints each gem as it goes and answers decisions from the flags.
struct ConsoleReporter {
    cut_all: bool,
    superb_attempts: usize,
}

impl BatchObserver for ConsoleReporter {
    fn on_gem_start(&mut self, ctx: &GemStartContext<'_>) {
        println!("\n===== Gem {} of {} =====", ctx.index, ctx.total);
        println!("Gem: {} ({})", ctx.plan.name, ctx.plan.color);
        println!("Size-adjusted base: {}", format_sp(ctx.base_value));
    }

    fn on_appraisal(&mut self, ctx: &GemAppraisalContext<'_>) {
        let appraisal = &ctx.appraisal.appraisal;
        if !appraisal.was_appraised() {
            return;
        }
        let rolls: Vec<u32> = appraisal.rolls().collect();
        println!(
            "[Appraisal] Quality: {}; value now {}; rolls: {:?}",
            appraisal.quality,
            format_sp(appraisal.value),
            rolls
        );
        println!("[Appraisal] Reputed magical properties: {}", ctx.appraisal.magical_property);
        for (color, note) in &ctx.appraisal.color_properties {
            println!(" - {}: {}", color, note);
        }
    }

    fn cut_decision(&mut self, ctx: &GemAppraisalContext<'_>) -> bool {
        self.cut_all && ctx.appraisal.appraisal.was_appraised()
    }

    fn superb_continue(&mut self, step: &SuperbStep) -> bool {
        println!("{}", step);
        step.attempt < self.superb_attempts
    }
}

fn pick_category(args: &Args, rng: &mut GemRng) -> Result<&'static GemCategory> {
    match args.category {
        Some(index) => index
            .checked_sub(1)
            .and_then(|i| CATEGORIES.get(i))
            .ok_or_else(|| AppraisalError::UnknownCategory(index.to_string())),
        None => {
            let (category, roll) = catalog::roll_for_category(rng);
            let shown = if roll == 100 { "00".to_string() } else { format!("{:02}", roll) };
            println!("[Category Roll] d% = {} -> {}", shown, category.name);
            Ok(category)
        }
    }
}

fn pick_plans(args: &Args, category: &'static GemCategory, count: u32, rng: &mut GemRng) -> Result<Vec<GemPlan>> {
    let count = count as usize;
    if let Some(name) = &args.gem {
        let kind = catalog::find_gem(category, name)?;
        return Ok(vec![GemPlan::from(kind); count]);
    }
    let roll_one = |rng: &mut GemRng| {
        let (kind, roll) = catalog::roll_for_gem(category, rng);
        println!("[Gem Roll] d{} = {} -> {} ({})", category.gems.len(), roll, kind.name, kind.color);
        GemPlan::from(kind)
    };
    if args.mixed {
        Ok((0..count).map(|_| roll_one(rng)).collect())
    } else {
        Ok(vec![roll_one(rng); count])
    }
}

fn print_summary(result: &BatchResult) {
    println!("\n--- BATCH SUMMARY ---");
    println!("Category: {}", result.category);
    println!("Size: {} (x{})", result.size_label, result.size_modifier);
    if let Some(retainer) = &result.retainer {
        let roll = retainer
            .skill
            .roll
            .map_or_else(|| "n/a".to_string(), |r| r.total.to_string());
        println!(
            "Gemcutter: {} for {} month(s), retainer paid {}, skill {} (roll {})",
            retainer.race,
            retainer.months,
            format_sp(retainer.fee_paid_sp()),
            retainer.skill.tier,
            roll
        );
    }
    for gem in &result.gems {
        println!(
            "{:>3}. {:<20} {:<24} {:<50} final {:>14}  surcharge {}",
            gem.index,
            gem.plan.name,
            gem.appraisal.appraisal.quality.to_string(),
            gem.cutting.verdict.to_string(),
            format_sp(gem.final_value),
            format_sp(gem.surcharge)
        );
        let steps = &gem.cutting.superb_steps;
        if let Some(last) = steps.last().filter(|s| s.is_final()) {
            // The session-ending attempt is never offered to the reporter
            println!("     {}", last);
        }
        if !steps.is_empty() {
            let rolls: Vec<u32> = steps.iter().map(|s| s.roll).collect();
            println!("     Superb sequence: {:?}", rolls);
        }
    }
    println!("Total final value: {}", format_sp(result.total_final_value));
    println!("Total surcharge: {}", format_sp(result.total_surcharge));
    println!("Total fees: {}", format_sp(result.total_fees));
    println!("Ruined gems: {}", result.ruined_count);
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "session started");
    let root = GemRng::new(seed);
    let mut catalog_rng = root.for_context("catalog");
    let mut engine_rng = root.for_context("engine");

    let count = catalog::select_batch_count(4, Some(args.count), &config)?;
    let (size_label, size_modifier) = catalog::choose_size(args.size)?;
    let category = pick_category(args, &mut catalog_rng)?;
    let plans = pick_plans(args, category, count, &mut catalog_rng)?;

    let mut retainer = RetainerState::idle();
    if !args.no_appraise {
        let mut request = RetainerRequest::new(args.race.as_str(), args.months);
        if let Some(tier) = &args.tier {
            request = request.with_declared_tier(tier.as_str());
        }
        let hired = retainer.hire(&request, &config, &mut engine_rng)?;
        println!("Retainer paid: {} gp", hired.total_fee_gp);
        retainer = hired.state;
    }

    let request = BatchRequest::new(plans)
        .with_category(category.name)
        .with_size(size_label, size_modifier)
        .with_appraisal(!args.no_appraise);

    let mut reporter = ConsoleReporter {
        cut_all: args.cut,
        superb_attempts: args.superb_attempts,
    };
    let engine = BatchEngine::new(config);
    let result = engine.process(&retainer, &request, &mut engine_rng, &mut reporter)?;
    print_summary(&result);

    let retainer = retainer.release();
    tracing::debug!(active = retainer.is_active(), "session finished");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gem_appraisal=info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
