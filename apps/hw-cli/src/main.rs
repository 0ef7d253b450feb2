use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use hw_core::{Attribute, BillingType, CASCADE_ORDER, ControlType, HeaterType, Location, UsagePattern, location_for_postcode};
use hw_data::{Metric, load_csv};
use hw_engine::{
    DiscountedPayback, MultiSelection, PaybackOptions, RebateSchedule, UserConfiguration,
    lookup, mean_by, narrow, reconcile, upgrade_candidates,
};

#[derive(Parser)]
#[command(name = "hw-cli")]
#[command(about = "Hot water explorer - scenario dataset inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario dataset and list the modelled combinations
    Validate {
        /// Path to the scenario results CSV
        data_path: PathBuf,
    },
    /// Show the remaining options for a (partial) configuration
    Options {
        /// Path to the scenario results CSV
        data_path: PathBuf,
        /// Path to a configuration YAML file (defaults to all unanswered)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Resolve the location from a postcode instead of the config file
        #[arg(long)]
        postcode: Option<u32>,
    },
    /// Resolve a complete configuration to its scenario and print the metrics
    Show {
        /// Path to the scenario results CSV
        data_path: PathBuf,
        /// Path to the configuration YAML file
        config: PathBuf,
    },
    /// List viable upgrades with payback periods
    Upgrades {
        /// Path to the scenario results CSV
        data_path: PathBuf,
        /// Path to the configuration YAML file
        config: PathBuf,
        /// Annual discount rate for discounted payback
        #[arg(long, default_value_t = 0.04)]
        discount_rate: f64,
        /// The current heater is at end of life and must be replaced anyway
        #[arg(long)]
        forced: bool,
        /// Rebate schedule YAML (defaults to the built-in schedule)
        #[arg(long)]
        rebates: Option<PathBuf>,
    },
    /// Summarise a slice of the dataset as grouped metric means
    Explore {
        /// Path to the scenario results CSV
        data_path: PathBuf,
        /// Restrict to these locations
        #[arg(long)]
        location: Vec<Location>,
        /// Restrict to these occupant counts
        #[arg(long)]
        occupants: Vec<u8>,
        /// Restrict to these usage patterns (1-6)
        #[arg(long)]
        pattern: Vec<UsagePattern>,
        /// Restrict to households with/without solar PV
        #[arg(long)]
        solar: Option<bool>,
        /// Restrict to these billing types
        #[arg(long)]
        billing: Vec<BillingType>,
        /// Restrict to these heater types
        #[arg(long)]
        heater: Vec<HeaterType>,
        /// Restrict to these control strategies
        #[arg(long)]
        control: Vec<ControlType>,
        /// Attribute to group by
        #[arg(long, default_value = "heater")]
        by: Attribute,
        /// Metric to average
        #[arg(long, default_value = "annual_energy_cost")]
        metric: Metric,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Dataset error: {0}")]
    Data(#[from] hw_data::DataError),

    #[error("Rebate schedule error: {0}")]
    Rebates(#[from] hw_engine::RebateError),

    #[error("No location is mapped to postcode {0}")]
    UnknownPostcode(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { data_path } => cmd_validate(&data_path),
        Commands::Options {
            data_path,
            config,
            postcode,
        } => cmd_options(&data_path, config.as_deref(), postcode),
        Commands::Show { data_path, config } => cmd_show(&data_path, &config),
        Commands::Upgrades {
            data_path,
            config,
            discount_rate,
            forced,
            rebates,
        } => cmd_upgrades(&data_path, &config, discount_rate, forced, rebates.as_deref()),
        Commands::Explore {
            data_path,
            location,
            occupants,
            pattern,
            solar,
            billing,
            heater,
            control,
            by,
            metric,
        } => {
            let selection = MultiSelection {
                locations: location,
                occupants,
                usage_patterns: pattern,
                solar: solar.map(|s| vec![s]).unwrap_or_default(),
                billing,
                heaters: heater,
                controls: control,
            };
            cmd_explore(&data_path, &selection, by, metric)
        }
    }
}

fn load_config(path: &Path) -> CliResult<UserConfiguration> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&content)?;
    Ok(config)
}

fn cmd_validate(data_path: &Path) -> CliResult<()> {
    let dataset = load_csv(data_path)?;
    println!("Dataset OK: {} scenarios", dataset.len());

    // The modelled system combinations, matching the original "options
    // explored" table.
    let mut combos = BTreeSet::new();
    for row in dataset.rows() {
        combos.insert((
            row.key.heater.label(),
            row.key.control.label(),
            row.key.billing.label(),
            if row.key.has_solar { "Yes" } else { "No" },
        ));
    }

    println!("\nModelled combinations (heater / control / billing / solar):");
    for (heater, control, billing, solar) in combos {
        println!("  {heater} / {control} / {billing} / {solar}");
    }
    Ok(())
}

fn cmd_options(data_path: &Path, config_path: Option<&Path>, postcode: Option<u32>) -> CliResult<()> {
    let dataset = load_csv(data_path)?;

    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => UserConfiguration::default(),
    };
    if let Some(postcode) = postcode {
        let location =
            location_for_postcode(postcode).ok_or(CliError::UnknownPostcode(postcode))?;
        config.location = Some(location);
    }

    let config = reconcile(&dataset, &config);

    for attribute in CASCADE_ORDER {
        match config.get(attribute) {
            Some(value) => println!("{attribute}: {value}"),
            None => {
                let options = narrow(&dataset, &config, attribute);
                let rendered: Vec<String> = options.iter().map(|v| v.to_string()).collect();
                println!("{attribute}: ? ({})", rendered.join(", "));
            }
        }
    }

    if config.is_complete() {
        match lookup(&dataset, &config) {
            Some(_) => println!("\nConfiguration resolves to a scenario."),
            None => println!("\nNo scenario matches this configuration."),
        }
    }
    Ok(())
}

fn cmd_show(data_path: &Path, config_path: &Path) -> CliResult<()> {
    let dataset = load_csv(data_path)?;
    let config = load_config(config_path)?;

    if !config.is_complete() {
        println!("Configuration is incomplete; answer every question first.");
        return Ok(());
    }

    match lookup(&dataset, &config) {
        Some(row) => {
            for metric in Metric::ALL {
                println!("{}: {:.2}", metric.label(), metric.extract(&row.metrics));
            }
        }
        None => {
            println!("No matching scenario; this combination is not modelled.");
        }
    }
    Ok(())
}

fn cmd_upgrades(
    data_path: &Path,
    config_path: &Path,
    discount_rate: f64,
    forced: bool,
    rebates_path: Option<&Path>,
) -> CliResult<()> {
    let dataset = load_csv(data_path)?;
    let config = load_config(config_path)?;

    let schedule = match rebates_path {
        Some(path) => RebateSchedule::load_yaml(path)?,
        None => RebateSchedule::builtin(),
    };
    let options = PaybackOptions {
        discount_rate,
        forced_replacement: forced,
    };

    let candidates = upgrade_candidates(&dataset, &config, &schedule, &options);
    if candidates.is_empty() {
        println!("No viable upgrade found.");
        return Ok(());
    }

    for candidate in candidates {
        let discounted = match candidate.payback.discounted {
            DiscountedPayback::Within { years } => format!("{years} yr"),
            DiscountedPayback::BeyondHorizon => "beyond 50 yr horizon".to_string(),
        };
        println!(
            "{}: saves {:.0}/yr, rebate {:.0}, net up-front {:.0}, simple payback {:.1} yr, discounted {}",
            candidate.system,
            candidate.payback.annual_savings,
            candidate.payback.rebate,
            candidate.payback.adjusted_upfront,
            candidate.payback.simple_years,
            discounted,
        );
    }
    Ok(())
}

fn cmd_explore(
    data_path: &Path,
    selection: &MultiSelection,
    by: Attribute,
    metric: Metric,
) -> CliResult<()> {
    let dataset = load_csv(data_path)?;

    let mut summary = mean_by(&dataset, selection, by, metric);
    if summary.is_empty() {
        println!("No scenarios match the selection.");
        return Ok(());
    }

    summary.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    println!("Mean {} by {}:", metric.label(), by);
    for (value, mean) in summary {
        println!("  {value}: {mean:.2}");
    }
    Ok(())
}
