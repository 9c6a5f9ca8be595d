use clap::{Parser, Subcommand};
use pawcalc_core::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "pawcalc")]
#[command(about = "Dog calorie and age calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily calorie needs
    Calories {
        /// Body weight
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Weight unit (kg, lbs)
        #[arg(long)]
        unit: Option<String>,

        /// Activity level (sedentary, moderate, active, very-active)
        #[arg(long)]
        activity: Option<String>,

        /// Body condition (underweight, ideal, overweight)
        #[arg(long)]
        condition: Option<String>,

        /// Apply a breed's activity multiplier
        #[arg(long)]
        breed: Option<String>,

        /// Dog's name, used in the feeding tips
        #[arg(long)]
        name: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a dog's age to human years
    Age {
        /// Dog's age
        #[arg(long, allow_negative_numbers = true)]
        age: f64,

        /// Age unit (years, months)
        #[arg(long)]
        unit: Option<String>,

        /// Adult size (small, medium, large, giant)
        #[arg(long)]
        size: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known breeds
    Breeds {
        #[arg(long)]
        json: bool,
    },

    /// Show one breed
    Breed {
        /// Breed slug, e.g. golden-retriever
        slug: String,

        #[arg(long)]
        json: bool,
    },

    /// Step through a calculator interactively
    Wizard {
        /// Calculator to run (calorie, age)
        #[arg(default_value = "calorie")]
        calculator: String,

        /// Run the breed-specific calorie calculator
        #[arg(long)]
        breed: Option<String>,

        /// Dog's name, kept across resets
        #[arg(long)]
        name: Option<String>,
    },

    /// Show or change the saved calculator defaults
    Defaults {
        /// Default weight unit (kg, lbs)
        #[arg(long)]
        weight_unit: Option<String>,

        /// Default age unit (years, months)
        #[arg(long)]
        age_unit: Option<String>,

        /// Default activity level
        #[arg(long)]
        activity: Option<String>,

        /// Default body condition
        #[arg(long)]
        condition: Option<String>,

        /// Default adult size
        #[arg(long)]
        size: Option<String>,
    },
}

fn main() -> Result<()> {
    pawcalc_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let errors = breeds::get_default_registry().validate();
    if !errors.is_empty() {
        eprintln!("Breed registry validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::RegistryValidation("Invalid breed registry".into()));
    }

    match cli.command {
        Commands::Calories {
            weight,
            unit,
            activity,
            condition,
            breed,
            name,
            json,
        } => cmd_calories(&config, weight, unit, activity, condition, breed, name, json),
        Commands::Age {
            age,
            unit,
            size,
            json,
        } => cmd_age(&config, age, unit, size, json),
        Commands::Breeds { json } => cmd_breeds(json),
        Commands::Breed { slug, json } => cmd_breed(&slug, json),
        Commands::Wizard {
            calculator,
            breed,
            name,
        } => cmd_wizard(&config, &calculator, breed, name),
        Commands::Defaults {
            weight_unit,
            age_unit,
            activity,
            condition,
            size,
        } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::default_config_path()?,
            };
            cmd_defaults(config, &path, weight_unit, age_unit, activity, condition, size)
        }
    }
}

/// Parse an optional flag value, falling back to the configured default
fn parse_or<T: FromStr<Err = Error>>(value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(v) => v.parse(),
        None => Ok(default),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_calories(
    config: &Config,
    weight: f64,
    unit: Option<String>,
    activity: Option<String>,
    condition: Option<String>,
    breed: Option<String>,
    name: Option<String>,
    json: bool,
) -> Result<()> {
    let defaults = config.form_defaults();

    let form = FormData {
        subject_name: name.unwrap_or_default(),
        weight,
        weight_unit: parse_or(unit, defaults.weight_unit)?,
        activity_level: parse_or(activity, defaults.activity_level)?,
        body_condition: parse_or(condition, defaults.body_condition)?,
        ..defaults
    };

    let breed = match breed {
        Some(slug) => Some(lookup(&slug)?),
        None => None,
    };

    let report = compute_from_form(&form, breed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_calories(&form, breed, &report);
    }
    Ok(())
}

fn cmd_age(
    config: &Config,
    age: f64,
    unit: Option<String>,
    size: Option<String>,
    json: bool,
) -> Result<()> {
    let defaults = config.form_defaults();
    let unit = parse_or(unit, defaults.age_unit)?;
    let size = parse_or(size, defaults.size_category)?;

    let result = compute_human_age(age, unit, size)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_age("Your dog", &result);
    }
    Ok(())
}

fn cmd_breeds(json: bool) -> Result<()> {
    let breeds = all_breeds();

    if json {
        println!("{}", serde_json::to_string_pretty(&breeds)?);
        return Ok(());
    }

    for breed in breeds {
        println!(
            "{:<20} {:<20} {}-{} kg, {} activity",
            breed.slug,
            breed.name,
            breed.average_weight.min,
            breed.average_weight.max,
            breed.activity_level.as_str()
        );
    }
    Ok(())
}

fn cmd_breed(slug: &str, json: bool) -> Result<()> {
    let breed = lookup(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(breed)?);
    } else {
        display_breed(breed);
    }
    Ok(())
}

fn cmd_defaults(
    mut config: Config,
    path: &Path,
    weight_unit: Option<String>,
    age_unit: Option<String>,
    activity: Option<String>,
    condition: Option<String>,
    size: Option<String>,
) -> Result<()> {
    let changed = [&weight_unit, &age_unit, &activity, &condition, &size]
        .iter()
        .any(|value| value.is_some());

    config.units.weight_unit = parse_or(weight_unit, config.units.weight_unit)?;
    config.units.age_unit = parse_or(age_unit, config.units.age_unit)?;
    config.defaults.activity_level = parse_or(activity, config.defaults.activity_level)?;
    config.defaults.body_condition = parse_or(condition, config.defaults.body_condition)?;
    config.defaults.size_category = parse_or(size, config.defaults.size_category)?;

    if changed {
        config.save_to(path)?;
        println!("Saved defaults to {}", path.display());
    }

    println!("weight unit:    {}", config.units.weight_unit);
    println!("age unit:       {}", config.units.age_unit);
    println!("activity:       {}", config.defaults.activity_level);
    println!("body condition: {}", config.defaults.body_condition);
    println!("size:           {}", config.defaults.size_category);
    Ok(())
}

fn cmd_wizard(
    config: &Config,
    calculator: &str,
    breed: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let mut defaults = config.form_defaults();
    if let Some(name) = name {
        defaults.subject_name = name;
    }

    let mut calc = match (calculator.to_lowercase().as_str(), breed) {
        ("calorie" | "calories", Some(slug)) => {
            if lookup(&slug).is_err() {
                println!(
                    "Breed '{}' not found. Using the general calorie calculator instead.",
                    slug
                );
            }
            Calculator::for_breed_or_generic(&slug, defaults)?
        }
        ("calorie" | "calories", None) => Calculator::calorie(defaults)?,
        ("age", _) => Calculator::age(defaults)?,
        (other, _) => {
            return Err(Error::InvalidInput(format!(
                "unknown calculator '{}' (expected calorie or age)",
                other
            )))
        }
    };

    tracing::debug!("Starting {:?} wizard", calc.kind());

    let mut head = PageHead::new(metadata::home_page_metadata());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    with_page_metadata(&mut head, calc.page_metadata(), |page| {
        println!("\n{}", page.title);
        run_wizard(&mut calc, &mut input)
    })
}

// ============================================================================
// Interactive wizard
// ============================================================================

enum WizardCommand {
    Back,
    Reset,
    Quit,
    Value(String),
}

fn read_command(input: &mut impl BufRead) -> Result<WizardCommand> {
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(WizardCommand::Quit);
    }

    let command = match line.trim() {
        "b" | "back" => WizardCommand::Back,
        "r" | "reset" => WizardCommand::Reset,
        "q" | "quit" => WizardCommand::Quit,
        value => WizardCommand::Value(value.to_string()),
    };
    Ok(command)
}

fn run_wizard(calc: &mut Calculator, input: &mut impl BufRead) -> Result<()> {
    loop {
        display_step(calc);

        let command = read_command(input)?;
        match command {
            WizardCommand::Quit => return Ok(()),
            WizardCommand::Back => {
                calc.back();
                continue;
            }
            WizardCommand::Reset => {
                calc.reset();
                println!("Starting over.");
                continue;
            }
            WizardCommand::Value(value) => {
                if calc.wizard().is_terminal() {
                    // Enter on the results screen ends the session
                    return Ok(());
                }
                if let Err(e) = apply_value(calc, &value) {
                    println!("  ! {}", e);
                    continue;
                }
            }
        }

        if let Transition::Blocked(step) = calc.next() {
            let reason = calc
                .blocked_reason()
                .unwrap_or_else(|| "this step is incomplete".to_string());
            println!("  ! Can't continue from {}: {}", step, reason);
        }
    }
}

/// Pick from a numbered list or by name
fn parse_choice<T: FromStr<Err = Error> + Copy>(value: &str, options: &[T]) -> Result<T> {
    if let Ok(n) = value.parse::<usize>() {
        return options.get(n.wrapping_sub(1)).copied().ok_or_else(|| {
            Error::InvalidInput(format!("choose a number between 1 and {}", options.len()))
        });
    }
    value.parse()
}

/// Parse "<number> [unit]"
fn parse_amount<U: FromStr<Err = Error>>(value: &str) -> Result<(f64, Option<U>)> {
    let mut parts = value.split_whitespace();
    let amount = parts
        .next()
        .unwrap_or_default()
        .parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a number", value)))?;
    let unit = parts.next().map(str::parse::<U>).transpose()?;
    Ok((amount, unit))
}

/// Apply a line of input to the current step. An empty line keeps the
/// current value.
fn apply_value(calc: &mut Calculator, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }

    match calc.current_step() {
        StepId::Info | StepId::Results => {}
        StepId::Name => {
            // Breed calculators accept a popular name by number
            match (calc.breed(), value.parse::<usize>()) {
                (Some(_), Ok(n)) => {
                    calc.quick_select_name(n.wrapping_sub(1))?;
                }
                _ => calc.set_subject_name(value),
            }
        }
        StepId::Weight => {
            let (weight, unit) = parse_amount::<WeightUnit>(value)?;
            calc.set_weight(weight);
            if let Some(unit) = unit {
                calc.set_weight_unit(unit);
            }
        }
        StepId::Age => {
            let (age, unit) = parse_amount::<AgeUnit>(value)?;
            calc.set_age(age);
            if let Some(unit) = unit {
                calc.set_age_unit(unit);
            }
        }
        StepId::Size => calc.set_size_category(parse_choice(value, &SizeCategory::ALL)?),
        StepId::BodyCondition => {
            calc.set_body_condition(parse_choice(value, &BodyCondition::ALL)?)
        }
        StepId::Activity => calc.set_activity_level(parse_choice(value, &ActivityLevel::ALL)?),
    }
    Ok(())
}

// ============================================================================
// Display
// ============================================================================

fn display_step(calc: &Calculator) {
    let (position, total) = calc.wizard().progress();
    let form = calc.form();

    println!("\n── Step {}/{}: {} ──", position, total, calc.current_step().label());

    match calc.current_step() {
        StepId::Info => {
            if let Some(breed) = calc.breed() {
                display_breed(breed);
            }
            println!("Press Enter to start");
        }
        StepId::Name => {
            println!("What's your dog's name?");
            if let Some(breed) = calc.breed() {
                println!("Popular {} names:", breed.name);
                for (i, name) in breed.popular_names.iter().enumerate() {
                    println!("  {}. {}", i + 1, name);
                }
            }
            if !form.subject_name.is_empty() {
                println!("Current: {}", form.subject_name);
            }
        }
        StepId::Weight => {
            if let Some(breed) = calc.breed() {
                println!(
                    "{}s typically weigh {}-{} kg",
                    breed.name, breed.average_weight.min, breed.average_weight.max
                );
            }
            println!("How much does {} weigh? (e.g. 12 kg, 26 lbs)", form.display_name());
            if form.weight > 0.0 {
                println!("Current: {} {}", form.weight, form.weight_unit);
            }
        }
        StepId::Age => {
            println!("How old is {}? (e.g. 3 years, 8 months)", form.display_name());
            println!("Current: {} {}", form.age, form.age_unit);
        }
        StepId::Size => {
            println!("What size is {}?", form.display_name());
            for (i, size) in SizeCategory::ALL.iter().enumerate() {
                println!("  {}. {:<8} {}", i + 1, size.as_str(), size.hint());
            }
            println!("Current: {}", form.size_category);
        }
        StepId::BodyCondition => {
            println!("What's {}'s body condition?", form.display_name());
            if let Some(breed) = calc.breed().filter(|b| b.prone_to_obesity()) {
                println!(
                    "{}s are prone to obesity. Regular weight monitoring is recommended.",
                    breed.name
                );
            }
            for (i, condition) in BodyCondition::ALL.iter().enumerate() {
                println!("  {}. {:<12} {}", i + 1, condition.as_str(), condition.hint());
            }
            println!("Current: {}", form.body_condition);
        }
        StepId::Activity => {
            println!("How active is {}?", form.display_name());
            for (i, activity) in ActivityLevel::ALL.iter().enumerate() {
                println!("  {}. {:<12} {}", i + 1, activity.as_str(), activity.hint());
            }
            println!("Current: {}", form.activity_level);
        }
        StepId::Results => {
            match calc.result() {
                Ok(CalculationResult::Calories(report)) => {
                    display_calories(form, calc.breed(), &report)
                }
                Ok(CalculationResult::Age(result)) => display_age(form.display_name(), &result),
                Err(e) => println!("  ! {}", e),
            }
            println!("'r' + Enter to calculate again, 'b' to go back, Enter to quit");
            return;
        }
    }

    if !calc.wizard().is_first() {
        println!("('b' back, 'r' start over, 'q' quit)");
    }
}

fn display_calories(form: &FormData, breed: Option<&BreedInfo>, report: &CalorieReport) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}'s Daily Calorie Needs", form.display_name());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {} kcal/day", report.daily_calories);
    println!(
        "  Weight: {:.1} kg ({:.1} lbs), activity: {}, condition: {}",
        report.weight_kg,
        units::to_pounds(report.weight_kg, WeightUnit::Kg),
        form.activity_level,
        form.body_condition
    );
    if let Some(breed) = breed {
        println!(
            "  {} multiplier: {:.1}",
            breed.name, report.breed_multiplier
        );
    }
    println!();
    for tip in &report.guidance {
        println!("  → {}", tip);
    }
    if let Some(breed) = breed {
        println!();
        println!("  Health watch: {}", breed.health_considerations.join(", "));
    }
    println!();
}

fn display_age(name: &str, result: &AgeResult) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} is {} in human years", name, result.human_age);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Life stage: {}", result.life_stage);
    println!("  {}", result.description);
    println!();
    for tip in &result.advisory {
        println!("  → {}", tip);
    }
    println!();
}

fn display_breed(breed: &BreedInfo) {
    println!("{}", breed.name);
    println!("  {}", breed.description);
    println!(
        "  Weight: {}-{} kg | Lifespan: {}-{} years | Size: {} | Activity: {}",
        breed.average_weight.min,
        breed.average_weight.max,
        breed.life_expectancy.min,
        breed.life_expectancy.max,
        breed.size,
        breed.activity_level
    );
    println!("  Health considerations: {}", breed.health_considerations.join(", "));
}
