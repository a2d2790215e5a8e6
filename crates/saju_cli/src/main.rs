//! `saju`: pillars, scoring and readings from the command line.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDate, NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use saju_base::{ElementMap, Stem};
use saju_calendar::{ALL_SEXAGENARY, BirthTime, CYCLE_LENGTH, Chart};
use saju_config::{RulesFile, resolve_rules};
use saju_engine::{
    ALL_PRESETS, ChartTenGods, InteractionEngine, PIPELINE, RulePreset, RuleSet, Stage,
};
use saju_rs::{BirthInput, Gender, SymbolKind};

#[derive(Parser)]
#[command(name = "saju", about = "Four-Pillars chart and element scoring CLI")]
struct Cli {
    /// Rule file (TOML); overrides --preset and $SAJU_RULES
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
    /// Built-in rule preset: classic or weighted
    #[arg(long, global = true)]
    preset: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// More log output (repeatable); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth date and time
    Pillars {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM); omit when unknown
        #[arg(long)]
        time: Option<String>,
    },
    /// Score a chart through the interaction stages
    Evaluate {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM); omit when unknown
        #[arg(long)]
        time: Option<String>,
        /// Stop after this stage (Base, StemClash, ..., DominanceBattle)
        #[arg(long)]
        through: Option<String>,
    },
    /// Full reading for a consultation intake
    Read {
        #[arg(long)]
        nickname: String,
        /// female/male (여성/남성)
        #[arg(long)]
        gender: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM); omit when unknown
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        concern: String,
        #[arg(long)]
        contact: Option<String>,
    },
    /// List the 60-pillar cycle
    Cycle {
        /// First offset (0 = 甲子)
        #[arg(long, default_value = "0")]
        start: i64,
        #[arg(long, default_value = "60")]
        count: usize,
    },
    /// Ten-god of a stem or branch against a Day Stem
    TenGod {
        /// Day Stem (name, hanja or hangul)
        #[arg(long)]
        day_stem: String,
        /// Stem or branch to classify
        symbol: String,
        /// Read the symbol as a stem (needed for Sin/신 as 辛)
        #[arg(long, conflicts_with = "branch")]
        stem: bool,
        /// Read the symbol as a branch (needed for Sin/신 as 申)
        #[arg(long)]
        branch: bool,
    },
    /// List built-in rule presets
    Presets {
        /// Print the full TOML of one preset
        #[arg(long)]
        dump: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Pillars { date, time } => {
            let chart = chart_for(date, time.as_deref())?;
            let map = ElementMap::standard();
            if cli.json {
                let [year, month, day, hour] = chart.labels();
                let value = serde_json::json!({
                    "year": year,
                    "month": month,
                    "day": day,
                    "hour": hour,
                    "day_stem": chart.day_stem().name(),
                    "day_element": map.stem_element(chart.day_stem()).name(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{chart}");
                for (pos, pillar) in chart.present() {
                    println!(
                        "{:<5} {} {} ({}, {} {})",
                        pos.name(),
                        pillar,
                        pillar.hangul(),
                        pillar.name(),
                        map.stem_element(pillar.stem),
                        map.branch_element(pillar.branch),
                    );
                }
                if !chart.has_hour() {
                    println!("Hour  -- (unknown)");
                }
            }
        }

        Commands::Evaluate {
            date,
            time,
            through,
        } => {
            let chart = chart_for(date, time.as_deref())?;
            let (rules, _) = rules_for(&cli)?;
            let map = ElementMap::standard();
            let eval = match through {
                Some(name) => {
                    InteractionEngine::new(map, &rules).evaluate_through(&chart, parse_stage(name)?)
                }
                None => saju_rs::evaluate(&chart, &rules),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&eval)?);
            } else {
                println!("Chart: {chart}");
                println!("Rules: {} v{} (through {})", rules.name, rules.version, eval.stage);
                println!("Scores: {}", eval.scores);
                println!(
                    "Self-strength: {} ({} / {})",
                    eval.self_strength,
                    eval.band(),
                    eval.band().hangul()
                );
                let gods = ChartTenGods::classify(map, &chart);
                let common = gods.most_common();
                println!(
                    "Most common group: {} ({} characters)",
                    common.group_name(),
                    gods.count(common)
                );
                for line in eval.log.lines() {
                    println!("  {line}");
                }
            }
        }

        Commands::Read {
            nickname,
            gender,
            date,
            time,
            concern,
            contact,
        } => {
            let input = BirthInput {
                nickname: nickname.clone(),
                gender: gender.parse::<Gender>().map_err(|e| anyhow!(e))?,
                birth_date: parse_date(date)?,
                birth_time: parse_time(time.as_deref())?,
                concern: concern.clone(),
                contact: contact.clone(),
            };
            let (rules, _) = rules_for(&cli)?;
            let reading = saju_rs::read(&input, &rules)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print!("{}", reading.to_text());
            }
        }

        Commands::Cycle { start, count } => {
            let pillars: Vec<_> = (0..*count as i64)
                .map(|i| {
                    let offset = (start + i).rem_euclid(CYCLE_LENGTH);
                    (offset, ALL_SEXAGENARY[offset as usize])
                })
                .collect();
            if cli.json {
                let value: Vec<_> = pillars
                    .iter()
                    .map(|(offset, p)| {
                        serde_json::json!({
                            "offset": offset,
                            "pillar": p.to_string(),
                            "name": p.name(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                for (offset, p) in pillars {
                    println!("{offset:>2}  {p}  {}  {}", p.hangul(), p.name());
                }
            }
        }

        Commands::TenGod {
            day_stem,
            symbol,
            stem,
            branch,
        } => {
            let day: Stem = day_stem.parse()?;
            let kind = match (*stem, *branch) {
                (true, _) => Some(SymbolKind::Stem),
                (_, true) => Some(SymbolKind::Branch),
                _ => None,
            };
            let god = saju_rs::symbol_category(day, symbol, kind)?;
            if cli.json {
                let value = serde_json::json!({
                    "day_stem": day.name(),
                    "symbol": symbol,
                    "ten_god": god.name(),
                    "hanja": god.hanja(),
                    "group": god.relation().group_name(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "{} {} ({} / {})",
                    god.name(),
                    god.hanja(),
                    god.relation().group_name(),
                    god.relation().english_name()
                );
            }
        }

        Commands::Presets { dump } => match dump {
            Some(name) => {
                let preset: RulePreset = name.parse()?;
                let text = RulesFile::from_rule_set(RuleSet::preset(preset)).to_toml_string()?;
                print!("{text}");
            }
            None => {
                for p in ALL_PRESETS {
                    let default = if p == RulePreset::default() { " (default)" } else { "" };
                    println!("{} v{}{default}", p.name(), p.version());
                }
            }
        },
    }

    Ok(())
}

fn rules_for(cli: &Cli) -> Result<(RuleSet, saju_config::RuleSource)> {
    let (rules, source) = resolve_rules(cli.rules.as_deref(), cli.preset.as_deref())?;
    tracing::info!(%source, rules = %rules.name, "using rule set");
    Ok((rules, source))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

fn parse_time(s: Option<&str>) -> Result<BirthTime> {
    match s {
        None => Ok(BirthTime::Unknown),
        Some(t) if t.eq_ignore_ascii_case("unknown") => Ok(BirthTime::Unknown),
        Some(t) => {
            let time = NaiveTime::parse_from_str(t, "%H:%M")
                .with_context(|| format!("invalid time {t:?}, expected HH:MM"))?;
            Ok(BirthTime::Known {
                hour: time.hour(),
                minute: time.minute(),
            })
        }
    }
}

fn chart_for(date: &str, time: Option<&str>) -> Result<Chart> {
    Ok(saju_rs::chart(parse_date(date)?, parse_time(time)?)?)
}

fn parse_stage(name: &str) -> Result<Stage> {
    match PIPELINE.into_iter().find(|s| s.name().eq_ignore_ascii_case(name)) {
        Some(stage) => Ok(stage),
        None => bail!(
            "unknown stage {name:?}; expected one of: {}",
            PIPELINE.map(Stage::name).join(", ")
        ),
    }
}
