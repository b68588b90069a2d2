use clap::Args;
use jouzukan::config::AppConfig;
use jouzukan::diagnosis::{
    AnswerSet, AnswerSheetImporter, DiagnosisEngine, DiagnosisOutcome, DiagnosisRequest,
    DiagnosisService, LogSubmissionSink, Respondent,
};
use jouzukan::error::AppError;
use jouzukan::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Answer as QUESTION_ID=VALUE on the 1..=5 scale (repeatable)
    #[arg(long = "answer", value_parser = crate::infra::parse_answer)]
    pub(crate) answers: Vec<(u32, i64)>,
    /// Value used for every question not given with --answer
    #[arg(long)]
    pub(crate) fill: Option<i64>,
    /// Respondent name; with --email the result is forwarded to the results log
    #[arg(long, requires = "email")]
    pub(crate) name: Option<String>,
    /// Respondent email
    #[arg(long, requires = "name")]
    pub(crate) email: Option<String>,
    /// Emit the full outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Answer-sheet CSV export (respondent,email,question,answer)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit the outcomes as a JSON array
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only print the question battery
    #[arg(long, conflicts_with = "archetypes")]
    pub(crate) questions: bool,
    /// Only print the archetype encyclopedia
    #[arg(long)]
    pub(crate) archetypes: bool,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn build_service() -> Result<DiagnosisService<LogSubmissionSink>, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = Arc::new(DiagnosisEngine::standard()?);
    Ok(DiagnosisService::new(
        engine,
        Arc::new(LogSubmissionSink),
        config.submission,
    ))
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        answers: given,
        fill,
        name,
        email,
        json,
    } = args;

    let service = build_service()?;
    let answers = collect_answers(&service, given, fill)?;
    let respondent = match (name, email) {
        (Some(name), Some(email)) => Some(Respondent { name, email }),
        _ => None,
    };

    let outcome = service.diagnose(DiagnosisRequest {
        respondent,
        answers,
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(&outcome);
    }
    Ok(())
}

fn collect_answers(
    service: &DiagnosisService<LogSubmissionSink>,
    given: Vec<(u32, i64)>,
    fill: Option<i64>,
) -> Result<AnswerSet, AppError> {
    if given.is_empty() && fill.is_none() {
        return Err(AppError::Input(
            "provide at least one --answer or a --fill value".to_string(),
        ));
    }

    let mut answers = match fill {
        Some(value) => AnswerSet::uniform(service.questions().iter().map(|q| q.id), value),
        None => AnswerSet::new(),
    };
    for (id, value) in given {
        answers.insert(id, value);
    }
    Ok(answers)
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = build_service()?;
    let sheets = AnswerSheetImporter::from_path(&args.csv)?;
    let results = service.diagnose_sheets(sheets);

    if args.json {
        let payload: Vec<serde_json::Value> = results
            .iter()
            .map(|(respondent, outcome)| {
                serde_json::json!({ "respondent": respondent, "outcome": outcome })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Batch diagnosis: {} respondents", results.len());
    for (respondent, outcome) in &results {
        let strengths: Vec<&str> = outcome
            .top_strengths
            .iter()
            .map(|strength| strength.label.as_str())
            .collect();
        println!(
            "- {}: {} [{}] strengths: {}",
            respondent,
            outcome.archetype.display_name,
            outcome.classification.summary(),
            strengths.join(", ")
        );
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let engine = DiagnosisEngine::standard()?;
    let catalog = engine.catalog();
    let show_questions = !args.archetypes;
    let show_archetypes = !args.questions;

    if args.json {
        let mut payload = serde_json::Map::new();
        if show_questions {
            let questions: Vec<_> = catalog.questions.iter().collect();
            payload.insert("questions".to_string(), serde_json::to_value(questions)?);
        }
        if show_archetypes {
            let archetypes: Vec<_> = catalog.archetypes.iter().collect();
            payload.insert("archetypes".to_string(), serde_json::to_value(archetypes)?);
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if show_questions {
        println!("Questions ({})", catalog.questions.len());
        for question in catalog.questions.iter() {
            let weights: Vec<String> = question
                .weights
                .iter()
                .map(|(dimension, weight)| format!("{dimension} {weight:+.1}"))
                .collect();
            println!("- Q{}: {}", question.id, question.text);
            println!("    {}", weights.join(" | "));
        }
    }

    if show_archetypes {
        if show_questions {
            println!();
        }
        println!("Archetypes ({})", catalog.archetypes.len());
        for (rule, archetype) in catalog.archetypes.ranked_rules() {
            println!(
                "- #{} {} ({}): {}",
                rule.rank,
                archetype.display_name,
                archetype.id,
                rule.describe()
            );
        }
        for archetype in catalog
            .archetypes
            .iter()
            .filter(|archetype| archetype.priority_rule.is_none())
        {
            println!(
                "- fallback {} ({}): {}",
                archetype.display_name, archetype.id, archetype.catchphrase
            );
        }
    }
    Ok(())
}

fn render_outcome(outcome: &DiagnosisOutcome) {
    let archetype = &outcome.archetype;
    println!("Diagnosis: {}", archetype.display_name);
    println!("  {}", archetype.catchphrase);
    println!(
        "  Legend: {} ({})",
        archetype.legend_name, archetype.legend_role
    );
    println!("  Basis: {}", outcome.classification.summary());

    println!("\nProfile");
    for (dimension, score) in outcome.profile.iter() {
        println!("- {} ({}): {:.1}", dimension.label(), dimension, score);
    }

    println!("\nTop strengths");
    for strength in &outcome.top_strengths {
        println!("- {}: {:.1}", strength.label, strength.score);
    }

    println!("\n{}", outcome.comment);
}
