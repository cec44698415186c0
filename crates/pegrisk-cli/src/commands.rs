use std::path::Path;

use eyre::Result;

use pegrisk_core::models::record::{FieldValue, InputRecord};
use pegrisk_models::registry::ModelSchema;
use pegrisk_models::{all_models, evaluate, Evaluation, EvaluationContext, Model};

use crate::cli::EvaluateArgs;
use crate::config::{self, OutputFormat, PegriskConfig};
use crate::narrative;
use crate::visits::{self, FileVisitCounter, NoopVisitSink, Visit, VisitSink};

pub fn list_models() -> String {
    all_models()
        .iter()
        .map(|m| format!("{}  {:<12} {:<8} {}\n", m.id().number(), m.id(), m.short_name(), m.name()))
        .collect()
}

pub fn describe(model: Model) -> Result<String> {
    let schema: ModelSchema = model.schema();
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Assemble a record from an optional JSON file and `ID=VALUE` overrides.
///
/// Overrides are parsed by the declared kind of their field. Ids the model
/// does not declare are kept as raw tokens so validation reports them.
pub fn build_record(model: Model, input: Option<&Path>, fields: &[String]) -> Result<InputRecord> {
    let mut record = match input {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read input at {}: {e}", path.display()))?;
            InputRecord::from_json(&contents)?
        }
        None => InputRecord::new(),
    };

    for pair in fields {
        let (id, raw) = pair
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("expected ID=VALUE, got '{pair}'"))?;
        let id = id.trim();
        let value = match model.fields().iter().find(|f| f.id == id) {
            Some(spec) => spec.parse_raw(raw)?,
            None => FieldValue::Choice(raw.to_string()),
        };
        record.insert(id, value);
    }

    Ok(record)
}

pub fn render(evaluation: &Evaluation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(narrative::render_text(evaluation)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
    }
}

pub fn visit_sink(config: &PegriskConfig, config_path: &Path) -> Box<dyn VisitSink> {
    if config.visit_counter.enabled {
        Box::new(FileVisitCounter::new(config::visit_counter_path(config, config_path)))
    } else {
        Box::new(NoopVisitSink)
    }
}

/// Evaluate, render, then record the visit. The visit is recorded only
/// after a successful evaluation and never affects the returned output.
pub fn run_evaluate(args: &EvaluateArgs, config: &PegriskConfig, config_path: &Path) -> Result<String> {
    let model = args.model.model();
    let record = build_record(model, args.input.as_deref(), &args.fields)?;
    let ctx = match args.today {
        Some(today) => EvaluationContext::new(today),
        None => EvaluationContext::now(),
    };

    let evaluation = evaluate(args.model, &record, &ctx)?;
    let output = render(&evaluation, args.format.unwrap_or(config.output_format))?;

    if !args.no_count {
        let sink = visit_sink(config, config_path);
        visits::record_visit(sink.as_ref(), Visit::now(Some(args.model)));
    }

    Ok(output)
}

pub fn stats(config: &PegriskConfig, config_path: &Path) -> Result<String> {
    let counter = FileVisitCounter::new(config::visit_counter_path(config, config_path));
    let midnight = jiff::Zoned::now().start_of_day()?.timestamp();
    let stats = counter.stats(midnight)?;
    Ok(format!(
        "Total visits: {}\nToday: {}\n",
        stats.total, stats.today
    ))
}
