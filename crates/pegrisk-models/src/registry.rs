//! The fixed set of models and the single evaluation entry point.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pegrisk_core::models::promal::ProMalResult;
use pegrisk_core::models::record::InputRecord;

use crate::error::ModelError;
use crate::fields::FieldSpec;
use crate::peg::anamnestic::Anamnestic;
use crate::peg::functional::Functional;
use crate::peg::nutritional::Nutritional;
use crate::peg::{PegAssessment, PegModel};
use crate::promal::ProMal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ModelId {
    Anamnestic,
    Functional,
    Nutritional,
    ProMal,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::Anamnestic,
        ModelId::Functional,
        ModelId::Nutritional,
        ModelId::ProMal,
    ];

    /// Position shown on the model cards, starting at 1.
    pub fn number(self) -> u8 {
        match self {
            ModelId::Anamnestic => 1,
            ModelId::Functional => 2,
            ModelId::Nutritional => 3,
            ModelId::ProMal => 4,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ModelId::Anamnestic => "anamnestic",
            ModelId::Functional => "functional",
            ModelId::Nutritional => "nutritional",
            ModelId::ProMal => "pro-mal",
        }
    }

    pub fn model(self) -> Model {
        match self {
            ModelId::Anamnestic => Model::Peg(&Anamnestic),
            ModelId::Functional => Model::Peg(&Functional),
            ModelId::Nutritional => Model::Peg(&Nutritional),
            ModelId::ProMal => Model::ProMal(&ProMal),
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for ModelId {
    type Err = ModelError;

    /// Accepts the card number, the slug, or the short name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ModelId::ALL
            .into_iter()
            .find(|id| {
                needle == id.number().to_string()
                    || needle.eq_ignore_ascii_case(id.slug())
                    || needle.eq_ignore_ascii_case(id.model().short_name())
            })
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}

/// A registered model. PEG models share the logistic pipeline; PRO-MAL is a
/// linear score with its own result shape.
#[derive(Clone, Copy)]
pub enum Model {
    Peg(&'static dyn PegModel),
    ProMal(&'static ProMal),
}

impl Model {
    pub fn id(&self) -> ModelId {
        match self {
            Model::Peg(m) => m.id(),
            Model::ProMal(m) => m.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Model::Peg(m) => m.name(),
            Model::ProMal(m) => m.name(),
        }
    }

    pub fn short_name(&self) -> &str {
        match self {
            Model::Peg(m) => m.short_name(),
            Model::ProMal(m) => m.short_name(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        match self {
            Model::Peg(m) => m.fields(),
            Model::ProMal(m) => m.fields(),
        }
    }

    /// The PEG probability cutoff, or the PRO-MAL score threshold.
    pub fn cutoff(&self) -> f64 {
        match self {
            Model::Peg(m) => m.cutoff(),
            Model::ProMal(m) => m.threshold(),
        }
    }

    pub fn schema(&self) -> ModelSchema {
        ModelSchema {
            id: self.id(),
            number: self.id().number(),
            short_name: self.short_name().to_string(),
            name: self.name().to_string(),
            cutoff: self.cutoff(),
            fields: self.fields().to_vec(),
        }
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Model").field(&self.id()).finish()
    }
}

/// What a form renderer needs to build the input page for one model.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelSchema {
    pub id: ModelId,
    pub number: u8,
    pub short_name: String,
    pub name: String,
    pub cutoff: f64,
    pub fields: Vec<FieldSpec>,
}

/// Per-evaluation context. `today` bounds every date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    pub today: Date,
}

impl EvaluationContext {
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    /// Context dated to the local calendar day.
    pub fn now() -> Self {
        Self::new(jiff::Zoned::now().date())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Evaluation {
    Peg(PegAssessment),
    ProMal(ProMalResult),
}

/// Evaluate one record against the selected model.
pub fn evaluate(
    id: ModelId,
    record: &InputRecord,
    ctx: &EvaluationContext,
) -> Result<Evaluation, ModelError> {
    tracing::debug!(model = %id, fields = record.len(), "evaluating");
    match id.model() {
        Model::Peg(model) => model.predict(record, ctx.today).map(Evaluation::Peg),
        Model::ProMal(model) => model.predict(record, ctx.today).map(Evaluation::ProMal),
    }
}

/// Return all registered models.
pub fn all_models() -> Vec<Model> {
    ModelId::ALL.into_iter().map(ModelId::model).collect()
}

/// Look up a model by number, slug or short name.
pub fn get_model(id: &str) -> Option<Model> {
    id.parse::<ModelId>().ok().map(ModelId::model)
}
