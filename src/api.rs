use crate::consts::ANSWER_COUNT;
use crate::error::{DfResult, DiscForgeError};
use crate::scorer::normalizer::{normalize_selections, StatementSelection};
use crate::scorer::{Answer, ConfigLoader, ConfigSource, DiscResult, ScoringEngine};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// The state a host service keeps for the process lifetime.
pub struct DiscState {
    pub engine: ScoringEngine,
    pub source: ConfigSource,
}

impl DiscState {
    /// Resolves the configuration once. Never fails.
    pub fn load(explicit_config: Option<PathBuf>) -> Self {
        let loaded = ConfigLoader::standard(explicit_config).load();
        info!("Scoring engine ready (config: {})", loaded.source);
        Self {
            engine: ScoringEngine::new(loaded.config),
            source: loaded.source,
        }
    }
}

/// Maps one JSON answer element: `"A"`..`"D"`, `1`..`4`, or `{"statementId": n}`.
pub fn parse_answer(index: usize, value: &Value) -> DfResult<Answer> {
    let invalid = |reason: String| DiscForgeError::InvalidAnswerElement { index, reason };
    match value {
        Value::String(s) => s.parse::<Answer>().map_err(invalid),
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                // Whole floats such as 2.0 count as ordinals.
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && (0.0..=255.0).contains(f))
                    .map(|f| f as u64)
            })
            .and_then(|v| u8::try_from(v).ok())
            .map(Answer::Ordinal)
            .ok_or_else(|| invalid(format!("number {} is not an ordinal", n))),
        Value::Object(map) => map
            .get("statementId")
            .and_then(Value::as_u64)
            .and_then(|v| u16::try_from(v).ok())
            .map(Answer::StatementId)
            .ok_or_else(|| invalid("object without a usable statementId".to_string())),
        other => Err(invalid(format!("unsupported answer value {}", other))),
    }
}

/// Accepts either a bare array or `{"answers": [...]}`.
pub fn parse_answers(payload: &Value) -> DfResult<Vec<Answer>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("answers") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(DiscForgeError::InvalidAnswerCount {
                    expected: ANSWER_COUNT,
                    actual: 0,
                })
            }
        },
        _ => {
            return Err(DiscForgeError::InvalidAnswerCount {
                expected: ANSWER_COUNT,
                actual: 0,
            })
        }
    };

    if items.len() != ANSWER_COUNT {
        return Err(DiscForgeError::InvalidAnswerCount {
            expected: ANSWER_COUNT,
            actual: items.len(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, v)| parse_answer(idx, v))
        .collect()
}

/// Service: score a raw JSON payload.
pub fn score_payload(engine: &ScoringEngine, json: &str) -> DfResult<DiscResult> {
    let payload: Value = serde_json::from_str(json)?;
    let answers = parse_answers(&payload)?;
    engine.compute_disc(&answers)
}

/// Service: score explicit `{statementId, selection}` picks.
pub fn score_selections(engine: &ScoringEngine, selections: &[StatementSelection]) -> DiscResult {
    let presence = normalize_selections(selections);
    engine.compute_from_presence(&presence)
}
