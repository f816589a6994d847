//! Batch protocol: request decoding and the sequential dispatcher.
//!
//! One payload in, one payload out. Requests are processed strictly in
//! order; a failure in one request is recorded in its result slot and never
//! affects its neighbors. Only a payload that cannot be parsed at all aborts
//! the run (handled in `main`).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::damage::{resolve_damage, DamageRequest};
use crate::error::EngineError;
use crate::oracle::calc::LATEST_GEN;
use crate::oracle::MechanicsOracle;
use crate::speed::{compare_speed, SpeedRequest};
use crate::stats::{get_stats, StatsRequest};

/// One element of the request batch.
///
/// The wire form is a loosely tagged object: `"type": "stats"` or
/// `"speed"` selects those handlers; an absent or unrecognized tag falls
/// back to a damage request for backward compatibility.
#[derive(Clone, Debug)]
pub enum Request {
    Stats(StatsRequest),
    Speed(SpeedRequest),
    Damage(DamageRequest),
}

impl<'de> Deserialize<'de> for Request {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let tag = value.get("type").and_then(Value::as_str).unwrap_or("");
        match tag {
            "stats" => serde_json::from_value(value)
                .map(Request::Stats)
                .map_err(de::Error::custom),
            "speed" => serde_json::from_value(value)
                .map(Request::Speed)
                .map_err(de::Error::custom),
            _ => serde_json::from_value(value)
                .map(Request::Damage)
                .map_err(de::Error::custom),
        }
    }
}

/// Top-level input payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BatchPayload {
    /// Ruleset generation, applied uniformly to every request
    pub gen: Option<u8>,
    pub requests: Vec<Request>,
}

/// One result slot, mirroring its request by position.
#[derive(Clone, Debug, Serialize)]
pub struct ResultEntry {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Value, EngineError>> for ResultEntry {
    fn from(outcome: Result<Value, EngineError>) -> Self {
        match outcome {
            Ok(result) => ResultEntry {
                ok: true,
                result: Some(result),
                error: None,
            },
            Err(err) => ResultEntry {
                ok: false,
                result: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Top-level output payload.
#[derive(Clone, Debug, Serialize)]
pub struct BatchOutput {
    pub results: Vec<ResultEntry>,
}

fn dispatch<O: MechanicsOracle>(
    oracle: &O,
    gen: u8,
    request: &Request,
) -> Result<Value, EngineError> {
    let payload = match request {
        Request::Stats(req) => serde_json::to_value(get_stats(oracle, gen, req)?),
        Request::Speed(req) => serde_json::to_value(compare_speed(oracle, gen, req)?),
        Request::Damage(req) => serde_json::to_value(resolve_damage(oracle, gen, req)?),
    };
    payload.map_err(|err| EngineError::oracle(err.to_string()))
}

/// Process a whole batch, preserving request order one-to-one.
pub fn run_batch<O: MechanicsOracle>(oracle: &O, payload: &BatchPayload) -> BatchOutput {
    let gen = payload.gen.unwrap_or(LATEST_GEN);
    tracing::debug!(gen, requests = payload.requests.len(), "processing batch");

    let results = payload
        .requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            let outcome = dispatch(oracle, gen, request);
            if let Err(err) = &outcome {
                tracing::debug!(index, error = %err, "request failed");
            }
            ResultEntry::from(outcome)
        })
        .collect();

    BatchOutput { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::CalcOracle;

    fn parse(payload: &str) -> BatchPayload {
        serde_json::from_str(payload).expect("payload should parse")
    }

    #[test]
    fn test_request_tag_routing() {
        let payload = parse(
            r#"{"requests": [
                {"type": "stats", "pokemon": {"name": "Mew"}},
                {"type": "speed", "pokemon1": {"name": "Mew"}, "pokemon2": {"name": "Mew"}},
                {"attacker": {"name": "Mew"}, "defender": {"name": "Mew"}, "move": {"name": "Surf"}},
                {"type": "???", "attacker": {"name": "Mew"}, "defender": {"name": "Mew"}, "move": {"name": "Surf"}}
            ]}"#,
        );
        assert!(matches!(payload.requests[0], Request::Stats(_)));
        assert!(matches!(payload.requests[1], Request::Speed(_)));
        assert!(matches!(payload.requests[2], Request::Damage(_)));
        // Unrecognized tag falls back to damage
        assert!(matches!(payload.requests[3], Request::Damage(_)));
    }

    #[test]
    fn test_gen_defaults_to_latest() {
        let payload = parse(r#"{"requests": []}"#);
        assert_eq!(payload.gen, None);
        let output = run_batch(&CalcOracle, &payload);
        assert!(output.results.is_empty());
    }

    #[test]
    fn test_fault_isolation_preserves_order() {
        let payload = parse(
            r#"{"requests": [
                {"type": "stats", "pokemon": {"name": "Mew"}},
                {"type": "stats", "pokemon": {}},
                {"type": "stats", "pokemon": {"name": "Pikachu"}}
            ]}"#,
        );
        let output = run_batch(&CalcOracle, &payload);

        assert_eq!(output.results.len(), 3);
        assert!(output.results[0].ok);
        assert!(!output.results[1].ok);
        assert!(output.results[2].ok);

        let error = output.results[1].error.as_deref().unwrap();
        assert!(error.contains("pokemon.name"));

        // Neighbors carry their own payloads untouched
        let first = output.results[0].result.as_ref().unwrap();
        assert_eq!(first["species"], "Mew");
        let third = output.results[2].result.as_ref().unwrap();
        assert_eq!(third["species"], "Pikachu");
    }

    #[test]
    fn test_gen_applies_to_every_request() {
        let payload = parse(
            r#"{"gen": 2, "requests": [
                {"type": "stats", "pokemon": {"name": "Mew"}},
                {"type": "speed", "pokemon1": {"name": "Mew"}, "pokemon2": {"name": "Mew"}}
            ]}"#,
        );
        let output = run_batch(&CalcOracle, &payload);
        assert!(output.results.iter().all(|entry| !entry.ok));
        assert!(output.results[0]
            .error
            .as_deref()
            .unwrap()
            .contains("generation"));
    }

    #[test]
    fn test_result_entry_serialization() {
        let ok = ResultEntry::from(Ok(serde_json::json!({"spe": 1})));
        let ok_json = serde_json::to_value(&ok).unwrap();
        assert_eq!(ok_json["ok"], true);
        assert!(ok_json.get("error").is_none());

        let err = ResultEntry::from(Err::<Value, _>(EngineError::Validation("pokemon.name")));
        let err_json = serde_json::to_value(&err).unwrap();
        assert_eq!(err_json["ok"], false);
        assert!(err_json.get("result").is_none());
        assert_eq!(err_json["error"], "missing required field: pokemon.name");
    }
}
