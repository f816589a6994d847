//! Whole-payload dispatch behavior: ordering, fault isolation, and the
//! wire shapes a harness depends on.

use serde_json::{json, Value};

use damage_calc::{run_batch, BatchOutput, BatchPayload, CalcOracle};

fn run(payload: Value) -> BatchOutput {
    let payload: BatchPayload = serde_json::from_value(payload).expect("payload should parse");
    run_batch(&CalcOracle, &payload)
}

fn stats_request(name: &str) -> Value {
    json!({"type": "stats", "pokemon": {"name": name}})
}

#[test]
fn empty_payload_yields_empty_results() {
    let output = run(json!({}));
    assert!(output.results.is_empty());
    let wire = serde_json::to_value(&output).unwrap();
    assert_eq!(wire, json!({"results": []}));
}

#[test]
fn results_mirror_request_order() {
    let names = ["Mew", "Pikachu", "Garchomp", "Heatran", "Gyarados"];
    let requests: Vec<Value> = names.iter().map(|n| stats_request(n)).collect();
    let output = run(json!({"requests": requests}));

    assert_eq!(output.results.len(), names.len());
    for (entry, name) in output.results.iter().zip(names) {
        assert!(entry.ok);
        let report = entry.result.as_ref().unwrap();
        assert_eq!(report["species"], name);
    }
}

#[test]
fn one_bad_request_does_not_poison_the_batch() {
    let output = run(json!({"requests": [
        stats_request("Mew"),
        {"type": "stats", "pokemon": {"name": ""}},
        stats_request("Garchomp"),
    ]}));

    assert_eq!(output.results.len(), 3);
    assert!(output.results[0].ok);
    assert!(!output.results[1].ok);
    assert!(output.results[2].ok);
    assert!(output.results[1]
        .error
        .as_deref()
        .unwrap()
        .contains("pokemon.name"));
}

#[test]
fn batch_resolution_is_idempotent() {
    let payload = json!({"requests": [
        stats_request("Dragapult"),
        {"type": "speed", "pokemon1": {"name": "Mew"}, "pokemon2": {"name": "Pikachu"}},
        {"attacker": {"name": "Garchomp"}, "defender": {"name": "Heatran"},
         "move": {"name": "Earthquake"}},
    ]});

    let first = serde_json::to_string(&run(payload.clone())).unwrap();
    let second = serde_json::to_string(&run(payload)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn identical_combatants_tie() {
    let output = run(json!({"requests": [
        {"type": "speed", "pokemon1": {"name": "Mew"}, "pokemon2": {"name": "Mew"}},
    ]}));

    let report = output.results[0].result.as_ref().unwrap();
    assert_eq!(report["verdict"], "SPEED_TIE");
    assert_eq!(
        report["pokemon1"]["effectiveSpe"],
        report["pokemon2"]["effectiveSpe"]
    );
}

#[test]
fn undiscovered_opponent_assumed_max_speed() {
    // An explicit maximum-speed spread must agree with the default assumption.
    let output = run(json!({"requests": [
        {"type": "speed",
         "pokemon1": {"name": "Garchomp"},
         "pokemon2": {
             "name": "Garchomp",
             "actualStats": true,
             "nature": "Jolly",
             "level": 100,
             "evs": {"spe": 252},
             "ivs": {"hp": 31, "atk": 31, "def": 31, "spa": 31, "spd": 31, "spe": 31},
         }},
    ]}));

    let report = output.results[0].result.as_ref().unwrap();
    assert_eq!(report["verdict"], "SPEED_TIE");
    assert_eq!(report["pokemon1"]["effectiveSpe"], 333);
}

#[test]
fn boosted_slower_base_overtakes() {
    let output = run(json!({"requests": [
        {"type": "speed",
         "pokemon1": {"name": "Garchomp"},
         "pokemon2": {"name": "Ninetales-Alola", "boosts": {"spe": 2}}},
    ]}));

    let report = output.results[0].result.as_ref().unwrap();
    assert_eq!(report["pokemon1"]["effectiveSpe"], 333);
    assert_eq!(report["pokemon2"]["rawSpe"], 348);
    assert_eq!(report["pokemon2"]["effectiveSpe"], 696);
    assert_eq!(report["verdict"], "POKEMON2_FASTER");
}

#[test]
fn unknown_tag_is_treated_as_damage() {
    let output = run(json!({"requests": [
        {"type": "mystery",
         "attacker": {"name": "Garchomp"},
         "defender": {"name": "Heatran"},
         "move": {"name": "Earthquake"}},
    ]}));

    assert!(output.results[0].ok);
    let report = output.results[0].result.as_ref().unwrap();
    assert_eq!(report["range"], json!([516, 612]));
    assert_eq!(report["damage"].as_array().unwrap().len(), 16);
    assert_eq!(report["attackerStats"]["speed"], 240);
}

#[test]
fn unsupported_gen_fails_per_request() {
    let output = run(json!({"gen": 2, "requests": [
        stats_request("Mew"),
        {"attacker": {"name": "Garchomp"}, "defender": {"name": "Heatran"},
         "move": {"name": "Earthquake"}},
    ]}));

    assert_eq!(output.results.len(), 2);
    for entry in &output.results {
        assert!(!entry.ok);
        assert!(entry.error.as_deref().unwrap().contains("generation"));
    }
}

#[test]
fn damage_report_carries_both_speed_views() {
    let output = run(json!({"requests": [
        {"attacker": {"name": "Garchomp", "boosts": {"spe": 1}},
         "defender": {"name": "Heatran"},
         "move": {"name": "Earthquake"}},
    ]}));

    let report = output.results[0].result.as_ref().unwrap();
    assert_eq!(report["attackerStats"]["speed"], 240);
    assert_eq!(report["attackerStats"]["boostedSpeed"], 360);
    assert_eq!(report["defenderStats"]["speed"], 190);
    assert_eq!(report["defenderStats"]["boostedSpeed"], 190);
}
