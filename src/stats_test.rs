#![allow(clippy::clone_on_copy)]

use super::*;

// =============================================================
// StatId serde
// =============================================================

#[test]
fn stat_id_serde_roundtrip() {
    let json = serde_json::to_string(&StatId::Creative).unwrap();
    assert_eq!(json, "\"creative\"");
    let back: StatId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, StatId::Creative);
}

#[test]
fn stat_id_serde_all_variants() {
    let cases = [
        (StatId::Physical, "\"physical\""),
        (StatId::Mental, "\"mental\""),
        (StatId::Social, "\"social\""),
        (StatId::Creative, "\"creative\""),
        (StatId::Productive, "\"productive\""),
    ];
    for (stat, expected) in cases {
        assert_eq!(serde_json::to_string(&stat).unwrap(), expected);
        let back: StatId = serde_json::from_str(expected).unwrap();
        assert_eq!(back, stat);
    }
}

#[test]
fn stat_id_deserialize_invalid_rejects() {
    let result = serde_json::from_str::<StatId>("\"charisma\"");
    assert!(result.is_err());
}

// =============================================================
// StatId order and metadata
// =============================================================

#[test]
fn all_starts_with_physical() {
    assert_eq!(StatId::ALL[0], StatId::Physical);
}

#[test]
fn index_matches_position_in_all() {
    for (i, stat) in StatId::ALL.iter().enumerate() {
        assert_eq!(stat.index(), i);
    }
}

#[test]
fn display_names() {
    assert_eq!(StatId::Physical.display_name(), "Physical");
    assert_eq!(StatId::Mental.display_name(), "Mental");
    assert_eq!(StatId::Social.display_name(), "Social");
    assert_eq!(StatId::Creative.display_name(), "Creative");
    assert_eq!(StatId::Productive.display_name(), "Productive");
}

#[test]
fn accent_colors_are_distinct() {
    for (i, a) in StatId::ALL.iter().enumerate() {
        for b in &StatId::ALL[i + 1..] {
            assert_ne!(a.accent_color(), b.accent_color());
        }
    }
}

// =============================================================
// StatValues basics
// =============================================================

#[test]
fn new_is_all_zero() {
    let stats = StatValues::new();
    for stat in StatId::ALL {
        assert_eq!(stats.get(stat), 0);
    }
}

#[test]
fn get_and_set_roundtrip() {
    let mut stats = StatValues::new();
    for (i, stat) in StatId::ALL.iter().enumerate() {
        stats.set(*stat, (i as u32 + 1) * 10);
    }
    assert_eq!(stats.get(StatId::Physical), 10);
    assert_eq!(stats.get(StatId::Mental), 20);
    assert_eq!(stats.get(StatId::Social), 30);
    assert_eq!(stats.get(StatId::Creative), 40);
    assert_eq!(stats.get(StatId::Productive), 50);
}

#[test]
fn max_value_all_zero() {
    assert_eq!(StatValues::new().max_value(), 0);
}

#[test]
fn max_value_picks_largest() {
    let stats = StatValues { social: 7, productive: 31, ..Default::default() };
    assert_eq!(stats.max_value(), 31);
}

// =============================================================
// StatValues serde
// =============================================================

#[test]
fn from_json_full_snapshot() {
    let stats =
        StatValues::from_json(r#"{"physical":12,"mental":3,"social":0,"creative":8,"productive":25}"#).unwrap();
    assert_eq!(stats.physical, 12);
    assert_eq!(stats.mental, 3);
    assert_eq!(stats.social, 0);
    assert_eq!(stats.creative, 8);
    assert_eq!(stats.productive, 25);
}

#[test]
fn from_json_missing_keys_default_to_zero() {
    let stats = StatValues::from_json(r#"{"mental":5}"#).unwrap();
    assert_eq!(stats.mental, 5);
    assert_eq!(stats.physical, 0);
    assert_eq!(stats.productive, 0);
}

#[test]
fn from_json_empty_object_is_all_zero() {
    let stats = StatValues::from_json("{}").unwrap();
    assert_eq!(stats, StatValues::new());
}

#[test]
fn from_json_unknown_key_is_ignored() {
    let stats = StatValues::from_json(r#"{"physical":4,"charisma":99}"#).unwrap();
    assert_eq!(stats.physical, 4);
}

#[test]
fn from_json_negative_value_rejects() {
    let result = StatValues::from_json(r#"{"physical":-5}"#);
    assert!(result.is_err());
}

#[test]
fn from_json_fractional_value_rejects() {
    let result = StatValues::from_json(r#"{"mental":1.5}"#);
    assert!(result.is_err());
}

#[test]
fn from_json_garbage_rejects() {
    let result = StatValues::from_json("not json");
    assert!(result.is_err());
}

#[test]
fn snapshot_error_display_mentions_decode() {
    let err = StatValues::from_json("[]").unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("failed to decode stat payload"));
}

#[test]
fn serde_roundtrip() {
    let stats = StatValues { physical: 1, mental: 2, social: 3, creative: 4, productive: 5 };
    let json = serde_json::to_string(&stats).unwrap();
    let back: StatValues = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stats);
}

// =============================================================
// PartialStatValues
// =============================================================

#[test]
fn partial_default_is_all_none() {
    let p = PartialStatValues::default();
    assert!(p.physical.is_none());
    assert!(p.mental.is_none());
    assert!(p.social.is_none());
    assert!(p.creative.is_none());
    assert!(p.productive.is_none());
}

#[test]
fn partial_skip_serializing_none_fields() {
    let p = PartialStatValues { social: Some(8), ..Default::default() };
    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"social\""));
    assert!(!json.contains("\"physical\""));
    assert!(!json.contains("\"mental\""));
    assert!(!json.contains("\"creative\""));
    assert!(!json.contains("\"productive\""));
}

#[test]
fn partial_from_json_sparse() {
    let p = PartialStatValues::from_json(r#"{"creative":2,"physical":40}"#).unwrap();
    assert_eq!(p.creative, Some(2));
    assert_eq!(p.physical, Some(40));
    assert!(p.mental.is_none());
}

#[test]
fn partial_from_json_negative_rejects() {
    assert!(PartialStatValues::from_json(r#"{"creative":-1}"#).is_err());
}

#[test]
fn apply_partial_updates_present_fields() {
    let mut stats = StatValues { physical: 10, mental: 20, ..Default::default() };
    stats.apply_partial(&PartialStatValues { mental: Some(99), ..Default::default() });
    assert_eq!(stats.mental, 99);
    assert_eq!(stats.physical, 10); // untouched
}

#[test]
fn apply_partial_each_field() {
    let mut stats = StatValues::new();
    stats.apply_partial(&PartialStatValues {
        physical: Some(1),
        mental: Some(2),
        social: Some(3),
        creative: Some(4),
        productive: Some(5),
    });
    assert_eq!(stats, StatValues { physical: 1, mental: 2, social: 3, creative: 4, productive: 5 });
}

#[test]
fn apply_partial_empty_is_noop() {
    let mut stats = StatValues { social: 6, ..Default::default() };
    stats.apply_partial(&PartialStatValues::default());
    assert_eq!(stats.social, 6);
}

#[test]
fn apply_partial_can_zero_a_stat() {
    let mut stats = StatValues { productive: 50, ..Default::default() };
    stats.apply_partial(&PartialStatValues { productive: Some(0), ..Default::default() });
    assert_eq!(stats.productive, 0);
}
