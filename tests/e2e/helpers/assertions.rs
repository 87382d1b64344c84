use serde_json::Value;

pub fn assert_chord_shape(chord: &str) {
    let first = chord.chars().next().expect("Empty chord");
    assert!(
        ('A'..='G').contains(&first),
        "Chord '{}' does not start with a note name",
        chord
    );
}

pub fn assert_usage_status(status: &Value, used: i64, tokens: i64, remaining: i64) {
    assert_eq!(status.get("dice_rolls_used").and_then(|v| v.as_i64()), Some(used));
    assert_eq!(
        status.get("extra_roll_tokens").and_then(|v| v.as_i64()),
        Some(tokens)
    );
    assert_eq!(
        status.get("remaining_rolls").and_then(|v| v.as_i64()),
        Some(remaining)
    );
}

pub fn assert_progression_response(progression: &Value, expected_chords: &[&str]) {
    assert!(progression.get("id").and_then(|v| v.as_str()).is_some());
    let chords: Vec<&str> = progression
        .get("chords")
        .and_then(|v| v.as_array())
        .expect("Missing chords")
        .iter()
        .filter_map(|c| c.as_str())
        .collect();
    assert_eq!(chords, expected_chords);
    assert!(progression.get("is_favorite").and_then(|v| v.as_bool()).is_some());
    assert!(progression.get("created_at").is_some());
}
