use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::FieldTuning;

pub fn load_preset(path: &Path) -> Result<FieldTuning> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read preset file {}", path.display()))?;
    let tuning: FieldTuning = serde_json::from_str(&raw)
        .with_context(|| format!("invalid preset JSON in {}", path.display()))?;
    Ok(tuning.sanitized())
}

pub fn save_preset(path: &Path, tuning: &FieldTuning) -> Result<()> {
    let raw = serde_json::to_string_pretty(tuning).context("failed to encode preset JSON")?;
    fs::write(path, raw)
        .with_context(|| format!("failed to write preset file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_parses_to_defaults() {
        let tuning: FieldTuning = serde_json::from_str("{}").unwrap();
        assert_eq!(tuning, FieldTuning::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let tuning: FieldTuning = serde_json::from_str(r#"{ "particle_count": 80 }"#).unwrap();
        assert_eq!(tuning.particle_count, 80);
        assert_eq!(tuning.link_distance, FieldTuning::default().link_distance);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(serde_json::from_str::<FieldTuning>("not a preset").is_err());
    }

    #[test]
    fn load_error_names_the_file() {
        let error = load_preset(Path::new("/nonexistent/driftfield-preset.json")).unwrap_err();
        assert!(format!("{error}").contains("driftfield-preset.json"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let path =
            std::env::temp_dir().join(format!("driftfield-preset-test-{}.json", std::process::id()));
        let tuning = FieldTuning {
            particle_count: 220,
            influence_radius: 90.0,
            ..FieldTuning::default()
        };

        save_preset(&path, &tuning).unwrap();
        let loaded = load_preset(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, tuning);
    }
}
