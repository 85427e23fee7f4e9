// src/report.rs
// =============================================================================
// This module defines the output document and writes it to disk.
//
// The produced file is the program's single external interface:
//   restaurant_guru_<DD_MM_YYYY_HH_MM>.json
// containing a two-element JSON array:
//   [restaurant_count, {city: {restaurant_name: {url, description}}}]
//
// BTreeMap keeps both map levels sorted, so two runs over the same data
// produce byte-identical documents.
//
// Rust concepts:
// - Tuple structs: GuideReport(count, guide) serializes as a JSON array,
//   which is exactly the document shape we need
// - BTreeMap: Like HashMap, but iterates in sorted key order
// =============================================================================

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// One restaurant as stored in the guide
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantEntry {
    /// The restaurant's own page URL
    pub url: String,
    /// Description text; empty when the page has no description block
    pub description: String,
}

// city name -> restaurant name -> entry
//
// Inserting under an existing restaurant name replaces the earlier
// entry; names are unique within a city.
pub type Guide = BTreeMap<String, BTreeMap<String, RestaurantEntry>>;

// The complete output document
//
// A tuple struct so serde emits the array form [count, {..}] instead of
// an object with field names.
#[derive(Debug, Serialize)]
pub struct GuideReport(pub usize, pub Guide);

impl GuideReport {
    /// Number of restaurant records collected
    pub fn restaurant_count(&self) -> usize {
        self.0
    }
}

// Builds the timestamped output file name
//
// Example: restaurant_guru_08_08_2026_14_05.json
pub fn report_file_name(timestamp: &DateTime<Local>) -> String {
    format!(
        "restaurant_guru_{}.json",
        timestamp.format("%d_%m_%Y_%H_%M")
    )
}

// Writes the report as pretty-printed JSON
//
// Parameters:
//   report: the document to serialize
//   output_dir: where to put the file (current directory when None)
//   timestamp: run start time, used for the file name
//
// Returns: the path of the written file
//
// serde_json keeps non-ASCII characters literal, so Cyrillic names stay
// readable in the file.
pub fn save(
    report: &GuideReport,
    output_dir: Option<&Path>,
    timestamp: &DateTime<Local>,
) -> Result<PathBuf> {
    let file_name = report_file_name(timestamp);
    let path = match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    };

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).with_context(|| format!("could not write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_format() {
        let timestamp = Local.with_ymd_and_hms(2026, 8, 8, 14, 5, 0).unwrap();
        assert_eq!(
            report_file_name(&timestamp),
            "restaurant_guru_08_08_2026_14_05.json"
        );
    }

    #[test]
    fn test_file_name_zero_pads() {
        let timestamp = Local.with_ymd_and_hms(2026, 1, 3, 7, 9, 0).unwrap();
        assert_eq!(
            report_file_name(&timestamp),
            "restaurant_guru_03_01_2026_07_09.json"
        );
    }

    #[test]
    fn test_report_serializes_as_array() {
        let mut guide = Guide::new();
        guide.entry("Тбилиси".to_string()).or_default().insert(
            "Старая Таверна".to_string(),
            RestaurantEntry {
                url: "https://ru.restaurantguru.com/Old-Tavern-Tbilisi".to_string(),
                description: "Грузинская кухня.".to_string(),
            },
        );

        let report = GuideReport(1, guide);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                1,
                {
                    "Тбилиси": {
                        "Старая Таверна": {
                            "url": "https://ru.restaurantguru.com/Old-Tavern-Tbilisi",
                            "description": "Грузинская кухня."
                        }
                    }
                }
            ])
        );
    }

    #[test]
    fn test_empty_description_is_kept() {
        let entry = RestaurantEntry {
            url: "https://ru.restaurantguru.com/Chveni-Tbilisi".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_save_writes_to_output_dir() {
        let dir = std::env::temp_dir().join("guide-harvester-report-test");
        fs::create_dir_all(&dir).unwrap();

        let timestamp = Local.with_ymd_and_hms(2026, 8, 8, 14, 5, 0).unwrap();
        let report = GuideReport(0, Guide::new());

        let path = save(&report, Some(&dir), &timestamp).unwrap();
        assert!(path.ends_with("restaurant_guru_08_08_2026_14_05.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[\n  0,\n  {}\n]");

        fs::remove_file(&path).unwrap();
    }
}
