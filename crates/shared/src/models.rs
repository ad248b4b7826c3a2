use chrono::{DateTime, Datelike};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// A single story report as returned by the story API.
///
/// Only `name`, `lat` and `lon` carry meaning for the home page; everything
/// else is display data. Records are opaque: a missing, null or mistyped field
/// falls back to empty text or "no location" instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub photo_url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lon: Option<f64>,
}

/// Text field that reads null or non-string values as text or empty.
pub fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_coord<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Stories out of an arbitrary `listStory` value.
///
/// Anything other than an array yields no stories; array entries that are
/// not objects are skipped.
pub fn stories_from_value(value: Value) -> Vec<Story> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// `deserialize_with` adapter for [`stories_from_value`].
pub fn deserialize_story_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Story>, D::Error> {
    Ok(stories_from_value(Value::deserialize(deserializer)?))
}

impl Story {
    /// Name shown as the author of the story card.
    pub fn reporter_name(&self) -> &str {
        &self.name
    }

    /// Both coordinates, if the story was posted with a location.
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn formatted_created_at(&self) -> String {
        format_date(&self.created_at)
    }
}

/// Format an RFC 3339 timestamp as an Indonesian long date ("5 Januari 2024").
///
/// Input that does not parse is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => {
            let month = MONTHS_ID[dt.month0() as usize];
            format!("{} {} {}", dt.day(), month, dt.year())
        }
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_deserializes_full() {
        let json = r#"{"id":"story-FvU4u0Vp2S3PMsFg","name":"Dimas","description":"Lorem Ipsum","photoUrl":"https://story-api.dicoding.dev/images/stories/photos-1641623658595_dummy-pic.png","createdAt":"2022-01-08T06:34:18.598Z","lat":-10.212,"lon":-16.002}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, "story-FvU4u0Vp2S3PMsFg");
        assert_eq!(story.reporter_name(), "Dimas");
        assert_eq!(story.location(), Some((-10.212, -16.002)));
    }

    #[test]
    fn test_story_deserializes_without_location() {
        let json = r#"{"id":"story-1","name":"Ayu","description":"","photoUrl":"","createdAt":"2024-01-05T10:00:00Z","lat":null,"lon":null}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert!(story.location().is_none());
    }

    #[test]
    fn test_story_deserializes_missing_fields() {
        let story: Story = serde_json::from_str(r#"{"name":"Budi"}"#).unwrap();
        assert_eq!(story.name, "Budi");
        assert!(story.id.is_empty());
        assert!(story.lat.is_none());
    }

    #[test]
    fn test_story_tolerates_null_and_mistyped_fields() {
        let json = r#"{"id":"story-2","name":null,"description":null,"photoUrl":42,"createdAt":null,"lat":"-6.5","lon":"east"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, "story-2");
        assert!(story.name.is_empty());
        assert!(story.description.is_empty());
        assert_eq!(story.photo_url, "42");
        assert_eq!(story.lat, Some(-6.5));
        assert!(story.lon.is_none());
        assert!(story.location().is_none());
    }

    #[test]
    fn test_stories_from_non_array_is_empty() {
        assert!(stories_from_value(Value::Null).is_empty());
        assert!(stories_from_value(serde_json::json!({})).is_empty());
        assert!(stories_from_value(serde_json::json!("stories")).is_empty());
    }

    #[test]
    fn test_stories_from_mixed_array_keeps_good_records() {
        let value = serde_json::json!([
            {"id": "story-1", "name": "Ayu", "description": null, "lat": -6.2, "lon": 106.8},
            7,
            null,
            {"id": "story-3", "name": "Budi"}
        ]);
        let stories = stories_from_value(value);
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].name, "Ayu");
        assert!(stories[0].description.is_empty());
        assert_eq!(stories[0].location(), Some((-6.2, 106.8)));
        assert_eq!(stories[1].id, "story-3");
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let story = Story {
            id: String::new(),
            name: "Half".to_string(),
            description: String::new(),
            photo_url: String::new(),
            created_at: String::new(),
            lat: Some(1.0),
            lon: None,
        };
        assert!(story.location().is_none());
    }

    #[test]
    fn test_format_date_indonesian() {
        assert_eq!(format_date("2024-01-05T10:00:00Z"), "5 Januari 2024");
        assert_eq!(format_date("2022-12-31T23:59:59.999+07:00"), "31 Desember 2022");
    }

    #[test]
    fn test_format_date_unparsable_is_verbatim() {
        assert_eq!(format_date("kemarin"), "kemarin");
        assert_eq!(format_date(""), "");
    }
}
