//! Catalog entry domain model.
//!
//! An [`Entry`] is one tool in the catalog: descriptive metadata, a category, a
//! price tier, a rating, and the flags that drive the trending sort. Entries are
//! immutable once loaded and are identified by a stable string id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed, closed set of catalog categories.
///
/// Serialized in kebab-case (`image-ai`, `code-generators`, ...), which is the
/// format used by catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Chatbots,
    ImageAi,
    CodeGenerators,
    AudioAi,
    VideoAi,
    WritingAi,
    DataAnalysis,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Self; 7] = [
        Self::Chatbots,
        Self::ImageAi,
        Self::CodeGenerators,
        Self::AudioAi,
        Self::VideoAi,
        Self::WritingAi,
        Self::DataAnalysis,
    ];

    /// Catalog identifier (`image-ai`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chatbots => "chatbots",
            Self::ImageAi => "image-ai",
            Self::CodeGenerators => "code-generators",
            Self::AudioAi => "audio-ai",
            Self::VideoAi => "video-ai",
            Self::WritingAi => "writing-ai",
            Self::DataAnalysis => "data-analysis",
        }
    }

    /// Human-readable label (`Image AI`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chatbots => "Chatbots",
            Self::ImageAi => "Image AI",
            Self::CodeGenerators => "Code Generators",
            Self::AudioAi => "Audio AI",
            Self::VideoAi => "Video AI",
            Self::WritingAi => "Writing AI",
            Self::DataAnalysis => "Data Analysis",
        }
    }
}

/// Price tier of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Free,
    Freemium,
    Paid,
}

impl PriceTier {
    /// Every tier, in filter-bar order.
    pub const ALL: [Self; 3] = [Self::Free, Self::Freemium, Self::Paid];

    /// Catalog identifier (`freemium`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Paid => "paid",
        }
    }

    /// Human-readable label (`Freemium`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
        }
    }
}

/// One tool in the catalog.
///
/// Field names follow the camelCase catalog format (`reviewCount`,
/// `dateAdded`, ...). Every field is required; a record missing any of them
/// fails deserialization so the catalog loader can reject the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Stable unique identifier.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price: PriceTier,
    /// Average rating, expected in `[0, 5]`.
    pub rating: f64,
    pub review_count: u64,
    pub image_url: String,
    pub website_url: String,
    /// Ordered; the first few are shown in list rows.
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub pricing_details: String,
    /// When the tool was added to the catalog.
    #[serde(with = "date_added")]
    pub date_added: DateTime<Utc>,
    pub trending: bool,
    pub top_rated: bool,
}

impl Entry {
    /// Formats `date_added` for display, e.g. `Jan 15, 2024`.
    #[must_use]
    pub fn added_label(&self) -> String {
        self.date_added.format("%b %-d, %Y").to_string()
    }

    /// Splits features into the first `limit` and the count of the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// # use toolshelf::domain::Entry;
    /// # let json = r#"{"id":"x","name":"X","description":"","category":"chatbots",
    /// #   "price":"free","rating":4.0,"reviewCount":1,"imageUrl":"","websiteUrl":"",
    /// #   "features":["a","b","c","d","e"],"pros":[],"cons":[],"pricingDetails":"",
    /// #   "dateAdded":"2024-01-15","trending":false,"topRated":false}"#;
    /// # let entry: Entry = serde_json::from_str(json).unwrap();
    /// let (shown, more) = entry.feature_preview(3);
    /// assert_eq!(shown, ["a", "b", "c"]);
    /// assert_eq!(more, 2);
    /// ```
    #[must_use]
    pub fn feature_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.features.len().min(limit);
        (&self.features[..shown], self.features.len() - shown)
    }
}

/// Serde adapter for `dateAdded`.
///
/// Accepts either a calendar date (`2024-01-15`, taken as midnight UTC) or a
/// full RFC 3339 timestamp. Always serializes as RFC 3339.
mod date_added {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid dateAdded: {raw:?}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&midnight))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const RECORD: &str = r#"{
        "id": "midjourney",
        "name": "Midjourney",
        "description": "Image generation",
        "category": "image-ai",
        "price": "paid",
        "rating": 4.7,
        "reviewCount": 15420,
        "imageUrl": "https://example.com/mj.png",
        "websiteUrl": "https://midjourney.com",
        "features": ["Stylized art", "Upscaling"],
        "pros": ["Quality"],
        "cons": ["Discord only"],
        "pricingDetails": "From $10/month",
        "dateAdded": "2024-02-10",
        "trending": true,
        "topRated": true
    }"#;

    #[test]
    fn parses_camel_case_record() {
        let entry: Entry = serde_json::from_str(RECORD).unwrap();
        assert_eq!(entry.category, Category::ImageAi);
        assert_eq!(entry.price, PriceTier::Paid);
        assert_eq!(entry.review_count, 15420);
        assert_eq!(entry.date_added.year(), 2024);
        assert_eq!(entry.date_added.month(), 2);
        assert_eq!(entry.date_added.day(), 10);
        assert!(entry.top_rated);
    }

    #[test]
    fn accepts_rfc3339_dates() {
        let parsed = date_added::parse("2024-03-05T14:30:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 12);
        assert_eq!(parsed.day(), 5);
    }

    #[test]
    fn rejects_garbage_dates() {
        let json = RECORD.replace("2024-02-10", "last tuesday");
        let err = serde_json::from_str::<Entry>(&json).unwrap_err();
        assert!(err.to_string().contains("invalid dateAdded"));
    }

    #[test]
    fn rejects_unknown_category() {
        let json = RECORD.replace("image-ai", "robotics");
        assert!(serde_json::from_str::<Entry>(&json).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        let json = RECORD.replace(r#""pricingDetails": "From $10/month","#, "");
        let err = serde_json::from_str::<Entry>(&json).unwrap_err();
        assert!(err.to_string().contains("pricingDetails"));
    }

    #[test]
    fn category_identifiers_round_trip_through_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn added_label_is_human_readable() {
        let entry: Entry = serde_json::from_str(RECORD).unwrap();
        assert_eq!(entry.added_label(), "Feb 10, 2024");
    }

    #[test]
    fn feature_preview_handles_short_lists() {
        let entry: Entry = serde_json::from_str(RECORD).unwrap();
        let (shown, more) = entry.feature_preview(3);
        assert_eq!(shown.len(), 2);
        assert_eq!(more, 0);
    }
}
