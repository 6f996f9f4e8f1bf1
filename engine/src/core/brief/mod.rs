//! Creative Brief
//!
//! The structured input a campaign starts from, plus the minimum-length gate
//! an input collector applies before the generator may run.
//!
//! Lengths are counted in UTF-16 code units, the unit browser frontends
//! report for the same strings, so the gate and the seeds agree with them.

use serde::{Deserialize, Serialize};
use specta::Type;

use crate::core::library::{find_trend, TrendArchetype, TREND_LIBRARY};
use crate::core::{BriefField, CoreError, CoreResult};

/// Tone used when the brief leaves it untouched
pub const DEFAULT_TONE: &str = "Bold & punchy";

/// Length of `text` as counted by the frontend (UTF-16 code units)
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Marketing brief describing brand, product, audience, tone, trend and offer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase", default)]
pub struct CreativeBrief {
    pub brand: String,
    pub product: String,
    /// Why the product pops
    pub differentiator: String,
    pub audience: String,
    pub tone: String,
    /// Trend archetype label
    pub trend: String,
    /// Optional offer / urgency line
    pub offer: String,
    /// Optional on-screen handle, e.g. `@neonfuelenergy`
    pub platform_handle: String,
}

impl Default for CreativeBrief {
    fn default() -> Self {
        Self {
            brand: String::new(),
            product: String::new(),
            differentiator: String::new(),
            audience: String::new(),
            tone: DEFAULT_TONE.to_string(),
            trend: TREND_LIBRARY[0].label.to_string(),
            offer: String::new(),
            platform_handle: String::new(),
        }
    }
}

/// A required field that does not clear its minimum length
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct BriefIssue {
    pub field: BriefField,
    /// Trimmed length the field must exceed
    pub min_len: usize,
    /// Trimmed length it currently has
    pub actual_len: usize,
}

impl CreativeBrief {
    /// Creates a brief with the required fields and default tone/trend
    pub fn new(
        brand: impl Into<String>,
        product: impl Into<String>,
        differentiator: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            product: product.into(),
            differentiator: differentiator.into(),
            audience: audience.into(),
            ..Self::default()
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = trend.into();
        self
    }

    pub fn with_offer(mut self, offer: impl Into<String>) -> Self {
        self.offer = offer.into();
        self
    }

    pub fn with_platform_handle(mut self, handle: impl Into<String>) -> Self {
        self.platform_handle = handle.into();
        self
    }

    /// Returns the raw value of a field
    pub fn field(&self, field: BriefField) -> &str {
        match field {
            BriefField::Brand => &self.brand,
            BriefField::Product => &self.product,
            BriefField::Differentiator => &self.differentiator,
            BriefField::Audience => &self.audience,
            BriefField::Tone => &self.tone,
            BriefField::Trend => &self.trend,
            BriefField::Offer => &self.offer,
            BriefField::PlatformHandle => &self.platform_handle,
        }
    }

    /// Lists every required field below its minimum, in gate order
    pub fn issues(&self) -> Vec<BriefIssue> {
        BriefField::REQUIRED
            .iter()
            .filter_map(|&field| {
                let min_len = field.min_len()?;
                let actual_len = text_len(self.field(field).trim());
                (actual_len <= min_len).then_some(BriefIssue {
                    field,
                    min_len,
                    actual_len,
                })
            })
            .collect()
    }

    /// Returns true when generation is permitted
    pub fn can_generate(&self) -> bool {
        self.issues().is_empty()
    }

    /// Applies the minimum-length gate, reporting the first failing field
    pub fn validate(&self) -> CoreResult<()> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(CoreError::BriefIncomplete {
                field: issue.field,
                min_len: issue.min_len,
            }),
            None => Ok(()),
        }
    }

    /// The trend archetype this brief resolves to (first entry if unknown)
    pub fn active_trend(&self) -> &'static TrendArchetype {
        find_trend(&self.trend)
    }

    pub fn has_offer(&self) -> bool {
        !self.offer.is_empty()
    }

    pub fn has_platform_handle(&self) -> bool {
        !self.platform_handle.is_empty()
    }

    /// Parses a brief from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidBrief(e.to_string()))
    }
}
