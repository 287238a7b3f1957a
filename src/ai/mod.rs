//! Simulated AI analysis services.
//!
//! Classification, severity assessment, resolution prediction and photo
//! verification are all faked: each call waits the configured delay, then
//! derives its answer from keyword lookups over the input text plus a
//! randomized confidence score. The services are independent and are
//! fanned out concurrently by [`analyze_issue`], so a full analysis costs
//! one delay, not four.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Latencies;
use crate::error::Result;
use crate::query::search::contains_case_insensitive;
use crate::types::{Category, Severity};

/// Severity call with the model's one-line justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: Severity,
    pub reasoning: String,
}

/// Predicted time to resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionPrediction {
    pub estimated_days: u32,
    /// In `0.70..=0.95`.
    pub confidence: f64,
}

impl ResolutionPrediction {
    pub fn confidence_label(&self) -> &'static str {
        if self.confidence > 0.7 {
            "High confidence"
        } else if self.confidence > 0.4 {
            "Medium confidence"
        } else {
            "Low confidence"
        }
    }
}

/// Outcome of verifying a report photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageVerification {
    pub verified: bool,
    pub confidence: f64,
    pub details: String,
}

/// Combined result of a full issue analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueAnalysis {
    pub category: Category,
    pub severity: SeverityAssessment,
    pub prediction: ResolutionPrediction,
}

// Keyword tables driving the fake classifier. First match wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Roads, &["pothole", "road", "street", "pavement", "footpath"]),
    (Category::WaterSupply, &["water", "pipe", "leak", "tap", "supply"]),
    (Category::Electricity, &["streetlight", "light", "power", "electric", "wire"]),
    (Category::Sanitation, &["garbage", "trash", "waste", "dump", "smell"]),
    (Category::Drainage, &["drain", "sewage", "overflow", "flood", "gutter"]),
    (Category::Environment, &["tree", "pollution", "air", "green", "park trees"]),
    (Category::Traffic, &["traffic", "signal", "jam", "parking", "congestion"]),
    (Category::Parks, &["park", "playground", "garden", "bench"]),
    (Category::Noise, &["noise", "loud", "construction noise", "honking"]),
];

const CRITICAL_KEYWORDS: &[&str] = &["danger", "dangerous", "accident", "injury", "collapse", "fire"];
const HIGH_KEYWORDS: &[&str] = &["urgent", "severe", "major", "broken", "overflow"];
const LOW_KEYWORDS: &[&str] = &["minor", "small", "slight", "cosmetic"];

fn keyword_match(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_case_insensitive(text, k))
}

/// Pick a category from the description text. Falls back to Roads, the
/// most commonly reported category, when nothing matches.
pub fn classify_text(description: &str) -> Category {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keyword_match(description, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Roads)
}

fn assess_text(description: &str) -> SeverityAssessment {
    let (level, reasoning) = if keyword_match(description, CRITICAL_KEYWORDS) {
        (
            Severity::Critical,
            "The description indicates an immediate safety hazard requiring urgent attention.",
        )
    } else if keyword_match(description, HIGH_KEYWORDS) {
        (
            Severity::High,
            "The described damage significantly disrupts daily life for residents in the area.",
        )
    } else if keyword_match(description, LOW_KEYWORDS) {
        (
            Severity::Low,
            "The issue appears cosmetic with limited impact on safety or access.",
        )
    } else {
        (
            Severity::Medium,
            "The issue causes inconvenience but does not pose an immediate safety risk.",
        )
    };
    SeverityAssessment {
        level,
        reasoning: reasoning.to_string(),
    }
}

// Typical municipal turnaround per category, in days.
fn baseline_days(category: Category) -> u32 {
    match category {
        Category::Roads => 14,
        Category::WaterSupply => 5,
        Category::Electricity => 3,
        Category::Sanitation => 2,
        Category::Drainage => 7,
        Category::Environment => 21,
        Category::Traffic => 10,
        Category::Parks => 18,
        Category::Noise => 4,
    }
}

fn random_confidence() -> f64 {
    rand::rng().random_range(0.70..=0.95)
}

/// Simulated AI service endpoints. All of them always succeed after the
/// configured delay.
#[derive(Debug, Clone, Default)]
pub struct AiService {
    latencies: Latencies,
}

impl AiService {
    pub fn new(latencies: Latencies) -> Self {
        Self { latencies }
    }

    pub fn instant() -> Self {
        Self::new(Latencies::zero())
    }

    /// Classify the issue category from free text.
    pub async fn classify_category(&self, description: &str) -> Result<Category> {
        tokio::time::sleep(self.latencies.ai()).await;
        Ok(classify_text(description))
    }

    /// Assess severity from free text.
    pub async fn assess_severity(&self, description: &str) -> Result<SeverityAssessment> {
        tokio::time::sleep(self.latencies.ai()).await;
        Ok(assess_text(description))
    }

    /// Predict how long resolution will take for an issue of this
    /// category and severity.
    pub async fn predict_resolution_time(
        &self,
        category: Category,
        severity: Severity,
    ) -> Result<ResolutionPrediction> {
        tokio::time::sleep(self.latencies.ai()).await;
        let baseline = baseline_days(category);
        let estimated_days = match severity {
            Severity::Critical => (baseline / 3).max(1),
            Severity::High => (baseline / 2).max(1),
            Severity::Medium => baseline,
            Severity::Low => baseline + baseline / 2,
        };
        Ok(ResolutionPrediction {
            estimated_days,
            confidence: random_confidence(),
        })
    }

    /// Verify that a report photo plausibly shows the described issue.
    /// The simulated verifier accepts everything.
    pub async fn verify_image(&self, photo_path: &str) -> Result<ImageVerification> {
        tokio::time::sleep(self.latencies.ai()).await;
        Ok(ImageVerification {
            verified: true,
            confidence: random_confidence(),
            details: format!(
                "Image '{photo_path}' matches the reported issue type and location context."
            ),
        })
    }

    /// Run category classification, severity assessment and resolution
    /// prediction concurrently for one description.
    pub async fn analyze_issue(&self, description: &str) -> Result<IssueAnalysis> {
        let (category, severity) = futures::future::try_join(
            self.classify_category(description),
            self.assess_severity(description),
        )
        .await?;
        let prediction = self
            .predict_resolution_time(category, severity.level)
            .await?;
        Ok(IssueAnalysis {
            category,
            severity,
            prediction,
        })
    }
}
