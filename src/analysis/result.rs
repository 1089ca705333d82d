// src/analysis/result.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Threat level the analysis service assigns above 70% risk
pub const CRITICAL_THREAT_LEVEL: &str = "CRITICAL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub timestamp: String,
    pub risk_score: f64,
    pub threat_level: String,
    pub warnings: WarningCounts,
    #[serde(default, deserialize_with = "lenient_trends")]
    pub trends: TrendSeries,
    #[serde(default)]
    pub actions: Vec<MitigationAction>,
    pub report: String,
    pub raw_analysis: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningCounts {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
}

impl WarningCounts {
    // Widened so counts near u32::MAX cannot overflow
    pub fn total(&self) -> u64 {
        u64::from(self.critical) + u64::from(self.high) + u64::from(self.medium)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub risk: Vec<f64>,
    #[serde(default)]
    pub warnings: Vec<f64>,
}

impl TrendSeries {
    pub fn has_data(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Best-effort read of the chart block. Labels may arrive as numbers,
    /// values as numeric strings; anything else that is not an object
    /// yields an empty series.
    fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        let labels = array_of(fields.get("labels"), |item| match item {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        });

        Self {
            labels,
            risk: array_of(fields.get("risk"), number_of),
            warnings: array_of(fields.get("warnings"), number_of),
        }
    }
}

fn array_of<T>(value: Option<&Value>, convert: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(convert).collect(),
        _ => Vec::new(),
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// The trend block is model-generated, so a bad shape only costs the chart
fn lenient_trends<'de, D>(deserializer: D) -> Result<TrendSeries, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(TrendSeries::from_value(&value))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MitigationAction {
    pub priority: String,
    pub action: String,
}

impl AnalysisResult {
    pub fn is_critical(&self) -> bool {
        self.threat_level.eq_ignore_ascii_case(CRITICAL_THREAT_LEVEL)
    }

    /// Timestamp in local time for display; falls back to the raw value
    /// when the service sends something that is not RFC 3339 or ISO 8601.
    pub fn display_timestamp(&self) -> String {
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(&self.timestamp) {
            return parsed
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
        }
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
            return naive.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        self.timestamp.clone()
    }
}

#[cfg(test)]
pub(crate) fn sample_result() -> AnalysisResult {
    AnalysisResult {
        timestamp: "2024-03-01T12:30:05.123456".to_string(),
        risk_score: 82.0,
        threat_level: "CRITICAL".to_string(),
        warnings: WarningCounts { critical: 3, high: 5, medium: 2 },
        trends: TrendSeries {
            labels: vec!["Week 1".into(), "Week 2".into(), "Week 3".into()],
            risk: vec![20.0, 55.0, 82.0],
            warnings: vec![1.0, 4.0, 10.0],
        },
        actions: vec![MitigationAction {
            priority: "High".to_string(),
            action: "Block 10.0.0.7 at the firewall".to_string(),
        }],
        report: "1. Brute force attempts against sshd\n2. Privilege escalation via sudo".to_string(),
        raw_analysis: "Mar  1 12:00:01 host sshd[811]: Failed password for root".to_string(),
    }
}
