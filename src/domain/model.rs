use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 吐槽強度。未知或缺少的值一律視為 `Medium`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Fun,
    #[default]
    Medium,
    Savage,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Fun, Intensity::Medium, Intensity::Savage];

    /// Total parse: anything other than exactly `fun` / `medium` / `savage` falls back to `Medium`.
    /// Matching is case-sensitive, so `"FUN"` is treated as unknown.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "fun" => Intensity::Fun,
            "savage" => Intensity::Savage,
            _ => Intensity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Fun => "fun",
            Intensity::Medium => "medium",
            Intensity::Savage => "savage",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastRequest {
    pub item: String,
    pub regret_value: f64,
    pub crypto: String,
    pub purchase_price: f64,
    #[serde(default)]
    pub intensity: Intensity,
}

impl RoastRequest {
    pub fn new(
        item: impl Into<String>,
        regret_value: f64,
        crypto: impl Into<String>,
        purchase_price: f64,
        intensity: Intensity,
    ) -> Self {
        Self {
            item: item.into(),
            regret_value: finite_or_zero(regret_value),
            crypto: crypto.into(),
            purchase_price: finite_or_zero(purchase_price),
            intensity,
        }
    }

    /// 寬鬆地從 JSON 建立請求：缺欄位或型別錯誤時降級為預設值，而不是回傳錯誤。
    pub fn from_json(value: &Value) -> Self {
        let intensity = value
            .get("intensity")
            .and_then(Value::as_str)
            .map(Intensity::parse_lenient)
            .unwrap_or_default();

        Self::new(
            text_field(value, "item"),
            number_field(value, "regretValue"),
            text_field(value, "crypto"),
            number_field(value, "purchasePrice"),
            intensity,
        )
    }
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn number_field(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// The only externally visible output of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastResult {
    pub roast: String,
}

/// Which path produced a roast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastSource {
    Provider,
    Pool,
    Contextual,
    Guard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastOutcome {
    pub roast: String,
    pub source: RoastSource,
}

impl From<RoastOutcome> for RoastResult {
    fn from(outcome: RoastOutcome) -> Self {
        Self {
            roast: outcome.roast,
        }
    }
}
