//! Quantities parsed from free text

use serde::{Deserialize, Serialize};

/// Unit attached to a number in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// 回
    Count,
    /// 分
    Minutes,
    /// 時間
    Hours,
    /// 日
    Days,
    /// 週
    Weeks,
    /// 月
    Months,
    /// 年
    Years,
    /// kg / キロ
    Kilograms,
    /// 点
    Points,
    /// 円
    Yen,
    /// 万円 (× 10,000 yen)
    ManYen,
}

impl Unit {
    /// Map a matched unit token to its unit
    pub fn from_token(token: &str) -> Option<Self> {
        let unit = match token {
            "回" => Self::Count,
            "分" => Self::Minutes,
            "時間" => Self::Hours,
            "日" => Self::Days,
            "週" => Self::Weeks,
            "月" => Self::Months,
            "年" => Self::Years,
            "kg" | "キロ" => Self::Kilograms,
            "点" => Self::Points,
            "円" => Self::Yen,
            "万円" => Self::ManYen,
            _ => return None,
        };
        Some(unit)
    }

    /// Units that make an action concrete enough to bump execution
    pub fn is_cadence(&self) -> bool {
        matches!(self, Self::Weeks | Self::Count | Self::Minutes | Self::Hours)
    }
}

/// A (value, unit) pair found in the text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}
