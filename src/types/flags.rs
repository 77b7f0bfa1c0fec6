//! Boolean keyword features

use serde::{Deserialize, Serialize};

/// Eight independent keyword-category flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// 目標, したい, 合格, ...
    pub has_goal: bool,
    /// 疲れ, 忙しい, 誘惑, ...
    pub has_obstacle: bool,
    /// 計画, 毎日, 週, ...
    pub has_plan: bool,
    /// アプリ, タイマー, 環境, ...
    pub has_resource: bool,
    /// 記録, ログ, 振り返り, ...
    pub has_feedback: bool,
    /// 続けている, 実践, ...
    pub exec_pos: bool,
    /// 続かない, サボった, ...
    pub exec_neg: bool,
    /// までに, 締切, 来月, ...
    pub has_deadline: bool,
}
