//! Pseudo "delay certificate", styled after a railway delay slip

use chrono::{DateTime, Local};
use crate::types::AnalysisResult;

/// Render the certificate for `result` as issued at `issued_at`
pub fn delay_certificate(result: &AnalysisResult, issued_at: DateTime<Local>) -> String {
    let line = result.category.line_label();

    let causes = result.gaps.iter().take(2).cloned().collect::<Vec<_>>().join(" / ");
    let causes = if causes.is_empty() { "解析中".to_string() } else { causes };
    let plan = result.actions.first().map(String::as_str).unwrap_or("—");

    [
        "【遅延証明（擬似）】".to_string(),
        format!("{} 現在", issued_at.format("%Y年%m月%d日 %H:%M")),
        format!("{} において {} 分の遅延が発生していることを確認しました。", line, result.delays.overall),
        format!("要因（上位）: {}", causes),
        format!("短縮プラン: {}", plan),
        "※本証明は学習用の擬似表示です。実際の鉄道運行とは無関係です。".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::core::analyzer::Analyzer;
    use crate::core::recommend::FixedChooser;

    #[test]
    fn test_certificate_lines() {
        let result = Analyzer::default().analyze("英語を勉強したい", None, &mut FixedChooser(0));
        let at = Local.with_ymd_and_hms(2026, 3, 7, 8, 5, 0).unwrap();
        let cert = delay_certificate(&result, at);
        let lines: Vec<&str> = cert.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "【遅延証明（擬似）】");
        assert_eq!(lines[1], "2026年03月07日 08:05 現在");
        assert!(lines[2].starts_with("学習線 において "));
        assert!(lines[3].contains(" / "));
        assert_eq!(lines[4], format!("短縮プラン: {}", result.actions[0]));
    }

    #[test]
    fn test_certificate_without_text() {
        let mut result = Analyzer::default().analyze("", None, &mut FixedChooser(0));
        result.gaps.clear();
        result.actions.clear();
        let cert = delay_certificate(&result, Local::now());
        assert!(cert.contains("要因（上位）: 解析中"));
        assert!(cert.contains("短縮プラン: —"));
        assert!(cert.contains("一般線"));
    }
}
