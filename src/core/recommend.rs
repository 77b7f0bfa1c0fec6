//! Recommendation generator: ideal narrative, gap list, action list
//!
//! Pure templating over (category, scores, quantities). The only
//! non-determinism is the flavor-text picks, which go through a `Chooser`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::types::{
    Category, Dimension, DimensionScores, Quantity, Recommendations, Unit, WorkingNumbers,
};

/// Gap sentences and per-dimension actions cover this many weakest dimensions
const WEAKEST_COUNT: usize = 3;
const MAX_ACTIONS: usize = 5;

const TIME_SLOTS: [&str; 5] = ["朝7:00", "出勤前", "昼休み", "退勤直後", "21:00"];
const WEEKDAYS: [&str; 3] = ["金曜", "土曜", "日曜"];
const DEADLINES: [&str; 5] = ["今月末", "来月末", "6週間後", "3ヶ月後", "四半期末"];

/// Picks one option index out of `len`
pub trait Chooser {
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Unseeded picks for production use
#[derive(Debug)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible picks
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index (clamped to the option count)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

fn pick<'a>(chooser: &mut dyn Chooser, options: &[&'a str]) -> &'a str {
    options[chooser.choose_index(options.len()).min(options.len() - 1)]
}

/// Derive template numbers; each matching quantity overrides the previous
pub fn working_numbers(quantities: &[Quantity]) -> WorkingNumbers {
    let mut n = WorkingNumbers::default();
    for q in quantities {
        let v = q.value;
        match q.unit {
            Unit::Minutes => n.minutes = round_clamp(v, 5, 120) as u32,
            Unit::Hours => n.minutes = round_clamp(v * 60.0, 5, 180) as u32,
            Unit::Count | Unit::Weeks => n.freq_per_week = round_clamp(v, 1, 7) as u32,
            Unit::Points => n.points = round_clamp(v, 200, 990) as u32,
            Unit::Yen => n.amount = round_floor(v, 1_000),
            Unit::ManYen => n.amount = round_floor(v * 10_000.0, 1_000),
            Unit::Kilograms | Unit::Days | Unit::Months | Unit::Years => {}
        }
    }
    n
}

fn round_clamp(v: f64, lo: i64, hi: i64) -> i64 {
    (v.round() as i64).clamp(lo, hi)
}

fn round_floor(v: f64, lo: u64) -> u64 {
    (v.round() as u64).max(lo)
}

/// Templated recommendations per category
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Ideal, three gaps, up to five actions
    pub fn generate(
        &self,
        category: &Category,
        scores: &DimensionScores,
        quantities: &[Quantity],
        chooser: &mut dyn Chooser,
    ) -> Recommendations {
        Recommendations {
            ideal: self.ideal(category, quantities),
            gaps: self.gaps(scores),
            actions: self.actions(category, scores, quantities, chooser),
        }
    }

    /// Ideal-state narrative for the category
    pub fn ideal(&self, category: &Category, quantities: &[Quantity]) -> String {
        let n = working_numbers(quantities);
        let (freq, min) = (n.freq_per_week, n.minutes);
        match category.template_key() {
            Category::Study => format!(
                "6ヶ月後、週{freq}回×{min}分の学習が自動化。明確な範囲（例: 単語/長文/リスニング）を日別に配分し、朝の固定スロットに実施。記録と週次レビューで改善サイクルを回し、定量目標（例: TOEIC {}点）を達成。",
                n.points
            ),
            Category::Health => format!(
                "12週間後、週{freq}回×{min}分の運動ルーティンが定着。睡眠と食事の基本を整え、前日夜にウェア/水分をセット。実施は同じ時間帯、タイマーで計測、記録と週次レビューで負荷を段階的に増やす。"
            ),
            Category::Work => format!(
                "四半期内に、最重要プロジェクトへ毎日{min}分の集中ブロックを確保。週{freq}回の見直しで優先度を整理、会議はバッチ化。可視化ボードで進捗を管理し、締切に向けて段階ゴールを達成。"
            ),
            Category::Finance => format!(
                "3ヶ月後、月{}円の自動貯金と支出の可視化が定着。固定費を見直し、週{freq}回の家計チェックで予算内に運用。投資は定額積立で感情を排除。",
                n.amount
            ),
            Category::Relationship => format!(
                "次の8週間、週{freq}回の短い連絡/感謝メッセージと、月1回の質の高い時間を設計。相手の関心事リストを作成し、会話の質を上げる。"
            ),
            Category::Habit => format!(
                "6週間で、毎日{min}分の小さな行動が自動化。トリガー（行動の直前）を固定し、摩擦を徹底削減。記録と連続日数で動機づけ、徐々に拡張。"
            ),
            _ => format!(
                "今後12週間で、週{freq}回×{min}分の集中行動を固定。実施時間帯と場所を一定にし、妨げ要因を先回り除去。記録と週次レビューで改善を継続。"
            ),
        }
    }

    /// One explanatory sentence for each of the three weakest dimensions
    pub fn gaps(&self, scores: &DimensionScores) -> Vec<String> {
        scores
            .ranked_ascending()
            .into_iter()
            .take(WEAKEST_COUNT)
            .map(|d| gap_sentence(d).to_string())
            .collect()
    }

    /// Per-dimension actions for the weakest three, then generic actions, max 5
    pub fn actions(
        &self,
        category: &Category,
        scores: &DimensionScores,
        quantities: &[Quantity],
        chooser: &mut dyn Chooser,
    ) -> Vec<String> {
        let n = working_numbers(quantities);
        let category = category.template_key();

        let mut actions: Vec<String> = scores
            .ranked_ascending()
            .into_iter()
            .take(WEAKEST_COUNT)
            .map(|d| dimension_action(d, category, &n, chooser))
            .collect();

        let generic = [
            format!(
                "時間固定: {}に{}分、週{}回のスロットを2週間確保（カレンダー/リマインダー）。",
                pick(chooser, &TIME_SLOTS),
                n.minutes,
                n.freq_per_week
            ),
            format!(
                "行動を極小化: できる最小単位に分割（例: {}）。",
                if *category == Category::Study { "単語10個" } else { "5分ウォームアップ" }
            ),
            "障害の先回り: 「疲れ/誘惑/場所」対策を前夜に準備（服/道具/アプリ起動）。".to_string(),
            "記録: 実施/未実施のみ記録（○/×）。週1回、改善点を1つだけ決める。".to_string(),
        ];
        actions.extend(generic);
        actions.truncate(MAX_ACTIONS);
        actions
    }
}

fn gap_sentence(dim: Dimension) -> &'static str {
    match dim {
        Dimension::Clarity => "数値と期限を伴う目標の言語化が不足。1つの指標と締切を決める。",
        Dimension::Execution => "行動のハードルが高い/障害が未対策。行動を小さくし、妨げを事前に除去。",
        Dimension::Planning => "時間帯や頻度が不安定。固定スロットと週次の見直しを設定。",
        Dimension::Resources => "場所/ツール/事前準備が曖昧。物理的・デジタル環境を整える。",
        Dimension::Feedback => "記録/レビューの仕組みがない。簡易な記録と週次レビューを導入。",
    }
}

fn dimension_action(
    dim: Dimension,
    category: &Category,
    n: &WorkingNumbers,
    chooser: &mut dyn Chooser,
) -> String {
    match dim {
        Dimension::Clarity => format!(
            "数値×期限の目標を1つ: 「{}を{}までに{}」と紙/メモに固定。",
            category.label(),
            pick(chooser, &DEADLINES),
            target_label(category, n)
        ),
        Dimension::Execution => format!(
            "トリガー設計: 既存習慣の直後に紐付け（例: 歯磨き後に{}）。連続日数を可視化。",
            short_action(category)
        ),
        Dimension::Planning => format!(
            "週次レビューの予約: 毎週{}に15分、進捗チェックと翌週の予約を実施。",
            pick(chooser, &WEEKDAYS)
        ),
        Dimension::Resources => format!(
            "環境の摩擦除去: {}を常設し、1タップ/1手で開始できる状態にする。",
            environment_prep(category)
        ),
        Dimension::Feedback => format!(
            "ログの自動化: {}に○/×だけ記録。2週間ごとに小改善を1つ。",
            log_tool(category)
        ),
    }
}

fn target_label(category: &Category, n: &WorkingNumbers) -> String {
    match category {
        // chapters = round(freq / 2), at least 1
        Category::Study => format!(
            "TOEIC {}点/参考書{}章",
            n.points,
            ((n.freq_per_week + 1) / 2).max(1)
        ),
        Category::Health => format!("{}回運動/体幹{}分", n.freq_per_week, n.minutes),
        Category::Work => format!("最重要タスク{}分×{}回/週", n.minutes, n.freq_per_week),
        Category::Finance => format!("月{}円の黒字維持", n.amount),
        Category::Relationship => format!("週{}回の連絡と月1回の時間", n.freq_per_week),
        _ => format!("週{}回×{}分の実行", n.freq_per_week, n.minutes),
    }
}

fn short_action(category: &Category) -> &'static str {
    match category {
        Category::Study => "3分音読",
        Category::Health => "1分ストレッチ",
        Category::Work => "30秒でタスク起票",
        Category::Finance => "家計アプリ起動",
        Category::Relationship => "30秒で感謝メモ",
        _ => "1分だけ着手",
    }
}

fn environment_prep(category: &Category) -> &'static str {
    match category {
        Category::Study => "教材/タイマー/イヤホン",
        Category::Health => "ウェア/シューズ/水",
        Category::Work => "集中用デスク/Do Not Disturb",
        Category::Finance => "家計アプリ/レシート箱",
        Category::Relationship => "連絡先リスト/話題メモ",
        _ => "道具/アプリのショートカット",
    }
}

fn log_tool(category: &Category) -> &'static str {
    match category {
        Category::Finance => "家計簿アプリ",
        _ => "メモ/スプレッドシート",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn q(value: f64, unit: Unit) -> Quantity {
        Quantity::new(value, unit)
    }

    #[test]
    fn test_working_number_defaults() {
        assert_eq!(
            working_numbers(&[]),
            WorkingNumbers { minutes: 20, freq_per_week: 3, points: 700, amount: 20_000 }
        );
    }

    #[test]
    fn test_working_number_clamps() {
        let n = working_numbers(&[
            q(2.0, Unit::Minutes),
            q(10.0, Unit::Count),
            q(100.0, Unit::Points),
            q(300.0, Unit::Yen),
        ]);
        assert_eq!(n, WorkingNumbers { minutes: 5, freq_per_week: 7, points: 200, amount: 1_000 });
    }

    #[test]
    fn test_hours_and_man_yen() {
        let n = working_numbers(&[q(1.5, Unit::Hours), q(3.0, Unit::ManYen)]);
        assert_eq!(n.minutes, 90);
        assert_eq!(n.amount, 30_000);
        let n = working_numbers(&[q(5.0, Unit::Hours)]);
        assert_eq!(n.minutes, 180);
    }

    #[test]
    fn test_last_quantity_wins() {
        let n = working_numbers(&[q(30.0, Unit::Minutes), q(45.0, Unit::Minutes)]);
        assert_eq!(n.minutes, 45);
    }

    #[test]
    fn test_weeks_set_frequency_and_kg_ignored() {
        let n = working_numbers(&[q(4.0, Unit::Weeks), q(5.0, Unit::Kilograms)]);
        assert_eq!(n.freq_per_week, 4);
        assert_eq!(n.minutes, 20);
    }

    #[test]
    fn test_ideal_templates() {
        let gen = RecommendationGenerator::new();
        let ideal = gen.ideal(&Category::Study, &[q(30.0, Unit::Minutes), q(800.0, Unit::Points)]);
        assert!(ideal.starts_with("6ヶ月後、週3回×30分の学習が自動化。"));
        assert!(ideal.contains("TOEIC 800点"));

        let ideal = gen.ideal(&Category::Finance, &[q(5.0, Unit::ManYen)]);
        assert!(ideal.starts_with("3ヶ月後、月50000円の自動貯金"));
    }

    #[test]
    fn test_unrecognized_category_uses_other_template() {
        let gen = RecommendationGenerator::new();
        assert_eq!(
            gen.ideal(&Category::from("hobby"), &[]),
            gen.ideal(&Category::Other, &[])
        );
    }

    #[test]
    fn test_gaps_three_weakest_in_stable_order() {
        let gen = RecommendationGenerator::new();
        let scores = DimensionScores::from_raw(20, 50, 40, 35, 30);
        assert_eq!(
            gen.gaps(&scores),
            vec![
                gap_sentence(Dimension::Clarity).to_string(),
                gap_sentence(Dimension::Feedback).to_string(),
                gap_sentence(Dimension::Resources).to_string(),
            ]
        );
    }

    #[test]
    fn test_actions_exact_with_fixed_chooser() {
        let gen = RecommendationGenerator::new();
        let scores = DimensionScores::from_raw(20, 50, 40, 35, 30);
        let actions = gen.actions(&Category::Study, &scores, &[], &mut FixedChooser(0));
        assert_eq!(
            actions,
            vec![
                "数値×期限の目標を1つ: 「学習を今月末までにTOEIC 700点/参考書2章」と紙/メモに固定。".to_string(),
                "ログの自動化: メモ/スプレッドシートに○/×だけ記録。2週間ごとに小改善を1つ。".to_string(),
                "環境の摩擦除去: 教材/タイマー/イヤホンを常設し、1タップ/1手で開始できる状態にする。".to_string(),
                "時間固定: 朝7:00に20分、週3回のスロットを2週間確保（カレンダー/リマインダー）。".to_string(),
                "行動を極小化: できる最小単位に分割（例: 単語10個）。".to_string(),
            ]
        );
    }

    #[test]
    fn test_fixed_chooser_clamps_index() {
        let gen = RecommendationGenerator::new();
        let scores = DimensionScores::from_raw(60, 60, 20, 60, 60);
        let actions = gen.actions(&Category::Health, &scores, &[], &mut FixedChooser(99));
        assert_eq!(actions[0], "週次レビューの予約: 毎週日曜に15分、進捗チェックと翌週の予約を実施。");
        assert!(actions.iter().any(|a| a.starts_with("時間固定: 21:00に")));
        assert_eq!(actions.len(), 5);
    }

    #[test]
    fn test_random_chooser_stays_in_range() {
        let mut chooser = RandomChooser::seeded(7);
        for _ in 0..100 {
            assert!(chooser.choose_index(3) < 3);
        }
        assert_eq!(chooser.choose_index(0), 0);
    }

    #[test]
    fn test_generate_shapes() {
        let gen = RecommendationGenerator::new();
        let scores = DimensionScores::from_raw(20, 50, 40, 35, 30);
        let rec = gen.generate(&Category::Other, &scores, &[], &mut RandomChooser::new());
        assert!(!rec.ideal.is_empty());
        assert_eq!(rec.gaps.len(), 3);
        assert_eq!(rec.actions.len(), 5);
    }
}
