//! Narrative text for trace events.

use super::{Event, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for narrative text and labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Ja,
            Locale::Ja => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            other => Err(format!("unknown locale '{}' (expected en or ja)", other)),
        }
    }
}

/// Describe what happened at an event
pub fn describe(event: &Event, locale: Locale) -> String {
    match locale {
        Locale::En => describe_en(event),
        Locale::Ja => describe_ja(event),
    }
}

fn describe_en(event: &Event) -> String {
    match *event {
        Event::Start => "The array is ready. Starting selection sort.".to_string(),
        Event::SeedMin { index, value } => format!(
            "Take the value {} at index {} as the tentative minimum.",
            value, index
        ),
        Event::Compare {
            index,
            value,
            min_value,
            ..
        } => format!(
            "Compare the current minimum {} with the value {} at index {}.",
            min_value, value, index
        ),
        Event::NewMin { value, .. } => {
            format!("Found a smaller value {}. Updating the minimum.", value)
        }
        Event::Swap { index, value, .. } => format!(
            "Swap the minimum {} into the front of the unsorted part (index {}).",
            value, index
        ),
        Event::NoSwap { index } => format!(
            "Index {} already holds the minimum, so no swap is needed.",
            index
        ),
        Event::PassComplete { settled } => format!(
            "The leftmost {} element(s) are now in their final sorted place.",
            settled
        ),
        Event::Finished => "All elements are sorted in ascending order!".to_string(),
    }
}

fn describe_ja(event: &Event) -> String {
    match *event {
        Event::Start => "配列の準備ができました。選択ソートを開始します。".to_string(),
        Event::SeedMin { index, value } => format!(
            "インデックス {} の値 {} を暫定の最小値にします。",
            index, value
        ),
        Event::Compare {
            index,
            value,
            min_value,
            ..
        } => format!(
            "暫定の最小値 {} と、インデックス {} の値 {} を比較します。",
            min_value, index, value
        ),
        Event::NewMin { value, .. } => {
            format!("より小さい値 {} が見つかりました。最小値を更新します。", value)
        }
        Event::Swap { index, value, .. } => format!(
            "最小値 {} を、未整列部分の先頭（インデックス {}）と入れ替えます。",
            value, index
        ),
        Event::NoSwap { index } => format!(
            "インデックス {} がすでに最小値なので、入れ替えは行いません。",
            index
        ),
        Event::PassComplete { settled } => {
            format!("左端から {} 個の要素が整列済みとして確定しました。", settled)
        }
        Event::Finished => "すべての要素が昇順に並び替えられました！".to_string(),
    }
}

/// Short label for a phase, used as a badge in the UI
pub fn phase_label(phase: Phase, locale: Locale) -> &'static str {
    match (locale, phase) {
        (Locale::En, Phase::Init) => "READY",
        (Locale::En, Phase::Comparing) => "COMPARE",
        (Locale::En, Phase::FoundNewMin) => "MIN",
        (Locale::En, Phase::Swapping) => "SWAP",
        (Locale::En, Phase::PassComplete) => "SORTED",
        (Locale::En, Phase::Complete) => "DONE",
        (Locale::Ja, Phase::Init) => "準備",
        (Locale::Ja, Phase::Comparing) => "比較",
        (Locale::Ja, Phase::FoundNewMin) => "最小値",
        (Locale::Ja, Phase::Swapping) => "交換",
        (Locale::Ja, Phase::PassComplete) => "確定",
        (Locale::Ja, Phase::Complete) => "完了",
    }
}

/// Background on the algorithm, shown beside the steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub title: &'static str,
    pub summary: &'static str,
    pub complexity: &'static str,
    pub stability: &'static str,
}

pub fn guide(locale: Locale) -> Guide {
    match locale {
        Locale::En => Guide {
            title: "Selection Sort",
            summary: "Find the smallest value in the unsorted part and swap it into \
                      the position right after the sorted part. Repeat until nothing \
                      is left unsorted.",
            complexity: "O(N²)",
            stability: "Unstable",
        },
        Locale::Ja => Guide {
            title: "選択ソート",
            summary: "未整列の部分から一番小さい値（最小値）を探し出し、それを整列済みの直後の\
                      位置と入れ替える作業を繰り返します。「最小値を選んでいく」シンプルな手法です。",
            complexity: "O(N²)",
            stability: "不安定",
        },
    }
}
