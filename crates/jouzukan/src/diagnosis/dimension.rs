use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of personality axes tracked by a profile.
pub const DIMENSION_COUNT: usize = 9;

/// Fixed personality axes. Declaration order is the enumeration order used
/// for every deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Respect,
    Warmth,
    Responsibility,
    UniversalTruth,
    DivineGuidance,
    Mission,
    HeavenlyWork,
    Thoroughness,
    Innovation,
}

impl Dimension {
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Respect,
        Dimension::Warmth,
        Dimension::Responsibility,
        Dimension::UniversalTruth,
        Dimension::DivineGuidance,
        Dimension::Mission,
        Dimension::HeavenlyWork,
        Dimension::Thoroughness,
        Dimension::Innovation,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Wire name used in JSON payloads and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Respect => "Respect",
            Dimension::Warmth => "Warmth",
            Dimension::Responsibility => "Responsibility",
            Dimension::UniversalTruth => "UniversalTruth",
            Dimension::DivineGuidance => "DivineGuidance",
            Dimension::Mission => "Mission",
            Dimension::HeavenlyWork => "HeavenlyWork",
            Dimension::Thoroughness => "Thoroughness",
            Dimension::Innovation => "Innovation",
        }
    }

    /// Short display label shown to respondents.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Respect => "みんなを尊重",
            Dimension::Warmth => "あったかハート",
            Dimension::Responsibility => "やりぬく力",
            Dimension::UniversalTruth => "正義と愛",
            Dimension::DivineGuidance => "不思議な運",
            Dimension::Mission => "未来への想い",
            Dimension::HeavenlyWork => "感謝の心",
            Dimension::Thoroughness => "キッチリ徹底",
            Dimension::Innovation => "新しいこと好き",
        }
    }

    /// Canned affirmation appended to the result comment.
    pub fn affirmation(self) -> &'static str {
        match self {
            Dimension::Respect => "相手を思いやる心は、信頼を築く最強の武器じゃ。",
            Dimension::Warmth => "その優しさが、まわりの空気をあたたかくしておるのう。",
            Dimension::Responsibility => "最後までやり遂げる力は、誰かが見ておるもんじゃよ。",
            Dimension::UniversalTruth => "正しさを愛するその心、とても美しいのう。",
            Dimension::DivineGuidance => {
                "不思議な力に守られておる。流れに身を任せるのもまた一興じゃ。"
            }
            Dimension::Mission => "遠い未来を思うその眼差しが、道を開いていくんじゃな。",
            Dimension::HeavenlyWork => "感謝の心を持つ者は、いつまでも愛されるもんじゃよ。",
            Dimension::Thoroughness => "細部へのこだわりが、神を宿らせるんじゃな。",
            Dimension::Innovation => "新しい風を吹かせるその勇気が、世界を変えていくんじゃ。",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension '{0}'")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownDimension(trimmed.to_string()))
    }
}
