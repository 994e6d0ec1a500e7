//! 千日手状態（RepetitionState）

use serde::{Deserialize, Serialize};

/// 千日手状態（常に現在の手番側から見た結果）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RepetitionState {
    /// 千日手ではない
    #[default]
    #[serde(rename = "no_repetition")]
    None,
    /// 通常の千日手（引き分け）
    #[serde(rename = "repetition")]
    Draw,
    /// 連続王手の千日手で勝ち（相手が王手をかけ続けた）
    #[serde(rename = "win_repetition")]
    Win,
    /// 連続王手の千日手で負け（自分が王手をかけ続けた）
    #[serde(rename = "loss_repetition")]
    Lose,
    /// 優等局面（同一盤面で手駒が増えている）
    #[serde(rename = "superior_repetition")]
    Superior,
    /// 劣等局面（同一盤面で手駒が減っている）
    #[serde(rename = "inferior_repetition")]
    Inferior,
}

impl RepetitionState {
    /// 千日手かどうか（通常の千日手または連続王手）
    #[inline]
    pub const fn is_repetition(self) -> bool {
        matches!(self, RepetitionState::Draw | RepetitionState::Win | RepetitionState::Lose)
    }

    /// 勝敗が決まる千日手かどうか
    #[inline]
    pub const fn is_decisive(self) -> bool {
        matches!(self, RepetitionState::Win | RepetitionState::Lose)
    }

    /// 優等/劣等局面かどうか
    #[inline]
    pub const fn is_superior_inferior(self) -> bool {
        matches!(self, RepetitionState::Superior | RepetitionState::Inferior)
    }

    /// 表示用の名前
    pub const fn as_str(self) -> &'static str {
        match self {
            RepetitionState::None => "no_repetition",
            RepetitionState::Draw => "repetition",
            RepetitionState::Win => "win_repetition",
            RepetitionState::Lose => "loss_repetition",
            RepetitionState::Superior => "superior_repetition",
            RepetitionState::Inferior => "inferior_repetition",
        }
    }
}

impl std::fmt::Display for RepetitionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
