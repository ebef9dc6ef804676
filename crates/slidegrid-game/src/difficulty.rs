use std::str::FromStr;

/// Difficulty preset, fixing how deep a new game is shuffled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    /// 10 shuffle moves.
    #[display("easy")]
    Easy,
    /// 30 shuffle moves. The default.
    #[default]
    #[display("medium")]
    Medium,
    /// 50 shuffle moves.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All presets, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of random shuffle moves applied when a game starts.
    ///
    /// Each shuffle move is a uniform draw over all four directions, so
    /// the effective scramble depth is usually a little below this count.
    #[must_use]
    pub const fn shuffle_count(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Medium => 30,
            Self::Hard => 50,
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    /// Parses a difficulty label, case-insensitively.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| label.eq_ignore_ascii_case(&preset.to_string()))
            .ok_or_else(|| UnknownDifficulty {
                label: label.to_owned(),
            })
    }
}

/// An unrecognized difficulty label.
///
/// A caller-input error: no session state changes when it is raised, and
/// the rejected label is carried verbatim for the driver to report.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {label:?}, expected \"easy\", \"medium\", or \"hard\"")]
pub struct UnknownDifficulty {
    /// The rejected label.
    pub label: String,
}
