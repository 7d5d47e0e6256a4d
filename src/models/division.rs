//! Contest division model

use serde::{Deserialize, Serialize};

/// Codeforces rated division a contest is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Div1,
    Div2,
    Div3,
    Div4,
}

impl Division {
    /// All divisions in processing order
    pub const ALL: [Division; 4] = [Self::Div1, Self::Div2, Self::Div3, Self::Div4];

    /// Classify a contest by its name.
    ///
    /// Case-insensitive, first match wins:
    /// 1. "div. 1" without "div. 2"
    /// 2. "div. 2" without "div. 1"
    /// 3. "div. 3"
    /// 4. "div. 4"
    ///
    /// Anything else (including combined "Div. 1 + Div. 2" rounds) is `None`
    /// and the contest is never stored.
    pub fn classify(contest_name: &str) -> Option<Self> {
        let name = contest_name.to_lowercase();
        let has_div1 = name.contains("div. 1");
        let has_div2 = name.contains("div. 2");

        if has_div1 && !has_div2 {
            Some(Self::Div1)
        } else if has_div2 && !has_div1 {
            Some(Self::Div2)
        } else if name.contains("div. 3") {
            Some(Self::Div3)
        } else if name.contains("div. 4") {
            Some(Self::Div4)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div1 => "div1",
            Self::Div2 => "div2",
            Self::Div3 => "div3",
            Self::Div4 => "div4",
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
