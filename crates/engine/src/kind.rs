//! Browser engine kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Browser engine used for launch operations.
///
/// `Edge` is carried for configuration compatibility but no launch path
/// exists for it; factories reject it with an unsupported-kind error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    /// Chromium-based browser (Chrome)
    #[default]
    Chromium,
    /// Mozilla Firefox
    Firefox,
    /// WebKit (Safari)
    Webkit,
    /// Microsoft Edge
    #[serde(rename = "msedge")]
    Edge,
}

impl BrowserKind {
    /// Engine-facing name, as passed through to launch options.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
            BrowserKind::Edge => "msedge",
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            "msedge" | "edge" => Ok(BrowserKind::Edge),
            other => Err(format!("unknown browser kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("chrome".parse::<BrowserKind>(), Ok(BrowserKind::Chromium));
        assert_eq!("safari".parse::<BrowserKind>(), Ok(BrowserKind::Webkit));
        assert_eq!("MSEDGE".parse::<BrowserKind>(), Ok(BrowserKind::Edge));
        assert!("opera".parse::<BrowserKind>().is_err());
    }

    #[test]
    fn serializes_to_engine_names() {
        assert_eq!(
            serde_json::to_string(&BrowserKind::Edge).unwrap(),
            "\"msedge\""
        );
        assert_eq!(
            serde_json::to_string(&BrowserKind::Chromium).unwrap(),
            "\"chromium\""
        );
    }
}
