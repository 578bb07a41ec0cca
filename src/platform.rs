use std::env;
use std::fmt;

pub const PLATFORM_ENV_VAR: &str = "OS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    SunOs,
    Linux,
    Windows,
    MacOs,
    Other,
}

impl Platform {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "SunOS" => Self::SunOs,
            "Linux" => Self::Linux,
            "Windows" => Self::Windows,
            "MacOS" => Self::MacOs,
            _ => Self::Other,
        }
    }

    pub fn from_env() -> Option<Self> {
        env::var(PLATFORM_ENV_VAR).ok().map(|raw| Self::parse(&raw))
    }

    // Hook for platform-conditional skips. No case is excluded on any
    // platform today, so every outcome stays platform-independent.
    pub fn skips_case(self, _case_name: &str) -> bool {
        false
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SunOs => "SunOS",
            Self::Linux => "Linux",
            Self::Windows => "Windows",
            Self::MacOs => "MacOS",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
