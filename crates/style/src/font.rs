use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Font weight as offered by the editor.
///
/// The editor only produces the six named weights. `Numeric` carries any other value so a
/// hand-written record can still be represented; the compiler emits nothing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Maps a number onto the named weights, keeping unknown values as `Numeric`.
    pub fn from_numeric(n: u16) -> Self {
        match n {
            300 => FontWeight::Light,
            400 => FontWeight::Normal,
            500 => FontWeight::Medium,
            600 => FontWeight::SemiBold,
            700 => FontWeight::Bold,
            800 => FontWeight::ExtraBold,
            other => FontWeight::Numeric(other),
        }
    }

    /// Whether this is one of the six weights the editor can produce.
    pub fn is_named(&self) -> bool {
        !matches!(self, FontWeight::Numeric(_))
    }

    /// Parse a font weight from a string (e.g., "bold", "600")
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(FontWeight::Light),
            "normal" | "regular" => Ok(FontWeight::Normal),
            "medium" => Ok(FontWeight::Medium),
            "semibold" | "semi-bold" => Ok(FontWeight::SemiBold),
            "bold" => Ok(FontWeight::Bold),
            "extrabold" | "extra-bold" => Ok(FontWeight::ExtraBold),
            other => other
                .parse::<u16>()
                .map(FontWeight::from_numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }
}

impl Serialize for FontWeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.numeric_value())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Num(u16),
            Str(String),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Num(n) => Ok(FontWeight::from_numeric(n)),
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
        }
    }
}
