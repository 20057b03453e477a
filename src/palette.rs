use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};

/// Built-in vibes. Enumeration order decides which vibe a hash lands on.
const VIBE_TABLE: [(&str, [&str; 5]); 9] = [
    ("ocean", ["#06b6d4", "#0891b2", "#0e7490", "#155e75", "#164e63"]),
    ("sunset", ["#f97316", "#fb923c", "#fbbf24", "#dc2626", "#ea580c"]),
    ("fire", ["#ef4444", "#f97316", "#fb923c", "#fbbf24", "#dc2626"]),
    ("forest", ["#22c55e", "#16a34a", "#15803d", "#166534", "#84cc16"]),
    ("bubble", ["#ec4899", "#f0abfc", "#db2777", "#c026d3", "#e879f9"]),
    ("daybreak", ["#fbbf24", "#fde047", "#facc15", "#f59e0b", "#fb923c"]),
    ("crystal", ["#a78bfa", "#c4b5fd", "#8b5cf6", "#a855f7", "#d8b4fe"]),
    ("ice", ["#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#e0f2fe"]),
    ("stealth", ["#6b7280", "#9ca3af", "#4b5563", "#374151", "#1f2937"]),
];

static VIBES: LazyLock<PaletteCatalog> = LazyLock::new(|| PaletteCatalog {
    palettes: VIBE_TABLE
        .iter()
        .map(|(name, colors)| Palette {
            name: name.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        })
        .collect(),
});

/// Wire form of a [`Palette`], checked on the way in.
#[derive(Serialize, Deserialize)]
struct PaletteDef {
    name: String,
    colors: Vec<String>,
}

/// A named, ordered, non-empty list of hex-RGB colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaletteDef", into = "PaletteDef")]
pub struct Palette {
    name: String,
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette, rejecting an empty color list.
    pub fn new<I, S>(name: impl Into<String>, colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(AvatarError::EmptyPalette { name });
        }
        Ok(Self { name, colors })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Colors in selection order. Never empty.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Color at `seed mod len`.
    pub fn color_for(&self, seed: u64) -> &str {
        let idx = (seed % self.colors.len() as u64) as usize;
        &self.colors[idx]
    }

    /// Whether `color` is one of this palette's colors.
    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

impl TryFrom<PaletteDef> for Palette {
    type Error = AvatarError;

    fn try_from(def: PaletteDef) -> Result<Self> {
        Self::new(def.name, def.colors)
    }
}

impl From<Palette> for PaletteDef {
    fn from(palette: Palette) -> Self {
        Self {
            name: palette.name,
            colors: palette.colors,
        }
    }
}

/// Read-only, ordered set of palettes.
///
/// Every palette is non-empty, all palettes share one length, and names are
/// unique. These hold for any value that exists, since construction (and
/// deserialization) goes through [`Palette::new`] and [`PaletteCatalog::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Palette>", into = "Vec<Palette>")]
pub struct PaletteCatalog {
    palettes: Vec<Palette>,
}

impl PaletteCatalog {
    /// Build a catalog, rejecting an empty list, palettes whose length differs
    /// from the first one, and repeated names.
    pub fn new(palettes: Vec<Palette>) -> Result<Self> {
        let Some(first) = palettes.first() else {
            return Err(AvatarError::EmptyCatalog);
        };
        let expected = first.colors.len();

        let mut seen = HashSet::new();
        for palette in &palettes {
            if palette.colors.len() != expected {
                return Err(AvatarError::PaletteLengthMismatch {
                    name: palette.name.clone(),
                    expected,
                    actual: palette.colors.len(),
                });
            }
            if !seen.insert(palette.name.as_str()) {
                return Err(AvatarError::DuplicateVibe {
                    name: palette.name.clone(),
                });
            }
        }

        Ok(Self { palettes })
    }

    /// The built-in catalog.
    pub fn vibes() -> &'static PaletteCatalog {
        &VIBES
    }

    /// Parse a catalog from a JSON array of `{ "name", "colors" }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let palettes: Vec<Palette> = serde_json::from_str(json)?;
        Self::new(palettes)
    }

    /// Number of vibes.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Vibes in enumeration order.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Vibe names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    /// Look up a vibe by name.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// Look up a vibe by name, failing with the list of valid names.
    pub fn lookup(&self, name: &str) -> Result<&Palette> {
        self.get(name).ok_or_else(|| AvatarError::UnknownVibe {
            name: name.to_string(),
            available: self.names().map(str::to_string).collect(),
        })
    }

    /// Palette at `hash mod len`, in enumeration order.
    pub fn select(&self, hash: u32) -> &Palette {
        &self.palettes[hash as usize % self.palettes.len()]
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        PaletteCatalog::vibes().clone()
    }
}

impl TryFrom<Vec<Palette>> for PaletteCatalog {
    type Error = AvatarError;

    fn try_from(palettes: Vec<Palette>) -> Result<Self> {
        Self::new(palettes)
    }
}

impl From<PaletteCatalog> for Vec<Palette> {
    fn from(catalog: PaletteCatalog) -> Self {
        catalog.palettes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order() {
        let names: Vec<&str> = PaletteCatalog::vibes().names().collect();
        assert_eq!(
            names,
            [
                "ocean", "sunset", "fire", "forest", "bubble", "daybreak", "crystal", "ice",
                "stealth"
            ]
        );
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let vibes = PaletteCatalog::vibes();
        let rebuilt = PaletteCatalog::new(vibes.palettes().to_vec()).unwrap();
        assert_eq!(&rebuilt, vibes);
        assert!(vibes.palettes().iter().all(|p| p.colors().len() == 5));
    }

    #[test]
    fn select_wraps_by_catalog_length() {
        let vibes = PaletteCatalog::vibes();
        assert_eq!(vibes.select(0).name(), "ocean");
        assert_eq!(vibes.select(8).name(), "stealth");
        assert_eq!(vibes.select(9).name(), "ocean");
        assert_eq!(vibes.select(3105).name(), vibes.palettes()[3105 % 9].name());
    }

    #[test]
    fn lookup_unknown_vibe_names_it() {
        let err = PaletteCatalog::vibes().lookup("neon").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'neon'"), "{msg}");
        assert!(msg.contains("ocean, sunset"), "{msg}");
    }

    #[test]
    fn rejects_invalid_catalogs() {
        assert!(matches!(
            PaletteCatalog::new(vec![]),
            Err(AvatarError::EmptyCatalog)
        ));
        assert!(matches!(
            PaletteCatalog::new(vec![
                Palette::new("a", ["#000000", "#111111"]).unwrap(),
                Palette::new("b", ["#222222"]).unwrap(),
            ]),
            Err(AvatarError::PaletteLengthMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
        assert!(matches!(
            PaletteCatalog::new(vec![
                Palette::new("a", ["#000000"]).unwrap(),
                Palette::new("a", ["#111111"]).unwrap(),
            ]),
            Err(AvatarError::DuplicateVibe { .. })
        ));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = Palette::new("void", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, AvatarError::EmptyPalette { ref name } if name == "void"));
        assert_eq!(err.to_string(), "vibe 'void' has no colors");

        let parsed: std::result::Result<Palette, _> =
            serde_json::from_str(r#"{"name":"void","colors":[]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn from_json_validates() {
        let catalog =
            PaletteCatalog::from_json(r##"[{"name":"mono","colors":["#000000","#ffffff"]}]"##)
                .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.select(12345).name(), "mono");

        assert!(matches!(
            PaletteCatalog::from_json("[]"),
            Err(AvatarError::EmptyCatalog)
        ));
        assert!(matches!(
            PaletteCatalog::from_json(r#"[{"name":"void","colors":[]}]"#),
            Err(AvatarError::Json(_))
        ));
        assert!(matches!(
            PaletteCatalog::from_json("{"),
            Err(AvatarError::Json(_))
        ));
    }

    #[test]
    fn serde_round_trip_keeps_order() {
        let json = serde_json::to_string(PaletteCatalog::vibes()).unwrap();
        let parsed: PaletteCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, PaletteCatalog::vibes());
    }

    #[test]
    fn color_for_uses_modulo() {
        let ocean = PaletteCatalog::vibes().lookup("ocean").unwrap();
        assert_eq!(ocean.color_for(0), "#06b6d4");
        assert_eq!(ocean.color_for(7), "#0e7490");
        assert!(ocean.contains("#164e63"));
        assert!(!ocean.contains("#ef4444"));
    }
}
