//! Test fixtures and constants.

/// Palette documents in the shapes the enrich command accepts
pub mod palettes {
    /// Generative-service response with the three primaries
    pub const PRIMARIES_RESPONSE: &str = r##"{
  "palette": [
    {"hex": "#FF0000", "name": "Red", "description": "poppy petals"},
    {"hex": "#00FF00", "name": "Green", "description": "stem"},
    {"hex": "#0000FF", "name": "Blue", "description": "sky reflection"}
  ]
}"##;

    /// Bare array with an extra field on the second item
    pub const BARE_WITH_EXTRAS: &str = r##"[
  {"hex": "#F4F3EE", "name": "Paper", "description": "background"},
  {"hex": "#222120", "name": "Charcoal", "description": "lettering", "source": {"image": 2}}
]"##;

    /// Second item carries a truncated hex
    pub const MALFORMED_SECOND: &str = r##"[
  {"hex": "#FFD100", "name": "Sun", "description": "centre"},
  {"hex": "#12", "name": "Broken", "description": "truncated"}
]"##;
}

/// Config files
pub mod configs {
    /// Two-entry paint and ink catalogs: everything resolves to black or white
    pub const TWO_TONE: &str = r##"
catalogs:
  paints:
    - name: Lamp Black
      hex: "#000000"
    - name: Flake White
      hex: "#FFFFFF"
  inks:
    - code: K
      name: Black
      hex: "#000000"
    - code: W
      name: White
      hex: "#FFFFFF"
output:
  pretty: false
"##;

    /// Empty ink override, which must be rejected
    pub const EMPTY_INKS: &str = "catalogs:\n  inks: []\n";

    /// Paint override with a 3-digit shorthand entry
    pub const SHORTHAND_PAINT: &str = r##"
catalogs:
  paints:
    - name: Smudge
      hex: "#ABC"
"##;
}
