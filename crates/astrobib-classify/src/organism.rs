//! Organism extraction from title keywords.

use serde::{Deserialize, Serialize};

/// Closed set of organism labels, defaulting to [`Organism::Various`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Organism {
    #[serde(rename = "Human")]
    Human,
    #[serde(rename = "Mouse")]
    Mouse,
    #[serde(rename = "Arabidopsis")]
    Arabidopsis,
    #[serde(rename = "C. elegans")]
    CElegans,
    #[serde(rename = "Yeast")]
    Yeast,
    #[serde(rename = "Bacteria")]
    Bacteria,
    #[serde(rename = "Fruit Fly")]
    FruitFly,
    #[serde(rename = "Cell Culture")]
    CellCulture,
    #[serde(rename = "Various")]
    Various,
}

impl Organism {
    /// Classify a title; same first-match-wins dispatch as the topic rules.
    pub fn classify(title: &str) -> Self {
        let t = title.to_lowercase();
        if t.contains("human")                                    { Organism::Human }
        else if t.contains("mouse") || t.contains("mice")         { Organism::Mouse }
        else if t.contains("arabidopsis") || t.contains("plant")  { Organism::Arabidopsis }
        else if t.contains("elegans")                             { Organism::CElegans }
        else if t.contains("yeast")                               { Organism::Yeast }
        else if t.contains("bacteria") || t.contains("microbial") { Organism::Bacteria }
        else if t.contains("fly") || t.contains("drosophila")     { Organism::FruitFly }
        else if t.contains("cell") || t.contains("stem")          { Organism::CellCulture }
        else                                                      { Organism::Various }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Organism::Human       => "Human",
            Organism::Mouse       => "Mouse",
            Organism::Arabidopsis => "Arabidopsis",
            Organism::CElegans    => "C. elegans",
            Organism::Yeast       => "Yeast",
            Organism::Bacteria    => "Bacteria",
            Organism::FruitFly    => "Fruit Fly",
            Organism::CellCulture => "Cell Culture",
            Organism::Various     => "Various",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Human"        => Some(Organism::Human),
            "Mouse"        => Some(Organism::Mouse),
            "Arabidopsis"  => Some(Organism::Arabidopsis),
            "C. elegans"   => Some(Organism::CElegans),
            "Yeast"        => Some(Organism::Yeast),
            "Bacteria"     => Some(Organism::Bacteria),
            "Fruit Fly"    => Some(Organism::FruitFly),
            "Cell Culture" => Some(Organism::CellCulture),
            "Various"      => Some(Organism::Various),
            _              => None,
        }
    }
}

impl std::fmt::Display for Organism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
