//! Research-topic classification from title keywords.

use serde::{Deserialize, Serialize};

/// Closed set of research-topic labels. Every record carries one of these;
/// titles matching no rule fall through to [`Topic::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Microgravity Effects")]
    MicrogravityEffects,
    #[serde(rename = "Plant Growth")]
    PlantGrowth,
    #[serde(rename = "Bone & Muscle")]
    BoneAndMuscle,
    #[serde(rename = "Radiation Biology")]
    RadiationBiology,
    #[serde(rename = "Cellular Response")]
    CellularResponse,
    #[serde(rename = "Immune System")]
    ImmuneSystem,
    #[serde(rename = "Cardiovascular")]
    Cardiovascular,
    #[serde(rename = "Gene Expression")]
    GeneExpression,
    #[serde(rename = "Stem Cells & Regeneration")]
    StemCellsRegeneration,
    #[serde(rename = "Animal Models")]
    AnimalModels,
    #[serde(rename = "Other")]
    Other,
}

impl Topic {
    /// Classify a title. Rules are checked top to bottom; the first keyword
    /// hit wins. Earlier rules deliberately shadow later ones, e.g.
    /// "plant cell growth" resolves via the plant rule, never the cell rule.
    pub fn classify(title: &str) -> Self {
        let t = title.to_lowercase();
        if t.contains("microgravity") || t.contains("weightless")                          { Topic::MicrogravityEffects }
        else if t.contains("plant") || t.contains("arabidopsis") || t.contains("growth")   { Topic::PlantGrowth }
        else if t.contains("bone") || t.contains("muscle") || t.contains("skeletal")       { Topic::BoneAndMuscle }
        else if t.contains("radiation") || t.contains("cosmic ray")                        { Topic::RadiationBiology }
        else if t.contains("cell") || t.contains("cellular")                               { Topic::CellularResponse }
        else if t.contains("immune") || t.contains("immunology")                           { Topic::ImmuneSystem }
        else if t.contains("cardiovascular") || t.contains("heart")                        { Topic::Cardiovascular }
        else if t.contains("gene") || t.contains("dna") || t.contains("rna")               { Topic::GeneExpression }
        else if t.contains("stem cell") || t.contains("regenerat")                         { Topic::StemCellsRegeneration }
        else if t.contains("mouse") || t.contains("mice") || t.contains("rodent")          { Topic::AnimalModels }
        else                                                                               { Topic::Other }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::MicrogravityEffects   => "Microgravity Effects",
            Topic::PlantGrowth           => "Plant Growth",
            Topic::BoneAndMuscle         => "Bone & Muscle",
            Topic::RadiationBiology      => "Radiation Biology",
            Topic::CellularResponse      => "Cellular Response",
            Topic::ImmuneSystem          => "Immune System",
            Topic::Cardiovascular        => "Cardiovascular",
            Topic::GeneExpression        => "Gene Expression",
            Topic::StemCellsRegeneration => "Stem Cells & Regeneration",
            Topic::AnimalModels          => "Animal Models",
            Topic::Other                 => "Other",
        }
    }

    /// Reverse lookup for user-facing filter values. Returns `None` for
    /// unknown labels so callers can treat them as no-op predicates.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Microgravity Effects"      => Some(Topic::MicrogravityEffects),
            "Plant Growth"              => Some(Topic::PlantGrowth),
            "Bone & Muscle"             => Some(Topic::BoneAndMuscle),
            "Radiation Biology"         => Some(Topic::RadiationBiology),
            "Cellular Response"         => Some(Topic::CellularResponse),
            "Immune System"             => Some(Topic::ImmuneSystem),
            "Cardiovascular"            => Some(Topic::Cardiovascular),
            "Gene Expression"           => Some(Topic::GeneExpression),
            "Stem Cells & Regeneration" => Some(Topic::StemCellsRegeneration),
            "Animal Models"             => Some(Topic::AnimalModels),
            "Other"                     => Some(Topic::Other),
            _                           => None,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
