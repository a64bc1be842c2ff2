//! Centralized model catalog
//!
//! All selectable models live here so adding one is a single-edit change.
//! Every entry is served through the Hugging Face Inference API; the
//! catalog only varies in model id and display metadata.

/// Model family, used for display grouping in the model picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    Llama,
    DialoGpt,
    Gemma,
    Zephyr,
    Mixtral,
}

impl ModelFamily {
    pub fn display_name(self) -> &'static str {
        match self {
            ModelFamily::Llama => "Llama 3.2",
            ModelFamily::DialoGpt => "DialoGPT",
            ModelFamily::Gemma => "Gemma",
            ModelFamily::Zephyr => "Zephyr",
            ModelFamily::Mixtral => "Mixtral",
        }
    }
}

/// Model definition with metadata
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Hub model id, e.g. `meta-llama/Llama-3.2-3B-Instruct`
    pub id: &'static str,
    /// Family for display grouping
    pub family: ModelFamily,
    /// One-line description shown in the model picker
    pub description: &'static str,
}

/// All selectable models
pub fn all_models() -> &'static [ModelDef] {
    &[
        ModelDef {
            id: "meta-llama/Llama-3.2-3B-Instruct",
            family: ModelFamily::Llama,
            description: "سريع وذكي، مناسب للمحادثات العامة",
        },
        ModelDef {
            id: "microsoft/DialoGPT-medium",
            family: ModelFamily::DialoGpt,
            description: "متخصص في المحادثات الطبيعية",
        },
        ModelDef {
            id: "google/gemma-2b-it",
            family: ModelFamily::Gemma,
            description: "خفيف وسريع، موفر للموارد",
        },
        ModelDef {
            id: "HuggingFaceH4/zephyr-7b-beta",
            family: ModelFamily::Zephyr,
            description: "متوازن بين السرعة والجودة",
        },
        ModelDef {
            id: "mistralai/Mixtral-8x7B-Instruct-v0.1",
            family: ModelFamily::Mixtral,
            description: "الأقوى والأكثر تقدماً",
        },
    ]
}

/// Look up a catalog entry by hub model id
pub fn find_model(id: &str) -> Option<&'static ModelDef> {
    all_models().iter().find(|m| m.id == id)
}

/// The model used when nothing else is configured
pub fn default_model() -> &'static ModelDef {
    &all_models()[0]
}
