//! Common types for inference requests

/// Role-marker tokens that indicate the model has started inventing the
/// next exchange. Generation is truncated as soon as one is emitted.
pub const STOP_SEQUENCES: &[&str] = &["الطالب:", "المعلم:", "السؤال:", "الإجابة:"];

/// Decoding parameters sent with every generation call.
///
/// The values are fixed per client; they are not tunable per request.
#[derive(Debug, Clone)]
pub struct DecodingParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub stop_sequences: Vec<String>,
}

impl Default for DecodingParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 600,
            temperature: 0.7,
            top_p: 0.9,
            repetition_penalty: 1.1,
            stop_sequences: STOP_SEQUENCES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A single text-generation request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub params: DecodingParams,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            params: DecodingParams::default(),
        }
    }
}
