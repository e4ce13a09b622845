//! Caption prompt and model-output parsing.

use super::models::{Campaign, CaptionRecord};
use crate::error::CaptionError;

/// Personas the model chooses from
pub const PERSONAS: [(&str, &str); 3] = [
    ("The Headline Bride", "All eyes on me. The main character energy."),
    ("The Global It-Girl", "Lagos party tonight, Paris fashion week tomorrow."),
    ("The Power Curve", "Executive presence, but make it feminine and bold."),
];

/// Persona name for the unified closing caption
pub const SIGNATURE_PERSONA: &str = "Tubo Woman Signature";

/// Words the brand never uses
pub const BANNED_WORDS: [&str; 3] = ["Modest", "Subtle", "Relaxed"];

/// Full prompt for one product: brand voice, personas, rules, output format.
pub fn build_prompt(product_name: &str, description: &str) -> String {
    let personas = PERSONAS
        .iter()
        .enumerate()
        .map(|(i, (name, tone))| format!("{}. {} (Tone: {})", i + 1, name, tone))
        .collect::<Vec<_>>()
        .join("\n");

    let banned = BANNED_WORDS
        .iter()
        .map(|w| format!("\"{}\"", w))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Role: Brand Voice Director for 'TUBO'.
Brand Voice: "The Snatched Waist." Unapologetic, High-Voltage, Sculptural, Celebratory.
Product: {product_name}
Specs: {description}

TASK:
1. Select TOP 3 Personas.
2. Write 3 Captions.
3. Write 1 "{signature}".

PERSONAS:
{personas}

CRITICAL INSTRUCTIONS:
- FOCUS ON THE SILHOUETTE: Use words like 'snatched', 'sculpted', 'corsetry', 'hourglass'.
- ENERGY: The Tubo woman enters the room and the room stops. Write with that confidence.
- BANNED WORDS: {banned}.

Output JSON ONLY:
[
    {{"persona": "Persona Name", "post": "Caption text..."}},
    ...
    {{"persona": "{signature}", "post": "The unified caption text..."}}
]
"#,
        product_name = product_name,
        description = description,
        signature = SIGNATURE_PERSONA,
        personas = personas,
        banned = banned,
    )
}

/// Body of a markdown code fence (```` ```json ```` or bare ```` ``` ````),
/// trimmed. Unfenced text is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let body = if let Some((_, rest)) = text.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else if let Some(rest) = text.trim_start().strip_prefix("```") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        text
    };
    body.trim()
}

/// Parse a model reply into a campaign.
pub fn parse_campaign(reply: &str) -> Result<Campaign, CaptionError> {
    let records: Vec<CaptionRecord> = serde_json::from_str(strip_code_fence(reply))?;
    if records.is_empty() {
        return Err(CaptionError::Provider("model returned no captions".into()));
    }
    Ok(Campaign::new(records))
}
