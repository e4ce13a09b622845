//! Basic Gemini client usage example

use gemini_client::{GeminiClient, GenerateContentRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GeminiClient::from_env()?;

    println!("=== Text Generation ===");
    let text = client
        .generate_text("gemini-flash-latest", "What is Rust in one sentence?")
        .await?;
    println!("Response: {}", text);

    println!("\n=== JSON Output ===");
    let request = GenerateContentRequest::from_prompt(
        "List two colours as a JSON array of strings. Output JSON only.",
    )
    .response_mime_type("application/json")
    .temperature(0.2);
    let response = client
        .generate_content("gemini-flash-latest", &request)
        .await?;
    println!("Response: {}", response.text);

    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_token_count);
    }

    Ok(())
}
