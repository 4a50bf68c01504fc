//! Prompt assembly for tagline generation.

use tagline_rs_protocol::GenerateRequest;

/// Build the single instruction sent to the completion provider.
///
/// Every request field is embedded; the model is asked for exactly
/// `count` lines with nothing else around them.
pub fn build_prompt(request: &GenerateRequest) -> String {
    let count = request.count;
    let noun = if count == 1 { "tagline" } else { "taglines" };
    format!(
        "Suggest {count} catchy {tone} marketing {noun} for the following product.\n\
         Name: {name}\n\
         Description: {description}\n\
         Target Audience: {audience}\n\
         Tone: {tone}\n\
         Return exactly {count} {noun}, one per line, list only.",
        tone = request.tone,
        name = request.name.trim(),
        description = request.description.trim(),
        audience = request.audience.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::build_prompt;
    use pretty_assertions::assert_eq;
    use tagline_rs_protocol::{GenerateRequest, Tone};

    #[test]
    fn embeds_every_field() {
        let request = GenerateRequest {
            name: "Foo".to_string(),
            description: "A tiny robot vacuum".to_string(),
            audience: "busy parents".to_string(),
            tone: Tone::Funny,
            count: 2,
        };
        assert_eq!(
            build_prompt(&request),
            "Suggest 2 catchy funny marketing taglines for the following product.\n\
             Name: Foo\n\
             Description: A tiny robot vacuum\n\
             Target Audience: busy parents\n\
             Tone: funny\n\
             Return exactly 2 taglines, one per line, list only."
        );
    }

    #[test]
    fn singular_count_reads_naturally() {
        let request = GenerateRequest {
            name: "Foo".to_string(),
            description: String::new(),
            audience: String::new(),
            tone: Tone::Luxury,
            count: 1,
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Return exactly 1 tagline, one per line, list only."));
    }
}
