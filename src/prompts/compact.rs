//! Word-limited emoji-tagged templates built from a shared skeleton plus
//! per-category instructions, output format, and word limit.

use super::PromptCategory;

struct CompactTemplate {
    instructions: &'static str,
    format_template: &'static str,
    word_limit: u32,
}

fn template_for(category: PromptCategory) -> CompactTemplate {
    match category {
        PromptCategory::PublicTransport => CompactTemplate {
            instructions:
                "Make transport info SHORT and CLEAR. Focus on practical steps and essential details.",
            format_template: "🚇 [Destination]

• COST: [Amount]
• TIME: [Duration]
• Steps: [Simple 1-2 step direction]
• Quick Tip: [Crucial, immediate advice]
• If Lost: [Simple instruction]",
            word_limit: 60,
        },
        PromptCategory::MuseumExhibit => CompactTemplate {
            instructions:
                "Make museum info SHORT and EXCITING. Focus on what makes it special and interesting.",
            format_template: "🏛️ [Exhibit Name]

• [What it is - 1 sentence]
• [Why special - 1 sentence]
• [Fun fact - 1 sentence]",
            word_limit: 50,
        },
        PromptCategory::RestaurantMenu => CompactTemplate {
            instructions:
                "Make food info SHORT and APPETIZING. Focus on what tourists will actually eat and enjoy.",
            format_template: "🍽️ [Restaurant Name]

• [What you get - 1 sentence]
• [Price] • [Special feature]
• [One tip]",
            word_limit: 50,
        },
        PromptCategory::CulturalCustoms => CompactTemplate {
            instructions:
                "Make cultural info SHORT and RESPECTFUL. Focus on essential customs and important warnings.",
            format_template: "🌍 [Country] Customs

• [Money - 1 sentence]
• [Dress - 1 sentence]
• [Behavior - 1 sentence]
• [Warning - if serious]",
            word_limit: 60,
        },
        PromptCategory::EmergencySafety => CompactTemplate {
            instructions:
                "Make safety info SHORT and CLEAR. Focus on emergency procedures and essential safety tips.",
            format_template: "🚨 Emergency Info

• [Emergency number]
• [What to do - 1 sentence]
• [Safety tip - 1 sentence]",
            word_limit: 50,
        },
        PromptCategory::CurrencyExchange => CompactTemplate {
            instructions:
                "Make money info SHORT and PRACTICAL. Focus on payment basics and keeping cash safe.",
            format_template: "💰 [Country] Money

• [Currency - 1 sentence]
• [How to pay - 1 sentence]
• [Safety tip - 1 sentence]",
            word_limit: 60,
        },
        PromptCategory::General => CompactTemplate {
            instructions:
                "Make this INSTANTLY UNDERSTANDABLE and EXTREMELY CONCISE. Focus only on critical information and immediate actions. Use only the most common, basic English words (A1/A2 CEFR level).",
            format_template: "📋 [Main Point]

• [Key info 1]
• [Key info 2]
• [Key info 3]

💡 [One helpful tip]",
            word_limit: 80,
        },
    }
}

pub fn render(category: PromptCategory, complex_text: &str) -> String {
    let template = template_for(category);

    format!(
        "You are TravelBuddy, a patient and ultra-clear guide for busy international tourists. Your goal is to instantly simplify complex text into actionable, easy-to-digest information that reduces confusion and stress.

Text: {complex_text}

{instructions}

Format as:
{format_template}

Keep under {word_limit} words. Focus on what tourists NEED to know.",
        instructions = template.instructions,
        format_template = template.format_template,
        word_limit = template.word_limit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_limits_match_category() {
        let general = render(PromptCategory::General, "x");
        assert!(general.contains("Keep under 80 words"));
        let transport = render(PromptCategory::PublicTransport, "x");
        assert!(transport.contains("Keep under 60 words"));
        let museum = render(PromptCategory::MuseumExhibit, "x");
        assert!(museum.contains("Keep under 50 words"));
    }

    #[test]
    fn shared_skeleton_present_for_all_categories() {
        for category in PromptCategory::ALL {
            let prompt = render(category, "sample");
            assert!(prompt.starts_with("You are TravelBuddy"));
            assert!(prompt.contains("Text: sample"));
            assert!(prompt.contains("Format as:"));
        }
    }
}
