// English rule set - an ordered (predicate, producer) table, first match wins
// Predicates are not mutually exclusive; evaluation order decides the output

use super::context::ExpansionContext;
use super::engine::TemplateChooser;
use crate::sentence::TokenCategory;

/// One expansion rule: a predicate over the context and the template
/// producer applied when it is the first to match.
struct Rule {
    applies: fn(&ExpansionContext) -> bool,
    render: fn(&ExpansionContext, &dyn TemplateChooser) -> String,
}

/// Verbs that take the to-infinitive in the request template.
const TO_INFINITIVE_VERBS: [&str; 6] = ["sleep", "run", "swim", "bath", "draw", "go"];

/// The table, in evaluation order.
const RULES: &[Rule] = &[
    Rule {
        applies: |ctx| ctx.contains_word_ignore_case("no"),
        render: render_negation,
    },
    Rule {
        applies: |ctx| ctx.last_category == TokenCategory::Feeling,
        render: render_feeling,
    },
    Rule {
        applies: |ctx| ctx.last_category == TokenCategory::Action,
        render: render_action,
    },
    Rule {
        applies: |ctx| ctx.last_category == TokenCategory::People,
        render: |ctx, _| format!("I want {}.", ctx.last_word),
    },
    Rule {
        applies: |ctx| {
            matches!(
                ctx.last_category,
                TokenCategory::Food | TokenCategory::Object
            )
        },
        render: render_request,
    },
];

/// Expand under the English rules; identity fallback when nothing matches.
pub(super) fn expand(ctx: &ExpansionContext, chooser: &dyn TemplateChooser) -> String {
    for rule in RULES {
        if (rule.applies)(ctx) {
            return (rule.render)(ctx, chooser);
        }
    }
    ctx.joined_words()
}

fn render_negation(ctx: &ExpansionContext, _: &dyn TemplateChooser) -> String {
    // Everything that is not "no" is sentence content; the most recent
    // content word is what is being refused
    let content_word = ctx.words.iter().rfind(|w| !w.eq_ignore_ascii_case("no"));

    match content_word {
        Some(word) => format!("I don't want {}.", word.to_lowercase()),
        None => "No, thank you.".to_string(),
    }
}

fn render_feeling(ctx: &ExpansionContext, _: &dyn TemplateChooser) -> String {
    let w = ctx.last_word.as_str();
    if ["pain", "scared", "angry"].contains(&w) {
        format!("I am feeling {}, please help.", w)
    } else if ["bored", "tired"].contains(&w) {
        format!("I am {}, I want to do something else.", w)
    } else {
        format!("I feel {}.", w)
    }
}

fn render_action(ctx: &ExpansionContext, _: &dyn TemplateChooser) -> String {
    let w = ctx.last_word.as_str();
    if TO_INFINITIVE_VERBS.contains(&w) {
        format!("I want to {}.", w)
    } else if w == "stop" {
        "Please stop that immediately.".to_string()
    } else if w == "help" {
        "Please help me.".to_string()
    } else {
        format!("I want to {}.", w)
    }
}

/// The three request templates a food/object sentence is drawn from.
pub(super) fn request_templates(word: &str) -> [String; 3] {
    [
        format!("May I have {}, please?", word),
        format!("I would like {}, please.", word),
        format!("Can I get {}?", word),
    ]
}

fn render_request(ctx: &ExpansionContext, chooser: &dyn TemplateChooser) -> String {
    let templates = request_templates(&ctx.last_word);
    chooser.choose(&templates).to_string()
}

#[cfg(test)]
#[path = "rules_en_test.rs"]
mod tests;
