// Chinese rule set - a polite-request default computed first, then an
// override table with first-match semantics; the default stands when no
// override fires

use super::context::ExpansionContext;
use crate::sentence::TokenCategory;

struct Rule {
    applies: fn(&ExpansionContext) -> bool,
    render: fn(&ExpansionContext) -> String,
}

/// Overrides, in evaluation order; mutually exclusive by first-match.
/// Word matching is exact-string, the locale has no case to fold.
const OVERRIDES: &[Rule] = &[
    Rule {
        applies: |ctx| {
            ctx.last_category == TokenCategory::Feeling
                && ["痛", "害怕", "生气"].contains(&ctx.last_word.as_str())
        },
        render: |ctx| format!("我感到{}，我很不舒服。", ctx.last_word),
    },
    Rule {
        applies: |ctx| ctx.last_category == TokenCategory::Action,
        render: render_action,
    },
    Rule {
        applies: |ctx| ctx.contains_word("我") && ctx.contains_word("家"),
        render: |_| "我想回家了。".to_string(),
    },
    Rule {
        applies: |ctx| ctx.contains_word("不") && ctx.contains_word("吃"),
        render: |_| "我不想吃这个。".to_string(),
    },
];

/// Expand under the Chinese rules.
pub(super) fn expand(ctx: &ExpansionContext) -> String {
    for rule in OVERRIDES {
        if (rule.applies)(ctx) {
            return (rule.render)(ctx);
        }
    }
    format!("请问我可以{}吗？", ctx.joined_words())
}

fn render_action(ctx: &ExpansionContext) -> String {
    let w = ctx.last_word.as_str();
    if ["睡觉", "洗澡", "画画"].contains(&w) {
        format!("我想去{}。", w)
    } else if w == "停" {
        "请停下来，我不喜欢这样。".to_string()
    } else {
        format!("我想{}。", w)
    }
}

#[cfg(test)]
#[path = "rules_zh_test.rs"]
mod tests;
