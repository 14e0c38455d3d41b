// Built-in vocabulary data, carried over from the original board

use std::collections::HashMap;

use super::store::{Category, VocabularyItem};
use crate::locale::Locale;

fn item(id: u32, zh: &str, en: &str, emoji: &str, category: Category) -> VocabularyItem {
    let mut text = HashMap::new();
    text.insert(Locale::Zh, zh.to_string());
    text.insert(Locale::En, en.to_string());
    VocabularyItem {
        id,
        text,
        category,
        emoji: emoji.to_string(),
    }
}

/// The full built-in vocabulary, in grid declaration order.
pub(super) fn items() -> Vec<VocabularyItem> {
    use Category::*;
    vec![
        // People
        item(101, "我", "I", "🧑", People),
        item(102, "爸爸", "Dad", "👨", People),
        item(103, "妈妈", "Mom", "👩", People),
        item(104, "老师", "Teacher", "👩‍🏫", People),
        item(105, "医生", "Doctor", "👨‍⚕️", People),
        item(106, "朋友", "Friend", "👫", People),
        // Action
        item(201, "想要", "Want", "🤲", Action),
        item(202, "吃", "Eat", "🍽️", Action),
        item(203, "喝", "Drink", "🥤", Action),
        item(204, "去", "Go", "🚶", Action),
        item(205, "玩", "Play", "🎲", Action),
        item(206, "看", "Look", "👀", Action),
        item(207, "帮忙", "Help", "🆘", Action),
        item(208, "睡觉", "Sleep", "🛌", Action),
        item(209, "跑", "Run", "🏃", Action),
        item(210, "画画", "Draw", "🎨", Action),
        item(211, "洗澡", "Bath", "🛁", Action),
        item(212, "停", "Stop", "🛑", Action),
        // Food
        item(301, "水", "Water", "💧", Food),
        item(302, "饭", "Rice", "🍚", Food),
        item(303, "苹果", "Apple", "🍎", Food),
        item(304, "牛奶", "Milk", "🥛", Food),
        item(305, "饼干", "Cookie", "🍪", Food),
        item(306, "果汁", "Juice", "🍹", Food),
        item(307, "面包", "Bread", "🍞", Food),
        // Object
        item(401, "厕所", "Toilet", "🚽", Object),
        item(402, "平板", "Tablet", "📱", Object),
        item(403, "书", "Book", "📖", Object),
        item(404, "床", "Bed", "🛏️", Object),
        item(405, "家", "Home", "🏠", Object),
        item(406, "公园", "Park", "🌳", Object),
        // Feeling
        item(501, "开心", "Happy", "😄", Feeling),
        item(502, "难过", "Sad", "😢", Feeling),
        item(503, "痛", "Pain", "🤕", Feeling),
        item(504, "累", "Tired", "😫", Feeling),
        item(505, "好", "Good", "👍", Feeling),
        item(506, "不", "No", "🙅", Feeling),
        item(507, "生气", "Angry", "😠", Feeling),
        item(508, "害怕", "Scared", "😱", Feeling),
        item(509, "无聊", "Bored", "😐", Feeling),
        item(510, "兴奋", "Excited", "🤩", Feeling),
    ]
}
