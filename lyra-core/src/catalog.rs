// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Lyra-Proprietary
// See LICENSE in the repository root for full license terms.

//! Category catalog — the closed set of 14 user-facing mood categories and
//! the static table mapping fine-grained classifier labels onto them.
//!
//! The mapper is total: any label the table does not know resolves to
//! [`Category::Neutral`]. The table is read-only process-wide data; nothing
//! here has state or a failure mode.

use serde::{Deserialize, Serialize};

/// The 14 user-facing mood categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Happy,
    Sad,
    Angry,
    Fearful,
    Anxious,
    Surprised,
    Disgusted,
    Calm,
    Excited,
    Loving,
    Heartbroken,
    Motivated,
    Nostalgic,
    Neutral,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Fearful,
        Self::Anxious,
        Self::Surprised,
        Self::Disgusted,
        Self::Calm,
        Self::Excited,
        Self::Loving,
        Self::Heartbroken,
        Self::Motivated,
        Self::Nostalgic,
        Self::Neutral,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Happy => 0,
            Self::Sad => 1,
            Self::Angry => 2,
            Self::Fearful => 3,
            Self::Anxious => 4,
            Self::Surprised => 5,
            Self::Disgusted => 6,
            Self::Calm => 7,
            Self::Excited => 8,
            Self::Loving => 9,
            Self::Heartbroken => 10,
            Self::Motivated => 11,
            Self::Nostalgic => 12,
            Self::Neutral => 13,
        }
    }

    /// Display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Fearful => "Fearful",
            Self::Anxious => "Anxious",
            Self::Surprised => "Surprised",
            Self::Disgusted => "Disgusted",
            Self::Calm => "Calm",
            Self::Excited => "Excited",
            Self::Loving => "Loving",
            Self::Heartbroken => "Heartbroken",
            Self::Motivated => "Motivated",
            Self::Nostalgic => "Nostalgic",
            Self::Neutral => "Neutral",
        }
    }

    /// Display glyph for the category itself.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Fearful => "😨",
            Self::Anxious => "😰",
            Self::Surprised => "😲",
            Self::Disgusted => "🤢",
            Self::Calm => "😌",
            Self::Excited => "🤩",
            Self::Loving => "❤️",
            Self::Heartbroken => "💔",
            Self::Motivated => "💪",
            Self::Nostalgic => "🕰️",
            Self::Neutral => "😐",
        }
    }
}

/// Resolve a classifier label to its category. Unknown labels are Neutral.
pub fn map(label: &str) -> Category {
    entry(label).map(|(category, _)| category).unwrap_or(Category::Neutral)
}

/// Resolve a classifier label to its display glyph.
/// Unknown labels get the neutral glyph.
pub fn glyph(label: &str) -> &'static str {
    entry(label)
        .map(|(_, glyph)| glyph)
        .unwrap_or_else(|| Category::Neutral.glyph())
}

/// The label table. Labels arrive lowercase from the classifier vocabulary,
/// but matching is case-insensitive anyway.
fn entry(label: &str) -> Option<(Category, &'static str)> {
    use Category::*;

    let lowered = label.to_ascii_lowercase();
    let found = match lowered.as_str() {
        // Happy
        "joy" => (Happy, "😊"),
        "happiness" => (Happy, "😊"),
        "happy" => (Happy, "😊"),
        "cheerfulness" => (Happy, "😄"),
        "amusement" => (Happy, "😄"),
        "delight" => (Happy, "😁"),
        "glee" => (Happy, "😁"),
        "bliss" => (Happy, "😇"),
        "contentment" => (Happy, "🙂"),
        "satisfaction" => (Happy, "🙂"),
        "gratitude" => (Happy, "🙏"),
        "grateful" => (Happy, "🙏"),
        "approval" => (Happy, "👍"),
        "admiration" => (Happy, "🤩"),
        "pride" => (Happy, "🏅"),
        "optimism" => (Happy, "🌞"),
        "hope" => (Happy, "🌱"),
        "hopeful" => (Happy, "🌱"),
        "relief" => (Happy, "😮‍💨"),
        "ecstasy" => (Happy, "😆"),
        "euphoria" => (Happy, "😆"),

        // Sad
        "sadness" => (Sad, "😢"),
        "sad" => (Sad, "😢"),
        "sorrow" => (Sad, "😢"),
        "grief" => (Sad, "😭"),
        "disappointment" => (Sad, "😞"),
        "despair" => (Sad, "😞"),
        "hopelessness" => (Sad, "😞"),
        "loneliness" => (Sad, "🥀"),
        "lonely" => (Sad, "🥀"),
        "melancholy" => (Sad, "😔"),
        "misery" => (Sad, "😔"),
        "regret" => (Sad, "😔"),
        "remorse" => (Sad, "😔"),
        "guilt" => (Sad, "😔"),
        "pensiveness" => (Sad, "😔"),
        "gloom" => (Sad, "🌧️"),
        "hurt" => (Sad, "😢"),
        "mourning" => (Sad, "🖤"),
        "shame" => (Sad, "😳"),
        "embarrassment" => (Sad, "😳"),

        // Angry
        "anger" => (Angry, "😠"),
        "angry" => (Angry, "😠"),
        "irritation" => (Angry, "😠"),
        "irritated" => (Angry, "😠"),
        "hostility" => (Angry, "😠"),
        "annoyance" => (Angry, "😒"),
        "annoyed" => (Angry, "😒"),
        "resentment" => (Angry, "😒"),
        "bitterness" => (Angry, "😒"),
        "jealousy" => (Angry, "😒"),
        "envy" => (Angry, "😒"),
        "frustration" => (Angry, "😤"),
        "frustrated" => (Angry, "😤"),
        "rage" => (Angry, "😡"),
        "fury" => (Angry, "😡"),
        "outrage" => (Angry, "😡"),
        "hate" => (Angry, "😡"),
        "hatred" => (Angry, "😡"),
        "disapproval" => (Angry, "👎"),

        // Fearful
        "fear" => (Fearful, "😨"),
        "afraid" => (Fearful, "😨"),
        "dread" => (Fearful, "😨"),
        "fright" => (Fearful, "😨"),
        "alarm" => (Fearful, "😨"),
        "scared" => (Fearful, "😱"),
        "terror" => (Fearful, "😱"),
        "horror" => (Fearful, "😱"),
        "panic" => (Fearful, "😱"),

        // Anxious
        "anxiety" => (Anxious, "😰"),
        "anxious" => (Anxious, "😰"),
        "nervousness" => (Anxious, "😬"),
        "nervous" => (Anxious, "😬"),
        "tension" => (Anxious, "😬"),
        "restlessness" => (Anxious, "😬"),
        "worry" => (Anxious, "😟"),
        "worried" => (Anxious, "😟"),
        "unease" => (Anxious, "😟"),
        "uneasy" => (Anxious, "😟"),
        "apprehension" => (Anxious, "😟"),
        "stress" => (Anxious, "😫"),
        "stressed" => (Anxious, "😫"),
        "overwhelmed" => (Anxious, "😵‍💫"),

        // Surprised
        "surprise" => (Surprised, "😲"),
        "surprised" => (Surprised, "😲"),
        "amazement" => (Surprised, "😮"),
        "amazed" => (Surprised, "😮"),
        "awe" => (Surprised, "😮"),
        "astonishment" => (Surprised, "😯"),
        "astonished" => (Surprised, "😯"),
        "shock" => (Surprised, "😳"),
        "shocked" => (Surprised, "😳"),
        "wonder" => (Surprised, "🤯"),
        "disbelief" => (Surprised, "🤯"),
        "realization" => (Surprised, "💡"),

        // Disgusted
        "disgust" => (Disgusted, "🤢"),
        "disgusted" => (Disgusted, "🤢"),
        "loathing" => (Disgusted, "🤢"),
        "revulsion" => (Disgusted, "🤮"),
        "repulsion" => (Disgusted, "🤮"),
        "aversion" => (Disgusted, "😖"),
        "distaste" => (Disgusted, "😖"),
        "disdain" => (Disgusted, "🙄"),
        "contempt" => (Disgusted, "🙄"),

        // Calm
        "calm" => (Calm, "😌"),
        "calmness" => (Calm, "😌"),
        "serenity" => (Calm, "😌"),
        "serene" => (Calm, "😌"),
        "relaxation" => (Calm, "😌"),
        "relaxed" => (Calm, "😌"),
        "composed" => (Calm, "😌"),
        "soothed" => (Calm, "😌"),
        "ease" => (Calm, "😌"),
        "peace" => (Calm, "🕊️"),
        "peaceful" => (Calm, "🕊️"),
        "tranquility" => (Calm, "🍃"),
        "tranquil" => (Calm, "🍃"),
        "mellow" => (Calm, "🍃"),
        "stillness" => (Calm, "🍃"),

        // Excited
        "excitement" => (Excited, "🤩"),
        "excited" => (Excited, "🤩"),
        "eagerness" => (Excited, "🤩"),
        "enthusiasm" => (Excited, "🎉"),
        "anticipation" => (Excited, "🤞"),
        "thrill" => (Excited, "⚡"),
        "exhilaration" => (Excited, "⚡"),
        "energetic" => (Excited, "⚡"),
        "curiosity" => (Excited, "🧐"),
        "interest" => (Excited, "🧐"),

        // Loving
        "love" => (Loving, "❤️"),
        "loving" => (Loving, "❤️"),
        "passion" => (Loving, "❤️‍🔥"),
        "affection" => (Loving, "🥰"),
        "fondness" => (Loving, "🥰"),
        "warmth" => (Loving, "🥰"),
        "caring" => (Loving, "🤗"),
        "adoration" => (Loving, "😍"),
        "desire" => (Loving, "😍"),
        "romance" => (Loving, "💕"),
        "tenderness" => (Loving, "💗"),
        "compassion" => (Loving, "💞"),

        // Heartbroken
        "heartbreak" => (Heartbroken, "💔"),
        "heartbroken" => (Heartbroken, "💔"),
        "betrayal" => (Heartbroken, "💔"),
        "betrayed" => (Heartbroken, "💔"),
        "abandonment" => (Heartbroken, "💔"),
        "abandoned" => (Heartbroken, "💔"),
        "rejection" => (Heartbroken, "💔"),
        "rejected" => (Heartbroken, "💔"),
        "yearning" => (Heartbroken, "💔"),
        "devastated" => (Heartbroken, "😭"),
        "devastation" => (Heartbroken, "😭"),
        "anguish" => (Heartbroken, "😭"),

        // Motivated
        "motivation" => (Motivated, "💪"),
        "motivated" => (Motivated, "💪"),
        "empowerment" => (Motivated, "💪"),
        "empowered" => (Motivated, "💪"),
        "determination" => (Motivated, "💪"),
        "determined" => (Motivated, "💪"),
        "ambition" => (Motivated, "🚀"),
        "ambitious" => (Motivated, "🚀"),
        "drive" => (Motivated, "🔥"),
        "driven" => (Motivated, "🔥"),
        "zeal" => (Motivated, "🔥"),
        "inspiration" => (Motivated, "✨"),
        "inspired" => (Motivated, "✨"),
        "confidence" => (Motivated, "😎"),
        "confident" => (Motivated, "😎"),
        "focus" => (Motivated, "🎯"),
        "focused" => (Motivated, "🎯"),
        "resolve" => (Motivated, "🧗"),
        "perseverance" => (Motivated, "🧗"),
        "persistence" => (Motivated, "🧗"),
        "courage" => (Motivated, "🦁"),
        "courageous" => (Motivated, "🦁"),

        // Nostalgic
        "nostalgia" => (Nostalgic, "🕰️"),
        "nostalgic" => (Nostalgic, "🕰️"),
        "reminiscence" => (Nostalgic, "📼"),
        "reminiscent" => (Nostalgic, "📼"),
        "sentimental" => (Nostalgic, "🎞️"),
        "sentimentality" => (Nostalgic, "🎞️"),
        "wistful" => (Nostalgic, "🍂"),
        "wistfulness" => (Nostalgic, "🍂"),
        "bittersweet" => (Nostalgic, "🍂"),
        "homesick" => (Nostalgic, "🏠"),
        "homesickness" => (Nostalgic, "🏠"),
        "longing" => (Nostalgic, "🌙"),

        // Neutral
        "neutral" => (Neutral, "😐"),
        "indifference" => (Neutral, "😐"),
        "indifferent" => (Neutral, "😐"),
        "uncertainty" => (Neutral, "😕"),
        "uncertain" => (Neutral, "😕"),
        "confusion" => (Neutral, "😕"),
        "confused" => (Neutral, "😕"),
        "boredom" => (Neutral, "🥱"),
        "bored" => (Neutral, "🥱"),
        "numb" => (Neutral, "😶"),
        "apathy" => (Neutral, "😶"),
        "apathetic" => (Neutral, "😶"),

        _ => return None,
    };
    Some(found)
}
