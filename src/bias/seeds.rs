// Hand-curated seed words for each ideological pole.
//
// These anchor the left/right axis. They are expanded through the embedding
// space before use, so each list only needs a few unambiguous terms per
// theme rather than an exhaustive vocabulary.

/// Seeds for the left pole.
pub const LEFT_SEEDS: &[&str] = &[
    "liberal",
    "equality",
    "diversity",
    "climate",
    "feminism",
    "welfare",
    "progressive",
    "inclusion",
    "regulation",
    "redistribution",
    "socialism",
    "justice",
    "union",
    "environment",
    "activism",
    "lgbt",
    "abortion",
    "universal",
];

/// Seeds for the right pole.
pub const RIGHT_SEEDS: &[&str] = &[
    "conservative",
    "freedom",
    "tradition",
    "patriotism",
    "market",
    "capitalism",
    "gun",
    "military",
    "taxes",
    "merit",
    "border",
    "immigration",
    "faith",
    "religion",
    "morality",
    "family",
    "order",
    "discipline",
];
