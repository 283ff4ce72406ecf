//! Built-in pools used when no pool file is configured.

/// Philosophical questions a star can ask.
pub const THEMES: &[&str] = &[
    "What is happiness?",
    "What does it mean to be free?",
    "What makes a friend a friend?",
    "Where does the self begin and end?",
    "What is worth remembering?",
    "Is it ever right to break a promise?",
    "What does it mean to grow up?",
    "What is the difference between being alone and being lonely?",
    "Why do we make art?",
    "What would a fair world look like?",
    "What is time made of?",
    "Can you be kind to someone you dislike?",
];

/// Card image identifiers. Rendered by their file stem in the terminal.
pub const CARD_IMAGES: &[&str] = &[
    "stars/sirius.png",
    "stars/vega.png",
    "stars/altair.png",
    "stars/deneb.png",
    "stars/polaris.png",
    "stars/rigel.png",
    "stars/betelgeuse.png",
    "stars/aldebaran.png",
    "stars/spica.png",
    "stars/antares.png",
];

/// Replies shown after an answer has been sent.
pub const REFLECTIONS: &[&str] = &[
    "Your answer is travelling between the stars now.",
    "Somewhere far away, a star is thinking it over too.",
    "Questions like this one get brighter the longer you hold them.",
    "Tomorrow you might answer differently, and that is fine.",
    "The night sky keeps every answer it is given.",
    "Light from that star left long ago. Your thought is just setting out.",
    "Someone else once looked up and wondered the same thing.",
    "An answer is a place to stand while you keep looking.",
];

/// Text placed before the user's answer.
pub const TEMPLATE_PREFIX: &str = "I think it is ";

/// Text placed after the user's answer.
pub const TEMPLATE_SUFFIX: &str = "";
