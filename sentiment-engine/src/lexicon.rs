//! English adjective/verb lexicon: `(word, polarity, subjectivity)`.

pub const SENTIMENT_LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("beautiful", 0.85, 1.0),
    ("lovely", 0.5, 0.75),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("like", 0.2, 0.3),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.5, 0.6),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("cool", 0.35, 0.65),
    ("interesting", 0.5, 0.5),
    ("helpful", 0.5, 0.4),
    ("useful", 0.3, 0.0),
    ("easy", 0.43, 0.83),
    ("clean", 0.37, 0.69),
    ("fast", 0.2, 0.6),
    ("smart", 0.21, 0.64),
    ("brilliant", 0.9, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("favorite", 0.5, 1.0),
    ("thankful", 0.5, 0.7),
    ("grateful", 0.6, 0.8),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fine", 0.42, 0.5),
    ("right", 0.29, 0.54),
    ("correct", 0.1, 0.1),
    ("true", 0.35, 0.65),
    ("kind", 0.6, 0.9),
    ("friendly", 0.375, 0.5),
    ("healthy", 0.5, 0.5),
    ("safe", 0.5, 0.5),
    ("strong", 0.43, 0.73),
    ("solid", 0.1, 0.1),
    ("win", 0.8, 0.4),
    ("wins", 0.8, 0.4),
    ("success", 0.3, 0.0),
    ("successful", 0.75, 0.95),
    ("recommend", 0.3, 0.3),
    ("hope", 0.2, 0.4),
    ("hopeful", 0.3, 0.5),
    ("agree", 0.2, 0.3),
    ("positive", 0.23, 0.55),
    ("new", 0.14, 0.45),
    // Negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("ugly", -0.7, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("dislike", -0.3, 0.5),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("boring", -1.0, 1.0),
    ("stupid", -0.8, 1.0),
    ("dumb", -0.375, 0.5),
    ("idiotic", -0.8, 0.9),
    ("ridiculous", -0.33, 1.0),
    ("useless", -0.5, 0.0),
    ("broken", -0.4, 0.4),
    ("wrong", -0.5, 0.9),
    ("false", -0.4, 1.0),
    ("hard", -0.29, 0.54),
    ("difficult", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("expensive", -0.5, 0.7),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("frustrating", -0.4, 0.7),
    ("frustrated", -0.7, 0.7),
    ("painful", -0.7, 0.9),
    ("dangerous", -0.6, 0.9),
    ("toxic", -0.5, 0.6),
    ("lazy", -0.25, 1.0),
    ("weird", -0.5, 1.0),
    ("crazy", -0.6, 0.9),
    ("sick", -0.71, 0.86),
    ("tired", -0.4, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("scam", -0.6, 0.8),
    ("fraud", -0.5, 0.7),
    ("negative", -0.3, 0.4),
    ("unfortunately", -0.5, 1.0),
    ("sorry", -0.5, 1.0),
    ("worried", -0.4, 0.8),
    ("afraid", -0.6, 0.9),
    ("evil", -1.0, 1.0),
    ("pathetic", -1.0, 1.0),
    ("garbage", -0.6, 0.8),
    ("trash", -0.5, 0.8),
    // Subjective but neutral
    ("honestly", 0.0, 0.6),
    ("personally", 0.0, 0.8),
    ("obviously", 0.0, 0.5),
    ("probably", 0.0, 0.5),
    ("maybe", 0.0, 0.4),
    ("feel", 0.0, 0.5),
    ("think", 0.0, 0.3),
    ("believe", 0.0, 0.4),
    ("opinion", 0.0, 0.8),
];

/// Multipliers for the word directly following the intensifier.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.5),
    ("totally", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("highly", 1.3),
];

pub const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "nobody", "neither", "nor"];

/// Polarity factor applied to a negated assessment.
pub const NEGATION_FACTOR: f64 = -0.5;
