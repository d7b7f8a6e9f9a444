//! Words excluded from keyword ranking.
//!
//! The list is deliberately broad. Keywords should surface topics, so common
//! verbs of every kind are dropped along with the usual function words.

use std::collections::HashSet;
use std::sync::LazyLock;

pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

const STOP_WORD_LIST: &[&str] = &[
    // articles
    "the", "a", "an",
    // prepositions
    "in", "on", "at", "to", "for", "of", "with", "by", "from", "up", "about", "into",
    "through", "during", "before", "after", "above", "below", "between", "among",
    "under", "over", "across", "against", "within", "without", "toward", "towards",
    "beside", "behind", "beneath", "beyond", "inside", "outside", "upon", "underneath",
    "off", "out", "down", "near", "around", "along", "throughout", "concerning",
    "regarding", "despite", "except", "including", "excluding", "according",
    // conjunctions
    "and", "or", "but", "nor", "yet", "so", "if", "although", "though", "because",
    "since", "unless", "while", "whereas", "however", "therefore", "moreover",
    "furthermore", "nevertheless", "nonetheless", "meanwhile", "otherwise", "hence",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "my", "your", "his", "hers", "its", "our", "their", "mine", "yours", "ours",
    "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "yourselves", "themselves", "this", "that", "these", "those", "who", "whom",
    "whose", "which", "what", "whoever", "whomever", "whatever", "whichever",
    "someone", "somebody", "something", "anyone", "anybody", "anything", "everyone",
    "everybody", "everything", "no one", "nobody", "nothing", "one", "ones",
    // auxiliary and modal verbs
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "could", "should", "may", "might",
    "must", "shall", "can", "ought", "used", "need", "dare", "am",
    // degree and frequency adverbs
    "very", "quite", "rather", "too", "enough", "pretty", "fairly", "really",
    "extremely", "incredibly", "absolutely", "completely", "totally", "entirely",
    "always", "never", "often", "sometimes", "usually", "frequently", "rarely",
    "seldom", "occasionally", "constantly", "continually", "regularly", "normally",
    "generally", "typically", "commonly", "mostly", "mainly", "largely",
    "almost", "nearly", "barely", "hardly", "scarcely", "just", "only", "even",
    "still", "already", "soon", "later", "now", "then", "here", "there",
    "everywhere", "somewhere", "anywhere", "nowhere",
    // interjections and filler
    "oh", "ah", "wow", "hey", "well", "um", "uh", "hmm", "yeah", "yes", "no", "okay",
    "ok", "sure", "right", "like", "actually", "basically", "literally", "seriously",
    "honestly", "obviously", "clearly", "definitely", "probably", "maybe", "perhaps",
    "possibly", "certainly", "surely", "indeed", "truly",
    // negations and contractions
    "not", "don't", "doesn't", "didn't", "won't", "wouldn't", "can't", "couldn't",
    "shouldn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't",
    "hadn't", "mustn't", "needn't", "daren't", "shan't", "ain't",
    // politeness and greetings
    "thank", "thanks", "thank you", "please", "sorry", "excuse", "pardon", "welcome",
    "hello", "hi", "bye", "goodbye", "farewell", "greetings", "cheers", "regards",
    // emphasis and agreement
    "exactly", "perfectly", "precisely", "correct", "true", "false", "wrong", "agree",
    "disagree", "yep", "nope", "uh-huh", "mm-hmm", "yup", "nah", "yea", "aye",
    // internet abbreviations
    "lol", "lmao", "rofl", "omg", "wtf", "tbh", "imo", "imho", "fyi", "btw", "aka",
    "etc", "ie", "eg", "vs", "tho", "thru", "ur", "u", "r", "n", "w/", "w/o",
    // physical actions
    "walk", "run", "jump", "sit", "stand", "move", "dance", "swim", "fly", "drive",
    "ride", "climb", "fall", "drop", "lift", "carry", "hold", "grab", "push", "pull",
    "throw", "catch", "kick", "hit", "touch", "reach", "stretch", "bend", "turn",
    "open", "close", "lock", "unlock", "enter", "exit", "arrive", "leave", "return",
    // mental actions
    "think", "know", "understand", "remember", "forget", "learn", "study", "teach",
    "believe", "doubt", "wonder", "imagine", "dream", "hope", "wish", "want",
    "love", "hate", "dislike", "prefer", "choose", "decide", "plan", "intend",
    "expect", "assume", "suppose", "guess", "realize", "recognize", "notice", "observe",
    // communication
    "say", "tell", "speak", "talk", "whisper", "shout", "yell", "scream", "call",
    "ask", "answer", "reply", "respond", "explain", "describe", "mention", "announce",
    "declare", "state", "claim", "argue", "discuss", "debate", "complain", "suggest",
    "recommend", "advise", "warn", "promise", "threaten", "invite", "request", "demand",
    // creation and destruction
    "make", "create", "build", "construct", "produce", "generate", "develop", "design",
    "write", "draw", "paint", "compose", "form", "shape", "mold", "craft", "cook",
    "bake", "prepare", "fix", "repair", "restore", "break", "destroy", "damage",
    "ruin", "demolish", "tear", "cut", "slice", "chop", "burn", "melt", "freeze",
    // possession and transfer
    "own", "possess", "get", "obtain", "acquire", "receive", "take", "give",
    "offer", "provide", "supply", "deliver", "send", "bring", "fetch", "collect",
    "gather", "save", "keep", "store", "hide", "lose", "find", "discover", "locate",
    "buy", "sell", "trade", "exchange", "share", "lend", "borrow", "rent", "lease",
    // senses and perception
    "see", "look", "watch", "stare", "glance", "peek", "view",
    "hear", "listen", "sound", "smell", "taste", "feel", "sense", "perceive",
    // technology and work
    "work", "operate", "function", "start", "stop", "pause", "continue", "finish",
    "complete", "begin", "end", "play", "record", "load", "download", "upload",
    "install", "update", "delete", "remove", "add", "insert", "copy", "paste", "edit",
    "modify", "change", "adjust", "configure", "setup", "connect", "disconnect", "sync",
    // linking verbs and states of being
    "become", "seem", "appear", "remain", "stay", "grow",
    "prove", "act", "serve", "represent", "constitute", "equal", "measure", "weigh",
    "let", "help", "allow", "permit", "enable",
    // social interaction
    "meet", "greet", "visit", "join", "participate", "attend", "celebrate", "party",
    "marry", "divorce", "date", "befriend", "follow", "lead", "guide", "support",
    "assist", "cooperate", "collaborate", "compete", "fight",
    "apologize", "forgive", "blame", "accuse", "defend", "protect", "attack",
    // emotional and mental states
    "worry", "fear", "panic", "relax", "calm", "enjoy", "suffer", "struggle", "cope",
    "manage", "handle", "deal", "face", "confront", "avoid", "escape", "flee",
    "ignore", "acknowledge", "accept", "reject", "approve", "disapprove", "appreciate",
    "value", "respect", "admire", "envy", "jealous", "proud", "ashamed", "embarrassed",
    // time and process
    "happen", "occur", "take place", "last", "proceed", "advance", "progress",
    "evolve", "mature", "age", "expire", "conclude", "result", "cause",
    "contribute", "influence", "affect", "impact", "determine", "control",
    // movement and direction
    "travel", "journey", "migrate", "wander", "roam", "explore", "navigate", "direct",
    "chase", "pursue", "hunt", "search", "seek",
    "approach", "retreat", "withdraw", "emerge", "surface", "dive", "sink",
    // health and body
    "eat", "drink", "swallow", "chew", "bite", "digest", "breathe", "inhale",
    "exhale", "cough", "sneeze", "yawn", "sleep", "wake", "rest", "exercise",
    "hurt", "heal", "recover", "improve", "worsen", "ache", "bleed", "bruise",
    // numbers and generic descriptors
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "first", "second", "third", "next", "previous", "another", "other",
    "same", "different", "new", "old", "young", "big", "small", "large", "little",
    "good", "bad", "best", "worst", "better", "worse", "great", "nice", "fine",
    "long", "short", "high", "low", "much", "many", "few", "more", "most", "less",
    "least", "all", "some", "any", "each", "every", "both", "either", "neither",
    "such", "back", "way", "also",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_each_category() {
        for word in [
            "the", "between", "although", "themselves", "would", "extremely", "basically",
            "don't", "thanks", "lol", "climb", "love", "argue", "build", "borrow", "listen",
            "download", "become", "celebrate", "appreciate", "evolve", "explore", "sleep",
            "three", "different",
        ] {
            assert!(is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_topical_nouns_pass() {
        for word in ["hiking", "mountains", "rust", "compiler", "coffee", "football"] {
            assert!(!is_stop_word(word), "{word} should not be a stop word");
        }
    }
}
