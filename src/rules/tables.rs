// src/rules/tables.rs
//! Immutable English lexical data, built once on first use and shared by every engine.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// (base, past, past participle) for irregular verbs. Earlier rows win when a form is shared.
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("be", "was", "been"),
    ("have", "had", "had"),
    ("do", "did", "done"),
    ("go", "went", "gone"),
    ("see", "saw", "seen"),
    ("say", "said", "said"),
    ("make", "made", "made"),
    ("get", "got", "gotten"),
    ("know", "knew", "known"),
    ("take", "took", "taken"),
    ("come", "came", "come"),
    ("think", "thought", "thought"),
    ("give", "gave", "given"),
    ("find", "found", "found"),
    ("tell", "told", "told"),
    ("become", "became", "become"),
    ("leave", "left", "left"),
    ("feel", "felt", "felt"),
    ("bring", "brought", "brought"),
    ("begin", "began", "begun"),
    ("keep", "kept", "kept"),
    ("hold", "held", "held"),
    ("write", "wrote", "written"),
    ("stand", "stood", "stood"),
    ("hear", "heard", "heard"),
    ("let", "let", "let"),
    ("mean", "meant", "meant"),
    ("set", "set", "set"),
    ("meet", "met", "met"),
    ("run", "ran", "run"),
    ("pay", "paid", "paid"),
    ("sit", "sat", "sat"),
    ("speak", "spoke", "spoken"),
    ("lie", "lay", "lain"),
    ("lead", "led", "led"),
    ("read", "read", "read"),
    ("grow", "grew", "grown"),
    ("lose", "lost", "lost"),
    ("fall", "fell", "fallen"),
    ("send", "sent", "sent"),
    ("build", "built", "built"),
    ("understand", "understood", "understood"),
    ("draw", "drew", "drawn"),
    ("break", "broke", "broken"),
    ("spend", "spent", "spent"),
    ("cut", "cut", "cut"),
    ("rise", "rose", "risen"),
    ("drive", "drove", "driven"),
    ("buy", "bought", "bought"),
    ("wear", "wore", "worn"),
    ("choose", "chose", "chosen"),
    ("seek", "sought", "sought"),
    ("throw", "threw", "thrown"),
    ("catch", "caught", "caught"),
    ("deal", "dealt", "dealt"),
    ("win", "won", "won"),
    ("forget", "forgot", "forgotten"),
    ("lay", "laid", "laid"),
    ("sell", "sold", "sold"),
    ("fight", "fought", "fought"),
    ("eat", "ate", "eaten"),
    ("teach", "taught", "taught"),
    ("sleep", "slept", "slept"),
    ("sing", "sang", "sung"),
    ("swim", "swam", "swum"),
    ("drink", "drank", "drunk"),
    ("ring", "rang", "rung"),
    ("fly", "flew", "flown"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("hide", "hid", "hidden"),
    ("bite", "bit", "bitten"),
    ("ride", "rode", "ridden"),
    ("shake", "shook", "shaken"),
    ("steal", "stole", "stolen"),
    ("wake", "woke", "woken"),
    ("blow", "blew", "blown"),
    ("show", "showed", "shown"),
    ("sew", "sewed", "sewn"),
    ("swear", "swore", "sworn"),
    ("tear", "tore", "torn"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("bend", "bent", "bent"),
    ("bet", "bet", "bet"),
    ("bind", "bound", "bound"),
    ("bleed", "bled", "bled"),
    ("breed", "bred", "bred"),
    ("burst", "burst", "burst"),
    ("cast", "cast", "cast"),
    ("cling", "clung", "clung"),
    ("cost", "cost", "cost"),
    ("creep", "crept", "crept"),
    ("dig", "dug", "dug"),
    ("feed", "fed", "fed"),
    ("flee", "fled", "fled"),
    ("forbid", "forbade", "forbidden"),
    ("grind", "ground", "ground"),
    ("hang", "hung", "hung"),
    ("hit", "hit", "hit"),
    ("hurt", "hurt", "hurt"),
    ("kneel", "knelt", "knelt"),
    ("lend", "lent", "lent"),
    ("light", "lit", "lit"),
    ("put", "put", "put"),
    ("quit", "quit", "quit"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("shut", "shut", "shut"),
    ("sink", "sank", "sunk"),
    ("slide", "slid", "slid"),
    ("spin", "spun", "spun"),
    ("split", "split", "split"),
    ("spread", "spread", "spread"),
    ("spring", "sprang", "sprung"),
    ("stick", "stuck", "stuck"),
    ("sting", "stung", "stung"),
    ("strike", "struck", "struck"),
    ("string", "strung", "strung"),
    ("sweep", "swept", "swept"),
    ("swing", "swung", "swung"),
    ("undo", "undid", "undone"),
    ("upset", "upset", "upset"),
    ("weep", "wept", "wept"),
    ("wind", "wound", "wound"),
    ("withdraw", "withdrew", "withdrawn"),
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("overcome", "overcame", "overcome"),
    ("mistake", "mistook", "mistaken"),
];

/// Irregular third-person singular present forms. Regular rules cover everything else.
const IRREGULAR_THIRD_PERSON: &[(&str, &str)] = &[
    ("be", "is"),
    ("have", "has"),
    ("do", "does"),
    ("go", "goes"),
    ("can", "can"),
    ("could", "could"),
    ("will", "will"),
    ("would", "would"),
    ("shall", "shall"),
    ("should", "should"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
];

const IRREGULAR_PRESENT_PARTICIPLES: &[(&str, &str)] = &[
    ("be", "being"),
    ("see", "seeing"),
    ("singe", "singeing"),
    ("dye", "dyeing"),
    ("eye", "eyeing"),
    ("hoe", "hoeing"),
    ("toe", "toeing"),
    ("shoe", "shoeing"),
    ("canoe", "canoeing"),
    ("panic", "panicking"),
    ("picnic", "picnicking"),
    ("traffic", "trafficking"),
    ("mimic", "mimicking"),
    ("quit", "quitting"),
];

/// Verbs whose final syllable is unstressed: the consonant never doubles before a suffix.
const NON_DOUBLING_VERBS: &[&str] = &[
    "visit", "open", "happen", "listen", "offer", "enter", "order", "answer", "limit",
    "edit", "credit", "profit", "target", "budget", "develop", "gallop", "wonder", "suffer",
    "differ", "gather", "cover", "discover", "deliver", "consider", "remember", "matter",
    "water", "bother", "lower", "power", "benefit", "orbit", "exhibit", "inhabit", "inherit",
    "fasten", "threaten", "frighten", "lengthen", "widen", "harden", "sharpen",
    "travel", "cancel", "label", "model", "signal", "total", "level", "fuel", "focus",
];

/// Extra forms of "be" and friends that only appear in the lemma lookup.
const EXTRA_LEMMA_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
];

pub const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must", "ought",
];

/// Auxiliary clitics and the full form they stand for. "n't" marks an already negated auxiliary.
pub const CLITICS: &[(&str, &str)] = &[
    ("n't", "not"),
    ("'m", "am"),
    ("'re", "are"),
    ("'s", "is"),
    ("'ve", "have"),
    ("'ll", "will"),
    ("'d", "would"),
];

/// Hosts whose "'s" is a contracted "is"/"has" rather than a possessive.
pub const S_CLITIC_HOSTS: &[&str] = &[
    "he", "she", "it", "that", "this", "there", "here", "what", "who", "where", "when", "why",
    "how",
];

const CONTRACTIONS: &[(&str, &str)] = &[
    ("is", "isn't"),
    ("are", "aren't"),
    ("was", "wasn't"),
    ("were", "weren't"),
    ("have", "haven't"),
    ("has", "hasn't"),
    ("had", "hadn't"),
    ("do", "don't"),
    ("does", "doesn't"),
    ("did", "didn't"),
    ("can", "can't"),
    ("could", "couldn't"),
    ("will", "won't"),
    ("would", "wouldn't"),
    ("shall", "shan't"),
    ("should", "shouldn't"),
    ("might", "mightn't"),
    ("must", "mustn't"),
    ("ought", "oughtn't"),
];

/// Leading words that belong to a noun phrase rather than being its head.
pub const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
    "our", "their", "some", "every", "each", "no", "any",
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("penny", "pence"),
];

const INVARIANT_PLURALS: &[&str] = &[
    "sheep", "deer", "fish", "series", "species", "moose", "aircraft", "spacecraft",
    "offspring", "salmon", "trout", "swine", "bison", "cod", "shrimp", "means", "headquarters",
];

const UNCOUNTABLE: &[&str] = &[
    "information", "rice", "money", "equipment", "news", "furniture", "advice", "luggage",
    "baggage", "music", "knowledge", "homework", "research", "evidence", "traffic",
    "weather", "software", "hardware", "jewelry", "mathematics", "physics", "police",
];

/// (singular, classical plural, anglicized plural if one is in use).
const CLASSICAL_NOUNS: &[(&str, &str, Option<&str>)] = &[
    ("cactus", "cacti", Some("cactuses")),
    ("fungus", "fungi", Some("funguses")),
    ("nucleus", "nuclei", None),
    ("radius", "radii", Some("radiuses")),
    ("stimulus", "stimuli", None),
    ("syllabus", "syllabi", Some("syllabuses")),
    ("focus", "foci", Some("focuses")),
    ("alumnus", "alumni", None),
    ("octopus", "octopi", Some("octopuses")),
    ("analysis", "analyses", None),
    ("basis", "bases", None),
    ("crisis", "crises", None),
    ("thesis", "theses", None),
    ("hypothesis", "hypotheses", None),
    ("diagnosis", "diagnoses", None),
    ("oasis", "oases", None),
    ("parenthesis", "parentheses", None),
    ("axis", "axes", None),
    ("phenomenon", "phenomena", None),
    ("criterion", "criteria", None),
    ("datum", "data", None),
    ("medium", "media", Some("mediums")),
    ("curriculum", "curricula", Some("curriculums")),
    ("memorandum", "memoranda", Some("memorandums")),
    ("bacterium", "bacteria", None),
    ("stratum", "strata", None),
    ("appendix", "appendices", Some("appendixes")),
    ("index", "indices", Some("indexes")),
    ("matrix", "matrices", Some("matrixes")),
    ("vertex", "vertices", Some("vertexes")),
    ("formula", "formulae", Some("formulas")),
    ("antenna", "antennae", Some("antennas")),
    ("larva", "larvae", None),
    ("vertebra", "vertebrae", Some("vertebras")),
];

/// Nouns ending in -f/-fe that just take "s".
const F_PLAIN_S: &[&str] = &[
    "roof", "proof", "chief", "belief", "chef", "reef", "cliff", "safe", "giraffe", "gaffe",
    "handkerchief", "brief", "grief", "spoof", "sheriff", "tariff", "staff", "gulf", "serf",
    "motif", "carafe", "cafe",
];

/// Singular nouns that pluralize with -ves, consulted when singularizing.
const VES_NOUNS: &[&str] = &[
    "leaf", "loaf", "thief", "wolf", "calf", "half", "elf", "self", "shelf", "sheaf",
    "knife", "wife", "life", "midwife", "scarf", "hoof", "dwarf", "wharf",
];

/// Nouns ending in -o that just take "s".
const O_PLAIN_S: &[&str] = &[
    "photo", "piano", "halo", "radio", "video", "zoo", "kangaroo", "kilo", "memo", "logo",
    "studio", "auto", "disco", "solo", "cello", "casino", "kimono", "portfolio", "avocado",
    "taco", "tattoo", "shampoo", "igloo", "cameo", "rodeo", "stereo", "euro", "demo",
];

/// Singulars ending in -ie, -oe or -che whose plural looks like a sibilant or -y plural.
const PLAIN_S_LOOKALIKES: &[&str] = &[
    "movie", "cookie", "pie", "tie", "zombie", "rookie", "calorie", "prairie", "hippie",
    "selfie", "smoothie", "brownie", "genie", "lie", "shoe", "toe", "canoe", "hoe", "foe",
    "oboe", "tiptoe", "ache", "niche", "cliche", "headache", "moustache", "avalanche",
    "creche",
];

/// Irregular (adjective, comparative, superlative).
const IRREGULAR_DEGREES: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("well", "better", "best"),
    ("bad", "worse", "worst"),
    ("ill", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
];

/// Two-syllable adjectives that take more/most instead of -er/-est.
const PERIPHRASTIC_ADJECTIVES: &[&str] = &[
    "careful", "careless", "famous", "modern", "recent", "certain", "honest", "correct",
    "complete", "extreme", "useful", "useless", "helpful", "hopeful", "nervous", "boring",
    "tired", "bored", "pleasant", "frequent", "precise", "active", "awkward", "childish",
    "foolish", "normal", "private", "public", "stable", "urgent", "upset",
];

/// Adjective to adverb pairs that the suffix rules get wrong.
const IRREGULAR_ADVERBS: &[(&str, &str)] = &[
    ("good", "well"),
    ("fast", "fast"),
    ("hard", "hard"),
    ("late", "late"),
    ("early", "early"),
    ("daily", "daily"),
    ("weekly", "weekly"),
    ("monthly", "monthly"),
    ("yearly", "yearly"),
    ("straight", "straight"),
    ("public", "publicly"),
    ("true", "truly"),
    ("due", "duly"),
    ("whole", "wholly"),
    ("full", "fully"),
    ("shy", "shyly"),
    ("sly", "slyly"),
    ("dry", "dryly"),
    ("happy", "happily"),
    ("easy", "easily"),
    ("busy", "busily"),
    ("heavy", "heavily"),
    ("lucky", "luckily"),
    ("angry", "angrily"),
    ("hungry", "hungrily"),
    ("lazy", "lazily"),
    ("noisy", "noisily"),
    ("ready", "readily"),
    ("steady", "steadily"),
    ("pretty", "prettily"),
    ("merry", "merrily"),
    ("necessary", "necessarily"),
    ("ordinary", "ordinarily"),
    ("temporary", "temporarily"),
    ("simple", "simply"),
    ("gentle", "gently"),
    ("subtle", "subtly"),
    ("humble", "humbly"),
    ("single", "singly"),
    ("idle", "idly"),
    ("able", "ably"),
    ("possible", "possibly"),
    ("probable", "probably"),
    ("terrible", "terribly"),
    ("horrible", "horribly"),
    ("incredible", "incredibly"),
    ("comfortable", "comfortably"),
    ("reasonable", "reasonably"),
    ("dull", "dully"),
    ("friendly", "friendly"),
    ("lovely", "lovely"),
    ("lonely", "lonely"),
    ("silly", "silly"),
    ("ugly", "ugly"),
    ("likely", "likely"),
];

/// Subject, object, possessive determiner, possessive pronoun, reflexive.
const PRONOUNS: &[[&str; 5]] = &[
    ["i", "me", "my", "mine", "myself"],
    ["you", "you", "your", "yours", "yourself"],
    ["he", "him", "his", "his", "himself"],
    ["she", "her", "her", "hers", "herself"],
    ["it", "it", "its", "its", "itself"],
    ["we", "us", "our", "ours", "ourselves"],
    ["they", "them", "their", "theirs", "themselves"],
    ["one", "one", "one's", "one's", "oneself"],
];

/// Words starting with a silent "h" that take "an".
const SILENT_H_WORDS: &[&str] = &[
    "hour", "hours", "hourly", "honest", "honestly", "honesty", "honor", "honorable",
    "honorary", "honour", "honourable", "heir", "heiress", "heirloom", "herb", "herbal",
];

/// Words starting with a vowel letter but a consonant sound, which take "a".
const CONSONANT_SOUND_WORDS: &[&str] = &[
    "one", "once", "university", "unicorn", "uniform", "union", "unique", "unit", "united",
    "universal", "universe", "user", "usual", "usually", "useful", "usage", "use", "utensil",
    "utility", "uranium", "urine", "european", "euro", "eulogy", "eucalyptus", "ewe", "ufo",
    "ukulele", "unanimous", "utopia", "one-way", "ouija",
];

/// Letters whose spoken name starts with a vowel sound ("an FBI agent", "an MRI").
const VOWEL_NAMED_LETTERS: &[char] = &['a', 'e', 'f', 'h', 'i', 'l', 'm', 'n', 'o', 'r', 's', 'x'];

fn pair_map(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::with_capacity(pairs.len());
    for &(key, value) in pairs {
        map.entry(key).or_insert(value);
    }
    map
}

fn inverse_map(pairs: impl Iterator<Item = (&'static str, &'static str)>) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();
    for (key, value) in pairs {
        map.entry(value).or_insert(key);
    }
    map
}

/// Typed access to the English rule tables.
pub struct EnglishTables {
    pub past: HashMap<&'static str, &'static str>,
    pub past_participle: HashMap<&'static str, &'static str>,
    pub present_participle: HashMap<&'static str, &'static str>,
    pub third_person: HashMap<&'static str, &'static str>,
    pub lemma: HashMap<&'static str, &'static str>,
    pub non_doubling: HashSet<&'static str>,
    pub auxiliaries: HashSet<&'static str>,
    pub contractions: HashMap<&'static str, &'static str>,
    pub determiners: HashSet<&'static str>,
    pub plural: HashMap<&'static str, &'static str>,
    pub singular: HashMap<&'static str, &'static str>,
    pub invariant: HashSet<&'static str>,
    pub classical: HashMap<&'static str, (&'static str, Option<&'static str>)>,
    pub classical_singular: HashMap<&'static str, &'static str>,
    pub f_plain_s: HashSet<&'static str>,
    pub ves_nouns: HashSet<&'static str>,
    pub o_plain_s: HashSet<&'static str>,
    pub plain_s_lookalikes: HashSet<&'static str>,
    pub comparative: HashMap<&'static str, &'static str>,
    pub superlative: HashMap<&'static str, &'static str>,
    pub periphrastic: HashSet<&'static str>,
    pub adverb: HashMap<&'static str, &'static str>,
    pub adjective: HashMap<&'static str, &'static str>,
    pub pronouns: HashMap<&'static str, [&'static str; 5]>,
    pub silent_h: HashSet<&'static str>,
    pub consonant_sound: HashSet<&'static str>,
    pub vowel_named_letters: HashSet<char>,
}

impl EnglishTables {
    fn build() -> Self {
        let past = pair_map(&IRREGULAR_VERBS.iter().map(|&(b, p, _)| (b, p)).collect::<Vec<_>>());
        let past_participle =
            pair_map(&IRREGULAR_VERBS.iter().map(|&(b, _, pp)| (b, pp)).collect::<Vec<_>>());
        let third_person = pair_map(IRREGULAR_THIRD_PERSON);

        // Past forms take priority over participles and third-person forms for the lemma.
        let mut lemma = inverse_map(IRREGULAR_VERBS.iter().map(|&(b, p, _)| (b, p)));
        for (form, base) in inverse_map(IRREGULAR_VERBS.iter().map(|&(b, _, pp)| (b, pp))) {
            lemma.entry(form).or_insert(base);
        }
        for (form, base) in inverse_map(IRREGULAR_THIRD_PERSON.iter().copied()) {
            if form != base {
                lemma.entry(form).or_insert(base);
            }
        }
        for &(form, base) in EXTRA_LEMMA_FORMS {
            lemma.entry(form).or_insert(base);
        }

        let mut classical = HashMap::new();
        let mut classical_singular = HashMap::new();
        for &(singular, plural, anglicized) in CLASSICAL_NOUNS {
            classical.insert(singular, (plural, anglicized));
            classical_singular.insert(plural, singular);
            if let Some(anglicized) = anglicized {
                classical_singular.insert(anglicized, singular);
            }
        }

        let comparative =
            pair_map(&IRREGULAR_DEGREES.iter().map(|&(a, c, _)| (a, c)).collect::<Vec<_>>());
        let superlative =
            pair_map(&IRREGULAR_DEGREES.iter().map(|&(a, _, s)| (a, s)).collect::<Vec<_>>());

        let mut pronouns = HashMap::new();
        for forms in PRONOUNS {
            for &form in forms {
                pronouns.entry(form).or_insert(*forms);
            }
        }

        Self {
            past,
            past_participle,
            present_participle: pair_map(IRREGULAR_PRESENT_PARTICIPLES),
            third_person,
            lemma,
            non_doubling: NON_DOUBLING_VERBS.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            contractions: pair_map(CONTRACTIONS),
            determiners: DETERMINERS.iter().copied().collect(),
            plural: pair_map(IRREGULAR_NOUNS),
            singular: inverse_map(IRREGULAR_NOUNS.iter().copied()),
            invariant: INVARIANT_PLURALS.iter().chain(UNCOUNTABLE).copied().collect(),
            classical,
            classical_singular,
            f_plain_s: F_PLAIN_S.iter().copied().collect(),
            ves_nouns: VES_NOUNS.iter().copied().collect(),
            o_plain_s: O_PLAIN_S.iter().copied().collect(),
            plain_s_lookalikes: PLAIN_S_LOOKALIKES.iter().copied().collect(),
            comparative,
            superlative,
            periphrastic: PERIPHRASTIC_ADJECTIVES.iter().copied().collect(),
            adverb: pair_map(IRREGULAR_ADVERBS),
            adjective: inverse_map(IRREGULAR_ADVERBS.iter().copied()),
            pronouns,
            silent_h: SILENT_H_WORDS.iter().copied().collect(),
            consonant_sound: CONSONANT_SOUND_WORDS.iter().copied().collect(),
            vowel_named_letters: VOWEL_NAMED_LETTERS.iter().copied().collect(),
        }
    }
}

pub fn english() -> &'static EnglishTables {
    static TABLES: Lazy<EnglishTables> = Lazy::new(EnglishTables::build);
    &TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemma_prefers_past_forms() {
        let tables = english();
        assert_eq!(tables.lemma.get("went"), Some(&"go"));
        assert_eq!(tables.lemma.get("saw"), Some(&"see"));
        assert_eq!(tables.lemma.get("is"), Some(&"be"));
        assert_eq!(tables.lemma.get("were"), Some(&"be"));
        // "lay" is both the past of "lie" and a base verb; the past row comes first.
        assert_eq!(tables.lemma.get("lay"), Some(&"lie"));
        // modals map to themselves and are not recorded as lemma forms
        assert_eq!(tables.lemma.get("can"), None);
    }

    #[test]
    fn classical_forms_map_back_to_singular() {
        let tables = english();
        assert_eq!(tables.classical.get("cactus"), Some(&("cacti", Some("cactuses"))));
        assert_eq!(tables.classical_singular.get("cacti"), Some(&"cactus"));
        assert_eq!(tables.classical_singular.get("cactuses"), Some(&"cactus"));
    }

    #[test]
    fn pronouns_are_indexed_by_every_form() {
        let tables = english();
        assert_eq!(tables.pronouns.get("him").map(|f| f[0]), Some("he"));
        assert_eq!(tables.pronouns.get("ourselves").map(|f| f[0]), Some("we"));
        assert_eq!(tables.pronouns.get("her").map(|f| f[0]), Some("she"));
    }

    #[test]
    fn invariant_set_includes_uncountables() {
        let tables = english();
        assert!(tables.invariant.contains("sheep"));
        assert!(tables.invariant.contains("information"));
    }
}
