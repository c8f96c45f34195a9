// src/rules/english.rs
use crate::core::case::{capitalize, is_all_uppercase, match_case, starts_uppercase};
use crate::core::types::{Aspect, Inflection, Number, Person, PronounVariants, Tense, Voice};
use crate::overrides::Overrides;
use crate::rules::tables::{self, EnglishTables};
use crate::rules::Morphology;
use std::collections::HashMap;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `word` without its last `count` characters.
fn drop_chars(word: &str, count: usize) -> &str {
    if count == 0 {
        return word;
    }
    word.char_indices()
        .rev()
        .nth(count - 1)
        .map_or("", |(idx, _)| &word[..idx])
}

fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut tail = word.chars().rev();
    matches!((tail.next(), tail.next()), (Some('y'), Some(c)) if c.is_alphabetic() && !is_vowel(c))
}

fn ends_with_sibilant(word: &str) -> bool {
    ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix))
}

/// Splits a contracted word ("I'm", "she’s", "don't") into its host, clitic and the
/// clitic's full form.
fn split_clitic(word: &str) -> Option<(&str, &'static str, &'static str)> {
    let lower = word.to_lowercase().replace(['\u{2019}', '\u{02BC}'], "'");
    tables::CLITICS.iter().find_map(|&(clitic, full)| {
        let host = lower.strip_suffix(clitic)?;
        (!host.is_empty()).then(|| (drop_chars(word, clitic.chars().count()), clitic, full))
    })
}

/// Approximate syllable count: vowel groups, minus a silent final "e".
fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut previous_vowel = false;
    for (i, c) in word.chars().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && i > 0);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }
    if count > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        count -= 1;
    }
    count.max(1)
}

/// English, the fully realized rules variant.
pub struct English {
    tables: &'static EnglishTables,
}

impl Default for English {
    fn default() -> Self {
        Self::new()
    }
}

impl English {
    pub fn new() -> Self {
        Self { tables: tables::english() }
    }

    /// Override, then irregular table, then regular rule; the result takes the input's case.
    fn resolve(
        &self,
        overrides: &Overrides,
        op: Inflection,
        word: &str,
        table: &HashMap<&'static str, &'static str>,
        rule: impl FnOnce(&str) -> String,
    ) -> String {
        if word.trim().is_empty() {
            return word.to_string();
        }
        let lower = word.to_lowercase();
        let form = if let Some(form) = overrides.get(op, &lower) {
            form.to_string()
        } else if let Some(form) = table.get(lower.as_str()) {
            form.to_string()
        } else {
            rule(&lower)
        };
        match_case(word, &form)
    }

    /// Consonant-vowel-consonant ending whose last letter is not y, w or x.
    fn should_double(&self, word: &str) -> bool {
        if self.tables.non_doubling.contains(word) {
            return false;
        }
        let tail: Vec<char> = word.chars().rev().take(3).collect();
        if tail.len() < 3 {
            return false;
        }
        let (last, middle, first) = (tail[0], tail[1], tail[2]);
        last.is_alphabetic()
            && first.is_alphabetic()
            && !matches!(last, 'y' | 'w' | 'x')
            && !is_vowel(first)
            && is_vowel(middle)
            && !is_vowel(last)
    }

    fn regular_present_participle(&self, verb: &str) -> String {
        if let Some(stem) = verb.strip_suffix("ie") {
            format!("{stem}ying")
        } else if verb.len() > 1 && verb.ends_with('e') && !verb.ends_with("ee") {
            format!("{}ing", drop_chars(verb, 1))
        } else if self.should_double(verb) {
            let last = last_char(verb).unwrap_or_default();
            format!("{verb}{last}ing")
        } else {
            format!("{verb}ing")
        }
    }

    fn regular_past(&self, verb: &str) -> String {
        if verb.ends_with('e') {
            format!("{verb}d")
        } else if ends_with_consonant_y(verb) {
            format!("{}ied", drop_chars(verb, 1))
        } else if self.should_double(verb) {
            let last = last_char(verb).unwrap_or_default();
            format!("{verb}{last}ed")
        } else {
            format!("{verb}ed")
        }
    }

    fn regular_third_person(verb: &str) -> String {
        if ends_with_consonant_y(verb) {
            format!("{}ies", drop_chars(verb, 1))
        } else if ends_with_sibilant(verb) || verb.ends_with('o') {
            format!("{verb}es")
        } else {
            format!("{verb}s")
        }
    }

    /// Undoes the third-person -s so "does" can carry the agreement ("likes" -> "like").
    fn strip_third_person(&self, verb: &str) -> String {
        let lower = verb.to_lowercase();
        if let Some(&base) = self.tables.third_person.iter().find_map(|(base, form)| {
            (*form == lower.as_str() && base != form).then_some(base)
        }) {
            return base.to_string();
        }
        if lower.len() > 3 {
            if let Some(stem) = lower.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if stem.ends_with('o') || ["ss", "sh", "ch", "x", "zz"].iter().any(|s| stem.ends_with(s)) {
                return stem.to_string();
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if !stem.ends_with('s') && !stem.is_empty() {
                return stem.to_string();
            }
        }
        lower
    }

    /// The lemma when `word` is an irregular past form distinct from its base ("went" -> "go").
    fn irregular_past_lemma(&self, word: &str) -> Option<&'static str> {
        let lower = word.to_lowercase();
        let base = *self.tables.lemma.get(lower.as_str())?;
        match self.tables.past.get(base) {
            Some(&past) if past == lower && base != lower => Some(base),
            _ => None,
        }
    }

    fn be_present(person: Person, number: Number) -> &'static str {
        match (person, number) {
            (Person::First, Number::Singular) => "am",
            (Person::Third, Number::Singular) => "is",
            _ => "are",
        }
    }

    fn be_past(person: Person, number: Number) -> &'static str {
        match (person, number) {
            (Person::First | Person::Third, Number::Singular) => "was",
            _ => "were",
        }
    }

    fn regular_plural(&self, noun: &str) -> String {
        if ends_with_consonant_y(noun) {
            return format!("{}ies", drop_chars(noun, 1));
        }
        if !self.tables.f_plain_s.contains(noun) && !noun.ends_with("ff") {
            if let Some(stem) = noun.strip_suffix("fe") {
                return format!("{stem}ves");
            }
            if let Some(stem) = noun.strip_suffix('f') {
                return format!("{stem}ves");
            }
        }
        if noun.ends_with('o') {
            return if self.tables.o_plain_s.contains(noun) {
                format!("{noun}s")
            } else {
                format!("{noun}es")
            };
        }
        if ends_with_sibilant(noun) {
            return format!("{noun}es");
        }
        format!("{noun}s")
    }

    fn regular_singular(&self, noun: &str) -> String {
        let tables = self.tables;
        if noun.chars().count() <= 2
            || !noun.ends_with('s')
            || ["ss", "us", "is"].iter().any(|suffix| noun.ends_with(suffix))
        {
            return noun.to_string();
        }
        let without_s = drop_chars(noun, 1);

        if let Some(stem) = noun.strip_suffix("ies") {
            let ie_form = format!("{stem}ie");
            return if tables.plain_s_lookalikes.contains(ie_form.as_str()) {
                ie_form
            } else {
                format!("{stem}y")
            };
        }
        if let Some(stem) = noun.strip_suffix("ves") {
            for candidate in [format!("{stem}f"), format!("{stem}fe")] {
                if tables.ves_nouns.contains(candidate.as_str()) {
                    return candidate;
                }
            }
            return without_s.to_string();
        }
        if let Some(stem) = noun.strip_suffix("es") {
            if tables.plain_s_lookalikes.contains(without_s) {
                return without_s.to_string();
            }
            if stem.ends_with('o')
                || ["ss", "sh", "ch", "x", "zz", "us"].iter().any(|suffix| stem.ends_with(suffix))
            {
                return stem.to_string();
            }
        }
        without_s.to_string()
    }

    fn degree(&self, adjective: &str, more: &str, suffix: &str) -> String {
        let single_syllable = syllables(adjective) == 1;
        if self.tables.periphrastic.contains(adjective) || syllables(adjective) >= 3 {
            return format!("{more} {adjective}");
        }
        if adjective.ends_with('e') {
            format!("{adjective}{}", &suffix[1..])
        } else if ends_with_consonant_y(adjective) {
            format!("{}i{suffix}", drop_chars(adjective, 1))
        } else if single_syllable && self.should_double(adjective) {
            let last = last_char(adjective).unwrap_or_default();
            format!("{adjective}{last}{suffix}")
        } else {
            format!("{adjective}{suffix}")
        }
    }

    /// "+ly", or "-ically" for "-ic" adjectives. Other spellings live in the adverb table.
    fn regular_adverb(adjective: &str) -> String {
        if adjective.ends_with("ic") {
            format!("{adjective}ally")
        } else {
            format!("{adjective}ly")
        }
    }

    fn regular_adjective(adverb: &str) -> String {
        if let Some(stem) = adverb.strip_suffix("ically") {
            format!("{stem}ic")
        } else if let Some(stem) = adverb.strip_suffix("ly") {
            stem.to_string()
        } else {
            adverb.to_string()
        }
    }

    /// Index just past the subject: one word, or a determiner plus its noun.
    fn subject_end(&self, words: &[String]) -> usize {
        let mut i = 0;
        while i + 2 < words.len() && self.is_determiner(&words[i]) {
            i += 1;
        }
        (i + 1).min(words.len())
    }

    /// Determiners and possessives ("John's") that open a noun phrase.
    fn is_determiner(&self, word: &str) -> bool {
        if self.tables.determiners.contains(word.to_lowercase().as_str()) {
            return true;
        }
        matches!(split_clitic(word), Some((_, "'s", _))) && self.auxiliary_clitic(word).is_none()
    }

    /// Irregular plural, or an "-s" ending that is not "-ss", "-us" or "-is".
    fn looks_plural(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.tables.singular.contains_key(lower.as_str())
            || self.tables.classical_singular.contains_key(lower.as_str())
            || (lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)))
    }

    /// Known irregular verb form, or a regular "-ed"/"-s" ending.
    fn looks_like_verb(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        let tables = self.tables;
        tables.lemma.contains_key(lower.as_str())
            || tables.past.contains_key(lower.as_str())
            || (lower.chars().count() > 3 && lower.ends_with("ed"))
            || (lower.chars().count() > 2
                && lower.ends_with('s')
                && !["ss", "us", "is", "'s", "\u{2019}s"].iter().any(|s| lower.ends_with(s)))
    }

    /// Index of the main verb. After a determiner, adjectives before the noun are skipped
    /// ("The big dog barks") when the word after the determiner does not read as a verb.
    fn verb_index(&self, words: &[String]) -> usize {
        let start = self.subject_end(words);
        let opens_with_determiner = words.first().is_some_and(|word| self.is_determiner(word));
        if !opens_with_determiner
            || start >= words.len()
            || self.looks_like_verb(&words[start])
            || self.looks_plural(&words[start - 1])
        {
            return start;
        }
        for i in start..words.len().min(start + 3) {
            if self.looks_like_verb(&words[i]) {
                return i;
            }
            let lower = words[i].to_lowercase();
            if self.tables.singular.contains_key(lower.as_str()) && i + 1 < words.len() {
                return i + 1;
            }
        }
        start
    }

    fn first_auxiliary(&self, words: &[String]) -> Option<usize> {
        words.iter().position(|word| self.is_auxiliary(word))
    }

    /// Host, clitic and full form of a contracted auxiliary. A possessive "'s" does not count.
    fn auxiliary_clitic<'w>(&self, word: &'w str) -> Option<(&'w str, &'static str, &'static str)> {
        let (host, clitic, full) = split_clitic(word)?;
        if clitic == "'s" && !tables::S_CLITIC_HOSTS.contains(&host.to_lowercase().as_str()) {
            return None;
        }
        Some((host, clitic, full))
    }

    /// "not", "cannot" or a "n't" contraction.
    fn is_negated(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        lower == "not"
            || lower == "cannot"
            || self.auxiliary_clitic(word).is_some_and(|(_, clitic, _)| clitic == "n't")
    }

    fn is_past_participle(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.tables
            .lemma
            .get(lower.as_str())
            .is_some_and(|base| self.tables.past_participle.get(base) == Some(&lower.as_str()))
    }

    /// Full auxiliary for a clitic; "'s" and "'d" before a participle read as "has"/"had".
    fn expand_clitic(
        &self,
        clitic: &str,
        full: &'static str,
        next: Option<&String>,
    ) -> &'static str {
        let perfect = next.is_some_and(|word| self.is_past_participle(word));
        match clitic {
            "'s" if perfect => "has",
            "'d" if perfect => "had",
            _ => full,
        }
    }

    /// Chooses do/does/did for a clause without an auxiliary and returns it with the
    /// verb index and the verb's base form.
    fn do_support(&self, words: &[String]) -> (&'static str, usize, Option<String>) {
        let verb_index = self.verb_index(words);
        let Some(verb) = words.get(verb_index) else {
            let aux = match self.agreement(words) {
                (Person::Third, Number::Singular) => "does",
                _ => "do",
            };
            return (aux, verb_index, None);
        };
        if let Some(base) = self.irregular_past_lemma(verb) {
            return ("did", verb_index, Some(base.to_string()));
        }
        match self.agreement(words) {
            (Person::Third, Number::Singular) => {
                ("does", verb_index, Some(self.strip_third_person(verb)))
            }
            _ => ("do", verb_index, Some(verb.to_lowercase())),
        }
    }

    /// Lowercases a former sentence-initial word unless it is "I" or looks like a name.
    fn demote(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower == "i" {
            return "I".to_string();
        }
        if self.tables.pronouns.contains_key(lower.as_str())
            || self.tables.determiners.contains(lower.as_str())
            || self.tables.auxiliaries.contains(lower.as_str())
        {
            return lower;
        }
        word.to_string()
    }
}

impl Morphology for English {
    fn present_participle(&self, overrides: &Overrides, verb: &str) -> String {
        self.resolve(
            overrides,
            Inflection::PresentParticiple,
            verb,
            &self.tables.present_participle,
            |v| self.regular_present_participle(v),
        )
    }

    fn past(&self, overrides: &Overrides, verb: &str) -> String {
        self.resolve(overrides, Inflection::Past, verb, &self.tables.past, |v| {
            self.regular_past(v)
        })
    }

    fn past_participle(&self, overrides: &Overrides, verb: &str) -> String {
        self.resolve(
            overrides,
            Inflection::PastParticiple,
            verb,
            &self.tables.past_participle,
            |v| self.past(overrides, v),
        )
    }

    fn third_person(&self, overrides: &Overrides, verb: &str) -> String {
        self.resolve(
            overrides,
            Inflection::ThirdPerson,
            verb,
            &self.tables.third_person,
            Self::regular_third_person,
        )
    }

    fn base(&self, overrides: &Overrides, verb: &str) -> Option<String> {
        let lower = verb.to_lowercase();
        let base = if let Some(base) = overrides.get(Inflection::Base, &lower) {
            base
        } else if let Some(&base) = self.tables.lemma.get(lower.as_str()) {
            base
        } else if self.tables.past.contains_key(lower.as_str())
            || self.tables.third_person.contains_key(lower.as_str())
        {
            // already a known base form
            lower.as_str()
        } else {
            return None;
        };
        Some(match_case(verb, base))
    }

    fn conjugate(
        &self,
        overrides: &Overrides,
        verb: &str,
        person: Person,
        number: Number,
        tense: Tense,
        aspect: Aspect,
        voice: Voice,
    ) -> String {
        if verb.trim().is_empty() {
            return verb.to_string();
        }
        let lower = verb.to_lowercase();
        let third_singular = person == Person::Third && number == Number::Singular;
        let be = match tense {
            Tense::Present => Self::be_present(person, number).to_string(),
            Tense::Past => Self::be_past(person, number).to_string(),
            Tense::Future => "will be".to_string(),
        };
        let have = match tense {
            Tense::Present if third_singular => "has",
            Tense::Present => "have",
            Tense::Past => "had",
            Tense::Future => "will have",
        };

        let phrase = match voice {
            Voice::Active => {
                let ing = self.present_participle(overrides, &lower);
                match aspect {
                    Aspect::Simple => match tense {
                        Tense::Present if lower == "be" => be,
                        Tense::Present if third_singular => self.third_person(overrides, &lower),
                        Tense::Present => lower.clone(),
                        Tense::Past if lower == "be" => be,
                        Tense::Past => self.past(overrides, &lower),
                        Tense::Future => format!("will {lower}"),
                    },
                    Aspect::Progressive => format!("{be} {ing}"),
                    Aspect::Perfect => {
                        format!("{have} {}", self.past_participle(overrides, &lower))
                    }
                    Aspect::PerfectProgressive => format!("{have} been {ing}"),
                }
            }
            Voice::Passive => {
                let participle = self.past_participle(overrides, &lower);
                match aspect {
                    Aspect::Simple => format!("{be} {participle}"),
                    Aspect::Progressive => format!("{be} being {participle}"),
                    Aspect::Perfect => format!("{have} been {participle}"),
                    Aspect::PerfectProgressive => format!("{have} been being {participle}"),
                }
            }
        };
        match_case(verb, &phrase)
    }

    fn pluralize(&self, overrides: &Overrides, noun: &str, conservative: bool) -> String {
        if noun.trim().is_empty() || overrides.is_unchanged(noun) {
            return noun.to_string();
        }
        let lower = noun.to_lowercase();
        if let Some(plural) = overrides.get(Inflection::Plural, &lower) {
            return match_case(noun, plural);
        }
        if self.tables.invariant.contains(lower.as_str()) {
            return noun.to_string();
        }
        if let Some(plural) = self.tables.plural.get(lower.as_str()) {
            return match_case(noun, plural);
        }
        if let Some(&(classical, anglicized)) = self.tables.classical.get(lower.as_str()) {
            let plural = match anglicized {
                Some(anglicized) if conservative => anglicized,
                _ => classical,
            };
            return match_case(noun, plural);
        }
        match_case(noun, &self.regular_plural(&lower))
    }

    fn singularize(&self, overrides: &Overrides, noun: &str, _conservative: bool) -> String {
        if noun.trim().is_empty() || overrides.is_unchanged(noun) {
            return noun.to_string();
        }
        let lower = noun.to_lowercase();
        if let Some(singular) = overrides.get(Inflection::Singular, &lower) {
            return match_case(noun, singular);
        }
        let tables = self.tables;
        if tables.invariant.contains(lower.as_str())
            || tables.plural.contains_key(lower.as_str())
            || tables.classical.contains_key(lower.as_str())
        {
            return noun.to_string();
        }
        if let Some(singular) = tables
            .singular
            .get(lower.as_str())
            .or_else(|| tables.classical_singular.get(lower.as_str()))
        {
            return match_case(noun, singular);
        }
        match_case(noun, &self.regular_singular(&lower))
    }

    fn comparative(&self, overrides: &Overrides, adjective: &str) -> String {
        self.resolve(
            overrides,
            Inflection::Comparative,
            adjective,
            &self.tables.comparative,
            |a| self.degree(a, "more", "er"),
        )
    }

    fn superlative(&self, overrides: &Overrides, adjective: &str) -> String {
        self.resolve(
            overrides,
            Inflection::Superlative,
            adjective,
            &self.tables.superlative,
            |a| self.degree(a, "most", "est"),
        )
    }

    fn adverb(&self, overrides: &Overrides, adjective: &str) -> String {
        self.resolve(
            overrides,
            Inflection::Adverb,
            adjective,
            &self.tables.adverb,
            Self::regular_adverb,
        )
    }

    fn adjective(&self, overrides: &Overrides, adverb: &str) -> String {
        self.resolve(
            overrides,
            Inflection::Adjective,
            adverb,
            &self.tables.adjective,
            Self::regular_adjective,
        )
    }

    fn article(&self, overrides: &Overrides, word: &str) -> String {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let lower = word.to_lowercase();
        if let Some(article) = overrides.article_for(&lower) {
            return article.to_string();
        }
        let tables = self.tables;
        let vowel_sound = if tables.silent_h.contains(lower.as_str()) {
            true
        } else if tables.consonant_sound.contains(lower.as_str()) {
            false
        } else if is_all_uppercase(word) {
            lower.chars().next().is_some_and(|c| tables.vowel_named_letters.contains(&c))
        } else {
            lower.chars().next().is_some_and(is_vowel)
        };
        let article = if vowel_sound { "an" } else { "a" };
        article.to_string()
    }

    fn pronoun_variants(&self, pronoun: &str) -> Option<PronounVariants> {
        let forms = self.tables.pronouns.get(pronoun.to_lowercase().as_str())?;
        let shout = pronoun.chars().count() > 1 && is_all_uppercase(pronoun);
        let capitalized = starts_uppercase(pronoun);

        let subject = if shout {
            forms[0].to_uppercase()
        } else if capitalized || forms[0] == "i" {
            capitalize(forms[0])
        } else {
            forms[0].to_string()
        };
        let rest = |form: &str| if shout { form.to_uppercase() } else { form.to_string() };
        Some(PronounVariants {
            subject,
            object: rest(forms[1]),
            possessive_determiner: rest(forms[2]),
            possessive_pronoun: rest(forms[3]),
            reflexive: rest(forms[4]),
        })
    }

    fn is_auxiliary(&self, word: &str) -> bool {
        self.tables.auxiliaries.contains(word.to_lowercase().as_str())
            || self.auxiliary_clitic(word).is_some()
    }

    fn agreement(&self, words: &[String]) -> (Person, Number) {
        let Some(first) = words.first() else {
            return (Person::Third, Number::Singular);
        };
        let mut head_index = self.verb_index(words).saturating_sub(1);
        let head_word = &words[head_index];
        let head = split_clitic(head_word)
            .map_or(head_word.as_str(), |(host, ..)| host)
            .to_lowercase();

        match head.as_str() {
            "i" | "me" => return (Person::First, Number::Singular),
            "we" | "us" => return (Person::First, Number::Plural),
            "you" => return (Person::Second, Number::Singular),
            "they" | "them" | "these" | "those" => return (Person::Third, Number::Plural),
            "he" | "she" | "it" | "one" | "this" | "that" => {
                return (Person::Third, Number::Singular)
            }
            _ => {}
        }
        // A bare subject phrase ("the dogs") ends on its noun.
        while head_index + 1 < words.len() && self.is_determiner(&words[head_index]) {
            head_index += 1;
        }
        let determiner = (head_index > 0).then(|| first.to_lowercase());
        if matches!(determiner.as_deref(), Some("these" | "those")) {
            return (Person::Third, Number::Plural);
        }
        // Capitalized words after the first position read as names.
        let name_like = head_index > 0 && starts_uppercase(&words[head_index]);
        if self.looks_plural(&words[head_index]) && !name_like {
            (Person::Third, Number::Plural)
        } else {
            (Person::Third, Number::Singular)
        }
    }

    fn negate(&self, _overrides: &Overrides, words: &[String], contract: bool) -> Vec<String> {
        if words.is_empty() {
            return Vec::new();
        }
        if words.iter().any(|word| self.is_negated(word)) {
            return words.to_vec();
        }
        let mut result = words.to_vec();
        if let Some(index) = self.first_auxiliary(words) {
            let aux = &words[index];
            match self.tables.contractions.get(aux.to_lowercase().as_str()) {
                Some(contracted) if contract => result[index] = match_case(aux, contracted),
                _ => result.insert(index + 1, "not".to_string()),
            }
            return result;
        }

        let (aux, verb_index, base) = self.do_support(words);
        let mut negated: Vec<String> = words[..verb_index].to_vec();
        if contract {
            let contracted = self.tables.contractions.get(aux).copied().unwrap_or(aux);
            negated.push(contracted.to_string());
        } else {
            negated.push(aux.to_string());
            negated.push("not".to_string());
        }
        negated.extend(base);
        negated.extend(words.iter().skip(verb_index + 1).cloned());
        negated
    }

    fn yes_no_question(&self, _overrides: &Overrides, words: &[String]) -> Vec<String> {
        if words.is_empty() {
            return Vec::new();
        }
        if let Some(index) = self.first_auxiliary(words) {
            let mut result = words.to_vec();
            let (aux, split) = match self.auxiliary_clitic(&words[index]) {
                Some((host, clitic, full)) if clitic != "n't" => {
                    result[index] = host.to_string();
                    let aux = self.expand_clitic(clitic, full, words.get(index + 1));
                    (aux.to_string(), true)
                }
                _ => (result.remove(index), false),
            };
            if (index > 0 || split) && !result.is_empty() {
                result[0] = self.demote(&result[0]);
            }
            result.insert(0, capitalize(&aux.to_lowercase()));
            return result;
        }

        let (aux, verb_index, base) = self.do_support(words);
        let mut question = vec![capitalize(aux)];
        question.extend(words[..verb_index].iter().cloned());
        question[1] = self.demote(&question[1]);
        question.extend(base);
        question.extend(words.iter().skip(verb_index + 1).cloned());
        question
    }

    fn wh_question(&self, overrides: &Overrides, words: &[String], wh_word: &str) -> Vec<String> {
        let mut question = self.yes_no_question(overrides, words);
        if let Some(first) = question.first_mut() {
            *first = first.to_lowercase();
        }
        question.insert(0, capitalize(&wh_word.to_lowercase()));
        question
    }
}
