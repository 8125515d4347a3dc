//*** START FILE: src/nlp/lemmatizer.rs ***//
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::VocabError;

// Irregular forms and contraction pieces. Looked up before any suffix rule.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"),
    ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("said", "say"), ("says", "say"), ("made", "make"), ("got", "get"), ("gotten", "get"),
    ("knew", "know"), ("known", "know"), ("thought", "think"),
    ("took", "take"), ("taken", "take"), ("saw", "see"), ("seen", "see"),
    ("came", "come"), ("gave", "give"), ("given", "give"), ("found", "find"),
    ("told", "tell"), ("became", "become"), ("left", "leave"), ("felt", "feel"),
    ("brought", "bring"), ("began", "begin"), ("begun", "begin"), ("kept", "keep"),
    ("held", "hold"), ("wrote", "write"), ("written", "write"), ("stood", "stand"),
    ("heard", "hear"), ("meant", "mean"), ("met", "meet"), ("ran", "run"),
    ("paid", "pay"), ("sat", "sit"), ("spoke", "speak"), ("spoken", "speak"),
    ("led", "lead"), ("grew", "grow"), ("grown", "grow"), ("lost", "lose"),
    ("fell", "fall"), ("fallen", "fall"), ("sent", "send"), ("built", "build"),
    ("understood", "understand"), ("drew", "draw"), ("drawn", "draw"),
    ("broke", "break"), ("broken", "break"), ("spent", "spend"),
    ("risen", "rise"), ("drove", "drive"), ("driven", "drive"), ("bought", "buy"),
    ("wore", "wear"), ("worn", "wear"), ("chose", "choose"), ("chosen", "choose"),
    ("sought", "seek"), ("threw", "throw"), ("thrown", "throw"), ("caught", "catch"),
    ("dealt", "deal"), ("won", "win"), ("forgot", "forget"), ("forgotten", "forget"),
    ("taught", "teach"), ("ate", "eat"), ("eaten", "eat"), ("sold", "sell"),
    ("fought", "fight"), ("flew", "fly"), ("flown", "fly"), ("drank", "drink"),
    ("drunk", "drink"), ("sang", "sing"), ("sung", "sing"), ("swam", "swim"),
    ("swum", "swim"), ("slept", "sleep"), ("hid", "hide"), ("hidden", "hide"),
    ("shook", "shake"), ("shaken", "shake"), ("stole", "steal"), ("stolen", "steal"),
    ("forgave", "forgive"), ("forgiven", "forgive"), ("hung", "hang"),
    ("bitten", "bite"), ("lit", "light"), ("fed", "feed"), ("bled", "bleed"),
    ("shot", "shoot"), ("rang", "ring"), ("rung", "ring"), ("woke", "wake"),
    ("woken", "wake"), ("froze", "freeze"), ("frozen", "freeze"), ("dug", "dig"),
    ("stuck", "stick"), ("struck", "strike"), ("swore", "swear"), ("sworn", "swear"),
    ("tore", "tear"), ("torn", "tear"), ("lent", "lend"), ("bent", "bend"),
    ("fled", "flee"), ("slid", "slide"), ("spun", "spin"), ("wept", "weep"),
    ("laid", "lay"), ("rode", "ride"), ("ridden", "ride"), ("overcame", "overcome"),
    ("dying", "die"), ("lying", "lie"), ("tying", "tie"),
    ("died", "die"), ("lied", "lie"), ("tied", "tie"),
    ("used", "use"), ("uses", "use"), ("agreed", "agree"), ("freed", "free"),
    ("guaranteed", "guarantee"), ("created", "create"), ("creating", "create"),
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("wives", "wife"),
    ("knives", "knife"), ("halves", "half"), ("shelves", "shelf"),
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("happier", "happy"), ("easier", "easy"), ("earlier", "early"), ("busier", "busy"),
    ("heavier", "heavy"), ("funnier", "funny"), ("prettier", "pretty"),
    ("angrier", "angry"), ("luckier", "lucky"), ("crazier", "crazy"),
    ("noisier", "noisy"), ("healthier", "healthy"), ("wealthier", "wealthy"),
    ("tinier", "tiny"), ("emptier", "empty"), ("dirtier", "dirty"), ("lazier", "lazy"),
    ("n't", "not"), ("'re", "be"), ("'m", "be"), ("'ve", "have"), ("'ll", "will"),
    ("'d", "would"), ("ca", "can"), ("wo", "will"), ("sha", "shall"),
];

// Words that look inflected but are already base forms.
const INVARIANT_FORMS: &[&str] = &[
    "this", "his", "its", "us", "yes", "thus", "plus", "bus", "gas", "bias", "atlas",
    "canvas", "chaos", "christmas", "always", "perhaps", "news", "series", "species",
    "means", "physics", "mathematics", "politics", "economics", "lens", "alas",
    "during", "morning", "evening", "nothing", "something", "anything", "everything",
    "ceiling", "wedding", "pudding", "darling", "ought", "need", "speed", "seed",
    "feed", "bleed", "breed", "greed", "weed", "indeed", "proceed", "succeed", "exceed",
    "hundred", "red", "bed", "shed", "sled", "naked", "wicked", "sacred", "kindred",
];

// Base forms the `-ed`/`-ing` rules would otherwise get wrong, either by adding a
// silent `e` (`visit`, `focus`) or by leaving it off (`invite`, `become`).
const BASE_FORMS: &[&str] = &[
    // no final e
    "visit", "limit", "edit", "credit", "exhibit", "inherit", "prohibit", "inhibit",
    "profit", "benefit", "deposit", "vomit", "audit", "merit", "orbit", "solicit",
    "elicit", "focus", "bias", "canvas", "combat", "debut", "pivot", "pilot", "ballot",
    "gallop", "gossip", "worship", "develop", "envelop", "pencil", "stencil", "peril",
    "order", "honor", "favor", "labor", "color", "humor", "rumor", "flavor", "savor",
    "harbor", "anchor", "author", "mentor", "tutor", "monitor", "mirror", "endeavor",
    "belong", "long", "wrong", "bang", "hang", "ring", "sing", "bring", "swing", "sting",
    "cling", "fling", "string", "spring", "wing", "ping", "throng", "prolong",
    "cancel", "travel", "control", "label", "model", "level", "signal", "total",
    "patrol", "fuel", "dial", "equal", "compel", "expel", "propel", "excel", "rebel",
    "enrol", "fulfil", "instil", "distil", "counsel", "marvel", "quarrel", "shovel",
    "tunnel", "channel", "funnel", "panel", "blossom", "ransom", "abandon",
    // final e
    "invite", "unite", "excite", "recite", "ignite", "incite", "complete", "compete",
    "delete", "quote", "require", "acquire", "inquire", "guide", "persuade", "welcome",
    "become", "overcome", "seize", "squeeze", "breathe", "bathe", "loathe", "soothe",
    "use", "argue", "queue", "issue", "value", "continue", "rescue", "pursue",
];

/// Rule-based English lemmatizer: irregular table, then suffix stripping.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lemmas: HashMap<String, String>,
    invariants: HashSet<String>,
    base_forms: HashSet<String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Lemmatizer {
            lemmas: IRREGULAR_FORMS
                .iter()
                .map(|&(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            invariants: INVARIANT_FORMS.iter().map(|&s| s.to_string()).collect(),
            base_forms: BASE_FORMS.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// Layers `form -> lemma` pairs over the built-in table. Keys and values
    /// are trimmed and lowercased; empty pairs are skipped.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        for (form, lemma) in overrides {
            let form = form.trim().to_lowercase();
            let lemma = lemma.trim().to_lowercase();
            if form.is_empty() || lemma.is_empty() {
                tracing::warn!("Skipping empty lemma override ('{}' -> '{}')", form, lemma);
                continue;
            }
            self.invariants.remove(&form);
            self.lemmas.insert(form, lemma);
        }
        self
    }

    /// Reads a JSON object of `"form": "lemma"` pairs and layers it over the table.
    pub fn with_overrides_file(self, path: &Path) -> Result<Self, VocabError> {
        let contents = fs::read_to_string(path).map_err(|e| VocabError::io(path, e))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&contents).map_err(|e| {
            VocabError::DecodeFailure(format!("lemma overrides {}: {}", path.display(), e))
        })?;
        tracing::debug!("Loaded {} lemma overrides from {}", overrides.len(), path.display());
        Ok(self.with_overrides(overrides))
    }

    pub fn size(&self) -> usize {
        self.lemmas.len()
    }

    pub fn lemmatize(&self, word: &str) -> String {
        let cleaned = word.trim().to_lowercase().replace('\u{2019}', "'");
        if let Some(lemma) = self.lemmas.get(&cleaned) {
            return lemma.clone();
        }
        if self.invariants.contains(&cleaned)
            || cleaned.len() <= 3
            || !cleaned.chars().all(|c| c.is_ascii_alphabetic())
        {
            return cleaned;
        }
        self.strip_suffix(&cleaned).unwrap_or(cleaned)
    }

    /// Undoes consonant doubling and restores a dropped silent `e` on a stem
    /// left over after removing `-ing` or `-ed`. Known base forms win over the rules.
    fn restore_stem(&self, stem: &str) -> String {
        if self.base_forms.contains(stem) {
            return stem.to_string();
        }
        let with_e = format!("{}e", stem);
        if self.base_forms.contains(&with_e) {
            return with_e;
        }

        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n >= 2 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) {
            // Stems are ASCII here, so dropping the last byte drops the last char.
            let undoubled = &stem[..stem.len() - 1];
            if self.base_forms.contains(undoubled) {
                return undoubled.to_string();
            }
            if !matches!(chars[n - 1], 'l' | 's' | 'f' | 'z') && ends_cvc(undoubled) {
                return undoubled.to_string();
            }
            return stem.to_string();
        }
        if needs_silent_e(stem) {
            return with_e;
        }
        stem.to_string()
    }

    fn strip_suffix(&self, word: &str) -> Option<String> {
        let len = word.len();
        if let Some(stem) = word.strip_suffix("iest") {
            if len > 5 {
                return Some(format!("{}y", stem));
            }
        }
        if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
            if len > 4 {
                return Some(format!("{}y", stem));
            }
            return None;
        }
        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 2 && has_vowel(stem) {
                return Some(self.restore_stem(stem));
            }
            return None;
        }
        if word.ends_with("eed") {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.len() >= 3 && has_vowel(stem) {
                return Some(self.restore_stem(stem));
            }
            return None;
        }
        if let Some(stem) = word.strip_suffix("es") {
            if stem.ends_with("ss")
                || stem.ends_with("zz")
                || stem.ends_with('x')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return Some(stem.to_string());
            }
        }
        if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
            return Some(word[..len - 1].to_string());
        }
        None
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

fn syllables(s: &str) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;
    for (i, c) in s.chars().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && i > 0);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count
}

/// consonant, single vowel, consonant (not w/x/y) at the end of `s`.
fn ends_cvc(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n < 3 {
        return false;
    }
    let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, 'w' | 'x' | 'y')
}

fn needs_silent_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    let last = chars[n - 1];
    if matches!(last, 'v' | 'u' | 'c') {
        return true;
    }
    if n >= 2 {
        let prev = chars[n - 2];
        // one vowel letter before the final consonant: the `i` of `decid`, not the `ai` of `wait`
        let lone = |vowels: &[char]| vowels.contains(&prev) && (n < 3 || !is_vowel(chars[n - 3]));
        let restore = match last {
            's' => prev != 's',
            'z' => is_vowel(prev) || prev == 'y',
            'g' => matches!(prev, 'n' | 'r' | 'd') || lone(&['a', 'e', 'i', 'o', 'u']),
            'l' => (!is_vowel(prev) && !matches!(prev, 'l' | 'r' | 'n' | 'w' | 'y')) || lone(&['i', 'o', 'u']),
            'r' | 'd' | 'k' | 'b' | 'p' => lone(&['a', 'i', 'o', 'u']),
            't' => lone(&['a', 'o', 'u']),
            'n' => lone(&['a', 'i', 'u']),
            'm' => lone(&['a', 'u']),
            _ => false,
        };
        if restore {
            return true;
        }
    }
    syllables(stem) == 1 && ends_cvc(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        Lemmatizer::new().lemmatize(word)
    }

    #[test]
    fn regular_past_and_progressive() {
        assert_eq!(lemma("reminded"), "remind");
        assert_eq!(lemma("Reminding"), "remind");
        assert_eq!(lemma("played"), "play");
        assert_eq!(lemma("visited"), "visit");
    }

    #[test]
    fn consonant_doubling_is_undone() {
        assert_eq!(lemma("stopped"), "stop");
        assert_eq!(lemma("running"), "run");
        assert_eq!(lemma("occurred"), "occur");
        assert_eq!(lemma("called"), "call");
        assert_eq!(lemma("added"), "add");
    }

    #[test]
    fn silent_e_is_restored() {
        assert_eq!(lemma("hoped"), "hope");
        assert_eq!(lemma("making"), "make");
        assert_eq!(lemma("arrived"), "arrive");
        assert_eq!(lemma("realized"), "realize");
        assert_eq!(lemma("handled"), "handle");
        assert_eq!(lemma("continued"), "continue");
        assert_eq!(lemma("danced"), "dance");
    }

    #[test]
    fn silent_e_after_common_consonants() {
        assert_eq!(lemma("decided"), "decide");
        assert_eq!(lemma("promised"), "promise");
        assert_eq!(lemma("using"), "use");
        assert_eq!(lemma("changed"), "change");
        assert_eq!(lemma("prepared"), "prepare");
        assert_eq!(lemma("caused"), "cause");
        assert_eq!(lemma("realised"), "realise");
        assert_eq!(lemma("managed"), "manage");
        assert_eq!(lemma("determined"), "determine");
        assert_eq!(lemma("included"), "include");
        assert_eq!(lemma("amazing"), "amaze");
    }

    #[test]
    fn no_silent_e_where_the_base_has_none() {
        assert_eq!(lemma("waited"), "wait");
        assert_eq!(lemma("opened"), "open");
        assert_eq!(lemma("answered"), "answer");
        assert_eq!(lemma("looked"), "look");
        assert_eq!(lemma("developed"), "develop");
        assert_eq!(lemma("failed"), "fail");
    }

    #[test]
    fn known_base_forms_override_the_rules() {
        assert_eq!(lemma("visited"), "visit");
        assert_eq!(lemma("focused"), "focus");
        assert_eq!(lemma("belonged"), "belong");
        assert_eq!(lemma("bringing"), "bring");
        assert_eq!(lemma("cancelled"), "cancel");
        assert_eq!(lemma("becoming"), "become");
        assert_eq!(lemma("invited"), "invite");
        assert_eq!(lemma("required"), "require");
    }

    #[test]
    fn plurals_and_third_person() {
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("watches"), "watch");
        assert_eq!(lemma("makes"), "make");
        assert_eq!(lemma("promises"), "promise");
        assert_eq!(lemma("studies"), "study");
        assert_eq!(lemma("classes"), "class");
    }

    #[test]
    fn irregulars_and_invariants() {
        assert_eq!(lemma("went"), "go");
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("n't"), "not");
        assert_eq!(lemma("n\u{2019}t"), "not");
        assert_eq!(lemma("news"), "news");
        assert_eq!(lemma("morning"), "morning");
        assert_eq!(lemma("thing"), "thing");
        assert_eq!(lemma("need"), "need");
    }

    #[test]
    fn non_words_lemmatize_to_themselves() {
        assert_eq!(lemma("."), ".");
        assert_eq!(lemma("1990s"), "1990s");
        assert_eq!(lemma("café"), "café");
    }

    #[test]
    fn overrides_take_precedence() {
        let mut extra = HashMap::new();
        extra.insert("News".to_string(), "new".to_string());
        extra.insert("  ".to_string(), "x".to_string());
        let lemmatizer = Lemmatizer::new().with_overrides(extra);
        assert_eq!(lemmatizer.lemmatize("news"), "new");
        assert_eq!(lemmatizer.size(), Lemmatizer::new().size() + 1);
    }

    #[test]
    fn malformed_overrides_file_is_decode_failure() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[1, 2]").unwrap();
        assert!(matches!(
            Lemmatizer::new().with_overrides_file(file.path()),
            Err(VocabError::DecodeFailure(_))
        ));
    }
}
//*** END FILE: src/nlp/lemmatizer.rs ***//
