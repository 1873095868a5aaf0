//! Fixed tag vocabularies used as classification predicates.
//!
//! Every heuristic in this crate is a set-membership test against one of the
//! tables below. Coarse part-of-speech tags are the 17 Universal POS tags plus
//! spaCy's `SPACE` for whitespace tokens;
//! dependency labels are kept as strings because annotators mix the ClearNLP
//! and Universal Dependencies label schemes (`dobj` next to `obl:agent`).

use std::fmt;
use std::str::FromStr;

use crate::AnnotationError;

/// Universal POS tag (coarse part-of-speech). `Space` is spaCy's tag for
/// whitespace tokens and belongs to no tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl Pos {
    pub const ALL: [Pos; 18] = [
        Pos::Adj,
        Pos::Adp,
        Pos::Adv,
        Pos::Aux,
        Pos::Cconj,
        Pos::Det,
        Pos::Intj,
        Pos::Noun,
        Pos::Num,
        Pos::Part,
        Pos::Pron,
        Pos::Propn,
        Pos::Punct,
        Pos::Sconj,
        Pos::Sym,
        Pos::Verb,
        Pos::X,
        Pos::Space,
    ];

    /// The tag as the annotator spells it (`"PROPN"`, `"CCONJ"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
            Pos::Space => "SPACE",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pos::ALL
            .iter()
            .copied()
            .find(|pos| pos.as_str() == s)
            .ok_or_else(|| AnnotationError::UnknownPos(s.to_string()))
    }
}

/// Groups of coarse tags the extractors branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosClass {
    /// Tags allowed inside a noun phrase while walking left dependents.
    NounEligible,
    /// Right dependents of a left dependent that get pulled into the phrase.
    RightNoun,
    /// Tags making up a chunk that is nothing but nouns.
    PureNoun,
    /// Chunk roots that always make a chunk worth emitting.
    ObjectHead,
    /// Tokens that can anchor a verb phrase.
    VerbAnchor,
    /// Left dependents that can pull the start of a verb phrase backwards.
    VerbStart,
    /// Neighbors absorbed while extending a verb phrase to the right.
    VerbExtension,
}

const NOUN_ELIGIBLE: &[Pos] = &[
    Pos::Propn,
    Pos::Noun,
    Pos::Num,
    Pos::Adj,
    Pos::Det,
    Pos::Cconj,
    Pos::Part,
];
const RIGHT_NOUN: &[Pos] = &[Pos::Part];
const PURE_NOUN: &[Pos] = &[Pos::Noun, Pos::Propn, Pos::Cconj];
const OBJECT_HEAD: &[Pos] = &[Pos::Noun, Pos::Propn];
const VERB_ANCHOR: &[Pos] = &[Pos::Verb, Pos::Aux];
const VERB_START: &[Pos] = &[Pos::Aux, Pos::Verb, Pos::Part];
const VERB_EXTENSION: &[Pos] = &[Pos::Verb, Pos::Part, Pos::Adv, Pos::Aux, Pos::Adj];

impl PosClass {
    pub fn members(self) -> &'static [Pos] {
        match self {
            PosClass::NounEligible => NOUN_ELIGIBLE,
            PosClass::RightNoun => RIGHT_NOUN,
            PosClass::PureNoun => PURE_NOUN,
            PosClass::ObjectHead => OBJECT_HEAD,
            PosClass::VerbAnchor => VERB_ANCHOR,
            PosClass::VerbStart => VERB_START,
            PosClass::VerbExtension => VERB_EXTENSION,
        }
    }

    pub fn contains(self, pos: Pos) -> bool {
        self.members().contains(&pos)
    }
}

/// Groups of dependency labels describing the role a token plays for its governor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepRole {
    /// Object-like relations; a native chunk rooted here is always emitted.
    Object,
    /// "Is-a" and modifier relations that seed a left-expanded noun phrase.
    Modifier,
}

const OBJECT_DEPS: &[&str] = &[
    "dobj",
    "dative",
    "iobj",
    "pobj",
    "pcomp",
    "xcomp",
    "nsubjpass",
    "csubjpass",
    "acl:relcl",
    "oprd",
    "conj",
    "case",
    "acomp",
    "appos",
    "compound",
];

const MODIFIER_DEPS: &[&str] = &[
    "amod",
    "advmod",
    "nmod:npmod",
    "acl",
    "dep",
    "nummod",
    "compound:prt",
    "nsubj",
    "csubj",
    "agent",
    "obl:agent",
    "npadvmod",
];

impl DepRole {
    pub fn members(self) -> &'static [&'static str] {
        match self {
            DepRole::Object => OBJECT_DEPS,
            DepRole::Modifier => MODIFIER_DEPS,
        }
    }

    pub fn contains(self, dep: &str) -> bool {
        self.members().contains(&dep)
    }
}

/// Clausal complement; a left verb dependent with this label never starts a verb phrase.
pub const CLAUSAL_COMPLEMENT: &str = "ccomp";

/// ASCII punctuation. A lemma that is a substring of this counts as punctuation.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub(crate) fn is_punctuation(lemma: &str) -> bool {
    PUNCTUATION.contains(lemma.to_lowercase().as_str())
}
