// addon version compare
//
// --- General rules ---
//
// 1. Fields are compared in a fixed priority order:
//        major, minor1, minor2, minor3, alpha, alpha_ver, pre, pre_ver
// 2. '*' is greater than any number in the same field, and equal to another '*'
// 3. alpha is LESS than beta is LESS than final        (a < b < no letter)
// 4.   pre is LESS than non-pre
// 5. A missing number is 0, unless the number before it was '*', then it is '*' as well.
//    alpha_ver and pre_ver start over, they never inherit '*' from the release numbers.
//
// --- General Form ---
//
// major [.minor1 [.minor2 [.minor3]]] [a|b] [alpha_ver] [pre [pre_ver]]
//
// examples: 3.6
//           3.6.*
//           3.5.0a1pre2
//           4.0b12
//           *
//
// The dots between release numbers are optional ("5*" is "5.*").
// pre_ver is a single digit. Anything left over after the match is ignored.
// Input that does not start with a number or '*' is the zero version, it is never an error.
//
// --- Legacy integer ---
//
// Some consumers want one number to sort on. version_int() packs the filled fields into a
// decimal string:
//
//     major | minor1 | minor2 | minor3 | alpha | alpha_ver | pre | pre_ver
//     %d    | %02d   | %02d   | %02d   | %d    | %02d      | %d  | %02d
//
// major is capped at 65535, every other number at 99, '*' becomes the cap.
// alpha: a=0 b=1 none=2, pre: pre=0 none=1
//
//     3.5.0a1pre2 -> 3 05 00 00 0 01 0 02 -> 3050000001002
//
// This is lossy. "3.6.*.0" and "3.6.99" are the same integer but not the same VersionString.

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// largest value a major number can encode to, and the default number for '*'
pub const MAX_VERSION_PART: u64 = (1 << 16) - 1;

/// largest value any non-major number can encode to
pub const MINOR_PART_CAP: u64 = 99;

pub const BIGINT_POSITIVE_MAX: i64 = i64::MAX;

const WILDCARD: &str = "*";

fn version_re() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?x)
            ^(?P<major>[0-9]+|\*)        # x in x.y
            \.?(?P<minor1>[0-9]+|\*)?    # y in x.y
            \.?(?P<minor2>[0-9]+|\*)?    # z in x.y.z
            \.?(?P<minor3>[0-9]+|\*)?    # w in x.y.z.w
            (?P<alpha>[ab]?)             # alpha/beta
            (?P<alpha_ver>[0-9]*)        # alpha/beta version
            (?P<pre>pre)?                # pre release
            (?P<pre_ver>[0-9])?          # pre release version
            ",
        )
        .expect("version pattern is valid")
    })
}

// --- Field ---------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor1,
    Minor2,
    Minor3,
    Alpha,
    AlphaVer,
    Pre,
    PreVer,
}

impl Field {
    /// every field, most significant first
    pub const ALL: [Field; 8] = [
        Field::Major,
        Field::Minor1,
        Field::Minor2,
        Field::Minor3,
        Field::Alpha,
        Field::AlphaVer,
        Field::Pre,
        Field::PreVer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor1 => "minor1",
            Field::Minor2 => "minor2",
            Field::Minor3 => "minor3",
            Field::Alpha => "alpha",
            Field::AlphaVer => "alpha_ver",
            Field::Pre => "pre",
            Field::PreVer => "pre_ver",
        }
    }

    /// the most a numeric field can hold in the legacy integer
    pub fn cap(self) -> u64 {
        match self {
            Field::Major => MAX_VERSION_PART,
            _ => MINOR_PART_CAP,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---/Field ---------------------------------------------------------

// --- Part / Component ----------------------------------------------

/// A numeric field as it was matched, before any defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Part {
    #[default]
    Absent,
    Number(u64),
    Wildcard,
}

impl Part {
    fn from_match(m: Option<&str>, wildcard: Part) -> Part {
        match m {
            None | Some("") => Part::Absent,
            Some(WILDCARD) => wildcard,
            Some(digits) => Part::Number(parse_digits(digits)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Part::Absent)
    }
}

// digit runs too long for a u64 saturate, they never fail
fn parse_digits(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

impl Serialize for Part {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Part::Absent => serializer.serialize_none(),
            Part::Number(n) => serializer.serialize_u64(*n),
            Part::Wildcard => serializer.serialize_str(WILDCARD),
        }
    }
}

/// A numeric field after defaults are filled in. There is no absent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Number(u64),
    Wildcard,
}

impl Component {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Component::Wildcard)
    }

    /// Project onto a bounded number. '*' becomes the cap.
    pub fn clamp(self, cap: u64) -> u64 {
        match self {
            Component::Wildcard => cap,
            Component::Number(n) => n.min(cap),
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Component::Number(n) => serializer.serialize_u64(*n),
            Component::Wildcard => serializer.serialize_str(WILDCARD),
        }
    }
}

/// Three way compare of one field.
/// If exactly one side is '*' that side is greater, otherwise compare the values.
pub fn compare_part(a: Component, b: Component) -> Ordering {
    match (a, b) {
        (Component::Wildcard, Component::Number(_)) => Ordering::Greater,
        (Component::Number(_), Component::Wildcard) => Ordering::Less,
        (Component::Wildcard, Component::Wildcard) => Ordering::Equal,
        (Component::Number(a), Component::Number(b)) => a.cmp(&b),
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_part(*self, *other)
    }
}

// ---/Part / Component ----------------------------------------------

// --- Stage ---------------------------------------------------------

/// release stage marker, `a` or `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Alpha,
    Beta,
}

impl Stage {
    fn from_letter(s: &str) -> Option<Stage> {
        match s {
            "a" => Some(Stage::Alpha),
            "b" => Some(Stage::Beta),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Stage::Alpha => "a",
            Stage::Beta => "b",
        }
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.letter())
    }
}

const PRE: &str = "pre";

// an absent letter is "" in a filled breakdown
fn stage_or_empty<S: Serializer>(stage: &Option<Stage>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(stage.map_or("", Stage::letter))
}

fn pre_or_null<S: Serializer>(pre: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    match pre {
        true => serializer.serialize_str(PRE),
        false => serializer.serialize_none(),
    }
}

fn pre_or_empty<S: Serializer>(pre: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *pre { PRE } else { "" })
}

// ---/Stage ---------------------------------------------------------

// --- Breakdown -----------------------------------------------------

/// The fields of a version string exactly as they matched. No defaults are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Breakdown {
    pub major: Part,
    pub minor1: Part,
    pub minor2: Part,
    pub minor3: Part,
    pub alpha: Option<Stage>,
    pub alpha_ver: Part,
    #[serde(serialize_with = "pre_or_null")]
    pub pre: bool,
    pub pre_ver: Part,
}

/// Break a version string into its fields.
///
/// `*` becomes `wildcard`. Pass [Part::Wildcard] to keep it symbolic, or a
/// [Part::Number] to have it read as that number.
/// Text that does not start with a number or `*` gives an all-absent breakdown.
pub fn parse(text: &str, wildcard: Part) -> Breakdown {

    let Some(caps) = version_re().captures(text) else {
        tracing::trace!(version = text, "no leading version number, all fields absent");
        return Breakdown::default();
    };

    let part = |field: Field| Part::from_match(caps.name(field.name()).map(|m| m.as_str()), wildcard);

    Breakdown {
        major: part(Field::Major),
        minor1: part(Field::Minor1),
        minor2: part(Field::Minor2),
        minor3: part(Field::Minor3),
        alpha: caps.name(Field::Alpha.name()).and_then(|m| Stage::from_letter(m.as_str())),
        alpha_ver: part(Field::AlphaVer),
        pre: caps.name(Field::Pre.name()).is_some(),
        pre_ver: part(Field::PreVer),
    }
}

/// [parse] with `*` read as [MAX_VERSION_PART]
pub fn version_dict(text: &str) -> Breakdown {
    parse(text, Part::Number(MAX_VERSION_PART))
}

// ---/Breakdown -----------------------------------------------------

// --- FullBreakdown -------------------------------------------------

/// A breakdown with every numeric field resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FullBreakdown {
    pub major: Component,
    pub minor1: Component,
    pub minor2: Component,
    pub minor3: Component,
    #[serde(serialize_with = "stage_or_empty")]
    pub alpha: Option<Stage>,
    pub alpha_ver: Component,
    #[serde(serialize_with = "pre_or_empty")]
    pub pre: bool,
    pub pre_ver: Component,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Letters {
    // "" is just the empty string
    AsIs,
    // "" sorts after every marker
    AbsentLast,
}

// stands in for an absent letter when ordering, greater than "a", "b" and "pre"
const ABSENT_LETTER: &str = "z";

impl FullBreakdown {

    /// Fill defaults into a breakdown that was parsed with a symbolic wildcard.
    ///
    /// Absent numbers become 0, or '*' if the last present number was '*'.
    /// alpha_ver and pre_ver forget the last number before they are looked at.
    pub fn fill(vdict: &Breakdown) -> Self {

        let mut last: Option<Component> = None;

        let mut resolve = |field: Field, part: Part| -> Component {
            if matches!(field, Field::AlphaVer | Field::PreVer) {
                last = None;
            }
            match part {
                Part::Absent => {
                    if last == Some(Component::Wildcard) {
                        Component::Wildcard
                    } else {
                        Component::Number(0)
                    }
                }
                Part::Number(n) => {
                    last = Some(Component::Number(n));
                    Component::Number(n)
                }
                Part::Wildcard => {
                    last = Some(Component::Wildcard);
                    Component::Wildcard
                }
            }
        };

        let major = resolve(Field::Major, vdict.major);
        let minor1 = resolve(Field::Minor1, vdict.minor1);
        let minor2 = resolve(Field::Minor2, vdict.minor2);
        let minor3 = resolve(Field::Minor3, vdict.minor3);
        let alpha_ver = resolve(Field::AlphaVer, vdict.alpha_ver);
        let pre_ver = resolve(Field::PreVer, vdict.pre_ver);

        Self {
            major,
            minor1,
            minor2,
            minor3,
            alpha: vdict.alpha,
            alpha_ver,
            pre: vdict.pre,
            pre_ver,
        }
    }

    pub fn number(&self, field: Field) -> Option<Component> {
        match field {
            Field::Major => Some(self.major),
            Field::Minor1 => Some(self.minor1),
            Field::Minor2 => Some(self.minor2),
            Field::Minor3 => Some(self.minor3),
            Field::AlphaVer => Some(self.alpha_ver),
            Field::PreVer => Some(self.pre_ver),
            Field::Alpha | Field::Pre => None,
        }
    }

    fn letter(&self, field: Field) -> &'static str {
        match field {
            Field::Alpha => self.alpha.map_or("", Stage::letter),
            Field::Pre if self.pre => PRE,
            _ => "",
        }
    }

    fn cmp_field(&self, other: &Self, field: Field, letters: Letters) -> Ordering {
        match (self.number(field), other.number(field)) {
            (Some(a), Some(b)) => compare_part(a, b),
            _ => {
                let substitute = |s: &'static str| match (s, letters) {
                    ("", Letters::AbsentLast) => ABSENT_LETTER,
                    (s, _) => s,
                };
                substitute(self.letter(field)).cmp(substitute(other.letter(field)))
            }
        }
    }

    /// The legacy integer encoding, see the top of this file.
    pub fn version_int(&self) -> i64 {

        let num = |field: Field| {
            match self.number(field) {
                Some(Component::Number(n)) if n > field.cap() => {
                    tracing::trace!(field = field.name(), "{n} saturated to {}", field.cap());
                    field.cap()
                }
                Some(c) => c.clamp(field.cap()),
                None => 0,
            }
        };

        let alpha = match self.alpha {
            Some(Stage::Alpha) => 0,
            Some(Stage::Beta) => 1,
            None => 2,
        };
        let pre = if self.pre { 0 } else { 1 };

        let vint = format!(
            "{}{:02}{:02}{:02}{}{:02}{}{:02}",
            num(Field::Major),
            num(Field::Minor1),
            num(Field::Minor2),
            num(Field::Minor3),
            alpha,
            num(Field::AlphaVer),
            pre,
            num(Field::PreVer),
        );

        // all digits, so overflow is the only way to fail
        vint.parse::<i64>().unwrap_or(BIGINT_POSITIVE_MAX)
    }
}

// ---/FullBreakdown -------------------------------------------------

// --- VersionString -------------------------------------------------

/// A version string that compares by its filled breakdown and displays as the original text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VersionString {
    string: String,
    full: FullBreakdown,
}

impl VersionString {
    pub fn new(v: &str) -> Self {
        let vdict = parse(v, Part::Wildcard);
        Self {
            string: v.to_string(),
            full: FullBreakdown::fill(&vdict),
        }
    }

    pub fn as_str(&self) -> &str {
        self.string.as_str()
    }

    pub fn breakdown(&self) -> &FullBreakdown {
        &self.full
    }

    pub fn version_int(&self) -> i64 {
        self.full.version_int()
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &Self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| self.full.cmp_field(&other.full, field, Letters::AsIs).is_eq())
    }
}

impl Eq for VersionString {}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> Ordering {
        Field::ALL
            .iter()
            .map(|&field| self.full.cmp_field(&other.full, field, Letters::AbsentLast))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

// equal values have equal filled breakdowns
impl std::hash::Hash for VersionString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.full.hash(state);
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        let full = FullBreakdown::fill(&parse(&s, Part::Wildcard));
        Self { string: s, full }
    }
}

impl From<Option<&str>> for VersionString {
    fn from(s: Option<&str>) -> Self {
        Self::new(s.unwrap_or_default())
    }
}

impl From<VersionString> for String {
    fn from(v: VersionString) -> Self {
        v.string
    }
}

impl Default for VersionString {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::ops::Deref for VersionString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string)
    }
}

// ---/VersionString -------------------------------------------------

/// Convert a version string into a single number for comparison.
///
/// Minor parts are limited to 99, which makes this unsuitable for comparing
/// add-on versions. Use [VersionString] for that.
pub fn version_int<S: AsRef<str>>(version: S) -> i64 {
    VersionString::new(version.as_ref()).version_int()
}

#[cfg(test)]
mod test {

    use super::*;
    use std::collections::HashSet;

    fn vs(s: &str) -> VersionString {
        VersionString::new(s)
    }

    fn assert_order(versions: &[&str]) {

        for (i, s1) in versions.iter().enumerate() {
            for s2 in versions.iter().skip(i+1) {

                println!("s1: {s1}");
                println!("s2: {s2}");

                let v1 = vs(s1);
                let v2 = vs(s2);
                assert!(v1 < v2);
                assert!(v2 > v1);
                assert!(v1 != v2);
                assert!(matches!(v1.cmp(&v2), Ordering::Less));
                assert!(matches!(v2.cmp(&v1), Ordering::Greater));

                // coarser, but never backwards
                assert!(version_int(s1) <= version_int(s2));
            }
        }
    }

    #[test]
    fn order() {
        let versions = [
            "0a1",
            "0b1",
            "0",
            "0.0.0.1",

            // alpha < beta < final, pre < non-pre
            "1.0a1pre1",
            "1.0a1",
            "1.0a2",
            "1.0b1pre1",
            "1.0b1",
            "1.0pre1",
            "1.0",

            // '*' is greater than any number
            "1.0.*",
            "1.*",
            "2",

            "3.5.0a1pre2",
            "3.6a5pre9",
            "3.6b1",
            "3.6",
            "3.6.8",
            "3.6.65535",
            "3.6.*.0",
            "3.6.*",

            "98.*",
            "65535",
            "65536.65536.65536.65536",
            "*",
        ];

        assert_order(&versions);
    }

    #[test]
    fn version_int_values() {
        assert_eq!(version_int("3.5.0a1pre2"), 3050000001002);
        assert_eq!(version_int(""), 200100);
        assert_eq!(version_int("0"), 200100);
        assert_eq!(version_int("*"), 65535999999200100);
        assert_eq!(version_int("*.0"), 65535000000200100);
        assert_eq!(version_int(MAX_VERSION_PART.to_string()), 65535000000200100);
        assert_eq!(version_int((MAX_VERSION_PART + 1).to_string()), 65535000000200100);
        assert_eq!(version_int(format!("{MAX_VERSION_PART}.100")), 65535990000200100);
    }

    #[test]
    fn version_int_compare() {
        assert_eq!(version_int("3.6.0.*"), version_int("3.6.0.99"));
        assert_eq!(version_int("3.6.*.0"), version_int("3.6.99"));
        assert!(version_int("3.6.*") > version_int("3.6.8"));
        assert!(version_int("3.6.*") > version_int("3.6.99.98"));
        assert_eq!(version_int("*"), version_int("65535.99.99.99"));
        assert_eq!(version_int("*.0"), version_int("65535"));
        assert!(version_int("98.*") < version_int("*"));
        assert_eq!(version_int("5.*.0"), version_int("5.99"));
        assert!(version_int("5.*") > version_int("5.0.*"));
    }

    #[test]
    fn version_int_saturates() {
        assert_eq!(version_int("65536"), version_int("65535"));
        assert_eq!(version_int("65535.100"), version_int("65535.99"));
        assert_eq!(version_int("1.2.3a150pre7"), version_int("1.2.3a99pre7"));
        assert_eq!(version_int("99999999999999999999999999"), version_int("65535"));
        assert!(version_int("*.*.*.*a*pre9") <= BIGINT_POSITIVE_MAX);
    }

    #[test]
    fn degrade_to_zero() {
        let zero = vs("0.0.0.0");
        for s in ["", "garbage", "∅ non-numeric", "\u{2322} ugh stephend", ".1", "a1"] {
            let v = vs(s);
            assert_eq!(v, zero);
            assert_eq!(version_int(s), 200100);
            assert_eq!(parse(s, Part::Wildcard), Breakdown::default());
            assert_eq!(v.as_str(), s);
        }
        assert_eq!(VersionString::from(None), zero);
        assert_eq!(VersionString::default(), zero);
    }

    #[test]
    fn equality() {
        assert_eq!(vs("3.6.0.0"), vs("3.6"));
        assert_ne!(vs("3.6.*.0"), vs("3.6.*"));
        assert_eq!(vs("*"), vs("*.*.*.*"));
        assert_eq!(vs("5.*"), vs("5.*.*.*"));
        assert_ne!(vs("*.0.0.0"), vs("65535"));
        assert_ne!(vs("3.6.*"), vs("3.6.65535"));
        assert_ne!(vs("*"), vs("65535.65535.65535.65535"));
        assert_ne!(vs("*"), vs("65535.0.0.0"));
        assert_ne!(vs("3.6a5pre9"), vs("3.6"));

        // same integer, different values
        assert_ne!(vs("5.*.0"), vs("5.99"));
        assert_eq!(vs("5.*.0").version_int(), vs("5.99").version_int());

        // leading zeros are just numbers
        assert_eq!(vs("3.06"), vs("3.6"));
        // trailing text is ignored
        assert_eq!(vs("3.6-beta+build"), vs("3.6"));
    }

    #[test]
    fn comparison() {
        assert!(vs("3.6.*") > vs("3.6.8"));
        assert!(vs("3.6.*") > vs("3.6.65535"));
        assert!(vs("*") > vs("65535.0.0.1"));
        assert!(vs("*") > vs("65536.65536.65536.65536"));
        assert!(vs("*") > vs("98.*"));
        assert!(vs("98.*") < vs("*"));
        assert!(vs("65534.*") < vs("*"));
        assert!(vs("5.*") > vs("5.0.*"));
        assert!(vs("3.6a5pre9") < vs("3.6"));
        assert!(vs("3.6a5pre9") < vs("3.6b1"));
        assert!(vs("3.6b1") < vs("3.6"));
        assert!(vs("3.6.*") > vs("3.6a5pre9"));
        assert!(vs("99.99999999b1") > vs("99.99999998b1"));
        assert!(vs("99999999.99b1") > vs("99999998.99b1"));
        assert!(vs("*") > vs("99999998.99b1"));

        assert!(vs("3.6") <= vs("3.6.0"));
        assert!(vs("3.6") >= vs("3.6.0"));
        assert!(!(vs("3.6") > vs("3.6.0")));
    }

    #[test]
    fn total_order() {
        let versions = ["", "1", "1.0", "1a", "1b2", "1pre", "1.*", "*", "2.*.0", "2.99"];
        for a in versions {
            for b in versions {
                let (a, b) = (vs(a), vs(b));
                let holds = [a < b, a == b, a > b];
                assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{a:?} {b:?}");
                assert_eq!(a == b, b == a);
            }
        }
    }

    #[test]
    fn wildcard_dominance() {
        for n in [0, 1, 99, MAX_VERSION_PART, u64::MAX] {
            assert_eq!(compare_part(Component::Wildcard, Component::Number(n)), Ordering::Greater);
            assert_eq!(compare_part(Component::Number(n), Component::Wildcard), Ordering::Less);
        }
        assert_eq!(compare_part(Component::Wildcard, Component::Wildcard), Ordering::Equal);
        assert_eq!(compare_part(Component::Number(3), Component::Number(7)), Ordering::Less);
    }

    #[test]
    fn fill() {
        let full = FullBreakdown::fill(&parse("3.6.*", Part::Wildcard));
        assert_eq!(full.minor2, Component::Wildcard);
        assert_eq!(full.minor3, Component::Wildcard);

        // release '*' does not reach alpha_ver or pre_ver
        assert_eq!(full.alpha_ver, Component::Number(0));
        assert_eq!(full.pre_ver, Component::Number(0));

        // a present number stops the inheritance
        let full = FullBreakdown::fill(&parse("5.*.0", Part::Wildcard));
        assert_eq!(full.minor1, Component::Wildcard);
        assert_eq!(full.minor2, Component::Number(0));
        assert_eq!(full.minor3, Component::Number(0));

        let full = FullBreakdown::fill(&parse("1.0b", Part::Wildcard));
        assert_eq!(full.alpha, Some(Stage::Beta));
        assert_eq!(full.alpha_ver, Component::Number(0));
        assert!(!full.pre);
    }

    #[test]
    fn breakdown() {
        let vdict = version_dict("3.5.0a1pre2");
        assert_eq!(vdict, Breakdown {
            major: Part::Number(3),
            minor1: Part::Number(5),
            minor2: Part::Number(0),
            minor3: Part::Absent,
            alpha: Some(Stage::Alpha),
            alpha_ver: Part::Number(1),
            pre: true,
            pre_ver: Part::Number(2),
        });

        // pre_ver is a single digit, the rest is ignored
        assert_eq!(version_dict("1.0pre12").pre_ver, Part::Number(1));

        // dots are optional between release numbers
        assert_eq!(version_dict("5*").minor1, Part::Number(MAX_VERSION_PART));

        // too big for u64
        assert_eq!(version_dict("99999999999999999999999").major, Part::Number(u64::MAX));
    }

    #[test]
    fn breakdown_wildcard_value() {
        let expected = |minor2| Breakdown {
            major: Part::Number(5),
            minor1: Part::Number(0),
            minor2,
            ..Breakdown::default()
        };
        assert_eq!(version_dict("5.0.*"), expected(Part::Number(65535)));
        assert_eq!(parse("5.0.*", Part::Number(1234)), expected(Part::Number(1234)));

        let vdict = parse("*.0.*", Part::Wildcard);
        assert_eq!(vdict, Breakdown {
            major: Part::Wildcard,
            minor1: Part::Number(0),
            minor2: Part::Wildcard,
            ..Breakdown::default()
        });
    }

    #[test]
    fn display_round_trip() {
        for s in ["3.6.*", "3.06", "  1.0 ", "garbage", "", "3.5.0a1pre2 extra"] {
            assert_eq!(vs(s).to_string(), s);
            assert_eq!(&*vs(s), s);
            assert_eq!(VersionString::from(s.to_string()).as_str(), s);
        }
    }

    #[test]
    fn hash_matches_eq() {
        let set: HashSet<VersionString> = ["3.6", "3.6.0", "3.6.0.0", "3.6.*", "3.6.*.*"]
            .into_iter()
            .map(VersionString::from)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde() {
        let v = vs("3.6.*");
        assert_eq!(serde_json::to_string(&v).unwrap(), r#""3.6.*""#);
        let back: VersionString = serde_json::from_str(r#""3.6.*""#).unwrap();
        assert_eq!(back.as_str(), "3.6.*");
        assert_eq!(back, v);

        let raw = serde_json::to_value(parse("5.0.*b", Part::Wildcard)).unwrap();
        assert_eq!(raw, serde_json::json!({
            "major": 5,
            "minor1": 0,
            "minor2": "*",
            "minor3": null,
            "alpha": "b",
            "alpha_ver": null,
            "pre": null,
            "pre_ver": null,
        }));

        let full = serde_json::to_value(vs("5.0.*pre").breakdown()).unwrap();
        assert_eq!(full, serde_json::json!({
            "major": 5,
            "minor1": 0,
            "minor2": "*",
            "minor3": "*",
            "alpha": "",
            "alpha_ver": 0,
            "pre": "pre",
            "pre_ver": 0,
        }));
    }
}
