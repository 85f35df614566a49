use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;

const ATTRIBUTE_LABELS: &[(&str, &[&str])] = &[
    ("暗", &["DARK"]),
    ("光", &["LIGHT"]),
    ("水", &["WATER"]),
    ("炎", &["FIRE"]),
    ("地", &["EARTH"]),
    ("风", &["WIND"]),
    ("神", &["DIVINE"]),
];

const RACE_LABELS: &[(&str, &[&str])] = &[
    ("龙族", &["Dragon"]),
    ("魔法师族", &["Spellcaster"]),
    ("战士族", &["Warrior"]),
    ("兽战士族", &["Beast-Warrior"]),
    ("恶魔族", &["Fiend"]),
    ("天使族", &["Fairy"]),
    ("不死族", &["Zombie"]),
    ("机械族", &["Machine"]),
    ("水族", &["Aqua"]),
    ("炎族", &["Pyro"]),
    ("岩石族", &["Rock"]),
    ("鸟兽族", &["Winged Beast"]),
    ("植物族", &["Plant"]),
    ("昆虫族", &["Insect"]),
    ("雷族", &["Thunder"]),
    ("鱼族", &["Fish"]),
    ("海龙族", &["Sea Serpent"]),
    ("爬虫类族", &["Reptile"]),
    ("恐龙族", &["Dinosaur"]),
    ("幻神兽族", &["Divine-Beast"]),
    ("创造神族", &["Creator-God", "Creator God"]),
];

lazy_static! {
    pub static ref ATTRIBUTES: ReferenceList = ReferenceList::with_aliases(ATTRIBUTE_LABELS);
    pub static ref RACES: ReferenceList = ReferenceList::with_aliases(RACE_LABELS);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReferenceEntry {
    label: String,
    aliases: Vec<String>,
}

impl ReferenceEntry {
    fn matches(&self, label: &str) -> bool {
        self.label.eq_ignore_ascii_case(label)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(label))
    }
}

/// Ordered category labels. The position of a label is its ordinal value
/// when scoring guesses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceList {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceList {
    pub fn with_aliases(labels: &[(&str, &[&str])]) -> Self {
        ReferenceList {
            entries: labels
                .iter()
                .map(|(label, aliases)| ReferenceEntry {
                    label: label.to_string(),
                    aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
                })
                .collect(),
        }
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        self.entries.iter().position(|entry| entry.matches(label))
    }

    /// Canonical label for `label`, which may be an alias.
    pub fn canonical(&self, label: &str) -> Option<&str> {
        self.index_of(label)
            .map(|index| self.entries[index].label.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut labels = self.labels().map(str::to_string).collect::<Vec<String>>();
        labels.shuffle(rng);
        labels
    }
}

#[cfg(test)]
impl ReferenceList {
    pub fn new(labels: &[&str]) -> Self {
        ReferenceList {
            entries: labels
                .iter()
                .map(|label| ReferenceEntry {
                    label: label.to_string(),
                    aliases: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_of_canonical_and_alias() {
        assert_eq!(ATTRIBUTES.index_of("暗"), Some(0));
        assert_eq!(ATTRIBUTES.index_of("FIRE"), Some(3));
        assert_eq!(ATTRIBUTES.index_of(" fire "), Some(3));
        assert_eq!(RACES.index_of("Winged Beast"), Some(11));
        assert_eq!(RACES.index_of("Creator God"), Some(20));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(ATTRIBUTES.index_of("LAUGH"), None);
        assert_eq!(ATTRIBUTES.index_of(""), None);
        assert_eq!(RACES.index_of("Cyberse"), None);
    }

    #[test]
    fn test_canonical() {
        assert_eq!(RACES.canonical("dragon"), Some("龙族"));
        assert_eq!(ATTRIBUTES.canonical("神"), Some("神"));
        assert_eq!(ATTRIBUTES.canonical("Wyrm"), None);
    }

    #[test]
    fn test_plain_list() {
        let list = ReferenceList::new(&["a", "b", "c"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.index_of("c"), Some(2));
        assert!(ReferenceList::default().is_empty());
    }

    #[test]
    fn test_shuffled_keeps_every_label_once() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let shuffled = RACES.shuffled(&mut rng);
            assert_eq!(shuffled.len(), RACES.len());

            let unique = shuffled.iter().map(String::as_str).collect::<HashSet<&str>>();
            let expected = RACES.labels().collect::<HashSet<&str>>();
            assert_eq!(unique, expected);
        }
    }
}
