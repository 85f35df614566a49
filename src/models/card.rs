use serde::{Deserialize, Deserializer};

const MONSTER_TYPE_MARKER: &str = "Monster";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "text_or_empty")]
    pub card_type: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub attribute: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub race: String,
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub level: u32,
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub atk: u32,
    #[serde(default, deserialize_with = "stat_or_zero")]
    pub def: u32,
    #[serde(default = "no_card_text", deserialize_with = "text_or_no_card_text")]
    pub desc: String,
}

impl Card {
    pub fn is_monster(&self) -> bool {
        self.card_type.contains(MONSTER_TYPE_MARKER)
    }
}

fn no_card_text() -> String {
    String::from("No card text")
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_no_card_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(no_card_text))
}

/// Stats arrive as numbers, numeric strings, null, or `-1` for "?" values.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStat {
    Int(i64),
    Float(f64),
    Text(String),
}

fn stat_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawStat>::deserialize(deserializer)? {
        Some(RawStat::Int(n)) => n,
        Some(RawStat::Float(f)) => f as i64,
        Some(RawStat::Text(s)) => s.trim().parse::<i64>().unwrap_or(0),
        None => 0,
    };

    Ok(value.clamp(0, u32::MAX as i64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_monster() {
        let json = r#"{
            "id": 89631139,
            "name": "Blue-Eyes White Dragon",
            "type": "Normal Monster",
            "frameType": "normal",
            "desc": "This legendary dragon is a powerful engine of destruction.",
            "atk": 3000,
            "def": 2500,
            "level": 8,
            "race": "Dragon",
            "attribute": "LIGHT"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.name, "Blue-Eyes White Dragon");
        assert_eq!(card.card_type, "Normal Monster");
        assert_eq!(card.attribute, "LIGHT");
        assert_eq!(card.race, "Dragon");
        assert_eq!((card.level, card.atk, card.def), (8, 3000, 2500));
        assert!(card.is_monster());
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let json = r#"{
            "name": "Decode Talker",
            "type": "Link Monster",
            "desc": "2+ Effect Monsters",
            "atk": 2300,
            "race": "Cyberse",
            "attribute": "DARK"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.level, 0);
        assert_eq!(card.def, 0);
        assert_eq!(card.atk, 2300);
    }

    #[test]
    fn test_loose_stats_are_normalized() {
        let json = r#"{
            "name": "Loose",
            "type": "Effect Monster",
            "level": "4",
            "atk": -1,
            "def": null,
            "attribute": null
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.level, 4);
        assert_eq!(card.atk, 0);
        assert_eq!(card.def, 0);
        assert_eq!(card.attribute, "");
        assert_eq!(card.desc, "No card text");
    }

    #[test]
    fn test_spell_is_not_monster() {
        let json = r#"{"name": "Pot of Greed", "type": "Spell Card", "race": "Normal"}"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert!(!card.is_monster());
    }
}
