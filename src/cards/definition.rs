//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable printed properties of a card: name,
//! type, cost, power, life (leaders), counter value. Every `Card` instance in
//! a game shares its definition through an `Arc`.
//!
//! Definitions deserialize from the card database's JSON, which is dirty:
//! numbers may arrive as strings or `"NULL"`, colors as a space-separated
//! string, and enum fields with values nobody recognizes. Those all degrade
//! to defaults instead of failing the whole record.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a card definition (the set code, e.g. `"OP01-001"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Printed card type. Decides where a card goes when played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Leader,
    Character,
    Event,
    Stage,
    Don,
    /// Missing or unrecognized type in the source data.
    #[default]
    Unknown,
}

impl FromStr for CardType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leader" => Ok(CardType::Leader),
            "character" => Ok(CardType::Character),
            "event" => Ok(CardType::Event),
            "stage" => Ok(CardType::Stage),
            "don" | "don!!" => Ok(CardType::Don),
            _ => Err(()),
        }
    }
}

/// Battle attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Slash,
    Strike,
    Ranged,
    Special,
    Wisdom,
}

impl FromStr for Attribute {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slash" => Ok(Attribute::Slash),
            "strike" => Ok(Attribute::Strike),
            "ranged" => Ok(Attribute::Ranged),
            "special" => Ok(Attribute::Special),
            "wisdom" => Ok(Attribute::Wisdom),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Purple,
    Black,
    Yellow,
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "black" => Ok(Color::Black),
            "yellow" => Ok(Color::Yellow),
            _ => Err(()),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use optcg_engine::cards::{CardDefinition, CardType};
///
/// let grunt = CardDefinition::new("P-001", "Pirate Grunt", CardType::Character)
///     .with_cost(1)
///     .with_power(1000)
///     .with_counter(1000);
///
/// assert_eq!(grunt.power, 1000);
/// assert!(grunt.is_playable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    #[serde(rename = "card_set_id")]
    pub id: CardId,

    #[serde(rename = "card_name")]
    pub name: String,

    #[serde(rename = "card_type", default, deserialize_with = "lenient_card_type")]
    pub card_type: CardType,

    #[serde(rename = "card_cost", default, deserialize_with = "lenient_u32")]
    pub cost: u32,

    #[serde(rename = "card_power", default, deserialize_with = "lenient_u32")]
    pub power: u32,

    /// Starting life (leaders only).
    #[serde(default, deserialize_with = "lenient_u32")]
    pub life: u32,

    /// Power granted when used as a counter from hand.
    #[serde(rename = "counter_amount", default, deserialize_with = "lenient_u32")]
    pub counter: u32,

    #[serde(default, deserialize_with = "lenient_enum")]
    pub attribute: Option<Attribute>,

    #[serde(rename = "card_color", default, deserialize_with = "lenient_colors")]
    pub colors: Vec<Color>,

    #[serde(rename = "card_text", default, deserialize_with = "lenient_text")]
    pub description: String,
}

impl CardDefinition {
    /// Create a definition with zeroed stats.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            cost: 0,
            power: 0,
            life: 0,
            counter: 0,
            attribute: None,
            colors: Vec::new(),
            description: String::new(),
        }
    }

    /// The shared definition used for every DON!! card.
    #[must_use]
    pub fn don() -> Self {
        Self::new("DON", "DON!!", CardType::Don)
            .with_description("Attach to your Leader or a Character card. (+1000 power)")
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life;
        self
    }

    #[must_use]
    pub fn with_counter(mut self, counter: u32) -> Self {
        self.counter = counter;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.card_type == CardType::Leader
    }

    #[must_use]
    pub fn is_don(&self) -> bool {
        self.card_type == CardType::Don
    }

    /// Can this card be played from hand (character, event or stage)?
    #[must_use]
    pub fn is_playable(&self) -> bool {
        matches!(
            self.card_type,
            CardType::Character | CardType::Event | CardType::Stage
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u32),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

/// Numbers arrive as numbers, numeric strings, `null` or `"NULL"`.
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) => text.trim().parse().unwrap_or(0),
        None => 0,
    })
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|text| text.parse().ok()))
}

fn lenient_card_type<'de, D>(deserializer: D) -> Result<CardType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_enum(deserializer)?.unwrap_or_default())
}

/// `"Red Green"`, `["Red", "Green"]` and junk like `"Character"` all parse.
fn lenient_colors<'de, D>(deserializer: D) -> Result<Vec<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<TextOrList> = Option::deserialize(deserializer)?;
    let words: Vec<String> = match raw {
        Some(TextOrList::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        Some(TextOrList::List(list)) => list,
        None => Vec::new(),
    };
    Ok(words.iter().filter_map(|w| w.parse().ok()).collect())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let leader = CardDefinition::new("L-001", "Monkey D. Luffy", CardType::Leader)
            .with_power(5000)
            .with_life(5)
            .with_attribute(Attribute::Strike)
            .with_color(Color::Red);

        assert_eq!(leader.id, CardId::new("L-001"));
        assert_eq!(leader.life, 5);
        assert!(leader.is_leader());
        assert!(!leader.is_playable());
        assert_eq!(leader.colors, vec![Color::Red]);
    }

    #[test]
    fn test_don_definition() {
        let don = CardDefinition::don();
        assert!(don.is_don());
        assert_eq!(don.power, 0);
    }

    #[test]
    fn test_card_type_parse() {
        assert_eq!("Character".parse(), Ok(CardType::Character));
        assert_eq!(" event ".parse(), Ok(CardType::Event));
        assert_eq!("DON!!".parse(), Ok(CardType::Don));
        assert!("Red".parse::<CardType>().is_err());
    }

    #[test]
    fn test_deserialize_dirty_record() {
        let json = r#"{
            "card_set_id": "OP01-016",
            "card_name": "Nami",
            "card_type": "Character",
            "card_cost": "1",
            "card_power": "NULL",
            "life": null,
            "counter_amount": 1000,
            "attribute": "Bogus",
            "card_color": "Red Green",
            "card_text": null
        }"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.id.as_str(), "OP01-016");
        assert_eq!(card.card_type, CardType::Character);
        assert_eq!(card.cost, 1);
        assert_eq!(card.power, 0);
        assert_eq!(card.life, 0);
        assert_eq!(card.counter, 1000);
        assert_eq!(card.attribute, None);
        assert_eq!(card.colors, vec![Color::Red, Color::Green]);
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_deserialize_unknown_type_and_color() {
        let json = r#"{"card_set_id": "X", "card_name": "Odd", "card_type": "Promo", "card_color": "Character"}"#;

        let card: CardDefinition = serde_json::from_str(json).unwrap();

        assert_eq!(card.card_type, CardType::Unknown);
        assert!(card.colors.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let card = CardDefinition::new("OP01-001", "Zoro", CardType::Leader)
            .with_power(5000)
            .with_life(5)
            .with_color(Color::Green)
            .with_attribute(Attribute::Slash);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
