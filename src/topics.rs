//! Predefined topics and their word lists
//!
//! Each topic carries a stable key (stored in settings and referenced by the
//! collector), an emoji for display, a localized label, and one word list
//! per supported language. Lists are looked up by the current display
//! language and fall back to English when a translation is missing.

use enum_map::EnumMap;

use crate::i18n::Language;

/// A predefined topic with localized labels and word lists
#[derive(Debug)]
pub struct Topic {
    key: &'static str,
    emoji: &'static str,
    labels: EnumMap<Language, &'static str>,
    words: EnumMap<Language, &'static [&'static str]>,
}

impl Topic {
    /// Returns the stable key identifying this topic
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the emoji shown next to the topic label
    pub fn emoji(&self) -> &'static str {
        self.emoji
    }

    /// Returns the topic label in the given language
    pub fn label(&self, language: Language) -> &'static str {
        self.labels[language]
    }

    /// Returns the word list for the given language
    ///
    /// Falls back to the English list if the translation is empty.
    pub fn words(&self, language: Language) -> &'static [&'static str] {
        let words = self.words[language];
        if words.is_empty() {
            self.words[Language::En]
        } else {
            words
        }
    }
}

/// Returns the full topic catalog
pub fn all() -> &'static [Topic] {
    &TOPICS
}

/// Finds a topic by its stable key
pub fn find(key: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.key == key)
}

static TOPICS: [Topic; 6] = [
    Topic {
        key: "animals",
        emoji: "🦁",
        labels: EnumMap::from_array(["Animals", "Animales", "Animaux", "Animali"]),
        words: EnumMap::<Language, &'static [&'static str]>::from_array([
            &[
                "Elephant",
                "Penguin",
                "Kangaroo",
                "Dolphin",
                "Octopus",
                "Giraffe",
                "Hedgehog",
                "Flamingo",
                "Crocodile",
                "Owl",
                "Panda",
                "Squirrel",
            ],
            &[
                "Elefante",
                "Pingüino",
                "Canguro",
                "Delfín",
                "Pulpo",
                "Jirafa",
                "Erizo",
                "Flamenco",
                "Cocodrilo",
                "Búho",
                "Panda",
                "Ardilla",
            ],
            &[
                "Éléphant",
                "Pingouin",
                "Kangourou",
                "Dauphin",
                "Poulpe",
                "Girafe",
                "Hérisson",
                "Flamant rose",
                "Crocodile",
                "Hibou",
                "Panda",
                "Écureuil",
            ],
            &[
                "Elefante",
                "Pinguino",
                "Canguro",
                "Delfino",
                "Polpo",
                "Giraffa",
                "Riccio",
                "Fenicottero",
                "Coccodrillo",
                "Gufo",
                "Panda",
                "Scoiattolo",
            ],
        ]),
    },
    Topic {
        key: "food",
        emoji: "🍕",
        labels: EnumMap::from_array(["Food", "Comida", "Nourriture", "Cibo"]),
        words: EnumMap::<Language, &'static [&'static str]>::from_array([
            &[
                "Pizza",
                "Sushi",
                "Pancake",
                "Burrito",
                "Lasagna",
                "Croissant",
                "Paella",
                "Hamburger",
                "Ice Cream",
                "Meatball",
                "Omelette",
                "Cheesecake",
            ],
            &[
                "Pizza",
                "Sushi",
                "Tortita",
                "Burrito",
                "Lasaña",
                "Cruasán",
                "Paella",
                "Hamburguesa",
                "Helado",
                "Albóndiga",
                "Tortilla",
                "Tarta de queso",
            ],
            &[
                "Pizza",
                "Sushi",
                "Crêpe",
                "Burrito",
                "Lasagnes",
                "Croissant",
                "Paella",
                "Hamburger",
                "Glace",
                "Boulette",
                "Omelette",
                "Gâteau au fromage",
            ],
            &[
                "Pizza",
                "Sushi",
                "Frittella",
                "Burrito",
                "Lasagna",
                "Cornetto",
                "Paella",
                "Hamburger",
                "Gelato",
                "Polpetta",
                "Frittata",
                "Torta al formaggio",
            ],
        ]),
    },
    Topic {
        key: "places",
        emoji: "🗺️",
        labels: EnumMap::from_array(["Places", "Lugares", "Lieux", "Luoghi"]),
        words: EnumMap::<Language, &'static [&'static str]>::from_array([
            &[
                "Beach",
                "Library",
                "Airport",
                "Castle",
                "Supermarket",
                "Hospital",
                "Stadium",
                "Lighthouse",
                "Desert",
                "Volcano",
                "Museum",
                "Subway",
            ],
            &[
                "Playa",
                "Biblioteca",
                "Aeropuerto",
                "Castillo",
                "Supermercado",
                "Hospital",
                "Estadio",
                "Faro",
                "Desierto",
                "Volcán",
                "Museo",
                "Metro",
            ],
            &[
                "Plage",
                "Bibliothèque",
                "Aéroport",
                "Château",
                "Supermarché",
                "Hôpital",
                "Stade",
                "Phare",
                "Désert",
                "Volcan",
                "Musée",
                "Métro",
            ],
            &[
                "Spiaggia",
                "Biblioteca",
                "Aeroporto",
                "Castello",
                "Supermercato",
                "Ospedale",
                "Stadio",
                "Faro",
                "Deserto",
                "Vulcano",
                "Museo",
                "Metropolitana",
            ],
        ]),
    },
    Topic {
        key: "sports",
        emoji: "⚽",
        labels: EnumMap::from_array(["Sports", "Deportes", "Sports", "Sport"]),
        words: EnumMap::<Language, &'static [&'static str]>::from_array([
            &[
                "Football",
                "Tennis",
                "Swimming",
                "Boxing",
                "Skiing",
                "Volleyball",
                "Golf",
                "Karate",
                "Cycling",
                "Surfing",
                "Archery",
                "Chess",
            ],
            &[
                "Fútbol",
                "Tenis",
                "Natación",
                "Boxeo",
                "Esquí",
                "Voleibol",
                "Golf",
                "Kárate",
                "Ciclismo",
                "Surf",
                "Tiro con arco",
                "Ajedrez",
            ],
            &[
                "Football",
                "Tennis",
                "Natation",
                "Boxe",
                "Ski",
                "Volley-ball",
                "Golf",
                "Karaté",
                "Cyclisme",
                "Surf",
                "Tir à l'arc",
                "Échecs",
            ],
            &[
                "Calcio",
                "Tennis",
                "Nuoto",
                "Pugilato",
                "Sci",
                "Pallavolo",
                "Golf",
                "Karate",
                "Ciclismo",
                "Surf",
                "Tiro con l'arco",
                "Scacchi",
            ],
        ]),
    },
    Topic {
        key: "professions",
        emoji: "🧑‍🚒",
        labels: EnumMap::from_array([
            "Professions",
            "Profesiones",
            "Métiers",
            "Professioni",
        ]),
        words: EnumMap::<Language, &'static [&'static str]>::from_array([
            &[
                "Firefighter",
                "Teacher",
                "Astronaut",
                "Chef",
                "Plumber",
                "Lawyer",
                "Pilot",
                "Dentist",
                "Farmer",
                "Magician",
                "Journalist",
                "Architect",
            ],
            &[
                "Bombero",
                "Profesor",
                "Astronauta",
                "Cocinero",
                "Fontanero",
                "Abogado",
                "Piloto",
                "Dentista",
                "Agricultor",
                "Mago",
                "Periodista",
                "Arquitecto",
            ],
            &[
                "Pompier",
                "Professeur",
                "Astronaute",
                "Cuisinier",
                "Plombier",
                "Avocat",
                "Pilote",
                "Dentiste",
                "Agriculteur",
                "Magicien",
                "Journaliste",
                "Architecte",
            ],
            &[
                "Pompiere",
                "Insegnante",
                "Astronauta",
                "Cuoco",
                "Idraulico",
                "Avvocato",
                "Pilota",
                "Dentista",
                "Contadino",
                "Mago",
                "Giornalista",
                "Architetto",
            ],
        ]),
    },
    Topic {
        key: "objects",
        emoji: "💡",
        labels: EnumMap::from_array(["Objects", "Objetos", "Objets", "Oggetti"]),
        words: EnumMap::<Language, &'static [&'static str]>::from_array([
            &[
                "Umbrella",
                "Toothbrush",
                "Backpack",
                "Candle",
                "Scissors",
                "Mirror",
                "Ladder",
                "Telescope",
                "Hammock",
                "Keyboard",
                "Compass",
                "Teapot",
            ],
            &[
                "Paraguas",
                "Cepillo de dientes",
                "Mochila",
                "Vela",
                "Tijeras",
                "Espejo",
                "Escalera",
                "Telescopio",
                "Hamaca",
                "Teclado",
                "Brújula",
                "Tetera",
            ],
            &[
                "Parapluie",
                "Brosse à dents",
                "Sac à dos",
                "Bougie",
                "Ciseaux",
                "Miroir",
                "Échelle",
                "Télescope",
                "Hamac",
                "Clavier",
                "Boussole",
                "Théière",
            ],
            &[
                "Ombrello",
                "Spazzolino",
                "Zaino",
                "Candela",
                "Forbici",
                "Specchio",
                "Scala",
                "Telescopio",
                "Amaca",
                "Tastiera",
                "Bussola",
                "Teiera",
            ],
        ]),
    },
];

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_non_empty() {
        assert!(!all().is_empty());
    }

    #[test]
    fn test_find_known_topic() {
        let topic = find("food").expect("food topic should exist");
        assert_eq!(topic.key(), "food");
        assert_eq!(topic.emoji(), "🍕");
    }

    #[test]
    fn test_find_unknown_topic() {
        assert!(find("astrology").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in all().iter().enumerate() {
            for b in &all()[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_every_topic_has_words_in_every_language() {
        for topic in all() {
            for language in Language::ALL {
                let words = topic.words(language);
                assert!(
                    !words.is_empty(),
                    "no words for {} in {language:?}",
                    topic.key()
                );
                assert!(words.iter().all(|word| !word.is_empty()));
            }
        }
    }

    #[test]
    fn test_labels_localized() {
        let topic = find("animals").expect("animals topic should exist");
        assert_eq!(topic.label(Language::En), "Animals");
        assert_eq!(topic.label(Language::Es), "Animales");
        assert_eq!(topic.label(Language::Fr), "Animaux");
        assert_eq!(topic.label(Language::It), "Animali");
    }

    #[test]
    fn test_word_lists_translated_per_language() {
        let topic = find("food").expect("food topic should exist");
        assert!(topic.words(Language::En).contains(&"Ice Cream"));
        assert!(topic.words(Language::Es).contains(&"Helado"));
        assert!(topic.words(Language::Fr).contains(&"Glace"));
        assert!(topic.words(Language::It).contains(&"Gelato"));
    }
}
