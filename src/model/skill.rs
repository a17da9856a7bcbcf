//! D&D 5e skills and proficiency list parsing.

/// One of the eighteen D&D 5e skills.
///
/// Variants are declared in canonical (alphabetical) order, which is also the order
/// proficiencies are stored and displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Human readable name, e.g. `"Sleight of Hand"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// Storage key: the display name lowercased with spaces removed, e.g. `"sleightofhand"`.
    pub fn key(self) -> String {
        self.display_name().to_lowercase().replace(' ', "")
    }

    pub fn from_key(key: &str) -> Option<Skill> {
        Skill::ALL.into_iter().find(|skill| skill.key() == key)
    }

    /// Parses free-form user input such as `"Acrobatics, Animal Handling"`.
    ///
    /// Input is lowercased and stripped of everything but letters and commas before being
    /// split, so spacing and punctuation do not matter. Empty entries are ignored and the
    /// result is deduplicated and sorted canonically.
    ///
    /// # Returns
    /// - `Ok(Vec<Skill>)` - Recognised skills, possibly empty
    /// - `Err(String)` - The first entry that is not a known skill, as sanitized
    pub fn parse_list(input: &str) -> Result<Vec<Skill>, String> {
        let sanitized: String = input
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == ',')
            .collect();

        let mut skills = Vec::new();
        for key in sanitized.split(',').filter(|key| !key.is_empty()) {
            let skill = Skill::from_key(key).ok_or_else(|| key.to_string())?;
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }
        skills.sort();

        Ok(skills)
    }

    /// Joins skills into the comma separated key list stored in the database.
    pub fn join_keys(skills: &[Skill]) -> String {
        skills
            .iter()
            .map(|skill| skill.key())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Joins skills into a comma separated list of display names.
    pub fn join_display_names(skills: &[Skill]) -> String {
        skills
            .iter()
            .map(|skill| skill.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
