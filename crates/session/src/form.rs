use personachat_runtime::CharacterConfig;

/// The character sheet as the UI holds it: one text field per attribute.
/// Blank fields become absent (`None`) when turned into a config, never
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub species: String,
    pub description: String,
    pub background: String,
    pub scenario: String,
    pub world_view: String,
    pub family: String,
    pub living: String,
    pub job: String,
    pub outfit: String,
    pub appearance: String,
    pub temper: String,
    pub secrets: String,
    pub specials: String,
}

fn field(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl CharacterForm {
    pub fn to_config(&self) -> CharacterConfig {
        CharacterConfig {
            name: self.name.clone(),
            age: field(&self.age),
            gender: field(&self.gender),
            species: field(&self.species),
            description: field(&self.description),
            background: field(&self.background),
            scenario: field(&self.scenario),
            world_view: field(&self.world_view),
            family: field(&self.family),
            living: field(&self.living),
            job: field(&self.job),
            outfit: field(&self.outfit),
            appearance: field(&self.appearance),
            temper: field(&self.temper),
            secrets: field(&self.secrets),
            specials: field(&self.specials),
        }
    }

    /// Populates only the fields the loaded config carries, leaving the
    /// rest as they are.
    pub fn apply_config(&mut self, config: &CharacterConfig) {
        if !config.name.is_empty() {
            self.name = config.name.clone();
        }

        let fields = [
            (&config.age, &mut self.age),
            (&config.gender, &mut self.gender),
            (&config.species, &mut self.species),
            (&config.description, &mut self.description),
            (&config.background, &mut self.background),
            (&config.scenario, &mut self.scenario),
            (&config.world_view, &mut self.world_view),
            (&config.family, &mut self.family),
            (&config.living, &mut self.living),
            (&config.job, &mut self.job),
            (&config.outfit, &mut self.outfit),
            (&config.appearance, &mut self.appearance),
            (&config.temper, &mut self.temper),
            (&config.secrets, &mut self.secrets),
            (&config.specials, &mut self.specials),
        ];
        for (loaded, slot) in fields {
            if let Some(value) = loaded {
                *slot = value.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_absent_in_config() {
        let form = CharacterForm {
            name: "Aria".to_string(),
            age: "23".to_string(),
            outfit: "   ".to_string(),
            ..Default::default()
        };

        let config = form.to_config();
        assert_eq!(config.name, "Aria");
        assert_eq!(config.age.as_deref(), Some("23"));
        assert_eq!(config.outfit, None);
        assert_eq!(config.description, None);
    }

    #[test]
    fn apply_fills_only_present_fields() {
        let mut form = CharacterForm {
            job: "librarian".to_string(),
            ..Default::default()
        };

        form.apply_config(&CharacterConfig {
            name: "Aria".to_string(),
            age: Some("23".to_string()),
            ..Default::default()
        });

        assert_eq!(form.name, "Aria");
        assert_eq!(form.age, "23");
        assert_eq!(form.job, "librarian");
    }

    #[test]
    fn round_trip_preserves_supplied_fields() {
        let form = CharacterForm {
            name: "Aria".to_string(),
            world_view: "high fantasy".to_string(),
            ..Default::default()
        };

        let mut loaded = CharacterForm::default();
        loaded.apply_config(&form.to_config());
        assert_eq!(loaded.name, "Aria");
        assert_eq!(loaded.world_view, "high fantasy");
    }
}
