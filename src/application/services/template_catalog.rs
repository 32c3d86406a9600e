//! Template Catalog - Named presets of settings defaults
//!
//! Lookups are pure: an unknown id simply yields no defaults.

use crate::domain::value_objects::{CampaignTemplate, TemplateDefaults, TemplateId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<CampaignTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<CampaignTemplate>) -> Self {
        Self { templates }
    }

    /// The presets shipped with the wizard
    pub fn builtin() -> Self {
        Self::new(vec![
            preset(
                "classic_fantasy",
                "Classic Fantasy",
                "A traditional sword & sorcery adventure",
                ["fantasy", "regional", "high", "medieval", "heroic"],
            ),
            preset(
                "dark_fantasy",
                "Dark Fantasy",
                "A gritty world where survival is everything",
                ["fantasy", "regional", "low", "medieval", "gritty"],
            ),
            preset(
                "steampunk_adventure",
                "Steampunk Adventure",
                "Steam-powered machines and Victorian intrigue",
                ["steampunk", "continental", "low", "industrial", "mystery"],
            ),
            preset(
                "cosmic_horror",
                "Cosmic Horror",
                "Uncover forbidden knowledge at great cost",
                ["horror", "local", "medium", "renaissance", "horror"],
            ),
            preset(
                "space_opera",
                "Space Opera",
                "Epic adventures across the galaxy",
                ["sci-fi", "world", "none", "futuristic", "heroic"],
            ),
        ])
    }

    pub fn templates(&self) -> &[CampaignTemplate] {
        &self.templates
    }

    pub fn get(&self, id: &TemplateId) -> Option<&CampaignTemplate> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Partial settings for `id`; empty when the id is unknown
    pub fn lookup(&self, id: &TemplateId) -> TemplateDefaults {
        self.get(id)
            .map(|t| t.settings.clone())
            .unwrap_or_default()
    }

    /// Merge templates fetched from the service; remote entries replace local ones by id
    pub fn merge(&mut self, remote: Vec<CampaignTemplate>) {
        for template in remote {
            match self.templates.iter_mut().find(|t| t.id == template.id) {
                Some(existing) => *existing = template,
                None => self.templates.push(template),
            }
        }
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `values` is theme, scale, magic, technology, tone
fn preset(id: &str, name: &str, description: &str, values: [&str; 5]) -> CampaignTemplate {
    let [theme, scale, magic, technology, tone] = values;
    CampaignTemplate {
        id: TemplateId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        settings: TemplateDefaults {
            world_theme: Some(theme.to_string()),
            world_scale: Some(scale.to_string()),
            magic_level: Some(magic.to_string()),
            technology_level: Some(technology.to_string()),
            tone: Some(tone.to_string()),
            ..Default::default()
        },
    }
}
