//! Resume aggregate: the typed document model behind every renderer and
//! exporter.
//!
//! Serde field names stay camelCase so the persisted blobs and the JSON
//! interchange format keep the original on-disk shape. Every field carries
//! `#[serde(default)]` semantics (via the container attribute) so sparse
//! JSON (a shallow-merge import, an older persisted blob) deserializes
//! cleanly instead of erroring.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// Identity block. Exactly one per document; optional fields render as
/// suppressed sub-blocks, never as missing sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Entity list types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, the date range renders "Present" and ignores `end_date`.
    pub current_job: bool,
    pub description: String,
}

impl Experience {
    /// A seeded placeholder (all-empty record) does not count toward
    /// section presence.
    pub fn has_content(&self) -> bool {
        !self.company.is_empty() || !self.position.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub gpa: String,
    pub description: String,
}

impl Education {
    pub fn has_content(&self) -> bool {
        !self.school.is_empty() || !self.degree.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    pub fn has_content(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}

impl Certificate {
    pub fn has_content(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl Reference {
    pub fn has_content(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub title: String,
    pub date: String,
    pub description: String,
}

impl Achievement {
    pub fn has_content(&self) -> bool {
        !self.title.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    pub fluency: String,
}

impl Language {
    pub fn has_content(&self) -> bool {
        !self.name.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Closed proficiency scale for a single skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        }
    }

    /// 1..=4 step on the proficiency scale, used by renderers that draw
    /// level indicators.
    pub fn level(&self) -> u8 {
        match self {
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Advanced => 3,
            Proficiency::Expert => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
}

/// A category label plus its ordered skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    pub fn has_content(&self) -> bool {
        !self.category.is_empty() || self.skills.iter().any(|s| !s.name.is_empty())
    }

    /// Skills with a non-empty name, in input order.
    pub fn named_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(|s| !s.name.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────────────────────────────────────

/// The resume aggregate. Never null: `Default` seeds PersonalInfo plus one
/// empty Experience, Education, and SkillGroup placeholder, so forms always
/// have a record to bind to. List order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub references: Vec<Reference>,
    pub achievements: Vec<Achievement>,
    pub languages: Vec<Language>,
}

impl Default for ResumeData {
    fn default() -> Self {
        ResumeData {
            personal_info: PersonalInfo::default(),
            experience: vec![Experience::default()],
            education: vec![Education::default()],
            skill_groups: vec![SkillGroup::default()],
            projects: Vec::new(),
            certificates: Vec::new(),
            references: Vec::new(),
            achievements: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl ResumeData {
    pub fn qualifying_experience(&self) -> Vec<&Experience> {
        self.experience.iter().filter(|e| e.has_content()).collect()
    }

    pub fn qualifying_education(&self) -> Vec<&Education> {
        self.education.iter().filter(|e| e.has_content()).collect()
    }

    pub fn qualifying_skill_groups(&self) -> Vec<&SkillGroup> {
        self.skill_groups
            .iter()
            .filter(|g| g.has_content())
            .collect()
    }

    pub fn qualifying_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.has_content()).collect()
    }

    pub fn qualifying_certificates(&self) -> Vec<&Certificate> {
        self.certificates
            .iter()
            .filter(|c| c.has_content())
            .collect()
    }

    pub fn qualifying_references(&self) -> Vec<&Reference> {
        self.references.iter().filter(|r| r.has_content()).collect()
    }

    pub fn qualifying_achievements(&self) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.has_content())
            .collect()
    }

    pub fn qualifying_languages(&self) -> Vec<&Language> {
        self.languages.iter().filter(|l| l.has_content()).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds_one_placeholder_per_core_section() {
        let data = ResumeData::default();
        assert_eq!(data.experience.len(), 1);
        assert_eq!(data.education.len(), 1);
        assert_eq!(data.skill_groups.len(), 1);
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_seeded_placeholders_are_not_qualifying() {
        let data = ResumeData::default();
        assert!(data.qualifying_experience().is_empty());
        assert!(data.qualifying_education().is_empty());
        assert!(data.qualifying_skill_groups().is_empty());
    }

    #[test]
    fn test_experience_qualifies_on_company_or_position() {
        let mut exp = Experience::default();
        assert!(!exp.has_content());
        exp.position = "Engineer".to_string();
        assert!(exp.has_content());

        let mut exp = Experience::default();
        exp.company = "Acme".to_string();
        assert!(exp.has_content());
    }

    #[test]
    fn test_skill_group_qualifies_on_named_skill_without_category() {
        let group = SkillGroup {
            category: String::new(),
            skills: vec![Skill {
                name: "Rust".to_string(),
                proficiency: Proficiency::Advanced,
            }],
        };
        assert!(group.has_content());
        assert_eq!(group.named_skills().count(), 1);
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let data = ResumeData::default();
        let json = serde_json::to_value(&data).expect("serialize");
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("skillGroups").is_some());
        let exp = &json["experience"][0];
        assert!(exp.get("currentJob").is_some());
        assert!(exp.get("startDate").is_some());
    }

    #[test]
    fn test_sparse_json_deserializes_with_defaults() {
        let data: ResumeData =
            serde_json::from_str(r#"{"personalInfo":{"fullName":"Ada Lovelace"}}"#)
                .expect("sparse JSON must deserialize");
        assert_eq!(data.personal_info.full_name, "Ada Lovelace");
        assert!(data.personal_info.email.is_empty());
        // Missing fields fill from the seeded default, so the core sections
        // keep their placeholder record (and it stays non-qualifying).
        assert_eq!(data.experience.len(), 1);
        assert!(data.qualifying_experience().is_empty());
    }

    #[test]
    fn test_proficiency_levels_are_ordered() {
        assert!(Proficiency::Expert.level() > Proficiency::Beginner.level());
        assert_eq!(Proficiency::Intermediate.level(), 2);
        assert_eq!(Proficiency::Expert.label(), "Expert");
    }
}
