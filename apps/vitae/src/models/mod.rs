pub mod cover_letter;
pub mod resume;

pub use cover_letter::{CoverLetter, CoverLetterState, LetterStyle, SavedCoverLetter};
pub use resume::{
    Achievement, Certificate, Education, Experience, Language, PersonalInfo, Proficiency, Project,
    Reference, ResumeData, Skill, SkillGroup,
};
