//! Modern layout: accent sidebar (contact, skills with level dots,
//! languages) beside a main column whose experience entries hang on a
//! timeline rail.

use crate::models::{ResumeData, Skill};
use crate::render::format::{contact_items, date_range, degree_line, format_date, link_items};
use crate::render::node::{el, text, Element, Node};
use crate::render::theme::Theme;
use crate::render::LayoutRenderer;

pub struct ModernLayout;

impl LayoutRenderer for ModernLayout {
    fn render(&self, data: &ResumeData, theme: &Theme) -> Node {
        el("div")
            .class("max-w-4xl mx-auto flex")
            .class(theme.text)
            .child(sidebar(data, theme))
            .child(main_column(data, theme))
            .into()
    }
}

fn sidebar(data: &ResumeData, theme: &Theme) -> Node {
    let info = &data.personal_info;
    let mut side = el("aside")
        .class("w-1/3 p-6 space-y-6")
        .class(theme.accent_bg)
        .class(theme.accent_text);

    let mut identity = el("div");
    if !info.full_name.is_empty() {
        identity = identity.child(el("h1").class("text-2xl font-bold leading-tight").text(&info.full_name));
    }
    if !info.title.is_empty() {
        identity = identity.child(el("p").class("mt-1 text-sm opacity-80").text(&info.title));
    }
    side = side.child(identity);

    let mut contact = Vec::new();
    contact.extend(contact_items(info));
    contact.extend(link_items(info));
    if !contact.is_empty() {
        side = side.child(
            sidebar_section("Contact")
                .children(contact.into_iter().map(|v| el("p").class("text-xs break-all").text(v).into())),
        );
    }

    let skill_groups = data.qualifying_skill_groups();
    if !skill_groups.is_empty() {
        let mut sec = sidebar_section("Skills");
        for group in skill_groups {
            let mut block = el("div").class("mb-2");
            if !group.category.is_empty() {
                block = block.child(el("h3").class("text-xs font-semibold uppercase opacity-80").text(&group.category));
            }
            for skill in group.named_skills() {
                block = block.child(skill_row(skill));
            }
            sec = sec.child(block);
        }
        side = side.child(sec);
    }

    let languages = data.qualifying_languages();
    if !languages.is_empty() {
        let mut sec = sidebar_section("Languages");
        for language in languages {
            let mut row = el("div")
                .class("flex justify-between text-xs")
                .child(el("span").text(&language.name));
            if !language.fluency.is_empty() {
                row = row.child(el("span").class("opacity-80").text(&language.fluency));
            }
            sec = sec.child(row);
        }
        side = side.child(sec);
    }

    side.into()
}

/// Skill name plus a four-dot proficiency indicator.
fn skill_row(skill: &Skill) -> Node {
    let level = skill.proficiency.level();
    let mut dots = el("span").class("flex gap-1");
    for i in 1..=4u8 {
        let fill = if i <= level { "bg-current" } else { "bg-current opacity-30" };
        dots = dots.child(el("span").class("w-1.5 h-1.5 rounded-full").class(fill));
    }
    el("div")
        .class("flex justify-between items-center text-xs mt-1")
        .child(el("span").text(&skill.name))
        .child(dots)
        .into()
}

fn main_column(data: &ResumeData, theme: &Theme) -> Node {
    let mut main = el("div").class("w-2/3 p-6 space-y-5");

    if !data.personal_info.summary.is_empty() {
        main = main.child(
            main_section("Summary", theme)
                .child(el("p").class("text-sm leading-relaxed").text(&data.personal_info.summary)),
        );
    }

    let experience = data.qualifying_experience();
    if !experience.is_empty() {
        let sec = main_section("Experience", theme);
        // Timeline rail: each entry hangs off a left border with a dot.
        let mut rail = el("div").class("border-l-2 pl-4 space-y-4").class(theme.border);
        for exp in experience {
            let mut entry = el("div").class("relative").child(
                el("span")
                    .class("absolute -left-5 top-1.5 w-2 h-2 rounded-full")
                    .class(theme.accent_bg),
            );
            if !exp.position.is_empty() {
                entry = entry.child(el("h3").class("font-semibold").text(&exp.position));
            }
            let mut sub = Vec::new();
            if !exp.company.is_empty() {
                sub.push(exp.company.clone());
            }
            if !exp.location.is_empty() {
                sub.push(exp.location.clone());
            }
            let dates = date_range(&exp.start_date, &exp.end_date, exp.current_job);
            if !dates.is_empty() {
                sub.push(dates);
            }
            if !sub.is_empty() {
                entry = entry.child(el("p").class("text-xs").class(theme.muted).text(sub.join(" · ")));
            }
            if !exp.description.is_empty() {
                entry = entry.child(el("p").class("mt-1 text-sm leading-relaxed").text(&exp.description));
            }
            rail = rail.child(entry);
        }
        main = main.child(sec.child(rail));
    }

    let education = data.qualifying_education();
    if !education.is_empty() {
        let mut sec = main_section("Education", theme);
        for edu in education {
            let mut entry = el("div").class("mb-2");
            let line = degree_line(&edu.degree, &edu.field_of_study);
            if !line.is_empty() {
                entry = entry.child(el("h3").class("font-semibold").text(line));
            }
            let mut sub = Vec::new();
            if !edu.school.is_empty() {
                sub.push(edu.school.clone());
            }
            let dates = date_range(&edu.start_date, &edu.end_date, edu.current);
            if !dates.is_empty() {
                sub.push(dates);
            }
            if !edu.gpa.is_empty() {
                sub.push(format!("GPA: {}", edu.gpa));
            }
            if !sub.is_empty() {
                entry = entry.child(el("p").class("text-xs").class(theme.muted).text(sub.join(" · ")));
            }
            sec = sec.child(entry);
        }
        main = main.child(sec);
    }

    let projects = data.qualifying_projects();
    if !projects.is_empty() {
        let mut sec = main_section("Projects", theme);
        for project in projects {
            let mut entry = el("div")
                .class("mb-2")
                .child(el("h3").class("font-semibold").text(&project.name));
            if !project.technologies.is_empty() {
                entry = entry.child(el("p").class("text-xs").class(theme.muted).text(&project.technologies));
            }
            if !project.description.is_empty() {
                entry = entry.child(el("p").class("text-sm").text(&project.description));
            }
            if !project.link.is_empty() {
                entry = entry.child(el("a").class("text-xs").class(theme.link).text(&project.link));
            }
            sec = sec.child(entry);
        }
        main = main.child(sec);
    }

    let certificates = data.qualifying_certificates();
    if !certificates.is_empty() {
        let mut sec = main_section("Certificates", theme);
        for cert in certificates {
            let meta = [cert.issuer.clone(), format_date(&cert.date)]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            let mut row = el("div")
                .class("text-sm mb-1")
                .child(el("span").class("font-medium").text(&cert.name));
            if !meta.is_empty() {
                row = row.child(el("span").class("ml-2 text-xs").class(theme.muted).text(meta));
            }
            sec = sec.child(row);
        }
        main = main.child(sec);
    }

    let achievements = data.qualifying_achievements();
    if !achievements.is_empty() {
        let mut sec = main_section("Achievements", theme);
        for achievement in achievements {
            let mut entry = el("div").class("mb-1").child(
                el("span").class("font-medium text-sm").text(&achievement.title),
            );
            let date = format_date(&achievement.date);
            if !date.is_empty() {
                entry = entry.child(el("span").class("ml-2 text-xs").class(theme.muted).text(date));
            }
            if !achievement.description.is_empty() {
                entry = entry.child(el("p").class("text-sm").text(&achievement.description));
            }
            sec = sec.child(entry);
        }
        main = main.child(sec);
    }

    let references = data.qualifying_references();
    if !references.is_empty() {
        let mut sec = main_section("References", theme);
        for reference in references {
            let detail = [
                reference.position.as_str(),
                reference.company.as_str(),
                reference.email.as_str(),
                reference.phone.as_str(),
            ]
            .into_iter()
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");
            let mut row = el("div")
                .class("text-sm mb-1")
                .child(el("span").class("font-medium").text(&reference.name));
            if !detail.is_empty() {
                row = row.child(el("span").class("ml-2 text-xs").class(theme.muted).text(detail));
            }
            sec = sec.child(row);
        }
        main = main.child(sec);
    }

    main.into()
}

fn sidebar_section(title: &str) -> Element {
    el("section").child(
        el("h2")
            .class("text-sm font-bold uppercase tracking-wide border-b border-current pb-1 mb-2")
            .child(text(title)),
    )
}

fn main_section(title: &str, theme: &Theme) -> Element {
    el("section").child(
        el("h2")
            .class("text-lg font-bold mb-2")
            .class(theme.heading)
            .child(text(title)),
    )
}
