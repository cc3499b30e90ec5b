//! Compact layout: a dense header plus a condensed multi-column body:
//! narrow sidebar column (skills, languages, certificates) next to a wide
//! column with the prose sections.

use crate::models::ResumeData;
use crate::render::format::{contact_items, date_range, degree_line, format_date, link_items};
use crate::render::node::{el, text, Element, Node};
use crate::render::theme::Theme;
use crate::render::LayoutRenderer;

pub struct CompactLayout;

impl LayoutRenderer for CompactLayout {
    fn render(&self, data: &ResumeData, theme: &Theme) -> Node {
        let root = el("div")
            .class("max-w-4xl mx-auto p-6 text-sm")
            .class(theme.text)
            .child(header(data, theme))
            .child(
                el("div")
                    .class("grid grid-cols-3 gap-6 mt-4")
                    .child(side_column(data, theme))
                    .child(main_column(data, theme)),
            );
        root.into()
    }
}

fn header(data: &ResumeData, theme: &Theme) -> Node {
    let info = &data.personal_info;
    let mut header = el("header")
        .class("pb-3 border-b-2")
        .class(theme.border);
    if !info.full_name.is_empty() {
        header = header.child(
            el("h1")
                .class("text-2xl font-bold inline")
                .class(theme.heading)
                .text(&info.full_name),
        );
    }
    if !info.title.is_empty() {
        header = header.child(
            el("span")
                .class("ml-3 text-base")
                .class(theme.muted)
                .text(&info.title),
        );
    }
    let mut line = Vec::new();
    line.extend(contact_items(info));
    line.extend(link_items(info));
    if !line.is_empty() {
        header = header.child(
            el("div")
                .class("mt-1 flex flex-wrap gap-x-3 text-xs")
                .class(theme.muted)
                .children(line.into_iter().map(|v| el("span").text(v).into())),
        );
    }
    header.into()
}

fn side_column(data: &ResumeData, theme: &Theme) -> Node {
    let mut side = el("aside").class("col-span-1 space-y-4");

    let skill_groups = data.qualifying_skill_groups();
    if !skill_groups.is_empty() {
        let mut sec = side_section("Skills", theme);
        for group in skill_groups {
            let mut block = el("div").class("mb-2");
            if !group.category.is_empty() {
                block = block.child(el("h3").class("text-xs font-semibold").text(&group.category));
            }
            for skill in group.named_skills() {
                block = block.child(
                    el("div")
                        .class("flex justify-between text-xs")
                        .child(el("span").text(&skill.name))
                        .child(el("span").class(theme.muted).text(skill.proficiency.label())),
                );
            }
            sec = sec.child(block);
        }
        side = side.child(sec);
    }

    let languages = data.qualifying_languages();
    if !languages.is_empty() {
        let mut sec = side_section("Languages", theme);
        for language in languages {
            let mut row = el("div")
                .class("flex justify-between text-xs")
                .child(el("span").text(&language.name));
            if !language.fluency.is_empty() {
                row = row.child(el("span").class(theme.muted).text(&language.fluency));
            }
            sec = sec.child(row);
        }
        side = side.child(sec);
    }

    let certificates = data.qualifying_certificates();
    if !certificates.is_empty() {
        let mut sec = side_section("Certificates", theme);
        for cert in certificates {
            let mut block = el("div")
                .class("mb-1 text-xs")
                .child(el("div").class("font-medium").text(&cert.name));
            let meta = [cert.issuer.clone(), format_date(&cert.date)]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !meta.is_empty() {
                block = block.child(el("div").class(theme.muted).text(meta));
            }
            sec = sec.child(block);
        }
        side = side.child(sec);
    }

    side.into()
}

fn main_column(data: &ResumeData, theme: &Theme) -> Node {
    let mut main = el("div").class("col-span-2 space-y-4");

    if !data.personal_info.summary.is_empty() {
        main = main.child(
            main_section("Summary", theme)
                .child(el("p").class("text-xs leading-relaxed").text(&data.personal_info.summary)),
        );
    }

    let experience = data.qualifying_experience();
    if !experience.is_empty() {
        let mut sec = main_section("Experience", theme);
        for exp in experience {
            let mut entry = el("div").class("mb-2").child(
                el("div")
                    .class("flex justify-between")
                    .child(
                        el("span")
                            .class("font-semibold")
                            .text(join_dash(&exp.position, &exp.company)),
                    )
                    .child(
                        el("span")
                            .class("text-xs")
                            .class(theme.muted)
                            .text(date_range(&exp.start_date, &exp.end_date, exp.current_job)),
                    ),
            );
            if !exp.description.is_empty() {
                entry = entry.child(el("p").class("text-xs leading-snug").text(&exp.description));
            }
            sec = sec.child(entry);
        }
        main = main.child(sec);
    }

    let education = data.qualifying_education();
    if !education.is_empty() {
        let mut sec = main_section("Education", theme);
        for edu in education {
            let mut entry = el("div").class("mb-2").child(
                el("div")
                    .class("flex justify-between")
                    .child(
                        el("span")
                            .class("font-semibold")
                            .text(join_dash(&degree_line(&edu.degree, &edu.field_of_study), &edu.school)),
                    )
                    .child(
                        el("span")
                            .class("text-xs")
                            .class(theme.muted)
                            .text(date_range(&edu.start_date, &edu.end_date, edu.current)),
                    ),
            );
            if !edu.gpa.is_empty() {
                entry = entry.child(el("div").class("text-xs").text(format!("GPA: {}", edu.gpa)));
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
                .child(el("span").class("font-semibold").text(&project.name));
            if !project.technologies.is_empty() {
                entry = entry.child(
                    el("span").class("ml-2 text-xs").class(theme.muted).text(&project.technologies),
                );
            }
            if !project.description.is_empty() {
                entry = entry.child(el("p").class("text-xs leading-snug").text(&project.description));
            }
            sec = sec.child(entry);
        }
        main = main.child(sec);
    }

    let achievements = data.qualifying_achievements();
    if !achievements.is_empty() {
        let mut sec = main_section("Achievements", theme);
        for achievement in achievements {
            let mut row = el("div")
                .class("flex justify-between text-xs mb-1")
                .child(el("span").class("font-medium").text(&achievement.title));
            let date = format_date(&achievement.date);
            if !date.is_empty() {
                row = row.child(el("span").class(theme.muted).text(date));
            }
            sec = sec.child(row);
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
            ]
            .into_iter()
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");
            let mut row = el("div")
                .class("text-xs mb-1")
                .child(el("span").class("font-medium").text(&reference.name));
            if !detail.is_empty() {
                row = row.child(el("span").class("ml-2").class(theme.muted).text(detail));
            }
            sec = sec.child(row);
        }
        main = main.child(sec);
    }

    main.into()
}

fn side_section(title: &str, theme: &Theme) -> Element {
    el("section").child(
        el("h2")
            .class("text-xs font-bold uppercase tracking-wide mb-1")
            .class(theme.heading)
            .child(text(title)),
    )
}

fn main_section(title: &str, theme: &Theme) -> Element {
    el("section").child(
        el("h2")
            .class("text-sm font-bold mb-1 border-b")
            .class(theme.heading)
            .class(theme.border)
            .child(text(title)),
    )
}

fn join_dash(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{left}, {right}"),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (true, true) => String::new(),
    }
}
