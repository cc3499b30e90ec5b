//! Elegant layout: centered header, generous whitespace, horizontal divider
//! rules between sections, small-caps section titles.

use crate::models::ResumeData;
use crate::render::format::{contact_items, date_range, degree_line, format_date, link_items};
use crate::render::node::{el, text, Element, Node};
use crate::render::theme::Theme;
use crate::render::LayoutRenderer;

pub struct ElegantLayout;

impl LayoutRenderer for ElegantLayout {
    fn render(&self, data: &ResumeData, theme: &Theme) -> Node {
        let info = &data.personal_info;
        let mut root = el("div")
            .class("max-w-2xl mx-auto p-10 font-serif")
            .class(theme.text);

        // Centered identity block.
        let mut head = el("header").class("text-center mb-8");
        if !info.full_name.is_empty() {
            head = head.child(
                el("h1")
                    .class("text-4xl tracking-wide")
                    .class(theme.heading)
                    .text(&info.full_name),
            );
        }
        if !info.title.is_empty() {
            head = head.child(
                el("p")
                    .class("mt-1 uppercase tracking-widest text-sm")
                    .class(theme.muted)
                    .text(&info.title),
            );
        }
        let mut meta = Vec::new();
        meta.extend(contact_items(info));
        meta.extend(link_items(info));
        if !meta.is_empty() {
            head = head.child(
                el("p")
                    .class("mt-3 text-sm")
                    .class(theme.muted)
                    .text(meta.join("  |  ")),
            );
        }
        root = root.child(head);

        if !info.summary.is_empty() {
            root = root
                .child(divider(theme))
                .child(el("p").class("text-center italic text-sm leading-relaxed my-4").text(&info.summary));
        }

        let experience = data.qualifying_experience();
        if !experience.is_empty() {
            let mut sec = section("Experience", theme);
            for exp in experience {
                let mut entry = el("div").class("mb-4 text-center");
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
                    entry = entry.child(el("p").class("text-sm").class(theme.muted).text(sub.join(" · ")));
                }
                if !exp.description.is_empty() {
                    entry = entry.child(el("p").class("mt-1 text-sm leading-relaxed").text(&exp.description));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let education = data.qualifying_education();
        if !education.is_empty() {
            let mut sec = section("Education", theme);
            for edu in education {
                let mut entry = el("div").class("mb-3 text-center");
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
                    entry = entry.child(el("p").class("text-sm").class(theme.muted).text(sub.join(" · ")));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let skill_groups = data.qualifying_skill_groups();
        if !skill_groups.is_empty() {
            let mut sec = section("Skills", theme);
            for group in skill_groups {
                let names = group
                    .named_skills()
                    .map(|s| s.name.clone())
                    .collect::<Vec<_>>()
                    .join(" · ");
                let line = if group.category.is_empty() {
                    names
                } else if names.is_empty() {
                    group.category.clone()
                } else {
                    format!("{}: {}", group.category, names)
                };
                sec = sec.child(el("p").class("text-center text-sm mb-1").text(line));
            }
            root = root.child(sec);
        }

        let projects = data.qualifying_projects();
        if !projects.is_empty() {
            let mut sec = section("Projects", theme);
            for project in projects {
                let mut entry = el("div")
                    .class("mb-3 text-center")
                    .child(el("h3").class("font-semibold").text(&project.name));
                if !project.description.is_empty() {
                    entry = entry.child(el("p").class("text-sm leading-relaxed").text(&project.description));
                }
                if !project.link.is_empty() {
                    entry = entry.child(el("a").class("text-sm").class(theme.link).text(&project.link));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let certificates = data.qualifying_certificates();
        if !certificates.is_empty() {
            let mut sec = section("Certificates", theme);
            for cert in certificates {
                let meta = [cert.issuer.clone(), format_date(&cert.date)]
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                let line = if meta.is_empty() {
                    cert.name.clone()
                } else {
                    format!("{} ({meta})", cert.name)
                };
                sec = sec.child(el("p").class("text-center text-sm mb-1").text(line));
            }
            root = root.child(sec);
        }

        let achievements = data.qualifying_achievements();
        if !achievements.is_empty() {
            let mut sec = section("Achievements", theme);
            for achievement in achievements {
                let mut entry = el("div")
                    .class("mb-2 text-center")
                    .child(el("h3").class("font-medium").text(&achievement.title));
                if !achievement.description.is_empty() {
                    entry = entry.child(el("p").class("text-sm").text(&achievement.description));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let languages = data.qualifying_languages();
        if !languages.is_empty() {
            let line = languages
                .iter()
                .map(|l| {
                    if l.fluency.is_empty() {
                        l.name.clone()
                    } else {
                        format!("{} ({})", l.name, l.fluency)
                    }
                })
                .collect::<Vec<_>>()
                .join(" · ");
            root = root.child(section("Languages", theme).child(el("p").class("text-center text-sm").text(line)));
        }

        let references = data.qualifying_references();
        if !references.is_empty() {
            let mut sec = section("References", theme);
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
                let mut entry = el("div")
                    .class("mb-2 text-center")
                    .child(el("h3").class("font-medium").text(&reference.name));
                if !detail.is_empty() {
                    entry = entry.child(el("p").class("text-sm").class(theme.muted).text(detail));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        root.into()
    }
}

fn divider(theme: &Theme) -> Node {
    el("hr").class("w-16 mx-auto border-t").class(theme.border).into()
}

fn section(title: &str, theme: &Theme) -> Element {
    el("section")
        .class("my-6")
        .child(divider(theme))
        .child(
            el("h2")
                .class("text-center uppercase tracking-widest text-sm font-semibold my-3")
                .class(theme.heading)
                .child(text(title)),
        )
}
