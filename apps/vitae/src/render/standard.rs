//! Standard layout: a single column with every section in document order.

use crate::models::{PersonalInfo, ResumeData};
use crate::render::format::{contact_items, date_range, degree_line, link_items};
use crate::render::node::{el, text, Node};
use crate::render::theme::Theme;
use crate::render::LayoutRenderer;

pub struct StandardLayout;

impl LayoutRenderer for StandardLayout {
    fn render(&self, data: &ResumeData, theme: &Theme) -> Node {
        let mut root = el("div")
            .class("max-w-3xl mx-auto p-8")
            .class(theme.text)
            .child(header(&data.personal_info, theme));

        if !data.personal_info.summary.is_empty() {
            root = root.child(
                section("Summary", theme)
                    .child(el("p").class("text-sm leading-relaxed").text(&data.personal_info.summary)),
            );
        }

        let experience = data.qualifying_experience();
        if !experience.is_empty() {
            let mut sec = section("Experience", theme);
            for exp in experience {
                let mut entry = el("div").class("mb-4").child(
                    el("div")
                        .class("flex justify-between items-baseline")
                        .child(el("h3").class("font-semibold").text(&exp.position))
                        .child(
                            el("span")
                                .class("text-sm")
                                .class(theme.muted)
                                .text(date_range(&exp.start_date, &exp.end_date, exp.current_job)),
                        ),
                );
                let mut employer = el("div").class("text-sm").class(theme.muted);
                employer = employer.text(&exp.company);
                if !exp.location.is_empty() {
                    employer = employer.text(format!(" · {}", exp.location));
                }
                entry = entry.child(employer);
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
                let mut entry = el("div").class("mb-3").child(
                    el("div")
                        .class("flex justify-between items-baseline")
                        .child(
                            el("h3")
                                .class("font-semibold")
                                .text(degree_line(&edu.degree, &edu.field_of_study)),
                        )
                        .child(
                            el("span")
                                .class("text-sm")
                                .class(theme.muted)
                                .text(date_range(&edu.start_date, &edu.end_date, edu.current)),
                        ),
                );
                entry = entry.child(el("div").class("text-sm").class(theme.muted).text(&edu.school));
                if !edu.gpa.is_empty() {
                    entry = entry.child(el("div").class("text-sm").text(format!("GPA: {}", edu.gpa)));
                }
                if !edu.description.is_empty() {
                    entry = entry.child(el("p").class("mt-1 text-sm").text(&edu.description));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let skill_groups = data.qualifying_skill_groups();
        if !skill_groups.is_empty() {
            let mut sec = section("Skills", theme);
            for group in skill_groups {
                let mut row = el("div").class("mb-2");
                if !group.category.is_empty() {
                    row = row.child(el("h3").class("text-sm font-semibold").text(&group.category));
                }
                let mut chips = el("div").class("flex flex-wrap gap-2 mt-1");
                for skill in group.named_skills() {
                    chips = chips.child(
                        el("span")
                            .class("px-2 py-0.5 rounded text-xs")
                            .class(theme.chip_bg)
                            .text(format!("{} · {}", skill.name, skill.proficiency.label())),
                    );
                }
                sec = sec.child(row.child(chips));
            }
            root = root.child(sec);
        }

        let projects = data.qualifying_projects();
        if !projects.is_empty() {
            let mut sec = section("Projects", theme);
            for project in projects {
                let mut entry = el("div").class("mb-3").child(
                    el("div")
                        .class("flex justify-between items-baseline")
                        .child(el("h3").class("font-semibold").text(&project.name))
                        .child(
                            el("span")
                                .class("text-sm")
                                .class(theme.muted)
                                .text(date_range(&project.start_date, &project.end_date, false)),
                        ),
                );
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        el("div").class("text-sm").class(theme.muted).text(&project.technologies),
                    );
                }
                if !project.description.is_empty() {
                    entry = entry.child(el("p").class("mt-1 text-sm").text(&project.description));
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
                let mut entry = el("div")
                    .class("mb-2 flex justify-between items-baseline")
                    .child(el("span").class("font-medium").text(&cert.name));
                if !cert.issuer.is_empty() {
                    entry = entry.child(el("span").class("text-sm").class(theme.muted).text(&cert.issuer));
                }
                let date = crate::render::format::format_date(&cert.date);
                if !date.is_empty() {
                    entry = entry.child(el("span").class("text-sm").class(theme.muted).text(date));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let achievements = data.qualifying_achievements();
        if !achievements.is_empty() {
            let mut sec = section("Achievements", theme);
            for achievement in achievements {
                let mut entry = el("div").class("mb-2").child(
                    el("div")
                        .class("flex justify-between items-baseline")
                        .child(el("h3").class("font-medium").text(&achievement.title))
                        .child(
                            el("span")
                                .class("text-sm")
                                .class(theme.muted)
                                .text(crate::render::format::format_date(&achievement.date)),
                        ),
                );
                if !achievement.description.is_empty() {
                    entry = entry.child(el("p").class("text-sm").text(&achievement.description));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        let languages = data.qualifying_languages();
        if !languages.is_empty() {
            let mut chips = el("div").class("flex flex-wrap gap-2");
            for language in languages {
                let label = if language.fluency.is_empty() {
                    language.name.clone()
                } else {
                    format!("{} · {}", language.name, language.fluency)
                };
                chips = chips.child(
                    el("span")
                        .class("px-2 py-0.5 rounded text-xs")
                        .class(theme.chip_bg)
                        .text(label),
                );
            }
            root = root.child(section("Languages", theme).child(chips));
        }

        let references = data.qualifying_references();
        if !references.is_empty() {
            let mut sec = section("References", theme);
            for reference in references {
                let mut entry = el("div")
                    .class("mb-2")
                    .child(el("h3").class("font-medium").text(&reference.name));
                let role = [reference.position.as_str(), reference.company.as_str()]
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                if !role.is_empty() {
                    entry = entry.child(el("div").class("text-sm").class(theme.muted).text(role));
                }
                let contact = [reference.email.as_str(), reference.phone.as_str()]
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(" · ");
                if !contact.is_empty() {
                    entry = entry.child(el("div").class("text-sm").text(contact));
                }
                sec = sec.child(entry);
            }
            root = root.child(sec);
        }

        root.into()
    }
}

fn header(info: &PersonalInfo, theme: &Theme) -> Node {
    let mut header = el("header").class("mb-6 pb-4 border-b").class(theme.border);
    if !info.full_name.is_empty() {
        header = header.child(el("h1").class("text-3xl font-bold").class(theme.heading).text(&info.full_name));
    }
    if !info.title.is_empty() {
        header = header.child(el("p").class("text-lg").class(theme.muted).text(&info.title));
    }
    let contacts = contact_items(info);
    if !contacts.is_empty() {
        header = header.child(
            el("div")
                .class("mt-2 flex flex-wrap gap-x-4 text-sm")
                .class(theme.muted)
                .children(contacts.into_iter().map(|v| el("span").text(v).into())),
        );
    }
    let links = link_items(info);
    if !links.is_empty() {
        header = header.child(
            el("div")
                .class("mt-1 flex flex-wrap gap-x-4 text-sm")
                .children(links.into_iter().map(|v| el("a").class(theme.link).text(v).into())),
        );
    }
    header.into()
}

fn section(title: &str, theme: &Theme) -> crate::render::node::Element {
    el("section").class("mb-6").child(
        el("h2")
            .class("text-lg font-bold mb-2 pb-1 border-b")
            .class(theme.heading)
            .class(theme.border)
            .child(text(title)),
    )
}
