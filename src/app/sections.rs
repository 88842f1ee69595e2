use leptos::prelude::*;

use crate::data::{Education, Experience, Project, RESUME};

#[component]
pub fn ObjectiveSection() -> impl IntoView {
    let objective = &RESUME.objective;
    view! {
        <div class="max-w-3xl mx-auto">
            <p class="text-lg leading-relaxed text-foreground/80 text-center mb-8">
                {objective.description}
            </p>
            <ul class="grid sm:grid-cols-2 gap-4">
                {objective
                    .goals
                    .iter()
                    .map(|goal| {
                        view! {
                            <li class="flex items-start p-4 rounded-lg border border-border/40 bg-background/60">
                                <span class="text-primary mr-2">"▸"</span>
                                <span class="text-foreground/70">{*goal}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            {RESUME
                .skills
                .iter()
                .map(|group| {
                    view! {
                        <div class="p-6 rounded-lg border border-border/40 bg-background/60">
                            <h3 class="font-semibold mb-4">{group.title}</h3>
                            <div class="flex flex-wrap gap-2">
                                {group
                                    .technologies
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="px-3 py-1 text-sm rounded-full bg-primary/10 text-primary">
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            {RESUME.experience.iter().map(experience_card).collect_view()}
        </div>
    }
}

fn experience_card(entry: &Experience) -> impl IntoView + use<> {
    view! {
        <article class="p-6 rounded-lg border border-border/40 bg-background/60">
            <div class="flex flex-col sm:flex-row sm:items-baseline sm:justify-between mb-1">
                <h3 class="text-xl font-semibold">{entry.role}</h3>
                <span class="text-sm text-foreground/50">{entry.period}</span>
            </div>
            <p class="text-primary">{entry.company}</p>
            <p class="text-sm text-foreground/50 mb-3">{entry.location}</p>
            <p class="text-foreground/70 mb-4">{entry.description}</p>
            <ul class="space-y-2">
                {entry
                    .achievements
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex items-start">
                                <span class="text-primary mr-2">"▸"</span>
                                <span class="text-foreground/70">{*a}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mt-4">
                {entry
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 py-1 text-xs rounded bg-muted/60 text-foreground/60">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
            {RESUME.projects.iter().map(project_card).collect_view()}
        </div>
    }
}

fn project_card(project: &Project) -> impl IntoView + use<> {
    view! {
        <article class="flex flex-col p-6 rounded-lg border border-border/40 bg-background/60 hover:border-primary/50 transition-colors">
            <h3 class="text-lg font-semibold mb-2">{project.name}</h3>
            <p class="text-foreground/70 mb-4">{project.description}</p>
            <ul class="space-y-1 mb-4 text-sm">
                {project
                    .highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <li class="flex items-start">
                                <span class="text-primary mr-2">"▸"</span>
                                <span class="text-foreground/60">{*h}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mb-4 mt-auto">
                {project
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 py-1 text-xs rounded bg-primary/10 text-primary">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4 text-sm">
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener" class="text-primary hover:underline">
                                "Live"
                            </a>
                        }
                    })}
                {project
                    .repo_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener" class="text-primary hover:underline">
                                "Source"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <div class="space-y-6 mb-12">
                {RESUME.education.iter().map(education_card).collect_view()}
            </div>
            <h3 class="text-xl font-semibold text-center mb-6">"Certifications"</h3>
            <div class="grid sm:grid-cols-2 gap-4">
                {RESUME
                    .certifications
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="p-4 rounded-lg border border-border/40 bg-background/60">
                                <p class="font-medium">{*cert}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn education_card(entry: &Education) -> impl IntoView + use<> {
    view! {
        <article class="p-6 rounded-lg border border-border/40 bg-background/60">
            <div class="flex flex-col sm:flex-row sm:items-baseline sm:justify-between mb-1">
                <h3 class="text-lg font-semibold">{entry.degree}</h3>
                <span class="text-sm text-foreground/50">{entry.period}</span>
            </div>
            <p class="text-primary mb-2">{entry.institution}</p>
            <p class="text-foreground/70">{format!("{} · GPA {}", entry.field, entry.gpa)}</p>
        </article>
    }
}

#[component]
pub fn Languages() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-8">
            <div>
                <h3 class="text-lg font-semibold text-center mb-4">"Spoken"</h3>
                <div class="space-y-3">
                    {RESUME
                        .spoken_languages
                        .iter()
                        .map(|lang| {
                            view! {
                                <div class="flex justify-between p-3 rounded-lg border border-border/40 bg-background/60">
                                    <span>{lang.name}</span>
                                    <span class="text-foreground/60">{lang.level}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h3 class="text-lg font-semibold text-center mb-4">"Programming"</h3>
                <div class="flex flex-wrap gap-2 justify-center">
                    {RESUME
                        .programming_languages
                        .iter()
                        .map(|lang| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-primary/10 text-primary">
                                    {*lang}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto">
            <ol class="relative border-l border-border/40 pl-8 space-y-10">
                {RESUME
                    .timeline
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="relative">
                                <span class="absolute -left-[2.35rem] top-1.5 w-3 h-3 rounded-full bg-primary"></span>
                                <span class="text-sm text-primary">{entry.year}</span>
                                <h3 class="font-semibold mt-1">{entry.title}</h3>
                                <p class="text-sm text-foreground/50">
                                    {format!("{} · {}", entry.role, entry.company)}
                                </p>
                                <p class="text-foreground/70 mt-1">{entry.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
pub fn Hobbies() -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 max-w-4xl mx-auto">
            {RESUME
                .hobbies
                .iter()
                .map(|hobby| {
                    view! {
                        <div class="p-6 rounded-lg border border-border/40 bg-background/60 text-center">
                            <h3 class="font-semibold mb-2">{hobby.name}</h3>
                            <p class="text-foreground/70 text-sm">{hobby.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6 max-w-4xl mx-auto">
            {RESUME
                .testimonials
                .iter()
                .map(|t| {
                    view! {
                        <blockquote class="p-6 rounded-lg border border-border/40 bg-background/60">
                            <p class="italic text-foreground/80 mb-4">
                                {format!("\u{201c}{}\u{201d}", t.content)}
                            </p>
                            <footer class="text-sm">
                                <span class="font-medium">{t.name}</span>
                                <span class="text-foreground/50">
                                    {format!(" · {}, {}", t.role, t.company)}
                                </span>
                            </footer>
                        </blockquote>
                    }
                })
                .collect_view()}
        </div>
    }
}
