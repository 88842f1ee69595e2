use leptos::prelude::*;

use crate::data::RESUME;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &RESUME.profile;
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex flex-col justify-center items-center text-center px-4 pt-16"
        >
            <h1 class="text-4xl sm:text-6xl font-bold mb-4">{profile.name}</h1>
            <h2 class="text-xl sm:text-2xl text-primary mb-4">{profile.title}</h2>
            <p class="text-lg text-foreground/70 mb-6">{profile.tagline}</p>
            <p class="max-w-2xl text-foreground/60 leading-relaxed mb-8">{profile.bio}</p>
            <div class="flex flex-col sm:flex-row items-center gap-4">
                <a
                    href="#contact"
                    class="px-6 py-3 rounded-md bg-primary text-background font-medium hover:bg-primary/90 transition-colors"
                >
                    "Get in touch"
                </a>
                <a
                    href="#projects"
                    class="px-6 py-3 rounded-md border border-border/60 hover:border-primary/60 transition-colors"
                >
                    "See my work"
                </a>
            </div>
            <p class="mt-8 text-sm text-foreground/50">{profile.location}</p>
        </section>
    }
}
