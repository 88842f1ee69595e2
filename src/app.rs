mod background;
mod contact;
mod header;
mod hero;
mod sections;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::data::RESUME;
use background::AmbientBackground;
use contact::ContactSection;
use header::Header;
use hero::Hero;
use sections::{
    EducationSection, ExperienceSection, Hobbies, Languages, ObjectiveSection, Projects, Skills,
    Testimonials, Timeline,
};
use toast::{provide_toasts, ToastHost};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toasts();

    let name = RESUME.profile.name;

    view! {
        // sets the document title
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground relative">
            <AmbientBackground />
            <Header />
            <main>
                <Hero />
                <Section
                    id="about"
                    title="About Me"
                    subtitle="Driven by purpose, powered by technology"
                    muted=true
                >
                    <ObjectiveSection />
                </Section>
                <Section
                    id="skills"
                    title="Technical Expertise"
                    subtitle="Full-stack development with modern technologies"
                >
                    <Skills />
                </Section>
                <Section
                    id="experience"
                    title="Professional Journey"
                    subtitle="Building scalable solutions across diverse industries"
                    muted=true
                >
                    <ExperienceSection />
                </Section>
                <Section
                    id="projects"
                    title="Featured Projects"
                    subtitle="Innovative solutions that make an impact"
                >
                    <Projects />
                </Section>
                <Section
                    id="education"
                    title="Education & Certifications"
                    subtitle="Continuous learning and professional development"
                    muted=true
                >
                    <EducationSection />
                </Section>
                <Section
                    id="languages"
                    title="Languages"
                    subtitle="Communication across cultures and technologies"
                >
                    <Languages />
                </Section>
                <Section
                    id="background"
                    title="My Journey"
                    subtitle="The path that led me here"
                    muted=true
                >
                    <Timeline />
                </Section>
                <Section
                    id="hobbies"
                    title="Beyond Code"
                    subtitle="Passions that inspire creativity and innovation"
                >
                    <Hobbies />
                </Section>
                {(!RESUME.testimonials.is_empty())
                    .then(|| {
                        view! {
                            <Section
                                id="testimonials"
                                title="What Others Say"
                                subtitle="Feedback from collaborators and clients"
                                muted=true
                            >
                                <Testimonials />
                            </Section>
                        }
                    })}
                <Section
                    id="contact"
                    title="Let's Build Something Amazing"
                    subtitle="Ready to bring your ideas to life"
                >
                    <ContactSection />
                </Section>
            </main>
            <Footer />
            <ToastHost />
        </div>
    }
}

/// Shared wrapper for every content section: anchor id, heading pair, and
/// an alternating muted band.
#[component]
fn Section(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] muted: bool,
    children: Children,
) -> impl IntoView {
    let class = if muted {
        "relative py-20 bg-muted/40"
    } else {
        "relative py-20"
    };
    view! {
        <section id=id class=class>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold mb-2">{title}</h2>
                    <p class="text-foreground/60">{subtitle}</p>
                </div>
                {children()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let profile = &RESUME.profile;
    // BUILD_TIME is RFC 3339; the date prefix is enough for the footer.
    let built = &env!("BUILD_TIME")[..10];
    view! {
        <footer class="relative py-8 border-t border-border/30 text-center text-sm text-foreground/60">
            <p>{format!("{} - {}", profile.name, profile.location)}</p>
            <p class="mt-1">{format!("Built with Rust & Leptos on {built}")}</p>
        </footer>
    }
}
