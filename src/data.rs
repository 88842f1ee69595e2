//! The hand-authored content the whole page renders from. Nothing here has
//! a lifecycle beyond a single page session.

use std::sync::LazyLock;

pub static RESUME: LazyLock<ResumeData> = LazyLock::new(resume_data);

#[derive(Debug, Clone)]
pub struct ResumeData {
    pub profile: Profile,
    pub objective: Objective,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<&'static str>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub programming_languages: Vec<&'static str>,
    pub timeline: Vec<TimelineEntry>,
    pub hobbies: Vec<Hobby>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone)]
pub struct Objective {
    pub description: &'static str,
    pub goals: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub title: &'static str,
    pub technologies: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: Vec<&'static str>,
    pub technologies: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
}

#[derive(Debug, Clone)]
pub struct SpokenLanguage {
    pub name: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Hobby {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: &'static str,
    pub linkedin: Option<&'static str>,
    pub github: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub website: Option<&'static str>,
}

impl ContactInfo {
    /// Social links with a value, in display order.
    pub fn links(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("LinkedIn", self.linkedin),
            ("GitHub", self.github),
            ("Twitter", self.twitter),
            ("Website", self.website),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

fn resume_data() -> ResumeData {
    ResumeData {
        profile: Profile {
            name: "Alex Chen",
            title: "Full Stack Software Architect & Founder",
            tagline: "Building scalable EdTech solutions that empower learning",
            bio: "Passionate about creating innovative educational technology solutions that scale. Currently growing EduManage while exploring the intersection of nutrition and learning optimization.",
            location: "San Francisco, CA",
        },
        objective: Objective {
            description: "To revolutionize education through scalable technology solutions that make learning more accessible, engaging, and effective for students worldwide.",
            goals: vec![
                "Scale EduManage to 10,000+ educational institutions",
                "Launch innovative nutrition-learning optimization platform",
                "Mentor the next generation of EdTech entrepreneurs",
                "Build sustainable, profitable products that create real impact",
            ],
        },
        skills: vec![
            SkillGroup {
                title: "Backend Development",
                technologies: vec![
                    "Java", "Node.js", "NestJS", "Python", "GraphQL", "REST APIs", "Microservices",
                ],
            },
            SkillGroup {
                title: "Frontend Development",
                technologies: vec![
                    "React", "React Native", "Angular", "TypeScript", "Next.js", "Tailwind CSS",
                ],
            },
            SkillGroup {
                title: "Cloud & Infrastructure",
                technologies: vec![
                    "AWS", "Google Cloud", "Docker", "Kubernetes", "PostgreSQL", "MongoDB",
                ],
            },
            SkillGroup {
                title: "AI & Development Tools",
                technologies: vec![
                    "OpenAI API", "TensorFlow", "Machine Learning", "GitHub Copilot",
                ],
            },
        ],
        experience: vec![
            Experience {
                company: "EduManage",
                role: "Founder & CEO",
                period: "2022 - Present",
                location: "San Francisco, CA",
                description: "Founded and leading a comprehensive educational management platform serving K-12 institutions.",
                achievements: vec![
                    "Built platform serving 500+ schools with 50,000+ active users",
                    "Raised $2M in seed funding from prominent EdTech investors",
                    "Reduced administrative workload by 60% for partner institutions",
                    "Led team of 12 engineers across frontend, backend, and mobile",
                ],
                technologies: vec!["React", "Node.js", "PostgreSQL", "AWS", "React Native"],
            },
            Experience {
                company: "TechFlow Solutions",
                role: "Senior Software Architect",
                period: "2020 - 2022",
                location: "Seattle, WA",
                description: "Led architecture decisions for enterprise-scale applications serving Fortune 500 clients.",
                achievements: vec![
                    "Designed microservices architecture handling 1M+ daily transactions",
                    "Reduced system latency by 40% through optimization initiatives",
                    "Mentored 8 junior developers and established coding standards",
                    "Implemented CI/CD pipelines reducing deployment time by 75%",
                ],
                technologies: vec!["Java", "Spring Boot", "Kubernetes", "Angular", "MongoDB"],
            },
            Experience {
                company: "StartupLab",
                role: "Full Stack Developer",
                period: "2018 - 2020",
                location: "Austin, TX",
                description: "Developed MVP products for early-stage startups across various industries.",
                achievements: vec![
                    "Built 5 successful MVPs that raised combined $10M+ in funding",
                    "Delivered projects 20% ahead of schedule on average",
                    "Established rapid prototyping workflows for client projects",
                ],
                technologies: vec!["React", "Node.js", "Firebase", "React Native", "TypeScript"],
            },
        ],
        projects: vec![
            Project {
                name: "EduManage Platform",
                description: "Comprehensive educational management system for K-12 institutions with student tracking, grade management, and parent communication tools.",
                technologies: vec!["React", "Node.js", "PostgreSQL", "AWS", "React Native"],
                live_url: Some("https://edumanage.com"),
                repo_url: Some("https://github.com/alexchen/edumanage"),
                highlights: vec![
                    "500+ schools using the platform",
                    "50,000+ active users",
                    "99.9% uptime SLA",
                ],
            },
            Project {
                name: "NutriLearn AI",
                description: "AI-powered platform connecting nutrition optimization with learning performance for students and professionals.",
                technologies: vec!["Python", "TensorFlow", "React", "FastAPI", "MongoDB"],
                live_url: Some("https://nutrilearn.ai"),
                repo_url: Some("https://github.com/alexchen/nutrilearn"),
                highlights: vec![
                    "ML model with 92% accuracy",
                    "Research partnership with Stanford",
                    "Beta testing with 1,000+ users",
                ],
            },
            Project {
                name: "DevFlow CLI",
                description: "Command-line tool for streamlining development workflows with automated testing, deployment, and code quality checks.",
                technologies: vec!["Go", "Docker", "GitHub Actions"],
                live_url: None,
                repo_url: Some("https://github.com/alexchen/devflow-cli"),
                highlights: vec![
                    "2,000+ GitHub stars",
                    "50+ contributors",
                    "Used by 500+ developers",
                ],
            },
        ],
        education: vec![
            Education {
                institution: "Stanford University",
                degree: "M.S. Computer Science",
                field: "Human-Computer Interaction",
                period: "2016 - 2018",
                gpa: "3.9/4.0",
            },
            Education {
                institution: "UC Berkeley",
                degree: "B.S. Computer Science",
                field: "Software Engineering",
                period: "2012 - 2016",
                gpa: "3.7/4.0",
            },
        ],
        certifications: vec![
            "AWS Solutions Architect Professional",
            "Google Cloud Professional Developer",
            "Certified Scrum Master (CSM)",
            "MongoDB Certified Developer",
        ],
        spoken_languages: vec![
            SpokenLanguage { name: "English", level: "Native" },
            SpokenLanguage { name: "Mandarin Chinese", level: "Fluent" },
            SpokenLanguage { name: "Spanish", level: "Conversational" },
        ],
        programming_languages: vec![
            "JavaScript/TypeScript", "Java", "Python", "Go", "Swift", "Kotlin", "SQL", "GraphQL",
        ],
        timeline: vec![
            TimelineEntry {
                year: "2012",
                title: "Discovered programming",
                role: "Student",
                company: "UC Berkeley",
                description: "First CS course turned a vague interest in computers into a clear direction. Spent every free evening building small tools and websites.",
            },
            TimelineEntry {
                year: "2016",
                title: "Research meets product",
                role: "Graduate researcher",
                company: "Stanford HCI Group",
                description: "Studied how interface design shapes learning outcomes, the seed of everything built since.",
            },
            TimelineEntry {
                year: "2018",
                title: "Into the startup world",
                role: "Full Stack Developer",
                company: "StartupLab",
                description: "Learned to ship fast without breaking trust, carrying MVPs from whiteboard to funded product.",
            },
            TimelineEntry {
                year: "2020",
                title: "Scaling systems and people",
                role: "Senior Software Architect",
                company: "TechFlow Solutions",
                description: "Moved from writing most of the code to making most of the code possible.",
            },
            TimelineEntry {
                year: "2022",
                title: "Founding EduManage",
                role: "Founder & CEO",
                company: "EduManage",
                description: "Combined the research, the craft, and the scars into a platform schools actually enjoy using.",
            },
        ],
        hobbies: vec![
            Hobby {
                name: "Travel Photography",
                description: "Documenting cultures and landscapes around the world",
            },
            Hobby {
                name: "UI/UX Design",
                description: "Creating beautiful and functional digital experiences",
            },
            Hobby {
                name: "Technology Tinkering",
                description: "Building IoT projects and experimenting with emerging tech",
            },
        ],
        testimonials: vec![
            Testimonial {
                name: "Sarah Johnson",
                role: "Principal at Lincoln Elementary",
                company: "EduManage Client",
                content: "Alex's EduManage platform transformed how we handle student data and parent communication. The intuitive design and robust features have saved our staff countless hours.",
            },
            Testimonial {
                name: "Dr. Michael Torres",
                role: "CTO",
                company: "EdTech Innovations",
                content: "Working with Alex was exceptional. His technical expertise and product vision helped us build a scalable platform that exceeded our expectations.",
            },
        ],
        contact: ContactInfo {
            email: crate::contact::CONTACT_EMAIL,
            linkedin: Some("https://linkedin.com/in/alexchen-dev"),
            github: Some("https://github.com/alexchen"),
            twitter: Some("https://twitter.com/alexchen_dev"),
            website: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_skip_missing_entries() {
        let contact = ContactInfo {
            email: "a@b.c",
            linkedin: Some("https://linkedin.com/in/x"),
            github: None,
            twitter: None,
            website: Some("https://example.com"),
        };
        let links = contact.links();
        assert_eq!(
            links,
            vec![
                ("LinkedIn", "https://linkedin.com/in/x"),
                ("Website", "https://example.com"),
            ]
        );
    }

    #[test]
    fn resume_has_content_for_every_section() {
        let resume = &*RESUME;
        assert!(!resume.skills.is_empty());
        assert!(!resume.experience.is_empty());
        assert!(!resume.projects.is_empty());
        assert!(!resume.education.is_empty());
        assert!(!resume.timeline.is_empty());
        assert_eq!(resume.contact.email, crate::contact::CONTACT_EMAIL);
    }
}
