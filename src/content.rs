//! Static Site Content
//!
//! The portfolio copy, fixed at build time. No loading, no I/O;
//! everything the page shows comes from these constructors.

use crate::models::{Accent, Channel, ContactLink, Profile, Project, TutoringOffer};

pub fn profile() -> Profile {
    Profile {
        name: "Winston Zhang".to_string(),
        // Trailing double space forces a markdown hard break
        tagline: "I build things that wouldn't exist  \n**unless I made them**".to_string(),
        portrait: "https://placehold.co/300x300/1e293b/a5f3fc?text=Winston".to_string(),
        email: "winston@example.com".to_string(),
        github_url: "https://github.com/winston6800".to_string(),
        linkedin_url: "https://linkedin.com/in/winston".to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Tabby".to_string(),
            summary: "A productivity tool that helps students stay focused. Led a 6-person \
                      cross-functional team from concept to delivery in 10 weeks, conducting 20+ \
                      live interviews to validate the product direction and define the core \
                      feature set. Delivered the fastest complete demo out of 16 teams with a \
                      functional MVP."
                .to_string(),
            image: "https://placehold.co/1200x600/1e293b/a5f3fc?text=Tabby".to_string(),
            technologies: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Zustand".to_string(),
                "CI/CD".to_string(),
                "Figma".to_string(),
            ],
            live_url: None,
            repo_url: "https://github.com/winston6800/tabby".to_string(),
            accent: Accent::Ocean,
        },
        Project {
            title: "Loopspeed".to_string(),
            summary: "A full-stack application designed for rapid go-to-market testing. Deployed \
                      with Next.js and Vercel Edge Functions, it features a persistent user \
                      metrics tracking system using SQLite and Prisma ORM."
                .to_string(),
            image: "https://placehold.co/1200x600/1e293b/a5f3fc?text=Loopspeed".to_string(),
            technologies: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "Vercel Edge Functions".to_string(),
                "SQLite".to_string(),
                "Prisma".to_string(),
            ],
            live_url: Some("https://loopspeed.vercel.app/".to_string()),
            repo_url: "https://github.com/winston6800/loopspeed".to_string(),
            accent: Accent::Meadow,
        },
        Project {
            title: "Calor.ai".to_string(),
            summary: "A serverless AI-powered calorie tracker built with a containerized Node.js \
                      backend on AWS. It uses a fine-tuned GPT-4 API for 95%+ accurate calorie \
                      estimation and was launched with a go-to-market strategy that generated \
                      over 20k impressions on Reddit."
                .to_string(),
            image: "https://placehold.co/1200x600/1e293b/a5f3fc?text=Calor.ai".to_string(),
            technologies: vec![
                "Node.js".to_string(),
                "React".to_string(),
                "AWS Lambda".to_string(),
                "Docker".to_string(),
                "GPT-4 API".to_string(),
                "Stripe".to_string(),
            ],
            live_url: None,
            repo_url: "https://github.com/winston6800/caloriecounter".to_string(),
            accent: Accent::Ember,
        },
    ]
}

pub fn mission_paragraphs() -> Vec<String> {
    vec![
        "I don't just solve problems; I solve the right problems. My goal is to find \
         opportunities to build systems that scale, create value, and fundamentally improve how \
         we live and work."
            .to_string(),
        "My philosophy is simple: **vision without execution is hallucination.** I am committed \
         to a process of rapid iteration, user-centric design, and relentless implementation to \
         bring ambitious ideas into reality."
            .to_string(),
    ]
}

pub fn tutoring() -> TutoringOffer {
    TutoringOffer {
        heading: "Learn to Ship".to_string(),
        pitch: "I tutor students who want to go from coursework to **working products**. We pick \
                a real project, scope it, and build it together, covering the habits that make \
                code survive contact with users."
            .to_string(),
        topics: vec![
            "Intro CS".to_string(),
            "Web Development".to_string(),
            "TypeScript".to_string(),
            "System Design Basics".to_string(),
            "Interview Prep".to_string(),
        ],
        inquiry_subject: "Tutoring inquiry".to_string(),
    }
}

pub fn contact_links() -> Vec<ContactLink> {
    let owner = profile();
    vec![
        ContactLink {
            channel: Channel::Email,
            label: owner.email.clone(),
            url: format!("mailto:{}", owner.email),
        },
        ContactLink {
            channel: Channel::Linkedin,
            label: "linkedin.com/in/winston".to_string(),
            url: owner.linkedin_url,
        },
        ContactLink {
            channel: Channel::Github,
            label: "github.com/winston6800".to_string(),
            url: owner.github_url,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_present_and_linked() {
        let projects = projects();
        assert!(!projects.is_empty());
        for project in &projects {
            assert!(project.repo_url.starts_with("https://"));
            assert!(!project.technologies.is_empty());
        }
    }

    #[test]
    fn test_contact_links_cover_all_channels() {
        let links = contact_links();
        assert!(links.iter().any(|l| l.channel == Channel::Email));
        assert!(links.iter().any(|l| l.channel == Channel::Github));
        assert!(links.iter().any(|l| l.channel == Channel::Linkedin));
    }

    #[test]
    fn test_email_link_is_mailto() {
        let links = contact_links();
        let email = links.iter().find(|l| l.channel == Channel::Email).unwrap();
        assert!(email.url.starts_with("mailto:"));
    }
}
