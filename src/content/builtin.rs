// Built-in portfolio tables, used when no content file overrides them.

use super::{Demo, DemoKind, ProjectRecord};

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    tagline: &str,
    description: &str,
    technologies: &[&str],
    live_url: Option<&str>,
    github_url: Option<&str>,
    demo: Demo,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        technologies: lines(technologies),
        live_url: live_url.map(str::to_string),
        github_url: github_url.map(str::to_string),
        demo,
    }
}

fn demo(kind: DemoKind, source: &str) -> Demo {
    Demo {
        kind,
        source: source.to_string(),
    }
}

pub(super) fn projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "career-coach",
            "Career Coach",
            "Your AI-powered career advisor.",
            "An application that provides resume feedback, generates cover letters, and conducts mock interviews using AI.",
            &["React", "Electron", "Gemma 3", "Unsloth Finetuning", "Tailwind CSS"],
            Some("#"),
            Some("https://github.com/DIIZZYFPS/career-coach"),
            demo(
                DemoKind::Image,
                "https://placehold.co/600x400/000000/FFF?text=Career+Coach+Demo",
            ),
        ),
        project(
            "project-icarus",
            "Project Icarus",
            "Collaborative task management.",
            "A real-time project management tool with features like kanban boards, task assignments, and progress tracking.",
            &["React", "Electron", "LLM", "Python", "FastAPI"],
            Some("#"),
            Some("https://github.com/DIIZZYFPS/project-icarus"),
            demo(
                DemoKind::Image,
                "https://placehold.co/600x400/000000/FFF?text=Project+Icarus+Demo",
            ),
        ),
        project(
            "saive",
            "sAIve",
            "AI-Powered Financial Guardian",
            "A web app that uses AI to analyze spending habits and provide financial advice.",
            &["React", "TailwindCSS", "Python", "Electron"],
            None,
            Some("https://github.com/DIIZZYFPS/sAIve"),
            demo(DemoKind::Iframe, "https://github.com/DIIZZYFPS/sAIve"),
        ),
        project(
            "deyapify",
            "Deyapify",
            "Your AI-Powered Personal Assistant",
            "A personal assistant app that helps manage daily tasks, reminders, and schedules using AI.",
            &["React", "Python", "Gemma 3", "FastAPI"],
            Some("#"),
            Some("https://github.com/DIIZZYFPS/deyapify"),
            demo(
                DemoKind::Image,
                "https://placehold.co/600x400/000000/FFF?text=Deyapify+Demo",
            ),
        ),
        project(
            "portfolio",
            "Portfolio",
            "My personal portfolio built with React.",
            "A portfolio website showcasing my projects, skills, and experience.",
            &["React", "TypeScript", "Tailwind CSS"],
            Some("#"),
            Some("https://github.com/DIIZZYFPS/portfolio"),
            demo(DemoKind::Iframe, "https://github.com/DIIZZYFPS/portfolio"),
        ),
    ]
}

pub(super) fn help() -> Vec<String> {
    lines(&[
        "Available commands:",
        "  help        - Show this help message",
        "  projects    - List all projects",
        "  skills      - Display technical skills",
        "  contact     - Show contact information",
        "  about       - About me",
        "  resume      - Print my resume",
        "  clear       - Clear terminal",
        "  whoami      - Display current user info",
        "  ls          - List portfolio contents",
        "  cd [dir]    - Change directory to [dir]",
        "  open [id]   - Open a project to view details",
        "  reboot      - Restart the terminal",
        "  exit        - Close the terminal",
    ])
}

pub(super) fn skills() -> Vec<String> {
    lines(&[
        "Languages: Python, JavaScript, Java, HTML, CSS, SQL, TypeScript",
        "Frameworks: PyTorch, React, Bootstrap, Tailwind, FastAPI, Electron",
        "Tools: PEFT, QLORA, Agile, Github, Machine Learning, AWS,",
        "       HuggingFace, CanvasLMS",
    ])
}

pub(super) fn contact() -> Vec<String> {
    lines(&[
        "Contact Information:",
        "",
        "Email: damarrion.dev@example.com",
        "GitHub: github.com/DIIZZYFPS",
        "LinkedIn: linkedin.com/in/diizzy",
    ])
}

pub(super) fn about() -> Vec<String> {
    lines(&[
        "About Me:",
        "",
        "Full-stack developer passionate about creating",
        "innovative web applications. I enjoy working with",
        "modern technologies and solving complex problems.",
        "",
        "Currently focusing on React, TypeScript, and",
        "AI development.",
    ])
}

pub(super) fn welcome() -> Vec<String> {
    lines(&[
        "Welcome to the DIIZZY Interactive Terminal.",
        "Version 4.0.2-OMEGA | Connected via SSH",
        "Type help to view available commands.",
        "",
    ])
}

pub(super) fn resume() -> Vec<String> {
    lines(&[
        "┌───────────────────────────────────────────────────────────────────┐",
        "│ Damarrion Morgan-Harper                                           │",
        "│ Los Angeles, CA | dgodsonmo@gmail.com                             │",
        "│ linkedin.com/in/diizzy/ | github.com/diizzyfps                    │",
        "└───────────────────────────────────────────────────────────────────┘",
        "",
        "┌───────────────────────────────────────────────────────────────────┐",
        "│ EDUCATION                                                         │",
        "├───────────────────────────────────────────────────────────────────┤",
        "│ California State University - Los Angeles                         │",
        "│   Bachelor of Science: Computer Science                           │",
        "│   Expected: May 2027                                              │",
        "└───────────────────────────────────────────────────────────────────┘",
        "",
        "┌───────────────────────────────────────────────────────────────────┐",
        "│ SKILLS                                                            │",
        "├───────────────────────────────────────────────────────────────────┤",
        "│ Languages: Python, JavaScript, Java, HTML, CSS, SQL, TypeScript   │",
        "│ Frameworks: PyTorch, React, Bootstrap, Tailwind, FastAPI, Electron│",
        "│ Tools: PEFT, QLORA, Agile, Github, Machine Learning, AWS,         │",
        "│        HuggingFace, CanvasLMS                                     │",
        "└───────────────────────────────────────────────────────────────────┘",
        "",
        "┌───────────────────────────────────────────────────────────────────┐",
        "│ PROJECTS                                                          │",
        "├───────────────────────────────────────────────────────────────────┤",
        "│ Career Coach - github.com/DIIZZYFPS/Career-Coach                  │",
        "│   • Fine-tuned a Gemma 3 4B model using PEFT and QLORA methods.   │",
        "│   • Engineered a Python backend with FastAPI to serve the model.  │",
        "│   • Built a responsive UI in React bundled with Electron.         │",
        "│                                                                   │",
        "│ Deyapify - github.com/DIIZZYFPS/Deyapify                          │",
        "│   • Architected an AI audio-to-summary platform using Whisper V3  │",
        "│   • Achieved a 98% performance improvement in model inference.    │",
        "│   • Developed a full-stack app with a FastAPI backend and React.  │",
        "│                                                                   │",
        "│ sAIve - github.com/DIIZZYFPS/sAIve                                │",
        "│   • Developed a full-stack desktop budgeting application.         │",
        "│   • Implemented dynamic data visualizations (Sankey, line, radar) │",
        "└───────────────────────────────────────────────────────────────────┘",
        "",
        "┌───────────────────────────────────────────────────────────────────┐",
        "│ EXPERIENCE                                                        │",
        "├───────────────────────────────────────────────────────────────────┤",
        "│ IT/Cybersecurity & Software Engineering Rising Intern, La Tech    │",
        "│   Aug 2025-Present                                                │",
        "│                                                                   │",
        "│ Academic Technology Assistant, Center for Effective Teaching      │",
        "│   Jan 2025-Present                                                │",
        "│   • Resolve faculty tech tickets via ServiceNow.                  │",
        "│   • Contributed to the development of a custom CRM system (FDMS). │",
        "│                                                                   │",
        "│ Fulfillment Expert, Target                                        │",
        "│   Nov 2021-Oct 2024                                               │",
        "│   • Played a key role in the store overhaul following a major     │",
        "│     roof collapse, resulting in the store reopening.              │",
        "└───────────────────────────────────────────────────────────────────┘",
    ])
}
