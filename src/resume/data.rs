use super::ResumeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything printed on the resume. The renderer only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub period: String,
    pub status: String,
    pub highlights: Vec<String>,
}

/// The three skill groups, each an ordered list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub devops: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub tools: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency as a percentage, 0 through 100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

impl Skills {
    /// The groups in display order, with their headings
    pub fn groups(&self) -> [(&'static str, &[Skill]); 3] {
        [
            ("DevOps & Cloud", self.devops.as_slice()),
            ("Backend Development", self.backend.as_slice()),
            ("Tools & Technologies", self.tools.as_slice()),
        ]
    }
}

impl ResumeData {
    /// Loads a record from a JSON file using the same (camelCase) field names as the site's
    /// data module, then validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<ResumeData, ResumeError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        ResumeData::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<ResumeData, ResumeError> {
        let data: ResumeData = serde_json::from_str(raw)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks the invariants serde can't: skill levels are percentages.
    pub fn validate(&self) -> Result<(), ResumeError> {
        for (_, skills) in self.skills.groups() {
            if let Some(skill) = skills.iter().find(|s| s.level > 100) {
                return Err(ResumeError::InvalidSkillLevel {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }

    /// Name of the saved file: the person's name with words joined by underscores,
    /// e.g. `Sachit_Kaistha_Resume.pdf`. Anything other than letters, digits, `-` and `_`
    /// becomes `_`, so the name never reaches outside the directory it is saved in.
    pub fn file_name(&self) -> String {
        let words: Vec<String> = self
            .personal_info
            .name
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .map(|c| match c {
                        c if c.is_alphanumeric() || c == '-' || c == '_' => c,
                        _ => '_',
                    })
                    .collect()
            })
            .collect();

        if words.is_empty() {
            "Resume.pdf".to_string()
        } else {
            format!("{}_Resume.pdf", words.join("_"))
        }
    }

    /// The resume published on the site
    pub fn builtin() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Sachit Kaistha".into(),
                title: "DevOps Engineer & Backend Developer".into(),
                email: "skaistha16@gmail.com".into(),
                phone: "+91 7876434370".into(),
                location: "Chandigarh, India".into(),
                linkedin: "linkedin.com/in/sachit-kaistha-306849190".into(),
                github: "github.com/sachitkaistha".into(),
            },
            summary: "Passionate DevOps Engineer with 2.7+ years of PHP development experience, \
                specializing in automation, CI/CD pipelines, and cloud infrastructure. Proven track \
                record of reducing deployment time by 80% through innovative automation solutions. \
                Expert in bridging development and operations with a strong foundation in backend \
                development and modern DevOps practices."
                .into(),
            experience: vec![
                Experience {
                    title: "DevOps Engineer".into(),
                    company: "Technical Arsenal".into(),
                    period: "Present".into(),
                    location: "Remote".into(),
                    responsibilities: strings(&[
                        "Implemented CI/CD pipelines using Jenkins and GitHub Actions, reducing deployment time by 80%",
                        "Managed containerized applications with Docker and Kubernetes for scalable infrastructure",
                        "Automated infrastructure deployment and configuration management using modern DevOps tools",
                        "Monitored system performance and implemented comprehensive alerting solutions",
                        "Collaborated with development teams on deployment strategies and best practices",
                    ]),
                    technologies: strings(&[
                        "Docker", "Jenkins", "GitHub Actions", "AWS", "Linux", "Bash", "Nginx", "Kubernetes",
                    ]),
                },
                Experience {
                    title: "PHP Web Developer".into(),
                    company: "Previous Role".into(),
                    period: "2.7 Years".into(),
                    location: "On-site".into(),
                    responsibilities: strings(&[
                        "Developed robust web applications using PHP and Laravel framework with high performance",
                        "Designed and optimized MySQL databases for enterprise-level applications",
                        "Built RESTful APIs and integrated third-party services for enhanced functionality",
                        "Collaborated with cross-functional teams to deliver quality software solutions",
                        "Implemented security best practices and code optimization techniques",
                    ]),
                    technologies: strings(&[
                        "PHP", "Laravel", "MySQL", "JavaScript", "HTML/CSS", "Git", "Postman",
                    ]),
                },
            ],
            education: vec![
                Education {
                    degree: "Master of Computer Applications (MCA)".into(),
                    period: "June 2023 - June 2025".into(),
                    status: "Awaiting Result".into(),
                    highlights: strings(&[
                        "Advanced Programming",
                        "System Design",
                        "Cloud Computing",
                        "DevOps Practices",
                    ]),
                },
                Education {
                    degree: "Bachelor of Computer Applications (BCA)".into(),
                    period: "June 2019 - June 2022".into(),
                    status: "Completed".into(),
                    highlights: strings(&[
                        "Programming Fundamentals",
                        "Database Management",
                        "Web Development",
                        "Software Engineering",
                    ]),
                },
            ],
            skills: Skills {
                devops: skills(&[
                    ("Docker", 90),
                    ("AWS", 85),
                    ("Jenkins", 80),
                    ("Kubernetes", 75),
                    ("Linux", 90),
                ]),
                backend: skills(&[
                    ("PHP", 95),
                    ("Laravel", 90),
                    ("MySQL", 85),
                    ("Python", 85),
                    ("API Development", 88),
                ]),
                tools: skills(&[
                    ("Git", 95),
                    ("GitHub Actions", 85),
                    ("Nginx", 80),
                    ("Bash", 85),
                    ("Postman", 90),
                ]),
            },
            projects: vec![
                Project {
                    title: "DevFlow AI - Multi-Tool Dashboard".into(),
                    description: "Ultimate multi-tool dashboard unifying AI, DevOps, and automation \
                        into one interactive platform"
                        .into(),
                    technologies: strings(&[
                        "Python", "Streamlit", "Scikit-learn", "Gemini API", "Docker", "Paramiko",
                    ]),
                    features: strings(&[
                        "Remote Docker management over SSH",
                        "AI-powered commute estimation",
                        "AI story co-writing with text-to-speech",
                        "Universal code generation",
                    ]),
                },
                Project {
                    title: "Remote Docker Manager".into(),
                    description: "Browser-based Docker container management tool with secure SSH \
                        connectivity"
                        .into(),
                    technologies: strings(&["Python", "Streamlit", "Docker", "SSH", "Subprocess"]),
                    features: strings(&[
                        "Secure SSH connectivity",
                        "Container lifecycle management",
                        "Image pulling and running",
                        "DockerHub integration",
                    ]),
                },
                Project {
                    title: "AI Communication Suite".into(),
                    description: "Comprehensive communication toolkit with AI-powered messaging \
                        capabilities"
                        .into(),
                    technologies: strings(&[
                        "Python", "Twilio API", "Gradio", "WhatsApp API", "Voice API",
                    ]),
                    features: strings(&[
                        "Multi-channel messaging",
                        "AI-powered voice calls",
                        "Global SMS delivery",
                        "WhatsApp integration",
                    ]),
                },
            ],
            certifications: vec![
                Certification {
                    title: "PHP Development".into(),
                    issuer: "CS Soft Solutions, Chandigarh".into(),
                    year: "2022".into(),
                },
                Certification {
                    title: "Linux World Informatics Internship".into(),
                    issuer: "Linux World Informatics".into(),
                    year: "2025".into(),
                },
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skills(items: &[(&str, u8)]) -> Vec<Skill> {
    items
        .iter()
        .map(|&(name, level)| Skill {
            name: name.to_string(),
            level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_record_is_valid() {
        let data = ResumeData::builtin();
        data.validate().expect("built-in levels are percentages");
        assert_eq!(data.experience.len(), 2);
        assert_eq!(data.education.len(), 2);
        assert_eq!(data.certifications.len(), 2);
    }

    #[test]
    fn file_name_derives_from_name() {
        assert_eq!(ResumeData::builtin().file_name(), "Sachit_Kaistha_Resume.pdf");
    }

    #[test]
    fn file_name_never_contains_path_syntax() {
        let mut data = ResumeData::builtin();

        data.personal_info.name = "Ada R/D Lovelace".into();
        assert_eq!(data.file_name(), "Ada_R_D_Lovelace_Resume.pdf");

        data.personal_info.name = "/tmp/elsewhere/escaped".into();
        assert_eq!(data.file_name(), "_tmp_elsewhere_escaped_Resume.pdf");

        data.personal_info.name = ".. C:\\Users".into();
        assert_eq!(data.file_name(), "___C__Users_Resume.pdf");

        data.personal_info.name = "  ".into();
        assert_eq!(data.file_name(), "Resume.pdf");
    }

    #[test]
    fn json_uses_camel_case_and_round_trips() {
        let data = ResumeData::builtin();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert_eq!(ResumeData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn rejects_levels_above_one_hundred() {
        let mut data = ResumeData::builtin();
        data.skills.tools[1].level = 120;
        let json = serde_json::to_string(&data).unwrap();

        match ResumeData::from_json(&json) {
            Err(ResumeError::InvalidSkillLevel { skill, level }) => {
                assert_eq!(skill, "GitHub Actions");
                assert_eq!(level, 120);
            }
            other => panic!("expected an invalid level error, got {other:?}"),
        }
    }

    #[test]
    fn skill_groups_keep_declaration_order() {
        let data = ResumeData::builtin();
        let groups = data.skills.groups();
        let titles: Vec<&str> = groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            titles,
            vec!["DevOps & Cloud", "Backend Development", "Tools & Technologies"]
        );
        assert_eq!(groups[0].1[0].name, "Docker");
    }
}
