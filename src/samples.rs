//! Canned markdown content offered by the form.

use std::fmt;

/// Resume sample, also the initial content of a fresh form.
pub const RESUME: &str = "# Darwin Labiste
Software Engineer

---

## About Me
Enthusiastic and detail-oriented aspiring Software Engineer with a strong foundation in programming and problem-solving. Committed to continuous improvement and looking to leverage skills in a dynamic team environment. Seeking to apply knowledge of software development in real-world projects while growing and learning in the field.

---

## Key Competencies
- Proficient in programming languages such as Python and JavaScript.
- Strong understanding of web development frameworks.
- Familiar with database management and basic SQL.
- Effective collaboration and communication skills.
- Quick learner and adaptable to new technologies.

---

## Professional Experience
### Tech Innovations Inc.
Junior Software Developer  
January 2023 - Present  
- Developed and maintained web applications using React and Node.js, enhancing user experience.
- Collaborated with senior developers to debug and improve software functionality.
- Assisted in the migration of legacy applications to modern frameworks, reducing load times by 30%.
- Participated in code reviews to ensure code quality and adherence to best practices.

### Code Academy
Intern Software Developer  
June 2022 - December 2022  
- Contributed to the development of a mobile application, improving user engagement by 15%.
- Assisted in the creation of RESTful APIs, ensuring seamless interaction between client and server.
- Gained experience in version control systems, specifically Git, for project management.

---

## Tech Stacks / Core Skills
- JavaScript, Python, React, Node.js, SQL, Git

---

## Education
Bachelor of Science in Computer Science  
University of Technology  
Graduated: May 2022  

---";

/// Job description sample.
pub const JOB_DESCRIPTION: &str = "### Job Title: Junior Software Engineer

**Company:** Innovative Tech Solutions  
**Location:** Remote  
**Job Type:** Full-Time  

#### Job Overview:
We are seeking a motivated Junior Software Engineer to join our talented engineering team. The ideal candidate should have a solid foundation in programming, a passion for technology, and a desire to grow within a collaborative environment. You will work alongside experienced developers to build, test, and maintain web and mobile applications.

#### Responsibilities:
- Develop high-quality software solutions following best practices in coding and design.
- Collaborate with cross-functional teams to gather requirements and transform them into technical specifications.
- Participate in code reviews and maintain code quality through automated testing.
- Troubleshoot and debug applications to optimize performance.
- Keep abreast with emerging technologies and industry trends to promote innovation within the team.

#### Qualifications:
- Bachelor's degree in Computer Science or a related field (or equivalent experience).
- Proficiency in at least one programming language (Java, Python, or similar).
- Familiarity with web development technologies (HTML, CSS, JavaScript).
- Basic understanding of databases and API interactions.
- Strong analytical and problem-solving skills.
- Excellent communication and teamwork abilities.

#### Benefits:
- Competitive salary.
- Comprehensive health benefits.
- Opportunities for professional development and career growth.
- Flexible working environment.

Join our team and start your journey to becoming a top-tier software engineer!";

/// Shown in the preview whenever there is nothing to render, and as the
/// textarea placeholder.
pub const PLACEHOLDER: &str = "# Paste any markdown

- Resume, job description, or any custom content
- Headings, lists, bold/italic, and tables are supported";

/// Quick-fill samples available from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Resume,
    JobDescription,
}

impl Sample {
    /// All samples in button order.
    pub const ALL: [Sample; 2] = [Sample::Resume, Sample::JobDescription];

    /// Markdown text of the sample.
    pub fn text(self) -> &'static str {
        match self {
            Sample::Resume => RESUME,
            Sample::JobDescription => JOB_DESCRIPTION,
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Sample::Resume => "Load resume sample",
            Sample::JobDescription => "Load job description sample",
        }
    }

    /// Identifier used in form action names (`load-<slug>`).
    pub fn slug(self) -> &'static str {
        match self {
            Sample::Resume => "resume",
            Sample::JobDescription => "job-description",
        }
    }

    /// Looks up a sample by its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sample| sample.slug() == slug)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
