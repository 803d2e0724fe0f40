// Fixed document skeletons. Single column, inline CSS, no external assets.
// Section order is part of the layout contract: header, education, skills,
// experience, projects.

pub const STYLESHEET: &str = "\
@page { size: auto; margin: 12mm 14mm; }
* { box-sizing: border-box; }
body { font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 10.5pt; line-height: 1.3; color: #111; margin: 0; }
.header { text-align: center; margin-bottom: 6pt; }
.header h1 { font-size: 20pt; margin: 0 0 2pt 0; letter-spacing: 0.5pt; }
.contact { margin: 0; font-size: 9.5pt; }
.contact a { color: #111; text-decoration: none; }
.sep { color: #555; }
.section h2 { font-size: 11pt; text-transform: uppercase; border-bottom: 0.75pt solid #111; margin: 8pt 0 3pt 0; padding-bottom: 1pt; }
.entry { margin-bottom: 4pt; page-break-inside: avoid; }
.entry-head, .entry-sub { overflow: hidden; }
.entry-sub { font-style: italic; }
.primary { font-weight: bold; }
.aside { float: right; margin-left: 8pt; text-align: right; }
.bullets { margin: 1pt 0 0 0; padding-left: 14pt; }
.bullets li { margin: 0; }
.skills { list-style: none; margin: 0; padding: 0; }
.letter p { margin: 0 0 9pt 0; }
";

pub const RESUME_SKELETON: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="generated" content="{{ generated_at }}">
<title>{{ name }} - Resume</title>
<style>
{{ stylesheet }}</style>
</head>
<body>
<header class="header">
<h1>{{ name }}</h1>
<p class="contact">{{ contact_line }}</p>
</header>
<section class="section" id="education">
<h2>Education</h2>
<div class="entry">
<div class="entry-head"><span class="aside">{{ education_location }}</span><span class="primary">{{ university }}</span></div>
<div class="entry-sub"><span class="aside">{{ education_dates }}</span><span class="secondary">{{ degree }}{{ gpa }}</span></div>
<ul class="bullets">{{ education_bullets }}</ul>
</div>
</section>
<section class="section" id="skills">
<h2>Technical Skills</h2>
<ul class="skills">{{ skills }}</ul>
</section>
<section class="section" id="experience">
<h2>Experience</h2>
{{ experience_entries }}</section>
<section class="section" id="projects">
<h2>Projects</h2>
{{ project_entries }}</section>
</body>
</html>
"#;

pub const JOB_ENTRY: &str = r#"<div class="entry job">
<div class="entry-head"><span class="aside">{{ dates }}</span><span class="primary">{{ title }}</span></div>
<div class="entry-sub"><span class="aside">{{ location }}</span><span class="secondary">{{ company }}</span></div>
<ul class="bullets">{{ bullets }}</ul>
</div>
"#;

pub const PROJECT_ENTRY: &str = r#"<div class="entry project">
<div class="entry-head"><span class="aside">{{ date }}</span><span class="primary">{{ name }}</span></div>
<div class="entry-sub"><span class="secondary">{{ context }}</span></div>
<ul class="bullets">{{ bullets }}</ul>
</div>
"#;

pub const COVER_LETTER_SKELETON: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="generated" content="{{ generated_at }}">
<title>{{ sender_name }} - Cover Letter</title>
<style>
{{ stylesheet }}</style>
</head>
<body class="letter">
<header class="header">
<h1>{{ sender_name }}</h1>
<p class="contact">{{ contact_line }}</p>
</header>
<p class="date">{{ letter_date }}</p>
<p class="recipient">{{ recipient }}</p>
<p class="salutation">Dear {{ salutation }},</p>
{{ body }}<p class="closing">{{ closing }}<br>{{ sender_name }}</p>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_SKELETONS: [&str; 3] = [RESUME_SKELETON, JOB_ENTRY, PROJECT_ENTRY];

    #[test]
    fn test_layout_avoids_flexbox() {
        // wkhtmltopdf's QtWebKit ignores unprefixed flex
        assert!(!STYLESHEET.contains("flex"));
        assert!(!STYLESHEET.contains("grid"));
        assert!(STYLESHEET.contains(".aside { float: right;"));
    }

    #[test]
    fn test_floated_aside_precedes_row_text() {
        for skeleton in ENTRY_SKELETONS {
            for row in skeleton.lines().filter(|l| l.contains(r#"class="aside""#)) {
                let aside = row.find(r#"class="aside""#).unwrap();
                let text = row
                    .find(r#"class="primary""#)
                    .or_else(|| row.find(r#"class="secondary""#))
                    .unwrap();
                assert!(aside < text, "aside must come first: {row}");
            }
        }
    }
}
