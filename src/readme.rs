#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Project,
    Profile,
}

impl Template {
    pub fn sections(&self) -> Vec<Section> {
        match self {
            Template::Project => vec![Section::new("About", ""), Section::new("Run", "")],
            Template::Profile => vec![
                Section::new("Introduction", ""),
                Section::new("Skills", "- \n- \n- \n"),
            ],
        }
    }

    pub fn title_prompt(&self) -> &'static str {
        match self {
            Template::Project => "Project title",
            Template::Profile => "Profile name",
        }
    }
}

pub fn assemble(title: &str, sections: &[Section]) -> String {
    let mut readme = format!("# {}\n\n", title);

    let body: Vec<String> = sections
        .iter()
        .map(|section| format!("## {}\n\n{}\n", section.title, section.content))
        .collect();

    readme.push_str(&body.join("\n"));
    readme
}
