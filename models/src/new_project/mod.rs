pub mod builder;

/// Validated arguments for `POST projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub(crate) name: String,
    pub(crate) notes: String,
    pub(crate) workspace: u64,
    pub(crate) archived: bool,
}

impl NewProject {
    pub fn builder() -> builder::NewProjectBuilder {
        builder::NewProjectBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            (String::from("name"), self.name.clone()),
            (String::from("notes"), self.notes.clone()),
            (String::from("workspace"), self.workspace.to_string()),
        ];

        if self.archived {
            fields.push((String::from("archived"), String::from("true")));
        }

        fields
    }
}
