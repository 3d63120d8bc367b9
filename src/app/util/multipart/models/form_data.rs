use std::collections::HashMap;

use super::file_properties::FileProperties;

/// A multipart body split into its text fields and its file fields.
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: Vec<FileProperties>,
}

impl FormData {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self
            .files
            .iter()
            .position(|file| file.field_name == field_name)?;

        Some(self.files.remove(index))
    }
}
