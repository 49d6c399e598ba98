use crate::domain::Project;

pub struct CsvExporter;

impl CsvExporter {
    /// Writes the project list to a CSV file, one row per project with a
    /// header row. Collection fields are flattened with separators.
    pub fn export_projects(projects: &[Project], filename: &str) -> Result<String, String> {
        let mut writer = csv::Writer::from_path(filename).map_err(|e| e.to_string())?;

        writer
            .write_record(["Title", "Category", "Meta", "Description", "Results", "Stack"])
            .map_err(|e| e.to_string())?;

        for project in projects {
            let results = project.results.join("; ");
            let stack = project.stack.join(", ");
            writer
                .write_record([
                    project.title.as_str(),
                    project.category.label(),
                    project.meta.as_str(),
                    project.description.as_str(),
                    results.as_str(),
                    stack.as_str(),
                ])
                .map_err(|e| e.to_string())?;
        }

        writer.flush().map_err(|e| e.to_string())?;
        Ok(filename.to_string())
    }
}
