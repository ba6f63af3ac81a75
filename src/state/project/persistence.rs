use std::fs;
use std::io;
use std::path::Path;

use super::Project;

#[allow(dead_code)]
impl Project {
    /// Save the project as pretty JSON to `path`, creating parent folders.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Load a project previously written by [`Project::save_to`].
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MediaItem;

    #[test]
    fn test_save_and_load_round_trip() {
        let mut project = Project::new("Round Trip");
        project.media_items.push(MediaItem::image("a.png"));

        let dir = std::env::temp_dir().join(format!("clipreel-test-{}", project.id));
        let path = dir.join("project.json");
        project.save_to(&path).unwrap();

        let loaded = Project::load(&path).unwrap();
        assert_eq!(project, loaded);

        let _ = fs::remove_dir_all(&dir);
    }
}
