//! `install-id path` command.

use crate::context::InstallationContext;

/// Renders the location of the installation record.
#[must_use]
pub fn render(ctx: &InstallationContext) -> String {
    ctx.service().location()
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::context::InstallationContext;

    #[test]
    fn points_into_storage_dir_without_creating_it() {
        let dir = std::env::temp_dir().join("install_id_path_cmd");
        let _ = std::fs::remove_dir_all(&dir);
        let ctx = InstallationContext::live(&Config::new(&dir));

        let rendered = super::render(&ctx);

        assert_eq!(rendered, dir.join("installation_id").display().to_string());
        assert!(!dir.exists());
    }
}
