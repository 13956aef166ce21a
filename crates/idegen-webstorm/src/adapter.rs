//! The WebStorm adapter.

use crate::context::WebStormContext;
use crate::install::InstallLayout;
use idegen_core::util::fs::{copy_tree_with_conflicts, ensure_dir, file_exists, is_directory};
use idegen_core::util::process::spawn_detached;
use idegen_core::HostContext;
use idegen_locate::VersionedPathResolver;
use idegen_template::{render_dir, RenderOptions, RenderReport, TemplateEngine};
use idegen_types::config::WebStormSettings;
use idegen_types::{
    ConflictAction, IdeAdapter, IdeKind, IdegenError, MalformedVersionPolicy, Platform, PreferenceSet,
    Result,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Settings directory name used when none is configured.
pub const DEFAULT_SETTINGS_NAME: &str = "WebStorm9";

const PROJECT_DIR_URL: &str = "file://$PROJECT_DIR$";

/// JetBrains WebStorm.
pub struct WebStorm {
    host: HostContext,
    settings: WebStormSettings,
    layout: InstallLayout,
    resolver: VersionedPathResolver,
    engine: TemplateEngine,
    template_dir: PathBuf,
}

impl WebStorm {
    /// Create the adapter for `host` with the user's settings.
    ///
    /// # Errors
    ///
    /// Returns `Config` when the settings contain an invalid pattern.
    pub fn new(host: HostContext, settings: WebStormSettings, policy: MalformedVersionPolicy) -> Result<Self> {
        let layout = InstallLayout::from_settings(&host, &settings)?;
        let template_dir = settings
            .template_dir
            .as_ref()
            .map(|dir| host.expand(dir))
            .unwrap_or_else(crate::bundled_template_dir);

        Ok(Self {
            host,
            settings,
            layout,
            resolver: VersionedPathResolver::with_policy(policy),
            engine: TemplateEngine::new(),
            template_dir,
        })
    }

    /// Install locations searched by [`IdeAdapter::locate_executable`].
    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Root of the templates in use.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Generate `.idea` under `destination` and report every file touched.
    pub fn create_project_with(
        &self,
        destination: &Path,
        context: &WebStormContext,
        options: RenderOptions,
    ) -> Result<RenderReport> {
        let source = self.template_dir.join("project");
        if !is_directory(&source) {
            return Err(IdegenError::Ide(format!("Project templates not found at {:?}", source)));
        }

        let idea = destination.join(".idea");
        info!("Generating WebStorm project '{}' in {:?}", context.project_name, idea);
        let report = render_dir(&self.engine, &source, &idea, context, options)?;

        if !context.resource_roots.is_empty() {
            stub_plain_text_files(&context.plain_text, destination)?;
        }

        Ok(report)
    }

    fn configured_executable(&self) -> Option<PathBuf> {
        let configured = self.host.expand(self.settings.executable.as_ref()?);
        if file_exists(&configured) {
            Some(configured)
        } else {
            warn!("Configured WebStorm executable {:?} does not exist", configured);
            None
        }
    }

    fn installed_executable(&self) -> Option<PathBuf> {
        self.resolver.resolve_executable_across_roots(
            &self.layout.roots,
            &self.layout.version_pattern,
            &self.layout.bin_segments,
            &self.layout.executable_name,
        )
    }

    fn launcher_on_path(&self) -> Option<PathBuf> {
        self.layout.launchers.iter().find_map(|launcher| which::which(launcher).ok())
    }
}

impl IdeAdapter for WebStorm {
    fn kind(&self) -> IdeKind {
        IdeKind::WebStorm
    }

    fn locate_executable(&self) -> Option<PathBuf> {
        let found = self
            .configured_executable()
            .or_else(|| self.installed_executable())
            .or_else(|| self.launcher_on_path());

        match &found {
            Some(path) => debug!("WebStorm executable: {:?}", path),
            None => debug!("WebStorm is not installed"),
        }
        found
    }

    fn create_project(&self, destination: &Path, context: &Value) -> Result<PathBuf> {
        let context = WebStormContext::create(context)?;
        self.create_project_with(destination, &context, RenderOptions::default())?;
        Ok(destination.join(".idea"))
    }

    fn user_preferences(&self) -> PathBuf {
        let name = self.settings.settings_name.as_deref().unwrap_or(DEFAULT_SETTINGS_NAME);

        match self.host.platform {
            Platform::MacOs => self.host.home.join("Library").join("Preferences").join(name),
            Platform::Windows | Platform::Linux => self.host.home.join(format!(".{}", name)).join("config"),
        }
    }

    fn copy_preferences(
        &self,
        set: PreferenceSet,
        on_conflict: &mut dyn FnMut(&Path) -> ConflictAction,
    ) -> Result<usize> {
        let preferences = self.user_preferences();
        let mut groups = Vec::new();
        if set.tools {
            groups.push("tools");
        }
        if set.file_templates {
            groups.push("fileTemplates");
        }

        let mut written = 0;
        for group in groups {
            let source = self.template_dir.join("idea").join(group);
            if !is_directory(&source) {
                return Err(IdegenError::Ide(format!("Preference templates not found at {:?}", source)));
            }

            let destination = preferences.join(group);
            let report = copy_tree_with_conflicts(&source, &destination, on_conflict)?;
            info!(
                "Installed {} into {:?}: {} written, {} kept, {} unchanged",
                group,
                destination,
                report.written.len(),
                report.skipped.len(),
                report.unchanged.len()
            );
            written += report.written.len();
        }

        Ok(written)
    }

    fn open(&self, location: &Path) -> Result<()> {
        let location = self.host.expand(location);
        if !location.exists() {
            return Err(IdegenError::Validation(format!("{:?} is not a valid path", location)));
        }

        let executable = self.locate_executable().ok_or_else(|| {
            IdegenError::Ide("WebStorm executable not found; set webstorm.executable in the idegen config".to_string())
        })?;

        spawn_detached(&executable, [&location])?;
        info!("Opened {:?}; WebStorm may take a while to finish indexing", location);
        Ok(())
    }
}

/// Create empty placeholders for plain-text files that don't exist yet.
///
/// WebStorm drops plain-text markings for missing files when it first
/// opens a project, so build outputs are stubbed with a single space.
/// `file://$PROJECT_DIR$` URLs are resolved against `project_dir`.
/// Returns the files created.
pub fn stub_plain_text_files(urls: &[String], project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut stubbed = Vec::new();

    for url in urls {
        let relative = url.strip_prefix(PROJECT_DIR_URL).unwrap_or(url);
        let relative = relative.trim_start_matches(['/', '\\']);
        if relative.is_empty() {
            continue;
        }

        let path = project_dir.join(relative);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        if !path.exists() {
            fs::write(&path, " ")?;
            debug!("Stubbed plain text file {:?}", path);
            stubbed.push(path);
        }
    }

    Ok(stubbed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use idegen_core::util::fs::slurp;
    use serde_json::json;
    use tempfile::TempDir;

    fn webstorm(host: HostContext, settings: WebStormSettings) -> WebStorm {
        WebStorm::new(host, settings, MalformedVersionPolicy::First).unwrap()
    }

    fn linux_host(home: &Path) -> HostContext {
        HostContext::new(Platform::Linux, home)
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "#!/bin/sh\n").unwrap();
    }

    #[test]
    fn test_user_preferences_per_platform() {
        let mac = webstorm(HostContext::new(Platform::MacOs, "/Users/dev"), WebStormSettings::default());
        assert_eq!(mac.user_preferences(), PathBuf::from("/Users/dev/Library/Preferences/WebStorm9"));

        let windows = webstorm(HostContext::new(Platform::Windows, "C:/Users/dev"), WebStormSettings::default());
        assert_eq!(windows.user_preferences(), PathBuf::from("C:/Users/dev/.WebStorm9/config"));

        let settings = WebStormSettings {
            settings_name: Some("WebStorm2020.3".to_string()),
            ..Default::default()
        };
        let linux = webstorm(HostContext::new(Platform::Linux, "/home/dev"), settings);
        assert_eq!(linux.user_preferences(), PathBuf::from("/home/dev/.WebStorm2020.3/config"));
    }

    #[test]
    fn test_create_project_from_bundled_templates() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = webstorm(linux_host(temp_dir.path()), WebStormSettings::default());
        let project = temp_dir.path().join("shop");

        let idea = adapter
            .create_project(&project, &json!({"projectName": "shop", "javascriptVersion": "ES6"}))
            .unwrap();

        assert_eq!(idea, project.join(".idea"));
        assert!(slurp(idea.join("modules.xml")).unwrap().contains("$PROJECT_DIR$/.idea/shop.iml"));
        assert!(slurp(idea.join("misc.xml")).unwrap().contains("ES6"));
        assert!(slurp(idea.join("shop.iml")).unwrap().contains("file://$MODULE_DIR$"));
        assert!(slurp(idea.join("jsLinters").join("jshint.xml")).unwrap().contains("./.jshintrc"));
    }

    #[test]
    fn test_create_project_stubs_plain_text_with_resource_roots() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = webstorm(linux_host(temp_dir.path()), WebStormSettings::default());
        let project = temp_dir.path().join("site");

        let context = WebStormContext::create(&json!({
            "projectName": "site",
            "resourceRoots": ["file://$PROJECT_DIR$/build"],
            "plainText": ["file://$PROJECT_DIR$/build/app.min.js"],
        }))
        .unwrap();
        let report = adapter.create_project_with(&project, &context, RenderOptions::default()).unwrap();

        assert!(!report.written.is_empty());
        assert_eq!(slurp(project.join("build").join("app.min.js")).unwrap(), " ");
    }

    #[test]
    fn test_stub_keeps_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("dist").join("bundle.js");
        touch(&existing);

        let stubbed = stub_plain_text_files(
            &[
                "file://$PROJECT_DIR$/dist/bundle.js".to_string(),
                "file://$PROJECT_DIR$/dist/vendor.js".to_string(),
            ],
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(stubbed, vec![temp_dir.path().join("dist").join("vendor.js")]);
        assert_eq!(slurp(&existing).unwrap(), "#!/bin/sh\n");
    }

    #[test]
    fn test_missing_templates_is_ide_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings = WebStormSettings {
            template_dir: Some(temp_dir.path().join("nowhere")),
            ..Default::default()
        };
        let adapter = webstorm(linux_host(temp_dir.path()), settings);

        assert!(matches!(
            adapter.create_project(temp_dir.path(), &Value::Null),
            Err(IdegenError::Ide(_))
        ));
        assert!(matches!(
            adapter.copy_preferences(PreferenceSet::all(), &mut |_: &Path| ConflictAction::Skip),
            Err(IdegenError::Ide(_))
        ));
    }

    #[test]
    fn test_copy_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = webstorm(linux_host(temp_dir.path()), WebStormSettings::default());

        let written = adapter
            .copy_preferences(PreferenceSet::all(), &mut |_: &Path| ConflictAction::Overwrite)
            .unwrap();
        assert!(written >= 2);

        let tools = adapter.user_preferences().join("tools");
        assert!(tools.join("External Tools.xml").is_file());

        // Second run: everything identical, nothing asked, nothing written
        let mut asked = 0;
        let written = adapter
            .copy_preferences(PreferenceSet::all(), &mut |_: &Path| {
                asked += 1;
                ConflictAction::Overwrite
            })
            .unwrap();
        assert_eq!((written, asked), (0, 0));
    }

    #[test]
    fn test_copy_preferences_conflicts_go_to_resolver() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = webstorm(linux_host(temp_dir.path()), WebStormSettings::default());
        let user_file = adapter.user_preferences().join("tools").join("External Tools.xml");
        fs::create_dir_all(user_file.parent().unwrap()).unwrap();
        fs::write(&user_file, "<toolSet name=\"mine\"/>").unwrap();

        let set = PreferenceSet {
            tools: true,
            file_templates: false,
        };
        let written = adapter.copy_preferences(set, &mut |_: &Path| ConflictAction::Skip).unwrap();

        assert_eq!(written, 0);
        assert_eq!(slurp(&user_file).unwrap(), "<toolSet name=\"mine\"/>");
        assert!(!adapter.user_preferences().join("fileTemplates").exists());
    }

    #[test]
    fn test_locate_prefers_configured_executable() {
        let temp_dir = TempDir::new().unwrap();
        let configured = temp_dir.path().join("custom").join("webstorm.sh");
        touch(&configured);
        touch(&temp_dir.path().join("opt").join("WebStorm-2021.1").join("bin").join("webstorm.sh"));

        let settings = WebStormSettings {
            executable: Some(configured.clone()),
            install_roots: Some(vec![temp_dir.path().join("opt")]),
            ..Default::default()
        };
        assert_eq!(webstorm(linux_host(temp_dir.path()), settings).locate_executable(), Some(configured));
    }

    #[test]
    fn test_locate_searches_versioned_installs() {
        let temp_dir = TempDir::new().unwrap();
        let opt = temp_dir.path().join("opt");
        touch(&opt.join("WebStorm-2020.3").join("bin").join("webstorm.sh"));
        touch(&opt.join("WebStorm-2021.1").join("bin").join("webstorm.sh"));

        let settings = WebStormSettings {
            executable: Some(temp_dir.path().join("missing")),
            install_roots: Some(vec![temp_dir.path().join("absent"), opt.clone()]),
            ..Default::default()
        };
        let adapter = webstorm(linux_host(temp_dir.path()), settings);

        assert_eq!(
            adapter.installed_executable(),
            Some(opt.join("WebStorm-2021.1").join("bin").join("webstorm.sh"))
        );
    }

    #[test]
    fn test_open_rejects_missing_location() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = webstorm(linux_host(temp_dir.path()), WebStormSettings::default());

        assert!(matches!(
            adapter.open(&temp_dir.path().join("no-such-project")),
            Err(IdegenError::Validation(_))
        ));
    }
}
